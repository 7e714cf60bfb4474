//! # Scrawl - a tiny LISP dialect for procedural 2D drawing
//!
//! Scrawl is a small interpreted s-expression language whose programs draw
//! onto an abstract 2D surface supplied by the host: a recursive-descent
//! parser producing a location-tagged AST, and a tree-walking evaluator
//! with lexically-scoped environments implementing arithmetic, comparison,
//! equality, conditionals, bounded iteration, variable binding/mutation,
//! and drawing primitives.
//!
//! ## Architecture
//!
//! ```text
//! Source Code → Parser → Program → Interpreter::run → ordered Results
//! ```
//!
//! - [`parse`] - Parses source text into a [`Program`], collecting every
//!   diagnostic it can find before giving up
//! - [`Expr`] - Location-tagged AST node; literals are self-quoting, so
//!   the evaluator consumes and produces the same type
//! - [`Interpreter`] - Evaluates top-level expressions in order against a
//!   shared root scope and a borrowed [`DrawingSurface`]
//! - [`SymbolTable`] - Scope-chain environment with shadowing
//! - [`LocatedError`] - Message plus optional source offset/length, enough
//!   to place a caret
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use scrawl::{parse, Interpreter};
//!
//! let program = parse(r#"
//!     (stroke (rgb 200 30 30))
//!     (noFill)
//!     (rect 10 10 (- width 20) (- height 20))
//! "#)?;
//!
//! let mut interpreter = Interpreter::new(&mut surface, 300.0, 300.0);
//! for result in interpreter.run(&program) {
//!     println!("{:?}", result);
//! }
//! ```
//!
//! ## Error handling
//!
//! Failure is always a value, never a panic: parsing yields
//! `Err(Vec<LocatedError>)` with every error found (best-effort recovery
//! between top-level expressions), and each top-level expression evaluates
//! to its own `Result`, so one bad expression does not stop the rest of
//! the program — root-scope mutations and drawing calls made before the
//! failure persist.

pub mod error;
pub mod parser;
pub mod runtime;
pub mod surface;

/// Version of the Scrawl interpreter
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{LocatedError, Result};
pub use parser::{parse, Cursor, Expr, Program, SExprParser};
pub use runtime::{Interpreter, SymbolTable, MAX_LOOP_ITERATIONS, NO_COLOR};
pub use surface::DrawingSurface;
