//! Runtime for Scrawl programs
//!
//! The [`Interpreter`] walks a parsed [`crate::parser::Program`] against a
//! [`SymbolTable`] scope chain and an externally supplied drawing surface.

pub mod drawing;
pub mod environment;
pub mod evaluator;

pub use drawing::NO_COLOR;
pub use environment::SymbolTable;
pub use evaluator::{Interpreter, MAX_LOOP_ITERATIONS};
