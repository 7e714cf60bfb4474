//! Parser for Scrawl S-expression syntax
//!
//! Source text goes in, a location-tagged [`Program`] comes out. Parsing is
//! character-level recursive descent driven by a [`Cursor`]; errors are
//! collected best-effort so one bad expression does not hide the rest.

pub mod ast;
pub mod cursor;
pub mod sexpr_parser;

pub use ast::{Expr, Program};
pub use cursor::Cursor;
pub use sexpr_parser::{parse, SExprParser};
