use serde::{Deserialize, Serialize};
use std::fmt;

/// A parsed Scrawl expression.
///
/// Scrawl has no separate runtime value type: literals are self-quoting, so
/// the evaluator both consumes and produces `Expr` nodes. Every variant
/// carries the character offset of its first source character (for a list,
/// its opening parenthesis); evaluator-synthesized values carry no offset.
/// Trees are immutable once constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    /// Numeric literal, e.g. `42` or `-3.5`
    Number {
        /// The numeric value
        value: f64,
        /// Offset of the first character in the source
        offset: Option<usize>,
    },
    /// String literal, e.g. `"red"`
    String {
        /// The string contents (no escape processing)
        value: String,
        /// Offset of the opening quote
        offset: Option<usize>,
    },
    /// Boolean value; never produced directly by the parser, only by
    /// evaluating the reserved symbols `true`/`false` or a builtin
    Boolean {
        /// The boolean value
        value: bool,
        /// Offset of the originating token, if any
        offset: Option<usize>,
    },
    /// Symbol, e.g. `width` or `+`
    Symbol {
        /// The symbol text
        name: String,
        /// Offset of the first character in the source
        offset: Option<usize>,
    },
    /// Parenthesized list, e.g. `(+ 1 2)`
    List {
        /// The list elements in source order
        elements: Vec<Expr>,
        /// Offset of the opening parenthesis
        offset: Option<usize>,
    },
}

impl Expr {
    /// Creates an offsetless number (evaluator results).
    pub fn number(value: f64) -> Self {
        Expr::Number {
            value,
            offset: None,
        }
    }

    /// Creates an offsetless string (evaluator results).
    pub fn string(value: impl Into<String>) -> Self {
        Expr::String {
            value: value.into(),
            offset: None,
        }
    }

    /// Creates an offsetless boolean (evaluator results).
    pub fn boolean(value: bool) -> Self {
        Expr::Boolean {
            value,
            offset: None,
        }
    }

    /// The source offset this expression was parsed at, if any.
    pub fn offset(&self) -> Option<usize> {
        match self {
            Expr::Number { offset, .. }
            | Expr::String { offset, .. }
            | Expr::Boolean { offset, .. }
            | Expr::Symbol { offset, .. }
            | Expr::List { offset, .. } => *offset,
        }
    }

    /// The variant name used in diagnostics ("number", "string", ...).
    pub fn type_name(&self) -> &'static str {
        match self {
            Expr::Number { .. } => "number",
            Expr::String { .. } => "string",
            Expr::Boolean { .. } => "boolean",
            Expr::Symbol { .. } => "symbol",
            Expr::List { .. } => "list",
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Number { value, .. } => {
                // Integral values print without a decimal point
                if value.fract() == 0.0 && value.is_finite() {
                    write!(f, "{}", *value as i64)
                } else {
                    write!(f, "{}", value)
                }
            }
            Expr::String { value, .. } => write!(f, "\"{}\"", value),
            Expr::Boolean { value, .. } => write!(f, "{}", value),
            Expr::Symbol { name, .. } => write!(f, "{}", name),
            Expr::List { elements, .. } => {
                write!(f, "(")?;
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{}", element)?;
                }
                write!(f, ")")
            }
        }
    }
}

/// A complete Scrawl program: top-level expressions in source order.
///
/// Each expression is evaluated independently by the interpreter; an error
/// in one does not prevent evaluation of the rest.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Program {
    /// Top-level expressions in source order
    pub exprs: Vec<Expr>,
}
