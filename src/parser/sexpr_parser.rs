use super::ast::{Expr, Program};
use super::cursor::Cursor;
use crate::error::{LocatedError, Result};

/// Recursive-descent parser for Scrawl S-expression syntax.
///
/// Works directly on characters with one character of lookahead; the symbol
/// production is the fallback, which is how operator names like `+` and
/// `>=` parse without a dedicated token stage.
pub struct SExprParser {
    cursor: Cursor,
}

/// Parses a whole source string into a [`Program`].
///
/// Errors are collected best-effort: after a failed expression the driver
/// guarantees at least one character of progress and keeps scanning, so
/// independent mistakes in later top-level expressions are all reported.
/// The result is all-or-nothing at whole-input granularity — any error
/// means `Err` with every diagnostic found.
pub fn parse(source: &str) -> std::result::Result<Program, Vec<LocatedError>> {
    SExprParser::new(source).parse()
}

impl SExprParser {
    /// Creates a parser over `source`.
    pub fn new(source: &str) -> Self {
        SExprParser {
            cursor: Cursor::new(source),
        }
    }

    /// Parses every top-level expression, collecting all errors found.
    pub fn parse(mut self) -> std::result::Result<Program, Vec<LocatedError>> {
        let mut exprs = Vec::new();
        let mut errors = Vec::new();

        loop {
            self.cursor.skip_whitespace();
            if self.cursor.is_at_end() {
                break;
            }

            let start = self.cursor.offset();
            match self.parse_expression() {
                Ok(expr) => exprs.push(expr),
                Err(err) => {
                    errors.push(err);
                    // Guarantee progress before retrying
                    if self.cursor.offset() == start {
                        self.cursor.advance();
                    }
                }
            }
        }

        if errors.is_empty() {
            Ok(Program { exprs })
        } else {
            tracing::debug!(count = errors.len(), "parse failed");
            Err(errors)
        }
    }

    fn parse_expression(&mut self) -> Result<Expr> {
        match self.cursor.peek() {
            Some('(') => self.parse_list(),
            Some('"') => self.parse_string(),
            Some(c) if c.is_ascii_digit() => self.parse_number(),
            Some('-') if matches!(self.cursor.peek_next(), Some(c) if c.is_ascii_digit()) => {
                self.parse_number()
            }
            Some(')') => Err(LocatedError::at(
                "Unexpected closing parenthesis",
                Some(self.cursor.offset()),
            )),
            Some(_) => self.parse_symbol(),
            None => Err(LocatedError::at(
                "Unexpected end of input",
                Some(self.cursor.offset()),
            )),
        }
    }

    fn parse_list(&mut self) -> Result<Expr> {
        let open = self.cursor.offset();
        self.cursor.advance(); // consume '('

        let mut elements = Vec::new();
        loop {
            self.cursor.skip_whitespace();
            match self.cursor.peek() {
                Some(')') => {
                    self.cursor.advance();
                    return Ok(Expr::List {
                        elements,
                        offset: Some(open),
                    });
                }
                Some(_) => elements.push(self.parse_expression()?),
                None => {
                    return Err(LocatedError::at(
                        "Unexpected end of input - missing closing parenthesis",
                        Some(open),
                    ));
                }
            }
        }
    }

    fn parse_string(&mut self) -> Result<Expr> {
        let open = self.cursor.offset();
        self.cursor.advance(); // consume opening '"'

        let mut value = String::new();
        loop {
            match self.cursor.advance() {
                Some('"') => {
                    return Ok(Expr::String {
                        value,
                        offset: Some(open),
                    });
                }
                // No escape sequences: every character is taken verbatim
                Some(c) => value.push(c),
                None => {
                    return Err(LocatedError::spanning(
                        "Unterminated string literal",
                        open,
                        self.cursor.offset() - open,
                    ));
                }
            }
        }
    }

    fn parse_number(&mut self) -> Result<Expr> {
        let start = self.cursor.offset();
        if self.cursor.peek() == Some('-') {
            self.cursor.advance();
        }
        while matches!(self.cursor.peek(), Some(c) if c.is_ascii_digit() || c == '.') {
            self.cursor.advance();
        }

        let token = self.cursor.slice(start, self.cursor.offset());
        match token.parse::<f64>() {
            Ok(value) => Ok(Expr::Number {
                value,
                offset: Some(start),
            }),
            Err(_) => Err(LocatedError::spanning(
                format!("Invalid number format '{}'", token),
                start,
                token.chars().count(),
            )),
        }
    }

    fn parse_symbol(&mut self) -> Result<Expr> {
        let start = self.cursor.offset();
        while matches!(
            self.cursor.peek(),
            Some(c) if !c.is_whitespace() && c != '(' && c != ')' && c != '"'
        ) {
            self.cursor.advance();
        }

        Ok(Expr::Symbol {
            name: self.cursor.slice(start, self.cursor.offset()),
            offset: Some(start),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_sexpr() {
        let program = parse("(+ 1 2)").unwrap();
        assert_eq!(program.exprs.len(), 1);

        let Expr::List { elements, offset } = &program.exprs[0] else {
            panic!("expected list");
        };
        assert_eq!(*offset, Some(0));
        assert_eq!(elements.len(), 3);
        assert!(matches!(&elements[0], Expr::Symbol { name, offset: Some(1) } if name == "+"));
        assert!(
            matches!(elements[1], Expr::Number { value, offset: Some(3) } if value == 1.0)
        );
        assert!(
            matches!(elements[2], Expr::Number { value, offset: Some(5) } if value == 2.0)
        );
    }

    #[test]
    fn test_nested_lists() {
        let program = parse("(if (> x 0) 1 -1)").unwrap();
        let Expr::List { elements, .. } = &program.exprs[0] else {
            panic!("expected list");
        };
        assert!(matches!(&elements[1], Expr::List { offset: Some(4), .. }));
    }

    #[test]
    fn test_operators_parse_as_symbols() {
        let program = parse(">= <= -").unwrap();
        assert_eq!(program.exprs.len(), 3);
        assert!(matches!(&program.exprs[0], Expr::Symbol { name, .. } if name == ">="));
        assert!(matches!(&program.exprs[2], Expr::Symbol { name, .. } if name == "-"));
    }

    #[test]
    fn test_negative_number() {
        let program = parse("-3.5").unwrap();
        assert!(
            matches!(program.exprs[0], Expr::Number { value, offset: Some(0) } if value == -3.5)
        );
    }

    #[test]
    fn test_string_no_escapes() {
        let program = parse(r#""a\n""#).unwrap();
        // Backslash is taken verbatim
        assert!(matches!(&program.exprs[0], Expr::String { value, .. } if value == "a\\n"));
    }

    #[test]
    fn test_invalid_number_format() {
        let errors = parse("123.45.67").unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "Invalid number format '123.45.67'");
        assert_eq!(errors[0].offset, Some(0));
        assert_eq!(errors[0].length, Some(9));
    }

    #[test]
    fn test_unterminated_string() {
        let errors = parse("\"abc").unwrap_err();
        assert_eq!(errors[0].message, "Unterminated string literal");
        assert_eq!(errors[0].offset, Some(0));
        assert_eq!(errors[0].length, Some(4));
    }

    #[test]
    fn test_missing_closing_paren() {
        let errors = parse("(+ 1 2").unwrap_err();
        assert_eq!(
            errors[0].message,
            "Unexpected end of input - missing closing parenthesis"
        );
        assert_eq!(errors[0].offset, Some(0));
    }

    #[test]
    fn test_multiple_errors_collected() {
        let errors = parse("1.2.3 (+ 1 2) \"open").unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].message, "Invalid number format '1.2.3'");
        assert_eq!(errors[1].message, "Unterminated string literal");
    }

    #[test]
    fn test_stray_closing_paren_makes_progress() {
        let errors = parse("))").unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].offset, Some(0));
        assert_eq!(errors[1].offset, Some(1));
    }
}
