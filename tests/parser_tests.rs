//! Parser diagnostics: offsets, spans, and multi-error recovery.

use scrawl::{parse, Expr};

#[test]
fn test_empty_input() {
    assert!(parse("").unwrap().exprs.is_empty());
    assert!(parse("  \n\t  ").unwrap().exprs.is_empty());
}

#[test]
fn test_top_level_expressions_keep_source_order() {
    let program = parse("1 two \"three\" (4)").unwrap();
    assert_eq!(program.exprs.len(), 4);
    assert!(matches!(program.exprs[0], Expr::Number { .. }));
    assert!(matches!(program.exprs[1], Expr::Symbol { .. }));
    assert!(matches!(program.exprs[2], Expr::String { .. }));
    assert!(matches!(program.exprs[3], Expr::List { .. }));
}

#[test]
fn test_offsets_of_nested_expressions() {
    let program = parse("(let ((x 10)) x)").unwrap();
    let Expr::List { elements, offset } = &program.exprs[0] else {
        panic!("expected list");
    };
    assert_eq!(*offset, Some(0));

    let Expr::List { elements: pairs, offset } = &elements[1] else {
        panic!("expected bindings list");
    };
    assert_eq!(*offset, Some(5));

    let Expr::List { elements: pair, offset } = &pairs[0] else {
        panic!("expected binding pair");
    };
    assert_eq!(*offset, Some(6));
    assert!(matches!(&pair[0], Expr::Symbol { offset: Some(7), .. }));
    assert!(matches!(&pair[1], Expr::Number { offset: Some(9), .. }));
}

#[test]
fn test_invalid_number_span() {
    let errors = parse("123.45.67").unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message, "Invalid number format '123.45.67'");
    assert_eq!(errors[0].offset, Some(0));
    assert_eq!(errors[0].length, Some(9));
}

#[test]
fn test_unterminated_string_span() {
    let errors = parse("(stroke \"red").unwrap_err();
    // The string error aborts the enclosing list; one diagnostic results
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message, "Unterminated string literal");
    assert_eq!(errors[0].offset, Some(8));
    assert_eq!(errors[0].length, Some(4)); // consumed chars + opening quote
}

#[test]
fn test_unclosed_list_error_at_opening_paren() {
    let errors = parse("  (+ 1 (+ 2 3)").unwrap_err();
    assert_eq!(
        errors[0].message,
        "Unexpected end of input - missing closing parenthesis"
    );
    assert_eq!(errors[0].offset, Some(2));
}

#[test]
fn test_errors_from_independent_expressions_are_all_reported() {
    let errors = parse("1.2.3 (+ 1 2) 4..5 (ok)").unwrap_err();
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0].message, "Invalid number format '1.2.3'");
    assert_eq!(errors[1].message, "Invalid number format '4..5'");
    assert_eq!(errors[1].offset, Some(14));
}

#[test]
fn test_any_error_fails_the_whole_parse() {
    // Well-formed expressions around an error are not returned
    assert!(parse("(+ 1 2) ) (* 3 4)").is_err());
}

#[test]
fn test_symbol_fallback_covers_operators() {
    let program = parse("(>= x -)").unwrap();
    let Expr::List { elements, .. } = &program.exprs[0] else {
        panic!("expected list");
    };
    assert!(matches!(&elements[0], Expr::Symbol { name, .. } if name == ">="));
    assert!(matches!(&elements[2], Expr::Symbol { name, .. } if name == "-"));
}

#[test]
fn test_unicode_symbols_use_char_offsets() {
    let program = parse("héllo wörld").unwrap();
    assert!(matches!(&program.exprs[0], Expr::Symbol { name, offset: Some(0) } if name == "héllo"));
    assert!(matches!(&program.exprs[1], Expr::Symbol { name, offset: Some(6) } if name == "wörld"));
}

#[test]
fn test_string_keeps_whitespace_and_parens_verbatim() {
    let program = parse("\"( a )\"").unwrap();
    assert!(matches!(&program.exprs[0], Expr::String { value, .. } if value == "( a )"));
}
