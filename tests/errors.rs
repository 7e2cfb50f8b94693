use plotexpr::{
    engine::{
        lexer::tokenize,
        parser::core::{MAX_DEPTH, parse},
    },
    error::{ErrorCategory, LexError, ParseError, SyntaxError},
    parse_expression,
};

fn error_of(src: &str) -> ParseError {
    match parse_expression(src) {
        Ok(expr) => panic!("'{src}' parsed as {expr} but was expected to fail"),
        Err(e) => e,
    }
}

fn syntax(src: &str) -> SyntaxError {
    match error_of(src) {
        ParseError::Syntax(e) => e,
        ParseError::Lex(e) => panic!("'{src}' failed while lexing: {e}"),
    }
}

fn lexical(src: &str) -> LexError {
    match error_of(src) {
        ParseError::Lex(e) => e,
        ParseError::Syntax(e) => panic!("'{src}' failed while parsing: {e}"),
    }
}

#[test]
fn operand_expected() {
    assert_eq!(syntax("2++"), SyntaxError::OperandExpected { offset: 3 });
    assert_eq!(syntax("()"), SyntaxError::OperandExpected { offset: 1 });
    assert_eq!(syntax(""), SyntaxError::OperandExpected { offset: 0 });
    assert_eq!(syntax("   "), SyntaxError::OperandExpected { offset: 3 });
    assert_eq!(syntax("*2"), SyntaxError::OperandExpected { offset: 0 });
    assert_eq!(syntax("2^^3"), SyntaxError::OperandExpected { offset: 2 });
    assert_eq!(syntax("sin"), SyntaxError::OperandExpected { offset: 3 });
    assert_eq!(syntax("(2+"), SyntaxError::OperandExpected { offset: 3 });
}

#[test]
fn binary_operation_expected() {
    assert_eq!(syntax("2 3"), SyntaxError::BinaryOperationExpected { offset: 2 });
    assert_eq!(syntax("x(2)"), SyntaxError::BinaryOperationExpected { offset: 1 });
    assert_eq!(syntax("2pi"), SyntaxError::BinaryOperationExpected { offset: 1 });
    assert_eq!(syntax("x sin x"), SyntaxError::BinaryOperationExpected { offset: 2 });
    assert_eq!(syntax("(1)(2)"), SyntaxError::BinaryOperationExpected { offset: 3 });
}

#[test]
fn parenthesis_mismatch() {
    assert_eq!(syntax(")"), SyntaxError::UnexpectedClosingParen { offset: 0 });
    assert_eq!(syntax("(2))"), SyntaxError::UnexpectedClosingParen { offset: 3 });
    assert_eq!(syntax("2*)"), SyntaxError::UnexpectedClosingParen { offset: 2 });
    assert_eq!(syntax("(2+3"), SyntaxError::ExpectedClosingParen { offset: 4 });
    assert_eq!(syntax("((x)"), SyntaxError::ExpectedClosingParen { offset: 4 });
}

#[test]
fn malformed_literals_are_rejected_at_their_start() {
    assert_eq!(lexical("1.2.3"),
               LexError::InvalidNumber { literal: "1.2.3".to_string(),
                                         offset:  0, });
    assert_eq!(lexical("x + 4e"),
               LexError::InvalidNumber { literal: "4e".to_string(),
                                         offset:  4, });
    assert_eq!(lexical("1e+"),
               LexError::InvalidNumber { literal: "1e+".to_string(),
                                         offset:  0, });
    assert_eq!(lexical("2 * ."),
               LexError::InvalidNumber { literal: ".".to_string(),
                                         offset:  4, });
}

#[test]
fn unknown_identifiers() {
    assert_eq!(lexical("x + y"),
               LexError::UnrecognizedToken { token:  "y".to_string(),
                                             offset: 4, });
    assert_eq!(lexical("sinx"),
               LexError::UnrecognizedToken { token:  "sinx".to_string(),
                                             offset: 0, });
    assert_eq!(lexical("log(x)"),
               LexError::UnrecognizedToken { token:  "log".to_string(),
                                             offset: 0, });
}

#[test]
fn illegal_characters() {
    assert_eq!(lexical("2 # 3"),
               LexError::IllegalCharacter { character: '#',
                                            offset:    2, });
    assert_eq!(lexical("X"),
               LexError::IllegalCharacter { character: 'X',
                                            offset:    0, });
    assert_eq!(lexical("1 + é"),
               LexError::IllegalCharacter { character: 'é',
                                            offset:    4, });
    assert_eq!(lexical("2,5"),
               LexError::IllegalCharacter { character: ',',
                                            offset:    1, });
}

#[test]
fn lexing_stops_before_parsing() {
    // The lexical error wins even though the syntax is broken earlier.
    assert!(matches!(error_of(") $"), ParseError::Lex(_)));
}

#[test]
fn categories() {
    assert_eq!(error_of("1.2.3").category(), ErrorCategory::Lexical);
    assert_eq!(error_of("(").category(), ErrorCategory::Syntax);

    let internal = ParseError::from(SyntaxError::Internal { message: "test".to_string(),
                                                            offset:  0, });
    assert_eq!(internal.category(), ErrorCategory::Internal);
}

#[test]
fn token_lists_without_end_marker_are_internal_errors() {
    assert!(matches!(parse(&[]), Err(SyntaxError::Internal { offset: 0, .. })));

    let mut tokens = tokenize("1+2").unwrap();
    tokens.pop();
    let err = parse(&tokens).unwrap_err();
    assert!(err.is_internal());
    assert_eq!(err.offset(), 2);
}

#[test]
fn tokens_after_an_inner_end_marker_are_internal_errors() {
    let mut tokens = tokenize("1").unwrap();
    tokens.extend(tokenize("2").unwrap());

    let err = parse(&tokens).unwrap_err();
    assert!(err.is_internal());
    assert_eq!(err.offset(), 1);
}

/// Runs `f` on a thread with a generous stack, so that recursion up to the
/// nesting limit does not depend on the test runner's default stack size.
fn with_large_stack<T: Send + 'static>(f: impl FnOnce() -> T + Send + 'static) -> T {
    std::thread::Builder::new().stack_size(64 << 20)
                               .spawn(f)
                               .unwrap()
                               .join()
                               .unwrap()
}

#[test]
fn deeply_nested_parentheses_are_rejected() {
    let err = with_large_stack(|| {
        let depth = 100_000;
        syntax(&format!("{}x{}", "(".repeat(depth), ")".repeat(depth)))
    });
    assert_eq!(err, SyntaxError::TooDeep { offset: MAX_DEPTH });

    let err = with_large_stack(|| syntax(&"(".repeat(100_000)));
    assert_eq!(err, SyntaxError::TooDeep { offset: MAX_DEPTH });
}

#[test]
fn long_prefix_chains_are_rejected() {
    let err = with_large_stack(|| syntax(&format!("{}x", "-".repeat(100_000))));
    assert_eq!(err, SyntaxError::TooDeep { offset: MAX_DEPTH });

    let err = with_large_stack(|| syntax(&format!("{}x", "sin ".repeat(20_000))));
    assert_eq!(err, SyntaxError::TooDeep { offset: 4 * MAX_DEPTH });
}

#[test]
fn long_operator_chains_are_rejected() {
    let err = with_large_stack(|| syntax(&vec!["1"; 100_000].join("+")));
    assert!(matches!(err, SyntaxError::TooDeep { .. }));

    let err = with_large_stack(|| syntax(&vec!["x"; 100_000].join("^")));
    assert!(matches!(err, SyntaxError::TooDeep { .. }));
}

#[test]
fn nesting_up_to_the_limit_is_accepted() {
    let value = with_large_stack(|| {
        let src = format!("{}x{}", "(".repeat(MAX_DEPTH), ")".repeat(MAX_DEPTH));
        parse_expression(&src).map(|expr| expr.evaluate(2.0))
    });
    assert_eq!(value, Ok(2.0));

    // The prefixes and the variable make a path of exactly MAX_DEPTH nodes.
    let value = with_large_stack(|| {
        parse_expression(&format!("{}x", "-".repeat(MAX_DEPTH - 1))).map(|expr| expr.evaluate(2.0))
    });
    assert_eq!(value, Ok(if (MAX_DEPTH - 1) % 2 == 0 { 2.0 } else { -2.0 }));
}

#[test]
fn caret_marks_the_offset() {
    let src = "(2+3";
    assert_eq!(error_of(src).show(src),
               "(2+3\n    ^\nError at offset 4: Expected closing parenthesis ')' but none found.");

    let src = "\t1.2.3";
    assert_eq!(error_of(src).show(src),
               "\t1.2.3\n\t^\nError at offset 1: Invalid number '1.2.3'.");
}

#[test]
fn messages_name_the_location() {
    assert_eq!(error_of(")").to_string(),
               "Error at offset 0: Unexpected closing parenthesis ')'.");
    assert_eq!(error_of("x # 1").to_string(),
               "Error at offset 2: Illegal character '#'.");
    assert_eq!(SyntaxError::TooDeep { offset: 7 }.to_string(),
               "Error at offset 7: Expression is nested too deeply.");
}
