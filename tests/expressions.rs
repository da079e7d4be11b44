use linecalc::{
    error::{Error, ParseError, RuntimeError},
    eval_line,
    interpreter::{
        lexer::{Token, tokenize},
        parser::parse,
    },
};

fn assert_evaluates(src: &str, expected: i64) {
    match eval_line(src) {
        Ok(value) => assert_eq!(value, expected, "'{src}' evaluated to {value}"),
        Err(e) => panic!("'{src}' failed: {e}"),
    }
}

fn assert_parse_error(src: &str) -> ParseError {
    match eval_line(src) {
        Err(Error::Parse(e)) => e,
        Ok(value) => panic!("'{src}' succeeded with {value} but was expected to fail"),
        Err(e) => panic!("'{src}' failed in the wrong phase: {e}"),
    }
}

#[test]
fn tokenizer_is_an_allow_list_filter() {
    assert!(tokenize("1+2").is_ok());
    assert!(matches!(tokenize("1+a"), Err(ParseError::InvalidCharacter { .. })));

    // Digit runs aggregate into one literal; '=' and spaces leave no token.
    let tokens = tokenize("12 + 3 =").unwrap();
    assert_eq!(tokens[0].0, Token::Integer(12));
    assert_eq!(tokens.len(), 3);
}

#[test]
fn parser_returns_no_tree_on_failure() {
    let tokens = tokenize("1+*2").unwrap();
    assert!(parse(&tokens).is_err());

    assert!(matches!(parse(&[]), Err(ParseError::UnexpectedEndOfInput)));
}

#[test]
fn basic_arithmetic() {
    assert_evaluates("1+2", 3);
    assert_evaluates("8-5", 3);
    assert_evaluates("7*9", 63);
    assert_evaluates("10/2", 5);
    assert_evaluates("42", 42);
}

#[test]
fn multiplicative_precedence_over_additive() {
    assert_evaluates("2+3*4", 14);
    assert_evaluates("3*4+2", 14);
    assert_evaluates("20-10/2", 15);
    assert_evaluates("1+2*3-4/2", 5);
}

#[test]
fn parenthesis_overrides_precedence() {
    assert_evaluates("(2+3)*4", 20);
    assert_evaluates("2*(3+4)", 14);
    assert_evaluates("((1+2))*((3))", 9);
    assert_evaluates("(8)", 8);
}

#[test]
fn same_precedence_operators_are_left_associative() {
    assert_evaluates("10-2-3", 5);
    assert_evaluates("100/10/5", 2);
    assert_evaluates("2-3+4", 3);
    assert_evaluates("8/4*2", 4);
}

#[test]
fn division_truncates_toward_zero() {
    assert_evaluates("7/2", 3);
    assert_evaluates("1/2", 0);
    assert_evaluates("9/10", 0);
}

#[test]
fn division_by_zero_is_a_runtime_error() {
    match eval_line("5/0") {
        Err(Error::Runtime(RuntimeError::DivisionByZero { .. })) => {},
        other => panic!("expected division by zero, got {other:?}"),
    }
    assert!(matches!(eval_line("1+4/(2-2)"),
                     Err(Error::Runtime(RuntimeError::DivisionByZero { .. }))));
}

#[test]
fn whitespace_and_equals_are_elided() {
    assert_evaluates("1 + 2", 3);
    assert_evaluates("1+2=", 3);
    assert_evaluates(" 3 * 3 = ", 9);
    assert_evaluates("\t7\t", 7);
}

#[test]
fn invalid_characters_reject_the_whole_line() {
    assert!(matches!(assert_parse_error("1+a"),
                     ParseError::InvalidCharacter { .. }));
    assert!(matches!(assert_parse_error("2.5+1"),
                     ParseError::InvalidCharacter { .. }));
    assert!(matches!(assert_parse_error("hello"),
                     ParseError::InvalidCharacter { .. }));
}

#[test]
fn unbalanced_parenthesis_is_a_syntax_error() {
    assert!(matches!(assert_parse_error("(1+2"),
                     ParseError::ExpectedClosingParen { .. }));
    assert!(matches!(assert_parse_error("((1+2)"),
                     ParseError::ExpectedClosingParen { .. }));
    // A stray ')' is trailing garbage after a complete expression.
    assert!(matches!(assert_parse_error("1+2)"),
                     ParseError::UnexpectedTrailingTokens { .. }));
}

#[test]
fn empty_and_incomplete_expressions_are_syntax_errors() {
    assert!(matches!(assert_parse_error(""), ParseError::UnexpectedEndOfInput));
    assert!(matches!(assert_parse_error("   "), ParseError::UnexpectedEndOfInput));
    assert!(matches!(assert_parse_error("1+"), ParseError::UnexpectedEndOfInput));
    assert!(matches!(assert_parse_error("()"), ParseError::UnexpectedToken { .. }));
    assert!(matches!(assert_parse_error("+2"), ParseError::UnexpectedToken { .. }));
    assert!(matches!(assert_parse_error("1 2"),
                     ParseError::UnexpectedTrailingTokens { .. }));
}

#[test]
fn arithmetic_wraps_at_the_integer_width() {
    assert_evaluates("9223372036854775807+1", i64::MIN);
    assert_evaluates("9223372036854775807*2", -2);
    // i64::MIN / -1 has no representable quotient and wraps back to i64::MIN.
    assert_evaluates("(9223372036854775807+1)/(0-1)", i64::MIN);
}

#[test]
fn oversized_literals_are_rejected() {
    assert!(matches!(assert_parse_error("9223372036854775808"),
                     ParseError::LiteralTooLarge { .. }));
}

#[test]
fn nesting_beyond_the_depth_limit_is_rejected() {
    let mut src = String::new();
    for _ in 0..40 {
        src.push('(');
    }
    src.push('1');
    for _ in 0..40 {
        src.push(')');
    }
    assert!(matches!(assert_parse_error(&src), ParseError::NestingTooDeep { .. }));
}

#[test]
fn evaluation_is_deterministic() {
    for _ in 0..3 {
        assert_evaluates("(2+3)*4-10/2", 15);
    }
}
