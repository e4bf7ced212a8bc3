use rcalc::{
    Notation,
    error::Error,
    evaluate,
    parser::convert_infix_to_postfix,
    token::{Operator, Token},
    tokenizer::tokenize,
};

fn infix(expression: &str) -> Result<f64, Error> {
    evaluate(expression, Notation::Infix)
}

fn rpn(expression: &str) -> Result<f64, Error> {
    evaluate(expression, Notation::Postfix)
}

fn assert_infix(expression: &str, expected: f64) {
    match infix(expression) {
        Ok(result) => {
            assert!(result == expected,
                    "'{expression}' evaluated to {result}, expected {expected}")
        },
        Err(e) => panic!("'{expression}' failed: {e}"),
    }
}

fn assert_rpn(expression: &str, expected: f64) {
    match rpn(expression) {
        Ok(result) => {
            assert!(result == expected,
                    "'{expression}' (RPN) evaluated to {result}, expected {expected}")
        },
        Err(e) => panic!("'{expression}' (RPN) failed: {e}"),
    }
}

fn assert_infix_close(expression: &str, expected: f64) {
    match infix(expression) {
        Ok(result) => {
            let tolerance = 1e-9 * expected.abs().max(1.0);
            assert!((result - expected).abs() <= tolerance,
                    "'{expression}' evaluated to {result}, expected about {expected}")
        },
        Err(e) => panic!("'{expression}' failed: {e}"),
    }
}

#[test]
fn standard_precedence() {
    assert_infix("2+3*4", 14.0);
    assert_infix("2*3+4", 10.0);
    assert_infix("2+3*4^2", 50.0);
    assert_infix("(2+3)*4", 20.0);
    assert_rpn("2 3 4 * +", 14.0);
}

#[test]
fn exponentiation_is_right_associative() {
    assert_infix("2^3^2", 512.0);
    assert_rpn("2 3 ^", 8.0);
    assert_infix("2^-1", 0.5);
}

#[test]
fn unary_minus_binds_before_exponentiation() {
    assert_infix("-2^2", 4.0);
    assert_infix("-(2^2)", -4.0);
}

#[test]
fn unary_signs() {
    assert_infix("-5", -5.0);
    assert_infix("+5", 5.0);
    assert_infix("2--3", 5.0);
    assert_infix("2+-3", -1.0);
}

#[test]
fn division_by_zero_propagates() {
    let result = infix("1/0").unwrap();
    assert!(result.is_infinite() && result.is_sign_positive());

    let result = infix("-1/0").unwrap();
    assert!(result.is_infinite() && result.is_sign_negative());

    assert!(infix("0/0").unwrap().is_nan());
}

#[test]
fn modulus_sign_follows_dividend() {
    assert_infix("10 % 3", 1.0);
    assert_infix("-7 % 3", -1.0);
    assert_infix("7 % -3", 1.0);
}

#[test]
fn functions_evaluate() {
    assert_infix("sin(0)", 0.0);
    assert_infix("sqrt(4)", 2.0);
    assert_infix("abs(-5)", 5.0);
    assert_infix("neg(3)", -3.0);
    assert_infix("trunc(3.7)", 3.0);
    assert_infix("trunc(-3.7)", -3.0);
    assert_infix("round(2.5)", 3.0);
    assert_infix("round(-2.5)", -3.0);
    assert_infix("exp(0)", 1.0);
    assert_infix("ln(1)", 0.0);
    assert_infix("log(1)", 0.0);
    assert_infix_close("log(1000)", 3.0);
    assert_infix_close("cos(2*pi)", 1.0);
}

#[test]
fn function_names_are_case_insensitive() {
    assert_infix("SQRT(4)", 2.0);
    assert_infix("Sin(0)", 0.0);
    assert_infix("PI", std::f64::consts::PI);
}

#[test]
fn constants_evaluate() {
    assert_infix("pi", std::f64::consts::PI);
    assert_infix("e", std::f64::consts::E);
    assert_rpn("pi", std::f64::consts::PI);
}

#[test]
fn rpn_functions_and_constants() {
    let result = rpn("pi sin").unwrap();
    assert!(result.abs() < 1e-15);

    assert_rpn("4 sqrt", 2.0);
    assert_rpn("5 3 7 * +", 26.0);
}

#[test]
fn numeric_literals() {
    assert_infix(".5", 0.5);
    assert_infix("1.25", 1.25);
    assert_infix_close("2e10", 2e10);
    assert_infix_close("1.5e-3", 0.0015);
    assert_infix_close("2E+2", 200.0);
}

#[test]
fn stray_decimal_points_accumulate() {
    // The scanner treats a second '.' as a no-op; this matches the
    // digit-accumulation rule rather than rejecting the literal.
    let tokens = tokenize("1.2.3").unwrap();
    assert_eq!(tokens.len(), 1);
    match tokens[0] {
        Token::Value(value) => assert!((value - 1.23).abs() < 1e-12),
        ref other => panic!("expected a value token, got {other:?}"),
    }
}

#[test]
fn invalid_exponents_are_rejected() {
    assert_eq!(infix("2e"), Err(Error::InvalidExponent));
    assert_eq!(infix("2e+"), Err(Error::InvalidExponent));
    assert_eq!(infix("2E-"), Err(Error::InvalidExponent));
}

#[test]
fn unknown_identifiers_are_rejected() {
    assert_eq!(infix("foo(1)"),
               Err(Error::UnknownFunctionOrConstant { name: "foo".to_string() }));
    assert_eq!(infix("2 + tau"),
               Err(Error::UnknownFunctionOrConstant { name: "tau".to_string() }));
}

#[test]
fn unexpected_characters_are_rejected() {
    assert_eq!(infix("2$3"), Err(Error::UnexpectedCharacter { character: '$' }));
    assert_eq!(infix("1 # 2"), Err(Error::UnexpectedCharacter { character: '#' }));
}

#[test]
fn malformed_infix_input() {
    assert_eq!(infix("(2+3"), Err(Error::UnexpectedEndOfInput));
    assert_eq!(infix(""), Err(Error::UnexpectedEndOfInput));
    assert_eq!(infix("2+"), Err(Error::UnexpectedEndOfInput));
    assert_eq!(infix("(2 3)"), Err(Error::UnmatchedParenthesis));
    assert_eq!(infix("2+3)"),
               Err(Error::UnexpectedTextAtEnd { token: ")".to_string() }));
    assert_eq!(infix("*2"), Err(Error::UnexpectedOperator { token: "*".to_string() }));
}

#[test]
fn malformed_function_calls() {
    assert_eq!(infix("sin 0"), Err(Error::MissingLeftParenthesis));
    assert_eq!(infix("sin(1,)"), Err(Error::MissingFunctionArgument));
    assert_eq!(infix("sin(1,"), Err(Error::UnexpectedEndOfInput));
    assert_eq!(infix("sin("), Err(Error::UnexpectedEndOfInput));
}

#[test]
fn permissive_argument_counts_surface_on_the_stack() {
    // The grammar accepts any argument count; the evaluator pops exactly
    // one operand per function, so the mismatch shows up afterwards.
    assert_eq!(infix("atan(1, 2)"), Err(Error::StackNotEmpty));
    assert_eq!(infix("sin()"), Err(Error::StackUnderflow));
}

#[test]
fn rpn_stack_discipline() {
    assert_eq!(rpn("1 2"), Err(Error::StackNotEmpty));
    assert_eq!(rpn("+"), Err(Error::StackUnderflow));
    assert_eq!(rpn(""), Err(Error::StackUnderflow));
}

#[test]
fn parentheses_are_illegal_in_rpn() {
    assert_eq!(rpn("(2)"),
               Err(Error::UnhandledOperator { operator: Operator::LeftParen }));
    assert_eq!(rpn("1 2 , +"),
               Err(Error::UnhandledOperator { operator: Operator::Comma }));
}

#[test]
fn infix_and_serialized_postfix_agree() {
    // Converting to postfix, rendering the tokens back to text, and
    // evaluating that text as RPN must reproduce the infix result.
    let expressions = ["2+3*4",
                       "2^3^2",
                       "-2^2",
                       "(1+2)*(3+4)",
                       "sqrt(4)+1",
                       "2+3.5*4",
                       "10 % 3 - 2/4"];

    for expression in expressions {
        let tokens = tokenize(expression).unwrap();
        let postfix = convert_infix_to_postfix(&tokens).unwrap();
        let rendered = postfix.iter()
                              .map(ToString::to_string)
                              .collect::<Vec<_>>()
                              .join(" ");
        assert_eq!(rpn(&rendered).unwrap(),
                   infix(expression).unwrap(),
                   "round trip diverged for '{expression}' via '{rendered}'");
    }
}

#[test]
fn tokenize_serialize_tokenize_is_identity() {
    let expressions = ["2 + 3 * 4",
                       "(2.5 + 17) * abs(3.125) - pi / e",
                       "sin(0.5) ^ 2 % 10",
                       "1 , 2 ( ) trunc"];

    for expression in expressions {
        let tokens = tokenize(expression).unwrap();
        let rendered = tokens.iter()
                             .map(ToString::to_string)
                             .collect::<Vec<_>>()
                             .join(" ");
        assert_eq!(tokenize(&rendered).unwrap(),
                   tokens,
                   "re-tokenizing '{rendered}' diverged from '{expression}'");
    }
}

#[test]
fn whitespace_is_insignificant() {
    assert_eq!(tokenize("2+3").unwrap(), tokenize(" 2 \t +\n 3 ").unwrap());
}
