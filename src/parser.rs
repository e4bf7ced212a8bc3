use std::iter::Peekable;

use crate::{
    error::Error,
    token::{Function, Operator, Token},
};

/// Result type used by the parser.
pub type ParseResult<T> = Result<T, Error>;

/// Converts an infix token sequence into an equivalent postfix sequence.
///
/// The grammar is recursive descent with these precedence levels, lowest
/// to highest: additive (`+ -`), multiplicative (`* / %`), exponential
/// (`^`, right-associative), unary (one optional `+`/`-` prefix), and
/// primary (literal, constant, function call, parenthesized expression).
/// Binary operators are emitted after their operands; the exponential
/// level emits one `Exponentiation` per chain link after the whole chain,
/// which together with the evaluator's pop order groups `a^b^c` as
/// `a^(b^c)`.
///
/// A leading `-` binds to the immediately following primary before any
/// exponent chain applies, so `-2^2` means `(-2)^2`. That is a deliberate
/// property of this grammar, not an accident of implementation.
///
/// # Parameters
/// - `tokens`: The infix sequence as produced by the tokenizer.
///
/// # Returns
/// A freshly allocated postfix sequence.
///
/// # Errors
/// Any of the parse error kinds: `UnexpectedEndOfInput`,
/// `UnexpectedTextAtEnd`, `UnmatchedParenthesis`, `UnexpectedOperator`,
/// `MissingLeftParenthesis`, or `MissingFunctionArgument`.
///
/// # Example
/// ```
/// use rcalc::{
///     parser::convert_infix_to_postfix,
///     token::{Operator, Token},
///     tokenizer::tokenize,
/// };
///
/// let tokens = tokenize("2 + 3").unwrap();
/// let postfix = convert_infix_to_postfix(&tokens).unwrap();
/// assert_eq!(postfix,
///            vec![Token::Value(2.0),
///                 Token::Value(3.0),
///                 Token::Operator(Operator::Addition)]);
/// ```
pub fn convert_infix_to_postfix(tokens: &[Token]) -> ParseResult<Vec<Token>> {
    let mut cursor = tokens.iter().copied().peekable();
    let mut output = Vec::with_capacity(tokens.len());

    parse_expression(&mut cursor, &mut output)?;

    match cursor.next() {
        Some(token) => Err(Error::UnexpectedTextAtEnd { token: token.to_string() }),
        None => Ok(output),
    }
}

/// Parses a full expression.
///
/// Entry point of the precedence hierarchy; descends from the additive
/// level.
///
/// Grammar: `expression := additive`
fn parse_expression<I>(cursor: &mut Peekable<I>, output: &mut Vec<Token>) -> ParseResult<()>
    where I: Iterator<Item = Token>
{
    parse_additive(cursor, output)
}

/// Parses addition and subtraction expressions.
///
/// Left-associative: each consumed operator is emitted right after its
/// second operand.
///
/// Grammar: `additive := multiplicative (("+" | "-") multiplicative)*`
fn parse_additive<I>(cursor: &mut Peekable<I>, output: &mut Vec<Token>) -> ParseResult<()>
    where I: Iterator<Item = Token>
{
    parse_multiplicative(cursor, output)?;
    loop {
        if let Some(operator) = peek_operator(cursor)
           && matches!(operator, Operator::Addition | Operator::Subtraction)
        {
            cursor.next();
            parse_multiplicative(cursor, output)?;
            output.push(Token::Operator(operator));
            continue;
        }
        break;
    }
    Ok(())
}

/// Parses multiplication, division, and modulus expressions.
///
/// Grammar: `multiplicative := exponential (("*" | "/" | "%") exponential)*`
fn parse_multiplicative<I>(cursor: &mut Peekable<I>, output: &mut Vec<Token>) -> ParseResult<()>
    where I: Iterator<Item = Token>
{
    parse_exponential(cursor, output)?;
    loop {
        if let Some(operator) = peek_operator(cursor)
           && matches!(operator,
                       Operator::Multiplication | Operator::Division | Operator::Modulus)
        {
            cursor.next();
            parse_exponential(cursor, output)?;
            output.push(Token::Operator(operator));
            continue;
        }
        break;
    }
    Ok(())
}

/// Parses exponentiation chains.
///
/// The chain of unary operands is consumed left to right, and only then
/// is one `Exponentiation` emitted per link. With the evaluator popping
/// its right operand first, this realizes right-associativity:
/// `a ^ b ^ c` evaluates as `a ^ (b ^ c)`.
///
/// Grammar: `exponential := unary ("^" unary)*`
fn parse_exponential<I>(cursor: &mut Peekable<I>, output: &mut Vec<Token>) -> ParseResult<()>
    where I: Iterator<Item = Token>
{
    parse_unary(cursor, output)?;

    let mut links = 0_usize;
    while peek_operator(cursor) == Some(Operator::Exponentiation) {
        cursor.next();
        parse_unary(cursor, output)?;
        links += 1;
    }

    for _ in 0..links {
        output.push(Token::Operator(Operator::Exponentiation));
    }
    Ok(())
}

/// Parses an optionally signed operand.
///
/// A single leading `+` is consumed and discarded; a single leading `-`
/// emits a `Negation` operator after the primary. The sign binds to the
/// primary alone, before any exponent chain at the enclosing level.
///
/// Grammar: `unary := ["+" | "-"] primary`
fn parse_unary<I>(cursor: &mut Peekable<I>, output: &mut Vec<Token>) -> ParseResult<()>
    where I: Iterator<Item = Token>
{
    let mut negate = false;
    match peek_operator(cursor) {
        Some(Operator::Subtraction) => {
            negate = true;
            cursor.next();
        },
        Some(Operator::Addition) => {
            cursor.next();
        },
        _ => {},
    }

    parse_primary(cursor, output)?;

    if negate {
        output.push(Token::Operator(Operator::Negation));
    }
    Ok(())
}

/// Parses a primary (atomic) expression: a literal value, a constant, a
/// function call, or a parenthesized sub-expression.
///
/// Grammar:
/// ```text
///     primary := value
///              | constant
///              | function "(" arguments ")"
///              | "(" expression ")"
/// ```
///
/// An exhausted cursor here is `UnexpectedEndOfInput`; any other token
/// is `UnexpectedOperator`.
fn parse_primary<I>(cursor: &mut Peekable<I>, output: &mut Vec<Token>) -> ParseResult<()>
    where I: Iterator<Item = Token>
{
    match cursor.peek().copied() {
        Some(token @ (Token::Value(_) | Token::Constant(_))) => {
            cursor.next();
            output.push(token);
            Ok(())
        },
        Some(Token::Function(function)) => {
            cursor.next();
            parse_function_call(cursor, output, function)
        },
        Some(Token::Operator(Operator::LeftParen)) => {
            cursor.next();
            parse_grouping(cursor, output)
        },
        Some(token) => Err(Error::UnexpectedOperator { token: token.to_string() }),
        None => Err(Error::UnexpectedEndOfInput),
    }
}

/// Parses a function call, with the function name already consumed.
///
/// The name must be followed by `(`. Arguments are full expressions
/// separated by commas, up to the closing `)`. The grammar accepts any
/// number of arguments, including zero; the evaluator pops exactly one
/// operand per function, so a surplus surfaces later as `StackNotEmpty`
/// and a missing argument as `StackUnderflow`. A comma directly followed
/// by `)` is rejected here as `MissingFunctionArgument`.
fn parse_function_call<I>(cursor: &mut Peekable<I>,
                          output: &mut Vec<Token>,
                          function: Function)
                          -> ParseResult<()>
    where I: Iterator<Item = Token>
{
    match cursor.next() {
        Some(Token::Operator(Operator::LeftParen)) => {},
        _ => return Err(Error::MissingLeftParenthesis),
    }
    if cursor.peek().is_none() {
        return Err(Error::UnexpectedEndOfInput);
    }

    while peek_operator(cursor) != Some(Operator::RightParen) {
        parse_expression(cursor, output)?;

        if peek_operator(cursor) == Some(Operator::Comma) {
            cursor.next();
            if cursor.peek().is_none() {
                return Err(Error::UnexpectedEndOfInput);
            }
            if peek_operator(cursor) == Some(Operator::RightParen) {
                return Err(Error::MissingFunctionArgument);
            }
        }
    }
    cursor.next();

    output.push(Token::Function(function));
    Ok(())
}

/// Parses a parenthesized sub-expression, with the `(` already consumed.
///
/// The closing `)` is consumed only when present; a different token in
/// its place is `UnmatchedParenthesis`, an exhausted input is
/// `UnexpectedEndOfInput`.
fn parse_grouping<I>(cursor: &mut Peekable<I>, output: &mut Vec<Token>) -> ParseResult<()>
    where I: Iterator<Item = Token>
{
    if cursor.peek().is_none() {
        return Err(Error::UnexpectedEndOfInput);
    }

    parse_expression(cursor, output)?;

    match cursor.next() {
        Some(Token::Operator(Operator::RightParen)) => Ok(()),
        Some(_) => Err(Error::UnmatchedParenthesis),
        None => Err(Error::UnexpectedEndOfInput),
    }
}

/// Returns the operator under the cursor without consuming it, or `None`
/// when the next token is absent or not an operator.
fn peek_operator<I>(cursor: &mut Peekable<I>) -> Option<Operator>
    where I: Iterator<Item = Token>
{
    match cursor.peek() {
        Some(Token::Operator(operator)) => Some(*operator),
        _ => None,
    }
}
