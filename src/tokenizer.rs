use std::{iter::Peekable, str::Chars};

use logos::Logos;

use crate::{
    error::Error,
    token::{Constant, Function, Operator, Token},
};

/// Raw lexemes recognized by the generated lexer.
///
/// This enum is internal to the tokenizer: `tokenize` maps every raw
/// lexeme onto the public [`Token`] shape before storing it, so the
/// distinction between functions and constants (resolved from one
/// identifier rule) never leaks out of this module.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
#[logos(error = LexError)]
#[logos(skip r"[ \t\n\v\f\r]+")]
enum RawToken {
    /// Numeric literal tokens, such as `42`, `3.14`, `.5` or `2.1e-10`.
    #[regex(r"[0-9.]+([eE][+-]?[0-9.]*)?", scan_number)]
    Number(f64),
    /// A run of letters, resolved case-insensitively against the fixed
    /// tables of function and constant names.
    #[regex(r"[a-zA-Z]+", resolve_identifier)]
    Identifier(Identifier),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
}

/// A resolved identifier: either a function name or a constant name.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
enum Identifier {
    Function(Function),
    Constant(Constant),
}

/// Failure modes raised inside the lexer callbacks.
///
/// Context (the offending slice) is attached by `tokenize`, which still
/// has the lexer at hand; the callbacks themselves only classify.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
enum LexError {
    #[default]
    UnexpectedCharacter,
    InvalidExponent,
    UnknownFunctionOrConstant,
}

/// Converts an expression string into an ordered token sequence.
///
/// Whitespace between tokens is skipped. Numbers may start with a digit
/// or a decimal point and may carry an `e`/`E` exponent with an optional
/// sign; identifiers are runs of ASCII letters matched case-insensitively
/// against the known function and constant names; everything else must be
/// one of the operator characters `+ - * / % ^ ( ) ,`.
///
/// # Parameters
/// - `expression`: The raw expression text.
///
/// # Returns
/// The tokens in source order.
///
/// # Errors
/// - `UnexpectedCharacter` for a character that starts no token.
/// - `InvalidExponent` for an exponent marker with no digits.
/// - `UnknownFunctionOrConstant` for an unresolved identifier.
///
/// # Example
/// ```
/// use rcalc::{
///     token::{Operator, Token},
///     tokenizer::tokenize,
/// };
///
/// let tokens = tokenize("1 + .5").unwrap();
/// assert_eq!(tokens,
///            vec![Token::Value(1.0),
///                 Token::Operator(Operator::Addition),
///                 Token::Value(0.5)]);
/// ```
pub fn tokenize(expression: &str) -> Result<Vec<Token>, Error> {
    let mut tokens = Vec::new();
    let mut lexer = RawToken::lexer(expression);

    while let Some(raw) = lexer.next() {
        match raw {
            Ok(raw) => tokens.push(into_token(raw)),
            Err(error) => return Err(attach_context(&error, lexer.slice())),
        }
    }

    Ok(tokens)
}

/// Maps a raw lexeme onto the public token shape.
const fn into_token(raw: RawToken) -> Token {
    match raw {
        RawToken::Number(value) => Token::Value(value),
        RawToken::Identifier(Identifier::Function(function)) => Token::Function(function),
        RawToken::Identifier(Identifier::Constant(constant)) => Token::Constant(constant),
        RawToken::Plus => Token::Operator(Operator::Addition),
        RawToken::Minus => Token::Operator(Operator::Subtraction),
        RawToken::Star => Token::Operator(Operator::Multiplication),
        RawToken::Slash => Token::Operator(Operator::Division),
        RawToken::Percent => Token::Operator(Operator::Modulus),
        RawToken::Caret => Token::Operator(Operator::Exponentiation),
        RawToken::LParen => Token::Operator(Operator::LeftParen),
        RawToken::RParen => Token::Operator(Operator::RightParen),
        RawToken::Comma => Token::Operator(Operator::Comma),
    }
}

/// Turns a bare lexer error into a public error carrying the slice the
/// lexer stopped on.
fn attach_context(error: &LexError, slice: &str) -> Error {
    match error {
        LexError::UnexpectedCharacter => {
            Error::UnexpectedCharacter { character: slice.chars().next().unwrap_or(' ') }
        },
        LexError::InvalidExponent => Error::InvalidExponent,
        LexError::UnknownFunctionOrConstant => {
            Error::UnknownFunctionOrConstant { name: slice.to_string() }
        },
    }
}

/// Scans a numeric literal from the current token slice.
///
/// Digits before the decimal point accumulate as `value * 10 + digit`;
/// digits after it are weighted by a divider that starts at `0.1` and
/// shrinks tenfold per digit. A second decimal point does not reset the
/// divider, so `1.2.3` scans as `1.23`. An `e`/`E` hands the rest of the
/// slice to [`scan_exponent`].
fn scan_number(lex: &logos::Lexer<RawToken>) -> Result<f64, LexError> {
    let mut chars = lex.slice().chars().peekable();
    let mut number = 0.0_f64;
    let mut divider = 0.1_f64;
    let mut dot_seen = false;

    while let Some(c) = chars.next() {
        match c {
            '.' => dot_seen = true,
            'e' | 'E' => {
                number *= 10.0_f64.powf(scan_exponent(&mut chars)?);
            },
            _ => {
                // The token rule admits only digits here.
                let digit = f64::from(c as u8 - b'0');
                if dot_seen {
                    number += digit * divider;
                    divider /= 10.0;
                } else {
                    number = number * 10.0 + digit;
                }
            },
        }
    }

    Ok(number)
}

/// Scans the exponent part of a numeric literal: an optional sign
/// followed by digits, accumulated the same way as the mantissa (so a
/// fractional exponent such as `1e2.5` is accepted). At least one digit
/// must be present.
fn scan_exponent(chars: &mut Peekable<Chars<'_>>) -> Result<f64, LexError> {
    let mut sign = 1.0_f64;
    match chars.peek() {
        Some('-') => {
            sign = -1.0;
            chars.next();
        },
        Some('+') => {
            chars.next();
        },
        _ => {},
    }

    let mut exponent = 0.0_f64;
    let mut divider = 0.1_f64;
    let mut dot_seen = false;
    let mut digits = 0_u32;

    for c in chars {
        if c == '.' {
            dot_seen = true;
        } else {
            digits += 1;
            let digit = f64::from(c as u8 - b'0');
            if dot_seen {
                exponent += digit * divider;
                divider /= 10.0;
            } else {
                exponent = exponent * 10.0 + digit;
            }
        }
    }

    if digits == 0 {
        return Err(LexError::InvalidExponent);
    }

    Ok(sign * exponent)
}

/// Resolves an identifier slice against the function and constant tables.
fn resolve_identifier(lex: &logos::Lexer<RawToken>) -> Result<Identifier, LexError> {
    let name = lex.slice().to_ascii_lowercase();

    let identifier = match name.as_str() {
        "abs" => Identifier::Function(Function::Abs),
        "acos" => Identifier::Function(Function::Acos),
        "asin" => Identifier::Function(Function::Asin),
        "atan" => Identifier::Function(Function::Atan),
        "cos" => Identifier::Function(Function::Cos),
        "cosh" => Identifier::Function(Function::Cosh),
        "exp" => Identifier::Function(Function::Exp),
        "ln" => Identifier::Function(Function::Ln),
        "log" => Identifier::Function(Function::Log),
        "round" => Identifier::Function(Function::Round),
        "sin" => Identifier::Function(Function::Sin),
        "sinh" => Identifier::Function(Function::Sinh),
        "sqrt" => Identifier::Function(Function::Sqrt),
        "tan" => Identifier::Function(Function::Tan),
        "tanh" => Identifier::Function(Function::Tanh),
        "trunc" => Identifier::Function(Function::Trunc),
        "neg" => Identifier::Function(Function::Neg),
        "e" => Identifier::Constant(Constant::E),
        "pi" => Identifier::Constant(Constant::Pi),
        _ => return Err(LexError::UnknownFunctionOrConstant),
    };

    Ok(identifier)
}
