use std::fmt;

use crate::util::fmt::format_value;

/// Represents one element of a tokenized expression.
///
/// A token sequence is produced once by the tokenizer (or, for postfix
/// operators synthesized during infix conversion, by the parser) and is
/// immutable afterwards. Tokens are small and `Copy`, so sequences are
/// plain `Vec<Token>` values moved between pipeline stages.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Token {
    /// A literal numeric operand, such as `3.14` or `2e10`.
    Value(f64),
    /// An arithmetic operator or punctuation mark.
    Operator(Operator),
    /// A named unary math function, such as `sin` or `sqrt`.
    Function(Function),
    /// A named mathematical constant: `e` or `pi`.
    Constant(Constant),
}

/// Operators recognized by the tokenizer and the parser.
///
/// `Negation` never appears in tokenizer output; the parser emits it when
/// an expression carries a leading minus sign. `LeftParen`, `RightParen`
/// and `Comma` are consumed by the parser and never reach the evaluator
/// through the infix path.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Operator {
    /// `+`
    Addition,
    /// `-`
    Subtraction,
    /// `*`
    Multiplication,
    /// `/`
    Division,
    /// `%`
    Modulus,
    /// Unary arithmetic negation, synthesized by the parser.
    Negation,
    /// `^`
    Exponentiation,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `,`
    Comma,
}

/// The unary math functions understood by the calculator.
///
/// Every function pops exactly one operand off the evaluation stack and
/// pushes one result.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Function {
    /// Absolute value.
    Abs,
    /// Arc cosine.
    Acos,
    /// Arc sine.
    Asin,
    /// Arc tangent.
    Atan,
    /// Cosine.
    Cos,
    /// Hyperbolic cosine.
    Cosh,
    /// Natural exponential.
    Exp,
    /// Natural logarithm.
    Ln,
    /// Base-10 logarithm.
    Log,
    /// Round half away from zero.
    Round,
    /// Sine.
    Sin,
    /// Hyperbolic sine.
    Sinh,
    /// Square root.
    Sqrt,
    /// Tangent.
    Tan,
    /// Hyperbolic tangent.
    Tanh,
    /// Truncate toward zero.
    Trunc,
    /// Negation as a named function.
    Neg,
}

/// The mathematical constants understood by the calculator.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Constant {
    /// Euler's number.
    E,
    /// Archimedes' constant.
    Pi,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => f.write_str(&format_value(*value)),
            Self::Operator(operator) => write!(f, "{operator}"),
            Self::Function(function) => write!(f, "{function}"),
            Self::Constant(constant) => write!(f, "{constant}"),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Addition => "+",
            Self::Subtraction => "-",
            Self::Multiplication => "*",
            Self::Division => "/",
            Self::Modulus => "%",
            // Negation has no source spelling of its own; `neg` keeps the
            // rendered sequence tokenizable and evaluates identically.
            Self::Negation => "neg",
            Self::Exponentiation => "^",
            Self::LeftParen => "(",
            Self::RightParen => ")",
            Self::Comma => ",",
        };
        f.write_str(symbol)
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Abs => "abs",
            Self::Acos => "acos",
            Self::Asin => "asin",
            Self::Atan => "atan",
            Self::Cos => "cos",
            Self::Cosh => "cosh",
            Self::Exp => "exp",
            Self::Ln => "ln",
            Self::Log => "log",
            Self::Round => "round",
            Self::Sin => "sin",
            Self::Sinh => "sinh",
            Self::Sqrt => "sqrt",
            Self::Tan => "tan",
            Self::Tanh => "tanh",
            Self::Trunc => "trunc",
            Self::Neg => "neg",
        };
        f.write_str(name)
    }
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::E => "e",
            Self::Pi => "pi",
        };
        f.write_str(name)
    }
}
