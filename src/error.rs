use crate::token::Operator;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while tokenizing, parsing, or
/// evaluating an expression.
///
/// The first error encountered aborts the whole pipeline; no stage
/// produces partial results. Errors carry whatever context the failing
/// stage had at hand (the offending character, the unresolved identifier,
/// the trailing token) so the caller can report them without re-scanning
/// the input.
pub enum Error {
    /// The tokenizer met a character that starts no valid token.
    UnexpectedCharacter {
        /// The character encountered.
        character: char,
    },
    /// A numeric literal had an `e`/`E` exponent marker with no digits.
    InvalidExponent,
    /// An identifier resolved to neither a function nor a constant.
    UnknownFunctionOrConstant {
        /// The identifier as written in the expression.
        name: String,
    },
    /// The evaluator needed an operand but the stack was empty.
    StackUnderflow,
    /// Evaluation finished with more than one value left on the stack.
    StackNotEmpty,
    /// An operator with no postfix meaning reached the evaluator.
    /// Only possible with caller-supplied postfix input, where
    /// parentheses and commas are illegal.
    UnhandledOperator {
        /// The operator encountered.
        operator: Operator,
    },
    /// The expression ended where the grammar required another token.
    UnexpectedEndOfInput,
    /// Tokens remained after the top-level expression was fully parsed.
    UnexpectedTextAtEnd {
        /// The first trailing token.
        token: String,
    },
    /// A parenthesized sub-expression was not closed with `)`.
    UnmatchedParenthesis,
    /// A primary position held a token that starts no operand.
    UnexpectedOperator {
        /// The token encountered.
        token: String,
    },
    /// A function name was not followed by `(`.
    MissingLeftParenthesis,
    /// A comma in a function call was followed directly by `)`.
    MissingFunctionArgument,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { character } => {
                write!(f, "Unexpected character '{character}'.")
            },

            Self::InvalidExponent => {
                write!(f, "Invalid exponent: expected at least one digit.")
            },

            Self::UnknownFunctionOrConstant { name } => {
                write!(f, "Unknown function or constant '{name}'.")
            },

            Self::StackUnderflow => {
                write!(f, "Stack underflow: not enough operands.")
            },

            Self::StackNotEmpty => write!(f,
                                          "Stack not empty: values left over after evaluation."),

            Self::UnhandledOperator { operator } => write!(f,
                                                           "Operator '{operator}' cannot be evaluated in postfix form."),

            Self::UnexpectedEndOfInput => write!(f, "Unexpected end of input."),

            Self::UnexpectedTextAtEnd { token } => {
                write!(f, "Unexpected text after expression: {token}.")
            },

            Self::UnmatchedParenthesis => {
                write!(f, "Unmatched parenthesis: expected ')'.")
            },

            Self::UnexpectedOperator { token } => write!(f,
                                                         "Unexpected token '{token}': expected a value, constant, function, or '('."),

            Self::MissingLeftParenthesis => {
                write!(f, "Missing '(' after function name.")
            },

            Self::MissingFunctionArgument => {
                write!(f, "Missing function argument after ','.")
            },
        }
    }
}

impl std::error::Error for Error {}
