//! # rcalc
//!
//! rcalc is a command-line calculator written in Rust. It evaluates
//! arithmetic expressions given in ordinary infix notation or in Reverse
//! Polish (postfix) notation, with a set of unary math functions and the
//! constants `e` and `pi`.
//!
//! Evaluation is a three-stage pipeline: the tokenizer turns text into a
//! token sequence, the parser converts an infix sequence into postfix
//! order, and the stack evaluator reduces a postfix sequence to one
//! `f64`. Postfix input skips the middle stage entirely.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::error::Error;

/// Provides the unified error type for the whole pipeline.
///
/// This module defines every failure that tokenizing, parsing, or
/// evaluating an expression can raise, with human-readable messages.
/// The first error aborts the pipeline and is surfaced to the caller
/// unchanged.
pub mod error;
/// Evaluates postfix token sequences.
///
/// This module implements the stack machine that reduces a postfix
/// sequence to a single value: one pass, one operand stack, no
/// backtracking.
///
/// # Responsibilities
/// - Applies binary operators, unary negation, and math functions with
///   the operand order that right-associative chains depend on.
/// - Enforces stack discipline (underflow, leftover values).
pub mod evaluator;
/// Converts infix token sequences into postfix order.
///
/// This module implements the recursive-descent grammar that fixes
/// operator precedence and associativity. Each precedence level is one
/// function that parses its operands at the next tighter level before
/// consuming same-level operators.
///
/// # Responsibilities
/// - Emits operands before their operators (postfix construction).
/// - Resolves unary signs, function calls, and parenthesized groups.
/// - Rejects malformed input with a precise error kind.
pub mod parser;
/// Defines the token shapes shared by all pipeline stages.
///
/// This module declares the `Token` sum type together with its operator,
/// function, and constant enums, and renders every token back to
/// tokenizable text via `Display`.
pub mod token;
/// Turns expression text into token sequences.
///
/// This module drives a generated lexer over the input, scanning numeric
/// literals with explicit digit accumulation and resolving identifiers
/// against the fixed function and constant tables.
pub mod tokenizer;
/// General utilities.
///
/// Currently numeric-to-text formatting with capped significant digits.
pub mod util;

/// The notation an expression is written in.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Notation {
    /// Ordinary notation with operators between their operands: `1 + 2`.
    Infix,
    /// Reverse Polish Notation with operators after their operands:
    /// `1 2 +`. Parentheses and commas are illegal in this mode.
    Postfix,
}

/// Evaluates an expression and returns the resulting value.
///
/// This is the main entry point. The expression is tokenized; infix
/// input is converted to postfix order; the postfix sequence is then
/// reduced on the operand stack. Each stage owns the sequence it
/// produces, and the first error aborts the whole computation.
///
/// # Parameters
/// - `expression`: The expression text.
/// - `notation`: Whether the text is infix or postfix.
///
/// # Returns
/// The computed value.
///
/// # Errors
/// Returns an [`Error`] if tokenizing, parsing, or evaluation fails.
///
/// # Examples
/// ```
/// use rcalc::{Notation, evaluate};
///
/// // Multiplication binds tighter than addition.
/// let result = evaluate("2 + 3 * 4", Notation::Infix);
/// assert_eq!(result.unwrap(), 14.0);
///
/// // The same expression in Reverse Polish Notation.
/// let result = evaluate("2 3 4 * +", Notation::Postfix);
/// assert_eq!(result.unwrap(), 14.0);
///
/// // Exponentiation is right-associative.
/// let result = evaluate("2^3^2", Notation::Infix);
/// assert_eq!(result.unwrap(), 512.0);
/// ```
pub fn evaluate(expression: &str, notation: Notation) -> Result<f64, Error> {
    let tokens = tokenizer::tokenize(expression)?;

    let postfix = match notation {
        Notation::Infix => parser::convert_infix_to_postfix(&tokens)?,
        Notation::Postfix => tokens,
    };

    evaluator::stack_calculate(&postfix)
}
