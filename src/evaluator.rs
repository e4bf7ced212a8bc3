use std::f64::consts;

use crate::{
    error::Error,
    token::{Constant, Function, Operator, Token},
};

/// Result type used by the evaluator.
pub type EvalResult<T> = Result<T, Error>;

/// Evaluates a postfix token sequence into a single value.
///
/// One left-to-right pass over the tokens with a single operand stack:
/// values and constants push, binary operators pop two operands (the top
/// of the stack is the *right* operand, which is what makes subtraction,
/// division, modulus, and exponent chains come out correctly), negation
/// and functions pop one. After the last token, exactly one value must
/// remain on the stack.
///
/// Division and modulus perform plain IEEE-754 arithmetic: there is no
/// divide-by-zero check, infinities and NaNs propagate to the result.
///
/// # Parameters
/// - `tokens`: A postfix sequence, from the parser or caller-supplied.
///
/// # Returns
/// The computed value.
///
/// # Errors
/// - `StackUnderflow` when an operand is missing, or when the sequence
///   produces no value at all.
/// - `StackNotEmpty` when values are left over after the final result.
/// - `UnhandledOperator` for parentheses or commas, which have no
///   postfix meaning.
///
/// # Example
/// ```
/// use rcalc::{evaluator::stack_calculate, tokenizer::tokenize};
///
/// let tokens = tokenize("2 3 4 * +").unwrap();
/// assert_eq!(stack_calculate(&tokens).unwrap(), 14.0);
/// ```
pub fn stack_calculate(tokens: &[Token]) -> EvalResult<f64> {
    let mut stack: Vec<f64> = Vec::new();

    for token in tokens {
        match *token {
            Token::Value(value) => stack.push(value),
            Token::Constant(constant) => stack.push(constant_value(constant)),
            Token::Operator(operator) => apply_operator(&mut stack, operator)?,
            Token::Function(function) => apply_function(&mut stack, function)?,
        }
    }

    pop_last(&mut stack)
}

/// Pops the top of the stack.
fn pop(stack: &mut Vec<f64>) -> EvalResult<f64> {
    stack.pop().ok_or(Error::StackUnderflow)
}

/// Pops the final result, checking the stack discipline: an already empty
/// stack is `StackUnderflow`, a stack with values remaining below the
/// result is `StackNotEmpty`.
fn pop_last(stack: &mut Vec<f64>) -> EvalResult<f64> {
    let result = pop(stack)?;
    if !stack.is_empty() {
        return Err(Error::StackNotEmpty);
    }
    Ok(result)
}

/// Returns the IEEE-754 double for a named constant.
const fn constant_value(constant: Constant) -> f64 {
    match constant {
        Constant::E => consts::E,
        Constant::Pi => consts::PI,
    }
}

/// Applies a binary operation to the top two stack values.
///
/// The first pop yields the right operand, the second the left.
fn binary_operation(stack: &mut Vec<f64>, operation: impl Fn(f64, f64) -> f64) -> EvalResult<()> {
    let operand2 = pop(stack)?;
    let operand1 = pop(stack)?;
    stack.push(operation(operand1, operand2));
    Ok(())
}

/// Applies an operator token to the stack.
fn apply_operator(stack: &mut Vec<f64>, operator: Operator) -> EvalResult<()> {
    match operator {
        Operator::Addition => binary_operation(stack, |operand1, operand2| operand1 + operand2),
        Operator::Subtraction => {
            binary_operation(stack, |operand1, operand2| operand1 - operand2)
        },
        Operator::Multiplication => {
            binary_operation(stack, |operand1, operand2| operand1 * operand2)
        },
        Operator::Division => binary_operation(stack, |operand1, operand2| operand1 / operand2),
        Operator::Modulus => binary_operation(stack, |operand1, operand2| operand1 % operand2),
        Operator::Exponentiation => binary_operation(stack, f64::powf),
        Operator::Negation => {
            let operand = pop(stack)?;
            stack.push(-operand);
            Ok(())
        },
        // Reachable only from caller-supplied postfix input.
        Operator::LeftParen | Operator::RightParen | Operator::Comma => {
            Err(Error::UnhandledOperator { operator })
        },
    }
}

/// Applies a unary function token to the top stack value.
fn apply_function(stack: &mut Vec<f64>, function: Function) -> EvalResult<()> {
    let operand = pop(stack)?;
    let result = match function {
        Function::Abs => operand.abs(),
        Function::Acos => operand.acos(),
        Function::Asin => operand.asin(),
        Function::Atan => operand.atan(),
        Function::Cos => operand.cos(),
        Function::Cosh => operand.cosh(),
        Function::Exp => operand.exp(),
        Function::Ln => operand.ln(),
        Function::Log => operand.log10(),
        Function::Round => operand.round(),
        Function::Sin => operand.sin(),
        Function::Sinh => operand.sinh(),
        Function::Sqrt => operand.sqrt(),
        Function::Tan => operand.tan(),
        Function::Tanh => operand.tanh(),
        Function::Trunc => operand.trunc(),
        Function::Neg => -operand,
    };
    stack.push(result);
    Ok(())
}
