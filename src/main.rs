use std::io::Read;

use clap::Parser;
use rcalc::{Notation, evaluate, util::fmt::format_value};

/// rcalc is a simple command-line calculator for expressions in infix or
/// Reverse Polish (postfix) notation.
///
/// Operators: + - * / % ^  Functions: abs, acos, asin, atan, cos, cosh,
/// exp, ln, log, neg, round, sin, sinh, sqrt, tan, tanh, trunc.
/// Constants: e, pi. For infix expressions, function arguments must be
/// given in parentheses. For RPN, parentheses are illegal.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat the expression as Reverse Polish Notation (postfix).
    #[arg(short, long)]
    rpn: bool,

    /// The expression to evaluate; multiple arguments are joined with
    /// spaces. When omitted, the expression is read from standard input.
    expression: Vec<String>,
}

fn main() {
    let args = Args::parse();

    let expression = if args.expression.is_empty() {
        let mut buffer = String::new();
        if let Err(e) = std::io::stdin().read_to_string(&mut buffer) {
            eprintln!("Failed to read an expression from standard input: {e}");
            std::process::exit(1);
        }
        buffer
    } else {
        args.expression.join(" ")
    };

    let notation = if args.rpn { Notation::Postfix } else { Notation::Infix };

    match evaluate(&expression, notation) {
        Ok(result) => println!("{}", format_value(result)),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        },
    }
}
