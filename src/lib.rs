//! # shriek
//!
//! shriek is a tiny scripting language interpreter written in Rust.
//! A script is a sequence of statements, each terminated by a bang (`!`),
//! that declare string or number variables and print values.

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

use crate::interpreter::{evaluator::Context, lexer::tokenize_lines, parser::parse_line};

/// Defines the structure of parsed statements.
///
/// This module declares the `Statement` enum and related types that
/// represent a recognized line as a structured record. Statements are built
/// by the parser and executed by the evaluator.
///
/// # Responsibilities
/// - Defines the statement records for both statement forms.
/// - Attaches the source line number to every statement for error
///   reporting.
pub mod ast;
/// Provides unified error types for lexing and evaluation.
///
/// This module defines all errors that can be raised while running a
/// script. It standardizes error reporting and carries detailed
/// information about failures, including error kinds, descriptions, and
/// source locations for debugging and user feedback.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, evaluator).
/// - Attaches line numbers and detailed messages for context.
/// - Supports integration with standard error handling traits and
///   reporting utilities.
pub mod error;
/// Orchestrates the entire process of script execution.
///
/// This module ties together lexing, statement parsing, evaluation, value
/// representations, and error handling to provide a complete runtime for
/// script execution. It exposes the components that the crate-level entry
/// points drive.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, and evaluator.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Runs a script and hands every produced output line to `emit`.
///
/// The whole input is tokenized before any line executes. Lines are then
/// processed strictly in order: a line that matches no statement shape is
/// skipped, and each print statement's text reaches `emit` before the next
/// line runs.
fn run_with(source: &str, emit: &mut dyn FnMut(&str)) -> Result<(), Box<dyn std::error::Error>> {
    let lines = tokenize_lines(source)?;
    let mut context = Context::new();

    for line in &lines {
        let Some(statement) = parse_line(line) else {
            continue;
        };
        if let Some(text) = context.eval_statement(&statement)? {
            emit(&text);
        }
    }

    Ok(())
}

/// Runs a script, printing each output line to standard output.
///
/// Output is emitted immediately as each print statement executes, so a
/// script that fails partway through still prints everything that ran
/// before the failure. If execution succeeds, this returns `Ok(())`;
/// otherwise, it returns an error with details about the failure.
///
/// # Errors
/// Returns an error if the script contains an illegal character, prints an
/// undeclared variable, or prints a number too large to represent.
///
/// # Examples
/// ```
/// use shriek::get_result;
///
/// // A declaration followed by a print: no error should occur.
/// let source = "var x = 123!print(x)!";
/// let res = get_result(source);
/// assert!(res.is_ok());
///
/// // Example with an intentional error (unknown variable).
/// let source = "print(y)!"; // 'y' is not declared
/// let res = get_result(source);
/// assert!(res.is_err());
/// ```
pub fn get_result(source: &str) -> Result<(), Box<dyn std::error::Error>> {
    run_with(source, &mut |text| println!("{text}"))
}

/// Runs a script and returns the output lines instead of printing them.
///
/// Each element is the text one executed print statement produced, in
/// program order.
///
/// # Errors
/// Fails for exactly the same scripts as [`get_result`].
///
/// # Examples
/// ```
/// use shriek::get_output;
///
/// let lines = get_output("var greeting = 'hi'!print(greeting)!").unwrap();
///
/// assert_eq!(lines, vec!["hi"]);
/// ```
pub fn get_output(source: &str) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    let mut lines = Vec::new();
    run_with(source, &mut |text| lines.push(text.to_string()))?;

    Ok(lines)
}
