/// The evaluator module executes statements and produces output.
///
/// The evaluator walks the parsed statements in line order, manages the
/// variable table, and renders the text each print statement emits. It is
/// the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Executes statements, maintaining the run's variable state.
/// - Resolves variable references at print time.
/// - Reports runtime errors such as printing an undeclared variable.
pub mod evaluator;
/// The lexer module tokenizes source code and groups it into lines.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream
/// of tokens, each corresponding to meaningful language elements such as
/// keywords, identifiers, digit runs, and punctuation. The token stream is
/// split into lines on the `!` statement terminator. This is the first
/// stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into typed tokens.
/// - Seals the tokens between terminators into executable lines.
/// - Reports lexical errors for characters no token rule covers.
pub mod lexer;
/// The parser module turns token lines into statement records.
///
/// The parser matches each line against the fixed statement shapes and
/// builds a structured [`crate::ast::Statement`] for the lines that fit.
/// Lines that match no shape are not statements and are skipped by the
/// run loop.
///
/// # Responsibilities
/// - Matches lines positionally against the declaration and print shapes.
/// - Extracts names, values, and print targets into statement records.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the value type stored in the variable table and
/// the rendering rules that turn a stored value into printed text.
///
/// # Responsibilities
/// - Defines the `Value` enum with its string and number variants.
/// - Renders values for printing, parsing numbers at use-site.
pub mod value;
