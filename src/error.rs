/// Parsing errors.
///
/// Defines all error types that can occur while turning source text into
/// tokens. Parse errors are fatal: the run aborts before any statement
/// executes.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during execution, such as
/// printing a variable that was never declared.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
