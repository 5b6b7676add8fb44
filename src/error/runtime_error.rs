#[derive(Debug)]
/// Represents all errors that can occur during execution.
pub enum RuntimeError {
    /// Tried to print an undefined variable.
    UnknownVariable {
        /// The name of the variable.
        name: String,
        /// The 0-based line index where the reference occurred.
        line: usize,
    },
    /// A numeric literal was too large to be represented safely.
    LiteralTooLarge {
        /// The 0-based line index where the value was printed.
        line: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { name, line } => {
                write!(f, "Error on line {line}: Unknown variable '{name}'.")
            },
            Self::LiteralTooLarge { line } => {
                write!(f, "Error on line {line}: Literal is too large.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
