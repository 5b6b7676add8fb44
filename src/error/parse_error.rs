#[derive(Debug)]
/// Represents all errors that can occur during lexing.
pub enum ParseError {
    /// Found a character that does not belong to any token rule.
    IllegalCharacter {
        /// The offending character, exactly as it appeared in the source.
        character: String,
        /// The 0-based line index where the character occurred.
        line:      usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IllegalCharacter { character, line } => {
                write!(f, "Error on line {line}: Illegal character '{character}'.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
