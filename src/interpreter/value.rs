use crate::{error::RuntimeError, interpreter::evaluator::EvalResult};

/// Represents a runtime value in the interpreter.
///
/// Both variants keep the exact text that appeared in the source. Numbers
/// stay unparsed until they are printed, so a declaration on its own never
/// fails.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A string value, stored without its quotes.
    Str(String),
    /// A numeric value, stored as the original digit run.
    Number(String),
}

impl Value {
    /// Renders the value as the text a print statement emits.
    ///
    /// Strings are returned as stored. Numbers are parsed from the stored
    /// digit run and formatted as a decimal integer, so leading zeros are
    /// dropped (`007` prints as `7`).
    ///
    /// # Parameters
    /// - `line`: Source line number for error reporting.
    ///
    /// # Returns
    /// The printable text.
    ///
    /// # Errors
    /// Returns `RuntimeError::LiteralTooLarge` if a numeric digit run does
    /// not fit a 64-bit integer.
    ///
    /// # Example
    /// ```
    /// use shriek::interpreter::value::Value;
    ///
    /// let number = Value::Number("042".to_string());
    ///
    /// assert_eq!(number.render(0).unwrap(), "42");
    /// ```
    pub fn render(&self, line: usize) -> EvalResult<String> {
        match self {
            Self::Str(text) => Ok(text.clone()),
            Self::Number(raw) => {
                let number: i64 = raw.parse()
                                     .map_err(|_| RuntimeError::LiteralTooLarge { line })?;
                Ok(number.to_string())
            },
        }
    }
}
