use std::collections::HashMap;

use crate::{
    ast::{PrintTarget, Statement},
    error::RuntimeError,
    interpreter::value::Value,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state: the table of declared
/// variables. It is created when a run starts, mutated only by that run's
/// sequential statement loop, and dropped when the run ends.
///
/// ## Usage
///
/// `Context` is created once per script and fed every recognized statement
/// in line order through [`Context::eval_statement`].
pub struct Context {
    /// A mapping from variable names to their declared values.
    variables: HashMap<String, Value>,
}

#[allow(clippy::new_without_default)]
impl Context {
    /// Creates a new evaluation context with no declared variables.
    #[must_use]
    pub fn new() -> Self {
        Self { variables: HashMap::new() }
    }

    /// Evaluates a single statement.
    ///
    /// Declarations insert into the variable table; declaring a name that
    /// already exists silently overwrites the previous value. Print
    /// statements produce the text to emit — the caller owns the output
    /// destination, so nothing is written here.
    ///
    /// # Parameters
    /// - `statement`: Statement to evaluate.
    ///
    /// # Returns
    /// `Some(text)` for print statements, `None` for declarations.
    ///
    /// # Errors
    /// Returns `RuntimeError::UnknownVariable` when a print references a
    /// name that has not been declared, and `RuntimeError::LiteralTooLarge`
    /// when a printed number does not fit a 64-bit integer.
    ///
    /// # Example
    /// ```
    /// use shriek::{
    ///     ast::{PrintTarget, Statement},
    ///     interpreter::evaluator::Context,
    /// };
    ///
    /// let mut context = Context::new();
    /// let statement = Statement::Print { target: PrintTarget::Literal("hi".to_string()),
    ///                                    line:   0, };
    ///
    /// let output = context.eval_statement(&statement).unwrap();
    ///
    /// assert_eq!(output, Some("hi".to_string()));
    /// ```
    pub fn eval_statement(&mut self, statement: &Statement) -> EvalResult<Option<String>> {
        match statement {
            Statement::VariableDeclaration { name, value, .. } => {
                self.variables.insert(name.clone(), value.clone());
                Ok(None)
            },
            Statement::Print { target, line } => match target {
                PrintTarget::Literal(text) => Ok(Some(text.clone())),
                PrintTarget::Variable(name) => {
                    let value = self.variables
                                    .get(name)
                                    .ok_or_else(|| RuntimeError::UnknownVariable { name: name.clone(),
                                                                                   line: *line, })?;
                    Ok(Some(value.render(*line)?))
                },
            },
        }
    }
}
