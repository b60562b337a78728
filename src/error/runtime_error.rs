use thiserror::Error;

use crate::error::ParseError;

/// Represents all recoverable errors raised while executing a script.
///
/// None of these stop execution: they are written to the diagnostics stream
/// and the interpreter substitutes a safe fallback value or skips the line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// Tried to use an undefined variable.
    #[error("Error on line {line}: Undefined variable: {name}")]
    UnknownVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Called an unknown function.
    #[error("Error on line {line}: Undefined function: {name}")]
    UnknownFunction {
        /// The name of the function.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A `num` declaration whose right-hand side is not a valid expression.
    #[error("Error on line {line}: Invalid numeric value for variable: {name}")]
    InvalidNumber {
        /// The name of the variable being declared.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A `bool` declaration whose right-hand side is not a boolean.
    #[error("Error on line {line}: Invalid boolean value for variable: {name}")]
    InvalidBoolean {
        /// The name of the variable being declared.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A function returned a value of a different kind than the declaration
    /// expects.
    #[error("Error on line {line}: Type mismatch for variable {name}: expected {expected}, found {found}")]
    TypeMismatch {
        /// The name of the variable being declared.
        name:     String,
        /// The declared kind.
        expected: &'static str,
        /// The kind actually produced.
        found:    &'static str,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A condition matching none of the recognized forms.
    #[error("Error on line {line}: Invalid condition: {condition}")]
    InvalidCondition {
        /// The condition text.
        condition: String,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// A line matching none of the recognized statement forms.
    #[error("Error on line {line}: Unknown command: {command}")]
    UnknownCommand {
        /// The offending line.
        command: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// A `return` statement outside of any function body.
    #[error("Error on line {line}: 'return' outside of a function.")]
    ReturnOutsideFunction {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An `else` block with no preceding `if`.
    #[error("Error on line {line}: 'else' without a matching 'if'.")]
    ElseWithoutIf {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A syntax error in an expression or token stream.
    #[error(transparent)]
    Parse(#[from] ParseError),
}
