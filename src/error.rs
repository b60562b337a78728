/// Fatal errors.
///
/// Conditions that abort the script: an unclosed block, an invalid or
/// unreadable script path, or a failure writing to the output stream.
pub mod fatal_error;
/// Parsing errors.
///
/// Defines all error types that can occur while lexing a line or parsing an
/// expression. Parse errors are recoverable: they are reported and the
/// offending construct is skipped.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all recoverable diagnostics raised during execution, such as
/// undefined variables, unknown functions, type mismatches and unrecognized
/// commands.
pub mod runtime_error;

pub use fatal_error::FatalError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
