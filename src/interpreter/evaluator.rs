/// Core execution logic and context management.
///
/// Contains the evaluation context, the line-by-line driver and the
/// diagnostics sink.
pub mod core;

/// Statement execution.
///
/// Implements declarations, `purr` output, bare calls and `if`/`else`
/// control flow.
pub mod statement;

/// Text-interpolation mode.
///
/// Evaluates `+`-concatenations of literals, variables, calls and `endl`.
pub mod text;

/// Numeric mode.
///
/// Evaluates arithmetic expression trees, resolving variables and nested
/// function calls.
pub mod numeric;

/// Condition mode.
///
/// Evaluates the conditions of `if` statements and boolean initializers.
pub mod condition;

/// Function evaluation.
///
/// Handles argument evaluation, binding, body execution and return values of
/// user-defined functions.
pub mod function;
