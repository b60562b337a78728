//! # catlang
//!
//! catlang is an interpreter for CatLang, a small line-oriented scripting
//! language with text, number and boolean variables, `purr` output
//! statements, `if`/`else` conditionals and user-defined functions.
//!
//! Scripts are executed line by line; there is no separate compile phase.

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

use std::{fs, io::Write, path::Path};

use crate::{
    error::FatalError,
    interpreter::{
        environment::Environment,
        evaluator::core::Context,
        source::{LineCursor, clean_lines},
    },
};

/// Defines the structure of recognized statements and parsed expressions.
///
/// This module declares the `Statement` enum produced by the statement
/// recognizer for each cleaned line, and the `Expr` tree built by the numeric
/// expression parser.
///
/// # Responsibilities
/// - Defines the statement forms a CatLang line can take.
/// - Defines expression nodes, operators and declared kinds.
pub mod ast;
/// Provides unified error types for parsing and execution.
///
/// Errors come in two tiers. Fatal errors abort the script, recoverable
/// errors are reported to the diagnostics stream and execution continues with
/// the next line.
///
/// # Responsibilities
/// - Defines fatal, runtime and parse error enums.
/// - Attaches line numbers and detailed messages for user feedback.
pub mod error;
/// Orchestrates the entire process of script execution.
///
/// This module ties together comment stripping, lexing, statement
/// recognition, block collection, expression evaluation and function calls.
///
/// # Responsibilities
/// - Coordinates all core components.
/// - Provides the evaluation context used by [`run_source`].
pub mod interpreter;
/// General utilities for number parsing and formatting.
///
/// # Responsibilities
/// - Render numbers the way CatLang prints them.
/// - Parse numeric text leniently.
pub mod util;

/// File extensions accepted for CatLang scripts.
pub const SCRIPT_EXTENSIONS: &[&str] = &["cat", "catlang"];

/// Executes a CatLang script held in memory.
///
/// Script output is written to `out` and recoverable diagnostics to `err`.
/// Execution stops early only for fatal conditions such as an unclosed block.
///
/// # Errors
/// Returns a [`FatalError`] if a block is never closed or if writing to the
/// output stream fails.
///
/// # Examples
/// ```
/// use catlang::run_source;
///
/// let source = "str greeting ~> \"Hi\";\npurr ~> greeting;";
/// let mut out = Vec::new();
/// let mut err = Vec::new();
///
/// run_source(source, &mut out, &mut err).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "Hi");
/// assert!(err.is_empty());
/// ```
pub fn run_source(source: &str, out: &mut dyn Write, err: &mut dyn Write) -> Result<(), FatalError> {
    let lines = clean_lines(source);
    tracing::debug!(lines = lines.len(), "running script");

    let mut context = Context::new(out, err);
    let mut environment = Environment::new();
    let mut cursor = LineCursor::new(&lines);

    context.execute_lines(&mut cursor, &mut environment, None)?;
    context.flush()
}

/// Reads a CatLang script from disk and executes it.
///
/// The path must carry one of the [`SCRIPT_EXTENSIONS`].
///
/// # Errors
/// Returns a [`FatalError`] if the extension is not recognized, the file
/// cannot be read, or execution fails fatally.
pub fn run_file(path: &Path, out: &mut dyn Write, err: &mut dyn Write) -> Result<(), FatalError> {
    validate_extension(path)?;

    let source = fs::read_to_string(path).map_err(|source| {
                                             FatalError::UnreadableScript { path: path.display()
                                                                                      .to_string(),
                                                                            source }
                                         })?;

    run_source(&source, out, err)
}

/// Checks that a script path ends in a recognized extension.
///
/// # Errors
/// Returns [`FatalError::InvalidExtension`] when the extension is missing or
/// not one of [`SCRIPT_EXTENSIONS`].
///
/// # Examples
/// ```
/// use std::path::Path;
///
/// use catlang::validate_extension;
///
/// assert!(validate_extension(Path::new("hello.cat")).is_ok());
/// assert!(validate_extension(Path::new("hello.catlang")).is_ok());
/// assert!(validate_extension(Path::new("hello.txt")).is_err());
/// assert!(validate_extension(Path::new("hello")).is_err());
/// ```
pub fn validate_extension(path: &Path) -> Result<(), FatalError> {
    let valid = path.extension()
                    .and_then(|ext| ext.to_str())
                    .is_some_and(|ext| SCRIPT_EXTENSIONS.contains(&ext));

    if valid {
        Ok(())
    } else {
        Err(FatalError::InvalidExtension { path: path.display().to_string() })
    }
}
