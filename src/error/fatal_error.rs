use thiserror::Error;

/// Represents all errors that stop a script from running to completion.
#[derive(Debug, Error)]
pub enum FatalError {
    /// A function or conditional block was opened but never closed.
    #[error("Error on line {line}: {construct} block is missing its closing '}}'.")]
    UnterminatedBlock {
        /// The kind of block (`function`, `if`, `else`).
        construct: &'static str,
        /// The source line where the block was opened.
        line:      usize,
    },
    /// The script path does not end in a recognized extension.
    #[error("Error: Only .cat or .catlang files can be interpreted by CatLang (got '{path}').")]
    InvalidExtension {
        /// The rejected path.
        path: String,
    },
    /// The script file could not be opened or read.
    #[error("Could not open file: {path} ({source})")]
    UnreadableScript {
        /// The path that failed to open.
        path:   String,
        /// The underlying I/O failure.
        source: std::io::Error,
    },
    /// Writing script output failed.
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}
