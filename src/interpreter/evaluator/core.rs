use std::io::Write;

use crate::{
    ast::Statement,
    error::{FatalError, RuntimeError},
    interpreter::{
        environment::{Environment, Function},
        parser::{block::collect_block, statement::parse_statement},
        source::{LineCursor, SourceLine},
        value::core::Value,
    },
};

/// Result type used by the evaluator.
///
/// Only fatal conditions travel through the `Err` side; recoverable problems
/// are reported to the diagnostics stream and replaced by fallback values.
pub type ExecResult<T> = Result<T, FatalError>;

/// How execution continues after a line.
#[derive(Debug, Clone, PartialEq)]
pub enum Flow {
    /// Carry on with the next line.
    Continue,
    /// A `return` ended the enclosing function with this value.
    Return(Value),
}

/// Stores the runtime evaluation context.
///
/// The context owns nothing but the two output streams: script output from
/// `purr` statements goes to `out`, recoverable diagnostics to
/// `diagnostics`. Variables and functions live in an [`Environment`] that is
/// passed explicitly to every entry point, by mutable reference for blocks
/// that share their enclosing scope and by value (cloned) for function calls.
pub struct Context<'io> {
    out:         &'io mut dyn Write,
    diagnostics: &'io mut dyn Write,
}

impl<'io> Context<'io> {
    /// Creates a context writing to the given streams.
    #[must_use]
    pub fn new(out: &'io mut dyn Write, diagnostics: &'io mut dyn Write) -> Self {
        Self { out, diagnostics }
    }

    /// Executes lines from `cursor` until it is exhausted or a `return` ends
    /// the enclosing function.
    ///
    /// # Parameters
    /// - `cursor`: Supplies the lines to execute.
    /// - `env`: The scope the lines run in.
    /// - `frame`: The function being executed, or `None` at top level.
    ///
    /// # Returns
    /// [`Flow::Return`] if a `return` statement ran, otherwise
    /// [`Flow::Continue`].
    pub fn execute_lines(&mut self,
                         cursor: &mut LineCursor,
                         env: &mut Environment,
                         frame: Option<&Function>)
                         -> ExecResult<Flow> {
        while let Some(line) = cursor.next_line() {
            if let Flow::Return(value) = self.execute_line(&line, cursor, env, frame)? {
                return Ok(Flow::Return(value));
            }
        }
        Ok(Flow::Continue)
    }

    /// Recognizes and executes a single line.
    ///
    /// Block-opening lines consume the rest of their block from `cursor`.
    pub fn execute_line(&mut self,
                        line: &SourceLine,
                        cursor: &mut LineCursor,
                        env: &mut Environment,
                        frame: Option<&Function>)
                        -> ExecResult<Flow> {
        let statement = match parse_statement(line) {
            Ok(statement) => statement,
            Err(e) => {
                self.report(e);
                return Ok(Flow::Continue);
            },
        };
        tracing::trace!(line = line.number, text = %line.text, "dispatch");

        match statement {
            Statement::FunctionDefinition { header, body_start } => {
                let body = collect_block(line, &body_start, "function", cursor)?;
                tracing::debug!(name = %header.name,
                                return_kind = %header.return_kind,
                                params = header.params.len(),
                                line = line.number,
                                "defined function");
                env.define_function(Function::new(header, body, line.number));
            },
            Statement::CallDeclaration { kind, name, call } => {
                self.declare_from_call(kind, &name, &call, env)?;
            },
            Statement::Print(expression) => self.print(&expression, env)?,
            Statement::Declaration { kind, name, value } => self.declare(kind, &name, &value, env)?,
            Statement::Call(call) => self.call_statement(&call, env)?,
            Statement::If { condition, body_start } => {
                return self.execute_if(line, &condition, &body_start, cursor, env, frame);
            },
            Statement::Else { body_start } => {
                self.report(RuntimeError::ElseWithoutIf { line: line.number });
                collect_block(line, &body_start, "else", cursor)?;
            },
            Statement::Return(value) => match frame {
                Some(function) => {
                    let value = self.resolve_return(function, value.as_ref(), env)?;
                    return Ok(Flow::Return(value));
                },
                None => self.report(RuntimeError::ReturnOutsideFunction { line: line.number }),
            },
            Statement::Unknown => {
                self.report(RuntimeError::UnknownCommand { command: line.text.clone(),
                                                           line:    line.number, });
            },
        }

        Ok(Flow::Continue)
    }

    /// Writes script output.
    pub(crate) fn write_output(&mut self, text: &str) -> ExecResult<()> {
        self.out.write_all(text.as_bytes())?;
        Ok(())
    }

    /// Reports a recoverable error to the diagnostics stream.
    pub(crate) fn report(&mut self, error: impl Into<RuntimeError>) {
        let error = error.into();
        tracing::debug!(%error, "diagnostic");

        if let Err(e) = writeln!(self.diagnostics, "{error}") {
            tracing::warn!(%e, "failed to write diagnostic");
        }
    }

    /// Flushes both streams.
    pub fn flush(&mut self) -> ExecResult<()> {
        self.out.flush()?;
        self.diagnostics.flush()?;
        Ok(())
    }
}
