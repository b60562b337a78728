/// The environment module holds variable bindings and the function table.
///
/// The three kind-keyed variable maps and the user-defined functions live in
/// a single `Environment` value. It is cloned for every function call, giving
/// the callee a private snapshot, and borrowed mutably for conditional
/// branches, which share the scope of their enclosing block.
pub mod environment;
/// The evaluator module executes recognized statements and expressions.
///
/// The evaluator dispatches each line, evaluates expressions in text,
/// numeric or condition mode, executes user-defined functions and reports
/// recoverable diagnostics.
///
/// # Responsibilities
/// - Drives statement execution and block control flow.
/// - Evaluates expressions against the current environment.
/// - Reports recoverable errors and substitutes safe fallback values.
pub mod evaluator;
/// The lexer module tokenizes a single cleaned line.
///
/// The lexer produces tokens together with their byte spans so later phases
/// can recover the exact source text of any expression fragment.
pub mod lexer;
/// The parser module recognizes statements and builds expression trees.
///
/// # Responsibilities
/// - Classifies each line into one of the statement forms.
/// - Collects brace-delimited blocks across lines.
/// - Parses numeric expressions with operator precedence.
pub mod parser;
/// The source module turns raw script text into cleaned logical lines.
///
/// Comments (including block comments spanning several lines) and blank
/// lines are removed here, before any other stage sees the text.
pub mod source;
/// The value module defines the runtime values of the language.
pub mod value;
