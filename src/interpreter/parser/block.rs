use crate::{
    error::FatalError,
    interpreter::source::{LineCursor, SourceLine},
};

/// Collects the body of a brace-delimited block.
///
/// Nesting depth starts at 1 for the opening brace of the header line and is
/// adjusted by every `{` and `}` outside of quoted text on the following
/// lines. The block ends at the brace that brings the depth back to zero:
///
/// - text before that brace on the closing line becomes the last body line,
/// - text after it is pushed back onto the cursor, so a closing line such as
///   `} else {` continues with the `else` header.
///
/// # Parameters
/// - `opening`: The header line, used for error reporting.
/// - `body_start`: Text following the opening brace on the header line; it
///   is scanned first, which allows one-line bodies.
/// - `construct`: Name of the block kind for error messages.
/// - `cursor`: Supplies the lines after the header.
///
/// # Returns
/// The body lines, in order.
///
/// # Errors
/// Returns [`FatalError::UnterminatedBlock`] if the input ends first.
///
/// # Example
/// ```
/// use catlang::interpreter::{
///     parser::block::collect_block,
///     source::{LineCursor, clean_lines},
/// };
///
/// let lines = clean_lines("void f() {\nif (x) {\npurr ~> \"a\";\n}\n}\npurr ~> \"after\";");
/// let mut cursor = LineCursor::new(&lines[1..]);
///
/// let body = collect_block(&lines[0], "", "function", &mut cursor).unwrap();
///
/// assert_eq!(body.len(), 3);
/// assert_eq!(cursor.next_line().unwrap().text, "purr ~> \"after\";");
/// ```
pub fn collect_block(opening: &SourceLine,
                     body_start: &str,
                     construct: &'static str,
                     cursor: &mut LineCursor)
                     -> Result<Vec<SourceLine>, FatalError> {
    let mut body = Vec::new();
    let mut depth = 1usize;

    let first = SourceLine::new(opening.number, body_start);
    let mut next = (!first.text.is_empty()).then_some(first);

    loop {
        let Some(line) = next.take().or_else(|| cursor.next_line()) else {
            return Err(FatalError::UnterminatedBlock { construct,
                                                       line: opening.number });
        };

        if let Some(close) = find_block_end(&line.text, &mut depth) {
            let head = SourceLine::new(line.number, &line.text[..close]);
            let tail = SourceLine::new(line.number, &line.text[close + 1..]);
            if !head.text.is_empty() {
                body.push(head);
            }
            if !tail.text.is_empty() {
                cursor.push_front(tail);
            }
            tracing::trace!(construct, line = opening.number, lines = body.len(), "collected block");
            return Ok(body);
        }

        body.push(line);
    }
}

/// Scans one line, updating the nesting depth.
///
/// Returns the byte index of the `}` that closes the block, if it is on this
/// line. Braces inside quoted text are ignored.
fn find_block_end(text: &str, depth: &mut usize) -> Option<usize> {
    let mut in_quotes = false;

    for (index, c) in text.char_indices() {
        match c {
            '"' => in_quotes = !in_quotes,
            '{' if !in_quotes => *depth += 1,
            '}' if !in_quotes => {
                *depth -= 1;
                if *depth == 0 {
                    return Some(index);
                }
            },
            _ => {},
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::source::clean_lines;

    fn texts(lines: &[SourceLine]) -> Vec<&str> {
        lines.iter().map(|l| l.text.as_str()).collect()
    }

    #[test]
    fn one_line_body() {
        let lines = clean_lines("num add(num a, num b) { return a + b; }");
        let mut cursor = LineCursor::new(&[]);

        let body = collect_block(&lines[0], "return a + b; }", "function", &mut cursor).unwrap();

        assert_eq!(texts(&body), vec!["return a + b;"]);
        assert!(cursor.next_line().is_none());
    }

    #[test]
    fn closing_line_tail_is_pushed_back() {
        let lines = clean_lines("if (x) {\npurr ~> \"yes\";\n} else {\npurr ~> \"no\";\n}");
        let mut cursor = LineCursor::new(&lines[1..]);

        let body = collect_block(&lines[0], "", "if", &mut cursor).unwrap();

        assert_eq!(texts(&body), vec!["purr ~> \"yes\";"]);
        assert_eq!(cursor.next_line().unwrap().text, "else {");
    }

    #[test]
    fn braces_in_text_do_not_count() {
        let lines = clean_lines("void f() {\npurr ~> \"}\";\n}");
        let mut cursor = LineCursor::new(&lines[1..]);

        let body = collect_block(&lines[0], "", "function", &mut cursor).unwrap();

        assert_eq!(texts(&body), vec!["purr ~> \"}\";"]);
    }

    #[test]
    fn missing_closer_is_fatal() {
        let lines = clean_lines("void f() {\npurr ~> \"a\";");
        let mut cursor = LineCursor::new(&lines[1..]);

        let err = collect_block(&lines[0], "", "function", &mut cursor).unwrap_err();

        assert!(matches!(err, FatalError::UnterminatedBlock { construct: "function", line: 1 }));
    }
}
