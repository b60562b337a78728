/// A cleaned line of script text together with its position in the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    /// 1-based line number in the original script.
    pub number: usize,
    /// The line with comments removed and surrounding whitespace trimmed.
    pub text:   String,
}

impl SourceLine {
    /// Creates a line, trimming surrounding whitespace.
    #[must_use]
    pub fn new(number: usize, text: &str) -> Self {
        Self { number,
               text: text.trim().to_string() }
    }
}

/// Strips comments from raw lines, one line at a time.
///
/// The stripper remembers whether a `/* ... */` comment is still open at the
/// end of a line, so block comments may span any number of lines. Comment
/// markers inside a `"..."` literal are ordinary text.
#[derive(Debug, Default)]
pub struct CommentStripper {
    in_block_comment: bool,
}

impl CommentStripper {
    /// Creates a stripper positioned outside of any comment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the code portion of a raw line.
    ///
    /// # Example
    /// ```
    /// use catlang::interpreter::source::CommentStripper;
    ///
    /// let mut stripper = CommentStripper::new();
    /// assert_eq!(stripper.strip("num x ~> 1; // one"), "num x ~> 1; ");
    /// assert_eq!(stripper.strip("purr ~> x; /* start"), "purr ~> x; ");
    /// assert_eq!(stripper.strip("still a comment"), "");
    /// assert_eq!(stripper.strip("end */ purr ~> \"//\";"), " purr ~> \"//\";");
    /// ```
    pub fn strip(&mut self, line: &str) -> String {
        let mut code = String::with_capacity(line.len());
        let mut in_quotes = false;
        let mut chars = line.chars().peekable();

        while let Some(c) = chars.next() {
            if self.in_block_comment {
                if c == '*' && chars.peek() == Some(&'/') {
                    chars.next();
                    self.in_block_comment = false;
                }
                continue;
            }

            match c {
                '"' => {
                    in_quotes = !in_quotes;
                    code.push(c);
                },
                '/' if !in_quotes && chars.peek() == Some(&'/') => break,
                '/' if !in_quotes && chars.peek() == Some(&'*') => {
                    chars.next();
                    self.in_block_comment = true;
                },
                _ => code.push(c),
            }
        }

        code
    }
}

/// Produces the cleaned logical lines of a script.
///
/// Comments are removed and blank or whitespace-only lines are dropped. Each
/// surviving line keeps its original line number for diagnostics.
///
/// # Example
/// ```
/// use catlang::interpreter::source::clean_lines;
///
/// let lines = clean_lines("/* header\n   comment */\n\npurr ~> \"hi\"; // greet\n");
///
/// assert_eq!(lines.len(), 1);
/// assert_eq!(lines[0].number, 4);
/// assert_eq!(lines[0].text, "purr ~> \"hi\";");
/// ```
#[must_use]
pub fn clean_lines(source: &str) -> Vec<SourceLine> {
    let mut stripper = CommentStripper::new();

    source.lines()
          .enumerate()
          .filter_map(|(index, raw)| {
              let code = stripper.strip(raw);
              (!code.trim().is_empty()).then(|| SourceLine::new(index + 1, &code))
          })
          .collect()
}

/// A forward-only reader over cleaned lines.
///
/// Besides the borrowed lines, the cursor can hold lines pushed back by the
/// block collector, such as the text following a closing brace on the same
/// line (`} else {`). Pushed lines are returned before the underlying ones.
#[derive(Debug)]
pub struct LineCursor<'a> {
    lines:   &'a [SourceLine],
    pos:     usize,
    pending: Vec<SourceLine>,
}

impl<'a> LineCursor<'a> {
    /// Creates a cursor at the first line.
    #[must_use]
    pub const fn new(lines: &'a [SourceLine]) -> Self {
        Self { lines,
               pos: 0,
               pending: Vec::new() }
    }

    /// Returns the next line, if any.
    pub fn next_line(&mut self) -> Option<SourceLine> {
        if let Some(line) = self.pending.pop() {
            return Some(line);
        }
        let line = self.lines.get(self.pos)?.clone();
        self.pos += 1;
        Some(line)
    }

    /// Returns the next line without consuming it.
    #[must_use]
    pub fn peek_line(&self) -> Option<&SourceLine> {
        self.pending.last().or_else(|| self.lines.get(self.pos))
    }

    /// Makes `line` the next line returned.
    pub fn push_front(&mut self, line: SourceLine) {
        self.pending.push(line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_block_comment_spanning_three_lines() {
        let source = "purr ~> \"a\";\n/* one\ntwo\nthree */\npurr ~> \"b\";";
        let texts: Vec<_> = clean_lines(source).into_iter().map(|l| l.text).collect();

        assert_eq!(texts, vec!["purr ~> \"a\";", "purr ~> \"b\";"]);
    }

    #[test]
    fn keeps_code_after_block_comment_close_on_same_line() {
        let lines = clean_lines("/* a\nb */ num x ~> 2;");

        assert_eq!(lines, vec![SourceLine::new(2, "num x ~> 2;")]);
    }

    #[test]
    fn inline_block_comment_is_removed() {
        let lines = clean_lines("num /* the */ x ~> 2;");

        assert_eq!(lines[0].text, "num  x ~> 2;");
    }

    #[test]
    fn comment_markers_inside_quotes_are_text() {
        let lines = clean_lines("purr ~> \"http://cats /* not */\";");

        assert_eq!(lines[0].text, "purr ~> \"http://cats /* not */\";");
    }

    #[test]
    fn cursor_returns_pushed_lines_first() {
        let lines = clean_lines("a\nb");
        let mut cursor = LineCursor::new(&lines);

        assert_eq!(cursor.next_line().unwrap().text, "a");
        cursor.push_front(SourceLine::new(1, "pushed"));
        assert_eq!(cursor.peek_line().unwrap().text, "pushed");
        assert_eq!(cursor.next_line().unwrap().text, "pushed");
        assert_eq!(cursor.next_line().unwrap().text, "b");
        assert!(cursor.next_line().is_none());
    }
}
