//! Source span tracking for error messages

/// A span in the source code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Span {
    /// Start byte offset
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
}

/// Line and column position in source code (1-indexed)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineCol {
    pub line: usize,
    pub col: usize,
}

impl Span {
    /// Create a new span
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Merge two spans into one that covers both
    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// Convert byte offset to line and column (1-indexed)
    pub fn to_line_col(&self, source: &str) -> LineCol {
        offset_to_line_col(source, self.start)
    }

    /// Format span as "line:col"
    pub fn format_position(&self, source: &str) -> String {
        let pos = self.to_line_col(source);
        format!("{}:{}", pos.line, pos.col)
    }

    /// Text of the line the span starts on, without its line terminator
    pub fn line_text<'a>(&self, source: &'a str) -> &'a str {
        let line = self.to_line_col(source).line;
        source.lines().nth(line - 1).unwrap_or("")
    }

    /// Format a diagnostic block pointing at this span:
    ///
    /// ```text
    ///   --> file.arb:2:9
    ///    |
    ///  2 | let x: int = 1 +;
    ///    |                 ^ expected expression
    /// ```
    pub fn format_error_context(
        &self,
        source: &str,
        filename: Option<&str>,
        message: &str,
    ) -> String {
        let pos = self.to_line_col(source);
        let text = self.line_text(source);
        let gutter = " ".repeat(pos.line.to_string().len());

        let width = source
            .get(self.start..self.end)
            .map(|s| s.lines().next().unwrap_or("").chars().count())
            .unwrap_or(0)
            .max(1);
        let marker = format!("{}{}", " ".repeat(pos.col - 1), "^".repeat(width));

        let location = match filename {
            Some(name) => format!("{}:{}:{}", name, pos.line, pos.col),
            None => format!("{}:{}", pos.line, pos.col),
        };

        format!(
            "{gutter}--> {location}\n{gutter} |\n{line} | {text}\n{gutter} | {marker} {message}",
            line = pos.line
        )
    }
}

/// Convert byte offset to line and column (1-indexed)
fn offset_to_line_col(source: &str, offset: usize) -> LineCol {
    let mut line = 1;
    let mut col = 1;

    for (i, ch) in source.char_indices() {
        if i >= offset {
            break;
        }

        if ch == '\n' {
            line += 1;
            col = 1;
        } else {
            col += 1;
        }
    }

    LineCol { line, col }
}
