//! Line-oriented header scanner for Ruby source files.
//!
//! This is not a Ruby parser. It only walks the top of the file far enough to
//! collect the leading comments and find the first line of code:
//! - `#` comment lines become [`Comment`] records
//! - `=begin` / `=end` embedded documents become one comment at the `=begin` line
//! - blank lines are skipped
//! - the first other line is the first code line, unless it is `__END__`
//!   (everything after `__END__` is data, so the file has no code)
//!
//! Content is kept as raw bytes. Ruby files may declare a non-UTF-8 encoding,
//! so lines are decoded lossily for classification while byte offsets always
//! refer to the raw content.

use std::borrow::Cow;

use super::comment::Comment;

const BOM: char = '\u{feff}';

/// One file's content plus the header information the rules need.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: String,
    pub content: Vec<u8>,
    /// Comments before the first code line, in line order.
    pub comments: Vec<Comment>,
    /// 1-based line of the first code construct, `None` for files without code.
    pub first_code_line: Option<usize>,
    /// Byte offset where each line starts (index 0 = line 1).
    line_starts: Vec<usize>,
}

impl SourceFile {
    pub fn parse(path: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        let content = content.into();
        let line_starts = compute_line_starts(&content);
        let mut file = Self {
            path: path.into(),
            content,
            comments: Vec::new(),
            first_code_line: None,
            line_starts,
        };
        let (comments, first_code_line) = scan_header(&file);
        file.comments = comments;
        file.first_code_line = first_code_line;
        file
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Text of a 1-based line without its terminator, `None` when out of range.
    ///
    /// Bytes that are not valid UTF-8 are replaced with U+FFFD.
    pub fn line(&self, number: usize) -> Option<Cow<'_, str>> {
        let index = number.checked_sub(1)?;
        let start = *self.line_starts.get(index)?;
        let end = self
            .line_starts
            .get(index + 1)
            .copied()
            .unwrap_or(self.content.len());
        let bytes = &self.content[start..end];
        let bytes = bytes.strip_suffix(b"\n").unwrap_or(bytes);
        let bytes = bytes.strip_suffix(b"\r").unwrap_or(bytes);
        Some(String::from_utf8_lossy(bytes))
    }

    /// Byte offset of the start of a 1-based line.
    pub fn line_start(&self, number: usize) -> Option<usize> {
        let index = number.checked_sub(1)?;
        self.line_starts.get(index).copied()
    }

    /// Iterate over `(line_number, text)` pairs.
    pub fn lines(&self) -> impl Iterator<Item = (usize, Cow<'_, str>)> {
        (1..=self.line_count()).filter_map(|number| self.line(number).map(|text| (number, text)))
    }
}

fn compute_line_starts(content: &[u8]) -> Vec<usize> {
    if content.is_empty() {
        return Vec::new();
    }
    let mut starts = vec![0];
    starts.extend(
        content
            .iter()
            .enumerate()
            .filter(|&(_, &byte)| byte == b'\n')
            .map(|(idx, _)| idx + 1)
            .filter(|&start| start < content.len()),
    );
    starts
}

fn scan_header(file: &SourceFile) -> (Vec<Comment>, Option<usize>) {
    let mut comments = Vec::new();
    // (start line, accumulated text) of an open `=begin` block
    let mut embedded_doc: Option<(usize, String)> = None;

    for (number, line) in file.lines() {
        let raw: &str = &line;
        let raw = if number == 1 {
            raw.trim_start_matches(BOM)
        } else {
            raw
        };

        if let Some((start, mut text)) = embedded_doc.take() {
            text.push('\n');
            text.push_str(raw.trim_end());
            if is_keyword_line(raw, "=end") {
                comments.push(Comment::new(text, start));
            } else {
                embedded_doc = Some((start, text));
            }
            continue;
        }

        if is_keyword_line(raw, "=begin") {
            embedded_doc = Some((number, raw.trim_end().to_string()));
            continue;
        }

        let trimmed = raw.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed.starts_with('#') {
            comments.push(Comment::new(trimmed, number));
            continue;
        }

        let first_code_line = (raw.trim_end() != "__END__").then_some(number);
        return (comments, first_code_line);
    }

    // Unterminated `=begin` runs to the end of the file.
    if let Some((start, text)) = embedded_doc {
        comments.push(Comment::new(text, start));
    }

    (comments, None)
}

/// `=begin` / `=end` only count at column 0, followed by end of line or whitespace.
fn is_keyword_line(raw: &str, keyword: &str) -> bool {
    raw.strip_prefix(keyword)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with(char::is_whitespace))
}
