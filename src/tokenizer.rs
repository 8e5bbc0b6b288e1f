//! Splits Wavefront text into keyword/payload lines without copying.

/// One meaningful line: its leading keyword and the rest of the line with leading
/// whitespace removed. Trailing whitespace (including a `\r`) is left on the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// 1-based line number in the source.
    pub number: usize,
    pub keyword: &'a str,
    pub payload: &'a str,
}

/// Iterator over the [`Line`]s of a buffer. Blank lines and `#` comments are skipped.
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    content: &'a str,
    offset: usize,
    number: usize,
}

fn is_blank(c: char) -> bool {
    c.is_ascii_whitespace()
}

impl<'a> Lines<'a> {
    pub fn new(content: &'a str) -> Self {
        Self {
            content,
            offset: 0,
            number: 0,
        }
    }

    /// Restarts iteration at the line containing byte `offset`.
    pub fn at(content: &'a str, offset: usize) -> Self {
        let bytes = &content.as_bytes()[..offset.min(content.len())];
        let start = bytes
            .iter()
            .rposition(|b| *b == b'\n')
            .map_or(0, |i| i + 1);
        let number = bytes[..start].iter().filter(|b| **b == b'\n').count();

        Self {
            content,
            offset: start,
            number,
        }
    }

    /// Byte offset of the next line that has not been read yet.
    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl<'a> Iterator for Lines<'a> {
    type Item = Line<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.offset < self.content.len() {
            let rest = &self.content[self.offset..];
            let (raw, consumed) = match rest.find('\n') {
                Some(end) => (&rest[..end], end + 1),
                None => (rest, rest.len()),
            };
            self.offset += consumed;
            self.number += 1;

            let text = raw.trim_start_matches(is_blank);
            if text.is_empty() || text.starts_with('#') {
                continue;
            }

            let (keyword, payload) = match text.find(is_blank) {
                Some(end) => (&text[..end], text[end..].trim_start_matches(is_blank)),
                None => (text, ""),
            };

            return Some(Line {
                number: self.number,
                keyword,
                payload,
            });
        }

        None
    }
}

/// Whitespace separated fields of a payload. Runs of blanks count as one separator.
pub fn fields(payload: &str) -> std::str::SplitAsciiWhitespace<'_> {
    payload.split_ascii_whitespace()
}
