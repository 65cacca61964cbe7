//! Physical line cache for a source unit.
//!
//! Lines are split once, before scanning starts, and handed out by 1-based
//! line number. A line ends after every `\r` and after every `\n`, so the
//! numbering always agrees with the scanner's line counter (`\r\n` is two
//! lines, the second one empty apart from its `\n`). The last entry is the
//! unterminated tail of the input and may be empty.

use std::rc::Rc;

#[derive(Debug, Clone, Default)]
pub struct SourceLines {
    lines: Vec<Rc<String>>,
}

impl SourceLines {
    pub fn new(source: &str) -> Self {
        let mut lines = Vec::new();
        let mut start = 0;

        for (index, ch) in source.char_indices() {
            if is_line_terminator(ch) {
                let end = index + ch.len_utf8();
                lines.push(Rc::new(source[start..end].to_string()));
                start = end;
            }
        }
        lines.push(Rc::new(source[start..].to_string()));

        SourceLines { lines }
    }

    /// Raw line, terminator included.
    pub fn get(&self, line: u32) -> Option<&Rc<String>> {
        let index = (line as usize).checked_sub(1)?;
        self.lines.get(index)
    }

    /// Line without its terminator, empty when out of range.
    pub fn text(&self, line: u32) -> &str {
        self.get(line)
            .map(|text| text.trim_end_matches(['\r', '\n']))
            .unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(|line| line.as_str())
    }
}

pub fn is_line_terminator(ch: char) -> bool {
    ch == '\r' || ch == '\n'
}
