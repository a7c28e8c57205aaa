//! Schema line reader: drops blank and `#` comment lines, keeps source line
//! numbers for diagnostics.

/// One logical schema line, trimmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// 1-based line number in the source text.
    pub number: usize,
    pub text: &'a str,
}

impl<'a> Line<'a> {
    /// True when the first non-whitespace character is `}`.
    pub fn is_block_close(&self) -> bool {
        is_block_close(self.text)
    }

    pub fn tokens(&self) -> std::str::SplitWhitespace<'a> {
        self.text.split_whitespace()
    }
}

pub fn is_block_close(line: &str) -> bool {
    line.trim_start().starts_with('}')
}

/// Lazy iterator over the declaration lines of a schema.
#[derive(Debug, Clone)]
pub struct SchemaLines<'a> {
    inner: std::iter::Enumerate<std::str::Lines<'a>>,
}

impl<'a> SchemaLines<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { inner: source.lines().enumerate() }
    }
}

impl<'a> Iterator for SchemaLines<'a> {
    type Item = Line<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        for (index, raw) in self.inner.by_ref() {
            let text = raw.trim();
            if text.is_empty() || text.starts_with('#') {
                continue;
            }
            return Some(Line { number: index + 1, text });
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_comments_and_blanks() {
        let src = "# header\n\nclass Foo\n   # inner comment\n\tint a\n\n  }\n";
        let lines: Vec<_> = SchemaLines::new(src).collect();
        assert_eq!(
            lines,
            vec![
                Line { number: 3, text: "class Foo" },
                Line { number: 5, text: "int a" },
                Line { number: 7, text: "}" },
            ]
        );
        assert!(lines[2].is_block_close());
        assert!(!lines[0].is_block_close());
    }

    #[test]
    fn block_close_only_on_leading_brace() {
        assert!(is_block_close("   } trailing"));
        assert!(!is_block_close("int a }"));
        assert!(!is_block_close(""));
    }

    #[test]
    fn handles_crlf_input() {
        let lines: Vec<_> = SchemaLines::new("int a\r\n\r\nint b\r\n").map(|l| l.text).collect();
        assert_eq!(lines, vec!["int a", "int b"]);
    }
}
