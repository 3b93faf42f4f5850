use std::collections::BTreeSet;

use regex::Regex;

use dicta_lexer::Character;

/// Predicate matching a character with specific formatting.
///
/// Unset features are ignored, and whitespace always matches regardless
/// of its own formatting.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormatPred {
    bold: Option<bool>,
    italic: Option<bool>,
    color: Option<bool>,
}

impl FormatPred {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn bold(mut self, on: bool) -> Self {
        self.bold = Some(on);
        self
    }

    #[must_use]
    pub const fn italic(mut self, on: bool) -> Self {
        self.italic = Some(on);
        self
    }

    /// Requires the character to carry (or not carry) an explicit color.
    #[must_use]
    pub const fn color(mut self, on: bool) -> Self {
        self.color = Some(on);
        self
    }

    #[must_use]
    pub fn matches(&self, c: &Character) -> bool {
        if c.ch.is_whitespace() {
            return true;
        }
        if let Some(bold) = self.bold {
            if c.format.bold != bold {
                return false;
            }
        }
        if let Some(italic) = self.italic {
            if c.format.italic != italic {
                return false;
            }
        }
        if let Some(color) = self.color {
            if c.format.color.is_some() != color {
                return false;
            }
        }
        true
    }
}

/// Returns a regular expression source matching any of the given
/// strings, longest alternatives first.
#[must_use]
pub fn regex_opt(strings: &[&str]) -> String {
    let unique: BTreeSet<&str> = strings.iter().copied().collect();
    let mut sorted: Vec<&str> = unique.into_iter().collect();
    sorted.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));

    let escaped: Vec<String> = sorted.iter().map(|s| regex::escape(s)).collect();
    format!("(?:{})", escaped.join("|"))
}

/// Position-tracking view over an entry's characters.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    chars: &'a [Character],
    pos: usize,
}

impl<'a> Cursor<'a> {
    #[must_use]
    pub fn new(chars: &'a [Character]) -> Self {
        Self { chars, pos: 0 }
    }

    #[must_use]
    pub fn at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }

    #[must_use]
    pub fn peek(&self) -> Option<&'a Character> {
        self.chars.get(self.pos)
    }

    #[must_use]
    pub fn peek_char(&self) -> Option<char> {
        self.peek().map(|c| c.ch)
    }

    /// Consumes the given character if it comes next, any formatting.
    pub fn eat(&mut self, ch: char) -> bool {
        if self.peek_char() == Some(ch) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    pub fn skip_spaces(&mut self) {
        while self.peek().is_some_and(|c| c.ch.is_whitespace()) {
            self.pos += 1;
        }
    }

    /// Consumes characters while the predicate holds and returns them.
    /// Trailing whitespace ends up consumed but can be stripped by the
    /// caller.
    pub fn scan_while(&mut self, pred: &FormatPred) -> &'a [Character] {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if pred.matches(c) {
                self.pos += 1;
            } else {
                break;
            }
        }
        &self.chars[start..self.pos]
    }

    /// Consumes characters up to the first one matching `stop`.
    pub fn scan_until(&mut self, stop: &Regex) -> &'a [Character] {
        let start = self.pos;
        let mut buf = [0u8; 4];
        while let Some(c) = self.peek() {
            if stop.is_match(c.ch.encode_utf8(&mut buf)) {
                break;
            }
            self.pos += 1;
        }
        &self.chars[start..self.pos]
    }

    /// Consumes characters up to (not including) `stop`. Returns `None`
    /// when the entry ends before `stop` appears.
    pub fn scan_to(&mut self, stop: char) -> Option<&'a [Character]> {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if c.ch == stop {
                return Some(&self.chars[start..self.pos]);
            }
            self.pos += 1;
        }
        None
    }
}
