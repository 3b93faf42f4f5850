use lazy_static::lazy_static;
use regex::Regex;

use dicta_error::{DictaError, Result};
use dicta_lexer::{Character, raw_text};
use dicta_markup::{Markup, Tag, formatted_text_with};
use dicta_model::{Entry, Example, Headword, Sense};
use dicta_script::{NormalizeOptions, detect_script, normalize_char, plain_text, strip_characters};

use crate::scan::{Cursor, FormatPred, regex_opt};

lazy_static! {
    /// Characters that end a translation: `;` separates senses, `○`
    /// introduces an example.
    static ref SENSE_BREAKERS: Regex = Regex::new(&regex_opt(&[";", "○"])).unwrap();
}

/// Recursive-descent parser for a single dictionary entry.
///
/// An entry consists of a bold headword, an optional parenthesized
/// pronunciation, and a sequence of senses with optional examples.
pub struct EntryParser<'a> {
    cursor: Cursor<'a>,
    debug: bool,
}

impl<'a> EntryParser<'a> {
    #[must_use]
    pub fn new(chars: &'a [Character], debug: bool) -> Self {
        Self {
            cursor: Cursor::new(chars),
            debug,
        }
    }

    pub fn parse(mut self) -> Result<Entry> {
        let headword = self.parse_headword()?;
        let pronunciation = self.parse_pronunciation()?;
        let senses = self.parse_senses()?;

        Ok(Entry {
            headword,
            pronunciation,
            senses,
        })
    }

    /// Options for source-language text: glyph conversion only.
    fn source_opts(&self) -> NormalizeOptions {
        NormalizeOptions {
            script: None,
            debug: self.debug,
        }
    }

    fn parse_headword(&mut self) -> Result<Headword> {
        if self.cursor.at_end() {
            return Err(DictaError::ParseError("empty entry".to_string()));
        }

        let run = self.cursor.scan_while(&FormatPred::new().bold(true));
        let run = strip_characters(run, None);
        if run.is_empty() {
            return Err(DictaError::ParseError(
                "entry does not begin with a bold headword".to_string(),
            ));
        }

        let (assumed, run) = match run.first() {
            Some(c) if c.ch == '*' => (true, &run[1..]),
            _ => (false, run),
        };

        // Trailing superscript digits index homographs.
        let mut end = run.len();
        while end > 0 && run[end - 1].format.sup && run[end - 1].ch.is_ascii_digit() {
            end -= 1;
        }
        let (body, sup) = run.split_at(end);
        let homonym_id = if sup.is_empty() {
            None
        } else {
            raw_text(sup).parse::<u32>().ok()
        };

        let value = plain_text(strip_characters(body, None), &self.source_opts())?;
        if value.is_empty() {
            return Err(DictaError::ParseError(
                "headword has no visible characters".to_string(),
            ));
        }

        Ok(Headword {
            value,
            homonym_id,
            assumed,
        })
    }

    fn parse_pronunciation(&mut self) -> Result<Option<Markup>> {
        self.cursor.skip_spaces();
        if !self.cursor.eat('(') {
            return Ok(None);
        }

        let inner = self.cursor.scan_to(')').ok_or_else(|| {
            DictaError::ParseError("unclosed parenthesis in pronunciation".to_string())
        })?;
        self.cursor.eat(')');

        let inner = strip_characters(inner, None);
        let opts = self.source_opts();
        let markup = formatted_text_with(inner, &[Tag::Sup], |c| normalize_char(c, &opts))?;
        if markup.is_empty() {
            Ok(None)
        } else {
            Ok(Some(markup))
        }
    }

    fn parse_senses(&mut self) -> Result<Vec<Sense>> {
        let mut senses: Vec<Sense> = Vec::new();

        loop {
            self.cursor.skip_spaces();
            if self.cursor.at_end() {
                break;
            }

            if self.cursor.eat(';') {
                continue;
            }

            if self.cursor.eat('○') {
                if let Some(example) = self.parse_example()? {
                    match senses.last_mut() {
                        Some(sense) => sense.examples.push(example),
                        None => senses.push(Sense {
                            translation: None,
                            examples: vec![example],
                        }),
                    }
                }
                continue;
            }

            if let Some(translation) = self.scan_translation()? {
                senses.push(Sense {
                    translation: Some(translation),
                    examples: Vec::new(),
                });
            }
        }

        Ok(senses)
    }

    /// Parses one example after its `○` marker: an italicized phrase
    /// followed by its translation. A marker with no italicized phrase
    /// yields nothing.
    fn parse_example(&mut self) -> Result<Option<Example>> {
        self.cursor.skip_spaces();

        let source = self.cursor.scan_while(&FormatPred::new().italic(true));
        let source = strip_characters(source, None);
        if source.is_empty() {
            return Ok(None);
        }

        let text = plain_text(source, &self.source_opts())?;
        let translation = self.scan_translation()?;

        Ok(Some(Example { text, translation }))
    }

    /// Scans target-language text up to the next breaker, repairing
    /// lookalike letters for the detected script.
    fn scan_translation(&mut self) -> Result<Option<String>> {
        let slice = self.cursor.scan_until(&SENSE_BREAKERS);
        let slice = strip_characters(slice, None);
        if slice.is_empty() {
            return Ok(None);
        }

        let script = detect_script(slice);
        dicta_logger::debug(&format!("Detected script {script}"), self.debug);

        let opts = NormalizeOptions {
            script: Some(script),
            debug: self.debug,
        };
        Ok(Some(plain_text(slice, &opts)?))
    }
}

/// Parses a complete entry from its characters.
pub fn parse_entry(chars: &[Character], debug: bool) -> Result<Entry> {
    EntryParser::new(chars, debug).parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use dicta_lexer::Format;

    fn styled(text: &str, f: impl Fn(&mut Format)) -> Vec<Character> {
        text.chars()
            .map(|ch| {
                let mut format = Format::default();
                f(&mut format);
                Character::new(ch, format)
            })
            .collect()
    }

    fn bold(text: &str) -> Vec<Character> {
        styled(text, |f| f.bold = true)
    }

    fn italic(text: &str) -> Vec<Character> {
        styled(text, |f| f.italic = true)
    }

    fn plain(text: &str) -> Vec<Character> {
        styled(text, |_| {})
    }

    fn parse(chars: &[Character]) -> Entry {
        dicta_logger::init_logger(true);
        parse_entry(chars, false).unwrap()
    }

    #[test]
    fn test_minimal_entry() {
        let mut chars = bold("кол ");
        chars.extend(plain("рыба"));

        let entry = parse(&chars);
        assert_eq!(entry.headword.value, "кол");
        assert_eq!(entry.headword.homonym_id, None);
        assert!(!entry.headword.assumed);
        assert!(entry.pronunciation.is_none());
        assert_eq!(entry.senses.len(), 1);
        assert_eq!(entry.senses[0].translation.as_deref(), Some("рыба"));
    }

    #[test]
    fn test_empty_entry_fails() {
        dicta_logger::init_logger(true);
        let err = parse_entry(&[], false).unwrap_err();
        assert!(matches!(err, DictaError::ParseError(_)));
    }

    #[test]
    fn test_entry_without_bold_headword_fails() {
        dicta_logger::init_logger(true);
        let chars = plain("рыба");
        let err = parse_entry(&chars, false).unwrap_err();
        assert!(matches!(err, DictaError::ParseError(_)));
    }

    #[test]
    fn test_homonym_id_from_superscript_digits() {
        let mut chars = bold("кол");
        chars.extend(styled("2", |f| {
            f.bold = true;
            f.sup = true;
        }));
        chars.extend(plain(" жердь"));

        let entry = parse(&chars);
        assert_eq!(entry.headword.value, "кол");
        assert_eq!(entry.headword.homonym_id, Some(2));
    }

    #[test]
    fn test_assumed_headword() {
        let mut chars = bold("*кол ");
        chars.extend(plain("рыба"));

        let entry = parse(&chars);
        assert!(entry.headword.assumed);
        assert_eq!(entry.headword.value, "кол");
    }

    #[test]
    fn test_pronunciation_with_superscript() {
        let mut chars = bold("кол ");
        chars.extend(plain("(kol"));
        chars.extend(styled("a", |f| f.sup = true));
        chars.extend(plain(") рыба"));

        let entry = parse(&chars);
        let markup = entry.pronunciation.unwrap();
        assert_eq!(markup.to_html(), "kol<sup>a</sup>");
    }

    #[test]
    fn test_pronunciation_converts_phonetic_font() {
        let mut chars = bold("кол ");
        chars.extend(plain("("));
        chars.extend(styled("\u{041a}", |f| f.font = Some("Lingua".to_string())));
        chars.extend(plain(")"));

        let entry = parse(&chars);
        let markup = entry.pronunciation.unwrap();
        assert_eq!(markup.to_html(), "\u{0259}\u{0311}");
    }

    #[test]
    fn test_unclosed_pronunciation_fails() {
        dicta_logger::init_logger(true);
        let mut chars = bold("кол ");
        chars.extend(plain("(kol"));

        let err = parse_entry(&chars, false).unwrap_err();
        match err {
            DictaError::ParseError(msg) => assert!(msg.contains("parenthesis")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_semicolon_separates_senses() {
        let mut chars = bold("кол ");
        chars.extend(plain("рыба; жердь"));

        let entry = parse(&chars);
        assert_eq!(entry.senses.len(), 2);
        assert_eq!(entry.senses[0].translation.as_deref(), Some("рыба"));
        assert_eq!(entry.senses[1].translation.as_deref(), Some("жердь"));
    }

    #[test]
    fn test_example_attaches_to_preceding_sense() {
        let mut chars = bold("кол ");
        chars.extend(plain("рыба ○ "));
        chars.extend(italic("кол кучаш "));
        chars.extend(plain("ловить рыбу"));

        let entry = parse(&chars);
        assert_eq!(entry.senses.len(), 1);
        let sense = &entry.senses[0];
        assert_eq!(sense.translation.as_deref(), Some("рыба"));
        assert_eq!(sense.examples.len(), 1);
        assert_eq!(sense.examples[0].text, "кол кучаш");
        assert_eq!(sense.examples[0].translation.as_deref(), Some("ловить рыбу"));
    }

    #[test]
    fn test_example_marker_without_italic_body() {
        let mut chars = bold("кол ");
        chars.extend(plain("рыба ○"));

        let entry = parse(&chars);
        assert_eq!(entry.senses.len(), 1);
        assert!(entry.senses[0].examples.is_empty());
    }

    #[test]
    fn test_newline_joined_continuation_parses() {
        // extract_entries joins continuation paragraphs with a newline
        let mut chars = bold("кол ");
        chars.extend(plain("рыба;"));
        chars.push(Character::plain('\n'));
        chars.extend(plain("жердь"));

        let entry = parse(&chars);
        assert_eq!(entry.senses.len(), 2);
    }

    #[test]
    fn test_translation_script_repair() {
        let mut chars = bold("кол ");
        // Latin 'c' typed inside a Cyrillic translation
        chars.extend(plain("ры\u{0063}а"));

        let entry = parse(&chars);
        assert_eq!(entry.senses[0].translation.as_deref(), Some("ры\u{0441}а"));
    }
}
