use std::collections::HashMap;
use std::fmt;

use unicode_normalization::UnicodeNormalization;

use dicta_error::{DictaError, Result};
use dicta_lexer::Character;

use crate::tables::{ALWAYS_CONV, CYRL_CONV, FONT_CONV, LATN_CONV};

/// Writing script of a stretch of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Script {
    Latn,
    Cyrl,
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Latn => write!(f, "Latn"),
            Self::Cyrl => write!(f, "Cyrl"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NormalizeOptions {
    /// When set, lookalike letters from the other script are repaired.
    pub script: Option<Script>,
    /// Forward Unicode-consistency findings to the debug log.
    pub debug: bool,
}

impl NormalizeOptions {
    #[must_use]
    pub fn for_script(script: Script) -> Self {
        Self {
            script: Some(script),
            debug: false,
        }
    }
}

fn script_table(script: Script) -> &'static HashMap<char, &'static str> {
    match script {
        Script::Latn => &LATN_CONV,
        Script::Cyrl => &CYRL_CONV,
    }
}

fn char_script(ch: char) -> Option<Script> {
    match u32::from(ch) {
        0x0041..=0x005A
        | 0x0061..=0x007A
        | 0x00C0..=0x00D6
        | 0x00D8..=0x00F6
        | 0x00F8..=0x024F
        | 0x0250..=0x02AF
        | 0x1E00..=0x1EFF => Some(Script::Latn),
        0x0400..=0x04FF | 0x0500..=0x052F => Some(Script::Cyrl),
        _ => None,
    }
}

fn is_phonetic_font(c: &Character) -> bool {
    c.format
        .font
        .as_deref()
        .is_some_and(|font| FONT_CONV.contains_key(font))
}

fn warn_replacement(c: &Character) {
    dicta_logger::warn(&format!(
        "Replaced possibly erroneous symbol {} (U+{:04X})",
        c.ch,
        u32::from(c.ch)
    ));
}

/// Converts a character to its normal form.
///
/// Whitespace collapses to a regular space. A character typeset with a
/// known phonetic font resolves through that font's glyph table; a glyph
/// missing from the table is an error. With a script set in the options,
/// lookalikes from the other script are repaired, and a stray letter
/// that still belongs to the other script is reported at debug level.
pub fn normalize_char(c: &Character, opts: &NormalizeOptions) -> Result<String> {
    if c.ch.is_whitespace() {
        return Ok(" ".to_string());
    }

    if let Some(font) = &c.format.font {
        if let Some(table) = FONT_CONV.get(font.as_str()) {
            return table
                .get(&c.ch)
                .map(|s| (*s).to_string())
                .ok_or_else(|| DictaError::UnknownGlyph(font.clone(), u32::from(c.ch)));
        }
    }

    if let Some(script) = opts.script {
        if let Some(replacement) = script_table(script).get(&c.ch) {
            warn_replacement(c);
            return Ok((*replacement).to_string());
        }
    }

    if let Some(replacement) = ALWAYS_CONV.get(&c.ch) {
        warn_replacement(c);
        return Ok((*replacement).to_string());
    }

    // Check for Unicode consistency just in case
    if let (Some(expected), Some(actual)) = (opts.script, char_script(c.ch)) {
        if actual != expected {
            dicta_logger::debug(
                &format!("Unexpected {actual} character '{}' in script {expected}", c.ch),
                opts.debug,
            );
        }
    }

    Ok(c.ch.to_string())
}

/// Collects characters into a plain string, stripping all formatting and
/// normalizing to the canonical composition.
pub fn plain_text(chars: &[Character], opts: &NormalizeOptions) -> Result<String> {
    let mut text = String::new();
    for c in chars {
        text.push_str(&normalize_char(c, opts)?);
    }
    Ok(text.nfc().collect())
}

/// Characters that collide between the scripts and decide nothing.
const DETECT_IGNORE: &[char] = &[
    '\u{0275}',
    '\u{0448}',
    '\u{0473}',
    '\u{04e8}',
    '\u{04e9}',
];

/// Heuristically guesses the writing script of the text.
#[must_use]
pub fn detect_script(chars: &[Character]) -> Script {
    let mut total = 0u32;
    let mut latin = 0u32;
    let mut cyrillic = 0u32;

    for c in chars {
        if is_phonetic_font(c) || DETECT_IGNORE.contains(&c.ch) {
            continue;
        }
        total += 1;
        match char_script(c.ch) {
            Some(Script::Latn) => latin += 1,
            Some(Script::Cyrl) => cyrillic += 1,
            None => {}
        }
    }

    if cyrillic > latin && f64::from(cyrillic) >= 0.2 * f64::from(total) {
        Script::Cyrl
    } else {
        Script::Latn
    }
}
