use unicode_normalization::UnicodeNormalization;

use dicta_error::Result;
use dicta_lexer::Character;

use crate::node::{Markup, MarkupNode, Tag};

struct Builder<'a, F> {
    chars: &'a [Character],
    norm: F,
    root: Vec<MarkupNode>,
    open: Vec<(Tag, Vec<MarkupNode>)>,
    i: usize,
}

impl<F: Fn(&Character) -> Result<String>> Builder<'_, F> {
    /// Flushes pending characters up to `j` as a text node on the current
    /// level. When a level is being closed, trailing whitespace stays
    /// pending so it lands outside the closed node.
    fn flush(&mut self, j: usize, closing: bool) -> Result<()> {
        if j == self.i {
            return Ok(());
        }

        let mut end = j;
        if closing {
            while end > self.i && self.chars[end - 1].ch.is_whitespace() {
                end -= 1;
            }
        }

        let mut text = String::new();
        for c in &self.chars[self.i..end] {
            text.push_str(&(self.norm)(c)?);
        }
        self.i = end;

        if !text.is_empty() {
            let text: String = text.nfc().collect();
            let top = match self.open.last_mut() {
                Some((_, children)) => children,
                None => &mut self.root,
            };
            top.push(MarkupNode::Text(text));
        }
        Ok(())
    }

    /// Closes open levels until only `keep` remain.
    fn collapse(&mut self, keep: usize, j: usize) -> Result<()> {
        self.flush(j, true)?;
        while self.open.len() > keep {
            if let Some((tag, children)) = self.open.pop() {
                let top = match self.open.last_mut() {
                    Some((_, siblings)) => siblings,
                    None => &mut self.root,
                };
                top.push(MarkupNode::Element(tag, children));
            }
        }
        Ok(())
    }
}

/// Transforms a character sequence into a markup tree.
///
/// Only the attributes listed in `attrs` are honored when opening and
/// closing nodes; the formatting of whitespace is always ignored, so a
/// space between two superscript words stays inside the superscript.
/// Each character passes through `norm` before landing in a text node,
/// and text nodes are canonically composed.
pub fn formatted_text_with<F>(chars: &[Character], attrs: &[Tag], norm: F) -> Result<Markup>
where
    F: Fn(&Character) -> Result<String>,
{
    let mut builder = Builder {
        chars,
        norm,
        root: Vec::new(),
        open: Vec::new(),
        i: 0,
    };
    let mut signature: Option<Vec<bool>> = None;

    for (j, c) in chars.iter().enumerate() {
        if c.ch.is_whitespace() {
            continue;
        }

        let new_signature: Vec<bool> = attrs.iter().map(|a| a.matches(&c.format)).collect();
        if signature.as_ref() == Some(&new_signature) {
            continue;
        }

        let mut keep = None;
        for idx in (0..builder.open.len()).rev() {
            if !builder.open[idx].0.matches(&c.format) {
                keep = Some(idx);
            }
        }
        if let Some(idx) = keep {
            builder.collapse(idx, j)?;
        }

        for (attr, on) in attrs.iter().zip(&new_signature) {
            if !*on {
                continue;
            }
            if builder.open.iter().any(|(tag, _)| tag == attr) {
                continue;
            }
            builder.flush(j, false)?;
            builder.open.push((*attr, Vec::new()));
        }
        signature = Some(new_signature);
    }

    builder.collapse(0, chars.len())?;
    Ok(Markup::new(builder.root))
}

/// `formatted_text_with` without any character conversion.
pub fn formatted_text(chars: &[Character], attrs: &[Tag]) -> Result<Markup> {
    formatted_text_with(chars, attrs, |c| Ok(c.ch.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use dicta_error::DictaError;
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

    fn plain(text: &str) -> Vec<Character> {
        styled(text, |_| {})
    }

    #[test]
    fn test_superscript_toggling() {
        let mut chars = plain("per");
        chars.extend(styled("2", |f| f.sup = true));

        let markup = formatted_text(&chars, &[Tag::Sup]).unwrap();
        assert_eq!(markup.to_html(), "per<sup>2</sup>");
    }

    #[test]
    fn test_adjacent_characters_merge_into_one_node() {
        let chars = styled("кол", |f| f.italic = true);
        let markup = formatted_text(&chars, &[Tag::Italic]).unwrap();

        assert_eq!(markup.content.len(), 1);
        assert_eq!(markup.to_html(), "<em>кол</em>");
    }

    #[test]
    fn test_trailing_space_excluded_from_formatted_node() {
        let mut chars = styled("ab ", |f| f.italic = true);
        chars.extend(plain("cd"));

        let markup = formatted_text(&chars, &[Tag::Italic]).unwrap();
        assert_eq!(markup.to_html(), "<em>ab</em> cd");
    }

    #[test]
    fn test_whitespace_stays_inside_unbroken_formatting() {
        let mut chars = styled("a", |f| f.sup = true);
        chars.extend(plain(" "));
        chars.extend(styled("b", |f| f.sup = true));

        let markup = formatted_text(&chars, &[Tag::Sup]).unwrap();
        assert_eq!(markup.to_html(), "<sup>a b</sup>");
    }

    #[test]
    fn test_nested_tags_close_innermost_first() {
        let mut chars = styled("ab", |f| {
            f.bold = true;
            f.italic = true;
        });
        chars.extend(styled("cd", |f| f.bold = true));

        let markup = formatted_text(&chars, &[Tag::Bold, Tag::Italic]).unwrap();
        assert_eq!(markup.to_html(), "<strong><em>ab</em>cd</strong>");
    }

    #[test]
    fn test_unlisted_attributes_are_ignored() {
        let chars = styled("кол", |f| f.bold = true);
        let markup = formatted_text(&chars, &[Tag::Sup]).unwrap();
        assert_eq!(markup.to_html(), "кол");
    }

    #[test]
    fn test_text_is_canonically_composed() {
        let chars = plain("e\u{0301}");
        let markup = formatted_text(&chars, &[]).unwrap();
        assert_eq!(markup.to_html(), "é");
    }

    #[test]
    fn test_conversion_errors_propagate() {
        let chars = plain("x");
        let err = formatted_text_with(&chars, &[], |c| {
            Err(DictaError::UnknownGlyph("Lingua".to_string(), c.ch as u32))
        })
        .unwrap_err();
        assert!(matches!(err, DictaError::UnknownGlyph(_, _)));
    }
}
