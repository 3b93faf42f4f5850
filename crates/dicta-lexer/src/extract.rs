use dicta_constants::{CONTINUATION_MARKERS, MIN_ENTRY_CHARS};

use crate::character::{Character, Format};
use crate::document::{Document, Paragraph};

/// Flattens a paragraph's runs into visible characters.
#[must_use]
pub fn extract_characters(par: &Paragraph) -> Vec<Character> {
    let mut chars = Vec::new();
    for run in &par.runs {
        if run.text.is_empty() {
            continue;
        }

        let format = Format {
            font: run.font.clone(),
            bold: run.bold,
            italic: run.italic,
            sup: run.superscript,
            sub: run.subscript,
            color: run.color.clone(),
        };
        for ch in run.text.chars() {
            chars.push(Character::new(ch, format.clone()));
        }
    }
    chars
}

/// Groups paragraphs into character sequences representing single entries.
///
/// A paragraph shorter than three characters ends the current group and is
/// dropped. A paragraph opening with a bold character that is not a
/// continuation marker starts a new entry; anything else continues the
/// previous one, joined by a newline.
#[must_use]
pub fn extract_entries(doc: &Document) -> Vec<Vec<Character>> {
    let mut entries = Vec::new();
    let mut buf: Vec<Character> = Vec::new();

    for par in &doc.paragraphs {
        let chars = extract_characters(par);
        // doubtedly would be an entry
        if chars.len() < MIN_ENTRY_CHARS {
            if !buf.is_empty() {
                entries.push(std::mem::take(&mut buf));
            }
        } else if chars[0].format.bold && !CONTINUATION_MARKERS.contains(&chars[0].ch) {
            if !buf.is_empty() {
                entries.push(std::mem::take(&mut buf));
            }
            buf = chars;
        } else {
            buf.push(Character::plain('\n'));
            buf.extend(chars);
        }
    }

    if !buf.is_empty() {
        entries.push(buf);
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::raw_text;
    use crate::document::Run;

    fn bold_run(text: &str) -> Run {
        Run {
            text: text.to_string(),
            bold: true,
            ..Run::default()
        }
    }

    fn plain_run(text: &str) -> Run {
        Run {
            text: text.to_string(),
            ..Run::default()
        }
    }

    fn par(runs: Vec<Run>) -> Paragraph {
        Paragraph { runs }
    }

    #[test]
    fn test_empty_runs_are_skipped() {
        let p = par(vec![plain_run(""), plain_run("аб")]);
        assert_eq!(extract_characters(&p).len(), 2);
    }

    #[test]
    fn test_compound_text_splits_per_scalar() {
        let p = par(vec![plain_run("e̮")]);
        // 'e' plus the combining mark are separate characters
        assert_eq!(extract_characters(&p).len(), 2);
    }

    #[test]
    fn test_bold_paragraph_starts_new_entry() {
        let doc = Document {
            paragraphs: vec![
                par(vec![bold_run("кол"), plain_run(" рыба")]),
                par(vec![bold_run("мый"), plain_run(" заяц")]),
            ],
        };

        let entries = extract_entries(&doc);
        assert_eq!(entries.len(), 2);
        assert_eq!(raw_text(&entries[0]), "кол рыба");
        assert_eq!(raw_text(&entries[1]), "мый заяц");
    }

    #[test]
    fn test_non_bold_paragraph_continues_entry() {
        let doc = Document {
            paragraphs: vec![
                par(vec![bold_run("кол"), plain_run(" рыба")]),
                par(vec![plain_run("прочий текст")]),
            ],
        };

        let entries = extract_entries(&doc);
        assert_eq!(entries.len(), 1);
        assert_eq!(raw_text(&entries[0]), "кол рыба\nпрочий текст");
    }

    #[test]
    fn test_continuation_marker_does_not_start_entry() {
        let doc = Document {
            paragraphs: vec![
                par(vec![bold_run("кол"), plain_run(" рыба")]),
                par(vec![bold_run("♦ idiom"), plain_run(" text")]),
            ],
        };

        let entries = extract_entries(&doc);
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_short_paragraph_cuts_entry() {
        let doc = Document {
            paragraphs: vec![
                par(vec![bold_run("кол"), plain_run(" рыба")]),
                par(vec![plain_run("--")]),
                par(vec![plain_run("continuation that became separate")]),
            ],
        };

        let entries = extract_entries(&doc);
        assert_eq!(entries.len(), 2);
        assert_eq!(raw_text(&entries[0]), "кол рыба");
        // the short divider itself is dropped
        assert_eq!(raw_text(&entries[1]), "\ncontinuation that became separate");
    }
}
