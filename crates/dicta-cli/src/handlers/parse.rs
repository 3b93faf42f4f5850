use anyhow::Result;
use std::path::Path;

use dicta_lexer::{Character, extract_entries, read_document};
use dicta_parser::grammar;
use dicta_script::strip_characters;

pub struct ParseHandler;

impl ParseHandler {
    pub fn handle_parse(
        document: &Path,
        grammar_name: &str,
        output: Option<&Path>,
        debug: bool,
    ) -> Result<()> {
        let rule = grammar(grammar_name).map_err(|e| anyhow::anyhow!(e))?;
        let doc = read_document(document).map_err(|e| anyhow::anyhow!(e))?;

        let groups = extract_entries(&doc);
        dicta_logger::info(&format!(
            "Found {} entries in {}",
            groups.len(),
            document.display()
        ));

        // Progress updates share stdout with the YAML document, so they
        // only run when the YAML goes to a file.
        let show_progress = output.is_some();

        let mut entries = Vec::new();
        let mut failed = 0usize;
        for (idx, chars) in groups.iter().enumerate() {
            dicta_logger::set_context(&entry_label(chars));
            if show_progress {
                dicta_logger::progress("Parsing entries", idx + 1, groups.len());
            }

            match rule(chars, debug) {
                Ok(entry) => entries.push(entry),
                Err(e) => {
                    failed += 1;
                    dicta_logger::error(&e.to_string());
                }
            }
        }
        dicta_logger::clear_context();

        if entries.is_empty() && !groups.is_empty() {
            anyhow::bail!("no entries could be parsed from {}", document.display());
        }

        if failed > 0 {
            dicta_logger::warn(&format!("Skipped {failed} entries that failed to parse"));
        }

        dicta_output::write_entries(&entries, output).map_err(|e| anyhow::anyhow!(e))?;
        if let Some(path) = output {
            dicta_logger::finish(&format!(
                "Parsed {} entries into {}",
                entries.len(),
                path.display()
            ));
        }
        Ok(())
    }
}

/// First word of the entry, the probable headword, used as the log
/// context while the entry is being parsed.
fn entry_label(chars: &[Character]) -> String {
    strip_characters(chars, None)
        .iter()
        .map(|c| c.ch)
        .take_while(|ch| !ch.is_whitespace())
        .take(20)
        .collect()
}
