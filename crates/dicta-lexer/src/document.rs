use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use dicta_error::{DictaError, Result};

/// A word-processor document export: paragraphs of formatted runs.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct Document {
    #[serde(default)]
    pub paragraphs: Vec<Paragraph>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct Paragraph {
    #[serde(default)]
    pub runs: Vec<Run>,
}

/// A run of text sharing one formatting style.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct Run {
    pub text: String,
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub italic: bool,
    #[serde(default)]
    pub superscript: bool,
    #[serde(default)]
    pub subscript: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

pub fn read_document(path: &Path) -> Result<Document> {
    let content = fs::read_to_string(path)
        .map_err(|e| DictaError::DocumentError(format!("{}: {e}", path.display())))?;
    let parsed: Document = serde_json::from_str(&content)
        .map_err(|e| DictaError::DocumentError(format!("{}: {e}", path.display())))?;
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scan.json");
        fs::write(
            &path,
            r#"{"paragraphs": [{"runs": [{"text": "кол", "bold": true}]}]}"#,
        )
        .unwrap();

        let doc = read_document(&path).unwrap();
        assert_eq!(doc.paragraphs.len(), 1);
        assert_eq!(doc.paragraphs[0].runs[0].text, "кол");
        assert!(doc.paragraphs[0].runs[0].bold);
        assert!(!doc.paragraphs[0].runs[0].italic);
    }

    #[test]
    fn test_read_document_bad_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scan.json");
        fs::write(&path, "{").unwrap();

        let err = read_document(&path).unwrap_err();
        assert!(matches!(err, DictaError::DocumentError(_)));
    }
}
