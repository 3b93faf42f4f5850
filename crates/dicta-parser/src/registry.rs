use dicta_error::{DictaError, Result};
use dicta_lexer::Character;
use dicta_model::Entry;

use crate::grammar::parse_entry;

/// A named parsing rule set applied to one entry's characters.
pub type GrammarFn = fn(&[Character], bool) -> Result<Entry>;

/// Looks up a grammar by name.
pub fn grammar(name: &str) -> Result<GrammarFn> {
    match name {
        "entry" => Ok(parse_entry),
        _ => Err(DictaError::GrammarNotFound(name.to_string())),
    }
}

#[must_use]
pub fn grammar_names() -> &'static [&'static str] {
    &["entry"]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_grammar_resolves() {
        assert!(grammar("entry").is_ok());
    }

    #[test]
    fn test_unknown_grammar_is_named_in_error() {
        let err = grammar("lexicon").unwrap_err();
        match err {
            DictaError::GrammarNotFound(name) => assert_eq!(name, "lexicon"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_every_listed_grammar_resolves() {
        for name in grammar_names() {
            assert!(grammar(name).is_ok(), "grammar {name} missing");
        }
    }
}
