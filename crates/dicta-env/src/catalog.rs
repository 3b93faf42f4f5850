use indexmap::IndexMap;

/// Read-only registry mapping package names to descriptors.
///
/// The catalog is owned and versioned by an external collaborator; this
/// crate only ever queries it by name. Descriptors are opaque here — the
/// CLI instantiates `D` with raw JSON values, tests with plain strings.
#[derive(Debug, Clone)]
pub struct Catalog<D> {
    entries: IndexMap<String, D>,
}

impl<D> Catalog<D> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    pub fn insert(&mut self, name: &str, descriptor: D) {
        self.entries.insert(name.to_string(), descriptor);
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&D> {
        self.entries.get(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &D)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<D> Default for Catalog<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> From<IndexMap<String, D>> for Catalog<D> {
    fn from(entries: IndexMap<String, D>) -> Self {
        Self { entries }
    }
}

impl<D> FromIterator<(String, D)> for Catalog<D> {
    fn from_iter<I: IntoIterator<Item = (String, D)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_name() {
        let mut catalog = Catalog::new();
        catalog.insert("lsp", "language-server");
        catalog.insert("venv", "virtualenv-manager");

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("lsp"), Some(&"language-server"));
        assert!(catalog.get("docx").is_none());
        assert!(catalog.contains("venv"));
    }

    #[test]
    fn test_names_preserve_catalog_order() {
        let mut catalog = Catalog::new();
        catalog.insert("venv", 1);
        catalog.insert("lsp", 2);

        let names: Vec<&str> = catalog.names().collect();
        assert_eq!(names, vec!["venv", "lsp"]);
    }
}
