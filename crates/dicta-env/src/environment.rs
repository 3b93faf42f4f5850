use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use dicta_error::{DictaError, Result};

use crate::catalog::Catalog;

/// Base interpreter the composed environment is built on.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Runtime {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl Runtime {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            version: None,
        }
    }

    #[must_use]
    pub fn with_version(name: &str, version: &str) -> Self {
        Self {
            name: name.to_string(),
            version: Some(version.to_string()),
        }
    }
}

/// The package names a configuration opts into.
///
/// Built from a sequence but carries set semantics: duplicates collapse
/// and the original order never reaches the composed result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    names: BTreeSet<String>,
}

impl Selection {
    #[must_use]
    pub fn new() -> Self {
        Self {
            names: BTreeSet::new(),
        }
    }

    pub fn insert(&mut self, name: &str) {
        self.names.insert(name.to_string());
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for Selection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// The composed value: a runtime plus the resolved package descriptors.
///
/// Packages are keyed by name in sorted order, so value equality and
/// serialized output are independent of selection or catalog order.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Environment<D> {
    pub runtime: Runtime,
    pub packages: BTreeMap<String, D>,
}

impl<D> Environment<D> {
    #[must_use]
    pub fn package_count(&self) -> usize {
        self.packages.len()
    }

    pub fn package_names(&self) -> impl Iterator<Item = &str> {
        self.packages.keys().map(String::as_str)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&D> {
        self.packages.get(name)
    }
}

/// Resolves every selected name against the catalog and returns the
/// composed environment.
///
/// Pure and deterministic: no I/O, no hidden state, identical inputs
/// always compose value-equal environments. The first name missing from
/// the catalog aborts composition; there is no partial result.
pub fn compose<D: Clone>(
    runtime: Runtime,
    selection: &Selection,
    catalog: &Catalog<D>,
) -> Result<Environment<D>> {
    let mut packages = BTreeMap::new();
    for name in selection.iter() {
        let descriptor = catalog
            .get(name)
            .ok_or_else(|| DictaError::PackageNotFound(name.to_string()))?;
        packages.insert(name.to_string(), descriptor.clone());
    }

    Ok(Environment { runtime, packages })
}
