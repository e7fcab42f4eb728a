//! Ordered pattern catalog, naming and JSON interchange
//!
//! Pattern index `i` is published as `f{i+1}`. Catalogs are plain values:
//! consumers that share one should hold it behind `&` or an `Arc`, and
//! [`default_catalog`] hands out a `'static` shared reference.

use std::path::Path;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::generator::{DEFAULT_TOTAL_PATTERNS, generate_catalog};
use crate::pattern::Pattern;

/// Ordered patterns, index 0 being f1
///
/// Equality compares the patterns only; where the leading patterns came from
/// is not part of a catalog's identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    patterns: Vec<Pattern>,
    #[serde(skip)]
    fixed_len: usize,
}

impl Catalog {
    pub(crate) fn new(patterns: Vec<Pattern>, fixed_len: usize) -> Self {
        Self {
            patterns,
            fixed_len,
        }
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Pattern> {
        self.patterns.get(index)
    }

    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    pub fn into_patterns(self) -> Vec<Pattern> {
        self.patterns
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Pattern> {
        self.patterns.iter()
    }

    /// Number of leading patterns that come from the hand-authored table
    ///
    /// Catalogs read back from JSON do not know their origin and report 0.
    pub fn fixed_prefix_len(&self) -> usize {
        self.fixed_len
    }

    /// Public name of the pattern at `index`
    pub fn name_of(index: usize) -> String {
        format!("f{}", index + 1)
    }

    /// Look up a pattern by its public name, e.g. `"f8"`
    ///
    /// Only the canonical spelling matches: `"f08"` and `"f+8"` do not.
    pub fn by_name(&self, name: &str) -> Option<&Pattern> {
        let n: usize = name.strip_prefix('f')?.parse().ok()?;
        let index = n.checked_sub(1)?;
        if name != Self::name_of(index) {
            return None;
        }
        self.get(index)
    }

    pub fn iter_named(&self) -> impl Iterator<Item = (String, &Pattern)> + '_ {
        self.patterns
            .iter()
            .enumerate()
            .map(|(i, pattern)| (Self::name_of(i), pattern))
    }

    pub fn to_json(&self) -> Result<String, CatalogError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(text: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), CatalogError> {
        let path = path.as_ref();
        std::fs::write(path, self.to_json()?).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Wrote {} patterns to {}", self.len(), path.display());
        Ok(())
    }

    pub fn read_json(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json(&text)?;
        log::info!("Read {} patterns from {}", catalog.len(), path.display());
        Ok(catalog)
    }
}

impl PartialEq for Catalog {
    fn eq(&self, other: &Self) -> bool {
        self.patterns == other.patterns
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Pattern;
    type IntoIter = std::slice::Iter<'a, Pattern>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

static DEFAULT_CATALOG: OnceLock<Catalog> = OnceLock::new();

/// Shared f1..f25 catalog, built on first use
pub fn default_catalog() -> &'static Catalog {
    DEFAULT_CATALOG.get_or_init(|| {
        log::debug!("Building default catalog of {} patterns", DEFAULT_TOTAL_PATTERNS);
        generate_catalog(DEFAULT_TOTAL_PATTERNS)
    })
}
