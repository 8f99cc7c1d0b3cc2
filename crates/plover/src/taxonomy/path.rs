use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// The path to a taxonomy, in the form `property/taxonomy`.
///
/// For example, `blog/tags` names the `tags` of the `blog` collection and
/// `code/skills` the `skills` of the `code` collection. The property may
/// itself be nested (`blog/2024/tags`); the last segment is always the
/// taxonomy.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone)]
pub struct TaxonomyPath {
    property: String,
    taxonomy: String,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseTaxonomyPathError {
    #[error("expected 'property/taxonomy', got '{0}'")]
    MissingSeparator(String),

    #[error("missing property in '{0}'")]
    EmptyProperty(String),

    #[error("missing taxonomy in '{0}'")]
    EmptyTaxonomy(String),
}

impl TaxonomyPath {
    pub fn new(property: impl Into<String>, taxonomy: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            taxonomy: taxonomy.into(),
        }
    }

    pub fn property(&self) -> &str {
        &self.property
    }

    pub fn taxonomy(&self) -> &str {
        &self.taxonomy
    }
}

impl FromStr for TaxonomyPath {
    type Err = ParseTaxonomyPathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (property, taxonomy) = s
            .rsplit_once('/')
            .ok_or_else(|| ParseTaxonomyPathError::MissingSeparator(s.to_string()))?;

        if property.is_empty() {
            return Err(ParseTaxonomyPathError::EmptyProperty(s.to_string()));
        }

        if taxonomy.is_empty() {
            return Err(ParseTaxonomyPathError::EmptyTaxonomy(s.to_string()));
        }

        Ok(Self::new(property, taxonomy))
    }
}

impl fmt::Display for TaxonomyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.property, self.taxonomy)
    }
}
