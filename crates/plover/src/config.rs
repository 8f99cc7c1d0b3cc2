use std::path::{Path, PathBuf};
use std::{fs, io};

use serde::Deserialize;
use thiserror::Error;

use crate::source::DiskSource;
use crate::taxonomy::TaxonomyPath;

fn default_content_dir() -> PathBuf {
    PathBuf::from("content")
}

/// The configuration for a site.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SiteConfig {
    /// The directory holding the content collections.
    ///
    /// When loaded with [`SiteConfig::from_path`], relative paths are resolved
    /// against the directory of the configuration file.
    #[serde(default = "default_content_dir")]
    pub content_dir: PathBuf,

    #[serde(default)]
    pub taxonomies: Vec<TaxonomyConfig>,
}

/// A taxonomy declared for one of the site's collections.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TaxonomyConfig {
    pub property: String,
    pub name: String,
}

impl TaxonomyConfig {
    pub fn path(&self) -> TaxonomyPath {
        TaxonomyPath::new(&self.property, &self.name)
    }
}

#[derive(Error, Debug)]
pub enum LoadConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

impl SiteConfig {
    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LoadConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;

        let mut config = Self::parse(&contents)?;

        if let Some(root_path) = path.parent() {
            config.content_dir = root_path.join(&config.content_dir);
        }

        Ok(config)
    }

    pub fn disk_source(&self) -> DiskSource {
        DiskSource::new(&self.content_dir)
    }
}
