use std::io;
use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use log::{debug, trace};
use thiserror::Error;
use walkdir::WalkDir;

use crate::content::{Article, ParseArticleError};
use crate::source::ContentSource;

/// Reads collections from Markdown files on disk.
///
/// The collection for a property lives in the directory of the same name
/// under the content path, e.g. `content/blog` for `blog`.
#[derive(Debug, Clone)]
pub struct DiskSource {
    content_path: PathBuf,
}

#[derive(Error, Debug)]
pub enum FetchCollectionError {
    #[error("invalid property identifier '{0}'")]
    InvalidProperty(String),

    #[error("collection '{property}' not found at '{}'", path.display())]
    CollectionNotFound { property: String, path: PathBuf },

    #[error("failed to walk collection: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("failed to read article: {0}")]
    Io(#[from] io::Error),

    #[error("invalid front matter in '{}': {source}", filepath.display())]
    InvalidFrontMatter {
        filepath: PathBuf,
        source: ParseArticleError,
    },
}

impl DiskSource {
    pub fn new(content_path: impl AsRef<Path>) -> Self {
        Self {
            content_path: content_path.as_ref().to_owned(),
        }
    }

    pub fn content_path(&self) -> &Path {
        &self.content_path
    }

    fn collection_path(&self, property: &str) -> Result<PathBuf, FetchCollectionError> {
        let relative_path = Path::new(property);

        let is_valid = !property.is_empty()
            && relative_path
                .components()
                .all(|component| matches!(component, Component::Normal(_)));

        if !is_valid {
            return Err(FetchCollectionError::InvalidProperty(property.to_string()));
        }

        Ok(self.content_path.join(relative_path))
    }

    fn article_paths(collection_path: &Path) -> Result<Vec<PathBuf>, FetchCollectionError> {
        fn is_hidden(entry: &walkdir::DirEntry) -> bool {
            entry.depth() > 0
                && entry
                    .file_name()
                    .to_str()
                    .map(|filename| filename.starts_with('.'))
                    .unwrap_or(false)
        }

        let mut paths = Vec::new();

        for entry in WalkDir::new(collection_path)
            .follow_links(true)
            .into_iter()
            .filter_entry(|entry| !is_hidden(entry))
        {
            let entry = entry?;

            if entry.file_type().is_dir() {
                continue;
            }

            let Some(filename) = entry.file_name().to_str() else {
                continue;
            };

            if !filename.ends_with(".md") || filename == "_index.md" {
                continue;
            }

            paths.push(entry.into_path());
        }

        paths.sort();

        Ok(paths)
    }
}

#[async_trait]
impl ContentSource for DiskSource {
    type Error = FetchCollectionError;

    async fn fetch_collection(&self, property: &str) -> Result<Vec<Article>, Self::Error> {
        let collection_path = self.collection_path(property)?;

        let is_dir = match tokio::fs::metadata(&collection_path).await {
            Ok(metadata) => metadata.is_dir(),
            Err(err) if err.kind() == io::ErrorKind::NotFound => false,
            Err(err) => return Err(err.into()),
        };

        if !is_dir {
            return Err(FetchCollectionError::CollectionNotFound {
                property: property.to_string(),
                path: collection_path,
            });
        }

        let paths = Self::article_paths(&collection_path)?;

        let mut articles = Vec::with_capacity(paths.len());
        for filepath in paths {
            trace!("reading article {filepath:?}");

            let text = tokio::fs::read_to_string(&filepath).await?;
            let article = Article::parse(&text, &filepath)
                .map_err(|source| FetchCollectionError::InvalidFrontMatter { filepath, source })?;

            articles.push(article);
        }

        debug!(
            "read {} articles from collection '{property}' at {collection_path:?}",
            articles.len()
        );

        Ok(articles)
    }
}
