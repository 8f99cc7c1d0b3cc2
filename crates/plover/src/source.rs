mod disk;
mod in_memory;

pub use disk::*;
pub use in_memory::*;

use async_trait::async_trait;

use crate::content::Article;

/// A source of content collections.
#[async_trait]
pub trait ContentSource: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Returns every article in the collection identified by `property`.
    async fn fetch_collection(&self, property: &str) -> Result<Vec<Article>, Self::Error>;
}
