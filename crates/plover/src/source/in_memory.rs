use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use derive_more::{Deref, DerefMut};
use thiserror::Error;

use crate::content::Article;
use crate::source::ContentSource;

/// Articles keyed by the property of the collection they belong to.
#[derive(Debug, Default, Deref, DerefMut)]
pub struct Collections(HashMap<String, Vec<Article>>);

/// Serves collections that are already held in memory.
///
/// A property without a collection is an empty collection.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    collections: Arc<RwLock<Collections>>,
}

#[derive(Error, Debug)]
pub enum InMemorySourceError {
    #[error("poisoned")]
    Poisoned,
}

impl InMemorySource {
    pub fn new(collections: Arc<RwLock<Collections>>) -> Self {
        Self { collections }
    }

    /// Replaces the collection for the given property.
    pub fn insert(
        &self,
        property: impl Into<String>,
        articles: Vec<Article>,
    ) -> Result<(), InMemorySourceError> {
        self.collections
            .write()
            .map_err(|_| InMemorySourceError::Poisoned)?
            .insert(property.into(), articles);

        Ok(())
    }
}

impl<P: Into<String>> FromIterator<(P, Vec<Article>)> for InMemorySource {
    fn from_iter<T: IntoIterator<Item = (P, Vec<Article>)>>(iter: T) -> Self {
        let collections = iter
            .into_iter()
            .map(|(property, articles)| (property.into(), articles))
            .collect();

        Self::new(Arc::new(RwLock::new(Collections(collections))))
    }
}

#[async_trait]
impl ContentSource for InMemorySource {
    type Error = InMemorySourceError;

    async fn fetch_collection(&self, property: &str) -> Result<Vec<Article>, Self::Error> {
        let collections = self
            .collections
            .read()
            .map_err(|_| InMemorySourceError::Poisoned)?;

        Ok(collections.get(property).cloned().unwrap_or_default())
    }
}
