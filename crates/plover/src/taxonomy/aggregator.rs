use std::slice;

use indexmap::IndexSet;
use log::debug;

use crate::content::Article;
use crate::source::ContentSource;
use crate::taxonomy::{RawTerm, TaxonomyPath, Term};

/// Derives taxonomy terms from the collections of a [`ContentSource`].
///
/// Nothing is cached: every call fetches the collection again.
#[derive(Debug, Clone)]
pub struct Taxonomies<S> {
    source: S,
}

impl<S: ContentSource> Taxonomies<S> {
    /// Returns a new [`Taxonomies`] backed by the given source.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Returns every term of `taxonomy` across the articles of `property`,
    /// in the order they first appear.
    ///
    /// Errors from the source are returned as-is.
    pub async fn all(&self, property: &str, taxonomy: &str) -> Result<Vec<Term>, S::Error> {
        let articles = self.source.fetch_collection(property).await?;

        let terms = collect_terms(&articles, taxonomy);

        debug!(
            "collected {} '{taxonomy}' terms from {} articles in '{property}'",
            terms.len(),
            articles.len()
        );

        Ok(terms)
    }

    /// Returns the term of `taxonomy` in `property` with the given slug.
    ///
    /// A slug that matches no term is `Ok(None)`, not an error.
    pub async fn find(
        &self,
        property: &str,
        taxonomy: &str,
        slug: &str,
    ) -> Result<Option<Term>, S::Error> {
        let terms = self.all(property, taxonomy).await?;

        Ok(terms.into_iter().find(|term| term.slug == slug))
    }

    /// Like [`Taxonomies::all`], for the taxonomy at the given path.
    pub async fn all_at(&self, path: &TaxonomyPath) -> Result<Vec<Term>, S::Error> {
        self.all(path.property(), path.taxonomy()).await
    }

    /// Like [`Taxonomies::find`], for the taxonomy at the given path.
    pub async fn find_at(
        &self,
        path: &TaxonomyPath,
        slug: &str,
    ) -> Result<Option<Term>, S::Error> {
        self.find(path.property(), path.taxonomy(), slug).await
    }
}

/// Collects the terms of `taxonomy` from the given articles.
///
/// The taxonomy field of an article may be missing, a single value, or an
/// array of values. Arrays are flattened one level, empty values are dropped,
/// and repeated values are kept only at their first occurrence. Terms are
/// deduplicated by raw value, so two values with the same slug both survive.
pub fn collect_terms(articles: &[Article], taxonomy: &str) -> Vec<Term> {
    let raw_terms = articles
        .iter()
        .filter_map(|article| article.get(taxonomy))
        .flat_map(|value| match value {
            toml::Value::Array(values) => values.as_slice(),
            value => slice::from_ref(value),
        })
        .filter_map(|value| {
            let raw_term = RawTerm::from_value(value);

            let is_scalar = !matches!(value, toml::Value::Array(_) | toml::Value::Table(_));
            if !is_scalar {
                debug!("skipping non-scalar '{taxonomy}' value: {value}");
            }

            raw_term
        })
        .collect::<IndexSet<_>>();

    raw_terms.into_iter().map(RawTerm::into_term).collect()
}
