use std::path::{Path, PathBuf};
use std::str::FromStr;

use thiserror::Error;

use crate::content::split_front_matter;

/// A single content record within a collection.
///
/// The fields of an article are whatever its front matter declares; nothing
/// about them is known ahead of time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Article {
    /// The file the article was read from, if any.
    pub path: Option<PathBuf>,
    pub fields: toml::Table,
    pub raw_content: String,
}

#[derive(Error, Debug)]
pub enum ParseArticleError {
    #[error("missing TOML front matter")]
    MissingFrontMatter,

    #[error("failed to parse TOML front matter: {0}")]
    InvalidFrontMatter(#[from] toml::de::Error),
}

impl Article {
    pub fn new(fields: toml::Table) -> Self {
        Self {
            path: None,
            fields,
            raw_content: String::new(),
        }
    }

    /// Parses an article from Markdown text with TOML front matter.
    pub fn parse(text: &str, filepath: &Path) -> Result<Self, ParseArticleError> {
        let (front_matter, content) =
            split_front_matter(text).ok_or(ParseArticleError::MissingFrontMatter)?;

        Ok(Self {
            path: Some(filepath.to_owned()),
            fields: front_matter.deserialize()?,
            raw_content: content.to_string(),
        })
    }

    /// Returns the value of the field with the given name.
    ///
    /// A field that is missing from the article returns `None`.
    pub fn get(&self, field: &str) -> Option<&toml::Value> {
        self.fields.get(field)
    }
}

impl From<toml::Table> for Article {
    fn from(fields: toml::Table) -> Self {
        Self::new(fields)
    }
}

/// Parses the fields of an article from a bare TOML table, without delimiters.
impl FromStr for Article {
    type Err = toml::de::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(toml::from_str(s)?))
    }
}

#[cfg(test)]
mod tests {
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parse_article() {
        let text = indoc! {r#"
            +++
            title = "Hello, world"
            tags = ["News", "Tips"]
            +++
            Welcome to the blog.
        "#};

        let article = Article::parse(text, Path::new("content/blog/hello-world.md")).unwrap();

        assert_eq!(
            article.path,
            Some(PathBuf::from("content/blog/hello-world.md"))
        );
        assert_eq!(
            article.get("title"),
            Some(&toml::Value::String("Hello, world".into()))
        );
        assert_eq!(
            article.get("tags"),
            Some(&toml::Value::Array(vec![
                toml::Value::String("News".into()),
                toml::Value::String("Tips".into()),
            ]))
        );
        assert_eq!(article.raw_content, "Welcome to the blog.\n");
    }

    #[test]
    fn test_missing_field_is_none() {
        let article: Article = r#"title = "No tags here""#.parse().unwrap();

        assert_eq!(article.get("tags"), None);
    }

    #[test]
    fn test_parse_article_without_front_matter() {
        let result = Article::parse("Just some text.", Path::new("notes.md"));

        assert!(matches!(result, Err(ParseArticleError::MissingFrontMatter)));
    }

    #[test]
    fn test_parse_article_with_invalid_front_matter() {
        let result = Article::parse("+++\ntags = [\n+++\n", Path::new("broken.md"));

        assert!(matches!(
            result,
            Err(ParseArticleError::InvalidFrontMatter(_))
        ));
    }
}
