use std::sync::OnceLock;

use regex::Regex;

static TOML_REGEX: OnceLock<Regex> = OnceLock::new();

fn toml_regex() -> &'static Regex {
    TOML_REGEX.get_or_init(|| {
        let pattern = r"^[[:space:]]*\+\+\+(\r?\n(?s).*?(?-s))\+\+\+[[:space:]]*(?:$|(?:\r?\n((?s).*(?-s))$))";
        Regex::new(pattern).expect("failed to compile regex for TOML front matter")
    })
}

/// The raw, not yet deserialized, TOML between the `+++` delimiters.
#[derive(Debug, PartialEq, Eq)]
pub struct RawTomlFrontMatter<'a>(&'a str);

impl<'a> RawTomlFrontMatter<'a> {
    pub fn as_str(&self) -> &'a str {
        self.0
    }

    pub fn deserialize<T>(&self) -> Result<T, toml::de::Error>
    where
        T: serde::de::DeserializeOwned,
    {
        toml::from_str(self.0)
    }
}

/// Splits the given text into its TOML front matter and the content that follows it.
///
/// Returns `None` when the text does not start with a `+++` block.
pub fn split_front_matter(text: &str) -> Option<(RawTomlFrontMatter<'_>, &str)> {
    let captures = toml_regex().captures(text)?;

    let front_matter = RawTomlFrontMatter(captures.get(1)?.as_str());
    let content = captures.get(2).map_or("", |m| m.as_str());

    Some((front_matter, content))
}
