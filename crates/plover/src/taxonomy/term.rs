use std::fmt;

use serde::Serialize;

use crate::taxonomy::kebab_case;

/// A taxonomy term.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Term {
    pub slug: String,
    pub title: String,
}

impl Term {
    /// Returns a new [`Term`] with a slug derived from the given title.
    pub fn new(title: impl Into<String>) -> Self {
        let title = title.into();

        Self {
            slug: kebab_case(&title),
            title,
        }
    }
}

/// A raw taxonomy value that can stand in for a term.
///
/// Terms are deduplicated on these values, before any slug is derived, so the
/// string `"1"` and the integer `1` stay distinct. Floats with an integral
/// value are integers here, so `1.0` and `1` are the same term.
#[derive(Debug, PartialEq, Eq, Hash)]
pub(crate) enum RawTerm {
    Text(String),
    Integer(i64),
    /// The bit pattern of a float. Zero and NaN never get this far.
    Float(u64),
    Boolean(bool),
    Datetime(String),
}

impl RawTerm {
    /// Returns the [`RawTerm`] for the given value.
    ///
    /// Empty values (`""`, `false`, `0`, `0.0` and NaN) and values that aren't
    /// scalars return `None`.
    pub fn from_value(value: &toml::Value) -> Option<Self> {
        match value {
            toml::Value::String(text) if text.is_empty() => None,
            toml::Value::String(text) => Some(Self::Text(text.clone())),
            toml::Value::Integer(0) => None,
            toml::Value::Integer(number) => Some(Self::Integer(*number)),
            toml::Value::Float(number) if *number == 0.0 || number.is_nan() => None,
            toml::Value::Float(number) => Some(Self::from_float(*number)),
            toml::Value::Boolean(false) => None,
            toml::Value::Boolean(true) => Some(Self::Boolean(true)),
            toml::Value::Datetime(datetime) => Some(Self::Datetime(datetime.to_string())),
            toml::Value::Array(_) | toml::Value::Table(_) => None,
        }
    }

    fn from_float(number: f64) -> Self {
        const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

        if number.fract() == 0.0 && number.abs() <= MAX_SAFE_INTEGER {
            Self::Integer(number as i64)
        } else {
            Self::Float(number.to_bits())
        }
    }

    pub fn into_term(self) -> Term {
        Term::new(self.to_string())
    }
}

impl fmt::Display for RawTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => write!(f, "{text}"),
            Self::Integer(number) => write!(f, "{number}"),
            Self::Float(bits) => match f64::from_bits(*bits) {
                number if number == f64::INFINITY => write!(f, "Infinity"),
                number if number == f64::NEG_INFINITY => write!(f, "-Infinity"),
                number => write!(f, "{number}"),
            },
            Self::Boolean(value) => write!(f, "{value}"),
            Self::Datetime(datetime) => write!(f, "{datetime}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_term_new() {
        assert_eq!(
            Term::new("Open Source"),
            Term {
                slug: "open-source".to_string(),
                title: "Open Source".to_string(),
            }
        );
    }

    #[test]
    fn test_term_serializes_as_slug_and_title() {
        let json = serde_json::to_value(Term::new("C++")).unwrap();

        assert_eq!(json, serde_json::json!({ "slug": "c", "title": "C++" }));
    }

    #[test]
    fn test_raw_term_skips_empty_values() {
        assert_eq!(RawTerm::from_value(&toml::Value::String(String::new())), None);
        assert_eq!(RawTerm::from_value(&toml::Value::Integer(0)), None);
        assert_eq!(RawTerm::from_value(&toml::Value::Float(0.0)), None);
        assert_eq!(RawTerm::from_value(&toml::Value::Float(f64::NAN)), None);
        assert_eq!(RawTerm::from_value(&toml::Value::Boolean(false)), None);
        assert_eq!(
            RawTerm::from_value(&toml::Value::Array(vec![toml::Value::String("A".into())])),
            None
        );
    }

    #[test]
    fn test_raw_term_titles() {
        let title = |value: toml::Value| RawTerm::from_value(&value).unwrap().to_string();

        assert_eq!(title(toml::Value::String("News".into())), "News");
        assert_eq!(title(toml::Value::Integer(2024)), "2024");
        assert_eq!(title(toml::Value::Float(1.5)), "1.5");
        assert_eq!(title(toml::Value::Float(2.0)), "2");
        assert_eq!(title(toml::Value::Boolean(true)), "true");
        assert_eq!(title(toml::Value::Float(f64::INFINITY)), "Infinity");
        assert_eq!(title(toml::Value::Float(f64::NEG_INFINITY)), "-Infinity");
    }

    #[test]
    fn test_raw_term_integral_floats_are_integers() {
        assert_eq!(
            RawTerm::from_value(&toml::Value::Float(1.0)),
            RawTerm::from_value(&toml::Value::Integer(1))
        );
        assert_eq!(
            RawTerm::from_value(&toml::Value::Float(-3.0)),
            Some(RawTerm::Integer(-3))
        );
        assert_eq!(
            RawTerm::from_value(&toml::Value::Float(1.5)),
            Some(RawTerm::Float(1.5f64.to_bits()))
        );
    }
}
