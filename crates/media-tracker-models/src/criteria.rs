use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Fields a filter entry can target
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FilterField {
    /// Exact match against the item's status label
    Status,
    /// Substring match against the genre
    Genre,
    /// Exact match against the platform
    Platform,
}

impl FilterField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Status => "status",
            Self::Genre => "genre",
            Self::Platform => "platform",
        }
    }
}

impl FromStr for FilterField {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "status" => Ok(Self::Status),
            "genre" => Ok(Self::Genre),
            "platform" => Ok(Self::Platform),
            _ => Err(ValidationError::UnknownFilterField { input: s.trim().to_string() }),
        }
    }
}

impl fmt::Display for FilterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How multiple recognized criteria entries combine
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FilterMode {
    /// Only the first entry with a recognized field name decides the match
    #[default]
    FirstRecognized,
    /// Every entry with a recognized field name must match
    All,
}

/// Ordered filter entries of (field name, value).
///
/// Field names are kept as given so that unrecognized names can be carried
/// and skipped during matching rather than rejected up front.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    entries: Vec<(String, String)>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(field, value);
        self
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.entries.push((field.into(), value.into()));
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Entries whose field name is recognized, in insertion order
    pub fn recognized(&self) -> impl Iterator<Item = (FilterField, &str)> + '_ {
        self.entries
            .iter()
            .filter_map(|(field, value)| field.parse::<FilterField>().ok().map(|f| (f, value.as_str())))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FilterCriteria {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recognized_skips_unknown_fields() {
        let criteria = FilterCriteria::new()
            .with("year", "2010")
            .with("GENRE", "drama")
            .with("platform", "Netflix");

        let recognized: Vec<_> = criteria.recognized().collect();
        assert_eq!(
            recognized,
            vec![(FilterField::Genre, "drama"), (FilterField::Platform, "Netflix")]
        );
        assert_eq!(criteria.len(), 3);
    }

    #[test]
    fn test_parse_field_names() {
        assert_eq!(" Platform ".parse::<FilterField>().unwrap(), FilterField::Platform);
        assert_eq!(
            "year".parse::<FilterField>().unwrap_err(),
            ValidationError::UnknownFilterField { input: "year".to_string() }
        );
    }

    #[test]
    fn test_default_mode_is_first_recognized() {
        assert_eq!(FilterMode::default(), FilterMode::FirstRecognized);
    }
}
