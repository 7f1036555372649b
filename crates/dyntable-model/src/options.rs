//! Ordered option vocabularies.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{ModelError, Result};

/// An ordered sequence of option values.
///
/// Order is insertion order and is preserved through serialization so the
/// presentation layer can display options deterministically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionSet(Vec<String>);

impl OptionSet {
    /// Wrap values as-is, without validation.
    pub fn new(values: Vec<String>) -> Self {
        Self(values)
    }

    /// Build a set from values, rejecting blank and duplicate entries.
    pub fn try_from_values<I, S>(values: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let set = Self(values.into_iter().map(Into::into).collect());
        set.validate()?;
        Ok(set)
    }

    /// Check that no entry is blank and no entry appears twice.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.0.len());
        for value in &self.0 {
            if value.trim().is_empty() {
                return Err(ModelError::BlankOption);
            }
            if !seen.insert(value.as_str()) {
                return Err(ModelError::DuplicateOption(value.clone()));
            }
        }
        Ok(())
    }

    pub fn contains(&self, value: &str) -> bool {
        self.0.iter().any(|v| v == value)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Append a value. Callers are responsible for validating it first.
    pub fn push(&mut self, value: String) {
        self.0.push(value);
    }
}

impl<S: Into<String>> FromIterator<S> for OptionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_from_values_rejects_blank() {
        let result = OptionSet::try_from_values(["A", "  "]);
        assert_eq!(result, Err(ModelError::BlankOption));
    }

    #[test]
    fn try_from_values_rejects_duplicates() {
        let result = OptionSet::try_from_values(["A", "B", "A"]);
        assert_eq!(result, Err(ModelError::DuplicateOption("A".to_string())));
    }

    #[test]
    fn duplicate_check_is_case_sensitive() {
        let set = OptionSet::try_from_values(["a", "A"]).expect("distinct values");
        assert_eq!(set.len(), 2);
        assert!(set.contains("a"));
        assert!(!set.contains("b"));
    }
}
