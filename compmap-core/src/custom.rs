//! Names flagged as custom components. A label only; never part of the index.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomSet(HashSet<String>);

impl CustomSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        self.0.insert(name.into())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for CustomSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_from_json_array() {
        let set: CustomSet = serde_json::from_str(r#"["Description", "Message"]"#).unwrap();
        assert_eq!(set.len(), 2);
        assert!(set.contains("Message"));
        assert!(!set.contains("message"));
    }

    #[test]
    fn collects_from_str_iter() {
        let set: CustomSet = ["A", "B", "A"].into_iter().collect();
        assert_eq!(set.len(), 2);
    }
}
