use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Field → message map produced by step validation. Empty means valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldErrors<K: Ord> {
    entries: BTreeMap<K, String>,
}

impl<K: Ord> Default for FieldErrors<K> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }
}

impl<K: Ord + Copy> FieldErrors<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: K, message: impl Into<String>) {
        self.entries.insert(field, message.into());
    }

    /// Records `message` when `value` is blank.
    pub fn require_text(&mut self, field: K, value: &str, message: &str) {
        if value.trim().is_empty() {
            self.insert(field, message);
        }
    }

    pub fn remove(&mut self, field: K) -> Option<String> {
        self.entries.remove(&field)
    }

    pub fn get(&self, field: K) -> Option<&str> {
        self.entries.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: K) -> bool {
        self.entries.contains_key(&field)
    }

    pub fn is_valid(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = K> + '_ {
        self.entries.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (K, &str)> + '_ {
        self.entries
            .iter()
            .map(|(field, message)| (*field, message.as_str()))
    }
}

/// Set-like list field (skills, benefits, interviewers): trimmed values,
/// case-insensitive duplicate suppression, insertion order kept for display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagSet(Vec<String>);

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` for blank values and duplicates.
    pub fn add(&mut self, value: &str) -> bool {
        let value = value.trim();
        if value.is_empty() || self.contains(value) {
            return false;
        }
        self.0.push(value.to_string());
        true
    }

    pub fn remove(&mut self, value: &str) -> bool {
        let value = value.trim();
        let before = self.0.len();
        self.0.retain(|existing| !existing.eq_ignore_ascii_case(value));
        self.0.len() != before
    }

    pub fn contains(&self, value: &str) -> bool {
        let value = value.trim();
        self.0.iter().any(|existing| existing.eq_ignore_ascii_case(value))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.0.clone()
    }
}

impl<S: AsRef<str>> FromIterator<S> for TagSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut tags = TagSet::new();
        for value in iter {
            tags.add(value.as_ref());
        }
        tags
    }
}

/// Ordered free-text list (requirements, screening questions). Duplicates and
/// blank placeholder rows are allowed while editing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryList(Vec<String>);

impl EntryList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, value: impl Into<String>) {
        self.0.push(value.into());
    }

    pub fn set(&mut self, index: usize, value: impl Into<String>) -> bool {
        match self.0.get_mut(index) {
            Some(slot) => {
                *slot = value.into();
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, index: usize) -> Option<String> {
        if index < self.0.len() {
            Some(self.0.remove(index))
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn has_blank(&self) -> bool {
        self.0.iter().any(|entry| entry.trim().is_empty())
    }

    /// Trimmed, non-blank entries in order.
    pub fn filled(&self) -> Vec<String> {
        self.0
            .iter()
            .map(|entry| entry.trim())
            .filter(|entry| !entry.is_empty())
            .map(str::to_string)
            .collect()
    }
}

impl<S: Into<String>> FromIterator<S> for EntryList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_set_suppresses_duplicates() {
        let mut skills = TagSet::new();
        assert!(skills.add("Rust"));
        assert!(!skills.add(" rust "));
        assert!(!skills.add("   "));
        assert!(skills.add("SQL"));
        assert_eq!(skills.as_slice(), &["Rust".to_string(), "SQL".to_string()]);

        assert!(skills.remove("RUST"));
        assert!(!skills.remove("Go"));
        assert_eq!(skills.len(), 1);
    }

    #[test]
    fn entry_list_keeps_duplicates_and_order() {
        let mut requirements: EntryList = ["Ship code", "Ship code"].into_iter().collect();
        requirements.push("");
        assert_eq!(requirements.len(), 3);
        assert!(requirements.has_blank());

        assert!(requirements.set(2, "Review code"));
        assert!(!requirements.set(9, "nope"));
        assert_eq!(requirements.remove(0), Some("Ship code".to_string()));
        assert_eq!(requirements.remove(5), None);
        assert_eq!(requirements.filled(), vec!["Ship code", "Review code"]);
    }

    #[test]
    fn field_errors_track_messages() {
        let mut errors: FieldErrors<u8> = FieldErrors::new();
        errors.require_text(1, "  ", "required");
        errors.require_text(2, "value", "required");
        assert_eq!(errors.get(1), Some("required"));
        assert!(!errors.contains(2));
        assert!(!errors.is_valid());
        errors.remove(1);
        assert!(errors.is_valid());
    }
}
