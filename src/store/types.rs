// src/store/types.rs
use serde::{Deserialize, Serialize};
use std::collections::hash_map;
use std::collections::HashMap;

/// Singular text with an optional plural variant.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TextForms {
    pub singular: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plural: Option<String>,
}

/// A stored, already translated text.
///
/// Catalog files write a plain string for `Plain` and a table with
/// `singular` (and optionally `plural`) for `Forms`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum TextValue {
    Plain(String),
    Forms(TextForms),
}

impl TextValue {
    pub fn plain(text: impl Into<String>) -> Self {
        TextValue::Plain(text.into())
    }

    pub fn forms(singular: impl Into<String>, plural: Option<String>) -> Self {
        TextValue::Forms(TextForms {
            singular: singular.into(),
            plural,
        })
    }

    /// Plain text answers both requests; forms fall back to `singular`
    /// when no plural is stored.
    pub fn resolve(&self, plural: bool) -> &str {
        match self {
            TextValue::Plain(text) => text.as_str(),
            TextValue::Forms(forms) => match (&forms.plural, plural) {
                (Some(p), true) => p.as_str(),
                _ => forms.singular.as_str(),
            },
        }
    }

    pub fn singular(&self) -> &str {
        self.resolve(false)
    }

    pub fn plural(&self) -> &str {
        self.resolve(true)
    }
}

impl From<&str> for TextValue {
    fn from(text: &str) -> Self {
        TextValue::plain(text)
    }
}

impl From<String> for TextValue {
    fn from(text: String) -> Self {
        TextValue::Plain(text)
    }
}

impl From<(&str, &str)> for TextValue {
    fn from((singular, plural): (&str, &str)) -> Self {
        TextValue::forms(singular, Some(plural.to_string()))
    }
}

impl From<TextForms> for TextValue {
    fn from(forms: TextForms) -> Self {
        TextValue::Forms(forms)
    }
}

/// Key → text mapping of one namespace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct EntryTable {
    entries: HashMap<String, TextValue>,
}

impl EntryTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&TextValue> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Last write wins.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<TextValue>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Merge `other` in, overwriting colliding keys only.
    pub fn merge(&mut self, other: EntryTable) {
        self.entries.extend(other.entries);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> hash_map::Iter<'_, String, TextValue> {
        self.entries.iter()
    }

    /// Entries ordered by key, for stable output.
    pub fn sorted(&self) -> Vec<(&str, &TextValue)> {
        let mut items: Vec<_> = self.entries.iter().map(|(k, v)| (k.as_str(), v)).collect();
        items.sort_by(|a, b| a.0.cmp(b.0));
        items
    }
}

impl<K, V> Extend<(K, V)> for EntryTable
where
    K: Into<String>,
    V: Into<TextValue>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V> FromIterator<(K, V)> for EntryTable
where
    K: Into<String>,
    V: Into<TextValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = EntryTable::new();
        table.extend(iter);
        table
    }
}

impl IntoIterator for EntryTable {
    type Item = (String, TextValue);
    type IntoIter = hash_map::IntoIter<String, TextValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a EntryTable {
    type Item = (&'a String, &'a TextValue);
    type IntoIter = hash_map::Iter<'a, String, TextValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
