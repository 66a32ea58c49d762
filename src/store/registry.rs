// src/store/registry.rs
//! Namespace → entry table registry.
//!
//! Writes are strict: `add`/`add_bulk` on a namespace that was never
//! registered fail with [`AppError::NotRegistered`] and leave the store
//! untouched. Reads are lenient: an unknown namespace or key is `None` /
//! `false`, never an error.

use super::filters::{GetRequest, TransformChain, TransformId};
use super::namespace::NamespaceId;
use super::types::{EntryTable, TextValue};
use crate::core::error::{AppError, Result};
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct LocalizationStore {
    namespaces: HashMap<NamespaceId, EntryTable>,
    transforms: TransformChain,
}

impl LocalizationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the namespace if needed. Existing entries are kept.
    pub fn register(&mut self, source: &str) -> NamespaceId {
        self.register_with(source, EntryTable::new())
    }

    /// Like [`register`](Self::register), then merges `initial` with
    /// `add_bulk` semantics.
    pub fn register_with(&mut self, source: &str, initial: EntryTable) -> NamespaceId {
        let id = NamespaceId::derive(source);
        let table = self.namespaces.entry(id.clone()).or_insert_with(|| {
            log::debug!("Registered namespace {} ({})", id.short(), source.trim());
            EntryTable::new()
        });

        if !initial.is_empty() {
            log::debug!(
                "Merging {} initial entries into namespace {}",
                initial.len(),
                id.short()
            );
            table.merge(initial);
        }
        id
    }

    pub fn add(
        &mut self,
        source: &str,
        key: impl Into<String>,
        value: impl Into<TextValue>,
    ) -> Result<()> {
        let table = self.table_mut(source)?;
        let key = key.into();
        log::trace!("Adding entry '{}'", key);
        table.insert(key, value);
        Ok(())
    }

    pub fn add_bulk(&mut self, source: &str, entries: EntryTable) -> Result<()> {
        let table = self.table_mut(source)?;
        log::trace!("Adding {} entries", entries.len());
        table.merge(entries);
        Ok(())
    }

    /// Resolve `key` to text. `lowercase` folds ASCII letters only; the
    /// transform chain sees the folded value.
    pub fn get(&self, source: &str, key: &str, plural: bool, lowercase: bool) -> Option<String> {
        self.lookup(source, key, plural, lowercase)
            .map(ResolvedRead::finish)
    }

    /// First half of [`get`](Self::get): everything that needs the store.
    /// Callers holding a lock drop it before calling
    /// [`ResolvedRead::finish`], so transforms may use the store again.
    pub fn lookup(
        &self,
        source: &str,
        key: &str,
        plural: bool,
        lowercase: bool,
    ) -> Option<ResolvedRead> {
        let namespace = NamespaceId::derive(source);
        let Some(value) = self.namespaces.get(&namespace).and_then(|t| t.get(key)) else {
            log::trace!("Miss '{}' in namespace {}", key, namespace.short());
            return None;
        };
        log::trace!("Hit '{}' in namespace {}", key, namespace.short());

        let mut text = value.resolve(plural).to_string();
        if lowercase {
            text = text.to_ascii_lowercase();
        }

        Some(ResolvedRead {
            namespace,
            key: key.to_string(),
            plural,
            lowercase,
            text,
            transforms: self.transforms.clone(),
        })
    }

    pub fn has(&self, source: &str, key: &str) -> bool {
        let namespace = NamespaceId::derive(source);
        let found = self
            .namespaces
            .get(&namespace)
            .is_some_and(|table| table.contains_key(key));
        log::trace!("has '{}' in namespace {}: {}", key, namespace.short(), found);
        found
    }

    /// Borrowed view of the whole namespace; callers cannot mutate it.
    pub fn get_all(&self, source: &str) -> Option<&EntryTable> {
        self.namespaces.get(&NamespaceId::derive(source))
    }

    pub fn is_registered(&self, source: &str) -> bool {
        self.namespaces.contains_key(&NamespaceId::derive(source))
    }

    pub fn namespace_count(&self) -> usize {
        self.namespaces.len()
    }

    pub fn add_transform<F>(&mut self, transform: F) -> TransformId
    where
        F: Fn(String, &GetRequest<'_>) -> String + Send + Sync + 'static,
    {
        self.transforms.push(transform)
    }

    pub fn remove_transform(&mut self, id: TransformId) -> bool {
        self.transforms.remove(id)
    }

    pub fn clear_transforms(&mut self) {
        self.transforms.clear();
    }

    /// Drop every namespace and transform.
    pub fn clear(&mut self) {
        self.namespaces.clear();
        self.transforms.clear();
    }

    fn table_mut(&mut self, source: &str) -> Result<&mut EntryTable> {
        let id = NamespaceId::derive(source);
        match self.namespaces.get_mut(&id) {
            Some(table) => Ok(table),
            None => {
                log::warn!("Write to unregistered namespace {}", id.short());
                Err(AppError::not_registered(id.as_str()))
            }
        }
    }
}

/// A found entry plus the transforms to run on it, detached from the store.
#[derive(Debug)]
pub struct ResolvedRead {
    namespace: NamespaceId,
    key: String,
    plural: bool,
    lowercase: bool,
    text: String,
    transforms: TransformChain,
}

impl ResolvedRead {
    pub fn finish(self) -> String {
        let ResolvedRead {
            namespace,
            key,
            plural,
            lowercase,
            text,
            transforms,
        } = self;

        let request = GetRequest {
            namespace: &namespace,
            key: &key,
            plural,
            lowercase,
        };
        transforms.apply(text, &request)
    }
}
