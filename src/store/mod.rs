// src/store/mod.rs
//! Process-wide string registry.
//!
//! [`LocalizationStore`] is an ordinary owned value; create one per test or
//! per component. The free functions below operate on a single lazily
//! created instance shared by the whole process. [`reset`] is its only
//! teardown point.

pub mod filters;
pub mod loader;
pub mod namespace;
pub mod registry;
pub mod types;

pub use filters::{GetRequest, TransformChain, TransformId};
pub use loader::{load_catalog, parse_catalog, CatalogFormat};
pub use namespace::NamespaceId;
pub use registry::{LocalizationStore, ResolvedRead};
pub use types::{EntryTable, TextForms, TextValue};

use crate::core::error::Result;
use lazy_static::lazy_static;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

lazy_static! {
    static ref INSTANCE: RwLock<LocalizationStore> = RwLock::new(LocalizationStore::new());
}

pub fn instance() -> &'static RwLock<LocalizationStore> {
    &INSTANCE
}

// Every operation is a single step, so a panic mid-write cannot leave a
// half-applied update behind.
fn read() -> RwLockReadGuard<'static, LocalizationStore> {
    INSTANCE.read().unwrap_or_else(PoisonError::into_inner)
}

fn write() -> RwLockWriteGuard<'static, LocalizationStore> {
    INSTANCE.write().unwrap_or_else(PoisonError::into_inner)
}

pub fn register(source: &str) -> NamespaceId {
    write().register(source)
}

pub fn register_with(source: &str, initial: EntryTable) -> NamespaceId {
    write().register_with(source, initial)
}

pub fn add(source: &str, key: impl Into<String>, value: impl Into<TextValue>) -> Result<()> {
    write().add(source, key, value)
}

pub fn add_bulk(source: &str, entries: EntryTable) -> Result<()> {
    write().add_bulk(source, entries)
}

/// Transforms run after the read lock is released.
pub fn get(source: &str, key: &str, plural: bool, lowercase: bool) -> Option<String> {
    let pending = read().lookup(source, key, plural, lowercase);
    pending.map(ResolvedRead::finish)
}

pub fn has(source: &str, key: &str) -> bool {
    read().has(source, key)
}

/// Owned copy; changing it does not touch the registry.
pub fn get_all(source: &str) -> Option<EntryTable> {
    read().get_all(source).cloned()
}

pub fn is_registered(source: &str) -> bool {
    read().is_registered(source)
}

pub fn namespace_count() -> usize {
    read().namespace_count()
}

pub fn add_transform<F>(transform: F) -> TransformId
where
    F: Fn(String, &GetRequest<'_>) -> String + Send + Sync + 'static,
{
    write().add_transform(transform)
}

pub fn remove_transform(id: TransformId) -> bool {
    write().remove_transform(id)
}

/// Drop every namespace and transform from the shared instance.
pub fn reset() {
    log::debug!("Resetting shared localization store");
    write().clear();
}

#[macro_export]
macro_rules! l10n {
    ($source:expr, $key:expr) => {
        $crate::store::get($source, $key, false, false).unwrap_or_default()
    };
    ($source:expr, $key:expr, $plural:expr) => {
        $crate::store::get($source, $key, $plural, false).unwrap_or_default()
    };
}
