// src/commands/parsing.rs
//! Argument helpers shared by the store commands.

use crate::core::prelude::*;

/// Store handle the lookup commands read from.
pub type SharedStore = &'static RwLock<LocalizationStore>;

/// Split `args` into positionals and `--flags`.
pub fn split_flags<'a>(args: &[&'a str]) -> (Vec<&'a str>, Vec<&'a str>) {
    args.iter().copied().partition(|arg| !arg.starts_with("--"))
}

pub fn usage_error(name: &str, usage: &str) -> AppError {
    AppError::Validation(format!("Usage: {} {}", name, usage))
}

#[cfg(test)]
pub(crate) fn leaked_store(source: &str) -> SharedStore {
    let mut store = LocalizationStore::new();
    store.register_with(
        source,
        [("greeting", TextValue::plain("Hello")), ("item", ("Item", "Items").into())]
            .into_iter()
            .collect(),
    );
    Box::leak(Box::new(RwLock::new(store)))
}
