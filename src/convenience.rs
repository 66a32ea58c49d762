// src/convenience.rs
//! Call-site helpers bound to one namespace source.
//!
//! Failed writes are reported to an optional observer and turned into
//! `false`; reads render a missing entry as nothing (empty string, or no
//! output for the echo variants).

use crate::core::error::{AppError, Result};
use crate::core::helpers::html_escape;
use crate::store::{self, EntryTable, LocalizationStore, ResolvedRead, TextValue};
use std::io::{self, Write};
use std::sync::{PoisonError, RwLock};

pub type ErrorObserver = Box<dyn Fn(&AppError) + Send + Sync>;

pub struct Localizer<'s> {
    store: &'s RwLock<LocalizationStore>,
    source: String,
    on_error: Option<ErrorObserver>,
}

impl Localizer<'static> {
    /// Bind the process-wide store.
    pub fn global(source: impl Into<String>) -> Self {
        Self::new(store::instance(), source)
    }
}

impl<'s> Localizer<'s> {
    pub fn new(store: &'s RwLock<LocalizationStore>, source: impl Into<String>) -> Self {
        Self {
            store,
            source: source.into(),
            on_error: None,
        }
    }

    pub fn with_error_observer<F>(mut self, observer: F) -> Self
    where
        F: Fn(&AppError) + Send + Sync + 'static,
    {
        self.on_error = Some(Box::new(observer));
        self
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    // ----- writes -----

    pub fn register(&self) -> bool {
        self.write(|s, source| {
            s.register(source);
            Ok(())
        })
    }

    pub fn register_with(&self, initial: EntryTable) -> bool {
        self.write(move |s, source| {
            s.register_with(source, initial);
            Ok(())
        })
    }

    pub fn add(&self, key: impl Into<String>, value: impl Into<TextValue>) -> bool {
        self.write(move |s, source| s.add(source, key, value))
    }

    pub fn add_bulk(&self, entries: EntryTable) -> bool {
        self.write(move |s, source| s.add_bulk(source, entries))
    }

    // ----- reads -----

    pub fn get(&self, key: &str, plural: bool, lowercase: bool) -> Option<String> {
        let pending = self
            .store
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .lookup(&self.source, key, plural, lowercase);
        pending.map(ResolvedRead::finish)
    }

    pub fn has(&self, key: &str) -> bool {
        self.store
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .has(&self.source, key)
    }

    pub fn all(&self) -> Option<EntryTable> {
        self.store
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get_all(&self.source)
            .cloned()
    }

    pub fn singular(&self, key: &str) -> Option<String> {
        self.get(key, false, false)
    }

    pub fn plural(&self, key: &str) -> Option<String> {
        self.get(key, true, false)
    }

    /// Missing entries render as `""`.
    pub fn text(&self, key: &str) -> String {
        self.singular(key).unwrap_or_default()
    }

    pub fn esc_singular(&self, key: &str) -> String {
        self.singular(key)
            .map(|text| html_escape(&text))
            .unwrap_or_default()
    }

    pub fn esc_plural(&self, key: &str) -> String {
        self.plural(key)
            .map(|text| html_escape(&text))
            .unwrap_or_default()
    }

    // ----- echo -----

    pub fn echo_singular<W: Write>(&self, out: &mut W, key: &str) -> io::Result<()> {
        Self::echo(out, self.singular(key))
    }

    pub fn echo_plural<W: Write>(&self, out: &mut W, key: &str) -> io::Result<()> {
        Self::echo(out, self.plural(key))
    }

    pub fn echo_esc_singular<W: Write>(&self, out: &mut W, key: &str) -> io::Result<()> {
        Self::echo(out, self.singular(key).map(|text| html_escape(&text)))
    }

    pub fn echo_esc_plural<W: Write>(&self, out: &mut W, key: &str) -> io::Result<()> {
        Self::echo(out, self.plural(key).map(|text| html_escape(&text)))
    }

    fn echo<W: Write>(out: &mut W, text: Option<String>) -> io::Result<()> {
        match text {
            Some(text) => out.write_all(text.as_bytes()),
            None => Ok(()),
        }
    }

    fn write<F>(&self, op: F) -> bool
    where
        F: FnOnce(&mut LocalizationStore, &str) -> Result<()>,
    {
        let result = {
            let mut guard = self.store.write().unwrap_or_else(PoisonError::into_inner);
            op(&mut *guard, self.source.as_str())
        };

        match result {
            Ok(()) => true,
            Err(e) => {
                if let Some(observer) = &self.on_error {
                    observer(&e);
                }
                false
            }
        }
    }
}
