//! Persistence of the two user preferences (spectrum mode, language).
//!
//! Storage problems are never fatal: a read that fails or returns something
//! unrecognised behaves exactly like "nothing stored", and a failed write is
//! dropped after a debug log line.

use crate::error::StorageError;
use crate::types::{Language, SpectrumMode};
use fnv::FnvHashMap;
use std::str::FromStr;

/// Minimal string key-value backend (browser `localStorage`, memory, ...).
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-process store for native hosts and tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: FnvHashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }

    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

pub struct PreferenceStore<S> {
    store: S,
    spectrum_key: String,
    language_key: String,
}

impl<S: KeyValueStore> PreferenceStore<S> {
    pub fn new(store: S, namespace: &str) -> Self {
        Self {
            store,
            spectrum_key: format!("{namespace}-spectrum"),
            language_key: format!("{namespace}-lang"),
        }
    }

    pub fn spectrum_key(&self) -> &str {
        &self.spectrum_key
    }

    pub fn language_key(&self) -> &str {
        &self.language_key
    }

    pub fn load_spectrum(&self, fallback: SpectrumMode) -> SpectrumMode {
        load_or(&self.store, &self.spectrum_key, fallback)
    }

    pub fn load_language(&self, fallback: Language) -> Language {
        load_or(&self.store, &self.language_key, fallback)
    }

    pub fn save_spectrum(&mut self, mode: SpectrumMode) {
        if let Err(e) = self.store.set(&self.spectrum_key, mode.as_str()) {
            log::debug!("[prefs] could not persist {}: {}", self.spectrum_key, e);
        }
    }

    pub fn save_language(&mut self, language: Language) {
        if let Err(e) = self.store.set(&self.language_key, language.as_str()) {
            log::debug!("[prefs] could not persist {}: {}", self.language_key, e);
        }
    }

    pub fn backend(&self) -> &S {
        &self.store
    }
}

fn load_or<S, T>(store: &S, key: &str, fallback: T) -> T
where
    S: KeyValueStore,
    T: FromStr + Copy,
{
    match store.get(key) {
        Ok(Some(raw)) => raw.parse().unwrap_or_else(|_| {
            log::debug!("[prefs] ignoring invalid {key}={raw:?}");
            fallback
        }),
        Ok(None) => fallback,
        Err(e) => {
            log::debug!("[prefs] read of {key} failed: {e}");
            fallback
        }
    }
}
