//! Key-value persistence for user preferences.
//!
//! In the browser this is `localStorage`; tests use [`MemoryStore`]. A store
//! that fails never breaks the widget: reads fall back to defaults and failed
//! writes are logged.

use crate::i18n::Language;
use crate::theme::ThemeColor;
use log::{debug, warn};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use wasm_bindgen::JsValue;

pub const KEY_LANGUAGE: &str = "language";
pub const KEY_THEME_COLOR: &str = "stopwatchColor";

#[derive(Debug)]
pub enum StoreError {
    /// No `window` or storage disabled by the browser.
    Unavailable,
    Access(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Unavailable => write!(f, "Key-value storage is not available"),
            StoreError::Access(detail) => write!(f, "Storage access failed: {}", detail),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<JsValue> for StoreError {
    fn from(value: JsValue) -> Self {
        StoreError::Access(format!("{:?}", value))
    }
}

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// `window.localStorage`.
pub struct BrowserStore {
    storage: web_sys::Storage,
}

impl BrowserStore {
    pub fn open() -> Result<Self, StoreError> {
        let window = web_sys::window().ok_or(StoreError::Unavailable)?;
        let storage = window.local_storage()?.ok_or(StoreError::Unavailable)?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.storage.get_item(key)?)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        Ok(self.storage.set_item(key, value)?)
    }
}

#[derive(Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Remembered language and theme color.
pub struct Preferences {
    store: Box<dyn KeyValueStore>,
}

impl Preferences {
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// `localStorage` when available, otherwise an in-memory store that lasts
    /// for the page's lifetime.
    pub fn browser_or_memory() -> Self {
        match BrowserStore::open() {
            Ok(store) => Self::new(Box::new(store)),
            Err(e) => {
                warn!("{}; preferences will not persist", e);
                Self::new(Box::new(MemoryStore::default()))
            }
        }
    }

    pub fn language(&self) -> Language {
        self.read(KEY_LANGUAGE)
            .map(|code| Language::from_code(&code))
            .unwrap_or_default()
    }

    pub fn set_language(&self, language: Language) {
        self.write(KEY_LANGUAGE, language.code());
    }

    pub fn theme_color(&self) -> ThemeColor {
        self.read(KEY_THEME_COLOR)
            .and_then(|raw| ThemeColor::parse(&raw))
            .unwrap_or_default()
    }

    pub fn set_theme_color(&self, color: &ThemeColor) {
        self.write(KEY_THEME_COLOR, color.as_str());
    }

    fn read(&self, key: &str) -> Option<String> {
        match self.store.get(key) {
            Ok(value) => value,
            Err(e) => {
                warn!("Failed to read preference '{}': {}", key, e);
                None
            }
        }
    }

    fn write(&self, key: &str, value: &str) {
        match self.store.set(key, value) {
            Ok(()) => debug!("Saved preference {} = {}", key, value),
            Err(e) => warn!("Failed to save preference '{}': {}", key, e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Err(StoreError::Access("quota".to_string()))
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Unavailable)
        }
    }

    #[test]
    fn test_defaults_when_nothing_stored() {
        let prefs = Preferences::new(Box::new(MemoryStore::default()));
        assert_eq!(prefs.language(), Language::Ko);
        assert_eq!(prefs.theme_color().as_str(), "#ffffff");
    }

    #[test]
    fn test_round_trip_through_store() {
        let prefs = Preferences::new(Box::new(MemoryStore::default()));
        prefs.set_language(Language::Es);
        prefs.set_theme_color(&ThemeColor::parse("#A29BFE").unwrap());

        assert_eq!(prefs.language(), Language::Es);
        assert_eq!(prefs.theme_color().as_str(), "#a29bfe");
    }

    #[test]
    fn test_reads_legacy_storage_keys() {
        let store = MemoryStore::default();
        store.set("language", "ja").unwrap();
        store.set("stopwatchColor", "#00b894").unwrap();
        let prefs = Preferences::new(Box::new(store));

        assert_eq!(prefs.language(), Language::Ja);
        assert_eq!(prefs.theme_color().as_str(), "#00b894");
    }

    #[test]
    fn test_garbage_values_fall_back() {
        let store = MemoryStore::default();
        store.set(KEY_LANGUAGE, "klingon").unwrap();
        store.set(KEY_THEME_COLOR, "red").unwrap();
        let prefs = Preferences::new(Box::new(store));

        assert_eq!(prefs.language(), Language::Ko);
        assert_eq!(prefs.theme_color(), ThemeColor::default());
    }

    #[test]
    fn test_broken_store_is_not_fatal() {
        let prefs = Preferences::new(Box::new(BrokenStore));
        prefs.set_language(Language::En);
        assert_eq!(prefs.language(), Language::Ko);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(StoreError::Unavailable.to_string(), "Key-value storage is not available");
        assert_eq!(
            StoreError::Access("denied".into()).to_string(),
            "Storage access failed: denied"
        );
    }
}
