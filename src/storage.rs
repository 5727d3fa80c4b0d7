//! String-keyed preference storage.
//!
//! The browser build backs this with `localStorage`; tests and the server
//! render use [`MemoryStore`].

use std::collections::HashMap;

use codee::{string::FromToStringCodec, Decoder, Encoder};

pub const IS_MUTED: &str = "isMuted";
pub const HAS_INTERACTED: &str = "hasInteracted";
pub const USER_ID: &str = "userId";
pub const CURRENT_SECTION: &str = "currentSection";
pub const TIMESTAMP: &str = "timestamp";

pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}

/// Read a typed value. Missing or unparseable entries yield `None`.
pub fn load<T, S>(store: &S, key: &str) -> Option<T>
where
    S: PreferenceStore + ?Sized,
    FromToStringCodec: Decoder<T, Encoded = str>,
{
    let raw = store.get(key)?;
    <FromToStringCodec as Decoder<T>>::decode(&raw).ok()
}

pub fn save<T, S>(store: &mut S, key: &str, value: &T)
where
    S: PreferenceStore + ?Sized,
    FromToStringCodec: Encoder<T, Encoded = String>,
{
    if let Ok(raw) = <FromToStringCodec as Encoder<T>>::encode(value) {
        store.set(key, &raw);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_are_stored_as_words() {
        let mut store = MemoryStore::new();
        save(&mut store, IS_MUTED, &false);
        assert_eq!(store.get(IS_MUTED).as_deref(), Some("false"));
        save(&mut store, IS_MUTED, &true);
        assert_eq!(store.get(IS_MUTED).as_deref(), Some("true"));
    }

    #[test]
    fn test_load_typed_values() {
        let mut store = MemoryStore::new();
        store.set(TIMESTAMP, "1700000000000");
        assert_eq!(load::<i64, _>(&store, TIMESTAMP), Some(1_700_000_000_000));
        assert_eq!(load::<bool, _>(&store, HAS_INTERACTED), None);
    }

    #[test]
    fn test_garbage_does_not_decode() {
        let mut store = MemoryStore::new();
        store.set(IS_MUTED, "maybe");
        assert_eq!(load::<bool, _>(&store, IS_MUTED), None);
    }
}
