use std::cell::RefCell;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Storage key the contact record is persisted under.
pub const CONTACT_STORAGE_KEY: &str = "pfmarket-user";

/// Digits a phone number must have (without country code).
pub const PHONE_DIGITS: usize = 10;

/// Contact details entered in the first booking step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingContact {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
}

impl BookingContact {
    pub fn new(name: impl Into<String>, phone: &str, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: sanitize_phone(phone),
            email: email.into(),
        }
    }

    /// Parse a persisted record. Anything that is not a JSON object yields `None`.
    pub fn from_json(raw: &str) -> Option<Self> {
        match serde_json::from_str(raw) {
            Ok(contact) => Some(contact),
            Err(e) => {
                tracing::debug!("discarding unparsable contact record: {e}");
                None
            }
        }
    }

    pub fn to_json(&self) -> Result<String, StoreError> {
        serde_json::to_string(self).map_err(|e| StoreError::Serialize(e.to_string()))
    }

    /// Per-field merge: keep `self`'s non-empty fields, fill the rest from `fallback`.
    pub fn or_fields_from(self, fallback: &BookingContact) -> BookingContact {
        fn pick(primary: String, fallback: &str) -> String {
            if primary.is_empty() {
                fallback.to_string()
            } else {
                primary
            }
        }
        BookingContact {
            name: pick(self.name, &fallback.name),
            phone: pick(self.phone, &fallback.phone),
            email: pick(self.email, &fallback.email),
        }
    }
}

/// Strip every non-digit and keep at most ten digits.
pub fn sanitize_phone(input: &str) -> String {
    input
        .chars()
        .filter(char::is_ascii_digit)
        .take(PHONE_DIGITS)
        .collect()
}

/// True when the (already sanitised) phone has exactly ten digits.
pub fn is_valid_phone(phone: &str) -> bool {
    phone.len() == PHONE_DIGITS && phone.chars().all(|c| c.is_ascii_digit())
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("could not serialize contact: {0}")]
    Serialize(String),
}

/// Persistent key-value home for the contact record (browser localStorage in the UI).
///
/// `get` never fails: missing, unreadable and malformed records all read as `None`.
pub trait ContactStore {
    fn get(&self, key: &str) -> Option<BookingContact>;

    fn set(&self, key: &str, contact: &BookingContact) -> Result<(), StoreError>;
}

/// In-memory store holding raw serialized values, so malformed data can be planted.
#[derive(Debug, Default)]
pub struct MemoryContactStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryContactStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a raw value as if some other code had written it.
    pub fn put_raw(&self, key: &str, raw: impl Into<String>) {
        self.entries.borrow_mut().insert(key.to_string(), raw.into());
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl ContactStore for MemoryContactStore {
    fn get(&self, key: &str) -> Option<BookingContact> {
        let raw = self.entries.borrow().get(key).cloned()?;
        BookingContact::from_json(&raw)
    }

    fn set(&self, key: &str, contact: &BookingContact) -> Result<(), StoreError> {
        let raw = contact.to_json()?;
        self.entries.borrow_mut().insert(key.to_string(), raw);
        Ok(())
    }
}
