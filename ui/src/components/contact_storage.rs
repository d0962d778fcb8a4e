use pfmarket_common::contact::{BookingContact, ContactStore, StoreError};

/// [`ContactStore`] backed by `window.localStorage`.
///
/// Outside the browser an in-process map stands in, so the mobile build
/// still pre-fills within one session.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LocalStorageContactStore;

#[cfg(target_family = "wasm")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

#[cfg(not(target_family = "wasm"))]
thread_local! {
    static NATIVE_STORE: pfmarket_common::contact::MemoryContactStore =
        pfmarket_common::contact::MemoryContactStore::new();
}

impl ContactStore for LocalStorageContactStore {
    fn get(&self, key: &str) -> Option<BookingContact> {
        #[cfg(target_family = "wasm")]
        {
            let raw = local_storage()?.get_item(key).ok().flatten()?;
            BookingContact::from_json(&raw)
        }
        #[cfg(not(target_family = "wasm"))]
        {
            NATIVE_STORE.with(|store| store.get(key))
        }
    }

    fn set(&self, key: &str, contact: &BookingContact) -> Result<(), StoreError> {
        #[cfg(target_family = "wasm")]
        {
            let storage = local_storage()
                .ok_or_else(|| StoreError::Unavailable("localStorage unavailable".into()))?;
            let raw = contact.to_json()?;
            storage
                .set_item(key, &raw)
                .map_err(|e| StoreError::Unavailable(format!("{e:?}")))
        }
        #[cfg(not(target_family = "wasm"))]
        {
            NATIVE_STORE.with(|store| store.set(key, contact))
        }
    }
}
