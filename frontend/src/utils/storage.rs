//! Persistent key/value storage. Backed by `localStorage` in the browser and
//! by an in-memory map on the host target so session logic stays testable.

#[cfg(target_arch = "wasm32")]
mod backend {
    use web_sys::{Storage, Window};

    fn window() -> Result<Window, String> {
        web_sys::window().ok_or_else(|| "No window object".to_string())
    }

    fn local_storage() -> Result<Storage, String> {
        window()?
            .local_storage()
            .map_err(|_| "No localStorage".to_string())?
            .ok_or_else(|| "No localStorage".to_string())
    }

    pub fn get_item(key: &str) -> Result<Option<String>, String> {
        local_storage()?
            .get_item(key)
            .map_err(|_| format!("Failed to read {key}"))
    }

    pub fn set_item(key: &str, value: &str) -> Result<(), String> {
        local_storage()?
            .set_item(key, value)
            .map_err(|_| format!("Failed to write {key}"))
    }

    pub fn remove_item(key: &str) -> Result<(), String> {
        local_storage()?
            .remove_item(key)
            .map_err(|_| format!("Failed to remove {key}"))
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod backend {
    use std::cell::RefCell;
    use std::collections::HashMap;

    thread_local! {
        static STORE: RefCell<HashMap<String, String>> = RefCell::new(HashMap::new());
    }

    pub fn get_item(key: &str) -> Result<Option<String>, String> {
        STORE.with(|store| Ok(store.borrow().get(key).cloned()))
    }

    pub fn set_item(key: &str, value: &str) -> Result<(), String> {
        STORE.with(|store| {
            store.borrow_mut().insert(key.to_string(), value.to_string());
            Ok(())
        })
    }

    pub fn remove_item(key: &str) -> Result<(), String> {
        STORE.with(|store| {
            store.borrow_mut().remove(key);
            Ok(())
        })
    }
}

pub fn get_item(key: &str) -> Result<Option<String>, String> {
    backend::get_item(key)
}

pub fn set_item(key: &str, value: &str) -> Result<(), String> {
    backend::set_item(key, value)
}

pub fn remove_item(key: &str) -> Result<(), String> {
    backend::remove_item(key)
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn round_trips_values() {
        set_item("storage-test", "abc").unwrap();
        assert_eq!(get_item("storage-test").unwrap().as_deref(), Some("abc"));

        remove_item("storage-test").unwrap();
        assert_eq!(get_item("storage-test").unwrap(), None);
    }

    #[test]
    fn missing_key_reads_as_none() {
        assert_eq!(get_item("storage-never-written").unwrap(), None);
    }
}
