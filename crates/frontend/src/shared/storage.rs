//! localStorage access for the workspace snapshot.

use web_sys::window;

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Read the saved snapshot, if any
pub fn load_snapshot(key: &str) -> Option<String> {
    get_local_storage()?.get_item(key).ok()?
}

/// Save the snapshot, replacing the previous one
pub fn save_snapshot(key: &str, snapshot: &str) -> Result<(), String> {
    let storage = get_local_storage().ok_or("localStorage is not available")?;
    storage
        .set_item(key, snapshot)
        .map_err(|e| format!("Failed to write snapshot: {:?}", e))
}

/// Drop an unreadable snapshot so it is not retried on the next visit
pub fn discard_snapshot(key: &str) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(key);
    }
}
