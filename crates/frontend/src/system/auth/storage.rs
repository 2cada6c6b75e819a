use contracts::system::auth::StoreSession;
use web_sys::window;

const SESSION_KEY: &str = "pp_user";

pub fn local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Save the signed-in store session to localStorage
pub fn save_session(session: &StoreSession) {
    let Some(storage) = local_storage() else {
        log::warn!("localStorage unavailable, session not persisted");
        return;
    };
    match session.to_json() {
        Ok(json) => {
            if let Err(e) = storage.set_item(SESSION_KEY, &json) {
                log::warn!("Failed to persist session: {:?}", e);
            }
        }
        Err(e) => log::error!("Failed to serialize session: {}", e),
    }
}

/// Restore the session saved by a previous sign-in
pub fn load_session() -> Option<StoreSession> {
    let json = local_storage()?.get_item(SESSION_KEY).ok()??;
    let session = StoreSession::from_json(&json);
    if session.is_none() {
        log::warn!("Discarding unreadable stored session");
    }
    session
}

/// Forget the session
pub fn clear_session() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(SESSION_KEY);
    }
}
