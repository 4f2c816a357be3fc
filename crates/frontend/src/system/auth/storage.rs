use contracts::system::auth::{Role, SessionUser};
use web_sys::window;

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

fn user_key(role: Role) -> String {
    format!("ara_{}_user", role.slug())
}

pub fn save_token(role: Role, token: &str) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(&role.storage_key(), token);
    }
}

pub fn get_token(role: Role) -> Option<String> {
    get_local_storage()?.get_item(&role.storage_key()).ok()?
}

pub fn save_user(role: Role, user: &SessionUser) {
    let Some(storage) = get_local_storage() else {
        return;
    };
    match serde_json::to_string(user) {
        Ok(json) => {
            let _ = storage.set_item(&user_key(role), &json);
        }
        Err(e) => log::warn!("failed to persist {} user: {}", role, e),
    }
}

pub fn get_user(role: Role) -> Option<SessionUser> {
    let json = get_local_storage()?.get_item(&user_key(role)).ok()??;
    serde_json::from_str(&json).ok()
}

/// Forget everything stored for one role; other roles stay signed in
pub fn clear(role: Role) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(&role.storage_key());
        let _ = storage.remove_item(&user_key(role));
    }
}
