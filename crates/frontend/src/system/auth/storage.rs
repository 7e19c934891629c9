use contracts::system::auth::UserInfo;
use web_sys::window;

const TOKEN_KEY: &str = "token";
const USER_KEY: &str = "user";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Persist the login response: the token and the user as JSON
pub fn save_session(user: &UserInfo) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(TOKEN_KEY, &user.token);
        match serde_json::to_string(user) {
            Ok(json) => {
                let _ = storage.set_item(USER_KEY, &json);
            }
            Err(e) => log::error!("Failed to store user: {}", e),
        }
    }
}

/// Stored bearer token, if any and non-empty
pub fn get_token() -> Option<String> {
    get_local_storage()?
        .get_item(TOKEN_KEY)
        .ok()?
        .filter(|t| !t.is_empty())
}

/// Stored user; a corrupt entry is treated as signed out
pub fn get_user() -> Option<UserInfo> {
    let json = get_local_storage()?.get_item(USER_KEY).ok()??;
    parse_user(&json)
}

fn parse_user(json: &str) -> Option<UserInfo> {
    match serde_json::from_str(json) {
        Ok(user) => Some(user),
        Err(e) => {
            log::warn!("Discarding unreadable stored user: {}", e);
            None
        }
    }
}

pub fn clear_session() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(USER_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_user_accepts_login_payload() {
        let user = parse_user(
            r#"{"token":"t","id":3,"username":"admin","email":"a@x.lk","firstName":"A","lastName":"B","role":"ADMIN"}"#,
        )
        .unwrap();
        assert!(user.is_admin());
    }

    #[test]
    fn parse_user_rejects_garbage() {
        assert!(parse_user("{not json").is_none());
        assert!(parse_user(r#"{"username":"x","role":"OWNER"}"#).is_none());
    }
}
