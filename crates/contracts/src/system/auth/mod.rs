use serde::{Deserialize, Serialize};

use crate::enums::UserRole;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.username.trim().is_empty() || self.password.is_empty() {
            return Err("Username and password are required".into());
        }
        Ok(())
    }
}

/// `POST /api/auth/login` response.
///
/// The token may be empty when the server runs session-based auth; the
/// stored user is what marks the session as signed in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    #[serde(default)]
    pub token: String,
    #[serde(default)]
    pub id: Option<i64>,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    pub role: UserRole,
}

/// Signed-in user as kept in local storage under `user`
pub type UserInfo = AuthResponse;

impl AuthResponse {
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    pub fn bearer_token(&self) -> Option<&str> {
        Some(self.token.as_str()).filter(|t| !t.trim().is_empty())
    }

    /// "First Last", falling back to the username
    pub fn full_name(&self) -> String {
        let parts: Vec<&str> = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();
        if parts.is_empty() {
            self.username.clone()
        } else {
            parts.join(" ")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_login_without_token() {
        let json = r#"{"token":"","id":1,"username":"admin","email":"a@b.lk","firstName":"Nimal","lastName":"Perera","role":"ADMIN"}"#;
        let auth: AuthResponse = serde_json::from_str(json).unwrap();
        assert!(auth.is_admin());
        assert_eq!(auth.bearer_token(), None);
        assert_eq!(auth.full_name(), "Nimal Perera");
    }

    #[test]
    fn full_name_falls_back_to_username() {
        let auth: AuthResponse =
            serde_json::from_str(r#"{"token":"abc","username":"vet1","role":"VETERINARY_OFFICER"}"#)
                .unwrap();
        assert!(!auth.is_admin());
        assert_eq!(auth.bearer_token(), Some("abc"));
        assert_eq!(auth.full_name(), "vet1");
    }

    #[test]
    fn login_request_requires_both_fields() {
        let req = LoginRequest {
            username: " ".into(),
            password: "secret".into(),
        };
        assert!(req.validate().is_err());
    }
}
