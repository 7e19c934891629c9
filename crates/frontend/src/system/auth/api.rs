use contracts::system::auth::{AuthResponse, LoginRequest};

use crate::shared::api_client::{self, ApiError, Verb};

/// Login with username and password
pub async fn login(username: String, password: String) -> Result<AuthResponse, ApiError> {
    let request = LoginRequest { username, password };
    api_client::send_json(Verb::Post, "/api/auth/login", &request).await
}

/// Tell the server the session ended; the local session is cleared regardless
pub async fn logout() -> Result<(), ApiError> {
    api_client::send_no_content::<()>(Verb::Post, "/api/auth/logout", None).await
}
