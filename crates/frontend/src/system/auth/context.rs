use contracts::system::auth::UserInfo;
use leptos::prelude::*;

use super::{api, storage};
use crate::shared::api_client::{set_unauthorized_handler, ApiError};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub user_info: Option<UserInfo>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.user_info.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.user_info.as_ref().map(|u| u.is_admin()).unwrap_or(false)
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    // Restore the session synchronously so the first render already knows it
    let restored = AuthState {
        user_info: storage::get_user(),
    };
    if let Some(user) = &restored.user_info {
        log::info!("Restored session for {}", user.username);
    }
    let (auth_state, set_auth_state) = signal(restored);

    set_unauthorized_handler(Callback::new(move |_| {
        log::warn!("Session rejected by the server, returning to login");
        set_auth_state.set(AuthState::default());
    }));

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Helper: Perform login
pub async fn do_login(
    username: String,
    password: String,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), String> {
    let response = api::login(username, password)
        .await
        .map_err(|e| match e {
            ApiError::Unauthorized => "Invalid username or password".to_string(),
            other => other.to_string(),
        })?;

    storage::save_session(&response);
    log::info!("Signed in as {} ({})", response.username, response.role.code());
    set_auth_state.set(AuthState {
        user_info: Some(response),
    });

    Ok(())
}

/// Helper: Perform logout
pub async fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    if let Err(e) = api::logout().await {
        log::warn!("Logout request failed: {}", e);
    }
    storage::clear_session();
    set_auth_state.set(AuthState::default());
}
