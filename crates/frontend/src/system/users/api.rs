use contracts::enums::Province;
use contracts::shared::locations::{static_districts, static_provinces, LocationOption};
use contracts::system::users::{UserRequest, UserResponse};

use crate::shared::api_client::{get_json, send_json, send_no_content, ApiError, Verb};
use crate::shared::api_utils::query_string;

const USERS: &str = "/api/users";

/// Fetch all users
pub async fn fetch_users() -> Result<Vec<UserResponse>, ApiError> {
    get_json(USERS).await
}

/// Create new user
pub async fn create_user(dto: &UserRequest) -> Result<UserResponse, ApiError> {
    send_json(Verb::Post, USERS, dto).await
}

/// Update user; an empty password keeps the current one
pub async fn update_user(id: i64, dto: &UserRequest) -> Result<UserResponse, ApiError> {
    send_json(Verb::Put, &format!("{}/{}", USERS, id), dto).await
}

/// `PATCH /api/users/{id}/status?active=`
pub async fn set_user_active(id: i64, active: bool) -> Result<(), ApiError> {
    let path = format!(
        "{}/{}/status{}",
        USERS,
        id,
        query_string(&[("active", Some(active.to_string()))])
    );
    send_no_content::<()>(Verb::Patch, &path, None).await
}

pub async fn delete_user(id: i64) -> Result<(), ApiError> {
    send_no_content::<()>(Verb::Delete, &format!("{}/{}", USERS, id), None).await
}

/// Province options, falling back to the built-in table
pub async fn fetch_provinces() -> Vec<LocationOption> {
    match get_json::<Vec<LocationOption>>("/api/locations/provinces").await {
        Ok(list) if !list.is_empty() => list,
        Ok(_) => static_provinces(),
        Err(e) => {
            log::warn!("Province list unavailable, using built-in table: {}", e);
            static_provinces()
        }
    }
}

/// District options of one province, falling back to the built-in table
pub async fn fetch_districts(province: Province) -> Vec<LocationOption> {
    let path = format!(
        "/api/locations/districts{}",
        query_string(&[("provinceName", Some(province.code().to_string()))])
    );
    match get_json::<Vec<LocationOption>>(&path).await {
        Ok(list) if !list.is_empty() => list,
        Ok(_) => static_districts(province),
        Err(e) => {
            log::warn!("District list for {} unavailable, using built-in table: {}", province, e);
            static_districts(province)
        }
    }
}
