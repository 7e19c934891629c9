//! REST calls shared by every configuration collection.
//!
//! All paths live under `/api/configuration/{collection}`; the collection
//! segment comes from [`AggregateRoot::collection_name`].

use contracts::domain::common::AggregateRoot;
use contracts::shared::api::{StatusUpdateRequest, UsageResponse};
use uuid::Uuid;

use crate::domain::a002_animal_type;
use crate::shared::api_client::{get_json, send_json, send_no_content, ApiError, Verb};

pub fn collection_path<T: AggregateRoot>() -> String {
    format!("/api/configuration/{}", T::collection_name())
}

pub fn item_path<T: AggregateRoot>(id: Uuid) -> String {
    format!("{}/{}", collection_path::<T>(), id)
}

/// Every mutation goes through here so dependent caches are dropped
fn after_mutation<T: AggregateRoot>() {
    a002_animal_type::api::invalidate_if_animal_types::<T>();
}

pub async fn fetch_all<T: AggregateRoot>() -> Result<Vec<T>, ApiError> {
    get_json(&collection_path::<T>()).await
}

pub async fn fetch_by_id<T: AggregateRoot>(id: Uuid) -> Result<T, ApiError> {
    get_json(&item_path::<T>(id)).await
}

/// POST for new records, PUT `/{id}` for existing ones
pub async fn save<T: AggregateRoot>(id: Option<Uuid>, dto: &T::Dto) -> Result<T, ApiError> {
    let saved = match id {
        Some(id) => send_json(Verb::Put, &item_path::<T>(id), dto).await?,
        None => send_json(Verb::Post, &collection_path::<T>(), dto).await?,
    };
    after_mutation::<T>();
    Ok(saved)
}

pub async fn set_status<T: AggregateRoot>(id: Uuid, is_active: bool) -> Result<(), ApiError> {
    let path = format!("{}/status", item_path::<T>(id));
    send_no_content(Verb::Patch, &path, Some(&StatusUpdateRequest { is_active })).await?;
    after_mutation::<T>();
    Ok(())
}

/// Number of records that reference this one
pub async fn fetch_usage<T: AggregateRoot>(id: Uuid) -> Result<UsageResponse, ApiError> {
    get_json(&format!("{}/usage", item_path::<T>(id))).await
}

pub async fn delete<T: AggregateRoot>(id: Uuid) -> Result<(), ApiError> {
    send_no_content::<()>(Verb::Delete, &item_path::<T>(id), None).await?;
    after_mutation::<T>();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_farm_type::aggregate::FarmType;
    use contracts::domain::a003_disease::aggregate::Disease;

    #[test]
    fn paths_follow_the_collection_name() {
        assert_eq!(collection_path::<FarmType>(), "/api/configuration/farm-types");
        let id = Uuid::nil();
        assert_eq!(
            item_path::<Disease>(id),
            "/api/configuration/diseases/00000000-0000-0000-0000-000000000000"
        );
    }
}
