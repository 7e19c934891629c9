//! Active animal types, cached for the disease form pickers

use chrono::Duration;
use contracts::domain::a002_animal_type::aggregate::AnimalType;
use contracts::domain::common::AggregateRoot;
use once_cell::sync::Lazy;
use std::sync::Mutex;

use crate::domain::configuration::api::collection_path;
use crate::shared::api_client::{get_json, ApiError};
use crate::shared::cache::ListCache;
use crate::shared::config::config;

static ACTIVE_CACHE: Lazy<Mutex<ListCache<AnimalType>>> = Lazy::new(|| {
    Mutex::new(ListCache::new(Duration::seconds(
        config().cache.animal_types_ttl_secs,
    )))
});

fn with_cache<R>(f: impl FnOnce(&mut ListCache<AnimalType>) -> R) -> Option<R> {
    ACTIVE_CACHE.lock().ok().map(|mut cache| f(&mut cache))
}

/// `GET /api/configuration/animal-types/active`, served from the cache while fresh
pub async fn cached_active_animal_types() -> Result<Vec<AnimalType>, ApiError> {
    let (hit, generation) = with_cache(|c| (c.get(), c.generation())).unwrap_or((None, 0));
    if let Some(hit) = hit {
        return Ok(hit);
    }
    let fresh: Vec<AnimalType> =
        get_json(&format!("{}/active", collection_path::<AnimalType>())).await?;
    match with_cache(|c| c.put_if_generation(generation, fresh.clone())) {
        Some(true) => log::debug!("Cached {} active animal types", fresh.len()),
        _ => log::debug!("Animal types changed during fetch, not caching"),
    }
    Ok(fresh)
}

pub fn invalidate_active_cache() {
    with_cache(|c| c.invalidate());
}

/// Drop the cache when `T` is the animal-type collection
pub fn invalidate_if_animal_types<T: AggregateRoot>() {
    if T::collection_name() == AnimalType::collection_name() {
        log::debug!("Animal types changed, dropping the active list cache");
        invalidate_active_cache();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_farm_type::aggregate::FarmType;
    use contracts::domain::common::EntityMetadata;
    use uuid::Uuid;

    fn cattle() -> AnimalType {
        AnimalType {
            id: Uuid::nil(),
            type_name: "Cattle".into(),
            description: None,
            is_active: true,
            metadata: EntityMetadata::default(),
            usage_count: None,
        }
    }

    // one test owns the shared static so parallel runs cannot interleave
    #[test]
    fn mutations_invalidate_only_for_animal_types() {
        with_cache(|c| c.put(vec![cattle()]));
        invalidate_if_animal_types::<FarmType>();
        assert_eq!(with_cache(|c| c.get()).flatten().map(|v| v.len()), Some(1));

        invalidate_if_animal_types::<AnimalType>();
        assert_eq!(with_cache(|c| c.get()).flatten(), None);
        assert_eq!(with_cache(|c| c.is_populated()), Some(false));
    }
}
