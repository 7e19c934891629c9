//! List state shared by the farm type, animal type and disease tabs

use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use leptos::task::spawn_local;
use uuid::Uuid;

use super::api;
use crate::shared::notifications::Notifications;

/// Wording that differs between the configuration collections
pub trait ConfigCollection: AggregateRoot + PartialEq + Send + Sync {
    /// What depends on a record, singular ("farm", "report")
    const USAGE_NOUN: &'static str;
    /// "used by" / "used in"
    const USAGE_VERB: &'static str = "used by";

    fn validate_form(dto: &Self::Dto) -> Result<(), String>;

    /// Trimmed copy of the form ready to send
    fn normalize_form(dto: &Self::Dto) -> Self::Dto;

    /// Usage column text, e.g. "3 farms"
    fn usage_caption(count: i64) -> String {
        let count = count.max(0);
        if count == 1 {
            format!("1 {}", Self::USAGE_NOUN)
        } else {
            format!("{} {}s", count, Self::USAGE_NOUN)
        }
    }
}

/// Delete dialog text for a record with `usage` dependents
pub fn delete_message<T: ConfigCollection>(usage: i64) -> String {
    let element = T::element_name().to_lowercase();
    if usage > 0 {
        format!(
            "This {} is currently {} {} {}(s).",
            element,
            T::USAGE_VERB,
            usage,
            T::USAGE_NOUN
        )
    } else {
        format!("Are you sure you want to delete this {}?", element)
    }
}

/// Case-insensitive match on the display name
pub fn filter_rows<T: AggregateRoot>(items: &[T], query: &str) -> Vec<T> {
    let q = query.trim().to_lowercase();
    items
        .iter()
        .filter(|item| q.is_empty() || item.display_name().to_lowercase().contains(&q))
        .cloned()
        .collect()
}

#[derive(Clone, Debug, PartialEq)]
pub enum EditTarget<T> {
    Create,
    Edit(T),
}

impl<T: AggregateRoot> EditTarget<T> {
    pub fn id(&self) -> Option<Uuid> {
        match self {
            EditTarget::Create => None,
            EditTarget::Edit(item) => Some(item.id()),
        }
    }

    /// Form contents to start from
    pub fn initial_dto(&self) -> T::Dto {
        match self {
            EditTarget::Create => T::Dto::default(),
            EditTarget::Edit(item) => item.to_dto(),
        }
    }
}

pub struct ConfigListViewModel<T: ConfigCollection> {
    pub items: RwSignal<Vec<T>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    pub search: RwSignal<String>,
    pub editor: RwSignal<Option<EditTarget<T>>>,
    pub deleting: RwSignal<Option<T>>,
    /// Row whose status change is in flight
    pub busy: RwSignal<Option<Uuid>>,
    pub loaded: RwSignal<bool>,
}

impl<T: ConfigCollection> Clone for ConfigListViewModel<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ConfigCollection> Copy for ConfigListViewModel<T> {}

impl<T: ConfigCollection> ConfigListViewModel<T> {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
            search: RwSignal::new(String::new()),
            editor: RwSignal::new(None),
            deleting: RwSignal::new(None),
            busy: RwSignal::new(None),
            loaded: RwSignal::new(false),
        }
    }

    pub fn load(&self) {
        let this = *self;
        this.loading.set(true);
        this.error.set(None);
        spawn_local(async move {
            match api::fetch_all::<T>().await {
                Ok(list) => {
                    log::debug!("Loaded {} {}", list.len(), T::collection_name());
                    this.items.try_set(list);
                    this.loaded.try_set(true);
                }
                Err(e) => {
                    log::error!("Failed to load {}: {}", T::collection_name(), e);
                    this.error.try_set(Some(format!(
                        "Failed to load {}: {}",
                        T::list_name().to_lowercase(),
                        e
                    )));
                }
            }
            this.loading.try_set(false);
        });
    }

    /// Rows matching the search box
    pub fn visible(&self) -> Vec<T> {
        let query = self.search.get();
        self.items.with(|items| filter_rows(items, &query))
    }

    pub fn toggle_status(&self, item: T, notifications: Notifications) {
        let this = *self;
        let id = item.id();
        let target = !item.is_active();
        this.busy.set(Some(id));
        spawn_local(async move {
            match api::set_status::<T>(id, target).await {
                Ok(()) => {
                    notifications.success(format!(
                        "{} {} successfully",
                        T::element_name(),
                        if target { "activated" } else { "deactivated" }
                    ));
                    this.load();
                }
                Err(e) => {
                    log::error!("Status change for {} {} failed: {}", T::collection_name(), id, e);
                    notifications.error(e.to_string());
                }
            }
            this.busy.try_set(None);
        });
    }

    pub fn open_create(&self) {
        self.editor.set(Some(EditTarget::Create));
    }

    /// Re-fetch the record so the form starts from the server's copy
    pub fn open_edit(&self, item: T, notifications: Notifications) {
        let editor = self.editor;
        let id = item.id();
        spawn_local(async move {
            match api::fetch_by_id::<T>(id).await {
                Ok(fresh) => {
                    editor.try_set(Some(EditTarget::Edit(fresh)));
                }
                Err(e) => {
                    log::error!("Failed to load {} {}: {}", T::collection_name(), id, e);
                    notifications.error(format!(
                        "Failed to load {}",
                        T::element_name().to_lowercase()
                    ));
                }
            }
        });
    }

    pub fn close_editor(&self) {
        self.editor.set(None);
    }

    /// Form saved: close it and refresh the list
    pub fn saved(&self) {
        self.editor.set(None);
        self.load();
    }

    pub fn deleted(&self) {
        self.deleting.set(None);
        self.load();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_farm_type::aggregate::{FarmType, FarmTypeDto};
    use contracts::domain::a003_disease::aggregate::Disease;
    use contracts::domain::common::EntityMetadata;

    fn farm(name: &str) -> FarmType {
        FarmType {
            id: Uuid::new_v4(),
            type_name: name.into(),
            description: Some("desc".into()),
            is_active: false,
            metadata: EntityMetadata::default(),
            usage_count: Some(2),
        }
    }

    #[test]
    fn search_filters_by_display_name() {
        let items = vec![farm("Dairy"), farm("Poultry"), farm("Mixed dairy")];
        assert_eq!(filter_rows(&items, "DAIRY").len(), 2);
        assert_eq!(filter_rows(&items, "  ").len(), 3);
        assert!(filter_rows(&items, "goat").is_empty());
    }

    #[test]
    fn delete_message_depends_on_usage() {
        assert_eq!(
            delete_message::<FarmType>(3),
            "This farm type is currently used by 3 farm(s)."
        );
        assert_eq!(
            delete_message::<Disease>(1),
            "This disease is currently used in 1 report(s)."
        );
        assert_eq!(
            delete_message::<FarmType>(0),
            "Are you sure you want to delete this farm type?"
        );
    }

    #[test]
    fn usage_caption_pluralizes() {
        assert_eq!(FarmType::usage_caption(1), "1 farm");
        assert_eq!(FarmType::usage_caption(0), "0 farms");
        assert_eq!(FarmType::usage_caption(-4), "0 farms");
    }

    #[test]
    fn edit_target_seeds_the_form() {
        let f = farm("Dairy");
        let target = EditTarget::Edit(f.clone());
        assert_eq!(target.id(), Some(f.id));
        assert_eq!(target.initial_dto().type_name, "Dairy");
        assert!(!target.initial_dto().is_active);

        let create: EditTarget<FarmType> = EditTarget::Create;
        assert_eq!(create.id(), None);
        assert_eq!(create.initial_dto(), FarmTypeDto::default());
    }
}
