//! Create / edit modal state for a configuration record

use leptos::prelude::*;
use leptos::task::spawn_local;
use uuid::Uuid;

use super::api;
use super::view_model::{ConfigCollection, EditTarget};
use crate::shared::notifications::Notifications;

pub struct ConfigFormViewModel<T: ConfigCollection> {
    pub id: Option<Uuid>,
    pub form: RwSignal<T::Dto>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl<T: ConfigCollection> Clone for ConfigFormViewModel<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ConfigCollection> Copy for ConfigFormViewModel<T> {}

/// "Add Farm Type" / "Edit Farm Type"
pub fn form_title<T: ConfigCollection>(is_edit: bool) -> String {
    format!("{} {}", if is_edit { "Edit" } else { "Add" }, T::element_name())
}

impl<T: ConfigCollection> ConfigFormViewModel<T> {
    pub fn new(target: &EditTarget<T>) -> Self {
        Self {
            id: target.id(),
            form: RwSignal::new(target.initial_dto()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    pub fn title(&self) -> String {
        form_title::<T>(self.is_edit())
    }

    /// Tracks `saving`, so call it inside a reactive closure
    pub fn submit_label(&self) -> &'static str {
        match (self.saving.get(), self.is_edit()) {
            (true, _) => "Saving...",
            (false, true) => "Update",
            (false, false) => "Create",
        }
    }

    /// Validate, then POST or PUT; `on_saved` runs after a success
    pub fn save_command(&self, notifications: Notifications, on_saved: Callback<()>) {
        let this = *self;
        let dto = T::normalize_form(&this.form.get_untracked());
        if let Err(message) = T::validate_form(&dto) {
            this.error.set(Some(message));
            return;
        }
        this.error.set(None);
        this.saving.set(true);

        spawn_local(async move {
            match api::save::<T>(this.id, &dto).await {
                Ok(saved) => {
                    log::info!("Saved {} {}", T::collection_name(), saved.id());
                    notifications.success(format!(
                        "{} {} successfully",
                        T::element_name(),
                        if this.is_edit() { "updated" } else { "created" }
                    ));
                    on_saved.run(());
                }
                Err(e) => {
                    log::error!("Saving {} failed: {}", T::collection_name(), e);
                    this.error.try_set(Some(e.to_string()));
                    this.saving.try_set(false);
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_animal_type::aggregate::AnimalType;

    #[test]
    fn titles() {
        assert_eq!(form_title::<AnimalType>(false), "Add Animal Type");
        assert_eq!(form_title::<AnimalType>(true), "Edit Animal Type");
    }
}
