use contracts::domain::a002_animal_type::aggregate::AnimalType;
use contracts::domain::a003_disease::aggregate::{Disease, Severity};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::sync::Arc;
use thaw::*;

use crate::domain::a002_animal_type::api::cached_active_animal_types;
use crate::domain::configuration::{ConfigFormViewModel, EditTarget};
use crate::shared::components::ui::{Checkbox, CustomSelect, SelectOption, TextArea, TextField};
use crate::shared::modal::Modal;
use crate::shared::notifications::use_notifications;

fn severity_options() -> Vec<SelectOption> {
    std::iter::once(SelectOption::new("", "Select severity"))
        .chain(
            Severity::ALL
                .iter()
                .map(|s| SelectOption::new(s.code(), s.display_name())),
        )
        .collect()
}

/// Active animal type names, plus names already on the disease that are no
/// longer active so they can still be unticked
fn animal_type_choices(active: &[AnimalType], selected: &[String]) -> Vec<String> {
    let mut names: Vec<String> = active.iter().map(|a| a.type_name.clone()).collect();
    for name in selected {
        if !names.contains(name) {
            names.push(name.clone());
        }
    }
    names
}

#[component]
pub fn DiseaseDetails(
    target: EditTarget<Disease>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let notifications = use_notifications();
    let vm = ConfigFormViewModel::<Disease>::new(&target);
    let form = vm.form;
    let disabled = Signal::derive(move || vm.saving.get());

    let active_types = RwSignal::new(Vec::<AnimalType>::new());
    let (types_error, set_types_error) = signal::<Option<String>>(None);
    spawn_local(async move {
        match cached_active_animal_types().await {
            Ok(list) => {
                active_types.try_set(list);
            }
            Err(e) => {
                log::error!("Failed to load animal types: {}", e);
                set_types_error.try_set(Some("Failed to load animal types".to_string()));
            }
        }
    });

    let choices = Memo::new(move |_| {
        let selected = form.with(|f| f.affected_animal_types.clone());
        active_types.with(|active| animal_type_choices(active, &selected))
    });

    view! {
        <Modal
            title=vm.title()
            on_close=on_cancel
            class="modal--wide"
            footer=Arc::new(move || view! {
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_cancel.run(()) disabled=disabled>
                    "Cancel"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| vm.save_command(notifications, on_saved)
                    disabled=disabled
                >
                    {move || vm.submit_label()}
                </Button>
            }.into_any())
        >
            {move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
            <form class="form" on:submit=move |ev| {
                ev.prevent_default();
                vm.save_command(notifications, on_saved);
            }>
                <div class="form__row">
                    <TextField
                        label="Disease Name"
                        value=Signal::derive(move || form.with(|f| f.disease_name.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.disease_name = v))
                        placeholder="e.g. Foot and Mouth Disease"
                        required=true
                        maxlength=100u32
                        disabled=disabled
                    />
                    <TextField
                        label="Disease Code"
                        value=Signal::derive(move || form.with(|f| f.disease_code.clone().unwrap_or_default()))
                        on_input=Callback::new(move |v| form.update(|f| f.disease_code = Some(v)))
                        placeholder="e.g. FMD"
                        maxlength=20u32
                        disabled=disabled
                    />
                </div>

                <div class="form__group">
                    <label class="form__label">"Severity"</label>
                    <CustomSelect
                        value=Signal::derive(move || {
                            form.with(|f| f.severity.map(|s| s.code().to_string()).unwrap_or_default())
                        })
                        options=Signal::derive(severity_options)
                        on_change=Callback::new(move |code: String| {
                            form.update(|f| f.severity = Severity::from_code(&code));
                        })
                        placeholder="Select severity"
                        disabled=disabled
                    />
                </div>

                <Checkbox
                    label="Notifiable disease (must be reported to authorities)"
                    checked=Signal::derive(move || form.with(|f| f.is_notifiable))
                    on_change=Callback::new(move |c| form.update(|f| f.is_notifiable = c))
                    disabled=disabled
                />

                <TextArea
                    label="Description"
                    value=Signal::derive(move || form.with(|f| f.description.clone().unwrap_or_default()))
                    on_input=Callback::new(move |v| form.update(|f| f.description = Some(v)))
                    maxlength=1000usize
                    rows=4u32
                    disabled=disabled
                />

                <div class="form__group">
                    <label class="form__label">"Affected Animal Types"</label>
                    {move || types_error.get().map(|e| view! { <div class="form__error">{e}</div> })}
                    <div class="form__checkbox-grid">
                        <For
                            each=move || choices.get()
                            key=|name| name.clone()
                            children=move |name| {
                                let label = name.clone();
                                let checked_name = name.clone();
                                view! {
                                    <Checkbox
                                        label=label
                                        checked=Signal::derive(move || {
                                            form.with(|f| f.affected_animal_types.contains(&checked_name))
                                        })
                                        on_change=Callback::new(move |c| {
                                            form.update(|f| f.toggle_animal_type(&name, c))
                                        })
                                        disabled=disabled
                                    />
                                }
                            }
                        />
                    </div>
                    <Show when=move || choices.with(Vec::is_empty) && types_error.get().is_none()>
                        <div class="form__hint">"No active animal types configured"</div>
                    </Show>
                </div>

                <Checkbox
                    label="Active"
                    checked=Signal::derive(move || form.with(|f| f.is_active))
                    on_change=Callback::new(move |c| form.update(|f| f.is_active = c))
                    disabled=disabled
                />
            </form>
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::common::EntityMetadata;
    use uuid::Uuid;

    fn animal(name: &str) -> AnimalType {
        AnimalType {
            id: Uuid::new_v4(),
            type_name: name.into(),
            description: None,
            is_active: true,
            metadata: EntityMetadata::default(),
            usage_count: None,
        }
    }

    #[test]
    fn severity_select_starts_with_placeholder() {
        let opts = severity_options();
        assert_eq!(opts.len(), 5);
        assert_eq!(opts[0].value, "");
        assert_eq!(opts[4].value, "CRITICAL");
    }

    #[test]
    fn inactive_selected_types_stay_visible() {
        let active = vec![animal("Cattle"), animal("Goat")];
        let selected = vec!["Goat".to_string(), "Buffalo".to_string()];
        assert_eq!(
            animal_type_choices(&active, &selected),
            vec!["Cattle", "Goat", "Buffalo"]
        );
    }
}
