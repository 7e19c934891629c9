use contracts::domain::a001_farm_type::aggregate::FarmType;
use leptos::prelude::*;
use std::sync::Arc;
use thaw::*;

use crate::domain::configuration::{ConfigFormViewModel, EditTarget};
use crate::shared::components::ui::{Checkbox, TextArea, TextField};
use crate::shared::modal::Modal;
use crate::shared::notifications::use_notifications;

#[component]
pub fn FarmTypeDetails(
    target: EditTarget<FarmType>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let notifications = use_notifications();
    let vm = ConfigFormViewModel::<FarmType>::new(&target);
    let form = vm.form;
    let disabled = Signal::derive(move || vm.saving.get());

    view! {
        <Modal
            title=vm.title()
            on_close=on_cancel
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
                <TextField
                    label="Type Name"
                    value=Signal::derive(move || form.with(|f| f.type_name.clone()))
                    on_input=Callback::new(move |v| form.update(|f| f.type_name = v))
                    placeholder="e.g. Dairy Farm"
                    required=true
                    maxlength=50u32
                    disabled=disabled
                />
                <TextArea
                    label="Description"
                    value=Signal::derive(move || form.with(|f| f.description.clone().unwrap_or_default()))
                    on_input=Callback::new(move |v| form.update(|f| f.description = Some(v)))
                    maxlength=500usize
                    disabled=disabled
                />
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
