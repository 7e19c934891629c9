//! Create / edit user modal

use contracts::enums::UserRole;
use contracts::system::users::{FieldError, UserRequest, UserResponse};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::sync::Arc;
use thaw::*;

use super::location_picker::LocationPicker;
use crate::shared::components::ui::{Checkbox, CustomSelect, SelectOption, TextField};
use crate::shared::modal::Modal;
use crate::shared::notifications::use_notifications;
use crate::system::users::api;

fn error_for(errors: &[FieldError], field: &str) -> Option<String> {
    errors
        .iter()
        .find(|e| e.field == field)
        .map(|e| e.message.clone())
}

fn role_options() -> Vec<SelectOption> {
    UserRole::ALL
        .iter()
        .map(|r| SelectOption::new(r.code(), r.display_name()))
        .collect()
}

/// `user = None` creates a new account
#[component]
pub fn UserFormModal(
    user: Option<UserResponse>,
    on_close: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let notifications = use_notifications();
    let editing_id = user.as_ref().map(|u| u.id);
    let is_create = editing_id.is_none();

    let initial = user.as_ref().map(UserRequest::from).unwrap_or_default();
    let (initial_province, initial_district) = (initial.province, initial.district);
    let form = RwSignal::new(initial);
    let errors = RwSignal::new(Vec::<FieldError>::new());
    let (server_error, set_server_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let field_error = move |field: &'static str| {
        Signal::derive(move || errors.with(|e| error_for(e, field)))
    };

    // editing a field clears its message
    let setter = move |field: &'static str, apply: fn(&mut UserRequest, String)| {
        Callback::new(move |value: String| {
            form.update(|f| apply(f, value));
            errors.update(|e| e.retain(|err| err.field != field));
        })
    };

    let on_submit = move || {
        let request = form.get_untracked().normalized();
        let found = request.validate(is_create);
        if !found.is_empty() {
            errors.set(found);
            return;
        }
        errors.set(Vec::new());
        set_server_error.set(None);
        set_saving.set(true);

        spawn_local(async move {
            let result = match editing_id {
                Some(id) => api::update_user(id, &request).await,
                None => api::create_user(&request).await,
            };
            match result {
                Ok(saved) => {
                    log::info!("Saved user {} (id {})", saved.username, saved.id);
                    notifications.success(if is_create {
                        format!("User {} created", saved.username)
                    } else {
                        format!("User {} updated", saved.username)
                    });
                    on_saved.run(());
                }
                Err(e) => {
                    log::error!("Saving user failed: {}", e);
                    set_server_error.set(Some(e.to_string()));
                    set_saving.set(false);
                }
            }
        });
    };

    let title = if is_create {
        "Create New User".to_string()
    } else {
        "Edit User".to_string()
    };
    let disabled = Signal::derive(move || saving.get());

    view! {
        <Modal
            title=title
            on_close=on_close
            class="modal--wide"
            footer=Arc::new(move || view! {
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| on_close.run(())
                    disabled=disabled
                >
                    "Cancel"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| on_submit()
                    disabled=disabled
                >
                    {move || match (saving.get(), is_create) {
                        (true, _) => "Saving...",
                        (false, true) => "Create User",
                        (false, false) => "Update User",
                    }}
                </Button>
            }.into_any())
        >
            {move || server_error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <form class="form" on:submit=move |ev| {
                ev.prevent_default();
                on_submit();
            }>
                <TextField
                    label="Username"
                    value=Signal::derive(move || form.with(|f| f.username.clone()))
                    on_input=setter("username", |f, v| f.username = v)
                    error=field_error("username")
                    required=true
                    maxlength=50u32
                    autocomplete="off"
                    disabled=Signal::derive(move || saving.get() || !is_create)
                />
                <TextField
                    label="Email"
                    input_type="email"
                    value=Signal::derive(move || form.with(|f| f.email.clone()))
                    on_input=setter("email", |f, v| f.email = v)
                    error=field_error("email")
                    required=true
                    disabled=disabled
                />
                <TextField
                    label=if is_create { "Password" } else { "Password (leave blank to keep current)" }
                    input_type="password"
                    value=Signal::derive(move || form.with(|f| f.password.clone()))
                    on_input=setter("password", |f, v| f.password = v)
                    error=field_error("password")
                    required=is_create
                    autocomplete="new-password"
                    disabled=disabled
                />

                <div class="form__row">
                    <TextField
                        label="First Name"
                        value=Signal::derive(move || form.with(|f| f.first_name.clone()))
                        on_input=setter("firstName", |f, v| f.first_name = v)
                        error=field_error("firstName")
                        required=true
                        maxlength=50u32
                        disabled=disabled
                    />
                    <TextField
                        label="Last Name"
                        value=Signal::derive(move || form.with(|f| f.last_name.clone()))
                        on_input=setter("lastName", |f, v| f.last_name = v)
                        error=field_error("lastName")
                        required=true
                        maxlength=50u32
                        disabled=disabled
                    />
                </div>

                <TextField
                    label="Phone Number"
                    input_type="tel"
                    value=Signal::derive(move || form.with(|f| f.phone_number.clone().unwrap_or_default()))
                    on_input=setter("phoneNumber", |f, v| f.phone_number = Some(v))
                    error=field_error("phoneNumber")
                    maxlength=20u32
                    disabled=disabled
                />

                <LocationPicker
                    initial_province=initial_province
                    initial_district=initial_district
                    on_change=Callback::new(move |(province, district)| {
                        form.update(|f| {
                            f.set_province(province);
                            f.district = district;
                        });
                        errors.update(|e| e.retain(|err| err.field != "district"));
                    })
                    error=field_error("district")
                    disabled=disabled
                />

                <div class="form__group">
                    <label class="form__label">"Role" <span class="form__required">" *"</span></label>
                    <CustomSelect
                        value=Signal::derive(move || form.with(|f| f.role.code().to_string()))
                        options=Signal::derive(role_options)
                        on_change=Callback::new(move |code: String| {
                            if let Some(role) = UserRole::from_code(&code) {
                                form.update(|f| f.role = role);
                            }
                        })
                        disabled=disabled
                    />
                </div>

                <Checkbox
                    label="Active"
                    checked=Signal::derive(move || form.with(|f| f.active))
                    on_change=Callback::new(move |checked| form.update(|f| f.active = checked))
                    disabled=disabled
                />
            </form>
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_errors_are_looked_up_by_name() {
        let errors = UserRequest::default().validate(true);
        assert_eq!(error_for(&errors, "password").as_deref(), Some("Password is required"));
        assert!(error_for(&errors, "district").is_none());
    }

    #[test]
    fn role_options_cover_both_roles() {
        let opts = role_options();
        assert_eq!(opts.len(), 2);
        assert!(opts.iter().any(|o| o.value == "ADMIN"));
        assert!(opts.iter().any(|o| o.value == "VETERINARY_OFFICER"));
    }
}
