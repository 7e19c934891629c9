mod state;

use contracts::system::users::UserResponse;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::form::UserFormModal;
use crate::shared::components::ui::{ActiveBadge, Badge};
use crate::shared::date_utils::format_last_login;
use crate::shared::icons::icon;
use crate::shared::list_utils::{get_sort_indicator, SearchInput};
use crate::shared::modal::confirm_action;
use crate::shared::notifications::use_notifications;
use crate::shared::page_frame::{PageCategory, PageFrame};
use crate::system::auth::context::use_auth;
use crate::system::auth::guard::RequireAdmin;
use crate::system::users::api;
use state::{create_state, role_counts};

/// "Kandy, Central Province", or "-" when unassigned
fn location_label(user: &UserResponse) -> String {
    match (user.district, user.province) {
        (Some(d), Some(p)) => format!("{}, {}", d.display_name(), p.display_name()),
        (Some(d), None) => d.display_name().to_string(),
        (None, Some(p)) => p.display_name().to_string(),
        (None, None) => "-".to_string(),
    }
}

fn delete_prompt(username: &str) -> String {
    format!(
        "Are you sure you want to delete {}? This action cannot be undone.",
        username
    )
}

fn toggle_prompt(currently_active: bool) -> String {
    format!(
        "Are you sure you want to {} this user?",
        if currently_active { "deactivate" } else { "activate" }
    )
}

fn role_badge_class(user: &UserResponse) -> &'static str {
    if user.role.is_admin() {
        "badge--primary"
    } else {
        "badge--info"
    }
}

#[component]
pub fn UsersListPage() -> impl IntoView {
    view! {
        <RequireAdmin>
            <UsersList />
        </RequireAdmin>
    }
}

/// Editor state: closed, creating or editing a given user
#[derive(Clone, Debug, PartialEq)]
enum Editor {
    Closed,
    Create,
    Edit(UserResponse),
}

#[component]
fn UsersList() -> impl IntoView {
    let state = create_state();
    let notifications = use_notifications();
    let (auth_state, _) = use_auth();
    let all_users: RwSignal<Vec<UserResponse>> = RwSignal::new(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let editor = RwSignal::new(Editor::Closed);
    // row whose status/delete request is in flight
    let busy_row: RwSignal<Option<i64>> = RwSignal::new(None);

    let current_username = move || {
        auth_state.with_untracked(|s| s.user_info.as_ref().map(|u| u.username.clone()))
    };

    let load_data = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_users().await {
                Ok(data) => {
                    log::debug!("Loaded {} users", data.len());
                    all_users.try_set(data);
                    state.try_update(|s| s.is_loaded = true);
                }
                Err(e) => {
                    log::error!("Failed to load users: {}", e);
                    set_error.try_set(Some(format!("Failed to load users: {}", e)));
                }
            }
            set_loading.try_set(false);
        });
    };

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            load_data();
        }
    });

    let rows = Memo::new(move |_| {
        let users = all_users.get();
        state.with(|s| s.visible(users))
    });

    let toggle_sort = move |field: &'static str| move |_| state.update(|s| s.toggle_sort(field));
    let sort_mark = move |field: &'static str| {
        move || state.with(|s| get_sort_indicator(&s.sort_field, field, s.sort_ascending))
    };

    let toggle_active = move |user: UserResponse| {
        if !confirm_action(&toggle_prompt(user.active)) {
            return;
        }
        busy_row.set(Some(user.id));
        spawn_local(async move {
            let target = !user.active;
            match api::set_user_active(user.id, target).await {
                Ok(()) => {
                    all_users.try_update(|list| {
                        if let Some(u) = list.iter_mut().find(|u| u.id == user.id) {
                            u.active = target;
                        }
                    });
                    notifications.success(if target {
                        format!("User {} activated", user.username)
                    } else {
                        format!("User {} deactivated", user.username)
                    });
                }
                Err(e) => {
                    log::error!("Status change for user {} failed: {}", user.id, e);
                    notifications.error(format!("Failed to update user status: {}", e));
                }
            }
            busy_row.try_set(None);
        });
    };

    let delete = move |user: UserResponse| {
        if !confirm_action(&delete_prompt(&user.username)) {
            return;
        }
        busy_row.set(Some(user.id));
        spawn_local(async move {
            match api::delete_user(user.id).await {
                Ok(()) => {
                    all_users.try_update(|list| list.retain(|u| u.id != user.id));
                    notifications.success(format!("User {} deleted", user.username));
                }
                Err(e) => {
                    log::error!("Deleting user {} failed: {}", user.id, e);
                    notifications.error(format!("Failed to delete user: {}", e));
                }
            }
            busy_row.try_set(None);
        });
    };

    let on_close = Callback::new(move |_| editor.set(Editor::Closed));
    let on_saved = Callback::new(move |_| {
        editor.set(Editor::Closed);
        load_data();
    });

    view! {
        <PageFrame page_id="users--system" category=PageCategory::System>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"User Management"</h1>
                    <Badge>{move || all_users.with(|u| u.len().to_string())}</Badge>
                    <span class="page__subtitle">
                        {move || all_users.with(|u| {
                            let (admins, officers) = role_counts(u);
                            format!("{} administrators, {} veterinary officers", admins, officers)
                        })}
                    </span>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| editor.set(Editor::Create)
                    >
                        {icon("plus")}
                        " Add User"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load_data()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        {move || if loading.get() { " Loading..." } else { " Refresh" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="filter-panel">
                    <SearchInput
                        placeholder="Search by username, name or email..."
                        on_change=Callback::new(move |q: String| state.update(|s| s.search_query = q))
                    />
                </div>

                <div class="table-wrapper">
                    <Table attr:class="data-table data-table--cards">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>
                                    <div class="table__sortable-header" on:click=toggle_sort("username")>
                                        "Username" <span>{sort_mark("username")}</span>
                                    </div>
                                </TableHeaderCell>
                                <TableHeaderCell>
                                    <div class="table__sortable-header" on:click=toggle_sort("full_name")>
                                        "Name" <span>{sort_mark("full_name")}</span>
                                    </div>
                                </TableHeaderCell>
                                <TableHeaderCell>
                                    <div class="table__sortable-header" on:click=toggle_sort("email")>
                                        "Email" <span>{sort_mark("email")}</span>
                                    </div>
                                </TableHeaderCell>
                                <TableHeaderCell>
                                    <div class="table__sortable-header" on:click=toggle_sort("role")>
                                        "Role" <span>{sort_mark("role")}</span>
                                    </div>
                                </TableHeaderCell>
                                <TableHeaderCell>
                                    <div class="table__sortable-header" on:click=toggle_sort("location")>
                                        "Location" <span>{sort_mark("location")}</span>
                                    </div>
                                </TableHeaderCell>
                                <TableHeaderCell>
                                    <div class="table__sortable-header" on:click=toggle_sort("active")>
                                        "Status" <span>{sort_mark("active")}</span>
                                    </div>
                                </TableHeaderCell>
                                <TableHeaderCell>
                                    <div class="table__sortable-header" on:click=toggle_sort("last_login")>
                                        "Last Login" <span>{sort_mark("last_login")}</span>
                                    </div>
                                </TableHeaderCell>
                                <TableHeaderCell>"Actions"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || rows.get()
                                key=|u| (u.id, u.active, u.updated_at)
                                children=move |user| {
                                    let id = user.id;
                                    let is_self = current_username().as_deref() == Some(user.username.as_str());
                                    let row_disabled = Signal::derive(move || is_self || busy_row.get() == Some(id));
                                    let for_edit = user.clone();
                                    let for_toggle = user.clone();
                                    let for_delete = user.clone();
                                    let toggle_title = if user.active { "Deactivate" } else { "Activate" };
                                    let active = user.active;
                                    let username = user.username.clone();
                                    let full_name = user.full_name();
                                    let email = user.email.clone();
                                    let role_class = role_badge_class(&user);
                                    let role_name = user.role.display_name();
                                    let location = location_label(&user);
                                    let last_login = format_last_login(user.last_login);
                                    view! {
                                        <TableRow>
                                            <TableCell attr:data-label="Username">
                                                <span class="data-table__primary">{username}</span>
                                            </TableCell>
                                            <TableCell attr:data-label="Name">{full_name}</TableCell>
                                            <TableCell attr:data-label="Email">{email}</TableCell>
                                            <TableCell attr:data-label="Role">
                                                <Badge variant=role_class>{role_name}</Badge>
                                            </TableCell>
                                            <TableCell attr:data-label="Location">{location}</TableCell>
                                            <TableCell attr:data-label="Status">
                                                <ActiveBadge active=active />
                                            </TableCell>
                                            <TableCell attr:data-label="Last Login">
                                                {last_login}
                                            </TableCell>
                                            <TableCell attr:data-label="Actions">
                                                <div class="data-table__actions">
                                                    <Button
                                                        appearance=ButtonAppearance::Subtle
                                                        on_click=move |_| editor.set(Editor::Edit(for_edit.clone()))
                                                        attr:title="Edit"
                                                    >
                                                        {icon("edit")}
                                                    </Button>
                                                    <Button
                                                        appearance=ButtonAppearance::Subtle
                                                        on_click=move |_| toggle_active(for_toggle.clone())
                                                        disabled=row_disabled
                                                        attr:title=toggle_title
                                                    >
                                                        {icon("power")}
                                                    </Button>
                                                    <Button
                                                        appearance=ButtonAppearance::Subtle
                                                        on_click=move |_| delete(for_delete.clone())
                                                        disabled=row_disabled
                                                        attr:title="Delete"
                                                    >
                                                        {icon("delete")}
                                                    </Button>
                                                </div>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>

                    <Show when=move || state.with(|s| s.is_loaded) && rows.with(|r| r.is_empty())>
                        <div class="empty-state">
                            {move || if state.with(|s| s.search_query.trim().is_empty()) {
                                "No users yet"
                            } else {
                                "No users match your search"
                            }}
                        </div>
                    </Show>
                </div>
            </div>

            {move || match editor.get() {
                Editor::Closed => None,
                Editor::Create => Some(view! {
                    <UserFormModal user=None on_close=on_close on_saved=on_saved />
                }.into_any()),
                Editor::Edit(user) => Some(view! {
                    <UserFormModal user=Some(user) on_close=on_close on_saved=on_saved />
                }.into_any()),
            }}
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::{District, Province, UserRole};

    fn user() -> UserResponse {
        UserResponse {
            id: 4,
            username: "vet_galle".into(),
            email: "galle@vet.lk".into(),
            first_name: "Ruwan".into(),
            last_name: "Jayasuriya".into(),
            phone_number: None,
            province: Some(Province::Southern),
            district: Some(District::Galle),
            role: UserRole::VeterinaryOfficer,
            active: true,
            created_at: None,
            updated_at: None,
            last_login: None,
        }
    }

    #[test]
    fn location_shows_district_and_province() {
        let mut u = user();
        assert_eq!(
            location_label(&u),
            format!("Galle, {}", Province::Southern.display_name())
        );
        u.district = None;
        u.province = None;
        assert_eq!(location_label(&u), "-");
    }

    #[test]
    fn confirmation_messages() {
        assert_eq!(
            delete_prompt("vet_galle"),
            "Are you sure you want to delete vet_galle? This action cannot be undone."
        );
        assert_eq!(toggle_prompt(true), "Are you sure you want to deactivate this user?");
        assert_eq!(toggle_prompt(false), "Are you sure you want to activate this user?");
    }

    #[test]
    fn admins_get_a_distinct_badge() {
        let mut u = user();
        assert_eq!(role_badge_class(&u), "badge--info");
        u.role = UserRole::Admin;
        assert_eq!(role_badge_class(&u), "badge--primary");
    }
}
