//! Pieces every configuration table renders the same way

use leptos::prelude::*;
use thaw::*;

use super::view_model::{ConfigCollection, ConfigListViewModel};
use crate::shared::components::ui::Badge;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use crate::shared::notifications::use_notifications;

/// Title, record count, search box and the add / refresh buttons
#[component]
pub fn ConfigToolbar<T: ConfigCollection>(vm: ConfigListViewModel<T>) -> impl IntoView {
    view! {
        <div class="config-toolbar">
            <div class="config-toolbar__left">
                <h2 class="config-toolbar__title">{T::list_name()}</h2>
                <Badge>{move || vm.items.with(|i| i.len().to_string())}</Badge>
            </div>
            <SearchInput
                placeholder=format!("Search {}...", T::list_name().to_lowercase())
                on_change=Callback::new(move |q: String| vm.search.set(q))
            />
            <div class="config-toolbar__right">
                <Button appearance=ButtonAppearance::Primary on_click=move |_| vm.open_create()>
                    {icon("plus")}
                    {format!(" Add {}", T::element_name())}
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| vm.load()
                    disabled=Signal::derive(move || vm.loading.get())
                    attr:title="Refresh"
                >
                    {icon("refresh")}
                </Button>
            </div>
        </div>
        {move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
    }
}

/// Created by / created at / usage cells
pub fn audit_cells<T: ConfigCollection>(item: &T) -> impl IntoView {
    let meta = item.metadata();
    let author = meta
        .created_by_username
        .clone()
        .unwrap_or_else(|| "System".to_string());
    let created = format_date(meta.created_at);
    let usage = T::usage_caption(item.usage_count().unwrap_or(0));
    view! {
        <TableCell attr:data-label="Created By">{author}</TableCell>
        <TableCell attr:data-label="Created">{created}</TableCell>
        <TableCell attr:data-label="Usage"><strong>{usage}</strong></TableCell>
    }
}

/// Edit, activate/deactivate and delete buttons
#[component]
pub fn RowActions<T: ConfigCollection>(item: T, vm: ConfigListViewModel<T>) -> impl IntoView {
    let notifications = use_notifications();
    let id = item.id();
    let active = item.is_active();
    let item = StoredValue::new(item);

    view! {
        <TableCell attr:data-label="Actions">
            <div class="data-table__actions">
                <Button
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| vm.open_edit(item.get_value(), notifications)
                    attr:title="Edit"
                >
                    {icon("edit")}
                </Button>
                <Button
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| vm.toggle_status(item.get_value(), notifications)
                    disabled=Signal::derive(move || vm.busy.get() == Some(id))
                    attr:title=if active { "Deactivate" } else { "Activate" }
                >
                    {icon("power")}
                </Button>
                <Button
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| vm.deleting.set(Some(item.get_value()))
                    attr:title="Delete"
                >
                    {icon("delete")}
                </Button>
            </div>
        </TableCell>
    }
}

/// Placeholder row for an empty table
#[component]
pub fn EmptyRow(colspan: u32, #[prop(into)] message: String) -> impl IntoView {
    view! {
        <tr class="empty-state">
            <td colspan=colspan.to_string()>{message}</td>
        </tr>
    }
}
