//! Sidebar navigation with collapsible groups and the signed-in user card

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_auth};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, &'static str, &'static str)>, // (id, label, icon)
    admin_only: bool,
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "dashboards",
            label: "Dashboard",
            icon: "dashboard",
            items: vec![
                ("d400_summary", tab_label_for_key("d400_summary"), "bar-chart"),
                ("d401_user_map", tab_label_for_key("d401_user_map"), "map"),
            ],
            admin_only: false,
        },
        MenuGroup {
            id: "configuration",
            label: tab_label_for_key("configuration"),
            icon: "settings",
            items: vec![],
            admin_only: false,
        },
        MenuGroup {
            id: "sys_users",
            label: tab_label_for_key("sys_users"),
            icon: "users",
            items: vec![],
            admin_only: true,
        },
    ]
}

/// "Jane Perera" -> "JP"
pub fn initials(first_name: &str, last_name: &str) -> String {
    first_name
        .chars()
        .next()
        .into_iter()
        .chain(last_name.chars().next())
        .collect::<String>()
        .to_uppercase()
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (auth_state, set_auth_state) = use_auth();

    let is_admin_untracked = auth_state.with_untracked(|state| state.is_admin());

    let expanded_groups = RwSignal::new(vec!["dashboards".to_string()]);

    let groups = get_menu_groups();

    let logout = move |_| {
        spawn_local(async move {
            do_logout(set_auth_state).await;
        });
    };

    view! {
        <div class="app-sidebar__header">
            <div class="app-sidebar__logo">
                {icon("shield")}
                <span>"ADRS"</span>
            </div>
            <Show when=move || ctx.is_mobile.get()>
                <button
                    class="app-sidebar__close"
                    title="Close menu"
                    on:click=move |_| ctx.set_left_open(false)
                >
                    {icon("x")}
                </button>
            </Show>
        </div>

        <nav class="app-sidebar__content">
            {groups.into_iter().filter_map(|group| {
                    // Skip admin-only groups if user is not admin
                    if group.admin_only && !is_admin_untracked {
                        return None;
                    }

                    let group_id = group.id.to_string();
                    let has_children = !group.items.is_empty();

                    let group_id_stored = StoredValue::new(group_id.clone());
                    let group_id_for_exp = group_id.clone();
                    let group_id_for_click = group_id.clone();

                    Some(view! {
                        <div>
                            <div
                                class="app-sidebar__item"
                                class:app-sidebar__item--active=move || {
                                    let gid = group_id_stored.get_value();
                                    !has_children && ctx.active.get().as_ref() == Some(&gid)
                                }
                                on:click=move |_| {
                                    if has_children {
                                        let gid = group_id_for_click.clone();
                                        expanded_groups.update(move |items| {
                                            if let Some(pos) = items.iter().position(|x| x == &gid) {
                                                items.remove(pos);
                                            } else {
                                                items.push(gid);
                                            }
                                        });
                                    } else {
                                        ctx.open_tab(group.id, group.label);
                                    }
                                }
                            >
                                <div class="app-sidebar__item-content">
                                    {icon(group.icon)}
                                    <span>{group.label}</span>
                                </div>
                                {has_children.then(|| {
                                    let gid_exp = group_id_for_exp.clone();
                                    view! {
                                        <div
                                            class="app-sidebar__chevron"
                                            class:app-sidebar__chevron--expanded=move || expanded_groups.get().contains(&gid_exp)
                                        >
                                            {icon("chevron-right")}
                                        </div>
                                    }
                                })}
                            </div>

                            {has_children.then(|| {
                                let gid_show = group_id.clone();
                                let items_stored = StoredValue::new(group.items.clone());
                                view! {
                                    <Show when=move || expanded_groups.get().contains(&gid_show)>
                                        <div class="app-sidebar__children">
                                            {items_stored.get_value().into_iter().map(|(id, label, icon_name)| {
                                                view! {
                                                    <div
                                                        class="app-sidebar__item"
                                                        class:app-sidebar__item--active=move || {
                                                            ctx.active.get().as_deref() == Some(id)
                                                        }
                                                        on:click=move |_| ctx.open_tab(id, label)
                                                    >
                                                        <div class="app-sidebar__item-content">
                                                            {icon(icon_name)}
                                                            <span>{label}</span>
                                                        </div>
                                                    </div>
                                                }
                                            }).collect_view()}
                                        </div>
                                    </Show>
                                }
                            })}
                        </div>
                    })
                }).collect_view()}
        </nav>

        {move || auth_state.get().user_info.map(|user| {
            let role = user.role.display_name();
            view! {
                <div class="app-sidebar__user">
                    <div class="app-sidebar__user-info">
                        <div class="app-sidebar__avatar">
                            {initials(
                                user.first_name.as_deref().unwrap_or(""),
                                user.last_name.as_deref().unwrap_or(""),
                            )}
                        </div>
                        <div class="app-sidebar__user-details">
                            <div class="app-sidebar__user-name">{user.full_name()}</div>
                            <div class="app-sidebar__user-role">{role}</div>
                        </div>
                    </div>
                    <button class="button button--secondary button--block button--small" on:click=logout>
                        {icon("log-out")}
                        " Logout"
                    </button>
                </div>
            }
        })}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_from_names() {
        assert_eq!(initials("jane", "perera"), "JP");
        assert_eq!(initials("", "Silva"), "S");
        assert_eq!(initials("", ""), "");
    }

    #[test]
    fn users_group_is_admin_only() {
        let groups = get_menu_groups();
        let users = groups.iter().find(|g| g.id == "sys_users").unwrap();
        assert!(users.admin_only);
        assert!(groups.iter().filter(|g| g.id != "sys_users").all(|g| !g.admin_only));
    }
}
