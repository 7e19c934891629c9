use contracts::enums::UserRole;
use contracts::system::users::UserResponse;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::map::SelectedRegion;
use crate::dashboards::d401_user_map::api;
use crate::shared::components::ui::Badge;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RegionStats {
    pub total: usize,
    pub admins: usize,
    pub vets: usize,
}

impl RegionStats {
    pub fn from_users(users: &[UserResponse]) -> Self {
        let count = |role: UserRole| users.iter().filter(|u| u.role == role).count();
        Self {
            total: users.len(),
            admins: count(UserRole::Admin),
            vets: count(UserRole::VeterinaryOfficer),
        }
    }
}

fn role_badge(role: UserRole) -> (&'static str, &'static str) {
    match role {
        UserRole::Admin => ("badge--primary", "Admin"),
        UserRole::VeterinaryOfficer => ("badge--success", "Vet Officer"),
    }
}

/// Users of one clicked map region
#[component]
pub fn RegionUsersModal(region: SelectedRegion, on_close: Callback<()>) -> impl IntoView {
    let (users, set_users) = signal(None::<Vec<UserResponse>>);
    let (error, set_error) = signal(None::<String>);

    let title = format!("Users in {}", region.name);
    let SelectedRegion {
        granularity,
        code,
        role,
        ..
    } = region;
    spawn_local(async move {
        match api::fetch_region_users(granularity, code, role).await {
            Ok(list) => {
                set_users.try_set(Some(list));
            }
            Err(e) => {
                log::error!("Failed to load users for {}: {}", code, e);
                set_error.try_set(Some("Failed to load users. Please try again.".to_string()));
            }
        }
    });

    let stats = move || {
        users.with(|u| u.as_deref().map(RegionStats::from_users)).map(|s| {
            view! {
                <div class="region-stats">
                    <div class="region-stats__item">
                        <div class="region-stats__value">{s.total}</div>
                        <div class="region-stats__label">"Total Users"</div>
                    </div>
                    <div class="region-stats__item">
                        <div class="region-stats__value">{s.admins}</div>
                        <div class="region-stats__label">"Administrators"</div>
                    </div>
                    <div class="region-stats__item">
                        <div class="region-stats__value">{s.vets}</div>
                        <div class="region-stats__label">"Veterinary Officers"</div>
                    </div>
                </div>
            }
        })
    };

    let list = move || match users.get() {
        None if error.get().is_none() => {
            view! { <div class="region-users__loading">"Loading users…"</div> }.into_any()
        }
        None => ().into_any(),
        Some(list) if list.is_empty() => {
            view! { <div class="region-users__empty">"No users found in this region."</div> }.into_any()
        }
        Some(list) => view! {
            <ul class="region-users">
                {list.into_iter().map(|u| {
                    let (badge_class, badge_label) = role_badge(u.role);
                    view! {
                        <li class="region-users__item">
                            <div class="region-users__name">{u.full_name()}</div>
                            <div class="region-users__details">
                                <span>{icon("user")} {u.username.clone()}</span>
                                <span>{u.email.clone()}</span>
                                {u.phone_number.clone().map(|p| view! { <span>{p}</span> })}
                                {u.district.map(|d| view! { <span>{icon("map")} {d.display_name()}</span> })}
                                <Badge variant=badge_class>{badge_label}</Badge>
                            </div>
                        </li>
                    }
                }).collect_view()}
            </ul>
        }
        .into_any(),
    };

    view! {
        <Modal title=title on_close=on_close class="modal--wide">
            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
            {stats}
            {list}
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: i64, role: UserRole) -> UserResponse {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "username": format!("user{id}"),
            "role": role.code(),
        }))
        .unwrap()
    }

    #[test]
    fn region_stats_count_roles() {
        let users = vec![
            user(1, UserRole::Admin),
            user(2, UserRole::VeterinaryOfficer),
            user(3, UserRole::VeterinaryOfficer),
        ];
        assert_eq!(
            RegionStats::from_users(&users),
            RegionStats {
                total: 3,
                admins: 1,
                vets: 2
            }
        );
        assert_eq!(RegionStats::from_users(&[]), RegionStats::default());
    }
}
