//! Tab key → view; every tab key the shell can open is listed here

use crate::dashboards::d400_summary::ui::SummaryDashboard;
use crate::dashboards::d401_user_map::ui::UserMapDashboard;
use crate::domain::configuration::ConfigurationPage;
use crate::system::users::ui::list::UsersListPage;
use leptos::logging::log;
use leptos::prelude::*;

/// Content for a tab key, or a placeholder for unknown keys
pub fn render_tab_content(key: &str) -> AnyView {
    match key {
        // Dashboards (d4xx)
        "d400_summary" => view! { <SummaryDashboard /> }.into_any(),
        "d401_user_map" => view! { <UserMapDashboard /> }.into_any(),

        // Configuration: farm types, animal types, diseases
        "configuration" => view! { <ConfigurationPage /> }.into_any(),

        // System
        "sys_users" => view! { <UsersListPage /> }.into_any(),

        _ => {
            log!("Unknown tab key: {}", key);
            view! { <div class="placeholder">"Page not found"</div> }.into_any()
        }
    }
}
