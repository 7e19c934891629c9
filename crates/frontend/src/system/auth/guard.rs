use leptos::prelude::*;

use super::context::use_auth;

/// Renders children only for administrators
#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().is_admin()
            fallback=|| view! {
                <div class="alert alert--warning">
                    "Access denied. Administrator privileges are required."
                </div>
            }
        >
            {children()}
        </Show>
    }
}
