//! Top bar: menu toggle, application title, signed-in user and logout

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_auth};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (auth_state, set_auth_state) = use_auth();

    let toggle_sidebar = move |_| ctx.toggle_left();

    let logout = move |_| {
        spawn_local(async move {
            do_logout(set_auth_state).await;
        });
    };

    let is_sidebar_visible = move || ctx.left_open.get();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=toggle_sidebar
                    aria-label="Toggle navigation"
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">"Animal Disease Reporting System"</span>
            </div>

            <div class="top-header__actions">
                <div class="top-header__user">
                    {icon("user")}
                    <span class="top-header__user-name">
                        {move || auth_state.get().user_info
                            .map(|u| u.full_name())
                            .unwrap_or_else(|| "Guest".to_string())}
                    </span>
                    {move || auth_state.get().user_info.map(|u| view! {
                        <span class="badge badge--info top-header__role">{u.role.display_name()}</span>
                    })}
                </div>

                <button class="top-header__icon-btn" on:click=logout title="Logout">
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}
