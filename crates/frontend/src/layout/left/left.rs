use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;

/// Sidebar column; on mobile it slides over the content with a backdrop
#[component]
pub fn Left(children: Children) -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");
    let is_open = move || ctx.left_open.get();
    let is_mobile = move || ctx.is_mobile.get();

    view! {
        <Show when=move || is_mobile() && is_open()>
            <div class="sidebar-overlay active" on:click=move |_| ctx.set_left_open(false)></div>
        </Show>
        <aside
            data-zone="left"
            class="app-sidebar"
            class:app-sidebar--mobile=is_mobile
            class:active=move || is_mobile() && is_open()
            class:hidden=move || !is_mobile() && !is_open()
        >
            {children()}
        </aside>
    }
}
