use leptos::prelude::*;

/// Badge component with different variants
#[component]
pub fn Badge(
    /// CSS modifier such as "badge--success"; neutral when empty
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Badge content
    children: Children,
) -> impl IntoView {
    let variant_class = move || {
        variant
            .get()
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| "badge--neutral".to_string())
    };

    view! {
        <span class=move || format!("badge {}", variant_class())>
            {children()}
        </span>
    }
}

/// Active / Inactive pill for configuration rows and users
#[component]
pub fn ActiveBadge(#[prop(into)] active: Signal<bool>) -> impl IntoView {
    view! {
        <span
            class="badge badge--status"
            class:badge--success=move || active.get()
            class:badge--neutral=move || !active.get()
        >
            {move || if active.get() { "Active" } else { "Inactive" }}
        </span>
    }
}
