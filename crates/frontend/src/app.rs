use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::notifications::{Notifications, ToastHost};
use crate::system::auth::context::AuthProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Tab store shared by the sidebar, the tab strip and the pages
    provide_context(AppGlobalContext::new());
    provide_context(Notifications::new());

    view! {
        <AuthProvider>
            <AppRoutes />
            <ToastHost />
        </AuthProvider>
    }
}
