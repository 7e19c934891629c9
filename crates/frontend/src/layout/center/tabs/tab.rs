use crate::layout::global_context::{AppGlobalContext, Tab as TabData, HOME_TAB};
use crate::layout::tabs::tab_icon_for_key;
use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

/// One entry of the tab strip; the overview tab cannot be closed
#[component]
pub fn Tab(tab: TabData) -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    let closable = tab.key != HOME_TAB;
    let tab_icon = tab_icon_for_key(&tab.key);
    let key = StoredValue::new(tab.key.clone());
    let is_active =
        Memo::new(move |_| tabs_store.active.get().as_deref() == Some(key.get_value().as_str()));

    let on_click = move |_| tabs_store.activate_tab(&key.get_value());

    let on_close = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        tabs_store.close_tab(&key.get_value());
    };

    view! {
        <div class="tab" class:active=is_active on:click=on_click>
            {icon(tab_icon)}
            <span class="tab__title">{tab.title}</span>
            {closable.then(|| view! {
                <button class="tab-close" title="Close" on:click=on_close>{icon("x")}</button>
            })}
        </div>
    }
}
