use leptos::prelude::Effect;
use leptos::prelude::*;

use crate::layout::responsive;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::tab_state;

/// Tab opened when nothing else is requested
pub const HOME_TAB: &str = "d400_summary";

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub opened: RwSignal<Vec<Tab>>,
    pub active: RwSignal<Option<String>>,
    pub left_open: RwSignal<bool>,
    /// Viewport at or below the mobile breakpoint
    pub is_mobile: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        let mobile = responsive::is_mobile();
        Self {
            opened: RwSignal::new(vec![]),
            active: RwSignal::new(None),
            // the sidebar starts closed on phones
            left_open: RwSignal::new(!mobile),
            is_mobile: RwSignal::new(mobile),
        }
    }

    /// Restore the active tab from `?active=` and keep the URL in sync.
    ///
    /// Only the `active` parameter is rewritten, so page parameters such as
    /// `?tab=` and `?section=` survive tab switches.
    pub fn init_router_integration(&self) {
        let requested = tab_state::read_param("active")
            .filter(|key| !tab_label_for_key(key).is_empty())
            .unwrap_or_else(|| HOME_TAB.to_string());
        self.open_tab(&requested, tab_label_for_key(&requested));

        let this = *self;
        Effect::new(move |_| {
            if let Some(active_key) = this.active.get() {
                tab_state::write_param("active", &active_key);
            }
        });
    }

    pub fn open_tab(&self, key: &str, title: &str) {
        leptos::logging::log!("open_tab: key='{}', title='{}'", key, title);
        let exists = self
            .opened
            .with_untracked(|tabs| tabs.iter().any(|tab| tab.key == key));
        if !exists {
            let tab = Tab {
                key: key.to_string(),
                title: title.to_string(),
            };
            self.opened.update(|tabs| tabs.push(tab));
        }
        self.activate_tab(key);
        if self.is_mobile.get_untracked() {
            self.left_open.set(false);
        }
    }

    pub fn activate_tab(&self, key: &str) {
        self.active.set(Some(key.to_string()));
    }

    pub fn close_tab(&self, key: &str) {
        leptos::logging::log!("close_tab: key='{}'", key);
        let mut next = None;
        self.opened.update(|tabs| {
            next = next_active_after_close(tabs, key);
            tabs.retain(|tab| tab.key != key);
        });
        if self
            .active
            .with_untracked(|active| active.as_deref() == Some(key))
        {
            self.active.set(next);
        }
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }

    pub fn set_left_open(&self, open: bool) {
        if self.left_open.get_untracked() != open {
            self.left_open.set(open);
        }
    }

    /// Track a breakpoint crossing: desktop shows the sidebar, mobile hides it
    pub fn set_mobile(&self, mobile: bool) {
        if self.is_mobile.get_untracked() == mobile {
            return;
        }
        log::debug!("viewport is now {}", if mobile { "mobile" } else { "desktop" });
        self.is_mobile.set(mobile);
        self.set_left_open(!mobile);
    }
}

/// Neighbour that takes over when `closing` goes away: the tab to its right,
/// else the one to its left
pub fn next_active_after_close(tabs: &[Tab], closing: &str) -> Option<String> {
    let pos = tabs.iter().position(|t| t.key == closing)?;
    tabs.get(pos + 1)
        .or_else(|| pos.checked_sub(1).and_then(|p| tabs.get(p)))
        .map(|t| t.key.clone())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub key: String,
    pub title: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tabs(keys: &[&str]) -> Vec<Tab> {
        keys.iter()
            .map(|k| Tab {
                key: k.to_string(),
                title: k.to_string(),
            })
            .collect()
    }

    #[test]
    fn closing_prefers_right_neighbour() {
        let t = tabs(&["a", "b", "c"]);
        assert_eq!(next_active_after_close(&t, "b"), Some("c".to_string()));
        assert_eq!(next_active_after_close(&t, "c"), Some("b".to_string()));
        assert_eq!(next_active_after_close(&t, "a"), Some("b".to_string()));
    }

    #[test]
    fn closing_last_or_unknown_tab() {
        assert_eq!(next_active_after_close(&tabs(&["a"]), "a"), None);
        assert_eq!(next_active_after_close(&tabs(&["a"]), "zzz"), None);
    }
}
