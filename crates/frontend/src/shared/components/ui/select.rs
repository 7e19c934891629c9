//! Dropdown that replaces the native `<select>` so it can be styled on mobile.
//!
//! The keyboard/open-close rules live in [`DropdownState`], which the
//! component drives from DOM events.

use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::layout::responsive::is_mobile;
use crate::shared::icons::icon;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Options shown in the list: an empty-valued first entry is the
/// placeholder and is not offered as a choice
pub fn listed_options(options: &[SelectOption]) -> &[SelectOption] {
    match options.first() {
        Some(first) if first.value.is_empty() => &options[1..],
        _ => options,
    }
}

/// Trigger caption and whether it is the placeholder
pub fn trigger_label(options: &[SelectOption], value: &str, placeholder: &str) -> (String, bool) {
    if value.is_empty() {
        return (placeholder.to_string(), true);
    }
    match options.iter().find(|o| o.value == value) {
        Some(o) => (o.label.clone(), false),
        None => (placeholder.to_string(), true),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyOutcome {
    Ignored,
    Handled,
    Select(usize),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DropdownState {
    pub open: bool,
    /// Index into the listed options
    pub highlighted: Option<usize>,
}

impl DropdownState {
    /// Open with the current selection highlighted, or close
    pub fn toggle(&mut self, selected: Option<usize>) {
        if self.open {
            self.close();
        } else {
            self.open = true;
            self.highlighted = selected;
        }
    }

    pub fn close(&mut self) {
        self.open = false;
        self.highlighted = None;
    }

    pub fn on_key(&mut self, key: &str, option_count: usize) -> KeyOutcome {
        match key {
            "Escape" if self.open => {
                self.close();
                KeyOutcome::Handled
            }
            "Enter" | " " => match (self.open, self.highlighted) {
                (true, Some(i)) if i < option_count => {
                    self.close();
                    KeyOutcome::Select(i)
                }
                (true, _) => KeyOutcome::Handled,
                (false, _) => {
                    self.toggle(None);
                    KeyOutcome::Handled
                }
            },
            "ArrowDown" if option_count > 0 => {
                self.open = true;
                self.highlighted = Some(match self.highlighted {
                    Some(i) if i + 1 < option_count => i + 1,
                    Some(i) => i,
                    None => 0,
                });
                KeyOutcome::Handled
            }
            "ArrowUp" if self.open && option_count > 0 => {
                self.highlighted = Some(self.highlighted.map(|i| i.saturating_sub(1)).unwrap_or(0));
                KeyOutcome::Handled
            }
            _ => KeyOutcome::Ignored,
        }
    }
}

#[component]
pub fn CustomSelect(
    /// Currently selected value ("" = nothing)
    #[prop(into)]
    value: Signal<String>,
    #[prop(into)] options: Signal<Vec<SelectOption>>,
    on_change: Callback<String>,
    /// Trigger text while nothing is selected
    #[prop(optional, into)]
    placeholder: Signal<String>,
    /// Title shown in the mobile sheet header
    #[prop(optional, into)]
    title: MaybeProp<String>,
    #[prop(optional, into)] disabled: Signal<bool>,
) -> impl IntoView {
    let state = RwSignal::new(DropdownState::default());
    let wrapper_ref = NodeRef::<leptos::html::Div>::new();
    let placeholder_text = move || {
        let text = placeholder.get();
        if text.is_empty() {
            "Select an option...".to_string()
        } else {
            text
        }
    };

    let listed = Memo::new(move |_| listed_options(&options.get()).to_vec());
    let selected_index = move || {
        let current = value.get_untracked();
        listed
            .get_untracked()
            .iter()
            .position(|o| o.value == current)
    };

    let choose = move |index: usize| {
        if let Some(option) = listed.get_untracked().get(index) {
            on_change.run(option.value.clone());
        }
        state.update(|s| s.close());
    };

    // outside click and Escape; listeners are removed with the component
    let click_handle = window_event_listener(ev::click, move |event| {
        if !state.get_untracked().open {
            return;
        }
        let inside = match (wrapper_ref.get_untracked(), event.target()) {
            (Some(wrapper), Some(target)) => target
                .dyn_ref::<web_sys::Node>()
                .map(|node| wrapper.contains(Some(node)))
                .unwrap_or(false),
            _ => false,
        };
        if !inside {
            state.update(|s| s.close());
        }
    });
    let key_handle = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" && state.get_untracked().open {
            state.update(|s| s.close());
        }
    });
    on_cleanup(move || {
        click_handle.remove();
        key_handle.remove();
    });

    let on_trigger_click = move |ev: ev::MouseEvent| {
        ev.prevent_default();
        if disabled.get_untracked() {
            return;
        }
        let selected = selected_index();
        state.update(|s| s.toggle(selected));
    };

    let on_keydown = move |ev: ev::KeyboardEvent| {
        if disabled.get_untracked() {
            return;
        }
        let count = listed.get_untracked().len();
        let mut next = state.get_untracked();
        let outcome = next.on_key(&ev.key(), count);
        if outcome != KeyOutcome::Ignored {
            ev.prevent_default();
        }
        state.set(next);
        if let KeyOutcome::Select(i) = outcome {
            choose(i);
        }
    };

    let caption = move || trigger_label(&options.get(), &value.get(), &placeholder_text());

    view! {
        <div
            class="custom-select-wrapper"
            class:open=move || state.get().open
            class:disabled=move || disabled.get()
            node_ref=wrapper_ref
        >
            <button
                type="button"
                class="custom-select-trigger"
                class:placeholder=move || caption().1
                aria-haspopup="listbox"
                aria-expanded=move || state.get().open.to_string()
                disabled=move || disabled.get()
                on:click=on_trigger_click
                on:keydown=on_keydown
            >
                <span class="custom-select-value">{move || caption().0}</span>
                <span class="custom-select-arrow">{icon("chevron-down")}</span>
            </button>

            <Show when=move || state.get().open && is_mobile()>
                <div class="custom-select-backdrop" on:click=move |_| state.update(|s| s.close())></div>
            </Show>

            <Show when=move || state.get().open>
                <div class="custom-select-options" role="listbox">
                    <div class="custom-select-header">
                        <span>{move || title.get().unwrap_or_else(placeholder_text)}</span>
                        <button
                            type="button"
                            class="close-btn"
                            title="Close"
                            on:click=move |_| state.update(|s| s.close())
                        >
                            {icon("x")}
                        </button>
                    </div>
                    <div class="custom-select-options-list">
                        {move || {
                            let current = value.get();
                            let highlighted = state.get().highlighted;
                            listed
                                .get()
                                .into_iter()
                                .enumerate()
                                .map(|(i, option)| {
                                    let selected = option.value == current;
                                    view! {
                                        <div
                                            class="custom-select-option"
                                            class:selected=selected
                                            class:highlighted=highlighted == Some(i)
                                            role="option"
                                            tabindex="0"
                                            aria-selected=selected.to_string()
                                            on:click=move |_| choose(i)
                                            on:keydown=move |ev: ev::KeyboardEvent| {
                                                let key = ev.key();
                                                if key == "Enter" || key == " " {
                                                    ev.prevent_default();
                                                    choose(i);
                                                }
                                            }
                                        >
                                            {option.label}
                                        </div>
                                    }
                                })
                                .collect_view()
                        }}
                    </div>
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts() -> Vec<SelectOption> {
        vec![
            SelectOption::new("", "Select province"),
            SelectOption::new("WESTERN", "Western Province"),
            SelectOption::new("UVA", "Uva Province"),
        ]
    }

    #[test]
    fn placeholder_option_is_not_listed() {
        let all = opts();
        let listed = listed_options(&all);
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].value, "WESTERN");

        let no_placeholder = &all[1..];
        assert_eq!(listed_options(no_placeholder).len(), 2);
    }

    #[test]
    fn trigger_shows_selected_label_or_placeholder() {
        let all = opts();
        assert_eq!(
            trigger_label(&all, "UVA", "Pick one"),
            ("Uva Province".to_string(), false)
        );
        assert_eq!(trigger_label(&all, "", "Pick one"), ("Pick one".to_string(), true));
        assert_eq!(trigger_label(&all, "GONE", "Pick one"), ("Pick one".to_string(), true));
    }

    #[test]
    fn toggle_opens_on_selection_and_closes() {
        let mut s = DropdownState::default();
        s.toggle(Some(1));
        assert!(s.open);
        assert_eq!(s.highlighted, Some(1));
        s.toggle(None);
        assert_eq!(s, DropdownState::default());
    }

    #[test]
    fn keyboard_navigation_and_selection() {
        let mut s = DropdownState::default();
        assert_eq!(s.on_key("ArrowDown", 3), KeyOutcome::Handled);
        assert_eq!(s.highlighted, Some(0));
        s.on_key("ArrowDown", 3);
        s.on_key("ArrowDown", 3);
        s.on_key("ArrowDown", 3);
        assert_eq!(s.highlighted, Some(2));
        s.on_key("ArrowUp", 3);
        assert_eq!(s.on_key(" ", 3), KeyOutcome::Select(1));
        assert!(!s.open);
    }

    #[test]
    fn enter_on_closed_dropdown_opens_it() {
        let mut s = DropdownState::default();
        assert_eq!(s.on_key("Enter", 2), KeyOutcome::Handled);
        assert!(s.open);
        assert_eq!(s.on_key("Enter", 2), KeyOutcome::Handled);
        assert!(s.open);
    }

    #[test]
    fn escape_only_matters_when_open() {
        let mut s = DropdownState::default();
        assert_eq!(s.on_key("Escape", 2), KeyOutcome::Ignored);
        s.toggle(None);
        assert_eq!(s.on_key("Escape", 2), KeyOutcome::Handled);
        assert!(!s.open);
        assert_eq!(s.on_key("Tab", 2), KeyOutcome::Ignored);
    }
}
