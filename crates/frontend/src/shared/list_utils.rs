//! Search and sort helpers shared by the list pages
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use std::cmp::Ordering;

/// Rows that can be matched against a free-text filter
pub trait Searchable {
    fn matches_filter(&self, filter: &str) -> bool;
}

/// Rows that can be ordered by a named column
pub trait Sortable {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

pub fn filter_list<T: Searchable>(items: Vec<T>, filter: &str) -> Vec<T> {
    if filter.trim().is_empty() {
        return items;
    }
    items
        .into_iter()
        .filter(|item| item.matches_filter(filter))
        .collect()
}

/// Case-insensitive ordering for text columns
pub fn cmp_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

/// Search box that reports its value 300 ms after typing stops
#[component]
pub fn SearchInput(
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    let (input_value, set_input_value) = signal(String::new());
    let pending = StoredValue::new_local(None::<Timeout>);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());
        // dropping the previous Timeout cancels it
        let timeout = Timeout::new(300, move || on_change.run(new_value));
        pending.set_value(Some(timeout));
    };

    let clear_filter = move |_| {
        pending.set_value(None);
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <input
                type="search"
                class="search-input__field"
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-input__clear" title="Clear" on:click=clear_filter>
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row(&'static str, i32);

    impl Searchable for Row {
        fn matches_filter(&self, filter: &str) -> bool {
            self.0.to_lowercase().contains(&filter.trim().to_lowercase())
        }
    }

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "count" => self.1.cmp(&other.1),
                _ => cmp_text(self.0, other.0),
            }
        }
    }

    #[test]
    fn sorts_both_directions() {
        let mut rows = vec![Row("beta", 2), Row("Alpha", 3), Row("gamma", 1)];
        sort_list(&mut rows, "name", true);
        assert_eq!(rows[0].0, "Alpha");
        sort_list(&mut rows, "count", false);
        assert_eq!(rows.iter().map(|r| r.1).collect::<Vec<_>>(), vec![3, 2, 1]);
    }

    #[test]
    fn blank_filter_keeps_everything() {
        let rows = vec![Row("Cattle", 1), Row("Goat", 2)];
        assert_eq!(filter_list(rows.clone(), "  ").len(), 2);
        assert_eq!(filter_list(rows, "GOA"), vec![Row("Goat", 2)]);
    }

    #[test]
    fn sort_indicator() {
        assert_eq!(get_sort_indicator("name", "name", true), " ▲");
        assert_eq!(get_sort_indicator("name", "name", false), " ▼");
        assert_eq!(get_sort_indicator("name", "email", true), " ⇅");
    }
}
