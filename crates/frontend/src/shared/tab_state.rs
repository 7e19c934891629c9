//! Tab sets addressed by a URL query parameter.
//!
//! A page declares its tabs as an enum implementing [`TabKey`]; the active tab
//! is parsed from the query string with a fallback to the first tab, so there
//! is always exactly one active tab and one visible pane.

use std::collections::BTreeMap;
use web_sys::window;

pub trait TabKey: Copy + PartialEq + 'static {
    /// Every tab, in display order; the first is the default
    const ALL: &'static [Self];

    /// Value used in the query string
    fn slug(&self) -> &'static str;

    fn label(&self) -> &'static str;

    fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.slug() == slug)
    }

    /// Missing or unknown values fall back to the first tab
    fn resolve(param: Option<&str>) -> Self {
        param
            .and_then(|p| Self::from_slug(p.trim()))
            .unwrap_or(Self::ALL[0])
    }
}

/// Current query string parsed into a sorted map
pub fn read_query() -> BTreeMap<String, String> {
    let search = window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    parse_query(&search)
}

pub fn parse_query(search: &str) -> BTreeMap<String, String> {
    serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default()
}

/// Query string with `key` set to `value`, other parameters kept
pub fn with_param(current: &BTreeMap<String, String>, key: &str, value: &str) -> String {
    let mut params = current.clone();
    params.insert(key.to_string(), value.to_string());
    let query = serde_qs::to_string(&params).unwrap_or_default();
    format!("?{}", query)
}

pub fn read_param(key: &str) -> Option<String> {
    read_query().remove(key)
}

/// Set one query parameter via `history.replaceState`, leaving the rest intact
pub fn write_param(key: &str, value: &str) {
    let current = read_query();
    if current.get(key).map(String::as_str) == Some(value) {
        return;
    }
    let new_url = with_param(&current, key, value);
    if let Some(w) = window() {
        if let Ok(history) = w.history() {
            let _ =
                history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&new_url));
        }
    }
}

/// Active tab from the query string
pub fn active_from_url<K: TabKey>(param: &str) -> K {
    K::resolve(read_param(param).as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Pane {
        First,
        Second,
        Third,
    }

    impl TabKey for Pane {
        const ALL: &'static [Self] = &[Pane::First, Pane::Second, Pane::Third];

        fn slug(&self) -> &'static str {
            match self {
                Pane::First => "first",
                Pane::Second => "second",
                Pane::Third => "third",
            }
        }

        fn label(&self) -> &'static str {
            self.slug()
        }
    }

    #[test]
    fn valid_parameter_selects_that_tab() {
        assert_eq!(Pane::resolve(Some("third")), Pane::Third);
        assert_eq!(Pane::resolve(Some(" second ")), Pane::Second);
    }

    #[test]
    fn missing_or_invalid_parameter_falls_back_to_first() {
        assert_eq!(Pane::resolve(None), Pane::First);
        assert_eq!(Pane::resolve(Some("")), Pane::First);
        assert_eq!(Pane::resolve(Some("FIRST-ish")), Pane::First);
    }

    #[test]
    fn exactly_one_tab_is_active() {
        for param in [None, Some("second"), Some("bogus")] {
            let active = Pane::resolve(param);
            let count = Pane::ALL.iter().filter(|t| **t == active).count();
            assert_eq!(count, 1);
        }
    }

    #[test]
    fn with_param_keeps_other_parameters() {
        let current = parse_query("?active=dashboard&tab=diseases");
        let url = with_param(&current, "tab", "farm-types");
        let parsed = parse_query(&url);
        assert_eq!(parsed.get("active").map(String::as_str), Some("dashboard"));
        assert_eq!(parsed.get("tab").map(String::as_str), Some("farm-types"));
    }
}
