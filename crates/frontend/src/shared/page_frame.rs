//! Root wrapper for every page rendered inside a tab.
//!
//! The root element carries `id="{page}--{category}"` and
//! `data-page-category`, so a page found in the DOM inspector can be traced
//! back to its module.

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageCategory {
    /// Table of records with search and actions
    List,
    /// Counters, charts and maps
    Dashboard,
    /// Administration pages (users)
    System,
}

impl PageCategory {
    pub fn code(&self) -> &'static str {
        match self {
            PageCategory::List => "list",
            PageCategory::Dashboard => "dashboard",
            PageCategory::System => "system",
        }
    }

    fn base_class(&self) -> &'static str {
        match self {
            PageCategory::Dashboard => "page page--dashboard",
            PageCategory::List | PageCategory::System => "page",
        }
    }
}

/// `true` for ids of the form `{page}--{category}`
pub fn is_valid_page_id(id: &str) -> bool {
    matches!(id.split_once("--"), Some((page, cat)) if !page.is_empty() && !cat.is_empty())
}

#[component]
pub fn PageFrame(
    /// `{page}--{category}`, e.g. `"configuration--list"`
    page_id: &'static str,
    category: PageCategory,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    debug_assert!(is_valid_page_id(page_id), "bad page id {page_id}");

    let full_class = if class.is_empty() {
        category.base_class().to_string()
    } else {
        format!("{} {}", category.base_class(), class)
    };

    view! {
        <div id=page_id class=full_class data-page-category=category.code()>
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_id_format() {
        assert!(is_valid_page_id("users--system"));
        assert!(!is_valid_page_id("users"));
        assert!(!is_valid_page_id("--list"));
        assert!(!is_valid_page_id("users--"));
    }
}
