//! Tab titles, the single source for sidebar entries and the tab strip

/// Title for a tab key; empty for unknown keys
pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        // ── Dashboards (d4xx) ─────────────────────────────────────────────
        "d400_summary" => "Overview",
        "d401_user_map" => "User Distribution",

        // ── Configuration (a001-a003 share one page) ──────────────────────
        "configuration" => "Configuration",

        // ── System ────────────────────────────────────────────────────────
        "sys_users" => "User Management",

        _ => "",
    }
}

/// Icon shown next to a tab title
pub fn tab_icon_for_key(key: &str) -> &'static str {
    match key {
        "d400_summary" => "bar-chart",
        "d401_user_map" => "map",
        "configuration" => "settings",
        "sys_users" => "users",
        _ => "file-text",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_registered_key_has_a_title() {
        for key in ["d400_summary", "d401_user_map", "configuration", "sys_users"] {
            assert!(!tab_label_for_key(key).is_empty(), "{key}");
        }
        assert_eq!(tab_label_for_key("reports"), "");
        assert_eq!(tab_icon_for_key("reports"), "file-text");
    }
}
