use crate::shared::icons::icon;
use leptos::prelude::*;

/// Visual tone of a stat card
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum StatTone {
    #[default]
    Neutral,
    Primary,
    Success,
    Warning,
    Error,
}

impl StatTone {
    fn class(&self) -> &'static str {
        match self {
            StatTone::Neutral => "stat-card",
            StatTone::Primary => "stat-card stat-card--primary",
            StatTone::Success => "stat-card stat-card--success",
            StatTone::Warning => "stat-card stat-card--warning",
            StatTone::Error => "stat-card stat-card--error",
        }
    }
}

/// `12345` -> `12,345`
pub fn format_thousands(n: i64) -> String {
    let s = n.abs().to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    if n < 0 {
        result.push('-');
    }
    result.chars().rev().collect()
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: String,
    /// Icon name from the icon() helper
    #[prop(into)]
    icon_name: String,
    /// Counter value (None = still loading)
    #[prop(into)]
    value: Signal<Option<i64>>,
    #[prop(optional)] tone: StatTone,
    /// Optional subtitle below the value
    #[prop(into, optional)]
    subtitle: Signal<Option<String>>,
) -> impl IntoView {
    let formatted = move || match value.get() {
        Some(v) => format_thousands(v),
        None => "…".to_string(),
    };

    let subtitle_view = move || {
        subtitle.get().map(|s| {
            view! { <div class="stat-card__subtitle">{s}</div> }
        })
    };

    view! {
        <div class=tone.class()>
            <div class="stat-card__icon">
                {icon(&icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{formatted}</div>
                {subtitle_view}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_separator() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(12345), "12,345");
        assert_eq!(format_thousands(-1234567), "-1,234,567");
    }
}
