use contracts::dashboards::d401_user_map::dto::RoleFilter;
use contracts::enums::District;
use leptos::ev;
use leptos::prelude::*;

use crate::dashboards::d401_user_map::api::RegionCounts;
use crate::dashboards::d401_user_map::regions::{
    shapes, Granularity, Shape, VIEW_HEIGHT, VIEW_WIDTH,
};
use crate::dashboards::d401_user_map::scale::{self, ColorScale};

/// Region clicked on the map
#[derive(Clone, Debug, PartialEq)]
pub struct SelectedRegion {
    pub granularity: Granularity,
    pub code: &'static str,
    pub name: &'static str,
    pub role: RoleFilter,
}

/// "Kandy: 4 users"
pub fn tooltip_text(name: &str, count: i64, role: RoleFilter) -> String {
    let count = count.max(0);
    format!("{}: {} {}", name, count, role.noun(count))
}

/// Tooltip with one "• District: n" line per district when a split is known
pub fn region_tooltip(
    name: &str,
    count: i64,
    role: RoleFilter,
    breakdown: &[(District, i64)],
) -> String {
    let mut text = tooltip_text(name, count, role);
    for (district, n) in breakdown {
        text.push_str(&format!("\n• {}: {}", district.display_name(), n));
    }
    text
}

/// Color range over the regions drawn at `granularity` only
pub fn scale_for(granularity: Granularity, counts: &RegionCounts) -> ColorScale {
    ColorScale::from_counts(shapes(granularity).iter().map(|r| counts.count(r.code)))
}

#[component]
pub fn ChoroplethMap(
    #[prop(into)] granularity: Signal<Granularity>,
    #[prop(into)] counts: Signal<RegionCounts>,
    #[prop(into)] role: Signal<RoleFilter>,
    on_select: Callback<SelectedRegion>,
) -> impl IntoView {
    let hovered = RwSignal::new(None::<&'static str>);
    let color_scale = Memo::new(move |_| {
        let g = granularity.get();
        counts.with(|c| scale_for(g, c))
    });

    let regions = move || {
        let g = granularity.get();
        shapes(g)
            .into_iter()
            .map(|region| {
                let code = region.code;
                let name = region.name;
                let count = move || counts.with(|c| c.count(code));
                let fill = move || {
                    if hovered.get() == Some(code) {
                        scale::HOVER.to_string()
                    } else {
                        color_scale.get().color_for(count())
                    }
                };
                let tip = move || {
                    counts.with(|c| region_tooltip(name, c.count(code), role.get(), c.breakdown(code)))
                };
                let select = move |_: ev::MouseEvent| {
                    if count() > 0 {
                        on_select.run(SelectedRegion {
                            granularity: g,
                            code,
                            name,
                            role: role.get_untracked(),
                        });
                    }
                };
                let (lx, ly) = region.label_at;

                let body = match region.shape {
                    Shape::Path(d) => view! {
                        <path d=d fill=fill class="map__region" stroke="#ffffff" stroke-width="2">
                            <title>{tip}</title>
                        </path>
                    }
                    .into_any(),
                    Shape::Rect { x, y, w, h } => view! {
                        <rect x=x y=y width=w height=h rx="8" fill=fill class="map__region" stroke="#ffffff" stroke-width="2">
                            <title>{tip}</title>
                        </rect>
                    }
                    .into_any(),
                };

                view! {
                    <g
                        class="map__group"
                        class:map__group--clickable={move || count() > 0}
                        on:mouseenter=move |_| hovered.set(Some(code))
                        on:mouseleave=move |_| hovered.set(None)
                        on:click=select
                    >
                        {body}
                        <text x=lx y=ly class="map__label" text-anchor="middle" dominant-baseline="middle">
                            {name}
                        </text>
                        <text x=lx y=ly + 16.0 class="map__count" text-anchor="middle" dominant-baseline="middle">
                            {move || count().to_string()}
                        </text>
                    </g>
                }
            })
            .collect_view()
    };

    view! {
        <div class="map">
            <svg class="map__svg" viewBox=format!("0 0 {} {}", VIEW_WIDTH, VIEW_HEIGHT)>
                {regions}
            </svg>
            <MapLegend range=Signal::derive(move || color_scale.get()) />
        </div>
    }
}

#[component]
fn MapLegend(range: Signal<ColorScale>) -> impl IntoView {
    let swatch = |color: &'static str, label: &'static str| {
        view! {
            <li class="map-legend__item">
                <span class="map-legend__swatch" style:background-color=color></span>
                <span>{label}</span>
            </li>
        }
    };

    view! {
        <div class="map-legend">
            <ul class="map-legend__swatches">
                {swatch(scale::NO_DATA, "No users")}
                {swatch(scale::LOW, "Low")}
                {swatch(scale::MID, "Medium")}
                {swatch(scale::HIGH, "High")}
            </ul>
            <div class="map-legend__range">
                {move || {
                    let s = range.get();
                    if s.is_empty() {
                        "No users registered".to_string()
                    } else {
                        format!("Min: {}  Max: {}", s.min, s.max)
                    }
                }}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::UserRole;

    #[test]
    fn tooltip_uses_role_noun() {
        assert_eq!(tooltip_text("Kandy", 4, RoleFilter::All), "Kandy: 4 users");
        assert_eq!(tooltip_text("Galle", 1, RoleFilter::All), "Galle: 1 user");
        assert_eq!(
            tooltip_text("Uva Province", 2, RoleFilter::Only(UserRole::Admin)),
            "Uva Province: 2 admins"
        );
        assert_eq!(tooltip_text("Mannar", -1, RoleFilter::All), "Mannar: 0 users");
    }

    #[test]
    fn province_tooltip_lists_districts() {
        let breakdown = [
            (District::Matale, 0),
            (District::Kandy, 3),
            (District::NuwaraEliya, 1),
        ];
        assert_eq!(
            region_tooltip("Central Province", 4, RoleFilter::All, &breakdown),
            "Central Province: 4 users\n• Matale: 0\n• Kandy: 3\n• Nuwara Eliya: 1"
        );
        assert_eq!(region_tooltip("Galle", 2, RoleFilter::All, &[]), "Galle: 2 users");
    }

    #[test]
    fn scale_ignores_codes_that_are_not_drawn() {
        let mut counts = RegionCounts::default();
        counts.counts.insert("KANDY".into(), 4);
        counts.counts.insert("GALLE".into(), 10);
        counts.counts.insert("CENTRAL".into(), 500);
        counts.counts.insert("ATLANTIS".into(), 900);

        let districts = scale_for(Granularity::District, &counts);
        assert_eq!((districts.min, districts.max), (4, 10));

        let provinces = scale_for(Granularity::Province, &counts);
        assert_eq!((provinces.min, provinces.max), (500, 500));
    }
}
