use std::collections::HashMap;

use contracts::dashboards::d400_summary::dto::{ChartData, DashboardStats, SummaryCounts};
use gloo_timers::callback::Interval;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::records::{RecordsTable, SectionRecords};
use super::section::DashboardSection;
use crate::dashboards::d400_summary::api::{self, ChartEndpoint};
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::components::charts::ChartCard;
use crate::shared::components::stat_card::StatCard;
use crate::shared::config::config;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageCategory, PageFrame};
use crate::shared::tab_state::{self, TabKey};
use crate::system::auth::context::use_auth;

const SECTION_PARAM: &str = "section";
const USER_MAP_TAB: &str = "d401_user_map";

/// Auto-refresh period; large settings saturate instead of wrapping
fn refresh_period_ms(secs: u32) -> u32 {
    secs.saturating_mul(1000)
}

/// Overview dashboard: counters and charts, filtered by `?section=`
#[component]
pub fn SummaryDashboard() -> impl IntoView {
    let (auth, _) = use_auth();
    let is_admin = Memo::new(move |_| auth.with(|a| a.is_admin()));
    let tabs = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let section = RwSignal::new(tab_state::active_from_url::<DashboardSection>(SECTION_PARAM));
    Effect::new(move |_| tab_state::write_param(SECTION_PARAM, section.get().slug()));

    let summary = RwSignal::new(None::<SummaryCounts>);
    let stats = RwSignal::new(None::<DashboardStats>);
    let charts = RwSignal::new(HashMap::<ChartEndpoint, ChartData>::new());
    let records = RwSignal::new(SectionRecords::Empty);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);
    let (updated_at, set_updated_at) = signal(None::<String>);

    let months = config().dashboard.trend_months;

    let load = move || {
        let current = section.get_untracked();
        let admin = is_admin.get_untracked();
        set_loading.set(true);
        set_error.set(None);
        if records.with_untracked(|r| r.section() != Some(current)) {
            records.set(SectionRecords::Empty);
        }

        spawn_local(async move {
            let mut failed = false;
            match SectionRecords::load(current).await {
                Ok(r) => {
                    records.try_set(r);
                }
                Err(e) => {
                    log::error!("Failed to load {} records: {}", current.slug(), e);
                    records.try_set(SectionRecords::Empty);
                    failed = true;
                }
            }
            match api::fetch_summary().await {
                Ok(s) => {
                    summary.try_set(Some(s));
                }
                Err(e) => {
                    log::error!("Failed to load dashboard summary: {}", e);
                    failed = true;
                }
            }
            match api::fetch_stats().await {
                Ok(s) => {
                    stats.try_set(Some(s));
                }
                Err(e) => log::warn!("Failed to load dashboard stats: {}", e),
            }
            for endpoint in current.charts(admin) {
                let local = records
                    .try_with_untracked(|r| r.local_chart(endpoint))
                    .flatten();
                let data = match local {
                    Some(data) => data,
                    None => match api::fetch_chart(endpoint, months).await {
                        Ok(data) => data,
                        Err(e) => {
                            log::error!("Failed to load chart {}: {}", endpoint.path(), e);
                            failed = true;
                            ChartData::default()
                        }
                    },
                };
                charts.try_update(|map| {
                    map.insert(endpoint, data);
                });
            }
            if failed {
                set_error.try_set(Some("Failed to load dashboard data".to_string()));
            }
            set_updated_at.try_set(Some(chrono::Local::now().format("%H:%M:%S").to_string()));
            set_loading.try_set(false);
        });
    };

    Effect::new(move |_| {
        section.track();
        is_admin.track();
        load();
    });

    let refresh_secs = config().dashboard.refresh_interval_secs;
    let interval = StoredValue::new_local(None::<Interval>);
    if refresh_secs > 0 {
        interval.set_value(Some(Interval::new(refresh_period_ms(refresh_secs), move || {
            if !loading.get_untracked() {
                load();
            }
        })));
    }
    on_cleanup(move || interval.set_value(None));

    let stat_cards = move || {
        section
            .get()
            .stats()
            .into_iter()
            .map(|card| {
                let value = Signal::derive(move || {
                    summary.get().map(|mut s| {
                        let mut st = stats.get().unwrap_or_default();
                        records.with(|r| r.apply_counts(&mut s, &mut st));
                        (card.pick)(&s, &st)
                    })
                });
                view! {
                    <StatCard label=card.label icon_name=card.icon value=value tone=card.tone />
                }
            })
            .collect_view()
    };

    let chart_cards = move || {
        section
            .get()
            .charts(is_admin.get())
            .into_iter()
            .map(|endpoint| {
                let data = Signal::derive(move || charts.with(|map| map.get(&endpoint).cloned()));
                view! {
                    <ChartCard title=endpoint.title() data=data default_kind=endpoint.default_kind() />
                }
            })
            .collect_view()
    };

    view! {
        <PageFrame page_id="d400_summary--dashboard" category=PageCategory::Dashboard>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Dashboard"</h1>
                    {move || updated_at.get().map(|t| view! {
                        <span class="page__subtitle">"Last updated: " {t}</span>
                    })}
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        {move || if loading.get() { " Refreshing..." } else { " Refresh" }}
                    </Button>
                </div>
            </div>

            <div class="page-tabs" role="tablist">
                {DashboardSection::ALL.iter().copied().map(|s| view! {
                    <button
                        class="page-tabs__button"
                        class:page-tabs__button--active=move || section.get() == s
                        role="tab"
                        aria-selected=move || (section.get() == s).to_string()
                        on:click=move |_| section.set(s)
                    >
                        {s.label()}
                    </button>
                }).collect_view()}
            </div>

            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="page__content">
                <div class="stat-grid">{stat_cards}</div>
                <div class="chart-grid">{chart_cards}</div>
                <RecordsTable records=records />

                <Show when=move || section.get() == DashboardSection::Users>
                    <div class="card card--link">
                        <div class="card__body">
                            <span>"See where users are registered across the country."</span>
                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click=move |_| tabs.open_tab(USER_MAP_TAB, tab_label_for_key(USER_MAP_TAB))
                            >
                                {icon("map")}
                                " Open User Map"
                            </Button>
                        </div>
                    </div>
                </Show>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refresh_period_saturates() {
        assert_eq!(refresh_period_ms(30), 30_000);
        assert_eq!(refresh_period_ms(0), 0);
        assert_eq!(refresh_period_ms(5_000_000), u32::MAX);
    }
}
