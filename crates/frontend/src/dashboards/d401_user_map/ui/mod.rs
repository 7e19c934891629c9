mod drill_down;
mod map;

use contracts::dashboards::d401_user_map::dto::RoleFilter;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use self::drill_down::RegionUsersModal;
use self::map::{ChoroplethMap, SelectedRegion};
use super::api::{self, RegionCounts};
use super::regions::Granularity;
use crate::shared::components::ui::{CustomSelect, SelectOption};
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageCategory, PageFrame};

fn role_options() -> Vec<SelectOption> {
    RoleFilter::ALL
        .iter()
        .map(|r| SelectOption::new(r.code(), r.label()))
        .collect()
}

/// Users per district or province, shaded by count
#[component]
pub fn UserMapDashboard() -> impl IntoView {
    let granularity = RwSignal::new(Granularity::default());
    let role = RwSignal::new(RoleFilter::All);
    let counts = RwSignal::new(RegionCounts::default());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);
    let selected = RwSignal::new(None::<SelectedRegion>);

    let load = move || {
        let g = granularity.get_untracked();
        let r = role.get_untracked();
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_counts(g, r).await {
                Ok(map) => {
                    counts.try_set(map);
                }
                Err(e) => {
                    log::error!("Failed to load user distribution: {}", e);
                    counts.try_set(RegionCounts::default());
                    set_error.try_set(Some("Failed to load user distribution".to_string()));
                }
            }
            set_loading.try_set(false);
        });
    };

    Effect::new(move |_| {
        granularity.track();
        role.track();
        load();
    });

    let total = move || counts.with(RegionCounts::total);

    view! {
        <PageFrame page_id="d401_user_map--dashboard" category=PageCategory::Dashboard>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"User Distribution"</h1>
                    <span class="page__subtitle">
                        {move || {
                            let r = role.get();
                            let n = total();
                            format!("{} {} registered", n, r.noun(n))
                        }}
                    </span>
                </div>
                <div class="page__header-right">
                    <div class="segmented" role="group">
                        {Granularity::ALL.iter().copied().map(|g| view! {
                            <button
                                class="segmented__button"
                                class:segmented__button--active=move || granularity.get() == g
                                on:click=move |_| granularity.set(g)
                            >
                                {g.label()}
                            </button>
                        }).collect_view()}
                    </div>
                    <CustomSelect
                        value=Signal::derive(move || role.get().code().to_string())
                        options=Signal::derive(role_options)
                        on_change=Callback::new(move |code: String| role.set(RoleFilter::from_code(&code)))
                        title="Filter by role"
                    />
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load()
                        disabled=Signal::derive(move || loading.get())
                        attr:title="Refresh"
                    >
                        {icon("refresh")}
                    </Button>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="page__content">
                <div class="card map-card">
                    <div class="card__body">
                        <ChoroplethMap
                            granularity=granularity
                            counts=counts
                            role=role
                            on_select=Callback::new(move |region| selected.set(Some(region)))
                        />
                    </div>
                </div>
            </div>

            {move || selected.get().map(|region| view! {
                <RegionUsersModal region=region on_close=Callback::new(move |_| selected.set(None)) />
            })}
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_select_offers_every_filter() {
        let codes: Vec<String> = role_options().into_iter().map(|o| o.value).collect();
        assert_eq!(codes, vec!["ALL", "ADMIN", "VETERINARY_OFFICER"]);
    }
}
