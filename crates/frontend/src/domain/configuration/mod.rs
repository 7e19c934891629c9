//! Configuration page: farm types, animal types and diseases as tabs

pub mod api;
mod delete_dialog;
mod form_model;
mod table;
mod view_model;

pub use delete_dialog::DeleteDialog;
pub use form_model::ConfigFormViewModel;
pub use table::{audit_cells, ConfigToolbar, EmptyRow, RowActions};
pub use view_model::{ConfigCollection, ConfigListViewModel, EditTarget};

use leptos::prelude::*;

use crate::domain::a001_farm_type::ui::list::FarmTypeList;
use crate::domain::a002_animal_type::ui::list::AnimalTypeList;
use crate::domain::a003_disease::ui::list::DiseaseList;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageCategory, PageFrame};
use crate::shared::tab_state::{self, TabKey};

const TAB_PARAM: &str = "tab";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigTab {
    FarmTypes,
    AnimalTypes,
    Diseases,
}

impl TabKey for ConfigTab {
    const ALL: &'static [Self] = &[ConfigTab::FarmTypes, ConfigTab::AnimalTypes, ConfigTab::Diseases];

    fn slug(&self) -> &'static str {
        match self {
            ConfigTab::FarmTypes => "farm-types",
            ConfigTab::AnimalTypes => "animal-types",
            ConfigTab::Diseases => "diseases",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ConfigTab::FarmTypes => "Farm Types",
            ConfigTab::AnimalTypes => "Animal Types",
            ConfigTab::Diseases => "Diseases",
        }
    }
}

impl ConfigTab {
    fn icon_name(&self) -> &'static str {
        match self {
            ConfigTab::FarmTypes => "farm",
            ConfigTab::AnimalTypes => "paw",
            ConfigTab::Diseases => "virus",
        }
    }
}

#[component]
pub fn ConfigurationPage() -> impl IntoView {
    let active = RwSignal::new(tab_state::active_from_url::<ConfigTab>(TAB_PARAM));

    // the URL always names the visible tab, including after a fallback
    Effect::new(move |_| tab_state::write_param(TAB_PARAM, active.get().slug()));

    view! {
        <PageFrame page_id="configuration--list" category=PageCategory::List>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"System Configuration"</h1>
                </div>
            </div>

            <div class="page-tabs" role="tablist">
                {ConfigTab::ALL.iter().copied().map(|tab| view! {
                    <button
                        class="page-tabs__button"
                        class:page-tabs__button--active=move || active.get() == tab
                        role="tab"
                        aria-selected=move || (active.get() == tab).to_string()
                        on:click=move |_| active.set(tab)
                    >
                        {icon(tab.icon_name())}
                        <span>{tab.label()}</span>
                    </button>
                }).collect_view()}
            </div>

            <div class="page__content">
                {move || match active.get() {
                    ConfigTab::FarmTypes => view! { <FarmTypeList /> }.into_any(),
                    ConfigTab::AnimalTypes => view! { <AnimalTypeList /> }.into_any(),
                    ConfigTab::Diseases => view! { <DiseaseList /> }.into_any(),
                }}
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_parameter_fallback() {
        assert_eq!(ConfigTab::resolve(Some("diseases")), ConfigTab::Diseases);
        assert_eq!(ConfigTab::resolve(Some("animal-types")), ConfigTab::AnimalTypes);
        assert_eq!(ConfigTab::resolve(Some("reports")), ConfigTab::FarmTypes);
        assert_eq!(ConfigTab::resolve(None), ConfigTab::FarmTypes);
    }
}
