//! Cascading province → district pickers

use contracts::enums::{District, Province};
use contracts::shared::locations::{static_districts, static_provinces, LocationOption};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::components::ui::{CustomSelect, SelectOption};
use crate::system::users::api;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LocationPickerState {
    pub province: Option<Province>,
    pub district: Option<District>,
    /// Options for the district picker of the selected province
    pub districts: Vec<LocationOption>,
    pub loading_districts: bool,
}

impl LocationPickerState {
    /// Start from a saved selection; the district list comes from the
    /// built-in table until the server answers
    pub fn new(province: Option<Province>, district: Option<District>) -> Self {
        let district = district.filter(|d| Some(d.province()) == province);
        Self {
            province,
            district,
            districts: province.map(static_districts).unwrap_or_default(),
            loading_districts: false,
        }
    }

    /// Change the province. The district is cleared and `true` is returned
    /// when a new district list must be fetched.
    pub fn select_province(&mut self, province: Option<Province>) -> bool {
        if self.province == province {
            return false;
        }
        self.province = province;
        self.district = None;
        self.districts.clear();
        self.loading_districts = province.is_some();
        province.is_some()
    }

    /// Apply a fetched district list; answers for a province that is no
    /// longer selected are dropped
    pub fn districts_loaded(&mut self, province: Province, districts: Vec<LocationOption>) {
        if self.province == Some(province) {
            self.districts = districts;
            self.loading_districts = false;
        }
    }

    /// Pick a district by code; codes outside the selected province clear it
    pub fn select_district(&mut self, code: &str) {
        self.district =
            District::from_code(code).filter(|d| Some(d.province()) == self.province);
    }
}

fn to_select_options(placeholder: &str, list: &[LocationOption]) -> Vec<SelectOption> {
    std::iter::once(SelectOption::new("", placeholder))
        .chain(list.iter().map(|o| SelectOption::new(o.value.clone(), o.label.clone())))
        .collect()
}

#[component]
pub fn LocationPicker(
    initial_province: Option<Province>,
    initial_district: Option<District>,
    on_change: Callback<(Option<Province>, Option<District>)>,
    #[prop(optional, into)] error: Signal<Option<String>>,
    #[prop(optional, into)] disabled: Signal<bool>,
) -> impl IntoView {
    let state = RwSignal::new(LocationPickerState::new(initial_province, initial_district));
    let provinces = RwSignal::new(static_provinces());

    spawn_local(async move {
        let list = api::fetch_provinces().await;
        provinces.try_set(list);
    });

    let load_districts = move |province: Province| {
        spawn_local(async move {
            let list = api::fetch_districts(province).await;
            state.try_update(|s| s.districts_loaded(province, list));
        });
    };

    // refresh the district list of a preselected province from the server
    if let Some(p) = initial_province {
        load_districts(p);
    }

    let notify = move || {
        let s = state.get_untracked();
        on_change.run((s.province, s.district));
    };

    let on_province = Callback::new(move |code: String| {
        let province = Province::from_code(&code);
        let mut reload = false;
        state.update(|s| reload = s.select_province(province));
        if let (true, Some(p)) = (reload, province) {
            load_districts(p);
        }
        notify();
    });

    let on_district = Callback::new(move |code: String| {
        state.update(|s| s.select_district(&code));
        notify();
    });

    let province_value = Signal::derive(move || {
        state
            .with(|s| s.province.map(|p| p.code().to_string()))
            .unwrap_or_default()
    });
    let district_value = Signal::derive(move || {
        state
            .with(|s| s.district.map(|d| d.code().to_string()))
            .unwrap_or_default()
    });
    let province_options =
        Signal::derive(move || to_select_options("Select province", &provinces.get()));
    let district_options = Signal::derive(move || {
        state.with(|s| {
            let placeholder = if s.loading_districts {
                "Loading districts..."
            } else {
                "Select district"
            };
            to_select_options(placeholder, &s.districts)
        })
    });
    let district_disabled = Signal::derive(move || {
        disabled.get() || state.with(|s| s.province.is_none() || s.loading_districts)
    });

    view! {
        <div class="form__row">
            <div class="form__group">
                <label class="form__label">"Province"</label>
                <CustomSelect
                    value=province_value
                    options=province_options
                    on_change=on_province
                    placeholder="Select province"
                    disabled=disabled
                />
            </div>
            <div class="form__group" class:form__group--invalid=move || error.get().is_some()>
                <label class="form__label">"District"</label>
                <CustomSelect
                    value=district_value
                    options=district_options
                    on_change=on_district
                    placeholder=Signal::derive(move || {
                        if state.with(|s| s.province.is_none()) {
                            "Select a province first".to_string()
                        } else {
                            "Select district".to_string()
                        }
                    })
                    disabled=district_disabled
                />
                {move || error.get().map(|e| view! { <div class="form__error">{e}</div> })}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_drops_a_district_from_another_province() {
        let s = LocationPickerState::new(Some(Province::Central), Some(District::Galle));
        assert_eq!(s.district, None);
        assert_eq!(s.districts.len(), 3);

        let s = LocationPickerState::new(Some(Province::Central), Some(District::Kandy));
        assert_eq!(s.district, Some(District::Kandy));
    }

    #[test]
    fn changing_province_clears_district_and_requests_reload() {
        let mut s = LocationPickerState::new(Some(Province::Central), Some(District::Kandy));
        assert!(s.select_province(Some(Province::Southern)));
        assert_eq!(s.district, None);
        assert!(s.districts.is_empty());
        assert!(s.loading_districts);

        // same province again is a no-op
        assert!(!s.select_province(Some(Province::Southern)));

        assert!(!s.select_province(None));
        assert!(!s.loading_districts);
    }

    #[test]
    fn stale_district_lists_are_ignored() {
        let mut s = LocationPickerState::default();
        s.select_province(Some(Province::Western));
        s.select_province(Some(Province::Uva));
        s.districts_loaded(Province::Western, static_districts(Province::Western));
        assert!(s.districts.is_empty());
        assert!(s.loading_districts);

        s.districts_loaded(Province::Uva, static_districts(Province::Uva));
        assert_eq!(s.districts.len(), 2);
        assert!(!s.loading_districts);
    }

    #[test]
    fn district_must_belong_to_selected_province() {
        let mut s = LocationPickerState::new(Some(Province::Uva), None);
        s.select_district("BADULLA");
        assert_eq!(s.district, Some(District::Badulla));
        s.select_district("COLOMBO");
        assert_eq!(s.district, None);
        s.select_district("");
        assert_eq!(s.district, None);
    }

    #[test]
    fn options_start_with_placeholder() {
        let opts = to_select_options("Select province", &static_provinces());
        assert_eq!(opts.len(), 10);
        assert_eq!(opts[0].value, "");
    }
}
