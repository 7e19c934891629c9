use serde::{Deserialize, Serialize};

use crate::enums::{District, Province};

/// `{value, label}` pair served by `/api/locations/*`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationOption {
    pub value: String,
    pub label: String,
    /// Present only on `/districts/all`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub province: Option<String>,
}

impl LocationOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            province: None,
        }
    }
}

impl From<Province> for LocationOption {
    fn from(p: Province) -> Self {
        LocationOption::new(p.code(), p.display_name())
    }
}

impl From<District> for LocationOption {
    fn from(d: District) -> Self {
        LocationOption {
            value: d.code().to_string(),
            label: d.display_name().to_string(),
            province: Some(d.province().code().to_string()),
        }
    }
}

/// Built-in province list, used when the locations endpoint is unreachable
pub fn static_provinces() -> Vec<LocationOption> {
    Province::ALL.iter().copied().map(Into::into).collect()
}

/// Built-in district list for one province
pub fn static_districts(province: Province) -> Vec<LocationOption> {
    province.districts().into_iter().map(Into::into).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_tables_match_enums() {
        let provinces = static_provinces();
        assert_eq!(provinces.len(), 9);
        assert_eq!(provinces[0], LocationOption::new("NORTHERN", "Northern Province"));

        let uva = static_districts(Province::Uva);
        let values: Vec<&str> = uva.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, vec!["BADULLA", "MONARAGALA"]);
        assert_eq!(uva[0].province.as_deref(), Some("UVA"));
    }

    #[test]
    fn province_field_is_optional_on_the_wire() {
        let opt: LocationOption =
            serde_json::from_str(r#"{"value":"KANDY","label":"Kandy"}"#).unwrap();
        assert_eq!(opt.province, None);
    }
}
