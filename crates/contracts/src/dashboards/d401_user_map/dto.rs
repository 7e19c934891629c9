use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::enums::{District, Province, UserRole};

/// `GET /api/dashboard/users/district-distribution` item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistrictUserDistribution {
    pub district: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub user_count: i64,
}

impl DistrictUserDistribution {
    pub fn district_key(&self) -> Option<District> {
        District::from_code(&self.district)
    }
}

/// `GET /api/dashboard/users/province-distribution` item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProvinceUserDistribution {
    pub province: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub user_count: i64,
    /// District display name → user count
    #[serde(default)]
    pub district_breakdown: HashMap<String, i64>,
}

impl ProvinceUserDistribution {
    pub fn province_key(&self) -> Option<Province> {
        Province::from_code(&self.province)
    }

    /// Breakdown in the province's own district order, zero-filled.
    ///
    /// Keys are display names; district codes are accepted as well.
    pub fn ordered_breakdown(&self) -> Vec<(District, i64)> {
        match self.province_key() {
            Some(p) => p
                .districts()
                .into_iter()
                .map(|d| {
                    let count = self
                        .district_breakdown
                        .get(d.display_name())
                        .or_else(|| self.district_breakdown.get(d.code()))
                        .copied()
                        .unwrap_or(0);
                    (d, count.max(0))
                })
                .collect(),
            None => Vec::new(),
        }
    }
}

/// Role filter applied to the distribution and drill-down requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RoleFilter {
    #[default]
    All,
    Only(UserRole),
}

impl RoleFilter {
    pub const ALL: [RoleFilter; 3] = [
        RoleFilter::All,
        RoleFilter::Only(UserRole::Admin),
        RoleFilter::Only(UserRole::VeterinaryOfficer),
    ];

    /// Value of the `role` query parameter; `None` means "omit it"
    pub fn query_value(&self) -> Option<&'static str> {
        match self {
            RoleFilter::All => None,
            RoleFilter::Only(role) => Some(role.code()),
        }
    }

    /// Code used in selects and tooltips (`ALL` for the unfiltered view)
    pub fn code(&self) -> &'static str {
        self.query_value().unwrap_or("ALL")
    }

    pub fn from_code(code: &str) -> Self {
        UserRole::from_code(code)
            .map(RoleFilter::Only)
            .unwrap_or(RoleFilter::All)
    }

    pub fn label(&self) -> &'static str {
        match self {
            RoleFilter::All => "All users",
            RoleFilter::Only(UserRole::Admin) => "Administrators",
            RoleFilter::Only(UserRole::VeterinaryOfficer) => "Veterinary officers",
        }
    }

    /// Noun used in "Kandy: 4 users" style captions
    pub fn noun(&self, count: i64) -> &'static str {
        let plural = count != 1;
        match (self, plural) {
            (RoleFilter::All, false) => "user",
            (RoleFilter::All, true) => "users",
            (RoleFilter::Only(UserRole::Admin), false) => "admin",
            (RoleFilter::Only(UserRole::Admin), true) => "admins",
            (RoleFilter::Only(UserRole::VeterinaryOfficer), false) => "veterinary officer",
            (RoleFilter::Only(UserRole::VeterinaryOfficer), true) => "veterinary officers",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_filter_query_values() {
        assert_eq!(RoleFilter::All.query_value(), None);
        assert_eq!(
            RoleFilter::from_code("veterinary_officer"),
            RoleFilter::Only(UserRole::VeterinaryOfficer)
        );
        assert_eq!(RoleFilter::from_code("ALL"), RoleFilter::All);
        assert_eq!(RoleFilter::from_code("bogus"), RoleFilter::All);
    }

    #[test]
    fn ordered_breakdown_reads_display_name_keys() {
        let dto: ProvinceUserDistribution = serde_json::from_str(
            r#"{"province":"CENTRAL","displayName":"Central Province","userCount":4,"districtBreakdown":{"Kandy":3,"Nuwara Eliya":1}}"#,
        )
        .unwrap();
        let expected: Vec<(District, i64)> = Province::Central
            .districts()
            .into_iter()
            .map(|d| match d {
                District::Kandy => (d, 3),
                District::NuwaraEliya => (d, 1),
                _ => (d, 0),
            })
            .collect();
        assert_eq!(expected.len(), 3);
        assert_eq!(dto.ordered_breakdown(), expected);
    }

    #[test]
    fn ordered_breakdown_accepts_code_keys() {
        let dto: ProvinceUserDistribution = serde_json::from_str(
            r#"{"province":"SOUTHERN","userCount":3,"districtBreakdown":{"GALLE":3,"Matara":-2}}"#,
        )
        .unwrap();
        let galle = dto
            .ordered_breakdown()
            .into_iter()
            .find(|(d, _)| *d == District::Galle);
        assert_eq!(galle, Some((District::Galle, 3)));
        assert!(dto.ordered_breakdown().iter().all(|(_, n)| *n >= 0));
    }

    #[test]
    fn unknown_district_code_is_tolerated() {
        let dto: DistrictUserDistribution =
            serde_json::from_str(r#"{"district":"ATLANTIS","userCount":1}"#).unwrap();
        assert_eq!(dto.district_key(), None);
    }

    #[test]
    fn nouns_follow_count() {
        assert_eq!(RoleFilter::All.noun(1), "user");
        assert_eq!(RoleFilter::Only(UserRole::Admin).noun(0), "admins");
    }
}
