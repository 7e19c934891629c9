use std::collections::HashMap;

use contracts::dashboards::d401_user_map::dto::{
    DistrictUserDistribution, ProvinceUserDistribution, RoleFilter,
};
use contracts::enums::District;
use contracts::system::users::UserResponse;

use super::regions::Granularity;
use crate::shared::api_client::{get_json, ApiError};
use crate::shared::api_utils::query_string;

const API_BASE: &str = "/api/dashboard/users";

fn role_param(role: RoleFilter) -> (&'static str, Option<String>) {
    ("role", role.query_value().map(str::to_string))
}

fn distribution_path(granularity: Granularity, role: RoleFilter) -> String {
    let kind = match granularity {
        Granularity::District => "district",
        Granularity::Province => "province",
    };
    format!(
        "{}/{}-distribution{}",
        API_BASE,
        kind,
        query_string(&[role_param(role)])
    )
}

fn region_users_path(granularity: Granularity, code: &str, role: RoleFilter) -> String {
    let (endpoint, key) = match granularity {
        Granularity::District => ("by-district", "district"),
        Granularity::Province => ("by-province", "province"),
    };
    format!(
        "{}/{}{}",
        API_BASE,
        endpoint,
        query_string(&[(key, Some(code.to_string())), role_param(role)])
    )
}

pub async fn fetch_district_distribution(
    role: RoleFilter,
) -> Result<Vec<DistrictUserDistribution>, ApiError> {
    get_json(&distribution_path(Granularity::District, role)).await
}

pub async fn fetch_province_distribution(
    role: RoleFilter,
) -> Result<Vec<ProvinceUserDistribution>, ApiError> {
    get_json(&distribution_path(Granularity::Province, role)).await
}

/// User counts keyed by region code, plus per-district splits for provinces
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegionCounts {
    pub counts: HashMap<String, i64>,
    pub breakdowns: HashMap<String, Vec<(District, i64)>>,
}

impl RegionCounts {
    pub fn from_districts(items: Vec<DistrictUserDistribution>) -> Self {
        Self {
            counts: items
                .into_iter()
                .map(|d| (d.district, d.user_count))
                .collect(),
            breakdowns: HashMap::new(),
        }
    }

    pub fn from_provinces(items: Vec<ProvinceUserDistribution>) -> Self {
        let mut out = Self::default();
        for p in items {
            out.breakdowns.insert(p.province.clone(), p.ordered_breakdown());
            out.counts.insert(p.province, p.user_count);
        }
        out
    }

    /// Count for `code`, negatives clamped to zero
    pub fn count(&self, code: &str) -> i64 {
        self.counts.get(code).copied().unwrap_or(0).max(0)
    }

    pub fn breakdown(&self, code: &str) -> &[(District, i64)] {
        self.breakdowns.get(code).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn total(&self) -> i64 {
        self.counts.values().filter(|v| **v > 0).sum()
    }
}

/// Region counts for the chosen granularity
pub async fn fetch_counts(
    granularity: Granularity,
    role: RoleFilter,
) -> Result<RegionCounts, ApiError> {
    let counts = match granularity {
        Granularity::District => {
            RegionCounts::from_districts(fetch_district_distribution(role).await?)
        }
        Granularity::Province => {
            RegionCounts::from_provinces(fetch_province_distribution(role).await?)
        }
    };
    Ok(counts)
}

/// Users registered in one region
pub async fn fetch_region_users(
    granularity: Granularity,
    code: &str,
    role: RoleFilter,
) -> Result<Vec<UserResponse>, ApiError> {
    get_json(&region_users_path(granularity, code, role)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::UserRole;

    #[test]
    fn distribution_paths() {
        assert_eq!(
            distribution_path(Granularity::District, RoleFilter::All),
            "/api/dashboard/users/district-distribution"
        );
        assert_eq!(
            distribution_path(Granularity::Province, RoleFilter::Only(UserRole::Admin)),
            "/api/dashboard/users/province-distribution?role=ADMIN"
        );
    }

    #[test]
    fn drill_down_paths() {
        assert_eq!(
            region_users_path(Granularity::District, "NUWARA_ELIYA", RoleFilter::All),
            "/api/dashboard/users/by-district?district=NUWARA_ELIYA"
        );
        assert_eq!(
            region_users_path(
                Granularity::Province,
                "UVA",
                RoleFilter::Only(UserRole::VeterinaryOfficer)
            ),
            "/api/dashboard/users/by-province?province=UVA&role=VETERINARY_OFFICER"
        );
    }

    #[test]
    fn province_counts_keep_the_district_split() {
        let items: Vec<ProvinceUserDistribution> = serde_json::from_str(
            r#"[{"province":"CENTRAL","displayName":"Central Province","userCount":4,"districtBreakdown":{"Kandy":3,"Nuwara Eliya":1}},
                {"province":"UVA","displayName":"Uva Province","userCount":-1}]"#,
        )
        .unwrap();
        let regions = RegionCounts::from_provinces(items);
        assert_eq!(regions.count("CENTRAL"), 4);
        assert_eq!(regions.count("UVA"), 0);
        assert_eq!(regions.total(), 4);
        let central = regions.breakdown("CENTRAL");
        assert!(central.contains(&(District::Kandy, 3)));
        assert!(central.contains(&(District::NuwaraEliya, 1)));
        assert!(regions.breakdown("SOUTHERN").is_empty());
    }

    #[test]
    fn district_counts_have_no_split() {
        let items: Vec<DistrictUserDistribution> =
            serde_json::from_str(r#"[{"district":"GALLE","userCount":2}]"#).unwrap();
        let regions = RegionCounts::from_districts(items);
        assert_eq!(regions.count("GALLE"), 2);
        assert!(regions.breakdown("GALLE").is_empty());
    }
}
