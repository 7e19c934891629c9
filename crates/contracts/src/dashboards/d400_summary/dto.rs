use serde::{Deserialize, Serialize};

/// `GET /api/dashboard/summary`.
///
/// The server answers with a loose map; any key it leaves out counts as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SummaryCounts {
    pub admin_count: i64,
    pub vet_count: i64,
    pub total_farms: i64,
    pub total_animals: i64,
    pub total_disease_reports: i64,
    pub active_farm_types: i64,
    pub active_animal_types: i64,
    pub active_diseases: i64,
    pub notifiable_diseases: i64,
}

impl SummaryCounts {
    pub fn total_users(&self) -> i64 {
        self.admin_count + self.vet_count
    }
}

/// `GET /api/dashboard/stats`, the detailed per-entity breakdown
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardStats {
    pub total_users: i64,
    pub active_users: i64,
    pub inactive_users: i64,
    pub admin_users: i64,
    pub veterinary_officer_users: i64,
    pub total_farm_types: i64,
    pub active_farm_types: i64,
    pub total_animal_types: i64,
    pub active_animal_types: i64,
    pub total_diseases: i64,
    pub active_diseases: i64,
    pub notifiable_diseases: i64,
    pub total_farms: i64,
    pub active_farms: i64,
    pub total_animals: i64,
    pub total_disease_reports: i64,
    pub confirmed_disease_reports: i64,
    pub pending_disease_reports: i64,
}

/// One chart series: `{labels, data, chartType}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartData {
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub data: Vec<i64>,
    #[serde(default)]
    pub chart_type: Option<String>,
}

impl ChartData {
    /// Label/value pairs; extra labels or values without a partner are dropped
    pub fn points(&self) -> Vec<(String, i64)> {
        self.labels
            .iter()
            .cloned()
            .zip(self.data.iter().copied())
            .collect()
    }

    pub fn total(&self) -> i64 {
        self.data.iter().copied().filter(|v| *v > 0).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_missing_keys_default_to_zero() {
        let summary: SummaryCounts =
            serde_json::from_str(r#"{"adminCount":2,"vetCount":14,"unknownKey":99}"#).unwrap();
        assert_eq!(summary.total_users(), 16);
        assert_eq!(summary.total_farms, 0);
        assert_eq!(summary.notifiable_diseases, 0);
    }

    #[test]
    fn chart_points_zip_labels_with_data() {
        let chart: ChartData = serde_json::from_str(
            r#"{"labels":["Dairy","Poultry","Swine"],"data":[4,0],"chartType":"pie"}"#,
        )
        .unwrap();
        assert_eq!(
            chart.points(),
            vec![("Dairy".to_string(), 4), ("Poultry".to_string(), 0)]
        );
        assert_eq!(chart.total(), 4);
        assert!(!chart.is_empty());
        assert!(ChartData::default().is_empty());
    }

    #[test]
    fn stats_tolerate_partial_payloads() {
        let stats: DashboardStats =
            serde_json::from_str(r#"{"totalDiseases":12,"notifiableDiseases":5}"#).unwrap();
        assert_eq!(stats.total_diseases, 12);
        assert_eq!(stats.active_diseases, 0);
    }
}
