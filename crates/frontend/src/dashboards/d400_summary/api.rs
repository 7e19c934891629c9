use contracts::dashboards::d400_summary::dto::{ChartData, DashboardStats, SummaryCounts};

use crate::shared::api_client::{get_json, ApiError};
use crate::shared::api_utils::query_string;
use crate::shared::components::charts::ChartKind;

const API_BASE: &str = "/api/dashboard";

/// Chart series served under `/api/dashboard/charts/`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChartEndpoint {
    FarmTypes,
    DiseaseSeverity,
    UserRoles,
    UserStatus,
    ConfigStatus,
    FarmTrend,
    DiseaseReportTrend,
    UserTrend,
}

impl ChartEndpoint {
    pub const ALL: [ChartEndpoint; 8] = [
        ChartEndpoint::FarmTypes,
        ChartEndpoint::DiseaseSeverity,
        ChartEndpoint::UserRoles,
        ChartEndpoint::UserStatus,
        ChartEndpoint::ConfigStatus,
        ChartEndpoint::FarmTrend,
        ChartEndpoint::DiseaseReportTrend,
        ChartEndpoint::UserTrend,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            ChartEndpoint::FarmTypes => "farm-types",
            ChartEndpoint::DiseaseSeverity => "disease-severity",
            ChartEndpoint::UserRoles => "user-roles",
            ChartEndpoint::UserStatus => "user-status",
            ChartEndpoint::ConfigStatus => "config-status",
            ChartEndpoint::FarmTrend => "farm-trend",
            ChartEndpoint::DiseaseReportTrend => "disease-report-trend",
            ChartEndpoint::UserTrend => "user-trend",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ChartEndpoint::FarmTypes => "Farm Type Distribution",
            ChartEndpoint::DiseaseSeverity => "Disease Severity",
            ChartEndpoint::UserRoles => "User Roles",
            ChartEndpoint::UserStatus => "User Status",
            ChartEndpoint::ConfigStatus => "Configuration Status",
            ChartEndpoint::FarmTrend => "Farm Registrations",
            ChartEndpoint::DiseaseReportTrend => "Disease Reports",
            ChartEndpoint::UserTrend => "User Registrations",
        }
    }

    /// Chart drawn when the reply carries no `chartType`
    pub fn default_kind(&self) -> ChartKind {
        match self {
            ChartEndpoint::FarmTypes => ChartKind::Pie,
            ChartEndpoint::DiseaseSeverity | ChartEndpoint::UserRoles => ChartKind::Doughnut,
            ChartEndpoint::UserStatus | ChartEndpoint::ConfigStatus => ChartKind::Bar,
            ChartEndpoint::FarmTrend
            | ChartEndpoint::DiseaseReportTrend
            | ChartEndpoint::UserTrend => ChartKind::Line,
        }
    }

    /// Trend series take a `months` window
    pub fn is_trend(&self) -> bool {
        self.default_kind() == ChartKind::Line
    }

    pub fn admin_only(&self) -> bool {
        matches!(self, ChartEndpoint::UserStatus)
    }

    pub fn url(&self, months: u32) -> String {
        let query = if self.is_trend() {
            query_string(&[("months", Some(months.to_string()))])
        } else {
            String::new()
        };
        format!("{}/charts/{}{}", API_BASE, self.path(), query)
    }
}

pub async fn fetch_summary() -> Result<SummaryCounts, ApiError> {
    get_json(&format!("{}/summary", API_BASE)).await
}

pub async fn fetch_stats() -> Result<DashboardStats, ApiError> {
    get_json(&format!("{}/stats", API_BASE)).await
}

pub async fn fetch_chart(endpoint: ChartEndpoint, months: u32) -> Result<ChartData, ApiError> {
    get_json(&endpoint.url(months)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trend_urls_carry_the_month_window() {
        assert_eq!(
            ChartEndpoint::FarmTrend.url(6),
            "/api/dashboard/charts/farm-trend?months=6"
        );
        assert_eq!(
            ChartEndpoint::DiseaseSeverity.url(6),
            "/api/dashboard/charts/disease-severity"
        );
    }

    #[test]
    fn only_user_status_is_admin_only() {
        let admin_only: Vec<_> = ChartEndpoint::ALL
            .iter()
            .filter(|e| e.admin_only())
            .collect();
        assert_eq!(admin_only, vec![&ChartEndpoint::UserStatus]);
    }
}
