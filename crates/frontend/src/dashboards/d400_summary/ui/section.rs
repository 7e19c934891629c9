//! Filter sections of the overview dashboard (`?section=`)

use contracts::dashboards::d400_summary::dto::{DashboardStats, SummaryCounts};

use crate::dashboards::d400_summary::api::ChartEndpoint;
use crate::shared::components::stat_card::StatTone;
use crate::shared::tab_state::TabKey;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DashboardSection {
    All,
    FarmTypes,
    AnimalTypes,
    Diseases,
    Users,
}

impl TabKey for DashboardSection {
    const ALL: &'static [Self] = &[
        DashboardSection::All,
        DashboardSection::FarmTypes,
        DashboardSection::AnimalTypes,
        DashboardSection::Diseases,
        DashboardSection::Users,
    ];

    fn slug(&self) -> &'static str {
        match self {
            DashboardSection::All => "all",
            DashboardSection::FarmTypes => "farm-types",
            DashboardSection::AnimalTypes => "animal-types",
            DashboardSection::Diseases => "diseases",
            DashboardSection::Users => "users",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            DashboardSection::All => "Overview",
            DashboardSection::FarmTypes => "Farm Types",
            DashboardSection::AnimalTypes => "Animal Types",
            DashboardSection::Diseases => "Diseases",
            DashboardSection::Users => "Users",
        }
    }
}

/// One counter card: where its number comes from and how it looks
#[derive(Clone, Copy)]
pub struct StatField {
    pub label: &'static str,
    pub icon: &'static str,
    pub tone: StatTone,
    pub pick: fn(&SummaryCounts, &DashboardStats) -> i64,
}

impl DashboardSection {
    fn all_charts(&self) -> &'static [ChartEndpoint] {
        use ChartEndpoint::*;
        match self {
            DashboardSection::All => &[
                FarmTypes,
                DiseaseSeverity,
                ConfigStatus,
                FarmTrend,
                DiseaseReportTrend,
            ],
            DashboardSection::FarmTypes => &[FarmTypes, FarmTrend],
            DashboardSection::AnimalTypes => &[ConfigStatus],
            DashboardSection::Diseases => &[DiseaseSeverity, DiseaseReportTrend],
            DashboardSection::Users => &[UserRoles, UserStatus, UserTrend],
        }
    }

    /// Charts of this section the viewer may see
    pub fn charts(&self, is_admin: bool) -> Vec<ChartEndpoint> {
        self.all_charts()
            .iter()
            .copied()
            .filter(|c| is_admin || !c.admin_only())
            .collect()
    }

    pub fn stats(&self) -> Vec<StatField> {
        match self {
            DashboardSection::All => vec![
                StatField {
                    label: "Total Users",
                    icon: "users",
                    tone: StatTone::Primary,
                    pick: |s, _| s.total_users(),
                },
                StatField {
                    label: "Registered Farms",
                    icon: "farm",
                    tone: StatTone::Success,
                    pick: |s, _| s.total_farms,
                },
                StatField {
                    label: "Registered Animals",
                    icon: "paw",
                    tone: StatTone::Neutral,
                    pick: |s, _| s.total_animals,
                },
                StatField {
                    label: "Disease Reports",
                    icon: "file-text",
                    tone: StatTone::Warning,
                    pick: |s, _| s.total_disease_reports,
                },
                StatField {
                    label: "Active Farm Types",
                    icon: "farm",
                    tone: StatTone::Neutral,
                    pick: |s, _| s.active_farm_types,
                },
                StatField {
                    label: "Active Animal Types",
                    icon: "paw",
                    tone: StatTone::Neutral,
                    pick: |s, _| s.active_animal_types,
                },
                StatField {
                    label: "Active Diseases",
                    icon: "virus",
                    tone: StatTone::Neutral,
                    pick: |s, _| s.active_diseases,
                },
                StatField {
                    label: "Notifiable Diseases",
                    icon: "alert",
                    tone: StatTone::Error,
                    pick: |s, _| s.notifiable_diseases,
                },
            ],
            DashboardSection::FarmTypes => vec![
                StatField {
                    label: "Farm Types",
                    icon: "farm",
                    tone: StatTone::Primary,
                    pick: |_, st| st.total_farm_types,
                },
                StatField {
                    label: "Active Farm Types",
                    icon: "check",
                    tone: StatTone::Success,
                    pick: |s, _| s.active_farm_types,
                },
                StatField {
                    label: "Registered Farms",
                    icon: "farm",
                    tone: StatTone::Neutral,
                    pick: |s, _| s.total_farms,
                },
                StatField {
                    label: "Active Farms",
                    icon: "check",
                    tone: StatTone::Success,
                    pick: |_, st| st.active_farms,
                },
            ],
            DashboardSection::AnimalTypes => vec![
                StatField {
                    label: "Animal Types",
                    icon: "paw",
                    tone: StatTone::Primary,
                    pick: |_, st| st.total_animal_types,
                },
                StatField {
                    label: "Active Animal Types",
                    icon: "check",
                    tone: StatTone::Success,
                    pick: |s, _| s.active_animal_types,
                },
                StatField {
                    label: "Registered Animals",
                    icon: "paw",
                    tone: StatTone::Neutral,
                    pick: |s, _| s.total_animals,
                },
            ],
            DashboardSection::Diseases => vec![
                StatField {
                    label: "Diseases",
                    icon: "virus",
                    tone: StatTone::Primary,
                    pick: |_, st| st.total_diseases,
                },
                StatField {
                    label: "Active Diseases",
                    icon: "check",
                    tone: StatTone::Success,
                    pick: |s, _| s.active_diseases,
                },
                StatField {
                    label: "Notifiable Diseases",
                    icon: "alert",
                    tone: StatTone::Error,
                    pick: |s, _| s.notifiable_diseases,
                },
                StatField {
                    label: "Confirmed Reports",
                    icon: "file-text",
                    tone: StatTone::Warning,
                    pick: |_, st| st.confirmed_disease_reports,
                },
                StatField {
                    label: "Pending Reports",
                    icon: "file-text",
                    tone: StatTone::Neutral,
                    pick: |_, st| st.pending_disease_reports,
                },
            ],
            DashboardSection::Users => vec![
                StatField {
                    label: "Total Users",
                    icon: "users",
                    tone: StatTone::Primary,
                    pick: |s, _| s.total_users(),
                },
                StatField {
                    label: "Administrators",
                    icon: "shield",
                    tone: StatTone::Neutral,
                    pick: |s, _| s.admin_count,
                },
                StatField {
                    label: "Veterinary Officers",
                    icon: "user",
                    tone: StatTone::Success,
                    pick: |s, _| s.vet_count,
                },
                StatField {
                    label: "Inactive Users",
                    icon: "power",
                    tone: StatTone::Warning,
                    pick: |_, st| st.inactive_users,
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_parameter_fallback() {
        assert_eq!(DashboardSection::resolve(Some("users")), DashboardSection::Users);
        assert_eq!(DashboardSection::resolve(Some("farms")), DashboardSection::All);
        assert_eq!(DashboardSection::resolve(None), DashboardSection::All);
    }

    #[test]
    fn user_status_chart_hidden_from_officers() {
        let officer = DashboardSection::Users.charts(false);
        assert!(!officer.contains(&ChartEndpoint::UserStatus));
        assert!(officer.contains(&ChartEndpoint::UserRoles));
        assert!(DashboardSection::Users
            .charts(true)
            .contains(&ChartEndpoint::UserStatus));
    }

    #[test]
    fn stat_cards_read_the_right_fields() {
        let summary = SummaryCounts {
            admin_count: 2,
            vet_count: 10,
            notifiable_diseases: 4,
            ..Default::default()
        };
        let stats = DashboardStats {
            inactive_users: 3,
            ..Default::default()
        };
        let values: Vec<i64> = DashboardSection::Users
            .stats()
            .iter()
            .map(|card| (card.pick)(&summary, &stats))
            .collect();
        assert_eq!(values, vec![12, 2, 10, 3]);

        let overview = DashboardSection::All.stats();
        let notifiable = overview
            .iter()
            .find(|s| s.label == "Notifiable Diseases")
            .map(|s| (s.pick)(&summary, &stats));
        assert_eq!(notifiable, Some(4));
    }
}
