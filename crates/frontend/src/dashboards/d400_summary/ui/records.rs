//! Read-only record tables for the farm type, animal type and disease sections

use contracts::dashboards::d400_summary::dto::{ChartData, DashboardStats, SummaryCounts};
use contracts::domain::a001_farm_type::aggregate::FarmType;
use contracts::domain::a002_animal_type::aggregate::AnimalType;
use contracts::domain::a003_disease::aggregate::{Disease, Severity};
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use thaw::*;

use super::section::DashboardSection;
use crate::dashboards::d400_summary::api::ChartEndpoint;
use crate::domain::configuration::api::fetch_all;
use crate::domain::configuration::EmptyRow;
use crate::shared::api_client::ApiError;
use crate::shared::components::ui::{ActiveBadge, Badge};
use crate::shared::date_utils::format_date;

/// Most severe first, as the severity pie lists them
const SEVERITY_ORDER: [Severity; 4] = [
    Severity::Critical,
    Severity::High,
    Severity::Medium,
    Severity::Low,
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub total: i64,
    pub active: i64,
}

impl Tally {
    pub fn of<T: AggregateRoot>(items: &[T]) -> Self {
        Self {
            total: items.len() as i64,
            active: items.iter().filter(|i| i.is_active()).count() as i64,
        }
    }
}

pub fn severity_chart(diseases: &[Disease]) -> ChartData {
    let data = SEVERITY_ORDER
        .iter()
        .map(|s| diseases.iter().filter(|d| d.severity == Some(*s)).count() as i64)
        .collect();
    ChartData {
        labels: SEVERITY_ORDER
            .iter()
            .map(|s| s.display_name().to_string())
            .collect(),
        data,
        chart_type: Some("pie".to_string()),
    }
}

/// Collection behind the current section, if it has one
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SectionRecords {
    #[default]
    Empty,
    FarmTypes(Vec<FarmType>),
    AnimalTypes(Vec<AnimalType>),
    Diseases(Vec<Disease>),
}

impl SectionRecords {
    pub async fn load(section: DashboardSection) -> Result<Self, ApiError> {
        let records = match section {
            DashboardSection::FarmTypes => SectionRecords::FarmTypes(fetch_all().await?),
            DashboardSection::AnimalTypes => SectionRecords::AnimalTypes(fetch_all().await?),
            DashboardSection::Diseases => SectionRecords::Diseases(fetch_all().await?),
            DashboardSection::All | DashboardSection::Users => SectionRecords::Empty,
        };
        Ok(records)
    }

    pub fn section(&self) -> Option<DashboardSection> {
        match self {
            SectionRecords::Empty => None,
            SectionRecords::FarmTypes(_) => Some(DashboardSection::FarmTypes),
            SectionRecords::AnimalTypes(_) => Some(DashboardSection::AnimalTypes),
            SectionRecords::Diseases(_) => Some(DashboardSection::Diseases),
        }
    }

    pub fn tally(&self) -> Option<Tally> {
        match self {
            SectionRecords::Empty => None,
            SectionRecords::FarmTypes(items) => Some(Tally::of(items)),
            SectionRecords::AnimalTypes(items) => Some(Tally::of(items)),
            SectionRecords::Diseases(items) => Some(Tally::of(items)),
        }
    }

    /// Replace the server's counters for this collection with counts taken from the list
    pub fn apply_counts(&self, summary: &mut SummaryCounts, stats: &mut DashboardStats) {
        let Some(tally) = self.tally() else {
            return;
        };
        match self {
            SectionRecords::Empty => {}
            SectionRecords::FarmTypes(_) => {
                stats.total_farm_types = tally.total;
                stats.active_farm_types = tally.active;
                summary.active_farm_types = tally.active;
            }
            SectionRecords::AnimalTypes(_) => {
                stats.total_animal_types = tally.total;
                stats.active_animal_types = tally.active;
                summary.active_animal_types = tally.active;
            }
            SectionRecords::Diseases(items) => {
                let notifiable = items.iter().filter(|d| d.is_notifiable).count() as i64;
                stats.total_diseases = tally.total;
                stats.active_diseases = tally.active;
                stats.notifiable_diseases = notifiable;
                summary.active_diseases = tally.active;
                summary.notifiable_diseases = notifiable;
            }
        }
    }

    /// Chart computed from the list instead of its endpoint
    pub fn local_chart(&self, endpoint: ChartEndpoint) -> Option<ChartData> {
        match (self, endpoint) {
            (SectionRecords::Diseases(items), ChartEndpoint::DiseaseSeverity) => {
                Some(severity_chart(items))
            }
            _ => None,
        }
    }
}

struct TypeRow {
    name: String,
    description: String,
    active: bool,
    created: String,
}

impl From<&FarmType> for TypeRow {
    fn from(t: &FarmType) -> Self {
        Self {
            name: t.type_name.clone(),
            description: t.description.clone().unwrap_or_else(|| "-".to_string()),
            active: t.is_active,
            created: format_date(t.metadata.created_at),
        }
    }
}

impl From<&AnimalType> for TypeRow {
    fn from(t: &AnimalType) -> Self {
        Self {
            name: t.type_name.clone(),
            description: t.description.clone().unwrap_or_else(|| "-".to_string()),
            active: t.is_active,
            created: format_date(t.metadata.created_at),
        }
    }
}

fn type_table(title: &'static str, empty: &'static str, rows: Vec<TypeRow>) -> AnyView {
    let body = if rows.is_empty() {
        view! { <EmptyRow colspan=4 message=empty /> }.into_any()
    } else {
        rows.into_iter()
            .map(|row| view! {
                <TableRow>
                    <TableCell attr:data-label="Name"><strong>{row.name}</strong></TableCell>
                    <TableCell attr:data-label="Description" attr:class="text-truncate">{row.description}</TableCell>
                    <TableCell attr:data-label="Status"><ActiveBadge active=row.active /></TableCell>
                    <TableCell attr:data-label="Created">{row.created}</TableCell>
                </TableRow>
            })
            .collect_view()
            .into_any()
    };

    view! {
        <div class="card">
            <div class="card__header"><h3 class="card__title">{title}</h3></div>
            <div class="table-wrapper">
                <Table attr:class="data-table data-table--cards">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Name"</TableHeaderCell>
                            <TableHeaderCell>"Description"</TableHeaderCell>
                            <TableHeaderCell>"Status"</TableHeaderCell>
                            <TableHeaderCell>"Created"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>{body}</TableBody>
                </Table>
            </div>
        </div>
    }
    .into_any()
}

fn disease_table(diseases: Vec<Disease>) -> AnyView {
    let body = if diseases.is_empty() {
        view! { <EmptyRow colspan=5 message="No diseases found" /> }.into_any()
    } else {
        diseases
            .into_iter()
            .map(|d| {
                let severity = match d.severity {
                    Some(s) => view! {
                        <Badge variant=s.badge_class()>{s.display_name()}</Badge>
                    }
                    .into_any(),
                    None => "-".into_any(),
                };
                view! {
                    <TableRow>
                        <TableCell attr:data-label="Disease"><strong>{d.disease_name.clone()}</strong></TableCell>
                        <TableCell attr:data-label="Severity">{severity}</TableCell>
                        <TableCell attr:data-label="Notifiable">
                            {if d.is_notifiable {
                                view! { <Badge variant="badge--warning">"Yes"</Badge> }.into_any()
                            } else {
                                "No".into_any()
                            }}
                        </TableCell>
                        <TableCell attr:data-label="Status"><ActiveBadge active=d.is_active /></TableCell>
                        <TableCell attr:data-label="Created">{format_date(d.metadata.created_at)}</TableCell>
                    </TableRow>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <div class="card">
            <div class="card__header"><h3 class="card__title">"Diseases"</h3></div>
            <div class="table-wrapper">
                <Table attr:class="data-table data-table--cards">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Disease"</TableHeaderCell>
                            <TableHeaderCell>"Severity"</TableHeaderCell>
                            <TableHeaderCell>"Notifiable"</TableHeaderCell>
                            <TableHeaderCell>"Status"</TableHeaderCell>
                            <TableHeaderCell>"Created"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>{body}</TableBody>
                </Table>
            </div>
        </div>
    }
    .into_any()
}

#[component]
pub fn RecordsTable(#[prop(into)] records: Signal<SectionRecords>) -> impl IntoView {
    move || match records.get() {
        SectionRecords::Empty => ().into_any(),
        SectionRecords::FarmTypes(items) => type_table(
            "Farm Types",
            "No farm types found",
            items.iter().map(TypeRow::from).collect(),
        ),
        SectionRecords::AnimalTypes(items) => type_table(
            "Animal Types",
            "No animal types found",
            items.iter().map(TypeRow::from).collect(),
        ),
        SectionRecords::Diseases(items) => disease_table(items),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::common::EntityMetadata;
    use uuid::Uuid;

    fn farm(name: &str, active: bool) -> FarmType {
        FarmType {
            id: Uuid::new_v4(),
            type_name: name.into(),
            description: None,
            is_active: active,
            metadata: EntityMetadata::default(),
            usage_count: None,
        }
    }

    fn disease(name: &str, severity: Option<Severity>, notifiable: bool, active: bool) -> Disease {
        Disease {
            id: Uuid::new_v4(),
            disease_name: name.into(),
            disease_code: None,
            description: None,
            affected_animal_types: Vec::new(),
            severity,
            is_notifiable: notifiable,
            is_active: active,
            metadata: EntityMetadata::default(),
            usage_count: None,
        }
    }

    #[test]
    fn farm_type_counts_come_from_the_list() {
        let records = SectionRecords::FarmTypes(vec![
            farm("Dairy", true),
            farm("Poultry", true),
            farm("Piggery", false),
        ]);
        assert_eq!(records.tally(), Some(Tally { total: 3, active: 2 }));

        let mut summary = SummaryCounts {
            active_farm_types: 9,
            ..Default::default()
        };
        let mut stats = DashboardStats {
            total_farm_types: 9,
            ..Default::default()
        };
        records.apply_counts(&mut summary, &mut stats);
        assert_eq!(stats.total_farm_types, 3);
        assert_eq!(stats.active_farm_types, 2);
        assert_eq!(summary.active_farm_types, 2);
        assert_eq!(stats.total_diseases, 0);
    }

    #[test]
    fn disease_list_drives_counts_and_severity_pie() {
        let records = SectionRecords::Diseases(vec![
            disease("Anthrax", Some(Severity::Critical), true, true),
            disease("FMD", Some(Severity::Critical), true, true),
            disease("Mastitis", Some(Severity::Low), false, false),
            disease("Unknown", None, false, true),
        ]);

        let mut summary = SummaryCounts::default();
        let mut stats = DashboardStats::default();
        records.apply_counts(&mut summary, &mut stats);
        assert_eq!(stats.total_diseases, 4);
        assert_eq!(stats.active_diseases, 3);
        assert_eq!(summary.notifiable_diseases, 2);

        let chart = records.local_chart(ChartEndpoint::DiseaseSeverity);
        let points = chart.map(|c| c.points());
        assert_eq!(
            points,
            Some(vec![
                ("Critical".to_string(), 2),
                ("High".to_string(), 0),
                ("Medium".to_string(), 0),
                ("Low".to_string(), 1),
            ])
        );
        assert_eq!(records.local_chart(ChartEndpoint::DiseaseReportTrend), None);
    }

    #[test]
    fn sections_without_a_table_stay_empty() {
        let records = SectionRecords::Empty;
        assert_eq!(records.section(), None);
        assert_eq!(records.tally(), None);
        assert_eq!(records.local_chart(ChartEndpoint::DiseaseSeverity), None);

        let mut summary = SummaryCounts {
            active_diseases: 5,
            ..Default::default()
        };
        let mut stats = DashboardStats::default();
        records.apply_counts(&mut summary, &mut stats);
        assert_eq!(summary.active_diseases, 5);
    }
}
