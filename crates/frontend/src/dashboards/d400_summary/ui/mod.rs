mod dashboard;
mod records;
mod section;

pub use dashboard::SummaryDashboard;
pub use section::DashboardSection;
