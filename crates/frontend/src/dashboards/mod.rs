pub mod d400_summary;
pub mod d401_user_map;

pub use d400_summary::ui::SummaryDashboard;
pub use d401_user_map::ui::UserMapDashboard;
