//! User distribution map (choropleth by district or province)

pub mod api;
pub mod regions;
pub mod scale;
pub mod ui;
