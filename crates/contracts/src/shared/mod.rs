pub mod api;
pub mod locations;
