pub mod form;
pub mod list;
pub mod location_picker;
