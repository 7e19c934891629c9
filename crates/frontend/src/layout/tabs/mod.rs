//! Tab management
//!
//! - `page`: `TabPage`, the wrapper that shows or hides one tab's content
//! - `registry`: tab key → view
//! - `tab_labels`: tab key → title and icon

pub mod page;
pub mod registry;
pub mod tab_labels;

pub use page::TabPage;
pub use tab_labels::{tab_icon_for_key, tab_label_for_key};
