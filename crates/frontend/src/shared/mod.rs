pub mod api_client;
pub mod api_utils;
pub mod cache;
pub mod components;
pub mod config;
pub mod date_utils;
pub mod icons;
pub mod list_utils;
pub mod modal;
pub mod notifications;
pub mod page_frame;
pub mod tab_state;
