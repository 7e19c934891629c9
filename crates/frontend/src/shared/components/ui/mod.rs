pub mod badge;
pub mod checkbox;
pub mod input;
pub mod select;
pub mod textarea;

pub use badge::{ActiveBadge, Badge};
pub use checkbox::Checkbox;
pub use input::TextField;
pub use select::{CustomSelect, SelectOption};
pub use textarea::TextArea;
