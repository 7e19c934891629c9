use serde::{Deserialize, Serialize};
use std::fmt;

/// Roles a console user can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Admin,
    #[default]
    VeterinaryOfficer,
}

impl UserRole {
    pub const ALL: [UserRole; 2] = [UserRole::Admin, UserRole::VeterinaryOfficer];

    pub fn code(&self) -> &'static str {
        match self {
            UserRole::Admin => "ADMIN",
            UserRole::VeterinaryOfficer => "VETERINARY_OFFICER",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            UserRole::Admin => "Administrator",
            UserRole::VeterinaryOfficer => "Veterinary Officer",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_uppercase().as_str() {
            "ADMIN" => Some(UserRole::Admin),
            "VETERINARY_OFFICER" => Some(UserRole::VeterinaryOfficer),
            _ => None,
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, UserRole::Admin)
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
