use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Audit fields the server stamps on every configuration record.
///
/// Timestamps arrive as local date-times without an offset
/// (`2024-03-01T09:15:00`), so they are kept naive.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityMetadata {
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub updated_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub created_by_username: Option<String>,
    #[serde(default)]
    pub updated_by_username: Option<String>,
}

impl EntityMetadata {
    /// "admin, 2024-03-01 09:15" style caption for list rows
    pub fn created_caption(&self) -> String {
        let who = self.created_by_username.as_deref().unwrap_or("system");
        match self.created_at {
            Some(at) => format!("{}, {}", who, at.format("%Y-%m-%d %H:%M")),
            None => who.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_offsetless_timestamps() {
        let meta: EntityMetadata = serde_json::from_str(
            r#"{"createdAt":"2024-03-01T09:15:00","createdByUsername":"admin"}"#,
        )
        .unwrap();
        assert!(meta.created_at.is_some());
        assert!(meta.updated_at.is_none());
        assert_eq!(meta.created_caption(), "admin, 2024-03-01 09:15");
    }

    #[test]
    fn caption_without_author_falls_back_to_system() {
        assert_eq!(EntityMetadata::default().created_caption(), "system");
    }
}
