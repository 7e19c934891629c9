use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::validation::{max_len, non_blank, require_len};
use crate::domain::common::{AggregateRoot, EntityMetadata};

// ============================================================================
// Aggregate
// ============================================================================

/// Livestock category (cattle, goat, poultry, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimalType {
    pub id: Uuid,
    pub type_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "crate::shared::api::default_true")]
    pub is_active: bool,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
    #[serde(default)]
    pub usage_count: Option<i64>,
}

impl AggregateRoot for AnimalType {
    type Dto = AnimalTypeDto;

    fn id(&self) -> Uuid {
        self.id
    }

    fn display_name(&self) -> &str {
        &self.type_name
    }

    fn is_active(&self) -> bool {
        self.is_active
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.metadata
    }

    fn usage_count(&self) -> Option<i64> {
        self.usage_count
    }

    fn to_dto(&self) -> AnimalTypeDto {
        AnimalTypeDto {
            type_name: self.type_name.clone(),
            description: self.description.clone(),
            is_active: self.is_active,
        }
    }

    fn aggregate_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "animal-types"
    }

    fn element_name() -> &'static str {
        "Animal Type"
    }

    fn list_name() -> &'static str {
        "Animal Types"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimalTypeDto {
    pub type_name: String,
    pub description: Option<String>,
    pub is_active: bool,
}

impl Default for AnimalTypeDto {
    fn default() -> Self {
        Self {
            type_name: String::new(),
            description: None,
            is_active: true,
        }
    }
}

impl AnimalTypeDto {
    pub fn validate(&self) -> Result<(), String> {
        require_len("Animal type name", &self.type_name, 2, 50)?;
        max_len("Description", self.description.as_deref(), 500)?;
        Ok(())
    }

    /// Trimmed copy ready to send
    pub fn normalized(&self) -> Self {
        Self {
            type_name: self.type_name.trim().to_string(),
            description: non_blank(self.description.clone()),
            is_active: self.is_active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_server_payload() {
        let json = r#"{
            "id": "6f1c0c1e-8a53-4a57-9d0f-4c43b8f0a002",
            "typeName": "Cattle",
            "description": "Bovine livestock",
            "isActive": true,
            "createdAt": "2024-01-10T08:00:00",
            "createdByUsername": "admin",
            "usageCount": 3
        }"#;
        let animal: AnimalType = serde_json::from_str(json).unwrap();
        assert_eq!(animal.type_name, "Cattle");
        assert!(animal.is_active);
        assert_eq!(animal.metadata.created_by_username.as_deref(), Some("admin"));
        assert_eq!(animal.usage_count, Some(3));
    }

    #[test]
    fn dto_uses_camel_case_on_the_wire() {
        let dto = AnimalTypeDto {
            type_name: "Swine".into(),
            description: None,
            is_active: false,
        };
        let value = serde_json::to_value(&dto).unwrap();
        assert_eq!(value["typeName"], "Swine");
        assert_eq!(value["isActive"], false);
    }

    #[test]
    fn validation_rules() {
        let mut dto = AnimalTypeDto::default();
        assert!(dto.validate().is_err());
        dto.type_name = "P".into();
        assert!(dto.validate().is_err());
        dto.type_name = "Buffalo".into();
        assert!(dto.validate().is_ok());
        dto.description = Some("x".repeat(501));
        assert!(dto.validate().is_err());
    }

    #[test]
    fn normalized_trims_and_drops_blank_description() {
        let dto = AnimalTypeDto {
            type_name: "  Goat ".into(),
            description: Some("   ".into()),
            is_active: true,
        };
        let n = dto.normalized();
        assert_eq!(n.type_name, "Goat");
        assert_eq!(n.description, None);
    }
}
