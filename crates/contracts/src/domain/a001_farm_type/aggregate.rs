use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::validation::{max_len, non_blank, require_len};
use crate::domain::common::{AggregateRoot, EntityMetadata};

// ============================================================================
// Aggregate
// ============================================================================

/// Kind of farm a report can be filed against (dairy, poultry, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FarmType {
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

impl AggregateRoot for FarmType {
    type Dto = FarmTypeDto;

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

    fn to_dto(&self) -> FarmTypeDto {
        FarmTypeDto {
            type_name: self.type_name.clone(),
            description: self.description.clone(),
            is_active: self.is_active,
        }
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "farm-types"
    }

    fn element_name() -> &'static str {
        "Farm Type"
    }

    fn list_name() -> &'static str {
        "Farm Types"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FarmTypeDto {
    pub type_name: String,
    pub description: Option<String>,
    pub is_active: bool,
}

impl Default for FarmTypeDto {
    fn default() -> Self {
        Self {
            type_name: String::new(),
            description: None,
            is_active: true,
        }
    }
}

impl FarmTypeDto {
    pub fn validate(&self) -> Result<(), String> {
        require_len("Farm type name", &self.type_name, 2, 50)?;
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
            "id": "6f1c0c1e-8a53-4a57-9d0f-4c43b8f0a001",
            "typeName": "Dairy",
            "description": "Milk production",
            "isActive": true,
            "createdAt": "2024-01-10T08:00:00",
            "createdByUsername": "admin"
        }"#;
        let farm: FarmType = serde_json::from_str(json).unwrap();
        assert_eq!(farm.type_name, "Dairy");
        assert!(farm.is_active);
        assert_eq!(farm.metadata.created_by_username.as_deref(), Some("admin"));
        assert_eq!(farm.usage_count, None);
    }

    #[test]
    fn dto_uses_camel_case_on_the_wire() {
        let dto = FarmTypeDto {
            type_name: "Poultry".into(),
            description: None,
            is_active: false,
        };
        let value = serde_json::to_value(&dto).unwrap();
        assert_eq!(value["typeName"], "Poultry");
        assert_eq!(value["isActive"], false);
    }

    #[test]
    fn validation_rules() {
        let mut dto = FarmTypeDto::default();
        assert!(dto.validate().is_err());
        dto.type_name = "P".into();
        assert!(dto.validate().is_err());
        dto.type_name = "Piggery".into();
        assert!(dto.validate().is_ok());
        dto.description = Some("x".repeat(501));
        assert!(dto.validate().is_err());
    }

    #[test]
    fn normalized_trims_and_drops_blank_description() {
        let dto = FarmTypeDto {
            type_name: "  Goat farm ".into(),
            description: Some("   ".into()),
            is_active: true,
        };
        let n = dto.normalized();
        assert_eq!(n.type_name, "Goat farm");
        assert_eq!(n.description, None);
    }
}
