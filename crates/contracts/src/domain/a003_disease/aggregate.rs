use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::domain::common::validation::{max_len, non_blank, require_len};
use crate::domain::common::{AggregateRoot, EntityMetadata};

// ============================================================================
// Severity
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::Low,
        Severity::Medium,
        Severity::High,
        Severity::Critical,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Severity::Low => "LOW",
            Severity::Medium => "MEDIUM",
            Severity::High => "HIGH",
            Severity::Critical => "CRITICAL",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
            Severity::Critical => "Critical",
        }
    }

    /// CSS modifier for severity badges
    pub fn badge_class(&self) -> &'static str {
        match self {
            Severity::Low => "badge--success",
            Severity::Medium => "badge--info",
            Severity::High => "badge--warning",
            Severity::Critical => "badge--error",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Severity::ALL
            .iter()
            .copied()
            .find(|s| s.code().eq_ignore_ascii_case(code.trim()))
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// A disease tracked by the reporting system
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Disease {
    pub id: Uuid,
    pub disease_name: String,
    #[serde(default)]
    pub disease_code: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Names of the animal types the disease affects
    #[serde(default)]
    pub affected_animal_types: Vec<String>,
    #[serde(default)]
    pub severity: Option<Severity>,
    #[serde(default)]
    pub is_notifiable: bool,
    #[serde(default = "crate::shared::api::default_true")]
    pub is_active: bool,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
    #[serde(default)]
    pub usage_count: Option<i64>,
}

impl AggregateRoot for Disease {
    type Dto = DiseaseDto;

    fn id(&self) -> Uuid {
        self.id
    }

    fn display_name(&self) -> &str {
        &self.disease_name
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

    fn to_dto(&self) -> DiseaseDto {
        DiseaseDto {
            disease_name: self.disease_name.clone(),
            disease_code: self.disease_code.clone(),
            description: self.description.clone(),
            affected_animal_types: self.affected_animal_types.clone(),
            severity: self.severity,
            is_notifiable: self.is_notifiable,
            is_active: self.is_active,
        }
    }

    fn aggregate_index() -> &'static str {
        "a003"
    }

    fn collection_name() -> &'static str {
        "diseases"
    }

    fn element_name() -> &'static str {
        "Disease"
    }

    fn list_name() -> &'static str {
        "Diseases"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiseaseDto {
    pub disease_name: String,
    pub disease_code: Option<String>,
    pub description: Option<String>,
    pub affected_animal_types: Vec<String>,
    pub severity: Option<Severity>,
    pub is_notifiable: bool,
    pub is_active: bool,
}

impl Default for DiseaseDto {
    fn default() -> Self {
        Self {
            disease_name: String::new(),
            disease_code: None,
            description: None,
            affected_animal_types: Vec::new(),
            severity: Some(Severity::Medium),
            is_notifiable: false,
            is_active: true,
        }
    }
}

impl DiseaseDto {
    pub fn validate(&self) -> Result<(), String> {
        require_len("Disease name", &self.disease_name, 2, 100)?;
        max_len("Disease code", self.disease_code.as_deref(), 20)?;
        max_len("Description", self.description.as_deref(), 1000)?;
        Ok(())
    }

    pub fn normalized(&self) -> Self {
        let mut affected: Vec<String> = self
            .affected_animal_types
            .iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        affected.dedup();
        Self {
            disease_name: self.disease_name.trim().to_string(),
            disease_code: non_blank(self.disease_code.clone()).map(|c| c.to_ascii_uppercase()),
            description: non_blank(self.description.clone()),
            affected_animal_types: affected,
            severity: self.severity,
            is_notifiable: self.is_notifiable,
            is_active: self.is_active,
        }
    }

    /// Add or remove an affected animal type by name
    pub fn toggle_animal_type(&mut self, name: &str, selected: bool) {
        let present = self.affected_animal_types.iter().any(|n| n == name);
        if selected && !present {
            self.affected_animal_types.push(name.to_string());
        } else if !selected {
            self.affected_animal_types.retain(|n| n != name);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_with_severity_and_animal_types() {
        let json = r#"{
            "id": "0b0f9c7e-2f5e-4a44-8f7a-7c1f6d2e0003",
            "diseaseName": "Foot and Mouth Disease",
            "diseaseCode": "FMD",
            "affectedAnimalTypes": ["Cattle", "Goat"],
            "severity": "CRITICAL",
            "isNotifiable": true,
            "isActive": true
        }"#;
        let disease: Disease = serde_json::from_str(json).unwrap();
        assert_eq!(disease.severity, Some(Severity::Critical));
        assert!(disease.is_notifiable);
        assert_eq!(disease.affected_animal_types.len(), 2);
    }

    #[test]
    fn missing_optional_fields_use_defaults() {
        let json = r#"{"id":"0b0f9c7e-2f5e-4a44-8f7a-7c1f6d2e0004","diseaseName":"Mastitis"}"#;
        let disease: Disease = serde_json::from_str(json).unwrap();
        assert!(disease.is_active);
        assert!(!disease.is_notifiable);
        assert!(disease.affected_animal_types.is_empty());
        assert_eq!(disease.severity, None);
    }

    #[test]
    fn validation_limits() {
        let mut dto = DiseaseDto {
            disease_name: "Anthrax".into(),
            ..Default::default()
        };
        assert!(dto.validate().is_ok());
        dto.disease_code = Some("X".repeat(21));
        assert_eq!(
            dto.validate(),
            Err("Disease code must not exceed 20 characters".into())
        );
    }

    #[test]
    fn normalized_uppercases_code_and_dedups_animals() {
        let dto = DiseaseDto {
            disease_name: " Lumpy skin ".into(),
            disease_code: Some(" lsd ".into()),
            affected_animal_types: vec!["Cattle".into(), "Cattle".into(), " ".into()],
            ..Default::default()
        };
        let n = dto.normalized();
        assert_eq!(n.disease_name, "Lumpy skin");
        assert_eq!(n.disease_code.as_deref(), Some("LSD"));
        assert_eq!(n.affected_animal_types, vec!["Cattle".to_string()]);
    }

    #[test]
    fn toggling_animal_types() {
        let mut dto = DiseaseDto::default();
        dto.toggle_animal_type("Goat", true);
        dto.toggle_animal_type("Goat", true);
        assert_eq!(dto.affected_animal_types, vec!["Goat".to_string()]);
        dto.toggle_animal_type("Goat", false);
        assert!(dto.affected_animal_types.is_empty());
    }

    #[test]
    fn severity_parsing_is_case_insensitive() {
        assert_eq!(Severity::from_code("high"), Some(Severity::High));
        assert_eq!(Severity::from_code("extreme"), None);
    }
}
