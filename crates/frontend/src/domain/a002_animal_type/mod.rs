pub mod api;
pub mod ui;

use contracts::domain::a002_animal_type::aggregate::{AnimalType, AnimalTypeDto};

use crate::domain::configuration::ConfigCollection;

impl ConfigCollection for AnimalType {
    const USAGE_NOUN: &'static str = "animal";

    fn validate_form(dto: &AnimalTypeDto) -> Result<(), String> {
        dto.validate()
    }

    fn normalize_form(dto: &AnimalTypeDto) -> AnimalTypeDto {
        dto.normalized()
    }
}
