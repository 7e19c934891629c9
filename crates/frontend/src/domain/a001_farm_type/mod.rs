pub mod ui;

use contracts::domain::a001_farm_type::aggregate::{FarmType, FarmTypeDto};

use crate::domain::configuration::ConfigCollection;

impl ConfigCollection for FarmType {
    const USAGE_NOUN: &'static str = "farm";

    fn validate_form(dto: &FarmTypeDto) -> Result<(), String> {
        dto.validate()
    }

    fn normalize_form(dto: &FarmTypeDto) -> FarmTypeDto {
        dto.normalized()
    }
}
