pub mod ui;

use contracts::domain::a003_disease::aggregate::{Disease, DiseaseDto};

use crate::domain::configuration::ConfigCollection;

impl ConfigCollection for Disease {
    const USAGE_NOUN: &'static str = "report";
    const USAGE_VERB: &'static str = "used in";

    fn validate_form(dto: &DiseaseDto) -> Result<(), String> {
        dto.validate()
    }

    fn normalize_form(dto: &DiseaseDto) -> DiseaseDto {
        dto.normalized()
    }
}
