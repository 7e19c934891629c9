pub mod a001_farm_type;
pub mod a002_animal_type;
pub mod a003_disease;
pub mod common;
