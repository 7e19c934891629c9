use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::district::District;

/// Provinces of Sri Lanka
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Province {
    Northern,
    NorthWestern,
    Western,
    NorthCentral,
    Central,
    Sabaragamuwa,
    Eastern,
    Uva,
    Southern,
}

impl Province {
    pub const ALL: [Province; 9] = [
        Province::Northern,
        Province::NorthWestern,
        Province::Western,
        Province::NorthCentral,
        Province::Central,
        Province::Sabaragamuwa,
        Province::Eastern,
        Province::Uva,
        Province::Southern,
    ];

    /// Wire code, e.g. `NORTH_WESTERN`
    pub fn code(&self) -> &'static str {
        match self {
            Province::Northern => "NORTHERN",
            Province::NorthWestern => "NORTH_WESTERN",
            Province::Western => "WESTERN",
            Province::NorthCentral => "NORTH_CENTRAL",
            Province::Central => "CENTRAL",
            Province::Sabaragamuwa => "SABARAGAMUWA",
            Province::Eastern => "EASTERN",
            Province::Uva => "UVA",
            Province::Southern => "SOUTHERN",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Province::Northern => "Northern Province",
            Province::NorthWestern => "North-Western Province",
            Province::Western => "Western Province",
            Province::NorthCentral => "North-Central Province",
            Province::Central => "Central Province",
            Province::Sabaragamuwa => "Sabaragamuwa Province",
            Province::Eastern => "Eastern Province",
            Province::Uva => "Uva Province",
            Province::Southern => "Southern Province",
        }
    }

    /// Districts administered by this province, in display order
    pub fn districts(&self) -> Vec<District> {
        District::ALL
            .iter()
            .copied()
            .filter(|d| d.province() == *self)
            .collect()
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Province::ALL.iter().copied().find(|p| p.code() == code)
    }
}

impl fmt::Display for Province {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Province {
    type Err = anyhow::Error;

    /// Accepts the wire code in any case or the display name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let normalized = trimmed.to_ascii_uppercase().replace(['-', ' '], "_");
        Province::from_code(&normalized)
            .or_else(|| {
                Province::ALL
                    .iter()
                    .copied()
                    .find(|p| p.display_name().eq_ignore_ascii_case(trimmed))
            })
            .ok_or_else(|| anyhow::anyhow!("Unknown province: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_district_belongs_to_exactly_one_province() {
        let total: usize = Province::ALL.iter().map(|p| p.districts().len()).sum();
        assert_eq!(total, District::ALL.len());
        assert_eq!(total, 25);
    }

    #[test]
    fn northern_has_five_districts() {
        let districts = Province::Northern.districts();
        assert_eq!(districts.len(), 5);
        assert!(districts.contains(&District::Jaffna));
        assert!(districts.contains(&District::Vavuniya));
    }

    #[test]
    fn parses_codes_and_display_names() {
        assert_eq!("NORTH_WESTERN".parse::<Province>().unwrap(), Province::NorthWestern);
        assert_eq!("north-western".parse::<Province>().unwrap(), Province::NorthWestern);
        assert_eq!("Uva Province".parse::<Province>().unwrap(), Province::Uva);
        assert!("ATLANTIS".parse::<Province>().is_err());
    }

    #[test]
    fn serializes_as_screaming_snake_case() {
        let json = serde_json::to_string(&Province::NorthCentral).unwrap();
        assert_eq!(json, "\"NORTH_CENTRAL\"");
        let back: Province = serde_json::from_str("\"SABARAGAMUWA\"").unwrap();
        assert_eq!(back, Province::Sabaragamuwa);
    }
}
