use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::province::Province;

/// Administrative districts of Sri Lanka
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum District {
    Jaffna,
    Kilinochchi,
    Mannar,
    Mullaitivu,
    Vavuniya,
    Puttalam,
    Kurunegala,
    Gampaha,
    Colombo,
    Kalutara,
    Anuradhapura,
    Polonnaruwa,
    Matale,
    Kandy,
    NuwaraEliya,
    Kegalle,
    Ratnapura,
    Trincomalee,
    Batticaloa,
    Ampara,
    Badulla,
    Monaragala,
    Hambantota,
    Matara,
    Galle,
}

impl District {
    pub const ALL: [District; 25] = [
        District::Jaffna,
        District::Kilinochchi,
        District::Mannar,
        District::Mullaitivu,
        District::Vavuniya,
        District::Puttalam,
        District::Kurunegala,
        District::Gampaha,
        District::Colombo,
        District::Kalutara,
        District::Anuradhapura,
        District::Polonnaruwa,
        District::Matale,
        District::Kandy,
        District::NuwaraEliya,
        District::Kegalle,
        District::Ratnapura,
        District::Trincomalee,
        District::Batticaloa,
        District::Ampara,
        District::Badulla,
        District::Monaragala,
        District::Hambantota,
        District::Matara,
        District::Galle,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            District::Jaffna => "JAFFNA",
            District::Kilinochchi => "KILINOCHCHI",
            District::Mannar => "MANNAR",
            District::Mullaitivu => "MULLAITIVU",
            District::Vavuniya => "VAVUNIYA",
            District::Puttalam => "PUTTALAM",
            District::Kurunegala => "KURUNEGALA",
            District::Gampaha => "GAMPAHA",
            District::Colombo => "COLOMBO",
            District::Kalutara => "KALUTARA",
            District::Anuradhapura => "ANURADHAPURA",
            District::Polonnaruwa => "POLONNARUWA",
            District::Matale => "MATALE",
            District::Kandy => "KANDY",
            District::NuwaraEliya => "NUWARA_ELIYA",
            District::Kegalle => "KEGALLE",
            District::Ratnapura => "RATNAPURA",
            District::Trincomalee => "TRINCOMALEE",
            District::Batticaloa => "BATTICALOA",
            District::Ampara => "AMPARA",
            District::Badulla => "BADULLA",
            District::Monaragala => "MONARAGALA",
            District::Hambantota => "HAMBANTOTA",
            District::Matara => "MATARA",
            District::Galle => "GALLE",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            District::Jaffna => "Jaffna",
            District::Kilinochchi => "Kilinochchi",
            District::Mannar => "Mannar",
            District::Mullaitivu => "Mullaitivu",
            District::Vavuniya => "Vavuniya",
            District::Puttalam => "Puttalam",
            District::Kurunegala => "Kurunegala",
            District::Gampaha => "Gampaha",
            District::Colombo => "Colombo",
            District::Kalutara => "Kalutara",
            District::Anuradhapura => "Anuradhapura",
            District::Polonnaruwa => "Polonnaruwa",
            District::Matale => "Matale",
            District::Kandy => "Kandy",
            District::NuwaraEliya => "Nuwara Eliya",
            District::Kegalle => "Kegalle",
            District::Ratnapura => "Ratnapura",
            District::Trincomalee => "Trincomalee",
            District::Batticaloa => "Batticaloa",
            District::Ampara => "Ampara",
            District::Badulla => "Badulla",
            District::Monaragala => "Monaragala",
            District::Hambantota => "Hambantota",
            District::Matara => "Matara",
            District::Galle => "Galle",
        }
    }

    pub fn province(&self) -> Province {
        match self {
            District::Jaffna
            | District::Kilinochchi
            | District::Mannar
            | District::Mullaitivu
            | District::Vavuniya => Province::Northern,
            District::Puttalam | District::Kurunegala => Province::NorthWestern,
            District::Gampaha | District::Colombo | District::Kalutara => Province::Western,
            District::Anuradhapura | District::Polonnaruwa => Province::NorthCentral,
            District::Matale | District::Kandy | District::NuwaraEliya => Province::Central,
            District::Kegalle | District::Ratnapura => Province::Sabaragamuwa,
            District::Trincomalee | District::Batticaloa | District::Ampara => Province::Eastern,
            District::Badulla | District::Monaragala => Province::Uva,
            District::Hambantota | District::Matara | District::Galle => Province::Southern,
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        District::ALL.iter().copied().find(|d| d.code() == code)
    }
}

impl fmt::Display for District {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for District {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let normalized = trimmed.to_ascii_uppercase().replace(['-', ' '], "_");
        District::from_code(&normalized).ok_or_else(|| anyhow::anyhow!("Unknown district: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip_through_from_code() {
        for district in District::ALL {
            assert_eq!(District::from_code(district.code()), Some(district));
        }
    }

    #[test]
    fn multi_word_names_parse() {
        assert_eq!("Nuwara Eliya".parse::<District>().unwrap(), District::NuwaraEliya);
        assert_eq!(District::NuwaraEliya.code(), "NUWARA_ELIYA");
        assert_eq!(District::NuwaraEliya.province(), Province::Central);
    }

    #[test]
    fn western_districts_map_to_western_province() {
        for d in [District::Gampaha, District::Colombo, District::Kalutara] {
            assert_eq!(d.province(), Province::Western);
        }
    }
}
