//! # Universal World Profile
//!
//! Range-checked value types for every UWP field and the encoded
//! `A867996-C` string form.

use crate::dice::apply_range;
use crate::{SectorgenError, SectorgenResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Encodes a digit as an uppercase base-36 ("extended hex") character.
pub fn ehex(value: u8) -> char {
    std::char::from_digit(u32::from(value), 36)
        .map(|c| c.to_ascii_uppercase())
        .unwrap_or('?')
}

/// Decodes an extended hex character.
pub fn decode_ehex(code: char) -> Option<u8> {
    code.to_digit(36).map(|d| d as u8)
}

macro_rules! uwp_digit {
    ($(#[$meta:meta])* $name:ident, $label:literal, $max:expr) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(try_from = "u8", into = "u8")]
        pub struct $name(u8);

        impl $name {
            /// Largest valid value.
            pub const MAX: u8 = $max;

            /// Creates a value, rejecting anything outside `0..=MAX`.
            pub fn new(value: i32) -> SectorgenResult<Self> {
                if (0..=i32::from(Self::MAX)).contains(&value) {
                    Ok(Self(value as u8))
                } else {
                    Err(SectorgenError::InvalidValue {
                        field: $label,
                        value,
                        max: Self::MAX,
                    })
                }
            }

            /// Creates a value, clamping into `0..=MAX`.
            pub fn clamped(value: i32) -> Self {
                Self(apply_range(value, 0, i32::from(Self::MAX)) as u8)
            }

            /// Numeric value.
            pub fn value(self) -> i32 {
                i32::from(self.0)
            }

            /// Extended hex digit.
            pub fn code(self) -> char {
                ehex(self.0)
            }
        }

        impl TryFrom<u8> for $name {
            type Error = SectorgenError;

            fn try_from(value: u8) -> SectorgenResult<Self> {
                Self::new(i32::from(value))
            }
        }

        impl From<$name> for u8 {
            fn from(value: $name) -> u8 {
                value.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.code())
            }
        }
    };
}

uwp_digit!(
    /// Planetary diameter in thousands of miles (0 = asteroid belt).
    Size,
    "size",
    10
);
uwp_digit!(
    /// Atmosphere composition and density.
    Atmosphere,
    "atmosphere",
    15
);
uwp_digit!(
    /// Surface liquid coverage in tenths.
    Hydrographics,
    "hydrographics",
    10
);
uwp_digit!(
    /// Population exponent.
    Population,
    "population",
    15
);
uwp_digit!(
    /// Government type.
    Government,
    "government",
    13
);
uwp_digit!(
    /// Law level.
    LawLevel,
    "law level",
    9
);
uwp_digit!(
    /// Technology level.
    TechLevel,
    "tech level",
    15
);

/// Starport quality, best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Starport {
    A,
    B,
    C,
    D,
    E,
    X,
}

impl Starport {
    /// Single-letter code.
    pub fn code(self) -> char {
        match self {
            Starport::A => 'A',
            Starport::B => 'B',
            Starport::C => 'C',
            Starport::D => 'D',
            Starport::E => 'E',
            Starport::X => 'X',
        }
    }

    /// Parses a single-letter code.
    pub fn from_code(code: char) -> Option<Self> {
        match code.to_ascii_uppercase() {
            'A' => Some(Starport::A),
            'B' => Some(Starport::B),
            'C' => Some(Starport::C),
            'D' => Some(Starport::D),
            'E' => Some(Starport::E),
            'X' => Some(Starport::X),
            _ => None,
        }
    }
}

impl fmt::Display for Starport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Addressable positions within a UWP.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UwpField {
    Starport,
    Size,
    Atmosphere,
    Hydrographics,
    Population,
    Government,
    Law,
    TechLevel,
}

/// A complete Universal World Profile.
///
/// # Examples
///
/// ```
/// use sectorgen::{Uwp, Starport};
///
/// let uwp: Uwp = "A867996-C".parse().unwrap();
/// assert_eq!(uwp.starport, Starport::A);
/// assert_eq!(uwp.population.value(), 9);
/// assert_eq!(uwp.to_string(), "A867996-C");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Uwp {
    pub starport: Starport,
    pub size: Size,
    pub atmosphere: Atmosphere,
    pub hydrographics: Hydrographics,
    pub population: Population,
    pub government: Government,
    pub law: LawLevel,
    pub tech: TechLevel,
}

impl Uwp {
    /// Returns the encoded character at `field`.
    pub fn code_at(&self, field: UwpField) -> char {
        match field {
            UwpField::Starport => self.starport.code(),
            UwpField::Size => self.size.code(),
            UwpField::Atmosphere => self.atmosphere.code(),
            UwpField::Hydrographics => self.hydrographics.code(),
            UwpField::Population => self.population.code(),
            UwpField::Government => self.government.code(),
            UwpField::Law => self.law.code(),
            UwpField::TechLevel => self.tech.code(),
        }
    }

    /// Government plus law level.
    pub fn oppression(&self) -> i32 {
        self.government.value() + self.law.value()
    }

    /// Whether the world has no permanent population.
    pub fn is_unpopulated(&self) -> bool {
        self.population.value() == 0
    }
}

impl fmt::Display for Uwp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}{}{}{}{}-{}",
            self.starport,
            self.size,
            self.atmosphere,
            self.hydrographics,
            self.population,
            self.government,
            self.law,
            self.tech
        )
    }
}

impl FromStr for Uwp {
    type Err = SectorgenError;

    fn from_str(s: &str) -> SectorgenResult<Self> {
        let invalid = || SectorgenError::InvalidUwp(s.to_string());
        let chars: Vec<char> = s.trim().chars().collect();
        if chars.len() != 9 || chars[7] != '-' {
            return Err(invalid());
        }

        let digit = |index: usize| -> SectorgenResult<i32> {
            decode_ehex(chars[index])
                .map(i32::from)
                .ok_or_else(invalid)
        };

        Ok(Self {
            starport: Starport::from_code(chars[0]).ok_or_else(invalid)?,
            size: Size::new(digit(1)?)?,
            atmosphere: Atmosphere::new(digit(2)?)?,
            hydrographics: Hydrographics::new(digit(3)?)?,
            population: Population::new(digit(4)?)?,
            government: Government::new(digit(5)?)?,
            law: LawLevel::new(digit(6)?)?,
            tech: TechLevel::new(digit(8)?)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Uwp {
        Uwp {
            starport: Starport::A,
            size: Size::new(8).unwrap(),
            atmosphere: Atmosphere::new(6).unwrap(),
            hydrographics: Hydrographics::new(7).unwrap(),
            population: Population::new(9).unwrap(),
            government: Government::new(9).unwrap(),
            law: LawLevel::new(6).unwrap(),
            tech: TechLevel::new(12).unwrap(),
        }
    }

    #[test]
    fn test_uwp_encoding() {
        assert_eq!(sample().to_string(), "A867996-C");
    }

    #[test]
    fn test_uwp_parse_matches_encoding() {
        let parsed: Uwp = "A867996-C".parse().unwrap();
        assert_eq!(parsed, sample());

        let extended: Uwp = "BAF9FD9-F".parse().unwrap();
        assert_eq!(extended.size.value(), 10);
        assert_eq!(extended.atmosphere.value(), 15);
        assert_eq!(extended.government.value(), 13);
        assert_eq!(extended.to_string(), "BAF9FD9-F");
    }

    #[test]
    fn test_uwp_parse_rejects_garbage() {
        assert!("A867996C".parse::<Uwp>().is_err());
        assert!("Q867996-C".parse::<Uwp>().is_err());
        // Law level cannot exceed 9
        assert!("A8679AA-C".parse::<Uwp>().is_err());
        assert!("".parse::<Uwp>().is_err());
    }

    #[test]
    fn test_digit_validation() {
        assert!(Size::new(10).is_ok());
        assert!(Size::new(11).is_err());
        assert!(Government::new(-1).is_err());
        assert!(matches!(
            LawLevel::new(10),
            Err(SectorgenError::InvalidValue { field: "law level", value: 10, max: 9 })
        ));
    }

    #[test]
    fn test_digit_clamping() {
        assert_eq!(Atmosphere::clamped(-4).value(), 0);
        assert_eq!(Atmosphere::clamped(19).value(), 15);
        assert_eq!(Hydrographics::clamped(7).value(), 7);
    }

    #[test]
    fn test_ehex() {
        assert_eq!(ehex(0), '0');
        assert_eq!(ehex(9), '9');
        assert_eq!(ehex(10), 'A');
        assert_eq!(ehex(15), 'F');
        assert_eq!(decode_ehex('c'), Some(12));
        assert_eq!(decode_ehex('-'), None);
    }

    #[test]
    fn test_oppression() {
        assert_eq!(sample().oppression(), 15);
        assert!(!sample().is_unpopulated());
    }

    #[test]
    fn test_digit_serde_rejects_out_of_range() {
        let json = serde_json::to_string(&sample()).unwrap();
        let back: Uwp = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sample());

        assert!(serde_json::from_str::<LawLevel>("12").is_err());
    }
}
