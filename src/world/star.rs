//! # Stellar Classification
//!
//! Spectral type, numeral and luminosity class of a system's primary star.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Harvard spectral type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpectralType {
    O,
    B,
    A,
    F,
    G,
    K,
    M,
}

impl SpectralType {
    pub fn letter(self) -> char {
        match self {
            SpectralType::O => 'O',
            SpectralType::B => 'B',
            SpectralType::A => 'A',
            SpectralType::F => 'F',
            SpectralType::G => 'G',
            SpectralType::K => 'K',
            SpectralType::M => 'M',
        }
    }

    /// Luminosity column of this type within the stellar matrix.
    pub fn column(self) -> usize {
        match self {
            SpectralType::O => 1,
            SpectralType::B => 2,
            SpectralType::A => 3,
            SpectralType::F => 4,
            SpectralType::G => 5,
            SpectralType::K => 6,
            SpectralType::M => 7,
        }
    }
}

/// Luminosity class (size) of a star.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Luminosity {
    Ia,
    Ib,
    II,
    III,
    IV,
    V,
    VI,
    /// White dwarf
    D,
}

impl Luminosity {
    pub fn code(self) -> &'static str {
        match self {
            Luminosity::Ia => "Ia",
            Luminosity::Ib => "Ib",
            Luminosity::II => "II",
            Luminosity::III => "III",
            Luminosity::IV => "IV",
            Luminosity::V => "V",
            Luminosity::VI => "VI",
            Luminosity::D => "D",
        }
    }
}

impl fmt::Display for Luminosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A system's primary star.
///
/// # Examples
///
/// ```
/// use sectorgen::{Luminosity, SpectralType, Star};
///
/// let sol = Star::new(SpectralType::G, 2, Luminosity::V);
/// assert_eq!(sol.to_string(), "G2 V");
///
/// let dwarf = Star::new(SpectralType::M, 4, Luminosity::D);
/// assert_eq!(dwarf.to_string(), "D");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Star {
    pub spectral: SpectralType,
    /// Decimal subdivision, 0-9
    pub numeral: u8,
    pub luminosity: Luminosity,
}

impl Star {
    pub fn new(spectral: SpectralType, numeral: u8, luminosity: Luminosity) -> Self {
        Self {
            spectral,
            numeral,
            luminosity,
        }
    }

    pub fn is_dwarf(&self) -> bool {
        self.luminosity == Luminosity::D
    }
}

/// Renders the Stars column: `G2 V`, or `D`/`BD` for white dwarfs.
impl fmt::Display for Star {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_dwarf() {
            if self.spectral == SpectralType::B {
                f.write_str("BD")
            } else {
                f.write_str("D")
            }
        } else {
            write!(
                f,
                "{}{} {}",
                self.spectral.letter(),
                self.numeral,
                self.luminosity
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star_rendering() {
        assert_eq!(
            Star::new(SpectralType::K, 7, Luminosity::III).to_string(),
            "K7 III"
        );
        assert_eq!(Star::new(SpectralType::B, 0, Luminosity::D).to_string(), "BD");
        assert_eq!(Star::new(SpectralType::O, 3, Luminosity::Ia).to_string(), "O3 Ia");
    }

    #[test]
    fn test_columns_are_distinct() {
        let columns: Vec<usize> = [
            SpectralType::O,
            SpectralType::B,
            SpectralType::A,
            SpectralType::F,
            SpectralType::G,
            SpectralType::K,
            SpectralType::M,
        ]
        .iter()
        .map(|t| t.column())
        .collect();
        assert_eq!(columns, vec![1, 2, 3, 4, 5, 6, 7]);
    }
}
