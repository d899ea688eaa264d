//! # World Module
//!
//! Plain data produced by generation: hex coordinates, UWPs, stars, bases,
//! and the assembled [`Hex`] and [`Sector`] records.

pub mod star;
pub mod uwp;

pub use star::*;
pub use uwp::*;

use crate::classification::{CulturalExtension, EconomicExtension, NobleTitle, TradeCode, Zone};
use crate::generation::Pbg;
use crate::{SectorgenError, SectorgenResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Column/row coordinate of a hex within a sector, rendered `XXYY`.
///
/// # Examples
///
/// ```
/// use sectorgen::Location;
///
/// let loc = Location::new(3, 17);
/// assert_eq!(loc.to_string(), "0317");
/// assert_eq!("0317".parse::<Location>().unwrap(), loc);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Location {
    pub x: u8,
    pub y: u8,
}

impl Location {
    pub fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Number of jumps between two hexes on the sector grid.
    ///
    /// Even columns sit half a hex lower than odd ones.
    pub fn distance(self, other: Location) -> u32 {
        let (ax, ay, az) = self.cube();
        let (bx, by, bz) = other.cube();
        ((ax - bx).abs().max((ay - by).abs()).max((az - bz).abs())) as u32
    }

    fn cube(self) -> (i32, i32, i32) {
        let col = i32::from(self.x);
        let row = i32::from(self.y);
        let z = row - (col + (col & 1)) / 2;
        (col, -col - z, z)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}{:02}", self.x, self.y)
    }
}

impl FromStr for Location {
    type Err = SectorgenError;

    fn from_str(s: &str) -> SectorgenResult<Self> {
        let invalid = || SectorgenError::InvalidLocation(s.to_string());
        if s.len() != 4 || !s.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }
        let x = s[..2].parse().map_err(|_| invalid())?;
        let y = s[2..].parse().map_err(|_| invalid())?;
        Ok(Self::new(x, y))
    }
}

impl TryFrom<String> for Location {
    type Error = SectorgenError;

    fn try_from(value: String) -> SectorgenResult<Self> {
        value.parse()
    }
}

impl From<Location> for String {
    fn from(value: Location) -> String {
        value.to_string()
    }
}

/// Installations that may be present in a system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Base {
    Naval,
    NavalDepot,
    Scout,
    WayStation,
    Military,
    Scientific,
    Diplomatic,
    Cultural,
}

impl Base {
    pub fn code(self) -> char {
        match self {
            Base::Naval => 'N',
            Base::NavalDepot => 'D',
            Base::Scout => 'S',
            Base::WayStation => 'W',
            Base::Military => 'M',
            Base::Scientific => 'E',
            Base::Diplomatic => 'P',
            Base::Cultural => 'C',
        }
    }
}

/// Ordered set of bases, rendered as concatenated codes (e.g. `NS`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bases(Vec<Base>);

impl Bases {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a base, ignoring duplicates.
    pub fn insert(&mut self, base: Base) {
        if !self.0.contains(&base) {
            self.0.push(base);
        }
    }

    pub fn contains(&self, base: Base) -> bool {
        self.0.contains(&base)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Base> {
        self.0.iter()
    }
}

impl FromIterator<Base> for Bases {
    fn from_iter<I: IntoIterator<Item = Base>>(iter: I) -> Self {
        let mut bases = Bases::new();
        for base in iter {
            bases.insert(base);
        }
        bases
    }
}

impl fmt::Display for Bases {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for base in &self.0 {
            write!(f, "{}", base.code())?;
        }
        Ok(())
    }
}

/// The physical and social profile of a single system before classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldProfile {
    pub uwp: Uwp,
    pub bases: Bases,
    pub primary: Star,
    /// Orbit position relative to the habitable zone, -2..=2
    pub hz_var: i8,
}

/// A populated hex: one main world and everything derived from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hex {
    pub location: Location,
    pub name: String,
    pub uwp: Uwp,
    pub bases: Bases,
    pub primary: Star,
    pub hz_var: i8,
    pub zone: Zone,
    pub trade_codes: Vec<TradeCode>,
    pub importance: i32,
    pub economic: EconomicExtension,
    pub cultural: CulturalExtension,
    pub nobility: Vec<NobleTitle>,
    pub pbg: Pbg,
    pub worlds: u8,
    pub allegiance: String,
}

impl Hex {
    pub fn has_trade_code(&self, code: TradeCode) -> bool {
        self.trade_codes.contains(&code)
    }

    /// Space-separated trade code remarks (e.g. `Ag Ni Ga`).
    pub fn remarks(&self) -> String {
        self.trade_codes
            .iter()
            .map(|code| code.code())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// A named collection of hexes with unique locations.
///
/// Sectors are built in one pass and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sector {
    name: String,
    hexes: Vec<Hex>,
}

impl Sector {
    /// Assembles a sector, rejecting duplicate hex locations.
    pub fn new(name: String, hexes: Vec<Hex>) -> SectorgenResult<Self> {
        let mut seen = HashSet::new();
        for hex in &hexes {
            if !seen.insert(hex.location) {
                return Err(SectorgenError::DuplicateLocation(hex.location.to_string()));
            }
        }
        Ok(Self { name, hexes })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hexes(&self) -> &[Hex] {
        &self.hexes
    }

    pub fn len(&self) -> usize {
        self.hexes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hexes.is_empty()
    }

    /// Serializes the sector as pretty-printed JSON.
    pub fn to_json(&self) -> SectorgenResult<String> {
        serde_json::to_string_pretty(self).map_err(SectorgenError::from)
    }

    /// Deserializes a sector from JSON, re-checking location uniqueness.
    pub fn from_json(json: &str) -> SectorgenResult<Self> {
        let sector: Sector = serde_json::from_str(json)?;
        Sector::new(sector.name, sector.hexes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_formatting() {
        assert_eq!(Location::new(1, 1).to_string(), "0101");
        assert_eq!(Location::new(32, 40).to_string(), "3240");
        assert!("32a0".parse::<Location>().is_err());
        assert!("101".parse::<Location>().is_err());
    }

    #[test]
    fn test_location_distance() {
        let origin = Location::new(1, 1);
        assert_eq!(origin.distance(origin), 0);
        assert_eq!(origin.distance(Location::new(1, 2)), 1);
        assert_eq!(origin.distance(Location::new(2, 1)), 1);
        assert_eq!(origin.distance(Location::new(2, 2)), 2);
        assert_eq!(Location::new(2, 1).distance(Location::new(1, 2)), 1);
        assert_eq!(Location::new(2, 1).distance(Location::new(3, 2)), 1);
        assert_eq!(origin.distance(Location::new(5, 1)), 4);
    }

    #[test]
    fn test_bases_ignore_duplicates() {
        let bases: Bases = vec![Base::Naval, Base::Scout, Base::Naval].into_iter().collect();
        assert_eq!(bases.to_string(), "NS");
        assert!(bases.contains(Base::Scout));
        assert!(!bases.contains(Base::WayStation));
        assert!(Bases::new().is_empty());
    }

    #[test]
    fn test_location_serde_as_string() {
        let json = serde_json::to_string(&Location::new(4, 9)).unwrap();
        assert_eq!(json, "\"0409\"");
    }
}
