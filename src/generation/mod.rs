//! # Generation Module
//!
//! Procedural generation of worlds, stars and whole sectors.
//!
//! This module provides the rolling half of the engine: static tables, the
//! single-world generator, stellar generation and the sector assembler that
//! walks the hex grid. Classification of rolled worlds lives in
//! [`crate::classification`].

pub mod sector;
pub mod stellar;
pub mod tables;
pub mod world;

pub use sector::*;
pub use world::*;

use crate::config;
use crate::dice::Dice;
use crate::names::{NameProvider, SyllableNames, UniqueNames};
use crate::world::{Location, Sector};
use crate::{SectorgenError, SectorgenResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Configuration for sector generation.
///
/// Controls the grid size, how densely it is populated, and how names are
/// drawn. Leaving `seed` unset rolls a fresh sector every run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Random seed for reproducible generation
    pub seed: Option<u64>,
    /// Number of hex columns
    pub width: u32,
    /// Number of hex rows
    pub height: u32,
    /// A hex is occupied when `1d20` rolls below this value
    pub occupancy_threshold: i32,
    /// Allegiance code stamped on every world
    pub allegiance: String,
    /// Draws allowed while looking for an unused name
    pub name_retry_budget: usize,
    /// Names fetched from the name source per request
    pub name_batch_size: usize,
}

impl GenerationConfig {
    /// Creates a configuration for a standard 32x40 sector.
    ///
    /// # Examples
    ///
    /// ```
    /// use sectorgen::GenerationConfig;
    ///
    /// let config = GenerationConfig::new(Some(42));
    /// assert_eq!(config.width, 32);
    /// assert_eq!(config.height, 40);
    /// assert!(config.validate().is_ok());
    /// ```
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            seed,
            width: config::DEFAULT_SECTOR_WIDTH,
            height: config::DEFAULT_SECTOR_HEIGHT,
            occupancy_threshold: config::DEFAULT_OCCUPANCY_THRESHOLD,
            allegiance: config::DEFAULT_ALLEGIANCE.to_string(),
            name_retry_budget: config::DEFAULT_NAME_RETRY_BUDGET,
            name_batch_size: config::DEFAULT_NAME_BATCH_SIZE,
        }
    }

    /// Creates a seeded configuration for a single 8x10 subsector.
    pub fn for_testing(seed: u64) -> Self {
        Self {
            width: 8,
            height: 10,
            ..Self::new(Some(seed))
        }
    }

    /// Loads a configuration from a JSON file. Missing fields take defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> SectorgenResult<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: GenerationConfig = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the grid fits four-digit locations and the other limits hold.
    pub fn validate(&self) -> SectorgenResult<()> {
        if !(1..=99).contains(&self.width) || !(1..=99).contains(&self.height) {
            return Err(SectorgenError::InvalidConfig(format!(
                "grid {}x{} must be between 1x1 and 99x99",
                self.width, self.height
            )));
        }
        if !(1..=21).contains(&self.occupancy_threshold) {
            return Err(SectorgenError::InvalidConfig(format!(
                "occupancy threshold {} must be within 1..=21",
                self.occupancy_threshold
            )));
        }
        if self.name_retry_budget == 0 || self.name_batch_size == 0 {
            return Err(SectorgenError::InvalidConfig(
                "name retry budget and batch size must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::new(None)
    }
}

/// Per-run state: the random source and the name provider.
///
/// Each generation run owns one context, so concurrent runs never share dice
/// or issued-name sets.
pub struct GenerationContext {
    pub dice: Dice,
    pub names: Box<dyn NameProvider + Send>,
}

impl GenerationContext {
    pub fn new(dice: Dice, names: Box<dyn NameProvider + Send>) -> Self {
        Self { dice, names }
    }

    /// Context with dice and syllable names both derived from the config.
    pub fn from_config(config: &GenerationConfig) -> Self {
        Self::new(
            utils::create_dice(config),
            Box::new(utils::default_names(config)),
        )
    }

    /// Seeded context for tests.
    pub fn for_testing(seed: u64) -> Self {
        Self::from_config(&GenerationConfig::for_testing(seed))
    }
}

/// Trait for procedural generators.
///
/// All generation systems implement this trait so hosts can drive them
/// uniformly and check their output.
pub trait Generator<T> {
    /// Generates content using the provided configuration and context.
    fn generate(&self, config: &GenerationConfig, ctx: &mut GenerationContext) -> SectorgenResult<T>;

    /// Validates that the generated content meets requirements.
    fn validate(&self, content: &T, config: &GenerationConfig) -> SectorgenResult<()>;

    /// Gets the generator type name for logging and debugging.
    fn generator_type(&self) -> &'static str;
}

/// Utility functions for generation.
pub mod utils {
    use super::*;

    /// Offset applied to the configured seed for the name stream, so names
    /// and dice do not move in lockstep.
    const NAME_SEED_OFFSET: u64 = 0x9e37_79b9_7f4a_7c15;

    /// Creates dice from the configured seed, or from entropy.
    pub fn create_dice(config: &GenerationConfig) -> Dice {
        Dice::from_seed(config.seed)
    }

    /// Creates the bundled offline name provider for a config.
    pub fn default_names(config: &GenerationConfig) -> UniqueNames<SyllableNames> {
        let source = match config.seed {
            Some(seed) => SyllableNames::seeded(seed ^ NAME_SEED_OFFSET),
            None => SyllableNames::from_entropy(),
        };
        UniqueNames::new(source, config.name_batch_size, config.name_retry_budget)
    }

    /// Location of grid cell `(x, y)`.
    pub fn location_code(x: u32, y: u32) -> SectorgenResult<Location> {
        let x = u8::try_from(x).map_err(|_| SectorgenError::InvalidLocation(format!("column {}", x)))?;
        let y = u8::try_from(y).map_err(|_| SectorgenError::InvalidLocation(format!("row {}", y)))?;
        if x > 99 || y > 99 {
            return Err(SectorgenError::InvalidLocation(format!("{}/{}", x, y)));
        }
        Ok(Location::new(x, y))
    }

    /// Validates that a sector fits its grid and has distinct, named hexes.
    pub fn validate_sector(sector: &Sector, config: &GenerationConfig) -> SectorgenResult<()> {
        if sector.name().is_empty() {
            return Err(SectorgenError::NameProvider("sector has no name".to_string()));
        }

        let mut names = HashSet::new();
        for hex in sector.hexes() {
            let loc = hex.location;
            if loc.x == 0
                || loc.y == 0
                || u32::from(loc.x) > config.width
                || u32::from(loc.y) > config.height
            {
                return Err(SectorgenError::InvalidLocation(loc.to_string()));
            }
            if hex.name.is_empty() || !names.insert(hex.name.as_str()) {
                return Err(SectorgenError::NameProvider(format!(
                    "hex {} has a missing or repeated name '{}'",
                    loc, hex.name
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_config_creation() {
        let config = GenerationConfig::new(Some(12345));
        assert_eq!(config.seed, Some(12345));
        assert_eq!(config.occupancy_threshold, 8);
        assert_eq!(config.allegiance, "Gc");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = GenerationConfig::for_testing(1);
        config.width = 100;
        assert!(config.validate().is_err());

        let mut config = GenerationConfig::for_testing(1);
        config.occupancy_threshold = 0;
        assert!(config.validate().is_err());

        let mut config = GenerationConfig::for_testing(1);
        config.name_retry_budget = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_json_defaults() {
        let config: GenerationConfig = serde_json::from_str(r#"{"width": 16, "seed": 9}"#).unwrap();
        assert_eq!(config.width, 16);
        assert_eq!(config.height, 40);
        assert_eq!(config.seed, Some(9));
    }

    #[test]
    fn test_config_from_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sector.json");
        std::fs::write(&path, r#"{"width": 4, "height": 4, "occupancy_threshold": 21}"#).unwrap();

        let config = GenerationConfig::from_json_file(&path).unwrap();
        assert_eq!(config.width, 4);
        assert_eq!(config.occupancy_threshold, 21);

        std::fs::write(&path, r#"{"width": 0}"#).unwrap();
        assert!(GenerationConfig::from_json_file(&path).is_err());
    }

    #[test]
    fn test_utils_location_code() {
        assert_eq!(utils::location_code(1, 1).unwrap().to_string(), "0101");
        assert_eq!(utils::location_code(32, 40).unwrap().to_string(), "3240");
        assert!(utils::location_code(100, 1).is_err());
    }

    #[test]
    fn test_utils_dice_follow_seed() {
        let config = GenerationConfig::for_testing(12345);
        let mut a = utils::create_dice(&config);
        let mut b = utils::create_dice(&config);
        assert_eq!(a.roll_sum(10), b.roll_sum(10));
    }
}
