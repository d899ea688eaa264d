//! # Sectorgen
//!
//! Procedural sector generation for the Traveller role-playing game.
//!
//! ## Architecture Overview
//!
//! Generation is a strictly forward pipeline. Every stage reads only what the
//! stages before it produced:
//!
//! - **Dice**: seeded random primitives (sums of d6, flux, coin tosses)
//! - **World Generation**: the Universal World Profile and stellar primary of
//!   a single system, rolled through ordered lookup tables
//! - **Classification**: declarative trade-code rules plus the zone,
//!   importance, economic, cultural and nobility extensions
//! - **Sector Assembly**: walks the hex grid, populates occupied hexes and
//!   names them through a pluggable [`NameProvider`]
//!
//! The finished [`Sector`] is plain data. Hosts can render it as
//! tab-separated rows (see [`export`]) or query it through the
//! [`StarCatalog`] trait.

pub mod catalog;
pub mod classification;
pub mod dice;
pub mod export;
pub mod generation;
pub mod names;
pub mod world;

// Core module re-exports
pub use catalog::*;
pub use classification::*;
pub use dice::*;
pub use generation::*;
pub use names::*;
pub use world::*;

/// Core error type for the sector generation engine.
#[derive(thiserror::Error, Debug)]
pub enum SectorgenError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// A ranged roll was requested with an empty or inverted range
    #[error("Invalid roll range: max must be greater than min ({min}, {max})")]
    InvalidRange { min: i32, max: i32 },

    /// A static table was indexed outside its declared bounds
    #[error("Table lookup out of bounds: {0}")]
    TableLookup(String),

    /// A UWP field was constructed outside its valid range
    #[error("Invalid {field} value {value}: must be within 0..={max}")]
    InvalidValue {
        field: &'static str,
        value: i32,
        max: u8,
    },

    /// A world's tech level is below what its atmosphere requires
    #[error("UWP {uwp}: tech level {tech} is below the environmental minimum {floor}")]
    TechBelowMinimum { uwp: String, tech: i32, floor: i32 },

    /// A UWP string could not be parsed
    #[error("Invalid UWP '{0}'")]
    InvalidUwp(String),

    /// A hex location string could not be parsed
    #[error("Invalid hex location '{0}'")]
    InvalidLocation(String),

    /// Two hexes of one sector share a location
    #[error("Duplicate hex location {0}")]
    DuplicateLocation(String),

    /// The name provider failed to supply a name
    #[error("Name provider error: {0}")]
    NameProvider(String),

    /// The name provider could not find an unused name within its retry budget
    #[error("Name provider exhausted after {attempts} attempts")]
    NamesExhausted { attempts: usize },

    /// Generation configuration is unusable
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A background generation task was cancelled or panicked
    #[error("Generation task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Result type used throughout the sectorgen codebase.
pub type SectorgenResult<T> = Result<T, SectorgenError>;

/// Version information for the engine.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Generation configuration constants.
pub mod config {
    /// Default sector width in hexes
    pub const DEFAULT_SECTOR_WIDTH: u32 = 32;

    /// Default sector height in hexes
    pub const DEFAULT_SECTOR_HEIGHT: u32 = 40;

    /// A hex holds a system when a d20 roll is below this value
    pub const DEFAULT_OCCUPANCY_THRESHOLD: i32 = 8;

    /// Allegiance code stamped on every generated world
    pub const DEFAULT_ALLEGIANCE: &str = "Gc";

    /// Draws a name provider may make before giving up on finding an unused name
    pub const DEFAULT_NAME_RETRY_BUDGET: usize = 1000;

    /// Names requested from a name source per batch
    pub const DEFAULT_NAME_BATCH_SIZE: usize = 10;
}
