//! # Attribute Tables
//!
//! Static lookup data for world and star generation. Tables indexed by a UWP
//! value are plain arrays; reading outside one is a table authoring defect
//! and surfaces as [`SectorgenError::TableLookup`].

use crate::world::{Base, Luminosity, SpectralType, Starport};
use crate::{SectorgenError, SectorgenResult};

/// Reads `table[index]`, reporting misses instead of panicking.
pub fn lookup<T: Copy>(table: &[T], index: i32, table_name: &str) -> SectorgenResult<T> {
    usize::try_from(index)
        .ok()
        .and_then(|i| table.get(i).copied())
        .ok_or_else(|| {
            SectorgenError::TableLookup(format!(
                "{} has no row {} (rows 0..{})",
                table_name,
                index,
                table.len()
            ))
        })
}

/// Starport roll modifier, indexed by population.
pub const STARPORT_POPULATION_DM: [i32; 16] = [-2, -2, -2, -1, -1, 0, 0, 0, 1, 1, 2, 2, 2, 2, 2, 2];

/// Starport quality for a modified 2d6 roll, checked in descending order.
pub const STARPORT_THRESHOLDS: [(i32, Starport); 5] = [
    (10, Starport::A),
    (8, Starport::B),
    (6, Starport::C),
    (4, Starport::D),
    (2, Starport::E),
];

/// Maps a modified starport roll to a starport class.
pub fn starport_for_roll(roll: i32) -> Starport {
    STARPORT_THRESHOLDS
        .iter()
        .find(|(threshold, _)| roll > *threshold)
        .map(|(_, starport)| *starport)
        .unwrap_or(Starport::X)
}

/// Surface temperature modifier, indexed by atmosphere.
pub const TEMPERATURE_ATMOSPHERE_DM: [i32; 16] = [0, 0, -2, -2, -1, -1, 0, 0, 1, 1, 2, 6, 6, 2, -1, 2];

/// Habitable zone roll above this warms the world.
pub const HOT_ZONE_ROLL: i32 = 9;
/// Habitable zone roll below this cools the world.
pub const COLD_ZONE_ROLL: i32 = 5;
pub const ZONE_TEMPERATURE_DM: i32 = 4;

/// Hydrographics modifier, indexed by atmosphere.
pub const HYDROGRAPHICS_ATMOSPHERE_DM: [i32; 16] = [-4, -4, 0, 0, 0, 0, 0, 0, 0, 0, -4, -4, -4, -4, -4, -4];

/// Temperatures above these dry out surface water.
pub const BOILING_TEMPERATURE: i32 = 11;
pub const HOT_TEMPERATURE: i32 = 9;

/// Tech level modifier by starport.
pub fn starport_tech_dm(starport: Starport) -> i32 {
    match starport {
        Starport::A => 6,
        Starport::B => 4,
        Starport::C => 2,
        Starport::D | Starport::E => 0,
        Starport::X => -4,
    }
}

/// Tech level modifier, indexed by size.
pub const SIZE_TECH_DM: [i32; 11] = [2, 2, 1, 1, 1, 0, 0, 0, 0, 0, 0];

/// Tech level modifier, indexed by atmosphere.
pub const ATMOSPHERE_TECH_DM: [i32; 16] = [1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1];

/// Tech level modifier, indexed by hydrographics.
pub const HYDROGRAPHICS_TECH_DM: [i32; 11] = [0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 2];

/// Tech level modifier, indexed by population.
pub const POPULATION_TECH_DM: [i32; 16] = [0, 1, 1, 1, 1, 1, 0, 0, 0, 2, 4, 4, 4, 4, 4, 4];

/// Tech level modifier, indexed by government.
pub const GOVERNMENT_TECH_DM: [i32; 14] = [1, 0, 0, 0, 0, 1, 0, 2, 0, 0, 0, 0, 0, -2];

/// Lowest tech level that can sustain a population, indexed by atmosphere.
pub const ENVIRONMENTAL_MINIMUM_TECH: [i32; 16] = [8, 8, 5, 5, 3, 0, 0, 3, 0, 3, 8, 9, 10, 5, 5, 8];

/// Base presence targets by starport: a base exists when 2d6 rolls below its target.
pub fn base_targets(starport: Starport) -> &'static [(Base, i32)] {
    match starport {
        Starport::A => &[(Base::Naval, 7), (Base::Scout, 5)],
        Starport::B => &[(Base::Naval, 6), (Base::Scout, 6)],
        Starport::C => &[(Base::Scout, 7)],
        Starport::D => &[(Base::Scout, 8)],
        Starport::E | Starport::X => &[],
    }
}

/// Spectral type cell of the stellar matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpectralRoll {
    Type(SpectralType),
    /// Either O or B, decided by a coin toss
    OorB,
}

/// One row of the stellar matrix: the spectral type in the first column,
/// followed by luminosity columns for O, B, A, F, G, K and M.
#[derive(Debug, Clone, Copy)]
pub struct StellarRow {
    pub spectral: SpectralRoll,
    pub luminosity: [Luminosity; 7],
}

use Luminosity::{Ia, Ib, D, II, III, IV, V, VI};

const fn row(spectral: SpectralRoll, luminosity: [Luminosity; 7]) -> StellarRow {
    StellarRow {
        spectral,
        luminosity,
    }
}

const fn typed(spectral: SpectralType) -> SpectralRoll {
    SpectralRoll::Type(spectral)
}

/// Stellar matrix, indexed by `flux + 6`.
pub const STELLAR_MATRIX: [StellarRow; 13] = [
    row(typed(SpectralType::O), [Ia, Ia, Ia, II, II, II, II]),
    row(SpectralRoll::OorB, [Ia, Ia, Ia, II, II, II, II]),
    row(typed(SpectralType::A), [Ia, Ia, Ia, II, II, II, II]),
    row(typed(SpectralType::A), [Ib, Ib, Ib, III, III, III, II]),
    row(typed(SpectralType::F), [II, II, II, IV, IV, IV, II]),
    row(typed(SpectralType::F), [III, III, III, V, V, V, III]),
    row(typed(SpectralType::G), [III, III, V, V, V, V, V]),
    row(typed(SpectralType::K), [V, III, V, V, V, V, V]),
    row(typed(SpectralType::K), [V, V, V, V, V, V, V]),
    row(typed(SpectralType::M), [V, V, V, V, V, V, V]),
    row(typed(SpectralType::M), [IV, IV, V, VI, VI, VI, VI]),
    row(typed(SpectralType::M), [D, D, D, D, D, D, D]),
    row(typed(SpectralType::M), [D, D, D, D, D, D, D]),
];

/// Offset from flux to stellar matrix row.
pub const STELLAR_ROW_OFFSET: i32 = 6;

/// Habitable zone roll modifier by spectral type.
pub fn hz_spectral_dm(spectral: SpectralType) -> i32 {
    match spectral {
        SpectralType::M => 2,
        SpectralType::O | SpectralType::B => -2,
        _ => 0,
    }
}

/// Habitable zone variance for a modified flux roll.
pub fn hz_variance_for_roll(roll: i32) -> i8 {
    match roll {
        r if r < -5 => -2,
        -5..=-3 => -1,
        3..=5 => 1,
        r if r > 5 => 2,
        _ => 0,
    }
}
