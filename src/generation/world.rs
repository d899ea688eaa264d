//! # World Generation
//!
//! Rolls the Universal World Profile of a single main world.
//!
//! Each attribute is derived from the ones before it, so the order of the
//! steps in [`WorldGenerator::roll_profile`] is fixed: population, starport,
//! size, atmosphere, temperature, hydrographics, government, law, tech level,
//! bases, then the primary star and habitable zone variance.

use super::stellar;
use super::tables::{
    base_targets, lookup, starport_for_roll, starport_tech_dm, ATMOSPHERE_TECH_DM,
    BOILING_TEMPERATURE, COLD_ZONE_ROLL, ENVIRONMENTAL_MINIMUM_TECH, GOVERNMENT_TECH_DM,
    HOT_TEMPERATURE, HOT_ZONE_ROLL, HYDROGRAPHICS_ATMOSPHERE_DM, HYDROGRAPHICS_TECH_DM,
    POPULATION_TECH_DM, SIZE_TECH_DM, STARPORT_POPULATION_DM, TEMPERATURE_ATMOSPHERE_DM,
    ZONE_TEMPERATURE_DM,
};
use super::{GenerationConfig, GenerationContext, Generator};
use crate::dice::Dice;
use crate::world::{
    Atmosphere, Bases, Government, Hydrographics, LawLevel, Population, Size, Starport,
    TechLevel, Uwp, WorldProfile,
};
use crate::{SectorgenError, SectorgenResult};
use log::trace;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Population rolls that land here are rerolled as exceptionally populated.
const EXCEPTIONAL_POPULATION_ROLL: i32 = 10;

/// Atmosphere whose dense layers keep surface water regardless of heat.
const DENSE_ATMOSPHERE: i32 = 0xD;

/// Generator for a single main world's profile.
#[derive(Debug, Clone, Default)]
pub struct WorldGenerator;

impl WorldGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Population, boosted to `2d6+3` when the base roll is exactly 10.
    pub fn population(&self, dice: &mut Dice) -> Population {
        let roll = dice.roll_sum(2) - 2;
        if roll == EXCEPTIONAL_POPULATION_ROLL {
            return Population::clamped(dice.roll_sum(2) + 3);
        }
        Population::clamped(roll)
    }

    pub fn starport(&self, dice: &mut Dice, population: Population) -> SectorgenResult<Starport> {
        let dm = lookup(&STARPORT_POPULATION_DM, population.value(), "starport population DM")?;
        Ok(starport_for_roll(dice.roll_sum(2) + dm))
    }

    pub fn size(&self, dice: &mut Dice) -> Size {
        Size::clamped(dice.roll_sum(2) - 2)
    }

    pub fn atmosphere(&self, dice: &mut Dice, size: Size) -> Atmosphere {
        Atmosphere::clamped(dice.roll_sum(2) - 7 + size.value())
    }

    /// Scratch surface temperature used only to adjust hydrographics.
    pub fn surface_temperature(&self, dice: &mut Dice, atmosphere: Atmosphere) -> SectorgenResult<i32> {
        let mut dm = lookup(&TEMPERATURE_ATMOSPHERE_DM, atmosphere.value(), "temperature DM")?;

        let zone_roll = dice.roll_sum(2);
        if zone_roll > HOT_ZONE_ROLL {
            dm += ZONE_TEMPERATURE_DM;
        } else if zone_roll < COLD_ZONE_ROLL {
            dm -= ZONE_TEMPERATURE_DM;
        }

        Ok(dice.roll_sum(2) + dm)
    }

    pub fn hydrographics(
        &self,
        dice: &mut Dice,
        size: Size,
        atmosphere: Atmosphere,
        temperature: i32,
    ) -> SectorgenResult<Hydrographics> {
        if size.value() < 2 {
            return Ok(Hydrographics::default());
        }

        let mut dm = lookup(&HYDROGRAPHICS_ATMOSPHERE_DM, atmosphere.value(), "hydrographics DM")?;
        if atmosphere.value() != DENSE_ATMOSPHERE {
            if temperature > BOILING_TEMPERATURE {
                dm -= 4;
            } else if temperature > HOT_TEMPERATURE {
                dm -= 2;
            }
        }

        Ok(Hydrographics::clamped(dice.roll_sum(2) - 7 + dm))
    }

    /// Government; unpopulated worlds have none and roll nothing.
    pub fn government(&self, dice: &mut Dice, population: Population) -> Government {
        if population.value() == 0 {
            return Government::default();
        }
        Government::clamped(dice.roll_sum(2) - 7 + population.value())
    }

    /// Law level; unpopulated worlds have none and roll nothing.
    pub fn law_level(&self, dice: &mut Dice, population: Population, government: Government) -> LawLevel {
        if population.value() == 0 {
            return LawLevel::default();
        }
        LawLevel::clamped(dice.roll_sum(2) - 7 + government.value())
    }

    /// Lowest tech level a world with this atmosphere can support.
    pub fn environmental_minimum(&self, atmosphere: Atmosphere) -> SectorgenResult<i32> {
        lookup(&ENVIRONMENTAL_MINIMUM_TECH, atmosphere.value(), "environmental minimum")
    }

    #[allow(clippy::too_many_arguments)]
    pub fn tech_level(
        &self,
        dice: &mut Dice,
        starport: Starport,
        size: Size,
        atmosphere: Atmosphere,
        hydrographics: Hydrographics,
        population: Population,
        government: Government,
    ) -> SectorgenResult<TechLevel> {
        let dm = starport_tech_dm(starport)
            + lookup(&SIZE_TECH_DM, size.value(), "size tech DM")?
            + lookup(&ATMOSPHERE_TECH_DM, atmosphere.value(), "atmosphere tech DM")?
            + lookup(&HYDROGRAPHICS_TECH_DM, hydrographics.value(), "hydrographics tech DM")?
            + lookup(&POPULATION_TECH_DM, population.value(), "population tech DM")?
            + lookup(&GOVERNMENT_TECH_DM, government.value(), "government tech DM")?;

        let floor = self.environmental_minimum(atmosphere)?;
        let roll = dice.roll_sum(1) + dm;

        Ok(TechLevel::clamped(roll.max(floor)))
    }

    /// Naval and scout bases, depending on starport quality.
    pub fn bases(&self, dice: &mut Dice, starport: Starport) -> Bases {
        base_targets(starport)
            .iter()
            .filter_map(|&(base, target)| (dice.roll_sum(2) < target).then_some(base))
            .collect()
    }

    /// Rolls the full profile in dependency order.
    pub fn roll_profile(&self, dice: &mut Dice) -> SectorgenResult<WorldProfile> {
        let population = self.population(dice);
        let starport = self.starport(dice, population)?;
        let size = self.size(dice);
        let atmosphere = self.atmosphere(dice, size);
        let temperature = self.surface_temperature(dice, atmosphere)?;
        let hydrographics = self.hydrographics(dice, size, atmosphere, temperature)?;
        let government = self.government(dice, population);
        let law = self.law_level(dice, population, government);
        let tech = self.tech_level(
            dice,
            starport,
            size,
            atmosphere,
            hydrographics,
            population,
            government,
        )?;

        let uwp = Uwp {
            starport,
            size,
            atmosphere,
            hydrographics,
            population,
            government,
            law,
            tech,
        };
        trace!("Rolled UWP {} (temperature {})", uwp, temperature);

        let bases = self.bases(dice, starport);
        let primary = stellar::primary(dice)?;
        let hz_var = stellar::hz_variance(dice, &primary);

        Ok(WorldProfile {
            uwp,
            bases,
            primary,
            hz_var,
        })
    }

    /// Rolls population multiplier, planetoid belts and gas giants.
    pub fn pbg(&self, dice: &mut Dice, uwp: &Uwp) -> SectorgenResult<Pbg> {
        let population_multiplier = if uwp.is_unpopulated() {
            0
        } else {
            dice.roll_range(1, 9)? as u8
        };
        let belts = (dice.roll_sum(1) - 3).max(0) as u8;
        let gas_giants = (dice.roll_sum(2) / 2 - 2).max(0) as u8;

        Ok(Pbg {
            population_multiplier,
            belts,
            gas_giants,
        })
    }

    /// Total worlds in the system, main world included.
    pub fn worlds(&self, dice: &mut Dice, pbg: &Pbg) -> u8 {
        (1 + i32::from(pbg.gas_giants) + i32::from(pbg.belts) + dice.roll_sum(2)) as u8
    }
}

impl Generator<WorldProfile> for WorldGenerator {
    fn generate(&self, _config: &GenerationConfig, ctx: &mut GenerationContext) -> SectorgenResult<WorldProfile> {
        self.roll_profile(&mut ctx.dice)
    }

    fn validate(&self, profile: &WorldProfile, _config: &GenerationConfig) -> SectorgenResult<()> {
        let uwp = &profile.uwp;
        let floor = self.environmental_minimum(uwp.atmosphere)?;
        if uwp.tech.value() < floor {
            return Err(SectorgenError::TechBelowMinimum {
                uwp: uwp.to_string(),
                tech: uwp.tech.value(),
                floor,
            });
        }
        if uwp.is_unpopulated() && (uwp.government.value() != 0 || uwp.law.value() != 0) {
            return Err(SectorgenError::InvalidUwp(uwp.to_string()));
        }
        if !(-2..=2).contains(&profile.hz_var) {
            return Err(SectorgenError::InvalidValue {
                field: "hz variance",
                value: i32::from(profile.hz_var),
                max: 2,
            });
        }
        Ok(())
    }

    fn generator_type(&self) -> &'static str {
        "WorldGenerator"
    }
}

/// Population multiplier, planetoid belts and gas giants of a system.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pbg {
    pub population_multiplier: u8,
    pub belts: u8,
    pub gas_giants: u8,
}

impl fmt::Display for Pbg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.population_multiplier, self.belts, self.gas_giants)
    }
}
