//! # Sector Assembly
//!
//! Walks the hex grid, rolls a world for every occupied hex, classifies it
//! and names it. A sector is produced in one pass: any failure abandons the
//! whole run and no partial sector is returned.

use super::{utils, GenerationConfig, GenerationContext, Generator, WorldGenerator};
use crate::classification::{
    importance, nobility, trade_codes, CulturalExtension, EconomicExtension, Zone,
};
use crate::names::NameProvider;
use crate::world::{Hex, Location, Sector};
use crate::SectorgenResult;
use log::{debug, info};

/// Lowest value of the occupancy roll.
const OCCUPANCY_DIE_MIN: i32 = 1;
/// Highest value of the occupancy roll.
const OCCUPANCY_DIE_MAX: i32 = 20;

/// Sector generator built on [`WorldGenerator`].
#[derive(Debug, Clone, Default)]
pub struct SectorGenerator {
    pub world: WorldGenerator,
}

impl SectorGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rolls the occupancy gate for one hex.
    fn is_occupied(&self, config: &GenerationConfig, ctx: &mut GenerationContext) -> SectorgenResult<bool> {
        let roll = ctx.dice.roll_range(OCCUPANCY_DIE_MIN, OCCUPANCY_DIE_MAX)?;
        Ok(roll < config.occupancy_threshold)
    }

    /// Rolls and classifies the main world of one occupied hex.
    pub fn populate_hex(
        &self,
        location: Location,
        config: &GenerationConfig,
        ctx: &mut GenerationContext,
    ) -> SectorgenResult<Hex> {
        let profile = self.world.roll_profile(&mut ctx.dice)?;
        let uwp = profile.uwp;

        let trade_codes = trade_codes(&profile);
        let zone = Zone::classify(&uwp);
        let pbg = self.world.pbg(&mut ctx.dice, &uwp)?;
        let importance = importance(&profile, &trade_codes);
        let economic = EconomicExtension::roll(&mut ctx.dice, &uwp, &pbg, importance);
        let cultural = CulturalExtension::roll(&mut ctx.dice, &uwp, importance);
        let nobility = nobility(&trade_codes, importance);
        let worlds = self.world.worlds(&mut ctx.dice, &pbg);

        let name = ctx.names.next_name()?;
        debug!("{} {:<20} {}", location, name, uwp);

        Ok(Hex {
            location,
            name,
            uwp,
            bases: profile.bases,
            primary: profile.primary,
            hz_var: profile.hz_var,
            zone,
            trade_codes,
            importance,
            economic,
            cultural,
            nobility,
            pbg,
            worlds,
            allegiance: config.allegiance.clone(),
        })
    }
}

impl Generator<Sector> for SectorGenerator {
    fn generate(&self, config: &GenerationConfig, ctx: &mut GenerationContext) -> SectorgenResult<Sector> {
        config.validate()?;

        let mut hexes = Vec::new();
        for x in 1..=config.width {
            for y in 1..=config.height {
                if self.is_occupied(config, ctx)? {
                    let location = utils::location_code(x, y)?;
                    hexes.push(self.populate_hex(location, config, ctx)?);
                }
            }
        }

        let name = ctx.names.next_name()?;
        info!(
            "Generated sector {} with {} worlds on a {}x{} grid",
            name,
            hexes.len(),
            config.width,
            config.height
        );

        let sector = Sector::new(name, hexes)?;
        self.validate(&sector, config)?;
        Ok(sector)
    }

    fn validate(&self, sector: &Sector, config: &GenerationConfig) -> SectorgenResult<()> {
        utils::validate_sector(sector, config)
    }

    fn generator_type(&self) -> &'static str {
        "SectorGenerator"
    }
}

/// Generates a sector with a freshly built context.
pub fn generate_sector<P>(config: &GenerationConfig, names: P) -> SectorgenResult<Sector>
where
    P: NameProvider + Send + 'static,
{
    let mut ctx = GenerationContext::new(utils::create_dice(config), Box::new(names));
    SectorGenerator::new().generate(config, &mut ctx)
}

/// Runs sector generation as one unit of work on tokio's blocking pool.
///
/// The handle resolves once, with the finished sector or the error that
/// stopped it. Dropping the handle discards the result but does not stop the
/// run: blocking tasks cannot be cancelled, and runtime shutdown waits for
/// them. Hosts that must exit without waiting should shut the runtime down
/// with `Runtime::shutdown_background`. Must be called from within a tokio
/// runtime.
pub fn generate_in_background<P>(
    config: GenerationConfig,
    names: P,
) -> tokio::task::JoinHandle<SectorgenResult<Sector>>
where
    P: NameProvider + Send + 'static,
{
    tokio::task::spawn_blocking(move || generate_sector(&config, names))
}
