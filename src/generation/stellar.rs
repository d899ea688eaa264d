//! # Stellar Generation
//!
//! Rolls a system's primary star and its habitable zone variance.

use super::tables::{
    hz_spectral_dm, hz_variance_for_roll, lookup, SpectralRoll, STELLAR_MATRIX,
    STELLAR_ROW_OFFSET,
};
use crate::dice::Dice;
use crate::world::{Luminosity, SpectralType, Star};
use crate::SectorgenResult;

/// Rolls the spectral type from the first column of the stellar matrix.
pub fn spectral_type(dice: &mut Dice) -> SectorgenResult<SpectralType> {
    let row = lookup(&STELLAR_MATRIX, dice.flux() + STELLAR_ROW_OFFSET, "stellar matrix")?;

    Ok(match row.spectral {
        SpectralRoll::Type(spectral) => spectral,
        SpectralRoll::OorB => {
            if dice.coin_toss() {
                SpectralType::O
            } else {
                SpectralType::B
            }
        }
    })
}

/// Rolls the luminosity class for an already chosen type and numeral.
pub fn luminosity(dice: &mut Dice, spectral: SpectralType, numeral: u8) -> SectorgenResult<Luminosity> {
    let row = lookup(&STELLAR_MATRIX, dice.flux() + STELLAR_ROW_OFFSET, "stellar matrix")?;
    let rolled = lookup(&row.luminosity, spectral.column() as i32 - 1, "luminosity column")?;

    Ok(match (rolled, spectral) {
        // Late K subgiants and early F subdwarfs do not exist
        (Luminosity::IV, SpectralType::K) if numeral > 4 => Luminosity::V,
        (Luminosity::VI, SpectralType::F) if numeral < 5 => Luminosity::V,
        _ => rolled,
    })
}

/// Rolls a complete primary star.
pub fn primary(dice: &mut Dice) -> SectorgenResult<Star> {
    let spectral = spectral_type(dice)?;
    let numeral = dice.roll_range(0, 9)? as u8;
    let luminosity = luminosity(dice, spectral, numeral)?;

    Ok(Star::new(spectral, numeral, luminosity))
}

/// Rolls where the main world sits relative to the primary's habitable zone.
pub fn hz_variance(dice: &mut Dice, primary: &Star) -> i8 {
    hz_variance_for_roll(dice.flux() + hz_spectral_dm(primary.spectral))
}
