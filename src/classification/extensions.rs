//! Travel zones and the importance, economic and cultural extensions.

use super::trade_codes::TradeCode;
use crate::dice::{apply_range, Dice};
use crate::generation::Pbg;
use crate::world::{Base, Starport, Uwp, WorldProfile};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Largest value an extension digit can take.
const EXTENSION_MAX: i32 = 0xF;

/// Government plus law above which a world is interdicted.
const RED_ZONE_OPPRESSION: i32 = 21;
/// Government plus law above which travellers are cautioned.
const AMBER_ZONE_OPPRESSION: i32 = 19;

/// Travel advisory for a world.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    #[default]
    Green,
    Amber,
    Red,
}

impl Zone {
    /// Classifies a world from its starport and oppression level.
    pub fn classify(uwp: &Uwp) -> Self {
        let oppression = uwp.oppression();
        if uwp.starport == Starport::X || oppression > RED_ZONE_OPPRESSION {
            Zone::Red
        } else if oppression > AMBER_ZONE_OPPRESSION {
            Zone::Amber
        } else {
            Zone::Green
        }
    }

    pub fn code(self) -> char {
        match self {
            Zone::Green => 'G',
            Zone::Amber => 'A',
            Zone::Red => 'R',
        }
    }

    /// Code used in sector listings, where green is left blank.
    pub fn export_code(self) -> &'static str {
        match self {
            Zone::Green => "",
            Zone::Amber => "A",
            Zone::Red => "R",
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Trade codes that each raise importance by one.
const IMPORTANT_TRADE_CODES: [TradeCode; 4] = [
    TradeCode::Agricultural,
    TradeCode::HighPopulation,
    TradeCode::Industrial,
    TradeCode::Rich,
];

/// Computes the importance extension `{Ix}` of a classified world.
pub fn importance(world: &WorldProfile, trade_codes: &[TradeCode]) -> i32 {
    let uwp = &world.uwp;
    let mut value = 0;

    match uwp.starport {
        Starport::A | Starport::B => value += 1,
        Starport::D | Starport::E | Starport::X => value -= 1,
        Starport::C => {}
    }

    let tech = uwp.tech.value();
    if tech > 15 {
        value += 1;
    }
    if tech > 9 {
        value += 1;
    }
    if tech < 9 {
        value -= 1;
    }

    value += IMPORTANT_TRADE_CODES
        .iter()
        .filter(|code| trade_codes.contains(code))
        .count() as i32;

    if uwp.population.value() < 7 {
        value -= 1;
    }

    if world.bases.contains(Base::Naval) && world.bases.contains(Base::Scout) {
        value += 1;
    }
    if world.bases.contains(Base::WayStation) {
        value += 1;
    }

    value
}

/// Economic extension `(RLI±E)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EconomicExtension {
    pub resources: u8,
    pub labor: u8,
    pub infrastructure: u8,
    /// Never zero
    pub efficiency: i8,
}

impl EconomicExtension {
    pub fn roll(dice: &mut Dice, uwp: &Uwp, pbg: &Pbg, importance: i32) -> Self {
        let mut resources = dice.roll_sum(2);
        if uwp.tech.value() > 7 {
            resources += i32::from(pbg.gas_giants) + i32::from(pbg.belts);
        }

        let population = uwp.population.value();
        let labor = (population - 1).max(0);

        let infrastructure = match population {
            0 => 0,
            1..=3 => importance,
            4..=6 => dice.roll_sum(1) + importance,
            _ => dice.roll_sum(2) + importance,
        };

        let efficiency = match dice.flux() {
            0 => 1,
            flux => flux,
        };

        Self {
            resources: apply_range(resources, 0, EXTENSION_MAX) as u8,
            labor: labor as u8,
            infrastructure: apply_range(infrastructure, 0, EXTENSION_MAX) as u8,
            efficiency: efficiency as i8,
        }
    }
}

impl fmt::Display for EconomicExtension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({:X}{:X}{:X}{:+})",
            self.resources, self.labor, self.infrastructure, self.efficiency
        )
    }
}

/// Cultural extension `[HASS]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CulturalExtension {
    pub heterogeneity: u8,
    pub acceptance: u8,
    pub strangeness: u8,
    pub symbols: u8,
}

impl CulturalExtension {
    /// Rolls the cultural extension. Unpopulated worlds have none and roll
    /// no dice.
    pub fn roll(dice: &mut Dice, uwp: &Uwp, importance: i32) -> Self {
        if uwp.is_unpopulated() {
            return Self::default();
        }

        let population = uwp.population.value();
        let heterogeneity = apply_range(population + dice.flux(), 1, EXTENSION_MAX);
        let acceptance = apply_range(population + importance, 1, EXTENSION_MAX);
        let strangeness = (dice.flux() + 5).max(1);
        let symbols = apply_range(dice.flux() + uwp.tech.value(), 1, EXTENSION_MAX);

        Self {
            heterogeneity: heterogeneity as u8,
            acceptance: acceptance as u8,
            strangeness: strangeness as u8,
            symbols: symbols as u8,
        }
    }
}

impl fmt::Display for CulturalExtension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:X}{:X}{:X}{:X}]",
            self.heterogeneity, self.acceptance, self.strangeness, self.symbols
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::{Luminosity, SpectralType, Star};

    fn uwp(code: &str) -> Uwp {
        code.parse().unwrap()
    }

    fn world(code: &str, bases: &[Base]) -> WorldProfile {
        WorldProfile {
            uwp: uwp(code),
            bases: bases.iter().copied().collect(),
            primary: Star::new(SpectralType::G, 2, Luminosity::V),
            hz_var: 0,
        }
    }

    #[test]
    fn test_zone_classification() {
        assert_eq!(Zone::classify(&uwp("X000000-0")), Zone::Red);
        assert_eq!(Zone::classify(&uwp("C555599-8")), Zone::Green);
        assert_eq!(Zone::classify(&uwp("C5555D9-8")), Zone::Red);
        assert_eq!(Zone::classify(&uwp("C5555C9-8")), Zone::Amber);
        assert_eq!(Zone::classify(&uwp("C5555B9-8")), Zone::Amber);
    }

    #[test]
    fn test_zone_export_codes() {
        assert_eq!(Zone::Green.export_code(), "");
        assert_eq!(Zone::Amber.export_code(), "A");
        assert_eq!(Zone::Red.export_code(), "R");
    }

    #[test]
    fn test_importance_adds_up() {
        // Starport A, TL 12, Hi and In, both naval and scout bases
        let profile = world("A867A99-C", &[Base::Naval, Base::Scout]);
        let codes = [TradeCode::HighPopulation, TradeCode::Industrial];
        assert_eq!(importance(&profile, &codes), 1 + 1 + 2 + 1);

        // Starport X, TL 0, low population
        let profile = world("X300000-0", &[]);
        assert_eq!(importance(&profile, &[]), -1 - 1 - 1);
    }

    #[test]
    fn test_unpopulated_world_has_empty_culture() {
        let mut dice = Dice::seeded(8);
        let mut control = Dice::seeded(8);
        let culture = CulturalExtension::roll(&mut dice, &uwp("X300000-0"), 3);
        assert_eq!(culture, CulturalExtension::default());
        assert_eq!(culture.to_string(), "[0000]");

        // No randomness consumed
        for _ in 0..4 {
            assert_eq!(dice.flux(), control.flux());
        }
    }

    #[test]
    fn test_extensions_stay_in_range() {
        let mut dice = Dice::seeded(2718);
        let pbg = Pbg {
            population_multiplier: 9,
            belts: 3,
            gas_giants: 4,
        };

        for code in ["A867A99-F", "C433433-5", "E100100-2", "X000000-0"] {
            let uwp = uwp(code);
            for importance in -3..=5 {
                for _ in 0..50 {
                    let economic = EconomicExtension::roll(&mut dice, &uwp, &pbg, importance);
                    assert!(economic.resources <= 15);
                    assert!(economic.infrastructure <= 15);
                    assert_ne!(economic.efficiency, 0);
                    assert!((-5..=5).contains(&economic.efficiency));

                    let culture = CulturalExtension::roll(&mut dice, &uwp, importance);
                    if !uwp.is_unpopulated() {
                        assert!((1..=15).contains(&culture.heterogeneity));
                        assert!((1..=15).contains(&culture.acceptance));
                        assert!((1..=10).contains(&culture.strangeness));
                        assert!((1..=15).contains(&culture.symbols));
                    }
                }
            }
        }
    }

    #[test]
    fn test_extension_display() {
        let economic = EconomicExtension {
            resources: 12,
            labor: 8,
            infrastructure: 10,
            efficiency: -3,
        };
        assert_eq!(economic.to_string(), "(C8A-3)");

        let economic = EconomicExtension {
            efficiency: 2,
            ..economic
        };
        assert_eq!(economic.to_string(), "(C8A+2)");

        let culture = CulturalExtension {
            heterogeneity: 11,
            acceptance: 7,
            strangeness: 5,
            symbols: 15,
        };
        assert_eq!(culture.to_string(), "[B75F]");
    }
}
