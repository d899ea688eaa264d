//! Property tests over world generation and classification

use proptest::prelude::*;
use sectorgen::generation::stellar;
use sectorgen::{
    trade_codes, Bases, Dice, Luminosity, Population, SpectralType, Star, TradeCode, Uwp,
    WorldGenerator, WorldProfile, Zone,
};

fn profile(uwp: Uwp, hz_var: i8) -> WorldProfile {
    WorldProfile {
        uwp,
        bases: Bases::new(),
        primary: Star::new(SpectralType::G, 2, Luminosity::V),
        hz_var,
    }
}

proptest! {
    #[test]
    fn government_and_law_stay_in_range(seed in any::<u64>(), pop in 0i32..=15) {
        let generator = WorldGenerator::new();
        let mut dice = Dice::seeded(seed);
        let population = Population::new(pop).unwrap();

        let government = generator.government(&mut dice, population);
        let law = generator.law_level(&mut dice, population, government);

        prop_assert!((0..=13).contains(&government.value()));
        prop_assert!((0..=9).contains(&law.value()));
        if pop == 0 {
            prop_assert_eq!(government.value(), 0);
            prop_assert_eq!(law.value(), 0);
        }
    }

    #[test]
    fn rolled_profiles_are_valid(seed in any::<u64>()) {
        let generator = WorldGenerator::new();
        let mut dice = Dice::seeded(seed);
        let world = generator.roll_profile(&mut dice).unwrap();

        prop_assert!((-2..=2).contains(&world.hz_var));
        prop_assert!(world.uwp.tech.value() >= generator.environmental_minimum(world.uwp.atmosphere).unwrap());

        let reparsed: Uwp = world.uwp.to_string().parse().unwrap();
        prop_assert_eq!(reparsed, world.uwp);
    }

    #[test]
    fn hz_variance_is_bounded(seed in any::<u64>()) {
        let mut dice = Dice::seeded(seed);
        let star = stellar::primary(&mut dice).unwrap();
        let hz = stellar::hz_variance(&mut dice, &star);
        prop_assert!((-2..=2).contains(&hz));
    }

    #[test]
    fn zone_depends_only_on_starport_and_oppression(
        size in 0i32..=10,
        pop in 1i32..=15,
        gov in 0i32..=13,
        law in 0i32..=9,
    ) {
        let uwp: Uwp = format!(
            "C{:X}55{:X}{:X}{:X}-8",
            size, pop, gov, law
        ).parse().unwrap();

        let expected = match gov + law {
            n if n > 21 => Zone::Red,
            n if n > 19 => Zone::Amber,
            _ => Zone::Green,
        };
        prop_assert_eq!(Zone::classify(&uwp), expected);

        let mut interdicted = uwp;
        interdicted.starport = sectorgen::Starport::X;
        prop_assert_eq!(Zone::classify(&interdicted), Zone::Red);
    }

    #[test]
    fn agricultural_band_always_earns_ag(atm in 4i32..=9, hyd in 4i32..=8, pop in 5i32..=7) {
        let uwp: Uwp = format!("C7{:X}{:X}{:X}00-7", atm, hyd, pop).parse().unwrap();
        let codes = trade_codes(&profile(uwp, 0));
        prop_assert!(codes.contains(&TradeCode::Agricultural));
        prop_assert!(!codes.contains(&TradeCode::NonAgricultural));
    }
}
