//! # Trade Codes
//!
//! Declarative trade classification rules.
//!
//! Each [`Rule`] pairs a code with a conjunction of [`Constraint`]s over the
//! UWP digits (and, for climate codes, the habitable zone variance). A world
//! receives every code whose constraints all hold, in table order.

use crate::world::{UwpField, WorldProfile};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Trade classification remarks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TradeCode {
    // Planetary
    Asteroid,
    Desert,
    FluidOceans,
    Garden,
    Hellworld,
    IceCapped,
    OceanWorld,
    Vacuum,
    WaterWorld,
    Satellite,
    Locked,
    // Population
    Dieback,
    Barren,
    LowPopulation,
    NonIndustrial,
    PreHighPopulation,
    HighPopulation,
    // Economic
    PreAgricultural,
    Agricultural,
    NonAgricultural,
    PrisonExileCamp,
    PreIndustrial,
    Industrial,
    Poor,
    PreRich,
    Rich,
    LowTech,
    HighTech,
    // Climate
    Frozen,
    Hot,
    Cold,
    Tropic,
    Tundra,
    TwilightZone,
    // Secondary
    Farming,
    Mining,
    MilitaryRule,
    PenalColony,
    Reserve,
    // Political
    SubsectorCapital,
    SectorCapital,
    Capital,
    Colony,
    // Special
    Forbidden,
    Puzzle,
    Dangerous,
    DataRepository,
    AncientSite,
}

impl TradeCode {
    /// Every trade code, in the order they are documented.
    pub const ALL: [TradeCode; 48] = [
        TradeCode::Asteroid,
        TradeCode::Desert,
        TradeCode::FluidOceans,
        TradeCode::Garden,
        TradeCode::Hellworld,
        TradeCode::IceCapped,
        TradeCode::OceanWorld,
        TradeCode::Vacuum,
        TradeCode::WaterWorld,
        TradeCode::Satellite,
        TradeCode::Locked,
        TradeCode::Dieback,
        TradeCode::Barren,
        TradeCode::LowPopulation,
        TradeCode::NonIndustrial,
        TradeCode::PreHighPopulation,
        TradeCode::HighPopulation,
        TradeCode::PreAgricultural,
        TradeCode::Agricultural,
        TradeCode::NonAgricultural,
        TradeCode::PrisonExileCamp,
        TradeCode::PreIndustrial,
        TradeCode::Industrial,
        TradeCode::Poor,
        TradeCode::PreRich,
        TradeCode::Rich,
        TradeCode::LowTech,
        TradeCode::HighTech,
        TradeCode::Frozen,
        TradeCode::Hot,
        TradeCode::Cold,
        TradeCode::Tropic,
        TradeCode::Tundra,
        TradeCode::TwilightZone,
        TradeCode::Farming,
        TradeCode::Mining,
        TradeCode::MilitaryRule,
        TradeCode::PenalColony,
        TradeCode::Reserve,
        TradeCode::SubsectorCapital,
        TradeCode::SectorCapital,
        TradeCode::Capital,
        TradeCode::Colony,
        TradeCode::Forbidden,
        TradeCode::Puzzle,
        TradeCode::Dangerous,
        TradeCode::DataRepository,
        TradeCode::AncientSite,
    ];

    /// Two-letter remark code.
    pub fn code(self) -> &'static str {
        match self {
            TradeCode::Asteroid => "As",
            TradeCode::Desert => "De",
            TradeCode::FluidOceans => "Fl",
            TradeCode::Garden => "Ga",
            TradeCode::Hellworld => "He",
            TradeCode::IceCapped => "Ic",
            TradeCode::OceanWorld => "Oc",
            TradeCode::Vacuum => "Va",
            TradeCode::WaterWorld => "Wa",
            TradeCode::Satellite => "Sa",
            TradeCode::Locked => "Lk",
            TradeCode::Dieback => "Di",
            TradeCode::Barren => "Ba",
            TradeCode::LowPopulation => "Lo",
            TradeCode::NonIndustrial => "Ni",
            TradeCode::PreHighPopulation => "Ph",
            TradeCode::HighPopulation => "Hi",
            TradeCode::PreAgricultural => "Pa",
            TradeCode::Agricultural => "Ag",
            TradeCode::NonAgricultural => "Na",
            TradeCode::PrisonExileCamp => "Px",
            TradeCode::PreIndustrial => "Pi",
            TradeCode::Industrial => "In",
            TradeCode::Poor => "Po",
            TradeCode::PreRich => "Pr",
            TradeCode::Rich => "Ri",
            TradeCode::LowTech => "Lt",
            TradeCode::HighTech => "Ht",
            TradeCode::Frozen => "Fr",
            TradeCode::Hot => "Ho",
            TradeCode::Cold => "Co",
            TradeCode::Tropic => "Tr",
            TradeCode::Tundra => "Tu",
            TradeCode::TwilightZone => "Tz",
            TradeCode::Farming => "Fa",
            TradeCode::Mining => "Mi",
            TradeCode::MilitaryRule => "Mr",
            TradeCode::PenalColony => "Pe",
            TradeCode::Reserve => "Re",
            TradeCode::SubsectorCapital => "Cp",
            TradeCode::SectorCapital => "Cs",
            TradeCode::Capital => "Cx",
            TradeCode::Colony => "Cy",
            TradeCode::Forbidden => "Fo",
            TradeCode::Puzzle => "Pz",
            TradeCode::Dangerous => "Da",
            TradeCode::DataRepository => "Ab",
            TradeCode::AncientSite => "An",
        }
    }

    /// Parses a two-letter remark code.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|tc| tc.code() == code)
    }
}

impl fmt::Display for TradeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl TryFrom<String> for TradeCode {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_code(&value).ok_or_else(|| format!("unknown trade code '{}'", value))
    }
}

impl From<TradeCode> for String {
    fn from(value: TradeCode) -> String {
        value.code().to_string()
    }
}

/// A single requirement within a trade code rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    /// The UWP digit at `field` must be one of the characters in `allowed`
    Uwp { field: UwpField, allowed: &'static str },
    /// The habitable zone variance must equal this value
    HzVariance(i8),
}

impl Constraint {
    pub fn holds(&self, world: &WorldProfile) -> bool {
        match *self {
            Constraint::Uwp { field, allowed } => allowed.contains(world.uwp.code_at(field)),
            Constraint::HzVariance(hz) => world.hz_var == hz,
        }
    }
}

/// A trade code and the constraints a world must meet to earn it.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub code: TradeCode,
    pub constraints: &'static [Constraint],
}

impl Rule {
    pub fn matches(&self, world: &WorldProfile) -> bool {
        self.constraints.iter().all(|c| c.holds(world))
    }
}

const fn is(field: UwpField, allowed: &'static str) -> Constraint {
    Constraint::Uwp { field, allowed }
}

const fn hz(variance: i8) -> Constraint {
    Constraint::HzVariance(variance)
}

const fn rule(code: TradeCode, constraints: &'static [Constraint]) -> Rule {
    Rule { code, constraints }
}

use TradeCode as T;
use UwpField::{
    Atmosphere as Atm, Government as Gov, Hydrographics as Hyd, Law, Population as Pop, Size as Siz,
    Starport as St, TechLevel as Tl,
};

/// The trade code table, evaluated top to bottom.
pub static TRADE_CODE_RULES: &[Rule] = &[
    // Planetary
    rule(T::Asteroid, &[is(Siz, "0"), is(Hyd, "0")]),
    rule(T::Desert, &[is(Atm, "23456789"), is(Hyd, "0")]),
    rule(T::FluidOceans, &[is(Atm, "ABC"), is(Hyd, "123456789A")]),
    rule(T::Garden, &[is(Siz, "678"), is(Atm, "568"), is(Hyd, "567")]),
    rule(T::Hellworld, &[is(Siz, "3456789ABC"), is(Atm, "2479ABC"), is(Hyd, "012")]),
    rule(T::IceCapped, &[is(Atm, "01"), is(Hyd, "123456789A")]),
    rule(T::OceanWorld, &[is(Siz, "ABCDEF"), is(Atm, "3456789DEF"), is(Hyd, "A")]),
    rule(T::Vacuum, &[is(Atm, "0")]),
    rule(T::WaterWorld, &[is(Siz, "3456789"), is(Atm, "3456789DEF"), is(Hyd, "A")]),
    // Population
    rule(T::Dieback, &[is(Pop, "0"), is(Gov, "0"), is(Law, "0"), is(Tl, "123456789ABCDEF")]),
    rule(T::Barren, &[is(Pop, "0"), is(Gov, "0"), is(Law, "0"), is(St, "EX"), is(Tl, "0")]),
    rule(T::LowPopulation, &[is(Pop, "123")]),
    rule(T::NonIndustrial, &[is(Pop, "456")]),
    rule(T::PreHighPopulation, &[is(Pop, "8")]),
    rule(T::HighPopulation, &[is(Pop, "9ABCDEF")]),
    // Economic
    rule(T::PreAgricultural, &[is(Atm, "456789"), is(Hyd, "45678"), is(Pop, "48")]),
    rule(T::Agricultural, &[is(Atm, "456789"), is(Hyd, "45678"), is(Pop, "567")]),
    rule(T::NonAgricultural, &[is(Atm, "0123"), is(Hyd, "0123"), is(Pop, "6789ABCDEF")]),
    rule(T::PrisonExileCamp, &[is(Atm, "23AB"), is(Hyd, "12345"), is(Pop, "3456"), is(Law, "6789")]),
    rule(T::PreIndustrial, &[is(Atm, "012479"), is(Pop, "78")]),
    rule(T::Industrial, &[is(Atm, "012479ABC"), is(Pop, "9ABCDEF")]),
    rule(T::Poor, &[is(Atm, "2345"), is(Hyd, "0123")]),
    rule(T::PreRich, &[is(Atm, "68"), is(Pop, "59")]),
    rule(T::Rich, &[is(Atm, "68"), is(Pop, "678"), is(Gov, "456789")]),
    rule(T::LowTech, &[is(Pop, "123456789ABCDEF"), is(Tl, "12345")]),
    rule(T::HighTech, &[is(Tl, "CDEF")]),
    // Climate
    rule(T::Frozen, &[is(Siz, "23456789"), is(Hyd, "123456789A"), hz(2)]),
    rule(T::Hot, &[hz(-1)]),
    rule(T::Cold, &[hz(1)]),
    rule(T::Tropic, &[is(Siz, "6789"), is(Atm, "456789"), is(Hyd, "34567"), hz(-1)]),
    rule(T::Tundra, &[is(Siz, "6789"), is(Atm, "456789"), is(Hyd, "34567"), hz(1)]),
    // Secondary
    rule(T::Reserve, &[is(Pop, "01234"), is(Gov, "6"), is(Law, "045")]),
    // Political
    rule(T::Colony, &[is(Pop, "01234"), is(Gov, "6"), is(Law, "0123")]),
];

/// Government code of a captive government.
const CAPTIVE_GOVERNMENT: i32 = 6;

/// Codes that already explain a captive government.
const CAPTIVE_EXPLANATIONS: [TradeCode; 3] = [
    TradeCode::MilitaryRule,
    TradeCode::PrisonExileCamp,
    TradeCode::Reserve,
];

/// Evaluates every rule against a world, in table order.
///
/// A captive government (6) with no other explanation is recorded as
/// military rule.
///
/// # Examples
///
/// ```
/// use sectorgen::{trade_codes, TradeCode, WorldProfile, Bases, Star, SpectralType, Luminosity};
///
/// let world = WorldProfile {
///     uwp: "C576600-7".parse().unwrap(),
///     bases: Bases::new(),
///     primary: Star::new(SpectralType::G, 2, Luminosity::V),
///     hz_var: 0,
/// };
/// let codes = trade_codes(&world);
/// assert!(codes.contains(&TradeCode::Agricultural));
/// ```
pub fn trade_codes(world: &WorldProfile) -> Vec<TradeCode> {
    let mut codes: Vec<TradeCode> = TRADE_CODE_RULES
        .iter()
        .filter(|rule| rule.matches(world))
        .map(|rule| rule.code)
        .collect();

    if world.uwp.government.value() == CAPTIVE_GOVERNMENT
        && !CAPTIVE_EXPLANATIONS.iter().any(|code| codes.contains(code))
    {
        codes.push(TradeCode::MilitaryRule);
    }

    codes
}
