//! Noble titles granted by a world's trade codes and importance.

use super::trade_codes::TradeCode;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NobleTitle {
    Knight,
    Baronet,
    Baron,
    Marquis,
    Viscount,
    Count,
    Duke,
    GrandDuke,
    Archduke,
}

impl NobleTitle {
    pub fn code(self) -> char {
        match self {
            NobleTitle::Knight => 'B',
            NobleTitle::Baronet => 'c',
            NobleTitle::Baron => 'C',
            NobleTitle::Marquis => 'D',
            NobleTitle::Viscount => 'e',
            NobleTitle::Count => 'E',
            NobleTitle::Duke => 'f',
            NobleTitle::GrandDuke => 'F',
            NobleTitle::Archduke => 'G',
        }
    }
}

impl fmt::Display for NobleTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Condition a world must meet to seat a noble.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    Always,
    /// At least one of the codes
    AnyOf(&'static [TradeCode]),
    /// Every one of the codes
    AllOf(&'static [TradeCode]),
    /// Importance of at least `min` and none of the `excluding` codes
    Important {
        min: i32,
        excluding: &'static [TradeCode],
    },
}

impl Requirement {
    pub fn is_met(&self, trade_codes: &[TradeCode], importance: i32) -> bool {
        match *self {
            Requirement::Always => true,
            Requirement::AnyOf(codes) => codes.iter().any(|c| trade_codes.contains(c)),
            Requirement::AllOf(codes) => codes.iter().all(|c| trade_codes.contains(c)),
            Requirement::Important { min, excluding } => {
                importance >= min && !excluding.iter().any(|c| trade_codes.contains(c))
            }
        }
    }
}

const CAPITALS: &[TradeCode] = &[
    TradeCode::SubsectorCapital,
    TradeCode::Capital,
    TradeCode::SectorCapital,
];

/// Titles in the order they are listed. A title may appear twice when two
/// rules grant it.
pub static NOBILITY_RULES: &[(NobleTitle, Requirement)] = &[
    (NobleTitle::Knight, Requirement::Always),
    (
        NobleTitle::Baronet,
        Requirement::AnyOf(&[TradeCode::PreAgricultural, TradeCode::PreRich]),
    ),
    (
        NobleTitle::Baron,
        Requirement::AllOf(&[TradeCode::Agricultural, TradeCode::Rich]),
    ),
    (NobleTitle::Marquis, Requirement::AnyOf(&[TradeCode::PreIndustrial])),
    (NobleTitle::Viscount, Requirement::AnyOf(&[TradeCode::PreHighPopulation])),
    (
        NobleTitle::Count,
        Requirement::AnyOf(&[TradeCode::Industrial, TradeCode::HighPopulation]),
    ),
    (
        NobleTitle::Duke,
        Requirement::Important {
            min: 4,
            excluding: CAPITALS,
        },
    ),
    (
        NobleTitle::Duke,
        Requirement::AnyOf(&[TradeCode::Capital, TradeCode::SubsectorCapital]),
    ),
];

/// Lists the nobles seated on a world.
pub fn nobility(trade_codes: &[TradeCode], importance: i32) -> Vec<NobleTitle> {
    NOBILITY_RULES
        .iter()
        .filter(|(_, requirement)| requirement.is_met(trade_codes, importance))
        .map(|(title, _)| *title)
        .collect()
}

/// Concatenated title codes, e.g. `BcC`.
pub fn nobility_codes(titles: &[NobleTitle]) -> String {
    titles.iter().map(|t| t.code()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_world_has_a_knight() {
        assert_eq!(nobility(&[], -3), vec![NobleTitle::Knight]);
    }

    #[test]
    fn test_baron_needs_both_codes() {
        let ag_only = nobility(&[TradeCode::Agricultural], 0);
        assert!(!ag_only.contains(&NobleTitle::Baron));

        let both = nobility(&[TradeCode::Agricultural, TradeCode::Rich], 0);
        assert_eq!(nobility_codes(&both), "BC");
    }

    #[test]
    fn test_titles_follow_rule_order() {
        let codes = [
            TradeCode::HighPopulation,
            TradeCode::PreRich,
            TradeCode::PreIndustrial,
        ];
        assert_eq!(nobility_codes(&nobility(&codes, 1)), "BcDE");
    }

    #[test]
    fn test_important_world_gets_a_duke() {
        assert_eq!(nobility_codes(&nobility(&[], 4)), "Bf");
        assert_eq!(nobility_codes(&nobility(&[], 3)), "B");
    }

    #[test]
    fn test_capital_duke_is_not_doubled_by_importance() {
        let titles = nobility(&[TradeCode::Capital], 5);
        assert_eq!(nobility_codes(&titles), "Bf");

        let sector_capital = nobility(&[TradeCode::SectorCapital], 5);
        assert_eq!(nobility_codes(&sector_capital), "B");
    }
}
