//! Tab-separated sector listings.
//!
//! The column layout matches the format sector mapping tools import:
//!
//! ```text
//! Hex  Name  UWP  Bases  Remarks  Zone  PBG  Allegiance  Stars  {Ix}  (Ex)  [Cx]  Nobility  W
//! ```

use crate::classification::nobility_codes;
use crate::world::{Hex, Sector};
use crate::SectorgenResult;
use std::io::Write;

pub const HEADER: &str =
    "Hex\tName\tUWP\tBases\tRemarks\tZone\tPBG\tAllegiance\tStars\t{Ix}\t(Ex)\t[Cx]\tNobility\tW";

/// Renders one hex as a listing row, without a trailing newline.
pub fn format_row(hex: &Hex) -> String {
    format!(
        "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{{ {} }}\t{}\t{}\t{}\t{}",
        hex.location,
        hex.name,
        hex.uwp,
        hex.bases,
        hex.remarks(),
        hex.zone.export_code(),
        hex.pbg,
        hex.allegiance,
        hex.primary,
        hex.importance,
        hex.economic,
        hex.cultural,
        nobility_codes(&hex.nobility),
        hex.worlds
    )
}

/// Writes the header and every hex of `sector` to `out`.
pub fn write_sector<W: Write>(sector: &Sector, mut out: W) -> SectorgenResult<()> {
    writeln!(out, "{}", HEADER)?;
    for hex in sector.hexes() {
        writeln!(out, "{}", format_row(hex))?;
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classification::{CulturalExtension, EconomicExtension, NobleTitle, TradeCode, Zone};
    use crate::generation::Pbg;
    use crate::world::{Base, Location, Luminosity, SpectralType, Star};

    fn sample_hex() -> Hex {
        Hex {
            location: Location::new(19, 10),
            name: "Regina".to_string(),
            uwp: "A788899-C".parse().unwrap(),
            bases: [Base::Naval, Base::Scout].into_iter().collect(),
            primary: Star::new(SpectralType::F, 7, Luminosity::V),
            hz_var: 0,
            zone: Zone::Green,
            trade_codes: vec![TradeCode::PreHighPopulation, TradeCode::PreIndustrial],
            importance: 4,
            economic: EconomicExtension {
                resources: 13,
                labor: 7,
                infrastructure: 11,
                efficiency: 2,
            },
            cultural: CulturalExtension {
                heterogeneity: 9,
                acceptance: 12,
                strangeness: 5,
                symbols: 12,
            },
            nobility: vec![NobleTitle::Knight, NobleTitle::Marquis, NobleTitle::Viscount],
            pbg: Pbg {
                population_multiplier: 7,
                belts: 0,
                gas_giants: 3,
            },
            worlds: 8,
            allegiance: "Gc".to_string(),
        }
    }

    #[test]
    fn test_format_row() {
        let row = format_row(&sample_hex());
        assert_eq!(
            row,
            "1910\tRegina\tA788899-C\tNS\tPh Pi\t\t703\tGc\tF7 V\t{ 4 }\t(D7B+2)\t[9C5C]\tBDe\t8"
        );
        assert_eq!(row.split('\t').count(), HEADER.split('\t').count());
    }

    #[test]
    fn test_write_sector_to_file() {
        let sector = Sector::new("Spinward Marches".to_string(), vec![sample_hex()]).unwrap();
        let file = tempfile::NamedTempFile::new().unwrap();

        write_sector(&sector, file.as_file()).unwrap();

        let text = std::fs::read_to_string(file.path()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], HEADER);
        assert!(lines[1].starts_with("1910\tRegina\t"));
    }
}
