//! # Star Catalog
//!
//! Read-only queries over generated worlds: name search, lookup by hex and
//! the worlds within jump range of a hex. Travel planning tools sit on top of
//! this trait instead of walking a [`Sector`] directly.

use crate::world::{Hex, Location, Sector};

pub trait StarCatalog {
    /// Worlds whose name contains `query`, ignoring case. An empty query
    /// matches nothing.
    fn search(&self, query: &str) -> Vec<&Hex>;

    /// The world at `location`, if that hex is occupied.
    fn world_at(&self, location: Location) -> Option<&Hex>;

    /// Worlds reachable from `origin` in a single jump of `jump` parsecs,
    /// nearest first. The origin itself is not included.
    fn jump_worlds(&self, origin: Location, jump: u32) -> Vec<&Hex>;
}

impl StarCatalog for Sector {
    fn search(&self, query: &str) -> Vec<&Hex> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }

        self.hexes()
            .iter()
            .filter(|hex| hex.name.to_lowercase().contains(&query))
            .collect()
    }

    fn world_at(&self, location: Location) -> Option<&Hex> {
        self.hexes().iter().find(|hex| hex.location == location)
    }

    fn jump_worlds(&self, origin: Location, jump: u32) -> Vec<&Hex> {
        let mut reachable: Vec<(u32, &Hex)> = self
            .hexes()
            .iter()
            .filter(|hex| hex.location != origin)
            .map(|hex| (origin.distance(hex.location), hex))
            .filter(|(distance, _)| *distance <= jump)
            .collect();

        reachable.sort_by_key(|(distance, hex)| (*distance, hex.location));
        reachable.into_iter().map(|(_, hex)| hex).collect()
    }
}
