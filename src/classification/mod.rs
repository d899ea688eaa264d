//! # Classification Module
//!
//! Turns a rolled [`WorldProfile`](crate::world::WorldProfile) into the
//! derived remarks of a sector listing: trade codes, travel zone, the
//! importance/economic/cultural extensions and resident nobility.
//!
//! Everything here is a pure function of the profile except the economic and
//! cultural extensions, which roll additional dice.

pub mod extensions;
pub mod nobility;
pub mod trade_codes;

pub use extensions::*;
pub use nobility::*;
pub use trade_codes::*;
