//! Star Trader library entry points.
//!
//! This crate owns the world-definition loader, the entity registry, the
//! price generator, and the game engine. Higher-level consumers (the CLI)
//! should only depend on the items exported here instead of reimplementing
//! behavior; everything user-facing (prompting, rendering, exit codes)
//! stays outside.

#![deny(warnings)]

pub mod engine;
pub mod error;
pub mod geometry;
pub mod loader;
pub mod pricing;
pub mod world;

pub use engine::{
    buy, list, sell, travel, CommodityQuote, DestinationEntry, Listing, MissionOutcome,
    MissionSummary, Purchase, Rejection, Sale, StatusReport, Travelled,
};
pub use error::{Error, Result};
pub use geometry::Coord;
pub use loader::{load_world, load_world_seeded, parse_world};
pub use world::{
    Commodity, CommodityId, Location, LocationId, Mission, MissionId, Offering, Player,
    PriceRange, Ship, World, DEFAULT_SEED, FUEL_COMMODITY,
};
