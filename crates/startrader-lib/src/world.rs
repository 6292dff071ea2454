//! In-memory world registry.
//!
//! A [`World`] owns the canonical sets of commodities, locations, and
//! missions, plus the player and the shared seeded price generator. It is
//! built once by the loader and then passed around by reference; there is no
//! process-wide singleton. Entities are addressed by integer handles
//! assigned at load time, so name resolution happens exactly once at the
//! boundary and "not found" is an explicit case.

use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::geometry::Coord;

/// Handle for a commodity registered in a [`World`].
pub type CommodityId = usize;
/// Handle for a location registered in a [`World`].
pub type LocationId = usize;
/// Handle for a mission registered in a [`World`].
pub type MissionId = usize;

/// Default seed for the shared price generator.
pub const DEFAULT_SEED: u64 = 42;

/// Name of the distinguished commodity that refills the ship's fuel tank
/// instead of occupying cargo space.
pub const FUEL_COMMODITY: &str = "Fuel";

/// Minimum similarity score for "Did you mean ...?" name suggestions.
const SUGGESTION_THRESHOLD: f64 = 0.8;
/// Maximum number of suggestions offered for an unknown name.
const SUGGESTION_LIMIT: usize = 3;

/// A tradeable good. Immutable after load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commodity {
    pub name: String,
    pub description: String,
}

/// Inclusive price bounds for one offering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceRange {
    pub low: u32,
    pub high: u32,
}

/// One commodity offered by a location, with its configured price bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Offering {
    pub commodity: CommodityId,
    pub range: PriceRange,
}

/// A place the player can be.
///
/// `prices` runs parallel to `offerings` and holds the prices drawn on the
/// most recent visit; it is empty for locations the player has never
/// arrived at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub name: String,
    pub description: String,
    pub coord: Coord,
    pub offerings: Vec<Offering>,
    pub(crate) prices: Vec<u32>,
}

impl Location {
    /// Whether this location offers the given commodity.
    pub fn offers(&self, commodity: CommodityId) -> bool {
        self.offerings.iter().any(|o| o.commodity == commodity)
    }

    /// Current price of a commodity here, or `None` when the commodity is
    /// not offered (or no prices have been drawn yet).
    pub fn current_price(&self, commodity: CommodityId) -> Option<u32> {
        let index = self
            .offerings
            .iter()
            .position(|o| o.commodity == commodity)?;
        self.prices.get(index).copied()
    }
}

/// An ordered delivery objective.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mission {
    pub title: String,
    pub description: String,
    pub location: LocationId,
    pub commodity: CommodityId,
    pub quantity: u32,
    pub reward: u64,
    pub complete: bool,
}

/// The player's mobile fuel and cargo container.
///
/// Fuel is tracked separately and never counts against cargo capacity.
/// Capacity invariants are enforced by callers *before* mutation; the
/// mutators assume the checks have already passed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ship {
    cargo_capacity: u32,
    fuel_capacity: u32,
    fuel: u32,
    cargo: HashMap<CommodityId, u32>,
}

impl Ship {
    /// Construct a ship with the given capacities and a full fuel tank.
    pub fn new(cargo_capacity: u32, fuel_capacity: u32) -> Self {
        Self {
            cargo_capacity,
            fuel_capacity,
            fuel: fuel_capacity,
            cargo: HashMap::new(),
        }
    }

    pub fn cargo_capacity(&self) -> u32 {
        self.cargo_capacity
    }

    pub fn fuel_capacity(&self) -> u32 {
        self.fuel_capacity
    }

    pub fn fuel(&self) -> u32 {
        self.fuel
    }

    /// Total cargo carried, fuel excluded.
    pub fn total_cargo(&self) -> u32 {
        self.cargo.values().sum()
    }

    /// Quantity of one commodity in cargo, zero when absent.
    pub fn quantity_of(&self, commodity: CommodityId) -> u32 {
        self.cargo.get(&commodity).copied().unwrap_or(0)
    }

    /// Cargo entries with a non-zero quantity, in unspecified order.
    pub fn cargo(&self) -> impl Iterator<Item = (CommodityId, u32)> + '_ {
        self.cargo
            .iter()
            .filter(|(_, quantity)| **quantity > 0)
            .map(|(commodity, quantity)| (*commodity, *quantity))
    }

    pub fn add_cargo(&mut self, commodity: CommodityId, quantity: u32) {
        debug_assert!(self.total_cargo() as u64 + quantity as u64 <= self.cargo_capacity as u64);
        *self.cargo.entry(commodity).or_insert(0) += quantity;
    }

    pub fn remove_cargo(&mut self, commodity: CommodityId, quantity: u32) {
        debug_assert!(self.quantity_of(commodity) >= quantity);
        if let Some(carried) = self.cargo.get_mut(&commodity) {
            *carried -= quantity;
            if *carried == 0 {
                self.cargo.remove(&commodity);
            }
        }
    }

    pub fn add_fuel(&mut self, fuel: u32) {
        debug_assert!(self.fuel as u64 + fuel as u64 <= self.fuel_capacity as u64);
        self.fuel += fuel;
    }

    pub fn remove_fuel(&mut self, fuel: u32) {
        debug_assert!(fuel <= self.fuel);
        self.fuel -= fuel;
    }

    /// Override the current fuel level, clamped to capacity.
    pub fn set_fuel(&mut self, fuel: u32) {
        self.fuel = fuel.min(self.fuel_capacity);
    }
}

/// The player: current location, money, active mission, and ship.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub location: LocationId,
    pub money: u64,
    pub mission: Option<MissionId>,
    pub ship: Ship,
}

/// The loaded, queryable universe.
#[derive(Debug, Clone)]
pub struct World {
    pub(crate) commodities: Vec<Commodity>,
    pub(crate) commodity_names: HashMap<String, CommodityId>,
    pub(crate) locations: Vec<Location>,
    pub(crate) location_names: HashMap<String, LocationId>,
    pub(crate) missions: Vec<Mission>,
    pub(crate) player: Player,
    pub(crate) rng: StdRng,
}

impl World {
    pub fn commodities(&self) -> &[Commodity] {
        &self.commodities
    }

    pub fn commodity(&self, id: CommodityId) -> &Commodity {
        &self.commodities[id]
    }

    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    pub fn location(&self, id: LocationId) -> &Location {
        &self.locations[id]
    }

    pub fn missions(&self) -> &[Mission] {
        &self.missions
    }

    pub fn mission(&self, id: MissionId) -> &Mission {
        &self.missions[id]
    }

    pub(crate) fn mission_mut(&mut self, id: MissionId) -> &mut Mission {
        &mut self.missions[id]
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    /// Lookup a commodity handle by its case-sensitive name.
    pub fn commodity_id_by_name(&self, name: &str) -> Option<CommodityId> {
        self.commodity_names.get(name).copied()
    }

    /// Lookup a location handle by its case-sensitive name.
    pub fn location_id_by_name(&self, name: &str) -> Option<LocationId> {
        self.location_names.get(name).copied()
    }

    /// Manhattan distance between two locations.
    pub fn distance(&self, from: LocationId, to: LocationId) -> u64 {
        self.locations[from].coord.distance_to(&self.locations[to].coord)
    }

    /// First incomplete mission in load order, if any.
    pub fn next_mission(&self) -> Option<MissionId> {
        self.missions.iter().position(|m| !m.complete)
    }

    /// Whether every mission has been completed. This is the terminal
    /// condition for the whole game.
    pub fn all_missions_complete(&self) -> bool {
        self.next_mission().is_none()
    }

    /// Location names resembling `name`, for unknown-destination messages.
    pub fn suggest_locations(&self, name: &str) -> Vec<String> {
        suggest(name, self.locations.iter().map(|l| l.name.as_str()))
    }

    /// Commodity names resembling `name`, for unknown-commodity messages.
    pub fn suggest_commodities(&self, name: &str) -> Vec<String> {
        suggest(name, self.commodities.iter().map(|c| c.name.as_str()))
    }

    /// Build the shared price generator from a seed. Used by the loader.
    pub(crate) fn seeded_rng(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }
}

fn suggest<'a>(name: &str, candidates: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut scored: Vec<(f64, &str)> = candidates
        .map(|candidate| (strsim::jaro_winkler(name, candidate), candidate))
        .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
        .collect();
    scored.sort_by(|a, b| b.0.total_cmp(&a.0));
    scored
        .into_iter()
        .take(SUGGESTION_LIMIT)
        .map(|(_, candidate)| candidate.to_string())
        .collect()
}
