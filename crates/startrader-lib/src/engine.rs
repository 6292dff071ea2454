//! Game engine: travel, trading, listings, and mission progression.
//!
//! Every operation is a single atomic transition over `&mut World`: all
//! preconditions are checked before any state changes, and a [`Rejection`]
//! leaves the world exactly as it was. Rejections are the recoverable tier
//! of the error model — user-visible outcomes the command loop reports and
//! then moves past, never process failures.

use thiserror::Error;
use tracing::debug;

use crate::error::format_suggestions;
use crate::world::{CommodityId, LocationId, MissionId, World, FUEL_COMMODITY};

/// A rejected command. The world is guaranteed unchanged.
///
/// Display text is written in the captain's voice so the command loop can
/// print rejections verbatim.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Rejection {
    #[error("I don't know where {name} is.{}", format_suggestions(.suggestions))]
    UnknownDestination {
        name: String,
        suggestions: Vec<String>,
    },

    #[error("I don't have enough fuel to get to {destination}.")]
    InsufficientFuel {
        destination: String,
        required: u64,
        available: u32,
    },

    #[error("I don't know what {name} is.{}", format_suggestions(.suggestions))]
    UnknownCommodity {
        name: String,
        suggestions: Vec<String>,
    },

    #[error("I can't buy {commodity} here.")]
    CannotBuyHere { commodity: String },

    #[error("I can't buy {quantity} {commodity}.")]
    CannotAfford { commodity: String, quantity: i64 },

    #[error("I can't store that much Fuel.")]
    CannotStoreFuel { quantity: i64 },

    #[error("I can't store that much cargo.")]
    CannotStoreCargo { commodity: String, quantity: i64 },

    #[error("I can't sell {commodity} here.")]
    CannotSellHere { commodity: String },

    #[error("I can't sell {quantity} Fuel.")]
    CannotSellFuel { quantity: i64 },

    #[error("I can't sell {quantity} {commodity}.")]
    CannotSellCargo { commodity: String, quantity: i64 },

    #[error("I don't know how to list {target}.")]
    UnknownListTarget { target: String },
}

/// Report of a mission completed on arrival.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissionOutcome {
    pub mission: MissionId,
    pub reward: u64,
    /// The newly assigned mission, or `None` when the game is won.
    pub next: Option<MissionId>,
}

/// Successful travel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Travelled {
    pub destination: LocationId,
    pub distance: u64,
    pub mission: Option<MissionOutcome>,
}

/// Successful purchase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Purchase {
    pub commodity: CommodityId,
    pub quantity: u32,
    pub cost: u64,
}

/// Successful sale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sale {
    pub commodity: CommodityId,
    pub quantity: u32,
    pub proceeds: u64,
}

/// One offered commodity with its current price, for listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommodityQuote {
    pub name: String,
    pub description: String,
    pub price: Option<u32>,
}

/// One reachable destination with its travel distance, for listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestinationEntry {
    pub name: String,
    pub distance: u64,
}

/// Active mission summary, for the status listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissionSummary {
    pub title: String,
    pub description: String,
}

/// Snapshot of the player's situation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusReport {
    pub location: String,
    pub mission: Option<MissionSummary>,
    pub money: u64,
    pub fuel: u32,
    pub fuel_capacity: u32,
    pub cargo_capacity: u32,
    pub total_cargo: u32,
    /// Carried commodities with non-zero quantity, sorted by name.
    pub inventory: Vec<(String, u32)>,
}

/// Result of a `list` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing {
    Commodities(Vec<CommodityQuote>),
    Destinations(Vec<DestinationEntry>),
    Status(StatusReport),
    Commands,
}

/// Travel to the named destination.
///
/// Fuel cost equals the Manhattan distance. On success the player moves,
/// fresh prices are drawn at the destination, and the current mission is
/// checked for completion.
pub fn travel(world: &mut World, destination: &str) -> Result<Travelled, Rejection> {
    let Some(target) = world.location_id_by_name(destination) else {
        return Err(Rejection::UnknownDestination {
            name: destination.to_string(),
            suggestions: world.suggest_locations(destination),
        });
    };

    let origin = world.player().location;
    let distance = world.distance(origin, target);
    let available = world.player().ship.fuel();
    if distance > u64::from(available) {
        return Err(Rejection::InsufficientFuel {
            destination: world.location(target).name.clone(),
            required: distance,
            available,
        });
    }

    world.player_mut().ship.remove_fuel(distance as u32);
    world.player_mut().location = target;
    world.draw_prices(target);
    let mission = check_mission(world, target);

    debug!(
        destination = %world.location(target).name,
        distance,
        fuel = world.player().ship.fuel(),
        "travelled"
    );
    Ok(Travelled {
        destination: target,
        distance,
        mission,
    })
}

/// Buy `quantity` units of the named commodity at the current location.
///
/// Buying the distinguished `Fuel` commodity fills the fuel tank and is
/// checked against fuel capacity; everything else is cargo and is checked
/// against cargo capacity. A negative quantity is rejected as unaffordable.
pub fn buy(world: &mut World, commodity: &str, quantity: i64) -> Result<Purchase, Rejection> {
    let Some(id) = world.commodity_id_by_name(commodity) else {
        return Err(Rejection::UnknownCommodity {
            name: commodity.to_string(),
            suggestions: world.suggest_commodities(commodity),
        });
    };
    let name = world.commodity(id).name.clone();

    let here = world.player().location;
    let Some(price) = world.location(here).current_price(id) else {
        return Err(Rejection::CannotBuyHere { commodity: name });
    };

    let cost = if quantity < 0 {
        None
    } else {
        u64::from(price).checked_mul(quantity as u64)
    };
    let cost = match cost {
        Some(cost) if cost <= world.player().money => cost,
        _ => {
            return Err(Rejection::CannotAfford {
                commodity: name,
                quantity,
            })
        }
    };
    let wanted = quantity as u64;

    let ship = &world.player().ship;
    if name == FUEL_COMMODITY {
        if u64::from(ship.fuel()) + wanted > u64::from(ship.fuel_capacity()) {
            return Err(Rejection::CannotStoreFuel { quantity });
        }
    } else if u64::from(ship.total_cargo()) + wanted > u64::from(ship.cargo_capacity()) {
        return Err(Rejection::CannotStoreCargo {
            commodity: name,
            quantity,
        });
    }

    // Checks passed; `wanted` now provably fits in the relevant capacity.
    let amount = wanted as u32;
    world.player_mut().money -= cost;
    if name == FUEL_COMMODITY {
        world.player_mut().ship.add_fuel(amount);
    } else {
        world.player_mut().ship.add_cargo(id, amount);
    }

    debug!(commodity = %name, amount, cost, money = world.player().money, "bought");
    Ok(Purchase {
        commodity: id,
        quantity: amount,
        cost,
    })
}

/// Sell `quantity` units of the named commodity at the current location.
///
/// The location must offer the commodity even when it is sold straight out
/// of the hold; that gate is historical behavior, preserved deliberately.
pub fn sell(world: &mut World, commodity: &str, quantity: i64) -> Result<Sale, Rejection> {
    let Some(id) = world.commodity_id_by_name(commodity) else {
        return Err(Rejection::UnknownCommodity {
            name: commodity.to_string(),
            suggestions: world.suggest_commodities(commodity),
        });
    };
    let name = world.commodity(id).name.clone();

    let here = world.player().location;
    let Some(price) = world.location(here).current_price(id) else {
        return Err(Rejection::CannotSellHere { commodity: name });
    };

    let ship = &world.player().ship;
    let selling_fuel = name == FUEL_COMMODITY;
    let held = if selling_fuel {
        ship.fuel()
    } else {
        ship.quantity_of(id)
    };
    if quantity < 0 || quantity as u64 > u64::from(held) {
        return Err(if selling_fuel {
            Rejection::CannotSellFuel { quantity }
        } else {
            Rejection::CannotSellCargo {
                commodity: name,
                quantity,
            }
        });
    }

    let amount = quantity as u32;
    let proceeds = u64::from(price) * u64::from(amount);
    if selling_fuel {
        world.player_mut().ship.remove_fuel(amount);
    } else {
        world.player_mut().ship.remove_cargo(id, amount);
    }
    world.player_mut().money += proceeds;

    debug!(commodity = %name, amount, proceeds, money = world.player().money, "sold");
    Ok(Sale {
        commodity: id,
        quantity: amount,
        proceeds,
    })
}

/// Produce a read-only listing. Never mutates the world.
pub fn list(world: &World, target: &str) -> Result<Listing, Rejection> {
    match target {
        "commodities" => {
            let here = world.location(world.player().location);
            let quotes = here
                .offerings
                .iter()
                .map(|offering| CommodityQuote {
                    name: world.commodity(offering.commodity).name.clone(),
                    description: world.commodity(offering.commodity).description.clone(),
                    price: here.current_price(offering.commodity),
                })
                .collect();
            Ok(Listing::Commodities(quotes))
        }
        "destinations" => {
            let here = world.player().location;
            let entries = world
                .locations()
                .iter()
                .enumerate()
                .filter(|(id, _)| *id != here)
                .map(|(id, location)| DestinationEntry {
                    name: location.name.clone(),
                    distance: world.distance(here, id),
                })
                .collect();
            Ok(Listing::Destinations(entries))
        }
        "status" => {
            let player = world.player();
            let mission = player.mission.map(|id| {
                let mission = world.mission(id);
                MissionSummary {
                    title: mission.title.clone(),
                    description: mission.description.clone(),
                }
            });
            let mut inventory: Vec<(String, u32)> = player
                .ship
                .cargo()
                .map(|(id, quantity)| (world.commodity(id).name.clone(), quantity))
                .collect();
            inventory.sort();
            Ok(Listing::Status(StatusReport {
                location: world.location(player.location).name.clone(),
                mission,
                money: player.money,
                fuel: player.ship.fuel(),
                fuel_capacity: player.ship.fuel_capacity(),
                cargo_capacity: player.ship.cargo_capacity(),
                total_cargo: player.ship.total_cargo(),
                inventory,
            }))
        }
        "commands" => Ok(Listing::Commands),
        _ => Err(Rejection::UnknownListTarget {
            target: target.to_string(),
        }),
    }
}

/// Evaluate the player's current mission after arriving at `arrival`.
///
/// Only the active mission is checked — later missions whose conditions
/// happen to hold stay untouched until their turn comes, which keeps the
/// mission sequence strictly ordered.
fn check_mission(world: &mut World, arrival: LocationId) -> Option<MissionOutcome> {
    let current = world.player().mission?;
    let mission = world.mission(current);
    if mission.complete || mission.location != arrival {
        return None;
    }
    let commodity = mission.commodity;
    let required = mission.quantity;
    let reward = mission.reward;
    if world.player().ship.quantity_of(commodity) < required {
        return None;
    }

    world.mission_mut(current).complete = true;
    world.player_mut().ship.remove_cargo(commodity, required);
    world.player_mut().money += reward;
    let next = world.next_mission();
    world.player_mut().mission = next;

    debug!(
        mission = %world.mission(current).title,
        reward,
        remaining = world.missions().iter().filter(|m| !m.complete).count(),
        "mission completed"
    );
    Some(MissionOutcome {
        mission: current,
        reward,
        next,
    })
}
