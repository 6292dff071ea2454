//! Shared fixtures for world-format and engine tests.

use startrader_lib::{parse_world, World};

/// Seed used by fixture worlds unless a test pins its own.
pub const TEST_SEED: u64 = 42;

/// A compact but complete world: three locations, three commodities,
/// two ordered missions. All price ranges are degenerate (`low == high`)
/// so trade arithmetic in tests is independent of the draw.
///
/// Distances: Terra Prime-Hoth 10, Terra Prime-Arrakis 7,
/// Hoth-Arrakis 11.
#[allow(dead_code)]
pub const TRADE_WORLD: &str = "\
// fixture: trading world
COMMODITIES:
Fuel#Everybody needs fuel to get around
Spice#Good on everything
Gems#Shiny and heavy
LOCATIONS:
Terra Prime#Nobody really liked Earth anyway#0,0
Hoth#Cold and far away#10,0
Arrakis#Sand as far as sensors reach#3,4
PRICES:
Terra Prime#Fuel#1,1#Spice#10,10
Hoth#Fuel#2,2#Spice#25,25#Gems#7,7
Arrakis#Spice#5,5
MISSIONS:
Getting Started#Someone on Hoth wants Spice.#Hoth#Spice#3#500
Coming Home#Bring Spice back to Terra Prime.#Terra Prime#Spice#1#250
PLAYER:
Terra Prime#1000#50#40
";

/// The round-trip scenario: two locations 10 apart, Fuel priced 1,
/// cargo capacity 0, fuel capacity 10. No missions.
#[allow(dead_code)]
pub const ROUND_TRIP_WORLD: &str = "\
COMMODITIES:
Fuel#Juice for the engines
LOCATIONS:
Alpha#Home port#0,0
Beta#The far dock#10,0
PRICES:
Alpha#Fuel#1,1
Beta#Fuel#1,1
PLAYER:
Alpha#100#0#10
";

/// Parse fixture text with the fixture seed, panicking on failure.
#[allow(dead_code)]
pub fn world_from(text: &str) -> World {
    parse_world(text, "fixture.world", TEST_SEED).expect("fixture world parses")
}
