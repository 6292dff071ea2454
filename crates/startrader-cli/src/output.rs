//! Plain-text rendering of engine results.
//!
//! All wording lives here; the engine only produces typed outcomes. The
//! block formats (`[COMMODITIES]`, `[DESTINATIONS]`, `[STATUS]`,
//! `[COMMANDS]`) follow the classic world-file game conventions.

use startrader_lib::{Listing, LocationId, MissionId, Travelled, World};

/// Print a location banner: `-Name-` followed by its description.
pub fn print_location(world: &World, id: LocationId) {
    let location = world.location(id);
    println!("-{}-", location.name);
    println!("{}\n", location.description);
}

/// Print a mission briefing.
pub fn print_mission(world: &World, id: MissionId) {
    let mission = world.mission(id);
    println!("Mission: {}", mission.title);
    println!("{}\n", mission.description);
}

/// Print the results of a successful travel: the new location, and any
/// mission completion it triggered.
pub fn print_travelled(world: &World, travelled: &Travelled) {
    print_location(world, travelled.destination);
    if let Some(outcome) = &travelled.mission {
        println!("***Mission Completed***\n");
        if let Some(next) = outcome.next {
            print_mission(world, next);
        }
    }
}

/// Print one listing block.
pub fn print_listing(listing: &Listing) {
    match listing {
        Listing::Commodities(quotes) => {
            println!("[COMMODITIES]");
            for quote in quotes {
                match quote.price {
                    Some(price) => {
                        println!("{} - {}: {}", quote.name, quote.description, price)
                    }
                    None => println!("{} - {}: ?", quote.name, quote.description),
                }
            }
            println!();
        }
        Listing::Destinations(entries) => {
            println!("[DESTINATIONS]");
            for entry in entries {
                println!("{}: {}", entry.name, entry.distance);
            }
            println!();
        }
        Listing::Status(report) => {
            println!("[STATUS]");
            println!("Location: {}", report.location);
            match &report.mission {
                Some(mission) => {
                    println!("Mission: {} - {}", mission.title, mission.description)
                }
                None => println!("Mission: none"),
            }
            println!("Money: {}", report.money);
            println!("Ship:");
            println!("Fuel Capacity - {}", report.fuel_capacity);
            println!("Fuel - {}", report.fuel);
            println!("Cargo Capacity - {}", report.cargo_capacity);
            println!("Total Cargo Quantity - {}", report.total_cargo);
            println!("Inventory - ");
            for (name, quantity) in &report.inventory {
                println!("  {}: {}", name, quantity);
            }
            println!();
        }
        Listing::Commands => print_commands(),
    }
}

/// Print the command help block.
pub fn print_commands() {
    println!("[COMMANDS]");
    println!("travel [destination]");
    println!("   -to travel to the specified destination");
    println!("buy [quantity] [commodity]");
    println!("   -to buy the specified commodity");
    println!("sell [quantity] [commodity]");
    println!("   -to sell the specified commodity");
    println!("list [commodities|destinations|status|commands]");
    println!("   -to list information:");
    println!("   -\"commodities\" to see the commodities available at the current location and their prices");
    println!("   -\"destinations\" to see the travel distances from the current location");
    println!("   -\"status\" to see information about the player's location, mission, money and ship");
    println!("   -\"commands\" to see these commands");
    println!("quit");
    println!("   -to quit without finishing\n");
}
