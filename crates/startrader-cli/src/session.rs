//! The interactive command loop.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use startrader_lib::{engine, World};

use crate::command::{parse_command, Command};
use crate::output;

/// Responses to input the tokenizer could not make sense of, rotated so
/// repeated fumbling does not read like a broken record.
const INVALID: [&str; 5] = ["Huh?", "What?", "Pardon?", "Say again?", "I don't understand."];

/// Run a loaded world to completion.
///
/// Loops until every mission is complete (victory, with a final status
/// report) or the player quits (no final report). Reaching end-of-input is
/// treated like quitting.
pub fn run(world: &mut World) -> Result<()> {
    println!("Welcome To Star Trader!");
    println!("--------------------------");
    output::print_commands();
    println!("--------------------------\n");

    output::print_location(world, world.player().location);
    if let Some(mission) = world.player().mission {
        output::print_mission(world, mission);
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut fumbles = 0usize;

    while !world.all_missions_complete() {
        println!("What would you like to do?");
        print!(">");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            println!("Bye!");
            return Ok(());
        };
        let line = line?;
        let Some(command) = parse_command(&line) else {
            println!("{}\n", INVALID[fumbles % INVALID.len()]);
            fumbles += 1;
            continue;
        };

        match command {
            Command::Quit => {
                println!("Bye!");
                return Ok(());
            }
            Command::Travel(destination) => match engine::travel(world, &destination) {
                Ok(travelled) => output::print_travelled(world, &travelled),
                Err(rejection) => println!("{rejection}\n"),
            },
            Command::Buy {
                quantity,
                commodity,
            } => match engine::buy(world, &commodity, quantity) {
                Ok(purchase) => println!(
                    "I bought {} {}.\n",
                    purchase.quantity,
                    world.commodity(purchase.commodity).name
                ),
                Err(rejection) => println!("{rejection}\n"),
            },
            Command::Sell {
                quantity,
                commodity,
            } => match engine::sell(world, &commodity, quantity) {
                Ok(sale) => println!(
                    "I sold {} {}.\n",
                    sale.quantity,
                    world.commodity(sale.commodity).name
                ),
                Err(rejection) => println!("{rejection}\n"),
            },
            Command::List(target) => match engine::list(world, &target) {
                Ok(listing) => output::print_listing(&listing),
                Err(rejection) => println!("{rejection}\n"),
            },
        }
    }

    println!("Finally!  You won!");
    if let Ok(listing) = engine::list(world, "status") {
        output::print_listing(&listing);
    }
    Ok(())
}
