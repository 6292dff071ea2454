//! Raw-input tokenizer for the interactive prompt.
//!
//! Turns one line of user input into a validated [`Command`], or `None`
//! when the line is malformed (unknown verb, wrong argument count,
//! non-integer quantity). The session loop reprompts on `None`; malformed
//! input never reaches the engine.

/// A validated player command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Travel(String),
    Buy { quantity: i64, commodity: String },
    Sell { quantity: i64, commodity: String },
    List(String),
    Quit,
}

/// Parse one input line. The verb is case-insensitive; destination,
/// commodity, and list-target arguments keep their exact case and may
/// contain spaces.
pub fn parse_command(input: &str) -> Option<Command> {
    let input = input.trim();
    let (verb, rest) = match input.split_once(' ') {
        Some((verb, rest)) => (verb, Some(rest.trim())),
        None => (input, None),
    };
    let rest = rest.filter(|rest| !rest.is_empty());

    match verb.to_ascii_lowercase().as_str() {
        "travel" => rest.map(|name| Command::Travel(name.to_string())),
        "buy" => parse_trade(rest?).map(|(quantity, commodity)| Command::Buy {
            quantity,
            commodity,
        }),
        "sell" => parse_trade(rest?).map(|(quantity, commodity)| Command::Sell {
            quantity,
            commodity,
        }),
        "list" => rest.map(|target| Command::List(target.to_string())),
        "quit" if rest.is_none() => Some(Command::Quit),
        _ => None,
    }
}

fn parse_trade(rest: &str) -> Option<(i64, String)> {
    let (quantity, commodity) = rest.split_once(' ')?;
    let quantity = quantity.parse().ok()?;
    let commodity = commodity.trim();
    if commodity.is_empty() {
        return None;
    }
    Some((quantity, commodity.to_string()))
}
