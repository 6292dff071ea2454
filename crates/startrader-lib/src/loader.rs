//! World-definition file loader.
//!
//! The world format is line-oriented UTF-8 text. `//` lines are comments
//! and blank lines are skipped. A line equal to one of the five section
//! headers (`COMMODITIES:`, `LOCATIONS:`, `PRICES:`, `MISSIONS:`,
//! `PLAYER:`) selects the active section; every other line is data parsed
//! under that section's field grammar, with fields separated by `#` and
//! coordinate/range pairs by `,`. Name references are resolved against
//! entities already registered, so COMMODITIES and LOCATIONS must be fully
//! consumed before PRICES, MISSIONS, or PLAYER mention them.
//!
//! Loading is fatal on the first malformed line: each data line parses to a
//! tagged result, and an error is reported with the source name and the
//! 1-based line number. A successful load yields a fresh [`World`]; nothing
//! from a previous load can leak in.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use tracing::debug;

use crate::error::{Error, Result};
use crate::geometry::Coord;
use crate::world::{
    Commodity, CommodityId, Location, LocationId, Mission, Offering, Player, PriceRange, Ship,
    World, DEFAULT_SEED,
};

const COMMENT: &str = "//";
const SEPARATOR: char = '#';
const PAIR_SEPARATOR: char = ',';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Commodities,
    Locations,
    Prices,
    Missions,
    Player,
}

impl Section {
    fn from_header(line: &str) -> Option<Self> {
        match line {
            "COMMODITIES:" => Some(Self::Commodities),
            "LOCATIONS:" => Some(Self::Locations),
            "PRICES:" => Some(Self::Prices),
            "MISSIONS:" => Some(Self::Missions),
            "PLAYER:" => Some(Self::Player),
            _ => None,
        }
    }
}

/// Per-line parse outcome. Failures carry a reason; the caller attaches the
/// source name and line number.
type LineResult = std::result::Result<(), String>;

/// Load a world file with the default price seed.
pub fn load_world(path: &Path) -> Result<World> {
    load_world_seeded(path, DEFAULT_SEED)
}

/// Load a world file with an explicit price seed.
pub fn load_world_seeded(path: &Path, seed: u64) -> Result<World> {
    let text = fs::read_to_string(path).map_err(|source| Error::WorldFile {
        path: path.to_path_buf(),
        source,
    })?;
    parse_world(&text, &path.display().to_string(), seed)
}

/// Parse world-definition text. `file` names the source in error messages.
pub fn parse_world(text: &str, file: &str, seed: u64) -> Result<World> {
    let mut builder = WorldBuilder::default();
    let mut section: Option<Section> = None;

    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with(COMMENT) {
            continue;
        }
        if let Some(header) = Section::from_header(line) {
            section = Some(header);
            continue;
        }

        let result = match section {
            None => Err("data line before any section header".to_string()),
            Some(Section::Commodities) => builder.commodity_line(line),
            Some(Section::Locations) => builder.location_line(line),
            Some(Section::Prices) => builder.price_line(line),
            Some(Section::Missions) => builder.mission_line(line),
            Some(Section::Player) => builder.player_line(line),
        };
        if let Err(message) = result {
            return Err(Error::Parse {
                file: file.to_string(),
                line: index + 1,
                message,
            });
        }
    }

    builder.finish(file, seed)
}

#[derive(Debug, Default)]
struct WorldBuilder {
    commodities: Vec<Commodity>,
    commodity_names: HashMap<String, CommodityId>,
    locations: Vec<Location>,
    location_names: HashMap<String, LocationId>,
    missions: Vec<Mission>,
    player: Option<Player>,
}

impl WorldBuilder {
    fn commodity_line(&mut self, line: &str) -> LineResult {
        let fields = split_fields(line, 2, "COMMODITIES")?;
        let name = fields[0].to_string();
        if self.commodity_names.contains_key(&name) {
            return Err(format!("duplicate commodity name '{name}'"));
        }
        self.commodity_names.insert(name.clone(), self.commodities.len());
        self.commodities.push(Commodity {
            name,
            description: fields[1].to_string(),
        });
        Ok(())
    }

    fn location_line(&mut self, line: &str) -> LineResult {
        let fields = split_fields(line, 3, "LOCATIONS")?;
        let name = fields[0].to_string();
        if self.location_names.contains_key(&name) {
            return Err(format!("duplicate location name '{name}'"));
        }
        let (x, y) = parse_pair(fields[2])?;
        self.location_names.insert(name.clone(), self.locations.len());
        self.locations.push(Location {
            name,
            description: fields[1].to_string(),
            coord: Coord { x, y },
            offerings: Vec::new(),
            prices: Vec::new(),
        });
        Ok(())
    }

    fn price_line(&mut self, line: &str) -> LineResult {
        let fields: Vec<&str> = line.split(SEPARATOR).collect();
        if fields.len() < 3 || fields.len() % 2 == 0 {
            return Err(format!(
                "PRICES line needs an odd number of fields (3 or more), found {}",
                fields.len()
            ));
        }
        let location = self.resolve_location(fields[0])?;
        for pair in fields[1..].chunks(2) {
            let commodity = self.resolve_commodity(pair[0])?;
            let (low, high): (u32, u32) = parse_pair(pair[1])?;
            if low > high {
                return Err(format!("price range low {low} exceeds high {high}"));
            }
            self.locations[location].offerings.push(Offering {
                commodity,
                range: PriceRange { low, high },
            });
        }
        Ok(())
    }

    fn mission_line(&mut self, line: &str) -> LineResult {
        let fields = split_fields(line, 6, "MISSIONS")?;
        let location = self.resolve_location(fields[2])?;
        let commodity = self.resolve_commodity(fields[3])?;
        let quantity = parse_int(fields[4])?;
        let reward = parse_int(fields[5])?;
        self.missions.push(Mission {
            title: fields[0].to_string(),
            description: fields[1].to_string(),
            location,
            commodity,
            quantity,
            reward,
            complete: false,
        });
        Ok(())
    }

    fn player_line(&mut self, line: &str) -> LineResult {
        let fields = split_fields(line, 4, "PLAYER")?;
        if self.player.is_some() {
            return Err("duplicate PLAYER definition".to_string());
        }
        let location = self.resolve_location(fields[0])?;
        let money = parse_int(fields[1])?;
        let cargo_capacity = parse_int(fields[2])?;
        let fuel_capacity = parse_int(fields[3])?;
        self.player = Some(Player {
            location,
            money,
            mission: None,
            ship: Ship::new(cargo_capacity, fuel_capacity),
        });
        Ok(())
    }

    fn resolve_location(&self, name: &str) -> std::result::Result<LocationId, String> {
        self.location_names
            .get(name)
            .copied()
            .ok_or_else(|| format!("unknown location '{name}'"))
    }

    fn resolve_commodity(&self, name: &str) -> std::result::Result<CommodityId, String> {
        self.commodity_names
            .get(name)
            .copied()
            .ok_or_else(|| format!("unknown commodity '{name}'"))
    }

    fn finish(self, file: &str, seed: u64) -> Result<World> {
        let Some(player) = self.player else {
            return Err(Error::MissingPlayer {
                file: file.to_string(),
            });
        };
        let start = player.location;
        let mut world = World {
            commodities: self.commodities,
            commodity_names: self.commodity_names,
            locations: self.locations,
            location_names: self.location_names,
            missions: self.missions,
            player,
            rng: World::seeded_rng(seed),
        };
        // Initial placement counts as an arrival.
        world.draw_prices(start);
        world.player.mission = world.next_mission();
        debug!(
            file,
            commodities = world.commodities.len(),
            locations = world.locations.len(),
            missions = world.missions.len(),
            "loaded world"
        );
        Ok(world)
    }
}

fn split_fields<'a>(
    line: &'a str,
    expected: usize,
    section: &str,
) -> std::result::Result<Vec<&'a str>, String> {
    let fields: Vec<&str> = line.split(SEPARATOR).collect();
    if fields.len() != expected {
        return Err(format!(
            "{section} line needs {expected} fields, found {}",
            fields.len()
        ));
    }
    Ok(fields)
}

fn parse_pair<T: FromStr>(field: &str) -> std::result::Result<(T, T), String> {
    let parts: Vec<&str> = field.split(PAIR_SEPARATOR).collect();
    if parts.len() != 2 {
        return Err(format!(
            "expected 2 comma-separated values in '{field}', found {}",
            parts.len()
        ));
    }
    Ok((parse_int(parts[0])?, parse_int(parts[1])?))
}

fn parse_int<T: FromStr>(field: &str) -> std::result::Result<T, String> {
    field
        .parse()
        .map_err(|_| format!("invalid integer '{field}'"))
}
