//! World-file loading and validation tests.

mod common;

use std::io::Write as _;

use startrader_lib::{load_world, parse_world, Error, PriceRange};

use common::{world_from, TEST_SEED, TRADE_WORLD};

fn parse_err(text: &str) -> Error {
    parse_world(text, "bad.world", TEST_SEED).expect_err("world must not parse")
}

fn assert_parse_failure_at(text: &str, expected_line: usize, fragment: &str) {
    match parse_err(text) {
        Error::Parse {
            file,
            line,
            message,
        } => {
            assert_eq!(file, "bad.world");
            assert_eq!(line, expected_line, "wrong line in: {message}");
            assert!(
                message.contains(fragment),
                "message '{message}' should mention '{fragment}'"
            );
        }
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn trade_world_loads_completely() {
    let world = world_from(TRADE_WORLD);

    assert_eq!(world.commodities().len(), 3);
    assert_eq!(world.locations().len(), 3);
    assert_eq!(world.missions().len(), 2);

    let terra = world.location_id_by_name("Terra Prime").unwrap();
    let hoth = world.location_id_by_name("Hoth").unwrap();
    let arrakis = world.location_id_by_name("Arrakis").unwrap();
    assert_eq!(world.distance(terra, hoth), 10);
    assert_eq!(world.distance(terra, arrakis), 7);
    assert_eq!(world.distance(hoth, arrakis), 11);

    let spice = world.commodity_id_by_name("Spice").unwrap();
    let gems = world.commodity_id_by_name("Gems").unwrap();
    assert_eq!(world.commodity(spice).description, "Good on everything");

    // Offerings keep file order and their configured ranges.
    let hoth_offerings = &world.location(hoth).offerings;
    assert_eq!(hoth_offerings.len(), 3);
    assert_eq!(hoth_offerings[2].commodity, gems);
    assert_eq!(hoth_offerings[2].range, PriceRange { low: 7, high: 7 });

    // The first mission is assigned and the mission order matches the file.
    assert_eq!(world.player().mission, Some(0));
    assert_eq!(world.mission(0).location, hoth);
    assert_eq!(world.mission(0).quantity, 3);
    assert_eq!(world.mission(0).reward, 500);
    assert_eq!(world.mission(1).title, "Coming Home");
    assert!(!world.all_missions_complete());

    // Player and ship come from the PLAYER line; the tank starts full.
    assert_eq!(world.player().location, terra);
    assert_eq!(world.player().money, 1000);
    assert_eq!(world.player().ship.cargo_capacity(), 50);
    assert_eq!(world.player().ship.fuel_capacity(), 40);
    assert_eq!(world.player().ship.fuel(), 40);
    assert_eq!(world.player().ship.total_cargo(), 0);
}

#[test]
fn initial_prices_exist_only_at_the_starting_location() {
    let world = world_from(TRADE_WORLD);
    let terra = world.location_id_by_name("Terra Prime").unwrap();
    let hoth = world.location_id_by_name("Hoth").unwrap();
    let fuel = world.commodity_id_by_name("Fuel").unwrap();
    let gems = world.commodity_id_by_name("Gems").unwrap();

    // Degenerate range, so the draw is predictable.
    assert_eq!(world.location(terra).current_price(fuel), Some(1));
    // Not offered here: explicit absence, not a sentinel price.
    assert_eq!(world.location(terra).current_price(gems), None);
    // Offered at an unvisited location, but nothing drawn yet.
    assert_eq!(world.location(hoth).current_price(fuel), None);
}

#[test]
fn comments_and_blank_lines_are_skipped_but_counted() {
    let text = "\
// a comment
COMMODITIES:

// another comment
Fuel#Juice
LOCATIONS:
Broken#NoCoordinates
";
    assert_parse_failure_at(text, 7, "LOCATIONS line needs 3 fields");
}

#[test]
fn two_field_locations_line_reports_its_line_number() {
    let text = "\
COMMODITIES:
Fuel#Juice
LOCATIONS:
Alpha#Home#0,0
Beta#MissingCoords
";
    assert_parse_failure_at(text, 5, "LOCATIONS line needs 3 fields");
}

#[test]
fn data_before_any_section_header_is_rejected() {
    assert_parse_failure_at("Fuel#Juice\n", 1, "before any section header");
}

#[test]
fn non_integer_coordinate_is_rejected() {
    let text = "\
COMMODITIES:
Fuel#Juice
LOCATIONS:
Alpha#Home#zero,0
";
    assert_parse_failure_at(text, 4, "invalid integer 'zero'");
}

#[test]
fn three_value_coordinate_pair_is_rejected() {
    let text = "\
COMMODITIES:
Fuel#Juice
LOCATIONS:
Alpha#Home#0,0,0
";
    assert_parse_failure_at(text, 4, "expected 2 comma-separated values");
}

#[test]
fn even_field_count_prices_line_is_rejected() {
    let text = "\
COMMODITIES:
Fuel#Juice
LOCATIONS:
Alpha#Home#0,0
PRICES:
Alpha#Fuel
";
    assert_parse_failure_at(text, 6, "odd number of fields");
}

#[test]
fn bare_location_prices_line_is_rejected() {
    let text = "\
COMMODITIES:
Fuel#Juice
LOCATIONS:
Alpha#Home#0,0
PRICES:
Alpha
";
    assert_parse_failure_at(text, 6, "odd number of fields");
}

#[test]
fn inverted_price_range_is_rejected() {
    let text = "\
COMMODITIES:
Fuel#Juice
LOCATIONS:
Alpha#Home#0,0
PRICES:
Alpha#Fuel#9,3
";
    assert_parse_failure_at(text, 6, "low 9 exceeds high 3");
}

#[test]
fn unknown_references_fail_at_their_line() {
    let unknown_location = "\
COMMODITIES:
Fuel#Juice
LOCATIONS:
Alpha#Home#0,0
PRICES:
Atlantis#Fuel#1,2
";
    assert_parse_failure_at(unknown_location, 6, "unknown location 'Atlantis'");

    let unknown_commodity = "\
COMMODITIES:
Fuel#Juice
LOCATIONS:
Alpha#Home#0,0
MISSIONS:
Task#Desc#Alpha#Unobtanium#1#10
";
    assert_parse_failure_at(unknown_commodity, 6, "unknown commodity 'Unobtanium'");
}

#[test]
fn references_resolve_against_already_loaded_entities_only() {
    // Resolution is immediate, so a PRICES line cannot reference a
    // location that is only defined further down the file.
    let text = "\
COMMODITIES:
Fuel#Juice
PRICES:
Beta#Fuel#1,2
LOCATIONS:
Beta#Defined too late#0,0
";
    assert_parse_failure_at(text, 4, "unknown location 'Beta'");
}

#[test]
fn mission_line_with_wrong_arity_is_rejected() {
    let text = "\
COMMODITIES:
Fuel#Juice
LOCATIONS:
Alpha#Home#0,0
MISSIONS:
Task#Desc#Alpha#Fuel#3
";
    assert_parse_failure_at(text, 6, "MISSIONS line needs 6 fields");
}

#[test]
fn negative_quantities_in_the_file_are_rejected() {
    let text = "\
COMMODITIES:
Fuel#Juice
LOCATIONS:
Alpha#Home#0,0
PLAYER:
Alpha#-5#10#10
";
    assert_parse_failure_at(text, 6, "invalid integer '-5'");
}

#[test]
fn duplicate_names_are_rejected() {
    let duplicate_commodity = "\
COMMODITIES:
Fuel#Juice
Fuel#More juice
";
    assert_parse_failure_at(duplicate_commodity, 3, "duplicate commodity name 'Fuel'");

    let duplicate_location = "\
LOCATIONS:
Alpha#Home#0,0
Alpha#Again#1,1
";
    assert_parse_failure_at(duplicate_location, 3, "duplicate location name 'Alpha'");
}

#[test]
fn duplicate_player_definition_is_rejected() {
    let text = "\
LOCATIONS:
Alpha#Home#0,0
PLAYER:
Alpha#10#10#10
Alpha#20#20#20
";
    assert_parse_failure_at(text, 5, "duplicate PLAYER definition");
}

#[test]
fn missing_player_section_is_fatal() {
    let text = "\
COMMODITIES:
Fuel#Juice
LOCATIONS:
Alpha#Home#0,0
";
    match parse_err(text) {
        Error::MissingPlayer { file } => assert_eq!(file, "bad.world"),
        other => panic!("expected missing player error, got {other:?}"),
    }
}

#[test]
fn each_parse_produces_a_fresh_world() {
    let mut first = world_from(TRADE_WORLD);
    first.player_mut().money = 1;
    first.player_mut().ship.set_fuel(0);

    let second = world_from(TRADE_WORLD);
    assert_eq!(second.player().money, 1000);
    assert_eq!(second.player().ship.fuel(), 40);
}

#[test]
fn load_world_reads_from_disk() {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    file.write_all(TRADE_WORLD.as_bytes()).expect("write world");
    let world = load_world(file.path()).expect("world loads from disk");
    assert_eq!(world.locations().len(), 3);
}

#[test]
fn missing_file_reports_the_path() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("missing.world");
    match load_world(&path).expect_err("file does not exist") {
        Error::WorldFile { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected world file error, got {other:?}"),
    }
}
