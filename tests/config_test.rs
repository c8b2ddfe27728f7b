//! Configuration loading and validation

use std::fs;

use elevator_sim::config::{SimConfig, MAX_ELEVATORS, MAX_FLOORS};
use elevator_sim::simulation::{LoadTieBreak, NUM_ELEVATORS, NUM_FLOORS};

#[test]
fn test_default_config() {
    let config = SimConfig::default();
    assert_eq!(config.num_floors, NUM_FLOORS);
    assert_eq!(config.num_elevators, NUM_ELEVATORS);
    assert_eq!(config.tie_break, LoadTieBreak::Last);
    assert!(config.validate().is_ok());
}

#[test]
fn test_partial_toml_keeps_defaults() {
    let config = SimConfig::from_toml_str("num_floors = 12\n").unwrap();
    assert_eq!(config.num_floors, 12);
    assert_eq!(config.num_elevators, NUM_ELEVATORS);
    assert_eq!(config.tie_break, LoadTieBreak::Last);
}

#[test]
fn test_full_toml() {
    let config = SimConfig::from_toml_str(
        r#"
        num_floors = 8
        num_elevators = 2
        tie_break = "first"
        "#,
    )
    .unwrap();

    assert_eq!(
        config,
        SimConfig {
            num_floors: 8,
            num_elevators: 2,
            tie_break: LoadTieBreak::First,
        }
    );
}

#[test]
fn test_invalid_values_are_rejected() {
    let err = SimConfig::from_toml_str("num_floors = 1").unwrap_err();
    assert!(format!("{:#}", err).contains("num_floors must be at least 2"));

    let err = SimConfig::from_toml_str("num_elevators = 0").unwrap_err();
    assert!(format!("{:#}", err).contains("num_elevators must be at least 1"));

    assert!(SimConfig::from_toml_str("tie_break = \"random\"").is_err());
    assert!(SimConfig::from_toml_str("num_cabins = 4").is_err());
}

#[test]
fn test_oversized_fleet_is_rejected() {
    let at_limit = SimConfig {
        num_floors: MAX_FLOORS,
        num_elevators: MAX_ELEVATORS,
        ..SimConfig::default()
    };
    assert!(at_limit.validate().is_ok());

    let err = SimConfig::from_toml_str("num_floors = 2000000000").unwrap_err();
    assert!(format!("{:#}", err).contains("num_floors must be at most"));

    let too_many = SimConfig {
        num_elevators: MAX_ELEVATORS + 1,
        ..SimConfig::default()
    };
    let err = too_many.validate().unwrap_err();
    assert!(format!("{:#}", err).contains("num_elevators must be at most"));
}

#[test]
fn test_tie_break_from_str() {
    assert_eq!("last".parse::<LoadTieBreak>().unwrap(), LoadTieBreak::Last);
    assert_eq!("FIRST".parse::<LoadTieBreak>().unwrap(), LoadTieBreak::First);
    assert!("middle".parse::<LoadTieBreak>().is_err());
}

#[test]
fn test_load_from_file() {
    let path = std::env::temp_dir().join(format!("elevator_sim_config_{}.toml", std::process::id()));
    fs::write(&path, "num_elevators = 3\ntie_break = \"first\"\n").unwrap();

    let config = SimConfig::load(&path);
    fs::remove_file(&path).unwrap();

    let config = config.unwrap();
    assert_eq!(config.num_elevators, 3);
    assert_eq!(config.num_floors, NUM_FLOORS);
    assert_eq!(config.tie_break, LoadTieBreak::First);
}

#[test]
fn test_load_missing_file_names_path() {
    let path = std::env::temp_dir().join("elevator_sim_does_not_exist.toml");
    let err = SimConfig::load(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("elevator_sim_does_not_exist.toml"));
}
