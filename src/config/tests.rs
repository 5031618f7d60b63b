// hotlist-rs: Encapsulation Showcase
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{Config, ConfigLoader, VehicleConfig};
use crate::error::{ConfigError, HotlistError};
use crate::logging::LogLevel;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.global.output_log_level, LogLevel::WARN);
    assert_eq!(config.global.file_log_level, LogLevel::TRACE);
    assert!(config.global.log_file.is_none());
    assert_eq!(
        config.fleet,
        vec![VehicleConfig::new("Ford", "Explorer", 1000, 2000)]
    );
    assert!(config.validate().is_ok());
}

#[test]
fn test_empty_source_yields_defaults() {
    let config = Config::parse("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_parse_fleet_replaces_default() {
    let config = Config::parse(
        r#"
[[fleet]]
make = "Toyota"
model = "4Runner"
first_gear_rpm = 1200
second_gear_rpm = 2600

[[fleet]]
make = "Honda"
model = "Pilot"
first_gear_rpm = 900
second_gear_rpm = 1800
"#,
    )
    .unwrap();

    let labels: Vec<_> = config.fleet.iter().map(VehicleConfig::label).collect();
    assert_eq!(labels, ["Toyota 4Runner", "Honda Pilot"]);
}

#[test]
fn test_parse_rejects_unknown_keys() {
    assert!(Config::parse("[global]\ncolour = \"red\"\n").is_err());
    assert!(Config::parse("[garage]\nsize = 2\n").is_err());
}

#[test]
fn test_validate_names_offending_entry() {
    let mut config = Config::default();
    config
        .fleet
        .push(VehicleConfig::new("Ford", "Bronco", 2000, 1500));

    let err = config.validate().unwrap_err();
    let HotlistError::Config(inner) = &err else {
        panic!("expected a config error, got {err:?}");
    };
    let ConfigError::InvalidValue { section, key, .. } = inner.as_ref() else {
        panic!("expected InvalidValue, got {inner:?}");
    };
    assert_eq!(section, "fleet.1");
    assert_eq!(key, "second_gear_rpm");
}

#[test]
fn test_validate_below_idle_and_blank_identity() {
    let mut config = Config::default();
    config.fleet = vec![VehicleConfig::new("Ford", "Explorer", 50, 2000)];
    insta::assert_snapshot!(
        config.validate().unwrap_err().to_string(),
        @"config error: invalid value for 'first_gear_rpm' in section '[fleet.0]': first gear threshold 50 rpm is below idle (100 rpm)"
    );

    config.fleet = vec![VehicleConfig::new(" ", "Explorer", 1000, 2000)];
    let err = config.validate().unwrap_err();
    assert!(matches!(
        err,
        HotlistError::Config(ref inner)
            if matches!(**inner, ConfigError::InvalidValue { ref key, .. } if key == "make")
    ));
}

#[test]
fn test_loader_rejects_invalid_fleet() {
    let result = Config::parse(
        r#"
[[fleet]]
make = "Ford"
model = "Explorer"
first_gear_rpm = 3000
second_gear_rpm = 2000
"#,
    );
    assert!(result.is_err());
}

#[test]
fn test_loader_override() {
    let config = ConfigLoader::new()
        .add_toml_str("[global]\noutput_log_level = 1\n")
        .set("global.output_log_level", 4)
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(config.global.output_log_level, LogLevel::DEBUG);
}

#[test]
fn test_loader_override_from_cli_string() {
    // CLI flags arrive as strings and must still deserialize as levels.
    let config = ConfigLoader::new()
        .add_toml_str("[global]\noutput_log_level = 1\n")
        .set("global.output_log_level", "4".to_string())
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(config.global.output_log_level, LogLevel::DEBUG);
}

#[test]
fn test_loader_env_overrides_toml() {
    // SAFETY: the prefix is unique to this test, no other test reads it.
    unsafe {
        std::env::set_var("HLENVTEST_GLOBAL__OUTPUT_LOG_LEVEL", "3");
    }

    let result = ConfigLoader::new()
        .add_toml_str("[global]\noutput_log_level = 1\n")
        .with_env_prefix("HLENVTEST")
        .build();

    // SAFETY: same as above
    unsafe {
        std::env::remove_var("HLENVTEST_GLOBAL__OUTPUT_LOG_LEVEL");
    }

    let config = result.unwrap();
    assert_eq!(config.global.output_log_level, LogLevel::INFO);
}

#[test]
fn test_loader_rejects_unrelated_prefixed_env() {
    // SAFETY: the prefix is unique to this test, no other test reads it.
    unsafe {
        std::env::set_var("HLSTRAYTEST_HOME", "/x");
    }

    let result = ConfigLoader::new().with_env_prefix("HLSTRAYTEST").build();

    // SAFETY: same as above
    unsafe {
        std::env::remove_var("HLSTRAYTEST_HOME");
    }

    let err = result.unwrap_err();
    assert!(err.to_string().contains("home"), "unexpected error: {err}");
}

#[test]
fn test_loader_later_source_wins() {
    let config = ConfigLoader::new()
        .add_toml_str("[global]\nfile_log_level = 1\noutput_log_level = 1\n")
        .add_toml_str("[global]\nfile_log_level = 3\n")
        .build()
        .unwrap();
    assert_eq!(config.global.file_log_level, LogLevel::INFO);
    assert_eq!(config.global.output_log_level, LogLevel::ERROR);
}

#[test]
fn test_format_sources() {
    let loader = ConfigLoader::new()
        .add_toml_str("")
        .add_toml_file_optional("does/not/exist.toml");
    assert_eq!(loader.format_sources(), ["1. [string] <string>"]);
}

#[test]
fn test_format_options() {
    let lines = Config::default().format_options();
    assert_eq!(
        lines,
        [
            "global.output_log_level = 2",
            "global.file_log_level   = 5",
            "global.log_file         = ",
            "fleet.0.make            = Ford",
            "fleet.0.model           = Explorer",
            "fleet.0.first_gear_rpm  = 1000",
            "fleet.0.second_gear_rpm = 2000",
        ]
    );
}
