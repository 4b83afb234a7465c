// Unit tests for error module

use crate::error::PokedexError;

use client_core::error::ConfigError;

use common::ErrorLocation;

use std::panic::Location;

/// **VALUE**: Verifies config errors keep their detail when lifted into the app error.
///
/// **WHY THIS MATTERS**: The binary prints this error and exits; the user needs to
/// see which file was broken and why.
///
/// **BUG THIS CATCHES**: Would catch the `From` impl discarding the inner message.
#[test]
fn given_config_error_when_converted_then_message_preserved() {
    // GIVEN: A config validation error
    let inner = ConfigError::ValidationError {
        location: ErrorLocation::from(Location::caller()),
        reason: String::from("Invalid list limit: 0 (must be 1-2000)"),
    };

    // WHEN: Converting
    let err = PokedexError::from(inner);

    // THEN: Config variant carrying the reason
    let rendered = err.to_string();
    assert!(matches!(err, PokedexError::Config { .. }));
    assert!(rendered.starts_with("Config Error:"));
    assert!(rendered.contains("Invalid list limit"));
}

#[test]
fn given_pokedex_error_when_formatted_then_includes_location() {
    let err = PokedexError::Pokedex {
        message: String::from("Failed to create data directory"),
        location: ErrorLocation::from(Location::caller()),
    };

    let rendered = err.to_string();

    assert!(rendered.contains("Failed to create data directory"));
    assert!(rendered.contains("error.rs"));
}
