use crate::PokemonRef;

/// **VALUE**: Verifies digit-only input becomes an id and anything else a name.
///
/// **WHY THIS MATTERS**: The same command accepts `25` and `pikachu`; both must
/// hit `/pokemon/{nameOrId}` with the right segment.
///
/// **BUG THIS CATCHES**: Would catch names being lowercased (casing belongs to
/// the upstream API) or ids being treated as names.
#[test]
fn given_user_input_when_parsed_then_distinguishes_id_from_name() {
    assert_eq!("25".parse::<PokemonRef>().unwrap(), PokemonRef::Id(25));
    assert_eq!(
        " Pikachu ".parse::<PokemonRef>().unwrap(),
        PokemonRef::Name(String::from("Pikachu"))
    );
    assert_eq!(
        "mr-mime".parse::<PokemonRef>().unwrap(),
        PokemonRef::Name(String::from("mr-mime"))
    );
}

/// **VALUE**: Verifies empty and zero inputs are rejected up front.
///
/// **WHY THIS MATTERS**: An empty segment would request the listing endpoint
/// instead of a single entity.
///
/// **BUG THIS CATCHES**: Would catch a missing emptiness check.
#[test]
fn given_empty_or_zero_input_when_parsed_then_returns_error() {
    assert!("".parse::<PokemonRef>().is_err());
    assert!("   ".parse::<PokemonRef>().is_err());
    assert!("0".parse::<PokemonRef>().is_err());
    assert!("99999999999".parse::<PokemonRef>().is_err());
}

#[test]
fn given_ref_when_displayed_then_matches_path_segment() {
    assert_eq!(PokemonRef::Id(151).to_string(), "151");
    assert_eq!(PokemonRef::Name(String::from("mew")).to_string(), "mew");
}

/// **VALUE**: Verifies dot segments are rejected as names.
///
/// **WHY THIS MATTERS**: `.` and `..` vanish during URL normalization, so the request
/// would hit the listing endpoint instead of an entity.
///
/// **BUG THIS CATCHES**: Would catch a lookup of `..` being reported as an outage.
#[test]
fn given_dot_segment_input_when_parsed_then_returns_error() {
    assert!(".".parse::<PokemonRef>().is_err());
    assert!(" .. ".parse::<PokemonRef>().is_err());
    assert!("...".parse::<PokemonRef>().is_ok());

    assert!(!PokemonRef::Name(String::from("..")).is_addressable());
    assert!(!PokemonRef::Id(0).is_addressable());
    assert!(PokemonRef::Name(String::from("mr-mime")).is_addressable());
}
