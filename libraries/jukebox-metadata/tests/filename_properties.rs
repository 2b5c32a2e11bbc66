//! Property-based tests for the filename heuristics
//!
//! Uses proptest to check invariants across many generated filenames.

use jukebox_metadata::{clean_filename, parse_filename};
use proptest::prelude::*;

// ===== Helpers =====

/// Names that are already normalized: no dots, no brackets, no leading digits
fn clean_name() -> impl Strategy<Value = String> {
    prop::collection::vec("[A-Za-z][A-Za-z' ]{0,15}[A-Za-z]", 1..4)
        .prop_map(|segments| segments.join(" - "))
}

fn extension() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["mp3", "flac", "ogg", "wav", "m4a", "opus"])
        .prop_map(str::to_string)
}

// ===== Property Tests =====

proptest! {
    /// Property: parsing never panics and always yields a title
    #[test]
    fn parse_is_total(input in "\\PC*") {
        let parsed = parse_filename(&input);
        prop_assert!(parsed.title.is_some());
    }

    /// Property: the track number is never filled in
    #[test]
    fn track_number_stays_absent(input in "[0-9A-Za-z .\\-\\[\\]()]{0,40}") {
        prop_assert_eq!(parse_filename(&input).track_number, None);
    }

    /// Property: cleaning an already clean name changes nothing
    #[test]
    fn clean_is_idempotent_on_clean_names(name in clean_name()) {
        let once = clean_filename(&name);
        prop_assert_eq!(clean_filename(&once), once.clone());
        prop_assert_eq!(once, name.trim().to_string());
    }

    /// Property: extension and bracket tags do not change the guess
    #[test]
    fn decorations_do_not_change_the_guess(
        name in clean_name(),
        ext in extension(),
        tag in "[A-Za-z0-9 ]{0,12}",
    ) {
        let decorated = format!("{} [{}].{}", name, tag, ext);
        prop_assert_eq!(parse_filename(&decorated), parse_filename(&name));
    }

    /// Property: two-segment names split into artist and title
    #[test]
    fn two_segments_map_to_artist_and_title(
        artist in "[A-Za-z][a-z]{1,10}",
        title in "[A-Za-z][A-Za-z ]{0,10}[a-z]",
    ) {
        let parsed = parse_filename(&format!("{} - {}.mp3", artist, title));
        prop_assert_eq!(parsed.artist, Some(artist));
        prop_assert_eq!(parsed.title, Some(title));
    }
}
