//! Filename heuristics
//!
//! Guesses artist and title from names like `01. Artist - Title [Official Video].mp3`.
//! The guess is best-effort and never fails: anything that cannot be
//! recognised is simply left out of the result.
//!
//! Normalization runs first:
//! 1. drop the trailing extension
//! 2. drop every `[...]` and `(...)` group
//! 3. trim
//! 4. drop a leading track number (`01.`, `12 -`, `7 `)
//! 5. trim
//!
//! The cleaned name is then split on ` - `. One segment is a bare title,
//! two are `Artist - Title`, and more are `Artist - ... - Title` with the
//! middle segments discarded.

use jukebox_core::{ParsedMetadata, UNKNOWN_ARTIST};
use regex::Regex;
use std::sync::LazyLock;

// Last `.` up to end of string, not crossing another dot or a path separator
static EXTENSION_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\.[^./\\]+$").unwrap());

static BRACKETED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[.*?\]|\(.*?\)").unwrap());

static TRACK_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+[.\-\s]+").unwrap());

static SEPARATOR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+-\s+").unwrap());

// "Track 01", "TRACK1", "track_07", "Track #3"
static TRACK_LABEL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^track[\s\p{P}]*[0-9]+$").unwrap());

/// Filename metadata extractor
///
/// Stateless; a single instance can be shared freely between threads.
#[derive(Debug, Default, Clone, Copy)]
pub struct FilenameMetadataExtractor;

impl FilenameMetadataExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Parse a raw filename into a metadata guess
    pub fn parse(&self, filename: &str) -> ParsedMetadata {
        parse_filename(filename)
    }

    /// Normalize a raw filename (see module docs)
    pub fn clean(&self, filename: &str) -> String {
        clean_filename(filename)
    }
}

/// Normalize a filename before artist/title disambiguation.
///
/// Unbalanced brackets are left in place.
pub fn clean_filename(filename: &str) -> String {
    let without_extension = EXTENSION_RE.replace(filename, "");
    let without_brackets = BRACKETED_RE.replace_all(&without_extension, "");
    let trimmed = without_brackets.trim();
    let without_track = TRACK_PREFIX_RE.replace(trimmed, "");
    without_track.trim().to_string()
}

/// Guess `{title, artist}` from a filename.
///
/// `track_number` is never populated.
pub fn parse_filename(filename: &str) -> ParsedMetadata {
    let name = clean_filename(filename);

    let segments: Vec<&str> = SEPARATOR_RE.split(&name).map(str::trim).collect();

    match segments.as_slice() {
        [artist, title] => {
            let artist = if is_track_label(artist) {
                None
            } else {
                Some((*artist).to_string())
            };
            ParsedMetadata {
                title: Some((*title).to_string()),
                artist,
                track_number: None,
            }
        }
        [artist, .., title] => ParsedMetadata {
            title: Some((*title).to_string()),
            artist: Some((*artist).to_string()),
            track_number: None,
        },
        // Zero or one segment: no separator in the name
        _ => ParsedMetadata {
            title: Some(name.clone()),
            artist: Some(UNKNOWN_ARTIST.to_string()),
            track_number: None,
        },
    }
}

fn is_track_label(candidate: &str) -> bool {
    TRACK_LABEL_RE.is_match(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(title: Option<&str>, artist: Option<&str>) -> ParsedMetadata {
        ParsedMetadata {
            title: title.map(str::to_string),
            artist: artist.map(str::to_string),
            track_number: None,
        }
    }

    #[test]
    fn artist_dash_title() {
        assert_eq!(
            parse_filename("Daft Punk - One More Time.mp3"),
            parsed(Some("One More Time"), Some("Daft Punk"))
        );
    }

    #[test]
    fn track_prefix_and_bracket_tag_are_removed() {
        assert_eq!(
            parse_filename("01. Imagine Dragons - Believer [Official Video].flac"),
            parsed(Some("Believer"), Some("Imagine Dragons"))
        );
    }

    #[test]
    fn track_label_is_not_an_artist() {
        assert_eq!(
            parse_filename("Track 01 - Untitled.wav"),
            parsed(Some("Untitled"), None)
        );
    }

    #[test]
    fn track_label_variants() {
        for name in ["TRACK1 - Intro.mp3", "track_07 - Intro.mp3", "Track #3 - Intro.mp3"] {
            assert_eq!(parse_filename(name), parsed(Some("Intro"), None), "{name}");
        }
    }

    #[test]
    fn track_word_inside_a_real_artist_is_kept() {
        assert_eq!(
            parse_filename("Track Star - Song.mp3"),
            parsed(Some("Song"), Some("Track Star"))
        );
    }

    #[test]
    fn middle_segments_are_dropped() {
        assert_eq!(
            parse_filename("Artist - Album - Song Title.mp3"),
            parsed(Some("Song Title"), Some("Artist"))
        );
        assert_eq!(
            parse_filename("A - B - C - D.ogg"),
            parsed(Some("D"), Some("A"))
        );
    }

    #[test]
    fn no_separator_gives_unknown_artist() {
        assert_eq!(
            parse_filename("justasong.mp3"),
            parsed(Some("justasong"), Some(UNKNOWN_ARTIST))
        );
    }

    #[test]
    fn bracket_only_name_normalizes_to_empty_title() {
        assert_eq!(
            parse_filename("(Remastered 2020)[320kbps].mp3"),
            parsed(Some(""), Some(UNKNOWN_ARTIST))
        );
    }

    #[test]
    fn empty_input() {
        assert_eq!(parse_filename(""), parsed(Some(""), Some(UNKNOWN_ARTIST)));
    }

    #[test]
    fn only_the_last_extension_is_stripped() {
        assert_eq!(clean_filename("song.remix.mp3"), "song.remix");
    }

    #[test]
    fn name_without_extension_is_untouched() {
        assert_eq!(clean_filename("Daft Punk - Aerodynamic"), "Daft Punk - Aerodynamic");
    }

    #[test]
    fn all_bracket_groups_are_removed() {
        assert_eq!(
            clean_filename("Song (Live) [HD] (Remastered).mp3"),
            "Song"
        );
    }

    #[test]
    fn unbalanced_brackets_are_left_alone() {
        assert_eq!(clean_filename("Song (Live.mp3"), "Song (Live");
        assert_eq!(clean_filename("Song ]odd[.mp3"), "Song ]odd[");
    }

    #[test]
    fn track_prefix_forms() {
        assert_eq!(clean_filename("01. Song.mp3"), "Song");
        assert_eq!(clean_filename("12 - Song.mp3"), "Song");
        assert_eq!(clean_filename("7 Song.mp3"), "Song");
        assert_eq!(clean_filename("03-Song.mp3"), "Song");
    }

    #[test]
    fn digits_glued_to_letters_are_not_a_track_prefix() {
        assert_eq!(clean_filename("2Pac - Changes.mp3"), "2Pac - Changes");
    }

    #[test]
    fn segments_are_trimmed() {
        assert_eq!(
            parse_filename("  Artist   -   Title  .mp3"),
            parsed(Some("Title"), Some("Artist"))
        );
    }

    #[test]
    fn hyphen_without_spaces_is_not_a_separator() {
        assert_eq!(
            parse_filename("Jay-Z - Encore.mp3"),
            parsed(Some("Encore"), Some("Jay-Z"))
        );
        assert_eq!(
            parse_filename("Anti-Hero.mp3"),
            parsed(Some("Anti-Hero"), Some(UNKNOWN_ARTIST))
        );
    }

    #[test]
    fn only_ascii_digits_count_as_track_numbers() {
        assert_eq!(clean_filename("\u{0661}\u{0662} - Song.mp3"), "\u{0661}\u{0662} - Song");
        assert_eq!(
            parse_filename("\u{0661}\u{0662} - Song.mp3"),
            parsed(Some("Song"), Some("\u{0661}\u{0662}"))
        );
        assert_eq!(
            parse_filename("Track \u{0663} - Song.mp3"),
            parsed(Some("Song"), Some("Track \u{0663}"))
        );
    }

    #[test]
    fn extractor_delegates_to_free_functions() {
        let extractor = FilenameMetadataExtractor::new();
        assert_eq!(
            extractor.parse("Daft Punk - One More Time.mp3"),
            parse_filename("Daft Punk - One More Time.mp3")
        );
        assert_eq!(extractor.clean("01. x.mp3"), "x");
    }
}
