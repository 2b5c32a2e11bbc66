//! Jukebox Metadata
//!
//! Metadata extraction for uploaded audio files.
//!
//! This crate provides:
//! - Filename heuristics (`Artist - Title.ext`, track-number prefixes, bracket tags)
//! - Tag reading from audio files and in-memory uploads (MP3, FLAC, OGG, WAV, M4A, OPUS)
//! - Merging of tags and filename guesses into a single resolved record
//!
//! # Example
//!
//! ```rust
//! use jukebox_metadata::parse_filename;
//!
//! let parsed = parse_filename("01. Imagine Dragons - Believer [Official Video].flac");
//! assert_eq!(parsed.artist.as_deref(), Some("Imagine Dragons"));
//! assert_eq!(parsed.title.as_deref(), Some("Believer"));
//! assert_eq!(parsed.track_number, None);
//! ```

mod error;
mod filename;
mod merge;
mod reader;

pub use error::{MetadataError, Result};
pub use filename::{clean_filename, parse_filename, FilenameMetadataExtractor};
pub use merge::{resolve, MetadataOrigin, ResolvedMetadata, UNKNOWN_ALBUM, UNTITLED};
pub use reader::LoftyMetadataReader;
