/// Integration tests for embedded tag reading
///
/// Builds a minimal untagged PCM WAV in memory so no fixture files are needed.
use jukebox_core::MetadataReader;
use jukebox_metadata::LoftyMetadataReader;
use std::path::Path;

/// One second of 8 kHz mono 16-bit silence
fn silent_wav() -> Vec<u8> {
    let sample_rate: u32 = 8000;
    let data_len: u32 = sample_rate * 2;

    let mut bytes = Vec::with_capacity(44 + data_len as usize);
    bytes.extend_from_slice(b"RIFF");
    bytes.extend_from_slice(&(36 + data_len).to_le_bytes());
    bytes.extend_from_slice(b"WAVE");
    bytes.extend_from_slice(b"fmt ");
    bytes.extend_from_slice(&16u32.to_le_bytes());
    bytes.extend_from_slice(&1u16.to_le_bytes()); // PCM
    bytes.extend_from_slice(&1u16.to_le_bytes()); // mono
    bytes.extend_from_slice(&sample_rate.to_le_bytes());
    bytes.extend_from_slice(&(sample_rate * 2).to_le_bytes()); // byte rate
    bytes.extend_from_slice(&2u16.to_le_bytes()); // block align
    bytes.extend_from_slice(&16u16.to_le_bytes()); // bits per sample
    bytes.extend_from_slice(b"data");
    bytes.extend_from_slice(&data_len.to_le_bytes());
    bytes.resize(44 + data_len as usize, 0);
    bytes
}

#[test]
fn untagged_wav_bytes_yield_empty_metadata_with_duration() {
    let reader = LoftyMetadataReader::new();
    let metadata = reader
        .read_bytes(&silent_wav(), "Track 01 - Untitled.wav")
        .expect("valid WAV should be readable");

    assert!(metadata.is_empty());
    let duration = metadata.duration_ms.expect("duration should be present");
    assert!((900..=1100).contains(&duration), "duration was {duration}ms");
}

#[test]
fn untagged_wav_file_on_disk() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("silence.wav");
    std::fs::write(&path, silent_wav()).unwrap();

    let reader = LoftyMetadataReader::new();
    let metadata = reader.read(&path).expect("valid WAV should be readable");

    assert!(metadata.title.is_none());
    assert!(metadata.artist.is_none());
}

#[test]
fn truncated_audio_is_an_error() {
    let reader = LoftyMetadataReader::new();
    let mut wav = silent_wav();
    wav.truncate(20);

    assert!(reader.read_bytes(&wav, "broken.wav").is_err());
}

#[test]
fn missing_file_is_reported() {
    let reader = LoftyMetadataReader::new();
    let err = reader
        .read(Path::new("/definitely/does/not/exist.mp3"))
        .unwrap_err()
        .to_string();
    assert!(err.contains("not found"));
}
