//! Integration Tests für den Header-Parser
//!
//! Prüft u.a. die mitgelieferte Tabelle der Firmware, damit ein kaputter
//! Header schon beim Host-Test auffällt und nicht erst im Build-Script.

use playback_core::{BrightnessTable, PlaybackDriver, TableError, parse_header};

const FIRMWARE_HEADER: &str = include_str!("../../playback-firmware/data/brightness_data.h");

fn collect_values(src: &str) -> Result<(Vec<u8>, u32), TableError> {
    let header = parse_header(src)?;
    header.check_length()?;
    let values = header.values().collect::<Result<Vec<_>, _>>()?;
    Ok((values, header.time_step_ms()))
}

#[test]
fn test_firmware_header_is_valid() {
    let (values, step) = collect_values(FIRMWARE_HEADER).unwrap();
    assert_eq!(values.len(), 96);
    assert_eq!(step, 100);

    let table = BrightnessTable::new(&values, step).unwrap();
    assert_eq!(table.duration_ms(), 9_600);
    // Generator setzt Stille am Anfang und Ende auf 0
    assert_eq!(table.values().first(), Some(&0));
    assert_eq!(table.values().last(), Some(&0));
}

#[test]
fn test_firmware_header_plays_back() {
    let (values, step) = collect_values(FIRMWARE_HEADER).unwrap();
    let table = BrightnessTable::new(&values, step).unwrap();
    let mut driver = PlaybackDriver::new(table);

    driver.tick(0, true);
    assert_eq!(driver.tick(1_650, true).level, Some(values[16]));
    assert_eq!(driver.tick(9_599, true).level, Some(values[95]));
    assert!(driver.is_playing());
    assert_eq!(driver.tick(9_600, true).level, Some(0));
    assert!(!driver.is_playing());
}

#[test]
fn test_single_row_header() {
    let src = "const unsigned char brightnessArray[] PROGMEM = {\n\
               \x20   10, 200,   0   // 0.0s\n\
               };\n\
               const int arraySize = 3;\n\
               const int ms = 100;\n";
    let (values, step) = collect_values(src).unwrap();
    assert_eq!(values, vec![10, 200, 0]);
    assert_eq!(step, 100);
}

#[test]
fn test_truncated_header_is_rejected() {
    let truncated = &FIRMWARE_HEADER[..FIRMWARE_HEADER.find("};").unwrap()];
    assert_eq!(
        collect_values(truncated).unwrap_err(),
        TableError::MissingArray
    );
}

#[test]
fn test_error_messages() {
    assert_eq!(
        TableError::LengthMismatch {
            declared: 4,
            actual: 3
        }
        .to_string(),
        "arraySize declares 4 entries but the array holds 3"
    );
    assert_eq!(
        TableError::MissingConstant("ms").to_string(),
        "constant `ms` not found"
    );
}
