// Eingebettete Helligkeits-Tabelle
//
// BRIGHTNESS_VALUES und TIME_STEP_MS erzeugt build.rs aus dem Generator-Header
// (Standard: data/brightness_data.h, Override über BRIGHTNESS_HEADER).

use playback_core::BrightnessTable;

mod generated {
    include!(concat!(env!("OUT_DIR"), "/brightness_table.rs"));
}

pub use generated::{BRIGHTNESS_VALUES, TIME_STEP_MS};

/// Die Tabelle, die beim Tastendruck abgespielt wird
///
/// Wird beim Kompilieren geprüft (nicht leer, Zeitschritt > 0).
pub const BRIGHTNESS_TABLE: BrightnessTable<'static> =
    match BrightnessTable::new(&BRIGHTNESS_VALUES, TIME_STEP_MS) {
        Ok(table) => table,
        Err(_) => panic!("embedded brightness table is invalid"),
    };
