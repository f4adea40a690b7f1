//! Playback Core - Platform-agnostic Logic and Traits
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert die Helligkeits-Tabelle, den Header-Parser,
//! den Wiedergabe-Zustandsautomaten und die Hardware-Traits.

#![no_std]

pub mod header;
pub mod logic;
pub mod player;
pub mod table;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use header::{BrightnessHeader, parse_header};
pub use logic::{FULL, OFF, PlaybackDriver};
pub use player::{Player, WriteFailure};
pub use table::BrightnessTable;
pub use traits::{BrightnessWriter, LedError, TriggerInput};
pub use types::{PlaybackEvent, PlaybackState, TableError, TableSummary, TickOutput};
