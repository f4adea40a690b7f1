// Library-Root: Wiederverwendbare Logik und Module
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;
pub mod table;
pub mod tasks;

// Re-exports von playback-core
pub use playback_core::{
    BrightnessTable, BrightnessWriter, LedError, PlaybackEvent, PlaybackState, Player,
    TriggerInput, WriteFailure,
};

// ============================================================================
// Testing-Strategie
// ============================================================================
//
// Dieses Crate kompiliert nur für riscv32imac-unknown-none-elf (esp-hal, esp-rtos).
// Die gesamte Wiedergabe-Logik liegt deshalb in playback-core und wird dort
// bzw. in playback-tests auf dem Host getestet (MockBrightnessWriter, MockTrigger).
//
// Hier bleibt nur, was direkt Hardware anfasst:
// - hal/: LEDC-, RMT- und GPIO-Anbindung der Traits
// - tasks/: Timing (Ticker, Instant) und Logging
// - table.rs: die von build.rs eingebettete Tabelle (Header-Prüfung ebenfalls in playback-tests)
