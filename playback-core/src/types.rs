//! Core Types für die Helligkeits-Wiedergabe
//!
//! Datenstrukturen ohne Hardware-Dependencies

use core::fmt;

/// Zustand einer Wiedergabe-Session
///
/// Ersetzt das globale Flag + Startzeit: `Playing` trägt den Startzeitpunkt
/// der Session direkt mit sich.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlaybackState {
    /// Wartet auf den Trigger, Ausgang ist aus
    #[default]
    Idle,
    /// Session läuft seit `started_at_ms` (Millisekunden, wrapping u32)
    Playing { started_at_ms: u32 },
}

/// Zustandsübergang, der während eines Ticks aufgetreten ist
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlaybackEvent {
    /// Trigger-Flanke im Idle erkannt, Session gestartet
    Started { at_ms: u32 },
    /// Tabelle erschöpft, zurück im Idle
    Finished { at_ms: u32 },
}

/// Ergebnis eines einzelnen Ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickOutput {
    /// Helligkeit, die in diesem Tick auf den Ausgang geschrieben werden muss.
    /// `None` im Idle (Ausgang bleibt unverändert).
    pub level: Option<u8>,
    /// Optionaler Zustandsübergang (für Logging)
    pub event: Option<PlaybackEvent>,
}

/// Statistik über eine Helligkeits-Tabelle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableSummary {
    pub entries: usize,
    pub time_step_ms: u32,
    pub duration_ms: u64,
    /// Anzahl der Einträge > 0
    pub active_entries: usize,
    /// Durchschnitt über alle Einträge > 0 (0 wenn keine aktiv)
    pub average_active_level: u8,
}

/// Fehler beim Aufbau oder Einlesen einer Helligkeits-Tabelle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableError {
    /// Tabelle ohne Einträge
    Empty,
    /// Zeitschritt von 0 ms
    ZeroTimeStep,
    /// `brightnessArray` Initializer nicht gefunden
    MissingArray,
    /// Konstante (`arraySize` / `ms`) nicht gefunden
    MissingConstant(&'static str),
    /// Token ist keine Zahl
    InvalidNumber,
    /// Zahl außerhalb 0-255
    ValueOutOfRange(u32),
    /// `arraySize` passt nicht zur Anzahl der Werte
    LengthMismatch { declared: usize, actual: usize },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::Empty => write!(f, "brightness table is empty"),
            TableError::ZeroTimeStep => write!(f, "time step must be greater than 0 ms"),
            TableError::MissingArray => write!(f, "brightnessArray initializer not found"),
            TableError::MissingConstant(name) => write!(f, "constant `{name}` not found"),
            TableError::InvalidNumber => write!(f, "invalid number in header"),
            TableError::ValueOutOfRange(value) => {
                write!(f, "brightness value {value} is outside 0-255")
            }
            TableError::LengthMismatch { declared, actual } => write!(
                f,
                "arraySize declares {declared} entries but the array holds {actual}"
            ),
        }
    }
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for PlaybackState {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            PlaybackState::Idle => defmt::write!(fmt, "Idle"),
            PlaybackState::Playing { started_at_ms } => {
                defmt::write!(fmt, "Playing {{ started_at_ms: {} }}", started_at_ms)
            }
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for PlaybackEvent {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            PlaybackEvent::Started { at_ms } => defmt::write!(fmt, "Started @ {} ms", at_ms),
            PlaybackEvent::Finished { at_ms } => defmt::write!(fmt, "Finished @ {} ms", at_ms),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for TableSummary {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "TableSummary {{ entries: {}, step: {} ms, duration: {} ms, active: {}, avg: {}/255 }}",
            self.entries,
            self.time_step_ms,
            self.duration_ms,
            self.active_entries,
            self.average_active_level
        )
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for TableError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            TableError::Empty => defmt::write!(fmt, "Empty"),
            TableError::ZeroTimeStep => defmt::write!(fmt, "ZeroTimeStep"),
            TableError::MissingArray => defmt::write!(fmt, "MissingArray"),
            TableError::MissingConstant(name) => defmt::write!(fmt, "MissingConstant({})", name),
            TableError::InvalidNumber => defmt::write!(fmt, "InvalidNumber"),
            TableError::ValueOutOfRange(value) => defmt::write!(fmt, "ValueOutOfRange({})", value),
            TableError::LengthMismatch { declared, actual } => defmt::write!(
                fmt,
                "LengthMismatch {{ declared: {}, actual: {} }}",
                declared,
                actual
            ),
        }
    }
}
