//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Hardware-Zugriff
//! ohne konkrete Implementierung.

use core::fmt;

/// Fehler-Typ für LED-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedError {
    WriteFailed,
    ConfigurationFailed,
}

impl fmt::Display for LedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LedError::WriteFailed => write!(f, "failed to write LED level"),
            LedError::ConfigurationFailed => write!(f, "failed to configure LED output"),
        }
    }
}

/// Trait für den Helligkeits-Ausgang
///
/// Abstrahiert eine einzelne dimmbare LED (0 = aus, 255 = maximal).
///
/// # Implementierungen
/// - **Production:** PwmBrightnessWriter (ESP32 LEDC), RmtLedWriter (WS2812 via RMT)
/// - **Testing:** MockBrightnessWriter (in-memory Mock)
pub trait BrightnessWriter {
    /// Schreibt eine Helligkeit auf die LED
    ///
    /// # Fehlerbehandlung
    /// Gibt `LedError::WriteFailed` zurück wenn Hardware-Zugriff fehlschlägt
    fn write(&mut self, level: u8) -> Result<(), LedError>;
}

/// Trait für den Trigger-Eingang (Taster)
///
/// Die Implementierung übersetzt den elektrischen Pegel in "aktiv".
/// Beim Taster mit Pull-Up ist das der Low-Pegel.
pub trait TriggerInput {
    fn is_active(&mut self) -> bool;
}
