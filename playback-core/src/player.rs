//! Player: verbindet den Zustandsautomaten mit der Hardware
//!
//! Generisch über [`BrightnessWriter`] und [`TriggerInput`], damit die
//! gleiche Logik auf dem ESP32 und mit Mocks auf dem Host läuft.

use crate::logic::{OFF, PlaybackDriver};
use crate::table::BrightnessTable;
use crate::traits::{BrightnessWriter, LedError, TriggerInput};
use crate::types::PlaybackEvent;

/// Schreibfehler in einem Tick
///
/// Der Zustandsübergang des Ticks geht dabei nicht verloren.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WriteFailure {
    pub error: LedError,
    pub event: Option<PlaybackEvent>,
}

/// Wiedergabe einer Tabelle auf einer LED, gestartet über einen Trigger
pub struct Player<'t, W, T> {
    driver: PlaybackDriver<'t>,
    output: W,
    trigger: T,
    /// Zuletzt erfolgreich geschriebene Helligkeit (`None` = unbekannt)
    written: Option<u8>,
}

impl<'t, W: BrightnessWriter, T: TriggerInput> Player<'t, W, T> {
    pub fn new(table: BrightnessTable<'t>, output: W, trigger: T) -> Self {
        Self {
            driver: PlaybackDriver::new(table),
            output,
            trigger,
            written: None,
        }
    }

    /// Setzt den Ausgang auf aus (Startzustand)
    ///
    /// Schlägt das fehl, holt der nächste Idle-Tick das Schreiben nach.
    pub fn initialize(&mut self) -> Result<(), LedError> {
        self.write(OFF)
    }

    /// Liest den Trigger, rechnet einen Schritt und schreibt ggf. die Helligkeit
    ///
    /// Im `Playing` wird jeder Tick geschrieben. Im `Idle` wird nur geschrieben,
    /// solange der Ausgang nicht nachweislich aus ist (z.B. nach einem
    /// fehlgeschlagenen Ausschalten am Tabellenende).
    pub fn tick(&mut self, now_ms: u32) -> Result<Option<PlaybackEvent>, WriteFailure> {
        let trigger_active = self.trigger.is_active();
        let out = self.driver.tick(now_ms, trigger_active);

        let level = out.level.or_else(|| {
            let target = self.driver.level();
            (self.written != Some(target)).then_some(target)
        });

        if let Some(level) = level {
            self.write(level).map_err(|error| WriteFailure {
                error,
                event: out.event,
            })?;
        }
        Ok(out.event)
    }

    pub fn driver(&self) -> &PlaybackDriver<'t> {
        &self.driver
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn output_mut(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn trigger_mut(&mut self) -> &mut T {
        &mut self.trigger
    }

    fn write(&mut self, level: u8) -> Result<(), LedError> {
        match self.output.write(level) {
            Ok(()) => {
                self.written = Some(level);
                Ok(())
            }
            Err(e) => {
                self.written = None;
                Err(e)
            }
        }
    }
}
