//! Pure Business Logic: Wiedergabe-Zustandsautomat
//!
//! Ohne Hardware-Dependencies (testbar!). Die Hardware wird vom
//! [`Player`](crate::Player) oder direkt vom Firmware-Task angebunden.

use crate::table::BrightnessTable;
use crate::types::{PlaybackEvent, PlaybackState, TickOutput};

/// Minimale Helligkeit (LED aus)
pub const OFF: u8 = 0;
/// Maximale Helligkeit
pub const FULL: u8 = 255;

/// Spielt eine Helligkeits-Tabelle synchron zur verstrichenen Zeit ab
///
/// Zustände: `Idle` → (Trigger-Flanke) → `Playing` → (Tabelle erschöpft) → `Idle`.
///
/// Zeitstempel sind Millisekunden als `u32`. Die verstrichene Zeit wird mit
/// `wrapping_sub` berechnet, ein Überlauf des Zählers während einer Session
/// ist damit unkritisch.
///
/// # Beispiele
///
/// ```
/// # use playback_core::{BrightnessTable, PlaybackDriver, PlaybackState};
/// let table = BrightnessTable::new(&[10, 200, 0], 100).unwrap();
/// let mut driver = PlaybackDriver::new(table);
///
/// driver.tick(1000, true); // Trigger gedrückt → Session startet
/// assert_eq!(driver.tick(1100, true).level, Some(200));
/// assert_eq!(driver.tick(1300, false).level, Some(0));
/// assert_eq!(driver.state(), PlaybackState::Idle);
/// ```
#[derive(Debug, Clone)]
pub struct PlaybackDriver<'t> {
    table: BrightnessTable<'t>,
    state: PlaybackState,
    /// Trigger-Zustand aus dem vorherigen Tick (für Flankenerkennung)
    trigger_was_active: bool,
    /// Zuletzt angeforderte Helligkeit
    level: u8,
}

impl<'t> PlaybackDriver<'t> {
    /// Startzustand: `Idle`, Ausgang aus
    pub fn new(table: BrightnessTable<'t>) -> Self {
        Self {
            table,
            state: PlaybackState::Idle,
            trigger_was_active: false,
            level: OFF,
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn is_playing(&self) -> bool {
        matches!(self.state, PlaybackState::Playing { .. })
    }

    pub fn table(&self) -> &BrightnessTable<'t> {
        &self.table
    }

    /// Ein Polling-Schritt
    ///
    /// - `now_ms`: aktueller monotoner Zeitstempel
    /// - `trigger_active`: aktueller Trigger-Zustand (bereits in "aktiv" übersetzt)
    ///
    /// Im `Playing` wird die Helligkeit in jedem Tick angefordert, auch wenn sich
    /// der Index nicht geändert hat.
    pub fn tick(&mut self, now_ms: u32, trigger_active: bool) -> TickOutput {
        // Nur die Flanke inaktiv → aktiv startet eine Session
        let pressed = trigger_active && !self.trigger_was_active;
        self.trigger_was_active = trigger_active;

        let (started_at_ms, mut event) = match self.state {
            PlaybackState::Idle if pressed => {
                self.state = PlaybackState::Playing {
                    started_at_ms: now_ms,
                };
                (now_ms, Some(PlaybackEvent::Started { at_ms: now_ms }))
            }
            PlaybackState::Idle => return TickOutput::default(),
            // Erneutes Drücken während der Wiedergabe wird ignoriert
            PlaybackState::Playing { started_at_ms } => (started_at_ms, None),
        };

        let elapsed_ms = now_ms.wrapping_sub(started_at_ms);
        self.level = match self.table.level_at(elapsed_ms) {
            Some(level) => level,
            None => {
                self.state = PlaybackState::Idle;
                event = Some(PlaybackEvent::Finished { at_ms: now_ms });
                OFF
            }
        };

        TickOutput {
            level: Some(self.level),
            event,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALUES: [u8; 3] = [10, 200, 0];

    fn driver() -> PlaybackDriver<'static> {
        PlaybackDriver::new(BrightnessTable::new(&VALUES, 100).unwrap())
    }

    #[test]
    fn test_initial_state_is_idle_and_off() {
        let driver = driver();
        assert_eq!(driver.state(), PlaybackState::Idle);
        assert_eq!(driver.level(), OFF);
        assert!(!driver.is_playing());
    }

    #[test]
    fn test_idle_without_trigger_writes_nothing() {
        let mut driver = driver();
        assert_eq!(driver.tick(0, false), TickOutput::default());
        assert_eq!(driver.tick(10_000, false), TickOutput::default());
        assert_eq!(driver.state(), PlaybackState::Idle);
    }

    #[test]
    fn test_start_tick_shows_first_entry() {
        let mut driver = driver();
        let out = driver.tick(1000, true);
        assert_eq!(out.level, Some(10));
        assert_eq!(out.event, Some(PlaybackEvent::Started { at_ms: 1000 }));
        assert_eq!(
            driver.state(),
            PlaybackState::Playing {
                started_at_ms: 1000
            }
        );
    }

    #[test]
    fn test_finish_forces_off() {
        let mut driver = driver();
        driver.tick(1000, true);
        driver.tick(1100, true);
        assert_eq!(driver.level(), 200);

        let out = driver.tick(1300, true);
        assert_eq!(out.level, Some(OFF));
        assert_eq!(out.event, Some(PlaybackEvent::Finished { at_ms: 1300 }));
        assert_eq!(driver.state(), PlaybackState::Idle);
    }

    #[test]
    fn test_held_trigger_does_not_restart_after_finish() {
        let mut driver = driver();
        driver.tick(1000, true);
        driver.tick(1300, true);
        assert_eq!(driver.tick(1400, true), TickOutput::default());
        assert_eq!(driver.state(), PlaybackState::Idle);
    }

    #[test]
    fn test_session_across_counter_wrap() {
        let mut driver = driver();
        let start = u32::MAX - 49;
        driver.tick(start, true);

        // 150 ms später, Zähler ist übergelaufen
        let out = driver.tick(start.wrapping_add(150), false);
        assert_eq!(out.level, Some(200));
        assert!(driver.is_playing());

        let out = driver.tick(start.wrapping_add(300), false);
        assert_eq!(out.level, Some(OFF));
        assert!(!driver.is_playing());
    }
}
