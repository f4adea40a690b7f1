//! Helligkeits-Tabelle
//!
//! Unveränderliche Folge von 8-Bit Helligkeitswerten mit festem Zeitschritt.
//! Wird außerhalb erzeugt (Audio-Analyse) und zur Laufzeit nur gelesen.

use crate::types::{TableError, TableSummary};

/// Feste Helligkeits-Tabelle: `values[i]` gilt für `[i * step, (i + 1) * step)` ms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrightnessTable<'a> {
    values: &'a [u8],
    time_step_ms: u32,
}

impl<'a> BrightnessTable<'a> {
    /// Erstellt eine Tabelle und prüft die Invarianten
    ///
    /// `const fn`, damit eingebettete Tabellen schon beim Kompilieren geprüft werden.
    ///
    /// # Beispiele
    ///
    /// ```
    /// # use playback_core::{BrightnessTable, TableError};
    /// const TABLE: BrightnessTable<'static> = match BrightnessTable::new(&[10, 200, 0], 100) {
    ///     Ok(table) => table,
    ///     Err(_) => panic!("invalid table"),
    /// };
    /// assert_eq!(TABLE.level_at(150), Some(200));
    /// assert_eq!(BrightnessTable::new(&[1], 0), Err(TableError::ZeroTimeStep));
    /// ```
    pub const fn new(values: &'a [u8], time_step_ms: u32) -> Result<Self, TableError> {
        if values.is_empty() {
            return Err(TableError::Empty);
        }
        if time_step_ms == 0 {
            return Err(TableError::ZeroTimeStep);
        }
        Ok(Self {
            values,
            time_step_ms,
        })
    }

    pub const fn len(&self) -> usize {
        self.values.len()
    }

    /// Immer `false`, leere Tabellen werden von [`BrightnessTable::new`] abgelehnt
    pub const fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub const fn time_step_ms(&self) -> u32 {
        self.time_step_ms
    }

    pub const fn values(&self) -> &'a [u8] {
        self.values
    }

    /// Gesamtdauer der Wiedergabe in Millisekunden
    pub const fn duration_ms(&self) -> u64 {
        self.values.len() as u64 * self.time_step_ms as u64
    }

    /// Index für eine verstrichene Zeit (Ganzzahl-Division, abgerundet)
    ///
    /// Kann `>= len()` sein, die Bereichsprüfung macht [`BrightnessTable::level_at`].
    pub const fn index_at(&self, elapsed_ms: u32) -> usize {
        (elapsed_ms / self.time_step_ms) as usize
    }

    /// Helligkeit für eine verstrichene Zeit, `None` wenn die Tabelle erschöpft ist
    pub fn level_at(&self, elapsed_ms: u32) -> Option<u8> {
        self.values.get(self.index_at(elapsed_ms)).copied()
    }

    /// Statistik wie sie der Tabellen-Generator beim Export ausgibt
    pub fn summary(&self) -> TableSummary {
        let (active_entries, active_sum) = self
            .values
            .iter()
            .filter(|&&level| level > 0)
            .fold((0usize, 0u64), |(count, sum), &level| {
                (count + 1, sum + u64::from(level))
            });

        let average_active_level = if active_entries == 0 {
            0
        } else {
            // Durchschnitt von u8-Werten passt immer in u8
            (active_sum / active_entries as u64) as u8
        };

        TableSummary {
            entries: self.len(),
            time_step_ms: self.time_step_ms,
            duration_ms: self.duration_ms(),
            active_entries,
            average_active_level,
        }
    }
}
