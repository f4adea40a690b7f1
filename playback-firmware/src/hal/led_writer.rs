// SmartLED Helligkeits-Ausgang (Feature "smartled")
//
// Nutzt die Onboard WS2812 LED des DevKits als einkanalige LED:
// die Tabellen-Helligkeit skaliert eine feste Farbe (SMARTLED_TINT).

use esp_hal::Blocking;
use esp_hal::rmt::Rmt;
use esp_hal::time::Rate;
use esp_hal_smartled::SmartLedsAdapter;
use rgb::RGB8;
use smart_leds_trait::SmartLedsWrite;

use crate::hal::{BrightnessWriter, LedError};

// Buffer-Größe für 1 LED (3 Farben * 8 Bits + 1 Reset)
pub const LED_BUFFER_SIZE: usize = 25;

/// Skaliert jeden Farbkanal linear mit `level / 255`
pub fn scale_color(tint: RGB8, level: u8) -> RGB8 {
    let scale = |c: u8| (u16::from(c) * u16::from(level) / 255) as u8;
    RGB8 {
        r: scale(tint.r),
        g: scale(tint.g),
        b: scale(tint.b),
    }
}

/// WS2812 LED über das RMT Peripheral
///
/// Hinweis: Der Buffer muss länger leben als der Writer, daher wird er im Task
/// erstellt und als Parameter übergeben statt im Constructor allokiert.
pub struct RmtLedWriter<'a> {
    led: SmartLedsAdapter<'a, LED_BUFFER_SIZE>,
    tint: RGB8,
}

impl<'a> RmtLedWriter<'a> {
    /// Erstellt einen neuen RmtLedWriter
    ///
    /// # Parameter
    /// - `gpio8`: GPIO8 Peripheral für LED-Datenleitung
    /// - `rmt_peripheral`: RMT Peripheral
    /// - `rmt_clock_mhz`: RMT Clock Frequenz in MHz (z.B. 80)
    /// - `buffer`: Buffer für LED-Daten (erstellt mit smart_led_buffer!(1) Macro)
    /// - `tint`: Farbe bei Helligkeit 255
    pub fn new(
        gpio8: esp_hal::peripherals::GPIO8<'a>,
        rmt_peripheral: esp_hal::peripherals::RMT<'a>,
        rmt_clock_mhz: u32,
        buffer: &'a mut [esp_hal::rmt::PulseCode; LED_BUFFER_SIZE],
        tint: RGB8,
    ) -> Result<Self, LedError> {
        // RMT initialisieren
        let rmt: Rmt<'a, Blocking> = Rmt::new(rmt_peripheral, Rate::from_mhz(rmt_clock_mhz))
            .map_err(|_| LedError::ConfigurationFailed)?;

        // SmartLED Adapter erstellen
        let led = SmartLedsAdapter::new(rmt.channel0, gpio8, buffer);

        Ok(Self { led, tint })
    }
}

impl<'a> BrightnessWriter for RmtLedWriter<'a> {
    fn write(&mut self, level: u8) -> Result<(), LedError> {
        self.led
            .write([scale_color(self.tint, level)].into_iter())
            .map_err(|_| LedError::WriteFailed)
    }
}
