// PWM Helligkeits-Ausgang über das LEDC Peripheral
//
// Der LEDC-Timer läuft mit 8 Bit Duty-Auflösung, damit entspricht
// der Tabellenwert 0-255 direkt dem Duty-Register.

use esp_hal::ledc::LowSpeed;
use esp_hal::ledc::channel::{Channel, ChannelHW};

use crate::hal::{BrightnessWriter, LedError};

/// LED an einem LEDC Low-Speed Kanal
///
/// Der Kanal muss bereits mit einem 8-Bit Timer konfiguriert sein
/// (siehe `playback_task`).
pub struct PwmBrightnessWriter<'a> {
    channel: Channel<'a, LowSpeed>,
}

impl<'a> PwmBrightnessWriter<'a> {
    pub fn new(channel: Channel<'a, LowSpeed>) -> Self {
        Self { channel }
    }
}

impl<'a> BrightnessWriter for PwmBrightnessWriter<'a> {
    fn write(&mut self, level: u8) -> Result<(), LedError> {
        // Duty-Register schreiben, bei 8 Bit: 0 = aus, 255 = maximal
        self.channel.set_duty_hw(u32::from(level));
        Ok(())
    }
}
