// Trigger-Taster an einem GPIO mit internem Pull-Up
//
// Ruhepegel High, gedrückt = Low. Kein externer Widerstand nötig.

use esp_hal::gpio::{Input, InputConfig, Pull};

use crate::hal::TriggerInput;

/// Taster nach GND (active-low)
pub struct ButtonTrigger<'a> {
    input: Input<'a>,
}

impl<'a> ButtonTrigger<'a> {
    /// Konfiguriert den Pin als Eingang mit Pull-Up
    pub fn new(pin: esp_hal::peripherals::GPIO9<'a>) -> Self {
        let input = Input::new(pin, InputConfig::default().with_pull(Pull::Up));
        Self { input }
    }
}

impl<'a> TriggerInput for ButtonTrigger<'a> {
    fn is_active(&mut self) -> bool {
        // Active-low: gedrückt zieht die Leitung auf GND
        self.input.is_low()
    }
}
