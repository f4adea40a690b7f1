// Hardware Abstraction Layer (HAL) Module
//
// Implementiert die Traits aus playback-core für die ESP32-C6 Peripherie.
// Tests laufen gegen Mocks im playback-tests Crate.

pub mod pwm_writer;
pub mod trigger;

#[cfg(feature = "smartled")]
pub mod led_writer;

pub use playback_core::{BrightnessWriter, LedError, TriggerInput};
pub use pwm_writer::PwmBrightnessWriter;
pub use trigger::ButtonTrigger;

#[cfg(feature = "smartled")]
pub use led_writer::RmtLedWriter;
