// Task-Modul: Enthält die Embassy Tasks
//
// Nur ein logischer Task: die Wiedergabe-Schleife.
// Je nach Feature treibt sie eine PWM-LED oder die Onboard WS2812.

pub mod playback;

// Re-export Tasks für einfachen Import
pub use playback::{playback_logic, playback_task};

#[cfg(feature = "smartled")]
pub use playback::playback_smartled_task;
