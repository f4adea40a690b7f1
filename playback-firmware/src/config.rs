// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen

// ============================================================================
// Trigger Konfiguration
// ============================================================================

/// GPIO-Pin für den Trigger-Taster
/// GPIO9 ist der BOOT-Taster des ESP32-C6-DevKit (nach GND, interner Pull-Up)
pub const TRIGGER_GPIO_PIN: u8 = 9;

/// Polling-Intervall der Wiedergabe-Schleife in Millisekunden
/// Kleiner als jeder sinnvolle Zeitschritt der Tabelle
pub const POLL_INTERVAL_MS: u64 = 1;

// ============================================================================
// PWM LED Konfiguration (Standard)
// ============================================================================

/// GPIO-Pin für die diskrete LED (über Vorwiderstand nach GND)
pub const LED_GPIO_PIN: u8 = 15;

/// PWM-Frequenz in kHz
/// 24 kHz liegt über dem hörbaren Bereich und flimmert nicht
pub const PWM_FREQUENCY_KHZ: u32 = 24;

// ============================================================================
// SmartLED Konfiguration (Feature "smartled")
// ============================================================================

/// GPIO-Pin für die Onboard RGB LED (WS2812/Neopixel)
#[cfg(feature = "smartled")]
pub const SMARTLED_GPIO_PIN: u8 = 8;

/// RMT Taktfrequenz in MHz
/// 80 MHz ist optimal für WS2812 LED-Timing
#[cfg(feature = "smartled")]
pub const RMT_CLOCK_MHZ: u32 = 80;

/// Farbe der Onboard LED bei voller Helligkeit (warmweiß)
/// Die Tabellen-Helligkeit skaliert jeden Kanal
#[cfg(feature = "smartled")]
pub const SMARTLED_TINT: rgb::RGB8 = rgb::RGB8 {
    r: 255,
    g: 160,
    b: 60,
};
