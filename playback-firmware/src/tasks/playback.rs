// Playback Task - Spielt die Helligkeits-Tabelle nach Tastendruck ab
use defmt::{error, info};
use embassy_time::{Duration, Instant, Ticker};
use esp_hal::gpio::DriveMode;
use esp_hal::ledc::channel::{self, ChannelIFace};
use esp_hal::ledc::timer::{self, TimerIFace};
use esp_hal::ledc::{LSGlobalClkSource, Ledc, LowSpeed};
use esp_hal::time::Rate;

use crate::config::{POLL_INTERVAL_MS, PWM_FREQUENCY_KHZ};
use crate::hal::{BrightnessWriter, ButtonTrigger, PwmBrightnessWriter, TriggerInput};
use crate::table::BRIGHTNESS_TABLE;
use crate::{PlaybackEvent, Player, WriteFailure};

#[cfg(feature = "smartled")]
use crate::config::{RMT_CLOCK_MHZ, SMARTLED_TINT};
#[cfg(feature = "smartled")]
use crate::hal::RmtLedWriter;
#[cfg(feature = "smartled")]
use esp_hal_smartled::smart_led_buffer;

/// Playback Logic - Polling-Schleife ohne direkte Hardware-Abhängigkeit
///
/// Ruft in festem Takt (`POLL_INTERVAL_MS`) `Player::tick()` auf:
/// - Trigger-Flanke im Idle startet die Wiedergabe
/// - Während der Wiedergabe wird jeder Tick die Tabellen-Helligkeit geschrieben
/// - Am Tabellenende geht die LED aus und der Player wartet auf den nächsten Tastendruck
///
/// # Trait-basierte Abstraktion
/// Die generischen Parameter ermöglichen PWM-LED oder WS2812 als Ausgang.
/// Die Logik selbst ist in playback-core mit Mocks getestet.
///
/// # Parameter
/// - `output`: Helligkeits-Ausgang
/// - `trigger`: Taster-Eingang
pub async fn playback_logic<W: BrightnessWriter, T: TriggerInput>(output: W, trigger: T) -> ! {
    let mut player = Player::new(BRIGHTNESS_TABLE, output, trigger);

    // Startzustand: LED aus
    if let Err(e) = player.initialize() {
        error!("Failed to switch LED off: {}", e);
    }

    // Ticker statt Busy-Loop: gibt die CPU zwischen den Ticks frei
    let mut ticker = Ticker::every(Duration::from_millis(POLL_INTERVAL_MS));

    loop {
        // Bewusst auf u32 gekürzt: der Core rechnet mit wrapping_sub
        let now_ms = Instant::now().as_millis() as u32;

        match player.tick(now_ms) {
            Ok(Some(PlaybackEvent::Started { at_ms })) => {
                info!("Playback started @ {} ms", at_ms);
            }
            Ok(Some(PlaybackEvent::Finished { at_ms })) => {
                info!("Playback finished @ {} ms", at_ms);
            }
            Ok(None) => {}
            Err(WriteFailure { error, event }) => {
                error!("Failed to write LED level: {} (event: {})", error, event);
            }
        }

        ticker.next().await;
    }
}

/// Playback Task mit diskreter LED an einem LEDC PWM-Kanal
///
/// Übernimmt die Hardware-Initialisierung und ruft dann `playback_logic()` auf.
///
/// # Parameter
/// - `trigger_pin`: GPIO9 (BOOT-Taster) als Trigger
/// - `led_pin`: GPIO15 für die LED
/// - `ledc_peripheral`: LEDC Peripheral für die PWM
#[embassy_executor::task]
pub async fn playback_task(
    trigger_pin: esp_hal::peripherals::GPIO9<'static>,
    led_pin: esp_hal::peripherals::GPIO15<'static>,
    ledc_peripheral: esp_hal::peripherals::LEDC<'static>,
) {
    // Taster mit internem Pull-Up
    let trigger = ButtonTrigger::new(trigger_pin);

    // LEDC: Low-Speed Timer mit 8 Bit Auflösung → Duty = Tabellenwert
    let mut ledc = Ledc::new(ledc_peripheral);
    ledc.set_global_slow_clock(LSGlobalClkSource::APBClk);

    let mut lstimer = ledc.timer::<LowSpeed>(timer::Number::Timer0);
    let timer_config = timer::config::Config {
        duty: timer::config::Duty::Duty8Bit,
        clock_source: timer::LSClockSource::APBClk,
        frequency: Rate::from_khz(PWM_FREQUENCY_KHZ),
    };
    if lstimer.configure(timer_config).is_err() {
        error!("Failed to configure LEDC timer");
        return;
    }

    // Kanal startet mit 0 % Duty (LED aus)
    let mut pwm_channel = ledc.channel(channel::Number::Channel0, led_pin);
    let channel_config = channel::config::Config {
        timer: &lstimer,
        duty_pct: 0,
        drive_mode: DriveMode::PushPull,
    };
    if pwm_channel.configure(channel_config).is_err() {
        error!("Failed to configure LEDC channel");
        return;
    }

    playback_logic(PwmBrightnessWriter::new(pwm_channel), trigger).await
}

/// Playback Task mit der Onboard WS2812 LED (Feature "smartled")
///
/// # Parameter
/// - `trigger_pin`: GPIO9 (BOOT-Taster) als Trigger
/// - `gpio8`: GPIO8 Peripheral für LED-Datenleitung
/// - `rmt_peripheral`: RMT Peripheral für präzises Timing
#[cfg(feature = "smartled")]
#[embassy_executor::task]
pub async fn playback_smartled_task(
    trigger_pin: esp_hal::peripherals::GPIO9<'static>,
    gpio8: esp_hal::peripherals::GPIO8<'static>,
    rmt_peripheral: esp_hal::peripherals::RMT<'static>,
) {
    let trigger = ButtonTrigger::new(trigger_pin);

    // Buffer für SmartLED Daten erstellen (1 LED)
    // Macro allokiert Speicher im richtigen Format für RMT
    let mut rmt_buffer = smart_led_buffer!(1);

    // Hardware initialisieren: RmtLedWriter kapselt RMT + SmartLED
    let led = match RmtLedWriter::new(
        gpio8,
        rmt_peripheral,
        RMT_CLOCK_MHZ,
        &mut rmt_buffer,
        SMARTLED_TINT,
    ) {
        Ok(led) => led,
        Err(e) => {
            error!("Failed to initialize RMT LED: {}", e);
            return;
        }
    };

    playback_logic(led, trigger).await
}
