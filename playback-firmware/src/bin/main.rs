// Keine Standard-Bibliothek verwenden (Embedded System)
#![no_std]
// Kein normaler main() Einstiegspunkt (wird von esp_rtos bereitgestellt)
#![no_main]
// Verbiete mem::forget - gefährlich bei ESP HAL Types mit DMA-Buffern
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
// Verbiete große Stack-Frames (Stack ist auf Embedded Systemen begrenzt)
#![deny(clippy::large_stack_frames)]

// Embassy Async Runtime
use defmt::info;
use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};

// ESP32-C6 HAL
use esp_hal::clock::CpuClock;
use esp_hal::timer::timg::TimerGroup;

// Backtrace bei Panic und println!() Support
use {esp_backtrace as _, esp_println as _};

// Projekt-Module und Konfiguration
use esp_led_playback::config::TRIGGER_GPIO_PIN;
use esp_led_playback::table::BRIGHTNESS_TABLE;

// ESP-IDF App Descriptor - erforderlich für den Bootloader!
// Ohne diesen schlägt das Flashen mit "ESP-IDF App Descriptor missing" fehl
esp_bootloader_esp_idf::esp_app_desc!();

/// Main Entry Point
///
/// Initialisiert Hardware, startet Embassy Runtime und spawnt den Playback Task.
/// Danach schläft main() - alle Arbeit läuft im Task.
#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    // ESP32-C6 Konfiguration: CPU auf maximale Taktfrequenz (160 MHz)
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // Embassy Runtime initialisieren (Timer + Software Interrupt)
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    let sw_interrupt =
        esp_hal::interrupt::software::SoftwareInterruptControl::new(peripherals.SW_INTERRUPT);
    esp_rtos::start(timg0.timer0, sw_interrupt.software_interrupt0);

    // Eingebettete Tabelle einmal beim Start protokollieren
    info!("Brightness table: {}", BRIGHTNESS_TABLE.summary());
    info!("Waiting for trigger on GPIO{}", TRIGGER_GPIO_PIN);

    // Spawn Playback Task: PWM-LED (Standard) oder Onboard WS2812 (Feature "smartled")
    #[cfg(not(feature = "smartled"))]
    {
        use esp_led_playback::config::LED_GPIO_PIN;
        use esp_led_playback::tasks::playback_task;

        info!("Output: LEDC PWM on GPIO{}", LED_GPIO_PIN);
        spawner
            .spawn(playback_task(
                peripherals.GPIO9,
                peripherals.GPIO15,
                peripherals.LEDC,
            ))
            .unwrap();
    }

    #[cfg(feature = "smartled")]
    {
        use esp_led_playback::config::SMARTLED_GPIO_PIN;
        use esp_led_playback::tasks::playback_smartled_task;

        info!("Output: WS2812 on GPIO{}", SMARTLED_GPIO_PIN);
        spawner
            .spawn(playback_smartled_task(
                peripherals.GPIO9,
                peripherals.GPIO8,
                peripherals.RMT,
            ))
            .unwrap();
    }

    // Main-Loop: schläft (alle Arbeit läuft im Task)
    loop {
        Timer::after(Duration::from_secs(3600)).await;
    }
}
