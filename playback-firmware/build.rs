// Build-Script: Wird vor dem Kompilieren ausgeführt
// Bettet die Helligkeits-Tabelle ein und konfiguriert den Linker für ESP32-C6

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use playback_core::parse_header;

/// Standard-Header, falls BRIGHTNESS_HEADER nicht gesetzt ist
const DEFAULT_HEADER: &str = "data/brightness_data.h";

fn main() {
    // Lade .env file für optionale Overrides (BRIGHTNESS_HEADER)
    // Fehler ignorieren wenn .env nicht existiert (dann gilt der Standard-Header)
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("⚠️  .env file nicht gefunden: {e}");
        eprintln!("   Nutze {DEFAULT_HEADER} oder setze BRIGHTNESS_HEADER als Environment-Variable");
    }

    // Registriere hilfsbereiten Error-Handler für Linker-Fehler
    // Muss vor embed_brightness_table() laufen: als Linker-Hook sind keine Cargo-Variablen gesetzt
    linker_be_nice();

    // Helligkeits-Tabelle aus dem Generator-Header erzeugen
    // Die Werte werden zur Compile-Zeit in den Code eingebacken
    embed_brightness_table();

    // Füge Linker-Skripte hinzu:

    // 1. defmt.x - defmt Logging-Support
    //    Definiert Symbole für defmt's binäres Log-Format
    println!("cargo:rustc-link-arg=-Tdefmt.x");

    // 2. linkall.x - ESP32 Memory-Layout
    //    WICHTIG: Muss als LETZTES kommen (sonst Probleme mit flip-link)
    //    Definiert Flash/RAM-Layout und Startup-Code
    println!("cargo:rustc-link-arg=-Tlinkall.x");
}

// Liest den Header, prüft ihn und schreibt $OUT_DIR/brightness_table.rs
// Ein kaputter Header bricht den Build ab (Datenintegrität gehört zur Build-Zeit)
fn embed_brightness_table() {
    println!("cargo:rerun-if-env-changed=BRIGHTNESS_HEADER");

    let manifest_dir = PathBuf::from(env_var("CARGO_MANIFEST_DIR"));
    let header_path = match std::env::var("BRIGHTNESS_HEADER") {
        Ok(path) => resolve(&manifest_dir, &path),
        Err(_) => manifest_dir.join(DEFAULT_HEADER),
    };
    println!("cargo:rerun-if-changed={}", header_path.display());

    let src = std::fs::read_to_string(&header_path).unwrap_or_else(|e| {
        panic!(
            "Helligkeits-Header {} nicht lesbar: {e}",
            header_path.display()
        )
    });

    let header = parse_header(&src)
        .unwrap_or_else(|e| panic!("{}: {e}", header_path.display()));
    let len = header
        .check_length()
        .unwrap_or_else(|e| panic!("{}: {e}", header_path.display()));
    if len == 0 {
        panic!("{}: brightness table is empty", header_path.display());
    }

    let mut generated = String::new();
    writeln!(generated, "// @generated aus {}", header_path.display()).unwrap();
    writeln!(generated, "pub const BRIGHTNESS_VALUES: [u8; {len}] = [").unwrap();
    for value in header.values() {
        // Bereits von check_length() geprüft
        let value = value.unwrap_or_else(|e| panic!("{}: {e}", header_path.display()));
        writeln!(generated, "    {value},").unwrap();
    }
    writeln!(generated, "];").unwrap();
    writeln!(
        generated,
        "pub const TIME_STEP_MS: u32 = {};",
        header.time_step_ms()
    )
    .unwrap();

    let out_path = PathBuf::from(env_var("OUT_DIR")).join("brightness_table.rs");
    std::fs::write(&out_path, generated)
        .unwrap_or_else(|e| panic!("{} nicht schreibbar: {e}", out_path.display()));
}

fn resolve(manifest_dir: &Path, path: &str) -> PathBuf {
    let path = Path::new(path);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        manifest_dir.join(path)
    }
}

fn env_var(name: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| panic!("{name} wird von Cargo gesetzt"))
}

// Error-Handler: Zeigt hilfreiche Tipps bei Linker-Fehlern
// Wird vom Linker als "--error-handling-script" aufgerufen
fn linker_be_nice() {
    let args: Vec<String> = std::env::args().collect();

    // Wenn vom Linker aufgerufen (mit Error-Typ und Symbol-Name)
    if args.len() > 2 {
        let kind = &args[1]; // Fehler-Typ (z.B. "undefined-symbol")
        let what = &args[2]; // Symbol-Name (z.B. "_defmt_...")

        match kind.as_str() {
            // Undefiniertes Symbol gefunden
            "undefined-symbol" => match what.as_str() {
                what if what.starts_with("_defmt_") => {
                    eprintln!();
                    eprintln!(
                        "💡 `defmt` not found - make sure `defmt.x` is added as a linker script and you have included `use esp_println as _;`"
                    );
                    eprintln!();
                }
                "_stack_start" => {
                    eprintln!();
                    eprintln!("💡 Is the linker script `linkall.x` missing?");
                    eprintln!();
                }
                what if what.starts_with("esp_rtos_") => {
                    eprintln!();
                    eprintln!(
                        "💡 `esp-rtos` is not started. Make sure `esp_rtos::start()` is called before spawning tasks."
                    );
                    eprintln!();
                }
                _ => (),
            },
            // we don't have anything helpful for "missing-lib" yet
            _ => {
                std::process::exit(1);
            }
        }

        std::process::exit(0);
    }

    println!(
        "cargo:rustc-link-arg=--error-handling-script={}",
        std::env::current_exe().unwrap().display()
    );
}
