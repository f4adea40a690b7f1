//! Parser für das Header-Format des Tabellen-Generators
//!
//! Der Generator exportiert die Helligkeitswerte als C-Header:
//!
//! ```text
//! const unsigned char brightnessArray[] PROGMEM = {
//!       0,  12,  40,  // 0.0s
//!      88, 130,  64   // 0.3s
//! };
//! const int arraySize = 6;
//! const int ms = 100;
//! ```
//!
//! Der Parser alloziert nicht und kann daher sowohl im Build-Script
//! als auch auf dem Target verwendet werden.

use crate::types::TableError;

/// Name des Arrays im generierten Header
pub const ARRAY_NAME: &str = "brightnessArray";
/// Deklarationsform des Arrays (`brightnessArray[] = { ... }`)
const ARRAY_DECLARATION: &str = "brightnessArray[";
/// Name der Längen-Konstante
pub const LENGTH_CONSTANT: &str = "arraySize";
/// Name der Zeitschritt-Konstante (Millisekunden)
pub const TIME_STEP_CONSTANT: &str = "ms";

/// Geparster Header: Array-Rumpf plus deklarierte Konstanten
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrightnessHeader<'a> {
    body: &'a str,
    declared_len: usize,
    time_step_ms: u32,
}

/// Liest Array und Konstanten aus einem generierten Header
///
/// Die einzelnen Werte werden erst von [`BrightnessHeader::values`] geprüft.
///
/// # Beispiele
///
/// ```
/// # use playback_core::parse_header;
/// let src = "const unsigned char brightnessArray[] = { 10, 200, 0 };\n\
///            const int arraySize = 3;\n\
///            const int ms = 100;\n";
/// let header = parse_header(src).unwrap();
/// assert_eq!(header.time_step_ms(), 100);
/// assert_eq!(header.check_length(), Ok(3));
/// ```
pub fn parse_header(src: &str) -> Result<BrightnessHeader<'_>, TableError> {
    let body = array_body(src)?;
    let declared_len = constant(src, LENGTH_CONSTANT)? as usize;
    let time_step_ms = constant(src, TIME_STEP_CONSTANT)?;

    if time_step_ms == 0 {
        return Err(TableError::ZeroTimeStep);
    }

    Ok(BrightnessHeader {
        body,
        declared_len,
        time_step_ms,
    })
}

impl<'a> BrightnessHeader<'a> {
    pub fn declared_len(&self) -> usize {
        self.declared_len
    }

    pub fn time_step_ms(&self) -> u32 {
        self.time_step_ms
    }

    /// Iteriert über die Array-Werte in Reihenfolge
    pub fn values(&self) -> impl Iterator<Item = Result<u8, TableError>> + 'a {
        self.body
            .lines()
            .map(strip_comment)
            .flat_map(|line| line.split(','))
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(parse_level)
    }

    /// Prüft alle Werte und vergleicht die Anzahl mit `arraySize`
    ///
    /// Gibt die Anzahl der Werte zurück.
    pub fn check_length(&self) -> Result<usize, TableError> {
        let mut actual = 0;
        for value in self.values() {
            value?;
            actual += 1;
        }

        if actual != self.declared_len {
            return Err(TableError::LengthMismatch {
                declared: self.declared_len,
                actual,
            });
        }
        Ok(actual)
    }
}

/// Text zwischen `{` und `}` des Array-Initializers
///
/// Gesucht wird die Deklaration `brightnessArray[`, Kommentare zählen nicht.
fn array_body(src: &str) -> Result<&str, TableError> {
    let start = find_in_code(src, ARRAY_DECLARATION).ok_or(TableError::MissingArray)?;
    let rest = &src[start..];
    let open = find_in_code(rest, "{").ok_or(TableError::MissingArray)? + 1;
    let close = find_in_code(&rest[open..], "}").ok_or(TableError::MissingArray)? + open;
    Ok(&rest[open..close])
}

/// Wie `str::find`, überspringt aber `//` Zeilenkommentare
fn find_in_code(src: &str, pattern: &str) -> Option<usize> {
    let mut offset = 0;
    for line in src.split_inclusive('\n') {
        if let Some(pos) = strip_comment(line).find(pattern) {
            return Some(offset + pos);
        }
        offset += line.len();
    }
    None
}

/// Sucht `const int <name> = <wert>;` und liefert den Wert
fn constant(src: &str, name: &'static str) -> Result<u32, TableError> {
    for line in src.lines() {
        let code = strip_comment(line).trim();
        let Some(declaration) = code.strip_prefix("const int") else {
            continue;
        };
        let Some((ident, value)) = declaration.split_once('=') else {
            continue;
        };
        if ident.trim() != name {
            continue;
        }

        return value
            .trim()
            .trim_end_matches(';')
            .trim()
            .parse::<u32>()
            .map_err(|_| TableError::InvalidNumber);
    }
    Err(TableError::MissingConstant(name))
}

fn strip_comment(line: &str) -> &str {
    match line.find("//") {
        Some(pos) => &line[..pos],
        None => line,
    }
}

fn parse_level(token: &str) -> Result<u8, TableError> {
    let value = token
        .parse::<u32>()
        .map_err(|_| TableError::InvalidNumber)?;
    u8::try_from(value).map_err(|_| TableError::ValueOutOfRange(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    const GENERATED: &str = "\
#ifndef BRIGHTNESS_DATA_H
#define BRIGHTNESS_DATA_H
#include <avr/pgmspace.h>

const unsigned char brightnessArray[] PROGMEM = {
      0,  12,  40,  // 0.0s
     88, 130,  64   // 0.3s
};
const int arraySize = 6;
const int ms = 100;

#endif
";

    #[test]
    fn test_parse_generated_header() {
        let header = parse_header(GENERATED).unwrap();
        assert_eq!(header.declared_len(), 6);
        assert_eq!(header.time_step_ms(), 100);

        let mut values = [0u8; 6];
        for (slot, value) in values.iter_mut().zip(header.values()) {
            *slot = value.unwrap();
        }
        assert_eq!(values, [0, 12, 40, 88, 130, 64]);
        assert_eq!(header.check_length(), Ok(6));
    }

    #[test]
    fn test_comments_are_ignored() {
        let src = "const unsigned char brightnessArray[] = {\n\
                   1, 2, // 3, 4\n\
                   5\n};\n\
                   const int arraySize = 3; // Anzahl\n\
                   // const int ms = 7;\n\
                   const int ms = 50;\n";
        let header = parse_header(src).unwrap();
        assert_eq!(header.time_step_ms(), 50);
        assert_eq!(header.check_length(), Ok(3));
    }

    #[test]
    fn test_array_name_in_comments_is_ignored() {
        let src = "// alte Version: brightnessArray[] = { 9, 9, 9, 9 };\n\
                   // Werte aus brightnessArray { siehe Generator }\n\
                   const unsigned char brightnessArray[] PROGMEM = {\n\
                   10, 20, // } kein Ende\n\
                   30\n};\n\
                   const int arraySize = 3;\nconst int ms = 100;\n";
        let header = parse_header(src).unwrap();
        assert_eq!(header.check_length(), Ok(3));

        let mut values = [0u8; 3];
        for (slot, value) in values.iter_mut().zip(header.values()) {
            *slot = value.unwrap();
        }
        assert_eq!(values, [10, 20, 30]);
    }

    #[test]
    fn test_array_name_only_in_comment() {
        let src = "// brightnessArray[] = { 1 };\nconst int arraySize = 1;\nconst int ms = 100;\n";
        assert_eq!(parse_header(src), Err(TableError::MissingArray));
    }

    #[test]
    fn test_missing_array() {
        let src = "const int arraySize = 1;\nconst int ms = 100;\n";
        assert_eq!(parse_header(src), Err(TableError::MissingArray));
    }

    #[test]
    fn test_missing_constant() {
        let src = "const unsigned char brightnessArray[] = { 1 };\nconst int arraySize = 1;\n";
        assert_eq!(
            parse_header(src),
            Err(TableError::MissingConstant(TIME_STEP_CONSTANT))
        );
    }

    #[test]
    fn test_zero_time_step() {
        let src = "const unsigned char brightnessArray[] = { 1 };\n\
                   const int arraySize = 1;\nconst int ms = 0;\n";
        assert_eq!(parse_header(src), Err(TableError::ZeroTimeStep));
    }

    #[test]
    fn test_value_out_of_range() {
        let src = "const unsigned char brightnessArray[] = { 1, 256 };\n\
                   const int arraySize = 2;\nconst int ms = 100;\n";
        let header = parse_header(src).unwrap();
        assert_eq!(header.check_length(), Err(TableError::ValueOutOfRange(256)));
    }

    #[test]
    fn test_invalid_token() {
        let src = "const unsigned char brightnessArray[] = { 1, x2 };\n\
                   const int arraySize = 2;\nconst int ms = 100;\n";
        let header = parse_header(src).unwrap();
        assert_eq!(header.check_length(), Err(TableError::InvalidNumber));
    }

    #[test]
    fn test_length_mismatch() {
        let src = "const unsigned char brightnessArray[] = { 1, 2, 3 };\n\
                   const int arraySize = 4;\nconst int ms = 100;\n";
        let header = parse_header(src).unwrap();
        assert_eq!(
            header.check_length(),
            Err(TableError::LengthMismatch {
                declared: 4,
                actual: 3
            })
        );
    }
}
