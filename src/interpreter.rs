// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/interpreter.rs - Generic numeric interpreter for filament spool tag dumps.
 *  Copyright (C) 2026  spooltag contributors
 *
 *  This program is free software: you can redistribute it and/or modify
 *  it under the terms of the GNU General Public License as published by
 *  the Free Software Foundation, either version 3 of the License, or
 *  (at your option) any later version.
 *
 *  This program is distributed in the hope that it will be useful,
 *  but WITHOUT ANY WARRANTY; without even the implied warranty of
 *  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *  GNU General Public License for more details.
 *
 *  You should have received a copy of the GNU General Public License
 *  along with this program.  If not, see <https://www.gnu.org/licenses/>.
 */

/*!
 * # `interpreter` Module
 *
 * Generic fixed-width views of a block for when no typed schema applies:
 * an ASCII rendering, 16-bit and 32-bit unsigned integers in both byte
 * orders, 32-bit floats in both byte orders, and a scan for a readable
 * substring. Unknown bytes read as zero; partial trailing pairs and quads
 * are dropped.
 *
 * ## Usage Example
 *
 * ```
 * use spooltag::interpreter::interpret;
 * use spooltag::parser::parse_tokens;
 *
 * let view = interpret(&parse_tokens(&["00", "00", "80", "3F"]));
 * assert_eq!(view.f32_le, vec![Some(1.0)]);
 * assert_eq!(view.u16_le, vec![0x0000, 0x3F80]);
 * ```
 */

use crate::parser::{MaskedByte, render_ascii};

/// Rendered in place of a float that could not be assembled.
pub const FLOAT_UNAVAILABLE: &str = "N/A";

/// All generic interpretations of one block.
#[derive(Debug, Clone, PartialEq)]
pub struct GenericView {
    /// Printable-ASCII rendering, one character per byte position.
    pub ascii: String,
    /// Little-endian u16 for each non-overlapping byte pair.
    pub u16_le: Vec<u16>,
    /// Big-endian u16 for each non-overlapping byte pair.
    pub u16_be: Vec<u16>,
    /// Little-endian u32 for each non-overlapping byte quad.
    pub u32_le: Vec<u32>,
    /// Big-endian u32 for each non-overlapping byte quad.
    pub u32_be: Vec<u32>,
    /// Little-endian f32 for each quad; `None` when the float could not be
    /// assembled from the bytes.
    pub f32_le: Vec<Option<f32>>,
    /// Big-endian f32 for each quad.
    pub f32_be: Vec<Option<f32>>,
    /// The longest readable substring of the ASCII rendering, when at least
    /// four characters long.
    pub detected: Option<String>,
}

/// Interprets a block's bytes as every generic numeric and textual view.
pub fn interpret(bytes: &[MaskedByte]) -> GenericView {
    let ascii = render_ascii(bytes);
    let zeroed: Vec<u8> = bytes.iter().map(|b| b.or_zero()).collect();

    let mut u16_le = Vec::new();
    let mut u16_be = Vec::new();
    for pair in zeroed.chunks_exact(2) {
        u16_le.push(u16::from(pair[0]) | (u16::from(pair[1]) << 8));
        u16_be.push((u16::from(pair[0]) << 8) | u16::from(pair[1]));
    }

    let mut u32_le = Vec::new();
    let mut u32_be = Vec::new();
    let mut f32_le = Vec::new();
    let mut f32_be = Vec::new();
    for quad in zeroed.chunks_exact(4) {
        u32_le.push(
            u32::from(quad[0])
                | (u32::from(quad[1]) << 8)
                | (u32::from(quad[2]) << 16)
                | (u32::from(quad[3]) << 24),
        );
        u32_be.push(
            (u32::from(quad[0]) << 24)
                | (u32::from(quad[1]) << 16)
                | (u32::from(quad[2]) << 8)
                | u32::from(quad[3]),
        );
        f32_le.push(float_le(quad));
        f32_be.push(float_be(quad));
    }

    let detected = detect_string(&ascii);

    GenericView {
        ascii,
        u16_le,
        u16_be,
        u32_le,
        u32_be,
        f32_le,
        f32_be,
        detected,
    }
}

fn float_le(quad: &[u8]) -> Option<f32> {
    Some(f32::from_le_bytes(quad.try_into().ok()?))
}

fn float_be(quad: &[u8]) -> Option<f32> {
    Some(f32::from_be_bytes(quad.try_into().ok()?))
}

/// Finds the longest run of readable characters in an ASCII rendering.
/// Runs shorter than four characters are noise and not reported.
fn detect_string(ascii: &str) -> Option<String> {
    let best = ascii.split('.').max_by_key(|run| run.len())?;
    if best.len() >= 4 {
        Some(best.to_string())
    } else {
        None
    }
}

/// Formats a float with six significant digits, or the [FLOAT_UNAVAILABLE]
/// sentinel when the value could not be assembled.
pub fn format_float(value: Option<f32>) -> String {
    let Some(value) = value else {
        return FLOAT_UNAVAILABLE.to_string();
    };
    if value == 0.0 {
        return "0".to_string();
    }
    if !value.is_finite() {
        return value.to_string();
    }

    let exponent = f64::from(value).abs().log10().floor() as i32;
    if (-4..6).contains(&exponent) {
        let decimals = (5 - exponent).max(0) as usize;
        trim_zeros(format!("{:.*}", decimals, value))
    } else {
        let mantissa = f64::from(value) / 10f64.powi(exponent);
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            trim_zeros(format!("{:.5}", mantissa)),
            sign,
            exponent.abs()
        )
    }
}

fn trim_zeros(formatted: String) -> String {
    if !formatted.contains('.') {
        return formatted;
    }
    formatted
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_tokens;

    #[test]
    fn test_float_byte_orders_are_distinct() {
        let view = interpret(&parse_tokens(&["00", "00", "80", "3F"]));
        assert_eq!(view.f32_le, vec![Some(1.0)]);
        let be = view.f32_be[0].unwrap();
        assert!(be != 1.0);
        assert_eq!(be, f32::from_be_bytes([0x00, 0x00, 0x80, 0x3F]));
    }

    #[test]
    fn test_integer_views() {
        let view = interpret(&parse_tokens(&["01", "02", "03", "04"]));
        assert_eq!(view.u16_le, vec![0x0201, 0x0403]);
        assert_eq!(view.u16_be, vec![0x0102, 0x0304]);
        assert_eq!(view.u32_le, vec![0x04030201]);
        assert_eq!(view.u32_be, vec![0x01020304]);
    }

    #[test]
    fn test_partial_pairs_and_quads_are_dropped() {
        let view = interpret(&parse_tokens(&["01", "02", "03", "04", "05", "06", "07"]));
        assert_eq!(view.u16_le.len(), 3);
        assert_eq!(view.u32_le.len(), 1);
        assert_eq!(view.f32_le.len(), 1);
    }

    #[test]
    fn test_unknown_bytes_read_as_zero() {
        let view = interpret(&parse_tokens(&["??", "01", "??", "??"]));
        assert_eq!(view.u16_le, vec![0x0100, 0x0000]);
        assert_eq!(view.u32_le, vec![0x00000100]);
    }

    #[test]
    fn test_detect_string_reports_longest_run() {
        let view = interpret(&parse_tokens(&[
            "41", "42", "00", "50", "4C", "41", "2D", "43", "46", "00", "00", "00", "00", "00",
            "00", "00",
        ]));
        assert_eq!(view.ascii, "AB.PLA-CF.......");
        assert_eq!(view.detected.as_deref(), Some("PLA-CF"));
    }

    #[test]
    fn test_short_runs_are_not_detected() {
        let view = interpret(&parse_tokens(&["41", "42", "43", "00"]));
        assert_eq!(view.detected, None);
    }

    #[test]
    fn test_format_float() {
        assert_eq!(format_float(None), "N/A");
        assert_eq!(format_float(Some(0.0)), "0");
        assert_eq!(format_float(Some(0.2)), "0.2");
        assert_eq!(format_float(Some(100.0)), "100");
        assert_eq!(format_float(Some(-1.75)), "-1.75");
        assert_eq!(format_float(Some(1_000_000.0)), "1e+06");
        assert_eq!(format_float(Some(0.00001)), "1e-05");
    }
}
