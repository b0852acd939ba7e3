// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/fields.rs - Typed field extractors for filament spool tag dumps.
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
 * # `fields` Module
 *
 * Per-block typed field extraction. Each documented block number maps to a
 * fixed set of fields at fixed byte offsets (identifiers, strings, dates,
 * counts, measurements). Extraction never fails: a field whose bytes run
 * past the end of the block, or whose bytes are all unknown, is omitted and
 * the remaining fields still extract. Unknown bytes inside a partially
 * readable multi-byte value read as zero.
 *
 * ## Usage Example
 *
 * ```
 * use spooltag::fields::extract;
 * use spooltag::parser::parse_tokens;
 *
 * let tokens = ["50", "4C", "41", "00", "00", "00", "00", "00",
 *               "00", "00", "00", "00", "00", "00", "00", "00"];
 * let fields = extract(2, &parse_tokens(&tokens)).unwrap();
 * assert_eq!(fields[0].label, "Type");
 * assert_eq!(fields[0].value, "PLA");
 * ```
 */

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;

use crate::parser::MaskedByte;

/// A named, formatted value extracted from a block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypedField {
    /// The documented name of the field.
    pub label: &'static str,
    /// The formatted value, ready for display.
    pub value: String,
}

/// Extracts the typed fields of a block.
///
/// Returns `None` when no typed schema is registered for the block number
/// (key blocks, empty blocks, the signature area). Returns `Some` for
/// documented blocks; the vector may be empty when every field had to be
/// omitted because its bytes were out of range or entirely unknown.
pub fn extract(block: u32, bytes: &[MaskedByte]) -> Option<Vec<TypedField>> {
    let mut fields = Vec::new();

    match block {
        0 => {
            push(&mut fields, "UID", hex_concat(bytes, 0, 4));
            push(&mut fields, "Manufacturer", hex_spaced(bytes, 4, 12));
        }
        1 => {
            push(&mut fields, "Material variant ID", string_at(bytes, 0, 8));
            push(&mut fields, "Material ID", string_at(bytes, 8, 8));
        }
        2 | 4 => {
            push(&mut fields, "Type", string_at(bytes, 0, 16));
        }
        5 => {
            // RGBA on the tag; the alpha byte is dropped from display.
            let color = hex_concat(bytes, 0, 4).map(|mut hex| {
                hex.truncate(6);
                hex
            });
            push(&mut fields, "Color (RGBA hex)", color);
            push_u16(&mut fields, "Spool weight (g)", bytes, 4);
            push_f32(&mut fields, "Filament diameter (mm)", bytes, 8);
        }
        6 => {
            push_u16(&mut fields, "Drying temperature (\u{b0}C)", bytes, 0);
            push_u16(&mut fields, "Drying time (hours)", bytes, 2);
            // Shown whenever readable, even when zero.
            if let Some(run) = bytes.get(4..6) {
                push(
                    &mut fields,
                    "Bed temperature type",
                    Some(u16_le(run).to_string()),
                );
            }
            push_u16(&mut fields, "Bed temperature (\u{b0}C)", bytes, 6);
            push_u16(&mut fields, "Hotend max (\u{b0}C)", bytes, 8);
            push_u16(&mut fields, "Hotend min (\u{b0}C)", bytes, 10);
        }
        8 => {
            push(&mut fields, "X Cam (raw 12 bytes)", hex_spaced(bytes, 0, 12));
            push_f32(&mut fields, "Min nozzle diameter (mm)", bytes, 12);
        }
        9 => {
            push(&mut fields, "Tray UID", string_at(bytes, 0, 16));
        }
        10 => {
            // Stored in hundredths of a millimeter.
            let width = read_u16(bytes, 4)
                .map(|w| Decimal::new(i64::from(w), 2).to_string());
            push(&mut fields, "Spool width (mm)", width);
        }
        12 => {
            let date = string_at(bytes, 0, 16).map(|s| format_production_date(&s));
            push(&mut fields, "Production date/time", date);
        }
        13 => {
            push(&mut fields, "Short production", string_at(bytes, 0, 16));
        }
        14 => {
            push_u16(&mut fields, "Filament length (raw uint16)", bytes, 4);
        }
        16 => {
            push_u16(&mut fields, "Format ID", bytes, 0);
            push_u16(&mut fields, "Color count", bytes, 2);
            push(&mut fields, "Second color (ABGR hex)", hex_concat(bytes, 4, 4));
        }
        _ => return None,
    }

    Some(fields)
}

fn push(fields: &mut Vec<TypedField>, label: &'static str, value: Option<String>) {
    if let Some(value) = value {
        fields.push(TypedField { label, value });
    }
}

fn push_u16(fields: &mut Vec<TypedField>, label: &'static str, bytes: &[MaskedByte], offset: usize) {
    push(fields, label, read_u16(bytes, offset).map(|v| v.to_string()));
}

fn push_f32(fields: &mut Vec<TypedField>, label: &'static str, bytes: &[MaskedByte], offset: usize) {
    push(fields, label, read_f32(bytes, offset).map(|v| v.to_string()));
}

/// The field's byte run, or `None` if it extends past the block or no byte
/// in it was readable.
fn readable_run(bytes: &[MaskedByte], offset: usize, len: usize) -> Option<&[MaskedByte]> {
    let run = bytes.get(offset..offset + len)?;
    if run.iter().any(|b| b.is_known()) {
        Some(run)
    } else {
        None
    }
}

fn u16_le(run: &[MaskedByte]) -> u16 {
    u16::from(run[0].or_zero()) | (u16::from(run[1].or_zero()) << 8)
}

fn read_u16(bytes: &[MaskedByte], offset: usize) -> Option<u16> {
    readable_run(bytes, offset, 2).map(u16_le)
}

fn read_f32(bytes: &[MaskedByte], offset: usize) -> Option<f32> {
    let run = readable_run(bytes, offset, 4)?;
    let mut quad = [0u8; 4];
    for (out, b) in quad.iter_mut().zip(run) {
        *out = b.or_zero();
    }
    Some(f32::from_le_bytes(quad))
}

/// Uppercase hex of a byte run with no separator, unknown bytes as `00`.
fn hex_concat(bytes: &[MaskedByte], offset: usize, len: usize) -> Option<String> {
    let run = readable_run(bytes, offset, len)?;
    Some(run.iter().map(|b| format!("{:02X}", b.or_zero())).collect())
}

/// Uppercase hex of a byte run, space-separated, unknown bytes as `00`.
fn hex_spaced(bytes: &[MaskedByte], offset: usize, len: usize) -> Option<String> {
    let run = readable_run(bytes, offset, len)?;
    Some(
        run.iter()
            .map(|b| format!("{:02X}", b.or_zero()))
            .collect::<Vec<_>>()
            .join(" "),
    )
}

/// A fixed-length ASCII string field: zero-substituted, truncated at the
/// first NUL, non-ASCII bytes replaced.
fn string_at(bytes: &[MaskedByte], offset: usize, len: usize) -> Option<String> {
    let run = readable_run(bytes, offset, len)?;
    let raw: Vec<u8> = run.iter().map(|b| b.or_zero()).collect();
    let end = raw.iter().position(|&b| b == 0).unwrap_or(raw.len());
    Some(
        raw[..end]
            .iter()
            .map(|&b| {
                if b.is_ascii() {
                    b as char
                } else {
                    char::REPLACEMENT_CHARACTER
                }
            })
            .collect(),
    )
}

/// Production timestamps are written as `YYYY_MM_DD_HH_MM`. Strings of that
/// shape render as a calendar date/time; anything else passes through.
fn format_production_date(raw: &str) -> String {
    match parse_production_date(raw) {
        Some(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
        None => raw.to_string(),
    }
}

fn parse_production_date(raw: &str) -> Option<NaiveDateTime> {
    let mut parts = raw.split('_');
    let year = parts.next()?.parse().ok()?;
    let month = parts.next()?.parse().ok()?;
    let day = parts.next()?.parse().ok()?;
    let hour = parts.next()?.parse().ok()?;
    let minute = parts.next()?.parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(hour, minute, 0)
}
