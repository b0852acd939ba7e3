// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/parser.rs - Masked byte parser for filament spool tag dumps.
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
 * # `parser` Module
 *
 * This module converts the textual byte tokens of a dump line into
 * [MaskedByte] values. Sectors that failed authentication show up in dumps
 * as mask tokens (e.g. `??`), so a token that does not parse as a byte is
 * never an error here: it degrades to [MaskedByte::Unknown] and the rest of
 * the pipeline decides how to treat it.
 *
 * ## Usage Example
 *
 * ```
 * use spooltag::parser::{MaskedByte, parse_tokens, render_ascii};
 *
 * let bytes = parse_tokens(&["50", "4C", "41", "??"]);
 * assert_eq!(bytes[0], MaskedByte::Known(0x50));
 * assert_eq!(bytes[3], MaskedByte::Unknown);
 * assert_eq!(render_ascii(&bytes), "PLA.");
 * ```
 */

/// A single byte position in a tag block.
///
/// Keeps "decoded to zero" distinct from "could not be read": the generic
/// interpreter substitutes zero for unknown bytes, while typed field
/// extractors omit fields whose bytes are all unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaskedByte {
    /// The byte was read and decoded.
    Known(u8),
    /// The byte position was masked or unparsable in the dump.
    Unknown,
}

impl MaskedByte {
    /// Returns the byte value, or `None` if the position is unknown.
    pub fn value(self) -> Option<u8> {
        match self {
            MaskedByte::Known(v) => Some(v),
            MaskedByte::Unknown => None,
        }
    }

    /// Returns the byte value, substituting zero for unknown positions.
    pub fn or_zero(self) -> u8 {
        self.value().unwrap_or(0)
    }

    /// Whether the byte was actually read.
    pub fn is_known(self) -> bool {
        matches!(self, MaskedByte::Known(_))
    }
}

/// Parses a sequence of dump tokens into masked bytes.
///
/// One output element per input token, in order. A token yields
/// [MaskedByte::Known] only if it is exactly two ASCII hex digits
/// (case-insensitive); mask tokens and anything else malformed yield
/// [MaskedByte::Unknown]. This function never fails.
pub fn parse_tokens<S: AsRef<str>>(tokens: &[S]) -> Vec<MaskedByte> {
    tokens.iter().map(|t| parse_token(t.as_ref())).collect()
}

fn parse_token(token: &str) -> MaskedByte {
    // u8::from_str_radix alone would also accept sign prefixes like "+F".
    if token.len() == 2 && token.bytes().all(|b| b.is_ascii_hexdigit()) {
        match u8::from_str_radix(token, 16) {
            Ok(value) => MaskedByte::Known(value),
            Err(_) => MaskedByte::Unknown,
        }
    } else {
        MaskedByte::Unknown
    }
}

/// Renders masked bytes as printable ASCII.
///
/// Bytes in the printable range (0x20-0x7E) map to their character; control
/// bytes, high bytes, and unknown positions all map to `'.'`.
pub fn render_ascii(bytes: &[MaskedByte]) -> String {
    bytes
        .iter()
        .map(|b| match b.value() {
            Some(v) if (0x20..=0x7E).contains(&v) => v as char,
            _ => '.',
        })
        .collect()
}
