// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/renderer.rs - Block report renderer for filament spool tag dumps.
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
 * # `renderer` Module
 *
 * Combines the schema registry, typed field extraction, and the generic
 * interpreter into the textual report for one block.
 *
 * Two report modes:
 * - terse (`full_detail = false`): only blocks with a typed schema render,
 *   header plus typed fields;
 * - full (`full_detail = true`): every block renders, with the ASCII and
 *   numeric views layered under any typed fields.
 */

use crate::fields;
use crate::interpreter::{self, format_float};
use crate::parser;
use crate::schema;

/// Renders the report for one block, or `None` when the block is omitted
/// from the report (terse mode, no typed schema).
pub fn render<S: AsRef<str>>(block: u32, tokens: &[S], full_detail: bool) -> Option<String> {
    let bytes = parser::parse_tokens(tokens);

    // The header echoes the raw tokens, so mask tokens stay visible.
    let hex = tokens
        .iter()
        .map(|t| t.as_ref().to_uppercase())
        .collect::<Vec<_>>()
        .join(" ");
    let header = match schema::lookup(block) {
        Some(entry) => format!("{} ({}): {}", entry.label, entry.description, hex),
        None => format!("Block {}: {}", block, hex),
    };

    let mut lines = vec![header];

    let typed = fields::extract(block, &bytes);
    if let Some(typed_fields) = &typed {
        for field in typed_fields {
            lines.push(format!("  {}: {}", field.label, field.value));
        }
    }

    if !full_detail {
        // Typed knowledge supersedes generic dumps; blocks without a typed
        // schema are uninformative here and get suppressed entirely.
        return typed.is_some().then(|| lines.join("\n"));
    }

    let view = interpreter::interpret(&bytes);
    lines.push(format!("  ASCII : {}", view.ascii));

    if !view.u16_le.is_empty() {
        lines.push(format!("  UINT16 LE: {}", join_ints(&view.u16_le)));
        lines.push(format!("  UINT16 BE: {}", join_ints(&view.u16_be)));
    }

    if !view.u32_le.is_empty() {
        lines.push(format!("  UINT32 LE: {}", join_ints(&view.u32_le)));
        lines.push(format!("  UINT32 BE: {}", join_ints(&view.u32_be)));
        lines.push(format!("  FLOAT32 LE: {}", join_floats(&view.f32_le)));
        lines.push(format!("  FLOAT32 BE: {}", join_floats(&view.f32_be)));
    }

    if let Some(detected) = &view.detected {
        lines.push(format!("  Detected string: {}", detected));
    }

    Some(lines.join("\n"))
}

fn join_ints<T: std::fmt::Display>(values: &[T]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn join_floats(values: &[Option<f32>]) -> String {
    values
        .iter()
        .map(|v| format_float(*v))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLOCK_5_TOKENS: [&str; 16] = [
        "FF", "00", "00", "FF", "64", "00", "00", "00", "CD", "CC", "4C", "3E", "00", "00", "00",
        "00",
    ];

    #[test]
    fn test_terse_mode_renders_typed_blocks() {
        let report = render(5, &BLOCK_5_TOKENS, false).unwrap();
        assert!(report.starts_with(
            "Block 5 (Spool Weight, Color Code, Filament Diameter): FF 00 00 FF"
        ));
        assert!(report.contains("  Color (RGBA hex): FF0000"));
        assert!(report.contains("  Spool weight (g): 100"));
        assert!(report.contains("  Filament diameter (mm): 0.2"));
        assert!(!report.contains("UINT16"));
    }

    #[test]
    fn test_terse_mode_skips_untyped_blocks() {
        assert!(render(20, &["00"; 16], false).is_none());
    }

    #[test]
    fn test_terse_mode_keeps_header_for_all_unknown_typed_block() {
        let report = render(5, &["??"; 16], false).unwrap();
        assert!(report.starts_with(
            "Block 5 (Spool Weight, Color Code, Filament Diameter): ?? ?? ??"
        ));
        // Fields backed only by unknown bytes are omitted, not fabricated.
        assert!(!report.contains("Spool weight"));
    }

    #[test]
    fn test_full_mode_renders_untyped_blocks() {
        let report = render(20, &["00"; 16], true).unwrap();
        assert!(report.starts_with("Block 20 (Empty):"));
        assert!(report.contains("  ASCII : ................"));
        assert!(report.contains("  UINT16 LE: 0 0 0 0 0 0 0 0"));
        assert!(report.contains("  UINT32 BE: 0 0 0 0"));
        assert!(report.contains("  FLOAT32 LE: 0 0 0 0"));
    }

    #[test]
    fn test_full_mode_layers_generic_views_over_typed_fields() {
        let report = render(5, &BLOCK_5_TOKENS, true).unwrap();
        let typed_pos = report.find("Spool weight (g): 100").unwrap();
        let ascii_pos = report.find("ASCII :").unwrap();
        assert!(typed_pos < ascii_pos);
        assert!(report.contains("  UINT16 LE: 255 65280 100 0 52429 16012 0 0"));
    }

    #[test]
    fn test_unlabeled_block_gets_bare_header() {
        let report = render(64, &["AB", "CD"], true).unwrap();
        assert!(report.starts_with("Block 64: AB CD"));
    }

    #[test]
    fn test_detected_string_line() {
        let tokens = [
            "50", "4C", "41", "2D", "43", "46", "00", "00", "00", "00", "00", "00", "00", "00",
            "00", "00",
        ];
        let report = render(20, &tokens, true).unwrap();
        assert!(report.contains("  Detected string: PLA-CF"));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        assert_eq!(
            render(5, &BLOCK_5_TOKENS, true),
            render(5, &BLOCK_5_TOKENS, true)
        );
    }
}
