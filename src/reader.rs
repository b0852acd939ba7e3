// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/reader.rs - Dump file reader for filament spool tag dumps.
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
 * # `reader` Module
 *
 * This module parses a line-oriented tag dump into per-block token lists
 * and drives rendering in file order.
 *
 * A record line has the shape `Block <index>: <token> <token> ...`. Lines
 * of any other shape (headers, comments, prompts from the dumping tool)
 * are silently skipped. The only fatal condition is failing to read the
 * dump file itself.
 *
 * ## Usage Example
 *
 * ```no_run
 * use spooltag::reader::TagDump;
 *
 * fn main() -> Result<(), Box<dyn std::error::Error>> {
 *     let dump = TagDump::from_filename("tag.nfc")?;
 *     for report in dump.report(false) {
 *         println!("{}\n", report);
 *     }
 *     Ok(())
 * }
 * ```
 */

use std::fs::File;
use std::io::BufReader;
use std::io::prelude::*;

use crate::renderer;

/// One block record from a dump file: its index and raw byte tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DumpBlock {
    /// The block index parsed from the line header.
    pub index: u32,
    /// The whitespace-separated tokens after the colon, unmodified.
    pub tokens: Vec<String>,
}

/// A parsed tag dump, holding its block records in file order.
#[derive(Debug)]
pub struct TagDump {
    /// The qualifying block records, in file order.
    pub blocks: Vec<DumpBlock>,
}

impl TagDump {
    /// Reads and parses a dump file.
    ///
    /// # Arguments
    ///
    /// * `filename` - Path to the dump file.
    ///
    /// # Returns
    ///
    /// A `Result` containing the parsed `TagDump` or an error. Failing to
    /// open or read the file is the only error path; malformed lines are
    /// skipped, not reported.
    pub fn from_filename(filename: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let file = File::open(filename)?;
        let mut reader = BufReader::new(file);

        let mut buffer = Vec::new();
        reader.read_to_end(&mut buffer)?;

        // Dump tools occasionally emit stray non-UTF-8 bytes; those lines
        // just fail to qualify.
        Ok(Self::from_text(&String::from_utf8_lossy(&buffer)))
    }

    /// Parses dump text into block records, skipping non-qualifying lines.
    pub fn from_text(text: &str) -> Self {
        Self {
            blocks: text.lines().filter_map(parse_line).collect(),
        }
    }

    /// Renders the report for every block, in file order.
    ///
    /// In terse mode (`full_detail = false`) blocks without a typed schema
    /// are omitted. The caller joins the reports with blank lines.
    pub fn report(&self, full_detail: bool) -> Vec<String> {
        self.blocks
            .iter()
            .filter_map(|b| renderer::render(b.index, &b.tokens, full_detail))
            .collect()
    }
}

/// Decodes dump lines straight to block reports.
///
/// Equivalent to [TagDump::from_text] followed by [TagDump::report], for
/// callers that already hold the lines in memory.
pub fn decode_dump<'a, I>(lines: I, full_detail: bool) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .filter_map(parse_line)
        .filter_map(|b| renderer::render(b.index, &b.tokens, full_detail))
        .collect()
}

fn parse_line(line: &str) -> Option<DumpBlock> {
    let (header, data) = line.trim().split_once(':')?;

    let mut words = header.split_whitespace();
    if words.next() != Some("Block") {
        return None;
    }
    let index = words.next()?.parse().ok()?;

    Some(DumpBlock {
        index,
        tokens: data.split_whitespace().map(String::from).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLOCK_5_LINE: &str =
        "Block 5: FF 00 00 FF 64 00 00 00 CD CC 4C 3E 00 00 00 00";

    #[test]
    fn test_qualifying_line_is_parsed() {
        let dump = TagDump::from_text(BLOCK_5_LINE);
        assert_eq!(dump.blocks.len(), 1);
        assert_eq!(dump.blocks[0].index, 5);
        assert_eq!(dump.blocks[0].tokens.len(), 16);
        assert_eq!(dump.blocks[0].tokens[0], "FF");
    }

    #[test]
    fn test_leading_whitespace_is_trimmed() {
        let dump = TagDump::from_text("  Block 9: 41 42 43 44");
        assert_eq!(dump.blocks.len(), 1);
        assert_eq!(dump.blocks[0].index, 9);
    }

    #[test]
    fn test_non_qualifying_lines_are_skipped() {
        let text = "\
# dump of tray 1
Blocks 5 FF 00
Block: 00 11
Block x: 00 11
Block 5 FF 00 22
";
        assert!(TagDump::from_text(text).blocks.is_empty());
    }

    #[test]
    fn test_malformed_line_does_not_suppress_valid_ones() {
        let text = format!("Block 5 FF 00 00 FF\n{}", BLOCK_5_LINE);
        let reports = decode_dump(text.lines(), false);
        assert_eq!(reports.len(), 1);
        assert!(reports[0].starts_with("Block 5 ("));
    }

    #[test]
    fn test_report_preserves_file_order() {
        let text = format!("Block 9: 41 42 43 44\n{}", BLOCK_5_LINE);
        let reports = decode_dump(text.lines(), false);
        assert_eq!(reports.len(), 2);
        assert!(reports[0].starts_with("Block 9 (Tray UID):"));
        assert!(reports[1].starts_with("Block 5 ("));
    }

    #[test]
    fn test_terse_report_omits_untyped_blocks() {
        let text = "Block 20: 00 00 00 00\nBlock 9: 41 42 43 44";
        let reports = decode_dump(text.lines(), false);
        assert_eq!(reports.len(), 1);
        assert!(reports[0].starts_with("Block 9 "));
    }

    #[test]
    fn test_full_report_includes_every_block() {
        let text = "Block 20: 00 00 00 00\nBlock 9: 41 42 43 44";
        let reports = decode_dump(text.lines(), true);
        assert_eq!(reports.len(), 2);
        assert!(reports[0].contains("ASCII :"));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(TagDump::from_filename("/nonexistent/tag.nfc").is_err());
    }
}
