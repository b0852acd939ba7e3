// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/lib.rs - Decoder library for filament spool RFID tag dumps.
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
 * # `spooltag` Crate
 *
 * A library for decoding the 1 KB contactless memory tags embedded in
 * spooled filament cartridges, turning a raw or partially-masked byte dump
 * into a human-readable, semantically labeled report.
 *
 * The pipeline, leaf-first:
 *
 * 1. [parser]: Converts dump tokens into optional bytes, tolerating masked
 *    or unreadable positions.
 * 2. [schema]: Maps block indices to their documented meaning.
 * 3. [fields]: Extracts named, typed values from documented blocks.
 * 4. [interpreter]: Produces generic numeric/ASCII views of any block.
 * 5. [renderer]: Combines the above into the report for one block.
 * 6. [reader]: Parses a dump file and assembles the full report.
 *
 * ## Usage Example
 *
 * ```no_run
 * use spooltag::reader::TagDump;
 *
 * fn main() -> Result<(), Box<dyn std::error::Error>> {
 *     // Read and parse the dump file
 *     let dump = TagDump::from_filename("tag.nfc")?;
 *
 *     // Render the terse report (documented blocks only)
 *     let reports = dump.report(false);
 *     println!("{}", reports.join("\n\n"));
 *
 *     Ok(())
 * }
 * ```
 */

pub mod fields;
pub mod interpreter;
pub mod parser;
pub mod reader;
pub mod renderer;
pub mod schema;
