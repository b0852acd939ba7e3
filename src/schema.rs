// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/schema.rs - Block schema registry for filament spool tag dumps.
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
 * # `schema` Module
 *
 * Static registry mapping tag block indices to their documented meaning.
 * Every index in `0..=63` resolves to exactly one entry; the trailing
 * signature region (blocks 40-63) shares a single range entry.
 */

/// First block of the trailing signature region.
const SIGNATURE_FIRST: u32 = 40;
/// Last addressable block on the tag.
const SIGNATURE_LAST: u32 = 63;

/// The documented meaning of one tag block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaEntry {
    /// The block's display label (e.g., "Block 5").
    pub label: String,
    /// The documented purpose of the block.
    pub description: &'static str,
}

/// Looks up the schema entry for a block index.
///
/// Returns `None` only for indices past the end of the tag; every index in
/// `0..=63` has an entry.
pub fn lookup(block: u32) -> Option<SchemaEntry> {
    let description = match block {
        0 => "UID and Tag Manufacturer Data",
        1 => "Tray Info Index",
        2 => "Filament Type",
        4 => "Detailed Filament Type",
        5 => "Spool Weight, Color Code, Filament Diameter",
        6 => "Temperatures and Drying Info",
        8 => "X Cam Info, Nozzle Diameter",
        9 => "Tray UID",
        10 => "Spool Width",
        12 => "Production Date/Time",
        13 => "Short Production Date/Time",
        14 => "Filament Length",
        16 => "Extra Color Info",
        17 => "Unknown",
        3 | 7 | 11 | 15 | 19 | 23 | 27 | 31 | 35 | 39 => "MIFARE encryption keys (standard)",
        18 | 20..=22 | 24..=26 | 28..=30 | 32..=34 | 36..=38 => "Empty",
        SIGNATURE_FIRST..=SIGNATURE_LAST => "RSA-2048 Signature area",
        _ => return None,
    };

    Some(SchemaEntry {
        label: format!("Block {}", block),
        description,
    })
}
