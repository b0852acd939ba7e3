// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  decode.rs - Report demo for filament spool tag dumps.
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

use clap::Parser;

use spooltag::reader::TagDump;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The dump file to read.
    file: String,

    /// Show ASCII, UINT16/32, and FLOAT32 views for every block.
    #[arg(long)]
    full: bool,
}

fn main() {
    let args = Args::parse();

    let dump = match TagDump::from_filename(&args.file) {
        Ok(dump) => dump,
        Err(error) => {
            eprintln!("Error opening file {:?}: {:?}", &args.file, error);
            return;
        }
    };

    let reports = dump.report(args.full);
    if !reports.is_empty() {
        println!("{}", reports.join("\n\n"));
    }
}
