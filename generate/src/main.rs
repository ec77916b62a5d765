// To regenerate tables, run the following in the repo root:
//
// $ curl -LO https://www.unicode.org/Public/zipped/15.1.0/UCD.zip
// $ unzip UCD.zip -d UCD
// $ cargo run --manifest-path generate/Cargo.toml -- UCD
//
// Set RUST_LOG=debug to see the size of each table.

mod build;
mod derive;
mod error;
mod output;
mod parse;

use crate::build::BuiltTables;
use crate::error::GenerateError;
use crate::output::Output;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;
use widechar_width::Table;

const PATH: &str = "../src/tables.rs";

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let ucd_dir = env::args_os()
        .nth(1)
        .map_or_else(|| PathBuf::from("UCD"), PathBuf::from);
    if let Err(err) = run(&ucd_dir) {
        log::error!("{}", err);
        process::exit(1);
    }
}

fn run(ucd_dir: &Path) -> Result<(), GenerateError> {
    let ucd = parse::read_ucd(ucd_dir)?;
    log::info!("Thinking...");
    let codepoints = derive::codepoints(&ucd)?;
    let tables = build::build(derive::raw_tables(&codepoints))?;
    for table in Table::ALL {
        log::debug!("{}: {} ranges", table.name(), tables.table_for(table).len());
    }

    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join(PATH);
    fs::write(&path, emit(&tables)).map_err(|source| GenerateError::Write {
        path: path.clone(),
        source,
    })?;
    log::info!("Output {}", path.display());
    Ok(())
}

fn emit(tables: &BuiltTables) -> Output {
    let mut out = Output::new();
    writeln!(out, "// This file is generated by generate/src/main.rs. Do not edit.");
    writeln!(out);
    writeln!(out, "use crate::table::Range;");
    for table in Table::ALL {
        let (name, doc) = match table {
            Table::Ascii => ("ASCII", "Printable ASCII."),
            Table::PrivateUse => ("PRIVATE_USE", "Private use."),
            Table::NonPrint => ("NONPRINT", "Nonprinting characters."),
            Table::NonCharacter => ("NONCHARACTER", "Noncharacters."),
            Table::Combining => ("COMBINING", "Width 0 combining marks."),
            Table::CombiningLetters => ("COMBINING_LETTERS", "Width 0 combining letters."),
            Table::DoubleWide => ("DOUBLEWIDE", "Width 2 characters."),
            Table::Ambiguous => ("AMBIGUOUS", "Ambiguous-width characters."),
            Table::Unassigned => ("UNASSIGNED", "Unassigned characters."),
            Table::WidenedIn9 => (
                "WIDENED_IN_9",
                "Characters widened from width 1 to 2 in Unicode 9.",
            ),
        };
        out.table(name, doc, tables.table_for(table));
    }
    out
}
