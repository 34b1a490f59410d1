//! C GPIO-initialization file generator for pinout CSV tables
//!
//! A pinout table is a comma-delimited file, typically exported from a
//! spreadsheet, that lists every pin of an embedded project: package pin
//! number, GPIO port and bit, the alternate-function names the hardware
//! offers, the signal name the project uses, and the desired electrical
//! configuration (function select, direction, mode, open drain, default
//! level, active polarity).
//!
//! `pins2c` turns such a table into a pair of C files, `<prefix>_gpio.c`
//! and `<prefix>_gpio.h`, containing:
//!
//! - a `const` pin-descriptor struct per signal, plus an ordered pointer
//!   array over all of them,
//! - `#define`d initialization values for the LPC17xx pin-configuration
//!   registers (`FIODIR`, `PINSEL`, `PINMODE`, `PINMODE_OD`, `FIOPIN`,
//!   `FIOMASK`), accumulated bit-by-bit from the table,
//! - a family of bit-access macros per signal (`GET_`, `SET_`/`CLR_` or
//!   `OPEN_`/`SINK_`, and polarity-aware `ON_`/`OFF_`/`QON_`),
//! - a numbered echo of the input table for reference.
//!
//! # Usage
//!
//! ```text
//! $ pins2c pinout.csv zebra
//! ```
//!
//! writes `zebra_gpio.c` and `zebra_gpio.h` into the current directory.
//!
//! The expected input starts with a header row, which is skipped:
//!
//! ```text
//! "ITEM","P176x","PORT","BIT","FUNC1","FUNC2","FUNC3","SIGNAME","FUNC","IN/OUT","MODE","OD","DEF","ACT"
//! 1,46,0,0,"RD1","TXD3","SDA1","GSM_TX",2,0,,,,
//! 2,47,0,1,"TD1","RXD3","SCL1","GSM_RX",2,1,,,,
//! ```
//!
//! Rows whose pin number is 0 (not bonded on this package) or whose signal
//! name is empty (not used by this project) are skipped. A line starting
//! with `END` stops the scan. The comma splitter is deliberately naive: it
//! only strips one leading and one trailing double quote per field, so a
//! quoted field containing a literal comma shifts every later field by one.

pub mod config;
mod csv;
pub mod errors;
mod generate;
mod pin;
mod registers;
mod table;
mod util;

pub use crate::config::{Config, Prefix};
pub use crate::errors::Error;
pub use crate::pin::{Direction, PinDefinition, Polarity};
pub use crate::registers::RegisterGroups;
pub use crate::table::{PinTable, MAX_PINS};

use std::io::Write;

use anyhow::Result;
use log::info;

/// Runs the whole pipeline over the text of a pinout CSV file, writing the
/// generated header and source into the given sinks.
///
/// The caller owns the sinks; the binary hands in the two output files,
/// already created (and truncated), so a failed run leaves partial output
/// behind. Tests hand in byte buffers.
///
/// Returns the number of accepted pin definitions.
pub fn generate(
    csv_text: &str,
    config: &Config,
    header: &mut dyn Write,
    source: &mut dyn Write,
) -> Result<usize> {
    let stamp = chrono::Local::now()
        .format("%a %d-%b-%Y %H:%M:%S")
        .to_string();

    generate::banner(source, config, &stamp)?;
    generate::source_preamble(source, config)?;

    generate::banner(header, config, &stamp)?;
    generate::pindef_struct(header, config)?;

    let mut table = PinTable::new();
    let mut lines = csv_text.lines();
    // The first line is the header row. It is never parsed.
    let _ = lines.next();
    let mut lineno: u64 = 1;

    for line in lines {
        if line.starts_with("END") {
            break;
        }
        lineno += 1;

        let Some(pin) = csv::parse_record(line, lineno, table.len())? else {
            continue;
        };

        generate::pindef_decl(header, config, &pin)?;
        generate::pindef_def(source, config, &pin)?;
        table.push(pin);
        if table.is_full() {
            // Known limitation carried over from the original table format:
            // intake just stops, with no diagnostic.
            break;
        }
    }

    info!("processed {} entries in {} lines", table.len(), lineno);

    generate::pin_array_decl(header, config, &table)?;
    generate::pin_array_def(source, config, &table)?;

    let regs = RegisterGroups::from_table(&table);
    generate::register_defines(header, config, &regs)?;

    generate::port_bit_defines(header, config, &table)?;
    generate::bit_macros(header, config, &table)?;

    generate::input_echo(header, config, csv_text)?;

    Ok(table.len())
}
