//! The record parser: one raw CSV line in, one validated pin definition
//! (or a "skip" signal) out.

use crate::errors::Error;
use crate::pin::{Direction, PinDefinition, Polarity, UNUSED_PIN};
use crate::util::strip_quotes;

/// Every record carries exactly this many positional fields.
pub const NUM_FIELDS: usize = 14;

/// Splits a line into its 14 positional fields on literal commas.
///
/// Missing trailing fields come back empty; anything past field 13 is
/// ignored. Quotes are not honored here, so a quoted field containing a
/// comma shifts every later field by one. That limitation is part of the
/// format.
fn split_fields(line: &str) -> [&str; NUM_FIELDS] {
    let mut fields = [""; NUM_FIELDS];
    for (slot, part) in fields.iter_mut().zip(line.split(',')) {
        *slot = part;
    }
    fields
}

/// Parses one data line of the table.
///
/// Returns `Ok(None)` for rows that are skipped rather than rejected: a
/// pin number of `N/A` or 0 (not bonded on this package) or an empty
/// signal name (not used by this project). Skipped rows do not consume a
/// sequence index; `seq` is the index the row receives if it is accepted.
///
/// A field that is empty in the raw record keeps its preset default, even
/// for the numeric columns; only a non-empty field that fails to parse is
/// an error.
pub fn parse_record(
    line: &str,
    lineno: u64,
    seq: usize,
) -> Result<Option<PinDefinition>, Error> {
    let mut pin = PinDefinition::new(seq);

    for (index, raw) in split_fields(line).iter().enumerate() {
        if raw.is_empty() {
            continue;
        }
        let field = strip_quotes(raw);

        match index {
            // The table's own ITEM column: validated, then ignored in favor
            // of the dense acceptance-order index.
            0 => {
                required_int(field, lineno, index)?;
            }
            1 => {
                if field.starts_with("N/A") {
                    return Ok(None);
                }
                pin.pinnum = required_int(field, lineno, index)? as u32;
            }
            2 => pin.port = required_int(field, lineno, index)? as u8,
            3 => pin.bit = required_int(field, lineno, index)? as u8,
            4..=6 if field.len() > 1 => {
                pin.altfunc[index - 4] = field.to_string();
            }
            7 if field.len() > 1 => pin.signame = field.to_string(),
            8 => {
                if let Some(v) = optional_int(field) {
                    pin.func = Some(v as u8);
                }
            }
            9 => {
                pin.direction = match optional_int(field) {
                    Some(1) => Some(Direction::Input),
                    Some(0) => Some(Direction::Output),
                    _ => pin.direction,
                }
            }
            10 => {
                if let Some(v) = optional_int(field) {
                    pin.mode = v as u8;
                }
            }
            11 => {
                if let Some(v) = optional_int(field) {
                    pin.odrain = v as u8;
                }
            }
            12 => {
                if let Some(v) = optional_int(field) {
                    pin.def = v as u8;
                }
            }
            13 => {
                pin.active = match optional_int(field) {
                    Some(1) => Some(Polarity::High),
                    Some(0) => Some(Polarity::Low),
                    None => pin.active,
                    Some(_) => None,
                }
            }
            _ => {}
        }
    }

    if pin.pinnum == UNUSED_PIN || pin.signame.is_empty() {
        return Ok(None);
    }
    Ok(Some(pin))
}

fn required_int(field: &str, line: u64, index: usize) -> Result<i32, Error> {
    field.trim().parse().map_err(|_| Error::MalformedField {
        line,
        field: index,
        text: field.to_string(),
    })
}

fn optional_int(field: &str) -> Option<i32> {
    field.trim().parse().ok()
}
