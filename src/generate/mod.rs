//! Renders the accepted table and the accumulated register values into the
//! two generated C files.
//!
//! Everything here writes plain text into a caller-supplied sink and is
//! careful to be byte-stable: downstream projects diff the generated files
//! to spot pinout changes, so column padding and blank lines are part of
//! the contract.

mod macros;
mod pindef;
mod registers;

pub use macros::{bit_macros, port_bit_defines};
pub use pindef::{pin_array_decl, pin_array_def, pindef_decl, pindef_def, pindef_struct};
pub use registers::register_defines;

use std::io::{self, Write};

use crate::config::Config;
use crate::util::trim_bom;

pub(crate) const RULE: &str =
    "//************************************************************************";

/// The "this file was autogenerated" comment block, identical in both
/// output files.
pub fn banner(out: &mut dyn Write, config: &Config, stamp: &str) -> io::Result<()> {
    writeln!(out, "{RULE}")?;
    writeln!(out, "{RULE}")?;
    writeln!(out, "//***")?;
    writeln!(out, "//***  NOTE:  This file was automatically generated by PINS2C")?;
    writeln!(out, "//***  Processing Date/Time:     {stamp}")?;
    writeln!(out, "//***  Input Pin Info CSV file:  {}", config.input.display())?;
    writeln!(out, "//***  Project Name Prefix:      {}", config.prefix.upper())?;
    writeln!(out, "//***  Output C-File:            {}", config.source_name())?;
    writeln!(out, "//***  Output H-File:            {}", config.header_name())?;
    writeln!(out, "//***")?;
    writeln!(out, "{RULE}")?;
    writeln!(out, "{RULE}")?;
    writeln!(out)?;
    Ok(())
}

/// The source file just includes the generated header.
pub fn source_preamble(out: &mut dyn Write, config: &Config) -> io::Result<()> {
    writeln!(out, "#include \"{}\"", config.header_name())?;
    writeln!(out)?;
    Ok(())
}

/// Appends the whole input file, numbered, as comment text for reference.
pub fn input_echo(out: &mut dyn Write, config: &Config, csv_text: &str) -> io::Result<()> {
    let input = config.input.display();
    writeln!(out, "{RULE}")?;
    writeln!(out, "//***  Input Pin Info CSV file {input}, printed below for reference:")?;
    writeln!(out, "{RULE}")?;
    for (i, line) in csv_text.lines().enumerate() {
        let line = if i == 0 { trim_bom(line) } else { line };
        writeln!(out, "//{:04}: {}", i + 1, line)?;
    }
    writeln!(out, "{RULE}")?;
    writeln!(out, "//***  END OF FILE {input}")?;
    writeln!(out, "{RULE}")?;
    Ok(())
}
