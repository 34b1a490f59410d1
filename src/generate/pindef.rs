//! Per-pin descriptor constants and the ordered pointer array over them.

use std::io::{self, Write};

use crate::config::Config;
use crate::pin::PinDefinition;
use crate::table::PinTable;

/// The C type every descriptor constant is declared with. Header only.
pub fn pindef_struct(out: &mut dyn Write, config: &Config) -> io::Result<()> {
    let upper = config.prefix.upper();
    writeln!(out, "typedef struct tag{upper}_PINDEF {{")?;
    writeln!(out, "  int seq;")?;
    writeln!(out, "  int pinnum;")?;
    writeln!(out, "  int port;")?;
    writeln!(out, "  int bit;")?;
    writeln!(out, "  char *altfunc1;")?;
    writeln!(out, "  char *altfunc2;")?;
    writeln!(out, "  char *altfunc3;")?;
    writeln!(out, "  char *signame;")?;
    writeln!(out, "  int func;")?;
    writeln!(out, "  int inout;")?;
    writeln!(out, "  int mode;")?;
    writeln!(out, "  int odrain;")?;
    writeln!(out, "  int def;")?;
    writeln!(out, "  int active;")?;
    writeln!(out, "}} {upper}_PINDEF;")?;
    writeln!(out)?;
    Ok(())
}

/// `extern` declaration of one descriptor constant.
///
/// The symbol is prefix + signal name; a duplicate signal name in the table
/// therefore produces a redefinition the C compiler will reject.
pub fn pindef_decl(out: &mut dyn Write, config: &Config, pin: &PinDefinition) -> io::Result<()> {
    let upper = config.prefix.upper();
    writeln!(out, "extern const {upper}_PINDEF {upper}_{};", pin.signame)
}

/// The matching definition, with all fourteen fields spelled out.
pub fn pindef_def(out: &mut dyn Write, config: &Config, pin: &PinDefinition) -> io::Result<()> {
    let upper = config.prefix.upper();
    writeln!(
        out,
        "const {upper}_PINDEF {upper}_{sig} = {{ {}, {}, {}, {}, \"{}\", \"{}\", \"{}\", \"{sig}\", {}, {}, {}, {}, {}, {} }};",
        pin.seq,
        pin.pinnum,
        pin.port,
        pin.bit,
        pin.altfunc[0],
        pin.altfunc[1],
        pin.altfunc[2],
        pin.func_raw(),
        pin.inout_raw(),
        pin.mode,
        pin.odrain,
        pin.def,
        pin.active_raw(),
        sig = pin.signame,
    )
}

/// `NUM_PINDEFS` and the extern declaration of the pointer array.
pub fn pin_array_decl(out: &mut dyn Write, config: &Config, table: &PinTable) -> io::Result<()> {
    let upper = config.prefix.upper();
    writeln!(out, "#define NUM_PINDEFS ({})", table.len())?;
    writeln!(out, "extern const {upper}_PINDEF* {upper}_PINS[NUM_PINDEFS];")?;
    writeln!(out)?;
    Ok(())
}

/// Definition of the pointer array, in sequence order, greedily packed and
/// wrapped once a line's column count passes 80.
pub fn pin_array_def(out: &mut dyn Write, config: &Config, table: &PinTable) -> io::Result<()> {
    let upper = config.prefix.upper();
    writeln!(out, "const {upper}_PINDEF* {upper}_PINS[NUM_PINDEFS] = {{")?;
    write!(out, "    ")?;
    let mut ncol = 4;
    for pin in table {
        write!(out, "&{upper}_{}, ", pin.signame)?;
        // Name plus prefix, underscore, comma and space. The leading `&` is
        // not counted; the original didn't either.
        ncol += pin.signame.len() + 2 + upper.len() + 1;
        if ncol > 80 {
            write!(out, "\n    ")?;
            ncol = 4;
        }
    }
    writeln!(out, "\n}};")?;
    Ok(())
}
