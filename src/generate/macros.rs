//! Per-pin port/bit defines and the bit-access macro families.
//!
//! These macros are the surface consuming firmware actually uses, so the
//! exact text (including the uneven column padding) is load-bearing.

use std::io::{self, Write};

use crate::config::Config;
use crate::pin::Polarity;
use crate::table::PinTable;

/// Raw port and bit numbers per signal, for consumers that need them.
pub fn port_bit_defines(out: &mut dyn Write, config: &Config, table: &PinTable) -> io::Result<()> {
    let upper = config.prefix.upper();
    for pin in table {
        let name = format!("{upper}_{}_PORT", pin.signame);
        writeln!(out, "#define {name:<32}    ({})", pin.port)?;
        let name = format!("{upper}_{}_BIT", pin.signame);
        writeln!(out, "#define {name:<32}    ({})", pin.bit)?;
    }
    writeln!(out)?;
    Ok(())
}

/// The macro family per signal:
///
/// - `GET_` always reads the current level, shifted down to 0/1;
/// - open-drain pins get `OPEN_` (release to pull-up) and `SINK_` (drive
///   low) instead of raw set/clear;
/// - driven pins get `SET_`/`CLR_`, plus polarity-aware `ON_`/`OFF_`/`QON_`
///   when an active polarity is known (`QON_` answers "is it on?", so the
///   active-low variant inverts the read).
pub fn bit_macros(out: &mut dyn Write, config: &Config, table: &PinTable) -> io::Result<()> {
    let upper = config.prefix.upper();
    for pin in table {
        let sig = &pin.signame;
        let (port, bit) = (pin.port, pin.bit);

        writeln!(
            out,
            "#define {upper}_GET_{sig:<25}   ((LPC_GPIO{port}->FIOPIN & (1<<{bit})) >> {bit})"
        )?;

        if pin.is_open_drain() {
            writeln!(
                out,
                "#define {upper}_OPEN_{sig:<25}    (LPC_GPIO{port}->FIOSET = (1<<{bit}))"
            )?;
            writeln!(
                out,
                "#define {upper}_SINK_{sig:<25}    (LPC_GPIO{port}->FIOCLR = (1<<{bit}))"
            )?;
            continue;
        }

        writeln!(
            out,
            "#define {upper}_SET_{sig:<25}    (LPC_GPIO{port}->FIOSET = (1<<{bit}))"
        )?;
        writeln!(
            out,
            "#define {upper}_CLR_{sig:<25}    (LPC_GPIO{port}->FIOCLR = (1<<{bit}))"
        )?;

        match pin.active {
            Some(Polarity::High) => {
                writeln!(
                    out,
                    "#define {upper}_ON_{sig:<25}    (LPC_GPIO{port}->FIOSET = (1<<{bit}))"
                )?;
                writeln!(
                    out,
                    "#define {upper}_OFF_{sig:<25}    (LPC_GPIO{port}->FIOCLR = (1<<{bit}))"
                )?;
                writeln!(
                    out,
                    "#define {upper}_QON_{sig:<25}   ((LPC_GPIO{port}->FIOPIN & (1<<{bit})) >> {bit})"
                )?;
            }
            Some(Polarity::Low) => {
                writeln!(
                    out,
                    "#define {upper}_ON_{sig:<25}     (LPC_GPIO{port}->FIOCLR = (1<<{bit}))"
                )?;
                writeln!(
                    out,
                    "#define {upper}_OFF_{sig:<25}    (LPC_GPIO{port}->FIOSET = (1<<{bit}))"
                )?;
                writeln!(
                    out,
                    "#define {upper}_QON_{sig:<25}  (((LPC_GPIO{port}->FIOPIN & (1<<{bit})) >> {bit})^1)"
                )?;
            }
            None => {}
        }
    }
    writeln!(out)?;
    Ok(())
}
