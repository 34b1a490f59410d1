//! `#define` blocks for the accumulated register initialization values.

use std::io::{self, Write};

use crate::config::Config;
use crate::registers::RegisterGroups;

/// One `<PREFIX>_<GROUP><i>_INIT` define per register slot, hex-formatted,
/// in group order: direction, function select, mode (with its open-drain
/// sub-group), output level, mask.
pub fn register_defines(out: &mut dyn Write, config: &Config, regs: &RegisterGroups) -> io::Result<()> {
    group(out, config, "FIODIR", &regs.fiodir)?;
    group(out, config, "PINSEL", &regs.pinsel)?;
    group(out, config, "PINMODE", &regs.pinmode)?;
    group(out, config, "PINMODE_OD", &regs.pinmode_od)?;
    group(out, config, "FIOPIN", &regs.fiopin)?;
    group(out, config, "FIOMASK", &regs.fiomask)?;
    Ok(())
}

fn group(out: &mut dyn Write, config: &Config, name: &str, values: &[u32]) -> io::Result<()> {
    let upper = config.prefix.upper();
    for (i, value) in values.iter().enumerate() {
        writeln!(out, "#define {upper}_{name}{i}_INIT (0x{value:08x})")?;
    }
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::super::test_util::{config, render};
    use super::*;
    use crate::table::PinTable;

    #[test]
    fn defines_every_slot_of_every_group() {
        let regs = RegisterGroups::from_table(&PinTable::new());
        let text = render(|out| register_defines(out, &config(), &regs).unwrap());
        for i in 0..5 {
            assert!(text.contains(&format!("#define ZEBRA_FIODIR{i}_INIT (0x00000000)\n")));
            assert!(text.contains(&format!("#define ZEBRA_PINMODE_OD{i}_INIT (0x00000000)\n")));
            assert!(text.contains(&format!("#define ZEBRA_FIOPIN{i}_INIT (0x00000000)\n")));
            assert!(text.contains(&format!("#define ZEBRA_FIOMASK{i}_INIT (0xffffffff)\n")));
        }
        for i in 0..11 {
            assert!(text.contains(&format!("#define ZEBRA_PINSEL{i}_INIT (0x00000000)\n")));
        }
        for i in 0..10 {
            assert!(text.contains(&format!("#define ZEBRA_PINMODE{i}_INIT (0x00000000)\n")));
        }
        assert!(!text.contains("PINSEL11"));
        assert!(!text.contains("PINMODE10"));
    }

    #[test]
    fn direction_group_comes_first() {
        let regs = RegisterGroups::from_table(&PinTable::new());
        let text = render(|out| register_defines(out, &config(), &regs).unwrap());
        let dir = text.find("ZEBRA_FIODIR0_INIT").unwrap();
        let sel = text.find("ZEBRA_PINSEL0_INIT").unwrap();
        let mask = text.find("ZEBRA_FIOMASK0_INIT").unwrap();
        assert!(dir < sel && sel < mask);
    }
}
