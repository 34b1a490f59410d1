//! Folds the pin table into the LPC17xx pin-configuration register values.

use crate::pin::Direction;
use crate::table::PinTable;

/// GPIO ports 0 through 4.
pub const NUM_PORTS: usize = 5;
/// Function-select registers: two per port, plus PINSEL10.
pub const NUM_PINSEL: usize = 11;
/// Mode registers: two per port.
pub const NUM_PINMODE: usize = 10;

/// Initialization values for the five register groups, one `u32` bitfield
/// per hardware register.
///
/// A pure function of the table: the five passes are independent of each
/// other, and each pin's contribution commutes with every other pin's
/// except when two rows share a (port, bit) pair, in which case the later
/// row wins. Such a table is a data error upstream and is not defended
/// against here.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegisterGroups {
    /// FIODIR: direction per port bit, 1 = output.
    pub fiodir: [u32; NUM_PORTS],
    /// PINSEL: 2-bit function select, sixteen fields per register.
    pub pinsel: [u32; NUM_PINSEL],
    /// PINMODE: 2-bit pin mode, packed like PINSEL.
    pub pinmode: [u32; NUM_PINMODE],
    /// PINMODE_OD: open-drain enable per port bit.
    pub pinmode_od: [u32; NUM_PORTS],
    /// FIOPIN: default output level per port bit.
    pub fiopin: [u32; NUM_PORTS],
    /// FIOMASK: everything masked by default; GPIO-function pins unmasked.
    pub fiomask: [u32; NUM_PORTS],
}

impl RegisterGroups {
    /// Accumulates all five groups from a complete table.
    ///
    /// Ports are assumed in 0..=4 and bits in 0..=31 (the upper half of a
    /// port addresses the odd PINSEL/PINMODE register of the pair).
    pub fn from_table(table: &PinTable) -> Self {
        let mut regs = Self {
            fiodir: [0; NUM_PORTS],
            pinsel: [0; NUM_PINSEL],
            pinmode: [0; NUM_PINMODE],
            pinmode_od: [0; NUM_PORTS],
            fiopin: [0; NUM_PORTS],
            fiomask: [0xffff_ffff; NUM_PORTS],
        };
        regs.accumulate_direction(table);
        regs.accumulate_function(table);
        regs.accumulate_mode(table);
        regs.accumulate_level(table);
        regs.accumulate_mask(table);
        regs
    }

    /// FIODIR: clear for input, set for output, untouched when unset.
    fn accumulate_direction(&mut self, table: &PinTable) {
        for pin in table {
            let mask = 1u32 << pin.bit;
            match pin.direction {
                Some(Direction::Input) => self.fiodir[pin.port as usize] &= !mask,
                Some(Direction::Output) => self.fiodir[pin.port as usize] |= mask,
                None => {}
            }
        }
    }

    /// PINSEL: zero the pin's 2-bit field, then or in the selected
    /// function. An unset function leaves the field cleared.
    fn accumulate_function(&mut self, table: &PinTable) {
        for pin in table {
            let (reg, shift) = packed_slot(pin.port, pin.bit);
            self.pinsel[reg] &= !(0x03 << shift);
            if let Some(func) = pin.func {
                self.pinsel[reg] |= u32::from(func & 0x03) << shift;
            }
        }
    }

    /// PINMODE uses the same packing as PINSEL; PINMODE_OD is one bit per
    /// port bit and only reacts to explicit 0/1 flags.
    fn accumulate_mode(&mut self, table: &PinTable) {
        for pin in table {
            let (reg, shift) = packed_slot(pin.port, pin.bit);
            self.pinmode[reg] &= !(0x03 << shift);
            self.pinmode[reg] |= u32::from(pin.mode & 0x03) << shift;

            let mask = 1u32 << pin.bit;
            match pin.odrain {
                1 => self.pinmode_od[pin.port as usize] |= mask,
                0 => self.pinmode_od[pin.port as usize] &= !mask,
                _ => {}
            }
        }
    }

    /// FIOPIN: the level each output is initialized to.
    fn accumulate_level(&mut self, table: &PinTable) {
        for pin in table {
            let mask = 1u32 << pin.bit;
            match pin.def {
                1 => self.fiopin[pin.port as usize] |= mask,
                0 => self.fiopin[pin.port as usize] &= !mask,
                _ => {}
            }
        }
    }

    /// FIOMASK: starts all-ones; any pin on its primary GPIO function
    /// (func 0) gets its bit unmasked.
    fn accumulate_mask(&mut self, table: &PinTable) {
        for pin in table {
            if pin.func == Some(0) {
                self.fiomask[pin.port as usize] &= !(1u32 << pin.bit);
            }
        }
    }
}

/// PINSEL/PINMODE addressing: each port owns two consecutive registers of
/// sixteen 2-bit fields; bits 16..=31 live in the odd register.
fn packed_slot(port: u8, bit: u8) -> (usize, u32) {
    if bit < 16 {
        (2 * port as usize, 2 * u32::from(bit))
    } else {
        (2 * port as usize + 1, 2 * u32::from(bit - 16))
    }
}
