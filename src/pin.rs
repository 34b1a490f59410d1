/// Sentinel package pin number marking a port bit that is not bonded out.
pub const UNUSED_PIN: u32 = 0;

/// Raw value rendered into the C descriptor for an unset optional field.
pub(crate) const UNSET: u8 = 0xff;

/// Signal direction, when the table specifies one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Input,
    Output,
}

/// Active polarity of a signal: whether logic "on" is electrical high.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Polarity {
    High,
    Low,
}

/// One accepted row of the pinout table, immutable once built.
///
/// Optional columns that the original table format encodes with a `0xFF`
/// sentinel are `Option`s here; the sentinel reappears only when the C
/// descriptor literal is rendered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PinDefinition {
    /// Dense 0-based index in acceptance order. Distinct from the table's
    /// own ITEM column, which is validated but ignored.
    pub seq: usize,
    /// Physical package pin number.
    pub pinnum: u32,
    /// GPIO port, expected in 0..=4.
    pub port: u8,
    /// Bit within the port, expected in 0..=31.
    pub bit: u8,
    /// Up to three alternate-function names, empty when absent.
    pub altfunc: [String; 3],
    /// Project signal name. Non-empty; defines the pin's identity and every
    /// generated symbol name.
    pub signame: String,
    /// Selected function, 0..=3.
    pub func: Option<u8>,
    pub direction: Option<Direction>,
    /// Port mode, 0..=3.
    pub mode: u8,
    /// Open-drain flag: 1 enables, 0 disables.
    pub odrain: u8,
    /// Default output level to initialize the pin to.
    pub def: u8,
    pub active: Option<Polarity>,
}

impl PinDefinition {
    /// A definition with every optional column at its preset default.
    pub fn new(seq: usize) -> Self {
        Self {
            seq,
            pinnum: UNUSED_PIN,
            port: 0,
            bit: 0,
            altfunc: Default::default(),
            signame: String::new(),
            func: None,
            direction: None,
            mode: 0,
            odrain: 0,
            def: 0,
            active: Some(Polarity::High),
        }
    }

    /// Is this signal an open-drain output?
    pub fn is_open_drain(&self) -> bool {
        self.odrain == 1
    }

    pub(crate) fn func_raw(&self) -> u8 {
        self.func.unwrap_or(UNSET)
    }

    pub(crate) fn inout_raw(&self) -> u8 {
        match self.direction {
            Some(Direction::Input) => 1,
            Some(Direction::Output) => 0,
            None => UNSET,
        }
    }

    pub(crate) fn active_raw(&self) -> u8 {
        match self.active {
            Some(Polarity::High) => 1,
            Some(Polarity::Low) => 0,
            None => UNSET,
        }
    }
}
