use crate::pin::PinDefinition;

/// Hard cap on accepted pins, inherited from the original table format.
pub const MAX_PINS: usize = 256;

/// Append-only, insertion-ordered collection of accepted pin definitions.
///
/// Once the cap is reached further pushes are dropped on the floor, with no
/// diagnostic. The pipeline stops intake as soon as the table reports full,
/// so in practice nothing past pin 256 is even parsed.
#[derive(Clone, Debug, Default)]
pub struct PinTable {
    pins: Vec<PinDefinition>,
}

impl PinTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a pin, unless the table is already at capacity.
    ///
    /// Returns whether the pin was stored.
    pub fn push(&mut self, pin: PinDefinition) -> bool {
        if self.is_full() {
            return false;
        }
        self.pins.push(pin);
        true
    }

    pub fn len(&self) -> usize {
        self.pins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pins.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.pins.len() >= MAX_PINS
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PinDefinition> {
        self.pins.iter()
    }
}

impl<'a> IntoIterator for &'a PinTable {
    type Item = &'a PinDefinition;
    type IntoIter = std::slice::Iter<'a, PinDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.pins.iter()
    }
}
