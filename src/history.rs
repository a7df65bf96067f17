
use bitvec::prelude::*;
use crate::bits::{self, BitVector};
use crate::error::*;

/// A fixed-capacity shift register, used for both global history and for
/// holding the saturating counter under inspection.
///
/// Bits enter at index 0 (the least-significant end) and leave from index
/// n-1. The most recently inserted bit is always the rightmost character
/// when the register is displayed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShiftRegister {
    name: &'static str,
    data: BitVector,
}

// Displayed MSB-first: the newest bit is rightmost.
impl std::fmt::Display for ShiftRegister {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", bits::to_string(&self.data))
    }
}

impl ShiftRegister {
    /// Create a register with the specified length in bits.
    /// All bits in the register are initialized to zero.
    pub fn new(name: &'static str, len: usize) -> Self {
        Self {
            name,
            data: bits::zeros(len),
        }
    }

    pub fn name(&self) -> &'static str { self.name }
    pub fn len(&self) -> usize { self.data.len() }
    pub fn is_empty(&self) -> bool { self.data.is_empty() }

    /// Return the current contents.
    pub fn read(&self) -> &BitVector { &self.data }

    /// Overwrite the contents of the register.
    pub fn load(&mut self, value: &BitSlice<usize, Lsb0>) -> Result<()> {
        GagError::check_len(self.name, self.len(), value.len())?;
        self.data.copy_from_bitslice(value);
        Ok(())
    }

    /// Shift the register by one bit and place 'bit' at index 0.
    /// The top bit is discarded.
    pub fn insert(&mut self, bit: bool) {
        if self.data.is_empty() {
            return;
        }
        self.data.shift_end(1);
        self.data.set(0, bit);
    }

    /// Set every bit back to zero.
    pub fn clear(&mut self) {
        self.data.fill(false);
    }

    pub fn monitor(&self) -> String {
        format!("{}: {}\n", self.name, self)
    }
}
