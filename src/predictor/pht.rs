//! Implementation of a pattern history table (PHT).

use bitvec::prelude::*;
use crate::bits::{self, BitVector};
use crate::error::*;
use crate::predictor::{MAX_COUNTER_BITS, MAX_HISTORY_BITS};

/// A table of saturating counters indexed by a history pattern.
///
/// The table is populated eagerly: every one of the 2^n possible keys holds
/// an all-zero (strongly not-taken) counter from the moment it is created,
/// so a lookup never misses.
#[derive(Clone, Debug)]
pub struct PatternHistoryTable {
    /// Number of bits in a key
    key_bits: usize,

    /// Number of bits in each counter
    value_bits: usize,

    /// Table of counters, indexed by the integer value of a key
    data: Vec<BitVector>,
}
impl PatternHistoryTable {
    /// Create a table with 2^'key_bits' entries of 'value_bits' each.
    ///
    /// Fails when 'key_bits' exceeds [MAX_HISTORY_BITS] or 'value_bits'
    /// exceeds [MAX_COUNTER_BITS].
    pub fn new(key_bits: usize, value_bits: usize) -> Result<Self> {
        let reason = if key_bits > MAX_HISTORY_BITS {
            "history length is too large"
        } else if value_bits > MAX_COUNTER_BITS {
            "counter width is too large"
        } else {
            let data = vec![bits::zeros(value_bits); 1 << key_bits];
            return Ok(Self { key_bits, value_bits, data });
        };
        Err(GagError::Configuration {
            history_bits: key_bits,
            counter_bits: value_bits,
            reason,
        })
    }

    /// Returns the number of entries in the table.
    pub fn len(&self) -> usize { self.data.len() }
    pub fn is_empty(&self) -> bool { self.data.is_empty() }

    pub fn key_bits(&self) -> usize { self.key_bits }
    pub fn value_bits(&self) -> usize { self.value_bits }

    /// Given some key, return the corresponding index into the table.
    fn get_index(&self, key: &BitSlice<usize, Lsb0>) -> Result<usize> {
        GagError::check_len("PHT key", self.key_bits, key.len())?;
        Ok(bits::to_usize(key))
    }

    /// Returns the counter associated with some key.
    pub fn get(&self, key: &BitSlice<usize, Lsb0>) -> Result<&BitVector> {
        let idx = self.get_index(key)?;
        Ok(&self.data[idx])
    }

    /// Overwrite the counter associated with some key.
    pub fn put(&mut self, key: &BitSlice<usize, Lsb0>,
        value: &BitSlice<usize, Lsb0>) -> Result<()>
    {
        let idx = self.get_index(key)?;
        GagError::check_len("PHT value", self.value_bits, value.len())?;
        self.data[idx].copy_from_bitslice(value);
        Ok(())
    }

    /// Iterate over all (key, counter) pairs in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (BitVector, &BitVector)> + '_ {
        self.data.iter().enumerate()
            .map(|(idx, v)| (bits::from_usize(idx, self.key_bits), v))
    }

    /// Reset every counter to zero.
    pub fn reset(&mut self) {
        for entry in self.data.iter_mut() {
            entry.fill(false);
        }
    }

    pub fn monitor(&self) -> String {
        let mut res = String::from("PHT:\n");
        for (key, value) in self.iter() {
            res.push_str(&format!("  {} -> {}\n",
                bits::to_string(&key), bits::to_string(value)
            ));
        }
        res
    }
}
