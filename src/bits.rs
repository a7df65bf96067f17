//! Helpers for working with fixed-width bit vectors.
//!
//! Every [BitVector] in this crate uses [Lsb0] ordering: index 0 is the
//! least-significant bit. When rendered as text, the bits are *reversed* so
//! that the most-significant bit (index n-1) is leftmost.

use bitvec::prelude::*;

/// A fixed-length sequence of bits used for history patterns and counters.
pub type BitVector = BitVec<usize, Lsb0>;

/// Create a vector of 'len' zero bits.
pub fn zeros(len: usize) -> BitVector {
    bitvec![usize, Lsb0; 0; len]
}

/// Encode the low 'len' bits of 'value'.
///
/// Bits above `usize::BITS` are always zero.
pub fn from_usize(value: usize, len: usize) -> BitVector {
    let mut res = zeros(len);
    let n = len.min(usize::BITS as usize);
    if n != 0 {
        res[..n].store_le(value);
    }
    res
}

/// Interpret some bits as an unsigned integer.
///
/// Only the low `usize::BITS` bits are read.
pub fn to_usize(bits: &BitSlice<usize, Lsb0>) -> usize {
    let n = bits.len().min(usize::BITS as usize);
    if n == 0 { 0 } else { bits[..n].load_le::<usize>() }
}

/// Returns the most-significant bit, or 'false' for an empty slice.
pub fn leading_bit(bits: &BitSlice<usize, Lsb0>) -> bool {
    bits.last().map(|b| *b).unwrap_or(false)
}

/// Render bits MSB-first, ie. "0001" when only bit 0 is set.
pub fn to_string(bits: &BitSlice<usize, Lsb0>) -> String {
    bits.iter().by_vals()
        .map(|b| if b { '1' } else { '0' })
        .rev()
        .collect()
}

/// Parse an MSB-first string of '0' and '1' characters.
pub fn parse(s: &str) -> Option<BitVector> {
    let mut res = BitVector::with_capacity(s.len());
    for c in s.chars().rev() {
        match c {
            '0' => res.push(false),
            '1' => res.push(true),
            _ => return None,
        }
    }
    Some(res)
}
