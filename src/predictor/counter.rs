//! Combinational logic for N-bit saturating counters.
//!
//! Counters are stored as plain [BitVector]s so that they can live in a
//! [PatternHistoryTable](crate::predictor::PatternHistoryTable) and pass
//! through a [ShiftRegister](crate::history::ShiftRegister). The value is
//! read as an unsigned integer, and the most-significant bit gives the
//! predicted direction.

use bitvec::prelude::*;
use crate::bits::{self, BitVector};
use crate::branch::Outcome;

/// How a counter behaves when it is pushed past either end of its range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CountMode {
    /// Clamp at zero and at 2^n - 1.
    #[default]
    Saturating,

    /// Wrap around modulo 2^n.
    Wrapping,
}

/// The largest value representable by a 'width'-bit counter.
pub fn counter_max(width: usize) -> usize {
    if width >= usize::BITS as usize {
        usize::MAX
    } else {
        (1 << width) - 1
    }
}

/// Compute the next value of a counter given some observed outcome.
///
/// The result always has the same width as 'current'.
pub fn count(current: &BitSlice<usize, Lsb0>, taken: bool, mode: CountMode)
    -> BitVector
{
    let width = current.len();
    let max = counter_max(width);
    let val = bits::to_usize(current);
    let next = match (mode, taken) {
        (CountMode::Saturating, true)  => if val < max { val + 1 } else { max },
        (CountMode::Saturating, false) => val.saturating_sub(1),
        (CountMode::Wrapping, true)    => val.wrapping_add(1) & max,
        (CountMode::Wrapping, false)   => val.wrapping_sub(1) & max,
    };
    bits::from_usize(next, width)
}

/// Return the direction predicted by a counter.
pub fn direction(counter: &BitSlice<usize, Lsb0>) -> Outcome {
    Outcome::from(bits::leading_bit(counter))
}

#[cfg(test)]
mod test {
    use super::*;
    use rstest::rstest;

    fn run(start: usize, width: usize, taken: bool, n: usize) -> usize {
        let mut ctr = bits::from_usize(start, width);
        for _ in 0..n {
            ctr = count(&ctr, taken, CountMode::Saturating);
            assert_eq!(ctr.len(), width);
        }
        bits::to_usize(&ctr)
    }

    #[rstest]
    #[case(1, 0, 1)]
    #[case(1, 1, 5)]
    #[case(2, 0, 3)]
    #[case(2, 1, 1)]
    #[case(3, 2, 7)]
    #[case(4, 0, 20)]
    fn saturates_upward(#[case] width: usize, #[case] start: usize,
        #[case] n: usize)
    {
        let expected = (start + n).min(counter_max(width));
        assert_eq!(run(start, width, true, n), expected);
    }

    #[rstest]
    #[case(1, 1, 1)]
    #[case(2, 3, 2)]
    #[case(2, 3, 10)]
    #[case(3, 5, 4)]
    #[case(4, 15, 20)]
    fn saturates_downward(#[case] width: usize, #[case] start: usize,
        #[case] n: usize)
    {
        let expected = start.saturating_sub(n);
        assert_eq!(run(start, width, false, n), expected);
    }

    #[test]
    fn two_bit_sequence() {
        let seq: Vec<String> = (0..4)
            .scan(bits::zeros(2), |ctr, _| {
                let s = bits::to_string(ctr);
                *ctr = count(ctr, true, CountMode::Saturating);
                Some(s)
            })
            .collect();
        assert_eq!(seq, ["00", "01", "10", "11"]);
    }

    #[test]
    fn wrapping_mode() {
        let max = bits::from_usize(3, 2);
        assert_eq!(bits::to_usize(&count(&max, true, CountMode::Wrapping)), 0);
        let zero = bits::zeros(2);
        assert_eq!(bits::to_usize(&count(&zero, false, CountMode::Wrapping)), 3);
    }

    #[test]
    fn leading_bit_gives_direction() {
        assert_eq!(direction(&bits::parse("01").unwrap()), Outcome::N);
        assert_eq!(direction(&bits::parse("10").unwrap()), Outcome::T);
        assert_eq!(direction(&bits::parse("1").unwrap()), Outcome::T);
        assert_eq!(counter_max(3), 7);
    }
}
