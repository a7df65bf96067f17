//! Implementations of branch predictors.

pub mod counter;
pub mod pht;
mod gag;

pub use counter::*;
pub use pht::*;
pub use gag::*;

use crate::branch::Outcome;
use crate::error::Result;

/// Interface to a predictor with some internal state which is only subject
/// to change by the correct branch outcome.
///
/// A caller must strictly alternate between [BranchPredictor::predict] and
/// [BranchPredictor::update] for each branch.
pub trait BranchPredictor {
    fn name(&self) -> &'static str;

    /// Reset the internal state of the predictor.
    fn reset(&mut self);

    /// Return the predicted outcome for the branch at 'pc'.
    fn predict(&mut self, pc: usize) -> Result<Outcome>;

    /// Update the internal state of the predictor with the correct outcome.
    fn update(&mut self, pc: usize, outcome: Outcome) -> Result<()>;

    /// Return a human-readable dump of the internal state.
    fn monitor(&self) -> String;
}
