//! A functional model of the GAg two-level adaptive branch predictor.

pub mod bits;
pub mod branch;
pub mod error;
pub mod history;
pub mod predictor;
pub mod sim;
pub mod stats;
pub mod trace;

pub use bits::BitVector;
pub use branch::*;
pub use error::*;
pub use history::*;
pub use predictor::*;
pub use trace::*;
