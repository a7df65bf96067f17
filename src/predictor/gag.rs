//! The GAg two-level adaptive predictor.
//!
//! A single global history register (BHR) selects an entry in a single
//! global pattern history table (PHT). The selected counter is moved through
//! a counter register (SC), and its most-significant bit is the prediction.
//! The address of the branch is never used.

use tracing::{debug, trace};

use crate::bits;
use crate::branch::Outcome;
use crate::error::*;
use crate::history::ShiftRegister;
use crate::predictor::*;

/// Largest supported history length. The PHT is materialized up front, so
/// this bounds the table at 2^20 entries.
pub const MAX_HISTORY_BITS: usize = 20;

/// Largest supported counter width.
pub const MAX_COUNTER_BITS: usize = 16;

/// Selects the bit shifted into global history after each update.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HistorySource {
    /// The resolved outcome of the branch.
    #[default]
    Outcome,

    /// The direction of the counter *after* it has been updated.
    ///
    /// This is not the usual definition of global history, and only exists
    /// for comparing against traces produced by that variant.
    CounterDirection,
}

/// Configuration for building a [GAgPredictor].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GAgConfig {
    /// Number of bits in the global history register
    pub history_bits: usize,

    /// Number of bits in each saturating counter
    pub counter_bits: usize,

    /// Counter behavior at either end of its range
    pub count_mode: CountMode,

    /// The bit inserted into global history on update
    pub history_source: HistorySource,
}
impl Default for GAgConfig {
    fn default() -> Self {
        Self {
            history_bits: 4,
            counter_bits: 2,
            count_mode: CountMode::Saturating,
            history_source: HistorySource::Outcome,
        }
    }
}
impl GAgConfig {
    /// Get the number of storage bits (PHT, BHR and SC).
    pub fn storage_bits(&self) -> usize {
        (1 << self.history_bits) * self.counter_bits
            + self.history_bits
            + self.counter_bits
    }

    fn validate(&self) -> Result<()> {
        let reason = if self.history_bits == 0 {
            "history length must be positive"
        } else if self.counter_bits == 0 {
            "counter width must be positive"
        } else if self.history_bits > MAX_HISTORY_BITS {
            "history length is too large"
        } else if self.counter_bits > MAX_COUNTER_BITS {
            "counter width is too large"
        } else {
            return Ok(());
        };
        Err(GagError::Configuration {
            history_bits: self.history_bits,
            counter_bits: self.counter_bits,
            reason,
        })
    }

    /// Use this configuration to create a new [GAgPredictor].
    pub fn build(self) -> Result<GAgPredictor> {
        self.validate()?;
        let res = GAgPredictor {
            bhr: ShiftRegister::new("BHR", self.history_bits),
            sc: ShiftRegister::new("SC", self.counter_bits),
            pht: PatternHistoryTable::new(self.history_bits, self.counter_bits)?,
            cfg: self,
        };
        debug!(
            history_bits = self.history_bits,
            counter_bits = self.counter_bits,
            entries = res.pht.len(),
            storage_bits = self.storage_bits(),
            "built GAg predictor"
        );
        Ok(res)
    }
}

/// A GAg predictor.
#[derive(Clone, Debug)]
pub struct GAgPredictor {
    cfg: GAgConfig,

    /// Global branch history register
    bhr: ShiftRegister,

    /// Saturating counter register
    sc: ShiftRegister,

    /// Pattern history table
    pht: PatternHistoryTable,
}
impl GAgPredictor {
    /// Create a predictor with default behavior and the given widths.
    pub fn new(history_bits: usize, counter_bits: usize) -> Result<Self> {
        GAgConfig { history_bits, counter_bits, ..Default::default() }.build()
    }

    pub fn config(&self) -> &GAgConfig { &self.cfg }
    pub fn history(&self) -> &ShiftRegister { &self.bhr }
    pub fn counter(&self) -> &ShiftRegister { &self.sc }
    pub fn pht(&self) -> &PatternHistoryTable { &self.pht }

    /// Load the counter selected by the current history into SC.
    fn select_counter(&mut self) -> Result<()> {
        let ctr = self.pht.get(self.bhr.read())?;
        self.sc.load(ctr)
    }
}

impl BranchPredictor for GAgPredictor {
    fn name(&self) -> &'static str { "GAgPredictor" }

    fn reset(&mut self) {
        self.bhr.clear();
        self.sc.clear();
        self.pht.reset();
        debug!("reset GAg predictor");
    }

    fn predict(&mut self, _pc: usize) -> Result<Outcome> {
        self.select_counter()?;
        Ok(direction(self.sc.read()))
    }

    fn update(&mut self, pc: usize, outcome: Outcome) -> Result<()> {
        // NOTE: The key must be the same one used by the matching call to
        // predict(); nothing may touch the BHR in between.
        let key = self.bhr.read().clone();
        self.select_counter()?;

        let next = count(self.sc.read(), outcome.is_taken(), self.cfg.count_mode);
        self.sc.load(&next)?;
        self.pht.put(&key, &next)?;

        let bit = match self.cfg.history_source {
            HistorySource::Outcome => outcome.is_taken(),
            HistorySource::CounterDirection => bits::leading_bit(&next),
        };
        self.bhr.insert(bit);

        trace!(
            pc,
            key = %bits::to_string(&key),
            counter = %bits::to_string(&next),
            ?outcome,
            "update"
        );
        Ok(())
    }

    fn monitor(&self) -> String {
        format!("GAg predictor snapshot:\n{}{}{}",
            self.bhr.monitor(), self.sc.monitor(), self.pht.monitor()
        )
    }
}
