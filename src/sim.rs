//! Driving a predictor with a sequence of branch records.

use tracing::info;

use crate::branch::*;
use crate::error::Result;
use crate::predictor::BranchPredictor;
use crate::stats::BranchStats;

/// Run every record through 'p', strictly alternating between predict and
/// update, and collect the results.
pub fn evaluate(p: &mut impl BranchPredictor, records: &[BranchRecord])
    -> Result<BranchStats>
{
    let mut stat = BranchStats::new();
    for record in records {
        let prediction = p.predict(record.pc)?;
        stat.update(record, prediction);
        p.update(record.pc, record.outcome)?;
    }
    info!(
        predictor = p.name(),
        branches = stat.global_brns(),
        hits = stat.global_hits(),
        "evaluation complete"
    );
    Ok(stat)
}
