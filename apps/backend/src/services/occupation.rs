use sea_orm::DatabaseTransaction;
use serde::Serialize;

use crate::entities::suppliers;
use crate::error::AppError;
use crate::repos;

/// Hard cap on occupation submissions per supplier.
pub const MAX_CHECKPOINTS: i32 = 3;

#[derive(Debug)]
pub enum CheckpointOutcome {
    /// Submission stored; the updated supplier row.
    Recorded(suppliers::Model),
    /// Supplier already at the checkpoint cap; nothing changed.
    LimitReached,
    /// Occupation rate did not parse as a number; nothing changed.
    Invalid,
}

/// Apply one occupation submission.
///
/// The cap check runs before the rate parse: a supplier at the cap reports
/// the limit even when the submitted rate is malformed.
pub async fn record(
    txn: &DatabaseTransaction,
    supplier: suppliers::Model,
    raw_rate: &str,
    facing_blocks: bool,
) -> Result<CheckpointOutcome, AppError> {
    if supplier.checkpoint >= MAX_CHECKPOINTS {
        return Ok(CheckpointOutcome::LimitReached);
    }

    let rate = match raw_rate.trim().parse::<f64>() {
        Ok(rate) => rate,
        Err(_) => return Ok(CheckpointOutcome::Invalid),
    };

    let updated = repos::suppliers::record_checkpoint(txn, supplier, rate, facing_blocks).await?;
    Ok(CheckpointOutcome::Recorded(updated))
}

/// Summary of the latest submission, shaped for the occupation view.
#[derive(Debug, Serialize)]
pub struct OccupationSummary {
    pub occupation_rate: Vec<f64>,
    pub facing_blocks: Vec<u8>,
    pub checkpoint: i32,
}

pub fn summarize(supplier: &suppliers::Model) -> OccupationSummary {
    OccupationSummary {
        occupation_rate: vec![supplier.occupation_rate],
        facing_blocks: vec![u8::from(supplier.facing_blocks)],
        checkpoint: supplier.checkpoint,
    }
}
