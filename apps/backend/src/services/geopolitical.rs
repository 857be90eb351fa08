use sea_orm::DatabaseTransaction;

use crate::entities::{geopolitical_risks, suppliers};
use crate::error::AppError;
use crate::repos;

/// Attach a risk note to a supplier, stamped with the current UTC time.
/// Callers reject empty descriptions before reaching this point.
pub async fn record(
    txn: &DatabaseTransaction,
    supplier_id: i64,
    description: String,
) -> Result<geopolitical_risks::Model, AppError> {
    Ok(repos::geopolitical_risks::create(txn, supplier_id, description).await?)
}

/// All suppliers with their risk notes, for the overview page.
pub async fn suppliers_with_risks(
    txn: &DatabaseTransaction,
) -> Result<Vec<(suppliers::Model, Vec<geopolitical_risks::Model>)>, AppError> {
    Ok(repos::suppliers::list_with_risks(txn).await?)
}
