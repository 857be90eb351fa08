use sea_orm::{ActiveModelTrait, DatabaseTransaction, NotSet, Set};
use time::OffsetDateTime;

use crate::entities::geopolitical_risks;

pub async fn create(
    txn: &DatabaseTransaction,
    supplier_id: i64,
    description: String,
) -> Result<geopolitical_risks::Model, sea_orm::DbErr> {
    let risk = geopolitical_risks::ActiveModel {
        id: NotSet,
        description: Set(description),
        supplier_id: Set(supplier_id),
        timestamp: Set(OffsetDateTime::now_utc()),
    };

    risk.insert(txn).await
}
