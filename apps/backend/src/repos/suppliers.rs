use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseTransaction, EntityTrait, ModelTrait,
    NotSet, QueryFilter, Set,
};

use crate::entities::{geopolitical_risks, suppliers};

#[derive(Debug, Clone, PartialEq)]
pub struct SupplierCreate {
    pub name: String,
    pub address: String,
    pub contact_info: String,
    pub risk_rating: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SupplierUpdate {
    pub name: String,
    pub address: String,
    pub contact_info: String,
    pub risk_rating: i32,
}

pub async fn list_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<suppliers::Model>, sea_orm::DbErr> {
    suppliers::Entity::find().all(conn).await
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<Option<suppliers::Model>, sea_orm::DbErr> {
    suppliers::Entity::find_by_id(id).one(conn).await
}

pub async fn list_by_project<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    project_id: i64,
) -> Result<Vec<suppliers::Model>, sea_orm::DbErr> {
    suppliers::Entity::find()
        .filter(suppliers::Column::ProjectId.eq(project_id))
        .all(conn)
        .await
}

/// All suppliers paired with their geopolitical risk notes.
pub async fn list_with_risks<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<(suppliers::Model, Vec<geopolitical_risks::Model>)>, sea_orm::DbErr> {
    suppliers::Entity::find()
        .find_with_related(geopolitical_risks::Entity)
        .all(conn)
        .await
}

pub async fn create(
    txn: &DatabaseTransaction,
    dto: SupplierCreate,
) -> Result<suppliers::Model, sea_orm::DbErr> {
    let supplier = suppliers::ActiveModel {
        id: NotSet,
        name: Set(dto.name),
        address: Set(Some(dto.address)),
        contact_info: Set(Some(dto.contact_info)),
        risk_rating: Set(dto.risk_rating),
        occupation_rate: Set(0.0),
        facing_blocks: Set(false),
        checkpoint: Set(0),
        project_id: Set(None),
    };

    supplier.insert(txn).await
}

/// Overwrite the editable supplier fields.
pub async fn update_details(
    txn: &DatabaseTransaction,
    supplier: suppliers::Model,
    dto: SupplierUpdate,
) -> Result<suppliers::Model, sea_orm::DbErr> {
    let mut active: suppliers::ActiveModel = supplier.into();
    active.name = Set(dto.name);
    active.address = Set(Some(dto.address));
    active.contact_info = Set(Some(dto.contact_info));
    active.risk_rating = Set(dto.risk_rating);
    active.update(txn).await
}

/// Record one occupation checkpoint: latest rate and blocks flag, counter +1.
/// The caller is responsible for the checkpoint cap.
pub async fn record_checkpoint(
    txn: &DatabaseTransaction,
    supplier: suppliers::Model,
    occupation_rate: f64,
    facing_blocks: bool,
) -> Result<suppliers::Model, sea_orm::DbErr> {
    let checkpoint = supplier.checkpoint + 1;
    let mut active: suppliers::ActiveModel = supplier.into();
    active.occupation_rate = Set(occupation_rate);
    active.facing_blocks = Set(facing_blocks);
    active.checkpoint = Set(checkpoint);
    active.update(txn).await
}

/// Delete the supplier row only; risk notes referencing it are left behind.
pub async fn delete(
    txn: &DatabaseTransaction,
    supplier: suppliers::Model,
) -> Result<(), sea_orm::DbErr> {
    supplier.delete(txn).await?;
    Ok(())
}
