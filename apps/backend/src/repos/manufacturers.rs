use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseTransaction, EntityTrait, NotSet,
    QueryFilter, Set,
};

use crate::entities::manufacturers;

pub async fn list_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<manufacturers::Model>, sea_orm::DbErr> {
    manufacturers::Entity::find().all(conn).await
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<Option<manufacturers::Model>, sea_orm::DbErr> {
    manufacturers::Entity::find_by_id(id).one(conn).await
}

pub async fn find_by_name<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: &str,
) -> Result<Option<manufacturers::Model>, sea_orm::DbErr> {
    manufacturers::Entity::find()
        .filter(manufacturers::Column::Name.eq(name))
        .one(conn)
        .await
}

pub async fn create(
    txn: &DatabaseTransaction,
    name: String,
) -> Result<manufacturers::Model, sea_orm::DbErr> {
    let manufacturer = manufacturers::ActiveModel {
        id: NotSet,
        name: Set(name),
    };

    manufacturer.insert(txn).await
}
