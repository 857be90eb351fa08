use sea_orm::{ActiveModelTrait, ConnectionTrait, DatabaseTransaction, EntityTrait, NotSet, Set};

use crate::entities::projects;

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectCreate {
    pub name: String,
    pub manufacturer_id: i64,
    pub scope1_emission: f64,
    pub scope2_emission: f64,
    pub scope3_emission: f64,
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<Option<projects::Model>, sea_orm::DbErr> {
    projects::Entity::find_by_id(id).one(conn).await
}

pub async fn create(
    txn: &DatabaseTransaction,
    dto: ProjectCreate,
) -> Result<projects::Model, sea_orm::DbErr> {
    let project = projects::ActiveModel {
        id: NotSet,
        name: Set(dto.name),
        manufacturer_id: Set(dto.manufacturer_id),
        scope1_emission: Set(dto.scope1_emission),
        scope2_emission: Set(dto.scope2_emission),
        scope3_emission: Set(dto.scope3_emission),
    };

    project.insert(txn).await
}

/// Overwrite the project name and owning manufacturer.
pub async fn update_header(
    txn: &DatabaseTransaction,
    project: projects::Model,
    name: String,
    manufacturer_id: i64,
) -> Result<projects::Model, sea_orm::DbErr> {
    let mut active: projects::ActiveModel = project.into();
    active.name = Set(name);
    active.manufacturer_id = Set(manufacturer_id);
    active.update(txn).await
}

/// Overwrite the three emission scope values.
pub async fn update_emissions(
    txn: &DatabaseTransaction,
    project: projects::Model,
    scope1: f64,
    scope2: f64,
    scope3: f64,
) -> Result<projects::Model, sea_orm::DbErr> {
    let mut active: projects::ActiveModel = project.into();
    active.scope1_emission = Set(scope1);
    active.scope2_emission = Set(scope2);
    active.scope3_emission = Set(scope3);
    active.update(txn).await
}
