use sea_orm::DatabaseTransaction;

use crate::entities::{manufacturers, projects, suppliers};
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::repos;
use crate::repos::projects::ProjectCreate;

/// Everything the project detail page shows: the project, its owning
/// manufacturer, and the suppliers assigned to it.
#[derive(Debug)]
pub struct ProjectDetail {
    pub project: projects::Model,
    pub manufacturer: manufacturers::Model,
    pub suppliers: Vec<suppliers::Model>,
}

pub async fn fetch(txn: &DatabaseTransaction, id: i64) -> Result<projects::Model, AppError> {
    repos::projects::find_by_id(txn, id).await?.ok_or_else(|| {
        AppError::not_found(
            ErrorCode::ProjectNotFound,
            format!("Project with ID {id} not found"),
        )
    })
}

pub async fn create(
    txn: &DatabaseTransaction,
    dto: ProjectCreate,
) -> Result<projects::Model, AppError> {
    Ok(repos::projects::create(txn, dto).await?)
}

pub async fn fetch_detail(txn: &DatabaseTransaction, id: i64) -> Result<ProjectDetail, AppError> {
    let project = fetch(txn, id).await?;

    let manufacturer = repos::manufacturers::find_by_id(txn, project.manufacturer_id)
        .await?
        .ok_or_else(|| {
            AppError::not_found(
                ErrorCode::ManufacturerNotFound,
                format!("Manufacturer with ID {} not found", project.manufacturer_id),
            )
        })?;

    let suppliers = repos::suppliers::list_by_project(txn, id).await?;

    Ok(ProjectDetail {
        project,
        manufacturer,
        suppliers,
    })
}

/// Overwrite the project name and owning manufacturer.
pub async fn rename(
    txn: &DatabaseTransaction,
    id: i64,
    name: String,
    manufacturer_id: i64,
) -> Result<projects::Model, AppError> {
    let project = fetch(txn, id).await?;
    Ok(repos::projects::update_header(txn, project, name, manufacturer_id).await?)
}

/// Overwrite the three emission scope values.
pub async fn record_emissions(
    txn: &DatabaseTransaction,
    id: i64,
    scope1: f64,
    scope2: f64,
    scope3: f64,
) -> Result<projects::Model, AppError> {
    let project = fetch(txn, id).await?;
    Ok(repos::projects::update_emissions(txn, project, scope1, scope2, scope3).await?)
}
