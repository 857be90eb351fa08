use sea_orm::DatabaseTransaction;

use crate::entities::manufacturers;
use crate::error::AppError;
use crate::repos;

/// Form-level rejection, rendered inline on the add form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManufacturerFormError {
    MissingName,
    DuplicateName,
}

impl ManufacturerFormError {
    pub const fn message(&self) -> &'static str {
        match self {
            Self::MissingName => "Please fill out all required fields.",
            Self::DuplicateName => "A manufacturer with this name already exists.",
        }
    }
}

#[derive(Debug)]
pub enum CreateOutcome {
    Created(manufacturers::Model),
    Rejected(ManufacturerFormError),
}

/// Insert a manufacturer unless the name is empty or already taken.
///
/// The name column is unique; checking first turns the constraint violation
/// into an inline form message instead of a 500.
pub async fn create(txn: &DatabaseTransaction, name: &str) -> Result<CreateOutcome, AppError> {
    let name = name.trim();
    if name.is_empty() {
        return Ok(CreateOutcome::Rejected(ManufacturerFormError::MissingName));
    }

    if repos::manufacturers::find_by_name(txn, name).await?.is_some() {
        return Ok(CreateOutcome::Rejected(ManufacturerFormError::DuplicateName));
    }

    let created = repos::manufacturers::create(txn, name.to_string()).await?;
    Ok(CreateOutcome::Created(created))
}
