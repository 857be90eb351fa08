use sea_orm::DatabaseTransaction;

use crate::entities::suppliers;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::repos;
use crate::repos::suppliers::{SupplierCreate, SupplierUpdate};

/// Form-level rejection, rendered inline on the add form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupplierFormError {
    MissingFields,
    RiskRatingOutOfRange,
}

impl SupplierFormError {
    pub const fn message(&self) -> &'static str {
        match self {
            Self::MissingFields => "Please fill out all required fields.",
            Self::RiskRatingOutOfRange => "Risk rating must be between 1 and 10.",
        }
    }
}

/// Validate the add-supplier form.
///
/// `risk_rating` arrives as `None` when the field was empty or unparseable,
/// which counts as a missing field. The range is only checked at creation;
/// edits overwrite the rating without re-validating.
pub fn parse_new(
    name: &str,
    address: &str,
    contact_info: &str,
    risk_rating: Option<i32>,
) -> Result<SupplierCreate, SupplierFormError> {
    let name = name.trim();
    let address = address.trim();
    let contact_info = contact_info.trim();

    let Some(risk_rating) = risk_rating else {
        return Err(SupplierFormError::MissingFields);
    };

    if name.is_empty() || address.is_empty() || contact_info.is_empty() {
        return Err(SupplierFormError::MissingFields);
    }

    if !(1..=10).contains(&risk_rating) {
        return Err(SupplierFormError::RiskRatingOutOfRange);
    }

    Ok(SupplierCreate {
        name: name.to_string(),
        address: address.to_string(),
        contact_info: contact_info.to_string(),
        risk_rating,
    })
}

pub async fn fetch(txn: &DatabaseTransaction, id: i64) -> Result<suppliers::Model, AppError> {
    repos::suppliers::find_by_id(txn, id)
        .await?
        .ok_or_else(|| {
            AppError::not_found(
                ErrorCode::SupplierNotFound,
                format!("Supplier with ID {id} not found"),
            )
        })
}

pub async fn create(
    txn: &DatabaseTransaction,
    dto: SupplierCreate,
) -> Result<suppliers::Model, AppError> {
    Ok(repos::suppliers::create(txn, dto).await?)
}

pub async fn update(
    txn: &DatabaseTransaction,
    id: i64,
    dto: SupplierUpdate,
) -> Result<suppliers::Model, AppError> {
    let supplier = fetch(txn, id).await?;
    Ok(repos::suppliers::update_details(txn, supplier, dto).await?)
}

pub async fn delete(txn: &DatabaseTransaction, id: i64) -> Result<(), AppError> {
    let supplier = fetch(txn, id).await?;
    Ok(repos::suppliers::delete(txn, supplier).await?)
}

#[cfg(test)]
mod tests {
    use super::{parse_new, SupplierFormError};

    #[test]
    fn accepts_a_complete_form() {
        let dto = parse_new("Acme Parts", "1 Main St", "a@acme.com", Some(5)).unwrap();
        assert_eq!(dto.name, "Acme Parts");
        assert_eq!(dto.risk_rating, 5);
    }

    #[test]
    fn rejects_empty_required_fields() {
        assert_eq!(
            parse_new("", "1 Main St", "a@acme.com", Some(5)),
            Err(SupplierFormError::MissingFields)
        );
        assert_eq!(
            parse_new("Acme Parts", "  ", "a@acme.com", Some(5)),
            Err(SupplierFormError::MissingFields)
        );
        assert_eq!(
            parse_new("Acme Parts", "1 Main St", "", Some(5)),
            Err(SupplierFormError::MissingFields)
        );
    }

    #[test]
    fn missing_rating_counts_as_missing_field() {
        assert_eq!(
            parse_new("Acme Parts", "1 Main St", "a@acme.com", None),
            Err(SupplierFormError::MissingFields)
        );
    }

    #[test]
    fn rejects_out_of_range_rating() {
        assert_eq!(
            parse_new("Acme Parts", "1 Main St", "a@acme.com", Some(0)),
            Err(SupplierFormError::RiskRatingOutOfRange)
        );
        assert_eq!(
            parse_new("Acme Parts", "1 Main St", "a@acme.com", Some(11)),
            Err(SupplierFormError::RiskRatingOutOfRange)
        );
    }

    #[test]
    fn accepts_rating_boundaries() {
        assert!(parse_new("a", "b", "c", Some(1)).is_ok());
        assert!(parse_new("a", "b", "c", Some(10)).is_ok());
    }
}
