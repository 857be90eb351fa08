#![allow(dead_code)]

// tests/common/mod.rs
use backend::config::db::DbProfile;
use backend::db::txn::SharedTxn;
use backend::entities::{geopolitical_risks, manufacturers, projects, suppliers};
use backend::error::AppError;
use backend::infra::state::build_state;
use backend::AppState;
use sea_orm::{ActiveModelTrait, ConnectionTrait, NotSet, Set};

// Logging is auto-installed for test binaries
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

/// Build an AppState backed by a fresh in-memory database, migrated up.
pub async fn test_state() -> AppState {
    build_state()
        .with_db(DbProfile::Test)
        .build()
        .await
        .expect("build test state with DB")
}

/// Open the shared transaction that tests inject into every request.
pub async fn open_shared(state: &AppState) -> SharedTxn {
    SharedTxn::open(state.db()).await.expect("open shared txn")
}

// Helper functions for test data creation

pub async fn create_test_manufacturer(
    txn: &impl ConnectionTrait,
    name: &str,
) -> Result<i64, AppError> {
    let manufacturer = manufacturers::ActiveModel {
        id: NotSet,
        name: Set(name.to_string()),
    };

    let inserted = manufacturer.insert(txn).await?;
    Ok(inserted.id)
}

pub async fn create_test_project(
    txn: &impl ConnectionTrait,
    name: &str,
    manufacturer_id: i64,
) -> Result<i64, AppError> {
    let project = projects::ActiveModel {
        id: NotSet,
        name: Set(name.to_string()),
        manufacturer_id: Set(manufacturer_id),
        scope1_emission: Set(0.0),
        scope2_emission: Set(0.0),
        scope3_emission: Set(0.0),
    };

    let inserted = project.insert(txn).await?;
    Ok(inserted.id)
}

pub async fn create_test_supplier(
    txn: &impl ConnectionTrait,
    name: &str,
    risk_rating: i32,
    project_id: Option<i64>,
) -> Result<i64, AppError> {
    let supplier = suppliers::ActiveModel {
        id: NotSet,
        name: Set(name.to_string()),
        address: Set(Some("1 Main St".to_string())),
        contact_info: Set(Some(
            backend_test_support::unique_helpers::unique_contact("buyer"),
        )),
        risk_rating: Set(risk_rating),
        occupation_rate: Set(0.0),
        facing_blocks: Set(false),
        checkpoint: Set(0),
        project_id: Set(project_id),
    };

    let inserted = supplier.insert(txn).await?;
    Ok(inserted.id)
}

pub async fn create_test_risk(
    txn: &impl ConnectionTrait,
    supplier_id: i64,
    description: &str,
) -> Result<i64, AppError> {
    let risk = geopolitical_risks::ActiveModel {
        id: NotSet,
        description: Set(description.to_string()),
        supplier_id: Set(supplier_id),
        timestamp: Set(time::OffsetDateTime::now_utc()),
    };

    let inserted = risk.insert(txn).await?;
    Ok(inserted.id)
}
