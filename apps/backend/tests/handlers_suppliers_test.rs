mod common;

use actix_web::http::{header, StatusCode};
use actix_web::{test, web, App, HttpMessage};
use backend::entities::{geopolitical_risks, suppliers};
use backend::error::AppError;
use backend::routes;
use sea_orm::EntityTrait;

#[tokio::test]
async fn test_add_supplier_success() -> Result<(), AppError> {
    let state = common::test_state().await;
    let shared = common::open_shared(&state).await;

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state.clone()))
            .configure(routes::configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/add_supplier")
        .set_form([
            ("name", "Acme Parts"),
            ("address", "1 Main St"),
            ("contact_info", "a@acme.com"),
            ("risk_rating", "5"),
        ])
        .to_request();
    req.extensions_mut().insert(shared.clone());

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/");

    let rows = suppliers::Entity::find().all(shared.transaction()).await?;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "Acme Parts");
    assert_eq!(rows[0].risk_rating, 5);
    assert_eq!(rows[0].checkpoint, 0);
    assert_eq!(rows[0].occupation_rate, 0.0);
    assert!(!rows[0].facing_blocks);

    Ok(())
}

#[tokio::test]
async fn test_add_supplier_rejects_out_of_range_rating() -> Result<(), AppError> {
    let state = common::test_state().await;
    let shared = common::open_shared(&state).await;

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state.clone()))
            .configure(routes::configure),
    )
    .await;

    for rating in ["0", "11"] {
        let req = test::TestRequest::post()
            .uri("/add_supplier")
            .set_form([
                ("name", "Acme Parts"),
                ("address", "1 Main St"),
                ("contact_info", "a@acme.com"),
                ("risk_rating", rating),
            ])
            .to_request();
        req.extensions_mut().insert(shared.clone());

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body = test::read_body(resp).await;
        let body = String::from_utf8_lossy(&body);
        assert!(body.contains("Risk rating must be between 1 and 10."));
    }

    let rows = suppliers::Entity::find().all(shared.transaction()).await?;
    assert!(rows.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_add_supplier_rejects_missing_fields() -> Result<(), AppError> {
    let state = common::test_state().await;
    let shared = common::open_shared(&state).await;

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state.clone()))
            .configure(routes::configure),
    )
    .await;

    // empty address, then an unparseable rating: both count as missing fields
    let bad_forms = [
        [
            ("name", "Acme Parts"),
            ("address", ""),
            ("contact_info", "a@acme.com"),
            ("risk_rating", "5"),
        ],
        [
            ("name", "Acme Parts"),
            ("address", "1 Main St"),
            ("contact_info", "a@acme.com"),
            ("risk_rating", "high"),
        ],
    ];

    for form in bad_forms {
        let req = test::TestRequest::post()
            .uri("/add_supplier")
            .set_form(form)
            .to_request();
        req.extensions_mut().insert(shared.clone());

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body = test::read_body(resp).await;
        let body = String::from_utf8_lossy(&body);
        assert!(body.contains("Please fill out all required fields."));
    }

    let rows = suppliers::Entity::find().all(shared.transaction()).await?;
    assert!(rows.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_edit_supplier_overwrites_without_rating_revalidation() -> Result<(), AppError> {
    let state = common::test_state().await;
    let shared = common::open_shared(&state).await;

    let id = common::create_test_supplier(shared.transaction(), "Acme Parts", 5, None).await?;

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state.clone()))
            .configure(routes::configure),
    )
    .await;

    // Rating 12 is outside the creation range; edits overwrite regardless.
    let req = test::TestRequest::post()
        .uri(&format!("/edit_supplier/{id}"))
        .set_form([
            ("name", "Acme Parts GmbH"),
            ("address", "2 Side St"),
            ("contact_info", "ops@acme.com"),
            ("risk_rating", "12"),
        ])
        .to_request();
    req.extensions_mut().insert(shared.clone());

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/");

    let row = suppliers::Entity::find_by_id(id)
        .one(shared.transaction())
        .await?
        .expect("supplier still exists");
    assert_eq!(row.name, "Acme Parts GmbH");
    assert_eq!(row.address.as_deref(), Some("2 Side St"));
    assert_eq!(row.contact_info.as_deref(), Some("ops@acme.com"));
    assert_eq!(row.risk_rating, 12);

    Ok(())
}

#[tokio::test]
async fn test_edit_supplier_missing_id_is_not_found() -> Result<(), AppError> {
    let state = common::test_state().await;
    let shared = common::open_shared(&state).await;

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state.clone()))
            .configure(routes::configure),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/edit_supplier/999")
        .to_request();
    req.extensions_mut().insert(shared.clone());
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::post()
        .uri("/edit_supplier/999")
        .set_form([
            ("name", "Ghost"),
            ("address", "nowhere"),
            ("contact_info", "x@y.z"),
            ("risk_rating", "5"),
        ])
        .to_request();
    req.extensions_mut().insert(shared.clone());
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn test_delete_supplier_leaves_risk_notes_behind() -> Result<(), AppError> {
    let state = common::test_state().await;
    let shared = common::open_shared(&state).await;

    let id = common::create_test_supplier(shared.transaction(), "Acme Parts", 5, None).await?;
    common::create_test_risk(shared.transaction(), id, "Port congestion").await?;

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state.clone()))
            .configure(routes::configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri(&format!("/delete_supplier/{id}"))
        .to_request();
    req.extensions_mut().insert(shared.clone());

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    let supplier = suppliers::Entity::find_by_id(id)
        .one(shared.transaction())
        .await?;
    assert!(supplier.is_none());

    // Only the supplier row goes; its risk notes dangle.
    let risks = geopolitical_risks::Entity::find()
        .all(shared.transaction())
        .await?;
    assert_eq!(risks.len(), 1);
    assert_eq!(risks[0].supplier_id, id);

    Ok(())
}
