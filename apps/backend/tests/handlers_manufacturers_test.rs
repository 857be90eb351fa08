mod common;

use actix_web::http::{header, StatusCode};
use actix_web::{test, web, App, HttpMessage};
use backend::entities::manufacturers;
use backend::error::AppError;
use backend::routes;
use sea_orm::EntityTrait;

#[tokio::test]
async fn test_add_manufacturer_success() -> Result<(), AppError> {
    let state = common::test_state().await;
    let shared = common::open_shared(&state).await;

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state.clone()))
            .configure(routes::configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/add_manufacturer")
        .set_form([("name", "Globex")])
        .to_request();
    req.extensions_mut().insert(shared.clone());

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/");

    let rows = manufacturers::Entity::find()
        .all(shared.transaction())
        .await?;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "Globex");

    Ok(())
}

#[tokio::test]
async fn test_add_manufacturer_duplicate_name_is_rejected_inline() -> Result<(), AppError> {
    let state = common::test_state().await;
    let shared = common::open_shared(&state).await;

    common::create_test_manufacturer(shared.transaction(), "Globex").await?;

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state.clone()))
            .configure(routes::configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/add_manufacturer")
        .set_form([("name", "Globex")])
        .to_request();
    req.extensions_mut().insert(shared.clone());

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = test::read_body(resp).await;
    let body = String::from_utf8_lossy(&body);
    assert!(body.contains("A manufacturer with this name already exists."));

    let rows = manufacturers::Entity::find()
        .all(shared.transaction())
        .await?;
    assert_eq!(rows.len(), 1);

    Ok(())
}

#[tokio::test]
async fn test_add_manufacturer_empty_name_is_rejected() -> Result<(), AppError> {
    let state = common::test_state().await;
    let shared = common::open_shared(&state).await;

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state.clone()))
            .configure(routes::configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/add_manufacturer")
        .set_form([("name", "  ")])
        .to_request();
    req.extensions_mut().insert(shared.clone());

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = test::read_body(resp).await;
    let body = String::from_utf8_lossy(&body);
    assert!(body.contains("Please fill out all required fields."));

    let rows = manufacturers::Entity::find()
        .all(shared.transaction())
        .await?;
    assert!(rows.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_dashboard_lists_manufacturers_and_suppliers() -> Result<(), AppError> {
    let state = common::test_state().await;
    let shared = common::open_shared(&state).await;

    common::create_test_manufacturer(shared.transaction(), "Globex").await?;
    common::create_test_supplier(shared.transaction(), "Acme Parts", 5, None).await?;

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state.clone()))
            .configure(routes::configure),
    )
    .await;

    let req = test::TestRequest::get().uri("/").to_request();
    req.extensions_mut().insert(shared.clone());

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = test::read_body(resp).await;
    let body = String::from_utf8_lossy(&body);
    assert!(body.contains("Globex"));
    assert!(body.contains("Acme Parts"));

    Ok(())
}
