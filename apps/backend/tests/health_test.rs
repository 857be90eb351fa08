use actix_web::http::StatusCode;
use actix_web::{test, App};
use backend::routes;

// The health probe touches neither state nor database.
#[tokio::test]
async fn test_health_returns_ok() {
    let app = test::init_service(App::new().configure(routes::configure)).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = test::read_body(resp).await;
    assert_eq!(&body[..], b"ok");
}
