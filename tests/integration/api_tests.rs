//! API integration tests

use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use circulation_desk::{
    api,
    import::parse_catalog,
    repository::{CodeGenerator, Repository},
    services::Services,
    AppConfig, AppState,
};

const CATALOG: &str = "title,author\nDune,Herbert\nFoundation,Asimov\nHounds Of Love,Bush\n\"Smith, Jane\",Author One\n";

fn create_test_app_from(catalog: &str, source: &Path) -> Router {
    let repository = Repository::new(parse_catalog(catalog), CodeGenerator::default());
    let state = AppState {
        config: Arc::new(AppConfig::default()),
        services: Arc::new(Services::new(repository, source)),
    };
    api::create_router(state)
}

fn create_test_app() -> Router {
    create_test_app_from(CATALOG, Path::new("does-not-exist.csv"))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };
    (status, json)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

async fn post(app: &Router, uri: &str, payload: Value) -> (StatusCode, Value) {
    send(
        app,
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&payload).unwrap()))
            .unwrap(),
    )
    .await
}

fn titles(items: &Value) -> Vec<&str> {
    items
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["title"].as_str().unwrap())
        .collect()
}

#[tokio::test]
async fn test_health_check() {
    let app = create_test_app();
    let (status, body) = get(&app, "/api/v1/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_readiness_reports_catalog_size() {
    let app = create_test_app();
    let (status, body) = get(&app, "/api/v1/ready").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ready");
    assert_eq!(body["titles"], 4);
}

#[tokio::test]
async fn test_list_items_in_catalog_order() {
    let app = create_test_app();
    let (status, body) = get(&app, "/api/v1/items").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        titles(&body),
        vec!["Dune", "Foundation", "Hounds Of Love", "Smith, Jane"]
    );
    assert!(body.as_array().unwrap().iter().all(|item| item["available"] == true));

    let (_, body) = get(&app, "/api/v1/items?limit=2").await;
    assert_eq!(titles(&body), vec!["Dune", "Foundation"]);
}

#[tokio::test]
async fn test_search() {
    let app = create_test_app();

    let (status, body) = get(&app, "/api/v1/items/search?title=dune").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(titles(&body["items"]), vec!["Dune"]);
    assert!(body.get("message").is_none());

    let (_, body) = get(&app, "/api/v1/items/search?title=").await;
    assert!(body["items"].as_array().unwrap().is_empty());
    assert!(body.get("message").is_none());

    let (_, body) = get(&app, "/api/v1/items/search").await;
    assert!(body["items"].as_array().unwrap().is_empty());

    let (_, body) = get(&app, "/api/v1/items/search?title=xyz").await;
    assert!(body["items"].as_array().unwrap().is_empty());
    assert_eq!(body["message"], "No books found.");
}

#[tokio::test]
async fn test_titles_for_autocomplete() {
    let app = create_test_app();
    let (status, body) = get(&app, "/api/v1/items/titles?limit=3").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!(["Dune", "Foundation", "Hounds Of Love"]));
}

#[tokio::test]
async fn test_borrow_and_return() {
    let app = create_test_app();

    let (status, body) = post(&app, "/api/v1/loans", json!({ "title": "Dune" })).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["code"], "001");
    assert_eq!(body["title"], "Dune");
    assert_eq!(
        body["message"],
        "Please get your book at reception. Request number: 001"
    );

    let (_, body) = get(&app, "/api/v1/items/search?title=dune").await;
    assert_eq!(body["items"][0]["available"], false);

    let (_, body) = get(&app, "/api/v1/loans").await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["code"], "001");

    let (status, body) = post(&app, "/api/v1/loans/return", json!({ "code": "001" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Dune");
    assert_eq!(
        body["message"],
        "Return successful. \"Dune\" has been returned. Code 001 confirmed."
    );

    let (_, body) = get(&app, "/api/v1/items/search?title=dune").await;
    assert_eq!(body["items"][0]["available"], true);
}

#[tokio::test]
async fn test_second_borrow_is_refused() {
    let app = create_test_app();

    let (status, _) = post(&app, "/api/v1/loans", json!({ "title": "Dune" })).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = post(&app, "/api/v1/loans", json!({ "title": "Dune" })).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "ItemNotAvailable");

    let (_, body) = get(&app, "/api/v1/loans").await;
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_borrow_validation() {
    let app = create_test_app();

    let (status, body) = post(&app, "/api/v1/loans", json!({ "title": "   " })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BadValue");

    let (status, body) = post(&app, "/api/v1/loans", json!({ "title": "Unknown Book" })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NoSuchItem");
}

#[tokio::test]
async fn test_return_unknown_code() {
    let app = create_test_app();
    post(&app, "/api/v1/loans", json!({ "title": "Foundation" })).await;

    let (status, body) = post(&app, "/api/v1/loans/return", json!({ "code": "999" })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NoSuchLoan");
    assert_eq!(body["message"], "Invalid request number.");

    let (_, body) = get(&app, "/api/v1/items").await;
    let on_loan: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .filter(|item| item["available"] == false)
        .map(|item| item["title"].as_str().unwrap())
        .collect();
    assert_eq!(on_loan, vec!["Foundation"]);
}

#[tokio::test]
async fn test_repeated_return_fails() {
    let app = create_test_app();
    post(&app, "/api/v1/loans", json!({ "title": "Dune" })).await;

    let (status, _) = post(&app, "/api/v1/loans/return", json!({ "code": "001" })).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = post(&app, "/api/v1/loans/return", json!({ "code": "001" })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_stats() {
    let app = create_test_app();
    post(&app, "/api/v1/loans", json!({ "title": "Smith, Jane" })).await;

    let (status, body) = get(&app, "/api/v1/stats").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ledger"]["total"], 4);
    assert_eq!(body["ledger"]["available"], 3);
    assert_eq!(body["ledger"]["on_loan"], 1);
    assert_eq!(body["ledger"]["codes_issued"], 1);
    assert_eq!(body["import"]["titles"], 4);
    assert_eq!(body["import"]["rows_read"], 4);
}

#[tokio::test]
async fn test_reload_catalog() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    let app = create_test_app_from(CATALOG, file.path());

    post(&app, "/api/v1/loans", json!({ "title": "Dune" })).await;

    // New catalog without the borrowed title is refused
    writeln!(file, "title\nFoundation\nEmma").unwrap();
    let (status, _) = post(&app, "/api/v1/catalog/reload", Value::Null).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (_, body) = get(&app, "/api/v1/items").await;
    assert_eq!(body.as_array().unwrap().len(), 4);

    writeln!(file, "Dune\nEmma").unwrap();
    let (status, body) = post(&app, "/api/v1/catalog/reload", Value::Null).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["titles"], 3);
    assert_eq!(body["duplicate_rows"], 1);

    let (_, body) = get(&app, "/api/v1/items").await;
    assert_eq!(titles(&body), vec!["Foundation", "Emma", "Dune"]);
    assert_eq!(body[2]["available"], false);
}

#[tokio::test]
async fn test_reload_missing_file_keeps_catalog() {
    let app = create_test_app();

    let (status, _) = post(&app, "/api/v1/catalog/reload", Value::Null).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let (_, body) = get(&app, "/api/v1/items").await;
    assert_eq!(body.as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_openapi_document() {
    let app = create_test_app();
    let (status, body) = get(&app, "/api-docs/openapi.json").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/loans"].is_object());
    assert!(body["paths"]["/items/search"].is_object());
}
