//! JSON API tests
//!
//! CRUD and analytics endpoints through the full routing table.

use std::sync::Arc;

use actix_web::App;
use actix_web::http::StatusCode;
use actix_web::test::{self, TestRequest};
use serde_json::{Value, json};

use golinks::api::{AppState, routes};
use golinks::config::DatabaseConfig;
use golinks::storage::SeaOrmStorage;
use tempfile::TempDir;

async fn create_storage() -> (Arc<SeaOrmStorage>, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_url = format!(
        "sqlite://{}?mode=rwc",
        temp_dir.path().join("api_test.db").display()
    );
    let storage = SeaOrmStorage::new(&db_url, "sqlite", &DatabaseConfig::default())
        .await
        .expect("Failed to create storage");
    (Arc::new(storage), temp_dir)
}

macro_rules! init_app {
    ($storage:expr) => {{
        let state = AppState::new($storage);
        test::init_service(
            App::new()
                .configure(|cfg| state.register(cfg))
                .configure(routes::configure),
        )
        .await
    }};
}

fn new_link(shortlink: &str, destination: &str) -> Value {
    json!({ "shortlink": shortlink, "destination": destination })
}

// =============================================================================
// Create
// =============================================================================

#[actix_rt::test]
async fn test_create_returns_201_with_link() {
    let (storage, _dir) = create_storage().await;
    let app = init_app!(storage.clone());

    let req = TestRequest::post()
        .uri("/api/links")
        .set_json(new_link("wiki", "wiki.example.com"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["shortlink"], "wiki");
    assert_eq!(body["destination"], "https://wiki.example.com");
    assert!(body["id"].as_i64().unwrap() > 0);
    assert!(body["created_at"].as_str().unwrap().contains('T'));
}

#[actix_rt::test]
async fn test_create_duplicate_409() {
    let (storage, _dir) = create_storage().await;
    storage.insert("wiki", "https://wiki.example.com").await.unwrap();
    let app = init_app!(storage.clone());

    let req = TestRequest::post()
        .uri("/api/links")
        .set_json(new_link("wiki", "elsewhere.example.com"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "E002");
    assert!(body["message"].as_str().unwrap().contains("wiki"));
    assert_eq!(storage.count().await.unwrap(), 1);
}

#[actix_rt::test]
async fn test_create_invalid_400() {
    let (storage, _dir) = create_storage().await;
    let app = init_app!(storage.clone());

    for payload in [
        new_link("ab 1", "example.com"),
        new_link("", "example.com"),
        new_link("ok", ""),
        new_link("api", "example.com"),
        new_link("ctl", "https://a.test/x\ny"),
        json!({ "shortlink": "missing-destination" }),
    ] {
        let req = TestRequest::post()
            .uri("/api/links")
            .set_json(&payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{}", payload);
    }

    assert_eq!(storage.count().await.unwrap(), 0);
}

#[actix_rt::test]
async fn test_malformed_json_400() {
    let (storage, _dir) = create_storage().await;
    let app = init_app!(storage.clone());

    let req = TestRequest::post()
        .uri("/api/links")
        .insert_header(("Content-Type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "E001");
}

// =============================================================================
// List / Update / Delete
// =============================================================================

#[actix_rt::test]
async fn test_list_and_search() {
    let (storage, _dir) = create_storage().await;
    storage.insert("wiki", "https://wiki.example.com").await.unwrap();
    storage.insert("Mail", "https://mail.example.com").await.unwrap();
    let app = init_app!(storage.clone());

    let resp = test::call_service(&app, TestRequest::get().uri("/api/links").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Vec<Value> = test::read_body_json(resp).await;
    assert_eq!(body.len(), 2);
    assert_eq!(body[0]["shortlink"], "Mail");

    let resp = test::call_service(
        &app,
        TestRequest::get().uri("/api/links?q=MAIL").to_request(),
    )
    .await;
    let body: Vec<Value> = test::read_body_json(resp).await;
    assert_eq!(body.len(), 1);
    assert_eq!(body[0]["shortlink"], "Mail");
}

#[actix_rt::test]
async fn test_update_link() {
    let (storage, _dir) = create_storage().await;
    let link = storage.insert("old", "https://old.example.com").await.unwrap();
    let app = init_app!(storage.clone());

    let req = TestRequest::put()
        .uri(&format!("/api/links/{}", link.id))
        .set_json(new_link("new", "new.example.com"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["id"], link.id);
    assert_eq!(body["shortlink"], "new");
    assert_eq!(body["destination"], "https://new.example.com");
}

#[actix_rt::test]
async fn test_update_errors() {
    let (storage, _dir) = create_storage().await;
    storage.insert("a", "https://a.example.com").await.unwrap();
    let b = storage.insert("b", "https://b.example.com").await.unwrap();
    let app = init_app!(storage.clone());

    let req = TestRequest::put()
        .uri(&format!("/api/links/{}", b.id))
        .set_json(new_link("a", "c.example.com"))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::CONFLICT
    );

    let req = TestRequest::put()
        .uri("/api/links/9999")
        .set_json(new_link("z", "z.example.com"))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NOT_FOUND
    );

    let req = TestRequest::put()
        .uri(&format!("/api/links/{}", b.id))
        .set_json(new_link("b/c", "z.example.com"))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::BAD_REQUEST
    );

    assert_eq!(
        storage.get("b").await.unwrap().unwrap().destination,
        "https://b.example.com"
    );
}

#[actix_rt::test]
async fn test_delete_link() {
    let (storage, _dir) = create_storage().await;
    let link = storage.insert("tmp", "https://tmp.example.com").await.unwrap();
    let app = init_app!(storage.clone());

    let uri = format!("/api/links/{}", link.id);
    let resp = test::call_service(&app, TestRequest::delete().uri(&uri).to_request()).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = test::call_service(&app, TestRequest::delete().uri(&uri).to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = test::call_service(
        &app,
        TestRequest::delete().uri("/api/links/not-a-number").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// =============================================================================
// Analytics & health
// =============================================================================

#[actix_rt::test]
async fn test_stats_endpoints() {
    let (storage, _dir) = create_storage().await;
    let link = storage.insert("wiki", "https://wiki.example.com").await.unwrap();
    let app = init_app!(storage.clone());

    for _ in 0..2 {
        let resp = test::call_service(&app, TestRequest::get().uri("/wiki").to_request()).await;
        assert_eq!(resp.status(), StatusCode::FOUND);
    }

    let resp = test::call_service(
        &app,
        TestRequest::get().uri("/api/links/wiki/stats").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["usage_count"], 2);
    assert!(body["last_used"].is_string());

    let resp = test::call_service(
        &app,
        TestRequest::get().uri("/api/links/unused/stats").to_request(),
    )
    .await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["usage_count"], 0);
    assert!(body["last_used"].is_null());

    // Exact key match, surrounding whitespace is not stripped
    let resp = test::call_service(
        &app,
        TestRequest::get().uri("/api/links/%20wiki%20/stats").to_request(),
    )
    .await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["usage_count"], 0);

    // Deleting the link keeps its history
    let resp = test::call_service(
        &app,
        TestRequest::delete()
            .uri(&format!("/api/links/{}", link.id))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = test::call_service(&app, TestRequest::get().uri("/api/analytics").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Vec<Value> = test::read_body_json(resp).await;
    assert_eq!(body.len(), 1);
    assert_eq!(body[0]["shortlink"], "wiki");
    assert_eq!(body[0]["usage_count"], 2);
}

#[actix_rt::test]
async fn test_health() {
    let (storage, _dir) = create_storage().await;
    storage.insert("wiki", "https://wiki.example.com").await.unwrap();
    let app = init_app!(storage.clone());

    let resp = test::call_service(&app, TestRequest::get().uri("/health").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["storage"]["backend"], "sqlite");
    assert_eq!(body["storage"]["links_count"], 1);
}

#[actix_rt::test]
async fn test_storage_failure_is_generic_500() {
    let (storage, _dir) = create_storage().await;
    let app = init_app!(storage.clone());

    storage.get_db().clone().close().await.unwrap();

    let resp = test::call_service(&app, TestRequest::get().uri("/api/links").to_request()).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "E006");
    assert_eq!(body["message"], "Internal server error");
}
