//! Tests de integración de la API
//!
//! Ejercitan el router completo contra los almacenes en memoria, sin
//! PostgreSQL: el contrato HTTP debe ser idéntico con cualquier store.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use vehicle_rental::config::environment::EnvironmentConfig;
use vehicle_rental::models::brand::Brand;
use vehicle_rental::repositories::memory::{InMemoryBrandStore, InMemoryVehicleStore};
use vehicle_rental::routes;
use vehicle_rental::state::AppState;

fn brand(id: i32, name: &str) -> Brand {
    Brand {
        id,
        name: name.to_string(),
    }
}

// App de test con las marcas dadas y sin vehículos
fn create_test_app(brands: Vec<Brand>) -> Router {
    let state = AppState::with_stores(
        Arc::new(InMemoryVehicleStore::new()),
        Arc::new(InMemoryBrandStore::with_brands(brands)),
        EnvironmentConfig::default(),
    );
    routes::create_api_router().with_state(state)
}

fn default_brands() -> Vec<Brand> {
    vec![brand(1, "Toyota"), brand(2, "Honda")]
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(payload) => Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(payload.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn example_payload() -> Value {
    json!({
        "brand": "Toyota",
        "registrationNumber": "ABC123",
        "vin": "1HGBH41JXMN109186",
        "clientEmail": "client@example.com",
        "clientAddress": "123 Main St",
        "isCurrentlyRented": true,
        "currentLocationAddress": "456 Rental St"
    })
}

#[tokio::test]
async fn test_create_and_read_vehicle() {
    let app = create_test_app(default_brands());

    let (status, body) = send(&app, "POST", "/api/vehicle/create", Some(example_payload())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["status"], "Vehicle created!");

    let (status, body) = send(&app, "GET", "/api/vehicle/read/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 1);
    assert_eq!(body["brand"], "Toyota");
    assert_eq!(body["registrationNumber"], "ABC123");
    assert_eq!(body["vin"], "1HGBH41JXMN109186");
    assert_eq!(body["clientEmail"], "client@example.com");
    assert_eq!(body["clientAddress"], "123 Main St");
    assert_eq!(body["isCurrentlyRented"], true);
    assert_eq!(body["currentLocationAddress"], "456 Rental St");
}

#[tokio::test]
async fn test_create_with_numeric_brand_reference() {
    let app = create_test_app(default_brands());

    let mut payload = example_payload();
    payload["brand"] = json!("2");
    let (status, _) = send(&app, "POST", "/api/vehicle/create", Some(payload)).await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, body) = send(&app, "GET", "/api/vehicle/read/1", None).await;
    assert_eq!(body["brand"], "Honda");
}

#[tokio::test]
async fn test_create_missing_fields_persists_nothing() {
    let app = create_test_app(default_brands());

    let (status, body) = send(
        &app,
        "POST",
        "/api/vehicle/create",
        Some(json!({ "brand": "Toyota" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "Invalid form data");
    let errors = body["errors"].as_array().unwrap();
    assert!(errors.iter().any(|e| e.as_str().unwrap().starts_with("registrationNumber:")));
    assert!(errors.iter().any(|e| e.as_str().unwrap().starts_with("vin:")));
    assert!(errors.iter().any(|e| e.as_str().unwrap().starts_with("clientEmail:")));
    assert!(errors.iter().any(|e| e.as_str().unwrap().starts_with("clientAddress:")));

    let (status, body) = send(&app, "GET", "/api/vehicle/list", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_create_validation_reports_all_violations_together() {
    let app = create_test_app(default_brands());

    let (status, body) = send(
        &app,
        "POST",
        "/api/vehicle/create",
        Some(json!({
            "brand": "Toyota",
            "registrationNumber": "AB",
            "vin": "1HGBH41JXMN109186",
            "clientEmail": "not-an-email",
            "clientAddress": "123 Main St"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let errors = body["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 2);
}

#[tokio::test]
async fn test_create_unknown_brand_is_bad_request() {
    let app = create_test_app(default_brands());

    let mut payload = example_payload();
    payload["brand"] = json!("Ferrari");
    let (status, body) = send(&app, "POST", "/api/vehicle/create", Some(payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "Brand not found");

    let (_, body) = send(&app, "GET", "/api/vehicle/list", None).await;
    assert_eq!(body.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_duplicate_vin_rejected() {
    let app = create_test_app(default_brands());

    let (status, _) = send(&app, "POST", "/api/vehicle/create", Some(example_payload())).await;
    assert_eq!(status, StatusCode::CREATED);

    let mut second = example_payload();
    second["registrationNumber"] = json!("XYZ789");
    let (status, body) = send(&app, "POST", "/api/vehicle/create", Some(second)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "Invalid form data");
    assert_eq!(body["errors"][0], "vin: already registered");

    let (_, body) = send(&app, "GET", "/api/vehicle/list", None).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_duplicate_registration_number_rejected() {
    let app = create_test_app(default_brands());

    send(&app, "POST", "/api/vehicle/create", Some(example_payload())).await;

    let mut second = example_payload();
    second["vin"] = json!("2HGBH41JXMN109187");
    let (status, body) = send(&app, "POST", "/api/vehicle/create", Some(second)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"][0], "registrationNumber: already registered");
}

#[tokio::test]
async fn test_unknown_id_returns_404_regardless_of_payload() {
    let app = create_test_app(default_brands());

    let (status, body) = send(&app, "GET", "/api/vehicle/read/99", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], "Vehicle not found");

    // El 404 gana aunque el payload sea inválido
    let (status, body) = send(&app, "PUT", "/api/vehicle/update/99", Some(json!({}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], "Vehicle not found");

    let (status, body) = send(&app, "DELETE", "/api/vehicle/delete/99", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], "Vehicle not found");
}

#[tokio::test]
async fn test_update_replaces_every_field() {
    let app = create_test_app(default_brands());

    send(&app, "POST", "/api/vehicle/create", Some(example_payload())).await;

    // Sin isCurrentlyRented ni currentLocationAddress: el reemplazo
    // completo los devuelve a false y null
    let (status, body) = send(
        &app,
        "PUT",
        "/api/vehicle/update/1",
        Some(json!({
            "brand": "Honda",
            "registrationNumber": "XYZ789",
            "vin": "2HGBH41JXMN109187",
            "clientEmail": "newclient@example.com",
            "clientAddress": "456 New St"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "Vehicle updated!");

    let (_, body) = send(&app, "GET", "/api/vehicle/read/1", None).await;
    assert_eq!(body["brand"], "Honda");
    assert_eq!(body["registrationNumber"], "XYZ789");
    assert_eq!(body["vin"], "2HGBH41JXMN109187");
    assert_eq!(body["clientEmail"], "newclient@example.com");
    assert_eq!(body["clientAddress"], "456 New St");
    assert_eq!(body["isCurrentlyRented"], false);
    assert_eq!(body["currentLocationAddress"], Value::Null);
}

#[tokio::test]
async fn test_update_with_invalid_payload_reports_errors() {
    let app = create_test_app(default_brands());

    send(&app, "POST", "/api/vehicle/create", Some(example_payload())).await;

    let (status, body) = send(
        &app,
        "PUT",
        "/api/vehicle/update/1",
        Some(json!({ "brand": "Toyota", "vin": "1HGBH41JXMN109186" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "Invalid form data");
    assert!(!body["errors"].as_array().unwrap().is_empty());

    // El vehículo original queda intacto
    let (_, body) = send(&app, "GET", "/api/vehicle/read/1", None).await;
    assert_eq!(body["registrationNumber"], "ABC123");
}

#[tokio::test]
async fn test_delete_vehicle() {
    let app = create_test_app(default_brands());

    send(&app, "POST", "/api/vehicle/create", Some(example_payload())).await;

    let (status, body) = send(&app, "DELETE", "/api/vehicle/delete/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "Vehicle deleted!");

    let (status, _) = send(&app, "GET", "/api/vehicle/read/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "DELETE", "/api/vehicle/delete/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_empty_list_asymmetry() {
    // Sin marcas y sin vehículos: el listado de vehículos es un 200 con
    // array vacío, el de marcas un 404
    let app = create_test_app(Vec::new());

    let (status, body) = send(&app, "GET", "/api/vehicle/list", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    let (status, body) = send(&app, "GET", "/api/brand/list", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], "No brands found");
}

#[tokio::test]
async fn test_brand_list_ordered_by_ascending_id() {
    let app = create_test_app(vec![brand(3, "Citroën"), brand(1, "Toyota"), brand(2, "Honda")]);

    let (status, body) = send(&app, "GET", "/api/brand/list", None).await;
    assert_eq!(status, StatusCode::OK);
    let brands = body.as_array().unwrap();
    assert_eq!(brands.len(), 3);
    assert_eq!(brands[0], json!({ "id": 1, "name": "Toyota" }));
    assert_eq!(brands[1], json!({ "id": 2, "name": "Honda" }));
    assert_eq!(brands[2], json!({ "id": 3, "name": "Citroën" }));
}

#[tokio::test]
async fn test_vehicle_list_returns_all_vehicles() {
    let app = create_test_app(default_brands());

    send(&app, "POST", "/api/vehicle/create", Some(example_payload())).await;
    let mut second = example_payload();
    second["brand"] = json!("Honda");
    second["registrationNumber"] = json!("XYZ789");
    second["vin"] = json!("2HGBH41JXMN109187");
    send(&app, "POST", "/api/vehicle/create", Some(second)).await;

    let (status, body) = send(&app, "GET", "/api/vehicle/list", None).await;
    assert_eq!(status, StatusCode::OK);
    let vehicles = body.as_array().unwrap();
    assert_eq!(vehicles.len(), 2);
    assert_eq!(vehicles[0]["id"], 1);
    assert_eq!(vehicles[0]["brand"], "Toyota");
    assert_eq!(vehicles[1]["id"], 2);
    assert_eq!(vehicles[1]["brand"], "Honda");
}

#[tokio::test]
async fn test_health_check() {
    let app = create_test_app(Vec::new());

    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["service"], "vehicle-rental-api");
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let app = create_test_app(Vec::new());

    let (status, body) = send(&app, "GET", "/api/docs/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/api/vehicle/create"].is_object());
    assert!(body["paths"]["/api/brand/list"].is_object());
}
