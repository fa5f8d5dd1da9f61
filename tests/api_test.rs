//! Tests de la superficie HTTP sin base de datos
//!
//! Router de prueba con handlers stub que replican el contrato del
//! envoltorio de respuesta y la validación de entrada.

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    routing::{get, post},
    Json, Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::util::ServiceExt;

use cine_server::domain::auth::dto::RegistroRequest;
use cine_server::utils::BaseResponse;
use validator::Validate;

/// Router de prueba (validación sin acceso a datos)
fn crear_router_de_prueba() -> Router {
    Router::new()
        .route("/health", get(health_stub))
        .route("/api/auth/register", post(register_stub))
}

async fn health_stub() -> Json<BaseResponse<&'static str>> {
    Json(BaseResponse::success("OK"))
}

async fn register_stub(body: Option<Json<Value>>) -> (StatusCode, Json<Value>) {
    let Some(Json(body)) = body else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "isSuccess": false,
                "code": "COMMON400",
                "message": "Falta el cuerpo de la petición.",
                "result": null
            })),
        );
    };

    let req: RegistroRequest = match serde_json::from_value(body) {
        Ok(req) => req,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "isSuccess": false,
                    "code": "COMMON400",
                    "message": "Faltan campos obligatorios.",
                    "result": null
                })),
            );
        }
    };

    if req.validate().is_err() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "isSuccess": false,
                "code": "COMMON400",
                "message": "Datos de entrada inválidos.",
                "result": null
            })),
        );
    }

    (
        StatusCode::CREATED,
        Json(json!({
            "isSuccess": true,
            "code": "COMMON201",
            "message": "Recurso creado exitosamente.",
            "result": { "email": req.email }
        })),
    )
}

async fn cuerpo_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_responde_con_el_envoltorio_estandar() {
    let app = crear_router_de_prueba();

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::GET)
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = cuerpo_json(response).await;
    assert_eq!(body["isSuccess"], true);
    assert_eq!(body["code"], "COMMON200");
    assert_eq!(body["result"], "OK");
}

#[tokio::test]
async fn el_registro_sin_campos_obligatorios_es_400() {
    let app = crear_router_de_prueba();

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/api/auth/register")
                .header("content-type", "application/json")
                .body(Body::from(json!({ "email": "ana@cine.com" }).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = cuerpo_json(response).await;
    assert_eq!(body["isSuccess"], false);
    assert_eq!(body["code"], "COMMON400");
}

#[tokio::test]
async fn el_registro_con_email_invalido_es_400() {
    let app = crear_router_de_prueba();

    let payload = json!({
        "email": "sin-arroba",
        "password": "secreta123",
        "nombre": "Ana",
        "apellido": "García",
        "telefono": "555-1234",
        "fechaNacimiento": "1990-05-20"
    });

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/api/auth/register")
                .header("content-type", "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn el_registro_valido_es_201() {
    let app = crear_router_de_prueba();

    let payload = json!({
        "email": "ana@cine.com",
        "password": "secreta123",
        "nombre": "Ana",
        "apellido": "García",
        "telefono": "555-1234",
        "fechaNacimiento": "1990-05-20"
    });

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/api/auth/register")
                .header("content-type", "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let body = cuerpo_json(response).await;
    assert_eq!(body["isSuccess"], true);
    assert_eq!(body["result"]["email"], "ana@cine.com");
}
