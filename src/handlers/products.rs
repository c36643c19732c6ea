use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::json;
use tracing::{debug, info};

use crate::{
    error::{AppError, AppResult},
    models::Product,
    validation::{self, ValidJson},
    AppState,
};

pub const WELCOME: &str = "Bienvenido al sistema de inventario";
pub const PRODUCT_NOT_FOUND: &str = "Producto no encontrado";

// ── GET / ─────────────────────────────────────────────────────────────────────

pub async fn welcome() -> (StatusCode, Json<serde_json::Value>) {
    (StatusCode::OK, Json(json!({ "mensaje": WELCOME })))
}

// ── List ──────────────────────────────────────────────────────────────────────

pub async fn list_products(State(state): State<AppState>) -> (StatusCode, Json<Vec<Product>>) {
    let products = state.store.read().await.list_all().to_vec();

    info!(count = products.len(), "Listed products");

    (StatusCode::OK, Json(products))
}

// ── Get by ID ─────────────────────────────────────────────────────────────────

pub async fn get_product(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<(StatusCode, Json<Product>)> {
    let id = validation::path_int("producto_id", &raw_id)?;

    let product = state
        .store
        .read()
        .await
        .find_by_id(id)
        .cloned()
        .ok_or_else(|| {
            debug!(id, "Product lookup missed");
            AppError::not_found(PRODUCT_NOT_FOUND)
        })?;

    info!(id, nombre = %product.nombre, "Fetched product");

    Ok((StatusCode::OK, Json(product)))
}

// ── Create ────────────────────────────────────────────────────────────────────

pub async fn create_product(
    State(state): State<AppState>,
    ValidJson(product): ValidJson<Product>,
) -> (StatusCode, Json<serde_json::Value>) {
    let mensaje = format!("Producto '{}' añadido correctamente", product.nombre);
    let id = product.id;

    let mut store = state.store.write().await;
    store.append(product);
    let total = store.len();
    drop(store);

    info!(id, total, "Created product");

    (StatusCode::OK, Json(json!({ "mensaje": mensaje })))
}
