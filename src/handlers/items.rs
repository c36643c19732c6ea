use axum::{
    body::Bytes,
    extract::{Path, RawQuery},
    http::StatusCode,
    Json,
};
use serde_json::json;
use tracing::debug;

use crate::{
    error::AppResult,
    models::{Item, ItemQuery},
    validation,
};

pub const WELCOME: &str = "¡Hola! Bienvenido a mi API con FastAPI";

pub async fn welcome() -> (StatusCode, Json<serde_json::Value>) {
    (StatusCode::OK, Json(json!({ "Mensaje": WELCOME })))
}

// ── GET /items/:item_id ───────────────────────────────────────────────────────

pub async fn read_item(
    Path(raw_id): Path<String>,
    RawQuery(raw_query): RawQuery,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    let (item_id, query) = validation::collect(
        validation::path_int("item_id", &raw_id),
        ItemQuery::from_raw(raw_query.as_deref()),
    )?;

    debug!(item_id, q = ?query.q, "Read item");

    Ok((
        StatusCode::OK,
        Json(json!({ "item_id": item_id, "query_param": query.q })),
    ))
}

// ── PUT /items/:item_id ───────────────────────────────────────────────────────

/// Echoes the validated item back; nothing is stored.
pub async fn update_item(
    Path(raw_id): Path<String>,
    body: Bytes,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    let (item_id, item) = validation::collect(
        validation::path_int("item_id", &raw_id),
        validation::validate::<Item>(&body),
    )?;

    debug!(
        item_id,
        name = %item.name,
        is_offer = ?item.is_offer.value(),
        is_offer_sent = !item.is_offer.is_absent(),
        "Updated item"
    );

    Ok((
        StatusCode::OK,
        Json(json!({
            "item_name": item.name,
            "item_id": item_id,
            "price": item.price,
        })),
    ))
}
