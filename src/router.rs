use axum::{
    routing::get,
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{handlers, AppState};

pub const INVENTORY_SERVICE: &str = "inventory-service";
pub const ITEMS_SERVICE: &str = "items-service";

/// Routes of the inventory service (products backed by the in-memory store).
pub fn inventory_router(state: AppState) -> Router {
    Router::new()
        // ── Health ──────────────────────────────────────────────────────────
        .route(
            "/health",
            get(|| handlers::health(INVENTORY_SERVICE)).fallback(handlers::method_not_allowed),
        )

        // ── Welcome ─────────────────────────────────────────────────────────
        .route(
            "/",
            get(handlers::products::welcome).fallback(handlers::method_not_allowed),
        )

        // ── Products ────────────────────────────────────────────────────────
        .route(
            "/productos",
            get(handlers::products::list_products)
                .post(handlers::products::create_product)
                .fallback(handlers::method_not_allowed),
        )
        .route(
            "/productos/:producto_id",
            get(handlers::products::get_product).fallback(handlers::method_not_allowed),
        )

        .fallback(handlers::not_found)

        // ── Middleware ──────────────────────────────────────────────────────
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Routes of the items service. Stateless: every endpoint echoes its input.
pub fn items_router() -> Router {
    Router::new()
        .route(
            "/health",
            get(|| handlers::health(ITEMS_SERVICE)).fallback(handlers::method_not_allowed),
        )
        .route(
            "/",
            get(handlers::items::welcome).fallback(handlers::method_not_allowed),
        )
        .route(
            "/items/:item_id",
            get(handlers::items::read_item)
                .put(handlers::items::update_item)
                .fallback(handlers::method_not_allowed),
        )
        .fallback(handlers::not_found)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Drives a router with a single request and decodes the JSON reply.
#[cfg(test)]
pub(crate) mod test_client {
    use axum::{
        body::Body,
        http::{header, Method, Request, StatusCode},
        Router,
    };
    use serde_json::Value;
    use tower::ServiceExt;

    pub async fn call(
        app: Router,
        method: Method,
        uri: &str,
        body: Option<&str>,
    ) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_owned()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }
}

#[cfg(test)]
mod tests {
    use super::test_client::call;
    use super::*;
    use axum::http::{Method, StatusCode};
    use serde_json::json;

    #[tokio::test]
    async fn inventory_health_names_the_service() {
        let (status, body) = call(
            inventory_router(AppState::seeded()),
            Method::GET,
            "/health",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "status": "ok", "service": "inventory-service" }));
    }

    #[tokio::test]
    async fn items_health_names_the_service() {
        let (status, body) = call(items_router(), Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["service"], "items-service");
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let (status, body) = call(items_router(), Method::GET, "/nope", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "detail": "Not Found" }));
    }

    #[tokio::test]
    async fn wrong_method_is_405_with_detail() {
        let (status, body) = call(items_router(), Method::DELETE, "/items/1", None).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body, json!({ "detail": "Method Not Allowed" }));

        let (status, body) = call(
            inventory_router(AppState::seeded()),
            Method::PUT,
            "/productos",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body["detail"], "Method Not Allowed");
    }

    #[tokio::test]
    async fn items_routes_are_not_mounted_on_inventory() {
        let (status, _) = call(
            inventory_router(AppState::seeded()),
            Method::GET,
            "/items/1",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
