//! bedside-api
//!
//! JSON HTTP surface over the Bedside tools. Handlers are stateless; every
//! request is a pure computation over the compiled-in tables.

pub mod error;
pub mod middleware;
pub mod routes;

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with logging and CORS layers.
pub fn router() -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/tools", get(routes::tools::list_tools))
        // Drug extractor
        .route("/drugs", get(routes::drugs::list_drugs))
        .route("/drugs/extract", post(routes::drugs::extract_drugs))
        // Scoring instruments
        .route("/instruments", get(routes::instruments::list_instruments))
        .route(
            "/instruments/{id}",
            get(routes::instruments::get_instrument_detail),
        )
        .route(
            "/instruments/{id}/score",
            post(routes::instruments::score_instrument),
        )
        // Duration calculator
        .route("/interval", post(routes::interval::compute_interval))
        .layer(axum_mw::from_fn(middleware::request_log::request_log))
        .layer(cors)
}
