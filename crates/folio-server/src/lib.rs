//! HTTP side of the comic folio: the contact endpoint and chapter addressing.

pub mod bindings;
pub mod config;
pub mod error;
pub mod rate_limit;
pub mod routes;
pub mod validate;

use axum::Router;
use axum::routing::{get, post};
use rate_limit::RateLimiter;
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct AppState {
    pub limiter: Arc<RateLimiter>,
    /// Simulated mail relay latency.
    pub delivery_delay: Duration,
}

impl AppState {
    pub fn from_config(config: &config::ServerConfig) -> Self {
        AppState {
            limiter: Arc::new(RateLimiter::new(
                config.rate_limit_max,
                config.rate_limit_window,
            )),
            delivery_delay: config.delivery_delay,
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/contact",
            post(routes::submit_contact).fallback(routes::method_not_allowed),
        )
        .route("/", get(routes::landing))
        .route("/{page}", get(routes::chapter_page))
        .route("/{page}/", get(routes::chapter_page))
        .fallback(routes::not_found)
        .with_state(state)
}
