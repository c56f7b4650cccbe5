// Library exports for the forum service
// Integration tests build the same router the binary serves

pub mod auth;
pub mod comments;
pub mod config;
pub mod db;
pub mod error;
pub mod extractors;
pub mod ids;
pub mod masking;
pub mod replies;
pub mod routes;
pub mod state;
pub mod threads;
pub mod use_cases;
pub mod validation;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// All forum routes, plus `/test/seed` when `enable_test_seed` is set.
pub fn build_router(state: AppState, enable_test_seed: bool) -> Router {
    let mut app = Router::new().merge(routes::threads::router());

    if enable_test_seed {
        tracing::warn!("Test seed endpoint enabled at /test/seed");
        app = app.merge(routes::seed::router());
    }

    app.layer(TraceLayer::new_for_http()).with_state(state)
}
