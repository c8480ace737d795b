//! API route definitions

use super::handlers::{self, DirectoryState};
use super::{investor_handlers, startup_handlers};
use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Create the API router
pub fn create_router(state: DirectoryState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        // ====================================================================
        // Investors
        // ====================================================================
        .route(
            "/api/investors",
            get(investor_handlers::list_investors).post(investor_handlers::create_investor),
        )
        .route(
            "/api/investors/{id}",
            get(investor_handlers::get_investor)
                .put(investor_handlers::update_investor)
                .delete(investor_handlers::delete_investor),
        )
        .route(
            "/api/investors/incubators/all",
            get(investor_handlers::list_incubators),
        )
        .route(
            "/api/investors/filters/industries",
            get(investor_handlers::list_industries),
        )
        .route(
            "/api/investors/filters/stages",
            get(investor_handlers::list_stages),
        )
        .route(
            "/api/investors/filters/locations",
            get(investor_handlers::list_locations),
        )
        // ====================================================================
        // Startups
        // ====================================================================
        .route(
            "/api/startups",
            get(startup_handlers::list_startups).post(startup_handlers::create_startup),
        )
        .route(
            "/api/startups/{id}",
            get(startup_handlers::get_startup)
                .put(startup_handlers::update_startup)
                .delete(startup_handlers::delete_startup),
        )
        .route(
            "/api/startups/filters/industries",
            get(startup_handlers::list_industries),
        )
        .route(
            "/api/startups/filters/stages",
            get(startup_handlers::list_funding_stages),
        )
        .route(
            "/api/startups/filters/locations",
            get(startup_handlers::list_locations),
        )
        .route(
            "/api/startups/filters/categories",
            get(startup_handlers::list_categories),
        )
        .route(
            "/api/startups/filters/tags",
            get(startup_handlers::list_tags),
        )
        // ====================================================================
        // Statistics
        // ====================================================================
        .route("/api/stats", get(handlers::get_platform_stats))
        .route("/api/stats/dashboard", get(handlers::get_dashboard_stats))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
