//! Router Assembly
//! Mission: Wire stores, auth gate, and handlers into one app

use crate::auth::{api as auth_api, AuthState, CredentialStore, JwtHandler};
use crate::blog::{api as blog_api, ArticleStore, BlogState};
use crate::middleware::request_logging;
use axum::{
    middleware,
    routing::{get, post, put},
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

/// Create the API router.
///
/// Register, login, and the health check are public; everything under
/// /api/blog sits behind the auth gate.
pub fn create_router(
    credentials: Arc<CredentialStore>,
    articles: Arc<ArticleStore>,
    jwt: Arc<JwtHandler>,
) -> Router {
    let auth_state = AuthState {
        credentials,
        jwt: jwt.clone(),
    };
    let blog_state = BlogState { articles };

    let public_routes = Router::new()
        .route("/health", get(health_check))
        .route("/api/register", post(auth_api::register))
        .route("/api/login", post(auth_api::login))
        .with_state(auth_state);

    let protected_routes = Router::new()
        .route(
            "/api/blog",
            get(blog_api::list_articles).post(blog_api::create_article),
        )
        .route(
            "/api/blog/:id",
            put(blog_api::update_article).delete(blog_api::delete_article),
        )
        .route_layer(middleware::from_fn_with_state(
            jwt,
            crate::auth::require_token,
        ))
        .with_state(blog_state);

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(middleware::from_fn(request_logging))
        .layer(CorsLayer::permissive())
}

/// Health check endpoint
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    version: String,
}
