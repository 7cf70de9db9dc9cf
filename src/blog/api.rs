//! Blog API Endpoints
//! Mission: Token-gated article CRUD
//!
//! Every handler here sits behind the auth gate; the router attaches
//! [`crate::auth::require_token`] as a route layer, so a request only
//! reaches these functions with verified claims in its extensions.

use crate::auth::models::Claims;
use crate::blog::{
    models::{Article, CreateArticleForm, UpdateArticleForm},
    store::ArticleStore,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Extension, Form, Json,
};
use serde_json::json;
use std::sync::Arc;

/// Shared blog state
#[derive(Clone)]
pub struct BlogState {
    pub articles: Arc<ArticleStore>,
}

/// Create article - POST /api/blog
///
/// The author field is stored verbatim from the form; attribution is only
/// forced to the token's username on update. The response echoes the form's
/// `datatoken` field.
pub async fn create_article(
    State(state): State<BlogState>,
    Form(form): Form<CreateArticleForm>,
) -> Result<Json<serde_json::Value>, ApiError> {
    state
        .articles
        .insert(&form.title, &form.content, &form.author)?;

    Ok(Json(json!({
        "msg": "Article created",
        "token": form.datatoken
    })))
}

/// List articles - GET /api/blog
pub async fn list_articles(State(state): State<BlogState>) -> Result<Json<Vec<Article>>, ApiError> {
    let articles = state.articles.list()?;
    Ok(Json(articles))
}

/// Update article - PUT /api/blog/{id}
///
/// Overwrites title and content with the submitted values and the author
/// with the verified token's username: attribution follows whoever edits,
/// not the original author. A missing id is a silent no-op that still
/// reports success.
pub async fn update_article(
    State(state): State<BlogState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<i64>,
    Form(form): Form<UpdateArticleForm>,
) -> Result<Json<serde_json::Value>, ApiError> {
    state
        .articles
        .update(id, &form.title, &form.content, &claims.username)?;

    Ok(Json(json!({
        "msg": "Article updated",
        "popup": "success"
    })))
}

/// Delete article - DELETE /api/blog/{id}
///
/// Absence of the article is tolerated; the response reports success
/// either way.
pub async fn delete_article(
    State(state): State<BlogState>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, ApiError> {
    state.articles.delete(id)?;

    Ok(Json(json!({
        "msg": "Article deleted",
        "popup": "success"
    })))
}

/// Blog API errors
#[derive(Debug)]
pub enum ApiError {
    Database(anyhow::Error),
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Database(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let ApiError::Database(err) = self;
        tracing::error!("Database error: {}", err);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "msg": "Internal server error", "popup": "error" })),
        )
            .into_response()
    }
}
