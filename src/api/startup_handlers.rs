//! Startup handlers

use super::handlers::{AppError, DirectoryState, MessageResponse};
use super::query::StartupListQuery;
use crate::models::{CreateStartupRequest, Startup, UpdateStartupRequest};
use crate::query::Page;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

fn not_found(id: i64) -> AppError {
    AppError::NotFound(format!("Startup with id {} not found", id))
}

/// List startups with filters, sorting and pagination
pub async fn list_startups(
    State(state): State<DirectoryState>,
    Query(query): Query<StartupListQuery>,
) -> Result<Json<Page<Startup>>, AppError> {
    let pagination = query.pagination.validate().map_err(AppError::BadRequest)?;
    let sort = query.sort().map_err(AppError::BadRequest)?;
    let page = state
        .directory
        .startups()
        .list(&query.filters(), &sort, pagination)
        .await?;
    Ok(Json(page))
}

/// Get a startup by id
pub async fn get_startup(
    State(state): State<DirectoryState>,
    Path(id): Path<i64>,
) -> Result<Json<Startup>, AppError> {
    state
        .directory
        .startups()
        .get(id)
        .await?
        .map(Json)
        .ok_or_else(|| not_found(id))
}

/// Create a startup
pub async fn create_startup(
    State(state): State<DirectoryState>,
    Json(req): Json<CreateStartupRequest>,
) -> Result<(StatusCode, Json<Startup>), AppError> {
    let startup = state.directory.startups().create(req).await?;
    Ok((StatusCode::CREATED, Json(startup)))
}

/// Update the supplied fields of a startup
pub async fn update_startup(
    State(state): State<DirectoryState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateStartupRequest>,
) -> Result<Json<Startup>, AppError> {
    state
        .directory
        .startups()
        .update(id, req)
        .await?
        .map(Json)
        .ok_or_else(|| not_found(id))
}

/// Delete a startup
pub async fn delete_startup(
    State(state): State<DirectoryState>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    if !state.directory.startups().delete(id).await? {
        return Err(not_found(id));
    }
    Ok(Json(MessageResponse {
        message: format!("Startup {} deleted successfully", id),
    }))
}

// ============================================================================
// Facets and filter options
// ============================================================================

pub async fn list_industries(
    State(state): State<DirectoryState>,
) -> Result<Json<serde_json::Value>, AppError> {
    let industries = state.directory.startups().industries().await?;
    Ok(Json(serde_json::json!({ "industries": industries })))
}

pub async fn list_funding_stages(
    State(state): State<DirectoryState>,
) -> Result<Json<serde_json::Value>, AppError> {
    let stages = state.directory.startups().funding_stages().await?;
    Ok(Json(serde_json::json!({ "fundingStages": stages })))
}

pub async fn list_locations(
    State(state): State<DirectoryState>,
) -> Result<Json<serde_json::Value>, AppError> {
    let locations = state.directory.startups().locations().await?;
    Ok(Json(serde_json::json!({ "locations": locations })))
}

pub async fn list_categories(
    State(state): State<DirectoryState>,
) -> Result<Json<serde_json::Value>, AppError> {
    let categories = state.directory.startups().categories().await?;
    Ok(Json(serde_json::json!({ "categories": categories })))
}

pub async fn list_tags(
    State(state): State<DirectoryState>,
) -> Result<Json<serde_json::Value>, AppError> {
    let tags = state.directory.startups().tags().await?;
    Ok(Json(serde_json::json!({ "tags": tags })))
}
