//! Investor and incubator handlers

use super::handlers::{AppError, DirectoryState, MessageResponse};
use super::query::InvestorListQuery;
use crate::models::{CreateInvestorRequest, Investor, UpdateInvestorRequest};
use crate::query::Page;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;

fn not_found(id: i64) -> AppError {
    AppError::NotFound(format!("Investor with id {} not found", id))
}

/// List investors with filters and pagination
pub async fn list_investors(
    State(state): State<DirectoryState>,
    Query(query): Query<InvestorListQuery>,
) -> Result<Json<Page<Investor>>, AppError> {
    let pagination = query.pagination.validate().map_err(AppError::BadRequest)?;
    let page = state
        .directory
        .investors()
        .list(&query.filters(), pagination)
        .await?;
    Ok(Json(page))
}

/// Get an investor by id
pub async fn get_investor(
    State(state): State<DirectoryState>,
    Path(id): Path<i64>,
) -> Result<Json<Investor>, AppError> {
    state
        .directory
        .investors()
        .get(id)
        .await?
        .map(Json)
        .ok_or_else(|| not_found(id))
}

/// Create an investor
pub async fn create_investor(
    State(state): State<DirectoryState>,
    Json(req): Json<CreateInvestorRequest>,
) -> Result<(StatusCode, Json<Investor>), AppError> {
    let investor = state.directory.investors().create(req).await?;
    Ok((StatusCode::CREATED, Json(investor)))
}

/// Update the supplied fields of an investor
pub async fn update_investor(
    State(state): State<DirectoryState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateInvestorRequest>,
) -> Result<Json<Investor>, AppError> {
    state
        .directory
        .investors()
        .update(id, req)
        .await?
        .map(Json)
        .ok_or_else(|| not_found(id))
}

/// Delete an investor
pub async fn delete_investor(
    State(state): State<DirectoryState>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    if !state.directory.investors().delete(id).await? {
        return Err(not_found(id));
    }
    Ok(Json(MessageResponse {
        message: format!("Investor {} deleted successfully", id),
    }))
}

/// Every incubator with its count
#[derive(Serialize)]
pub struct IncubatorsResponse {
    pub data: Vec<Investor>,
    pub total: usize,
}

pub async fn list_incubators(
    State(state): State<DirectoryState>,
) -> Result<Json<IncubatorsResponse>, AppError> {
    let data = state.directory.investors().list_incubators().await?;
    Ok(Json(IncubatorsResponse {
        total: data.len(),
        data,
    }))
}

// ============================================================================
// Filter options
// ============================================================================

pub async fn list_industries(
    State(state): State<DirectoryState>,
) -> Result<Json<serde_json::Value>, AppError> {
    let industries = state.directory.investors().industries().await?;
    Ok(Json(serde_json::json!({ "industries": industries })))
}

pub async fn list_stages(
    State(state): State<DirectoryState>,
) -> Result<Json<serde_json::Value>, AppError> {
    let stages = state.directory.investors().stages().await?;
    Ok(Json(serde_json::json!({ "stages": stages })))
}

pub async fn list_locations(
    State(state): State<DirectoryState>,
) -> Result<Json<serde_json::Value>, AppError> {
    let locations = state.directory.investors().locations().await?;
    Ok(Json(serde_json::json!({ "locations": locations })))
}
