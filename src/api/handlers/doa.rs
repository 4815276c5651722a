//! # Doa Handlers

use axum::{extract::State, Json};

use crate::{
    api::extractors::{ApiPath, ValidatedQuery},
    error::Result,
    models::{ApiResponse, DoaGroup, DoaQuery, DoaResponse, PaginatedResult},
    services::AppState,
};

/// لیست دعا با فیلتر
///
/// # Endpoint
/// `GET /api/doa?group=Pagi&tag=harian&q=tidur&page=1`
pub async fn list_doa(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<DoaQuery>,
) -> Result<Json<ApiResponse<PaginatedResult<DoaResponse>>>> {
    let doa = state.doa_service.list(query).await?;

    Ok(Json(ApiResponse::success(doa)))
}

/// گروه‌های دعا
///
/// # Endpoint
/// `GET /api/doa/groups`
pub async fn list_doa_groups(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<DoaGroup>>>> {
    let groups = state.doa_service.groups().await?;

    Ok(Json(ApiResponse::success(groups)))
}

/// یک دعا
///
/// # Endpoint
/// `GET /api/doa/:id`
pub async fn get_doa(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<ApiResponse<DoaResponse>>> {
    let doa = state.doa_service.get(id).await?;

    Ok(Json(ApiResponse::success(doa)))
}
