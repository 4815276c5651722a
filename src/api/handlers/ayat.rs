//! # Ayat Handlers

use axum::{extract::State, Json};

use crate::{
    api::extractors::ValidatedQuery,
    error::Result,
    models::{ApiResponse, AyatResponse, PaginatedResult, SearchQuery},
    services::AppState,
};

/// جستجو در ترجمه و transliteration آیات
///
/// # Endpoint
/// `GET /api/ayat/search?q=rahmat&page=1`
pub async fn search_ayat(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<SearchQuery>,
) -> Result<Json<ApiResponse<PaginatedResult<AyatResponse>>>> {
    let results = state.ayat_service.search(query).await?;

    Ok(Json(ApiResponse::success(results)))
}
