//! # Surah Handlers

use axum::{extract::State, Json};

use crate::{
    api::extractors::{ApiPath, ValidatedQuery},
    error::Result,
    models::{
        ApiResponse, AyatRangeQuery, AyatResponse, PageQuery, PaginatedResult,
        SurahDetailResponse, SurahResponse,
    },
    services::AppState,
};

/// لیست سوره‌ها
///
/// # Endpoint
/// `GET /api/surah?page=1&per_page=20&q=yasin`
pub async fn list_surahs(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<PageQuery>,
) -> Result<Json<ApiResponse<PaginatedResult<SurahResponse>>>> {
    let surahs = state.surah_service.list(query).await?;

    Ok(Json(ApiResponse::success(surahs)))
}

/// جزئیات سوره با آیات
///
/// # Endpoint
/// `GET /api/surah/:number?from=1&to=10`
///
/// # Response
/// ```json
/// {
///   "success": true,
///   "data": {
///     "number": 2,
///     "name_latin": "Al-Baqarah",
///     "juz": [1, 2, 3],
///     "ayat": [ ... ],
///     "previous": { "number": 1, ... },
///     "next": { "number": 3, ... }
///   }
/// }
/// ```
pub async fn get_surah(
    State(state): State<AppState>,
    ApiPath(number): ApiPath<u16>,
    ValidatedQuery(range): ValidatedQuery<AyatRangeQuery>,
) -> Result<Json<ApiResponse<SurahDetailResponse>>> {
    let surah = state.surah_service.detail(number, range).await?;

    Ok(Json(ApiResponse::success(surah)))
}

/// یک آیه
///
/// # Endpoint
/// `GET /api/surah/:number/ayat/:ayat`
pub async fn get_ayat(
    State(state): State<AppState>,
    ApiPath((surah, ayat)): ApiPath<(u16, u16)>,
) -> Result<Json<ApiResponse<AyatResponse>>> {
    let ayat = state.ayat_service.get(surah, ayat).await?;

    Ok(Json(ApiResponse::success(ayat)))
}
