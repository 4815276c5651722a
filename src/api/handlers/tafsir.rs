//! # Tafsir Handlers

use axum::{extract::State, Json};

use crate::{
    api::extractors::{ApiPath, ValidatedQuery},
    error::Result,
    models::{ApiResponse, AyatRangeQuery, SurahTafsirResponse, Tafsir},
    services::AppState,
};

/// تفسیر یک سوره
///
/// # Endpoint
/// `GET /api/tafsir/:surah?from=&to=`
pub async fn get_surah_tafsir(
    State(state): State<AppState>,
    ApiPath(surah): ApiPath<u16>,
    ValidatedQuery(range): ValidatedQuery<AyatRangeQuery>,
) -> Result<Json<ApiResponse<SurahTafsirResponse>>> {
    let tafsir = state.tafsir_service.for_surah(surah, range).await?;

    Ok(Json(ApiResponse::success(tafsir)))
}

/// تفسیر یک آیه
///
/// # Endpoint
/// `GET /api/tafsir/:surah/:ayat`
pub async fn get_ayat_tafsir(
    State(state): State<AppState>,
    ApiPath((surah, ayat)): ApiPath<(u16, u16)>,
) -> Result<Json<ApiResponse<Tafsir>>> {
    let tafsir = state.tafsir_service.for_ayat(surah, ayat).await?;

    Ok(Json(ApiResponse::success(tafsir)))
}
