//! # Juz Handlers
//!
//! دسترسی به متن بر اساس تقسیم ۳۰ جزئی

use axum::{extract::State, Json};

use crate::{
    api::extractors::{ApiPath, ValidatedQuery},
    error::Result,
    models::{
        ApiResponse, AyatRangeQuery, JuzDetailResponse, JuzLocateResponse, JuzSummary,
        JuzSurahResponse, LocateQuery,
    },
    services::AppState,
};

/// مرزهای هر ۳۰ جزء
///
/// # Endpoint
/// `GET /api/juz`
pub async fn list_juz(
    State(state): State<AppState>,
) -> Json<ApiResponse<Vec<JuzSummary>>> {
    Json(ApiResponse::success(state.juz_service.list()))
}

/// جزء یک آیه
///
/// # Endpoint
/// `GET /api/juz/locate?surah=2&ayat=142`
pub async fn locate_ayat(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<LocateQuery>,
) -> Result<Json<ApiResponse<JuzLocateResponse>>> {
    let located = state.juz_service.locate(query)?;

    Ok(Json(ApiResponse::success(located)))
}

/// جزئیات یک جزء
///
/// # Endpoint
/// `GET /api/juz/:number`
///
/// # Response
/// ```json
/// {
///   "success": true,
///   "data": {
///     "juz": 1,
///     "start": { "surah": 1, "ayat": 1 },
///     "end": { "surah": 2, "ayat": 141 },
///     "surahs": [
///       { "surah_number": 1, "ayat_count": 7, "first_ayat": 1, "last_ayat": 7, ... },
///       { "surah_number": 2, "ayat_count": 141, "first_ayat": 1, "last_ayat": 141, ... }
///     ],
///     "previous": null,
///     "next": 2
///   }
/// }
/// ```
pub async fn get_juz(
    State(state): State<AppState>,
    ApiPath(number): ApiPath<u8>,
) -> Result<Json<ApiResponse<JuzDetailResponse>>> {
    let detail = state.juz_service.detail(number).await?;

    Ok(Json(ApiResponse::success(detail)))
}

/// آیات یک سوره داخل یک جزء با navigation
///
/// # Endpoint
/// `GET /api/juz/:number/surah/:surah?from=&to=`
///
/// # Response
/// - `404` اگه سوره هیچ آیه‌ای در این جزء نداشته باشه
/// - بازه‌ای که خارج از آیات جزء باشه لیست خالی میده، نه 404
pub async fn get_surah_in_juz(
    State(state): State<AppState>,
    ApiPath((number, surah)): ApiPath<(u8, u16)>,
    ValidatedQuery(range): ValidatedQuery<AyatRangeQuery>,
) -> Result<Json<ApiResponse<JuzSurahResponse>>> {
    let page = state.juz_service.surah_in_juz(number, surah, range).await?;

    Ok(Json(ApiResponse::success(page)))
}
