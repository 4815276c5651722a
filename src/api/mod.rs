//! # لایه API
//!
//! این ماژول HTTP handlers و routing رو مدیریت میکنه.
//!
//! ## مفاهیم Rust + Axum:
//! - **Router**: تعریف مسیرها
//! - **Extractors**: استخراج داده از request
//! - **State**: اشتراک state بین handlers
//! - **Middleware**: پردازش قبل/بعد از handler
//!
//! ## ساختار URL‌ها:
//! - `GET /api/surah` - لیست سوره‌ها
//! - `GET /api/surah/:number` - سوره با آیات
//! - `GET /api/surah/:number/ayat/:ayat` - یک آیه
//! - `GET /api/ayat/search` - جستجو در آیات
//! - `GET /api/juz` - مرزهای ۳۰ جزء
//! - `GET /api/juz/locate` - جزء یک آیه
//! - `GET /api/juz/:number` - جزئیات جزء
//! - `GET /api/juz/:number/surah/:surah` - سوره داخل جزء با navigation
//! - `GET /api/tafsir/:surah` - تفسیر سوره
//! - `GET /api/tafsir/:surah/:ayat` - تفسیر آیه
//! - `GET /api/doa` - لیست دعا
//! - `GET /api/doa/groups` - گروه‌های دعا
//! - `GET /api/doa/:id` - یک دعا
//! - `GET /health` - Health check

mod handlers;
mod middleware;
mod extractors;

pub use handlers::*;
pub use middleware::*;
pub use extractors::*;

use axum::{
    routing::get,
    Router,
    middleware as axum_middleware,
};
use tower::ServiceBuilder;
use tower_http::{
    trace::TraceLayer,
    timeout::TimeoutLayer,
    compression::CompressionLayer,
};
use std::time::Duration;

use crate::{
    config::Config,
    database::Database,
    services::AppState,
};

// =====================================
// Router Builder
// =====================================
/// ساخت Router اصلی برنامه
///
/// # مفاهیم:
/// - `.nest()`: گروه‌بندی route‌ها
/// - `.layer()`: اضافه کردن middleware
/// - `.with_state()`: تزریق state
pub fn create_router(db: Database, config: Config) -> Router {
    let timeout = Duration::from_secs(config.request_timeout_secs);
    let state = AppState::new(db, config);

    Router::new()
        .nest("/api", api_routes())
        .route("/health", get(handlers::health::health_check))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(axum_middleware::from_fn(request_id))
                .layer(axum_middleware::from_fn(request_timing))
                .layer(TimeoutLayer::new(timeout))
                .layer(CompressionLayer::new()),
        )
        .with_state(state)
}

/// Route‌های API
fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/surah", surah_routes())
        .route("/ayat/search", get(handlers::ayat::search_ayat))
        .nest("/juz", juz_routes())
        .nest("/tafsir", tafsir_routes())
        .nest("/doa", doa_routes())
}

/// Route‌های سوره
fn surah_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::surah::list_surahs))
        .route("/:number", get(handlers::surah::get_surah))
        .route("/:number/ayat/:ayat", get(handlers::surah::get_ayat))
}

/// Route‌های جزء
///
/// `/locate` قبل از `/:number` match میشه چون مسیر ثابت اولویت داره
fn juz_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::juz::list_juz))
        .route("/locate", get(handlers::juz::locate_ayat))
        .route("/:number", get(handlers::juz::get_juz))
        .route("/:number/surah/:surah", get(handlers::juz::get_surah_in_juz))
}

/// Route‌های تفسیر
fn tafsir_routes() -> Router<AppState> {
    Router::new()
        .route("/:surah", get(handlers::tafsir::get_surah_tafsir))
        .route("/:surah/:ayat", get(handlers::tafsir::get_ayat_tafsir))
}

/// Route‌های دعا
fn doa_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::doa::list_doa))
        .route("/groups", get(handlers::doa::list_doa_groups))
        .route("/:id", get(handlers::doa::get_doa))
}
