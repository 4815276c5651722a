//! # ماژول سرویس‌ها (Business Logic Layer)
//!
//! ## لایه‌بندی معماری
//!
//! ```text
//! ┌─────────────────┐
//! │    API Layer    │  <-- HTTP handlers (axum)
//! ├─────────────────┤
//! │  Service Layer  │  <-- Business logic (اینجا!)
//! ├─────────────────┤
//! │ Repository Layer│  <-- Data access (فقط خوندنی)
//! ├─────────────────┤
//! │    Database     │  <-- SQLite
//! └─────────────────┘
//! ```
//!
//! هر request تعداد کم و محدودی query مستقل اجرا میکنه؛ هیچ state
//! قابل تغییری بین request‌ها به جز خود دیتابیس وجود نداره.

mod surah_service;
mod ayat_service;
mod juz_service;
mod tafsir_service;
mod doa_service;

pub use surah_service::*;
pub use ayat_service::*;
pub use juz_service::*;
pub use tafsir_service::*;
pub use doa_service::*;

use std::sync::Arc;
use crate::{
    config::Config,
    database::{AyatRepository, Database, DoaRepository, SurahRepository, TafsirRepository},
    error::{AppError, Result},
    juz::{self, AyatRef},
    models::Pagination,
};

// =====================================
// Application State
// =====================================
/// وضعیت برنامه که بین همه handlers اشتراک‌گذاری میشه
///
/// # مفاهیم:
/// - `Arc<T>`: Reference counting برای thread-safe sharing
/// - `Clone`: فقط Arc‌ها clone میشن، نه داده
#[derive(Clone)]
pub struct AppState {
    /// تنظیمات برنامه
    pub config: Arc<Config>,

    /// برای health check
    pub database: Database,

    pub surah_service: Arc<SurahService>,
    pub ayat_service: Arc<AyatService>,
    pub juz_service: Arc<JuzService>,
    pub tafsir_service: Arc<TafsirService>,
    pub doa_service: Arc<DoaService>,
}

impl AppState {
    /// ساخت AppState جدید
    ///
    /// همه وابستگی‌ها اینجا تزریق میشن (Dependency Injection)
    #[must_use]
    pub fn new(db: Database, config: Config) -> Self {
        let surahs = SurahRepository::new(db.clone());
        let ayat = AyatRepository::new(db.clone());
        let tafsir = TafsirRepository::new(db.clone());
        let doa = DoaRepository::new(db.clone());

        let config = Arc::new(config);

        Self {
            surah_service: Arc::new(SurahService::new(surahs.clone(), ayat.clone(), config.clone())),
            ayat_service: Arc::new(AyatService::new(ayat.clone(), config.clone())),
            juz_service: Arc::new(JuzService::new(ayat, surahs.clone())),
            tafsir_service: Arc::new(TafsirService::new(tafsir, surahs)),
            doa_service: Arc::new(DoaService::new(doa, config.clone())),
            database: db,
            config,
        }
    }

    /// دسترسی به config
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }
}

// =====================================
// Service Trait
// =====================================
/// Marker trait برای services؛ همه باید Send + Sync باشن
pub trait Service: Send + Sync {}

// =====================================
// Shared helpers
// =====================================
/// صفحه‌بندی با پیش‌فرض‌های config
pub(crate) fn pagination(config: &Config, page: Option<u32>, per_page: Option<u32>) -> Pagination {
    Pagination::resolve(page, per_page, config.default_per_page, config.max_per_page)
}

/// بررسی دامنه شماره سوره
pub(crate) fn ensure_surah(surah: u16) -> Result<()> {
    if juz::is_valid_surah(surah) {
        Ok(())
    } else {
        Err(AppError::BadRequest(format!(
            "surah must be between 1 and {}, got {}",
            juz::SURAH_COUNT,
            surah
        )))
    }
}

/// بررسی اینکه آیه داخل سوره وجود داره (بعد از `ensure_surah`)
pub(crate) fn ensure_ayat(surah: u16, ayat: u16) -> Result<()> {
    let position = AyatRef::new(surah, ayat);
    if position.is_valid() {
        Ok(())
    } else {
        Err(AppError::BadRequest(format!(
            "ayat {} does not exist",
            position
        )))
    }
}

/// بررسی دامنه شماره جزء
pub(crate) fn ensure_juz(number: u8) -> Result<()> {
    if juz::is_valid_juz(number) {
        Ok(())
    } else {
        Err(AppError::BadRequest(format!(
            "juz must be between 1 and {}, got {}",
            juz::JUZ_COUNT,
            number
        )))
    }
}

/// تبدیل COUNT(*) به u64
pub(crate) fn total(count: i64) -> u64 {
    u64::try_from(count).unwrap_or(0)
}
