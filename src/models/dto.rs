//! # Data Transfer Objects (DTOs)
//!
//! DTO‌های عمومی که در API استفاده میشن
//!
//! ## مفاهیم:
//! - DTO: برای انتقال داده بین لایه‌ها
//! - Query DTO‌ها با `validator` اعتبارسنجی میشن

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use super::AyatRange;

// =====================================
// Generic API Responses
// =====================================
/// پاسخ موفق عمومی
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> ApiResponse<T> {
    /// ساخت پاسخ موفق
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

// =====================================
// Health Check
// =====================================
/// پاسخ health check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub database: bool,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    /// ساخت پاسخ بر اساس وضعیت دیتابیس
    #[must_use]
    pub fn from_database(database_ok: bool) -> Self {
        Self {
            status: if database_ok { "healthy" } else { "degraded" }.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            database: database_ok,
            timestamp: Utc::now(),
        }
    }
}

// =====================================
// Query Parameters
// =====================================
/// صفحه‌بندی + جستجوی متنی اختیاری
///
/// `GET /api/surah?page=2&per_page=10&q=yasin`
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct PageQuery {
    #[validate(range(min = 1, message = "page starts at 1"))]
    pub page: Option<u32>,

    #[validate(range(min = 1, message = "per_page must be positive"))]
    pub per_page: Option<u32>,

    /// عبارت جستجو
    #[validate(length(min = 1, max = 100, message = "query must be 1-100 characters"))]
    pub q: Option<String>,
}

/// جستجوی اجباری در متن آیات
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SearchQuery {
    #[validate(length(min = 2, max = 100, message = "query must be 2-100 characters"))]
    pub q: String,

    #[validate(range(min = 1, message = "page starts at 1"))]
    pub page: Option<u32>,

    #[validate(range(min = 1, message = "per_page must be positive"))]
    pub per_page: Option<u32>,
}

/// بازه اختیاری آیات (`?from=5&to=10`)
#[derive(Debug, Clone, Copy, Default, Deserialize, Validate)]
#[validate(schema(function = "validate_range_order"))]
pub struct AyatRangeQuery {
    #[validate(range(min = 1, message = "from starts at 1"))]
    pub from: Option<u16>,

    #[validate(range(min = 1, message = "to starts at 1"))]
    pub to: Option<u16>,
}

fn validate_range_order(query: &AyatRangeQuery) -> Result<(), ValidationError> {
    match (query.from, query.to) {
        (Some(from), Some(to)) if from > to => {
            Err(ValidationError::new("from_after_to"))
        }
        _ => Ok(()),
    }
}

impl From<AyatRangeQuery> for AyatRange {
    fn from(query: AyatRangeQuery) -> Self {
        Self {
            from: query.from,
            to: query.to,
        }
    }
}

/// فیلترهای لیست دعا
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct DoaQuery {
    #[validate(range(min = 1, message = "page starts at 1"))]
    pub page: Option<u32>,

    #[validate(range(min = 1, message = "per_page must be positive"))]
    pub per_page: Option<u32>,

    #[validate(length(min = 1, max = 100))]
    pub q: Option<String>,

    #[validate(length(min = 1, max = 100))]
    pub group: Option<String>,

    #[validate(length(min = 1, max = 50))]
    pub tag: Option<String>,
}

/// آدرس آیه برای `GET /api/juz/locate`
#[derive(Debug, Clone, Copy, Deserialize, Validate)]
pub struct LocateQuery {
    #[validate(range(min = 1, max = 114, message = "surah must be 1-114"))]
    pub surah: u16,

    #[validate(range(min = 1, message = "ayat starts at 1"))]
    pub ayat: u16,
}
