//! # ماژول مدیریت خطاها (Error Handling)
//!
//! این ماژول سیستم مدیریت خطای برنامه رو تعریف میکنه.
//!
//! ## مفاهیم Rust:
//! - **Custom Error Types**: تعریف نوع خطای سفارشی
//! - **thiserror**: derive macro برای Error trait
//! - **From Trait**: تبدیل خودکار نوع‌ها
//! - **Result Type Alias**: alias برای ساده‌تر شدن کد
//! - **Error Propagation**: انتشار خطا با `?`
//!
//! ## دسته‌بندی خطاها
//!
//! - ورودی نامعتبر (سوره خارج از 1..114، جزء خارج از 1..30): 400/422
//! - پیدا نشد (ورودی درسته ولی داده‌ای نیست): 404
//! - خطای ذخیره‌سازی: بدون تغییر به بالا منتقل میشه (500)
//! - نقض یکپارچگی داده در زمان import: 500

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

// =====================================
// Result Type Alias
// =====================================
/// نوع Result سفارشی برنامه
///
/// به جای نوشتن `Result<Surah, AppError>` میتونیم بنویسیم `Result<Surah>`
pub type Result<T, E = AppError> = std::result::Result<T, E>;

// =====================================
// Custom Error Enum
// =====================================
/// خطای اصلی برنامه
///
/// # مفاهیم:
/// - `#[derive(Error)]`: از thiserror برای پیاده‌سازی Error trait
/// - `#[error("...")]`: پیام خطا برای هر نوع
/// - `#[from]`: تبدیل خودکار از نوع‌های دیگه
#[derive(Debug, Error)]
pub enum AppError {
    // ----------------------------------------
    // خطاهای کاربر (4xx)
    // ----------------------------------------

    /// درخواست نامعتبر - 400
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// پیدا نشد - 404
    #[error("Not found: {0}")]
    NotFound(String),

    /// خطای اعتبارسنجی - 422
    #[error("Validation error: {0}")]
    Validation(String),

    // ----------------------------------------
    // خطاهای سرور (5xx)
    // ----------------------------------------

    /// نقض قواعد متن (تعداد آیات، پوشش جزء، ...) - 500
    #[error("Data integrity violation: {0}")]
    DataIntegrity(String),

    /// خطای داخلی سرور - 500
    #[error("Internal server error: {0}")]
    Internal(String),

    /// خطای سرور
    #[error("Server error: {0}")]
    Server(String),

    /// خطای تنظیمات
    #[error("Configuration error: {0}")]
    Config(String),

    // ----------------------------------------
    // خطاهای تبدیل شده از کتابخانه‌ها
    // ----------------------------------------

    /// خطای دیتابیس
    /// `#[from]` یعنی sqlx::Error خودکار به این تبدیل میشه
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// خطای migration
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// خطای IO
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// خطای JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// خطای خوندن تنظیمات
    #[error("Configuration error: {0}")]
    ConfigSource(#[from] config::ConfigError),
}

impl AppError {
    /// گرفتن HTTP status code متناسب با خطا
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            // 4xx Client Errors
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,

            // 5xx Server Errors
            Self::DataIntegrity(_)
            | Self::Internal(_)
            | Self::Server(_)
            | Self::Config(_)
            | Self::Database(_)
            | Self::Migration(_)
            | Self::Io(_)
            | Self::Json(_)
            | Self::ConfigSource(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// آیا این یه خطای سرور هست؟
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        self.status_code().is_server_error()
    }

    /// ساخت خطای Not Found برای سوره
    #[must_use]
    pub fn surah_not_found(number: u16) -> Self {
        Self::NotFound(format!("Surah {} not found", number))
    }

    /// ساخت خطای Not Found برای آیه
    #[must_use]
    pub fn ayat_not_found(surah: u16, ayat: u16) -> Self {
        Self::NotFound(format!("Ayat {}:{} not found", surah, ayat))
    }

    /// سوره‌ای که داخل جزء ذخیره نشده
    #[must_use]
    pub fn surah_not_in_juz(juz: u8, surah: u16) -> Self {
        Self::NotFound(format!("Surah {} has no ayat in juz {}", surah, juz))
    }
}

// =====================================
// Error Response DTO
// =====================================
/// ساختار پاسخ خطا در API
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// کد خطا (مثلا "Not Found")
    pub error: String,

    /// پیام خطا
    pub message: String,

    /// کد وضعیت HTTP
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
}

impl ErrorResponse {
    /// ساخت پاسخ خطای جدید
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            status_code: None,
        }
    }

    /// اضافه کردن کد وضعیت
    #[must_use]
    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status_code = Some(status.as_u16());
        self
    }
}

// =====================================
// IntoResponse Implementation
// =====================================
/// تبدیل AppError به Response HTTP
///
/// این باعث میشه بتونیم AppError رو مستقیم از handler برگردونیم
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // جزئیات خطای سرور فقط در لاگ میاد، نه در پاسخ
        let message = if self.is_server_error() {
            error!(error = %self, "Server error occurred");
            "An internal error occurred".to_string()
        } else {
            self.to_string()
        };

        let error_response = ErrorResponse::new(
            status.canonical_reason().unwrap_or("Error"),
            message,
        )
        .with_status(status);

        (status, Json(error_response)).into_response()
    }
}

// =====================================
// From Implementations
// =====================================
// تبدیل validator error
impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(err.to_string())
    }
}

// =====================================
// Option Extensions
// =====================================
/// Extension trait برای Option
pub trait OptionExt<T> {
    /// تبدیل None به AppError::NotFound
    fn ok_or_not_found(self, message: impl Into<String>) -> Result<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self, message: impl Into<String>) -> Result<T> {
        self.ok_or_else(|| AppError::NotFound(message.into()))
    }
}
