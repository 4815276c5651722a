//! # Custom Extractors
//!
//! Extractor‌های سفارشی برای استخراج داده از request
//!
//! ## مفاهیم Rust + Axum:
//! - **FromRequestParts**: trait برای ساخت extractor
//! - **Rejection**: نوع خطا برای extractors
//!
//! rejection‌های پیش‌فرض axum متن ساده برمیگردونن؛ اینجا همه به
//! `AppError` تبدیل میشن تا پاسخ خطا همیشه JSON باشه.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path, Query},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::AppError;

// =====================================
// Query with Validation
// =====================================
/// استخراج query string با اعتبارسنجی خودکار
///
/// # استفاده:
/// ```rust,ignore
/// async fn handler(ValidatedQuery(query): ValidatedQuery<PageQuery>) -> ... {
///     // query حتما valid هست
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ValidatedQuery<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for ValidatedQuery<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(data) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::BadRequest(format!("Invalid query string: {}", e.body_text())))?;

        data.validate()?;

        Ok(ValidatedQuery(data))
    }
}

// =====================================
// Path params
// =====================================
/// مثل `Path<T>` ولی با پاسخ خطای JSON
///
/// مثلا `/api/surah/abc` به جای متن ساده یک `400` با بدنه JSON میده
#[derive(Debug, Clone)]
pub struct ApiPath<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for ApiPath<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::BadRequest(format!("Invalid path: {}", e.body_text())))?;

        Ok(ApiPath(value))
    }
}

// =====================================
// Request ID Extractor
// =====================================
/// خوندن یا تولید Request ID
#[derive(Debug, Clone)]
pub struct RequestId(pub String);

impl RequestId {
    /// Header name برای request ID
    pub const HEADER_NAME: &'static str = "x-request-id";

    /// تولید id جدید
    #[must_use]
    pub fn generate() -> Self {
        Self(nanoid::nanoid!(12))
    }
}

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for RequestId {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let request_id = parts
            .headers
            .get(Self::HEADER_NAME)
            .and_then(|v| v.to_str().ok())
            .map(|v| RequestId(v.to_string()))
            .unwrap_or_else(RequestId::generate);

        Ok(request_id)
    }
}
