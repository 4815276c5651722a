//! # Middleware
//!
//! Middleware‌های سفارشی برای پردازش request/response
//!
//! ## مفاهیم:
//! - **Middleware**: کد که قبل/بعد از handler اجرا میشه
//! - `axum::middleware::from_fn`: ساخت layer از یک async fn

use axum::{
    body::Body,
    extract::FromRequestParts,
    http::{HeaderValue, Request},
    middleware::Next,
    response::IntoResponse,
};
use std::time::Instant;
use tracing::{info, warn};

use super::extractors::RequestId;

// =====================================
// Request Timing Middleware
// =====================================
/// اندازه‌گیری و لاگ زمان پردازش request
pub async fn request_timing(
    request: Request<Body>,
    next: Next,
) -> impl IntoResponse {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let start = Instant::now();
    let response = next.run(request).await;
    let duration = start.elapsed();

    if response.status().is_server_error() {
        warn!(
            method = %method,
            uri = %uri,
            status = %response.status(),
            duration_ms = %duration.as_millis(),
            "Request failed"
        );
    } else {
        info!(
            method = %method,
            uri = %uri,
            status = %response.status(),
            duration_ms = %duration.as_millis(),
            "Request completed"
        );
    }

    response
}

// =====================================
// Request ID Middleware
// =====================================
/// اضافه کردن `X-Request-Id` به request و response
///
/// اگه کلاینت id فرستاده باشه همون استفاده میشه
pub async fn request_id(
    request: Request<Body>,
    next: Next,
) -> impl IntoResponse {
    let (mut parts, body) = request.into_parts();
    let RequestId(id) = match RequestId::from_request_parts(&mut parts, &()).await {
        Ok(id) => id,
        Err(never) => match never {},
    };

    // id نامعتبر (کاراکتر غیر ASCII) با یه id جدید جایگزین میشه
    let header = HeaderValue::from_str(&id)
        .or_else(|_| HeaderValue::from_str(&RequestId::generate().0));

    let mut request = Request::from_parts(parts, body);
    if let Ok(value) = &header {
        request.headers_mut().insert(RequestId::HEADER_NAME, value.clone());
    }

    let mut response = next.run(request).await;
    if let Ok(value) = header {
        response.headers_mut().insert(RequestId::HEADER_NAME, value);
    }

    response
}
