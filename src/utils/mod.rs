//! # ماژول توابع کمکی (Utilities)
//!
//! توابع کوچک و pure که در سرویس‌ها و importer استفاده میشن.

// =====================================
// Search helpers
// =====================================
/// حداکثر طول عبارت جستجو بعد از تمیز کردن
pub const MAX_SEARCH_LENGTH: usize = 100;

/// تمیز کردن whitespace‌های اضافی
///
/// # مثال
/// ```rust
/// use quran_api::utils::clean_whitespace;
///
/// assert_eq!(clean_whitespace("  al   fatihah "), "al fatihah");
/// ```
#[must_use]
pub fn clean_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// ساخت الگوی LIKE برای جستجوی substring
///
/// کاراکترهای `%` و `_` و `\` escape میشن تا ورودی کاربر wildcard نباشه؛
/// query‌ها باید با `ESCAPE '\'` نوشته بشن. برای ورودی خالی `None` برمیگرده.
///
/// # مثال
/// ```rust
/// use quran_api::utils::like_pattern;
///
/// assert_eq!(like_pattern("rahman").as_deref(), Some("%rahman%"));
/// assert_eq!(like_pattern("100%").as_deref(), Some("%100\\%%"));
/// assert_eq!(like_pattern("   "), None);
/// ```
#[must_use]
pub fn like_pattern(query: &str) -> Option<String> {
    let cleaned = clean_whitespace(query);
    if cleaned.is_empty() {
        return None;
    }

    let mut pattern = String::with_capacity(cleaned.len() + 2);
    pattern.push('%');
    for c in cleaned.chars().take(MAX_SEARCH_LENGTH) {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');

    Some(pattern)
}

// =====================================
// String Utilities
// =====================================
/// خلاصه کردن متن طولانی (برای لاگ‌ها)
///
/// Unicode-safe: روی مرز کاراکتر بریده میشه
#[must_use]
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let truncated: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{}...", truncated)
}
