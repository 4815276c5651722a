//! # ماژول مدل‌ها (Domain Models)
//!
//! این ماژول مدل‌های داده برنامه رو تعریف میکنه.
//!
//! ## مفاهیم Rust:
//! - **Structs**: ساختار داده
//! - **FromRow**: تبدیل از ردیف دیتابیس
//! - **Serialize/Deserialize**: تبدیل JSON
//! - **Validation**: اعتبارسنجی داده
//!
//! ## تفاوت انواع مدل:
//! - **Entity**: داده‌ای که در دیتابیس ذخیره میشه (`Surah`, `Ayat`, ...)
//! - **DTO**: برای ارسال/دریافت از API (`SurahResponse`, `PageQuery`, ...)

mod surah;
mod ayat;
mod juz;
mod tafsir;
mod doa;
mod dto;

// Re-export همه مدل‌ها
pub use surah::*;
pub use ayat::*;
pub use juz::*;
pub use tafsir::*;
pub use doa::*;
pub use dto::*;

use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};

/// لینک‌های صوتی به تفکیک قاری (`"01" -> url`)
pub type AudioLinks = BTreeMap<String, String>;

// =====================================
// Pagination
// =====================================
/// پارامترهای صفحه‌بندی بعد از اعمال پیش‌فرض‌ها و سقف
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// شماره صفحه (از 1 شروع میشه)
    pub page: u32,

    /// تعداد آیتم در صفحه
    pub per_page: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: 20,
        }
    }
}

impl Pagination {
    /// ساخت از query string
    ///
    /// `per_page` به `max_per_page` محدود میشه و صفحه صفر به 1 تبدیل میشه
    #[must_use]
    pub fn resolve(
        page: Option<u32>,
        per_page: Option<u32>,
        default_per_page: u32,
        max_per_page: u32,
    ) -> Self {
        Self {
            page: page.unwrap_or(1).max(1),
            per_page: per_page.unwrap_or(default_per_page).clamp(1, max_per_page.max(1)),
        }
    }

    /// محاسبه offset برای SQL
    #[must_use]
    pub fn offset(&self) -> i64 {
        i64::from(self.page.saturating_sub(1)) * i64::from(self.per_page)
    }

    /// محاسبه limit برای SQL
    #[must_use]
    pub fn limit(&self) -> i64 {
        i64::from(self.per_page)
    }
}

/// نتیجه صفحه‌بندی شده
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResult<T> {
    /// داده‌ها
    pub data: Vec<T>,

    /// اطلاعات صفحه‌بندی
    pub pagination: PaginationInfo,
}

/// اطلاعات صفحه‌بندی
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationInfo {
    pub current_page: u32,
    pub per_page: u32,
    pub total_items: u64,
    pub total_pages: u64,
    pub has_next: bool,
    pub has_prev: bool,
}

impl PaginationInfo {
    /// ساخت اطلاعات صفحه‌بندی
    #[must_use]
    pub fn new(pagination: &Pagination, total_items: u64) -> Self {
        let total_pages = total_items.div_ceil(u64::from(pagination.per_page.max(1)));

        Self {
            current_page: pagination.page,
            per_page: pagination.per_page,
            total_items,
            total_pages,
            has_next: u64::from(pagination.page) < total_pages,
            has_prev: pagination.page > 1,
        }
    }
}

impl<T> PaginatedResult<T> {
    /// ساخت نتیجه صفحه‌بندی شده
    pub fn new(data: Vec<T>, pagination: &Pagination, total_items: u64) -> Self {
        Self {
            data,
            pagination: PaginationInfo::new(pagination, total_items),
        }
    }
}

// =====================================
// Ayat Range
// =====================================
/// بازه اختیاری آیات داخل یک سوره (هر دو سر inclusive)
///
/// اگه فقط یک سر داده بشه، سر دیگه محدودیتی نداره
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AyatRange {
    pub from: Option<u16>,
    pub to: Option<u16>,
}

impl AyatRange {
    /// مقادیر برای bind در SQL (سر خالی = بدون محدودیت)
    #[must_use]
    pub fn sql_bounds(&self) -> (i64, i64) {
        (
            i64::from(self.from.unwrap_or(1)),
            self.to.map_or(i64::MAX, i64::from),
        )
    }
}
