//! # Quran API Library
//!
//! API فقط‌خوندنی برای متن قرآن: سوره، آیه، جزء، تفسیر و دعا.
//!
//! ## ساختار پروژه
//!
//! ```text
//! src/
//! ├── lib.rs          # نقطه ورود کتابخانه
//! ├── main.rs         # سرور HTTP
//! ├── bin/import.rs   # ابزار import یک‌باره
//! ├── config/         # مدیریت تنظیمات
//! ├── error/          # تعریف خطاها
//! ├── juz/            # جدول ثابت ۳۰ جزء و محاسبات خالص
//! ├── database/       # لایه دیتابیس
//! ├── models/         # مدل‌های داده
//! ├── services/       # منطق کسب‌وکار
//! ├── import/         # تبدیل اسناد JSON منبع به ردیف‌های دیتابیس
//! ├── api/            # لایه API
//! └── utils/          # توابع کمکی
//! ```
//!
//! ## مثال استفاده
//!
//! ```rust
//! use quran_api::juz::juz_of_ayat;
//!
//! assert_eq!(juz_of_ayat(2, 141), Some(1));
//! assert_eq!(juz_of_ayat(2, 142), Some(2));
//! ```

// =====================================
// Module Declarations
// =====================================

/// ماژول مدیریت تنظیمات برنامه
pub mod config;

/// ماژول تعریف و مدیریت خطاها
pub mod error;

/// جدول جزء‌ها
pub mod juz;

/// ماژول ارتباط با دیتابیس
pub mod database;

/// ماژول مدل‌های داده (Domain Models)
pub mod models;

/// ماژول سرویس‌ها (Business Logic)
pub mod services;

/// import داده منبع
pub mod import;

/// ماژول API و HTTP Handlers
pub mod api;

/// ماژول توابع کمکی
pub mod utils;

// =====================================
// Re-exports
// =====================================

/// نتیجه عملیات با خطای سفارشی ما
pub use error::Result;

/// خطای اصلی برنامه
pub use error::AppError;

// =====================================
// Prelude Module
// =====================================
/// ماژول prelude برای import راحت‌تر آیتم‌های پرکاربرد
///
/// ```rust
/// use quran_api::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::Config;
    pub use crate::database::Database;
    pub use crate::error::{AppError, Result};
    pub use crate::juz::{AyatRef, JuzBounds};
    pub use crate::models::*;
    pub use crate::services::*;
}
