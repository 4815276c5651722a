//! # DTO‌های جزء
//!
//! خروجی‌های API برای جستجو و navigation بر اساس جزء

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::{AyatResponse, SurahRef};
use crate::juz::{AyatRef, JuzBounds};

// =====================================
// Aggregates
// =====================================
/// آمار یک سوره داخل یک جزء (از آیات واقعا ذخیره شده)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct JuzSurahStat {
    pub surah_number: u16,
    pub name_latin: String,
    pub ayat_count: i64,
    pub first_ayat: i64,
    pub last_ayat: i64,
}

// =====================================
// API Response DTOs
// =====================================
/// خلاصه یک جزء (فقط از جدول ثابت)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JuzSummary {
    pub juz: u8,
    pub start: AyatRef,
    pub end: AyatRef,
}

impl From<&JuzBounds> for JuzSummary {
    fn from(bounds: &JuzBounds) -> Self {
        Self {
            juz: bounds.juz,
            start: bounds.start,
            end: bounds.end,
        }
    }
}

/// جزئیات یک جزء
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JuzDetailResponse {
    pub juz: u8,
    pub start: AyatRef,
    pub end: AyatRef,

    /// بازه آیات ذخیره شده هر سوره داخل این جزء
    pub surahs: Vec<JuzSurahStat>,

    pub total_ayat: i64,

    /// جزء قبلی (برای جزء 1 null)
    pub previous: Option<u8>,

    /// جزء بعدی (برای جزء 30 null)
    pub next: Option<u8>,
}

/// مقصد navigation: یک سوره در یک جزء
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JuzNavTarget {
    pub juz: u8,
    pub surah: SurahRef,
}

/// آیات یک سوره داخل یک جزء به همراه navigation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JuzSurahResponse {
    pub juz: u8,
    pub surah: SurahRef,
    pub ayat: Vec<AyatResponse>,
    pub previous: Option<JuzNavTarget>,
    pub next: Option<JuzNavTarget>,
}

/// جواب `locate`: جزء یک آیه
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JuzLocateResponse {
    pub surah: u16,
    pub ayat: u16,
    pub juz: u8,
}
