//! # مدل سوره
//!
//! Entity و DTO‌های مربوط به سوره

use serde::{Deserialize, Serialize};
use sqlx::{types::Json, FromRow};

use super::{AudioLinks, AyatResponse};
use crate::juz;

// =====================================
// Surah Entity
// =====================================
/// Entity سوره
///
/// # مفاهیم:
/// - `#[derive(FromRow)]`: تبدیل خودکار از ردیف دیتابیس
/// - `Json<T>`: ستون TEXT که محتواش JSON هست
#[derive(Debug, Clone, FromRow)]
pub struct Surah {
    /// شماره سوره (1..=114)
    pub number: u16,

    /// نام عربی
    pub name: String,

    /// نام لاتین
    pub name_latin: String,

    /// تعداد آیات
    pub verse_count: u16,

    /// محل نزول (Mekah / Madinah)
    pub revelation_place: String,

    /// معنی نام
    pub meaning: String,

    /// توضیح کامل
    pub description: String,

    /// صوت کامل سوره (اختیاری)
    pub audio: Option<Json<AudioLinks>>,
}

impl Surah {
    /// جزءهایی که این سوره در اونها قرار داره
    #[must_use]
    pub fn juz(&self) -> Vec<u8> {
        juz::juz_of_surah(self.number, self.verse_count)
    }
}

// =====================================
// Lightweight reference
// =====================================
/// مرجع سبک برای navigation (قبلی/بعدی)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct SurahRef {
    pub number: u16,
    pub name: String,
    pub name_latin: String,
}

impl From<&Surah> for SurahRef {
    fn from(surah: &Surah) -> Self {
        Self {
            number: surah.number,
            name: surah.name.clone(),
            name_latin: surah.name_latin.clone(),
        }
    }
}

// =====================================
// API Response DTOs
// =====================================
/// پاسخ سوره در لیست
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurahResponse {
    pub number: u16,
    pub name: String,
    pub name_latin: String,
    pub verse_count: u16,
    pub revelation_place: String,
    pub meaning: String,
    pub description: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio: Option<AudioLinks>,

    /// جزءهایی که سوره در اونها قرار داره (صعودی)
    pub juz: Vec<u8>,
}

impl From<Surah> for SurahResponse {
    fn from(surah: Surah) -> Self {
        let juz = surah.juz();
        Self {
            number: surah.number,
            name: surah.name,
            name_latin: surah.name_latin,
            verse_count: surah.verse_count,
            revelation_place: surah.revelation_place,
            meaning: surah.meaning,
            description: surah.description,
            audio: surah.audio.map(|Json(links)| links),
            juz,
        }
    }
}

/// پاسخ کامل سوره به همراه آیات و سوره قبلی/بعدی
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurahDetailResponse {
    #[serde(flatten)]
    pub surah: SurahResponse,

    pub ayat: Vec<AyatResponse>,

    /// سوره قبلی (برای سوره 1 وجود نداره)
    pub previous: Option<SurahRef>,

    /// سوره بعدی (برای سوره 114 وجود نداره)
    pub next: Option<SurahRef>,
}
