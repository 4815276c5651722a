//! # مدل آیه

use serde::{Deserialize, Serialize};
use sqlx::{types::Json, FromRow};

use super::AudioLinks;

// =====================================
// Ayat Entity
// =====================================
/// Entity آیه
///
/// کلید طبیعی `(surah_number, ayat_number)` هست؛ `juz` یک بار در import
/// از جدول ثابت جزءها حساب میشه و هیچوقت جداگانه ویرایش نمیشه.
#[derive(Debug, Clone, FromRow)]
pub struct Ayat {
    pub id: i64,
    pub surah_number: u16,
    pub ayat_number: u16,
    pub juz: u8,
    pub text_arab: String,
    pub text_latin: String,
    pub translation: String,
    pub audio: Option<Json<AudioLinks>>,
}

// =====================================
// API Response DTOs
// =====================================
/// پاسخ آیه
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AyatResponse {
    pub surah_number: u16,
    pub ayat_number: u16,
    pub juz: u8,
    pub text_arab: String,
    pub text_latin: String,
    pub translation: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio: Option<AudioLinks>,
}

impl From<Ayat> for AyatResponse {
    fn from(ayat: Ayat) -> Self {
        Self {
            surah_number: ayat.surah_number,
            ayat_number: ayat.ayat_number,
            juz: ayat.juz,
            text_arab: ayat.text_arab,
            text_latin: ayat.text_latin,
            translation: ayat.translation,
            audio: ayat.audio.map(|Json(links)| links),
        }
    }
}

// =====================================
// Create Ayat DTO
// =====================================
/// داده برای ذخیره آیه (داخلی، توسط importer)
#[derive(Debug, Clone)]
pub struct CreateAyat {
    pub surah_number: u16,
    pub ayat_number: u16,
    pub juz: u8,
    pub text_arab: String,
    pub text_latin: String,
    pub translation: String,
    pub audio: Option<AudioLinks>,
}
