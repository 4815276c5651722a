//! # مدل تفسیر

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::{SurahRef, SurahResponse};

/// Entity تفسیر؛ یک ردیف برای هر آیه
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Tafsir {
    pub surah_number: u16,
    pub ayat_number: u16,
    pub text: String,
}

/// تفسیر کامل یک سوره
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurahTafsirResponse {
    #[serde(flatten)]
    pub surah: SurahResponse,

    pub tafsir: Vec<Tafsir>,
    pub previous: Option<SurahRef>,
    pub next: Option<SurahRef>,
}
