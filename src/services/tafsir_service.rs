//! # سرویس تفسیر

use tracing::instrument;
use validator::Validate;

use crate::{
    database::{Repository, SurahRepository, TafsirRepository},
    error::{AppError, Result},
    juz::AyatRef,
    models::{AyatRangeQuery, SurahTafsirResponse, Tafsir},
};

use super::{ensure_ayat, ensure_surah, Service};

/// سرویس تفسیر
#[derive(Debug, Clone)]
pub struct TafsirService {
    tafsir: TafsirRepository,
    surahs: SurahRepository,
}

impl Service for TafsirService {}

impl TafsirService {
    #[must_use]
    pub fn new(tafsir: TafsirRepository, surahs: SurahRepository) -> Self {
        Self { tafsir, surahs }
    }

    /// تفسیر یک سوره به همراه اطلاعات سوره و سوره قبلی/بعدی
    #[instrument(skip(self))]
    pub async fn for_surah(&self, number: u16, range: AyatRangeQuery) -> Result<SurahTafsirResponse> {
        ensure_surah(number)?;
        range.validate()?;

        let surah = self.surahs
            .find_by_id(&number)
            .await?
            .ok_or_else(|| AppError::surah_not_found(number))?;

        let tafsir = self.tafsir.find_by_surah(number, range.into()).await?;
        let (previous, next) = self.surahs.neighbours(number).await?;

        Ok(SurahTafsirResponse {
            surah: surah.into(),
            tafsir,
            previous,
            next,
        })
    }

    /// تفسیر یک آیه
    #[instrument(skip(self))]
    pub async fn for_ayat(&self, surah: u16, ayat: u16) -> Result<Tafsir> {
        ensure_surah(surah)?;
        ensure_ayat(surah, ayat)?;

        self.tafsir
            .find_by_id(&AyatRef::new(surah, ayat))
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Tafsir for {}:{} not found", surah, ayat)))
    }
}
