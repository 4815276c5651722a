//! # سرویس آیه
//!
//! یک آیه و جستجوی متنی

use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::{
    config::Config,
    database::{AyatRepository, Repository},
    error::{AppError, Result},
    juz::AyatRef,
    models::{AyatResponse, PaginatedResult, SearchQuery},
    utils,
};

use super::{ensure_ayat, ensure_surah, pagination, total, Service};

/// سرویس آیات
#[derive(Debug, Clone)]
pub struct AyatService {
    ayat: AyatRepository,
    config: Arc<Config>,
}

impl Service for AyatService {}

impl AyatService {
    #[must_use]
    pub fn new(ayat: AyatRepository, config: Arc<Config>) -> Self {
        Self { ayat, config }
    }

    /// یک آیه با جزءش
    #[instrument(skip(self))]
    pub async fn get(&self, surah: u16, ayat: u16) -> Result<AyatResponse> {
        ensure_surah(surah)?;
        ensure_ayat(surah, ayat)?;

        self.ayat
            .find_by_id(&AyatRef::new(surah, ayat))
            .await?
            .map(AyatResponse::from)
            .ok_or_else(|| AppError::ayat_not_found(surah, ayat))
    }

    /// جستجوی substring در ترجمه و transliteration
    #[instrument(skip(self))]
    pub async fn search(&self, query: SearchQuery) -> Result<PaginatedResult<AyatResponse>> {
        query.validate()?;

        let pattern = utils::like_pattern(&query.q)
            .ok_or_else(|| AppError::BadRequest("search query is empty".to_string()))?;
        let page = pagination(&self.config, query.page, query.per_page);

        let total_items = self.ayat.count_search(&pattern).await?;
        let ayat = self.ayat.search(&pattern, &page).await?;

        let data = ayat.into_iter().map(AyatResponse::from).collect();
        Ok(PaginatedResult::new(data, &page, total(total_items)))
    }
}
