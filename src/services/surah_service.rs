//! # سرویس سوره
//!
//! لیست سوره‌ها (با جزءهای هر سوره) و جزئیات یک سوره با آیاتش

use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::{
    config::Config,
    database::{AyatRepository, Repository, SurahRepository},
    error::{AppError, Result},
    models::{
        AyatRangeQuery, PageQuery, PaginatedResult, SurahDetailResponse, SurahResponse,
    },
    utils,
};

use super::{ensure_surah, pagination, total, Service};

/// سرویس سوره‌ها
#[derive(Debug, Clone)]
pub struct SurahService {
    surahs: SurahRepository,
    ayat: AyatRepository,
    config: Arc<Config>,
}

impl Service for SurahService {}

impl SurahService {
    #[must_use]
    pub fn new(surahs: SurahRepository, ayat: AyatRepository, config: Arc<Config>) -> Self {
        Self { surahs, ayat, config }
    }

    /// لیست صفحه‌بندی شده سوره‌ها
    ///
    /// هر سوره با لیست جزءهایی که در اونها قرار داره برمیگرده
    #[instrument(skip(self))]
    pub async fn list(&self, query: PageQuery) -> Result<PaginatedResult<SurahResponse>> {
        query.validate()?;

        let page = pagination(&self.config, query.page, query.per_page);
        let pattern = query.q.as_deref().and_then(utils::like_pattern);

        let total_items = self.surahs.count_matching(pattern.as_deref()).await?;
        let surahs = self.surahs.list(pattern.as_deref(), &page).await?;

        let data = surahs.into_iter().map(SurahResponse::from).collect();
        Ok(PaginatedResult::new(data, &page, total(total_items)))
    }

    /// جزئیات یک سوره به همراه آیات و سوره قبلی/بعدی
    ///
    /// # Errors
    /// - `BadRequest`: شماره خارج از 1..=114 یا بازه نامعتبر
    /// - `NotFound`: سوره در دیتابیس نیست
    #[instrument(skip(self))]
    pub async fn detail(&self, number: u16, range: AyatRangeQuery) -> Result<SurahDetailResponse> {
        ensure_surah(number)?;
        range.validate()?;

        let surah = self.surahs
            .find_by_id(&number)
            .await?
            .ok_or_else(|| AppError::surah_not_found(number))?;

        let ayat = self.ayat.find_by_surah(number, range.into()).await?;
        let (previous, next) = self.surahs.neighbours(number).await?;

        Ok(SurahDetailResponse {
            surah: surah.into(),
            ayat: ayat.into_iter().map(Into::into).collect(),
            previous,
            next,
        })
    }
}
