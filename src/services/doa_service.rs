//! # سرویس دعا

use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::{
    config::Config,
    database::{DoaFilter, DoaRepository, Repository},
    error::{OptionExt, Result},
    models::{DoaGroup, DoaQuery, DoaResponse, PaginatedResult},
    utils,
};

use super::{pagination, total, Service};

/// سرویس دعاها
#[derive(Debug, Clone)]
pub struct DoaService {
    doa: DoaRepository,
    config: Arc<Config>,
}

impl Service for DoaService {}

impl DoaService {
    #[must_use]
    pub fn new(doa: DoaRepository, config: Arc<Config>) -> Self {
        Self { doa, config }
    }

    /// لیست فیلتر شده و صفحه‌بندی شده
    #[instrument(skip(self))]
    pub async fn list(&self, query: DoaQuery) -> Result<PaginatedResult<DoaResponse>> {
        query.validate()?;

        let page = pagination(&self.config, query.page, query.per_page);
        let filter = DoaFilter {
            pattern: query.q.as_deref().and_then(utils::like_pattern),
            group: query.group.map(|g| utils::clean_whitespace(&g)),
            tag: query.tag.map(|t| utils::clean_whitespace(&t)),
        };

        let total_items = self.doa.count_filtered(&filter).await?;
        let doa = self.doa.list(&filter, &page).await?;

        let data = doa.into_iter().map(DoaResponse::from).collect();
        Ok(PaginatedResult::new(data, &page, total(total_items)))
    }

    /// یک دعا با شناسه منبع
    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> Result<DoaResponse> {
        self.doa
            .find_by_id(&id)
            .await?
            .map(DoaResponse::from)
            .ok_or_not_found(format!("Doa {} not found", id))
    }

    /// گروه‌های دعا
    pub async fn groups(&self) -> Result<Vec<DoaGroup>> {
        self.doa.groups().await
    }
}
