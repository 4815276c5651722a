//! # سرویس جزء
//!
//! ترکیب جدول ثابت جزءها با query‌های فقط‌خوندنی روی آیات ذخیره شده.
//!
//! ## Navigation بین سوره‌ها داخل جزء
//!
//! ```text
//! juz 1: [1, 2]      juz 2: [2]      juz 3: [2, 3]
//!            │  next ──► 2 ──► next ──► 2
//!            ▼
//! ```
//!
//! قبلی/بعدی با دو lookup مستقل ساخته میشه: لیست سوره‌های جزء فعلی، و
//! در صورت نیاز لیست سوره‌های جزء مجاور. هیچ state داخلی نگه داشته نمیشه.

use tracing::{instrument, warn};
use validator::Validate;

use crate::{
    database::{AyatRepository, SurahRepository},
    error::{AppError, Result},
    juz::{self, AyatRef},
    models::{
        AyatRange, AyatRangeQuery, JuzDetailResponse, JuzLocateResponse, JuzNavTarget,
        JuzSummary, JuzSurahResponse, LocateQuery,
    },
};

use super::{ensure_ayat, ensure_juz, ensure_surah, Service};

/// سرویس جزء
#[derive(Debug, Clone)]
pub struct JuzService {
    ayat: AyatRepository,
    surahs: SurahRepository,
}

impl Service for JuzService {}

/// یک سوره داخل یک جزء، قبل از گرفتن نام سوره
type JuzPosition = (u8, u16);

impl JuzService {
    #[must_use]
    pub fn new(ayat: AyatRepository, surahs: SurahRepository) -> Self {
        Self { ayat, surahs }
    }

    /// همه ۳۰ جزء با مرزهای اعلام شده
    #[must_use]
    pub fn list(&self) -> Vec<JuzSummary> {
        juz::all_juz().iter().map(JuzSummary::from).collect()
    }

    /// جزء یک آیه
    ///
    /// # Errors
    /// - `Validation` / `BadRequest`: آدرس خارج از متن
    /// - `DataIntegrity`: آدرس معتبر که جدول جزء پوششش نمیده
    pub fn locate(&self, query: LocateQuery) -> Result<JuzLocateResponse> {
        query.validate()?;

        ensure_ayat(query.surah, query.ayat)?;
        let position = AyatRef::new(query.surah, query.ayat);

        let number = juz::juz_of_ayat(query.surah, query.ayat).ok_or_else(|| {
            AppError::DataIntegrity(format!("ayat {} is not covered by the juz table", position))
        })?;

        Ok(JuzLocateResponse {
            surah: query.surah,
            ayat: query.ayat,
            juz: number,
        })
    }

    /// جزئیات یک جزء
    ///
    /// مرزهای اعلام شده از جدول ثابت، و بازه آیات واقعا ذخیره شده از دیتابیس
    #[instrument(skip(self))]
    pub async fn detail(&self, number: u8) -> Result<JuzDetailResponse> {
        ensure_juz(number)?;

        let bounds = juz::juz_bounds(number)
            .ok_or_else(|| AppError::Internal(format!("juz {} missing from table", number)))?;

        let surahs = self.ayat.juz_stats(number).await?;
        let total_ayat = surahs.iter().map(|stat| stat.ayat_count).sum();

        Ok(JuzDetailResponse {
            juz: number,
            start: bounds.start,
            end: bounds.end,
            surahs,
            total_ayat,
            previous: juz::previous_juz(number),
            next: juz::next_juz(number),
        })
    }

    /// آیات یک سوره داخل یک جزء به همراه قبلی/بعدی
    ///
    /// بازه `from..=to` با بازه خود جزء اشتراک گرفته میشه. بازه‌ای که آیه‌ای
    /// نداره لیست خالی برمیگردونه، ولی سوره‌ای که اصلا آیه‌ای با این جزء
    /// نداره `NotFound` هست.
    #[instrument(skip(self))]
    pub async fn surah_in_juz(
        &self,
        number: u8,
        surah: u16,
        range: AyatRangeQuery,
    ) -> Result<JuzSurahResponse> {
        ensure_juz(number)?;
        ensure_surah(surah)?;
        range.validate()?;

        let surahs = self.ayat.surahs_in_juz(number).await?;
        let index = surahs
            .iter()
            .position(|n| *n == surah)
            .ok_or_else(|| AppError::surah_not_in_juz(number, surah))?;

        let previous = self.previous_position(number, &surahs, index).await?;
        let next = self.next_position(number, &surahs, index).await?;

        let ayat = self
            .ayat
            .find_in_juz(number, surah, AyatRange::from(range))
            .await?;

        let current = self.nav_target((number, surah)).await?;
        let previous = match previous {
            Some(position) => Some(self.nav_target(position).await?),
            None => None,
        };
        let next = match next {
            Some(position) => Some(self.nav_target(position).await?),
            None => None,
        };

        Ok(JuzSurahResponse {
            juz: number,
            surah: current.surah,
            ayat: ayat.into_iter().map(Into::into).collect(),
            previous,
            next,
        })
    }

    /// سوره قبلی: داخل همین جزء، وگرنه آخرین سوره جزء قبلی
    async fn previous_position(
        &self,
        number: u8,
        surahs: &[u16],
        index: usize,
    ) -> Result<Option<JuzPosition>> {
        if let Some(prev) = index.checked_sub(1).and_then(|i| surahs.get(i)) {
            return Ok(Some((number, *prev)));
        }

        let Some(prev_juz) = juz::previous_juz(number) else {
            return Ok(None);
        };

        let prev_surahs = self.ayat.surahs_in_juz(prev_juz).await?;
        if prev_surahs.is_empty() {
            warn!(juz = prev_juz, "no stored ayat for adjacent juz");
        }
        Ok(prev_surahs.last().map(|s| (prev_juz, *s)))
    }

    /// سوره بعدی: داخل همین جزء، وگرنه اولین سوره جزء بعدی
    async fn next_position(
        &self,
        number: u8,
        surahs: &[u16],
        index: usize,
    ) -> Result<Option<JuzPosition>> {
        if let Some(next) = surahs.get(index + 1) {
            return Ok(Some((number, *next)));
        }

        let Some(next_juz) = juz::next_juz(number) else {
            return Ok(None);
        };

        let next_surahs = self.ayat.surahs_in_juz(next_juz).await?;
        if next_surahs.is_empty() {
            warn!(juz = next_juz, "no stored ayat for adjacent juz");
        }
        Ok(next_surahs.first().map(|s| (next_juz, *s)))
    }

    async fn nav_target(&self, (number, surah): JuzPosition) -> Result<JuzNavTarget> {
        // کلید خارجی ayat -> surah تضمین میکنه این ردیف وجود داره
        let surah = self.surahs.find_ref(surah).await?.ok_or_else(|| {
            AppError::DataIntegrity(format!("ayat stored for missing surah {}", surah))
        })?;

        Ok(JuzNavTarget { juz: number, surah })
    }
}
