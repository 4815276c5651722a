//! # Repository Pattern
//!
//! این فایل الگوی Repository رو پیاده‌سازی میکنه.
//!
//! ## Repository Pattern چیه؟
//! یه لایه انتزاعی بین منطق برنامه و دیتابیس.
//! - سرویس‌ها نمیدونن داده کجا ذخیره میشه
//! - همه query‌ها فقط خوندنی هستن؛ نوشتن فقط توسط importer انجام میشه
//!
//! ## مفاهیم Rust:
//! - **Traits**: تعریف interface
//! - **async_trait**: امکان async در traits
//! - **Associated Types**: نوع‌های مرتبط با trait

use async_trait::async_trait;
use crate::error::Result;

// =====================================
// Base Repository Trait
// =====================================
/// Trait پایه برای همه Repository‌ها
///
/// # مفاهیم:
/// - `#[async_trait]`: macro برای async در traits
/// - `Send + Sync`: امکان ارسال بین threads
/// - Associated Types: `type Entity` و `type Id`
#[async_trait]
pub trait Repository: Send + Sync {
    /// نوع Entity که این repository باهاش کار میکنه
    type Entity: Send + Sync;

    /// نوع شناسه (کلید طبیعی)
    type Id: Send + Sync;

    /// پیدا کردن با شناسه
    async fn find_by_id(&self, id: &Self::Id) -> Result<Option<Self::Entity>>;

    /// شمارش کل
    async fn count(&self) -> Result<i64>;
}

// =====================================
// Surah Repository
// =====================================
use super::Database;
use crate::juz::AyatRef;
use crate::models::{
    Ayat, AyatRange, Doa, DoaGroup, JuzSurahStat, Pagination, Surah, SurahRef, Tafsir,
};

/// Repository سوره‌ها
#[derive(Debug, Clone)]
pub struct SurahRepository {
    db: Database,
}

impl SurahRepository {
    /// ساخت repository جدید
    #[must_use]
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// لیست سوره‌ها به ترتیب شماره
    ///
    /// # Arguments
    /// * `pattern` - الگوی LIKE (از قبل escape شده) روی نام لاتین و معنی
    pub async fn list(&self, pattern: Option<&str>, page: &Pagination) -> Result<Vec<Surah>> {
        let surahs = sqlx::query_as::<_, Surah>(
            r#"
            SELECT number, name, name_latin, verse_count, revelation_place,
                   meaning, description, audio
            FROM surah
            WHERE ?1 IS NULL
               OR name_latin LIKE ?1 ESCAPE '\'
               OR meaning LIKE ?1 ESCAPE '\'
            ORDER BY number
            LIMIT ?2 OFFSET ?3
            "#
        )
        .bind(pattern)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(self.db.pool())
        .await?;

        Ok(surahs)
    }

    /// تعداد سوره‌هایی که با الگو match میشن
    pub async fn count_matching(&self, pattern: Option<&str>) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*) FROM surah
            WHERE ?1 IS NULL
               OR name_latin LIKE ?1 ESCAPE '\'
               OR meaning LIKE ?1 ESCAPE '\'
            "#
        )
        .bind(pattern)
        .fetch_one(self.db.pool())
        .await?;

        Ok(count)
    }

    /// مرجع سبک یک سوره (شماره، نام، نام لاتین)
    pub async fn find_ref(&self, number: u16) -> Result<Option<SurahRef>> {
        let surah = sqlx::query_as::<_, SurahRef>(
            "SELECT number, name, name_latin FROM surah WHERE number = ?"
        )
        .bind(number)
        .fetch_optional(self.db.pool())
        .await?;

        Ok(surah)
    }

    /// سوره قبلی و بعدی بر اساس شماره
    pub async fn neighbours(&self, number: u16) -> Result<(Option<SurahRef>, Option<SurahRef>)> {
        let previous = match number.checked_sub(1) {
            Some(prev) if prev > 0 => self.find_ref(prev).await?,
            _ => None,
        };
        let next = self.find_ref(number + 1).await?;

        Ok((previous, next))
    }
}

#[async_trait]
impl Repository for SurahRepository {
    type Entity = Surah;
    type Id = u16;

    async fn find_by_id(&self, number: &u16) -> Result<Option<Surah>> {
        let surah = sqlx::query_as::<_, Surah>(
            r#"
            SELECT number, name, name_latin, verse_count, revelation_place,
                   meaning, description, audio
            FROM surah
            WHERE number = ?
            "#
        )
        .bind(*number)
        .fetch_optional(self.db.pool())
        .await?;

        Ok(surah)
    }

    async fn count(&self) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM surah")
            .fetch_one(self.db.pool())
            .await?;

        Ok(count)
    }
}

// =====================================
// Ayat Repository
// =====================================
/// Repository آیات، شامل query‌های گروهی جزء
#[derive(Debug, Clone)]
pub struct AyatRepository {
    db: Database,
}

impl AyatRepository {
    #[must_use]
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// آیات یک سوره (با بازه اختیاری) به ترتیب شماره آیه
    pub async fn find_by_surah(&self, surah: u16, range: AyatRange) -> Result<Vec<Ayat>> {
        let (from, to) = range.sql_bounds();

        let ayat = sqlx::query_as::<_, Ayat>(
            r#"
            SELECT id, surah_number, ayat_number, juz, text_arab, text_latin,
                   translation, audio
            FROM ayat
            WHERE surah_number = ? AND ayat_number BETWEEN ? AND ?
            ORDER BY ayat_number
            "#
        )
        .bind(surah)
        .bind(from)
        .bind(to)
        .fetch_all(self.db.pool())
        .await?;

        Ok(ayat)
    }

    /// آیات یک سوره که هم داخل جزء و هم داخل بازه هستن
    pub async fn find_in_juz(&self, juz: u8, surah: u16, range: AyatRange) -> Result<Vec<Ayat>> {
        let (from, to) = range.sql_bounds();

        let ayat = sqlx::query_as::<_, Ayat>(
            r#"
            SELECT id, surah_number, ayat_number, juz, text_arab, text_latin,
                   translation, audio
            FROM ayat
            WHERE juz = ? AND surah_number = ? AND ayat_number BETWEEN ? AND ?
            ORDER BY ayat_number
            "#
        )
        .bind(juz)
        .bind(surah)
        .bind(from)
        .bind(to)
        .fetch_all(self.db.pool())
        .await?;

        Ok(ayat)
    }

    /// شماره سوره‌هایی که آیه‌ای با این جزء دارن (صعودی)
    pub async fn surahs_in_juz(&self, juz: u8) -> Result<Vec<u16>> {
        let surahs = sqlx::query_scalar::<_, u16>(
            "SELECT DISTINCT surah_number FROM ayat WHERE juz = ? ORDER BY surah_number"
        )
        .bind(juz)
        .fetch_all(self.db.pool())
        .await?;

        Ok(surahs)
    }

    /// تعداد و بازه آیات ذخیره شده هر سوره داخل یک جزء
    pub async fn juz_stats(&self, juz: u8) -> Result<Vec<JuzSurahStat>> {
        let stats = sqlx::query_as::<_, JuzSurahStat>(
            r#"
            SELECT a.surah_number AS surah_number,
                   s.name_latin AS name_latin,
                   COUNT(*) AS ayat_count,
                   MIN(a.ayat_number) AS first_ayat,
                   MAX(a.ayat_number) AS last_ayat
            FROM ayat a
            JOIN surah s ON s.number = a.surah_number
            WHERE a.juz = ?
            GROUP BY a.surah_number, s.name_latin
            ORDER BY a.surah_number
            "#
        )
        .bind(juz)
        .fetch_all(self.db.pool())
        .await?;

        Ok(stats)
    }

    /// جستجو در ترجمه و transliteration به ترتیب canonical
    pub async fn search(&self, pattern: &str, page: &Pagination) -> Result<Vec<Ayat>> {
        let ayat = sqlx::query_as::<_, Ayat>(
            r#"
            SELECT id, surah_number, ayat_number, juz, text_arab, text_latin,
                   translation, audio
            FROM ayat
            WHERE translation LIKE ?1 ESCAPE '\' OR text_latin LIKE ?1 ESCAPE '\'
            ORDER BY surah_number, ayat_number
            LIMIT ?2 OFFSET ?3
            "#
        )
        .bind(pattern)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(self.db.pool())
        .await?;

        Ok(ayat)
    }

    /// تعداد نتایج جستجو
    pub async fn count_search(&self, pattern: &str) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*) FROM ayat
            WHERE translation LIKE ?1 ESCAPE '\' OR text_latin LIKE ?1 ESCAPE '\'
            "#
        )
        .bind(pattern)
        .fetch_one(self.db.pool())
        .await?;

        Ok(count)
    }
}

#[async_trait]
impl Repository for AyatRepository {
    type Entity = Ayat;
    type Id = AyatRef;

    async fn find_by_id(&self, position: &AyatRef) -> Result<Option<Ayat>> {
        let ayat = sqlx::query_as::<_, Ayat>(
            r#"
            SELECT id, surah_number, ayat_number, juz, text_arab, text_latin,
                   translation, audio
            FROM ayat
            WHERE surah_number = ? AND ayat_number = ?
            "#
        )
        .bind(position.surah)
        .bind(position.ayat)
        .fetch_optional(self.db.pool())
        .await?;

        Ok(ayat)
    }

    async fn count(&self) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM ayat")
            .fetch_one(self.db.pool())
            .await?;

        Ok(count)
    }
}

// =====================================
// Tafsir Repository
// =====================================
/// Repository تفسیر
#[derive(Debug, Clone)]
pub struct TafsirRepository {
    db: Database,
}

impl TafsirRepository {
    #[must_use]
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// تفسیر آیات یک سوره (با بازه اختیاری)
    pub async fn find_by_surah(&self, surah: u16, range: AyatRange) -> Result<Vec<Tafsir>> {
        let (from, to) = range.sql_bounds();

        let tafsir = sqlx::query_as::<_, Tafsir>(
            r#"
            SELECT surah_number, ayat_number, text
            FROM tafsir
            WHERE surah_number = ? AND ayat_number BETWEEN ? AND ?
            ORDER BY ayat_number
            "#
        )
        .bind(surah)
        .bind(from)
        .bind(to)
        .fetch_all(self.db.pool())
        .await?;

        Ok(tafsir)
    }
}

#[async_trait]
impl Repository for TafsirRepository {
    type Entity = Tafsir;
    type Id = AyatRef;

    async fn find_by_id(&self, position: &AyatRef) -> Result<Option<Tafsir>> {
        let tafsir = sqlx::query_as::<_, Tafsir>(
            r#"
            SELECT surah_number, ayat_number, text
            FROM tafsir
            WHERE surah_number = ? AND ayat_number = ?
            "#
        )
        .bind(position.surah)
        .bind(position.ayat)
        .fetch_optional(self.db.pool())
        .await?;

        Ok(tafsir)
    }

    async fn count(&self) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM tafsir")
            .fetch_one(self.db.pool())
            .await?;

        Ok(count)
    }
}

// =====================================
// Doa Repository
// =====================================
/// فیلترهای لیست دعا؛ همه اختیاری و با AND ترکیب میشن
#[derive(Debug, Clone, Default)]
pub struct DoaFilter {
    /// الگوی LIKE روی نام و معنی
    pub pattern: Option<String>,
    /// گروه دقیق
    pub group: Option<String>,
    /// یکی از برچسب‌ها
    pub tag: Option<String>,
}

/// Repository دعاها
#[derive(Debug, Clone)]
pub struct DoaRepository {
    db: Database,
}

impl DoaRepository {
    #[must_use]
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// لیست فیلتر شده به ترتیب شناسه
    pub async fn list(&self, filter: &DoaFilter, page: &Pagination) -> Result<Vec<Doa>> {
        let doa = sqlx::query_as::<_, Doa>(
            r#"
            SELECT id, grp, name, text_arab, text_latin, meaning, description, tags
            FROM doa
            WHERE (?1 IS NULL OR name LIKE ?1 ESCAPE '\' OR meaning LIKE ?1 ESCAPE '\')
              AND (?2 IS NULL OR grp = ?2)
              AND (?3 IS NULL OR EXISTS (SELECT 1 FROM json_each(doa.tags) t WHERE t.value = ?3))
            ORDER BY id
            LIMIT ?4 OFFSET ?5
            "#
        )
        .bind(filter.pattern.as_deref())
        .bind(filter.group.as_deref())
        .bind(filter.tag.as_deref())
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(self.db.pool())
        .await?;

        Ok(doa)
    }

    /// تعداد دعاهای match شده با فیلتر
    pub async fn count_filtered(&self, filter: &DoaFilter) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*) FROM doa
            WHERE (?1 IS NULL OR name LIKE ?1 ESCAPE '\' OR meaning LIKE ?1 ESCAPE '\')
              AND (?2 IS NULL OR grp = ?2)
              AND (?3 IS NULL OR EXISTS (SELECT 1 FROM json_each(doa.tags) t WHERE t.value = ?3))
            "#
        )
        .bind(filter.pattern.as_deref())
        .bind(filter.group.as_deref())
        .bind(filter.tag.as_deref())
        .fetch_one(self.db.pool())
        .await?;

        Ok(count)
    }

    /// گروه‌ها با تعداد اعضا
    pub async fn groups(&self) -> Result<Vec<DoaGroup>> {
        let groups = sqlx::query_as::<_, DoaGroup>(
            "SELECT grp AS group_name, COUNT(*) AS count FROM doa GROUP BY grp ORDER BY grp"
        )
        .fetch_all(self.db.pool())
        .await?;

        Ok(groups)
    }
}

#[async_trait]
impl Repository for DoaRepository {
    type Entity = Doa;
    type Id = i64;

    async fn find_by_id(&self, id: &i64) -> Result<Option<Doa>> {
        let doa = sqlx::query_as::<_, Doa>(
            r#"
            SELECT id, grp, name, text_arab, text_latin, meaning, description, tags
            FROM doa
            WHERE id = ?
            "#
        )
        .bind(*id)
        .fetch_optional(self.db.pool())
        .await?;

        Ok(doa)
    }

    async fn count(&self) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM doa")
            .fetch_one(self.db.pool())
            .await?;

        Ok(count)
    }
}
