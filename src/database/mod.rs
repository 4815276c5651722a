//! # ماژول دیتابیس (Database Layer)
//!
//! این ماژول لایه ارتباط با دیتابیس رو مدیریت میکنه.
//!
//! ## مفاهیم Rust:
//! - **Arc<T>**: Reference Counting برای اشتراک داده بین threads
//! - **async/await**: برنامه‌نویسی غیرهمزمان
//! - **async_trait**: پشتیبانی از async در traits
//!
//! ## الگوهای طراحی:
//! - Repository Pattern: جداسازی لایه داده از منطق
//! - Connection Pool: مدیریت اتصالات دیتابیس

mod repository;

pub use repository::*;

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use sqlx::{sqlite::{SqlitePool, SqlitePoolOptions}, migrate::Migrator};
use crate::error::Result;

// مسیر migration‌ها
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

// =====================================
// Database Connection
// =====================================
/// اتصال به دیتابیس با Connection Pool
///
/// هر clone فقط counter داخل `Arc` رو زیاد میکنه، pool کپی نمیشه
#[derive(Debug, Clone)]
pub struct Database {
    pool: Arc<SqlitePool>,
}

impl Database {
    /// اتصال به دیتابیس
    ///
    /// # Arguments
    /// * `database_url` - آدرس دیتابیس (مثلا `sqlite://data/quran.db?mode=rwc`)
    ///
    /// # Errors
    /// خطا برمیگردونه اگه اتصال موفق نباشه
    pub async fn connect(database_url: impl AsRef<str>) -> Result<Self> {
        let url = database_url.as_ref();

        // ساخت پوشه دیتابیس اگه وجود نداره
        if let Some(parent) = database_file(url).and_then(|path| path.parent()) {
            std::fs::create_dir_all(parent)?;
        }

        let pool = SqlitePoolOptions::new()
            .max_connections(10)
            .min_connections(1)
            .acquire_timeout(Duration::from_secs(5))
            .idle_timeout(Duration::from_secs(600))
            .connect(url)
            .await?;

        Ok(Self {
            pool: Arc::new(pool),
        })
    }

    /// دیتابیس in-memory با schema کامل
    ///
    /// فقط یک اتصال که هیچوقت بسته نمیشه، وگرنه داده‌ها از بین میرن.
    /// برای تست‌ها و ابزارهای یک‌باره.
    pub async fn in_memory() -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await?;

        let db = Self {
            pool: Arc::new(pool),
        };

        db.migrate().await?;
        Ok(db)
    }

    /// اجرای migration‌ها
    pub async fn migrate(&self) -> Result<()> {
        MIGRATOR.run(&*self.pool).await?;
        Ok(())
    }

    /// دسترسی به pool
    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// بررسی سلامت دیتابیس
    pub async fn health_check(&self) -> Result<()> {
        sqlx::query("SELECT 1")
            .execute(&*self.pool)
            .await?;
        Ok(())
    }

    /// شروع یک تراکنش
    ///
    /// اگه commit نشه، موقع drop خودکار rollback میشه (RAII)
    pub async fn begin(&self) -> Result<sqlx::Transaction<'_, sqlx::Sqlite>> {
        Ok(self.pool.begin().await?)
    }
}

/// مسیر فایل داخل یک آدرس SQLite (`sqlite://path` یا `sqlite:path`)
///
/// برای دیتابیس in-memory `None` برمیگرده
fn database_file(url: &str) -> Option<&Path> {
    let rest = url
        .strip_prefix("sqlite://")
        .or_else(|| url.strip_prefix("sqlite:"))?;
    let path = rest.split('?').next().unwrap_or(rest);

    if path.is_empty() || path == ":memory:" {
        return None;
    }
    Some(Path::new(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_in_memory_has_schema() {
        let db = Database::in_memory().await.unwrap();
        db.health_check().await.unwrap();

        let tables: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name IN ('surah', 'ayat', 'tafsir', 'doa')"
        )
        .fetch_one(db.pool())
        .await
        .unwrap();

        assert_eq!(tables, 4);
    }

    #[test]
    fn test_database_file_accepts_both_url_forms() {
        assert_eq!(
            database_file("sqlite://data/quran.db?mode=rwc"),
            Some(Path::new("data/quran.db"))
        );
        assert_eq!(database_file("sqlite:data/quran.db"), Some(Path::new("data/quran.db")));
        assert_eq!(database_file("sqlite::memory:"), None);
        assert_eq!(database_file("postgres://localhost/db"), None);
    }

    #[tokio::test]
    async fn test_connect_creates_parent_dir_for_short_url() {
        let dir = std::env::temp_dir().join(format!("quran-api-{}", nanoid::nanoid!(8)));
        let url = format!("sqlite:{}/nested/quran.db?mode=rwc", dir.display());

        let db = Database::connect(&url).await.unwrap();
        db.health_check().await.unwrap();
        assert!(dir.join("nested").is_dir());

        drop(db);
        let _ = std::fs::remove_dir_all(dir);
    }
}
