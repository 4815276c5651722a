//! # ماژول تنظیمات (Configuration)
//!
//! این ماژول مسئول خوندن و مدیریت تنظیمات برنامه هست.
//!
//! ## مفاهیم Rust:
//! - **Derive Macros**: تولید خودکار کد با `#[derive(...)]`
//! - **Default Trait**: مقادیر پیش‌فرض
//! - **Serde**: دسریالایز تنظیمات از متغیرهای محیطی
//! - **Builder Pattern**: ساخت تدریجی آبجکت

use serde::{Deserialize, Serialize};
use crate::error::{AppError, Result};

/// تنظیمات اصلی برنامه
///
/// # مثال
/// ```rust
/// use quran_api::config::Config;
///
/// let config = Config::default();
/// assert_eq!(config.port, 3000);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// آدرس هاست سرور
    pub host: String,

    /// پورت سرور
    pub port: u16,

    /// آدرس اتصال به دیتابیس
    pub database_url: String,

    /// تعداد پیش‌فرض آیتم در هر صفحه
    pub default_per_page: u32,

    /// حداکثر آیتم در هر صفحه
    pub max_per_page: u32,

    /// حداکثر زمان پردازش هر request (ثانیه)
    pub request_timeout_secs: u64,

    /// محیط اجرا (development, production)
    pub environment: Environment,
}

/// محیط اجرای برنامه
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Environment {
    /// محیط توسعه - با قابلیت‌های دیباگ
    #[default]
    Development,

    /// محیط تست
    Testing,

    /// محیط تولید - بهینه‌سازی شده
    Production,
}

impl Environment {
    /// آیا در محیط توسعه هستیم؟
    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Environment::Development)
    }

    /// آیا در محیط تولید هستیم؟
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

/// تبدیل String به Environment
///
/// مقدار ناشناخته به Development تبدیل میشه
impl From<String> for Environment {
    fn from(s: String) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Environment::Production,
            "testing" | "test" => Environment::Testing,
            _ => Environment::Development,
        }
    }
}

const DEFAULT_DATABASE_URL: &str = "sqlite://data/quran.db?mode=rwc";

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            database_url: DEFAULT_DATABASE_URL.to_string(),
            default_per_page: 20,
            max_per_page: 100,
            request_timeout_secs: 30,
            environment: Environment::Development,
        }
    }
}

impl Config {
    /// ساخت تنظیمات از متغیرهای محیطی
    ///
    /// # مفاهیم:
    /// - `config::Config::builder()`: ترکیب مقادیر پیش‌فرض با منبع‌های بیرونی
    /// - `config::Environment`: خوندن متغیرهای محیطی (`PORT` -> `port`)
    /// - `try_deserialize`: تبدیل به struct خودمون با serde
    ///
    /// # Errors
    /// خطا برمیگردونه اگه مقدار یک متغیر قابل تبدیل نباشه
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let settings = config::Config::builder()
            .set_default("host", defaults.host)?
            .set_default("port", i64::from(defaults.port))?
            .set_default("database_url", defaults.database_url)?
            .set_default("default_per_page", i64::from(defaults.default_per_page))?
            .set_default("max_per_page", i64::from(defaults.max_per_page))?
            .set_default("request_timeout_secs", defaults.request_timeout_secs as i64)?
            .set_default("environment", "development")?
            .add_source(config::Environment::default().try_parsing(true))
            .build()?;

        let config: Self = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// اعتبارسنجی تنظیمات
    pub fn validate(&self) -> Result<()> {
        if self.port == 0 {
            return Err(AppError::Config(
                "PORT cannot be 0".to_string()
            ));
        }

        if self.max_per_page == 0 || self.default_per_page == 0 {
            return Err(AppError::Config(
                "page sizes must be positive".to_string()
            ));
        }

        if self.default_per_page > self.max_per_page {
            return Err(AppError::Config(
                "DEFAULT_PER_PAGE cannot exceed MAX_PER_PAGE".to_string()
            ));
        }

        Ok(())
    }

    /// آدرس کامل سرور
    #[must_use]
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

// =====================================
// Builder Pattern
// =====================================
/// ساخت Config با Builder Pattern
///
/// # مثال
/// ```rust
/// use quran_api::config::ConfigBuilder;
///
/// let config = ConfigBuilder::new()
///     .port(8080)
///     .host("0.0.0.0")
///     .build();
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// ساخت builder جدید
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// تنظیم پورت
    #[must_use]
    pub fn port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    /// تنظیم هاست
    #[must_use]
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.config.host = host.into();
        self
    }

    /// تنظیم database_url
    #[must_use]
    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.config.database_url = url.into();
        self
    }

    /// تنظیم اندازه صفحه
    #[must_use]
    pub fn page_sizes(mut self, default_per_page: u32, max_per_page: u32) -> Self {
        self.config.default_per_page = default_per_page;
        self.config.max_per_page = max_per_page;
        self
    }

    /// تنظیم محیط
    #[must_use]
    pub fn environment(mut self, env: Environment) -> Self {
        self.config.environment = env;
        self
    }

    /// ساخت Config نهایی
    #[must_use]
    pub fn build(self) -> Config {
        self.config
    }

    /// ساخت Config با اعتبارسنجی
    ///
    /// # Errors
    /// خطا برمیگردونه اگه اعتبارسنجی fail بشه
    pub fn build_validated(self) -> Result<Config> {
        let config = self.build();
        config.validate()?;
        Ok(config)
    }
}
