//! # Quran API - نقطه ورود سرور
//!
//! ## مفاهیم Rust در این فایل:
//! - `async fn main()`: تابع اصلی غیرهمزمان با tokio
//! - `?` operator: انتشار خطا به بالا

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use quran_api::{
    api::create_router,
    config::Config,
    database::Database,
    error::{AppError, Result},
};

/// نقطه ورود اصلی برنامه
///
/// # Errors
/// خطا برمیگردونه اگه:
/// - تنظیمات لود نشن
/// - دیتابیس متصل نشه
/// - سرور استارت نشه
#[tokio::main]
async fn main() -> Result<()> {
    // اگه فایل .env نباشه اوکیه
    dotenvy::dotenv().ok();

    init_tracing();

    info!("🚀 Starting Quran API...");

    let config = Config::from_env()?;
    info!(environment = ?config.environment, "✅ Configuration loaded successfully");

    let database = Database::connect(&config.database_url).await?;
    info!("✅ Database connected successfully");

    database.migrate().await?;
    info!("✅ Database migrations applied");

    let addr = config.server_addr();
    let app = create_router(database, config);

    let listener = TcpListener::bind(&addr).await?;
    info!("🌐 Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Server(e.to_string()))?;

    Ok(())
}

/// راه‌اندازی سیستم tracing برای لاگینگ
///
/// # مفاهیم:
/// - EnvFilter: فیلتر کردن لاگ‌ها بر اساس `RUST_LOG`
/// - `LOG_FORMAT=json`: خروجی JSON برای جمع‌آوری لاگ، در غیر این صورت pretty
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("quran_api=debug,tower_http=debug"));

    let json = std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    let registry = tracing_subscriber::registry().with(env_filter);

    if json {
        registry
            .with(fmt::layer().json().with_current_span(true))
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true)
                    .pretty(),
            )
            .init();
    }
}
