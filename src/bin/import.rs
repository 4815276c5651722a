//! # Quran Import - پر کردن دیتابیس از اسناد JSON منبع
//!
//! ```bash
//! quran-import --data-dir ./data --database-url sqlite://data/quran.db?mode=rwc
//! ```

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use quran_api::{config::Config, database::Database, import::Importer};

/// آرگومان‌های خط فرمان
#[derive(Debug, Parser)]
#[command(name = "quran-import", version, about = "One-time import of surah, ayat, tafsir and doa documents")]
struct Args {
    /// پوشه‌ای که surah/، tafsir/ و doa.json داخلش هستن
    #[arg(long, default_value = "data/source")]
    data_dir: PathBuf,

    /// آدرس دیتابیس؛ اگه داده نشه از DATABASE_URL خونده میشه
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("quran_api=info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    let database_url = match args.database_url {
        Some(url) => url,
        None => Config::from_env().context("loading configuration")?.database_url,
    };

    let database = Database::connect(&database_url)
        .await
        .with_context(|| format!("connecting to {}", database_url))?;
    database.migrate().await.context("running migrations")?;

    let report = Importer::new(database)
        .import_dir(&args.data_dir)
        .await
        .with_context(|| format!("importing from {}", args.data_dir.display()))?;

    info!(
        surahs = report.surahs,
        ayat = report.ayat,
        tafsir = report.tafsir,
        doa = report.doa,
        "✅ Import completed"
    );

    Ok(())
}
