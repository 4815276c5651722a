//! # ماژول Import (پر کردن یک‌باره دیتابیس)
//!
//! داده‌ها یک بار از اسناد JSON منبع بیرونی خونده و ذخیره میشن؛ بعد از اون
//! کل برنامه فقط خوندنی هست.
//!
//! ## قواعدی که اینجا بررسی میشن
//! - تعداد آیات هر سوره باید با تعداد canonical و با آیات ارسالی یکی باشه
//! - جزء هر آیه فقط یک بار، همینجا، از جدول ثابت حساب میشه
//! - تفسیر فقط برای آیه‌ای که ذخیره شده قبول میشه
//! - اجرای دوباره چیزی رو تکرار نمیکنه (`INSERT OR IGNORE`)
//!
//! ## ساختار پوشه داده
//!
//! ```text
//! data/
//! ├── surah/1.json ... surah/114.json
//! ├── tafsir/1.json ... tafsir/114.json   (اختیاری)
//! └── doa.json                            (اختیاری)
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use tracing::{info, instrument, warn};

use crate::{
    database::Database,
    error::{AppError, Result},
    juz::{self, AyatRef},
    models::{AudioLinks, CreateAyat},
    utils::truncate,
};

// =====================================
// Provider documents
// =====================================
// نام فیلدها همون نام‌های JSON منبع هستن

/// سند یک سوره به همراه آیاتش
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurahDocument {
    #[serde(rename = "nomor")]
    pub number: u16,
    #[serde(rename = "nama")]
    pub name: String,
    #[serde(rename = "namaLatin")]
    pub name_latin: String,
    #[serde(rename = "jumlahAyat")]
    pub verse_count: u16,
    #[serde(rename = "tempatTurun")]
    pub revelation_place: String,
    #[serde(rename = "arti")]
    pub meaning: String,
    #[serde(rename = "deskripsi")]
    pub description: String,
    #[serde(rename = "audioFull", default)]
    pub audio: Option<AudioLinks>,
    #[serde(default)]
    pub ayat: Vec<AyatDocument>,
}

/// یک آیه داخل سند سوره
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AyatDocument {
    #[serde(rename = "nomorAyat")]
    pub number: u16,
    #[serde(rename = "teksArab")]
    pub text_arab: String,
    #[serde(rename = "teksLatin")]
    pub text_latin: String,
    #[serde(rename = "teksIndonesia")]
    pub translation: String,
    #[serde(default)]
    pub audio: Option<AudioLinks>,
}

/// سند تفسیر یک سوره
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TafsirDocument {
    #[serde(rename = "nomor")]
    pub surah: u16,
    #[serde(rename = "tafsir")]
    pub entries: Vec<TafsirEntry>,
}

/// تفسیر یک آیه
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TafsirEntry {
    pub ayat: u16,
    #[serde(rename = "teks")]
    pub text: String,
}

/// یک دعا
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DoaDocument {
    pub id: i64,
    #[serde(rename = "grup")]
    pub group: String,
    #[serde(rename = "nama")]
    pub name: String,
    #[serde(rename = "ar")]
    pub text_arab: String,
    #[serde(rename = "tr")]
    pub text_latin: String,
    #[serde(rename = "idn")]
    pub meaning: String,
    #[serde(rename = "tentang")]
    pub description: String,
    #[serde(rename = "tag", default)]
    pub tags: Vec<String>,
}

// =====================================
// Report
// =====================================
/// تعداد ردیف‌های جدید ذخیره شده
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ImportReport {
    pub surahs: u64,
    pub ayat: u64,
    pub tafsir: u64,
    pub doa: u64,
}

// =====================================
// Validation (pure)
// =====================================
/// بررسی سند سوره و ساخت ردیف‌های آیه با جزء حساب شده
///
/// # Errors
/// `DataIntegrity` اگه سند با متن canonical سازگار نباشه
pub fn prepare_ayat(doc: &SurahDocument) -> Result<Vec<CreateAyat>> {
    let canonical = juz::surah_verse_count(doc.number).ok_or_else(|| {
        AppError::DataIntegrity(format!("surah {} is outside 1..={}", doc.number, juz::SURAH_COUNT))
    })?;

    if doc.verse_count != canonical {
        return Err(AppError::DataIntegrity(format!(
            "surah {} declares {} ayat, expected {}",
            doc.number, doc.verse_count, canonical
        )));
    }

    if doc.ayat.len() != usize::from(canonical) {
        return Err(AppError::DataIntegrity(format!(
            "surah {} carries {} ayat, expected {}",
            doc.number,
            doc.ayat.len(),
            canonical
        )));
    }

    doc.ayat
        .iter()
        .zip(1..=canonical)
        .map(|(ayat, expected)| {
            if ayat.number != expected {
                return Err(AppError::DataIntegrity(format!(
                    "surah {}: ayat {} found where {} was expected",
                    doc.number, ayat.number, expected
                )));
            }

            let position = AyatRef::new(doc.number, ayat.number);
            let juz = juz::juz_of_ayat(position.surah, position.ayat).ok_or_else(|| {
                AppError::DataIntegrity(format!("ayat {} is not covered by the juz table", position))
            })?;

            Ok(CreateAyat {
                surah_number: doc.number,
                ayat_number: ayat.number,
                juz,
                text_arab: ayat.text_arab.clone(),
                text_latin: ayat.text_latin.clone(),
                translation: ayat.translation.clone(),
                audio: ayat.audio.clone(),
            })
        })
        .collect()
}

// =====================================
// Importer
// =====================================
/// Importer؛ هر سند در یک تراکنش ذخیره میشه
#[derive(Debug, Clone)]
pub struct Importer {
    db: Database,
}

impl Importer {
    #[must_use]
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// ذخیره یک سوره و همه آیاتش
    ///
    /// # Returns
    /// `(surahs, ayat)` تعداد ردیف‌های جدید
    #[instrument(skip(self, doc), fields(surah = doc.number))]
    pub async fn import_surah(&self, doc: &SurahDocument) -> Result<(u64, u64)> {
        let rows = prepare_ayat(doc)?;

        let mut tx = self.db.begin().await?;

        let surahs = sqlx::query(
            r#"
            INSERT OR IGNORE INTO surah
                (number, name, name_latin, verse_count, revelation_place, meaning, description, audio)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#
        )
        .bind(doc.number)
        .bind(&doc.name)
        .bind(&doc.name_latin)
        .bind(doc.verse_count)
        .bind(&doc.revelation_place)
        .bind(&doc.meaning)
        .bind(&doc.description)
        .bind(doc.audio.as_ref().map(Json))
        .execute(&mut *tx)
        .await?
        .rows_affected();

        let mut ayat = 0;
        for row in &rows {
            ayat += sqlx::query(
                r#"
                INSERT OR IGNORE INTO ayat
                    (surah_number, ayat_number, juz, text_arab, text_latin, translation, audio)
                VALUES (?, ?, ?, ?, ?, ?, ?)
                "#
            )
            .bind(row.surah_number)
            .bind(row.ayat_number)
            .bind(row.juz)
            .bind(&row.text_arab)
            .bind(&row.text_latin)
            .bind(&row.translation)
            .bind(row.audio.as_ref().map(Json))
            .execute(&mut *tx)
            .await?
            .rows_affected();
        }

        tx.commit().await?;

        info!(surahs, ayat, "Imported surah");
        Ok((surahs, ayat))
    }

    /// ذخیره تفسیر یک سوره
    ///
    /// # Errors
    /// `DataIntegrity` اگه تفسیری به آیه ذخیره نشده اشاره کنه؛ در این حالت
    /// هیچ ردیفی از این سند ذخیره نمیشه
    #[instrument(skip(self, doc), fields(surah = doc.surah))]
    pub async fn import_tafsir(&self, doc: &TafsirDocument) -> Result<u64> {
        let mut tx = self.db.begin().await?;
        let mut inserted = 0;

        for entry in &doc.entries {
            let exists = sqlx::query_scalar::<_, i64>(
                "SELECT COUNT(*) FROM ayat WHERE surah_number = ? AND ayat_number = ?"
            )
            .bind(doc.surah)
            .bind(entry.ayat)
            .fetch_one(&mut *tx)
            .await?;

            if exists == 0 {
                return Err(AppError::DataIntegrity(format!(
                    "tafsir references missing ayat {}",
                    AyatRef::new(doc.surah, entry.ayat)
                )));
            }

            inserted += sqlx::query(
                "INSERT OR IGNORE INTO tafsir (surah_number, ayat_number, text) VALUES (?, ?, ?)"
            )
            .bind(doc.surah)
            .bind(entry.ayat)
            .bind(&entry.text)
            .execute(&mut *tx)
            .await?
            .rows_affected();
        }

        tx.commit().await?;

        info!(inserted, "Imported tafsir");
        Ok(inserted)
    }

    /// ذخیره لیست دعا
    ///
    /// دعای تکراری (همون id یا همون نام و توضیح) نادیده گرفته میشه
    #[instrument(skip(self, docs), fields(count = docs.len()))]
    pub async fn import_doa(&self, docs: &[DoaDocument]) -> Result<u64> {
        let mut tx = self.db.begin().await?;
        let mut inserted = 0;

        for doc in docs {
            let affected = sqlx::query(
                r#"
                INSERT OR IGNORE INTO doa
                    (id, grp, name, text_arab, text_latin, meaning, description, tags)
                VALUES (?, ?, ?, ?, ?, ?, ?, ?)
                "#
            )
            .bind(doc.id)
            .bind(&doc.group)
            .bind(&doc.name)
            .bind(&doc.text_arab)
            .bind(&doc.text_latin)
            .bind(&doc.meaning)
            .bind(&doc.description)
            .bind(Json(&doc.tags))
            .execute(&mut *tx)
            .await?
            .rows_affected();

            if affected == 0 {
                warn!(id = doc.id, name = %truncate(&doc.name, 40), "Skipped duplicate doa");
            }
            inserted += affected;
        }

        tx.commit().await?;

        info!(inserted, "Imported doa");
        Ok(inserted)
    }

    /// Import کامل از یک پوشه داده
    ///
    /// سوره‌ها قبل از تفسیرها ذخیره میشن
    pub async fn import_dir(&self, dir: &Path) -> Result<ImportReport> {
        let mut report = ImportReport::default();

        for path in json_files(&dir.join("surah")).await? {
            let doc: SurahDocument = read_json(&path).await?;
            let (surahs, ayat) = self.import_surah(&doc).await?;
            report.surahs += surahs;
            report.ayat += ayat;
        }

        let tafsir_dir = dir.join("tafsir");
        if tokio::fs::try_exists(&tafsir_dir).await? {
            for path in json_files(&tafsir_dir).await? {
                let doc: TafsirDocument = read_json(&path).await?;
                report.tafsir += self.import_tafsir(&doc).await?;
            }
        }

        let doa_file = dir.join("doa.json");
        if tokio::fs::try_exists(&doa_file).await? {
            let docs: Vec<DoaDocument> = read_json(&doa_file).await?;
            report.doa += self.import_doa(&docs).await?;
        }

        info!(?report, "Import finished");
        Ok(report)
    }
}

/// فایل‌های `.json` یک پوشه، مرتب شده بر اساس شماره داخل نام فایل
async fn json_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut entries = tokio::fs::read_dir(dir).await?;
    let mut files = Vec::new();

    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == "json") {
            files.push(path);
        }
    }

    files.sort_by_key(|path| {
        path.file_stem()
            .and_then(|stem| stem.to_str())
            .and_then(|stem| stem.parse::<u32>().ok())
            .unwrap_or(u32::MAX)
    });

    Ok(files)
}

async fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = tokio::fs::read_to_string(path).await?;
    Ok(serde_json::from_str(&raw)?)
}
