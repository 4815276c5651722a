//! # تست‌های Integration
//!
//! این فایل تست‌های end-to-end رو شامل میشه: از جدول جزء تا router کامل
//! روی یک دیتابیس in-memory که با Importer پر شده.
//!
//! ## مفاهیم Rust در تست‌ها:
//! - `#[tokio::test]`: تست‌های async
//! - `proptest!`: تست با ورودی‌های تصادفی
//! - `tower::ServiceExt::oneshot`: فرستادن یک request به Router بدون سرور واقعی
//!
//! ## اجرای تست‌ها:
//! ```bash
//! cargo test                    # همه تست‌ها
//! cargo test --lib              # فقط تست‌های unit
//! cargo test --test integration_tests  # فقط این فایل
//! cargo test juz_               # تست‌هایی که با juz_ شروع میشن
//! ```

// =====================================
// Fixtures
// =====================================
mod common {
    use quran_api::{
        config::{Config, ConfigBuilder, Environment},
        database::Database,
        import::{AyatDocument, DoaDocument, Importer, SurahDocument, TafsirDocument, TafsirEntry},
        juz,
        services::AppState,
    };

    /// سند مصنوعی یک سوره با تعداد آیات canonical
    pub fn surah_document(number: u16) -> SurahDocument {
        let count = juz::surah_verse_count(number).unwrap();

        SurahDocument {
            number,
            name: format!("سورة {}", number),
            name_latin: format!("Surah {}", number),
            verse_count: count,
            revelation_place: if number % 2 == 0 { "Madinah" } else { "Mekah" }.to_string(),
            meaning: format!("meaning {}", number),
            description: String::new(),
            audio: None,
            ayat: (1..=count)
                .map(|n| AyatDocument {
                    number: n,
                    text_arab: String::new(),
                    text_latin: format!("latin {}:{}", number, n),
                    translation: if number == 1 && n == 3 {
                        "Yang Maha Pengasih lagi Maha Penyayang, rahmat".to_string()
                    } else {
                        format!("translation {}:{}", number, n)
                    },
                    audio: None,
                })
                .collect(),
        }
    }

    pub fn doa_documents() -> Vec<DoaDocument> {
        let doa = |id: i64, group: &str, name: &str, tags: &[&str]| DoaDocument {
            id,
            group: group.to_string(),
            name: name.to_string(),
            text_arab: String::new(),
            text_latin: String::new(),
            meaning: format!("arti {}", name),
            description: format!("tentang {}", name),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        };

        vec![
            doa(1, "Pagi", "Doa bangun tidur", &["pagi", "harian"]),
            doa(2, "Malam", "Doa sebelum tidur", &["malam", "harian"]),
            doa(3, "Makan", "Doa sebelum makan", &["makan"]),
        ]
    }

    /// دیتابیس in-memory با همه ۱۱۴ سوره، تفسیر سوره 1 و سه دعا
    pub async fn seeded_database() -> Database {
        let db = Database::in_memory().await.unwrap();
        let importer = Importer::new(db.clone());

        for number in 1..=juz::SURAH_COUNT {
            importer.import_surah(&surah_document(number)).await.unwrap();
        }

        importer
            .import_tafsir(&TafsirDocument {
                surah: 1,
                entries: (1..=7)
                    .map(|ayat| TafsirEntry { ayat, text: format!("tafsir 1:{}", ayat) })
                    .collect(),
            })
            .await
            .unwrap();

        importer.import_doa(&doa_documents()).await.unwrap();

        db
    }

    pub fn test_config() -> Config {
        ConfigBuilder::new()
            .page_sizes(10, 50)
            .environment(Environment::Testing)
            .build()
    }

    pub async fn seeded_state() -> AppState {
        AppState::new(seeded_database().await, test_config())
    }
}

// =====================================
// تست‌های Config
// =====================================
mod config_tests {
    use quran_api::config::{Config, ConfigBuilder, Environment};

    /// تست مقادیر پیش‌فرض
    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.port, 3000);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.default_per_page, 20);
        assert!(config.environment.is_development());
        assert!(config.validate().is_ok());
    }

    /// تست Builder Pattern
    #[test]
    fn test_config_builder() {
        let config = ConfigBuilder::new()
            .port(8080)
            .host("0.0.0.0")
            .database_url("sqlite::memory:")
            .environment(Environment::Production)
            .build();

        assert_eq!(config.server_addr(), "0.0.0.0:8080");
        assert_eq!(config.database_url, "sqlite::memory:");
        assert!(config.environment.is_production());
    }

    /// اندازه صفحه پیش‌فرض نباید از سقف بیشتر باشه
    #[test]
    fn test_validation_page_sizes() {
        assert!(ConfigBuilder::new().page_sizes(200, 100).build_validated().is_err());
        assert!(ConfigBuilder::new().page_sizes(0, 100).build_validated().is_err());
        assert!(ConfigBuilder::new().page_sizes(10, 10).build_validated().is_ok());
    }
}

// =====================================
// تست‌های Error
// =====================================
mod error_tests {
    use axum::{http::StatusCode, response::IntoResponse};
    use quran_api::error::{AppError, OptionExt};

    #[test]
    fn test_error_status_codes() {
        assert_eq!(AppError::surah_not_in_juz(1, 3).status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::BadRequest("test".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Validation("test".to_string()).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            AppError::DataIntegrity("test".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    /// جزئیات خطای سرور نباید به کلاینت برسه
    #[tokio::test]
    async fn test_server_error_details_hidden() {
        let response = AppError::DataIntegrity("ayat 2:999 missing".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let text = String::from_utf8(body.to_vec()).unwrap();
        assert!(!text.contains("2:999"));
        assert!(text.contains("An internal error occurred"));
    }

    #[test]
    fn test_option_extension() {
        let none_value: Option<i32> = None;

        let err = none_value.ok_or_not_found("item not found");
        assert!(matches!(err, Err(AppError::NotFound(_))));
    }
}

// =====================================
// تست‌های جدول جزء (بدون دیتابیس)
// =====================================
mod juz_table_tests {
    use pretty_assertions::assert_eq;
    use quran_api::juz::{self, AyatRef};

    #[test]
    fn juz_first_and_last_boundaries() {
        assert_eq!(juz::juz_of_ayat(1, 1), Some(1));
        assert_eq!(juz::juz_of_ayat(2, 141), Some(1));
        assert_eq!(juz::juz_of_ayat(2, 142), Some(2));
        assert_eq!(juz::juz_of_ayat(2, 253), Some(3));
        assert_eq!(juz::juz_of_ayat(77, 50), Some(29));
        assert_eq!(juz::juz_of_ayat(78, 1), Some(30));
        assert_eq!(juz::juz_of_ayat(114, 6), Some(30));
    }

    #[test]
    fn juz_of_surah_spans() {
        assert_eq!(juz::juz_of_surah(1, 7), vec![1]);
        assert_eq!(juz::juz_of_surah(2, 286), vec![1, 2, 3]);
        assert_eq!(juz::juz_of_surah(3, 200), vec![3, 4]);
        assert_eq!(juz::juz_of_surah(114, 6), vec![30]);
    }

    /// آیه شروع هر جزء مال همون جزء و آیه قبلش مال جزء قبلی هست
    #[test]
    fn juz_boundary_exactness() {
        for bounds in juz::all_juz() {
            assert_eq!(juz::juz_of_ayat(bounds.start.surah, bounds.start.ayat), Some(bounds.juz));
            assert_eq!(juz::juz_of_ayat(bounds.end.surah, bounds.end.ayat), Some(bounds.juz));

            match bounds.start.previous() {
                Some(before) => assert_eq!(
                    juz::juz_of_ayat(before.surah, before.ayat),
                    juz::previous_juz(bounds.juz)
                ),
                None => assert_eq!(bounds.juz, 1),
            }
        }
    }

    /// پیمایش کامل متن با `AyatRef::next` دقیقا 6236 آیه میده
    #[test]
    fn juz_walk_whole_text() {
        let mut position = AyatRef::new(1, 1);
        let mut visited = 1u32;
        let mut last_juz = 1u8;

        while let Some(next) = position.next() {
            let current = juz::juz_of_ayat(next.surah, next.ayat).unwrap();
            assert!(current == last_juz || current == last_juz + 1, "jump at {}", next);
            last_juz = current;
            position = next;
            visited += 1;
        }

        assert_eq!(visited, juz::TOTAL_AYAT);
        assert_eq!(position, AyatRef::new(114, 6));
        assert_eq!(last_juz, juz::JUZ_COUNT);
    }
}

// =====================================
// Property-Based Tests
// =====================================
mod property_tests {
    use proptest::prelude::*;
    use quran_api::juz::{self, AyatRef};

    /// آیه شماره `index` (از صفر) در کل متن
    fn nth_ayat(mut index: u32) -> AyatRef {
        for surah in 1..=juz::SURAH_COUNT {
            let count = u32::from(juz::surah_verse_count(surah).unwrap());
            if index < count {
                return AyatRef::new(surah, (index + 1) as u16);
            }
            index -= count;
        }
        unreachable!("index outside the text")
    }

    proptest! {
        /// هر آیه معتبر دقیقا در یک جزء هست و اون جزء شامل آیه میشه
        #[test]
        fn every_ayat_has_one_juz(index in 0u32..juz::TOTAL_AYAT) {
            let position = nth_ayat(index);
            let number = juz::juz_of_ayat(position.surah, position.ayat);

            prop_assert!(number.is_some());
            let number = number.unwrap();
            prop_assert!((1..=juz::JUZ_COUNT).contains(&number));

            let containing: Vec<_> = juz::all_juz()
                .iter()
                .filter(|bounds| bounds.contains(position))
                .map(|bounds| bounds.juz)
                .collect();
            prop_assert_eq!(containing, vec![number]);
        }

        /// ترتیب آیات حفظ میشه: آیه بعدتر هیچوقت جزء کوچیکتری نداره
        #[test]
        fn juz_is_monotonic(a in 0u32..juz::TOTAL_AYAT, b in 0u32..juz::TOTAL_AYAT) {
            let (low, high) = if a <= b { (a, b) } else { (b, a) };
            let low = nth_ayat(low);
            let high = nth_ayat(high);

            prop_assert!(low <= high);
            prop_assert!(
                juz::juz_of_ayat(low.surah, low.ayat) <= juz::juz_of_ayat(high.surah, high.ayat)
            );
        }

        /// هر جزء از `juz_of_surah` واقعا حداقل یک آیه از سوره رو داره
        #[test]
        fn juz_of_surah_is_exact(surah in 1u16..=114) {
            let count = juz::surah_verse_count(surah).unwrap();
            let mut expected: Vec<u8> = (1..=count)
                .filter_map(|ayat| juz::juz_of_ayat(surah, ayat))
                .collect();
            expected.dedup();

            prop_assert_eq!(juz::juz_of_surah(surah, count), expected);
        }
    }
}

// =====================================
// تست‌های Import
// =====================================
mod import_tests {
    use quran_api::{
        database::{AyatRepository, Database, Repository, SurahRepository},
        error::AppError,
        import::Importer,
        juz::AyatRef,
    };

    use crate::common;

    #[tokio::test]
    async fn import_assigns_juz_and_is_idempotent() {
        let db = Database::in_memory().await.unwrap();
        let importer = Importer::new(db.clone());

        let doc = common::surah_document(2);
        assert_eq!(importer.import_surah(&doc).await.unwrap(), (1, 286));
        assert_eq!(importer.import_surah(&doc).await.unwrap(), (0, 0));

        let ayat = AyatRepository::new(db.clone());
        assert_eq!(ayat.count().await.unwrap(), 286);
        assert_eq!(ayat.find_by_id(&AyatRef::new(2, 141)).await.unwrap().unwrap().juz, 1);
        assert_eq!(ayat.find_by_id(&AyatRef::new(2, 142)).await.unwrap().unwrap().juz, 2);
        assert_eq!(ayat.find_by_id(&AyatRef::new(2, 286)).await.unwrap().unwrap().juz, 3);

        assert_eq!(SurahRepository::new(db).count().await.unwrap(), 1);
    }

    /// آمار جزء فقط سوره‌هایی رو نشون میده که ردیف سوره دارن
    #[tokio::test]
    async fn juz_stats_skips_ayat_without_surah_row() {
        let db = Database::in_memory().await.unwrap();
        Importer::new(db.clone())
            .import_surah(&common::surah_document(1))
            .await
            .unwrap();

        // in-memory فقط یک اتصال داره، پس PRAGMA روی همون اعمال میشه
        sqlx::query("PRAGMA foreign_keys = OFF").execute(db.pool()).await.unwrap();
        sqlx::query(
            "INSERT INTO ayat (surah_number, ayat_number, juz, text_arab, text_latin, translation) \
             VALUES (2, 1, 1, '', '', '')",
        )
        .execute(db.pool())
        .await
        .unwrap();

        let stats = AyatRepository::new(db).juz_stats(1).await.unwrap();
        let surahs: Vec<(u16, String)> = stats
            .into_iter()
            .map(|stat| (stat.surah_number, stat.name_latin))
            .collect();
        assert_eq!(surahs, vec![(1, "Surah 1".to_string())]);
    }

    #[tokio::test]
    async fn import_rejects_truncated_surah() {
        let db = Database::in_memory().await.unwrap();
        let mut doc = common::surah_document(1);
        doc.ayat.pop();

        let result = Importer::new(db.clone()).import_surah(&doc).await;
        assert!(matches!(result, Err(AppError::DataIntegrity(_))));

        // هیچ ردیفی نباید نصفه ذخیره بشه
        assert_eq!(SurahRepository::new(db).count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn import_tafsir_requires_ayat() {
        let db = Database::in_memory().await.unwrap();
        let doc = quran_api::import::TafsirDocument {
            surah: 1,
            entries: vec![quran_api::import::TafsirEntry { ayat: 1, text: "x".to_string() }],
        };

        let result = Importer::new(db).import_tafsir(&doc).await;
        assert!(matches!(result, Err(AppError::DataIntegrity(_))));
    }
}

// =====================================
// تست‌های سرویس جزء (با Database)
// =====================================
mod juz_service_tests {
    use pretty_assertions::assert_eq;
    use quran_api::{
        error::AppError,
        models::{AyatRangeQuery, JuzNavTarget, LocateQuery},
    };

    use crate::common;

    fn position(target: &Option<JuzNavTarget>) -> Option<(u8, u16)> {
        target.as_ref().map(|t| (t.juz, t.surah.number))
    }

    #[tokio::test]
    async fn juz_detail_reports_stored_ranges() {
        let state = common::seeded_state().await;
        let detail = state.juz_service.detail(1).await.unwrap();

        let ranges: Vec<_> = detail
            .surahs
            .iter()
            .map(|s| (s.surah_number, s.ayat_count, s.first_ayat, s.last_ayat))
            .collect();
        assert_eq!(ranges, vec![(1, 7, 1, 7), (2, 141, 1, 141)]);
        assert_eq!(detail.total_ayat, 148);
        assert_eq!(detail.previous, None);
        assert_eq!(detail.next, Some(2));

        let last = state.juz_service.detail(30).await.unwrap();
        assert_eq!(last.surahs.len(), 37);
        assert_eq!(last.next, None);
    }

    #[tokio::test]
    async fn juz_detail_rejects_out_of_range() {
        let state = common::seeded_state().await;

        assert!(matches!(state.juz_service.detail(0).await, Err(AppError::BadRequest(_))));
        assert!(matches!(state.juz_service.detail(31).await, Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn juz_surah_terminal_navigation() {
        let state = common::seeded_state().await;

        let first = state
            .juz_service
            .surah_in_juz(1, 1, AyatRangeQuery::default())
            .await
            .unwrap();
        assert_eq!(position(&first.previous), None);
        assert_eq!(position(&first.next), Some((1, 2)));
        assert_eq!(first.ayat.len(), 7);

        let last = state
            .juz_service
            .surah_in_juz(30, 114, AyatRangeQuery::default())
            .await
            .unwrap();
        assert_eq!(position(&last.previous), Some((30, 113)));
        assert_eq!(position(&last.next), None);
    }

    /// عبور از مرز جزء: سوره ادامه‌دار در جزء بعدی
    #[tokio::test]
    async fn juz_surah_crosses_boundary() {
        let state = common::seeded_state().await;

        let baqarah = state
            .juz_service
            .surah_in_juz(1, 2, AyatRangeQuery::default())
            .await
            .unwrap();
        assert_eq!(position(&baqarah.previous), Some((1, 1)));
        assert_eq!(position(&baqarah.next), Some((2, 2)));
        assert_eq!(baqarah.ayat.len(), 141);
        assert_eq!(baqarah.surah.name_latin, "Surah 2");

        let middle = state
            .juz_service
            .surah_in_juz(2, 2, AyatRangeQuery::default())
            .await
            .unwrap();
        assert_eq!(position(&middle.previous), Some((1, 2)));
        assert_eq!(position(&middle.next), Some((3, 2)));
        assert_eq!(middle.ayat.first().map(|a| a.ayat_number), Some(142));
        assert_eq!(middle.ayat.last().map(|a| a.ayat_number), Some(252));
        assert!(middle.ayat.iter().all(|a| a.juz == 2));
    }

    #[tokio::test]
    async fn juz_surah_not_in_juz_is_not_found() {
        let state = common::seeded_state().await;

        let result = state
            .juz_service
            .surah_in_juz(1, 3, AyatRangeQuery::default())
            .await;
        assert!(matches!(result, Err(AppError::NotFound(_))));

        let result = state
            .juz_service
            .surah_in_juz(31, 1, AyatRangeQuery::default())
            .await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    /// بازه درخواستی با بازه جزء اشتراک گرفته میشه
    #[tokio::test]
    async fn juz_surah_range_intersection() {
        let state = common::seeded_state().await;

        let overlap = state
            .juz_service
            .surah_in_juz(2, 2, AyatRangeQuery { from: Some(100), to: Some(150) })
            .await
            .unwrap();
        let numbers: Vec<u16> = overlap.ayat.iter().map(|a| a.ayat_number).collect();
        assert_eq!(numbers, (142..=150).collect::<Vec<_>>());

        // بازه بیرون از جزء: لیست خالی، نه 404
        let outside = state
            .juz_service
            .surah_in_juz(2, 2, AyatRangeQuery { from: Some(1), to: Some(10) })
            .await
            .unwrap();
        assert!(outside.ayat.is_empty());
        assert_eq!(position(&outside.next), Some((3, 2)));

        let inverted = state
            .juz_service
            .surah_in_juz(2, 2, AyatRangeQuery { from: Some(10), to: Some(1) })
            .await;
        assert!(matches!(inverted, Err(AppError::Validation(_))));
    }

    /// از اولین سوره جزء 1 تا آخرین سوره جزء 30، و next/previous قرینه هستن
    #[tokio::test]
    async fn juz_navigation_chain_is_symmetric() {
        let state = common::seeded_state().await;

        let mut current = (1u8, 1u16);
        let mut chain = vec![current];

        loop {
            let page = state
                .juz_service
                .surah_in_juz(current.0, current.1, AyatRangeQuery::default())
                .await
                .unwrap();

            if let Some(&prev) = chain.len().checked_sub(2).and_then(|i| chain.get(i)) {
                assert_eq!(position(&page.previous), Some(prev), "previous of {:?}", current);
            }

            match position(&page.next) {
                Some(next) => {
                    assert!(next > current, "next of {:?} goes backwards", current);
                    chain.push(next);
                    current = next;
                }
                None => break,
            }
        }

        assert_eq!(current, (30, 114));

        // هر سوره حداقل یک بار دیده میشه
        let mut surahs: Vec<u16> = chain.iter().map(|(_, s)| *s).collect();
        surahs.dedup();
        assert_eq!(surahs, (1..=114).collect::<Vec<_>>());
    }

    /// `locate` فقط از جدول ثابت استفاده میکنه
    #[tokio::test]
    async fn juz_locate() {
        let state = common::seeded_state().await;
        let service = &state.juz_service;

        assert_eq!(service.locate(LocateQuery { surah: 2, ayat: 142 }).unwrap().juz, 2);
        assert_eq!(service.locate(LocateQuery { surah: 114, ayat: 6 }).unwrap().juz, 30);
        assert!(matches!(
            service.locate(LocateQuery { surah: 1, ayat: 8 }),
            Err(AppError::BadRequest(_))
        ));
        assert!(matches!(
            service.locate(LocateQuery { surah: 115, ayat: 1 }),
            Err(AppError::Validation(_))
        ));
    }
}

// =====================================
// تست‌های سرویس‌های دیگه
// =====================================
mod content_service_tests {
    use pretty_assertions::assert_eq;
    use quran_api::{
        error::AppError,
        models::{AyatRangeQuery, DoaQuery, PageQuery, SearchQuery},
    };

    use crate::common;

    #[tokio::test]
    async fn surah_list_is_paginated_with_juz() {
        let state = common::seeded_state().await;

        let page = state.surah_service.list(PageQuery::default()).await.unwrap();
        assert_eq!(page.pagination.total_items, 114);
        assert_eq!(page.pagination.per_page, 10);
        assert_eq!(page.pagination.total_pages, 12);
        assert_eq!(page.data[1].juz, vec![1, 2, 3]);

        let filtered = state
            .surah_service
            .list(PageQuery { q: Some("Surah 11".to_string()), ..Default::default() })
            .await
            .unwrap();
        // Surah 11 و Surah 110..=114
        assert_eq!(filtered.pagination.total_items, 6);
    }

    #[tokio::test]
    async fn surah_detail_with_neighbours() {
        let state = common::seeded_state().await;

        let first = state.surah_service.detail(1, AyatRangeQuery::default()).await.unwrap();
        assert!(first.previous.is_none());
        assert_eq!(first.next.map(|s| s.number), Some(2));
        assert_eq!(first.ayat.len(), 7);

        let ranged = state
            .surah_service
            .detail(2, AyatRangeQuery { from: Some(140), to: Some(143) })
            .await
            .unwrap();
        let juz: Vec<u8> = ranged.ayat.iter().map(|a| a.juz).collect();
        assert_eq!(juz, vec![1, 1, 2, 2]);

        assert!(matches!(
            state.surah_service.detail(115, AyatRangeQuery::default()).await,
            Err(AppError::BadRequest(_))
        ));
    }

    #[tokio::test]
    async fn ayat_get_and_search() {
        let state = common::seeded_state().await;

        let ayat = state.ayat_service.get(18, 75).await.unwrap();
        assert_eq!(ayat.juz, 16);

        // آیه بیرون از سوره قبل از رسیدن به دیتابیس رد میشه
        assert!(matches!(state.ayat_service.get(1, 8).await, Err(AppError::BadRequest(_))));
        assert!(matches!(state.ayat_service.get(1, 0).await, Err(AppError::BadRequest(_))));

        let results = state
            .ayat_service
            .search(SearchQuery { q: "rahmat".to_string(), page: None, per_page: None })
            .await
            .unwrap();
        assert_eq!(results.pagination.total_items, 1);
        assert_eq!(results.data[0].surah_number, 1);
        assert_eq!(results.data[0].ayat_number, 3);
    }

    #[tokio::test]
    async fn tafsir_lookup() {
        let state = common::seeded_state().await;

        let tafsir = state
            .tafsir_service
            .for_surah(1, AyatRangeQuery { from: Some(2), to: Some(4) })
            .await
            .unwrap();
        assert_eq!(tafsir.tafsir.len(), 3);
        assert_eq!(tafsir.surah.number, 1);

        assert_eq!(state.tafsir_service.for_ayat(1, 7).await.unwrap().text, "tafsir 1:7");
        assert!(matches!(state.tafsir_service.for_ayat(2, 1).await, Err(AppError::NotFound(_))));
        assert!(matches!(state.tafsir_service.for_ayat(1, 0).await, Err(AppError::BadRequest(_))));
        assert!(matches!(state.tafsir_service.for_ayat(1, 8).await, Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn doa_filters_and_groups() {
        let state = common::seeded_state().await;

        let all = state.doa_service.list(DoaQuery::default()).await.unwrap();
        assert_eq!(all.pagination.total_items, 3);

        let tagged = state
            .doa_service
            .list(DoaQuery { tag: Some("harian".to_string()), ..Default::default() })
            .await
            .unwrap();
        let ids: Vec<i64> = tagged.data.iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![1, 2]);

        let searched = state
            .doa_service
            .list(DoaQuery { q: Some("makan".to_string()), ..Default::default() })
            .await
            .unwrap();
        assert_eq!(searched.data.len(), 1);

        let groups: Vec<(String, i64)> = state
            .doa_service
            .groups()
            .await
            .unwrap()
            .into_iter()
            .map(|g| (g.group_name, g.count))
            .collect();
        assert_eq!(
            groups,
            vec![("Makan".to_string(), 1), ("Malam".to_string(), 1), ("Pagi".to_string(), 1)]
        );

        assert!(matches!(state.doa_service.get(99).await, Err(AppError::NotFound(_))));
    }
}

// =====================================
// تست‌های Router (HTTP)
// =====================================
mod router_tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        Router,
    };
    use pretty_assertions::assert_eq;
    use quran_api::api::{create_router, RequestId};
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::common;

    async fn app() -> Router {
        create_router(common::seeded_database().await, common::test_config())
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn health_reports_database() {
        let (status, body) = get(app().await, "/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["database"], true);
    }

    #[tokio::test]
    async fn juz_surah_endpoint() {
        let (status, body) = get(app().await, "/api/juz/1/surah/2?from=140").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["juz"], 1);
        assert_eq!(body["data"]["ayat"].as_array().unwrap().len(), 2);
        assert_eq!(body["data"]["previous"]["surah"]["number"], 1);
        assert_eq!(body["data"]["next"]["juz"], 2);
        assert_eq!(body["data"]["next"]["surah"]["number"], 2);
    }

    #[tokio::test]
    async fn juz_surah_endpoint_not_found() {
        let (status, body) = get(app().await, "/api/juz/1/surah/3").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["status_code"], 404);
    }

    #[tokio::test]
    async fn juz_locate_endpoint() {
        let (status, body) = get(app().await, "/api/juz/locate?surah=2&ayat=142").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["juz"], 2);

        let (status, _) = get(app().await, "/api/juz/locate?surah=2").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn bad_path_and_range_are_client_errors() {
        let (status, _) = get(app().await, "/api/juz/abc").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = get(app().await, "/api/surah/2?from=5&to=2").await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

        let (status, _) = get(app().await, "/api/juz/31").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn ayat_outside_surah_is_bad_request() {
        let (status, body) = get(app().await, "/api/surah/1/ayat/8").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["status_code"], 400);

        let (status, _) = get(app().await, "/api/tafsir/1/0").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, body) = get(app().await, "/api/surah/1/ayat/7").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["juz"], 1);
    }

    #[tokio::test]
    async fn juz_list_endpoint() {
        let (status, body) = get(app().await, "/api/juz").await;

        assert_eq!(status, StatusCode::OK);
        let juz = body["data"].as_array().unwrap();
        assert_eq!(juz.len(), 30);
        assert_eq!(juz[0]["end"]["ayat"], 141);
        assert_eq!(juz[29]["end"]["surah"], 114);
    }

    #[tokio::test]
    async fn response_carries_request_id() {
        let response = app()
            .await
            .oneshot(
                Request::builder()
                    .uri("/api/doa/groups")
                    .header(RequestId::HEADER_NAME, "abc123")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[RequestId::HEADER_NAME], "abc123");
    }
}
