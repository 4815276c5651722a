//! # مدل دعا
//!
//! دعاها مستقل از سوره و آیه هستن و با شناسه منبع بیرونی آدرس‌دهی میشن

use serde::{Deserialize, Serialize};
use sqlx::{types::Json, FromRow};

// =====================================
// Doa Entity
// =====================================
/// Entity دعا
#[derive(Debug, Clone, FromRow)]
pub struct Doa {
    /// شناسه منبع بیرونی (یکتا)
    pub id: i64,

    /// گروه / دسته
    pub grp: String,

    pub name: String,
    pub text_arab: String,
    pub text_latin: String,
    pub meaning: String,
    pub description: String,

    /// برچسب‌های آزاد
    pub tags: Json<Vec<String>>,
}

/// پاسخ دعا
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoaResponse {
    pub id: i64,
    pub group: String,
    pub name: String,
    pub text_arab: String,
    pub text_latin: String,
    pub meaning: String,
    pub description: String,
    pub tags: Vec<String>,
}

impl From<Doa> for DoaResponse {
    fn from(doa: Doa) -> Self {
        Self {
            id: doa.id,
            group: doa.grp,
            name: doa.name,
            text_arab: doa.text_arab,
            text_latin: doa.text_latin,
            meaning: doa.meaning,
            description: doa.description,
            tags: doa.tags.0,
        }
    }
}

/// یک گروه دعا با تعداد اعضا
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct DoaGroup {
    pub group_name: String,
    pub count: i64,
}
