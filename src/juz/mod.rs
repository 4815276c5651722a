//! # ماژول جزء (Juz Resolver)
//!
//! نگاشت بین دو روش آدرس‌دهی یک دنباله ثابت از آیات:
//! - سوره + شماره آیه
//! - تقسیم ۳۰ جزئی کل متن (مرز جزءها معمولا وسط سوره میفته)
//!
//! این ماژول کاملا pure هست: هیچ state قابل تغییری نداره، I/O نمیکنه
//! و از هر تعداد request همزمان بدون قفل قابل استفاده‌ست.
//!
//! ## مفاهیم Rust:
//! - **static array**: جدول ثابت که در باینری قرار میگیره
//! - **derive(Ord)**: ترتیب lexicographic خودکار روی فیلدهای struct
//! - **RangeInclusive**: بازه‌های بسته `a..=b`
//! - **debug_assert!**: بررسی پیش‌شرط فقط در build دیباگ

use serde::{Deserialize, Serialize};
use tracing::error;

// =====================================
// Constants
// =====================================
/// تعداد سوره‌ها
pub const SURAH_COUNT: u16 = 114;

/// تعداد جزءها
pub const JUZ_COUNT: u8 = 30;

/// تعداد کل آیات متن
pub const TOTAL_AYAT: u32 = 6236;

/// تعداد آیات هر سوره (اندیس 0 = سوره 1)
const SURAH_VERSE_COUNTS: [u16; SURAH_COUNT as usize] = [
    7, 286, 200, 176, 120, 165, 206, 75, 129, 109, //   1-10
    123, 111, 43, 52, 99, 128, 111, 110, 98, 135, //  11-20
    112, 78, 118, 64, 77, 227, 93, 88, 69, 60, //  21-30
    34, 30, 73, 54, 45, 83, 182, 88, 75, 85, //  31-40
    54, 53, 89, 59, 37, 35, 38, 29, 18, 45, //  41-50
    60, 49, 62, 55, 78, 96, 29, 22, 24, 13, //  51-60
    14, 11, 11, 18, 12, 12, 30, 52, 52, 44, //  61-70
    28, 28, 20, 56, 40, 31, 50, 40, 46, 42, //  71-80
    29, 19, 36, 25, 22, 17, 19, 26, 30, 20, //  81-90
    15, 21, 11, 8, 8, 19, 5, 8, 8, 11, //  91-100
    11, 8, 3, 9, 5, 4, 7, 3, 6, 3, // 101-110
    5, 4, 5, 6, // 111-114
];

// =====================================
// Ayat Position
// =====================================
/// آدرس یک آیه: (سوره، آیه)
///
/// # مفاهیم:
/// - ترتیب فیلدها مهمه: `derive(Ord)` اول `surah` و بعد `ayat` رو مقایسه میکنه
/// - همین ترتیب canonical متن هست
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AyatRef {
    pub surah: u16,
    pub ayat: u16,
}

impl AyatRef {
    /// ساخت آدرس جدید
    #[must_use]
    pub const fn new(surah: u16, ayat: u16) -> Self {
        Self { surah, ayat }
    }

    /// آیا این آدرس داخل متن وجود داره؟
    #[must_use]
    pub fn is_valid(&self) -> bool {
        surah_verse_count(self.surah).is_some_and(|count| (1..=count).contains(&self.ayat))
    }

    /// آیه قبلی در ترتیب canonical
    ///
    /// برای 1:1 مقدار `None` برمیگرده
    #[must_use]
    pub fn previous(&self) -> Option<Self> {
        if self.ayat > 1 {
            return Some(Self::new(self.surah, self.ayat - 1));
        }
        let prev_surah = self.surah.checked_sub(1)?;
        surah_verse_count(prev_surah).map(|count| Self::new(prev_surah, count))
    }

    /// آیه بعدی در ترتیب canonical
    #[must_use]
    pub fn next(&self) -> Option<Self> {
        let count = surah_verse_count(self.surah)?;
        if self.ayat < count {
            return Some(Self::new(self.surah, self.ayat + 1));
        }
        surah_verse_count(self.surah + 1).map(|_| Self::new(self.surah + 1, 1))
    }
}

impl std::fmt::Display for AyatRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.surah, self.ayat)
    }
}

// =====================================
// Juz Table
// =====================================
/// مرز یک جزء: شروع و پایان (هر دو inclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct JuzBounds {
    pub juz: u8,
    pub start: AyatRef,
    pub end: AyatRef,
}

impl JuzBounds {
    /// آیا این آیه داخل این جزء هست؟
    #[must_use]
    pub fn contains(&self, position: AyatRef) -> bool {
        self.start <= position && position <= self.end
    }
}

const fn bounds(juz: u8, start: (u16, u16), end: (u16, u16)) -> JuzBounds {
    JuzBounds {
        juz,
        start: AyatRef::new(start.0, start.1),
        end: AyatRef::new(end.0, end.1),
    }
}

/// جدول ثابت ۳۰ جزء به ترتیب صعودی
///
/// تنها منبع مرزهای جزء در کل برنامه. بازه‌ها پیوسته‌اند، همپوشانی ندارن
/// و با هم همه ۶۲۳۶ آیه رو دقیقا یک بار پوشش میدن.
pub static JUZ_TABLE: [JuzBounds; JUZ_COUNT as usize] = [
    bounds(1, (1, 1), (2, 141)),
    bounds(2, (2, 142), (2, 252)),
    bounds(3, (2, 253), (3, 92)),
    bounds(4, (3, 93), (4, 23)),
    bounds(5, (4, 24), (4, 147)),
    bounds(6, (4, 148), (5, 81)),
    bounds(7, (5, 82), (6, 110)),
    bounds(8, (6, 111), (7, 87)),
    bounds(9, (7, 88), (8, 40)),
    bounds(10, (8, 41), (9, 92)),
    bounds(11, (9, 93), (11, 5)),
    bounds(12, (11, 6), (12, 52)),
    bounds(13, (12, 53), (14, 52)),
    bounds(14, (15, 1), (16, 128)),
    bounds(15, (17, 1), (18, 74)),
    bounds(16, (18, 75), (20, 135)),
    bounds(17, (21, 1), (22, 78)),
    bounds(18, (23, 1), (25, 20)),
    bounds(19, (25, 21), (27, 55)),
    bounds(20, (27, 56), (29, 45)),
    bounds(21, (29, 46), (33, 30)),
    bounds(22, (33, 31), (36, 27)),
    bounds(23, (36, 28), (39, 31)),
    bounds(24, (39, 32), (41, 46)),
    bounds(25, (41, 47), (45, 37)),
    bounds(26, (46, 1), (51, 30)),
    bounds(27, (51, 31), (57, 29)),
    bounds(28, (58, 1), (66, 12)),
    bounds(29, (67, 1), (77, 50)),
    bounds(30, (78, 1), (114, 6)),
];

// =====================================
// Lookups
// =====================================
/// تعداد آیات canonical یک سوره
///
/// # مثال
/// ```rust
/// use quran_api::juz::surah_verse_count;
///
/// assert_eq!(surah_verse_count(1), Some(7));
/// assert_eq!(surah_verse_count(115), None);
/// ```
#[must_use]
pub fn surah_verse_count(surah: u16) -> Option<u16> {
    let index = usize::from(surah.checked_sub(1)?);
    SURAH_VERSE_COUNTS.get(index).copied()
}

/// آیا شماره سوره معتبره؟
#[must_use]
pub fn is_valid_surah(surah: u16) -> bool {
    (1..=SURAH_COUNT).contains(&surah)
}

/// آیا شماره جزء معتبره؟
#[must_use]
pub fn is_valid_juz(juz: u8) -> bool {
    (1..=JUZ_COUNT).contains(&juz)
}

/// مرز اعلام شده یک جزء
#[must_use]
pub fn juz_bounds(juz: u8) -> Option<&'static JuzBounds> {
    let index = usize::from(juz.checked_sub(1)?);
    JUZ_TABLE.get(index)
}

/// همه جزءها به ترتیب
#[must_use]
pub fn all_juz() -> &'static [JuzBounds] {
    &JUZ_TABLE
}

/// جزء قبلی (برای جزء 1 وجود نداره)
#[must_use]
pub fn previous_juz(juz: u8) -> Option<u8> {
    juz.checked_sub(1).filter(|prev| is_valid_juz(*prev))
}

/// جزء بعدی (برای جزء 30 وجود نداره)
#[must_use]
pub fn next_juz(juz: u8) -> Option<u8> {
    juz.checked_add(1).filter(|next| is_valid_juz(*next))
}

/// پیدا کردن جزءی که یک آیه داخلش هست
///
/// جدول به ترتیب صعودی اسکن میشه؛ چون بازه‌ها همپوشانی ندارن حداکثر یک
/// جزء match میشه. برای ورودی خارج از متن `None` برمیگرده.
///
/// # مثال
/// ```rust
/// use quran_api::juz::juz_of_ayat;
///
/// assert_eq!(juz_of_ayat(2, 141), Some(1));
/// assert_eq!(juz_of_ayat(2, 142), Some(2));
/// assert_eq!(juz_of_ayat(114, 6), Some(30));
/// ```
#[must_use]
pub fn juz_of_ayat(surah: u16, ayat: u16) -> Option<u8> {
    let position = AyatRef::new(surah, ayat);
    debug_assert!(position.is_valid(), "ayat {position} is outside the corpus");

    let found = JUZ_TABLE
        .iter()
        .find(|bounds| bounds.contains(position))
        .map(|bounds| bounds.juz);

    if found.is_none() {
        // با جدول پیوسته، این حالت فقط با داده خراب پیش میاد
        error!(%position, "ayat is not covered by the juz table");
    }

    found
}

/// همه جزءهایی که یک سوره در اونها قرار داره
///
/// جزء آیه اول و آیه آخر حساب میشه و بازه بسته بینشون برگردونده میشه.
/// خروجی صعودی و بدون تکراره.
///
/// # مثال
/// ```rust
/// use quran_api::juz::juz_of_surah;
///
/// assert_eq!(juz_of_surah(1, 7), vec![1]);
/// assert_eq!(juz_of_surah(2, 286), vec![1, 2, 3]);
/// ```
#[must_use]
pub fn juz_of_surah(surah: u16, verse_count: u16) -> Vec<u8> {
    match (juz_of_ayat(surah, 1), juz_of_ayat(surah, verse_count)) {
        (Some(first), Some(last)) => (first..=last).collect(),
        _ => Vec::new(),
    }
}
