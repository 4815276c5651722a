//! # HTTP Handlers
//!
//! هر handler یک async function هست که داده رو از request استخراج
//! میکنه، سرویس مربوط رو صدا میزنه و نتیجه رو در `ApiResponse` برمیگردونه.

pub mod surah;
pub mod ayat;
pub mod juz;
pub mod tafsir;
pub mod doa;
pub mod health;
