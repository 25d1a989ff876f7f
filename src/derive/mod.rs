//! Derived-value rules shared by every panel.
//!
//! - [`classify`] - button number, parity, special marker
//! - [`text_stats`] - character counts, reversal, word/vowel/consonant analysis

pub mod classify;
pub mod text_stats;

pub use classify::{button_number, classify, digit_run, ButtonClass, Category, SPECIAL_NUMBER};
pub use text_stats::{char_count, reversed, words, TextStats};
