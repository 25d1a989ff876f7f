//! Number/parity classifier.
//!
//! Every panel that cares about the selected button's number goes through
//! [`classify`]. Nothing else in the crate scans `display_text` for digits.

use std::sync::LazyLock;

use regex::Regex;

/// The number that marks a button as special.
pub const SPECIAL_NUMBER: u64 = 1000;

// ASCII only: `\d` would also match non-ASCII decimal digits.
static DIGIT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[0-9]+").expect("digit pattern is valid"));

/// Visual category of a button, resolved in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Special,
    Even,
    Odd,
    Idle,
}

impl Category {
    /// Short badge text for the category.
    pub fn badge(self) -> &'static str {
        match self {
            Self::Special => "SPECIAL",
            Self::Even => "EVEN",
            Self::Odd => "ODD",
            Self::Idle => "Waiting...",
        }
    }
}

/// Result of classifying a button's display text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ButtonClass {
    /// First digit run parsed as an integer, 0 when there is none.
    pub number: u64,
    pub is_even: bool,
    pub is_odd: bool,
    pub is_special: bool,
}

impl ButtonClass {
    /// True when a non-zero number was found.
    pub fn has_number(&self) -> bool {
        self.number > 0
    }

    /// Resolve the category: special > even > odd > idle.
    pub fn category(&self) -> Category {
        if self.is_special {
            Category::Special
        } else if self.is_even {
            Category::Even
        } else if self.number > 0 {
            Category::Odd
        } else {
            Category::Idle
        }
    }

    /// The number as a 1-based slot, if it falls within `1..=slots`.
    pub fn slot(&self, slots: u64) -> Option<usize> {
        (1..=slots)
            .contains(&self.number)
            .then_some(self.number as usize)
    }
}

/// The first maximal run of ASCII digits in `text`, verbatim.
pub fn digit_run(text: &str) -> Option<&str> {
    DIGIT_RUN.find(text).map(|m| m.as_str())
}

/// Extract the button number: the first digit run, or 0 when there is none.
///
/// Runs too long for `u64` saturate at `u64::MAX`.
pub fn button_number(text: &str) -> u64 {
    digit_run(text).map(parse_saturating).unwrap_or(0)
}

/// Classify a button's display text. Total: never fails.
pub fn classify(display_text: &str) -> ButtonClass {
    let Some(digits) = digit_run(display_text) else {
        return ButtonClass::default();
    };

    let number = parse_saturating(digits);
    let positive = number > 0;
    // Parity from the last digit keeps saturated values exact.
    let last_even = digits
        .bytes()
        .last()
        .is_some_and(|b| (b - b'0') % 2 == 0);

    ButtonClass {
        number,
        is_even: positive && last_even,
        is_odd: positive && !last_even,
        is_special: number == SPECIAL_NUMBER,
    }
}

fn parse_saturating(digits: &str) -> u64 {
    digits.bytes().fold(0u64, |acc, b| {
        acc.saturating_mul(10).saturating_add(u64::from(b - b'0'))
    })
}
