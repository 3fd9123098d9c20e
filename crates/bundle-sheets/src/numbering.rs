#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const ROMAN_NUMERALS: [&str; 30] = [
    "I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX", "X", "XI", "XII", "XIII", "XIV", "XV",
    "XVI", "XVII", "XVIII", "XIX", "XX", "XXI", "XXII", "XXIII", "XXIV", "XXV", "XXVI", "XXVII",
    "XXVIII", "XXIX", "XXX",
];

/// Ordinal style used for appendix labels in the TOC, on cover sheets
/// and in first-page markings.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NumberingStyle {
    /// 1, 2, 3, ...
    #[default]
    Arabic,
    /// I, II, III, ... (falls back to digits past XXX)
    Roman,
    /// A, B, C, ... (falls back to digits past Z)
    Letters,
}

impl NumberingStyle {
    /// Format a 1-based appendix ordinal.
    pub fn label(self, index: usize) -> String {
        match self {
            NumberingStyle::Arabic => index.to_string(),
            NumberingStyle::Roman => match index {
                1..=30 => ROMAN_NUMERALS[index - 1].to_string(),
                _ => index.to_string(),
            },
            NumberingStyle::Letters => match index {
                1..=26 => char::from(b'A' + (index as u8 - 1)).to_string(),
                _ => index.to_string(),
            },
        }
    }
}
