//! Output casing and display grouping.

use serde::Serialize;

/// Case applied to converted output.
///
/// Detected from the description file: an alphabet written with any
/// lowercase symbol selects [`OutputCase::Lower`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputCase {
    /// Emit converted text in uppercase.
    Upper,
    /// Emit converted text in lowercase.
    Lower,
}

impl OutputCase {
    /// Applies this case to `text`.
    #[must_use]
    pub fn apply(self, text: &str) -> String {
        match self {
            Self::Upper => text.to_uppercase(),
            Self::Lower => text.to_lowercase(),
        }
    }
}

/// Groups `text` into five-symbol blocks separated by single spaces.
///
/// The result carries no trailing separator, and an empty input stays
/// empty.
#[must_use]
pub fn group_fives(text: &str) -> String {
    let mut grouped = String::with_capacity(text.len() + text.len() / 5);
    for (i, symbol) in text.chars().enumerate() {
        if i > 0 && i % 5 == 0 {
            grouped.push(' ');
        }
        grouped.push(symbol);
    }
    grouped
}
