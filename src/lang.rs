//! Display language for choice labels.
//!
//! The quiz shows each choice in one of two hardcoded languages: the
//! canonical English name from the base record, or the localized Japanese
//! name from the species record.

/// Which of the two label fields is rendered and compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayLanguage {
    #[default]
    English,
    Japanese,
}

impl DisplayLanguage {
    /// ISO 639-1 language code ("en" / "ja").
    pub fn code(&self) -> &'static str {
        match self {
            DisplayLanguage::English => "en",
            DisplayLanguage::Japanese => "ja",
        }
    }

    /// The other language.
    pub fn toggled(&self) -> DisplayLanguage {
        match self {
            DisplayLanguage::English => DisplayLanguage::Japanese,
            DisplayLanguage::Japanese => DisplayLanguage::English,
        }
    }

    /// Compare a user-selected label against the correct one.
    ///
    /// English names are ASCII and compared case-insensitively; Japanese
    /// names are compared exactly.
    pub fn labels_match(&self, selected: &str, correct: &str) -> bool {
        match self {
            DisplayLanguage::English => selected.eq_ignore_ascii_case(correct),
            DisplayLanguage::Japanese => selected == correct,
        }
    }
}
