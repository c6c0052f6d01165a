//! Round data: fetched creature records and the derived question state.

use crate::lang::DisplayLanguage;
use serde::Serialize;
use thiserror::Error;

/// Choices presented per round.
pub const CHOICE_COUNT: usize = 4;

/// One creature as fetched from the API. Immutable once fetched; owned by
/// the round that fetched it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatureRecord {
    pub canonical_name: String,
    /// Localized (Japanese) name; empty when the species record has none.
    pub localized_name: String,
    pub type_tags: Vec<String>,
    pub image_url: Option<String>,
}

/// The two display fields of one choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChoiceLabel {
    pub en: String,
    pub ja: String,
}

impl ChoiceLabel {
    fn for_record(record: &CreatureRecord) -> Self {
        Self {
            en: capitalize_first(&record.canonical_name),
            ja: record.localized_name.clone(),
        }
    }

    /// The field shown and compared in the given display language.
    pub fn text(&self, language: DisplayLanguage) -> &str {
        match language {
            DisplayLanguage::English => &self.en,
            DisplayLanguage::Japanese => &self.ja,
        }
    }
}

#[derive(Debug, Error)]
pub enum RoundError {
    #[error("not enough creature records for a round (got {got}, need 4)")]
    NotEnoughCreatures { got: usize },

    #[error("chosen correct entry \"{name}\" has no image")]
    MissingImage { name: String },
}

/// Everything the presentation layer needs for one question. Replaced
/// wholesale at the start of each round; never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundState {
    pub question_text: String,
    pub image_url: String,
    pub choices: Vec<ChoiceLabel>,
    pub correct: ChoiceLabel,
}

impl RoundState {
    /// Build a round from fetched records with the correct entry already
    /// chosen. Fails when fewer than [`CHOICE_COUNT`] records are available
    /// or the correct entry has no image; the caller keeps its previous
    /// round in that case.
    pub fn from_records(
        records: &[CreatureRecord],
        correct_index: usize,
    ) -> Result<Self, RoundError> {
        if records.len() < CHOICE_COUNT {
            return Err(RoundError::NotEnoughCreatures { got: records.len() });
        }

        let correct_record = &records[correct_index];
        let image_url = match correct_record.image_url.as_deref() {
            Some(url) if !url.is_empty() => url.to_string(),
            _ => {
                return Err(RoundError::MissingImage {
                    name: correct_record.canonical_name.clone(),
                })
            }
        };

        let choices: Vec<ChoiceLabel> = records[..CHOICE_COUNT]
            .iter()
            .map(ChoiceLabel::for_record)
            .collect();
        let correct = choices[correct_index].clone();

        Ok(Self {
            question_text: format!(
                "このポケモンの名前は何ですか？ (タイプ: {})",
                correct_record.type_tags.join(", ")
            ),
            image_url,
            choices,
            correct,
        })
    }
}

/// Phase of the current round, as seen by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RoundPhase {
    Idle,
    Fetching,
    Ready,
    Resolving,
}

/// Capitalize the first letter of a canonical (lowercase API) name for
/// display.
pub fn capitalize_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
