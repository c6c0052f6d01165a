//! Quiz round lifecycle: draw identifiers, fetch candidates, pick the
//! correct entry, judge answers, advance.

use crate::config::Config;
use crate::lang::DisplayLanguage;
use crate::pokeapi::{FetchError, PokeClient};
use crate::round::{CreatureRecord, RoundError, RoundPhase, RoundState, CHOICE_COUNT};
use futures::future::join_all;
use rand::{thread_rng, Rng};
use serde::Serialize;
use tracing::{info, warn};

/// Event published to the presentation layer.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum QuizEvent {
    #[serde(rename = "round_ready")]
    RoundReady(RoundState),

    #[serde(rename = "answer_judged")]
    AnswerJudged {
        correct: bool,
        correct_answer: String,
    },
}

/// Result of one answered question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub correct: bool,
    pub correct_answer: String,
}

type Subscriber = Box<dyn Fn(&QuizEvent) + Send + Sync>;

/// Owns the one live round and the display-language flag.
///
/// Round initialization takes `&mut self`, so a second initialization
/// cannot start while one is still in flight.
pub struct QuizController {
    client: PokeClient,
    max_pokemon_id: u32,
    language: DisplayLanguage,
    round: Option<RoundState>,
    phase: RoundPhase,
    subscribers: Vec<Subscriber>,
}

impl QuizController {
    pub fn new(config: Config) -> Result<Self, FetchError> {
        let max_pokemon_id = config.max_pokemon_id;

        Ok(Self {
            client: PokeClient::new(config)?,
            max_pokemon_id,
            language: DisplayLanguage::default(),
            round: None,
            phase: RoundPhase::Idle,
            subscribers: Vec::new(),
        })
    }

    /// Register a presentation-layer callback for published events.
    pub fn subscribe(&mut self, subscriber: impl Fn(&QuizEvent) + Send + Sync + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    fn publish(&self, event: &QuizEvent) {
        for subscriber in &self.subscribers {
            subscriber(event);
        }
    }

    pub fn round(&self) -> Option<&RoundState> {
        self.round.as_ref()
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn language(&self) -> DisplayLanguage {
        self.language
    }

    /// Flip the display language. Stored round data is untouched; only the
    /// rendered/compared label field changes.
    pub fn toggle_language(&mut self) -> DisplayLanguage {
        self.language = self.language.toggled();
        info!("display language switched to {}", self.language.code());
        self.language
    }

    /// Start a new round with randomly drawn identifiers.
    ///
    /// Identifiers are drawn independently and uniformly from
    /// `[1, max_pokemon_id]`; duplicates are allowed.
    pub async fn next_round(&mut self) -> Result<(), RoundError> {
        let ids: [u32; CHOICE_COUNT] = {
            let mut rng = thread_rng();
            std::array::from_fn(|_| rng.gen_range(1..=self.max_pokemon_id))
        };

        self.next_round_with_ids(&ids).await
    }

    /// Start a new round with explicit identifiers.
    ///
    /// On failure the previous round (and phase) is retained; the cause is
    /// logged and returned, not shown as error UI.
    pub async fn next_round_with_ids(
        &mut self,
        ids: &[u32; CHOICE_COUNT],
    ) -> Result<(), RoundError> {
        self.phase = RoundPhase::Fetching;
        info!("starting round, ids {:?}", ids);

        // All four fetches run concurrently; proceed only once every one
        // has settled.
        let results = join_all(ids.iter().map(|&id| self.client.fetch_creature(id))).await;
        let creatures: Vec<CreatureRecord> =
            results.into_iter().filter_map(Result::ok).collect();

        let built = if creatures.len() < CHOICE_COUNT {
            Err(RoundError::NotEnoughCreatures {
                got: creatures.len(),
            })
        } else {
            let correct_index = thread_rng().gen_range(0..CHOICE_COUNT);
            RoundState::from_records(&creatures, correct_index)
        };

        match built {
            Ok(round) => {
                info!(
                    "round ready, correct entry \"{}\"",
                    round.correct.en
                );
                self.round = Some(round.clone());
                self.phase = RoundPhase::Ready;
                self.publish(&QuizEvent::RoundReady(round));
                Ok(())
            }
            Err(e) => {
                warn!("round aborted: {}", e);
                self.phase = match self.round {
                    Some(_) => RoundPhase::Ready,
                    None => RoundPhase::Idle,
                };
                Err(e)
            }
        }
    }

    /// Judge a selected label against the current round, publish the
    /// outcome, then unconditionally start the next round.
    ///
    /// Returns `None` when no round is ready.
    pub async fn submit_answer(&mut self, selected: &str) -> Option<AnswerOutcome> {
        let round = self.round.as_ref()?;
        let correct_answer = round.correct.text(self.language).to_string();
        let correct = self.language.labels_match(selected, &correct_answer);

        self.phase = RoundPhase::Resolving;
        info!(
            "answer \"{}\" judged {}",
            selected,
            if correct { "correct" } else { "incorrect" }
        );
        self.publish(&QuizEvent::AnswerJudged {
            correct,
            correct_answer: correct_answer.clone(),
        });

        // Next question regardless of outcome. An abort here keeps the
        // answered round on display; the failure is already logged.
        let _ = self.next_round().await;

        Some(AnswerOutcome {
            correct,
            correct_answer,
        })
    }

    #[cfg(test)]
    fn install_round(&mut self, round: RoundState) {
        self.round = Some(round);
        self.phase = RoundPhase::Ready;
    }
}
