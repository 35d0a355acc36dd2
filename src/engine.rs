//! Game engine for Wordmania
//!
//! `GameEngine` owns the word bank, the session-private secret word and
//! used-word set, and the current [`GameState`] snapshot. Every operation
//! builds a new snapshot and publishes it to subscribed observers, in order.
//!
//! # Round lifecycle
//! `select_game_mode` → `start_play` → (`submit_guess` | `skip_word`)* → `end_game`,
//! with `reset_game` returning to the pre-session state at any point.

use crate::error::EngineError;
use crate::game_state::{GameState, GuessOutcome, MAX_WORD, ResultSummary, SCORE_INCREASE};
use crate::puzzle::{self, GameMode};
use crate::{debug_log, info_log};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use std::collections::HashSet;
use std::rc::Rc;

/// Receives every snapshot the engine publishes.
pub trait StateObserver {
    fn on_state_changed(&mut self, state: &Rc<GameState>);
}

impl<F> StateObserver for F
where
    F: FnMut(&Rc<GameState>),
{
    fn on_state_changed(&mut self, state: &Rc<GameState>) {
        self(state);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(usize);

pub struct GameEngine {
    words: Vec<String>,
    state: Rc<GameState>,
    secret_word: Option<String>,
    used_words: HashSet<String>,
    rng: StdRng,
    observers: Vec<(SubscriptionId, Box<dyn StateObserver>)>,
    next_subscription: usize,
}

impl GameEngine {
    /// Engine with an OS-seeded RNG.
    pub fn new(words: Vec<String>) -> Result<Self, EngineError> {
        Self::with_rng(words, StdRng::from_os_rng())
    }

    /// Engine whose word selection is reproducible for a given seed.
    pub fn with_seed(words: Vec<String>, seed: u64) -> Result<Self, EngineError> {
        Self::with_rng(words, StdRng::seed_from_u64(seed))
    }

    fn with_rng(words: Vec<String>, rng: StdRng) -> Result<Self, EngineError> {
        if words.is_empty() {
            return Err(EngineError::EmptyWordBank);
        }
        info_log!("GameEngine created with {} words", words.len());
        Ok(Self {
            words,
            state: Rc::new(GameState::default()),
            secret_word: None,
            used_words: HashSet::new(),
            rng,
            observers: Vec::new(),
            next_subscription: 0,
        })
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The latest snapshot. It never changes once handed out.
    #[must_use]
    pub fn snapshot(&self) -> Rc<GameState> {
        Rc::clone(&self.state)
    }

    #[must_use]
    pub fn word_bank_size(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn used_word_count(&self) -> usize {
        self.used_words.len()
    }

    pub fn subscribe<O>(&mut self, observer: O) -> SubscriptionId
    where
        O: StateObserver + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sub, _)| *sub != id);
        self.observers.len() != before
    }

    fn publish(&mut self, next: GameState) {
        self.state = Rc::new(next);
        for (_, observer) in &mut self.observers {
            observer.on_state_changed(&self.state);
        }
    }

    fn round_active(&self) -> bool {
        self.secret_word.is_some() && !self.state.end_game
    }

    /// Start a new session in `mode`, discarding any previous one.
    pub fn select_game_mode(&mut self, mode: GameMode) {
        info_log!("select_game_mode() - {}", mode);
        self.used_words.clear();
        self.secret_word = None;
        self.publish(GameState {
            game_mode: Some(mode),
            ..GameState::default()
        });
    }

    /// Present the first word of the session.
    ///
    /// Ignored (returns `false`) when no mode is selected or a round is
    /// already in progress.
    pub fn start_play(&mut self) -> bool {
        let Some(mode) = self.state.game_mode else {
            log::warn!("start_play() called before a game mode was selected");
            return false;
        };
        if self.secret_word.is_some() {
            log::warn!("start_play() called while a session is already running");
            return false;
        }

        let current_word = self.next_round(mode);
        log::info!("Session started in {} mode", mode);
        self.publish(GameState {
            current_word,
            ..(*self.state).clone()
        });
        true
    }

    pub fn update_user_guess(&mut self, text: &str) {
        debug_log!("update_user_guess() - '{}'", text);
        self.publish(GameState {
            user_guess: text.trim().to_string(),
            ..(*self.state).clone()
        });
    }

    /// Check the buffered guess against the secret word.
    ///
    /// The guess buffer is cleared whatever the outcome, in the same snapshot.
    pub fn submit_guess(&mut self) -> GuessOutcome {
        let (Some(secret), Some(mode)) = (self.secret_word.as_deref(), self.state.game_mode) else {
            log::warn!("submit_guess() called with no active round");
            return GuessOutcome::Ignored;
        };
        if self.state.end_game {
            log::warn!("submit_guess() called after the game ended");
            return GuessOutcome::Ignored;
        }

        let current = (*self.state).clone();
        if !puzzle::guess_matches(&current.user_guess, secret) {
            debug_log!("submit_guess() - wrong guess '{}'", current.user_guess);
            self.publish(GameState {
                is_guess_wrong: true,
                user_guess: String::new(),
                ..current
            });
            return GuessOutcome::Wrong;
        }

        let score = current.score + SCORE_INCREASE;
        let next = if current.word_count >= MAX_WORD {
            log::info!("Final word guessed, score {}", score);
            GameState {
                is_guess_wrong: false,
                score,
                end_game: true,
                user_guess: String::new(),
                ..current
            }
        } else {
            GameState {
                is_guess_wrong: false,
                score,
                word_count: current.word_count + 1,
                current_word: self.next_round(mode),
                user_guess: String::new(),
                ..current
            }
        };
        self.publish(next);
        GuessOutcome::Correct
    }

    /// Give up on the current word. On the last round this ends the game
    /// without presenting a new word.
    pub fn skip_word(&mut self) -> bool {
        if !self.round_active() {
            log::warn!("skip_word() called with no active round");
            return false;
        }
        let Some(mode) = self.state.game_mode else {
            return false;
        };

        let current = (*self.state).clone();
        let next = if current.word_count >= MAX_WORD {
            log::info!("Final word skipped");
            GameState {
                end_game: true,
                skip_count: current.skip_count + 1,
                ..current
            }
        } else {
            debug_log!("skip_word() - skipping round {}", current.word_count);
            GameState {
                word_count: current.word_count + 1,
                skip_count: current.skip_count + 1,
                current_word: self.next_round(mode),
                ..current
            }
        };
        self.publish(next);
        true
    }

    /// Back to the pre-session state. Safe to call at any time.
    pub fn reset_game(&mut self) {
        info_log!("reset_game() - clearing {} used words", self.used_words.len());
        self.used_words.clear();
        self.secret_word = None;
        self.publish(GameState::default());
    }

    #[must_use]
    pub fn star_rating(&self) -> u32 {
        puzzle::star_rating(self.state.score)
    }

    #[must_use]
    pub fn score_percentage(&self) -> f64 {
        puzzle::score_percentage(self.state.score, self.state.word_count)
    }

    /// End-of-game figures, once the last round has been resolved.
    #[must_use]
    pub fn result_summary(&self) -> Option<ResultSummary> {
        self.state.end_game.then(|| ResultSummary {
            star_count: self.star_rating(),
            final_score: self.state.score,
            percentage: self.score_percentage(),
            words_skipped: self.state.skip_count,
        })
    }

    /// Pick the next secret word and return its masked form.
    fn next_round(&mut self, mode: GameMode) -> String {
        let word = self.pick_word();
        let masked = puzzle::make_hole(&word, mode);
        debug_log!("next_round() - presenting '{}'", masked);
        self.secret_word = Some(word);
        masked
    }

    /// Uniform choice among words not yet used this session.
    fn pick_word(&mut self) -> String {
        if self.words.iter().all(|w| self.used_words.contains(w)) {
            self.recycle_pool();
        }

        let available: Vec<&String> = self
            .words
            .iter()
            .filter(|w| !self.used_words.contains(*w))
            .collect();
        let word = available
            .choose(&mut self.rng)
            .map(|w| (*w).clone())
            .or_else(|| self.words.first().cloned())
            .unwrap_or_default();

        self.used_words.insert(word.clone());
        word
    }

    /// Every word has been used: start over, keeping only the word just
    /// played out of the pool so it is not shown twice in a row.
    fn recycle_pool(&mut self) {
        log::warn!(
            "All {} words used this session, recycling the word pool",
            self.words.len()
        );
        self.used_words.clear();
        if self.words.len() > 1
            && let Some(last) = &self.secret_word
        {
            self.used_words.insert(last.clone());
        }
    }
}
