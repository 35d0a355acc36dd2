// Library interface for wordmania
// This allows integration tests to access internal modules

pub mod cli;
pub mod engine;
pub mod error;
pub mod game_state;
pub mod logging;
pub mod puzzle;
pub mod wordbank;

// Re-export commonly used items for easier testing
pub use engine::{GameEngine, StateObserver, SubscriptionId};
pub use error::EngineError;
pub use game_state::{
    GameInterface, GameState, GuessOutcome, MAX_WORD, ResultSummary, SCORE_INCREASE, UserAction,
    game_loop,
};
pub use puzzle::{GameMode, MASK_CHAR, make_hole, score_percentage, star_rating};
pub use wordbank::{embedded_wordbank, load_wordbank_from_file, load_wordbank_from_str};
