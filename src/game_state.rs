use crate::engine::GameEngine;
use crate::info_log;
use crate::puzzle::GameMode;

pub const MAX_WORD: u32 = 10;
pub const SCORE_INCREASE: u32 = 10;

/// Snapshot of everything the presentation layer renders.
///
/// Replaced wholesale by the engine on every operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    /// Secret word with the hidden letter class masked. Empty before play.
    pub current_word: String,
    pub game_mode: Option<GameMode>,
    pub user_guess: String,
    pub is_guess_wrong: bool,
    pub score: u32,
    pub word_count: u32,
    pub skip_count: u32,
    pub end_game: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            current_word: String::new(),
            game_mode: None,
            user_guess: String::new(),
            is_guess_wrong: false,
            score: 0,
            word_count: 1,
            skip_count: 0,
            end_game: false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuessOutcome {
    Correct,
    Wrong,
    /// No round was active.
    Ignored,
}

/// Figures shown on the results screen.
#[derive(Clone, Debug, PartialEq)]
pub struct ResultSummary {
    pub star_count: u32,
    pub final_score: u32,
    pub percentage: f64,
    pub words_skipped: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UserAction {
    ChooseMode(GameMode),
    Guess(String),
    Skip,
    Quit,
    Resume,
    Restart,
    Exit,
}

/// Presentation layer driven by [`game_loop`].
///
/// `read_*` methods return `None` for input that should simply be asked for
/// again.
pub trait GameInterface {
    fn display_welcome(&mut self, word_bank_size: usize);
    fn read_mode(&mut self) -> Option<UserAction>;
    fn display_round(&mut self, state: &GameState);
    fn read_action(&mut self) -> Option<UserAction>;
    fn confirm_quit(&mut self) -> Option<UserAction>;
    fn display_results(&mut self, summary: &ResultSummary);
    fn read_result_choice(&mut self) -> Option<UserAction>;
    fn display_exit_message(&mut self);
}

enum SessionEnd {
    Finished,
    Abandoned,
    Exit,
}

/// Run sessions until the player exits. Returns the summary of every
/// session that reached the results screen.
pub fn game_loop<I: GameInterface>(
    engine: &mut GameEngine,
    interface: &mut I,
    preset_mode: Option<GameMode>,
) -> Vec<ResultSummary> {
    interface.display_welcome(engine.word_bank_size());

    let mut preset_mode = preset_mode;
    let mut summaries = Vec::new();

    loop {
        let mode = match preset_mode.take().or_else(|| read_mode(interface)) {
            Some(mode) => mode,
            None => break,
        };

        engine.select_game_mode(mode);
        engine.start_play();

        match play_session(engine, interface) {
            SessionEnd::Abandoned => continue,
            SessionEnd::Exit => break,
            SessionEnd::Finished => {}
        }

        if let Some(summary) = engine.result_summary() {
            log::info!(
                "Session finished: score {}, {} skipped",
                summary.final_score,
                summary.words_skipped
            );
            interface.display_results(&summary);
            summaries.push(summary);
        }

        if !read_restart(interface) {
            break;
        }
        engine.reset_game();
    }

    engine.reset_game();
    interface.display_exit_message();
    summaries
}

/// `None` means the player chose to exit.
fn read_mode<I: GameInterface>(interface: &mut I) -> Option<GameMode> {
    loop {
        match interface.read_mode() {
            Some(UserAction::ChooseMode(mode)) => return Some(mode),
            Some(UserAction::Exit) => return None,
            _ => {}
        }
    }
}

fn play_session<I: GameInterface>(engine: &mut GameEngine, interface: &mut I) -> SessionEnd {
    loop {
        let state = engine.snapshot();
        if state.end_game {
            return SessionEnd::Finished;
        }
        interface.display_round(&state);

        match interface.read_action() {
            Some(UserAction::Guess(text)) => {
                engine.update_user_guess(&text);
                let outcome = engine.submit_guess();
                info_log!("play_session() - guess '{}' was {:?}", text, outcome);
            }
            Some(UserAction::Skip) => {
                engine.skip_word();
            }
            Some(UserAction::Quit) => match read_quit_confirmation(interface) {
                UserAction::Quit => {
                    log::info!("Session abandoned at word {}", state.word_count);
                    engine.reset_game();
                    return SessionEnd::Abandoned;
                }
                UserAction::Exit => return SessionEnd::Exit,
                _ => {}
            },
            Some(UserAction::Exit) => return SessionEnd::Exit,
            _ => {}
        }
    }
}

/// Resolves to `Resume`, `Quit` or `Exit`.
fn read_quit_confirmation<I: GameInterface>(interface: &mut I) -> UserAction {
    loop {
        match interface.confirm_quit() {
            Some(action @ (UserAction::Resume | UserAction::Quit | UserAction::Exit)) => {
                return action;
            }
            _ => {}
        }
    }
}

fn read_restart<I: GameInterface>(interface: &mut I) -> bool {
    loop {
        match interface.read_result_choice() {
            Some(UserAction::Restart) => return true,
            Some(UserAction::Exit) => return false,
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    /// Replays a fixed script of answers; exits once the script runs out.
    #[derive(Default)]
    struct ScriptedInterface {
        script: VecDeque<Option<UserAction>>,
        rounds_shown: Vec<GameState>,
        results: Vec<ResultSummary>,
        exited: bool,
    }

    impl ScriptedInterface {
        fn new(script: Vec<Option<UserAction>>) -> Self {
            Self {
                script: script.into(),
                ..Self::default()
            }
        }

        fn next(&mut self) -> Option<UserAction> {
            self.script.pop_front().unwrap_or(Some(UserAction::Exit))
        }
    }

    impl GameInterface for ScriptedInterface {
        fn display_welcome(&mut self, _word_bank_size: usize) {}

        fn read_mode(&mut self) -> Option<UserAction> {
            self.next()
        }

        fn display_round(&mut self, state: &GameState) {
            self.rounds_shown.push(state.clone());
        }

        fn read_action(&mut self) -> Option<UserAction> {
            self.next()
        }

        fn confirm_quit(&mut self) -> Option<UserAction> {
            self.next()
        }

        fn display_results(&mut self, summary: &ResultSummary) {
            self.results.push(summary.clone());
        }

        fn read_result_choice(&mut self) -> Option<UserAction> {
            self.next()
        }

        fn display_exit_message(&mut self) {
            self.exited = true;
        }
    }

    fn single_word_engine() -> GameEngine {
        GameEngine::with_seed(vec!["planet".to_string()], 1).unwrap()
    }

    fn guess(text: &str) -> Option<UserAction> {
        Some(UserAction::Guess(text.to_string()))
    }

    #[test]
    fn test_default_state() {
        let state = GameState::default();
        assert!(state.current_word.is_empty());
        assert_eq!(state.game_mode, None);
        assert!(state.user_guess.is_empty());
        assert!(!state.is_guess_wrong);
        assert_eq!(state.score, 0);
        assert_eq!(state.word_count, 1);
        assert_eq!(state.skip_count, 0);
        assert!(!state.end_game);
    }

    #[test]
    fn test_game_loop_immediate_exit() {
        let mut engine = single_word_engine();
        let mut interface = ScriptedInterface::new(vec![Some(UserAction::Exit)]);

        let summaries = game_loop(&mut engine, &mut interface, None);

        assert!(summaries.is_empty());
        assert!(interface.exited);
        assert!(interface.rounds_shown.is_empty());
    }

    #[test]
    fn test_game_loop_invalid_mode_input_is_asked_again() {
        let mut engine = single_word_engine();
        let mut interface = ScriptedInterface::new(vec![
            None,
            Some(UserAction::Skip),
            Some(UserAction::ChooseMode(GameMode::HiddenConsonants)),
            Some(UserAction::Exit),
        ]);

        game_loop(&mut engine, &mut interface, None);

        assert_eq!(interface.rounds_shown.len(), 1);
        assert_eq!(interface.rounds_shown[0].current_word, "**a*e*");
    }

    #[test]
    fn test_game_loop_full_session_then_exit() {
        let mut script = vec![Some(UserAction::ChooseMode(GameMode::HiddenVowels))];
        for _ in 0..MAX_WORD {
            script.push(guess("planet"));
        }
        script.push(Some(UserAction::Exit));
        let mut engine = single_word_engine();
        let mut interface = ScriptedInterface::new(script);

        let summaries = game_loop(&mut engine, &mut interface, None);

        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].final_score, 100);
        assert_eq!(summaries[0].star_count, 5);
        assert_eq!(interface.results, summaries);
        assert_eq!(*engine.state(), GameState::default());
    }

    #[test]
    fn test_game_loop_wrong_guess_shown_on_next_round() {
        let mut engine = single_word_engine();
        let mut interface = ScriptedInterface::new(vec![
            Some(UserAction::ChooseMode(GameMode::HiddenVowels)),
            guess("comet"),
            Some(UserAction::Exit),
        ]);

        game_loop(&mut engine, &mut interface, None);

        assert_eq!(interface.rounds_shown.len(), 2);
        assert!(!interface.rounds_shown[0].is_guess_wrong);
        assert!(interface.rounds_shown[1].is_guess_wrong);
        assert_eq!(interface.rounds_shown[1].word_count, 1);
    }

    #[test]
    fn test_game_loop_preset_mode_skips_first_prompt() {
        let mut engine = single_word_engine();
        let mut interface = ScriptedInterface::new(vec![Some(UserAction::Exit)]);

        game_loop(&mut engine, &mut interface, Some(GameMode::HiddenVowels));

        assert_eq!(interface.rounds_shown.len(), 1);
        assert_eq!(interface.rounds_shown[0].current_word, "pl*n*t");
    }

    #[test]
    fn test_game_loop_quit_resume_keeps_session() {
        let mut engine = single_word_engine();
        let mut interface = ScriptedInterface::new(vec![
            Some(UserAction::ChooseMode(GameMode::HiddenVowels)),
            Some(UserAction::Skip),
            Some(UserAction::Quit),
            Some(UserAction::Resume),
            Some(UserAction::Exit),
        ]);

        game_loop(&mut engine, &mut interface, None);

        let last = interface.rounds_shown.last().unwrap();
        assert_eq!(last.word_count, 2);
        assert_eq!(last.skip_count, 1);
    }

    #[test]
    fn test_game_loop_quit_confirmed_returns_to_mode_selection() {
        let mut engine = single_word_engine();
        let mut interface = ScriptedInterface::new(vec![
            Some(UserAction::ChooseMode(GameMode::HiddenVowels)),
            Some(UserAction::Skip),
            Some(UserAction::Quit),
            Some(UserAction::Quit),
            Some(UserAction::ChooseMode(GameMode::HiddenConsonants)),
            Some(UserAction::Exit),
        ]);

        let summaries = game_loop(&mut engine, &mut interface, None);

        assert!(summaries.is_empty());
        let last = interface.rounds_shown.last().unwrap();
        assert_eq!(last.game_mode, Some(GameMode::HiddenConsonants));
        assert_eq!(last.word_count, 1);
        assert_eq!(last.skip_count, 0);
    }

    #[test]
    fn test_game_loop_restart_plays_second_session() {
        let mut script = vec![Some(UserAction::ChooseMode(GameMode::HiddenVowels))];
        script.extend((0..MAX_WORD).map(|_| Some(UserAction::Skip)));
        script.push(Some(UserAction::Restart));
        script.push(Some(UserAction::ChooseMode(GameMode::HiddenConsonants)));
        script.extend((0..MAX_WORD).map(|_| guess("PLANET")));
        script.push(Some(UserAction::Exit));

        let mut engine = single_word_engine();
        let mut interface = ScriptedInterface::new(script);
        let summaries = game_loop(&mut engine, &mut interface, None);

        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].final_score, 0);
        assert_eq!(summaries[0].words_skipped, MAX_WORD);
        assert_eq!(summaries[0].star_count, 0);
        assert_eq!(summaries[1].final_score, 100);
        assert_eq!(summaries[1].words_skipped, 0);
    }
}
