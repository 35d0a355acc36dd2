use crate::debug_log;
use crate::game_state::{GameInterface, GameState, MAX_WORD, ResultSummary, UserAction};
use crate::puzzle::GameMode;
use clap::Parser;
use std::io::BufRead;
use std::path::PathBuf;

/// Wordmania: guess the word with its vowels or consonants hidden
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited word list
    #[arg(short = 'i', long = "input")]
    pub wordbank_path: Option<String>,

    /// Start the first game in this mode (vowels or consonants)
    #[arg(short = 'm', long = "mode")]
    pub mode: Option<GameMode>,

    /// Seed for reproducible word selection
    #[arg(short = 's', long = "seed")]
    pub seed: Option<u64>,

    /// Write logs here instead of the default data directory
    #[arg(long = "log-file")]
    pub log_file: Option<PathBuf>,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

// Input parsing

pub fn parse_mode_input(input: &str) -> Option<UserAction> {
    match input.trim().to_lowercase().as_str() {
        "exit" => Some(UserAction::Exit),
        other => other.parse::<GameMode>().ok().map(UserAction::ChooseMode),
    }
}

/// Anything that is not a command is a guess. Blank input is rejected.
pub fn parse_game_input(input: &str) -> Option<UserAction> {
    let input = input.trim();
    match input.to_lowercase().as_str() {
        "" => None,
        "skip" => Some(UserAction::Skip),
        "quit" => Some(UserAction::Quit),
        "exit" => Some(UserAction::Exit),
        _ => Some(UserAction::Guess(input.to_string())),
    }
}

pub fn parse_confirm_input(input: &str) -> Option<UserAction> {
    match input.trim().to_lowercase().as_str() {
        "r" | "resume" => Some(UserAction::Resume),
        "q" | "quit" => Some(UserAction::Quit),
        "exit" => Some(UserAction::Exit),
        _ => None,
    }
}

pub fn parse_result_input(input: &str) -> Option<UserAction> {
    match input.trim().to_lowercase().as_str() {
        "r" | "restart" => Some(UserAction::Restart),
        "exit" => Some(UserAction::Exit),
        _ => None,
    }
}

// Output

pub fn display_welcome(word_bank_size: usize) {
    println!("Welcome to WORDMANIA!");
    println!("Loaded {word_bank_size} words.");
}

pub fn display_mode_prompt() {
    println!("\nChoose a game mode: 'vowels' (hide vowels) or 'consonants' (hide consonants), or 'exit' to quit:");
}

pub fn display_round(state: &GameState) {
    println!(
        "\nWord {}/{}   Score: {}",
        state.word_count, MAX_WORD, state.score
    );
    println!("  {}", state.current_word);
    if state.is_guess_wrong {
        println!("Wrong guess! Try again.");
    }
    println!("Enter your guess ('skip' to skip, 'quit' to leave this game, 'exit' to exit):");
}

pub fn display_quit_prompt() {
    println!("Quit this game? 'resume' to keep playing, 'quit' to choose a new mode:");
}

pub fn display_results(summary: &ResultSummary) {
    let stars = "*".repeat(summary.star_count as usize);
    println!("\nGame over!");
    println!("Stars: {stars} ({})", summary.star_count);
    println!("Final score: {}", summary.final_score);
    println!("Percentage: {:.1}%", summary.percentage);
    println!("Words skipped: {}", summary.words_skipped);
    println!("Type 'restart' to play again or 'exit' to quit:");
}

pub fn display_exit_message() {
    println!("Exiting.");
}

/// CLI implementation of the `GameInterface` trait.
///
/// End of input, or a read error, is treated as `exit`.
pub struct CliInterface<R: BufRead> {
    reader: R,
}

impl<R: BufRead> CliInterface<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    fn read_line(&mut self) -> Option<String> {
        let mut input = String::new();
        match self.reader.read_line(&mut input) {
            Ok(0) | Err(_) => None,
            Ok(_) => {
                debug_log!("CliInterface::read_line() - '{}'", input.trim_end());
                Some(input)
            }
        }
    }

    fn read_with(&mut self, parse: fn(&str) -> Option<UserAction>) -> Option<UserAction> {
        match self.read_line() {
            Some(line) => {
                let action = parse(&line);
                if action.is_none() {
                    println!("Invalid input, please try again.");
                }
                action
            }
            None => Some(UserAction::Exit),
        }
    }
}

impl<R: BufRead> GameInterface for CliInterface<R> {
    fn display_welcome(&mut self, word_bank_size: usize) {
        display_welcome(word_bank_size);
    }

    fn read_mode(&mut self) -> Option<UserAction> {
        display_mode_prompt();
        self.read_with(parse_mode_input)
    }

    fn display_round(&mut self, state: &GameState) {
        display_round(state);
    }

    fn read_action(&mut self) -> Option<UserAction> {
        self.read_with(parse_game_input)
    }

    fn confirm_quit(&mut self) -> Option<UserAction> {
        display_quit_prompt();
        self.read_with(parse_confirm_input)
    }

    fn display_results(&mut self, summary: &ResultSummary) {
        display_results(summary);
    }

    fn read_result_choice(&mut self) -> Option<UserAction> {
        self.read_with(parse_result_input)
    }

    fn display_exit_message(&mut self) {
        display_exit_message();
    }
}
