use crate::error::EngineError;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

pub const EMBEDDED_WORDBANK: &str = include_str!("resources/wordbank.txt");

/// Words that the CLI reads as commands, so they could never be guessed.
pub const RESERVED_WORDS: [&str; 3] = ["skip", "quit", "exit"];

fn is_valid_word(word: &str) -> bool {
    !word.is_empty()
        && word.chars().all(|c| c.is_ascii_alphabetic())
        && !RESERVED_WORDS.iter().any(|r| r.eq_ignore_ascii_case(word))
}

/// Parse a newline-delimited word list.
///
/// Blank lines and `#` comments are skipped and only ASCII-alphabetic
/// entries are kept, in their original case. Duplicates (ignoring case)
/// keep their first occurrence.
pub fn load_wordbank_from_str(data: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    data.lines()
        .map(str::trim)
        .filter(|line| !line.starts_with('#'))
        .filter(|word| is_valid_word(word))
        .filter(|word| seen.insert(word.to_ascii_lowercase()))
        .map(str::to_string)
        .collect()
}

pub fn load_wordbank_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, EngineError> {
    let path = path.as_ref();
    let data = fs::read_to_string(path).map_err(|source| EngineError::WordBankRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(load_wordbank_from_str(&data))
}

#[must_use]
pub fn embedded_wordbank() -> Vec<String> {
    load_wordbank_from_str(EMBEDDED_WORDBANK)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::MAX_WORD;
    use crate::puzzle::{GameMode, MASK_CHAR, make_hole};

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("wordmania_{}_{name}", std::process::id()))
    }

    #[test]
    fn test_embedded_wordbank_is_large_enough() {
        let words = embedded_wordbank();
        assert!(words.len() >= MAX_WORD as usize);
        assert!(words.iter().all(|w| is_valid_word(w)));
    }

    #[test]
    fn test_load_wordbank_trims_and_keeps_case() {
        let words = load_wordbank_from_str("  Paris \nROCKET\n");
        assert_eq!(words, vec!["Paris".to_string(), "ROCKET".to_string()]);
    }

    #[test]
    fn test_load_wordbank_rejects_non_ascii_letters() {
        let words = load_wordbank_from_str("straße\nNaïve\nplanet\n");
        assert_eq!(words, vec!["planet".to_string()]);
    }

    #[test]
    fn test_loaded_words_are_fully_maskable() {
        let words = load_wordbank_from_str("straße\nNaïve\nRocket\nyogurt\n");
        for word in &words {
            let vowels = make_hole(word, GameMode::HiddenVowels);
            let consonants = make_hole(word, GameMode::HiddenConsonants);
            for ((v, c), original) in vowels.chars().zip(consonants.chars()).zip(word.chars()) {
                assert!(v == MASK_CHAR || c == MASK_CHAR, "'{original}' in '{word}' is never hidden");
            }
        }
    }

    #[test]
    fn test_load_wordbank_rejects_command_words() {
        let words = load_wordbank_from_str("skip\nQuit\nEXIT\nplanet\nskipper\n");
        assert_eq!(words, vec!["planet".to_string(), "skipper".to_string()]);
    }

    #[test]
    fn test_load_wordbank_skips_comments_and_blanks() {
        let words = load_wordbank_from_str("# header\n\nplanet\n   \n# trailing\n");
        assert_eq!(words, vec!["planet".to_string()]);
    }

    #[test]
    fn test_load_wordbank_rejects_non_alphabetic() {
        let words = load_wordbank_from_str("planet\nr0cket\nice cream\nwell-known\n");
        assert_eq!(words, vec!["planet".to_string()]);
    }

    #[test]
    fn test_load_wordbank_deduplicates_case_insensitively() {
        let words = load_wordbank_from_str("planet\nrocket\nPLANET\nPlanet\n");
        assert_eq!(words, vec!["planet".to_string(), "rocket".to_string()]);
    }

    #[test]
    fn test_load_wordbank_from_missing_file() {
        let path = temp_path("missing_wordbank.txt");
        let _ = fs::remove_file(&path);

        match load_wordbank_from_file(&path) {
            Err(EngineError::WordBankRead { path: p, .. }) => assert_eq!(p, path),
            other => panic!("Expected WordBankRead error, got {other:?}"),
        }
    }

    #[test]
    fn test_load_wordbank_from_file() {
        let path = temp_path("wordbank_unit_test.txt");
        fs::write(&path, "Garden\nwizard\n").unwrap();

        let words = load_wordbank_from_file(&path).unwrap();
        assert_eq!(words, vec!["Garden".to_string(), "wizard".to_string()]);

        let _ = fs::remove_file(&path);
    }
}
