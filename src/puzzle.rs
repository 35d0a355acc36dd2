use std::fmt;
use std::str::FromStr;

pub const MASK_CHAR: char = '*';

const VOWELS: [char; 6] = ['a', 'e', 'i', 'o', 'u', 'y'];
const STAR_DIVISOR: u32 = 20;
const PERCENTAGE_FACTOR: f64 = 10.0;

/// Which letter class gets hidden for the whole session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameMode {
    HiddenVowels,
    HiddenConsonants,
}

impl GameMode {
    /// Whether `c` belongs to the class this mode hides.
    #[must_use]
    pub fn hides(self, c: char) -> bool {
        match self {
            Self::HiddenVowels => is_vowel(c),
            Self::HiddenConsonants => is_consonant(c),
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HiddenVowels => write!(f, "hidden vowels"),
            Self::HiddenConsonants => write!(f, "hidden consonants"),
        }
    }
}

impl FromStr for GameMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "v" | "vowels" | "hidden-vowels" => Ok(Self::HiddenVowels),
            "c" | "consonants" | "hidden-consonants" => Ok(Self::HiddenConsonants),
            other => Err(format!("unknown game mode '{other}' (expected vowels or consonants)")),
        }
    }
}

/// `y` counts as a vowel.
#[must_use]
pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c.to_ascii_lowercase())
}

#[must_use]
pub fn is_consonant(c: char) -> bool {
    c.is_ascii_alphabetic() && !is_vowel(c)
}

/// Replace every letter of the hidden class with [`MASK_CHAR`], position by
/// position. Everything else is kept verbatim, case included.
#[must_use]
pub fn make_hole(word: &str, mode: GameMode) -> String {
    word.chars()
        .map(|c| if mode.hides(c) { MASK_CHAR } else { c })
        .collect()
}

#[must_use]
pub fn guess_matches(guess: &str, secret: &str) -> bool {
    guess.to_lowercase() == secret.to_lowercase()
}

/// `floor(score / 20)`, no clamping.
#[must_use]
pub fn star_rating(score: u32) -> u32 {
    score / STAR_DIVISOR
}

/// `(score / word_count) * 10`. A zero `word_count` yields `0.0`.
#[must_use]
pub fn score_percentage(score: u32, word_count: u32) -> f64 {
    if word_count == 0 {
        return 0.0;
    }
    (f64::from(score) / f64::from(word_count)) * PERCENTAGE_FACTOR
}
