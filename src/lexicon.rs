//! Affect lexicon, stop words, and phrase rules backing the analyzer.
//!
//! The builtin word table mixes negative, positive, and neutral affect words
//! under a single membership test; scoring counts membership, not polarity.
//! The table is immutable after construction and safe for unsynchronized
//! concurrent reads.

use crate::error::{Result, SteadyMindError};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;
use std::path::Path;

/// Weight added to the hit count by each matching phrase rule.
pub const PHRASE_WEIGHT: usize = 2;

/// Phrase rules evaluated against the lowercased raw text, independent of
/// tokenization. Each (pattern, weight) pair fires at most once per text.
pub static PHRASE_RULES: Lazy<Vec<(Regex, usize)>> = Lazy::new(|| {
    [
        r"very\s+bad",
        r"so\s+bad",
        r"really\s+bad",
        r"not\s+good",
        r"feel(?:ing)?\s+bad",
        r"feel(?:ing)?\s+awful",
        r"feel(?:ing)?\s+terrible",
    ]
    .iter()
    .map(|pat| {
        (
            Regex::new(pat).expect("phrase pattern should compile"),
            PHRASE_WEIGHT,
        )
    })
    .collect()
});

/// Filler words excluded from keyword extraction
pub const STOP_WORDS: &[&str] = &[
    "the", "and", "a", "to", "of", "in", "it", "is", "that", "for", "on", "with", "was", "as",
    "but", "are", "this", "be", "have", "at", "or", "by", "an", "from", "so",
];

/// Builtin affect words used when no lexicon file is configured or loadable
pub const DEFAULT_KEYWORDS: &[&str] = &[
    "stress",
    "stressed",
    "anxiety",
    "anxious",
    "panic",
    "tired",
    "exhausted",
    "overwhelmed",
    "sad",
    "depressed",
    "burnout",
    "worry",
    "worried",
    "pressure",
    "panic_attack",
    "insomnia",
    "restless",
    "low",
    "fear",
    "fearful",
    "nervous",
    "tense",
    "frustrated",
    "angry",
    "irritable",
    "lonely",
    "hopeless",
    "helpless",
    "deadline",
    "exam",
    "assignment",
    "fail",
    "failure",
    "disappointment",
    "rejection",
    "insecure",
    "ashamed",
    "guilty",
    "regretful",
    "jealous",
    "envious",
    "bitter",
    "grief",
    "mourning",
    "heartbreak",
    "loss",
    "misery",
    "uneasy",
    "distressed",
    "vulnerable",
    "abandoned",
    "worthless",
    "broken",
    "emptiness",
    "drained",
    "fatigued",
    "trapped",
    "pressured",
    "shaken",
    "confused",
    "doubtful",
    "uncertain",
    "skeptical",
    "weak",
    "isolated",
    "embarrassed",
    "withdrawn",
    "gloomy",
    "melancholy",
    "lost",
    "disheartened",
    "discouraged",
    "resentful",
    "mistrustful",
    "unstable",
    "happy",
    "joy",
    "joyful",
    "cheerful",
    "excited",
    "hopeful",
    "calm",
    "relaxed",
    "peaceful",
    "love",
    "loved",
    "loving",
    "grateful",
    "thankful",
    "blessed",
    "content",
    "satisfied",
    "proud",
    "confident",
    "optimistic",
    "strong",
    "brave",
    "energetic",
    "motivated",
    "inspired",
    "focused",
    "determined",
    "relieved",
    "free",
    "safe",
    "secure",
    "valued",
    "appreciated",
    "cared",
    "supported",
    "enthusiastic",
    "playful",
    "silly",
    "fun",
    "thrilled",
    "adventurous",
    "curious",
    "passionate",
    "compassionate",
    "kind",
    "empathetic",
    "caring",
    "helpful",
    "generous",
    "forgiving",
    "patient",
    "mindful",
    "resilient",
    "healing",
    "accepted",
    "understood",
    "connected",
    "belonging",
    "fulfilled",
    "accomplished",
    "successful",
    "growth",
    "learning",
    "clarity",
    "balanced",
    "harmony",
    "refreshed",
    "renewed",
    "grounded",
    "open",
    "trusting",
    "bored",
    "blank",
    "numb",
    "indifferent",
    "neutral",
    "distracted",
    "unsettled",
    "thoughtful",
    "reflective",
    "daydreaming",
    "nostalgic",
    "cautious",
    "hesitant",
    "mixed",
    "ambiguous",
    "longing",
    "expecting",
    "anticipating",
    "unsure",
    "contemplative",
    "pensive",
    "observant",
    "analytical",
    "questioning",
    "undecided",
    "exploring",
];

/// Immutable word-membership tables shared by all analyzer calls.
#[derive(Debug, Clone)]
pub struct Lexicon {
    words: HashSet<String>,
    stop: HashSet<&'static str>,
}

impl Lexicon {
    /// Build a lexicon from the builtin word table.
    pub fn builtin() -> Self {
        Self::from_words(DEFAULT_KEYWORDS.iter().map(|w| w.to_string()))
    }

    /// Build a lexicon from an explicit word set.
    pub fn from_words(words: impl IntoIterator<Item = String>) -> Self {
        Self {
            words: words.into_iter().collect(),
            stop: STOP_WORDS.iter().copied().collect(),
        }
    }

    /// Parse a line-oriented word file: one word per line, trimmed and
    /// lowercased, blank lines ignored. A file with zero usable words is an
    /// error rather than an empty lexicon.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| SteadyMindError::Lexicon {
            message: format!("failed to read {}: {}", path.display(), e),
        })?;
        let words: HashSet<String> = content
            .lines()
            .map(|line| line.trim().to_lowercase())
            .filter(|line| !line.is_empty())
            .collect();
        if words.is_empty() {
            return Err(SteadyMindError::Lexicon {
                message: format!("{} contains no words", path.display()),
            });
        }
        Ok(Self {
            words,
            stop: STOP_WORDS.iter().copied().collect(),
        })
    }

    /// Resolve the lexicon for startup: the given file if present and
    /// parseable, builtin defaults otherwise. Load failures are logged and
    /// degrade; this never fails and never propagates to analysis callers.
    pub fn load(path: Option<&Path>) -> Self {
        match path {
            Some(path) => match Self::from_file(path) {
                Ok(lexicon) => {
                    tracing::info!(
                        "Loaded {} lexicon words from {}",
                        lexicon.len(),
                        path.display()
                    );
                    lexicon
                }
                Err(e) => {
                    tracing::warn!("{}; falling back to builtin lexicon", e);
                    Self::builtin()
                }
            },
            None => Self::builtin(),
        }
    }

    /// Membership test against the affect word set.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Membership test against the stop-word set.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
