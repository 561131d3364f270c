//! Text analysis: stress scoring, sentiment bucketing, keyword extraction.
//!
//! Deterministic, dependency-free heuristics. `analyze` is total over string
//! input: empty text, non-ASCII text, and letterless text all produce a
//! well-formed record with near-zero signal rather than an error.

use crate::lexicon::{Lexicon, PHRASE_RULES};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Scores below this are positive.
const POSITIVE_BELOW: f64 = 0.2;
/// Scores below this (and not positive) are neutral; the rest are negative.
const NEUTRAL_BELOW: f64 = 0.4;
/// Maximum number of extracted keywords.
const MAX_KEYWORDS: usize = 8;

/// Coarse three-way sentiment bucket derived from the stress score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Neutral => "neutral",
            Sentiment::Negative => "negative",
        }
    }

    /// Bucket a stress score using the fixed thresholds.
    pub fn from_score(score: f64) -> Self {
        if score < POSITIVE_BELOW {
            Sentiment::Positive
        } else if score < NEUTRAL_BELOW {
            Sentiment::Neutral
        } else {
            Sentiment::Negative
        }
    }
}

/// Result of analyzing one text. Transient; persistence belongs to callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    /// Normalized [0, 1] hit density, rounded to 3 decimals.
    pub stress_score: f64,
    pub sentiment: Sentiment,
    /// Raw weighted hit count before normalization.
    pub negative_hits: usize,
    /// Denominator, floored at 1 so empty input divides cleanly.
    pub total_tokens: usize,
    /// Up to 8 distinct tokens, most frequent first, stop words excluded.
    pub top_keywords: Vec<String>,
}

/// Stateless scorer over an immutable lexicon. Safe to share across threads;
/// construct once at startup.
#[derive(Debug, Clone)]
pub struct Analyzer {
    lexicon: Lexicon,
}

impl Analyzer {
    pub fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Score one text against the lexicon and phrase rules.
    pub fn analyze(&self, text: &str) -> Analysis {
        let lowered = text.to_lowercase();

        // Frequency counts in first-occurrence order, so keyword ties stay
        // stable under the later sort.
        let mut counts: Vec<(String, usize)> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();
        for token in tokenize(&lowered) {
            match index.get(token) {
                Some(&at) => counts[at].1 += 1,
                None => {
                    index.insert(token.to_string(), counts.len());
                    counts.push((token.to_string(), 1));
                }
            }
        }

        let total_tokens = counts.iter().map(|(_, count)| count).sum::<usize>().max(1);

        let mut negative_hits: usize = counts
            .iter()
            .filter(|(word, _)| self.lexicon.contains(word))
            .map(|(_, count)| count)
            .sum();

        // Phrase rules search the raw lowered text, not the token stream, and
        // fire at most once each.
        for (pattern, weight) in PHRASE_RULES.iter() {
            if pattern.is_match(&lowered) {
                negative_hits += weight;
            }
        }

        let stress_score = round3((negative_hits as f64 / total_tokens as f64).min(1.0));
        let sentiment = Sentiment::from_score(stress_score);

        // sort_by is stable: equal counts keep first-occurrence order.
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        let top_keywords: Vec<String> = counts
            .into_iter()
            .map(|(word, _)| word)
            .filter(|word| !self.lexicon.is_stop_word(word))
            .take(MAX_KEYWORDS)
            .collect();

        tracing::debug!(
            "analyzed text: score={} sentiment={} hits={} tokens={}",
            stress_score,
            sentiment.as_str(),
            negative_hits,
            total_tokens
        );

        Analysis {
            stress_score,
            sentiment,
            negative_hits,
            total_tokens,
            top_keywords,
        }
    }
}

/// Strip every character that is not a lowercase ASCII letter or whitespace,
/// then split on whitespace. Expects already-lowercased input.
fn tokenize(lowered: &str) -> impl Iterator<Item = &str> {
    lowered
        .split(|c: char| !c.is_ascii_lowercase())
        .filter(|token| !token.is_empty())
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::Lexicon;

    fn analyzer() -> Analyzer {
        Analyzer::new(Lexicon::builtin())
    }

    #[test]
    fn calm_text_scores_low() {
        let analysis = analyzer().analyze("I feel okay and calm today");
        assert!(analysis.stress_score < 0.2, "got {}", analysis.stress_score);
        assert_eq!(analysis.sentiment, Sentiment::Positive);
        assert_eq!(analysis.total_tokens, 6);
    }

    #[test]
    fn stressed_text_scores_high() {
        let analysis = analyzer().analyze("I am stressed, anxious and overwhelmed with pressure");
        assert!(analysis.negative_hits >= 4);
        assert_eq!(analysis.sentiment, Sentiment::Negative);
        assert!((analysis.stress_score - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_input_yields_floor_denominator() {
        let analysis = analyzer().analyze("");
        assert_eq!(analysis.total_tokens, 1);
        assert_eq!(analysis.negative_hits, 0);
        assert_eq!(analysis.stress_score, 0.0);
        assert_eq!(analysis.sentiment, Sentiment::Positive);
        assert!(analysis.top_keywords.is_empty());
    }

    #[test]
    fn letterless_input_is_not_an_error() {
        let analysis = analyzer().analyze("12345 !!! 6789 ???");
        assert_eq!(analysis.total_tokens, 1);
        assert_eq!(analysis.stress_score, 0.0);
        assert!(analysis.top_keywords.is_empty());
    }

    #[test]
    fn phrase_bonus_applies_without_lexicon_words() {
        // Neither "feeling" nor "awful" is a builtin lexicon word; the hit
        // comes from the phrase rule alone.
        let analysis = analyzer().analyze("feeling awful about the weather");
        assert_eq!(analysis.negative_hits, 2);
        assert_eq!(analysis.total_tokens, 5);
        assert!((analysis.stress_score - 0.4).abs() < f64::EPSILON);
    }

    #[test]
    fn phrase_rule_fires_once_per_pattern() {
        let once = analyzer().analyze("very bad day");
        let thrice = analyzer().analyze("very bad very bad very bad day");
        assert_eq!(once.negative_hits, 2);
        assert_eq!(thrice.negative_hits, 2);
    }

    #[test]
    fn distinct_phrase_rules_stack() {
        let analysis = analyzer().analyze("not good and feeling terrible");
        assert_eq!(analysis.negative_hits, 4);
    }

    #[test]
    fn score_is_capped_at_one() {
        // A lexicon that overlaps a phrase rule pushes the raw ratio past 1.
        let lexicon = Lexicon::from_words(["bad".to_string()]);
        let analysis = Analyzer::new(lexicon).analyze("so bad");
        assert_eq!(analysis.negative_hits, 3);
        assert_eq!(analysis.total_tokens, 2);
        assert_eq!(analysis.stress_score, 1.0);
    }

    #[test]
    fn punctuation_and_digits_are_stripped() {
        let analysis = analyzer().analyze("stressed!!! stressed... 42 stressed?");
        assert_eq!(analysis.total_tokens, 3);
        assert_eq!(analysis.negative_hits, 3);
        assert_eq!(analysis.top_keywords, vec!["stressed".to_string()]);
    }

    #[test]
    fn keywords_exclude_stop_words() {
        let analysis = analyzer().analyze("the exam and the deadline for the assignment");
        assert!(!analysis.top_keywords.iter().any(|k| k == "the"));
        assert!(!analysis.top_keywords.iter().any(|k| k == "and"));
        assert!(!analysis.top_keywords.iter().any(|k| k == "for"));
        assert_eq!(
            analysis.top_keywords,
            vec![
                "exam".to_string(),
                "deadline".to_string(),
                "assignment".to_string()
            ]
        );
    }

    #[test]
    fn keywords_rank_by_frequency_then_first_occurrence() {
        let analysis = analyzer().analyze("alpha beta beta gamma alpha beta gamma delta");
        assert_eq!(
            analysis.top_keywords,
            vec![
                "beta".to_string(),
                "alpha".to_string(),
                "gamma".to_string(),
                "delta".to_string()
            ]
        );
    }

    #[test]
    fn keywords_cap_at_eight() {
        let analysis =
            analyzer().analyze("one two three four five six seven eight nine ten eleven");
        assert_eq!(analysis.top_keywords.len(), 8);
    }

    #[test]
    fn sentiment_thresholds_are_fixed() {
        assert_eq!(Sentiment::from_score(0.0), Sentiment::Positive);
        assert_eq!(Sentiment::from_score(0.199), Sentiment::Positive);
        assert_eq!(Sentiment::from_score(0.2), Sentiment::Neutral);
        assert_eq!(Sentiment::from_score(0.399), Sentiment::Neutral);
        assert_eq!(Sentiment::from_score(0.4), Sentiment::Negative);
        assert_eq!(Sentiment::from_score(1.0), Sentiment::Negative);
    }

    #[test]
    fn score_rounds_to_three_decimals() {
        // 1 hit over 6 tokens: 0.16666... rounds to 0.167.
        let analysis = analyzer().analyze("calm morning walk by quiet water");
        assert_eq!(analysis.negative_hits, 1);
        assert_eq!(analysis.total_tokens, 6);
        assert!((analysis.stress_score - 0.167).abs() < f64::EPSILON);
    }

    #[test]
    fn non_ascii_letters_do_not_tokenize() {
        let analysis = analyzer().analyze("café naïve résumé");
        // Accented characters split the words; the ASCII fragments remain.
        assert!(analysis.total_tokens >= 1);
        assert!(analysis.top_keywords.iter().all(|k| k.is_ascii()));
    }

    #[test]
    fn analysis_serializes_with_contract_field_names() {
        let analysis = analyzer().analyze("I am stressed, anxious and overwhelmed with pressure");
        let value = serde_json::to_value(&analysis).expect("analysis should serialize");
        assert_eq!(value["sentiment"], "negative");
        assert_eq!(value["negative_hits"], 4);
        assert_eq!(value["total_tokens"], 8);
        assert!(value["stress_score"].is_number());
        assert!(value["top_keywords"].is_array());
    }
}
