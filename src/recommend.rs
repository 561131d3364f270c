//! Rule-driven coping recommendations derived from an analysis record.
//!
//! Rules run in a fixed order: exactly one base tier fires, then keyword
//! overlays add independent categories. Every suggestion list is a static
//! template selected by rule, never interpolated with user content.

use crate::analyzer::{Analysis, Sentiment};
use serde::{Deserialize, Serialize};

/// Stress at or above this (or negative sentiment) selects the full calming tier.
pub(crate) const HIGH_STRESS: f64 = 0.5;
/// Stress at or above this selects the moderate tier.
pub(crate) const MODERATE_STRESS: f64 = 0.2;

/// Keywords that trigger the sleep hygiene overlay
const SLEEP_TRIGGERS: &[&str] = &["sleep", "tired", "exhausted"];
/// Keywords that trigger the study strategy overlay
const STUDY_TRIGGERS: &[&str] = &["exam", "deadline", "assignment"];

const BREATHING_EXERCISES: &[&str] = &[
    "Box breathing: inhale 4s, hold 4s, exhale 4s, hold 4s × 4",
    "4-7-8 breathing for sleep: inhale 4s, hold 7s, exhale 8s × 4",
    "Diaphragmatic breathing: hand on belly, slow breaths for 2 minutes",
];

const MICRO_BREAKS: &[&str] = &[
    "Stand up and stretch neck/shoulders for 60 seconds",
    "Drink a glass of water and look away from screens for 2 minutes",
    "Walk for 5 minutes to reset your focus",
];

const MINDFULNESS_EXERCISES: &[&str] = &[
    "Body scan meditation (5 min): notice sensations from head to toe",
    "5-4-3-2-1 grounding: name things you can see, feel, hear, smell, taste",
    "Gratitude note: write 3 small positives from today",
];

const LIGHT_MINDFULNESS: &[&str] = &[
    "2-minute breathing: inhale through nose, exhale longer through mouth",
    "Write one sentence about what's in your control right now",
];

const KEEP_THE_MOMENTUM: &[&str] = &[
    "Celebrate a small win from today",
    "Plan a 25-minute focused session with a 5-minute break",
];

const SLEEP_HYGIENE: &[&str] = &[
    "Avoid screens 30 minutes before bed",
    "Keep a consistent sleep-wake schedule",
];

const STUDY_STRATEGY: &[&str] = &[
    "Pomodoro: 25m study + 5m break × 4, then 15m longer break",
    "Write a 3-item priority list for tomorrow",
];

/// One labeled group of suggestions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRecommendation {
    pub label: String,
    pub items: Vec<String>,
}

/// Ordered recommendation categories; insertion order is display order and
/// labels are unique by construction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommendationBundle {
    pub categories: Vec<CategoryRecommendation>,
}

impl RecommendationBundle {
    fn push(&mut self, label: &str, items: &[&str]) {
        self.categories.push(CategoryRecommendation {
            label: label.to_string(),
            items: items.iter().map(|s| s.to_string()).collect(),
        });
    }

    pub fn contains(&self, label: &str) -> bool {
        self.categories.iter().any(|c| c.label == label)
    }

    pub fn labels(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.label.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// Map an analysis record onto themed suggestion lists. Always yields at
/// least one category.
pub fn recommend(analysis: &Analysis) -> RecommendationBundle {
    let mut bundle = RecommendationBundle::default();

    if analysis.stress_score >= HIGH_STRESS || analysis.sentiment == Sentiment::Negative {
        bundle.push("Immediate Calm", BREATHING_EXERCISES);
        bundle.push("Mindfulness Reset", MINDFULNESS_EXERCISES);
        bundle.push("Short Breaks", MICRO_BREAKS);
    } else if analysis.stress_score >= MODERATE_STRESS {
        bundle.push("Focus Reset", MICRO_BREAKS);
        bundle.push("Light Mindfulness", LIGHT_MINDFULNESS);
    } else {
        bundle.push("Keep the Momentum", KEEP_THE_MOMENTUM);
    }

    if analysis
        .top_keywords
        .iter()
        .any(|k| SLEEP_TRIGGERS.contains(&k.as_str()))
    {
        bundle.push("Sleep Hygiene", SLEEP_HYGIENE);
    }

    if analysis
        .top_keywords
        .iter()
        .any(|k| STUDY_TRIGGERS.contains(&k.as_str()))
    {
        bundle.push("Study Strategy", STUDY_STRATEGY);
    }

    bundle
}
