//! Text scoring and recommendation core for a journaling application.
//!
//! Raw text flows one way: `analyzer` turns it into an [`analyzer::Analysis`]
//! record, `recommend` maps that record onto themed coping suggestions, and
//! `reply` picks a canned conversational response from the same signals.
//! Everything is deterministic and pure given the immutable lexicon built at
//! startup; persistence, sessions, and rendering live with the callers.

pub mod analyzer;
pub mod config;
pub mod error;
pub mod lexicon;
pub mod recommend;
pub mod reply;

// Load env from a simple, standardized location resolution.
// This uses dotenvy::dotenv().ok() which loads .env if present and silently ignores if missing.
pub fn load_env() {
    let _ = dotenvy::dotenv();
}
