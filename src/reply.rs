//! Canned supportive replies for conversational callers.
//!
//! Same tier split as the recommender's base rule, applied to one analysis
//! record. Replies are fixed strings; user text never flows into them.

use crate::analyzer::{Analysis, Sentiment};
use crate::recommend::{HIGH_STRESS, MODERATE_STRESS};

/// Sent when the caller has no text to analyze; selecting it is the caller's
/// job since it precedes analysis.
pub const EMPTY_INPUT_REPLY: &str = "I'm here to listen. Tell me what's on your mind.";

const HIGH_STRESS_REPLY: &str = "I hear that things feel heavy. Let's take one small step together. \
     Try box-breathing (inhale 4s, hold 4s, exhale 4s, hold 4s × 4). \
     After that, what feels most in your control right now?";

const MODERATE_STRESS_REPLY: &str = "Thanks for sharing. Sounds like there's some pressure. \
     Would a 5-minute reset help? Stand, stretch, sip water, then write 3 priorities.";

const LOW_STRESS_REPLY: &str = "Love the momentum. What's one small win you can celebrate today? \
     If you'd like, we can plan a focused 25-minute session.";

/// Pick the reply tier for an analysis record.
pub fn supportive_reply(analysis: &Analysis) -> &'static str {
    if analysis.stress_score >= HIGH_STRESS || analysis.sentiment == Sentiment::Negative {
        HIGH_STRESS_REPLY
    } else if analysis.stress_score >= MODERATE_STRESS {
        MODERATE_STRESS_REPLY
    } else {
        LOW_STRESS_REPLY
    }
}
