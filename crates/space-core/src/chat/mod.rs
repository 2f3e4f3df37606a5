//! Project assistant chat widget
//!
//! A canned-response bot shown next to the featured projects. Questions are
//! matched against an ordered keyword table; the answer depends only on the
//! latest question.
//!
//! # Flow
//!
//! ```text
//! user types ──► Transcript::ask ──► (REPLY_DELAY) ──► Transcript::answer
//!                                                          │
//!                                        rules::classify ◄─┘
//! ```

mod message;
mod rules;
mod transcript;

use std::time::Duration;

pub use message::{ChatMessage, Sender};
pub use rules::{classify, respond, Reply, Topic, RULES};
pub use transcript::Transcript;

/// First message of every session.
pub const GREETING: &str =
    "👋 Hi! I'm your AI guide. Ask me about any project—tech stack, features, or impact!";

/// Simulated typing time before the bot answers.
pub const REPLY_DELAY: Duration = Duration::from_millis(800);

/// Suggestions shown under the input: (button label, text put in the input).
pub const QUICK_PROMPTS: [(&str, &str); 3] = [
    ("Portfolio", "Tell me about the portfolio"),
    ("Classroom", "Smart Classroom details"),
    ("MediLink", "What is MediLink AI?"),
];

/// Input text pre-filled by a project card's "Ask AI" button.
pub fn ask_about(project_title: &str) -> String {
    format!("Tell me about {}", project_title)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quick_prompts_hit_their_topics() {
        let topics: Vec<Topic> = QUICK_PROMPTS.iter().map(|(_, q)| classify(q)).collect();
        assert_eq!(topics, vec![Topic::Portfolio, Topic::Classroom, Topic::MediLink]);
    }

    #[test]
    fn test_ask_about() {
        assert_eq!(ask_about("MediLink AI"), "Tell me about MediLink AI");
        assert_eq!(classify(&ask_about("Smart Classroom")), Topic::Classroom);
    }
}
