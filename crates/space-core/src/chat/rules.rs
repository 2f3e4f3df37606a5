//! Keyword rules behind the project assistant.

use serde::{Deserialize, Serialize};

/// What a question was matched to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Topic {
    Portfolio,
    Classroom,
    MediLink,
    TechStack,
    Impact,
    Fallback,
}

impl Topic {
    /// Canned answer for this topic.
    pub fn answer(&self) -> &'static str {
        match self {
            Topic::Portfolio => {
                "This is a modern React portfolio featuring glassmorphic design, smooth scroll \
                 animations, and optimized performance. Built with React and CSS Modules, \
                 deployed on Netlify."
            }
            Topic::Classroom => {
                "A comprehensive MERN stack application for schools with real-time updates, \
                 attendance tracking, resource management, and student analytics. Serves 5+ \
                 schools with 1000+ active users."
            }
            Topic::MediLink => {
                "An advanced AI medical diagnosis system using TensorFlow and NLP for \
                 preliminary symptom analysis. Achieves 95% accuracy with deep learning models \
                 trained on medical datasets."
            }
            Topic::TechStack => {
                "Tech stack includes React, Node.js, MongoDB, Express, TensorFlow, Python, and \
                 modern deployment platforms. Each project uses cutting-edge technologies."
            }
            Topic::Impact => {
                "These projects collectively serve thousands of users: 10K+ portfolio visits, \
                 5+ schools using Smart Classroom, and 95% accuracy in MediLink AI diagnosis."
            }
            Topic::Fallback => {
                "Great question! Try asking about specific projects (Portfolio, Classroom, \
                 MediLink), tech stacks, or project impact. I'm here to help! 🚀"
            }
        }
    }
}

/// Rules in priority order. The first rule with a keyword contained in the
/// lower-cased question wins.
pub const RULES: &[(&[&str], Topic)] = &[
    (&["portfolio", "react", "frontend"], Topic::Portfolio),
    (&["classroom", "mern", "fullstack", "full stack"], Topic::Classroom),
    (&["medilink", "ai", "ml", "medical"], Topic::MediLink),
    (&["tech", "stack"], Topic::TechStack),
    (&["impact", "results"], Topic::Impact),
];

/// Match a question against [`RULES`].
pub fn classify(question: &str) -> Topic {
    let q = question.to_lowercase();
    RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| q.contains(k)))
        .map(|(_, topic)| *topic)
        .unwrap_or(Topic::Fallback)
}

/// An answer together with the topic it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reply {
    pub topic: Topic,
    pub text: &'static str,
}

pub fn respond(question: &str) -> Reply {
    let topic = classify(question);
    Reply {
        topic,
        text: topic.answer(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_rule() {
        assert_eq!(classify("Tell me about the portfolio"), Topic::Portfolio);
        assert_eq!(classify("Smart Classroom details"), Topic::Classroom);
        assert_eq!(classify("What is MediLink AI?"), Topic::MediLink);
        assert_eq!(classify("which STACK?"), Topic::TechStack);
        assert_eq!(classify("show me results"), Topic::Impact);
        assert_eq!(classify("hello"), Topic::Fallback);
    }

    #[test]
    fn test_first_rule_wins() {
        // "react" (rule 1) beats "ml" (rule 3)
        assert_eq!(classify("react and ml"), Topic::Portfolio);
        // "full stack" is caught by rule 2 before "stack" reaches rule 4
        assert_eq!(classify("full stack work"), Topic::Classroom);
    }

    #[test]
    fn test_substring_matching_is_loose() {
        // "detail" contains "ai"
        assert_eq!(classify("more detail please"), Topic::MediLink);
    }

    #[test]
    fn test_reply_carries_text() {
        let reply = respond("what about the medilink project");
        assert_eq!(reply.topic, Topic::MediLink);
        assert!(reply.text.starts_with("An advanced AI medical diagnosis system"));
    }
}
