//! Chat message type for the project assistant.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    /// Avatar shown next to the bubble.
    pub fn avatar(&self) -> &'static str {
        match self {
            Sender::User => "👤",
            Sender::Bot => "🤖",
        }
    }

    /// CSS modifier class.
    pub fn class(&self) -> &'static str {
        match self {
            Sender::User => "user",
            Sender::Bot => "bot",
        }
    }
}

/// One bubble in the chat window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub text: String,
    pub sender: Sender,
    /// Unix timestamp in milliseconds
    pub timestamp: i64,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>, timestamp: i64) -> Self {
        Self {
            text: text.into(),
            sender: Sender::User,
            timestamp,
        }
    }

    pub fn bot(text: impl Into<String>, timestamp: i64) -> Self {
        Self {
            text: text.into(),
            sender: Sender::Bot,
            timestamp,
        }
    }

    pub fn is_from_bot(&self) -> bool {
        self.sender == Sender::Bot
    }

    /// `HH:MM` in UTC.
    pub fn time_label(&self) -> String {
        chrono::DateTime::from_timestamp_millis(self.timestamp)
            .map(|t| t.format("%H:%M").to_string())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        let msg = ChatMessage::user("hi", 0);
        assert_eq!(msg.sender, Sender::User);
        assert!(!msg.is_from_bot());
        assert!(ChatMessage::bot("hello", 0).is_from_bot());
    }

    #[test]
    fn test_time_label() {
        // 2026-10-16T09:05:00Z
        let msg = ChatMessage::user("hi", 1_792_141_500_000);
        assert_eq!(msg.time_label(), "09:05");
    }

    #[test]
    fn test_sender_serializes_lowercase() {
        let json = serde_json::to_string(&ChatMessage::bot("x", 1)).unwrap();
        assert!(json.contains("\"sender\":\"bot\""));
    }
}
