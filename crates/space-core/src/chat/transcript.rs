use serde::{Deserialize, Serialize};

use super::message::{ChatMessage, Sender};
use super::rules::respond;
use super::GREETING;

/// Append-only history of one chat session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
}

impl Transcript {
    /// A fresh session opening with the bot's greeting.
    pub fn new(now: i64) -> Self {
        Self {
            messages: vec![ChatMessage::bot(GREETING, now)],
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Record a question. Blank input is ignored and returns `None`.
    ///
    /// The returned message is the one to hand back to [`Transcript::answer`]
    /// once the typing delay has passed.
    pub fn ask(&mut self, text: &str, now: i64) -> Option<&ChatMessage> {
        if text.trim().is_empty() {
            return None;
        }
        self.messages.push(ChatMessage::user(text, now));
        self.messages.last()
    }

    /// Text of the most recent user message.
    pub fn latest_question(&self) -> Option<&str> {
        self.messages
            .iter()
            .rev()
            .find(|m| m.sender == Sender::User)
            .map(|m| m.text.as_str())
    }

    /// Append the bot's answer to `question`.
    ///
    /// The question is the one captured when it was asked, so replies that
    /// land out of order still answer their own message.
    pub fn answer(&mut self, question: &str, now: i64) -> &ChatMessage {
        let reply = respond(question);
        tracing::debug!(topic = ?reply.topic, "Chat reply");
        self.messages.push(ChatMessage::bot(reply.text, now));
        &self.messages[self.messages.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::Topic;

    #[test]
    fn test_starts_with_greeting() {
        let t = Transcript::new(0);
        assert_eq!(t.len(), 1);
        assert_eq!(t.messages()[0].text, GREETING);
        assert_eq!(t.latest_question(), None);
    }

    #[test]
    fn test_blank_input_ignored() {
        let mut t = Transcript::new(0);
        assert!(t.ask("   ", 1).is_none());
        assert_eq!(t.len(), 1);
    }

    #[test]
    fn test_answer_uses_given_question() {
        let mut t = Transcript::new(0);
        t.ask("hello", 1);
        let question = t.ask("what about the tech stack", 2).unwrap().text.clone();
        let reply = t.answer(&question, 3);
        assert_eq!(reply.text, Topic::TechStack.answer());
        assert_eq!(t.len(), 4);
        assert_eq!(t.latest_question(), Some("what about the tech stack"));
    }

    #[test]
    fn test_overlapping_questions_keep_their_own_replies() {
        let mut t = Transcript::new(0);
        let first = t.ask("tell me about the portfolio", 1).unwrap().text.clone();
        let second = t.ask("what about the medilink project", 2).unwrap().text.clone();

        // Both typing delays expire after the second question was sent
        t.answer(&first, 801);
        t.answer(&second, 802);

        let replies: Vec<_> = t
            .messages()
            .iter()
            .skip(3)
            .map(|m| m.text.as_str())
            .collect();
        assert_eq!(
            replies,
            vec![Topic::Portfolio.answer(), Topic::MediLink.answer()]
        );
    }
}
