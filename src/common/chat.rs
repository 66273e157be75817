use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who a chat line came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    Me,
    Match,
    Info,
}

impl Origin {
    pub fn class(&self) -> &'static str {
        match self {
            Self::Me => "message me",
            Self::Match => "message match",
            Self::Info => "message info",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub id: Uuid,
    pub origin: Origin,
    pub content: String,
    pub stamp: String,
}

impl ChatMessage {
    pub fn new(origin: Origin, content: String, stamp: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            origin,
            content,
            stamp,
        }
    }
}

pub const CANNED_REPLY: &str =
    "That sounds wonderful! I'm looking forward to chatting more about our shared interests.";

/// One chat screen's transcript. Replies are canned: the match answers with
/// the same line after every outgoing message until the transcript reaches
/// the reply cap.
pub struct Conversation {
    messages: Vec<ChatMessage>,
    reply_cap: usize,
}

impl Conversation {
    pub fn with_cap(opener: Vec<ChatMessage>, reply_cap: usize) -> Self {
        Self {
            messages: opener,
            reply_cap,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Appends an outgoing message. Returns whether a canned reply is due,
    /// decided on the transcript length before the append.
    pub fn send(&mut self, content: String, stamp: String) -> bool {
        let reply_due = self.messages.len() < self.reply_cap;
        self.messages.push(ChatMessage::new(Origin::Me, content, stamp));
        reply_due
    }

    pub fn push_reply(&mut self, stamp: String) {
        self.messages
            .push(ChatMessage::new(Origin::Match, CANNED_REPLY.to_string(), stamp));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opener(lines: usize) -> Vec<ChatMessage> {
        (0..lines)
            .map(|i| ChatMessage::new(Origin::Match, format!("line {}", i), "14:00".into()))
            .collect()
    }

    #[test]
    fn sending_appends_an_outgoing_message() {
        let mut convo = Conversation::with_cap(opener(2), 10);
        assert!(convo.send("hello".into(), "15:00".into()));

        let last = convo.messages().last().unwrap();
        assert_eq!(last.origin, Origin::Me);
        assert_eq!(last.content, "hello");
        assert_eq!(convo.messages().len(), 3);
    }

    #[test]
    fn replies_stop_at_the_cap() {
        let mut convo = Conversation::with_cap(opener(9), 10);

        // ninth message: still under the cap before the append
        assert!(convo.send("one".into(), "15:00".into()));
        convo.push_reply("15:01".into());

        // transcript is at 11 now, no more canned replies
        assert!(!convo.send("two".into(), "15:02".into()));
    }

    #[test]
    fn canned_reply_comes_from_the_match() {
        let mut convo = Conversation::with_cap(vec![], 10);
        convo.push_reply("15:00".into());

        let last = convo.messages().last().unwrap();
        assert_eq!(last.origin, Origin::Match);
        assert_eq!(last.content, CANNED_REPLY);
    }
}
