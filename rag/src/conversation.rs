#[derive(Clone, Debug, serde::Serialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: "assistant".to_string(),
            content: content.into(),
        }
    }
}

/// Append-only turn log for one chat session. Lives in memory only; the
/// session controller owns it and records one full round at a time.
#[derive(Clone, Debug, Default)]
pub struct Conversation {
    turns: Vec<Message>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    /// A completed round is always one user turn followed by one assistant
    /// turn, in that order.
    pub fn record_round(&mut self, question: &str, answer: &str) {
        self.turns.push(Message::user(question));
        self.turns.push(Message::assistant(answer));
    }

    pub fn turns(&self) -> &[Message] {
        &self.turns
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn transcript(&self) -> String {
        let mut blocks = Vec::with_capacity(self.turns.len());
        for turn in &self.turns {
            let speaker = if turn.role == "assistant" { "Assistant" } else { "You" };
            blocks.push(format!("{}: {}", speaker, turn.content));
        }
        blocks.join("\n\n")
    }
}
