use roadmap_core::model::ChatMessage;

/// Opening line of the mentor chat.
pub const CHAT_GREETING: &str =
    "Operator, I'm your cybersecurity mentor. Ask me about any lab, tool or project on the roadmap.";

/// Identifies one send; replies carrying a stale epoch are dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChatTicket {
    epoch: u64,
    seq: u64,
}

impl ChatTicket {
    #[must_use]
    pub fn seq(&self) -> u64 {
        self.seq
    }
}

/// Message list and in-flight bookkeeping for the chat widget.
///
/// Replies are applied in arrival order. Ending the session bumps the epoch so
/// replies to prompts sent before it are discarded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatVm {
    messages: Vec<ChatMessage>,
    epoch: u64,
    next_seq: u64,
    pending: usize,
    open: bool,
}

impl Default for ChatVm {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatVm {
    #[must_use]
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage::model(CHAT_GREETING)],
            epoch: 0,
            next_seq: 0,
            pending: 0,
            open: false,
        }
    }

    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub fn is_thinking(&self) -> bool {
        self.pending > 0
    }

    pub fn toggle_open(&mut self) {
        self.open = !self.open;
    }

    /// Record the user's prompt and hand out a ticket for its reply.
    ///
    /// Returns `None` for blank input; nothing is recorded then.
    pub fn begin_send(&mut self, prompt: &str) -> Option<(ChatTicket, Vec<ChatMessage>)> {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return None;
        }
        let history = self.messages.clone();
        self.messages.push(ChatMessage::user(prompt));
        self.pending += 1;
        let ticket = ChatTicket {
            epoch: self.epoch,
            seq: self.next_seq,
        };
        self.next_seq += 1;
        Some((ticket, history))
    }

    /// Append a reply. Returns `false` if the ticket predates the current session.
    pub fn apply_reply(&mut self, ticket: ChatTicket, text: String) -> bool {
        if ticket.epoch != self.epoch {
            return false;
        }
        self.pending = self.pending.saturating_sub(1);
        self.messages.push(ChatMessage::model(text));
        true
    }

    /// Forget the conversation and invalidate outstanding tickets.
    pub fn end_session(&mut self) {
        let epoch = self.epoch + 1;
        *self = Self::new();
        self.epoch = epoch;
    }
}
