use chrono::Utc;

use crate::common::{ChatMessage, NetworkEvent, Sender};

pub const GREETING: &str =
    "Bonjour ! Je suis votre assistant de la faculté. Comment puis-je vous aider aujourd'hui ?";

pub const FALLBACK_REPLY: &str =
    "Désolé, j'ai rencontré une erreur. Veuillez réessayer plus tard.";

/// Local UI state for the chat widget.
pub struct WidgetState {
    pub open: bool,
    pub messages: Vec<ChatMessage>,
    pub input_text: String,
    /// Requests still waiting for an answer; the typing indicator shows
    /// while this is nonzero.
    pending_requests: usize,
    session_id: String,
}

impl WidgetState {
    pub fn new(session_id: String) -> Self {
        let mut state = Self {
            open: false,
            messages: Vec::new(),
            input_text: String::new(),
            pending_requests: 0,
            session_id,
        };
        state.push_message(Sender::Bot, GREETING.to_string());
        state
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn is_typing(&self) -> bool {
        self.pending_requests > 0
    }

    pub fn push_message(&mut self, sender: Sender, content: String) {
        let now = Utc::now();
        self.messages.push(ChatMessage {
            id: now.timestamp_millis().to_string(),
            sender,
            content,
            timestamp: now.timestamp(),
        });
    }

    pub fn begin_request(&mut self) {
        self.pending_requests += 1;
    }

    /// Appends the bot answer (or the fixed fallback) and settles one
    /// outstanding request, whatever the outcome was.
    pub fn handle_event(&mut self, event: NetworkEvent) {
        match event {
            NetworkEvent::AnswerReceived(answer) => self.push_message(Sender::Bot, answer),
            NetworkEvent::RequestFailed => {
                self.push_message(Sender::Bot, FALLBACK_REPLY.to_string())
            }
        }
        self.pending_requests = self.pending_requests.saturating_sub(1);
    }
}
