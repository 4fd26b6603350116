/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

/// Domain model for one chat message. Held in memory only; the
/// conversation does not survive the process.
#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub id: String,
    pub sender: Sender,
    pub content: String,
    pub timestamp: i64,
}
