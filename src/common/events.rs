/// Events the network task sends up to the UI.
#[derive(Debug, Clone)]
pub enum NetworkEvent {
    /// The assistant answered one question.
    AnswerReceived(String),
    /// The request failed (network error or non-2xx status).
    RequestFailed,
}
