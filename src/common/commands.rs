/// Commands the UI sends down to the network task.
#[derive(Debug, Clone)]
pub enum NetworkCommand {
    /// Submit one question to the remote assistant.
    Ask { question: String },
}
