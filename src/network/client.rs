use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

use crate::common::{NetworkCommand, NetworkEvent};

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    question: &'a str,
    session_id: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    answer: String,
}

/// Bridges the UI to the remote assistant endpoint.
///
/// Each question runs in its own task, so several requests may be in
/// flight at once and answers arrive in completion order.
pub struct AssistantClient {
    event_sender: mpsc::Sender<NetworkEvent>,
    command_receiver: mpsc::Receiver<NetworkCommand>,
    http: reqwest::Client,
    endpoint: String,
    session_id: String,
}

impl AssistantClient {
    pub fn new(
        event_sender: mpsc::Sender<NetworkEvent>,
        command_receiver: mpsc::Receiver<NetworkCommand>,
        endpoint: String,
        session_id: String,
    ) -> Self {
        Self {
            event_sender,
            command_receiver,
            http: reqwest::Client::new(),
            endpoint,
            session_id,
        }
    }

    pub async fn run(mut self) {
        log::info!("Assistant client started (endpoint {})", self.endpoint);

        while let Some(command) = self.command_receiver.recv().await {
            match command {
                NetworkCommand::Ask { question } => {
                    let http = self.http.clone();
                    let event_sender = self.event_sender.clone();
                    let endpoint = self.endpoint.clone();
                    let session_id = self.session_id.clone();

                    tokio::spawn(async move {
                        let event = match ask(&http, &endpoint, &question, &session_id).await {
                            Ok(answer) => NetworkEvent::AnswerReceived(answer),
                            Err(err) => {
                                log::warn!("Assistant request failed: {err}");
                                NetworkEvent::RequestFailed
                            }
                        };
                        if let Err(err) = event_sender.send(event).await {
                            log::warn!("Failed to notify UI: {err}");
                        }
                    });
                }
            }
        }

        log::info!("Assistant client stopped");
    }
}

async fn ask(
    http: &reqwest::Client,
    endpoint: &str,
    question: &str,
    session_id: &str,
) -> Result<String, reqwest::Error> {
    let response = http
        .post(endpoint)
        .json(&ChatRequest {
            question,
            session_id,
        })
        .send()
        .await?
        .error_for_status()?;

    let body: ChatResponse = response.json().await?;
    Ok(body.answer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_matches_wire_contract() {
        let body = serde_json::to_value(ChatRequest {
            question: "Quels sont les horaires ?",
            session_id: "abc",
        })
        .expect("serializable");
        assert_eq!(
            body,
            serde_json::json!({
                "question": "Quels sont les horaires ?",
                "session_id": "abc",
            })
        );
    }

    #[test]
    fn response_extracts_answer() {
        let parsed: ChatResponse = serde_json::from_str(r#"{"answer":"hi"}"#).expect("parseable");
        assert_eq!(parsed.answer, "hi");
    }

    #[test]
    fn response_ignores_extra_fields() {
        let parsed: ChatResponse =
            serde_json::from_str(r#"{"answer":"hi","sources":["faq"]}"#).expect("parseable");
        assert_eq!(parsed.answer, "hi");
    }
}
