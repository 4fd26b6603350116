pub mod client;

pub use client::AssistantClient;
