// Gemini summarization client

mod client;
mod retry;
mod types;

pub use client::GeminiClient;
