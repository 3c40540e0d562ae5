//! Chat - Model

use crate::shared::api::ApiError;
use async_trait::async_trait;

pub const SIMULATED_REPLY: &str =
    "This is a simulated response. The chat API integration will be implemented later.";

/// Produces the assistant's answer to one user prompt.
#[async_trait(?Send)]
pub trait ChatResponder {
    async fn reply(&self, prompt: &str) -> Result<String, ApiError>;
}

/// Stand-in until the chat backend exists: waits a fixed delay (none when
/// zero), then answers with a canned reply.
#[derive(Debug, Clone)]
pub struct SimulatedResponder {
    delay_ms: u32,
    reply: String,
}

impl SimulatedResponder {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            reply: SIMULATED_REPLY.to_string(),
        }
    }
}

#[async_trait(?Send)]
impl ChatResponder for SimulatedResponder {
    async fn reply(&self, prompt: &str) -> Result<String, ApiError> {
        log::debug!("Simulating reply to {} chars", prompt.len());
        if self.delay_ms > 0 {
            gloo_timers::future::TimeoutFuture::new(self.delay_ms).await;
        }
        Ok(self.reply.clone())
    }
}
