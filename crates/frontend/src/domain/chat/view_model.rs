//! Chat - View Model

use super::model::ChatResponder;
use super::state::ChatSession;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct ChatVm {
    pub session: RwSignal<ChatSession>,
}

impl ChatVm {
    pub fn new(greeting: &str) -> Self {
        Self {
            session: RwSignal::new(ChatSession::new(greeting)),
        }
    }

    pub fn set_input(&self, input: String) {
        self.session.update(|s| s.set_input(input));
    }

    /// Send the current input and wait for the reply.
    ///
    /// The user message shows up before the first await; the assistant
    /// message once `responder` resolves. Returns `false` when the input
    /// is blank or a reply is still pending.
    pub async fn submit<R: ChatResponder + ?Sized>(self, responder: &R) -> bool {
        let Some(prompt) = self.session.try_update(|s| s.begin_submit()).flatten() else {
            return false;
        };

        let reply = responder.reply(&prompt).await;
        if let Err(e) = &reply {
            log::error!("Chat error: {}", e);
        }
        self.session.update(|s| s.finish_submit(reply));
        true
    }
}
