use contracts::domain::chat::ChatMessage;

pub const CHAT_FAILURE_REPLY: &str =
    "Sorry, there was an error processing your request. Please try again.";

/// Chat panel state
#[derive(Clone, Debug)]
pub struct ChatSession {
    pub input: String,
    pub transcript: Vec<ChatMessage>,
    pub loading: bool,
}

impl ChatSession {
    /// New session seeded with the assistant greeting
    pub fn new(greeting: &str) -> Self {
        Self {
            input: String::new(),
            transcript: vec![ChatMessage::assistant(greeting)],
            loading: false,
        }
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    pub fn can_submit(&self) -> bool {
        !self.loading && !self.input.trim().is_empty()
    }

    /// Accept the current input as a user message.
    ///
    /// Appends the trimmed text, clears the input and raises the in-flight
    /// flag. Returns the prompt, or `None` when the guard rejects it.
    pub fn begin_submit(&mut self) -> Option<String> {
        if !self.can_submit() {
            return None;
        }
        let prompt = self.input.trim().to_string();
        self.input.clear();
        self.transcript.push(ChatMessage::user(prompt.clone()));
        self.loading = true;
        Some(prompt)
    }

    /// Append the assistant's answer, or the failure notice when the
    /// responder failed or returned nothing.
    pub fn finish_submit<E>(&mut self, reply: Result<String, E>) {
        let content = match reply {
            Ok(text) if !text.trim().is_empty() => text,
            _ => CHAT_FAILURE_REPLY.to_string(),
        };
        self.transcript.push(ChatMessage::assistant(content));
        self.loading = false;
    }
}
