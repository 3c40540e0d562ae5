use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Роль сообщения в чате
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

impl ChatRole {
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s {
            "user" => Ok(ChatRole::User),
            "assistant" => Ok(ChatRole::Assistant),
            _ => Err(format!("Unknown chat role: {}", s)),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ChatRole::User => "user",
            ChatRole::Assistant => "assistant",
        }
    }
}

/// Сообщение чата
///
/// Messages are append-only: once pushed to a transcript they are never
/// edited or removed. `id` is only used as a stable render key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    pub id: Uuid,
    pub role: ChatRole,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl ChatMessage {
    pub fn new(role: ChatRole, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            content: content.into(),
            created_at: Utc::now(),
        }
    }

    /// Создать сообщение пользователя
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(ChatRole::User, content)
    }

    /// Создать сообщение ассистента
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(ChatRole::Assistant, content)
    }

    pub fn is_user(&self) -> bool {
        self.role == ChatRole::User
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.content.trim().is_empty() {
            return Err("Message content cannot be empty".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trip_through_str() {
        assert_eq!(ChatRole::from_str("user"), Ok(ChatRole::User));
        assert_eq!(ChatRole::from_str("assistant"), Ok(ChatRole::Assistant));
        assert!(ChatRole::from_str("system").is_err());
        assert_eq!(ChatRole::Assistant.as_str(), "assistant");
    }

    #[test]
    fn test_role_serializes_lowercase() {
        let msg = ChatMessage::user("hi");
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["role"], "user");
        assert_eq!(json["content"], "hi");
    }

    #[test]
    fn test_validate_rejects_blank_content() {
        assert!(ChatMessage::assistant("   ").validate().is_err());
        assert!(ChatMessage::assistant("ok").validate().is_ok());
    }

    #[test]
    fn test_messages_get_distinct_ids() {
        let a = ChatMessage::user("a");
        let b = ChatMessage::user("a");
        assert_ne!(a.id, b.id);
        assert!(a.is_user());
    }
}
