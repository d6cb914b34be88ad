use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    System,
    Assistant,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl ChatMessage {
    pub fn user<T: Into<String>>(content: T) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }

    pub fn assistant<T: Into<String>>(content: T) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
        }
    }
}

/// The final message a graph produced.
///
/// Hosted graphs return either a plain string `content` or something else
/// entirely (content-part arrays, tool payloads, bare values). `Text` keeps
/// the former; `Opaque` keeps the raw JSON so it can still be shown and
/// validated.
#[derive(Clone, Debug, PartialEq)]
pub enum Reply {
    Text(String),
    Opaque(Value),
}

impl Reply {
    /// Interprets one element of a graph's `messages` array.
    pub fn from_message_value(value: &Value) -> Self {
        match value.get("content") {
            Some(Value::String(text)) => Reply::Text(text.clone()),
            _ => match value {
                Value::String(text) => Reply::Text(text.clone()),
                other => Reply::Opaque(other.clone()),
            },
        }
    }

    pub fn display_text(&self) -> String {
        match self {
            Reply::Text(text) => text.clone(),
            Reply::Opaque(value) => value.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn string_content_is_text() {
        let reply = Reply::from_message_value(&json!({"type": "ai", "content": "Hello Sarah"}));
        assert_eq!(reply, Reply::Text("Hello Sarah".into()));
    }

    #[test]
    fn structured_content_is_opaque() {
        let value = json!({"content": [{"type": "text", "text": "Hi"}]});
        let reply = Reply::from_message_value(&value);
        assert!(matches!(reply, Reply::Opaque(_)));
        assert!(reply.display_text().contains("\"text\":\"Hi\""));
    }

    #[test]
    fn role_serializes_lowercase() {
        let value = serde_json::to_value(ChatMessage::user("hi")).unwrap();
        assert_eq!(value, json!({"role": "user", "content": "hi"}));
    }
}
