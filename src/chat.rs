use serde::{Deserialize, Serialize};

/// One exchanged (user message, assistant reply) pair in conversation history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub user: String,
    pub assistant: String,
}

impl ChatTurn {
    pub fn new(user: impl Into<String>, assistant: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            assistant: assistant.into(),
        }
    }
}

/// A role-tagged entry in the wire format expected by chat-completion APIs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: "assistant".to_string(),
            content: content.into(),
        }
    }
}

/// Assemble the message list for a completion request: one system entry, then
/// the user/assistant pair for every recorded turn, then the new user message.
/// The result always has length `1 + 2 * history.len() + 1`.
pub fn compose_messages(
    system_prompt: &str,
    history: &[ChatTurn],
    new_message: &str,
) -> Vec<ChatMessage> {
    let mut messages = Vec::with_capacity(2 + 2 * history.len());
    messages.push(ChatMessage::system(system_prompt));
    for turn in history {
        messages.push(ChatMessage::user(&turn.user));
        messages.push(ChatMessage::assistant(&turn.assistant));
    }
    messages.push(ChatMessage::user(new_message));
    messages
}
