pub mod canned;
pub mod chat;
pub mod coach;
pub mod completion;
pub mod constants;
pub mod habits;
pub mod web_server;

pub use chat::{compose_messages, ChatMessage, ChatTurn};
pub use coach::LifeCoach;
pub use completion::{CompletionClient, ProviderError};
pub use habits::{HabitRecord, HabitStore};
