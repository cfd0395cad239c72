// Configuration constants, loaded from the environment (or a .env file via
// dotenvy) with the same defaults as the hosted deployment.

use std::env;

// Use lazy_static to initialize static variables safely.
lazy_static::lazy_static! {
    pub static ref OPENROUTER_BASE_URL: String = env::var("OPENROUTER_BASE_URL")
        .unwrap_or_else(|_| "https://openrouter.ai/api/v1".to_string());
    pub static ref OPENROUTER_API_KEY: String = env::var("OPENROUTER_API_KEY").unwrap_or_default();
    pub static ref GPT_MODEL: String = env::var("GPT_MODEL")
        .unwrap_or_else(|_| "openai/gpt-oss-20b:free".to_string());
}

/// Default cap on generated tokens when a caller does not override it.
pub const MAX_TOKENS: u32 = 500;

/// Default sampling temperature when a caller does not override it.
pub const TEMPERATURE: f32 = 0.7;

pub const COACH_SYSTEM_PROMPT: &str = "You are GPT-Life, an AI personality and habit development coach. \
You help people build better routines, develop habits, and improve their personality. \
Provide specific, actionable advice.";
