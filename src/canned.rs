//! Keyword-triggered canned replies, answered without contacting the model.
//!
//! Table order is priority order: the first keyword found as a substring of
//! the lowercased input wins. No fuzzy matching.

/// Fixed keyword → response table for common coaching questions.
pub const CANNED_RESPONSES: &[(&str, &str)] = &[
    (
        "hello",
        "Hello! I'm your AI life coach. I help people build better habits and develop their personality. What would you like to work on today? 😊",
    ),
    (
        "hi",
        "Hi there! I'm excited to help you with personal development. Are you looking to improve your morning routine, build new habits, or work on specific skills?",
    ),
    (
        "help",
        "I can help you with:\n• 🌅 Building morning/evening routines\n• 💪 Developing new habits\n• 🧠 Personality development\n• ⚡ Productivity strategies\n• 👥 Social skills improvement\n• 📚 Learning new skills\n\nWhat interests you most?",
    ),
    (
        "routine",
        "**Great morning routine template:**\n⏰ 6:00 AM - Wake up, drink water\n🧘 6:15 AM - Meditation/mindfulness (15min)\n🏃 6:30 AM - Exercise (yoga, jogging, stretching)\n🍎 7:00 AM - Healthy breakfast\n📋 7:30 AM - Plan day & set goals\n💼 8:00 AM - Start focused work",
    ),
    (
        "habit",
        "**Habit formation strategy:**\n1. **Start small** - 5 minutes daily\n2. **Be consistent** - Same time every day\n3. **Track progress** - Use a habit tracker\n4. **Celebrate wins** - Reward yourself\n5. **Stay accountable** - Share your goals",
    ),
    (
        "sleep",
        "**For better sleep:**\n1. 📵 Digital detox 1 hour before bed\n2. ⏰ Consistent sleep schedule\n3. 🌙 Dark, cool bedroom\n4. 🧘 Relaxation techniques\n5. ☕ No caffeine after 2 PM",
    ),
    (
        "productivity",
        "**Productivity tips:**\n1. 🕒 Time blocking technique\n2. 🍅 Pomodoro method (25min work, 5min break)\n3. 🎯 Prioritize 3 main tasks daily\n4. 🔕 Eliminate distractions\n5. 🏖️ Regular breaks",
    ),
    (
        "social",
        "**Social skills development:**\n1. 👂 Practice active listening\n2. 💬 Start small conversations daily\n3. 😊 Maintain eye contact and smile\n4. ❓ Ask open-ended questions\n5. 🤝 Join social groups or clubs",
    ),
];

/// Return the canned reply for the first keyword contained in `message`,
/// case-insensitively, or `None` when nothing matches.
pub fn match_canned(message: &str) -> Option<&'static str> {
    let lowercase = message.to_lowercase();
    CANNED_RESPONSES
        .iter()
        .find(|(keyword, _)| lowercase.contains(keyword))
        .map(|(_, response)| *response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hello_matches_any_case() {
        let expected = CANNED_RESPONSES[0].1;
        assert_eq!(match_canned("hello"), Some(expected));
        assert_eq!(match_canned("HELLO coach"), Some(expected));
        assert_eq!(match_canned("well, Hello again"), Some(expected));
    }

    #[test]
    fn test_table_order_is_priority() {
        // Contains both "hello" and (via "this") "hi"; the earlier entry wins.
        assert_eq!(match_canned("hello, is this on?"), Some(CANNED_RESPONSES[0].1));
    }

    #[test]
    fn test_keyword_inside_longer_message() {
        let reply = match_canned("I need a better morning routine").unwrap();
        assert!(reply.contains("morning routine template"));
    }

    #[test]
    fn test_no_match() {
        assert_eq!(match_canned("tell me about quantum physics"), None);
        assert_eq!(match_canned(""), None);
    }
}
