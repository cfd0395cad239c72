use chrono::Local;
use serde::{Deserialize, Serialize};

/// A tracked habit. Records are append-only in this scope: no update or
/// delete operations exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HabitRecord {
    pub id: u64,
    pub name: String,
    pub category: String,
    pub description: String,
    pub created_date: String,
    pub completed: bool,
    pub streak: u32,
}

/// In-memory, insertion-ordered habit list. Owned by whoever builds it; the
/// web server wraps one in shared state rather than using a process global.
#[derive(Debug, Default)]
pub struct HabitStore {
    habits: Vec<HabitRecord>,
}

impl HabitStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new habit with a 1-based monotonic id and today's date.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> HabitRecord {
        let habit = HabitRecord {
            id: self.habits.len() as u64 + 1,
            name: name.into(),
            category: category.into(),
            description: description.into(),
            created_date: Local::now().format("%Y-%m-%d").to_string(),
            completed: false,
            streak: 0,
        };
        self.habits.push(habit.clone());
        habit
    }

    /// Habits whose category exactly equals `category`, in insertion order.
    pub fn list_by_category(&self, category: &str) -> Vec<HabitRecord> {
        self.habits
            .iter()
            .filter(|h| h.category == category)
            .cloned()
            .collect()
    }

    /// All habits in insertion order.
    pub fn all(&self) -> &[HabitRecord] {
        &self.habits
    }
}

/// Category key → display label, as shown in the dashboard dropdowns.
pub const CATEGORIES: &[(&str, &str)] = &[
    ("morning", "🌅 Morning Routine"),
    ("evening", "🌙 Evening Routine"),
    ("productivity", "⚡ Productivity"),
    ("health", "💪 Health & Wellness"),
    ("social", "👥 Social Skills"),
    ("learning", "📚 Learning & Development"),
    ("mindfulness", "🧠 Mindfulness"),
    ("financial", "💰 Financial Health"),
];

/// Static suggestion catalog. Categories without curated entries (e.g.
/// mindfulness, financial) return an empty slice.
pub fn suggestions_for(category: &str) -> &'static [&'static str] {
    match category {
        "morning" => &[
            "Wake up at 6 AM consistently",
            "Drink a glass of water immediately after waking up",
            "15 minutes of meditation or mindfulness",
            "Morning exercise (yoga, jogging, stretching)",
            "Plan your day and set 3 main goals",
            "Read 10 pages of a book",
            "Healthy breakfast with protein",
        ],
        "evening" => &[
            "Digital detox 1 hour before bed",
            "Gratitude journaling",
            "Prepare for next day (clothes, meals)",
            "Review daily accomplishments",
            "Reading before bed (no screens)",
            "Evening reflection and planning",
            "Relaxation techniques (deep breathing)",
        ],
        "productivity" => &[
            "Pomodoro technique (25min work, 5min break)",
            "Time blocking for important tasks",
            "Weekly review and planning session",
            "Single-tasking instead of multitasking",
            "Declutter workspace daily",
            "Set clear daily priorities",
            "Use a task management system",
        ],
        "health" => &[
            "30 minutes of daily exercise",
            "Drink 8 glasses of water",
            "Healthy meal preparation",
            "Regular sleep schedule",
            "Daily stretching routine",
        ],
        "learning" => &[
            "Read 20 pages daily",
            "Learn a new skill for 30 minutes",
            "Practice a language daily",
            "Watch educational content",
            "Take online courses regularly",
        ],
        _ => &[],
    }
}
