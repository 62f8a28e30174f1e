use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// Parse the priority string the history endpoint returns.
    /// Unknown values map to `None` rather than an error.
    pub fn parse(s: &str) -> Option<Priority> {
        if s.eq_ignore_ascii_case("low") {
            Some(Priority::Low)
        } else if s.eq_ignore_ascii_case("medium") {
            Some(Priority::Medium)
        } else if s.eq_ignore_ascii_case("high") {
            Some(Priority::High)
        } else {
            None
        }
    }

    /// Display label used by the history screen
    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "Low Priority",
            Priority::Medium => "Medium Priority",
            Priority::High => "High Priority",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::Low => write!(f, "Low"),
            Priority::Medium => write!(f, "Medium"),
            Priority::High => write!(f, "High"),
        }
    }
}

/// Reminder as submitted from the set-reminder form. Constructed
/// transiently, sent once, not cached locally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reminder {
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub priority: Priority,
}

/// One entry of the reminder history as the service returns it.
/// The service formats dates as "MMM dd, yyyy"; the raw string is kept
/// and parsed on demand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReminderEntry {
    #[serde(default)]
    pub id: i64,
    pub title: String,
    pub description: String,
    pub date: String,
    pub priority: String,
}

impl ReminderEntry {
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%b %d, %Y")
            .or_else(|_| NaiveDate::parse_from_str(&self.date, "%Y-%m-%d"))
            .ok()
    }

    pub fn priority(&self) -> Option<Priority> {
        Priority::parse(&self.priority)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReminderHistory {
    pub username: String,
    #[serde(rename = "remindersList", default)]
    pub reminders: Vec<ReminderEntry>,
}

impl ReminderHistory {
    /// Split entries into (today, everything else) for display. Entries
    /// with unparsable dates land in the second list.
    pub fn partition_by_day(&self, today: NaiveDate) -> (Vec<&ReminderEntry>, Vec<&ReminderEntry>) {
        self.reminders
            .iter()
            .partition(|entry| entry.parsed_date() == Some(today))
    }
}
