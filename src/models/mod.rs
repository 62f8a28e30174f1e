//! Data models for the reminder service wire format.

pub mod reminder;
pub mod user;

pub use reminder::{Priority, Reminder, ReminderEntry, ReminderHistory};
pub use user::UserRecord;
