//! Habit item types and pure helpers over loaded habit lists.

use std::collections::HashMap;

use chrono::{Datelike, Local, Weekday};
use serde::{Deserialize, Serialize};

/// Whether a habit is currently being tracked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HabitStatus {
    Active,
    Inactive,
}

/// Days of the week a habit is scheduled on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Frequency {
    pub monday: bool,
    pub tuesday: bool,
    pub wednesday: bool,
    pub thursday: bool,
    pub friday: bool,
    pub saturday: bool,
    pub sunday: bool,
}

impl Frequency {
    /// Every day of the week.
    pub fn daily() -> Self {
        Self {
            monday: true,
            tuesday: true,
            wednesday: true,
            thursday: true,
            friday: true,
            saturday: true,
            sunday: true,
        }
    }

    pub fn includes(&self, weekday: Weekday) -> bool {
        match weekday {
            Weekday::Mon => self.monday,
            Weekday::Tue => self.tuesday,
            Weekday::Wed => self.wednesday,
            Weekday::Thu => self.thursday,
            Weekday::Fri => self.friday,
            Weekday::Sat => self.saturday,
            Weekday::Sun => self.sunday,
        }
    }
}

/// A single tracked habit, as returned by the backend list endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub streak: u32,
    pub status: HabitStatus,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub completed_today: bool,
    /// Scheduled days; absent means daily.
    #[serde(default)]
    pub frequency: Option<Frequency>,
}

/// Percentage of active habits completed today, rounded.
pub fn completion_rate(habits: &[Habit]) -> u8 {
    let active: Vec<&Habit> = habits
        .iter()
        .filter(|h| h.status == HabitStatus::Active)
        .collect();
    if active.is_empty() {
        return 0;
    }
    let completed = active.iter().filter(|h| h.completed_today).count();
    ((completed as f64 / active.len() as f64) * 100.0).round() as u8
}

/// Whether the habit is scheduled for today.
pub fn is_due_today(habit: &Habit) -> bool {
    is_due_on(habit, Local::now().weekday())
}

/// Whether the habit is scheduled for the given weekday. No frequency means
/// daily.
pub fn is_due_on(habit: &Habit, weekday: Weekday) -> bool {
    habit.frequency.map_or(true, |f| f.includes(weekday))
}

/// Format a streak count for display.
pub fn format_streak(streak: u32) -> String {
    match streak {
        0 => "0 days".to_string(),
        1 => "1 day".to_string(),
        n => format!("{n} days"),
    }
}

/// Today's progress for a habit, as a percentage.
pub fn progress(habit: &Habit) -> u8 {
    if habit.completed_today {
        100
    } else {
        0
    }
}

/// Group habits by category; habits without one land under "Uncategorized".
pub fn group_by_category(habits: &[Habit]) -> HashMap<String, Vec<&Habit>> {
    let mut groups: HashMap<String, Vec<&Habit>> = HashMap::new();
    for habit in habits {
        let category = habit
            .category
            .clone()
            .unwrap_or_else(|| "Uncategorized".to_string());
        groups.entry(category).or_default().push(habit);
    }
    groups
}
