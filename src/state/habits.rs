//! Habit list structure and management

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// A single daily habit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Habit {
    pub id: u32,
    pub name: String,
    pub completed: bool,
}

impl Habit {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            completed: false,
        }
    }
}

/// Completion counts shown under the habit list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HabitStats {
    pub completed: usize,
    pub total: usize,
}

/// Ordered list of habits with unique ids
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HabitList {
    habits: Vec<Habit>,
}

impl HabitList {
    /// Build a list, dropping any habit whose id is already taken
    pub fn new(habits: Vec<Habit>) -> Self {
        let mut unique: Vec<Habit> = Vec::with_capacity(habits.len());
        for habit in habits {
            if unique.iter().any(|h| h.id == habit.id) {
                tracing::warn!("Ignoring duplicate habit id {}", habit.id);
                continue;
            }
            unique.push(habit);
        }
        Self { habits: unique }
    }

    pub fn habits(&self) -> &[Habit] {
        &self.habits
    }

    /// Flip the completed flag of a habit and return its new value
    pub fn toggle(&mut self, id: u32) -> AppResult<Habit> {
        let habit = self
            .habits
            .iter_mut()
            .find(|h| h.id == id)
            .ok_or(AppError::HabitNotFound(id))?;

        habit.completed = !habit.completed;
        Ok(habit.clone())
    }

    pub fn stats(&self) -> HabitStats {
        HabitStats {
            completed: self.habits.iter().filter(|h| h.completed).count(),
            total: self.habits.len(),
        }
    }
}

impl Default for HabitList {
    fn default() -> Self {
        Self::new(vec![
            Habit::new(1, "Morning Exercise"),
            Habit::new(2, "Read 30 minutes"),
            Habit::new(3, "Drink 8 glasses of water"),
        ])
    }
}
