//! Screen identifiers for the view router

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// The screen currently shown by the client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum View {
    #[default]
    Home,
    Habits,
    Reels,
    /// The focus timer screen
    Focus,
    Generator,
}

impl View {
    pub fn as_str(&self) -> &'static str {
        match self {
            View::Home => "home",
            View::Habits => "habits",
            View::Reels => "reels",
            View::Focus => "focus",
            View::Generator => "generator",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for View {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "home" => Ok(View::Home),
            "habits" => Ok(View::Habits),
            "reels" => Ok(View::Reels),
            "focus" | "pomodoro" => Ok(View::Focus),
            "generator" => Ok(View::Generator),
            _ => Err(AppError::InvalidView(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_and_alias() {
        assert_eq!("habits".parse::<View>(), Ok(View::Habits));
        assert_eq!("Pomodoro".parse::<View>(), Ok(View::Focus));
        assert_eq!("focus".parse::<View>(), Ok(View::Focus));
    }

    #[test]
    fn rejects_unknown_view() {
        assert_eq!(
            "settings".parse::<View>(),
            Err(AppError::InvalidView("settings".to_string()))
        );
    }

    #[test]
    fn display_round_trips() {
        for view in [View::Home, View::Habits, View::Reels, View::Focus, View::Generator] {
            assert_eq!(view.to_string().parse::<View>(), Ok(view));
        }
    }
}
