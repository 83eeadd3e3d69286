//! Quote, tip and reel catalogs

use serde::Serialize;

/// A motivational quote card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Quote {
    pub text: &'static str,
    pub author: &'static str,
    /// Card background color (hex)
    pub background: &'static str,
}

/// A full-screen motivation reel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Reel {
    pub id: u32,
    pub title: &'static str,
    pub content: &'static str,
    pub background: &'static str,
}

pub const QUOTES: [Quote; 5] = [
    Quote {
        text: "The way to get started is to quit talking and begin doing.",
        author: "Walt Disney",
        background: "#FF6B6B",
    },
    Quote {
        text: "Success is not final, failure is not fatal: it is the courage to continue that counts.",
        author: "Winston Churchill",
        background: "#4ECDC4",
    },
    Quote {
        text: "Don't be afraid to give up the good to go for the great.",
        author: "John D. Rockefeller",
        background: "#45B7D1",
    },
    Quote {
        text: "Innovation distinguishes between a leader and a follower.",
        author: "Steve Jobs",
        background: "#96CEB4",
    },
    Quote {
        text: "The future belongs to those who believe in the beauty of their dreams.",
        author: "Eleanor Roosevelt",
        background: "#FFEAA7",
    },
];

pub const PRODUCTIVITY_TIPS: [&str; 5] = [
    "Start your day with the most important task",
    "Use the 2-minute rule: if it takes less than 2 minutes, do it now",
    "Break large tasks into smaller, manageable chunks",
    "Eliminate distractions during focused work sessions",
    "Take regular breaks to maintain productivity",
];

pub const REELS: [Reel; 5] = [
    Reel {
        id: 1,
        title: "Morning Motivation",
        content: "Every morning is a new opportunity to become better than yesterday. Rise up and chase your dreams!",
        background: "#FF6B6B",
    },
    Reel {
        id: 2,
        title: "Success Mindset",
        content: "Success isn't about being perfect. It's about being consistent and never giving up on your goals.",
        background: "#4ECDC4",
    },
    Reel {
        id: 3,
        title: "Growth Focus",
        content: "Your comfort zone is a beautiful place, but nothing ever grows there. Step out and embrace challenges!",
        background: "#45B7D1",
    },
    Reel {
        id: 4,
        title: "Productivity Power",
        content: "Small daily improvements lead to stunning long-term results. Focus on progress, not perfection.",
        background: "#96CEB4",
    },
    Reel {
        id: 5,
        title: "Dream Big",
        content: "The biggest risk is not taking any risk. Believe in yourself and take that first step today!",
        background: "#FFEAA7",
    },
];

/// Quote of the day for a day of the month (1-31)
pub fn daily_quote(day_of_month: u32) -> &'static Quote {
    &QUOTES[day_of_month as usize % QUOTES.len()]
}

/// Productivity tip of the day for a day of the month (1-31)
pub fn daily_tip(day_of_month: u32) -> &'static str {
    PRODUCTIVITY_TIPS[day_of_month as usize % PRODUCTIVITY_TIPS.len()]
}

pub fn reels() -> &'static [Reel] {
    &REELS
}

/// Reel shown at a paging scroll position
pub fn reel_at(index: usize) -> Option<&'static Reel> {
    REELS.get(index)
}
