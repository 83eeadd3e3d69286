//! Mood-based quote lookup

use crate::error::{AppError, AppResult};

const MOOD_QUOTES: [(&str, &str); 4] = [
    (
        "tired",
        "Rest when you're weary. Refresh and renew yourself, your body, your mind, your spirit. Then get back to work.",
    ),
    (
        "motivated",
        "Your motivation today is the foundation of your success tomorrow. Keep that fire burning!",
    ),
    (
        "stressed",
        "In the middle of difficulty lies opportunity. Take a deep breath and find your way through.",
    ),
    (
        "happy",
        "Happiness is not by chance, but by choice. You're choosing to shine today!",
    ),
];

/// Pick a quote for the given mood, falling back to a generic encouragement.
///
/// Surrounding whitespace is trimmed before both the lookup and the fallback
/// template, so `" tired "` matches `tired` and padding never reaches the text.
pub fn generate_mood_quote(mood: &str) -> AppResult<String> {
    let mood = mood.trim();
    if mood.is_empty() {
        return Err(AppError::EmptyMood);
    }

    let key = mood.to_lowercase();
    let quote = MOOD_QUOTES
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, quote)| quote.to_string())
        .unwrap_or_else(|| {
            format!(
                "When you're feeling {}, remember that every emotion is temporary, but your strength is permanent.",
                mood
            )
        });

    Ok(quote)
}
