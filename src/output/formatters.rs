//! Formatting utilities for terminal output

use crate::core::{Hint, HintCodec};
use colored::{ColoredString, Colorize};

/// Format a hint as emoji squares
///
/// # Examples
/// ```
/// use wordle_strategy::core::HintCodec;
/// use wordle_strategy::output::formatters::hint_to_emoji;
///
/// let codec = HintCodec::new(5).unwrap();
/// let hint = codec.encode("gybbg").unwrap();
/// assert_eq!(hint_to_emoji(codec, hint), "🟩🟨⬜⬜🟩");
/// ```
#[must_use]
pub fn hint_to_emoji(codec: HintCodec, hint: Hint) -> String {
    codec
        .digits(hint)
        .map(|digit| match digit {
            2 => '🟩',
            1 => '🟨',
            _ => '⬜',
        })
        .collect()
}

/// Render a guess as colored letter tiles
#[must_use]
pub fn hint_tiles(codec: HintCodec, guess: &str, hint: Hint) -> String {
    guess
        .chars()
        .zip(codec.digits(hint))
        .map(|(letter, digit)| {
            let tile = format!(" {} ", letter.to_ascii_uppercase());
            let tile: ColoredString = match digit {
                2 => tile.black().on_green(),
                1 => tile.black().on_yellow(),
                _ => tile.white().on_bright_black(),
            };
            tile.to_string()
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let ratio = if max > 0.0 { (value / max).clamp(0.0, 1.0) } else { 0.0 };
    let filled = ((ratio * width as f64).round() as usize).min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Information gain as a bar scaled to the entropy of the candidates
#[must_use]
pub fn information_bar(gain: f64, entropy: f64, width: usize) -> String {
    create_progress_bar(gain, entropy, width)
}

/// Format a duration in seconds with sensible precision
#[must_use]
pub fn format_seconds(seconds: f64) -> String {
    if seconds < 1.0 {
        format!("{:.0}ms", seconds * 1000.0)
    } else {
        format!("{seconds:.2}s")
    }
}
