//! Canned chat answers.
//!
//! The service does not talk to a real model; answers come from a small
//! fixed phrase table, matched case-insensitively against the incoming
//! message. Unrecognized messages get a generic acknowledgement.

use chrono::Local;

/// Fallback answer for messages no pattern matches.
const DEFAULT_ANSWER: &str = "Получил ваш запрос";

/// Picks the canned answer for `message`.
///
/// Patterns are checked in a fixed order, first hit wins. The Russian and
/// English phrase sets are both recognized.
pub fn canned_answer(message: &str) -> String {
    let lowered = message.to_lowercase();

    if lowered.contains("привет") {
        "Привет! Чем могу помочь?".to_string()
    } else if lowered.contains("погода") {
        "Погода хорошая".to_string()
    } else if lowered.contains("время") {
        format!("Сейчас {}", Local::now().format("%H:%M"))
    } else if lowered.contains("hello") {
        "Hello! How can I assist you today?".to_string()
    } else if lowered.contains("weather") {
        "The weather is nice today".to_string()
    } else if lowered.contains("capital of france") {
        "The capital of France is Paris".to_string()
    } else if lowered.contains("artificial intelligence") {
        "Artificial Intelligence is the simulation of human intelligence processes by machines"
            .to_string()
    } else {
        DEFAULT_ANSWER.to_string()
    }
}
