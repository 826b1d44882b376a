//! Answer key resolution.

use crate::models::{Letter, Question};

/// Resolves the answer key to a letter, or `None` when it matches nothing.
///
/// A key that is itself a letter wins; otherwise it is compared against the
/// option texts in A, B, C order, trimmed and case-insensitive. A non-string
/// key never resolves.
pub fn resolve_letter(question: &Question) -> Option<Letter> {
    let key = question.correct.as_deref()?;
    if let Some(letter) = Letter::parse(key) {
        return Some(letter);
    }

    let key = key.trim().to_lowercase();
    Letter::ALL
        .into_iter()
        .find(|&letter| {
            let text = question.option(letter);
            !text.is_empty() && text.trim().to_lowercase() == key
        })
}

/// The correct letter for a question, defaulting to A when the key is unusable.
pub fn correct_letter(question: &Question) -> Letter {
    resolve_letter(question).unwrap_or(Letter::A)
}
