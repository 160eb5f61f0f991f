//! Meaning quiz generation.
//!
//! Builds a multiple-choice question from a user's own learned kanji: the
//! prompt shows one meaning and the options are that kanji plus three of the
//! user's other kanji with different meanings, shuffled.

use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;
use serde::Serialize;

use crate::error::CoreError;
use crate::store::KanjiEntry;

/// Number of options offered per question (one answer, the rest distractors).
pub const QUIZ_OPTION_COUNT: usize = 4;

/// A single "which kanji means X?" question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MeaningQuiz {
    #[serde(rename = "type")]
    pub quiz_type: &'static str,
    pub question: String,
    pub options: Vec<String>,
    pub answer: String,
}

/// Generate a meaning quiz from `entries`.
///
/// Requires at least [`QUIZ_OPTION_COUNT`] characters with distinct meanings.
pub fn generate_meaning_quiz<R: Rng + ?Sized>(
    entries: &[KanjiEntry],
    rng: &mut R,
) -> Result<MeaningQuiz, CoreError> {
    // One entry per character and per meaning, so no distractor can also
    // answer the question.
    let mut distinct: Vec<&KanjiEntry> = Vec::with_capacity(entries.len());
    for entry in entries {
        let clashes = distinct.iter().any(|e| {
            e.character == entry.character || same_meaning(&e.meaning, &entry.meaning)
        });
        if !clashes {
            distinct.push(entry);
        }
    }

    if distinct.len() < QUIZ_OPTION_COUNT {
        return Err(CoreError::Validation(format!(
            "A quiz needs at least {QUIZ_OPTION_COUNT} learned kanji with distinct meanings (got {})",
            distinct.len()
        )));
    }

    let target = *distinct
        .choose(rng)
        .ok_or_else(|| CoreError::Internal("No quiz target available".to_string()))?;

    let others: Vec<&str> = distinct
        .iter()
        .filter(|e| e.character != target.character)
        .map(|e| e.character.as_str())
        .collect();

    let mut options: Vec<String> = others
        .choose_multiple(rng, QUIZ_OPTION_COUNT - 1)
        .map(|c| c.to_string())
        .collect();
    options.push(target.character.clone());
    options.shuffle(rng);

    Ok(MeaningQuiz {
        quiz_type: "meaning",
        question: format!("Which kanji means '{}'?", target.meaning),
        options,
        answer: target.character.clone(),
    })
}

fn same_meaning(a: &str, b: &str) -> bool {
    a.trim().eq_ignore_ascii_case(b.trim())
}
