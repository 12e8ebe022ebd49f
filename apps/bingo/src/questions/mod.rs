//! Question pool: reads the phrase file, normalizes it, and shuffles per card.
//!
//! One question per line. Lines are normalized through [`normalize::REPLACEMENTS`]
//! and blank lines are skipped, so a trailing newline never adds an empty cell.

pub mod normalize;

use std::path::Path;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, info};

use crate::errors::BingoError;

/// Parses file content into normalized, non-blank questions in file order.
pub fn parse_questions(content: &str) -> Vec<String> {
    content
        .lines()
        .map(normalize::normalize)
        .filter(|line| {
            let keep = !line.trim().is_empty();
            if !keep {
                debug!("Skipping blank question line");
            }
            keep
        })
        .collect()
}

/// Loads the question pool from `path`.
///
/// Fails with `BingoError::Io` if the file cannot be read and with
/// `BingoError::EmptyQuestions` if it holds no questions.
pub fn load_questions(path: &Path) -> Result<Vec<String>, BingoError> {
    let content = std::fs::read_to_string(path).map_err(|e| BingoError::io(path, e))?;
    let questions = parse_questions(&content);

    if questions.is_empty() {
        return Err(BingoError::EmptyQuestions(path.to_path_buf()));
    }

    info!(count = questions.len(), path = %path.display(), "Loaded questions");
    Ok(questions)
}

/// Returns a shuffled copy of `questions`, drawing randomness from `rng`.
pub fn shuffled<R: Rng + ?Sized>(questions: &[String], rng: &mut R) -> Vec<String> {
    let mut order = questions.to_vec();
    order.shuffle(rng);
    order
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
