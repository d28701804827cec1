//! Interview Question Selector: picks technical and behavioral questions for a job.
//!
//! Randomness is injected so callers decide between entropy and a fixed seed.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::question_bank::QuestionBank;
use crate::analysis::tokenizer::{preprocess, TokenSet};

pub const QUESTIONS_PER_CATEGORY: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionSet {
    pub technical: Vec<String>,
    pub behavioral: Vec<String>,
}

/// Selects up to five technical and five behavioral questions for `job_description`.
pub fn select_questions<R: Rng + ?Sized>(
    bank: &QuestionBank,
    job_description: &str,
    rng: &mut R,
) -> QuestionSet {
    let tokens = preprocess(job_description);
    let pool = technical_pool(bank, &tokens);

    QuestionSet {
        technical: draw(&pool, rng),
        behavioral: draw(bank.behavioral_questions(), rng),
    }
}

/// Every question from each technology mentioned in the job description,
/// falling back to the default category when none match.
/// Questions shared by two categories appear twice.
pub fn technical_pool(bank: &QuestionBank, tokens: &TokenSet) -> Vec<String> {
    let mut pool = Vec::new();
    let mut matched = Vec::new();

    for category in bank.technical_categories() {
        if tokens.contains(&category.key) {
            matched.push(category.key.as_str());
            pool.extend(category.questions.iter().cloned());
        }
    }

    if pool.is_empty() {
        pool = bank.default_questions().to_vec();
    }

    debug!(?matched, pool_size = pool.len(), "technical question pool built");
    pool
}

fn draw<R: Rng + ?Sized>(source: &[String], rng: &mut R) -> Vec<String> {
    let mut shuffled = source.to_vec();
    shuffled.shuffle(rng);
    shuffled.truncate(QUESTIONS_PER_CATEGORY);
    shuffled
}
