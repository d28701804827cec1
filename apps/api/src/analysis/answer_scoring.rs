//! Answer Scorer: rates a free-text interview answer for depth and relevance.
//!
//! depth     = min(10, ceil(words / 10))
//! relevance = min(10, round(bigram_similarity(answer, question + jd) × 20))
//! score     = clamp(round(depth × 0.4 + relevance × 0.6), 1, 10)
//!
//! Bigram similarity between a short answer and a long context rarely exceeds
//! 0.4, so it is stretched ×20 before weighting. A non-empty answer never scores 0.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::similarity::string_similarity;

pub const DEPTH_WEIGHT: f64 = 0.4;
pub const RELEVANCE_WEIGHT: f64 = 0.6;
const WORDS_PER_DEPTH_POINT: usize = 10;
const RELEVANCE_STRETCH: f64 = 20.0;
const MAX_SUBSCORE: u32 = 10;

pub const MIN_SCORE: u8 = 1;
pub const MAX_SCORE: u8 = 10;

const STRONG_ANSWER_THRESHOLD: u8 = 7;
const MODERATE_ANSWER_THRESHOLD: u8 = 4;

pub const EMPTY_ANSWER_FEEDBACK: &str = "Please provide an answer.";
pub const EMPTY_ANSWER_IMPROVEMENT: &str = "N/A";

/// Generic coaching tip returned with every scored answer. Not tailored per answer.
pub const IMPROVED_ANSWER_TEMPLATE: &str = "To improve, ensure you directly address the 'Action' you took and the 'Result' you achieved. Use technical terms from the question.";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerReport {
    pub score: u8, // 0 only for an empty answer, otherwise 1 – 10
    pub feedback: String,
    pub improved_answer: String,
}

impl AnswerReport {
    fn empty_answer() -> Self {
        Self {
            score: 0,
            feedback: EMPTY_ANSWER_FEEDBACK.to_string(),
            improved_answer: EMPTY_ANSWER_IMPROVEMENT.to_string(),
        }
    }
}

/// Scores `user_answer` in the context of `question` and `job_description`.
pub fn score_answer(question: &str, user_answer: &str, job_description: &str) -> AnswerReport {
    if user_answer.trim().is_empty() {
        return AnswerReport::empty_answer();
    }

    let context = format!("{question} {job_description}");
    let similarity = string_similarity(&user_answer.to_lowercase(), &context.to_lowercase());

    let word_count = user_answer.split_whitespace().count();
    let depth = depth_score(word_count);
    let relevance = relevance_score(similarity);
    let score = compose_score(depth, relevance);

    debug!(word_count, similarity, depth, relevance, score, "answer scored");

    AnswerReport {
        score,
        feedback: build_feedback(score).to_string(),
        improved_answer: IMPROVED_ANSWER_TEMPLATE.to_string(),
    }
}

fn depth_score(word_count: usize) -> u32 {
    (word_count.div_ceil(WORDS_PER_DEPTH_POINT) as u32).min(MAX_SUBSCORE)
}

fn relevance_score(similarity: f64) -> u32 {
    ((similarity * RELEVANCE_STRETCH).round() as u32).min(MAX_SUBSCORE)
}

fn compose_score(depth: u32, relevance: u32) -> u8 {
    let raw = (depth as f64 * DEPTH_WEIGHT + relevance as f64 * RELEVANCE_WEIGHT).round();
    raw.clamp(MIN_SCORE as f64, MAX_SCORE as f64) as u8
}

fn build_feedback(score: u8) -> &'static str {
    if score >= STRONG_ANSWER_THRESHOLD {
        "Great answer! You covered the topic well and included relevant keywords."
    } else if score >= MODERATE_ANSWER_THRESHOLD {
        "Decent answer. Try to expand more on the details and use specific terminology from the job description."
    } else {
        "Your answer is a bit short or off-topic. Try to use the STAR method (Situation, Task, Action, Result) and include more specific keywords."
    }
}
