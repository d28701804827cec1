//! Resume Matcher: scores resume text against a job description by keyword overlap.
//!
//! Algorithm:
//! 1. Tokenize + stopword-filter both texts into token sets.
//! 2. jaccard  = |R ∩ J| / |R ∪ J| × 100
//! 3. coverage = |R ∩ J| / |J| × 100
//! 4. score    = clamp(round(coverage × 0.7 + round(jaccard) × 0.3 + 20), 0, 100)
//! 5. present / missing keywords: first 10 tokens longer than 2 chars.
//!
//! Raw overlap is harsh on real resumes, hence the fixed +20 baseline. The weights
//! are calibration constants and are kept as-is.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::similarity::{coverage_percent, jaccard_percent};
use crate::analysis::tokenizer::{preprocess, TokenSet};
use crate::errors::AppError;

pub const COVERAGE_WEIGHT: f64 = 0.7;
pub const JACCARD_WEIGHT: f64 = 0.3;
pub const BASELINE_BOOST: f64 = 20.0;

/// Keywords shorter than this carry no signal.
const MIN_KEYWORD_LEN: usize = 3;
const MAX_KEYWORDS: usize = 10;

const STRONG_MATCH_THRESHOLD: u32 = 75;
const MODERATE_MATCH_THRESHOLD: u32 = 50;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordAnalysis {
    /// Job keywords the resume already contains, resume order.
    pub present: Vec<String>,
    /// Job keywords the resume lacks, job description order.
    pub missing: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchReport {
    pub match_score: u32, // 0 – 100
    pub keyword_analysis: KeywordAnalysis,
    pub feedback: String,
}

/// Scores `resume_text` against `job_description`.
///
/// Empty text is not an error: it degrades to the baseline score.
pub fn match_resume(resume_text: &str, job_description: &str) -> Result<MatchReport, AppError> {
    let resume_tokens = preprocess(resume_text);
    let job_tokens = preprocess(job_description);

    // Jaccard enters the composite as a whole percentage.
    let jaccard = jaccard_percent(&resume_tokens, &job_tokens).round();
    let coverage = coverage_percent(&resume_tokens, &job_tokens);
    let match_score = compose_score(coverage, jaccard)?;

    debug!(
        resume_tokens = resume_tokens.len(),
        job_tokens = job_tokens.len(),
        jaccard,
        coverage,
        match_score,
        "resume match scored"
    );

    Ok(MatchReport {
        match_score,
        keyword_analysis: keyword_analysis(&resume_tokens, &job_tokens),
        feedback: build_feedback(match_score).to_string(),
    })
}

fn compose_score(coverage: f64, jaccard: f64) -> Result<u32, AppError> {
    let raw = coverage * COVERAGE_WEIGHT + jaccard * JACCARD_WEIGHT + BASELINE_BOOST;
    if !raw.is_finite() {
        return Err(AppError::Analysis("Failed to analyze resume.".to_string()));
    }
    Ok(raw.round().clamp(0.0, 100.0) as u32)
}

fn keyword_analysis(resume_tokens: &TokenSet, job_tokens: &TokenSet) -> KeywordAnalysis {
    let significant = |t: &&str| t.chars().count() >= MIN_KEYWORD_LEN;

    KeywordAnalysis {
        present: resume_tokens
            .intersection(job_tokens)
            .filter(significant)
            .take(MAX_KEYWORDS)
            .map(str::to_string)
            .collect(),
        missing: job_tokens
            .difference(resume_tokens)
            .filter(significant)
            .take(MAX_KEYWORDS)
            .map(str::to_string)
            .collect(),
    }
}

fn build_feedback(score: u32) -> &'static str {
    if score > STRONG_MATCH_THRESHOLD {
        "Excellent match! Your resume covers most of the key requirements found in the job description."
    } else if score > MODERATE_MATCH_THRESHOLD {
        "Good match. You have many of the required skills, but there are some gaps. Consider adding the missing keywords listed below."
    } else {
        "Low match. Your resume seems to be missing significant keywords from the job description. Tailor it by including the missing terms."
    }
}
