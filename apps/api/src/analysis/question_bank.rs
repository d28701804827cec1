//! Question Bank: topic-keyed interview questions, built once at startup.
//!
//! Held in `AppState` as `Arc<QuestionBank>` and never mutated afterwards,
//! so concurrent requests read it without locking.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Context;

use crate::errors::AppError;

pub const DEFAULT_CATEGORY: &str = "default";
pub const BEHAVIORAL_CATEGORY: &str = "behavioral";

#[derive(Debug, Clone, PartialEq)]
pub struct QuestionCategory {
    /// Lower-case technology name, matched against job description tokens.
    pub key: String,
    pub questions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuestionBank {
    categories: Vec<QuestionCategory>,
    default_questions: Vec<String>,
    behavioral_questions: Vec<String>,
}

impl QuestionBank {
    /// Builds a bank, validating that both reserved categories are usable.
    pub fn new(
        categories: Vec<QuestionCategory>,
        default_questions: Vec<String>,
        behavioral_questions: Vec<String>,
    ) -> Result<Self, AppError> {
        if default_questions.is_empty() {
            return Err(AppError::InvalidInput(format!(
                "Question bank category '{DEFAULT_CATEGORY}' must not be empty"
            )));
        }
        if behavioral_questions.is_empty() {
            return Err(AppError::InvalidInput(format!(
                "Question bank category '{BEHAVIORAL_CATEGORY}' must not be empty"
            )));
        }

        let mut normalized: Vec<QuestionCategory> = Vec::with_capacity(categories.len());
        for category in categories {
            let key = category.key.trim().to_lowercase();
            if key.is_empty() || key == DEFAULT_CATEGORY || key == BEHAVIORAL_CATEGORY {
                return Err(AppError::InvalidInput(format!(
                    "Invalid technology category key '{}'",
                    category.key
                )));
            }
            if category.questions.is_empty() {
                return Err(AppError::InvalidInput(format!(
                    "Question bank category '{key}' has no questions"
                )));
            }
            if normalized.iter().any(|c| c.key == key) {
                return Err(AppError::InvalidInput(format!(
                    "Duplicate question bank category '{key}'"
                )));
            }
            normalized.push(QuestionCategory {
                key,
                questions: category.questions,
            });
        }

        Ok(Self {
            categories: normalized,
            default_questions,
            behavioral_questions,
        })
    }

    /// Parses a JSON object of `category -> [question, ...]`.
    /// Must contain the reserved `default` and `behavioral` keys.
    pub fn from_json(raw: &str) -> Result<Self, AppError> {
        let mut parsed: BTreeMap<String, Vec<String>> = serde_json::from_str(raw)
            .map_err(|e| AppError::InvalidInput(format!("Malformed question bank: {e}")))?;

        let default_questions = parsed.remove(DEFAULT_CATEGORY).unwrap_or_default();
        let behavioral_questions = parsed.remove(BEHAVIORAL_CATEGORY).unwrap_or_default();
        let categories = parsed
            .into_iter()
            .map(|(key, questions)| QuestionCategory { key, questions })
            .collect();

        Self::new(categories, default_questions, behavioral_questions)
    }

    /// Loads a bank from a JSON file on disk.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read question bank at {}", path.display()))?;
        let bank = Self::from_json(&raw)
            .with_context(|| format!("Invalid question bank at {}", path.display()))?;
        Ok(bank)
    }

    /// Technology categories in bank order. Excludes the reserved categories.
    pub fn technical_categories(&self) -> &[QuestionCategory] {
        &self.categories
    }

    pub fn default_questions(&self) -> &[String] {
        &self.default_questions
    }

    pub fn behavioral_questions(&self) -> &[String] {
        &self.behavioral_questions
    }

    /// Looks up any category by key, including the reserved ones.
    #[cfg(test)]
    pub fn category(&self, key: &str) -> Option<&[String]> {
        match key {
            DEFAULT_CATEGORY => Some(self.default_questions.as_slice()),
            BEHAVIORAL_CATEGORY => Some(self.behavioral_questions.as_slice()),
            _ => self
                .categories
                .iter()
                .find(|c| c.key == key)
                .map(|c| c.questions.as_slice()),
        }
    }

    /// The bank shipped with the service.
    pub fn builtin() -> Self {
        let category = |key: &str, questions: &[&str]| QuestionCategory {
            key: key.to_string(),
            questions: owned(questions),
        };

        Self {
            categories: vec![
                category(
                    "javascript",
                    &[
                        "Explain the difference between 'var', 'let', and 'const'.",
                        "What is the Event Loop in JavaScript?",
                        "Explain the concept of Closures.",
                        "What is the difference between '==' and '==='?",
                    ],
                ),
                category(
                    "react",
                    &[
                        "What are React Hooks and why do we use them?",
                        "Explain the Virtual DOM.",
                        "What is the difference between specific state and props?",
                        "How do you handle side effects in React components?",
                    ],
                ),
                category(
                    "node",
                    &[
                        "Explain the concept of middleware in Express.",
                        "What is the difference between process.nextTick() and setImmediate()?",
                        "How does Node.js handle concurrency?",
                    ],
                ),
                category(
                    "python",
                    &[
                        "What are decorators in Python?",
                        "Explain the difference between lists and tuples.",
                        "How is memory managed in Python?",
                    ],
                ),
                category(
                    "sql",
                    &[
                        "What is the difference between INNER JOIN and LEFT JOIN?",
                        "Explain ACID properties.",
                        "How do you optimize a slow query?",
                    ],
                ),
                category(
                    "css",
                    &[
                        "Explain the Box Model.",
                        "What is the difference between Flexbox and Grid?",
                        "How does CSS specificity work?",
                    ],
                ),
            ],
            default_questions: owned(&[
                "Describe a challenging technical problem you solved recently.",
                "How do you stay updated with the latest technologies?",
                "Explain a project architecture you designed.",
                "How do you handle code reviews?",
            ]),
            behavioral_questions: owned(&[
                "Tell me about a time you failed and how you handled it.",
                "Describe a situation where you had a conflict with a colleague.",
                "What is your biggest professional achievement?",
                "How do you prioritize multiple deadlines?",
                "Why do you want to join our company?",
            ]),
        }
    }
}

fn owned(questions: &[&str]) -> Vec<String> {
    questions.iter().map(|q| q.to_string()).collect()
}
