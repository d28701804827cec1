// Resume matching and interview coaching engine.
// Everything below `handlers` is synchronous, pure, and free of I/O; the only
// shared state is the read-only question bank and the injected transcriber.

pub mod answer_scoring;
pub mod handlers;
pub mod question_bank;
pub mod question_selector;
pub mod resume_match;
pub mod similarity;
pub mod stopwords;
pub mod tokenizer;
pub mod transcription;
