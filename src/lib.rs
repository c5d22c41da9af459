//! Deterministic core of a social party game: vibe scoring, pairwise
//! compatibility, and quiz authoring.
//!
//! Everything here is a pure, synchronous function over in-memory inputs.
//! Answer maps are produced and persisted by the surrounding application;
//! this crate only derives display-ready values from them. The question
//! catalog is constructed once and shared read-only across callers, so every
//! component takes it as an explicit argument rather than reaching for a
//! global.

pub mod catalog;
pub mod profile;
pub mod quiz;
pub mod vibe;

pub use catalog::{Catalog, CatalogError, Question, QuestionKind};
pub use profile::{Answer, AnswerMap};
pub use quiz::{author_quiz, select_distractors, DistractorPool, QuizQuestion, MAX_DISTRACTORS};
pub use vibe::{
    compatibility_score, ScoringConfig, VibeEngine, VibeProfile, VibeStats,
};
