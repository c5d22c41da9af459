//! Quiz authoring: turning a group's answers into guess-the-answer questions.
//!
//! The only intentionally non-deterministic corner of the crate: distractor
//! selection shuffles its candidates so repeated authoring runs produce varied
//! quizzes. Everything here is still side-effect free; the caller persists
//! whatever it wants to keep.

mod authoring;
mod distractors;

pub use authoring::{author_quiz, DistractorPool, QuizQuestion};
pub use distractors::{select_distractors, MAX_DISTRACTORS};
