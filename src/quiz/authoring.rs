use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use tracing::info;

use super::distractors::select_distractors;
use crate::catalog::Catalog;
use crate::profile::AnswerMap;

/// One authored guess-the-answer question about a target respondent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub question_id: String,
    /// Third-person question text with the target's name substituted.
    pub prompt: String,
    pub correct_option: String,
    /// Up to three wrong answers, distinct from each other and from the
    /// correct option. Callers shuffle the combined option set themselves.
    pub distractors: Vec<String>,
}

/// Peers' answers indexed by question id, deduplicated per question.
#[derive(Debug, Default, Clone)]
pub struct DistractorPool {
    by_question: BTreeMap<String, BTreeSet<String>>,
}

impl DistractorPool {
    /// Indexes every non-blank answer across the given answer maps.
    pub fn from_answer_maps<'a, I>(maps: I) -> Self
    where
        I: IntoIterator<Item = &'a AnswerMap>,
    {
        let mut by_question: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for map in maps {
            for (question_id, answer) in map {
                if answer.val.is_empty() {
                    continue;
                }
                by_question
                    .entry(question_id.clone())
                    .or_default()
                    .insert(answer.val.clone());
            }
        }
        Self { by_question }
    }

    /// Distinct answers peers gave to a question, if any.
    pub fn answers_for(&self, question_id: &str) -> Option<&BTreeSet<String>> {
        self.by_question.get(question_id)
    }
}

/// Authors one quiz question per question the target answered.
///
/// Distractors come from the peers' answer pool first, topped up from the
/// question's canned options. Unknown question ids and blank answers are
/// skipped. The result carries no identity or persistence; the caller stores
/// what it needs.
pub fn author_quiz(
    catalog: &Catalog,
    target_name: &str,
    answers: &AnswerMap,
    peers: &[AnswerMap],
) -> Vec<QuizQuestion> {
    let pool = DistractorPool::from_answer_maps(peers);
    let empty = BTreeSet::new();

    let mut authored = Vec::new();
    for (question_id, answer) in answers {
        if answer.val.is_empty() {
            continue;
        }
        let Some(question) = catalog.resolve(question_id) else {
            continue;
        };

        let candidates = pool.answers_for(question_id).unwrap_or(&empty);
        let distractors = select_distractors(&answer.val, candidates, &question.options);

        authored.push(QuizQuestion {
            question_id: question_id.clone(),
            prompt: question.friend_prompt(target_name),
            correct_option: answer.val.clone(),
            distractors,
        });
    }

    info!(
        member = %target_name,
        count = authored.len(),
        "authored quiz questions"
    );
    authored
}
