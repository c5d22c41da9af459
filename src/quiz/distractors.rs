use std::collections::BTreeSet;

use rand::seq::SliceRandom;
use rand::thread_rng;

/// Upper bound on distractors per quiz question.
pub const MAX_DISTRACTORS: usize = 3;

/// Picks up to three plausible wrong answers for a quiz question.
///
/// Candidates come from `pool` (other respondents' answers to the same
/// question) with the correct answer removed; a shortfall is filled from the
/// question's canned `fallback_options`, again excluding the correct answer
/// and anything already chosen. Fewer than three distractors is a normal
/// outcome when both supplies are small.
///
/// The returned list never contains the correct answer or a duplicate, and
/// its order is randomized so the correct option's eventual position leaks no
/// signal.
pub fn select_distractors(
    correct: &str,
    pool: &BTreeSet<String>,
    fallback_options: &[String],
) -> Vec<String> {
    let mut rng = thread_rng();

    let mut candidates: Vec<&str> = pool
        .iter()
        .map(String::as_str)
        .filter(|value| *value != correct)
        .collect();
    candidates.shuffle(&mut rng);
    candidates.truncate(MAX_DISTRACTORS);

    let mut selected: Vec<String> = candidates.into_iter().map(str::to_string).collect();

    if selected.len() < MAX_DISTRACTORS {
        let mut fill: Vec<&str> = fallback_options
            .iter()
            .map(String::as_str)
            .filter(|value| *value != correct)
            .collect();
        fill.shuffle(&mut rng);

        for value in fill {
            if selected.len() == MAX_DISTRACTORS {
                break;
            }
            if selected.iter().any(|chosen| chosen == value) {
                continue;
            }
            selected.push(value.to_string());
        }
    }

    selected
}
