use tracing::trace;

use super::config::ScoringConfig;
use super::VibeStats;
use crate::catalog::Catalog;
use crate::profile::AnswerMap;

/// Trait totals before clamping.
pub(crate) struct RawScores {
    pub chaos: i16,
    pub social: i16,
    pub wholesome: i16,
}

impl RawScores {
    pub(crate) fn clamped(&self) -> VibeStats {
        VibeStats {
            chaos: clamp(self.chaos),
            social: clamp(self.social),
            wholesome: clamp(self.wholesome),
        }
    }
}

fn clamp(value: i16) -> u8 {
    value.clamp(0, 100) as u8
}

/// Sums every matching trait delta over the baseline.
///
/// Questions the respondent skipped, ids the catalog doesn't know, and values
/// that match no option are all "no signal" and contribute nothing.
pub(crate) fn score_answers(
    answers: &AnswerMap,
    catalog: &Catalog,
    config: &ScoringConfig,
) -> RawScores {
    let mut chaos = config.baseline;
    let mut social = config.baseline;
    let mut wholesome = config.baseline;

    for rule in &config.trait_rules {
        let Some(answer) = answers.get(rule.question.as_str()) else {
            continue;
        };
        let Some(index) = catalog.option_index(&rule.question, &answer.val) else {
            continue;
        };
        for effect in rule.effects.iter().filter(|effect| effect.index == index) {
            chaos += effect.chaos;
            social += effect.social;
            wholesome += effect.wholesome;
            trace!(
                question = %rule.question,
                index,
                chaos = effect.chaos,
                social = effect.social,
                wholesome = effect.wholesome,
                "trait rule fired"
            );
        }
    }

    RawScores {
        chaos,
        social,
        wholesome,
    }
}
