use super::config::ScoringConfig;
use super::VibeStats;
use crate::profile::AnswerMap;

/// Walks the ordered archetype table; the first predicate admitting the
/// clamped stats wins. Falls back to the configured default pair.
pub(crate) fn classify<'a>(stats: &VibeStats, config: &'a ScoringConfig) -> (&'a str, &'a str) {
    config
        .archetypes
        .iter()
        .find(|rule| rule.matches(stats))
        .map(|rule| (rule.label.as_str(), rule.palette.as_str()))
        .unwrap_or((
            config.fallback_archetype.as_str(),
            config.fallback_palette.as_str(),
        ))
}

/// Palette override keyed on the aesthetic question's raw answer value.
///
/// First matching substring wins. The override replaces the archetype-derived
/// palette outright; the archetype label is never touched.
pub(crate) fn palette_override<'a>(
    answers: &AnswerMap,
    config: &'a ScoringConfig,
) -> Option<&'a str> {
    let answer = answers.get(config.aesthetic_question.as_str())?;
    config
        .palette_overrides
        .iter()
        .find(|rule| answer.val.contains(rule.contains.as_str()))
        .map(|rule| rule.palette.as_str())
}
