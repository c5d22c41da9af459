//! Vibe analysis: trait scoring, archetype classification, and pairwise
//! compatibility.
//!
//! Every entry point is a pure function over its inputs. Analysis never
//! fails: absent or unmatched answers are "no signal", not errors.

mod classify;
mod compatibility;
mod config;
mod rules;

#[cfg(test)]
mod tests;

pub use compatibility::compatibility_score;
pub use config::{
    ArchetypeRule, OptionEffect, PaletteOverride, ScoreRange, ScoringConfig, TraitRule,
};

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::profile::AnswerMap;

/// Normalized trait scores, each in [0, 100]. The three are independent; no
/// invariant relates them to each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VibeStats {
    pub chaos: u8,
    pub social: u8,
    pub wholesome: u8,
}

/// Display-ready personality summary, recomputed fresh on every read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VibeProfile {
    pub archetype: String,
    pub stats: VibeStats,
    /// Theme token for the presentation layer.
    pub color_palette: String,
    /// Question id the UI highlights; a configured constant, not computed.
    pub best_match_q: String,
    /// Raw answer to the designated signature-trait question, passed through
    /// untransformed.
    pub signature_trait: Option<String>,
}

/// Stateless analyzer applying a scoring rule set over a shared catalog.
pub struct VibeEngine {
    catalog: Arc<Catalog>,
    config: ScoringConfig,
}

impl VibeEngine {
    pub fn new(catalog: Arc<Catalog>, config: ScoringConfig) -> Self {
        Self { catalog, config }
    }

    /// Engine with the shipped product rule set.
    pub fn with_defaults(catalog: Arc<Catalog>) -> Self {
        Self::new(catalog, ScoringConfig::default())
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Computes the full vibe profile for one respondent's answers.
    pub fn analyze(&self, answers: &AnswerMap) -> VibeProfile {
        let raw = rules::score_answers(answers, &self.catalog, &self.config);
        let stats = raw.clamped();

        let (archetype, palette) = classify::classify(&stats, &self.config);
        let palette = classify::palette_override(answers, &self.config).unwrap_or(palette);

        let signature_trait = answers
            .get(self.config.signature_question.as_str())
            .map(|answer| answer.val.clone());

        VibeProfile {
            archetype: archetype.to_string(),
            stats,
            color_palette: palette.to_string(),
            best_match_q: self.config.best_match_question.clone(),
            signature_trait,
        }
    }

    /// Pairwise match percentage over the engine's catalog.
    pub fn compatibility(&self, mine: &AnswerMap, theirs: &AnswerMap) -> u8 {
        compatibility_score(&self.catalog, mine, theirs)
    }
}
