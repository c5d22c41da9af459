//! Scoring rule tables.
//!
//! Everything tunable about vibe analysis lives here as data: which questions
//! feed which trait, the ordered archetype predicate table, and the ordered
//! palette override table. `ScoringConfig::default()` carries the shipped
//! product tuning, keyed to the bundled catalog's question ids; deployments
//! can deserialize an alternate rule set instead.

use serde::{Deserialize, Serialize};

use super::VibeStats;

/// Full rule set consumed by the scoring engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Neutral starting value for each trait before deltas apply.
    pub baseline: i16,
    pub trait_rules: Vec<TraitRule>,
    /// Evaluated in order; the first matching entry names the archetype.
    pub archetypes: Vec<ArchetypeRule>,
    pub fallback_archetype: String,
    pub fallback_palette: String,
    /// Cosmetic layer on top of the archetype palette: evaluated in order
    /// against the aesthetic question's raw answer, first match replaces the
    /// palette outright. Never touches the archetype.
    pub palette_overrides: Vec<PaletteOverride>,
    /// Question whose answer drives the palette override.
    pub aesthetic_question: String,
    /// Question whose raw answer is passed through as the signature trait.
    pub signature_question: String,
    /// Fixed question id the UI highlights as the best-match prompt.
    pub best_match_question: String,
}

/// Trait deltas keyed to one question's option positions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraitRule {
    pub question: String,
    pub effects: Vec<OptionEffect>,
}

/// Signed adjustments applied when the respondent picked the option at
/// `index`. Rules are independent; deltas are summed over the baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionEffect {
    pub index: usize,
    #[serde(default)]
    pub chaos: i16,
    #[serde(default)]
    pub social: i16,
    #[serde(default)]
    pub wholesome: i16,
}

/// Open interval over a clamped trait score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRange {
    /// Matches values strictly greater than this.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub above: Option<u8>,
    /// Matches values strictly less than this.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub below: Option<u8>,
}

impl ScoreRange {
    pub const fn any() -> Self {
        Self {
            above: None,
            below: None,
        }
    }

    pub const fn above(threshold: u8) -> Self {
        Self {
            above: Some(threshold),
            below: None,
        }
    }

    pub const fn below(threshold: u8) -> Self {
        Self {
            above: None,
            below: Some(threshold),
        }
    }

    pub const fn between(above: u8, below: u8) -> Self {
        Self {
            above: Some(above),
            below: Some(below),
        }
    }

    pub fn admits(self, value: u8) -> bool {
        self.above.map_or(true, |lo| value > lo) && self.below.map_or(true, |hi| value < hi)
    }
}

/// One entry of the ordered archetype table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchetypeRule {
    pub label: String,
    pub palette: String,
    #[serde(default)]
    pub chaos: ScoreRange,
    #[serde(default)]
    pub social: ScoreRange,
    #[serde(default)]
    pub wholesome: ScoreRange,
}

impl ArchetypeRule {
    pub fn matches(&self, stats: &VibeStats) -> bool {
        self.chaos.admits(stats.chaos)
            && self.social.admits(stats.social)
            && self.wholesome.admits(stats.wholesome)
    }
}

/// Substring-keyed palette replacement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteOverride {
    pub contains: String,
    pub palette: String,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            baseline: 50,
            trait_rules: default_trait_rules(),
            archetypes: default_archetypes(),
            fallback_archetype: "The Wildcard".to_string(),
            fallback_palette: "from-gray-500 to-slate-900".to_string(),
            palette_overrides: default_palette_overrides(),
            aesthetic_question: "q1".to_string(),
            signature_question: "q26".to_string(),
            best_match_question: "q1".to_string(),
        }
    }
}

// effect(index, chaos, social, wholesome)
fn effect(index: usize, chaos: i16, social: i16, wholesome: i16) -> OptionEffect {
    OptionEffect {
        index,
        chaos,
        social,
        wholesome,
    }
}

fn rule(question: &str, effects: Vec<OptionEffect>) -> TraitRule {
    TraitRule {
        question: question.to_string(),
        effects,
    }
}

fn default_trait_rules() -> Vec<TraitRule> {
    vec![
        // Saturday morning: sleeping in reads chaotic, chores the opposite.
        rule("q6", vec![effect(0, 10, 0, 0), effect(3, -10, 0, 0)]),
        // Trip role: itinerary planner vs. the one who got everyone lost.
        rule("q7", vec![effect(0, -15, 0, 0), effect(1, 15, 0, 0)]),
        // Last-minute road trip.
        rule(
            "q13",
            vec![
                effect(0, 20, 0, 0),
                effect(1, -10, 0, 0),
                effect(2, -10, 0, 0),
            ],
        ),
        // Plan it or wing it.
        rule("q33", vec![effect(0, -10, 0, 0), effect(1, 10, 0, 0)]),
        // Party behavior.
        rule(
            "q9",
            vec![
                effect(0, 0, 20, 0),
                effect(1, 0, -15, 0),
                effect(2, 0, -15, 0),
            ],
        ),
        // Personality emoji: party popper vs. zen/melting.
        rule(
            "q4",
            vec![
                effect(2, 0, 10, 0),
                effect(1, 0, -10, 0),
                effect(3, 0, -10, 0),
            ],
        ),
        // Call or text.
        rule("q30", vec![effect(0, 0, 5, 0), effect(1, 0, -5, 0)]),
        // Night in or night out.
        rule("q31", vec![effect(0, 0, -10, 0), effect(1, 0, 10, 0)]),
        // Showing care: service and quality time vs. loving roasts.
        rule(
            "q15",
            vec![
                effect(2, 0, 0, 15),
                effect(3, 0, 0, 15),
                effect(1, 0, 0, -15),
            ],
        ),
        // Loyalty: remembering details and honesty vs. shared fries.
        rule(
            "q24",
            vec![
                effect(2, 0, 0, 10),
                effect(3, 0, 0, 10),
                effect(0, 0, 0, -5),
            ],
        ),
        // Forgive or forget.
        rule("q32", vec![effect(0, 0, 0, 10), effect(1, 5, 0, 0)]),
        // Toxic trait: each option pulls two traits.
        rule(
            "q26",
            vec![
                effect(0, 10, -5, 0),
                effect(1, 5, -10, 0),
                effect(2, 0, 5, -10),
                effect(3, 15, 0, 10),
            ],
        ),
        // Horror movie casting. The killer option floors wholesome.
        rule(
            "q27",
            vec![
                effect(0, 0, 0, 10),
                effect(1, 20, 0, -100),
                effect(3, 0, 0, -5),
            ],
        ),
        // Zombie apocalypse.
        rule(
            "q29",
            vec![
                effect(0, 10, 0, 0),
                effect(1, -10, 10, 0),
                effect(3, 20, 0, 0),
            ],
        ),
    ]
}

fn archetype(
    label: &str,
    palette: &str,
    chaos: ScoreRange,
    social: ScoreRange,
    wholesome: ScoreRange,
) -> ArchetypeRule {
    ArchetypeRule {
        label: label.to_string(),
        palette: palette.to_string(),
        chaos,
        social,
        wholesome,
    }
}

// Order is significant: extreme profiles must be claimed before the looser
// mid-range buckets further down get a chance to match.
fn default_archetypes() -> Vec<ArchetypeRule> {
    vec![
        archetype(
            "The Agent of Chaos",
            "from-red-500 to-orange-600",
            ScoreRange::above(75),
            ScoreRange::any(),
            ScoreRange::any(),
        ),
        archetype(
            "The Mom Friend",
            "from-emerald-400 to-teal-600",
            ScoreRange::below(30),
            ScoreRange::any(),
            ScoreRange::above(65),
        ),
        archetype(
            "The Life of the Party",
            "from-pink-500 to-rose-600",
            ScoreRange::any(),
            ScoreRange::above(75),
            ScoreRange::any(),
        ),
        archetype(
            "The Cozy Introvert",
            "from-indigo-400 to-violet-600",
            ScoreRange::any(),
            ScoreRange::below(30),
            ScoreRange::above(50),
        ),
        archetype(
            "The Golden Retriever",
            "from-yellow-400 to-amber-600",
            ScoreRange::any(),
            ScoreRange::any(),
            ScoreRange::above(80),
        ),
        archetype(
            "The Menace",
            "from-purple-600 to-fuchsia-900",
            ScoreRange::any(),
            ScoreRange::any(),
            ScoreRange::below(25),
        ),
        archetype(
            "The Chill Pill",
            "from-cyan-400 to-blue-500",
            ScoreRange::below(40),
            ScoreRange::between(40, 70),
            ScoreRange::any(),
        ),
        archetype(
            "The Loose Cannon",
            "from-orange-500 to-fuchsia-500",
            ScoreRange::above(60),
            ScoreRange::above(60),
            ScoreRange::any(),
        ),
    ]
}

fn default_palette_overrides() -> Vec<PaletteOverride> {
    [
        ("Neon", "from-fuchsia-600 to-purple-900"),
        ("Pastel", "from-rose-200 to-sky-200 text-slate-800"),
        ("Earthy", "from-stone-500 to-emerald-800"),
        ("Mono", "from-slate-700 to-black"),
    ]
    .into_iter()
    .map(|(contains, palette)| PaletteOverride {
        contains: contains.to_string(),
        palette: palette.to_string(),
    })
    .collect()
}
