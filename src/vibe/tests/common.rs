use std::sync::Arc;

use crate::catalog::{Catalog, Question, QuestionKind};
use crate::profile::{Answer, AnswerMap};
use crate::vibe::{
    ArchetypeRule, OptionEffect, PaletteOverride, ScoreRange, ScoringConfig, TraitRule, VibeEngine,
};

fn choice(id: &str, options: &[&str]) -> Question {
    Question {
        id: id.to_string(),
        chapter: 1,
        text: format!("fixture question {id}"),
        friend_text: None,
        kind: QuestionKind::MultipleChoice,
        options: options.iter().map(|option| option.to_string()).collect(),
    }
}

fn free_text(id: &str) -> Question {
    Question {
        id: id.to_string(),
        chapter: 1,
        text: format!("fixture question {id}"),
        friend_text: None,
        kind: QuestionKind::TextEntry,
        options: Vec::new(),
    }
}

pub(super) fn catalog() -> Catalog {
    Catalog::new(vec![
        choice("t1", &["Calm", "Wild"]),
        choice("t2", &["Out", "In"]),
        choice("t3", &["Kind", "Sharp"]),
        free_text("t4"),
        choice("t5", &["Neon skyline", "Soft pastel morning", "Plain daylight"]),
        choice("t6", &["Mayhem", "Order"]),
    ])
    .expect("fixture catalog")
}

fn effect(index: usize, chaos: i16, social: i16, wholesome: i16) -> OptionEffect {
    OptionEffect {
        index,
        chaos,
        social,
        wholesome,
    }
}

pub(super) fn archetypes() -> Vec<ArchetypeRule> {
    vec![
        ArchetypeRule {
            label: "Gremlin".to_string(),
            palette: "ember".to_string(),
            chaos: ScoreRange::above(75),
            social: ScoreRange::any(),
            wholesome: ScoreRange::any(),
        },
        ArchetypeRule {
            label: "Sweetheart".to_string(),
            palette: "meadow".to_string(),
            chaos: ScoreRange::any(),
            social: ScoreRange::any(),
            wholesome: ScoreRange::above(75),
        },
        ArchetypeRule {
            label: "Spark".to_string(),
            palette: "sunset".to_string(),
            chaos: ScoreRange::any(),
            social: ScoreRange::above(60),
            wholesome: ScoreRange::any(),
        },
    ]
}

pub(super) fn config() -> ScoringConfig {
    ScoringConfig {
        baseline: 50,
        trait_rules: vec![
            TraitRule {
                question: "t1".to_string(),
                effects: vec![effect(0, -30, 0, 0), effect(1, 30, 0, 0)],
            },
            TraitRule {
                question: "t2".to_string(),
                effects: vec![effect(0, 0, 30, 0), effect(1, 0, -30, 0)],
            },
            TraitRule {
                question: "t3".to_string(),
                effects: vec![effect(0, 0, 0, 30), effect(1, 0, 0, -30)],
            },
            TraitRule {
                question: "t6".to_string(),
                effects: vec![effect(0, 60, 0, 0), effect(1, -60, 0, 0)],
            },
        ],
        archetypes: archetypes(),
        fallback_archetype: "Wildcard".to_string(),
        fallback_palette: "slate".to_string(),
        palette_overrides: vec![
            PaletteOverride {
                contains: "Neon".to_string(),
                palette: "neon-wash".to_string(),
            },
            PaletteOverride {
                contains: "pastel".to_string(),
                palette: "pastel-wash".to_string(),
            },
        ],
        aesthetic_question: "t5".to_string(),
        signature_question: "t4".to_string(),
        best_match_question: "t1".to_string(),
    }
}

pub(super) fn engine() -> VibeEngine {
    VibeEngine::new(Arc::new(catalog()), config())
}

pub(super) fn answers(picks: &[(&str, &str)]) -> AnswerMap {
    picks
        .iter()
        .map(|(question, value)| (question.to_string(), Answer::picked(*value)))
        .collect()
}
