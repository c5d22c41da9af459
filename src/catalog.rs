//! Static question catalog and lookups keyed to option position.
//!
//! The catalog is loaded once and treated as read-only for the lifetime of the
//! process. Option order is a load-bearing contract: trait rules address
//! options by position, not by text, so reordering a question's options in the
//! source data changes scoring behavior.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Distinguishes free-text questions from fixed-choice ones.
///
/// Free-text questions are excluded from compatibility comparison and never
/// resolve an option index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    MultipleChoice,
    TextEntry,
}

/// One questionnaire entry as shipped in the catalog data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub chapter: u8,
    pub text: String,
    /// Third-person phrasing used when quizzing friends; may contain a
    /// `{name}` placeholder.
    #[serde(rename = "friendText", default, skip_serializing_if = "Option::is_none")]
    pub friend_text: Option<String>,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    #[serde(default)]
    pub options: Vec<String>,
}

impl Question {
    /// Whether the question is eligible for exact-match compatibility scoring.
    pub fn is_comparable(&self) -> bool {
        self.kind != QuestionKind::TextEntry
    }

    /// Position of `value` in the option list. Exact, case-sensitive match.
    pub fn option_index(&self, value: &str) -> Option<usize> {
        self.options.iter().position(|option| option == value)
    }

    /// Third-person prompt with `{name}` substituted, falling back to the
    /// first-person text when no friend phrasing exists.
    pub fn friend_prompt(&self, name: &str) -> String {
        self.friend_text
            .as_deref()
            .unwrap_or(&self.text)
            .replace("{name}", name)
    }
}

/// Raised when a catalog cannot be constructed from its source data.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate question id `{0}`")]
    DuplicateId(String),
}

/// Read-only question collection with id-based lookup.
///
/// Constructed once and shared; every scoring component reads through it
/// rather than importing the question data directly, so tests can substitute
/// a minimal fixture catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    questions: Vec<Question>,
    by_id: HashMap<String, usize>,
}

impl Catalog {
    /// Builds a catalog, rejecting duplicate question ids.
    pub fn new(questions: Vec<Question>) -> Result<Self, CatalogError> {
        let mut by_id = HashMap::with_capacity(questions.len());
        for (position, question) in questions.iter().enumerate() {
            if by_id.insert(question.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateId(question.id.clone()));
            }
        }
        Ok(Self { questions, by_id })
    }

    /// Parses a catalog from its JSON representation.
    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        let questions: Vec<Question> = serde_json::from_str(raw)?;
        Self::new(questions)
    }

    /// The production question set shipped with the crate.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json_str(include_str!("../data/questions.json"))
    }

    /// Resolves a question by id. `None` is a normal outcome for unknown ids,
    /// never a failure.
    pub fn resolve(&self, question_id: &str) -> Option<&Question> {
        self.by_id
            .get(question_id)
            .map(|&position| &self.questions[position])
    }

    /// Position of `value` among the question's options. `None` when the
    /// question is unknown, has no options, or the value doesn't match any
    /// option exactly.
    pub fn option_index(&self, question_id: &str, value: &str) -> Option<usize> {
        self.resolve(question_id)?.option_index(value)
    }

    /// Questions in catalog order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn choice(id: &str, options: &[&str]) -> Question {
        Question {
            id: id.to_string(),
            chapter: 1,
            text: format!("question {id}"),
            friend_text: Some(format!("what would {{name}} say to {id}?")),
            kind: QuestionKind::MultipleChoice,
            options: options.iter().map(|option| option.to_string()).collect(),
        }
    }

    #[test]
    fn resolves_known_ids_and_rejects_unknown_ones() {
        let catalog = Catalog::new(vec![choice("a1", &["Yes", "No"])]).expect("catalog");
        assert_eq!(catalog.resolve("a1").map(|q| q.id.as_str()), Some("a1"));
        assert!(catalog.resolve("missing").is_none());
    }

    #[test]
    fn option_index_is_exact_and_case_sensitive() {
        let catalog = Catalog::new(vec![choice("a1", &["Yes", "No"])]).expect("catalog");
        assert_eq!(catalog.option_index("a1", "No"), Some(1));
        assert_eq!(catalog.option_index("a1", "no"), None);
        assert_eq!(catalog.option_index("a1", "Maybe"), None);
        assert_eq!(catalog.option_index("missing", "Yes"), None);
    }

    #[test]
    fn option_index_is_none_for_optionless_questions() {
        let free_text = Question {
            id: "t1".to_string(),
            chapter: 2,
            text: "say anything".to_string(),
            friend_text: None,
            kind: QuestionKind::TextEntry,
            options: Vec::new(),
        };
        let catalog = Catalog::new(vec![free_text]).expect("catalog");
        assert_eq!(catalog.option_index("t1", "anything"), None);
        assert!(!catalog.resolve("t1").expect("resolves").is_comparable());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let result = Catalog::new(vec![choice("a1", &["Yes"]), choice("a1", &["No"])]);
        match result {
            Err(CatalogError::DuplicateId(id)) => assert_eq!(id, "a1"),
            other => panic!("expected duplicate id error, got {other:?}"),
        }
    }

    #[test]
    fn malformed_json_surfaces_a_parse_error() {
        let result = Catalog::from_json_str("{not json");
        assert!(matches!(result, Err(CatalogError::Parse(_))));
    }

    #[test]
    fn friend_prompt_substitutes_the_name() {
        let question = choice("a1", &["Yes"]);
        assert_eq!(question.friend_prompt("Maya"), "what would Maya say to a1?");
    }

    #[test]
    fn friend_prompt_falls_back_to_first_person_text() {
        let mut question = choice("a1", &["Yes"]);
        question.friend_text = None;
        assert_eq!(question.friend_prompt("Maya"), "question a1");
    }

    #[test]
    fn bundled_catalog_loads_with_unique_ids() {
        let catalog = Catalog::bundled().expect("bundled catalog parses");
        assert!(!catalog.is_empty());
        assert_eq!(catalog.len(), 34);
        assert!(catalog.resolve("q1").is_some());
        assert!(catalog
            .questions()
            .iter()
            .filter(|question| question.is_comparable())
            .all(|question| question.options.len() >= 2));
    }
}
