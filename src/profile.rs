//! Respondent answer state as persisted by the surrounding application.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One respondent's answer to a single question.
///
/// `val` is the chosen option text or free-text content. `is_custom` marks a
/// typed-in value rather than a canned option; it is carried through for
/// display but never affects trait math.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub val: String,
    #[serde(rename = "isCustom", default)]
    pub is_custom: bool,
}

impl Answer {
    /// An answer picked from the question's canned options.
    pub fn picked(val: impl Into<String>) -> Self {
        Self {
            val: val.into(),
            is_custom: false,
        }
    }

    /// A typed-in answer.
    pub fn custom(val: impl Into<String>) -> Self {
        Self {
            val: val.into(),
            is_custom: true,
        }
    }
}

/// A respondent's full questionnaire state, keyed by question id.
///
/// Owned and persisted elsewhere; every component here treats it as
/// read-only input.
pub type AnswerMap = BTreeMap<String, Answer>;
