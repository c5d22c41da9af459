use crate::catalog::Catalog;
use crate::profile::AnswerMap;

/// Percentage of commonly-answered comparable questions where both answers
/// agree exactly.
///
/// Free-text questions are excluded. With no commonly-answered comparable
/// question at all the result is defined as 0. Symmetric in its two answer
/// maps since the comparison is commutative equality.
pub fn compatibility_score(catalog: &Catalog, mine: &AnswerMap, theirs: &AnswerMap) -> u8 {
    let mut total = 0u32;
    let mut matches = 0u32;

    for question in catalog.questions() {
        if !question.is_comparable() {
            continue;
        }
        let (Some(my_answer), Some(their_answer)) = (
            mine.get(question.id.as_str()),
            theirs.get(question.id.as_str()),
        ) else {
            continue;
        };
        total += 1;
        if my_answer.val == their_answer.val {
            matches += 1;
        }
    }

    if total == 0 {
        return 0;
    }
    ((f64::from(matches) / f64::from(total)) * 100.0).round() as u8
}
