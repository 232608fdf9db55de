//! Improvement suggestions for categories the image did not hit.

use crate::rubric::Rubric;
use crate::scoring::ScoreResult;

pub const MAX_SUGGESTIONS: usize = 6;

/// Model-written suggestions at or under this length are noise.
const MIN_MODEL_SUGGESTION_LEN: usize = 10;

/// Canned suggestions for the highest-weight missing categories, at most six.
pub fn generate_improvement_suggestions(rubric: &Rubric, result: &ScoreResult) -> Vec<String> {
    rubric
        .by_priority()
        .into_iter()
        .filter(|c| !result.is_matched(&c.name))
        .take(MAX_SUGGESTIONS)
        .filter_map(|c| c.suggestion.clone())
        .collect()
}

/// Appends model suggestions that don't overlap anything already in the list,
/// including model suggestions appended earlier in the same pass.
/// Overlap = either string contains the other, ignoring case.
pub fn merge_model_suggestions(mut generated: Vec<String>, from_model: &[String]) -> Vec<String> {
    let mut seen: Vec<String> = generated.iter().map(|s| s.to_lowercase()).collect();

    for suggestion in from_model {
        if suggestion.chars().count() <= MIN_MODEL_SUGGESTION_LEN {
            continue;
        }
        let lower = suggestion.to_lowercase();
        let duplicate = seen
            .iter()
            .any(|c| c.contains(&lower) || lower.contains(c.as_str()));
        if !duplicate {
            generated.push(suggestion.clone());
            seen.push(lower);
        }
    }
    generated
}
