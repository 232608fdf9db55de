//! Performativeness scoring — deterministic keyword matching against a `Rubric`.
//!
//! Algorithm:
//! 1. For every detected item, collect each category with a keyword that is a
//!    case-insensitive substring of the item.
//! 2. Walk categories by weight (highest first, ties in rubric order). A
//!    category is credited once, attributed to the first item that matched it.
//! 3. percentage = min(score / max_score × 100, 100), rounded to 0.1.
//!
//! Items are never consumed: "baggy vintage jeans" credits both `baggy_jeans`
//! and `vintage_clothing`.

use serde::Serialize;

use crate::rubric::Rubric;

pub mod suggestions;

/// A credited category and the item that earned it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryMatch {
    pub category: String,
    pub evidence: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoreResult {
    /// 0.0 – 100.0, one decimal place.
    pub percentage: f64,
    /// Credited categories in claim order.
    pub matched: Vec<CategoryMatch>,
    pub score: u32,
    pub max_score: u32,
}

impl ScoreResult {
    pub fn matched_names(&self) -> Vec<&str> {
        self.matched.iter().map(|m| m.category.as_str()).collect()
    }

    pub fn is_matched(&self, category: &str) -> bool {
        self.matched.iter().any(|m| m.category == category)
    }
}

pub fn calculate_performativeness_score<S: AsRef<str>>(rubric: &Rubric, items: &[S]) -> ScoreResult {
    let max_score = rubric.max_score();

    // Per-item category hits, in item order. Items with no hits are dropped.
    let item_matches: Vec<(&str, Vec<&str>)> = items
        .iter()
        .filter_map(|item| {
            let item = item.as_ref();
            let item_lower = item.to_lowercase();
            let hits: Vec<&str> = rubric
                .categories()
                .iter()
                .filter(|c| c.matches(&item_lower))
                .map(|c| c.name.as_str())
                .collect();
            (!hits.is_empty()).then_some((item, hits))
        })
        .collect();

    let mut score = 0;
    let mut matched: Vec<CategoryMatch> = Vec::new();

    for category in rubric.by_priority() {
        if matched.iter().any(|m| m.category == category.name) {
            continue;
        }
        let first_hit = item_matches
            .iter()
            .find(|(_, hits)| hits.contains(&category.name.as_str()));
        if let Some((item, _)) = first_hit {
            score += category.weight;
            matched.push(CategoryMatch {
                category: category.name.clone(),
                evidence: (*item).to_string(),
            });
        }
    }

    ScoreResult {
        percentage: percentage_of(score, max_score),
        matched,
        score,
        max_score,
    }
}

fn percentage_of(score: u32, max_score: u32) -> f64 {
    if max_score == 0 {
        return 0.0;
    }
    let pct = (score as f64 / max_score as f64 * 100.0).min(100.0);
    (pct * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rubric::Category;

    fn builtin() -> Rubric {
        Rubric::builtin()
    }

    #[test]
    fn test_reference_items_score_37() {
        let result = calculate_performativeness_score(
            &builtin(),
            &["bell hooks", "matcha latte", "tote bag"],
        );
        let mut names = result.matched_names();
        names.sort_unstable();
        assert_eq!(names, vec!["feminist_literature", "matcha_latte", "tote_bag"]);
        assert_eq!(result.score, 37);
        assert_eq!(result.max_score, 104);
        // 37 / 104 = 35.576...
        assert_eq!(result.percentage, 35.6);
    }

    #[test]
    fn test_empty_items_score_zero() {
        let result = calculate_performativeness_score::<&str>(&builtin(), &[]);
        assert_eq!(result.score, 0);
        assert_eq!(result.percentage, 0.0);
        assert!(result.matched.is_empty());
        assert_eq!(result.max_score, 104);
    }

    #[test]
    fn test_category_credited_once() {
        let result = calculate_performativeness_score(
            &builtin(),
            &["iced matcha", "matcha latte", "green tea latte in a glass"],
        );
        assert_eq!(result.matched_names(), vec!["matcha_latte"]);
        assert_eq!(result.score, 10);
    }

    #[test]
    fn test_one_item_can_credit_several_categories() {
        let result =
            calculate_performativeness_score(&builtin(), &["baggy jeans that look vintage"]);
        assert!(result.is_matched("baggy_jeans"));
        assert!(result.is_matched("vintage_clothing"));
        assert_eq!(result.score, 18);
    }

    #[test]
    fn test_evidence_is_first_matching_item() {
        let result = calculate_performativeness_score(
            &builtin(),
            &["a canvas bag", "a tote bag with a pin"],
        );
        assert_eq!(result.matched[0].evidence, "a canvas bag");
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let result = calculate_performativeness_score(&builtin(), &["BELL HOOKS paperback"]);
        assert!(result.is_matched("feminist_literature"));
    }

    #[test]
    fn test_claim_order_follows_weight() {
        let result = calculate_performativeness_score(
            &builtin(),
            &["succulents", "a tote bag", "bell hooks"],
        );
        assert_eq!(
            result.matched_names(),
            vec!["feminist_literature", "tote_bag", "plant_parent"]
        );
    }

    #[test]
    fn test_equal_weights_claim_in_rubric_order() {
        // matcha_latte and baggy_jeans both weigh 10; matcha comes first in the table.
        let result = calculate_performativeness_score(
            &builtin(),
            &["wide leg jeans", "an iced matcha"],
        );
        assert_eq!(result.matched_names(), vec!["matcha_latte", "baggy_jeans"]);
        assert_eq!(result.matched[0].evidence, "an iced matcha");
        assert_eq!(result.score, 20);
    }

    #[test]
    fn test_everything_matched_is_100() {
        let rubric = builtin();
        let items: Vec<String> = rubric
            .categories()
            .iter()
            .map(|c| c.keywords[0].clone())
            .collect();
        let result = calculate_performativeness_score(&rubric, &items);
        assert_eq!(result.score, result.max_score);
        assert_eq!(result.percentage, 100.0);
    }

    #[test]
    fn test_score_bounded_for_noisy_input() {
        let rubric = builtin();
        let items: Vec<String> = (0..50)
            .map(|i| format!("item {i}: vintage tote bag, matcha, books, cafe, polaroid"))
            .collect();
        let result = calculate_performativeness_score(&rubric, &items);
        assert!(result.score <= result.max_score);
        assert!((0.0..=100.0).contains(&result.percentage));
    }

    #[test]
    fn test_unrelated_items_match_nothing() {
        let result =
            calculate_performativeness_score(&builtin(), &["a grey hoodie", "sneakers", "a dog"]);
        assert!(result.matched.is_empty());
        assert_eq!(result.percentage, 0.0);
    }

    #[test]
    fn test_custom_rubric_is_used() {
        let rubric = Rubric::new(vec![Category {
            name: "mustache".to_string(),
            keywords: vec!["mustache".to_string()],
            weight: 4,
            suggestion: None,
        }])
        .unwrap();
        let result = calculate_performativeness_score(&rubric, &["a handlebar mustache"]);
        assert_eq!(result.score, 4);
        assert_eq!(result.percentage, 100.0);
    }
}
