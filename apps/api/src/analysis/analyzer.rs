//! Analysis pipeline: model call → reply parsing → scoring → suggestions.
//!
//! The model is reached only through `VisionModel`; everything after the reply
//! text is pure and lives in `build_report`.

use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::analysis::parser::{char_len, split_model_reply};
use crate::analysis::prompts::{build_analysis_prompt, FOLLOW_UP_PROMPT};
use crate::analysis::roast::pick_roast;
use crate::errors::AppError;
use crate::llm_client::{ImagePayload, VisionModel};
use crate::rubric::Rubric;
use crate::scoring::calculate_performativeness_score;
use crate::scoring::suggestions::{generate_improvement_suggestions, merge_model_suggestions};

/// Replies shorter than this (trimmed) trigger one follow-up request.
const MIN_REPLY_LEN: usize = 100;

#[derive(Debug, Clone, Copy)]
pub struct AnalysisOptions {
    pub roast_enabled: bool,
}

/// One matched category as shown to the user.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryDetail {
    pub name: String,
    pub items: Vec<String>,
    pub weight: u32,
    /// The detected item that earned this category.
    pub evidence: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub analysis_id: Uuid,
    pub analyzed_at: DateTime<Utc>,
    pub percentage: f64,
    pub detected_items: Vec<String>,
    pub detected_categories: Vec<String>,
    pub category_details: Vec<CategoryDetail>,
    pub score: u32,
    pub max_score: u32,
    pub improvement_suggestions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roast: Option<String>,
}

pub async fn run_analysis(
    model: &dyn VisionModel,
    rubric: &Rubric,
    image: &ImagePayload,
    options: AnalysisOptions,
) -> Result<AnalysisReport, AppError> {
    let prompt = build_analysis_prompt(rubric);

    let start = Instant::now();
    let mut reply = model.describe(&prompt, image).await?;
    info!(
        "Model replied in {}ms ({} chars)",
        start.elapsed().as_millis(),
        char_len(reply.trim())
    );

    if char_len(reply.trim()) < MIN_REPLY_LEN {
        debug!("Reply too short, asking the model for more detail");
        match model.describe(FOLLOW_UP_PROMPT, image).await {
            Ok(detailed) if char_len(detailed.trim()) > char_len(reply.trim()) => {
                reply = detailed
            }
            Ok(_) => debug!("Follow-up reply was not longer, keeping the first"),
            Err(e) => warn!("Follow-up request failed, keeping the first reply: {e}"),
        }
    }

    Ok(build_report(
        rubric,
        &reply,
        Uuid::new_v4(),
        Utc::now(),
        options,
    ))
}

/// Turns reply text into the scored report.
pub fn build_report(
    rubric: &Rubric,
    reply: &str,
    analysis_id: Uuid,
    analyzed_at: DateTime<Utc>,
    options: AnalysisOptions,
) -> AnalysisReport {
    let parsed = split_model_reply(reply);
    let result = calculate_performativeness_score(rubric, &parsed.detected_items);

    match parsed.detected_items.len() {
        n if n < 2 => info!("Only {n} items detected, image may have limited performative elements"),
        n if n >= 5 => info!("Comprehensive scan, {n} items detected"),
        _ => {}
    }
    info!(
        "Scored {}/{} ({}%) across {} categories",
        result.score,
        result.max_score,
        result.percentage,
        result.matched.len()
    );

    let suggestions = merge_model_suggestions(
        generate_improvement_suggestions(rubric, &result),
        &parsed.suggestions,
    );

    let category_details = result
        .matched
        .iter()
        .filter_map(|m| {
            rubric.get(&m.category).map(|c| CategoryDetail {
                name: c.display_name(),
                items: c.keywords.clone(),
                weight: c.weight,
                evidence: m.evidence.clone(),
            })
        })
        .collect();

    let roast = if options.roast_enabled {
        pick_roast(result.percentage, analysis_id.as_u128()).map(str::to_string)
    } else {
        None
    };

    AnalysisReport {
        analysis_id,
        analyzed_at,
        percentage: result.percentage,
        detected_categories: result
            .matched_names()
            .into_iter()
            .map(str::to_string)
            .collect(),
        detected_items: parsed.detected_items,
        category_details,
        score: result.score,
        max_score: result.max_score,
        improvement_suggestions: suggestions,
        roast,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::LlmError;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Replays canned replies in order.
    struct ScriptedModel {
        replies: Mutex<VecDeque<Result<String, LlmError>>>,
        prompts: Mutex<Vec<String>>,
    }

    impl ScriptedModel {
        fn new(replies: Vec<Result<String, LlmError>>) -> Self {
            Self {
                replies: Mutex::new(replies.into()),
                prompts: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> usize {
            self.prompts.lock().unwrap().len()
        }
    }

    #[async_trait::async_trait]
    impl VisionModel for ScriptedModel {
        async fn describe(&self, prompt: &str, _image: &ImagePayload) -> Result<String, LlmError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(Err(LlmError::EmptyContent))
        }
    }

    fn image() -> ImagePayload {
        ImagePayload {
            mime_type: "image/png".to_string(),
            base64_data: "aGVsbG8=".to_string(),
        }
    }

    const LONG_REPLY: &str = "SECTION 1 - DETECTED ITEMS:
- A canvas tote bag slung over one shoulder
- A paperback of All About Love by bell hooks
- An iced matcha latte on the table
SECTION 2 - IMPROVEMENT SUGGESTIONS:
- Maybe add some film photos taped to the wall";

    fn no_roast() -> AnalysisOptions {
        AnalysisOptions {
            roast_enabled: false,
        }
    }

    #[test]
    fn test_build_report_scores_parsed_items() {
        let rubric = Rubric::builtin();
        let report = build_report(&rubric, LONG_REPLY, Uuid::new_v4(), Utc::now(), no_roast());

        assert_eq!(report.detected_items.len(), 3);
        assert_eq!(
            report.detected_categories,
            vec!["feminist_literature", "tote_bag", "matcha_latte"]
        );
        assert_eq!(report.score, 37);
        assert_eq!(report.max_score, 104);
        assert_eq!(report.percentage, 35.6);
        assert!(report.roast.is_none());

        let tote = &report.category_details[1];
        assert_eq!(tote.name, "Tote Bag");
        assert_eq!(tote.weight, 12);
        assert_eq!(tote.evidence, "A canvas tote bag slung over one shoulder");
    }

    #[test]
    fn test_build_report_appends_model_suggestions_after_canned() {
        let rubric = Rubric::builtin();
        let report = build_report(&rubric, LONG_REPLY, Uuid::new_v4(), Utc::now(), no_roast());
        assert_eq!(report.improvement_suggestions.len(), 7);
        assert_eq!(
            report.improvement_suggestions.last().unwrap(),
            "Maybe add some film photos taped to the wall"
        );
    }

    #[test]
    fn test_low_score_gets_roast_when_enabled() {
        let rubric = Rubric::builtin();
        let report = build_report(
            &rubric,
            "- a grey hoodie\n- running shoes",
            Uuid::from_u128(3),
            Utc::now(),
            AnalysisOptions {
                roast_enabled: true,
            },
        );
        assert_eq!(report.percentage, 0.0);
        assert!(report.roast.is_some());

        let silent = build_report(
            &rubric,
            "- a grey hoodie\n- running shoes",
            Uuid::from_u128(3),
            Utc::now(),
            no_roast(),
        );
        assert!(silent.roast.is_none());
    }

    #[test]
    fn test_report_serializes_without_empty_roast() {
        let rubric = Rubric::builtin();
        let report = build_report(&rubric, LONG_REPLY, Uuid::new_v4(), Utc::now(), no_roast());
        let value = serde_json::to_value(&report).unwrap();
        assert!(value.get("roast").is_none());
        assert_eq!(value["category_details"][0]["name"], "Feminist Literature");
    }

    #[tokio::test]
    async fn test_long_reply_makes_single_call() {
        let model = ScriptedModel::new(vec![Ok(LONG_REPLY.to_string())]);
        let report = run_analysis(&model, &Rubric::builtin(), &image(), no_roast())
            .await
            .unwrap();
        assert_eq!(model.calls(), 1);
        assert_eq!(report.score, 37);
    }

    #[tokio::test]
    async fn test_short_reply_uses_longer_follow_up() {
        let model = ScriptedModel::new(vec![
            Ok("- matcha".to_string()),
            Ok(LONG_REPLY.to_string()),
        ]);
        let report = run_analysis(&model, &Rubric::builtin(), &image(), no_roast())
            .await
            .unwrap();
        assert_eq!(model.calls(), 2);
        assert_eq!(model.prompts.lock().unwrap()[1], FOLLOW_UP_PROMPT);
        assert_eq!(report.score, 37);
    }

    #[tokio::test]
    async fn test_short_bulleted_reply_counts_chars_not_bytes() {
        // 95 chars, 103 bytes: each bullet is three bytes in UTF-8.
        let short = "• iced matcha latte in a glass\n• canvas tote bag on a chair\n• a copy of All About Love\n• a fern";
        assert!(short.len() >= MIN_REPLY_LEN);
        assert!(char_len(short) < MIN_REPLY_LEN);

        let model = ScriptedModel::new(vec![Ok(short.to_string()), Ok(LONG_REPLY.to_string())]);
        let report = run_analysis(&model, &Rubric::builtin(), &image(), no_roast())
            .await
            .unwrap();
        assert_eq!(model.calls(), 2);
        assert_eq!(report.score, 37);
    }

    #[tokio::test]
    async fn test_follow_up_failure_keeps_first_reply() {
        let model = ScriptedModel::new(vec![
            Ok("- an iced matcha latte".to_string()),
            Err(LlmError::Api {
                status: 503,
                message: "overloaded".to_string(),
            }),
        ]);
        let report = run_analysis(&model, &Rubric::builtin(), &image(), no_roast())
            .await
            .unwrap();
        assert_eq!(model.calls(), 2);
        assert_eq!(report.detected_categories, vec!["matcha_latte"]);
    }

    #[tokio::test]
    async fn test_first_call_failure_is_returned() {
        let model = ScriptedModel::new(vec![Err(LlmError::Api {
            status: 429,
            message: "Resource has been exhausted (e.g. check quota).".to_string(),
        })]);
        let err = run_analysis(&model, &Rubric::builtin(), &image(), no_roast())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::RateLimited));
        assert_eq!(model.calls(), 1);
    }
}
