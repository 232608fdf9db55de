// Prompt text for the vision model. The category list is rendered from the
// active rubric so the model and the scorer look for the same things.

use crate::rubric::Rubric;

/// Instructions that follow the category list. The two section headers are
/// what `parser::split_model_reply` keys on.
const ANALYSIS_INSTRUCTIONS: &str = r#"What to do:
- Look through the image and spot any items that match the categories above
- Check clothing, books, beverages, bags, accessories, the environment, and other objects
- For books: if you see books that seem feminist or written by feminist authors (even if you can't read the exact title), mention them. Look for books by women authors, books about feminism, gender, or social justice topics
- Describe what you see in a natural, casual way
- Don't worry about exact title matches - if a book looks like it could be feminist literature, mention it

Format your response in two sections:

SECTION 1 - DETECTED ITEMS:
List the items you found that match the categories. One item per line with a dash. Be specific but flexible - if you see a book that looks like feminist literature (even if you can't see the exact title), mention it. Describe what you observe naturally.

SECTION 2 - IMPROVEMENT SUGGESTIONS:
Give some relaxed, friendly suggestions for items that could boost the performativeness score. Keep it casual and light - like you're giving friendly advice to a friend. Focus on high-value items from the categories that seem to be missing, but don't be too prescriptive. Use a casual, conversational tone like "maybe add..." or "could throw in..." or "might help if you..."

That's it! Just look at the image and share what you find. Be flexible with book identification - if it looks like it could be feminist literature, include it."#;

/// Sent once when the first reply is too thin to score.
pub const FOLLOW_UP_PROMPT: &str = r#"Could you take another look at this image? Try to spot:
- Clothing items (shirt, pants, jacket, shoes)
- Books or reading materials
- Beverages or drinks
- Bags or accessories
- The environment or setting
- Any decorative items, plants, or other objects

Just list what you see that might match the performative male culture categories."#;

pub fn build_analysis_prompt(rubric: &Rubric) -> String {
    let characteristics: Vec<String> = rubric
        .categories()
        .iter()
        .map(|c| format!("- {}: {}", c.display_name(), c.keywords.join(", ")))
        .collect();

    format!(
        "Take a look at this image and identify items related to performative male culture. \
         Here's what to look for:\n\nCharacteristics to check for:\n{}\n\n{}",
        characteristics.join("\n"),
        ANALYSIS_INSTRUCTIONS
    )
}
