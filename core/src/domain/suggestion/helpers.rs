use crate::domain::{
    common::entities::app_errors::CoreError,
    suggestion::{SUGGESTION_COUNT, entities::GeneratedRecipe},
};

/// Parses the model's human-readable time string by stripping every
/// non-digit character. "45 mins" -> 45. Unit words are NOT converted,
/// so "1 hour" parses as 1 minute, matching the upstream contract; see
/// DESIGN.md before changing this.
pub fn parse_minutes(time: &str) -> u32 {
    let digits: String = time.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(0)
}

/// Builds the generation prompt: the user's free-text query, the fixed
/// output instructions, and the exclusion set as a negative constraint.
pub fn build_prompt(query: &str, excluded: &[String]) -> String {
    let mut prompt = format!(
        "Suggest exactly {SUGGESTION_COUNT} recipes matching this request: {query}. \
         For each recipe provide a title, a cooking time such as \"45 mins\", \
         an ordered ingredient list, ordered step-by-step instructions, and a \
         short descriptive photo search phrase as image_query. \
         Respond only with JSON matching the provided schema."
    );

    if !excluded.is_empty() {
        prompt.push_str(&format!(
            " Do not suggest any of the following recipes: {}.",
            excluded.join(", ")
        ));
    }

    prompt
}

/// Rejects malformed model output: anything other than exactly
/// [`SUGGESTION_COUNT`] entries with non-empty fields.
pub fn validate_batch(recipes: &[GeneratedRecipe]) -> Result<(), CoreError> {
    if recipes.len() != SUGGESTION_COUNT {
        return Err(CoreError::ExternalService(format!(
            "expected {} recipes, model returned {}",
            SUGGESTION_COUNT,
            recipes.len()
        )));
    }

    for recipe in recipes {
        if recipe.title.trim().is_empty()
            || recipe.time.trim().is_empty()
            || recipe.ingredients.is_empty()
            || recipe.instructions.is_empty()
        {
            return Err(CoreError::ExternalService(format!(
                "incomplete recipe in model response: {:?}",
                recipe.title
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(title: &str) -> GeneratedRecipe {
        GeneratedRecipe {
            title: title.to_string(),
            time: "45 mins".to_string(),
            ingredients: vec!["oats".to_string()],
            instructions: vec!["cook".to_string()],
            image_query: format!("{title} on a plate"),
        }
    }

    #[test]
    fn parse_minutes_strips_non_digits() {
        assert_eq!(parse_minutes("45 mins"), 45);
        assert_eq!(parse_minutes("about 30 minutes"), 30);
        assert_eq!(parse_minutes("no digits"), 0);
    }

    #[test]
    fn parse_minutes_keeps_the_hour_defect() {
        // Upstream contract: "1 hour" is 1, not 60. Flagged in DESIGN.md.
        assert_eq!(parse_minutes("1 hour"), 1);
    }

    #[test]
    fn prompt_appends_exclusions_as_negative_constraint() {
        let excluded = vec!["Overnight Oats".to_string(), "Chia Pudding".to_string()];
        let prompt = build_prompt("healthy vegan breakfast", &excluded);

        assert!(prompt.contains("healthy vegan breakfast"));
        assert!(prompt.contains("Do not suggest any of the following recipes: Overnight Oats, Chia Pudding."));

        let without = build_prompt("healthy vegan breakfast", &[]);
        assert!(!without.contains("Do not suggest"));
    }

    #[test]
    fn validate_batch_requires_exactly_five() {
        let four: Vec<_> = (0..4).map(|i| recipe(&format!("r{i}"))).collect();
        assert!(validate_batch(&four).is_err());

        let six: Vec<_> = (0..6).map(|i| recipe(&format!("r{i}"))).collect();
        assert!(validate_batch(&six).is_err());

        let five: Vec<_> = (0..5).map(|i| recipe(&format!("r{i}"))).collect();
        assert!(validate_batch(&five).is_ok());
    }

    #[test]
    fn validate_batch_rejects_empty_fields() {
        let mut five: Vec<_> = (0..5).map(|i| recipe(&format!("r{i}"))).collect();
        five[2].instructions.clear();
        assert!(validate_batch(&five).is_err());
    }
}
