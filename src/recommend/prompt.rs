use super::types::RecommendationRequest;

pub(crate) const SYSTEM_PROMPT: &str = "You are a fitness expert. Recommend a workout routine, \
diet plan and cautions tailored to the user, as JSON. Split the workout routine by body part.";

/// Builds the user message. The three inputs are embedded verbatim; the
/// trailing example pins the JSON shape the model is asked to produce.
pub(crate) fn build_user_prompt(request: &RecommendationRequest) -> String {
    format!(
        "Training goal: {goal}\n\
         Training experience: {experience}\n\
         Workouts per week: {days}\n\n\
         Based on the information above, recommend a training plan in exactly this JSON format:\n\n\
         {{\n  \"routine\": [],\n  \"dietPlan\": [],\n  \"caution\": \"\"\n}}",
        goal = request.goal,
        experience = request.experience_level,
        days = request.weekly_frequency,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_prompt_embeds_inputs_verbatim() {
        let request =
            RecommendationRequest::new("build muscle & strength", "intermediate", 4).unwrap();
        let prompt = build_user_prompt(&request);

        assert!(prompt.contains("build muscle & strength"));
        assert!(prompt.contains("intermediate"));
        assert!(prompt.contains("Workouts per week: 4"));
    }

    #[test]
    fn test_user_prompt_contains_shape_example() {
        let request = RecommendationRequest::new("lose weight", "beginner", 3).unwrap();
        let prompt = build_user_prompt(&request);

        assert!(prompt.contains("\"routine\": []"));
        assert!(prompt.contains("\"dietPlan\": []"));
        assert!(prompt.contains("\"caution\": \"\""));
    }

    #[test]
    fn test_system_prompt_requests_json() {
        assert!(SYSTEM_PROMPT.contains("fitness expert"));
        assert!(SYSTEM_PROMPT.contains("JSON"));
    }
}
