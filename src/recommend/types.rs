use crate::{Error, Result};
use serde::Serialize;
use serde_json::Value;

/// Inputs for one recommendation fetch. All three are embedded verbatim into
/// the prompt; no normalization happens beyond the constructor checks.
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationRequest {
    pub goal: String,
    pub experience_level: String,
    pub weekly_frequency: u32,
}

impl RecommendationRequest {
    pub fn new(
        goal: impl Into<String>,
        experience_level: impl Into<String>,
        weekly_frequency: u32,
    ) -> Result<Self> {
        let goal = goal.into();
        let experience_level = experience_level.into();

        if goal.trim().is_empty() {
            return Err(Error::invalid_request("goal must not be empty"));
        }
        if experience_level.trim().is_empty() {
            return Err(Error::invalid_request("experience level must not be empty"));
        }
        if weekly_frequency == 0 {
            return Err(Error::invalid_request(
                "weekly frequency must be at least 1",
            ));
        }

        Ok(Self {
            goal,
            experience_level,
            weekly_frequency,
        })
    }
}

/// What the model sent back, as far as it matched the requested shape.
///
/// The model is only informally asked for the three keys, so each field is
/// independently optional: missing keys and keys carrying an unexpected type
/// both surface as `None`. `raw` keeps the full parsed document so callers
/// can still reach anything the typed view dropped.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Recommendation {
    pub routine: Option<Vec<Value>>,
    #[serde(rename = "dietPlan")]
    pub diet_plan: Option<Vec<Value>>,
    pub caution: Option<String>,
    #[serde(skip)]
    pub raw: Value,
}

impl Recommendation {
    pub fn from_value(value: Value) -> Self {
        let routine = value.get("routine").and_then(Value::as_array).cloned();
        let diet_plan = value.get("dietPlan").and_then(Value::as_array).cloned();
        let caution = value
            .get("caution")
            .and_then(Value::as_str)
            .map(str::to_string);

        Self {
            routine,
            diet_plan,
            caution,
            raw: value,
        }
    }
}
