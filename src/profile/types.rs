use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Profile record as the editing screen persists it. Fields are free text
/// (the form does no numeric validation) and every one may be absent in
/// previously stored payloads, so each defaults to empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub age: String,
    #[serde(default)]
    pub height: String,
    #[serde(default)]
    pub weight: String,
    #[serde(default)]
    pub goal: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutRecord {
    pub date: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
}

impl WorkoutRecord {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            date: Utc::now().format("%Y-%m-%d").to_string(),
            title: title.into(),
            description: description.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_profile_roundtrip() {
        let profile = UserProfile {
            name: "Jamie".to_string(),
            age: "29".to_string(),
            height: "175".to_string(),
            weight: "70".to_string(),
            goal: "build muscle".to_string(),
        };

        let raw = serde_json::to_string(&profile).unwrap();
        let restored: UserProfile = serde_json::from_str(&raw).unwrap();
        assert_eq!(restored, profile);
    }

    #[test]
    fn test_profile_tolerates_missing_fields() {
        let restored: UserProfile = serde_json::from_str(r#"{"name":"Jamie"}"#).unwrap();

        assert_eq!(restored.name, "Jamie");
        assert_eq!(restored.age, "");
        assert_eq!(restored.goal, "");
    }

    #[test]
    fn test_workout_record_gets_a_date() {
        let record = WorkoutRecord::new("Leg day", "Squats and lunges");

        assert_eq!(record.title, "Leg day");
        assert_eq!(record.date.len(), 10); // YYYY-MM-DD
    }
}
