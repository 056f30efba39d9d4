use std::fmt;

use serde::{Deserialize, Serialize};

/// Experience level of the role being analysed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Level {
    Junior,
    Mid,
    Senior,
}

impl Level {
    /// Rating band the profile prompt asks the model to target.
    /// Advisory only: ratings outside it are logged, never rejected.
    pub fn expected_band(self) -> (f64, f64) {
        match self {
            Level::Junior => (3.0, 5.0),
            Level::Mid => (5.0, 8.0),
            Level::Senior => (8.0, 10.0),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Level::Junior => "Junior",
            Level::Mid => "Mid",
            Level::Senior => "Senior",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Role + level pair shared by every use case except the skill identifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillQuery {
    pub role: String,
    pub level: Level,
}

/// Interview question categories offered to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuestionType {
    Technical,
    Behavioral,
    #[serde(rename = "Problem-solving")]
    ProblemSolving,
    #[serde(rename = "Team Collaboration")]
    TeamCollaboration,
}

impl QuestionType {
    pub fn defaults() -> Vec<QuestionType> {
        vec![QuestionType::Technical, QuestionType::ProblemSolving]
    }

    pub fn label(self) -> &'static str {
        match self {
            QuestionType::Technical => "Technical",
            QuestionType::Behavioral => "Behavioral",
            QuestionType::ProblemSolving => "Problem-solving",
            QuestionType::TeamCollaboration => "Team Collaboration",
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Per-use-case inputs
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct IdentifySkillsRequest {
    /// Job role or free-text description.
    pub role: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JobPostingRequest {
    #[serde(flatten)]
    pub query: SkillQuery,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InterviewRequest {
    #[serde(flatten)]
    pub query: SkillQuery,
    #[serde(default = "QuestionType::defaults")]
    pub question_types: Vec<QuestionType>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DevelopmentPlanRequest {
    #[serde(flatten)]
    pub query: SkillQuery,
    #[serde(default)]
    pub employee_name: Option<String>,
    pub feedback: String,
}

/// Treats blank optional inputs as absent.
pub fn present(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_serde_uses_display_names() {
        let level: Level = serde_json::from_str(r#""Senior""#).unwrap();
        assert_eq!(level, Level::Senior);
        assert_eq!(serde_json::to_string(&Level::Mid).unwrap(), r#""Mid""#);
    }

    #[test]
    fn test_level_bands_match_prompt_guidance() {
        assert_eq!(Level::Junior.expected_band(), (3.0, 5.0));
        assert_eq!(Level::Mid.expected_band(), (5.0, 8.0));
        assert_eq!(Level::Senior.expected_band(), (8.0, 10.0));
    }

    #[test]
    fn test_question_type_labels_round_trip_through_serde() {
        let types: Vec<QuestionType> =
            serde_json::from_str(r#"["Problem-solving", "Team Collaboration"]"#).unwrap();
        assert_eq!(
            types,
            vec![QuestionType::ProblemSolving, QuestionType::TeamCollaboration]
        );
    }

    #[test]
    fn test_interview_request_defaults_question_types() {
        let request: InterviewRequest =
            serde_json::from_str(r#"{"role": "Data Engineer", "level": "Mid"}"#).unwrap();
        assert_eq!(request.query.role, "Data Engineer");
        assert_eq!(request.question_types, QuestionType::defaults());
    }

    #[test]
    fn test_development_plan_request_requires_feedback() {
        let result: Result<DevelopmentPlanRequest, _> =
            serde_json::from_str(r#"{"role": "Analyst", "level": "Junior"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_present_filters_blank_strings() {
        assert_eq!(present(&Some("  Acme ".to_string())), Some("Acme"));
        assert_eq!(present(&Some("   ".to_string())), None);
        assert_eq!(present(&None), None);
    }
}
