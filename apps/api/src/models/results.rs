//! Structured results decoded from model output, one type per use case.
//!
//! Every value here has passed the interpreter's structural checks: a result
//! either exists fully populated or was rejected at decode time.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Ordered skill names (the prompt asks for 8–12; not enforced).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SkillList(pub Vec<String>);

impl SkillList {
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Parallel skill/rating sequences: `skills[i] ↔ ratings[i]`.
///
/// Ratings are model-supplied and kept verbatim, even outside [1, 10].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillProfile {
    pub skills: Vec<String>,
    pub ratings: Vec<f64>,
}

impl SkillProfile {
    pub fn pairs(&self) -> impl Iterator<Item = (&str, f64)> {
        self.skills
            .iter()
            .map(String::as_str)
            .zip(self.ratings.iter().copied())
    }
}

/// Skill name → what the requested level means for that skill, in the
/// order the model listed them. Serializes as a JSON object.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SkillDescriptions(pub Vec<(String, String)>);

impl SkillDescriptions {
    pub fn get(&self, skill: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(name, _)| name == skill)
            .map(|(_, description)| description.as_str())
    }
}

impl Serialize for SkillDescriptions {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (skill, description) in &self.0 {
            map.serialize_entry(skill, description)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobPosting {
    pub markdown_body: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobBoard {
    pub name: String,
    pub why: String,
}

/// Recommended boards in the model's ranking order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct BoardList(pub Vec<JobBoard>);

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillQuestions {
    pub skill: String,
    pub questions: Vec<String>,
}

/// Interview questions grouped per skill, plus optional general questions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionSet {
    pub by_skill: Vec<SkillQuestions>,
    pub general: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DevelopmentPlan {
    pub markdown_body: String,
}
