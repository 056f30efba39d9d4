use serde_json::{Map, Value};

use super::{DecodeError, Interpret, Shape};
use crate::models::results::{
    BoardList, JobBoard, QuestionSet, SkillDescriptions, SkillList, SkillProfile, SkillQuestions,
};

fn invalid(raw: &str, reason: impl Into<String>) -> DecodeError {
    DecodeError::Invalid {
        raw: raw.to_string(),
        reason: reason.into(),
    }
}

fn expect_object(value: Value, raw: &str) -> Result<Map<String, Value>, DecodeError> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(invalid(raw, format!("expected a JSON object, got {}", kind(&other)))),
    }
}

fn expect_array(value: Value, what: &str, raw: &str) -> Result<Vec<Value>, DecodeError> {
    match value {
        Value::Array(items) => Ok(items),
        other => Err(invalid(
            raw,
            format!("{what} must be an array, got {}", kind(&other)),
        )),
    }
}

fn string_array(value: Value, what: &str, raw: &str) -> Result<Vec<String>, DecodeError> {
    expect_array(value, what, raw)?
        .into_iter()
        .enumerate()
        .map(|(i, item)| match item {
            Value::String(s) => Ok(s),
            other => Err(invalid(
                raw,
                format!("{what}[{i}] must be a string, got {}", kind(&other)),
            )),
        })
        .collect()
}

fn required(
    map: &mut Map<String, Value>,
    key: &'static str,
    raw: &str,
) -> Result<Value, DecodeError> {
    map.remove(key).ok_or_else(|| DecodeError::MissingKey {
        raw: raw.to_string(),
        key,
    })
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl Interpret for SkillList {
    const SHAPE: Shape = Shape::Array;

    fn from_json(value: Value, raw: &str) -> Result<Self, DecodeError> {
        string_array(value, "skills", raw).map(SkillList)
    }
}

impl Interpret for SkillProfile {
    const SHAPE: Shape = Shape::Object;

    fn from_json(value: Value, raw: &str) -> Result<Self, DecodeError> {
        let mut map = expect_object(value, raw)?;
        let skills = string_array(required(&mut map, "skills", raw)?, "skills", raw)?;
        let ratings = expect_array(required(&mut map, "ratings", raw)?, "ratings", raw)?
            .into_iter()
            .enumerate()
            .map(|(i, item)| {
                item.as_f64().ok_or_else(|| {
                    invalid(raw, format!("ratings[{i}] must be a number, got {}", kind(&item)))
                })
            })
            .collect::<Result<Vec<f64>, _>>()?;

        if skills.is_empty() {
            return Err(invalid(raw, "profile contains no skills"));
        }
        if skills.len() != ratings.len() {
            return Err(invalid(
                raw,
                format!(
                    "{} skills but {} ratings; the lists must be the same length",
                    skills.len(),
                    ratings.len()
                ),
            ));
        }

        Ok(SkillProfile { skills, ratings })
    }
}

impl Interpret for SkillDescriptions {
    const SHAPE: Shape = Shape::Object;

    fn from_json(value: Value, raw: &str) -> Result<Self, DecodeError> {
        expect_object(value, raw)?
            .into_iter()
            .map(|(skill, description)| match description {
                Value::String(text) => Ok((skill, text)),
                other => Err(invalid(
                    raw,
                    format!("description for '{skill}' must be a string, got {}", kind(&other)),
                )),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(SkillDescriptions)
    }
}

impl Interpret for BoardList {
    const SHAPE: Shape = Shape::Array;

    fn from_json(value: Value, raw: &str) -> Result<Self, DecodeError> {
        expect_array(value, "job boards", raw)?
            .into_iter()
            .map(|item| {
                let mut board = expect_object(item, raw)?;
                let name = required(&mut board, "name", raw)?;
                let why = required(&mut board, "why", raw)?;
                match (name, why) {
                    (Value::String(name), Value::String(why)) => Ok(JobBoard { name, why }),
                    _ => Err(invalid(raw, "job board 'name' and 'why' must be strings")),
                }
            })
            .collect::<Result<Vec<_>, _>>()
            .map(BoardList)
    }
}

impl Interpret for QuestionSet {
    const SHAPE: Shape = Shape::Object;

    /// `skills` and `general` may each be absent, but not both.
    fn from_json(value: Value, raw: &str) -> Result<Self, DecodeError> {
        let mut map = expect_object(value, raw)?;
        let skills = map.remove("skills");
        let general = map.remove("general");

        if skills.is_none() && general.is_none() {
            return Err(DecodeError::MissingKey {
                raw: raw.to_string(),
                key: "skills",
            });
        }

        let by_skill = match skills {
            Some(value) => expect_object(value, raw)?
                .into_iter()
                .map(|(skill, questions)| {
                    let questions = string_array(questions, &format!("questions for '{skill}'"), raw)?;
                    Ok(SkillQuestions { skill, questions })
                })
                .collect::<Result<Vec<_>, DecodeError>>()?,
            None => Vec::new(),
        };

        let general = general
            .map(|value| string_array(value, "general", raw))
            .transpose()?;

        Ok(QuestionSet { by_skill, general })
    }
}

#[cfg(test)]
mod tests {
    use crate::interpreter::{interpret, DecodeError};
    use crate::models::results::{
        BoardList, QuestionSet, SkillDescriptions, SkillList, SkillProfile,
    };

    #[test]
    fn test_skill_list_from_chatty_reply() {
        let skills: SkillList =
            interpret(r#"Sure! ["A", "B", "C"] Hope that helps."#).unwrap();
        assert_eq!(skills.as_slice(), ["A", "B", "C"]);
    }

    #[test]
    fn test_skill_list_rejects_non_string_items() {
        let err = interpret::<SkillList>(r#"["Rust", 42]"#).unwrap_err();
        assert!(matches!(err, DecodeError::Invalid { .. }));
    }

    #[test]
    fn test_profile_from_pure_json_without_prose() {
        let profile: SkillProfile = interpret(r#"{"skills":["A"],"ratings":[4]}"#).unwrap();
        assert_eq!(profile.skills, vec!["A".to_string()]);
        assert_eq!(profile.ratings, vec![4.0]);
    }

    #[test]
    fn test_profile_length_mismatch_fails_whole_decode() {
        let err = interpret::<SkillProfile>(r#"{"skills":["X","Y"],"ratings":[5]}"#).unwrap_err();
        assert!(matches!(err, DecodeError::Invalid { .. }));
        assert_eq!(err.raw_text(), r#"{"skills":["X","Y"],"ratings":[5]}"#);
    }

    #[test]
    fn test_profile_missing_ratings_is_missing_key() {
        let err = interpret::<SkillProfile>(r#"Here you go: {"skills":["X"]}"#).unwrap_err();
        assert!(matches!(err, DecodeError::MissingKey { key: "ratings", .. }));
    }

    #[test]
    fn test_profile_keeps_out_of_range_ratings_verbatim() {
        let profile: SkillProfile =
            interpret(r#"{"skills":["A","B"],"ratings":[12, 0.5]}"#).unwrap();
        assert_eq!(profile.ratings, vec![12.0, 0.5]);
    }

    #[test]
    fn test_profile_rejects_string_ratings() {
        let err = interpret::<SkillProfile>(r#"{"skills":["A"],"ratings":["high"]}"#).unwrap_err();
        assert!(matches!(err, DecodeError::Invalid { .. }));
    }

    #[test]
    fn test_descriptions_decode_from_object() {
        let desc: SkillDescriptions = interpret(
            "```json\n{\"PLC\": \"Writes ladder logic unaided\", \"CAN\": \"Debugs bus traffic\"}\n```",
        )
        .unwrap();
        assert_eq!(desc.get("PLC"), Some("Writes ladder logic unaided"));
        assert_eq!(desc.get("Missing"), None);
    }

    #[test]
    fn test_descriptions_keep_model_order_when_serialized() {
        let desc: SkillDescriptions = interpret(
            r#"{"Zephyr RTOS": "z", "CAN": "c", "Motor Control": "m", "ADC": "a"}"#,
        )
        .unwrap();
        assert_eq!(
            serde_json::to_string(&desc).unwrap(),
            r#"{"Zephyr RTOS":"z","CAN":"c","Motor Control":"m","ADC":"a"}"#
        );
    }

    #[test]
    fn test_boards_require_name_and_why() {
        let boards: BoardList = interpret(
            r#"[{"name": "IEEE Job Site", "why": "Engineering audience"}, {"name": "LinkedIn", "why": "Reach"}]"#,
        )
        .unwrap();
        assert_eq!(boards.0.len(), 2);
        assert_eq!(boards.0[0].name, "IEEE Job Site");

        let err = interpret::<BoardList>(r#"[{"name": "Indeed"}]"#).unwrap_err();
        assert!(matches!(err, DecodeError::MissingKey { key: "why", .. }));
    }

    #[test]
    fn test_question_set_preserves_skill_order() {
        let set: QuestionSet = interpret(
            r#"Questions: {"skills": {"Zeta": ["Q1"], "Alpha": ["Q2", "Q3"]}, "general": ["G1"]}"#,
        )
        .unwrap();
        let names: Vec<&str> = set.by_skill.iter().map(|s| s.skill.as_str()).collect();
        assert_eq!(names, vec!["Zeta", "Alpha"]);
        assert_eq!(set.by_skill[1].questions.len(), 2);
        assert_eq!(set.general, Some(vec!["G1".to_string()]));
    }

    #[test]
    fn test_question_set_tolerates_missing_general() {
        let set: QuestionSet = interpret(r#"{"skills": {"Rust": ["Explain ownership"]}}"#).unwrap();
        assert!(set.general.is_none());
        assert_eq!(set.by_skill.len(), 1);
    }

    #[test]
    fn test_question_set_requires_some_questions() {
        let err = interpret::<QuestionSet>(r#"{"notes": "none"}"#).unwrap_err();
        assert!(matches!(err, DecodeError::MissingKey { key: "skills", .. }));
    }
}
