// Prompt Builder: all use-case prompt templates and the functions that fill them.
// The model is not schema-constrained, so JSON prompts spell out exact keys and nesting.

use crate::llm_client::prompts::{
    ASSESSMENT_EXPERT_SYSTEM, RECRUITMENT_EXPERT_SYSTEM, SKILLS_ANALYST_SYSTEM,
    TECHNICAL_RECRUITER_SYSTEM,
};
use crate::llm_client::Prompt;
use crate::models::query::{Level, QuestionType, SkillQuery};

/// Replace: {role}
pub const IDENTIFY_SKILLS_TEMPLATE: &str = r#"You are a skilled HR professional and job analyst. Based on the job role or description below, identify and list the most important technical and soft skills required for this position.

Job Role/Description: {role}

Please format your response as a JSON array of strings, with each string being a specific skill.
Example format: ["Skill 1", "Skill 2", "Skill 3"]

Provide between 8-12 specific, relevant skills for this role."#;

/// Replace: {role}, {level}, {band_guidance}
pub const SKILL_PROFILE_TEMPLATE: &str = r#"You are an expert in skills assessment for technical roles.
For the role of {role} at {level} level, please provide:
1. A list of 8 key skills required for this role
2. A rating from 1-10 for each skill based on the expected proficiency level ({level})

Return your answer as a JSON object with this exact structure:
{
    "skills": ["skill1", "skill2", ...],
    "ratings": [7, 8, ...]
}

The "skills" and "ratings" arrays must have the same length, ratings[i] belonging to skills[i].
{band_guidance}"#;

/// Replace: {role}, {level}, {skills}
pub const SKILL_DESCRIPTIONS_TEMPLATE: &str = r#"For each of these skills for a {level}-level {role}, provide a brief description of what this level of proficiency means.

Skills: {skills}

Format your response as a JSON object with skill names as keys and descriptions as values.
Use the skill names exactly as listed above.
Example:
{
    "Skill Name": "Description of what {level} level means for this skill",
    ...
}"#;

/// Replace: {role}, {level}, {where}
pub const JOB_POSTING_TEMPLATE: &str = r#"Create a professional job description for a {level}-level {role} position{where}.

Include the following sections:
1. Position title
2. Location and job type
3. About the company (generic if no company name provided)
4. Responsibilities
5. Required skills with proficiency levels
6. Qualifications and experience
7. Application instructions

Format the job description in Markdown with appropriate headers and bullet points.
Make it professional but engaging."#;

/// Replace: {role}, {level}
pub const JOB_BOARDS_TEMPLATE: &str = r#"Recommend 5 specific job boards that would be most effective for posting a job listing for a {level}-level {role} position.
For each job board, explain why it's particularly suitable for this role.

Format your response as a JSON array of objects with "name" and "why" properties:
[
  {"name": "Job Board Name", "why": "Reason this board is good for this role"},
  ...
]"#;

/// Replace: {role}, {level}
pub const INTERVIEW_SKILLS_TEMPLATE: &str = r#"List the 5 most important skills for a {level}-level {role}.
Return only a JSON array of strings.
Example: ["Skill 1", "Skill 2", "Skill 3", "Skill 4", "Skill 5"]"#;

/// Replace: {role}, {level}, {skills}, {question_types}
pub const INTERVIEW_QUESTIONS_TEMPLATE: &str = r#"Create interview questions for a {level}-level {role} position.

Key skills for this role: {skills}
Question types needed: {question_types}

Generate 2-3 questions for each skill, focusing on the selected question types.
Also include 2-3 general questions that cover the selected question types.

Format your response as a JSON object with this structure:
{
  "skills": {
    "Skill Name 1": ["Question 1", "Question 2", ...],
    "Skill Name 2": ["Question 1", "Question 2", ...],
    ...
  },
  "general": ["General question 1", "General question 2", ...]
}

Questions should be appropriate for the {level} experience level."#;

/// Replace: {role}, {level}, {named}, {feedback}
pub const DEVELOPMENT_PLAN_TEMPLATE: &str = r#"Create a personalized development plan for a {level}-level {role}{named} based on the following performance feedback:

"{feedback}"

Include:
1. A summary of strengths and areas for improvement
2. Specific development goals for each area needing improvement
3. Recommended learning resources (courses, books, etc.)
4. Actionable milestones with a 3-month timeline
5. Key performance indicators to measure progress

Format the development plan in detailed Markdown with clear sections and bullet points."#;

fn fill_query(template: &str, query: &SkillQuery) -> String {
    template
        .replace("{role}", &query.role)
        .replace("{level}", query.level.as_str())
}

fn band_guidance() -> String {
    let [junior, mid, senior] = [Level::Junior, Level::Mid, Level::Senior].map(|level| {
        let (lo, hi) = level.expected_band();
        format!("{lo}-{hi}")
    });
    format!(
        "Junior should have ratings mostly in the {junior} range, Mid in the {mid} range, \
         and Senior in the {senior} range."
    )
}

pub fn identify_skills(role: &str) -> Prompt {
    Prompt::with_system(
        IDENTIFY_SKILLS_TEMPLATE.replace("{role}", role),
        SKILLS_ANALYST_SYSTEM,
    )
}

pub fn skill_profile(query: &SkillQuery) -> Prompt {
    Prompt::with_system(
        fill_query(SKILL_PROFILE_TEMPLATE, query).replace("{band_guidance}", &band_guidance()),
        ASSESSMENT_EXPERT_SYSTEM,
    )
}

pub fn skill_descriptions(query: &SkillQuery, skills: &[String]) -> Prompt {
    Prompt::with_system(
        fill_query(SKILL_DESCRIPTIONS_TEMPLATE, query).replace("{skills}", &skills.join(", ")),
        ASSESSMENT_EXPERT_SYSTEM,
    )
}

/// Markdown prompt; no system directive.
pub fn job_posting(query: &SkillQuery, company: Option<&str>, location: Option<&str>) -> Prompt {
    let mut place = String::new();
    if let Some(company) = company {
        place.push_str(&format!(" at {company}"));
    }
    if let Some(location) = location {
        place.push_str(&format!(" in {location}"));
    }
    Prompt::user(fill_query(JOB_POSTING_TEMPLATE, query).replace("{where}", &place))
}

pub fn job_boards(query: &SkillQuery) -> Prompt {
    Prompt::with_system(
        fill_query(JOB_BOARDS_TEMPLATE, query),
        RECRUITMENT_EXPERT_SYSTEM,
    )
}

pub fn interview_skills(query: &SkillQuery) -> Prompt {
    Prompt::with_system(
        fill_query(INTERVIEW_SKILLS_TEMPLATE, query),
        TECHNICAL_RECRUITER_SYSTEM,
    )
}

pub fn interview_questions(
    query: &SkillQuery,
    skills: &[String],
    question_types: &[QuestionType],
) -> Prompt {
    let types = question_types
        .iter()
        .map(|t| t.label())
        .collect::<Vec<_>>()
        .join(", ");
    Prompt::with_system(
        fill_query(INTERVIEW_QUESTIONS_TEMPLATE, query)
            .replace("{skills}", &skills.join(", "))
            .replace("{question_types}", &types),
        TECHNICAL_RECRUITER_SYSTEM,
    )
}

/// Markdown prompt; no system directive.
pub fn development_plan(query: &SkillQuery, employee: Option<&str>, feedback: &str) -> Prompt {
    let named = employee
        .map(|name| format!(" named {name}"))
        .unwrap_or_default();
    Prompt::user(
        fill_query(DEVELOPMENT_PLAN_TEMPLATE, query)
            .replace("{named}", &named)
            .replace("{feedback}", feedback),
    )
}
