//! Interview Questions: skills hop → questions hop.
//!
//! Both hops are required; a failure at either ends the chain and is returned
//! as the error.

use serde::Serialize;

use crate::errors::AppError;
use crate::models::query::InterviewRequest;
use crate::models::results::{QuestionSet, SkillList};
use crate::presentation::documents::{
    artifact_filename, general_questions_markdown, interview_document, skill_questions_markdown,
    DownloadArtifact,
};
use crate::workflows::chain::Chain;
use crate::workflows::prompts;

#[derive(Debug, Serialize)]
pub struct InterviewKit {
    pub skills: SkillList,
    pub questions: QuestionSet,
    pub skill_questions_markdown: String,
    pub general_questions_markdown: Option<String>,
    pub download: DownloadArtifact,
}

pub async fn build_interview_kit(
    chain: &mut Chain<'_>,
    request: &InterviewRequest,
) -> Result<InterviewKit, AppError> {
    let query = &request.query;

    let skills: SkillList = chain.decode(&prompts::interview_skills(query)).await?;
    let questions: QuestionSet = chain
        .decode(&prompts::interview_questions(
            query,
            skills.as_slice(),
            &request.question_types,
        ))
        .await?;

    let document = interview_document(&query.role, query.level, &questions);
    let download = DownloadArtifact::markdown(
        artifact_filename(&query.role, query.level, "Interview_Questions", "md"),
        &document,
    );

    Ok(InterviewKit {
        skill_questions_markdown: skill_questions_markdown(&questions),
        general_questions_markdown: general_questions_markdown(&questions),
        skills,
        questions,
        download,
    })
}
