//! Axum route handlers: one per use case, each running its own chain.
//! Handlers share nothing but the gateway; every request is independent.

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::query::{
    DevelopmentPlanRequest, IdentifySkillsRequest, InterviewRequest, JobPostingRequest,
    SkillQuery,
};
use crate::state::AppState;
use crate::workflows::chain::Chain;
use crate::workflows::development_plan::{build_development_plan, DevelopmentPlanReport};
use crate::workflows::identify::{identify_skills, IdentifiedSkills};
use crate::workflows::interview::{build_interview_kit, InterviewKit};
use crate::workflows::job_posting::{build_job_posting, JobPostingReport};
use crate::workflows::profile::{build_skill_profile, SkillProfileReport};

/// Common response wrapper carrying the chain id that appears in the logs.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub chain_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub model_calls: u32,
    #[serde(flatten)]
    pub body: T,
}

fn envelope<T>(chain: &Chain<'_>, body: T) -> Json<Envelope<T>> {
    info!(chain_id = %chain.id(), hops = chain.hops(), "Chain complete");
    Json(Envelope {
        chain_id: chain.id(),
        generated_at: Utc::now(),
        model_calls: chain.hops(),
        body,
    })
}

fn require_role(role: &str) -> Result<(), AppError> {
    if role.trim().is_empty() {
        return Err(AppError::Validation("role cannot be empty".to_string()));
    }
    Ok(())
}

fn normalized(query: &SkillQuery) -> SkillQuery {
    SkillQuery {
        role: query.role.trim().to_string(),
        level: query.level,
    }
}

/// POST /api/v1/skills/identify
pub async fn handle_identify_skills(
    State(state): State<AppState>,
    Json(request): Json<IdentifySkillsRequest>,
) -> Result<Json<Envelope<IdentifiedSkills>>, AppError> {
    require_role(&request.role)?;

    let mut chain = Chain::new(state.gateway.as_ref(), "identify_skills");
    let result = identify_skills(&mut chain, request.role.trim()).await?;
    Ok(envelope(&chain, result))
}

/// POST /api/v1/skills/profile
pub async fn handle_skill_profile(
    State(state): State<AppState>,
    Json(request): Json<SkillQuery>,
) -> Result<Json<Envelope<SkillProfileReport>>, AppError> {
    require_role(&request.role)?;

    let mut chain = Chain::new(state.gateway.as_ref(), "skill_profile");
    let report = build_skill_profile(&mut chain, &normalized(&request)).await?;
    Ok(envelope(&chain, report))
}

/// POST /api/v1/job-postings
pub async fn handle_job_posting(
    State(state): State<AppState>,
    Json(mut request): Json<JobPostingRequest>,
) -> Result<Json<Envelope<JobPostingReport>>, AppError> {
    require_role(&request.query.role)?;
    request.query = normalized(&request.query);

    let mut chain = Chain::new(state.gateway.as_ref(), "job_posting");
    let report = build_job_posting(&mut chain, &request).await?;
    Ok(envelope(&chain, report))
}

/// POST /api/v1/interview-questions
pub async fn handle_interview_questions(
    State(state): State<AppState>,
    Json(mut request): Json<InterviewRequest>,
) -> Result<Json<Envelope<InterviewKit>>, AppError> {
    require_role(&request.query.role)?;
    request.query = normalized(&request.query);

    let mut chain = Chain::new(state.gateway.as_ref(), "interview_questions");
    let kit = build_interview_kit(&mut chain, &request).await?;
    Ok(envelope(&chain, kit))
}

/// POST /api/v1/development-plans
pub async fn handle_development_plan(
    State(state): State<AppState>,
    Json(mut request): Json<DevelopmentPlanRequest>,
) -> Result<Json<Envelope<DevelopmentPlanReport>>, AppError> {
    require_role(&request.query.role)?;
    if request.feedback.trim().is_empty() {
        return Err(AppError::Validation("feedback cannot be empty".to_string()));
    }
    request.query = normalized(&request.query);

    let mut chain = Chain::new(state.gateway.as_ref(), "development_plan");
    let report = build_development_plan(&mut chain, &request).await?;
    Ok(envelope(&chain, report))
}
