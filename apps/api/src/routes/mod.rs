pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;
use crate::workflows::handlers;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/skills/identify",
            post(handlers::handle_identify_skills),
        )
        .route("/api/v1/skills/profile", post(handlers::handle_skill_profile))
        .route("/api/v1/job-postings", post(handlers::handle_job_posting))
        .route(
            "/api/v1/interview-questions",
            post(handlers::handle_interview_questions),
        )
        .route(
            "/api/v1/development-plans",
            post(handlers::handle_development_plan),
        )
        .with_state(state)
}
