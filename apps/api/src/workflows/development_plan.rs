//! Development Plan: one markdown hop from performance feedback.

use serde::Serialize;

use crate::errors::AppError;
use crate::models::query::{present, DevelopmentPlanRequest};
use crate::models::results::DevelopmentPlan;
use crate::presentation::documents::{
    artifact_filename, development_plan_header, underscored, DownloadArtifact,
};
use crate::workflows::chain::Chain;
use crate::workflows::prompts;

#[derive(Debug, Serialize)]
pub struct DevelopmentPlanReport {
    pub header: String,
    pub plan: DevelopmentPlan,
    pub download: DownloadArtifact,
}

pub async fn build_development_plan(
    chain: &mut Chain<'_>,
    request: &DevelopmentPlanRequest,
) -> Result<DevelopmentPlanReport, AppError> {
    let query = &request.query;
    let employee = present(&request.employee_name);

    let prompt = prompts::development_plan(query, employee, request.feedback.trim());
    let plan = DevelopmentPlan {
        markdown_body: chain.text(&prompt).await?,
    };

    let filename = match employee {
        Some(name) => format!("{}_Development_Plan.md", underscored(name)),
        None => artifact_filename(&query.role, query.level, "Development_Plan", "md"),
    };

    Ok(DevelopmentPlanReport {
        header: development_plan_header(&query.role, query.level, employee),
        download: DownloadArtifact::markdown(filename, &plan.markdown_body),
        plan,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::scripted::ScriptedGateway;
    use crate::models::query::{Level, SkillQuery};

    fn request(employee: Option<&str>) -> DevelopmentPlanRequest {
        DevelopmentPlanRequest {
            query: SkillQuery {
                role: "Electrical Engineer".to_string(),
                level: Level::Mid,
            },
            employee_name: employee.map(str::to_string),
            feedback: "Strong in motor control theory. Poor documentation.".to_string(),
        }
    }

    #[tokio::test]
    async fn test_named_plan_uses_employee_filename() {
        let gateway = ScriptedGateway::new(vec![Ok("## Strengths\n- Theory".to_string())]);
        let mut chain = Chain::new(&gateway, "development_plan");

        let report = build_development_plan(&mut chain, &request(Some("Jo Park")))
            .await
            .unwrap();
        assert_eq!(report.download.filename, "Jo_Park_Development_Plan.md");
        assert!(report.header.contains("Development Plan for Jo Park"));
        assert_eq!(report.plan.markdown_body, "## Strengths\n- Theory");
        assert!(gateway.prompts()[0]
            .text
            .contains("\"Strong in motor control theory. Poor documentation.\""));
    }

    #[tokio::test]
    async fn test_anonymous_plan_uses_role_and_level() {
        let gateway = ScriptedGateway::new(vec![Ok("plan".to_string())]);
        let mut chain = Chain::new(&gateway, "development_plan");

        let report = build_development_plan(&mut chain, &request(Some(" ")))
            .await
            .unwrap();
        assert_eq!(
            report.download.filename,
            "Electrical_Engineer_Mid_Development_Plan.md"
        );
        assert_eq!(report.header, "## Development Plan: Mid-Level Electrical Engineer\n");
    }
}
