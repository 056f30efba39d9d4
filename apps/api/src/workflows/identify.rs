//! Skill Identifier: one hop, role description → 8–12 skills in two columns.

use serde::Serialize;
use tracing::warn;

use crate::errors::AppError;
use crate::models::results::SkillList;
use crate::presentation::columns::{split_columns, SkillColumns};
use crate::workflows::chain::Chain;
use crate::workflows::prompts;

#[derive(Debug, Serialize)]
pub struct IdentifiedSkills {
    pub role: String,
    pub skills: SkillList,
    pub columns: SkillColumns,
    pub columns_html: String,
}

pub async fn identify_skills(chain: &mut Chain<'_>, role: &str) -> Result<IdentifiedSkills, AppError> {
    let skills: SkillList = chain.decode(&prompts::identify_skills(role)).await?;
    if skills.is_empty() {
        warn!("Model returned an empty skill list for '{role}'");
    }
    let columns = split_columns(&skills);
    let columns_html = columns.to_html();

    Ok(IdentifiedSkills {
        role: role.to_string(),
        skills,
        columns,
        columns_html,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::scripted::ScriptedGateway;

    #[tokio::test]
    async fn test_identify_splits_nine_skills_five_four() {
        let reply = r#"Here are the skills:
["Motor control theory", "Power electronics", "Embedded C", "PCB design",
 "MATLAB/Simulink", "Control loop tuning", "Documentation", "Teamwork", "EMC compliance"]
These cover the role."#;
        let gateway = ScriptedGateway::new(vec![Ok(reply.to_string())]);
        let mut chain = Chain::new(&gateway, "identify_skills");

        let result = identify_skills(&mut chain, "Electrical Engineer - Motor Control")
            .await
            .unwrap();
        assert_eq!(result.skills.len(), 9);
        assert_eq!(result.columns.left.len(), 5);
        assert_eq!(result.columns.right.len(), 4);
        assert!(result.columns_html.contains("Power electronics"));
    }

    #[tokio::test]
    async fn test_identify_surfaces_decode_failure() {
        let gateway = ScriptedGateway::new(vec![Ok("I'm not sure what you mean.".to_string())]);
        let mut chain = Chain::new(&gateway, "identify_skills");
        let err = identify_skills(&mut chain, "???").await.unwrap_err();
        assert!(matches!(err, AppError::Decode(_)));
    }
}
