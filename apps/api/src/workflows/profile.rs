//! Skill Profiler.
//!
//! Flow: profile hop (skills + ratings) → chart, table, PNG → descriptions hop.
//!
//! The descriptions hop is an enrichment: if it fails, the chart and table
//! from the first hop are still returned alongside a failure report.

use anyhow::Context;
use serde::Serialize;
use tracing::warn;

use crate::errors::AppError;
use crate::models::query::{Level, SkillQuery};
use crate::models::results::{SkillDescriptions, SkillProfile};
use crate::presentation::documents::{artifact_filename, DownloadArtifact, PNG_MIME};
use crate::presentation::radar::RadarChart;
use crate::presentation::tables::{description_cards, profile_table};
use crate::workflows::chain::{Chain, FailureReport};
use crate::workflows::prompts;

#[derive(Debug, Serialize)]
pub struct SkillProfileReport {
    pub role: String,
    pub level: Level,
    pub profile: SkillProfile,
    pub chart_svg: String,
    pub chart_png: DownloadArtifact,
    pub table_html: String,
    pub descriptions: Option<SkillDescriptions>,
    pub description_cards_html: Option<String>,
    pub descriptions_failure: Option<FailureReport>,
}

pub async fn build_skill_profile(
    chain: &mut Chain<'_>,
    query: &SkillQuery,
) -> Result<SkillProfileReport, AppError> {
    let profile: SkillProfile = chain.decode(&prompts::skill_profile(query)).await?;
    flag_out_of_band_ratings(&profile, query);

    let chart = RadarChart::new(
        &profile,
        format!("Skill Profile: {} - {} Level", query.role, query.level),
    );
    let chart_svg = chart.to_svg();
    let png = render_png(chart).await?;
    let chart_png = DownloadArtifact::new(
        artifact_filename(&query.role, query.level, "Skill_Profile", "png"),
        PNG_MIME,
        png,
    );

    let mut report = SkillProfileReport {
        role: query.role.clone(),
        level: query.level,
        chart_svg,
        chart_png,
        table_html: profile_table(&profile),
        profile,
        descriptions: None,
        description_cards_html: None,
        descriptions_failure: None,
    };

    let descriptions_prompt = prompts::skill_descriptions(query, &report.profile.skills);
    match chain.decode::<SkillDescriptions>(&descriptions_prompt).await {
        Ok(descriptions) => {
            report.description_cards_html = Some(description_cards(&report.profile, &descriptions));
            report.descriptions = Some(descriptions);
        }
        Err(e) => report.descriptions_failure = Some(FailureReport::from(&e)),
    }

    Ok(report)
}

/// PNG rasterisation is CPU-bound, so it runs on the blocking pool.
async fn render_png(chart: RadarChart) -> anyhow::Result<Vec<u8>> {
    tokio::task::spawn_blocking(move || chart.to_png())
        .await
        .context("Radar chart render task panicked")?
        .context("Failed to encode radar chart as PNG")
}

/// Ratings are trusted verbatim; anything outside [1, 10] or the level's
/// band is only logged.
fn flag_out_of_band_ratings(profile: &SkillProfile, query: &SkillQuery) {
    let (lo, hi) = query.level.expected_band();
    for (skill, rating) in profile.pairs() {
        if !(1.0..=10.0).contains(&rating) {
            warn!("Rating {rating} for '{skill}' is outside 1-10; keeping model value");
        } else if !(lo..=hi).contains(&rating) {
            warn!(
                "Rating {rating} for '{skill}' is outside the {} band {lo}-{hi}",
                query.level
            );
        }
    }
}
