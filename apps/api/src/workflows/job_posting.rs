//! Job Poster: markdown job description, then recommended job boards.
//!
//! The posting is rendered and offered for download as soon as the first hop
//! returns; a failed board hop is reported next to it, not instead of it.

use serde::Serialize;

use crate::errors::AppError;
use crate::models::query::{present, JobPostingRequest};
use crate::models::results::{BoardList, JobPosting};
use crate::presentation::documents::{artifact_filename, DownloadArtifact};
use crate::presentation::tables::board_cards;
use crate::workflows::chain::{Chain, FailureReport};
use crate::workflows::prompts;

#[derive(Debug, Serialize)]
pub struct JobPostingReport {
    pub posting: JobPosting,
    pub download: DownloadArtifact,
    pub boards: Option<BoardList>,
    pub boards_html: Option<String>,
    pub boards_failure: Option<FailureReport>,
}

pub async fn build_job_posting(
    chain: &mut Chain<'_>,
    request: &JobPostingRequest,
) -> Result<JobPostingReport, AppError> {
    let query = &request.query;
    let posting_prompt =
        prompts::job_posting(query, present(&request.company), present(&request.location));
    let posting = JobPosting {
        markdown_body: chain.text(&posting_prompt).await?,
    };
    let download = DownloadArtifact::markdown(
        artifact_filename(&query.role, query.level, "JobDescription", "md"),
        &posting.markdown_body,
    );

    let (boards, boards_html, boards_failure) =
        match chain.decode::<BoardList>(&prompts::job_boards(query)).await {
            Ok(boards) => {
                let html = board_cards(&boards);
                (Some(boards), Some(html), None)
            }
            Err(e) => (None, None, Some(FailureReport::from(&e))),
        };

    Ok(JobPostingReport {
        posting,
        download,
        boards,
        boards_html,
        boards_failure,
    })
}
