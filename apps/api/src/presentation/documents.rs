//! Markdown documents and inline downloads.
//!
//! Downloads are never stored: the bytes travel back inside the response as a
//! base64 data URI.

use std::fmt::Write as _;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use bytes::Bytes;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::models::query::Level;
use crate::models::results::QuestionSet;

pub const MARKDOWN_MIME: &str = "text/markdown";
pub const PNG_MIME: &str = "image/png";

/// A named file handed to the client as a data URI.
#[derive(Debug, Clone)]
pub struct DownloadArtifact {
    pub filename: String,
    pub mime: &'static str,
    pub bytes: Bytes,
}

impl DownloadArtifact {
    pub fn new(filename: String, mime: &'static str, bytes: impl Into<Bytes>) -> Self {
        Self {
            filename,
            mime,
            bytes: bytes.into(),
        }
    }

    pub fn markdown(filename: String, body: &str) -> Self {
        Self::new(filename, MARKDOWN_MIME, body.as_bytes().to_vec())
    }

    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime, BASE64.encode(&self.bytes))
    }
}

impl Serialize for DownloadArtifact {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("DownloadArtifact", 3)?;
        state.serialize_field("filename", &self.filename)?;
        state.serialize_field("mime", self.mime)?;
        state.serialize_field("data_uri", &self.data_uri())?;
        state.end()
    }
}

/// `{role_with_spaces_as_underscores}_{level}_{kind}.{ext}`
pub fn artifact_filename(role: &str, level: Level, kind: &str, ext: &str) -> String {
    format!("{}_{level}_{kind}.{ext}", underscored(role))
}

pub fn underscored(text: &str) -> String {
    text.trim().replace(' ', "_")
}

pub fn numbered_list(items: &[String]) -> String {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| format!("{}. {item}\n", i + 1))
        .collect()
}

/// Per-skill grouping: one `###` header per skill followed by its questions.
pub fn skill_questions_markdown(set: &QuestionSet) -> String {
    set.by_skill
        .iter()
        .map(|group| format!("### {}\n{}\n", group.skill, numbered_list(&group.questions)))
        .collect()
}

/// General grouping, absent when the model returned no `general` key.
pub fn general_questions_markdown(set: &QuestionSet) -> Option<String> {
    set.general.as_deref().map(numbered_list)
}

/// Full interview document offered for download.
pub fn interview_document(role: &str, level: Level, set: &QuestionSet) -> String {
    let mut doc = format!("# Interview Questions for {level}-Level {role}\n\n");
    doc.push_str("## Skill-Specific Questions\n\n");
    doc.push_str(&skill_questions_markdown(set));
    if let Some(general) = general_questions_markdown(set) {
        let _ = write!(doc, "## General Questions\n\n{general}");
    }
    doc
}

/// Heading shown above a development plan.
pub fn development_plan_header(role: &str, level: Level, employee: Option<&str>) -> String {
    match employee {
        Some(name) => format!("## Development Plan for {name}\n\n*{level}-Level {role}*\n"),
        None => format!("## Development Plan: {level}-Level {role}\n"),
    }
}
