//! Chain — an ordered sequence of dependent gateway calls within one request.
//!
//! Each hop is a fallible step returning `Result<_, StepError>`; callers
//! compose hops with `?`, so a failed hop ends the chain before the next
//! prompt is ever sent.

use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

use crate::interpreter::{interpret, DecodeError, Interpret};
use crate::llm_client::{GatewayError, ModelGateway, Prompt};

#[derive(Debug, Error)]
pub enum StepError {
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// Diagnostic for a hop whose failure does not retract earlier results.
#[derive(Debug, Clone, Serialize)]
pub struct FailureReport {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_response: Option<String>,
}

impl From<&StepError> for FailureReport {
    fn from(err: &StepError) -> Self {
        let raw_response = match err {
            StepError::Decode(decode) => Some(decode.raw_text().to_string()),
            StepError::Gateway(_) => None,
        };
        Self {
            message: err.to_string(),
            raw_response,
        }
    }
}

pub struct Chain<'a> {
    gateway: &'a dyn ModelGateway,
    use_case: &'static str,
    id: Uuid,
    hops: u32,
}

impl<'a> Chain<'a> {
    pub fn new(gateway: &'a dyn ModelGateway, use_case: &'static str) -> Self {
        Self {
            gateway,
            use_case,
            id: Uuid::new_v4(),
            hops: 0,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn hops(&self) -> u32 {
        self.hops
    }

    /// Issues one call and returns the raw text. Blank replies count as empty content.
    pub async fn text(&mut self, prompt: &Prompt) -> Result<String, StepError> {
        self.hops += 1;
        info!(
            chain_id = %self.id,
            use_case = self.use_case,
            hop = self.hops,
            prompt_chars = prompt.text.len(),
            "Calling model"
        );

        let text = self.gateway.complete(prompt).await.map_err(|e| {
            warn!(chain_id = %self.id, hop = self.hops, "Model call failed: {e}");
            StepError::Gateway(e)
        })?;

        if text.trim().is_empty() {
            warn!(chain_id = %self.id, hop = self.hops, "Model returned blank text");
            return Err(StepError::Gateway(GatewayError::EmptyContent));
        }

        info!(
            chain_id = %self.id,
            hop = self.hops,
            response_chars = text.len(),
            "Model replied"
        );
        Ok(text)
    }

    /// Issues one call and decodes the reply into `T`.
    pub async fn decode<T: Interpret>(&mut self, prompt: &Prompt) -> Result<T, StepError> {
        let text = self.text(prompt).await?;
        interpret::<T>(&text).map_err(|e| {
            warn!(chain_id = %self.id, hop = self.hops, "Decode failed: {e}");
            StepError::Decode(e)
        })
    }
}
