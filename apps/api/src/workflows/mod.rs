// Use-case workflows: prompt building, chained gateway calls, and the
// handlers that expose them.
// All model calls go through a ModelGateway — no direct HTTP calls here.

pub mod chain;
pub mod development_plan;
pub mod handlers;
pub mod identify;
pub mod interview;
pub mod job_posting;
pub mod profile;
pub mod prompts;
