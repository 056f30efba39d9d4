//! Response Interpreter — turns freeform model text into structured results.
//!
//! Models are not schema-constrained, so replies often wrap the JSON in
//! prose. Decoding runs in three stages:
//!
//! 1. collapse newlines to spaces;
//! 2. take the greedy span from the FIRST opening bracket of the expected
//!    kind to the LAST closing bracket of that kind; when there is no such
//!    span, fall back to the whole collapsed text;
//! 3. parse as JSON and validate the shape required by the target type.
//!
//! Every failure comes back as a [`DecodeError`] carrying the raw text.

use serde_json::Value;
use thiserror::Error;

mod decode;

/// Top-level JSON kind a use case expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Array,
    Object,
}

impl Shape {
    fn brackets(self) -> (char, char) {
        match self {
            Shape::Array => ('[', ']'),
            Shape::Object => ('{', '}'),
        }
    }
}

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("could not parse JSON response: {reason}")]
    Malformed { raw: String, reason: String },

    #[error("response is missing required key '{key}'")]
    MissingKey { raw: String, key: &'static str },

    #[error("response has an invalid structure: {reason}")]
    Invalid { raw: String, reason: String },
}

impl DecodeError {
    /// The unmodified model output, for diagnostic display.
    pub fn raw_text(&self) -> &str {
        match self {
            DecodeError::Malformed { raw, .. }
            | DecodeError::MissingKey { raw, .. }
            | DecodeError::Invalid { raw, .. } => raw,
        }
    }
}

/// A result type the interpreter can decode from model text.
pub trait Interpret: Sized {
    const SHAPE: Shape;

    /// Validates an already-parsed JSON value. `raw` is the original text,
    /// to be attached to any error.
    fn from_json(value: Value, raw: &str) -> Result<Self, DecodeError>;
}

/// Decodes raw model text into `T`.
pub fn interpret<T: Interpret>(raw: &str) -> Result<T, DecodeError> {
    let value = parse_embedded_json(raw, T::SHAPE)?;
    T::from_json(value, raw)
}

/// Extracts and parses the JSON payload of `shape` embedded in `raw`.
pub fn parse_embedded_json(raw: &str, shape: Shape) -> Result<Value, DecodeError> {
    let collapsed = raw.replace('\n', " ");
    let candidate = extract_span(&collapsed, shape).unwrap_or(collapsed.as_str());

    serde_json::from_str(candidate).map_err(|e| DecodeError::Malformed {
        raw: raw.to_string(),
        reason: e.to_string(),
    })
}

/// Greedy bracket span: first opener through last closer of the same kind.
/// `None` when either bracket is missing or the last closer precedes the
/// first opener.
fn extract_span(text: &str, shape: Shape) -> Option<&str> {
    let (open, close) = shape.brackets();
    let start = text.find(open)?;
    let end = text.rfind(close)?;
    (end > start).then(|| &text[start..=end])
}
