// Presentation Adapter: pure, synchronous transforms from structured results
// to renderable artifacts. No network or parsing work happens here.

pub mod columns;
pub mod documents;
pub mod html;
pub mod radar;
pub mod tables;
