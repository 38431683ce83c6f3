//! Error types for the geometry core.
//!
//! Mesh construction itself is infallible: any numeric input produces a
//! dimensionally consistent (possibly degenerate) mesh. Errors only arise at
//! the scene-loading boundary.

use thiserror::Error;

/// Errors that can occur while loading scene data.
#[derive(Error, Debug)]
pub enum GeomError {
    /// Scene JSON could not be parsed.
    #[error("scene parse failed: {0}")]
    Parse(#[from] serde_json::Error),
}
