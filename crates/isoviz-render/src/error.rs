//! Error types for GPU render operations.

use thiserror::Error;

/// Errors that can occur during GPU render operations.
#[derive(Error, Debug)]
pub enum RenderError {
    /// Failed to initialize GPU device.
    #[error("GPU initialization failed: {0}")]
    GpuInit(String),

    /// Draw requested for a box whose vertex buffer was never uploaded.
    #[error("box has no uploaded vertex buffer")]
    NotUploaded,
}
