//! wgpu render adapter for isometric cuboid meshes.
//!
//! Each on-screen box owns one GPU vertex buffer ([`BoxVisual`]), lazily
//! created on first upload and re-uploaded in place on every mesh rebuild.
//! All boxes in a frame share one pipeline ([`BoxPipeline`]) with a fixed
//! two-attribute vertex layout (3 position floats, 4 color floats, stride
//! 28 bytes) and depth testing with a `Less` comparison, so overlapping
//! boxes occlude each other correctly.
//!
//! Depth state and the view-projection bind group are set once per frame
//! via [`BoxPipeline::bind`] rather than per box; per-box work is just a
//! vertex-buffer bind and a 36-vertex non-indexed draw.
//!
//! Everything is single-threaded and synchronous: mesh build, buffer upload
//! and draw recording happen on the thread that owns the redraw loop.

mod error;
mod gpu;
mod shaders;
mod visual;

pub use error::RenderError;
pub use gpu::{BoxPipeline, GpuContext, DEPTH_FORMAT};
pub use visual::{BoxVisual, FrameTarget};

/// Result type for render operations.
pub type Result<T> = std::result::Result<T, RenderError>;

/// Frame-level uniforms: the host-supplied world-to-clip transform.
///
/// The matrix is stored column-major, matching WGSL `mat4x4<f32>` layout.
/// How the host derives it (viewport, zoom, isometric projection) is the
/// host's business; the adapter only applies it.
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct ViewUniforms {
    pub view_proj: [[f32; 4]; 4],
}

impl ViewUniforms {
    /// The identity transform: world coordinates are already clip space.
    pub const IDENTITY: Self = Self {
        view_proj: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };
}

impl Default for ViewUniforms {
    fn default() -> Self {
        Self::IDENTITY
    }
}
