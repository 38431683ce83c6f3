//! Flat-shaded cuboid mesh generation for isometric diagram nodes.
//!
//! Turns a node's planar footprint plus height/elevation metadata into a
//! fixed 36-vertex triangle list with per-face shading that simulates a
//! single directional light source. The output is a packed, interleaved
//! `[x, y, z, r, g, b, a]` buffer ready for GPU upload; the companion
//! `isoviz-render` crate draws it with wgpu.
//!
//! The mesh is rebuilt from scratch on every redraw. At 36 vertices per box
//! that is far cheaper than any caching scheme would be, so there is no
//! dirty-tracking anywhere in this crate.

mod color;
mod error;
mod mesh;
mod scene;

pub use color::Color;
pub use error::GeomError;
pub use mesh::{CuboidMesh, Rect, Vertex, BOTTOM_SHADE, SIDE_SHADE, TOP_SHADE, VERTEX_COUNT};
pub use scene::{BoxTag, Scene, SceneBox};

/// Result type for geometry operations.
pub type Result<T> = std::result::Result<T, GeomError>;
