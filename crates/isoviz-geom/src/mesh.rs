//! Cuboid triangle-list generation with per-face flat shading.
//!
//! A box is defined by a planar rectangle, an extrusion height, and a base
//! elevation. The back face sits at `z = -bottom`; the front face extrudes
//! toward negative z (`z = -bottom - height`). This sign convention matches
//! the host coordinate system the shading factors were calibrated against,
//! so it is preserved as-is.

use crate::Color;
use serde::{Deserialize, Serialize};

/// Shade factor for the face turned toward the light source.
pub const TOP_SHADE: f32 = 1.15;
/// Shade factor for the face turned away from the light source.
pub const BOTTOM_SHADE: f32 = 0.7;
/// Shade factor for the two remaining side faces.
pub const SIDE_SHADE: f32 = 0.85;

/// Vertices in one cuboid mesh: 6 faces, 2 triangles each, 3 vertices each.
pub const VERTEX_COUNT: usize = 36;

/// A planar rectangle, the 2D footprint of a box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Create a rectangle from its origin and extents.
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// One packed vertex: interleaved position and color, 7 floats, no padding.
#[derive(Debug, Clone, Copy, PartialEq, Default, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

/// The four corners of one z-slice of a box.
#[derive(Debug, Clone, Copy)]
struct Corners {
    bottom_left: [f32; 3],
    bottom_right: [f32; 3],
    top_left: [f32; 3],
    top_right: [f32; 3],
}

impl Corners {
    fn at(rect: Rect, z: f32) -> Self {
        Self {
            bottom_left: [rect.x, rect.y, z],
            bottom_right: [rect.x + rect.width, rect.y, z],
            top_left: [rect.x, rect.y + rect.height, z],
            top_right: [rect.x + rect.width, rect.y + rect.height, z],
        }
    }
}

/// The non-indexed 36-vertex triangle list for one box.
///
/// Vertices are deliberately duplicated rather than indexed: the mesh is tiny
/// and rebuilt per draw, so a shared index buffer would buy nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct CuboidMesh {
    vertices: [Vertex; VERTEX_COUNT],
}

impl CuboidMesh {
    /// Build the triangle list for a box.
    ///
    /// Accepts any numeric input and always yields exactly [`VERTEX_COUNT`]
    /// vertices. Degenerate rectangles or a zero `height` produce zero-area
    /// faces, not an error; upstream metadata is assumed well-formed.
    pub fn build(rect: Rect, base_color: Color, height: f32, bottom: f32) -> Self {
        let bottom_z = -bottom;
        let back = Corners::at(rect, bottom_z);
        let front = Corners::at(rect, bottom_z - height);

        // Face emission order and per-face winding are fixed; the top face
        // is lit, the bottom face shaded, the two sides in between.
        let faces: [([[f32; 3]; 6], Color); 6] = [
            (
                [
                    back.bottom_left,
                    back.top_right,
                    back.top_left,
                    back.bottom_left,
                    back.bottom_right,
                    back.top_right,
                ],
                base_color,
            ),
            (
                [
                    front.bottom_left,
                    front.top_right,
                    front.top_left,
                    front.bottom_left,
                    front.bottom_right,
                    front.top_right,
                ],
                base_color,
            ),
            (
                [
                    back.top_left,
                    front.top_left,
                    front.top_right,
                    back.top_right,
                    back.top_left,
                    front.top_right,
                ],
                base_color.scaled(TOP_SHADE),
            ),
            (
                [
                    back.bottom_left,
                    front.bottom_right,
                    front.bottom_left,
                    back.bottom_left,
                    back.bottom_right,
                    front.bottom_right,
                ],
                base_color.scaled(BOTTOM_SHADE),
            ),
            (
                [
                    back.top_left,
                    back.bottom_left,
                    front.top_left,
                    back.bottom_left,
                    front.bottom_left,
                    front.top_left,
                ],
                base_color.scaled(SIDE_SHADE),
            ),
            (
                [
                    back.bottom_right,
                    back.top_right,
                    front.top_right,
                    front.bottom_right,
                    back.bottom_right,
                    front.top_right,
                ],
                base_color.scaled(SIDE_SHADE),
            ),
        ];

        let mut vertices = [Vertex::default(); VERTEX_COUNT];
        for (face_idx, (positions, color)) in faces.iter().enumerate() {
            for (corner_idx, &position) in positions.iter().enumerate() {
                vertices[face_idx * 6 + corner_idx] = Vertex {
                    position,
                    color: color.to_array(),
                };
            }
        }

        Self { vertices }
    }

    /// The packed vertices.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// The buffer as a flat float slice (`VERTEX_COUNT * 7` values).
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// The buffer as raw bytes for GPU upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mesh() -> CuboidMesh {
        CuboidMesh::build(
            Rect::new(0.0, 0.0, 10.0, 5.0),
            Color::new(1.0, 0.0, 0.0, 1.0),
            3.0,
            0.0,
        )
    }

    #[test]
    fn test_vertex_count_and_float_count() {
        let m = mesh();
        assert_eq!(m.vertices().len(), 36);
        assert_eq!(m.as_floats().len(), 252);
        assert_eq!(m.as_bytes().len(), 252 * 4);
    }

    #[test]
    fn test_vertex_is_packed() {
        assert_eq!(std::mem::size_of::<Vertex>(), 28);
    }

    #[test]
    fn test_zero_bottom_puts_back_face_at_origin_plane() {
        let m = mesh();
        // First 6 vertices are the back face.
        for v in &m.vertices()[..6] {
            assert_eq!(v.position[2], 0.0);
        }
        // Next 6 are the front face, extruded toward negative z.
        for v in &m.vertices()[6..12] {
            assert_eq!(v.position[2], -3.0);
        }
    }

    #[test]
    fn test_bottom_offset_elevates_whole_box() {
        let m = CuboidMesh::build(
            Rect::new(0.0, 0.0, 10.0, 5.0),
            Color::default(),
            3.0,
            2.0,
        );
        for v in &m.vertices()[..6] {
            assert_eq!(v.position[2], -2.0);
        }
        for v in &m.vertices()[6..12] {
            assert_eq!(v.position[2], -5.0);
        }
    }

    #[test]
    fn test_zero_height_collapses_front_onto_back() {
        let m = CuboidMesh::build(
            Rect::new(1.0, 2.0, 4.0, 4.0),
            Color::default(),
            0.0,
            0.0,
        );
        assert_eq!(m.vertices().len(), 36);
        for v in m.vertices() {
            assert_eq!(v.position[2], 0.0);
        }
    }

    #[test]
    fn test_degenerate_rect_still_yields_full_mesh() {
        let m = CuboidMesh::build(
            Rect::new(5.0, 5.0, 0.0, 0.0),
            Color::default(),
            1.0,
            0.0,
        );
        assert_eq!(m.vertices().len(), 36);
        for v in m.vertices() {
            assert_eq!(v.position[0], 5.0);
            assert_eq!(v.position[1], 5.0);
        }
    }

    #[test]
    fn test_face_colors_for_red_base() {
        let m = mesh();
        let face_color = |face: usize| m.vertices()[face * 6].color;
        // Back and front: unscaled.
        assert_eq!(face_color(0), [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(face_color(1), [1.0, 0.0, 0.0, 1.0]);
        // Top: x1.15 clamps the red channel back to 1.
        assert_eq!(face_color(2), [1.0, 0.0, 0.0, 1.0]);
        // Bottom: x0.7.
        assert_eq!(face_color(3), [0.7, 0.0, 0.0, 1.0]);
        // Sides: x0.85.
        assert_eq!(face_color(4), [0.85, 0.0, 0.0, 1.0]);
        assert_eq!(face_color(5), [0.85, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_top_face_shade_without_clamping() {
        let m = CuboidMesh::build(
            Rect::new(0.0, 0.0, 1.0, 1.0),
            Color::new(0.5, 0.2, 0.8, 1.0),
            1.0,
            0.0,
        );
        let top = m.vertices()[12].color;
        assert!((top[0] - 0.575).abs() < 1e-6);
        assert!((top[1] - 0.23).abs() < 1e-6);
        assert!((top[2] - 0.92).abs() < 1e-6);
        assert_eq!(top[3], 1.0);
    }

    #[test]
    fn test_every_face_shares_one_color() {
        let m = mesh();
        for face in 0..6 {
            let first = m.vertices()[face * 6].color;
            for v in &m.vertices()[face * 6..face * 6 + 6] {
                assert_eq!(v.color, first);
            }
        }
    }

    #[test]
    fn test_rebuild_is_bit_identical() {
        let a = mesh();
        let b = mesh();
        assert_eq!(a.as_bytes(), b.as_bytes());
    }

    #[test]
    fn test_planar_corners_match_rect() {
        let rect = Rect::new(2.0, 3.0, 10.0, 5.0);
        let m = CuboidMesh::build(rect, Color::default(), 1.0, 0.0);
        // Back face winding starts at bottom-left, then top-right.
        assert_eq!(m.vertices()[0].position, [2.0, 3.0, 0.0]);
        assert_eq!(m.vertices()[1].position, [12.0, 8.0, 0.0]);
    }
}
