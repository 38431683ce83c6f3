//! Scene data model: boxes derived from diagram nodes and their tag data.
//!
//! Each box mirrors how the host diagram attaches metadata to a node: the
//! node's layout rectangle plus a tag carrying `color`, `height` and
//! `bottom`. Nodes without a tag fall back to a flat (zero-height) opaque
//! red box, matching [`BoxTag::default`].

use crate::{Color, CuboidMesh, Rect, Result};
use serde::{Deserialize, Serialize};

/// Per-box metadata attached to a diagram node.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoxTag {
    /// Base color; per-face shading is derived from it at mesh build time.
    pub color: Color,
    /// Extrusion distance along the synthetic z-axis.
    pub height: f32,
    /// Elevation of the box base above the reference plane.
    pub bottom: f32,
}

impl Default for BoxTag {
    fn default() -> Self {
        Self {
            color: Color::default(),
            height: 0.0,
            bottom: 0.0,
        }
    }
}

/// One cuboid instance in a scene.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SceneBox {
    pub id: u64,
    pub rect: Rect,
    #[serde(default)]
    pub tag: BoxTag,
}

impl SceneBox {
    /// Rebuild the triangle list from the box's current footprint and tag.
    pub fn mesh(&self) -> CuboidMesh {
        CuboidMesh::build(self.rect, self.tag.color, self.tag.height, self.tag.bottom)
    }
}

/// A set of boxes rendered together in one frame.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub boxes: Vec<SceneBox>,
}

impl Scene {
    /// Load a scene from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a scene from an already-parsed JSON value.
    pub fn from_json_value(value: serde_json::Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_tag_falls_back_to_flat_red() {
        let scene = Scene::from_json_str(
            r#"{"boxes": [{"id": 0, "rect": {"x": 0, "y": 0, "width": 10, "height": 5}}]}"#,
        )
        .unwrap();
        let tag = scene.boxes[0].tag;
        assert_eq!(tag.color, Color::new(1.0, 0.0, 0.0, 1.0));
        assert_eq!(tag.height, 0.0);
        assert_eq!(tag.bottom, 0.0);
    }

    #[test]
    fn test_partial_tag_fills_defaults() {
        let scene = Scene::from_json_str(
            r#"{
                "boxes": [{
                    "id": 3,
                    "rect": {"x": 1, "y": 2, "width": 4, "height": 4},
                    "tag": {"height": 20}
                }]
            }"#,
        )
        .unwrap();
        let tag = scene.boxes[0].tag;
        assert_eq!(tag.height, 20.0);
        assert_eq!(tag.bottom, 0.0);
        assert_eq!(tag.color, Color::default());
    }

    #[test]
    fn test_full_tag_round_trip() {
        let scene = Scene {
            boxes: vec![SceneBox {
                id: 7,
                rect: Rect::new(0.0, 0.0, 160.0, 50.0),
                tag: BoxTag {
                    color: Color::new(0.1, 0.4, 0.8, 1.0),
                    height: 30.0,
                    bottom: 5.0,
                },
            }],
        };
        let json = serde_json::to_string(&scene).unwrap();
        let back = Scene::from_json_str(&json).unwrap();
        assert_eq!(back, scene);
    }

    #[test]
    fn test_mesh_uses_tag_values() {
        let b = SceneBox {
            id: 1,
            rect: Rect::new(0.0, 0.0, 10.0, 5.0),
            tag: BoxTag {
                color: Color::default(),
                height: 3.0,
                bottom: 2.0,
            },
        };
        let mesh = b.mesh();
        assert_eq!(mesh.vertices()[0].position[2], -2.0);
        assert_eq!(mesh.vertices()[6].position[2], -5.0);
    }

    #[test]
    fn test_malformed_json_is_a_parse_error() {
        assert!(Scene::from_json_str("{\"boxes\": 3}").is_err());
    }
}
