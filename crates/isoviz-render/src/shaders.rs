//! WGSL shaders for the box render pipeline.

/// Pass-through shader: transforms positions by the frame's view-projection
/// matrix and interpolates per-vertex colors. All lighting is baked into the
/// vertex colors at mesh build time, so the fragment stage is trivial.
pub const BOX_SHADER: &str = r#"
struct ViewUniforms {
    view_proj: mat4x4<f32>,
}

@group(0) @binding(0) var<uniform> view: ViewUniforms;

struct VertexInput {
    @location(0) position: vec3<f32>,
    @location(1) color: vec4<f32>,
}

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) color: vec4<f32>,
}

@vertex
fn vs_main(in: VertexInput) -> VertexOutput {
    var out: VertexOutput;
    out.clip_position = view.view_proj * vec4<f32>(in.position, 1.0);
    out.color = in.color;
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    return in.color;
}
"#;
