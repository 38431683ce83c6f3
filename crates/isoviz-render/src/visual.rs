//! Per-box GPU buffer ownership and frame setup.

use crate::gpu::{GpuContext, DEPTH_FORMAT};
use crate::{RenderError, Result};
use isoviz_geom::{CuboidMesh, VERTEX_COUNT};
use wgpu::util::DeviceExt;

/// Depth attachment for one render target.
///
/// Frame-level state (depth clear, color clear) lives here so that drawing a
/// box never has to touch shared rasterizer state.
pub struct FrameTarget {
    depth_view: wgpu::TextureView,
    size: (u32, u32),
}

impl FrameTarget {
    /// Create a depth attachment matching a color target's dimensions.
    pub fn new(ctx: &GpuContext, width: u32, height: u32) -> Self {
        Self {
            depth_view: Self::create_depth_view(ctx, width, height),
            size: (width, height),
        }
    }

    /// Recreate the depth attachment if the target size changed.
    pub fn resize(&mut self, ctx: &GpuContext, width: u32, height: u32) {
        if self.size != (width, height) {
            self.depth_view = Self::create_depth_view(ctx, width, height);
            self.size = (width, height);
        }
    }

    fn create_depth_view(ctx: &GpuContext, width: u32, height: u32) -> wgpu::TextureView {
        let texture = ctx.device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Frame Depth Texture"),
            size: wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: DEPTH_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        texture.create_view(&wgpu::TextureViewDescriptor::default())
    }

    /// Begin the render pass for one frame, clearing color and depth.
    pub fn begin_frame<'a>(
        &'a self,
        encoder: &'a mut wgpu::CommandEncoder,
        color_view: &'a wgpu::TextureView,
        clear_color: wgpu::Color,
    ) -> wgpu::RenderPass<'a> {
        encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Box Frame Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(clear_color),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: &self.depth_view,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Clear(1.0),
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            timestamp_writes: None,
            occlusion_query_set: None,
        })
    }
}

/// Owns the GPU vertex buffer backing one on-screen box.
///
/// The buffer is created lazily on the first [`update`](Self::update) and
/// re-uploaded in place afterwards; the mesh size is fixed at
/// [`VERTEX_COUNT`] vertices, so it never needs reallocation.
#[derive(Default)]
pub struct BoxVisual {
    buffer: Option<wgpu::Buffer>,
}

impl BoxVisual {
    /// Create a visual with no buffer allocated yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Upload a freshly rebuilt mesh, allocating the buffer on first use.
    pub fn update(&mut self, ctx: &GpuContext, mesh: &CuboidMesh) {
        match &self.buffer {
            Some(buffer) => ctx.queue.write_buffer(buffer, 0, mesh.as_bytes()),
            None => {
                self.buffer = Some(ctx.device.create_buffer_init(
                    &wgpu::util::BufferInitDescriptor {
                        label: Some("Box Vertex Buffer"),
                        contents: mesh.as_bytes(),
                        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
                    },
                ));
            }
        }
    }

    /// Record the draw for this box.
    ///
    /// [`BoxPipeline::bind`](crate::BoxPipeline::bind) must already have
    /// run on the pass;
    /// [`update`](Self::update) must have run at least once for this visual.
    pub fn draw(&self, pass: &mut wgpu::RenderPass<'_>) -> Result<()> {
        let buffer = self.buffer.as_ref().ok_or(RenderError::NotUploaded)?;
        pass.set_vertex_buffer(0, buffer.slice(..));
        pass.draw(0..VERTEX_COUNT as u32, 0..1);
        Ok(())
    }

    /// Whether the vertex buffer has been uploaded.
    pub fn is_uploaded(&self) -> bool {
        self.buffer.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_visual_has_no_buffer() {
        assert!(!BoxVisual::new().is_uploaded());
    }
}
