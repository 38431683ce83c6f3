//! Renders a small scene of isometric boxes to an offscreen target, reads the
//! pixels back and reports coverage.
//!
//! Run with: cargo run --example render_scene

use isoviz_geom::Scene;
use isoviz_render::{BoxPipeline, BoxVisual, FrameTarget, GpuContext, ViewUniforms};

const WIDTH: u32 = 256;
const HEIGHT: u32 = 256;

const SCENE_JSON: &str = r#"{
  "boxes": [
    {
      "id": 0,
      "rect": {"x": 20, "y": 20, "width": 120, "height": 60},
      "tag": {"color": {"r": 0.12, "g": 0.56, "b": 1.0, "a": 1.0}, "height": 40, "bottom": 0}
    },
    {
      "id": 1,
      "rect": {"x": 100, "y": 60, "width": 100, "height": 80},
      "tag": {"color": {"r": 0.93, "g": 0.93, "b": 0.93, "a": 1.0}, "height": 25, "bottom": 10}
    },
    {
      "id": 2,
      "rect": {"x": 60, "y": 140, "width": 140, "height": 50}
    }
  ]
}"#;

/// Orthographic world-to-clip transform with wgpu's [0, 1] depth range.
/// Column-major, matching WGSL mat4x4 layout.
fn ortho(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> ViewUniforms {
    ViewUniforms {
        view_proj: [
            [2.0 / (right - left), 0.0, 0.0, 0.0],
            [0.0, 2.0 / (top - bottom), 0.0, 0.0],
            [0.0, 0.0, 1.0 / (far - near), 0.0],
            [
                -(right + left) / (right - left),
                -(top + bottom) / (top - bottom),
                -near / (far - near),
                1.0,
            ],
        ],
    }
}

fn main() {
    tracing_subscriber::fmt::init();

    let scene = Scene::from_json_str(SCENE_JSON).expect("Failed to parse scene");
    println!("Loaded scene with {} boxes", scene.boxes.len());

    let ctx = pollster::block_on(GpuContext::new()).expect("Failed to create GPU context");

    let color_format = wgpu::TextureFormat::Rgba8Unorm;
    let color_texture = ctx.device.create_texture(&wgpu::TextureDescriptor {
        label: Some("Offscreen Color Texture"),
        size: wgpu::Extent3d {
            width: WIDTH,
            height: HEIGHT,
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: color_format,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::COPY_SRC,
        view_formats: &[],
    });
    let color_view = color_texture.create_view(&wgpu::TextureViewDescriptor::default());

    let pipeline = BoxPipeline::new(&ctx, color_format).expect("Failed to create pipeline");
    // Boxes extrude toward negative z, so near maps to the most negative
    // elevation the scene can reach.
    pipeline.set_view(&ctx, &ortho(0.0, 256.0, 256.0, 0.0, -60.0, 60.0));

    let target = FrameTarget::new(&ctx, WIDTH, HEIGHT);

    // One visual per box; rebuild and upload each mesh as a redraw would.
    let mut visuals: Vec<BoxVisual> = scene.boxes.iter().map(|_| BoxVisual::new()).collect();
    for (visual, b) in visuals.iter_mut().zip(&scene.boxes) {
        visual.update(&ctx, &b.mesh());
    }

    let mut encoder = ctx
        .device
        .create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("Frame Encoder"),
        });
    {
        let mut pass = target.begin_frame(&mut encoder, &color_view, wgpu::Color::BLACK);
        pipeline.bind(&mut pass);
        for visual in &visuals {
            visual.draw(&mut pass).expect("Draw failed");
        }
    }

    // Read the frame back and count covered pixels.
    let bytes_per_row = WIDTH * 4;
    let readback = ctx.device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("Readback Buffer"),
        size: (bytes_per_row * HEIGHT) as u64,
        usage: wgpu::BufferUsages::MAP_READ | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    encoder.copy_texture_to_buffer(
        wgpu::TexelCopyTextureInfo {
            texture: &color_texture,
            mip_level: 0,
            origin: wgpu::Origin3d::ZERO,
            aspect: wgpu::TextureAspect::All,
        },
        wgpu::TexelCopyBufferInfo {
            buffer: &readback,
            layout: wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(bytes_per_row),
                rows_per_image: Some(HEIGHT),
            },
        },
        wgpu::Extent3d {
            width: WIDTH,
            height: HEIGHT,
            depth_or_array_layers: 1,
        },
    );
    ctx.queue.submit(Some(encoder.finish()));

    let slice = readback.slice(..);
    let (tx, rx) = std::sync::mpsc::channel();
    slice.map_async(wgpu::MapMode::Read, move |result| {
        tx.send(result).unwrap();
    });
    ctx.device.poll(wgpu::Maintain::Wait);
    rx.recv().expect("Readback channel closed").expect("Readback failed");

    let data = slice.get_mapped_range();
    let covered = data
        .chunks_exact(4)
        .filter(|px| px[0] > 0 || px[1] > 0 || px[2] > 0)
        .count();
    drop(data);
    readback.unmap();

    let total = (WIDTH * HEIGHT) as usize;
    println!(
        "Rendered {} boxes: {}/{} pixels covered ({:.1}%)",
        scene.boxes.len(),
        covered,
        total,
        100.0 * covered as f64 / total as f64
    );
}
