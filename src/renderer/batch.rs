use std::ops::Range;

use super::TextureId;
use super::pipeline::SpriteVertex;

/// One queued textured quad, in window pixels.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SpriteCommand {
    pub texture: TextureId,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub uv_min: [f32; 2],
    pub uv_max: [f32; 2],
    pub tint: [f32; 4],
}

/// A run of vertices that share one texture and go out in a single draw call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DrawBatch {
    pub texture: TextureId,
    pub vertices: Range<u32>,
}

/// Turn queued commands into a vertex list plus draw batches.
///
/// Command order is draw order.  Consecutive commands on the same texture
/// are merged into one batch; switching texture starts a new one.
pub fn build_batches(commands: &[SpriteCommand]) -> (Vec<SpriteVertex>, Vec<DrawBatch>) {
    let mut vertices = Vec::with_capacity(commands.len() * 6);
    let mut batches: Vec<DrawBatch> = Vec::new();

    for cmd in commands {
        let start = vertices.len() as u32;
        let (x0, y0) = (cmd.x, cmd.y);
        let (x1, y1) = (cmd.x + cmd.width, cmd.y + cmd.height);
        let [u0, v0] = cmd.uv_min;
        let [u1, v1] = cmd.uv_max;
        let tint = cmd.tint;

        let tl = SpriteVertex { position: [x0, y0], uv: [u0, v0], tint };
        let tr = SpriteVertex { position: [x1, y0], uv: [u1, v0], tint };
        let bl = SpriteVertex { position: [x0, y1], uv: [u0, v1], tint };
        let br = SpriteVertex { position: [x1, y1], uv: [u1, v1], tint };
        vertices.extend_from_slice(&[tl, bl, tr, tr, bl, br]);
        let end = vertices.len() as u32;

        match batches.last_mut() {
            Some(batch) if batch.texture == cmd.texture => batch.vertices.end = end,
            _ => batches.push(DrawBatch { texture: cmd.texture, vertices: start..end }),
        }
    }

    (vertices, batches)
}
