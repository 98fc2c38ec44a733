//! Renderer that submits nothing to a GPU.
//!
//! Packs the same constant blocks a GPU backend would upload and keeps
//! counters, so the frame loop can run end to end in a plain window.

use glam::Vec4;
use prism_engine::prism::Result;
use prism_engine::prism::render::{DrawRequest, FrameConstants, Renderer};
use prism_engine::prism::scene::AABB;

#[derive(Debug, Default)]
pub struct ConsoleRenderer {
    frame: u64,
    stats_interval: u64,
    frame_draws: u32,
    frame_triangles: u32,
    bytes_uploaded: u64,
    lights: u32,
    frame_bounds: Option<AABB>,
    size: (u32, u32),
}

impl ConsoleRenderer {
    pub fn new(width: u32, height: u32, stats_interval: u64) -> Self {
        Self {
            stats_interval: stats_interval.max(1),
            size: (width, height),
            ..Default::default()
        }
    }

    pub fn bytes_uploaded(&self) -> u64 {
        self.bytes_uploaded
    }
}

impl Renderer for ConsoleRenderer {
    fn begin_frame(&mut self, frame: &FrameConstants, _clear_color: Vec4) -> Result<()> {
        self.frame_draws = 0;
        self.frame_triangles = 0;
        self.frame_bounds = None;
        self.lights = frame.directional_light_count + frame.point_light_count;
        self.bytes_uploaded += frame.as_bytes().len() as u64;
        Ok(())
    }

    fn draw(&mut self, request: &DrawRequest<'_>) -> Result<()> {
        let constants = request.constants();
        self.bytes_uploaded += constants.as_bytes().len() as u64;
        self.bytes_uploaded += request.mesh.vertex_bytes().len() as u64;
        self.frame_draws += 1;
        self.frame_triangles += request.mesh.triangle_count();
        let bounds = request.world_bounds();
        self.frame_bounds = Some(match self.frame_bounds {
            Some(acc) => acc.union(&bounds),
            None => bounds,
        });
        Ok(())
    }

    fn end_frame(&mut self) -> Result<()> {
        self.frame += 1;
        if self.frame % self.stats_interval == 0 {
            let extents = self.frame_bounds.map(|b| b.extents()).unwrap_or_default();
            log::info!(
                "frame {}: {} draws, {} triangles, {} lights, {}x{}, scene extents {:.2}x{:.2}x{:.2}",
                self.frame, self.frame_draws, self.frame_triangles, self.lights,
                self.size.0, self.size.1, extents.x, extents.y, extents.z,
            );
        }
        Ok(())
    }

    fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        log::debug!("surface resized to {}x{}", width, height);
        self.size = (width, height);
        Ok(())
    }
}
