/// Frame driver - the per-frame state machine.
///
/// Each `run_frame` goes Updating -> Rendering -> Updating:
///
/// - **Updating**: read the quit key, apply a pending resize to the camera
///   and the renderer, advance every entity (motion rule, then world
///   matrix) in insertion order, update the camera from input.
/// - **Rendering**: `begin_frame` with the per-frame constants, one `draw`
///   per entity in insertion order, `end_frame` (present).
///
/// A quit request still finishes the current frame; the caller stops the
/// loop when `FrameOutcome::Quit` comes back. A renderer error aborts the
/// frame and the driver returns to Updating. Quit is latched: if the frame
/// that saw it fails, the error is returned and every later `run_frame`
/// returns `FrameOutcome::Quit` without running.

use crate::error::Result;
use crate::input::{InputSource, Keys};
use crate::renderer::{DrawRequest, FrameConstants, Renderer};
use crate::scene::Scene;
use crate::{engine_debug, engine_info, engine_trace, engine_warn};
use super::frame_timer::FrameTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FramePhase {
    Updating,
    Rendering,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Continue,
    Quit,
}

/// Counters kept across frames
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameStats {
    /// Frames that reached `end_frame`
    pub frames_rendered: u64,
    /// Draw calls submitted over all frames
    pub draws_submitted: u64,
    /// Draw calls of the last completed frame
    pub last_frame_draws: u32,
    /// Delta of the last frame, seconds
    pub last_delta: f32,
}

#[derive(Debug)]
pub struct FrameDriver {
    phase: FramePhase,
    pending_resize: Option<(u32, u32)>,
    quit_requested: bool,
    stats: FrameStats,
}

impl FrameDriver {
    pub fn new() -> Self {
        Self {
            phase: FramePhase::Updating,
            pending_resize: None,
            quit_requested: false,
            stats: FrameStats::default(),
        }
    }

    pub fn phase(&self) -> FramePhase {
        self.phase
    }

    pub fn stats(&self) -> &FrameStats {
        &self.stats
    }

    pub fn pending_resize(&self) -> Option<(u32, u32)> {
        self.pending_resize
    }

    /// True once the quit key has been seen, even if that frame failed.
    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// Record a new output size, applied at the start of the next frame.
    ///
    /// A zero dimension (minimized window) is ignored and returns false.
    /// Several notifications before a frame collapse into the last one.
    pub fn notify_resize(&mut self, width: u32, height: u32) -> bool {
        if width == 0 || height == 0 {
            engine_debug!("prism::FrameDriver", "Ignoring resize to {}x{}", width, height);
            return false;
        }
        self.pending_resize = Some((width, height));
        true
    }

    /// Run one complete frame.
    pub fn run_frame(
        &mut self,
        scene: &mut Scene,
        renderer: &mut dyn Renderer,
        input: &dyn InputSource,
        time: FrameTime,
    ) -> Result<FrameOutcome> {
        if self.quit_requested {
            return Ok(FrameOutcome::Quit);
        }

        let result = match self.update(scene, renderer, input, time) {
            Ok(outcome) => self.render(scene, renderer).map(|()| outcome),
            Err(e) => Err(e),
        };
        self.phase = FramePhase::Updating;

        if let Err(e) = &result {
            engine_warn!("prism::FrameDriver", "Frame aborted: {}", e);
        }
        result
    }

    fn update(
        &mut self,
        scene: &mut Scene,
        renderer: &mut dyn Renderer,
        input: &dyn InputSource,
        time: FrameTime,
    ) -> Result<FrameOutcome> {
        self.phase = FramePhase::Updating;

        let outcome = if input.is_key_down(Keys::QUIT) {
            engine_info!("prism::FrameDriver", "Quit requested");
            self.quit_requested = true;
            FrameOutcome::Quit
        } else {
            FrameOutcome::Continue
        };

        // Kept pending until both sides accept it, so a failure is retried
        if let Some((width, height)) = self.pending_resize {
            scene.camera_mut().update_projection_matrix(width as f32 / height as f32)?;
            renderer.resize(width, height)?;
            self.pending_resize = None;
            engine_debug!("prism::FrameDriver", "Resized to {}x{}", width, height);
        }

        for (_, entity) in scene.entities_mut() {
            entity.update(time);
        }
        scene.camera_mut().update(time.delta, input);

        self.stats.last_delta = time.delta;
        Ok(outcome)
    }

    fn render(&mut self, scene: &Scene, renderer: &mut dyn Renderer) -> Result<()> {
        self.phase = FramePhase::Rendering;

        let camera = scene.camera();
        let frame = FrameConstants::new(camera, scene.lighting());
        renderer.begin_frame(&frame, scene.clear_color())?;

        let mut draws = 0u32;
        for (_, entity) in scene.entities() {
            let request = DrawRequest {
                world: *entity.transform().world_matrix(),
                view: *camera.view(),
                projection: *camera.projection(),
                mesh: entity.mesh(),
                material: entity.material(),
            };
            renderer.draw(&request)?;
            draws += 1;
        }

        renderer.end_frame()?;

        self.stats.frames_rendered += 1;
        self.stats.draws_submitted += draws as u64;
        self.stats.last_frame_draws = draws;
        engine_trace!("prism::FrameDriver", "Frame {} rendered ({} draws)",
            self.stats.frames_rendered, draws);
        Ok(())
    }
}

impl Default for FrameDriver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "frame_driver_tests.rs"]
mod tests;
