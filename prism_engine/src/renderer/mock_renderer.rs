/// Mock Renderer for unit tests (no GPU required)
///
/// Records every call so tests can assert on call order and draw contents.
/// Individual calls can be made to fail to exercise error paths.

use glam::{Mat4, Vec4};
use crate::error::Result;
use crate::engine_bail;
use super::constants::FrameConstants;
use super::renderer::{DrawRequest, Renderer};

/// One recorded renderer call
#[derive(Debug, Clone, PartialEq)]
pub enum MockCall {
    BeginFrame { clear_color: Vec4, frame: FrameConstants },
    Draw { mesh: String, material: String, world: Mat4, view: Mat4, projection: Mat4 },
    EndFrame,
    Resize { width: u32, height: u32 },
}

#[derive(Debug, Default)]
pub struct MockRenderer {
    pub calls: Vec<MockCall>,
    /// Fail the draw with this index (counted across the renderer's lifetime)
    pub fail_draw_at: Option<usize>,
    pub fail_begin_frame: bool,
    pub fail_resize: bool,
    draws: usize,
}

impl MockRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded draws as (mesh name, material name)
    pub fn drawn(&self) -> Vec<(String, String)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                MockCall::Draw { mesh, material, .. } => Some((mesh.clone(), material.clone())),
                _ => None,
            })
            .collect()
    }

    pub fn frames_ended(&self) -> usize {
        self.calls.iter().filter(|c| matches!(c, MockCall::EndFrame)).count()
    }
}

impl Renderer for MockRenderer {
    fn begin_frame(&mut self, frame: &FrameConstants, clear_color: Vec4) -> Result<()> {
        if self.fail_begin_frame {
            engine_bail!(BackendError, "prism::MockRenderer", "begin_frame failed");
        }
        self.calls.push(MockCall::BeginFrame { clear_color, frame: *frame });
        Ok(())
    }

    fn draw(&mut self, request: &DrawRequest<'_>) -> Result<()> {
        let index = self.draws;
        self.draws += 1;
        if self.fail_draw_at == Some(index) {
            engine_bail!(BackendError, "prism::MockRenderer", "draw {} failed", index);
        }
        self.calls.push(MockCall::Draw {
            mesh: request.mesh.name().to_string(),
            material: request.material.name().to_string(),
            world: request.world,
            view: request.view,
            projection: request.projection,
        });
        Ok(())
    }

    fn end_frame(&mut self) -> Result<()> {
        self.calls.push(MockCall::EndFrame);
        Ok(())
    }

    fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        if self.fail_resize {
            engine_bail!(BackendError, "prism::MockRenderer", "resize to {}x{} failed", width, height);
        }
        self.calls.push(MockCall::Resize { width, height });
        Ok(())
    }
}
