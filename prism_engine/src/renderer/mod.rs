/// Renderer module - the rendering seam and the constant blocks it consumes

pub mod renderer;
pub mod constants;
#[cfg(test)]
pub mod mock_renderer;

pub use renderer::*;
pub use constants::*;
