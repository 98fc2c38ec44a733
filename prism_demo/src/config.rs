//! Demo settings.

use glam::{Vec3, Vec4};

#[derive(Debug, Clone)]
pub struct DemoConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub clear_color: Vec4,
    pub camera_position: Vec3,
    /// Radians per pixel per second while the look button is held
    pub look_sensitivity: f32,
    /// Rotation applied to every shape, radians per second around Z
    pub spin_speed: f32,
    /// Frames between two stats lines in the log
    pub stats_interval: u64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            title: "Prism Demo".to_string(),
            width: 1280,
            height: 720,
            clear_color: Vec4::new(0.4, 0.6, 0.75, 0.0),
            camera_position: Vec3::new(0.0, 0.0, -5.0),
            look_sensitivity: 2.0,
            spin_speed: 1.0,
            stats_interval: 300,
        }
    }
}

impl DemoConfig {
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }
}
