//! Camera module - viewer transform, view and projection derivation.
//!
//! Cameras are owned by the scene; the frame driver updates them once per
//! frame before any draw is submitted.

mod camera;
mod camera_config;

pub use camera::Camera;
pub use camera_config::CameraConfig;
