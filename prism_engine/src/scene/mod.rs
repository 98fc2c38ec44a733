//! Scene module
//!
//! Transforms, entities, motion rules and the scene container that the
//! frame driver updates and renders.

mod aabb;
mod transform;
mod motion;
mod entity;
mod scene;

pub use aabb::AABB;
pub use transform::{wrap_angle, Transform};
pub use motion::Motion;
pub use entity::Entity;
pub use scene::{EntityKey, Scene};
