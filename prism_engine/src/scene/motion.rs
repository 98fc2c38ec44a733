/// Motion rules - per-entity scripted behavior applied once per frame.
///
/// Rules only move/rotate the transform; the frame driver refreshes the
/// world matrix right after.

use std::f32::consts::TAU;
use glam::Vec3;
use crate::frame::FrameTime;
use super::aabb::AABB;
use super::transform::Transform;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Motion {
    /// Never moves on its own
    #[default]
    Static,
    /// Constant rotation, radians per second around (X, Y, Z)
    Spin { angular_velocity: Vec3 },
    /// Sine offset along `axis`: `amplitude * sin(2π * phase)`.
    ///
    /// `phase` counts cycles and stays in [0, 1); it advances by
    /// `frequency * delta` each frame, independent of total run time.
    Oscillate { axis: Vec3, amplitude: f32, frequency: f32, phase: f32 },
    /// Straight-line movement reflected off the walls of `bounds`
    Bounce { velocity: Vec3, bounds: AABB },
}

impl Motion {
    pub fn spin(x: f32, y: f32, z: f32) -> Self {
        Motion::Spin { angular_velocity: Vec3::new(x, y, z) }
    }

    /// Oscillation starting at its rest position
    pub fn oscillate(axis: Vec3, amplitude: f32, frequency: f32) -> Self {
        Motion::Oscillate { axis, amplitude, frequency, phase: 0.0 }
    }

    /// Advance the rule by one frame.
    pub fn apply(&mut self, transform: &mut Transform, time: FrameTime) {
        match self {
            Motion::Static => {}
            Motion::Spin { angular_velocity } => {
                let r = *angular_velocity * time.delta;
                transform.rotate(r.x, r.y, r.z);
            }
            Motion::Oscillate { axis, amplitude, frequency, phase } => {
                let next = (*phase + *frequency * time.delta).rem_euclid(1.0);
                let d = *axis * (*amplitude * ((TAU * next).sin() - (TAU * *phase).sin()));
                *phase = next;
                transform.move_absolute(d.x, d.y, d.z);
            }
            Motion::Bounce { velocity, bounds } => {
                let mut position = transform.position() + *velocity * time.delta;
                for axis in 0..3 {
                    if position[axis] < bounds.min[axis] {
                        position[axis] = bounds.min[axis];
                        velocity[axis] = velocity[axis].abs();
                    } else if position[axis] > bounds.max[axis] {
                        position[axis] = bounds.max[axis];
                        velocity[axis] = -velocity[axis].abs();
                    }
                }
                transform.set_position(position);
            }
        }
    }
}

#[cfg(test)]
#[path = "motion_tests.rs"]
mod tests;
