//! Camera parameters.

use cgmath::Vector3;

use super::{math, string_of, ByteString};
use crate::sys;

/// A camera, expressed relative to the node carrying the same name.
#[derive(Clone, Debug)]
pub struct Camera {
    pub name: ByteString,
    pub position: Vector3<f64>,
    pub up: Vector3<f64>,
    pub look_at: Vector3<f64>,
    /// Half horizontal field of view in radians.
    pub horizontal_fov: f64,
    pub clip_plane_near: f64,
    pub clip_plane_far: f64,
    /// Width over height; 0 when the source file does not say.
    pub aspect: f64,
    /// Half horizontal extent for orthographic cameras; 0 for perspective.
    pub orthographic_width: f64,
}

impl Camera {
    /// # Safety
    /// `raw` must belong to a live native scene.
    pub unsafe fn from_raw(raw: &sys::AiCamera) -> Self {
        Camera {
            name: string_of(&raw.name),
            position: math::vector3(&raw.position),
            up: math::vector3(&raw.up),
            look_at: math::vector3(&raw.look_at),
            horizontal_fov: raw.horizontal_fov as f64,
            clip_plane_near: raw.clip_plane_near as f64,
            clip_plane_far: raw.clip_plane_far as f64,
            aspect: raw.aspect as f64,
            orthographic_width: raw.orthographic_width as f64,
        }
    }
}
