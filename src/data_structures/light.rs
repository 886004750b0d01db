//! Light sources.

use cgmath::{Vector2, Vector3};

use super::{math, math::Color3, string_of, ByteString};
use crate::sys;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LightSourceType {
    Undefined,
    Directional,
    Point,
    Spot,
    Ambient,
    Area,
}

impl LightSourceType {
    fn from_raw(raw: u32) -> Self {
        match raw {
            1 => LightSourceType::Directional,
            2 => LightSourceType::Point,
            3 => LightSourceType::Spot,
            4 => LightSourceType::Ambient,
            5 => LightSourceType::Area,
            _ => LightSourceType::Undefined,
        }
    }
}

/// A light source. Which fields are meaningful depends on `light_type`
/// (a directional light has no position, a point light no direction, ...);
/// the irrelevant ones are whatever the importer left there.
#[derive(Clone, Debug)]
pub struct Light {
    pub name: ByteString,
    pub light_type: LightSourceType,
    pub position: Vector3<f64>,
    pub direction: Vector3<f64>,
    pub up: Vector3<f64>,
    pub attenuation_constant: f64,
    pub attenuation_linear: f64,
    pub attenuation_quadratic: f64,
    pub color_diffuse: Color3,
    pub color_specular: Color3,
    pub color_ambient: Color3,
    /// Spot cone angles in radians; outer >= inner.
    pub angle_inner_cone: f64,
    pub angle_outer_cone: f64,
    /// Extent of an area light.
    pub size: Vector2<f64>,
}

impl Light {
    /// # Safety
    /// `raw` must belong to a live native scene.
    pub unsafe fn from_raw(raw: &sys::AiLight) -> Self {
        Light {
            name: string_of(&raw.name),
            light_type: LightSourceType::from_raw(raw.light_type),
            position: math::vector3(&raw.position),
            direction: math::vector3(&raw.direction),
            up: math::vector3(&raw.up),
            attenuation_constant: raw.attenuation_constant as f64,
            attenuation_linear: raw.attenuation_linear as f64,
            attenuation_quadratic: raw.attenuation_quadratic as f64,
            color_diffuse: math::color3(&raw.color_diffuse),
            color_specular: math::color3(&raw.color_specular),
            color_ambient: math::color3(&raw.color_ambient),
            angle_inner_cone: raw.angle_inner_cone as f64,
            angle_outer_cone: raw.angle_outer_cone as f64,
            size: math::vector2(&raw.size),
        }
    }
}
