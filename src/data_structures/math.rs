//! Fixed-arity numeric aggregates.
//!
//! Native numeric structs are single-precision; the snapshot promotes every
//! component to `f64` (plain widening, no rounding) and reuses cgmath's
//! containers where one exists. Component count and order always match the
//! native layout.

use cgmath::{Matrix3, Matrix4, Quaternion, Vector2, Vector3, Vector4};

use crate::sys;

/// RGB color, components in declaration order r, g, b.
pub type Color3 = Vector3<f64>;
/// RGBA color, components in declaration order r, g, b, a.
pub type Color4 = Vector4<f64>;

/// Plane in Hessian normal form: `a*x + b*y + c*z + d = 0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plane {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

/// Ray as origin plus direction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub position: Vector3<f64>,
    pub direction: Vector3<f64>,
}

/// Axis-aligned bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: Vector3<f64>,
    pub max: Vector3<f64>,
}

pub fn vector2(v: &sys::AiVector2D) -> Vector2<f64> {
    Vector2::new(v.x as f64, v.y as f64)
}

pub fn vector3(v: &sys::AiVector3D) -> Vector3<f64> {
    Vector3::new(v.x as f64, v.y as f64, v.z as f64)
}

pub fn color3(c: &sys::AiColor3D) -> Color3 {
    Vector3::new(c.r as f64, c.g as f64, c.b as f64)
}

pub fn color4(c: &sys::AiColor4D) -> Color4 {
    Vector4::new(c.r as f64, c.g as f64, c.b as f64, c.a as f64)
}

pub fn quaternion(q: &sys::AiQuaternion) -> Quaternion<f64> {
    // Native order is w, x, y, z and so is cgmath's constructor.
    Quaternion::new(q.w as f64, q.x as f64, q.y as f64, q.z as f64)
}

/// Native matrices are row-major; cgmath constructors take columns.
pub fn matrix3(m: &sys::AiMatrix3x3) -> Matrix3<f64> {
    #[rustfmt::skip]
    let out = Matrix3::new(
        m.a1 as f64, m.b1 as f64, m.c1 as f64,
        m.a2 as f64, m.b2 as f64, m.c2 as f64,
        m.a3 as f64, m.b3 as f64, m.c3 as f64,
    );
    out
}

pub fn matrix4(m: &sys::AiMatrix4x4) -> Matrix4<f64> {
    #[rustfmt::skip]
    let out = Matrix4::new(
        m.a1 as f64, m.b1 as f64, m.c1 as f64, m.d1 as f64,
        m.a2 as f64, m.b2 as f64, m.c2 as f64, m.d2 as f64,
        m.a3 as f64, m.b3 as f64, m.c3 as f64, m.d3 as f64,
        m.a4 as f64, m.b4 as f64, m.c4 as f64, m.d4 as f64,
    );
    out
}

pub fn plane(p: &sys::AiPlane) -> Plane {
    Plane {
        a: p.a as f64,
        b: p.b as f64,
        c: p.c as f64,
        d: p.d as f64,
    }
}

pub fn ray(r: &sys::AiRay) -> Ray {
    Ray {
        position: vector3(&r.pos),
        direction: vector3(&r.dir),
    }
}

pub fn aabb(b: &sys::AiAABB) -> Aabb {
    Aabb {
        min: vector3(&b.min),
        max: vector3(&b.max),
    }
}
