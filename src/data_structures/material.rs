//! Materials as ordered property lists.
//!
//! Assimp models a material as a flat list of key/value properties; the
//! snapshot keeps that shape instead of decoding well-known keys. Payload
//! bytes are copied verbatim; how to interpret them is dictated by
//! [`PropertyTypeInfo`] and is left to the consumer.

use std::os::raw::c_uint;

use super::{from_ptr_array, string_of, ByteString};
use crate::sys;

/// Storage format of a property payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PropertyTypeInfo {
    /// Array of `f32`.
    Float,
    /// Array of `f64`.
    Double,
    /// A length-prefixed string (`aiString` layout).
    Str,
    /// Array of `i32`.
    Integer,
    /// Untyped binary buffer.
    Buffer,
    /// A type code this crate does not know. Carried through, not rejected,
    /// so newer native libraries keep working.
    Unknown(u32),
}

impl PropertyTypeInfo {
    fn from_raw(raw: c_uint) -> Self {
        match raw {
            0x1 => PropertyTypeInfo::Float,
            0x2 => PropertyTypeInfo::Double,
            0x3 => PropertyTypeInfo::Str,
            0x4 => PropertyTypeInfo::Integer,
            0x5 => PropertyTypeInfo::Buffer,
            other => PropertyTypeInfo::Unknown(other),
        }
    }
}

/// One key/value attribute of a material.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MaterialProperty {
    pub key: ByteString,
    /// Texture usage semantic (diffuse, normal, ...) for texture-bound
    /// properties; 0 for non-texture properties.
    pub semantic: u32,
    /// Index inside the semantic layer, e.g. which diffuse texture.
    pub index: u32,
    pub type_info: PropertyTypeInfo,
    /// Raw payload, exactly `mDataLength` bytes.
    pub data: Vec<u8>,
}

impl MaterialProperty {
    /// # Safety
    /// `raw` must belong to a live native scene.
    pub unsafe fn from_raw(raw: &sys::AiMaterialProperty) -> Self {
        let data = if raw.data.is_null() {
            Vec::new()
        } else {
            unsafe { std::slice::from_raw_parts(raw.data.cast::<u8>(), raw.data_length as usize) }
                .to_vec()
        };
        MaterialProperty {
            key: string_of(&raw.key),
            semantic: raw.semantic,
            index: raw.index,
            type_info: PropertyTypeInfo::from_raw(raw.property_type),
            data,
        }
    }
}

/// A material: its properties in native order. May be empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Material {
    pub properties: Vec<MaterialProperty>,
}

impl Material {
    /// # Safety
    /// `raw` must belong to a live native scene.
    pub unsafe fn from_raw(raw: &sys::AiMaterial) -> Self {
        Material {
            properties: unsafe {
                from_ptr_array(raw.properties.cast(), raw.num_properties, |p| {
                    MaterialProperty::from_raw(p)
                })
            },
        }
    }
}
