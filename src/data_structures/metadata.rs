//! Polymorphic metadata entries.
//!
//! Metadata is a parallel pair of arrays (keys, tagged values). The value
//! discriminant set grows with the native library, so an unknown tag decodes
//! to `None` instead of failing the whole conversion; the rest of the scene
//! stays usable.

use cgmath::Vector3;

use super::{math, string_of, ByteString};
use crate::sys;

/// A decoded metadata value.
#[derive(Clone, Debug, PartialEq)]
pub enum MetadataValue {
    Bool(bool),
    Int32(i32),
    UInt64(u64),
    /// Native `float`, widened.
    Float(f64),
    Double(f64),
    Str(ByteString),
    Vector3D(Vector3<f64>),
}

/// Key/value metadata attached to a scene or node. Values that could not be
/// decoded (unknown tag, null payload) are `None`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Metadata {
    pub entries: Vec<(ByteString, Option<MetadataValue>)>,
}

/// Decodes one tagged entry. Null entry data or an unrecognized tag yields
/// `None` by policy, not by accident.
///
/// # Safety
/// `entry.data`, when non-null, must point at a value of the type named by
/// `entry.entry_type`.
pub unsafe fn entry_value(entry: &sys::AiMetadataEntry) -> Option<MetadataValue> {
    if entry.data.is_null() {
        return None;
    }
    // Unaligned reads throughout: the payload allocation is the native
    // library's and its alignment is not part of the C API contract.
    unsafe {
        match entry.entry_type {
            // Stored as a one-byte C++ bool; read the byte, don't trust it to be 0/1.
            sys::AI_BOOL => Some(MetadataValue::Bool(*entry.data.cast::<u8>() != 0)),
            sys::AI_INT32 => Some(MetadataValue::Int32(entry.data.cast::<i32>().read_unaligned())),
            sys::AI_UINT64 => Some(MetadataValue::UInt64(
                entry.data.cast::<u64>().read_unaligned(),
            )),
            sys::AI_FLOAT => Some(MetadataValue::Float(
                entry.data.cast::<f32>().read_unaligned() as f64,
            )),
            sys::AI_DOUBLE => Some(MetadataValue::Double(
                entry.data.cast::<f64>().read_unaligned(),
            )),
            sys::AI_AISTRING => {
                let s = entry.data.cast::<sys::AiString>().read_unaligned();
                Some(MetadataValue::Str(string_of(&s)))
            }
            sys::AI_AIVECTOR3D => {
                let v = entry.data.cast::<sys::AiVector3D>().read_unaligned();
                Some(MetadataValue::Vector3D(math::vector3(&v)))
            }
            other => {
                log::warn!("skipping metadata entry with unknown type tag {other}");
                None
            }
        }
    }
}

impl Metadata {
    /// # Safety
    /// `raw` must belong to a live native scene.
    pub unsafe fn from_raw(raw: &sys::AiMetadata) -> Self {
        let count = raw.num_properties as usize;
        if raw.keys.is_null() || raw.values.is_null() {
            return Metadata::default();
        }
        let keys = unsafe { std::slice::from_raw_parts(raw.keys, count) };
        let values = unsafe { std::slice::from_raw_parts(raw.values, count) };
        Metadata {
            entries: keys
                .iter()
                .zip(values)
                .map(|(key, value)| (string_of(key), unsafe { entry_value(value) }))
                .collect(),
        }
    }
}
