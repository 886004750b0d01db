//! Owned snapshot types mirroring the native scene graph.
//!
//! This module contains the value types a [`crate::handle::SceneHandle`] view
//! produces, one submodule per domain entity:
//!
//! - `math` holds the fixed-arity numeric aggregates (vectors, colors,
//!   quaternions, matrices, planes, rays)
//! - `mesh` contains geometry: meshes, faces, bones and morph targets
//! - `material` is the ordered key/value property list of a material
//! - `animation` covers keyframes and animation channels
//! - `light` and `camera` are the scene's light and camera parameters
//! - `texture` is an embedded image, compressed or uncompressed
//! - `metadata` decodes the polymorphic metadata entries
//! - `scene` ties it all together: the node hierarchy and the global arrays
//!
//! Every type is a plain immutable value owned by the snapshot that contains
//! it; nothing here retains a pointer into native memory. Conversion functions
//! live next to the types they produce and are `unsafe` because they read
//! through pointers owned by a live native scene.

use std::borrow::Cow;
use std::fmt;
use std::os::raw::c_uint;

use crate::sys;

pub mod animation;
pub mod camera;
pub mod light;
pub mod material;
pub mod math;
pub mod mesh;
pub mod metadata;
pub mod scene;
pub mod texture;

/// Converts a native contiguous array (base pointer + element count) into an
/// owned `Vec`, preserving index order. A null base pointer is a legitimate
/// "array not present in the source file" encoding and yields an empty `Vec`.
///
/// # Safety
/// If `base` is non-null it must point to `count` valid, initialized `T`s.
pub(crate) unsafe fn from_contiguous<T, U, F>(base: *const T, count: c_uint, convert: F) -> Vec<U>
where
    F: Fn(&T) -> U,
{
    if base.is_null() {
        return Vec::new();
    }
    let elements = unsafe { std::slice::from_raw_parts(base, count as usize) };
    elements.iter().map(convert).collect()
}

/// Converts a native array of pointers to independently-allocated records,
/// preserving index order. A null array pointer yields an empty `Vec`; a null
/// *element* is skipped with a warning (the importer does not produce them,
/// but a hole must not take the whole conversion down). Skipping shifts every
/// later index, so the warning is what makes a misaligned cross-reference
/// traceable.
///
/// # Safety
/// If `base` is non-null it must point to `count` valid pointers, each either
/// null or pointing at a valid `T`.
pub(crate) unsafe fn from_ptr_array<T, U, F>(
    base: *const *const T,
    count: c_uint,
    convert: F,
) -> Vec<U>
where
    F: Fn(&T) -> U,
{
    if base.is_null() {
        return Vec::new();
    }
    let pointers = unsafe { std::slice::from_raw_parts(base, count as usize) };
    let mut out = Vec::with_capacity(pointers.len());
    for (index, ptr) in pointers.iter().enumerate() {
        match unsafe { ptr.as_ref() } {
            Some(element) => out.push(convert(element)),
            None => log::warn!("skipping null element at index {index} in pointer array"),
        }
    }
    out
}

/// Copies a native unsigned-integer array. Used for face indices and the
/// per-node mesh index lists; indices are copied as-is, never range-checked.
///
/// # Safety
/// If `base` is non-null it must point to `count` valid `c_uint`s.
pub(crate) unsafe fn from_uints(base: *const c_uint, count: c_uint) -> Vec<u32> {
    if base.is_null() {
        return Vec::new();
    }
    unsafe { std::slice::from_raw_parts(base, count as usize) }.to_vec()
}

/// Length-governed byte string copied out of a native `aiString`.
///
/// The native length field is authoritative: exactly that many bytes are
/// kept, embedded NUL bytes included. Assimp makes no encoding promises
/// (exporters write Shift-JIS or Latin-1 names in the wild), so the raw
/// bytes are preserved verbatim and UTF-8 decoding is left to the consumer
/// via [`ByteString::to_string_lossy`].
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct ByteString(Vec<u8>);

impl ByteString {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// UTF-8 view of the bytes; invalid sequences decode as U+FFFD.
    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.0)
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

impl fmt::Debug for ByteString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.to_string_lossy())
    }
}

impl fmt::Display for ByteString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_lossy())
    }
}

impl From<&str> for ByteString {
    fn from(s: &str) -> Self {
        ByteString(s.as_bytes().to_vec())
    }
}

impl From<Vec<u8>> for ByteString {
    fn from(bytes: Vec<u8>) -> Self {
        ByteString(bytes)
    }
}

impl PartialEq<&str> for ByteString {
    fn eq(&self, other: &&str) -> bool {
        self.0 == other.as_bytes()
    }
}

/// Copies a length-prefixed native string; see [`ByteString`] for the rules.
pub(crate) fn string_of(s: &sys::AiString) -> ByteString {
    ByteString(s.as_bytes().to_vec())
}
