//! Raw mirror of the Assimp C API.
//!
//! `#[repr(C)]` struct definitions matching the assimp 5.x headers
//! (`<assimp/scene.h>` and friends) plus the handful of `cimport.h` entry
//! points this crate calls. Everything here is layout-sensitive: field order
//! and types follow the C headers exactly, including members this crate never
//! reads (they still shift the offsets of members it does read).
//!
//! Nothing in this module interprets data. The owned snapshot types in
//! [`crate::data_structures`] carry the conversion logic.

#![allow(clippy::upper_case_acronyms)]

use std::os::raw::{c_char, c_double, c_float, c_uint, c_void};

use bytemuck::{Pod, Zeroable};

/// `MAXLEN` from `<assimp/types.h>`.
pub const AI_STRING_MAXLEN: usize = 1024;

/// `AI_MAX_NUMBER_OF_COLOR_SETS` / `AI_MAX_NUMBER_OF_TEXTURECOORDS`.
pub const AI_MAX_COLOR_SETS: usize = 8;
pub const AI_MAX_TEXCOORDS: usize = 8;

/// `HINTMAXTEXTURELEN` from `<assimp/texture.h>` (8 chars + terminator).
pub const AI_TEXTURE_HINT_LEN: usize = 9;

/// Length-prefixed byte string. The length is authoritative; `data` is only
/// incidentally NUL-terminated and may contain embedded NUL bytes.
#[repr(C)]
pub struct AiString {
    pub length: u32,
    pub data: [c_char; AI_STRING_MAXLEN],
}

impl AiString {
    /// Bytes covered by the explicit length, clamped to the backing array.
    pub fn as_bytes(&self) -> &[u8] {
        let len = (self.length as usize).min(AI_STRING_MAXLEN);
        // c_char is i8 or u8 depending on target; both reinterpret to u8.
        unsafe { std::slice::from_raw_parts(self.data.as_ptr().cast::<u8>(), len) }
    }
}

impl Default for AiString {
    fn default() -> Self {
        AiString {
            length: 0,
            data: [0; AI_STRING_MAXLEN],
        }
    }
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default)]
pub struct AiVector2D {
    pub x: c_float,
    pub y: c_float,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default)]
pub struct AiVector3D {
    pub x: c_float,
    pub y: c_float,
    pub z: c_float,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default)]
pub struct AiColor3D {
    pub r: c_float,
    pub g: c_float,
    pub b: c_float,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default)]
pub struct AiColor4D {
    pub r: c_float,
    pub g: c_float,
    pub b: c_float,
    pub a: c_float,
}

/// w first, matching `<assimp/quaternion.h>`.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default)]
pub struct AiQuaternion {
    pub w: c_float,
    pub x: c_float,
    pub y: c_float,
    pub z: c_float,
}

/// Row-major, `a1` = row 1 column 1.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default)]
pub struct AiMatrix3x3 {
    pub a1: c_float, pub a2: c_float, pub a3: c_float,
    pub b1: c_float, pub b2: c_float, pub b3: c_float,
    pub c1: c_float, pub c2: c_float, pub c3: c_float,
}

/// Row-major, `a1` = row 1 column 1.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default)]
pub struct AiMatrix4x4 {
    pub a1: c_float, pub a2: c_float, pub a3: c_float, pub a4: c_float,
    pub b1: c_float, pub b2: c_float, pub b3: c_float, pub b4: c_float,
    pub c1: c_float, pub c2: c_float, pub c3: c_float, pub c4: c_float,
    pub d1: c_float, pub d2: c_float, pub d3: c_float, pub d4: c_float,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default)]
pub struct AiPlane {
    pub a: c_float,
    pub b: c_float,
    pub c: c_float,
    pub d: c_float,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default)]
pub struct AiRay {
    pub pos: AiVector3D,
    pub dir: AiVector3D,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default)]
pub struct AiAABB {
    pub min: AiVector3D,
    pub max: AiVector3D,
}

/// One packed pixel of an uncompressed embedded texture, BGRA byte order.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, Pod, Zeroable)]
pub struct AiTexel {
    pub b: u8,
    pub g: u8,
    pub r: u8,
    pub a: u8,
}

/* Mesh */

#[repr(C)]
pub struct AiFace {
    pub num_indices: c_uint,
    pub indices: *mut c_uint,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default)]
pub struct AiVertexWeight {
    pub vertex_id: c_uint,
    pub weight: c_float,
}

#[repr(C)]
pub struct AiBone {
    pub name: AiString,
    pub num_weights: c_uint,
    // Present unless assimp was built with ASSIMP_BUILD_NO_ARMATUREPOPULATE_PROCESS,
    // which no packaged build sets.
    pub armature: *mut AiNode,
    pub node: *mut AiNode,
    pub weights: *mut AiVertexWeight,
    pub offset_matrix: AiMatrix4x4,
}

#[repr(C)]
pub struct AiAnimMesh {
    pub name: AiString,
    pub vertices: *mut AiVector3D,
    pub normals: *mut AiVector3D,
    pub tangents: *mut AiVector3D,
    pub bitangents: *mut AiVector3D,
    pub colors: [*mut AiColor4D; AI_MAX_COLOR_SETS],
    pub texture_coords: [*mut AiVector3D; AI_MAX_TEXCOORDS],
    pub num_vertices: c_uint,
    pub weight: c_float,
}

#[repr(C)]
pub struct AiMesh {
    pub primitive_types: c_uint,
    pub num_vertices: c_uint,
    pub num_faces: c_uint,
    pub vertices: *mut AiVector3D,
    pub normals: *mut AiVector3D,
    pub tangents: *mut AiVector3D,
    pub bitangents: *mut AiVector3D,
    pub colors: [*mut AiColor4D; AI_MAX_COLOR_SETS],
    pub texture_coords: [*mut AiVector3D; AI_MAX_TEXCOORDS],
    pub num_uv_components: [c_uint; AI_MAX_TEXCOORDS],
    pub faces: *mut AiFace,
    pub num_bones: c_uint,
    pub bones: *mut *mut AiBone,
    pub material_index: c_uint,
    pub name: AiString,
    pub num_anim_meshes: c_uint,
    pub anim_meshes: *mut *mut AiAnimMesh,
    pub method: c_uint,
    pub aabb: AiAABB,
    pub texture_coords_names: *mut *mut AiString,
}

/* Material */

#[repr(C)]
pub struct AiMaterialProperty {
    pub key: AiString,
    pub semantic: c_uint,
    pub index: c_uint,
    pub data_length: c_uint,
    pub property_type: c_uint,
    pub data: *mut c_char,
}

#[repr(C)]
pub struct AiMaterial {
    pub properties: *mut *mut AiMaterialProperty,
    pub num_properties: c_uint,
    pub num_allocated: c_uint,
}

/* Animation */

#[repr(C)]
#[derive(Clone, Copy, Debug, Default)]
pub struct AiVectorKey {
    pub time: c_double,
    pub value: AiVector3D,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default)]
pub struct AiQuatKey {
    pub time: c_double,
    pub value: AiQuaternion,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default)]
pub struct AiMeshKey {
    pub time: c_double,
    pub value: c_uint,
}

#[repr(C)]
pub struct AiNodeAnim {
    pub node_name: AiString,
    pub num_position_keys: c_uint,
    pub position_keys: *mut AiVectorKey,
    pub num_rotation_keys: c_uint,
    pub rotation_keys: *mut AiQuatKey,
    pub num_scaling_keys: c_uint,
    pub scaling_keys: *mut AiVectorKey,
    pub pre_state: c_uint,
    pub post_state: c_uint,
}

#[repr(C)]
pub struct AiMeshAnim {
    pub name: AiString,
    pub num_keys: c_uint,
    pub keys: *mut AiMeshKey,
}

/// Only ever handled through pointers; morph-target channels are not
/// converted, so the layout stays opaque.
#[repr(C)]
pub struct AiMeshMorphAnim {
    _private: [u8; 0],
}

#[repr(C)]
pub struct AiAnimation {
    pub name: AiString,
    pub duration: c_double,
    pub ticks_per_second: c_double,
    pub num_channels: c_uint,
    pub channels: *mut *mut AiNodeAnim,
    pub num_mesh_channels: c_uint,
    pub mesh_channels: *mut *mut AiMeshAnim,
    pub num_morph_mesh_channels: c_uint,
    pub morph_mesh_channels: *mut *mut AiMeshMorphAnim,
}

/* Camera & light */

#[repr(C)]
pub struct AiCamera {
    pub name: AiString,
    pub position: AiVector3D,
    pub up: AiVector3D,
    pub look_at: AiVector3D,
    pub horizontal_fov: c_float,
    pub clip_plane_near: c_float,
    pub clip_plane_far: c_float,
    pub aspect: c_float,
    pub orthographic_width: c_float,
}

#[repr(C)]
pub struct AiLight {
    pub name: AiString,
    pub light_type: c_uint,
    pub position: AiVector3D,
    pub direction: AiVector3D,
    pub up: AiVector3D,
    pub attenuation_constant: c_float,
    pub attenuation_linear: c_float,
    pub attenuation_quadratic: c_float,
    pub color_diffuse: AiColor3D,
    pub color_specular: AiColor3D,
    pub color_ambient: AiColor3D,
    pub angle_inner_cone: c_float,
    pub angle_outer_cone: c_float,
    pub size: AiVector2D,
}

/* Texture */

#[repr(C)]
pub struct AiTexture {
    pub width: c_uint,
    pub height: c_uint,
    pub format_hint: [c_char; AI_TEXTURE_HINT_LEN],
    pub data: *mut AiTexel,
    pub filename: AiString,
}

/* Metadata */

pub const AI_BOOL: c_uint = 0;
pub const AI_INT32: c_uint = 1;
pub const AI_UINT64: c_uint = 2;
pub const AI_FLOAT: c_uint = 3;
pub const AI_DOUBLE: c_uint = 4;
pub const AI_AISTRING: c_uint = 5;
pub const AI_AIVECTOR3D: c_uint = 6;

#[repr(C)]
pub struct AiMetadataEntry {
    pub entry_type: c_uint,
    pub data: *mut c_void,
}

#[repr(C)]
pub struct AiMetadata {
    pub num_properties: c_uint,
    pub keys: *mut AiString,
    pub values: *mut AiMetadataEntry,
}

/* Node & scene */

#[repr(C)]
pub struct AiNode {
    pub name: AiString,
    pub transformation: AiMatrix4x4,
    pub parent: *mut AiNode,
    pub num_children: c_uint,
    pub children: *mut *mut AiNode,
    pub num_meshes: c_uint,
    pub meshes: *mut c_uint,
    pub metadata: *mut AiMetadata,
}

/// Skeletons (assimp >= 5.2.5) are carried for layout completeness only.
#[repr(C)]
pub struct AiSkeleton {
    _private: [u8; 0],
}

#[repr(C)]
pub struct AiScene {
    pub flags: c_uint,
    pub root_node: *mut AiNode,
    pub num_meshes: c_uint,
    pub meshes: *mut *mut AiMesh,
    pub num_materials: c_uint,
    pub materials: *mut *mut AiMaterial,
    pub num_animations: c_uint,
    pub animations: *mut *mut AiAnimation,
    pub num_textures: c_uint,
    pub textures: *mut *mut AiTexture,
    pub num_lights: c_uint,
    pub lights: *mut *mut AiLight,
    pub num_cameras: c_uint,
    pub cameras: *mut *mut AiCamera,
    pub metadata: *mut AiMetadata,
    pub name: AiString,
    pub num_skeletons: c_uint,
    pub skeletons: *mut *mut AiSkeleton,
    pub private: *mut c_char,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default)]
pub struct AiMemoryInfo {
    pub textures: c_uint,
    pub materials: c_uint,
    pub meshes: c_uint,
    pub nodes: c_uint,
    pub animations: c_uint,
    pub cameras: c_uint,
    pub lights: c_uint,
    pub total: c_uint,
}

unsafe extern "C" {
    pub fn aiImportFile(file: *const c_char, flags: c_uint) -> *const AiScene;
    pub fn aiImportFileFromMemory(
        buffer: *const c_char,
        length: c_uint,
        flags: c_uint,
        hint: *const c_char,
    ) -> *const AiScene;
    pub fn aiApplyPostProcessing(scene: *const AiScene, flags: c_uint) -> *const AiScene;
    pub fn aiReleaseImport(scene: *const AiScene);
    pub fn aiGetErrorString() -> *const c_char;
    pub fn aiGetMemoryRequirements(scene: *const AiScene, info: *mut AiMemoryInfo);
    pub fn aiGetLegalString() -> *const c_char;
    pub fn aiGetVersionMajor() -> c_uint;
    pub fn aiGetVersionMinor() -> c_uint;
    pub fn aiGetVersionRevision() -> c_uint;
    pub fn aiGetCompileFlags() -> c_uint;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::{align_of, size_of};

    // Key stride/alignment facts the contiguous-array converters depend on.
    #[test]
    fn key_layouts_match_c() {
        assert_eq!(size_of::<AiVectorKey>(), 24);
        assert_eq!(size_of::<AiQuatKey>(), 24);
        assert_eq!(size_of::<AiMeshKey>(), 16);
        assert_eq!(align_of::<AiVectorKey>(), 8);
    }

    #[test]
    fn string_layout_matches_c() {
        assert_eq!(size_of::<AiString>(), 4 + AI_STRING_MAXLEN);
        assert_eq!(size_of::<AiTexel>(), 4);
        assert_eq!(size_of::<AiVertexWeight>(), 8);
    }
}
