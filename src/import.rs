//! Import entry points and native-library pass-throughs.
//!
//! The two free functions here cover the common case: import, snapshot,
//! release, all in one call. The snapshot is the only thing that outlives
//! the call. Callers that need the native scene to stay live (for
//! [`crate::handle::SceneHandle::apply_postprocessing`] or repeated views)
//! use the `SceneHandle` constructors directly.

use std::ffi::CStr;

use bitflags::bitflags;

use crate::data_structures::scene::Scene;
use crate::error::Result;
use crate::handle::SceneHandle;
use crate::sys;

bitflags! {
    /// Postprocessing steps the native library applies during or after
    /// import. Values mirror `aiPostProcessSteps`.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct PostProcess: u32 {
        const CALC_TANGENT_SPACE = 0x1;
        const JOIN_IDENTICAL_VERTICES = 0x2;
        const MAKE_LEFT_HANDED = 0x4;
        const TRIANGULATE = 0x8;
        const REMOVE_COMPONENT = 0x10;
        const GEN_NORMALS = 0x20;
        const GEN_SMOOTH_NORMALS = 0x40;
        const SPLIT_LARGE_MESHES = 0x80;
        const PRE_TRANSFORM_VERTICES = 0x100;
        const LIMIT_BONE_WEIGHTS = 0x200;
        const VALIDATE_DATA_STRUCTURE = 0x400;
        const IMPROVE_CACHE_LOCALITY = 0x800;
        const REMOVE_REDUNDANT_MATERIALS = 0x1000;
        const FIX_INFACING_NORMALS = 0x2000;
        const POPULATE_ARMATURE_DATA = 0x4000;
        const SORT_BY_PTYPE = 0x8000;
        const FIND_DEGENERATES = 0x10000;
        const FIND_INVALID_DATA = 0x20000;
        const GEN_UV_COORDS = 0x40000;
        const TRANSFORM_UV_COORDS = 0x80000;
        const FIND_INSTANCES = 0x100000;
        const OPTIMIZE_MESHES = 0x200000;
        const OPTIMIZE_GRAPH = 0x400000;
        const FLIP_UVS = 0x800000;
        const FLIP_WINDING_ORDER = 0x1000000;
        const SPLIT_BY_BONE_COUNT = 0x2000000;
        const DEBONE = 0x4000000;
        const GLOBAL_SCALE = 0x8000000;
        const EMBED_TEXTURES = 0x10000000;
        const FORCE_GEN_NORMALS = 0x20000000;
        const DROP_NORMALS = 0x40000000;
        const GEN_BOUNDING_BOXES = 0x80000000;
    }
}

/// Imports a model file and returns the fully-owned snapshot.
///
/// The native scene exists only for the duration of this call; it is released
/// as soon as the snapshot is built. Import problems ("file not found",
/// unsupported format, parse errors) come back as `Err` values carrying the
/// native diagnostic, never as a panic.
pub fn import_file(path: &str, flags: PostProcess) -> Result<Scene> {
    let mut handle = SceneHandle::from_file(path, flags)?;
    let snapshot = handle.view()?;
    handle.release()?;
    log::debug!(
        "imported {path:?}: {} meshes, {} materials",
        snapshot.meshes.len(),
        snapshot.materials.len()
    );
    Ok(snapshot)
}

/// Same contract as [`import_file`], but parses an in-memory buffer. `hint`
/// is the expected format's file extension (e.g. `"obj"`, `"gltf"`); pass
/// `""` to let the library guess from the content.
pub fn import_file_from_memory(buffer: &[u8], flags: PostProcess, hint: &str) -> Result<Scene> {
    let mut handle = SceneHandle::from_memory(buffer, flags, hint)?;
    let snapshot = handle.view()?;
    handle.release()?;
    Ok(snapshot)
}

/// Last import error reported by the native library. Only meaningful
/// immediately after a failed import.
pub(crate) fn error_string() -> String {
    let message = unsafe { sys::aiGetErrorString() };
    if message.is_null() {
        return String::new();
    }
    unsafe { CStr::from_ptr(message) }
        .to_string_lossy()
        .into_owned()
}

/// License text of the linked native library.
pub fn legal_string() -> String {
    let text = unsafe { sys::aiGetLegalString() };
    if text.is_null() {
        return String::new();
    }
    unsafe { CStr::from_ptr(text) }.to_string_lossy().into_owned()
}

pub fn version_major() -> u32 {
    unsafe { sys::aiGetVersionMajor() }
}

pub fn version_minor() -> u32 {
    unsafe { sys::aiGetVersionMinor() }
}

pub fn version_revision() -> u32 {
    unsafe { sys::aiGetVersionRevision() }
}

/// Build flags of the linked native library (`ASSIMP_CFLAGS_*` bits).
pub fn compile_flags() -> u32 {
    unsafe { sys::aiGetCompileFlags() }
}
