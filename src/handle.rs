//! Ownership of the native scene across the FFI boundary.
//!
//! The native importer hands out a heap-allocated scene graph that must be
//! given back to it exactly once. [`SceneHandle`] is the only place in this
//! crate that holds such a pointer: it is either `Live` (pointer valid) or
//! `Released` (pointer cleared), the transition is one-way, and every
//! operation checks the state first. Dropping a live handle releases the
//! native scene as a safety net, but explicit [`SceneHandle::release`] is the
//! intended discipline.

use std::ffi::CString;
use std::os::raw::c_char;
use std::ptr;

use crate::data_structures::scene::{MemoryInfo, Scene};
use crate::error::{Error, Result};
use crate::import::{error_string, PostProcess};
use crate::sys;

/// Owning wrapper around a still-native scene.
///
/// Holds a raw pointer, so it is neither `Send` nor `Sync`; all use is
/// single-threaded by construction.
pub struct SceneHandle {
    /// Null once released.
    scene: *const sys::AiScene,
}

impl SceneHandle {
    /// Imports `path` through the native library and wraps the resulting
    /// scene without converting it yet.
    pub fn from_file(path: &str, flags: PostProcess) -> Result<Self> {
        let c_path = c_string(path)?;
        let scene = unsafe { sys::aiImportFile(c_path.as_ptr(), flags.bits()) };
        Self::from_import_result(scene)
    }

    /// Imports an in-memory buffer. `hint` is the file extension of the
    /// format the buffer is expected to be in (e.g. `"obj"`); pass `""` to
    /// let the library guess.
    pub fn from_memory(buffer: &[u8], flags: PostProcess, hint: &str) -> Result<Self> {
        let c_hint = c_string(hint)?;
        let scene = unsafe {
            sys::aiImportFileFromMemory(
                buffer.as_ptr().cast::<c_char>(),
                buffer.len() as u32,
                flags.bits(),
                c_hint.as_ptr(),
            )
        };
        Self::from_import_result(scene)
    }

    fn from_import_result(scene: *const sys::AiScene) -> Result<Self> {
        if scene.is_null() {
            let message = error_string();
            log::warn!("assimp import failed: {message}");
            Err(Error::Import(message))
        } else {
            Ok(SceneHandle { scene })
        }
    }

    pub fn is_live(&self) -> bool {
        !self.scene.is_null()
    }

    /// Runs the full deep conversion and returns the owned snapshot. Does not
    /// consume the handle; may be called repeatedly while live.
    pub fn view(&self) -> Result<Scene> {
        match unsafe { self.scene.as_ref() } {
            Some(raw) => Ok(unsafe { Scene::from_raw(raw) }),
            None => Err(Error::SceneReleased),
        }
    }

    /// Runs additional postprocessing steps on the still-native scene,
    /// in place. Returns whether the steps succeeded; on failure the native
    /// library destroys the scene, so the handle transitions to released.
    pub fn apply_postprocessing(&mut self, flags: PostProcess) -> Result<bool> {
        if self.scene.is_null() {
            return Err(Error::SceneReleased);
        }
        let result = unsafe { sys::aiApplyPostProcessing(self.scene, flags.bits()) };
        if result.is_null() {
            log::warn!("postprocessing failed, native scene was destroyed");
            self.scene = ptr::null();
            Ok(false)
        } else {
            Ok(true)
        }
    }

    /// Native memory consumed by the still-live scene.
    pub fn memory_requirements(&self) -> Result<MemoryInfo> {
        if self.scene.is_null() {
            return Err(Error::SceneReleased);
        }
        let mut info = sys::AiMemoryInfo::default();
        unsafe { sys::aiGetMemoryRequirements(self.scene, &mut info) };
        Ok(MemoryInfo::from_raw(&info))
    }

    /// Gives the scene back to the native library. Fails (rather than
    /// silently doing nothing) on a second call: a double release is a bug in
    /// the caller worth hearing about.
    pub fn release(&mut self) -> Result<()> {
        if self.scene.is_null() {
            return Err(Error::SceneReleased);
        }
        unsafe { sys::aiReleaseImport(self.scene) };
        self.scene = ptr::null();
        Ok(())
    }
}

impl Drop for SceneHandle {
    fn drop(&mut self) {
        if !self.scene.is_null() {
            log::debug!("scene handle dropped while live, releasing native scene");
            unsafe { sys::aiReleaseImport(self.scene) };
            self.scene = ptr::null();
        }
    }
}

/// NUL bytes in a path or hint can never reach the C side; surface them as an
/// import failure rather than a separate error kind.
fn c_string(s: &str) -> Result<CString> {
    CString::new(s).map_err(|_| Error::Import(format!("string contains NUL byte: {s:?}")))
}
