//! Error type for the import surface.
//!
//! Only two things can go wrong here: the native importer rejects the input
//! (surfaced with its own diagnostic string), or a caller touches a
//! [`crate::handle::SceneHandle`] after releasing it. Malformed-looking native
//! data (missing arrays, unknown metadata tags) is deliberately *not* an
//! error; those degrade to empty sequences or absent values during
//! conversion.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The native library returned no scene. Carries `aiGetErrorString()`.
    #[error("assimp import failed: {0}")]
    Import(String),

    /// An operation was attempted on an already-released scene handle.
    /// This is a caller bug, reported loudly instead of silently ignored.
    #[error("scene handle was already released")]
    SceneReleased,
}

pub type Result<T> = std::result::Result<T, Error>;
