//! assimp-import
//!
//! Safe bindings to the Assimp scene importer. The native library parses the
//! model file (or in-memory buffer); this crate walks the resulting native
//! object graph once and produces an equivalent, fully-owned, immutable
//! snapshot: plain Rust values with no pointers back into native memory.
//! The only native resource that needs managing is the scene itself, wrapped
//! in [`handle::SceneHandle`].
//!
//! High-level modules
//! - `import`: one-shot entry points (`import_file`, `import_file_from_memory`)
//!   and version/licensing pass-throughs
//! - `handle`: the scene lifetime wrapper for callers that keep the native
//!   scene alive across postprocessing or repeated views
//! - `data_structures`: the owned snapshot types (scene, nodes, meshes,
//!   materials, animations, lights, cameras, textures, metadata)
//! - `sys`: the raw `#[repr(C)]` mirror of the Assimp C API
//! - `error`: the two-kind error type
//!
//! This crate does not parse any file format itself and performs no geometry
//! processing; both are the native library's job.

pub mod data_structures;
pub mod error;
pub mod handle;
pub mod import;
pub mod sys;

// Re-exports commonly used types for convenience in downstream code.
pub use cgmath::{Matrix3, Matrix4, Quaternion, Vector2, Vector3, Vector4};

pub use data_structures::scene::{MemoryInfo, Node, Scene, SceneFlags};
pub use data_structures::ByteString;
pub use error::{Error, Result};
pub use handle::SceneHandle;
pub use import::{import_file, import_file_from_memory, PostProcess};
