//! The scene snapshot: node hierarchy plus the global entity arrays.

use bitflags::bitflags;
use cgmath::Matrix4;

use super::{
    animation::Animation, camera::Camera, from_ptr_array, from_uints, light::Light,
    material::Material, math, mesh::Mesh, metadata::Metadata, string_of, texture::Texture,
    ByteString,
};
use crate::sys;

bitflags! {
    /// Scene-level state reported by the importer.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct SceneFlags: u32 {
        /// Import succeeded only partially.
        const INCOMPLETE = 0x1;
        const VALIDATED = 0x2;
        const VALIDATION_WARNING = 0x4;
        const NON_VERBOSE_FORMAT = 0x8;
        const TERRAIN = 0x10;
        const ALLOW_SHARED = 0x20;
    }
}

/// One node of the hierarchy.
///
/// Children are owned exclusively; the snapshot is a plain tree with no
/// back-edges or shared structure. `meshes` holds indices into
/// [`Scene::meshes`], copied without range validation.
#[derive(Clone, Debug)]
pub struct Node {
    pub name: ByteString,
    /// Transform relative to the parent node.
    pub transformation: Matrix4<f64>,
    pub children: Vec<Node>,
    pub meshes: Vec<u32>,
    pub metadata: Option<Metadata>,
}

impl Node {
    /// Converts a node and, recursively, its whole subtree.
    ///
    /// # Safety
    /// `raw` must belong to a live native scene.
    pub unsafe fn from_raw(raw: &sys::AiNode) -> Self {
        unsafe {
            Node {
                name: string_of(&raw.name),
                transformation: math::matrix4(&raw.transformation),
                children: from_ptr_array(raw.children.cast(), raw.num_children, |child| {
                    Node::from_raw(child)
                }),
                meshes: from_uints(raw.meshes, raw.num_meshes),
                metadata: raw.metadata.as_ref().map(|m| Metadata::from_raw(m)),
            }
        }
    }
}

/// The fully-converted, owned, immutable result of an import.
///
/// All cross-references between entities are plain indices into the global
/// arrays below (`Node::meshes` into `meshes`, `Mesh::material_index` into
/// `materials`, ...); no pointer identity from the native graph survives.
#[derive(Clone, Debug)]
pub struct Scene {
    pub flags: SceneFlags,
    /// Short scene name, empty for most formats.
    pub name: ByteString,
    pub root_node: Node,
    pub meshes: Vec<Mesh>,
    pub materials: Vec<Material>,
    pub animations: Vec<Animation>,
    pub textures: Vec<Texture>,
    pub lights: Vec<Light>,
    pub cameras: Vec<Camera>,
    pub metadata: Option<Metadata>,
}

impl Scene {
    /// Runs the full deep conversion. Reads the native graph, mutates nothing.
    ///
    /// # Safety
    /// `raw` must be a live scene returned by the native importer.
    pub unsafe fn from_raw(raw: &sys::AiScene) -> Self {
        unsafe {
            Scene {
                flags: SceneFlags::from_bits_retain(raw.flags),
                name: string_of(&raw.name),
                // A scene always has a root node; a null one only shows up in
                // hand-built fixtures, where an empty unnamed root is the
                // closest faithful reading.
                root_node: raw
                    .root_node
                    .as_ref()
                    .map(|root| Node::from_raw(root))
                    .unwrap_or_else(|| Node {
                        name: ByteString::default(),
                        transformation: cgmath::SquareMatrix::identity(),
                        children: Vec::new(),
                        meshes: Vec::new(),
                        metadata: None,
                    }),
                meshes: from_ptr_array(raw.meshes.cast(), raw.num_meshes, |m| Mesh::from_raw(m)),
                materials: from_ptr_array(raw.materials.cast(), raw.num_materials, |m| {
                    Material::from_raw(m)
                }),
                animations: from_ptr_array(raw.animations.cast(), raw.num_animations, |a| {
                    Animation::from_raw(a)
                }),
                textures: from_ptr_array(raw.textures.cast(), raw.num_textures, |t| {
                    Texture::from_raw(t)
                }),
                lights: from_ptr_array(raw.lights.cast(), raw.num_lights, |l| Light::from_raw(l)),
                cameras: from_ptr_array(raw.cameras.cast(), raw.num_cameras, |c| {
                    Camera::from_raw(c)
                }),
                metadata: raw.metadata.as_ref().map(|m| Metadata::from_raw(m)),
            }
        }
    }
}

/// Approximate native memory consumption of a still-live scene, in bytes per
/// category. Reported by the native library, see
/// [`crate::handle::SceneHandle::memory_requirements`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MemoryInfo {
    pub textures: u32,
    pub materials: u32,
    pub meshes: u32,
    pub nodes: u32,
    pub animations: u32,
    pub cameras: u32,
    pub lights: u32,
    pub total: u32,
}

impl MemoryInfo {
    pub(crate) fn from_raw(raw: &sys::AiMemoryInfo) -> Self {
        MemoryInfo {
            textures: raw.textures,
            materials: raw.materials,
            meshes: raw.meshes,
            nodes: raw.nodes,
            animations: raw.animations,
            cameras: raw.cameras,
            lights: raw.lights,
            total: raw.total,
        }
    }
}
