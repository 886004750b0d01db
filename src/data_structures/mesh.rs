//! Geometry: meshes, faces, skinning data and morph targets.

use bitflags::bitflags;
use cgmath::{Matrix4, Vector3};

use super::{
    from_contiguous, from_ptr_array, from_uints, math, math::Aabb, math::Color4, string_of,
    ByteString,
};
use crate::sys;

bitflags! {
    /// Which primitive kinds a mesh contains. A bitmask because a single
    /// native mesh may mix kinds until `SortByPType` splits it.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct PrimitiveTypeFlags: u32 {
        const POINT = 0x1;
        const LINE = 0x2;
        const TRIANGLE = 0x4;
        const POLYGON = 0x8;
        const NGON_ENCODING = 0x10;
    }
}

/// Vertex indices of one polygon. Variable length, order is the winding
/// order and is preserved exactly as imported.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Face {
    pub indices: Vec<u32>,
}

impl Face {
    /// # Safety
    /// `raw.indices` must point to `raw.num_indices` valid indices (or be null).
    pub unsafe fn from_raw(raw: &sys::AiFace) -> Self {
        Face {
            indices: unsafe { from_uints(raw.indices, raw.num_indices) },
        }
    }
}

/// Influence of one bone on one vertex. The vertex id indexes the owning
/// mesh's vertex array and is copied without range validation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VertexWeight {
    pub vertex_id: u32,
    pub weight: f64,
}

impl VertexWeight {
    pub fn from_raw(raw: &sys::AiVertexWeight) -> Self {
        VertexWeight {
            vertex_id: raw.vertex_id,
            weight: raw.weight as f64,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Bone {
    pub name: ByteString,
    pub weights: Vec<VertexWeight>,
    /// Mesh space to bone space in bind pose.
    pub offset_matrix: Matrix4<f64>,
}

impl Bone {
    /// # Safety
    /// `raw` must belong to a live native scene.
    pub unsafe fn from_raw(raw: &sys::AiBone) -> Self {
        Bone {
            name: string_of(&raw.name),
            weights: unsafe { from_contiguous(raw.weights, raw.num_weights, VertexWeight::from_raw) },
            offset_matrix: math::matrix4(&raw.offset_matrix),
        }
    }
}

/// A morph target: replacement per-vertex data for the mesh that owns it.
/// Absent attribute arrays come through as empty vectors, and the color/UV
/// channel arrays always hold exactly [`sys::AI_MAX_COLOR_SETS`] /
/// [`sys::AI_MAX_TEXCOORDS`] slots with unused slots empty.
#[derive(Clone, Debug)]
pub struct AnimMesh {
    pub name: ByteString,
    pub vertices: Vec<Vector3<f64>>,
    pub normals: Vec<Vector3<f64>>,
    pub tangents: Vec<Vector3<f64>>,
    pub bitangents: Vec<Vector3<f64>>,
    pub colors: [Vec<Color4>; sys::AI_MAX_COLOR_SETS],
    pub texture_coords: [Vec<Vector3<f64>>; sys::AI_MAX_TEXCOORDS],
    pub weight: f64,
}

impl AnimMesh {
    /// # Safety
    /// `raw` must belong to a live native scene.
    pub unsafe fn from_raw(raw: &sys::AiAnimMesh) -> Self {
        let n = raw.num_vertices;
        unsafe {
            AnimMesh {
                name: string_of(&raw.name),
                vertices: from_contiguous(raw.vertices, n, math::vector3),
                normals: from_contiguous(raw.normals, n, math::vector3),
                tangents: from_contiguous(raw.tangents, n, math::vector3),
                bitangents: from_contiguous(raw.bitangents, n, math::vector3),
                colors: std::array::from_fn(|i| from_contiguous(raw.colors[i], n, math::color4)),
                texture_coords: std::array::from_fn(|i| {
                    from_contiguous(raw.texture_coords[i], n, math::vector3)
                }),
                weight: raw.weight as f64,
            }
        }
    }
}

/// One mesh: per-vertex attribute arrays, faces, skinning and morph targets.
///
/// Attribute arrays the source file does not carry are empty, never
/// truncated or padded; when present their length equals `vertices.len()`.
/// `material_index` points into [`super::scene::Scene::materials`] and is
/// copied as-is; consumers are responsible for range checks.
#[derive(Clone, Debug)]
pub struct Mesh {
    pub primitive_types: PrimitiveTypeFlags,
    pub vertices: Vec<Vector3<f64>>,
    pub normals: Vec<Vector3<f64>>,
    pub tangents: Vec<Vector3<f64>>,
    pub bitangents: Vec<Vector3<f64>>,
    /// Always exactly 8 slots; slot position is the color channel index.
    pub colors: [Vec<Color4>; sys::AI_MAX_COLOR_SETS],
    /// Always exactly 8 slots; slot position is the UV channel index.
    pub texture_coords: [Vec<Vector3<f64>>; sys::AI_MAX_TEXCOORDS],
    /// Components (1-3) actually used per UV channel.
    pub uv_components: [u32; sys::AI_MAX_TEXCOORDS],
    pub faces: Vec<Face>,
    pub bones: Vec<Bone>,
    pub material_index: u32,
    pub name: ByteString,
    pub anim_meshes: Vec<AnimMesh>,
    pub aabb: Aabb,
}

impl Mesh {
    /// # Safety
    /// `raw` must belong to a live native scene.
    pub unsafe fn from_raw(raw: &sys::AiMesh) -> Self {
        let n = raw.num_vertices;
        unsafe {
            Mesh {
                primitive_types: PrimitiveTypeFlags::from_bits_retain(raw.primitive_types),
                vertices: from_contiguous(raw.vertices, n, math::vector3),
                normals: from_contiguous(raw.normals, n, math::vector3),
                tangents: from_contiguous(raw.tangents, n, math::vector3),
                bitangents: from_contiguous(raw.bitangents, n, math::vector3),
                colors: std::array::from_fn(|i| from_contiguous(raw.colors[i], n, math::color4)),
                texture_coords: std::array::from_fn(|i| {
                    from_contiguous(raw.texture_coords[i], n, math::vector3)
                }),
                uv_components: raw.num_uv_components,
                faces: from_contiguous(raw.faces, raw.num_faces, |f| Face::from_raw(f)),
                bones: from_ptr_array(raw.bones.cast(), raw.num_bones, |b| Bone::from_raw(b)),
                material_index: raw.material_index,
                name: string_of(&raw.name),
                anim_meshes: from_ptr_array(raw.anim_meshes.cast(), raw.num_anim_meshes, |m| {
                    AnimMesh::from_raw(m)
                }),
                aabb: math::aabb(&raw.aabb),
            }
        }
    }
}
