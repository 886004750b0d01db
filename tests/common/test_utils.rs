//! Builders for hand-made native structs.
//!
//! Converter tests need `sys` structs whose pointer fields reference stable
//! memory. Each fixture type owns its backing buffers (plain `Vec`s, whose
//! heap allocations do not move when the fixture itself does) and exposes the
//! assembled native struct. Fixtures are built once and never mutated
//! afterwards.

use std::os::raw::c_char;
use std::ptr;

use assimp_import::sys;

pub fn ai_string(text: &str) -> sys::AiString {
    ai_string_bytes(text.as_bytes())
}

/// Length-prefixed native string; `bytes` may contain embedded NULs.
pub fn ai_string_bytes(bytes: &[u8]) -> sys::AiString {
    assert!(bytes.len() <= sys::AI_STRING_MAXLEN);
    let mut out = sys::AiString::default();
    out.length = bytes.len() as u32;
    for (slot, &byte) in out.data.iter_mut().zip(bytes) {
        *slot = byte as c_char;
    }
    out
}

pub fn vec3(x: f32, y: f32, z: f32) -> sys::AiVector3D {
    sys::AiVector3D { x, y, z }
}

/// A mesh with positions, one used color channel, one used UV channel and a
/// face list. Everything else stays null so tests can probe the null-to-empty
/// policy on the same fixture.
pub struct MeshFixture {
    vertices: Vec<sys::AiVector3D>,
    colors0: Vec<sys::AiColor4D>,
    uv0: Vec<sys::AiVector3D>,
    _face_indices: Vec<Vec<u32>>,
    faces: Vec<sys::AiFace>,
    pub mesh: sys::AiMesh,
}

impl MeshFixture {
    pub fn new(positions: &[[f32; 3]], face_indices: &[Vec<u32>], material_index: u32) -> Box<Self> {
        let vertices: Vec<sys::AiVector3D> =
            positions.iter().map(|p| vec3(p[0], p[1], p[2])).collect();
        let colors0: Vec<sys::AiColor4D> = positions
            .iter()
            .map(|_| sys::AiColor4D {
                r: 1.0,
                g: 0.5,
                b: 0.25,
                a: 1.0,
            })
            .collect();
        let uv0: Vec<sys::AiVector3D> = positions.iter().map(|_| vec3(0.5, 0.5, 0.0)).collect();
        let mut face_indices: Vec<Vec<u32>> = face_indices.to_vec();
        let faces: Vec<sys::AiFace> = face_indices
            .iter_mut()
            .map(|indices| sys::AiFace {
                num_indices: indices.len() as u32,
                indices: indices.as_mut_ptr(),
            })
            .collect();

        let mut fixture = Box::new(MeshFixture {
            vertices,
            colors0,
            uv0,
            _face_indices: face_indices,
            faces,
            mesh: empty_mesh(),
        });

        let mut colors = [ptr::null_mut(); sys::AI_MAX_COLOR_SETS];
        colors[0] = fixture.colors0.as_mut_ptr();
        let mut texture_coords = [ptr::null_mut(); sys::AI_MAX_TEXCOORDS];
        texture_coords[0] = fixture.uv0.as_mut_ptr();
        let mut num_uv_components = [0u32; sys::AI_MAX_TEXCOORDS];
        num_uv_components[0] = 2;

        fixture.mesh = sys::AiMesh {
            primitive_types: 0x4, // triangles
            num_vertices: fixture.vertices.len() as u32,
            num_faces: fixture.faces.len() as u32,
            vertices: fixture.vertices.as_mut_ptr(),
            colors,
            texture_coords,
            num_uv_components,
            faces: fixture.faces.as_mut_ptr(),
            material_index,
            name: ai_string("fixture-mesh"),
            ..empty_mesh()
        };
        fixture
    }
}

/// All-null, all-zero mesh; the starting point for fixtures.
pub fn empty_mesh() -> sys::AiMesh {
    sys::AiMesh {
        primitive_types: 0,
        num_vertices: 0,
        num_faces: 0,
        vertices: ptr::null_mut(),
        normals: ptr::null_mut(),
        tangents: ptr::null_mut(),
        bitangents: ptr::null_mut(),
        colors: [ptr::null_mut(); sys::AI_MAX_COLOR_SETS],
        texture_coords: [ptr::null_mut(); sys::AI_MAX_TEXCOORDS],
        num_uv_components: [0; sys::AI_MAX_TEXCOORDS],
        faces: ptr::null_mut(),
        num_bones: 0,
        bones: ptr::null_mut(),
        material_index: 0,
        name: sys::AiString::default(),
        num_anim_meshes: 0,
        anim_meshes: ptr::null_mut(),
        method: 0,
        aabb: sys::AiAABB::default(),
        texture_coords_names: ptr::null_mut(),
    }
}

/// A texture fixture owning its texel buffer.
pub struct TextureFixture {
    texels: Vec<sys::AiTexel>,
    pub texture: sys::AiTexture,
}

impl TextureFixture {
    /// Compressed encoding: `height == 0`, `width` is the byte length.
    pub fn compressed(hint: &str, payload: &[u8]) -> Box<Self> {
        assert_eq!(payload.len() % 4, 0, "payload is reinterpreted as texels");
        let texels: Vec<sys::AiTexel> = payload
            .chunks_exact(4)
            .map(|c| sys::AiTexel {
                b: c[0],
                g: c[1],
                r: c[2],
                a: c[3],
            })
            .collect();
        Self::build(payload.len() as u32, 0, hint, texels)
    }

    /// Uncompressed encoding: `width * height` packed texels.
    pub fn uncompressed(width: u32, height: u32, texel: sys::AiTexel) -> Box<Self> {
        let texels = vec![texel; (width * height) as usize];
        Self::build(width, height, "rgba8888", texels)
    }

    fn build(width: u32, height: u32, hint: &str, texels: Vec<sys::AiTexel>) -> Box<Self> {
        assert!(hint.len() < sys::AI_TEXTURE_HINT_LEN);
        let mut format_hint = [0 as c_char; sys::AI_TEXTURE_HINT_LEN];
        for (slot, &byte) in format_hint.iter_mut().zip(hint.as_bytes()) {
            *slot = byte as c_char;
        }
        let mut fixture = Box::new(TextureFixture {
            texels,
            texture: sys::AiTexture {
                width,
                height,
                format_hint,
                data: ptr::null_mut(),
                filename: ai_string("embedded"),
            },
        });
        fixture.texture.data = fixture.texels.as_mut_ptr();
        fixture
    }
}

/// A metadata table with one entry, owning key and payload storage.
pub struct MetadataFixture {
    _keys: Vec<sys::AiString>,
    _values: Vec<sys::AiMetadataEntry>,
    _payload: Box<[u8]>,
    pub metadata: sys::AiMetadata,
}

impl MetadataFixture {
    pub fn single(key: &str, entry_type: u32, payload: Box<[u8]>) -> Box<Self> {
        let mut keys = vec![ai_string(key)];
        let mut payload = payload;
        let mut values = vec![sys::AiMetadataEntry {
            entry_type,
            data: if payload.is_empty() {
                ptr::null_mut()
            } else {
                payload.as_mut_ptr().cast()
            },
        }];
        let metadata = sys::AiMetadata {
            num_properties: 1,
            keys: keys.as_mut_ptr(),
            values: values.as_mut_ptr(),
        };
        Box::new(MetadataFixture {
            _keys: keys,
            _values: values,
            _payload: payload,
            metadata,
        })
    }
}
