//! Keyframes and animation channels.

use cgmath::{Quaternion, Vector3};

use super::{from_contiguous, from_ptr_array, math, string_of, ByteString};
use crate::sys;

/// What a channel does outside its keyframe range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimBehaviour {
    /// Take the node's original transform.
    Default,
    /// Hold the nearest key.
    Constant,
    /// Extrapolate the two nearest keys.
    Linear,
    /// Wrap around.
    Repeat,
}

impl AnimBehaviour {
    fn from_raw(raw: u32) -> Self {
        match raw {
            1 => AnimBehaviour::Constant,
            2 => AnimBehaviour::Linear,
            3 => AnimBehaviour::Repeat,
            _ => AnimBehaviour::Default,
        }
    }
}

/// Timestamped 3-vector, used for position and scaling keys. Timestamps are
/// in ticks, see [`Animation::ticks_per_second`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VectorKey {
    pub time: f64,
    pub value: Vector3<f64>,
}

impl VectorKey {
    pub fn from_raw(raw: &sys::AiVectorKey) -> Self {
        VectorKey {
            time: raw.time,
            value: math::vector3(&raw.value),
        }
    }
}

/// Timestamped rotation key.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuatKey {
    pub time: f64,
    pub value: Quaternion<f64>,
}

impl QuatKey {
    pub fn from_raw(raw: &sys::AiQuatKey) -> Self {
        QuatKey {
            time: raw.time,
            value: math::quaternion(&raw.value),
        }
    }
}

/// Timestamped morph-target switch: the value selects an anim mesh.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeshKey {
    pub time: f64,
    pub anim_mesh_index: u32,
}

impl MeshKey {
    pub fn from_raw(raw: &sys::AiMeshKey) -> Self {
        MeshKey {
            time: raw.time,
            anim_mesh_index: raw.value,
        }
    }
}

/// Animation channel for a single node, addressed by node name. Any of the
/// key arrays may be empty.
#[derive(Clone, Debug)]
pub struct NodeAnim {
    pub node_name: ByteString,
    pub position_keys: Vec<VectorKey>,
    pub rotation_keys: Vec<QuatKey>,
    pub scaling_keys: Vec<VectorKey>,
    pub pre_state: AnimBehaviour,
    pub post_state: AnimBehaviour,
}

impl NodeAnim {
    /// # Safety
    /// `raw` must belong to a live native scene.
    pub unsafe fn from_raw(raw: &sys::AiNodeAnim) -> Self {
        unsafe {
            NodeAnim {
                node_name: string_of(&raw.node_name),
                position_keys: from_contiguous(
                    raw.position_keys,
                    raw.num_position_keys,
                    VectorKey::from_raw,
                ),
                rotation_keys: from_contiguous(
                    raw.rotation_keys,
                    raw.num_rotation_keys,
                    QuatKey::from_raw,
                ),
                scaling_keys: from_contiguous(
                    raw.scaling_keys,
                    raw.num_scaling_keys,
                    VectorKey::from_raw,
                ),
                pre_state: AnimBehaviour::from_raw(raw.pre_state),
                post_state: AnimBehaviour::from_raw(raw.post_state),
            }
        }
    }
}

/// Vertex-level animation channel for a single mesh.
#[derive(Clone, Debug)]
pub struct MeshAnim {
    pub name: ByteString,
    pub keys: Vec<MeshKey>,
}

impl MeshAnim {
    /// # Safety
    /// `raw` must belong to a live native scene.
    pub unsafe fn from_raw(raw: &sys::AiMeshAnim) -> Self {
        MeshAnim {
            name: string_of(&raw.name),
            keys: unsafe { from_contiguous(raw.keys, raw.num_keys, MeshKey::from_raw) },
        }
    }
}

/// A named animation: node channels plus mesh channels. Duration and key
/// timestamps are in ticks; `ticks_per_second` may be 0 when the source
/// format does not specify a rate.
#[derive(Clone, Debug)]
pub struct Animation {
    pub name: ByteString,
    pub duration: f64,
    pub ticks_per_second: f64,
    pub channels: Vec<NodeAnim>,
    pub mesh_channels: Vec<MeshAnim>,
}

impl Animation {
    /// # Safety
    /// `raw` must belong to a live native scene.
    pub unsafe fn from_raw(raw: &sys::AiAnimation) -> Self {
        unsafe {
            Animation {
                name: string_of(&raw.name),
                duration: raw.duration,
                ticks_per_second: raw.ticks_per_second,
                channels: from_ptr_array(raw.channels.cast(), raw.num_channels, |c| {
                    NodeAnim::from_raw(c)
                }),
                mesh_channels: from_ptr_array(raw.mesh_channels.cast(), raw.num_mesh_channels, |c| {
                    MeshAnim::from_raw(c)
                }),
            }
        }
    }
}
