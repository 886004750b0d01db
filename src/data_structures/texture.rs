//! Embedded textures.
//!
//! Assimp overloads `aiTexture` with two encodings and discriminates them on
//! the height field alone:
//!
//! - `mHeight == 0`: the texture is still in its on-disk container format
//!   (png, jpg, ...) and `mWidth` is the byte length of that blob.
//! - `mHeight != 0`: the texture is decoded, `width * height` packed BGRA
//!   texels.
//!
//! The two must not be conflated; the snapshot keeps them as distinct
//! variants.

use super::{string_of, ByteString};
use crate::sys;

/// Pixel payload of an embedded texture.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TextureData {
    /// Raw bytes of a compressed image file. Interpreting them (or not) is up
    /// to the consumer; the format hint names the container if known.
    Compressed(Vec<u8>),
    /// Decoded image: `width * height` packed 32-bit texels in row-major
    /// order, each texel BGRA in native byte order.
    Texels {
        width: u32,
        height: u32,
        texels: Vec<u32>,
    },
}

/// An embedded texture.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Texture {
    /// Original path this texture replaces, when the importer knows it.
    pub file_name: ByteString,
    /// Container format ("png", ...) for compressed data, or a channel layout
    /// description ("rgba8888", ...) for texels. NUL-trimmed.
    pub format_hint: String,
    pub data: TextureData,
}

impl Texture {
    /// # Safety
    /// `raw` must belong to a live native scene.
    pub unsafe fn from_raw(raw: &sys::AiTexture) -> Self {
        let format_hint = {
            let bytes: &[u8; sys::AI_TEXTURE_HINT_LEN] =
                unsafe { &*(&raw.format_hint as *const _ as *const [u8; sys::AI_TEXTURE_HINT_LEN]) };
            let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
            String::from_utf8_lossy(&bytes[..end]).into_owned()
        };

        let data = if raw.height == 0 {
            // Compressed: width is the byte length of the blob.
            let bytes = if raw.data.is_null() {
                Vec::new()
            } else {
                unsafe { std::slice::from_raw_parts(raw.data.cast::<u8>(), raw.width as usize) }
                    .to_vec()
            };
            TextureData::Compressed(bytes)
        } else {
            let count = raw.width as usize * raw.height as usize;
            let texels = if raw.data.is_null() {
                Vec::new()
            } else {
                let raw_texels = unsafe { std::slice::from_raw_parts(raw.data, count) };
                // Via bytes: the texel buffer's alignment is the native
                // library's business, not a cast precondition.
                let bytes: &[u8] = bytemuck::cast_slice(raw_texels);
                bytes
                    .chunks_exact(4)
                    .map(|c| u32::from_ne_bytes([c[0], c[1], c[2], c[3]]))
                    .collect()
            };
            TextureData::Texels {
                width: raw.width,
                height: raw.height,
                texels,
            }
        };

        Texture {
            file_name: string_of(&raw.filename),
            format_hint,
            data,
        }
    }
}
