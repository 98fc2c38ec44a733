/// Resource-level texture type.
///
/// Decoded RGBA8 pixels plus dimensions. Decoding from image files and GPU
/// upload belong to the rendering collaborator; this type only carries the
/// data and validates its shape.

use crate::error::Result;
use crate::engine_bail;

/// Bytes per RGBA8 pixel
pub const BYTES_PER_PIXEL: usize = 4;

/// Texture creation descriptor
pub struct TextureDesc {
    pub name: String,
    pub width: u32,
    pub height: u32,
    /// Tightly packed RGBA8 rows, `width * height * 4` bytes
    pub pixels: Vec<u8>,
}

/// Immutable RGBA8 texture, shared between materials via `Arc`.
#[derive(Debug)]
pub struct Texture {
    name: String,
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Texture {
    /// Create texture from descriptor (internal use by ResourceManager)
    pub(crate) fn from_desc(desc: TextureDesc) -> Result<Self> {
        if desc.width == 0 || desc.height == 0 {
            engine_bail!(InvalidResource, "prism::Texture",
                "Texture '{}' has zero size ({}x{})", desc.name, desc.width, desc.height);
        }
        let expected = desc.width as usize * desc.height as usize * BYTES_PER_PIXEL;
        if desc.pixels.len() != expected {
            engine_bail!(InvalidResource, "prism::Texture",
                "Texture '{}': expected {} bytes for {}x{} RGBA8, got {}",
                desc.name, expected, desc.width, desc.height, desc.pixels.len());
        }

        Ok(Self {
            name: desc.name,
            width: desc.width,
            height: desc.height,
            pixels: desc.pixels,
        })
    }

    /// Descriptor for a texture filled with a single color.
    pub fn solid_color(name: &str, width: u32, height: u32, rgba: [u8; 4]) -> TextureDesc {
        let count = width as usize * height as usize;
        TextureDesc {
            name: name.to_string(),
            width,
            height,
            pixels: rgba.repeat(count),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// RGBA value at (x, y), `None` outside the texture.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL;
        let p = &self.pixels[offset..offset + BYTES_PER_PIXEL];
        Some([p[0], p[1], p[2], p[3]])
    }
}
