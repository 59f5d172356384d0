//! Texture Component
//!
//! Decoded RGBA pixels shared between the resource cache and every actor
//! that uses them. The GPU copy is created lazily on first draw so that
//! decoding (and tests) never need a graphics context.

use std::cell::OnceCell;
use std::fmt;
use std::rc::Rc;

use macroquad::prelude::{FilterMode, Texture2D};

/// A decoded texture image
pub struct TextureAsset {
    /// File stem that was actually loaded (e.g. "Default" after a fallback)
    name: String,
    /// File extension that was actually loaded
    extension: String,
    width: u16,
    height: u16,
    /// RGBA8, row-major
    pixels: Vec<u8>,
    gpu: OnceCell<Texture2D>,
}

impl TextureAsset {
    pub fn new(name: impl Into<String>, extension: impl Into<String>, width: u16, height: u16, pixels: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            extension: extension.into(),
            width,
            height,
            pixels,
            gpu: OnceCell::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// "name.ext"
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.name, self.extension)
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// GPU texture, uploaded on first call. Needs a live graphics context.
    pub fn gpu_texture(&self) -> &Texture2D {
        self.gpu.get_or_init(|| {
            let texture = Texture2D::from_rgba8(self.width, self.height, &self.pixels);
            texture.set_filter(FilterMode::Linear);
            texture
        })
    }
}

impl fmt::Debug for TextureAsset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextureAsset")
            .field("name", &self.file_name())
            .field("width", &self.width)
            .field("height", &self.height)
            .field("uploaded", &self.gpu.get().is_some())
            .finish()
    }
}

/// Component giving an actor a texture
#[derive(Debug, Clone)]
pub struct TextureComponent {
    asset: Rc<TextureAsset>,
}

impl TextureComponent {
    pub fn new(asset: Rc<TextureAsset>) -> Self {
        Self { asset }
    }

    pub fn asset(&self) -> &Rc<TextureAsset> {
        &self.asset
    }

    /// Name of the file that was actually loaded
    pub fn texture_name(&self) -> String {
        self.asset.file_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_metadata() {
        let asset = TextureAsset::new("Track", "png", 2, 1, vec![255; 8]);
        assert_eq!(asset.file_name(), "Track.png");
        assert_eq!(asset.width(), 2);
        assert_eq!(asset.height(), 1);
        assert_eq!(asset.pixels().len(), 8);
    }

    #[test]
    fn test_component_shares_asset() {
        let asset = Rc::new(TextureAsset::new("Default", "png", 1, 1, vec![0; 4]));
        let a = TextureComponent::new(Rc::clone(&asset));
        let b = a.clone();
        assert!(Rc::ptr_eq(a.asset(), b.asset()));
        assert_eq!(Rc::strong_count(&asset), 3);
        assert_eq!(b.texture_name(), "Default.png");
    }
}
