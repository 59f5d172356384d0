//! Resource manager - texture loading and caching
//!
//! Textures are looked up by name under a base directory as `name.ext`.
//! When that fails the configured default texture is tried once; the
//! requested name is never retried. Results are cached under the requested
//! name, so a fallback is also remembered.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use thiserror::Error;

use super::notification::{NotificationService, Severity};
use crate::game::TextureAsset;

#[derive(Debug, Error)]
pub enum TextureError {
    #[error("failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("{path} is {width}x{height}, larger than the supported 65535x65535")]
    TooLarge { path: PathBuf, width: u32, height: u32 },

    #[error("{name} and the default texture {default} both failed to load")]
    DefaultMissing { name: String, default: String },
}

/// Raw RGBA image read from somewhere
pub struct DecodedImage {
    pub width: u16,
    pub height: u16,
    pub pixels: Vec<u8>,
}

/// Where texture bytes come from
pub trait ImageSource {
    fn read(&mut self, path: &Path) -> Result<DecodedImage, TextureError>;
}

/// Decodes files from disk with the `image` crate
#[derive(Debug, Default)]
pub struct FsImageSource;

impl ImageSource for FsImageSource {
    fn read(&mut self, path: &Path) -> Result<DecodedImage, TextureError> {
        let image = image::open(path)
            .map_err(|source| TextureError::Decode { path: path.to_path_buf(), source })?
            .to_rgba8();

        let (width, height) = image.dimensions();
        match (u16::try_from(width), u16::try_from(height)) {
            (Ok(w), Ok(h)) => Ok(DecodedImage { width: w, height: h, pixels: image.into_raw() }),
            _ => Err(TextureError::TooLarge { path: path.to_path_buf(), width, height }),
        }
    }
}

/// Texture cache keyed by requested name
pub struct ResourceManager<S: ImageSource = FsImageSource> {
    source: S,
    base_dir: PathBuf,
    default_name: String,
    default_extension: String,
    textures: HashMap<String, Rc<TextureAsset>>,
}

impl ResourceManager<FsImageSource> {
    pub fn new(base_dir: impl Into<PathBuf>, default_name: impl Into<String>, default_extension: impl Into<String>) -> Self {
        Self::with_source(FsImageSource, base_dir, default_name, default_extension)
    }
}

impl<S: ImageSource> ResourceManager<S> {
    pub fn with_source(
        source: S,
        base_dir: impl Into<PathBuf>,
        default_name: impl Into<String>,
        default_extension: impl Into<String>,
    ) -> Self {
        Self {
            source,
            base_dir: base_dir.into(),
            default_name: default_name.into(),
            default_extension: default_extension.into(),
            textures: HashMap::new(),
        }
    }

    fn path_for(&self, name: &str, extension: &str) -> PathBuf {
        self.base_dir.join(format!("{}.{}", name, extension))
    }

    /// Load `name.extension`, falling back to the default texture.
    ///
    /// Already-loaded names are returned from the cache without touching
    /// the source.
    pub fn load_texture(
        &mut self,
        name: &str,
        extension: &str,
        notes: &mut NotificationService,
    ) -> Result<Rc<TextureAsset>, TextureError> {
        if let Some(texture) = self.textures.get(name) {
            return Ok(Rc::clone(texture));
        }

        let path = self.path_for(name, extension);
        let asset = match self.source.read(&path) {
            Ok(image) => TextureAsset::new(name, extension, image.width, image.height, image.pixels),
            Err(e) => {
                notes.add_message(
                    Severity::Warning,
                    format!("ResourceManager::load_texture : {} ; using {}.{}", e, self.default_name, self.default_extension),
                );
                let default_path = self.path_for(&self.default_name, &self.default_extension);
                match self.source.read(&default_path) {
                    Ok(image) => TextureAsset::new(
                        self.default_name.clone(),
                        self.default_extension.clone(),
                        image.width,
                        image.height,
                        image.pixels,
                    ),
                    Err(e) => {
                        notes.add_message(Severity::Error, format!("ResourceManager::load_texture : {}", e));
                        return Err(TextureError::DefaultMissing {
                            name: format!("{}.{}", name, extension),
                            default: format!("{}.{}", self.default_name, self.default_extension),
                        });
                    }
                }
            }
        };

        let asset = Rc::new(asset);
        self.textures.insert(name.to_string(), Rc::clone(&asset));
        Ok(asset)
    }

    /// A previously loaded texture
    pub fn get_texture(&self, name: &str) -> Option<Rc<TextureAsset>> {
        self.textures.get(name).cloned()
    }

    pub fn texture_count(&self) -> usize {
        self.textures.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records every path read; only paths in `available` succeed
    struct RecordingSource {
        available: Vec<PathBuf>,
        reads: Vec<PathBuf>,
    }

    impl ImageSource for RecordingSource {
        fn read(&mut self, path: &Path) -> Result<DecodedImage, TextureError> {
            self.reads.push(path.to_path_buf());
            if self.available.iter().any(|p| p == path) {
                Ok(DecodedImage { width: 1, height: 1, pixels: vec![255; 4] })
            } else {
                Err(TextureError::TooLarge { path: path.to_path_buf(), width: 0, height: 0 })
            }
        }
    }

    fn manager(available: &[&str]) -> ResourceManager<RecordingSource> {
        let source = RecordingSource {
            available: available.iter().map(|n| Path::new("assets").join(n)).collect(),
            reads: Vec::new(),
        };
        ResourceManager::with_source(source, "assets", "Default", "png")
    }

    #[test]
    fn test_missing_texture_falls_back_once() {
        let mut resources = manager(&["Default.png"]);
        let mut notes = NotificationService::new();

        let texture = resources.load_texture("Missing", "png", &mut notes).unwrap();

        assert_eq!(texture.file_name(), "Default.png");
        assert_eq!(
            resources.source.reads,
            vec![Path::new("assets/Missing.png").to_path_buf(), Path::new("assets/Default.png").to_path_buf()]
        );
        assert_eq!(notes.messages_for(Severity::Warning).len(), 1);
    }

    #[test]
    fn test_cache_skips_source() {
        let mut resources = manager(&["Track.png"]);
        let mut notes = NotificationService::new();

        let first = resources.load_texture("Track", "png", &mut notes).unwrap();
        let second = resources.load_texture("Track", "png", &mut notes).unwrap();

        assert!(Rc::ptr_eq(&first, &second));
        assert_eq!(resources.source.reads.len(), 1);
        assert_eq!(resources.texture_count(), 1);
        assert!(resources.get_texture("Track").is_some());
        assert_eq!(notes.message_count(), 0);
    }

    #[test]
    fn test_fallback_is_cached_under_requested_name() {
        let mut resources = manager(&["Default.png"]);
        let mut notes = NotificationService::new();

        resources.load_texture("Missing", "png", &mut notes).unwrap();
        resources.load_texture("Missing", "png", &mut notes).unwrap();

        assert_eq!(resources.source.reads.len(), 2);
        assert_eq!(resources.get_texture("Missing").unwrap().name(), "Default");
    }

    #[test]
    fn test_default_missing_is_an_error() {
        let mut resources = manager(&[]);
        let mut notes = NotificationService::new();

        let result = resources.load_texture("Missing", "png", &mut notes);

        assert!(matches!(result, Err(TextureError::DefaultMissing { .. })));
        assert_eq!(resources.source.reads.len(), 2);
        assert_eq!(notes.messages_for(Severity::Error).len(), 1);
        assert!(resources.get_texture("Missing").is_none());
    }

    #[test]
    fn test_fs_source_decodes_png() {
        let dir = tempfile::tempdir().unwrap();
        let mut image = image::RgbaImage::new(3, 2);
        image.put_pixel(0, 0, image::Rgba([10, 20, 30, 255]));
        image.save(dir.path().join("Default.png")).unwrap();

        let mut resources = ResourceManager::new(dir.path(), "Default", "png");
        let mut notes = NotificationService::new();

        let texture = resources.load_texture("Nonexistent", "png", &mut notes).unwrap();
        assert_eq!((texture.width(), texture.height()), (3, 2));
        assert_eq!(&texture.pixels()[..4], &[10, 20, 30, 255]);
        assert_eq!(texture.name(), "Default");
    }
}
