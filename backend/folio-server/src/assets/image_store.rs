//! Image files referenced by the profile and contacts.
//!
//! Layout under the asset root:
//! - `thumbnail/` - profile thumbnail
//! - `bg/` - profile background
//! - `logo/` - contact logos
//!
//! Stored names are `<uuid-v4>.<ext>`; the uploaded name is never used on disk.
//! The thumbnail and background directories also hold the default images,
//! written by `ensure_dirs` under their sentinel names.

use crate::assets::error::{AssetError, Result as AssetResult};
use crate::UploadedFile;

use folio_core::ImageSlot;

use std::io::ErrorKind;
use std::panic::Location;
use std::path::{Path, PathBuf};

use error_location::ErrorLocation;
use log::{debug, info, warn};
use mime_guess::mime;
use uuid::Uuid;

pub const ALLOWED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp"];

const SLOTS: [ImageSlot; 3] = [ImageSlot::Thumbnail, ImageSlot::Background, ImageSlot::Logo];

const DEFAULT_THUMBNAIL: &[u8] = include_bytes!("../../defaults/thumbnail-img.jpg");
const DEFAULT_BACKGROUND: &[u8] = include_bytes!("../../defaults/background-img.jpg");

/// Placeholder written under a slot's sentinel name
fn default_image(slot: ImageSlot) -> Option<&'static [u8]> {
    match slot {
        ImageSlot::Thumbnail => Some(DEFAULT_THUMBNAIL),
        ImageSlot::Background => Some(DEFAULT_BACKGROUND),
        ImageSlot::Logo => None,
    }
}

/// Container format recognised from leading bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Signature {
    Jpeg,
    Png,
    Gif,
    Webp,
}

impl Signature {
    fn sniff(bytes: &[u8]) -> Option<Self> {
        if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
            Some(Self::Jpeg)
        } else if bytes.starts_with(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]) {
            Some(Self::Png)
        } else if bytes.starts_with(b"GIF87a") || bytes.starts_with(b"GIF89a") {
            Some(Self::Gif)
        } else if bytes.len() >= 12 && bytes.starts_with(b"RIFF") && &bytes[8..12] == b"WEBP" {
            Some(Self::Webp)
        } else {
            None
        }
    }

    fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "jpg" | "jpeg" => Some(Self::Jpeg),
            "png" => Some(Self::Png),
            "gif" => Some(Self::Gif),
            "webp" => Some(Self::Webp),
            _ => None,
        }
    }
}

pub struct ImageStore {
    root: PathBuf,
}

impl ImageStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Where a stored file of the given slot lives
    pub fn path_of(&self, slot: ImageSlot, filename: &str) -> PathBuf {
        self.root.join(slot.dir_name()).join(filename)
    }

    /// Create the slot directories and install missing default images.
    /// Existing files are left alone.
    pub async fn ensure_dirs(&self) -> AssetResult<()> {
        for slot in SLOTS {
            let dir = self.root.join(slot.dir_name());
            tokio::fs::create_dir_all(&dir)
                .await
                .map_err(|e| io_error(&dir, e))?;

            if let (Some(sentinel), Some(bytes)) = (slot.sentinel(), default_image(slot)) {
                self.install_default(slot, sentinel, bytes).await?;
            }
        }

        Ok(())
    }

    async fn install_default(
        &self,
        slot: ImageSlot,
        sentinel: &str,
        bytes: &[u8],
    ) -> AssetResult<()> {
        let path = self.path_of(slot, sentinel);
        let present = tokio::fs::try_exists(&path)
            .await
            .map_err(|e| io_error(&path, e))?;
        if present {
            return Ok(());
        }

        tokio::fs::write(&path, bytes)
            .await
            .map_err(|e| io_error(&path, e))?;
        info!("Installed default {} image {}", slot.label(), path.display());
        Ok(())
    }

    /// Check an upload without writing it. Returns the extension to store it under.
    #[track_caller]
    pub fn check(&self, file: &UploadedFile) -> AssetResult<String> {
        let ext = file
            .extension()
            .filter(|ext| ALLOWED_EXTENSIONS.contains(&ext.as_str()))
            .ok_or_else(|| {
                invalid(format!(
                    "'{}' is not an accepted image, use one of: {}",
                    file.filename,
                    ALLOWED_EXTENSIONS.join(", ")
                ))
            })?;

        let guessed = mime_guess::from_ext(&ext).first();
        if guessed.map(|m| m.type_() != mime::IMAGE).unwrap_or(true) {
            return Err(invalid(format!("'{}' is not an image type", file.filename)));
        }

        if file.bytes.is_empty() {
            return Err(invalid(format!("'{}' is empty", file.filename)));
        }

        let declared = Signature::from_extension(&ext);
        let actual = Signature::sniff(&file.bytes);
        if actual.is_none() || actual != declared {
            return Err(invalid(format!(
                "'{}' content does not match its extension",
                file.filename
            )));
        }

        Ok(ext)
    }

    /// Validate and write an upload into the slot directory, returning the stored name
    pub async fn store(&self, slot: ImageSlot, file: &UploadedFile) -> AssetResult<String> {
        let ext = self.check(file)?;
        let stored_name = format!("{}.{}", Uuid::new_v4(), ext);
        let path = self.path_of(slot, &stored_name);

        if let Some(dir) = path.parent() {
            tokio::fs::create_dir_all(dir)
                .await
                .map_err(|e| io_error(dir, e))?;
        }

        tokio::fs::write(&path, &file.bytes)
            .await
            .map_err(|e| io_error(&path, e))?;

        info!(
            "Stored {} image {} ({} bytes)",
            slot.label(),
            stored_name,
            file.bytes.len()
        );
        Ok(stored_name)
    }

    /// Remove a stored file. Sentinels are refused; a file that is already
    /// gone counts as deleted.
    pub async fn delete(&self, slot: ImageSlot, filename: &str) -> AssetResult<()> {
        if slot.is_sentinel(filename) {
            return Err(AssetError::SentinelImage {
                slot: slot.label(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let path = self.path_of(slot, filename);
        match tokio::fs::remove_file(&path).await {
            Ok(()) => {
                info!("Deleted {} image {}", slot.label(), filename);
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!(
                    "{} image {} was already missing from {}",
                    slot.label(),
                    filename,
                    path.display()
                );
                Ok(())
            }
            Err(e) => Err(io_error(&path, e)),
        }
    }

    /// Best-effort removal of a file being replaced. Sentinels are skipped
    /// silently and failures only logged.
    pub async fn discard(&self, slot: ImageSlot, filename: &str) {
        if slot.is_sentinel(filename) {
            debug!("Keeping default {} image", slot.label());
            return;
        }

        if let Err(e) = self.delete(slot, filename).await {
            warn!("Failed to remove old {} image: {}", slot.label(), e);
        }
    }
}

#[track_caller]
fn invalid(message: String) -> AssetError {
    AssetError::InvalidFile {
        message,
        location: ErrorLocation::from(Location::caller()),
    }
}

#[track_caller]
fn io_error(path: &Path, source: std::io::Error) -> AssetError {
    AssetError::Io {
        path: path.to_path_buf(),
        source,
        location: ErrorLocation::from(Location::caller()),
    }
}
