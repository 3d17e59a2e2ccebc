//! PNG decoding and encoding for the golden, actual and output images

use std::path::Path;

use image::RgbaImage;

use crate::io::error::{DiffError, Result, WithPath};

/// Load an image from disk as 8-bit RGBA
///
/// # Errors
///
/// Returns an error if:
/// - No file exists at the given path
/// - The file cannot be read or decoded as an image
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<RgbaImage> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(DiffError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let img = image::open(path).map_err(|e| DiffError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(img.to_rgba8())
}

/// Save an image to disk, creating parent directories as needed
///
/// The format follows the file extension.
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written to the specified path
pub fn save_image<P: AsRef<Path>>(img: &RgbaImage, path: P) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_path(parent, "create directory")?;
    }

    img.save(path).map_err(|e| DiffError::ImageExport {
        path: path.to_path_buf(),
        source: e,
    })
}
