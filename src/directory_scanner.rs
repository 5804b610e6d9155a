// SPDX-License-Identifier: MPL-2.0
//! Directory scanner for populating the gallery.
//!
//! Scans a directory for supported image formats and returns their locators
//! in alphabetical order. The resulting list is handed to
//! [`Lightbox::init`](crate::lightbox::Lightbox::init) once at startup.

use crate::error::{Error, Result};
use std::path::Path;

/// File extensions accepted as gallery images.
const SUPPORTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "bmp"];

/// Returns whether the path points to a supported image format.
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let lower = ext.to_lowercase();
            SUPPORTED_EXTENSIONS.contains(&lower.as_str())
        })
        .unwrap_or(false)
}

/// Scans `dir` for supported image files, sorted alphabetically by file name.
///
/// Returns locator strings (full paths) suitable for the lightbox sequence.
/// An existing but empty directory yields an empty list, not an error.
pub fn scan_gallery(dir: &Path) -> Result<Vec<String>> {
    if !dir.is_dir() {
        return Err(Error::Scan(format!(
            "not a directory: {}",
            dir.display()
        )));
    }

    let mut images = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && is_supported_image(&path) {
            images.push(path);
        }
    }

    images.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    Ok(images
        .into_iter()
        .map(|path| path.display().to_string())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn create_file(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, b"fake image data").expect("failed to create test file");
        path
    }

    #[test]
    fn scan_finds_only_supported_images_in_order() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        create_file(temp_dir.path(), "b.png");
        create_file(temp_dir.path(), "a.jpg");
        create_file(temp_dir.path(), "notes.txt");
        create_file(temp_dir.path(), "c.webp");

        let images = scan_gallery(temp_dir.path()).expect("scan failed");
        assert_eq!(images.len(), 3);
        assert!(images[0].ends_with("a.jpg"));
        assert!(images[1].ends_with("b.png"));
        assert!(images[2].ends_with("c.webp"));
    }

    #[test]
    fn scan_of_empty_directory_yields_empty_list() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let images = scan_gallery(temp_dir.path()).expect("scan failed");
        assert!(images.is_empty());
    }

    #[test]
    fn scan_of_missing_directory_is_an_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let missing = temp_dir.path().join("does-not-exist");
        assert!(scan_gallery(&missing).is_err());
    }

    #[test]
    fn extension_check_is_case_insensitive() {
        assert!(is_supported_image(Path::new("photo.JPG")));
        assert!(is_supported_image(Path::new("photo.jpeg")));
        assert!(!is_supported_image(Path::new("video.mp4")));
        assert!(!is_supported_image(Path::new("no_extension")));
    }
}
