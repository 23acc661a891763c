//! Image directory listing.

use std::path::Path;

use log::debug;
use walkdir::WalkDir;

use crate::error::Coco2YoloError;

/// Extensions treated as images, compared case-insensitively.
pub const IMAGE_EXTENSIONS: [&str; 7] = ["jpg", "jpeg", "png", "bmp", "tif", "tiff", "gif"];

/// Lists the image files directly inside `dir`.
///
/// Returns bare filenames (not paths), sorted. Subdirectories are not
/// descended into, and only regular files count; a symlink counts when it
/// points at a regular file. Entries that cannot be inspected, such as
/// dangling symlinks, are left out.
///
/// # Errors
/// Returns [`Coco2YoloError::ImageDirRead`] if `dir` itself does not exist
/// or cannot be read.
pub fn list_images(dir: &Path) -> Result<Vec<String>, Coco2YoloError> {
    let mut names = Vec::new();

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).follow_links(true) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if err.depth() > 0 => {
                debug!("Ignoring unreadable entry in {}: {}", dir.display(), err);
                continue;
            }
            Err(source) => {
                return Err(Coco2YoloError::ImageDirRead {
                    path: dir.to_path_buf(),
                    source,
                })
            }
        };

        if !entry.file_type().is_file() || !has_image_extension(entry.path()) {
            continue;
        }

        names.push(entry.file_name().to_string_lossy().into_owned());
    }

    names.sort();
    Ok(names)
}

fn has_image_extension(path: &Path) -> bool {
    let Some(ext) = path.extension().and_then(|ext| ext.to_str()) else {
        return false;
    };

    IMAGE_EXTENSIONS
        .iter()
        .any(|allowed_ext| ext.eq_ignore_ascii_case(allowed_ext))
}
