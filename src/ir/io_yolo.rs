//! YOLO label file writer.
//!
//! Each image gets one `.txt` file with one line per object:
//! `<class_id> <cx> <cy> <w> <h>`, coordinates normalized to the image size
//! and printed with six decimals. Label files live in a directory that
//! mirrors the image directory with `images` replaced by `labels`.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use super::model::{Annotation, Image};
use super::{BBoxCXCYWH, Normalized};
use crate::error::Coco2YoloError;

pub const LABEL_EXTENSION: &str = "txt";

/// Derives the label directory for an image directory.
///
/// Every occurrence of `images` in the path is replaced by `labels`, so
/// `dataset/images/train` maps to `dataset/labels/train`.
pub fn labels_dir_for(image_dir: &Path) -> PathBuf {
    PathBuf::from(image_dir.to_string_lossy().replace("images", "labels"))
}

/// Label filename for an image filename: same stem, `.txt` extension.
pub fn label_file_name(image_file_name: &str) -> PathBuf {
    Path::new(image_file_name).with_extension(LABEL_EXTENSION)
}

/// Formats one label line, without the trailing newline.
pub fn format_label_line(class_id: u64, bbox: &BBoxCXCYWH<Normalized>) -> String {
    let (cx, cy, w, h) = bbox.to_cxcywh();
    format!("{} {:.6} {:.6} {:.6} {:.6}", class_id, cx, cy, w, h)
}

/// Renders the full label file contents for one image.
///
/// Lines follow the order of `annotations`; each line ends with `\n`.
pub fn render_label_file(
    image: &Image,
    annotations: &[&Annotation],
) -> Result<String, Coco2YoloError> {
    if image.width == 0.0 || image.height == 0.0 {
        return Err(Coco2YoloError::InvalidImageSize {
            image_id: image.id.as_u64(),
            width: image.width,
            height: image.height,
        });
    }

    let mut contents = String::new();
    for ann in annotations {
        let class_id = ann
            .category_id
            .class_index()
            .ok_or(Coco2YoloError::InvalidCategory(ann.category_id.as_u64()))?;
        let bbox = ann.bbox.to_normalized_cxcywh(image.width, image.height);
        contents.push_str(&format_label_line(class_id, &bbox));
        contents.push('\n');
    }

    Ok(contents)
}

/// Writes (or overwrites) the label file for one image inside `labels_dir`.
///
/// Returns the path of the written file. The parent directory is created
/// if it does not exist yet.
pub fn write_label_file(
    labels_dir: &Path,
    image: &Image,
    annotations: &[&Annotation],
) -> Result<PathBuf, Coco2YoloError> {
    let contents = render_label_file(image, annotations)?;
    let label_path = labels_dir.join(label_file_name(&image.file_name));

    if let Some(parent) = label_path.parent() {
        fs::create_dir_all(parent).map_err(Coco2YoloError::Io)?;
    }

    let write = |path: &Path| -> std::io::Result<()> {
        let mut writer = BufWriter::new(fs::File::create(path)?);
        writer.write_all(contents.as_bytes())?;
        writer.flush()
    };
    write(&label_path).map_err(|source| Coco2YoloError::LabelWrite {
        path: label_path.clone(),
        source,
    })?;

    Ok(label_path)
}
