//! COCO JSON reader.
//!
//! COCO bounding boxes use `[x, y, width, height]` where `(x, y)` is the
//! top-left corner in absolute pixel coordinates. The model keeps that
//! layout as-is so the YOLO conversion works on the exact source values.
//!
//! Only the keys the label conversion needs are required. Any other keys
//! (`info`, `licenses`, `segmentation`, `area`, ...) are ignored, and a
//! missing `categories` list is treated as empty.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use super::model::{Annotation, Category, Dataset, Image};
use super::{AnnotationId, BBoxXYWH, CategoryId, ImageId, Pixel};
use crate::error::Coco2YoloError;

// ============================================================================
// COCO Schema Types (internal to this module)
// ============================================================================

/// Top-level COCO document.
#[derive(Debug, Deserialize)]
struct CocoDataset {
    images: Vec<CocoImage>,

    annotations: Vec<CocoAnnotation>,

    #[serde(default)]
    categories: Vec<CocoCategory>,
}

/// COCO image entry.
#[derive(Debug, Deserialize)]
struct CocoImage {
    id: u64,
    file_name: String,
    width: f64,
    height: f64,
}

/// COCO category entry.
#[derive(Debug, Deserialize)]
struct CocoCategory {
    id: u64,
    name: String,
}

/// COCO annotation entry.
#[derive(Debug, Deserialize)]
struct CocoAnnotation {
    id: u64,
    image_id: u64,
    category_id: u64,

    /// COCO bbox format: [x, y, width, height] with (x,y) as top-left corner
    bbox: [f64; 4],
}

// ============================================================================
// Public API
// ============================================================================

/// Reads a dataset from a COCO JSON file.
///
/// # Errors
/// Returns [`Coco2YoloError::Io`] if the file cannot be opened and
/// [`Coco2YoloError::CocoJsonParse`] if it is not valid JSON or a required
/// key is missing.
///
/// # Example
/// ```no_run
/// use std::path::Path;
/// use coco2yolo::ir::io_coco_json::read_coco_json;
///
/// let dataset = read_coco_json(Path::new("annotations/annotations.json"))?;
/// # Ok::<(), coco2yolo::Coco2YoloError>(())
/// ```
pub fn read_coco_json(path: &Path) -> Result<Dataset, Coco2YoloError> {
    let file = File::open(path).map_err(Coco2YoloError::Io)?;
    let reader = BufReader::new(file);

    let coco: CocoDataset =
        serde_json::from_reader(reader).map_err(|source| Coco2YoloError::CocoJsonParse {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(coco_to_model(coco))
}

/// Reads a dataset from a COCO JSON string.
///
/// Useful for testing without file I/O.
pub fn from_coco_str(json: &str) -> Result<Dataset, serde_json::Error> {
    let coco: CocoDataset = serde_json::from_str(json)?;
    Ok(coco_to_model(coco))
}

/// Reads a dataset from a COCO JSON byte slice.
///
/// Useful for fuzzing and processing raw bytes without UTF-8 validation overhead.
pub fn from_coco_slice(bytes: &[u8]) -> Result<Dataset, serde_json::Error> {
    let coco: CocoDataset = serde_json::from_slice(bytes)?;
    Ok(coco_to_model(coco))
}

// ============================================================================
// Conversion: COCO -> model
// ============================================================================

fn coco_to_model(coco: CocoDataset) -> Dataset {
    let images = coco
        .images
        .into_iter()
        .map(|img| Image {
            id: ImageId::new(img.id),
            file_name: img.file_name,
            width: img.width,
            height: img.height,
        })
        .collect();

    let categories = coco
        .categories
        .into_iter()
        .map(|cat| Category {
            id: CategoryId::new(cat.id),
            name: cat.name,
        })
        .collect();

    let annotations = coco
        .annotations
        .into_iter()
        .map(|ann| {
            let [x, y, w, h] = ann.bbox;
            Annotation::new(
                AnnotationId::new(ann.id),
                ImageId::new(ann.image_id),
                CategoryId::new(ann.category_id),
                BBoxXYWH::<Pixel>::from_xywh(x, y, w, h),
            )
        })
        .collect();

    Dataset {
        images,
        categories,
        annotations,
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_coco_json() -> &'static str {
        r#"{
            "info": {"year": 2024, "description": "Test dataset"},
            "images": [
                {"id": 1, "width": 640, "height": 480, "file_name": "001_0001.jpg", "license": 1}
            ],
            "categories": [
                {"id": 1, "name": "polyp", "supercategory": "lesion"}
            ],
            "annotations": [
                {
                    "id": 7,
                    "image_id": 1,
                    "category_id": 1,
                    "bbox": [10, 20.5, 90.0, 60],
                    "area": 5400.0,
                    "iscrowd": 0,
                    "segmentation": []
                }
            ]
        }"#
    }

    #[test]
    fn test_coco_to_model_basic() {
        let dataset = from_coco_str(sample_coco_json()).expect("parse failed");

        assert_eq!(dataset.images.len(), 1);
        assert_eq!(dataset.categories.len(), 1);
        assert_eq!(dataset.annotations.len(), 1);

        let img = &dataset.images[0];
        assert_eq!(img.id.as_u64(), 1);
        assert_eq!(img.file_name, "001_0001.jpg");
        assert_eq!(img.width, 640.0);
        assert_eq!(img.height, 480.0);

        assert_eq!(dataset.categories[0].name, "polyp");

        let ann = &dataset.annotations[0];
        assert_eq!(ann.id.as_u64(), 7);
        assert_eq!(ann.image_id.as_u64(), 1);
        assert_eq!(ann.category_id.as_u64(), 1);
        assert_eq!(ann.bbox.to_xywh(), (10.0, 20.5, 90.0, 60.0));
    }

    #[test]
    fn test_categories_are_optional() {
        let json = r#"{
            "images": [{"id": 1, "width": 10, "height": 10, "file_name": "a.jpg"}],
            "annotations": []
        }"#;

        let dataset = from_coco_str(json).expect("parse failed");
        assert!(dataset.categories.is_empty());
        assert!(dataset.annotations.is_empty());
    }

    #[test]
    fn test_float_image_sizes_are_accepted() {
        let json = r#"{
            "images": [{"id": 1, "width": 640.0, "height": 480.5, "file_name": "a.jpg"}],
            "annotations": []
        }"#;

        let dataset = from_coco_str(json).expect("parse failed");
        assert_eq!(dataset.images[0].width, 640.0);
        assert_eq!(dataset.images[0].height, 480.5);
    }

    #[test]
    fn test_missing_required_key_fails() {
        // Annotation has no bbox.
        let json = r#"{
            "images": [{"id": 1, "width": 10, "height": 10, "file_name": "a.jpg"}],
            "annotations": [{"id": 1, "image_id": 1, "category_id": 1}]
        }"#;

        let err = from_coco_str(json).unwrap_err();
        assert!(err.to_string().contains("bbox"));
    }

    #[test]
    fn test_missing_top_level_list_fails() {
        let err = from_coco_str(r#"{"images": []}"#).unwrap_err();
        assert!(err.to_string().contains("annotations"));
    }

    #[test]
    fn test_short_bbox_fails() {
        let json = r#"{
            "images": [{"id": 1, "width": 10, "height": 10, "file_name": "a.jpg"}],
            "annotations": [{"id": 1, "image_id": 1, "category_id": 1, "bbox": [1, 2, 3]}]
        }"#;

        assert!(from_coco_str(json).is_err());
    }

    #[test]
    fn test_read_coco_json_reports_path_on_parse_error() {
        let temp = tempfile::tempdir().expect("create temp dir");
        let path = temp.path().join("broken.json");
        std::fs::write(&path, "{ not json").expect("write file");

        let err = read_coco_json(&path).unwrap_err();
        match err {
            Coco2YoloError::CocoJsonParse { path: p, .. } => assert_eq!(p, path),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_read_coco_json_missing_file_is_io_error() {
        let temp = tempfile::tempdir().expect("create temp dir");
        let err = read_coco_json(&temp.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, Coco2YoloError::Io(_)));
    }
}
