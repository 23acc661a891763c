use std::path::PathBuf;
use thiserror::Error;

/// The main error type for coco2yolo operations.
#[derive(Debug, Error)]
pub enum Coco2YoloError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse COCO JSON from {path}: {source}")]
    CocoJsonParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to list images in {path}: {source}")]
    ImageDirRead {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Failed to write label file {path}: {source}")]
    LabelWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Annotation {annotation_id} references image {image_id}, which is not in the image list")]
    MissingImageRef { annotation_id: u64, image_id: u64 },

    #[error("Image {image_id} has invalid size {width}x{height}; width and height must be non-zero")]
    InvalidImageSize {
        image_id: u64,
        width: f64,
        height: f64,
    },

    #[error("Invalid category id {0}: category ids start at 1")]
    InvalidCategory(u64),

    #[error("Failed to serialize report: {0}")]
    ReportWrite(#[source] serde_json::Error),
}
