#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

pub const SAMPLE_COCO: &str = include_str!("../fixtures/sample.coco.json");

/// Images of the sample fixture that exist on disk. `005_0002.jpg` is
/// referenced by the annotations but deliberately absent.
pub const SAMPLE_IMAGES_ON_DISK: [&str; 4] =
    ["001_0001.jpg", "000_0001.jpg", "004_0007.png", "006_0003.jpg"];

/// Creates an empty placeholder image; the converter only checks presence.
pub fn touch_image(dir: &Path, name: &str) {
    fs::create_dir_all(dir).expect("create image dir");
    fs::write(dir.join(name), b"not really an image").expect("write image file");
}

/// Writes a COCO document under `root/annotations/annotations.json`.
pub fn write_annotations(root: &Path, json: &str) -> PathBuf {
    let path = root.join("annotations/annotations.json");
    fs::create_dir_all(path.parent().expect("annotation dir")).expect("create annotation dir");
    fs::write(&path, json).expect("write annotations");
    path
}

/// Lays out the sample fixture: annotation file plus `dataset/images/train`.
///
/// Returns `(annotation_file, image_dir)`.
pub fn sample_layout(root: &Path) -> (PathBuf, PathBuf) {
    let annotations = write_annotations(root, SAMPLE_COCO);
    let image_dir = root.join("dataset/images/train");
    for name in SAMPLE_IMAGES_ON_DISK {
        touch_image(&image_dir, name);
    }
    (annotations, image_dir)
}

/// Reads every `.txt` file in `dir` as `(file name, contents)`, sorted by name.
pub fn read_labels(dir: &Path) -> Vec<(String, String)> {
    let mut labels: Vec<(String, String)> = fs::read_dir(dir)
        .expect("read labels dir")
        .map(|entry| entry.expect("dir entry").path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "txt"))
        .map(|path| {
            let name = path
                .file_name()
                .expect("file name")
                .to_string_lossy()
                .into_owned();
            let contents = fs::read_to_string(&path).expect("read label");
            (name, contents)
        })
        .collect();
    labels.sort();
    labels
}
