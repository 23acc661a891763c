//! Fuzz target for COCO JSON parsing and label rendering.
//!
//! Run with:
//!   cargo +nightly fuzz run coco_json_parse

#![no_main]

use coco2yolo::ir::io_coco_json::from_coco_slice;
use coco2yolo::ir::io_yolo::render_label_file;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // 10MB is generous for JSON annotation files.
    if data.len() > 10 * 1024 * 1024 {
        return;
    }

    let Ok(dataset) = from_coco_slice(data) else {
        return;
    };

    // Rendering must return an error, never panic, on odd sizes or categories.
    for image in &dataset.images {
        let anns: Vec<_> = dataset
            .annotations
            .iter()
            .filter(|ann| ann.image_id == image.id)
            .collect();
        let _ = render_label_file(image, &anns);
    }
});
