//! COCO to YOLO label conversion for one image directory.
//!
//! A split is converted in three steps: list the images on disk, filter the
//! COCO images and annotations, and write one label file per image that
//! still has annotations.

pub mod report;

pub use report::{ConversionCounts, ConversionReport};

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::error::Coco2YoloError;
use crate::filter::{self, ExclusionSet};
use crate::ir::io_coco_json::read_coco_json;
use crate::ir::io_yolo::{label_file_name, labels_dir_for, render_label_file, write_label_file};
use crate::ir::{Annotation, CategoryId, Dataset, Image, ImageId};
use crate::listing::list_images;

/// Settings shared by every split of a run.
#[derive(Clone, Debug)]
pub struct ConvertOptions {
    /// COCO category to convert; written as class `category - 1`.
    pub category: CategoryId,
    /// Filename prefixes whose images are skipped.
    pub exclusions: ExclusionSet,
    /// Compute the report without touching the filesystem.
    pub dry_run: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            category: CategoryId::new(1),
            exclusions: ExclusionSet::default(),
            dry_run: false,
        }
    }
}

/// Loads `annotation_file` and converts it for the images in `image_dir`.
///
/// The labels directory is created before the annotation file is read, so
/// it exists even when loading fails.
///
/// # Errors
/// Fails on the first I/O, parse or lookup error. Label files written
/// before the failure stay on disk.
pub fn convert_split(
    image_dir: &Path,
    annotation_file: &Path,
    opts: &ConvertOptions,
) -> Result<ConversionReport, Coco2YoloError> {
    prepare_labels_dir(image_dir, opts)?;
    let dataset = read_coco_json(annotation_file)?;
    convert_dataset(&dataset, image_dir, opts)
}

/// Converts an already loaded dataset for the images in `image_dir`.
///
/// Label files go to the mirrored `labels` directory (see
/// [`labels_dir_for`]). The directory is created even if no label file is
/// written.
pub fn convert_dataset(
    dataset: &Dataset,
    image_dir: &Path,
    opts: &ConvertOptions,
) -> Result<ConversionReport, Coco2YoloError> {
    let labels_dir = prepare_labels_dir(image_dir, opts)?;
    let mut report = ConversionReport::new(image_dir, &labels_dir, opts.category.as_u64());
    report.dry_run = opts.dry_run;
    report.counts.images_in_document = dataset.images.len();

    let on_disk = list_images(image_dir)?;
    report.counts.images_on_disk = on_disk.len();
    if on_disk.is_empty() {
        warn!("No images found in {}", image_dir.display());
    }

    let mut skipped_ids = HashSet::new();
    for skipped in filter::skipped_images(&dataset.images, &on_disk, &opts.exclusions) {
        debug!(
            "Skipping image {} ({}): {:?}",
            skipped.id, skipped.file_name, skipped.reason
        );
        skipped_ids.insert(skipped.id);
        report.add_skipped(skipped);
    }

    let selection = filter::select_annotations(dataset, &skipped_ids, opts.category);
    report.counts.annotations_dropped_category = selection.dropped_category;
    report.counts.annotations_dropped_skipped_image = selection.dropped_skipped_image;

    let image_lookup: HashMap<ImageId, &Image> = dataset
        .images
        .iter()
        .filter(|img| !skipped_ids.contains(&img.id))
        .map(|img| (img.id, img))
        .collect();

    for (image_id, annotations) in group_by_image(&selection.kept) {
        let image = image_lookup
            .get(&image_id)
            .ok_or_else(|| Coco2YoloError::MissingImageRef {
                annotation_id: annotations[0].id.as_u64(),
                image_id: image_id.as_u64(),
            })?;

        let label_path = if opts.dry_run {
            render_label_file(image, &annotations)?;
            labels_dir.join(label_file_name(&image.file_name))
        } else {
            write_label_file(&labels_dir, image, &annotations)?
        };

        debug!(
            "{} {} line(s) to {}",
            if opts.dry_run { "Would write" } else { "Wrote" },
            annotations.len(),
            label_path.display()
        );
        report.add_label_file(label_path, annotations.len());
    }

    match dataset.category_name(opts.category) {
        Some(name) => info!(
            "Category {} ({}): {} annotation(s) across {} image(s)",
            opts.category,
            name,
            report.counts.annotations_written,
            report.counts.label_files
        ),
        None => info!(
            "Category {}: {} annotation(s) across {} image(s)",
            opts.category, report.counts.annotations_written, report.counts.label_files
        ),
    }
    if !opts.dry_run {
        info!("Annotation files created in: {}", labels_dir.display());
    }

    Ok(report)
}

/// Checks the target category and creates the labels directory for
/// `image_dir` unless this is a dry run.
fn prepare_labels_dir(image_dir: &Path, opts: &ConvertOptions) -> Result<PathBuf, Coco2YoloError> {
    if opts.category.class_index().is_none() {
        return Err(Coco2YoloError::InvalidCategory(opts.category.as_u64()));
    }

    let labels_dir = labels_dir_for(image_dir);
    if !opts.dry_run {
        fs::create_dir_all(&labels_dir).map_err(Coco2YoloError::Io)?;
    }
    Ok(labels_dir)
}

/// Groups annotations by image.
///
/// Groups are ordered by the first appearance of their image; annotations
/// keep their relative order inside a group.
pub fn group_by_image<'a>(
    annotations: &[&'a Annotation],
) -> Vec<(ImageId, Vec<&'a Annotation>)> {
    let mut groups: Vec<(ImageId, Vec<&'a Annotation>)> = Vec::new();
    let mut index: HashMap<ImageId, usize> = HashMap::new();

    for &ann in annotations {
        let slot = *index.entry(ann.image_id).or_insert_with(|| {
            groups.push((ann.image_id, Vec::new()));
            groups.len() - 1
        });
        groups[slot].1.push(ann);
    }

    groups
}
