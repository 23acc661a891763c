//! Image and annotation filtering.
//!
//! An image is skipped when its filename prefix (the text before the first
//! `_`) is in the exclusion set, or when the file is not present in the
//! split's image directory. Annotations are kept only if they belong to the
//! target category and to an image that was not skipped.

use std::collections::{BTreeSet, HashSet};

use serde::Serialize;

use crate::ir::{Annotation, CategoryId, Dataset, Image, ImageId};

/// Prefixes of the low-resolution recordings excluded by default.
pub const DEFAULT_EXCLUDED_PREFIXES: [&str; 15] = [
    "000", "002", "003", "030", "034", "035", "036", "037", "038", "039", "047", "048", "054",
    "055", "057",
];

/// Returns the filename prefix used for exclusion: everything before the
/// first `_`, or the whole name when it has none.
pub fn filename_prefix(file_name: &str) -> &str {
    file_name
        .split_once('_')
        .map_or(file_name, |(prefix, _)| prefix)
}

/// A set of filename prefixes whose images are always skipped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExclusionSet {
    prefixes: BTreeSet<String>,
}

impl ExclusionSet {
    /// Creates an exclusion set from prefix tokens.
    pub fn new<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            prefixes: prefixes.into_iter().map(Into::into).collect(),
        }
    }

    /// An exclusion set that skips nothing.
    pub fn empty() -> Self {
        Self {
            prefixes: BTreeSet::new(),
        }
    }

    /// Returns true if images named `file_name` are excluded.
    pub fn excludes(&self, file_name: &str) -> bool {
        self.prefixes.contains(filename_prefix(file_name))
    }

    pub fn len(&self) -> usize {
        self.prefixes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.prefixes.iter().map(String::as_str)
    }
}

impl Default for ExclusionSet {
    fn default() -> Self {
        Self::new(DEFAULT_EXCLUDED_PREFIXES)
    }
}

/// Why an image was skipped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// Filename prefix is in the exclusion set.
    Excluded,
    /// File is not present in the image directory.
    Missing,
}

/// An image left out of the conversion.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SkippedImage {
    pub id: ImageId,
    pub file_name: String,
    pub reason: SkipReason,
}

/// Collects the images to skip, in document order.
///
/// `on_disk` is the listing of the split's image directory. Exclusion is
/// checked first, so an excluded image that is also missing is reported as
/// excluded.
pub fn skipped_images(
    images: &[Image],
    on_disk: &[String],
    exclusions: &ExclusionSet,
) -> Vec<SkippedImage> {
    let present: HashSet<&str> = on_disk.iter().map(String::as_str).collect();

    images
        .iter()
        .filter_map(|img| {
            let reason = if exclusions.excludes(&img.file_name) {
                SkipReason::Excluded
            } else if !present.contains(img.file_name.as_str()) {
                SkipReason::Missing
            } else {
                return None;
            };

            Some(SkippedImage {
                id: img.id,
                file_name: img.file_name.clone(),
                reason,
            })
        })
        .collect()
}

/// Annotations surviving the filter, plus counts of what was dropped.
#[derive(Debug, Default)]
pub struct AnnotationSelection<'a> {
    /// Kept annotations, in document order.
    pub kept: Vec<&'a Annotation>,
    /// Dropped because the category differs from the target.
    pub dropped_category: usize,
    /// Dropped because the owning image was skipped.
    pub dropped_skipped_image: usize,
}

/// Selects the annotations of `category` whose image is not in `skipped`.
pub fn select_annotations<'a>(
    dataset: &'a Dataset,
    skipped: &HashSet<ImageId>,
    category: CategoryId,
) -> AnnotationSelection<'a> {
    let mut selection = AnnotationSelection::default();

    for ann in &dataset.annotations {
        if ann.category_id != category {
            selection.dropped_category += 1;
        } else if skipped.contains(&ann.image_id) {
            selection.dropped_skipped_image += 1;
        } else {
            selection.kept.push(ann);
        }
    }

    selection
}
