//! Conversion report types.
//!
//! One report is produced per image directory (split). It records what was
//! read, what was skipped and why, and which label files were written.

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

use crate::filter::{SkipReason, SkippedImage};

/// Summary of converting one split.
#[derive(Clone, Debug, Default, Serialize)]
pub struct ConversionReport {
    /// Directory the images were listed from.
    pub image_dir: PathBuf,
    /// Directory the label files go to.
    pub labels_dir: PathBuf,
    /// Target COCO category id.
    pub category: u64,
    /// True if nothing was written to disk.
    pub dry_run: bool,
    pub counts: ConversionCounts,
    /// Skipped images, in document order.
    pub skipped: Vec<SkippedImage>,
    /// Label files, in the order they were written.
    pub label_files: Vec<PathBuf>,
}

/// Counters collected while converting one split.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ConversionCounts {
    pub images_in_document: usize,
    pub images_on_disk: usize,
    pub images_excluded: usize,
    pub images_missing: usize,
    pub label_files: usize,
    pub annotations_written: usize,
    pub annotations_dropped_category: usize,
    pub annotations_dropped_skipped_image: usize,
}

impl ConversionReport {
    /// Creates an empty report for one split.
    pub fn new(
        image_dir: impl Into<PathBuf>,
        labels_dir: impl Into<PathBuf>,
        category: u64,
    ) -> Self {
        Self {
            image_dir: image_dir.into(),
            labels_dir: labels_dir.into(),
            category,
            ..Default::default()
        }
    }

    /// Records a skipped image and bumps the matching counter.
    pub fn add_skipped(&mut self, skipped: SkippedImage) {
        match skipped.reason {
            SkipReason::Excluded => self.counts.images_excluded += 1,
            SkipReason::Missing => self.counts.images_missing += 1,
        }
        self.skipped.push(skipped);
    }

    /// Records a label file holding `annotations` lines.
    pub fn add_label_file(&mut self, path: PathBuf, annotations: usize) {
        self.counts.label_files += 1;
        self.counts.annotations_written += annotations;
        self.label_files.push(path);
    }
}

impl fmt::Display for ConversionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = &self.counts;

        writeln!(
            f,
            "{} -> {}{}",
            self.image_dir.display(),
            self.labels_dir.display(),
            if self.dry_run { " (dry run)" } else { "" }
        )?;
        writeln!(
            f,
            "  images: {} in document, {} on disk, {} excluded, {} missing",
            c.images_in_document, c.images_on_disk, c.images_excluded, c.images_missing
        )?;
        writeln!(
            f,
            "  category {}: {} annotation(s) in {} label file(s)",
            self.category, c.annotations_written, c.label_files
        )?;

        let dropped = c.annotations_dropped_category + c.annotations_dropped_skipped_image;
        if dropped > 0 {
            writeln!(
                f,
                "  dropped: {} other-category annotation(s), {} on skipped images",
                c.annotations_dropped_category, c.annotations_dropped_skipped_image
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::ImageId;

    #[test]
    fn add_skipped_updates_counters() {
        let mut report = ConversionReport::new("dataset/images/train", "dataset/labels/train", 1);
        report.add_skipped(SkippedImage {
            id: ImageId::new(1),
            file_name: "000_a.jpg".into(),
            reason: SkipReason::Excluded,
        });
        report.add_skipped(SkippedImage {
            id: ImageId::new(2),
            file_name: "001_b.jpg".into(),
            reason: SkipReason::Missing,
        });
        report.add_skipped(SkippedImage {
            id: ImageId::new(3),
            file_name: "001_c.jpg".into(),
            reason: SkipReason::Missing,
        });

        assert_eq!(report.counts.images_excluded, 1);
        assert_eq!(report.counts.images_missing, 2);
        assert_eq!(report.skipped.len(), 3);
    }

    #[test]
    fn display_shows_counts() {
        let mut report = ConversionReport::new("dataset/images/val", "dataset/labels/val", 1);
        report.counts.images_in_document = 4;
        report.counts.images_on_disk = 3;
        report.add_label_file(PathBuf::from("dataset/labels/val/001_a.txt"), 2);

        let text = report.to_string();
        assert!(text.contains("dataset/images/val -> dataset/labels/val"));
        assert!(text.contains("4 in document, 3 on disk"));
        assert!(text.contains("2 annotation(s) in 1 label file(s)"));
        assert!(!text.contains("dropped"));
    }

    #[test]
    fn report_serializes_skip_reasons_as_snake_case() {
        let mut report = ConversionReport::new("images", "labels", 1);
        report.add_skipped(SkippedImage {
            id: ImageId::new(5),
            file_name: "000_a.jpg".into(),
            reason: SkipReason::Excluded,
        });

        let json = serde_json::to_value(&report).expect("serialize report");
        assert_eq!(json["skipped"][0]["id"], 5);
        assert_eq!(json["skipped"][0]["reason"], "excluded");
        assert_eq!(json["counts"]["images_excluded"], 1);
    }
}
