//! Run configuration.
//!
//! Values come from three layers, highest priority first: command-line
//! flags, an optional YAML config file, and the built-in defaults.
//!
//! ```yaml
//! annotations: annotations/annotations.json
//! image_dirs:
//!   - dataset/images/train
//!   - dataset/images/val
//! category: 1
//! exclude: ["000", "002"]
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::conversion::ConvertOptions;
use crate::error::Coco2YoloError;
use crate::filter::ExclusionSet;
use crate::ir::CategoryId;

pub const DEFAULT_ANNOTATIONS: &str = "annotations/annotations.json";
pub const DEFAULT_IMAGE_DIRS: [&str; 2] = ["dataset/images/train", "dataset/images/val"];
pub const DEFAULT_CATEGORY: u64 = 1;

/// Contents of a YAML config file. Every key is optional.
#[derive(Debug, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub annotations: Option<PathBuf>,
    pub image_dirs: Option<Vec<PathBuf>>,
    pub category: Option<u64>,
    pub exclude: Option<Vec<String>>,
}

impl FileConfig {
    /// Reads a config file from disk.
    pub fn load(path: &Path) -> Result<Self, Coco2YoloError> {
        let data = fs::read_to_string(path).map_err(Coco2YoloError::Io)?;
        Self::from_yaml_str(&data).map_err(|source| Coco2YoloError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parses config from a YAML string. An empty document is an empty config.
    pub fn from_yaml_str(data: &str) -> Result<Self, serde_yaml::Error> {
        if data.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(data)
    }
}

/// Values given on the command line. `None` / empty means "not given".
#[derive(Debug, Default)]
pub struct Overrides {
    pub annotations: Option<PathBuf>,
    pub image_dirs: Vec<PathBuf>,
    pub category: Option<u64>,
    pub exclude: Option<Vec<String>>,
    pub dry_run: bool,
}

/// Fully resolved settings for one run.
#[derive(Clone, Debug)]
pub struct RunConfig {
    pub annotations: PathBuf,
    /// Splits, converted in this order.
    pub image_dirs: Vec<PathBuf>,
    pub options: ConvertOptions,
}

impl RunConfig {
    /// Merges command-line overrides over the file config over defaults.
    pub fn resolve(file: FileConfig, overrides: Overrides) -> Self {
        let annotations = overrides
            .annotations
            .or(file.annotations)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ANNOTATIONS));

        let image_dirs = if !overrides.image_dirs.is_empty() {
            overrides.image_dirs
        } else {
            file.image_dirs
                .unwrap_or_else(|| DEFAULT_IMAGE_DIRS.iter().map(PathBuf::from).collect())
        };

        let category = overrides
            .category
            .or(file.category)
            .unwrap_or(DEFAULT_CATEGORY);

        let exclusions = match overrides.exclude.or(file.exclude) {
            Some(prefixes) => ExclusionSet::new(prefixes),
            None => ExclusionSet::default(),
        };

        Self {
            annotations,
            image_dirs,
            options: ConvertOptions {
                category: CategoryId::new(category),
                exclusions,
                dry_run: overrides.dry_run,
            },
        }
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self::resolve(FileConfig::default(), Overrides::default())
    }
}
