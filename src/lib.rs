//! coco2yolo: COCO detection annotations to YOLO label files.
//!
//! For each image directory (split) the converter lists the images on disk,
//! drops COCO images that are excluded by filename prefix or missing, keeps
//! the annotations of one target category, and writes one YOLO label file
//! per image into the mirrored `labels` directory.
//!
//! # Modules
//!
//! - [`ir`]: Typed COCO model, COCO reader and YOLO label writer
//! - [`listing`]: Image directory listing
//! - [`filter`]: Exclusion set and image/annotation filtering
//! - [`conversion`]: Per-split conversion and reporting
//! - [`config`]: Defaults, YAML config file and command-line overrides
//! - [`error`]: Error types for coco2yolo operations

pub mod config;
pub mod conversion;
pub mod error;
pub mod filter;
pub mod ir;
pub mod listing;

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::debug;

pub use conversion::{convert_dataset, convert_split, ConversionReport, ConvertOptions};
pub use error::Coco2YoloError;

use config::{FileConfig, Overrides, RunConfig};

/// The coco2yolo CLI application.
///
/// With no arguments it converts `annotations/annotations.json` for
/// `dataset/images/train` and `dataset/images/val`, category 1.
#[derive(Parser)]
#[command(name = "coco2yolo")]
#[command(version, about)]
struct Cli {
    /// COCO annotation file [default: annotations/annotations.json].
    #[arg(short, long)]
    annotations: Option<PathBuf>,

    /// Image directory to convert; repeat for several splits
    /// [default: dataset/images/train, dataset/images/val].
    #[arg(short = 'i', long = "image-dir")]
    image_dirs: Vec<PathBuf>,

    /// COCO category id to convert; written as class id `category - 1` [default: 1].
    #[arg(short, long)]
    category: Option<u64>,

    /// Comma-separated filename prefixes to skip (replaces the default list).
    #[arg(long, value_delimiter = ',', conflicts_with = "no_exclude")]
    exclude: Option<Vec<String>>,

    /// Do not skip any filename prefix.
    #[arg(long)]
    no_exclude: bool,

    /// YAML config file; command-line flags take precedence over it.
    #[arg(long, env = "COCO2YOLO_CONFIG")]
    config: Option<PathBuf>,

    /// Report what would be written without touching the filesystem.
    #[arg(long)]
    dry_run: bool,

    /// Output format for the report.
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    output: ReportFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ReportFormat {
    Text,
    Json,
}

/// Run the coco2yolo CLI.
///
/// This is the main entry point for the CLI, called from `main.rs`.
pub fn run() -> Result<(), Coco2YoloError> {
    let cli = Cli::parse();

    let file_config = match &cli.config {
        Some(path) => FileConfig::load(path)?,
        None => FileConfig::default(),
    };

    let exclude = if cli.no_exclude {
        Some(Vec::new())
    } else {
        cli.exclude
    };

    let config = RunConfig::resolve(
        file_config,
        Overrides {
            annotations: cli.annotations,
            image_dirs: cli.image_dirs,
            category: cli.category,
            exclude,
            dry_run: cli.dry_run,
        },
    );

    let reports = run_config(&config)?;

    match cli.output {
        ReportFormat::Json => {
            let json =
                serde_json::to_string_pretty(&reports).map_err(Coco2YoloError::ReportWrite)?;
            println!("{}", json);
        }
        ReportFormat::Text => {
            for report in &reports {
                print!("{}", report);
            }
        }
    }

    Ok(())
}

/// Converts every split of `config`, one after another.
///
/// Each split re-reads the annotation file. The run stops at the first
/// error; splits converted before it keep their label files.
pub fn run_config(config: &RunConfig) -> Result<Vec<ConversionReport>, Coco2YoloError> {
    let prefixes: Vec<&str> = config.options.exclusions.iter().collect();
    debug!("Excluded filename prefixes: {:?}", prefixes);

    config
        .image_dirs
        .iter()
        .map(|image_dir| convert_split(image_dir, &config.annotations, &config.options))
        .collect()
}
