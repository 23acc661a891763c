//! Typed model of the COCO input and the YOLO output.
//!
//! # Design Principles
//!
//! 1. **Type Safety**: Newtype ids and coordinate-space marker types keep
//!    image ids apart from category ids, and pixel boxes apart from
//!    normalized ones.
//!
//! 2. **Source Layout**: Boxes keep COCO's `x, y, width, height` layout so
//!    the YOLO conversion is computed directly from the document values.
//!
//! 3. **Permissive Construction**: Malformed boxes (negative sizes) can be
//!    represented and are converted as-is.
//!
//! # Example
//!
//! ```
//! use coco2yolo::ir::{Annotation, BBoxXYWH, Dataset, Image, Pixel};
//!
//! let dataset = Dataset {
//!     images: vec![Image::new(1u64, "001_0001.jpg", 640, 480)],
//!     annotations: vec![Annotation::new(
//!         1u64, 1u64, 1u64,
//!         BBoxXYWH::<Pixel>::from_xywh(10.0, 20.0, 30.0, 40.0),
//!     )],
//!     ..Default::default()
//! };
//! assert_eq!(dataset.annotations.len(), 1);
//! ```

mod bbox;
mod ids;
pub mod io_coco_json;
pub mod io_yolo;
mod model;
mod space;

pub use bbox::{BBoxCXCYWH, BBoxXYWH};
pub use ids::{AnnotationId, CategoryId, ImageId};
pub use model::{Annotation, Category, Dataset, Image};
pub use space::{Normalized, Pixel};
