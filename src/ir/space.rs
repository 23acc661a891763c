//! Coordinate space marker types.
//!
//! Zero-sized types used as type parameters to tell pixel-space COCO boxes
//! apart from normalized YOLO boxes at compile time.

use std::fmt;

/// Marker type for pixel coordinates (absolute values, origin top-left).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pixel {}

/// Marker type for coordinates normalized by image width and height.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Normalized {}

impl fmt::Debug for Pixel {
    fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {}
    }
}

impl fmt::Debug for Normalized {
    fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {}
    }
}
