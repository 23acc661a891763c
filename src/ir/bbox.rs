//! Bounding box types for the two layouts this crate deals with.
//!
//! COCO stores `[x_min, y_min, width, height]` in pixels; YOLO stores
//! `center_x center_y width height` normalized by the image size.

use std::marker::PhantomData;

use super::{Normalized, Pixel};

/// An axis-aligned box given by its top-left corner and its size (COCO layout).
///
/// Like the rest of the model, construction does not check that the size
/// is non-negative; a malformed box is converted as-is.
#[derive(Clone, Copy, PartialEq)]
pub struct BBoxXYWH<TSpace> {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    _space: PhantomData<TSpace>,
}

impl<TSpace> BBoxXYWH<TSpace> {
    #[inline]
    pub fn from_xywh(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            _space: PhantomData,
        }
    }

    /// Returns `(x, y, width, height)`.
    #[inline]
    pub fn to_xywh(&self) -> (f64, f64, f64, f64) {
        (self.x, self.y, self.width, self.height)
    }
}

impl<TSpace> std::fmt::Debug for BBoxXYWH<TSpace> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BBoxXYWH")
            .field("x", &self.x)
            .field("y", &self.y)
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

/// An axis-aligned box given by its center and its size (YOLO layout).
#[derive(Clone, Copy, PartialEq)]
pub struct BBoxCXCYWH<TSpace> {
    pub cx: f64,
    pub cy: f64,
    pub width: f64,
    pub height: f64,
    _space: PhantomData<TSpace>,
}

impl<TSpace> BBoxCXCYWH<TSpace> {
    #[inline]
    pub fn from_cxcywh(cx: f64, cy: f64, width: f64, height: f64) -> Self {
        Self {
            cx,
            cy,
            width,
            height,
            _space: PhantomData,
        }
    }

    /// Returns `(cx, cy, width, height)`.
    #[inline]
    pub fn to_cxcywh(&self) -> (f64, f64, f64, f64) {
        (self.cx, self.cy, self.width, self.height)
    }
}

impl<TSpace> std::fmt::Debug for BBoxCXCYWH<TSpace> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BBoxCXCYWH")
            .field("cx", &self.cx)
            .field("cy", &self.cy)
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

impl BBoxXYWH<Pixel> {
    /// Converts a pixel-space COCO box into a normalized YOLO box.
    ///
    /// # Arguments
    /// * `image_width` - The width of the image in pixels
    /// * `image_height` - The height of the image in pixels
    pub fn to_normalized_cxcywh(
        &self,
        image_width: f64,
        image_height: f64,
    ) -> BBoxCXCYWH<Normalized> {
        BBoxCXCYWH::from_cxcywh(
            (self.x + self.width / 2.0) / image_width,
            (self.y + self.height / 2.0) / image_height,
            self.width / image_width,
            self.height / image_height,
        )
    }
}

impl BBoxCXCYWH<Normalized> {
    /// Converts a normalized YOLO box back into a pixel-space COCO box.
    pub fn to_pixel_xywh(&self, image_width: f64, image_height: f64) -> BBoxXYWH<Pixel> {
        let width = self.width * image_width;
        let height = self.height * image_height;
        BBoxXYWH::from_xywh(
            self.cx * image_width - width / 2.0,
            self.cy * image_height - height / 2.0,
            width,
            height,
        )
    }
}
