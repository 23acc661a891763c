//! In-memory model of a COCO detection document.
//!
//! Only the fields the label conversion needs are kept; everything else in
//! the source document is accepted and dropped by the reader.

use super::bbox::BBoxXYWH;
use super::ids::{AnnotationId, CategoryId, ImageId};
use super::space::Pixel;

/// A COCO detection document: images, categories and their annotations.
#[derive(Clone, Debug, Default)]
pub struct Dataset {
    /// All images, in document order.
    pub images: Vec<Image>,

    /// Category definitions. May be empty; the conversion does not need them.
    pub categories: Vec<Category>,

    /// All annotations, in document order.
    pub annotations: Vec<Annotation>,
}

impl Dataset {
    /// Looks up a category name by id.
    pub fn category_name(&self, id: CategoryId) -> Option<&str> {
        self.categories
            .iter()
            .find(|cat| cat.id == id)
            .map(|cat| cat.name.as_str())
    }
}

/// An image entry.
#[derive(Clone, Debug)]
pub struct Image {
    /// Unique identifier for this image.
    pub id: ImageId,

    /// Bare filename of the image inside its split directory.
    pub file_name: String,

    /// Width of the image in pixels. COCO exporters write either integers
    /// or floats here.
    pub width: f64,

    /// Height of the image in pixels.
    pub height: f64,
}

impl Image {
    /// Creates a new image with the given properties.
    pub fn new(
        id: impl Into<ImageId>,
        file_name: impl Into<String>,
        width: impl Into<f64>,
        height: impl Into<f64>,
    ) -> Self {
        Self {
            id: id.into(),
            file_name: file_name.into(),
            width: width.into(),
            height: height.into(),
        }
    }
}

/// A category (class label).
#[derive(Clone, Debug)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

impl Category {
    /// Creates a new category with the given properties.
    pub fn new(id: impl Into<CategoryId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// An annotation: one labelled box on one image.
#[derive(Clone, Debug)]
pub struct Annotation {
    /// Unique identifier for this annotation.
    pub id: AnnotationId,

    /// ID of the image this annotation belongs to.
    pub image_id: ImageId,

    /// ID of the category (class) for this annotation.
    pub category_id: CategoryId,

    /// Bounding box in pixel coordinates (COCO XYWH layout).
    pub bbox: BBoxXYWH<Pixel>,
}

impl Annotation {
    /// Creates a new annotation.
    pub fn new(
        id: impl Into<AnnotationId>,
        image_id: impl Into<ImageId>,
        category_id: impl Into<CategoryId>,
        bbox: BBoxXYWH<Pixel>,
    ) -> Self {
        Self {
            id: id.into(),
            image_id: image_id.into(),
            category_id: category_id.into(),
            bbox,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_name_lookup() {
        let dataset = Dataset {
            images: vec![Image::new(1u64, "000_0001.jpg", 640, 480)],
            categories: vec![Category::new(1u64, "polyp"), Category::new(2u64, "tool")],
            annotations: vec![Annotation::new(
                1u64,
                1u64,
                2u64,
                BBoxXYWH::from_xywh(10.0, 20.0, 30.0, 40.0),
            )],
        };

        assert_eq!(dataset.category_name(CategoryId::new(2)), Some("tool"));
        assert_eq!(dataset.category_name(CategoryId::new(3)), None);
    }
}
