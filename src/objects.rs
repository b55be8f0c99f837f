use anyhow::Result;
use opencv::{core::Rect, imgproc};

use crate::segmentation::Region;

/// Area gate between raw foreground regions and countable vehicles.
/// The only noise filter in the pipeline; no smoothing or hysteresis.
pub struct ObjectFilter {
    min_area: f64,
}

impl ObjectFilter {
    pub fn new(min_area: f64) -> Self {
        Self { min_area }
    }

    /// Drop regions whose contour area is at or below the minimum and
    /// reduce the survivors to axis-aligned bounding boxes.
    pub fn filter(&self, regions: &[Region]) -> Result<Vec<Rect>> {
        let mut boxes = Vec::new();
        for region in regions {
            let area = imgproc::contour_area(&region.contour, false)?;
            if area > self.min_area {
                boxes.push(imgproc::bounding_rect(&region.contour)?);
            }
        }
        Ok(boxes)
    }
}
