use anyhow::Result;
use opencv::{
    core::{Mat, Point, Vector},
    imgproc,
    prelude::*,
};

/// A connected foreground component, kept as its outer contour until the
/// object filter reduces it to a bounding box.
#[derive(Debug, Clone)]
pub struct Region {
    pub contour: Vector<Point>,
}

impl Region {
    pub fn new(contour: Vector<Point>) -> Self {
        Self { contour }
    }
}

/// Turns a foreground likelihood mask into discrete regions.
pub struct ForegroundSegmenter {
    cutoff: f64,
}

impl ForegroundSegmenter {
    /// `cutoff` is the binarization threshold; only mask values above it
    /// survive, so shadows and partial matches are dropped.
    pub fn new(cutoff: f64) -> Self {
        Self { cutoff }
    }

    /// Extract the outer contours of all connected foreground regions.
    /// Nested contours are ignored and region order is unspecified.
    pub fn segment(&self, mask: &Mat) -> Result<Vec<Region>> {
        let mut binary = Mat::default();
        imgproc::threshold(mask, &mut binary, self.cutoff, 255.0, imgproc::THRESH_BINARY)?;

        let mut contours: Vector<Vector<Point>> = Vector::new();
        imgproc::find_contours(
            &binary,
            &mut contours,
            imgproc::RETR_EXTERNAL,
            imgproc::CHAIN_APPROX_SIMPLE,
            Point::new(0, 0),
        )?;

        Ok(contours.into_iter().map(Region::new).collect())
    }
}
