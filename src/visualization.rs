use opencv::{
    core::{Point, Rect, Scalar},
    imgproc,
    prelude::*,
};

use crate::lanes::LaneBoundaries;
use crate::record::FrameRecord;

const BOX_COLOR: Scalar = Scalar::new(0.0, 255.0, 0.0, 0.0); // Green
const LANE_COLOR: Scalar = Scalar::new(255.0, 0.0, 0.0, 0.0); // Blue
const CONGESTED_COLOR: Scalar = Scalar::new(0.0, 0.0, 255.0, 0.0); // Red
const LABEL_COLOR: Scalar = Scalar::new(0.0, 255.0, 255.0, 0.0); // Yellow

/// Draw a rectangle around every detected vehicle.
pub fn draw_boxes(frame: &mut Mat, boxes: &[Rect]) -> opencv::Result<()> {
    for bbox in boxes {
        imgproc::rectangle(frame, *bbox, BOX_COLOR, 2, imgproc::LINE_8, 0)?;
    }
    Ok(())
}

/// Draw each lane's start line and a `Lane n: count` label. Congested
/// lanes get a red line, the rest blue.
pub fn draw_lane_overlay(
    frame: &mut Mat,
    lanes: &LaneBoundaries,
    record: &FrameRecord,
) -> opencv::Result<()> {
    let height = frame.rows();

    for (i, &(start, _)) in lanes.intervals().iter().enumerate() {
        let lane_number = i as u32 + 1;
        let color = if record.prioritized_lanes.contains(&lane_number) {
            CONGESTED_COLOR
        } else {
            LANE_COLOR
        };

        imgproc::line(
            frame,
            Point::new(start, 0),
            Point::new(start, height),
            color,
            2,
            imgproc::LINE_8,
            0,
        )?;

        let label = format!("Lane {}: {}", lane_number, record.lane_counts[i]);
        imgproc::put_text(
            frame,
            &label,
            Point::new(start + 10, 50),
            imgproc::FONT_HERSHEY_SIMPLEX,
            0.8,
            LABEL_COLOR,
            2,
            imgproc::LINE_8,
            false,
        )?;
    }

    Ok(())
}
