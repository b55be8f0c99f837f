use anyhow::Result;
use opencv::core::{Mat, Rect};

use crate::background::BackgroundModel;
use crate::config::Config;
use crate::congestion::congested_lanes;
use crate::lanes::LaneBoundaries;
use crate::objects::ObjectFilter;
use crate::record::{FrameRecord, RecordAssembler};
use crate::segmentation::ForegroundSegmenter;

/// Everything one frame produced. The record is the handoff artifact for
/// sinks; mask and boxes exist so a driver can annotate what it shows.
pub struct FrameAnalysis {
    pub record: FrameRecord,
    pub boxes: Vec<Rect>,
    pub mask: Mat,
}

/// The per-frame detection pipeline: background model, segmentation,
/// noise gate, lane counting, congestion decision, record assembly.
/// Holds the only mutable state in the system (the background model and
/// the frame counter), so callers own exactly one instance per stream.
pub struct Pipeline {
    background: BackgroundModel,
    segmenter: ForegroundSegmenter,
    object_filter: ObjectFilter,
    lanes: LaneBoundaries,
    congestion_threshold: u32,
    assembler: RecordAssembler,
}

impl Pipeline {
    pub fn from_config(cfg: &Config) -> Result<Self> {
        Ok(Self {
            background: BackgroundModel::new(cfg.history, cfg.var_threshold, cfg.detect_shadows)?,
            segmenter: ForegroundSegmenter::new(cfg.mask_cutoff),
            object_filter: ObjectFilter::new(cfg.min_object_area),
            lanes: LaneBoundaries::new(cfg.lane_boundaries.clone()),
            congestion_threshold: cfg.congestion_threshold,
            assembler: RecordAssembler::new(),
        })
    }

    pub fn lanes(&self) -> &LaneBoundaries {
        &self.lanes
    }

    /// Process one frame to completion. Expects the frame already resized
    /// to the canonical resolution the lane table was defined for.
    pub fn process(&mut self, frame: &Mat) -> Result<FrameAnalysis> {
        let mask = self.background.apply(frame)?;
        let regions = self.segmenter.segment(&mask)?;
        let boxes = self.object_filter.filter(&regions)?;

        let lane_counts = self.lanes.count_boxes(&boxes);
        let prioritized = congested_lanes(&lane_counts, self.congestion_threshold);
        let record = self.assembler.assemble(lane_counts, prioritized);

        Ok(FrameAnalysis { record, boxes, mask })
    }
}
