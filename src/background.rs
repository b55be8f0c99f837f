use anyhow::Result;
use opencv::{
    core::{Mat, Ptr},
    prelude::*,
    video::{self, BackgroundSubtractorTrait},
};

/// Adaptive per-pixel background model (MOG2). Separates moving vehicles
/// from the static road scene; the model keeps learning on every frame.
pub struct BackgroundModel {
    mog2: Ptr<video::BackgroundSubtractorMOG2>,
    history: i32,
    var_threshold: f64,
    detect_shadows: bool,
}

impl BackgroundModel {
    pub fn new(history: i32, var_threshold: f64, detect_shadows: bool) -> Result<Self> {
        let mog2 = video::create_background_subtractor_mog2(history, var_threshold, detect_shadows)?;
        Ok(Self {
            mog2,
            history,
            var_threshold,
            detect_shadows,
        })
    }

    /// Update the model with `frame` and return its foreground mask.
    ///
    /// The mask is CV_8UC1 with the same spatial size as the frame:
    /// 255 for foreground, 127 for detected shadows, 0 for background.
    /// Early frames produce noisy masks until the model has converged.
    pub fn apply(&mut self, frame: &Mat) -> Result<Mat> {
        let mut mask = Mat::default();
        BackgroundSubtractorTrait::apply(&mut self.mog2, frame, &mut mask, -1.0)?;
        Ok(mask)
    }

    /// Discard the learned scene and start over. Never called by the
    /// pipeline itself; exposed for callers that change camera views.
    pub fn reset(&mut self) -> Result<()> {
        self.mog2 =
            video::create_background_subtractor_mog2(self.history, self.var_threshold, self.detect_shadows)?;
        Ok(())
    }
}
