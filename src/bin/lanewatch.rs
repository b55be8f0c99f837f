use clap::Parser;
use opencv::{
    core::{Mat, Size},
    highgui, imgproc,
    prelude::*,
    videoio::{self, VideoCapture},
};
use std::path::PathBuf;

use lanewatch::{config::Config, pipeline::Pipeline, record::RecordLog, visualization};

#[derive(Parser)]
#[command(
    name = "lanewatch",
    about = "Per-lane vehicle counting and congestion flagging for a fixed traffic camera",
    version = "0.1.0"
)]
struct Args {
    /// Path to the input video file
    #[arg(short, long, required = true)]
    input: PathBuf,

    /// Path to the configuration JSON file (defaults apply when omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Where to write the per-frame record array
    #[arg(short, long, default_value = "vehicle_data.json")]
    output: PathBuf,

    /// Show annotated frames and the foreground mask
    #[arg(short, long)]
    visualize: bool,
}

const FRAME_WINDOW: &str = "Detected Vehicles";
const MASK_WINDOW: &str = "Mask";

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let cfg = match &args.config {
        Some(path) => {
            println!("Loading configuration from {:?}...", path);
            Config::from_file(path.to_string_lossy().as_ref())?
        }
        None => Config::default(),
    };

    let mut pipeline = Pipeline::from_config(&cfg)?;

    println!("Opening input file {:?}...", args.input);
    let mut cap = VideoCapture::from_file(&args.input.to_string_lossy(), videoio::CAP_ANY)?;
    if !cap.is_opened()? {
        anyhow::bail!("failed to open video file: {:?}", args.input);
    }

    if args.visualize {
        highgui::named_window(FRAME_WINDOW, highgui::WINDOW_NORMAL)?;
        highgui::named_window(MASK_WINDOW, highgui::WINDOW_NORMAL)?;
    }

    let mut log = RecordLog::new();
    let result = run(&mut cap, &cfg, &mut pipeline, &mut log, args.visualize);

    // release capture and windows on every exit path, then persist
    // whatever was recorded before surfacing any error
    cap.release()?;
    if args.visualize {
        highgui::destroy_all_windows()?;
    }

    log.save_json(&args.output)?;
    println!("Vehicle data saved to {:?} ({} frames)", args.output, log.len());

    result
}

fn run(
    cap: &mut VideoCapture,
    cfg: &Config,
    pipeline: &mut Pipeline,
    log: &mut RecordLog,
    visualize: bool,
) -> anyhow::Result<()> {
    let canonical = Size::new(cfg.frame_width, cfg.frame_height);
    let mut frame = Mat::default();

    loop {
        if !cap.read(&mut frame)? || frame.empty() {
            break;
        }

        let mut resized = Mat::default();
        imgproc::resize(&frame, &mut resized, canonical, 0.0, 0.0, imgproc::INTER_LINEAR)?;

        let analysis = pipeline.process(&resized)?;

        println!("Vehicles per lane: {:?}", analysis.record.lane_counts);
        if !analysis.record.prioritized_lanes.is_empty() {
            println!(
                "Prioritized lanes due to congestion: {:?}",
                analysis.record.prioritized_lanes
            );
        }

        let mut stop = false;
        if visualize {
            visualization::draw_boxes(&mut resized, &analysis.boxes)?;
            visualization::draw_lane_overlay(&mut resized, pipeline.lanes(), &analysis.record)?;
            highgui::imshow(FRAME_WINDOW, &resized)?;
            highgui::imshow(MASK_WINDOW, &analysis.mask)?;

            let key = highgui::wait_key(1)?;
            if key == 'q' as i32 || key == 27 {
                println!("Stopped by user.");
                stop = true;
            }
        }

        log.push(analysis.record);
        if stop {
            break;
        }
    }

    Ok(())
}
