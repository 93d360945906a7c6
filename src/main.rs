use std::future::Future;
use std::io::Write;
use std::path::PathBuf;
use anyhow::{Context, Result};
use clap::Parser;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;
use rs_gesture_pipeline::{GesturePipeline, ImageDisplay, LandmarkFrame, PipelineConfig};

/// Replays newline-delimited JSON detector results through the gesture pipeline.
#[derive(Debug, Parser)]
#[command(name = "gesture-replay", version, about)]
struct Cli {
    /// JSON pipeline configuration
    #[arg(long)]
    config: Option<PathBuf>,

    /// file of detector results, one JSON object per line (stdin when omitted)
    #[arg(long)]
    input: Option<PathBuf>,
}

fn init_logging() {
    let default_level = "info";
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

/// decode_line turns one raw input line into a validated frame.
fn decode_line(raw: &[u8]) -> Result<LandmarkFrame> {
    let line = std::str::from_utf8(raw).context("line is not valid UTF-8")?;
    let frame = LandmarkFrame::from_json(line.trim())?;
    frame.validate()?;
    Ok(frame)
}

/// read_frames decodes every line of `reader` and forwards valid frames to the pipeline.
///
/// Lines that fail to decode are logged and counted, only I/O errors abort the replay.
///
/// # Returns
/// * `Result<(usize, usize)>` - lines read and lines skipped
async fn read_frames<R: AsyncRead + Unpin>(reader: R, tx: mpsc::Sender<LandmarkFrame>) -> Result<(usize, usize)> {
    let mut reader = BufReader::new(reader);
    let mut buf: Vec<u8> = Vec::new();
    let mut line_no: usize = 0;
    let mut skipped: usize = 0;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).await? == 0 {
            break;
        }
        line_no += 1;
        if buf.iter().all(u8::is_ascii_whitespace) {
            continue;
        }
        let frame = match decode_line(&buf) {
            Ok(frame) => frame,
            Err(e) => {
                tracing::warn!(line = line_no, "skipping detector result: {e:#}");
                skipped += 1;
                continue;
            }
        };
        if tx.send(frame).await.is_err() {
            break;
        }
    }
    Ok((line_no, skipped))
}

async fn replay_input(input: Option<PathBuf>, tx: mpsc::Sender<LandmarkFrame>) -> Result<(usize, usize)> {
    match input {
        Some(path) => {
            let file = tokio::fs::File::open(&path)
                .await
                .with_context(|| format!("cannot open input {}", path.display()))?;
            read_frames(file, tx).await
        }
        None => read_frames(tokio::io::stdin(), tx).await,
    }
}

/// watch_images writes the current image right away, then one line per observed image change.
///
/// The returned future completes once every gesture store handle is dropped.
fn watch_images<W: Write>(mut display: ImageDisplay, mut out: W) -> impl Future<Output = Result<(W, usize)>> {
    let mut last = display.current_image().to_string();
    let initial = writeln!(
        out,
        "{} {}",
        display.current_gesture().map(|g| g.as_str()).unwrap_or("none"),
        last
    );

    async move {
        initial?;
        let mut changes: usize = 0;
        while let Ok((gesture, image)) = display.changed().await {
            if image != last {
                writeln!(out, "{} {}", gesture.map(|g| g.as_str()).unwrap_or("none"), image)?;
                last = image;
                changes += 1;
            }
        }
        Ok((out, changes))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => PipelineConfig::from_json_file(path)?,
        None => PipelineConfig::default(),
    };
    tracing::info!(smile_threshold = config.classifier.smile_threshold, "gesture-replay starting");

    let pipeline = GesturePipeline::from_config(&config);
    let display = ImageDisplay::new(pipeline.store(), config.display.clone());
    let printer = tokio::spawn(watch_images(display, std::io::stdout()));

    let (tx, rx) = mpsc::channel(config.frame_queue_size);
    let (read_result, processed) = tokio::join!(replay_input(cli.input, tx), pipeline.run(rx));
    let (lines, skipped) = read_result?;
    let final_gesture = pipeline.store().current_gesture();

    drop(pipeline);
    let (_, changes) = printer.await??;

    tracing::info!(
        lines,
        skipped,
        processed,
        changes,
        gesture = final_gesture.map(|g| g.as_str()).unwrap_or("none"),
        "replay finished"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use tokio::sync::mpsc;
    use rs_gesture_pipeline::{GesturePipeline, ImageDisplay, Landmark, LandmarkFrame, PipelineConfig};
    use super::{read_frames, watch_images};

    fn frame_line(frame: &LandmarkFrame) -> Vec<u8> {
        let mut line = serde_json::to_vec(frame).unwrap();
        line.push(b'\n');
        line
    }

    fn hands_down_pose() -> Vec<Landmark> {
        let mut pose = vec![Landmark::new(0.5, 0.5); 33];
        pose[15] = Landmark::new(0.6, 0.9);
        pose[16] = Landmark::new(0.4, 0.9);
        pose
    }

    async fn collect(mut rx: mpsc::Receiver<LandmarkFrame>) -> Vec<LandmarkFrame> {
        let mut frames = Vec::new();
        while let Some(frame) = rx.recv().await {
            frames.push(frame);
        }
        frames
    }

    #[tokio::test]
    async fn test_read_frames_skips_malformed_lines() {
        let mut input: Vec<u8> = Vec::new();
        input.extend_from_slice(b"{}\n");
        input.extend_from_slice(&[0xff, 0xfe, b'\n']);
        input.extend_from_slice(b"{\"poseLandmarks\": \n");
        input.extend_from_slice(b"\n   \n");
        input.extend_from_slice(b"{\"poseLandmarks\":[{\"x\":0.5,\"y\":0.5}]}\n");
        input.extend_from_slice(&frame_line(&LandmarkFrame::new(None, Some(hands_down_pose()))));
        input.extend_from_slice(b"{}");

        let (tx, rx) = mpsc::channel(16);
        let (lines, skipped) = read_frames(input.as_slice(), tx).await.unwrap();
        let frames = collect(rx).await;

        assert_eq!(lines, 8);
        assert_eq!(skipped, 3);
        assert_eq!(frames.len(), 3);
        assert!(!frames[0].has_landmarks());
        assert_eq!(frames[1].pose_landmarks.as_ref().unwrap().len(), 33);
        assert!(!frames[2].has_landmarks());
    }

    #[tokio::test]
    async fn test_read_frames_stops_when_pipeline_is_gone() {
        let input = b"{}\n{}\n{}\n".to_vec();
        let (tx, rx) = mpsc::channel(1);
        drop(rx);
        let (lines, skipped) = read_frames(input.as_slice(), tx).await.unwrap();
        assert_eq!((lines, skipped), (1, 0));
    }

    #[tokio::test]
    async fn test_watch_images_prints_only_changes() {
        let pipeline = GesturePipeline::from_config(&PipelineConfig::default());
        let display = ImageDisplay::new(pipeline.store(), PipelineConfig::default().display);
        let printer = watch_images(display, Vec::new());

        let serious = LandmarkFrame::new(None, Some(hands_down_pose()));
        pipeline.on_results(&serious);
        pipeline.on_results(&serious);
        drop(pipeline);

        let (out, changes) = printer.await.unwrap();
        assert_eq!(changes, 1);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "none /MonkeyFacer/images/ahhh.png\nserious /MonkeyFacer/images/xd.png\n"
        );
    }

    #[tokio::test]
    async fn test_watch_images_without_frames() {
        let pipeline = GesturePipeline::from_config(&PipelineConfig::default());
        let display = ImageDisplay::new(pipeline.store(), PipelineConfig::default().display);
        let printer = watch_images(display, Vec::new());

        // a frame without landmarks keeps the placeholder
        pipeline.on_results(&LandmarkFrame::default());
        drop(pipeline);

        let (out, changes) = printer.await.unwrap();
        assert_eq!(changes, 0);
        assert_eq!(String::from_utf8(out).unwrap(), "none /MonkeyFacer/images/ahhh.png\n");
    }
}
