// File: crates/latent-core/src/animation.rs
// Summary: Assemble per-epoch PNG frames into looping GIFs.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame, RgbaImage};

use crate::error::{Result, VizError};

/// GIF delays are stored in hundredths of a second.
const GIF_TICK_MS: f64 = 10.0;

/// How long each frame of an animation is shown.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FrameTiming {
    /// Every frame lasts `1 / fps` seconds.
    Fixed { fps: u32 },
    /// Frame `k` lasts `ln(offset + k + 1) - ln(offset + k)` seconds, so early
    /// epochs linger and later ones flash by. Never shorter than `1 / fps`.
    LogTime { offset: f64, fps: u32 },
}

impl FrameTiming {
    /// Per-frame durations in milliseconds, rounded to GIF precision.
    pub fn durations_ms(&self, frames: usize) -> Result<Vec<u32>> {
        let fps = match *self {
            FrameTiming::Fixed { fps } | FrameTiming::LogTime { fps, .. } => fps,
        };
        if fps == 0 {
            return Err(VizError::invalid("fps", "must be at least 1"));
        }
        let tick_ms = 1000.0 / fps as f64;
        let raw: Vec<f64> = match *self {
            FrameTiming::Fixed { .. } => vec![tick_ms; frames],
            FrameTiming::LogTime { offset, .. } => {
                if !offset.is_finite() || offset <= 0.0 {
                    return Err(VizError::invalid("log-time offset", offset.to_string()));
                }
                (0..frames)
                    .map(|k| {
                        let k = k as f64;
                        ((offset + k + 1.0).ln() - (offset + k).ln()) * 1000.0
                    })
                    .map(|ms| ms.max(tick_ms))
                    .collect()
            }
        };
        Ok(raw
            .into_iter()
            .map(|ms| ((ms / GIF_TICK_MS).round().max(1.0) * GIF_TICK_MS) as u32)
            .collect())
    }
}

/// Sorted `*.png` files in `dir`. Hidden entries (e.g. `.gitkeep`) are skipped quietly,
/// anything else is skipped with a warning.
pub fn frame_paths(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        let is_png = path
            .extension()
            .map(|e| e.eq_ignore_ascii_case("png"))
            .unwrap_or(false);
        let hidden = path
            .file_name()
            .map(|n| n.to_string_lossy().starts_with('.'))
            .unwrap_or(false);
        if is_png && path.is_file() {
            paths.push(path);
        } else if hidden {
            tracing::debug!(path = %path.display(), "skipping hidden entry");
        } else {
            tracing::warn!(path = %path.display(), "skipping non-frame file");
        }
    }
    paths.sort();
    Ok(paths)
}

/// Decode every frame in `dir` in file-name order. All frames must share one size.
pub fn collect_frames(dir: &Path) -> Result<Vec<RgbaImage>> {
    let paths = frame_paths(dir)?;
    if paths.is_empty() {
        return Err(VizError::NoFrames(dir.to_path_buf()));
    }
    let mut frames: Vec<RgbaImage> = Vec::with_capacity(paths.len());
    for path in paths {
        let img = image::open(&path)?.to_rgba8();
        if let Some(first) = frames.first() {
            if img.dimensions() != first.dimensions() {
                return Err(VizError::FrameSize {
                    path,
                    expected: first.dimensions(),
                    got: img.dimensions(),
                });
            }
        }
        frames.push(img);
    }
    Ok(frames)
}

/// Encode `frames` as an endlessly looping GIF at `path`.
///
/// `speed` is the colour quantiser speed, 1 (best) to 30 (fastest).
pub fn write_gif(frames: Vec<RgbaImage>, timing: FrameTiming, speed: i32, path: &Path) -> Result<()> {
    if frames.is_empty() {
        return Err(VizError::invalid("frames", "nothing to animate"));
    }
    let durations = timing.durations_ms(frames.len())?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let file = File::create(path)?;
    let mut encoder = GifEncoder::new_with_speed(BufWriter::new(file), speed.clamp(1, 30));
    encoder.set_repeat(Repeat::Infinite)?;
    let count = frames.len();
    for (img, ms) in frames.into_iter().zip(durations) {
        let delay = Delay::from_numer_denom_ms(ms, 1);
        encoder.encode_frame(Frame::from_parts(img, 0, 0, delay))?;
    }

    tracing::info!(path = %path.display(), frames = count, "wrote animation");
    Ok(())
}

/// [`collect_frames`] from `dir` followed by [`write_gif`] to `path`.
pub fn animate_dir(dir: &Path, timing: FrameTiming, speed: i32, path: &Path) -> Result<usize> {
    let frames = collect_frames(dir)?;
    let count = frames.len();
    write_gif(frames, timing, speed, path)?;
    Ok(count)
}
