// File: crates/latent-core/tests/animation.rs
// Purpose: Frame discovery, timing and GIF assembly.

use std::fs::File;
use std::io::{BufReader, Write};
use std::sync::{Arc, Mutex};

use image::codecs::gif::GifDecoder;
use image::{AnimationDecoder, Rgba, RgbaImage};
use latent_core::animation::{frame_paths, FrameTiming};
use latent_core::{animate_dir, collect_frames, write_gif, VizError};

fn solid(w: u32, h: u32, v: u8) -> RgbaImage {
    RgbaImage::from_pixel(w, h, Rgba([v, 255 - v, v / 2, 255]))
}

#[test]
fn fixed_timing_is_uniform() {
    let ms = FrameTiming::Fixed { fps: 5 }.durations_ms(4).unwrap();
    assert_eq!(ms, vec![200, 200, 200, 200]);
}

#[test]
fn log_timing_shrinks_then_floors() {
    let ms = FrameTiming::LogTime { offset: 4.0, fps: 25 }.durations_ms(40).unwrap();
    // ln(5/4) = 0.223s
    assert_eq!(ms[0], 220);
    assert!(ms.windows(2).all(|w| w[0] >= w[1]));
    assert_eq!(*ms.last().unwrap(), 40);
    assert!(ms.iter().all(|&d| d % 10 == 0));
}

#[test]
fn zero_fps_is_invalid() {
    assert!(FrameTiming::Fixed { fps: 0 }.durations_ms(3).is_err());
    assert!(FrameTiming::LogTime { offset: 0.0, fps: 25 }.durations_ms(3).is_err());
}

#[test]
fn frames_sorted_and_non_png_skipped() {
    let dir = tempfile::tempdir().unwrap();
    for (name, v) in [("000002.png", 20u8), ("000000.png", 0), ("000001.png", 10)] {
        solid(4, 3, v).save(dir.path().join(name)).unwrap();
    }
    std::fs::write(dir.path().join(".gitkeep"), b"").unwrap();
    std::fs::write(dir.path().join("notes.txt"), b"hello").unwrap();

    let names: Vec<String> = frame_paths(dir.path())
        .unwrap()
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["000000.png", "000001.png", "000002.png"]);

    let frames = collect_frames(dir.path()).unwrap();
    assert_eq!(frames.len(), 3);
    assert_eq!(frames[1].get_pixel(0, 0), &Rgba([10, 245, 5, 255]));
}

#[derive(Clone, Default)]
struct LogBuf(Arc<Mutex<Vec<u8>>>);

impl Write for LogBuf {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }
    fn flush(&mut self) -> std::io::Result<()> { Ok(()) }
}

#[test]
fn stray_files_warn_but_hidden_files_do_not() {
    let dir = tempfile::tempdir().unwrap();
    solid(2, 2, 0).save(dir.path().join("0000000000.png")).unwrap();
    std::fs::write(dir.path().join(".gitkeep"), b"").unwrap();
    std::fs::write(dir.path().join("notes.txt"), b"hello").unwrap();

    let buf = LogBuf::default();
    let writer = buf.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .finish();
    let paths = tracing::subscriber::with_default(subscriber, || frame_paths(dir.path()).unwrap());
    assert_eq!(paths.len(), 1);

    let log = String::from_utf8(buf.0.lock().unwrap().clone()).unwrap();
    let warns: Vec<&str> = log.lines().filter(|l| l.contains("WARN")).collect();
    assert_eq!(warns.len(), 1, "log was:\n{log}");
    assert!(warns[0].contains("notes.txt"));
    assert!(log.lines().any(|l| l.contains("DEBUG") && l.contains(".gitkeep")));
}

#[test]
fn empty_dir_has_no_frames() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(".gitkeep"), b"").unwrap();
    assert!(matches!(collect_frames(dir.path()), Err(VizError::NoFrames(_))));
}

#[test]
fn mixed_sizes_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    solid(4, 4, 0).save(dir.path().join("a.png")).unwrap();
    solid(5, 4, 0).save(dir.path().join("b.png")).unwrap();
    assert!(matches!(collect_frames(dir.path()), Err(VizError::FrameSize { expected: (4, 4), got: (5, 4), .. })));
}

#[test]
fn missing_dir_fails() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(collect_frames(&dir.path().join("absent")), Err(VizError::Io(_))));
}

#[test]
fn gif_round_trip_keeps_frames_and_delays() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out/anim.gif");
    let frames = vec![solid(8, 8, 0), solid(8, 8, 100), solid(8, 8, 200)];
    write_gif(frames, FrameTiming::Fixed { fps: 5 }, 10, &out).unwrap();

    let decoder = GifDecoder::new(BufReader::new(File::open(&out).unwrap())).unwrap();
    let decoded = decoder.into_frames().collect_frames().unwrap();
    assert_eq!(decoded.len(), 3);
    for f in &decoded {
        assert_eq!(f.delay().numer_denom_ms(), (200, 1));
        assert_eq!(f.buffer().dimensions(), (8, 8));
    }
}

#[test]
fn animate_dir_counts_frames() {
    let dir = tempfile::tempdir().unwrap();
    let frames_dir = dir.path().join("canvas");
    std::fs::create_dir_all(&frames_dir).unwrap();
    for k in 0..4u8 {
        solid(6, 6, k * 40).save(frames_dir.join(format!("{k:06}.png"))).unwrap();
    }
    let out = dir.path().join("canvas.gif");
    let n = animate_dir(&frames_dir, FrameTiming::LogTime { offset: 4.0, fps: 25 }, 10, &out).unwrap();
    assert_eq!(n, 4);
    assert!(std::fs::metadata(&out).unwrap().len() > 0);
}

#[test]
fn empty_frame_list_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    assert!(write_gif(Vec::new(), FrameTiming::Fixed { fps: 5 }, 10, &dir.path().join("x.gif")).is_err());
}
