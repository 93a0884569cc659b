use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::foundation::core::{Canvas, Fps, FrameIndex, FrameRange};
use crate::foundation::error::{PageError, PageResult};
use crate::render::backend::{FrameRGBA, RenderSettings};
use crate::render::cpu::CpuRenderer;
use crate::scene::state::PageState;

/// How a frame range is spread over threads.
#[derive(Clone, Debug)]
pub struct RenderThreading {
    pub parallel: bool,
    pub chunk_size: usize,
    pub threads: Option<usize>,
}

impl Default for RenderThreading {
    fn default() -> Self {
        Self {
            parallel: false,
            chunk_size: 64,
            threads: None,
        }
    }
}

/// Render a single frame at page time `t_s`.
pub fn render_frame(
    state: &PageState,
    canvas: Canvas,
    t_s: f64,
    settings: RenderSettings,
) -> PageResult<FrameRGBA> {
    CpuRenderer::new(settings).render_frame(state, canvas, t_s)
}

/// Render every frame of `range`, in order. Frame `i` is sampled at `i / fps` seconds.
#[tracing::instrument(skip(state, settings, threading), fields(frames = range.len_frames()))]
pub fn render_frames(
    state: &PageState,
    canvas: Canvas,
    fps: Fps,
    range: FrameRange,
    settings: RenderSettings,
    threading: &RenderThreading,
) -> PageResult<Vec<FrameRGBA>> {
    let mut out = Vec::with_capacity(range.len_frames().min(4096) as usize);
    render_chunked(state, canvas, fps, range, settings, threading, |_, frame| {
        out.push(frame);
        Ok(())
    })?;
    Ok(out)
}

/// Write `frame` as a PNG, creating parent directories as needed.
pub fn write_png(frame: &FrameRGBA, path: &Path) -> PageResult<()> {
    ensure_parent_dir(path)?;
    let straight = frame.clone().to_straight()?;
    image::save_buffer_with_format(
        path,
        &straight.data,
        straight.width,
        straight.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .map_err(|e| PageError::render(format!("write png '{}': {e}", path.display())))
}

/// Render `range` and write one PNG per frame into `dir` as `frame_00000.png`, ...
///
/// Frames are written as each chunk completes, so at most one chunk is held in memory.
#[tracing::instrument(skip(state, settings, threading), fields(frames = range.len_frames()))]
pub fn render_frames_to_dir(
    state: &PageState,
    canvas: Canvas,
    fps: Fps,
    range: FrameRange,
    settings: RenderSettings,
    threading: &RenderThreading,
    dir: &Path,
) -> PageResult<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(range.len_frames().min(4096) as usize);
    render_chunked(state, canvas, fps, range, settings, threading, |f, frame| {
        let path = dir.join(format!("frame_{:05}.png", f.0));
        write_png(&frame, &path)?;
        written.push(path);
        Ok(())
    })?;
    Ok(written)
}

// Renders `range` chunk by chunk and hands each frame to `sink` in frame order before the next
// chunk starts.
fn render_chunked(
    state: &PageState,
    canvas: Canvas,
    fps: Fps,
    range: FrameRange,
    settings: RenderSettings,
    threading: &RenderThreading,
    mut sink: impl FnMut(FrameIndex, FrameRGBA) -> PageResult<()>,
) -> PageResult<()> {
    if range.is_empty() {
        return Err(PageError::validation("render range must be non-empty"));
    }
    fps.validate()?;
    canvas.validate()?;

    if !threading.parallel {
        let mut renderer = CpuRenderer::new(settings);
        for f in range.iter() {
            let frame = renderer.render_frame(state, canvas, fps.frames_to_secs(f.0))?;
            sink(f, frame)?;
        }
        return Ok(());
    }

    let pool = build_thread_pool(threading.threads)?;
    let chunk_size = normalized_chunk_size(threading.chunk_size);
    let mut chunk_start = range.start.0;
    while chunk_start < range.end.0 {
        let chunk_end = (chunk_start + chunk_size).min(range.end.0);
        let frames: Vec<u64> = (chunk_start..chunk_end).collect();
        let rendered = pool.install(|| {
            frames
                .par_iter()
                .map_init(
                    || CpuRenderer::new(settings),
                    |worker, f| worker.render_frame(state, canvas, fps.frames_to_secs(*f)),
                )
                .collect::<Vec<_>>()
        });
        for (f, item) in frames.iter().zip(rendered) {
            sink(FrameIndex(*f), item?)?;
        }
        tracing::debug!(chunk_start, chunk_end, "rendered chunk");
        chunk_start = chunk_end;
    }
    Ok(())
}

pub(crate) fn ensure_parent_dir(path: &Path) -> PageResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| {
            PageError::render(format!("create output dir '{}': {e}", parent.display()))
        })?;
    }
    Ok(())
}

fn build_thread_pool(threads: Option<usize>) -> PageResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(PageError::validation(
            "render threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| PageError::render(format!("failed to build rayon thread pool: {e}")))
}

fn normalized_chunk_size(chunk_size: usize) -> u64 {
    if chunk_size == 0 {
        1
    } else {
        chunk_size as u64
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
