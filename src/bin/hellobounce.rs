use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::filter::LevelFilter;

use hellobounce::{
    FrameIndex, FrameRange, PageConfig, PageState, RenderSettings, RenderThreading,
    descriptors_from_path, descriptors_to_json, render_document,
};

#[derive(Parser, Debug)]
#[command(name = "hellobounce", version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write the landing page as an HTML document.
    Html(HtmlArgs),
    /// Write a freshly generated shape batch as JSON.
    Shapes(ShapesArgs),
    /// Render a single preview frame as a PNG.
    Frame(FrameArgs),
    /// Render a numbered PNG sequence.
    Frames(FramesArgs),
}

#[derive(Args, Debug)]
struct PageArgs {
    /// Page config JSON; flags below override its fields.
    #[arg(long)]
    config: Option<PathBuf>,

    /// RNG seed for shape generation.
    #[arg(long)]
    seed: Option<u64>,

    /// Number of floating shapes.
    #[arg(long)]
    count: Option<usize>,

    /// Render shapes from a JSON file instead of generating them.
    #[arg(long)]
    shapes: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct HtmlArgs {
    #[command(flatten)]
    page: PageArgs,

    /// Output HTML path.
    #[arg(long)]
    out: PathBuf,

    /// Emit the pre-render pass (before mount).
    #[arg(long, default_value_t = false)]
    premount: bool,
}

#[derive(Parser, Debug)]
struct ShapesArgs {
    #[command(flatten)]
    page: PageArgs,

    /// Output JSON path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    page: PageArgs,

    /// Page time in seconds.
    #[arg(long, default_value_t = 0.0)]
    time: f64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Override canvas width.
    #[arg(long)]
    width: Option<u32>,

    /// Override canvas height.
    #[arg(long)]
    height: Option<u32>,
}

#[derive(Parser, Debug)]
struct FramesArgs {
    #[command(flatten)]
    page: PageArgs,

    /// Output directory.
    #[arg(long)]
    out_dir: PathBuf,

    /// Number of frames, starting at frame 0.
    #[arg(long)]
    frames: u64,

    /// Enable frame-level parallelism.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,

    /// Render chunk size (parallel mode only).
    #[arg(long, default_value_t = 64)]
    chunk_size: usize,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Html(args) => cmd_html(args),
        Command::Shapes(args) => cmd_shapes(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Frames(args) => cmd_frames(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        _ => LevelFilter::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(args: &PageArgs) -> anyhow::Result<PageConfig> {
    let mut cfg = match &args.config {
        Some(path) => PageConfig::from_path(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => PageConfig::default(),
    };
    if let Some(seed) = args.seed {
        cfg.seed = Some(seed);
    }
    if let Some(count) = args.count {
        cfg.shape_count = count;
    }
    cfg.validate()?;
    Ok(cfg)
}

fn mounted_state(args: &PageArgs, cfg: &PageConfig) -> anyhow::Result<PageState> {
    match &args.shapes {
        Some(path) => {
            let shapes = descriptors_from_path(path)
                .with_context(|| format!("load shapes '{}'", path.display()))?;
            let mut state = PageState::new();
            state.mount_with(shapes);
            Ok(state)
        }
        None => Ok(cfg.mounted_state()?),
    }
}

fn write_text(path: &Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(path, text).with_context(|| format!("write '{}'", path.display()))
}

fn cmd_html(args: HtmlArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args.page)?;
    let state = if args.premount {
        PageState::new()
    } else {
        mounted_state(&args.page, &cfg)?
    };
    write_text(&args.out, &render_document(&state))?;
    tracing::info!(shapes = state.shapes().len(), "wrote html");
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_shapes(args: ShapesArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args.page)?;
    let state = mounted_state(&args.page, &cfg)?;
    write_text(&args.out, &descriptors_to_json(state.shapes())?)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let mut cfg = load_config(&args.page)?;
    if let Some(w) = args.width {
        cfg.canvas.width = w;
    }
    if let Some(h) = args.height {
        cfg.canvas.height = h;
    }
    cfg.validate()?;
    let state = mounted_state(&args.page, &cfg)?;

    let frame = hellobounce::render_frame(&state, cfg.canvas, args.time, RenderSettings::default())?;
    hellobounce::write_png(&frame, &args.out)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_frames(args: FramesArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args.page)?;
    let state = mounted_state(&args.page, &cfg)?;
    let range = FrameRange::new(FrameIndex(0), FrameIndex(args.frames))?;
    let threading = RenderThreading {
        parallel: args.parallel,
        chunk_size: args.chunk_size,
        threads: args.threads,
    };
    let written = hellobounce::render_frames_to_dir(
        &state,
        cfg.canvas,
        cfg.fps,
        range,
        RenderSettings::default(),
        &threading,
        &args.out_dir,
    )?;
    eprintln!("wrote {} frames to {}", written.len(), args.out_dir.display());
    Ok(())
}
