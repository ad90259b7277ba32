use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use fieldmorph::{
    FrameSink, GifSink, GifSinkOpts, InMemorySink, MorphSpec, PngDirSink, PreparedMorph,
    RenderOpts, RenderThreading,
};

#[derive(Parser, Debug)]
#[command(name = "fieldmorph", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a single morph frame as a PNG.
    Frame(FrameArgs),
    /// Render the full morph sequence as an animated GIF.
    Render(RenderArgs),
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Input morph spec JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Frame index (0-based, up to the spec's frame count).
    #[arg(long)]
    frame: u32,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input morph spec JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output GIF path.
    #[arg(long)]
    out: PathBuf,

    /// Also write per-frame PNGs into this directory.
    #[arg(long)]
    png_dir: Option<PathBuf>,

    /// Overwrite output if it already exists.
    #[arg(long, default_value_t = true)]
    overwrite: bool,

    /// Enable frame-level parallelism.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,

    /// Background color as R,G,B,A (0-255 each).
    #[arg(long, default_value = "0,0,0,255", value_parser = parse_rgba)]
    bg: [u8; 4],
}

fn parse_rgba(s: &str) -> Result<[u8; 4], String> {
    let parts: Vec<&str> = s.split(',').collect();
    if parts.len() != 4 {
        return Err(format!("expected R,G,B,A, got '{s}'"));
    }
    let mut rgba = [0u8; 4];
    for (slot, part) in rgba.iter_mut().zip(&parts) {
        *slot = part
            .trim()
            .parse()
            .map_err(|_| format!("invalid channel value '{}'", part.trim()))?;
    }
    Ok(rgba)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Render(args) => cmd_render(args),
    }
}

fn spec_root(in_path: &Path) -> &Path {
    in_path.parent().unwrap_or_else(|| Path::new("."))
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let spec = MorphSpec::from_path(&args.in_path)?;
    let assets = PreparedMorph::prepare_from_dir(&spec, spec_root(&args.in_path))?;

    let frame = fieldmorph::render_frame(&spec, &assets, args.frame, [0, 0, 0, 255])?;

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    image::save_buffer_with_format(
        &args.out,
        frame.data(),
        frame.width(),
        frame.height(),
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let spec = MorphSpec::from_path(&args.in_path)?;
    let assets = PreparedMorph::prepare_from_dir(&spec, spec_root(&args.in_path))?;

    let opts = RenderOpts {
        bg_rgba: args.bg,
        threading: RenderThreading {
            parallel: args.parallel,
            threads: args.threads,
        },
    };

    // Render once, then replay the captured frames into each requested sink.
    let mut captured = InMemorySink::new();
    fieldmorph::render_sequence(&spec, &assets, &opts, &mut captured)?;
    let cfg = captured
        .config()
        .ok_or_else(|| anyhow::anyhow!("render produced no sink configuration"))?;

    let mut gif = GifSink::new(GifSinkOpts {
        out_path: args.out.clone(),
        overwrite: args.overwrite,
    });
    replay(&mut gif, cfg, captured.frames())?;
    eprintln!("wrote {}", args.out.display());

    if let Some(dir) = args.png_dir {
        let mut pngs = PngDirSink::new(&dir);
        replay(&mut pngs, cfg, captured.frames())?;
        eprintln!("wrote {}", dir.display());
    }

    Ok(())
}

fn replay(
    sink: &mut dyn FrameSink,
    cfg: fieldmorph::SinkConfig,
    frames: &[(u32, fieldmorph::FrameRgba)],
) -> anyhow::Result<()> {
    sink.begin(cfg)?;
    for (idx, frame) in frames {
        sink.push_frame(*idx, frame)?;
    }
    sink.end()?;
    Ok(())
}
