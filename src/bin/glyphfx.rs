use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use glyphfx::{
    EffectSet, FrameDriver, FrameOutcome, FrameStats, Fps, GlyphLayout, MeshBuffers,
    ParleyLayout, RasterOpts, Rgba8, Vec2, rasterize_mesh, write_png,
};

#[derive(Parser, Debug)]
#[command(name = "glyphfx", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Animate a line of text and write one PNG per frame.
    Frames(FramesArgs),
    /// Print every effect with default parameters, all disabled.
    Defaults,
}

#[derive(Parser, Debug)]
struct FramesArgs {
    /// Text to animate.
    #[arg(long)]
    text: String,

    /// TrueType/OpenType font file.
    #[arg(long)]
    font: PathBuf,

    /// Effect list JSON.
    #[arg(long)]
    effects: PathBuf,

    /// Frames per second of the fixed-step clock.
    #[arg(long, default_value_t = 30)]
    fps: u32,

    /// Number of frames to render.
    #[arg(long, default_value_t = 60)]
    frames: u64,

    /// Output directory.
    #[arg(long)]
    out: PathBuf,

    /// Font size in pixels.
    #[arg(long, default_value_t = 48.0)]
    size: f32,

    /// Wrap lines wider than this many pixels.
    #[arg(long)]
    max_width: Option<f32>,

    /// Base text color as `RRGGBB` or `RRGGBBAA` hex.
    #[arg(long, value_parser = parse_hex_color, default_value = "ffffff")]
    color: Rgba8,

    /// Seed for shake; unseeded when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Also write `frames.json` with every committed mesh.
    #[arg(long)]
    json: bool,
}

#[derive(serde::Serialize)]
struct FrameDump {
    frame: u64,
    stats: Option<FrameStats>,
    mesh: MeshBuffers,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Frames(args) => cmd_frames(args),
        Command::Defaults => cmd_defaults(),
    }
}

fn cmd_defaults() -> anyhow::Result<()> {
    println!("{}", EffectSet::with_defaults().to_json_string()?);
    Ok(())
}

fn cmd_frames(args: FramesArgs) -> anyhow::Result<()> {
    let font = std::fs::read(&args.font)
        .with_context(|| format!("read font '{}'", args.font.display()))?;
    let effects_json = std::fs::read_to_string(&args.effects)
        .with_context(|| format!("read effects '{}'", args.effects.display()))?;
    let effects = EffectSet::from_json_str(&effects_json)
        .with_context(|| format!("parse effects '{}'", args.effects.display()))?;
    let fps = Fps::new(args.fps, 1)?;

    let mut layout = ParleyLayout::new(&font, args.size)?.with_text(args.text.as_str());
    layout.set_color(args.color);
    layout.set_max_width_px(args.max_width);
    layout.force_relayout()?;
    tracing::info!(family = layout.family_name(), "font loaded");
    let opts = canvas_for(&layout, args.size);

    let mut driver = match args.seed {
        Some(seed) => FrameDriver::with_seed(effects, 0.0, seed),
        None => FrameDriver::new(effects, 0.0),
    };
    driver.activate(&args.text, 0.0);

    std::fs::create_dir_all(&args.out)
        .with_context(|| format!("create output dir '{}'", args.out.display()))?;

    let mut mesh = MeshBuffers::new();
    let mut dumps = Vec::new();
    for f in 0..args.frames {
        let now = fps.frames_to_secs(f);
        let stats = match driver.tick(now, &mut layout, &mut mesh)? {
            FrameOutcome::Rendered(stats) => Some(stats),
            FrameOutcome::Skipped(reason) => {
                tracing::warn!(frame = f, ?reason, "frame skipped");
                None
            }
        };

        let frame = rasterize_mesh(&mesh, &opts)?;
        write_png(&frame, &args.out.join(format!("frame_{f:04}.png")))?;

        if args.json {
            dumps.push(FrameDump {
                frame: f,
                stats,
                mesh: mesh.clone(),
            });
        }
    }

    if args.json {
        write_json(&args.out.join("frames.json"), &dumps)?;
    }

    eprintln!("wrote {} frames to {}", args.frames, args.out.display());
    Ok(())
}

// Pads the text bounds by one em on every side.
fn canvas_for(layout: &ParleyLayout, size_px: f32) -> RasterOpts {
    let pad = f64::from(size_px);
    let bounds = layout.full_bounds();
    RasterOpts {
        width: (bounds.width() + 2.0 * pad).ceil().max(1.0) as u32,
        height: (bounds.height() + 2.0 * pad).ceil().max(1.0) as u32,
        clear: Rgba8::new(0, 0, 0, 255),
        origin: Vec2::new(pad - bounds.x0, pad - bounds.y0),
    }
}

fn parse_hex_color(s: &str) -> Result<Rgba8, String> {
    let hex = s.trim_start_matches('#');
    let v = u32::from_str_radix(hex, 16).map_err(|e| format!("bad color '{s}': {e}"))?;
    match hex.len() {
        6 => Ok(Rgba8::new((v >> 16) as u8, (v >> 8) as u8, v as u8, 255)),
        8 => Ok(Rgba8::new((v >> 24) as u8, (v >> 16) as u8, (v >> 8) as u8, v as u8)),
        _ => Err(format!("bad color '{s}': expected RRGGBB or RRGGBBAA")),
    }
}

fn write_json(path: &Path, dumps: &[FrameDump]) -> anyhow::Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("create '{}'", path.display()))?;
    serde_json::to_writer_pretty(std::io::BufWriter::new(file), dumps)
        .with_context(|| format!("write '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/bin/glyphfx.rs"]
mod tests;
