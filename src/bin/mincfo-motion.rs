use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

use mincfo_motion::content::SiteContent;
use mincfo_motion::curve::{DividerVariant, Responsive};
use mincfo_motion::demo::ConversationEngine;
use mincfo_motion::field::{BackdropKind, FrameLoop};
use mincfo_motion::render::svg::{DividerSvgOpts, rasterize_divider};
use mincfo_motion::render::{
    BackendKind, DividerPaint, FrameRGBA, RasterOpts, create_backend, divider_draw_list,
};
use mincfo_motion::{Millis, SurfaceSize};

const SEED_ENV: &str = "MINCFO_MOTION_SEED";
const DEFAULT_SEED: u64 = 7;

#[derive(Parser, Debug)]
#[command(name = "mincfo-motion", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a backdrop frame as a PNG.
    Field(FieldArgs),
    /// Print a divider's clip-path, optionally rasterizing it.
    Divider(DividerArgs),
    /// Replay the copilot demo and print stage transitions as JSON lines.
    Demo(DemoArgs),
    /// Validate a content document.
    Check(CheckArgs),
}

#[derive(Parser, Debug)]
struct FieldArgs {
    /// Surface width in CSS pixels.
    #[arg(long, default_value_t = 1280.0)]
    width: f64,

    /// Surface height in CSS pixels.
    #[arg(long, default_value_t = 720.0)]
    height: f64,

    /// Device pixel ratio (capped at 2).
    #[arg(long, default_value_t = 1.0)]
    dpr: f64,

    /// Number of animation frames to step; the last painted one is written.
    #[arg(long, default_value_t = 1)]
    frames: u32,

    /// Particle seed. Defaults to $MINCFO_MOTION_SEED, then 7.
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, value_enum, default_value_t = KindChoice::Dots)]
    kind: KindChoice,

    /// Paint a single static frame, as with `prefers-reduced-motion`.
    #[arg(long)]
    reduced_motion: bool,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct DividerArgs {
    /// Scroll progress in [0, 1].
    #[arg(long, default_value_t = 0.0)]
    progress: f64,

    /// Divider variant (dip, rise, soft, copilot, dashboard, customers, how-it-works, security).
    #[arg(long, default_value = "dip")]
    variant: DividerVariant,

    /// Viewport width used for responsive scaling and raster width.
    #[arg(long, default_value_t = 1440.0)]
    viewport_width: f64,

    /// Also rasterize the divider to this PNG path.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Rasterizer used for `--out`.
    #[arg(long, value_enum, default_value_t = RasterChoice::Svg)]
    raster: RasterChoice,
}

#[derive(Parser, Debug)]
struct DemoArgs {
    /// Content document JSON.
    #[arg(long)]
    content: PathBuf,

    /// Simulated time after the demo becomes visible.
    #[arg(long, default_value_t = 20_000)]
    until_ms: u64,
}

#[derive(Parser, Debug)]
struct CheckArgs {
    /// Content document JSON.
    #[arg(long)]
    content: PathBuf,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum KindChoice {
    Dots,
    Beam,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum RasterChoice {
    /// SVG markup through resvg.
    Svg,
    /// Draw list through the CPU backend.
    Cpu,
}

impl From<KindChoice> for BackdropKind {
    fn from(k: KindChoice) -> Self {
        match k {
            KindChoice::Dots => BackdropKind::Dots,
            KindChoice::Beam => BackdropKind::Beam,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Field(args) => cmd_field(args),
        Command::Divider(args) => cmd_divider(args),
        Command::Demo(args) => cmd_demo(args),
        Command::Check(args) => cmd_check(args),
    }
}

fn seed_from_env() -> anyhow::Result<u64> {
    match std::env::var(SEED_ENV) {
        Ok(v) => v
            .trim()
            .parse()
            .with_context(|| format!("parse {SEED_ENV}='{v}'")),
        Err(_) => Ok(DEFAULT_SEED),
    }
}

fn write_png(path: &Path, frame: &FrameRGBA) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    let straight = frame.to_straight();
    image::save_buffer_with_format(
        path,
        &straight.data,
        straight.width,
        straight.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;

    eprintln!("wrote {}", path.display());
    Ok(())
}

fn cmd_field(args: FieldArgs) -> anyhow::Result<()> {
    let seed = match args.seed {
        Some(s) => s,
        None => seed_from_env()?,
    };
    let size = SurfaceSize::new(args.width, args.height, args.dpr)?;
    let backdrop = BackdropKind::from(args.kind).build(size, seed);
    let mut frames = FrameLoop::new(backdrop, args.reduced_motion);

    let mut last = None;
    for _ in 0..args.frames.max(1) {
        if let Some(list) = frames.tick() {
            last = Some(list);
        }
    }
    let list = last.context("no frame was painted")?;

    let mut backend = create_backend(
        BackendKind::Cpu,
        RasterOpts {
            clear_rgba: Some([5, 7, 16, 255]),
            ..RasterOpts::default()
        },
    )?;
    let frame = backend.render(&list)?;
    write_png(&args.out, &frame)
}

fn cmd_divider(args: DividerArgs) -> anyhow::Result<()> {
    let responsive = Responsive::for_width(args.viewport_width);
    let curve = args
        .variant
        .profile()
        .at_scaled(args.progress, responsive.curve_scale);
    println!("{}", curve.clip_path());

    if let Some(out) = &args.out {
        let viewbox_height = args.variant.viewbox_height();
        let width = args.viewport_width.round().max(1.0);
        let height = responsive.wave_height.round().max(1.0);
        let frame = match args.raster {
            RasterChoice::Svg => {
                let opts = DividerSvgOpts {
                    viewbox_height,
                    ..DividerSvgOpts::default()
                };
                rasterize_divider(&curve, &opts, width as u32, height as u32)?
            }
            RasterChoice::Cpu => {
                let paint = DividerPaint {
                    viewbox_height,
                    ..DividerPaint::default()
                };
                let size = SurfaceSize::new(width, height, 1.0)?;
                let list = divider_draw_list(&curve, &paint, size);
                create_backend(BackendKind::Cpu, RasterOpts::default())?.render(&list)?
            }
        };
        write_png(out, &frame)?;
    }
    Ok(())
}

fn cmd_demo(args: DemoArgs) -> anyhow::Result<()> {
    let content = SiteContent::from_path(&args.content)?;
    let mut engine = ConversationEngine::new(content.copilot_script()?, content.copilot_timings())?;

    let mut transitions = Vec::new();
    transitions.extend(engine.set_visible(true));
    transitions.extend(engine.advance(Millis(args.until_ms)));

    for t in &transitions {
        let line = serde_json::to_string(t).context("serialize transition")?;
        println!("{line}");
    }
    Ok(())
}

fn cmd_check(args: CheckArgs) -> anyhow::Result<()> {
    let content = SiteContent::from_path(&args.content)
        .with_context(|| format!("check '{}'", args.content.display()))?;
    println!(
        "ok: locale {} ({} examples, {} customer cards, {} steps)",
        content.locale,
        content.ai_copilot.examples.len(),
        content.customers.testimonials.len(),
        content.how_it_works.steps.len()
    );
    Ok(())
}
