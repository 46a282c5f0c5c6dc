use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use layer_modes::{LayerMode, ModeConfig, Region};

#[derive(Parser, Debug)]
#[command(name = "layer-modes", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every layer mode with its operation name and law kind.
    List,
    /// Blend a layer image onto a base image and write a PNG.
    Blend(BlendArgs),
}

#[derive(Parser, Debug)]
struct BlendArgs {
    /// Base image.
    #[arg(long)]
    base: PathBuf,

    /// Layer image, same size as the base.
    #[arg(long)]
    layer: PathBuf,

    /// Optional mask image; its luma is the per-pixel coverage.
    #[arg(long)]
    mask: Option<PathBuf>,

    /// Mode by short or operation name (overrides the config file).
    #[arg(long)]
    mode: Option<String>,

    /// Layer opacity (overrides the config file).
    #[arg(long)]
    opacity: Option<f64>,

    /// Mode config JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Split the kernel across a thread pool.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,

    /// Pixels per parallel work item.
    #[arg(long)]
    chunk_samples: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::List => cmd_list(),
        Command::Blend(args) => cmd_blend(args),
    }
}

fn cmd_list() -> anyhow::Result<()> {
    for mode in LayerMode::ALL {
        println!(
            "{:<14} {:<26} {:<9} {}",
            mode.short_name(),
            mode.operation_name(),
            if mode.is_component() { "component" } else { "channel" },
            mode.description()
        );
    }
    Ok(())
}

fn resolve_config(args: &BlendArgs) -> anyhow::Result<ModeConfig> {
    let mode = args.mode.as_deref().map(LayerMode::from_name).transpose()?;
    let mut cfg = match (&args.config, mode) {
        (Some(path), _) => ModeConfig::from_path(path)?,
        (None, Some(mode)) => ModeConfig::new(mode),
        (None, None) => anyhow::bail!("either --mode or --config is required"),
    };
    if let Some(mode) = mode {
        cfg.mode = mode;
    }
    if let Some(opacity) = args.opacity {
        cfg.opacity = opacity;
    }
    if args.parallel {
        cfg.threading.parallel = true;
    }
    if args.threads.is_some() {
        cfg.threading.threads = args.threads;
    }
    if let Some(chunk) = args.chunk_samples {
        cfg.threading.chunk_samples = chunk;
    }
    cfg.validate()?;
    Ok(cfg)
}

fn load_rgba(path: &Path) -> anyhow::Result<(u32, u32, Vec<f32>)> {
    let img = image::open(path)
        .with_context(|| format!("read image '{}'", path.display()))?
        .to_rgba8();
    let (w, h) = img.dimensions();
    let data = img.as_raw().iter().map(|&v| f32::from(v) / 255.0).collect();
    Ok((w, h, data))
}

fn load_mask(path: &Path) -> anyhow::Result<(u32, u32, Vec<f32>)> {
    let img = image::open(path)
        .with_context(|| format!("read mask '{}'", path.display()))?
        .to_luma8();
    let (w, h) = img.dimensions();
    let data = img.as_raw().iter().map(|&v| f32::from(v) / 255.0).collect();
    Ok((w, h, data))
}

fn to_rgba8(data: &[f32]) -> Vec<u8> {
    data.iter()
        .map(|v| (v.clamp(0.0, 1.0) * 255.0).round() as u8)
        .collect()
}

fn cmd_blend(args: BlendArgs) -> anyhow::Result<()> {
    let cfg = resolve_config(&args)?;

    let (width, height, mut pixels) = load_rgba(&args.base)?;
    let (lw, lh, layer) = load_rgba(&args.layer)?;
    if (lw, lh) != (width, height) {
        anyhow::bail!("layer is {lw}x{lh}, base is {width}x{height}");
    }
    let mask = match &args.mask {
        Some(path) => {
            let (mw, mh, mask) = load_mask(path)?;
            if (mw, mh) != (width, height) {
                anyhow::bail!("mask is {mw}x{mh}, base is {width}x{height}");
            }
            Some(mask)
        }
        None => None,
    };

    let roi = Region::new(
        0,
        0,
        i32::try_from(width).context("image width")?,
        i32::try_from(height).context("image height")?,
    );
    let samples = usize::try_from(roi.area()).context("image too large for this platform")?;

    let op = cfg.into_operation()?;
    op.process_in_place(&mut pixels, &layer, mask.as_deref(), samples, &roi, 0)?;

    if let Some(parent) = args.out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    image::save_buffer_with_format(
        &args.out,
        &to_rgba8(&pixels),
        width,
        height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {} ({})", args.out.display(), op.name());
    Ok(())
}
