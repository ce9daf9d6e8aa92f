use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, ValueEnum};
use hq_resample::{
    Affine, FilterConfig, FilterQuality, InverseTransform, Pixmap, RenderState, RenderThreading,
    TileMode, Vec2, draw_bitmap,
};

#[derive(Parser, Debug)]
#[command(name = "hq-resample", version)]
/// Draw a PNG under a scale/rotation with the high-quality bitmap filter.
struct Cli {
    /// Input PNG.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Uniform scale applied to the source.
    #[arg(long, default_value_t = 1.0)]
    scale: f64,

    /// Rotation about the image centre, in degrees.
    #[arg(long, default_value_t = 0.0)]
    rotate_deg: f64,

    /// Kernel family (mitchell, lanczos, hamming, gaussian, triangle, box).
    #[arg(long)]
    kernel: Option<String>,

    /// Filter config JSON; `--kernel` takes precedence.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Requested filter quality.
    #[arg(long, value_enum, default_value_t = QualityArg::High)]
    quality: QualityArg,

    /// Tile mode for both axes.
    #[arg(long, value_enum, default_value_t = TileArg::Clamp)]
    tile: TileArg,

    /// Fill destination rows in parallel.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum QualityArg {
    None,
    Low,
    Medium,
    High,
}

impl From<QualityArg> for FilterQuality {
    fn from(value: QualityArg) -> Self {
        match value {
            QualityArg::None => FilterQuality::None,
            QualityArg::Low => FilterQuality::Low,
            QualityArg::Medium => FilterQuality::Medium,
            QualityArg::High => FilterQuality::High,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum TileArg {
    Clamp,
    Repeat,
    Mirror,
}

impl From<TileArg> for TileMode {
    fn from(value: TileArg) -> Self {
        match value {
            TileArg::Clamp => TileMode::Clamp,
            TileArg::Repeat => TileMode::Repeat,
            TileArg::Mirror => TileMode::Mirror,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();
    run(cli)
}

fn run(cli: Cli) -> anyhow::Result<()> {
    if !cli.scale.is_finite() || cli.scale <= 0.0 {
        anyhow::bail!("--scale must be a positive number");
    }

    let mut config = match &cli.config {
        Some(path) => FilterConfig::from_path(path)?,
        None => FilterConfig::default(),
    };
    if let Some(kernel) = cli.kernel {
        config.kernel = kernel;
    }

    let img = image::open(&cli.in_path)
        .with_context(|| format!("read image '{}'", cli.in_path.display()))?
        .to_rgba8();
    let (src_w, src_h) = img.dimensions();
    let src = Pixmap::from_straight_rgba8(src_w, src_h, img.as_raw())?;

    let dst_w = ((f64::from(src_w) * cli.scale).round() as u32).max(1);
    let dst_h = ((f64::from(src_h) * cli.scale).round() as u32).max(1);

    let src_centre = Vec2::new(f64::from(src_w) / 2.0, f64::from(src_h) / 2.0);
    let dst_centre = Vec2::new(f64::from(dst_w) / 2.0, f64::from(dst_h) / 2.0);
    let forward = Affine::translate(dst_centre)
        * Affine::rotate(cli.rotate_deg.to_radians())
        * Affine::scale(cli.scale)
        * Affine::translate(-src_centre);

    let mut state = RenderState::new(InverseTransform::from_forward(forward)?)
        .with_quality(cli.quality.into())
        .with_tile_modes(cli.tile.into(), cli.tile.into())
        .with_config(config);
    let threading = RenderThreading {
        parallel: cli.parallel,
        threads: cli.threads,
        ..RenderThreading::default()
    };

    let out = draw_bitmap(&mut state, &src, dst_w, dst_h, &threading)?;

    if let Some(parent) = cli.out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    image::save_buffer_with_format(
        &cli.out,
        &out.to_straight_rgba8(),
        dst_w,
        dst_h,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", cli.out.display()))?;

    eprintln!("wrote {}", cli.out.display());
    Ok(())
}
