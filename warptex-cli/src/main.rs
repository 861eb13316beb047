use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use sha2::Digest as _;

#[derive(Parser, Debug)]
#[command(name = "warptex", version)]
struct Cli {
    /// Log warp texture activity to stderr.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render one warped frame as a grayscale PNG.
    Frame(FrameArgs),
    /// Print a SHA-256 digest of every frame in a range.
    Digest(DigestArgs),
}

#[derive(Parser, Debug)]
struct SourceArgs {
    /// Source size as WIDTHxHEIGHT.
    #[arg(long, default_value = "64x64", value_parser = parse_size)]
    size: (u32, u32),

    /// Procedural source pattern.
    #[arg(long, value_enum, default_value_t = Pattern::Checker)]
    pattern: Pattern,

    /// Warp settings JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the style from `--config`.
    #[arg(long)]
    style: Option<warptex::WarpStyle>,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Animation time in milliseconds.
    #[arg(long, default_value_t = 0)]
    time: u32,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct DigestArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Frame rate used to derive frame times.
    #[arg(long, default_value_t = 35)]
    fps: u32,

    /// Number of frames, starting at frame 0.
    #[arg(long, default_value_t = 35)]
    frames: u64,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Pattern {
    Checker,
    Stripes,
    Rings,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Digest(args) => cmd_digest(args),
    }
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let mut tex = build_texture(&args.source)?;
    let (width, height) = (tex.width(), tex.height());
    let cols = tex.pixels(warptex::AnimTime(args.time))?;
    let rows = warptex::columns_to_rows(cols, width, height);

    if let Some(parent) = args.out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    image::save_buffer_with_format(
        &args.out,
        &rows,
        width,
        height,
        image::ColorType::L8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_digest(args: DigestArgs) -> anyhow::Result<()> {
    let mut tex = build_texture(&args.source)?;
    let mut clock = warptex::FrameClock::new(warptex::Fps::new(args.fps, 1)?);

    for f in 0..args.frames {
        clock.seek(warptex::FrameIndex(f));
        let pixels = tex.pixels_now(&clock)?;
        let digest = sha2::Sha256::digest(pixels);
        println!(
            "{f:>6} t={:>8} {}",
            warptex::AnimClock::now(&clock).0,
            hex(&digest)
        );
    }

    let stats = tex.stats();
    eprintln!(
        "{} frames, {} regenerations ({})",
        args.frames,
        stats.regenerations,
        tex.style()
    );
    Ok(())
}

fn build_texture(
    args: &SourceArgs,
) -> anyhow::Result<warptex::WarpTexture<warptex::IndexedImage>> {
    let mut settings = match &args.config {
        Some(path) => warptex::WarpSettings::from_path(path)?,
        None => warptex::WarpSettings::default(),
    };
    if let Some(style) = args.style {
        settings.style = style;
    }
    let (w, h) = args.size;
    let source = generate_pattern(args.pattern, w, h)?;
    Ok(warptex::WarpTexture::new(source, &settings)?)
}

fn generate_pattern(pattern: Pattern, w: u32, h: u32) -> anyhow::Result<warptex::IndexedImage> {
    let img = match pattern {
        Pattern::Checker => warptex::IndexedImage::from_fn(w, h, |x, y| {
            if ((x / 8) + (y / 8)) % 2 == 0 { 224 } else { 32 }
        }),
        Pattern::Stripes => {
            warptex::IndexedImage::from_fn(w, h, |x, _| if (x / 4) % 2 == 0 { 255 } else { 0 })
        }
        Pattern::Rings => {
            let (cx, cy) = (f64::from(w) / 2.0, f64::from(h) / 2.0);
            warptex::IndexedImage::from_fn(w, h, |x, y| {
                let d = (f64::from(x) - cx).hypot(f64::from(y) - cy);
                (((d / 3.0).sin() * 0.5 + 0.5) * 255.0) as u8
            })
        }
    };
    img.with_context(|| format!("build {pattern:?} source {w}x{h}"))
}

fn parse_size(s: &str) -> Result<(u32, u32), String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{s}'"))?;
    let w = w.trim().parse().map_err(|e| format!("bad width '{w}': {e}"))?;
    let h = h.trim().parse().map_err(|e| format!("bad height '{h}': {e}"))?;
    Ok((w, h))
}

fn hex(bytes: &[u8]) -> String {
    use std::fmt::Write as _;
    let mut out = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(out, "{b:02x}");
    }
    out
}
