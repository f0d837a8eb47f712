use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use gridiron::{
    AssetConfig, CollageOptions, ComposeOptions, DEFAULT_PRIORITY, DeviceProfile, FsCatalog,
    GradientStyle, LogoLoader, NoiseDetail, WallpaperService, generate_collage,
    generate_dropdown_icons, parse_hex,
};
use rand::{SeedableRng as _, rngs::StdRng};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "gridiron", version)]
struct Cli {
    /// Asset root that relative asset paths resolve against.
    #[arg(long, global = true, default_value = ".")]
    assets: PathBuf,

    /// Optional JSON file overriding the asset layout.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a wallpaper as a PNG.
    Render(RenderArgs),
    /// Pre-generate the sticker-bomb collage backgrounds.
    Collage(CollageArgs),
    /// Write outlined team-picker icons.
    Icons(IconsArgs),
    /// Print the colors derived from a team's logo.
    Colors(ColorsArgs),
    /// List teams that have both a logo and a schedule.
    Teams,
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// Team name, e.g. "Texas A&M".
    #[arg(long)]
    team: String,

    /// Device profile: `pc` or `mobile`.
    #[arg(long, default_value = "pc")]
    profile: String,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Solid background color (`#RRGGBB`).
    #[arg(long)]
    color: Option<String>,

    /// Use a generated gradient background.
    #[arg(long, default_value_t = false)]
    gradient: bool,

    /// Gradient style: linear, radial, diamond, fade, split, mirror, noise.
    #[arg(long, default_value = "linear")]
    style: String,

    /// Gradient start color (`#RRGGBB`); the logo's primary color when omitted.
    #[arg(long)]
    color1: Option<String>,

    /// Gradient end color (`#RRGGBB`); the logo's secondary color when omitted.
    #[arg(long)]
    color2: Option<String>,

    /// Gradient angle in degrees.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    angle: f64,

    /// Noise detail: 1 (low), 2 (medium), 3 (high).
    #[arg(long, default_value_t = 2)]
    noise_detail: i64,

    /// Use the pre-rendered collage background.
    #[arg(long, default_value_t = false)]
    stickerbomb: bool,

    /// Leave out the schedule grid.
    #[arg(long, default_value_t = false)]
    no_schedule: bool,
}

#[derive(Args, Debug)]
struct CollageArgs {
    /// Only this profile; both when omitted.
    #[arg(long)]
    profile: Option<String>,

    /// Output directory; the configured collage directory when omitted.
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Seed for a reproducible collage.
    #[arg(long)]
    seed: Option<u64>,

    /// Die-cut border thickness in pixels; no border when omitted.
    #[arg(long)]
    border: Option<u32>,

    /// Comma-separated logo stems drawn on top; the SEC teams when omitted.
    #[arg(long, value_delimiter = ',')]
    priority: Vec<String>,
}

#[derive(Args, Debug)]
struct IconsArgs {
    /// Source logos; the configured logos directory when omitted.
    #[arg(long)]
    src: Option<PathBuf>,

    /// Output directory; the configured dropdown directory when omitted.
    #[arg(long)]
    dst: Option<PathBuf>,

    /// Icon size bound in pixels.
    #[arg(long, default_value_t = gridiron::DROPDOWN_ICON_SIZE)]
    size: u32,
}

#[derive(Args, Debug)]
struct ColorsArgs {
    /// Team name.
    #[arg(long)]
    team: String,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let config = load_config(&cli)?;
    match cli.cmd {
        Command::Render(args) => cmd_render(config, args),
        Command::Collage(args) => cmd_collage(config, args),
        Command::Icons(args) => cmd_icons(config, args),
        Command::Colors(args) => cmd_colors(config, args),
        Command::Teams => cmd_teams(config),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> anyhow::Result<AssetConfig> {
    let config = match &cli.config {
        Some(path) => AssetConfig::from_path(path, &cli.assets)?,
        None => AssetConfig::with_root(&cli.assets),
    };
    tracing::debug!(root = %config.root.display(), "asset layout loaded");
    Ok(config)
}

fn cmd_render(config: AssetConfig, args: RenderArgs) -> anyhow::Result<()> {
    let options = ComposeOptions {
        user_color: parse_hex(args.color.as_deref().unwrap_or(""))?,
        gradient_enabled: args.gradient,
        style: GradientStyle::parse_lenient(&args.style),
        color1: parse_hex(args.color1.as_deref().unwrap_or(""))?,
        color2: parse_hex(args.color2.as_deref().unwrap_or(""))?,
        angle: args.angle,
        noise_detail: NoiseDetail::from_level(args.noise_detail),
        stickerbomb: args.stickerbomb,
        show_schedule: !args.no_schedule && !args.stickerbomb,
    };

    let service = WallpaperService::from_config(config);
    let png = service.render_wallpaper(&args.team, &args.profile, &options)?;

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(&args.out, png)
        .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_collage(config: AssetConfig, args: CollageArgs) -> anyhow::Result<()> {
    let profiles = match &args.profile {
        Some(p) => vec![p.parse::<DeviceProfile>()?],
        None => DeviceProfile::ALL.to_vec(),
    };
    let priority: Vec<String> = if args.priority.is_empty() {
        DEFAULT_PRIORITY.iter().map(|s| (*s).to_owned()).collect()
    } else {
        args.priority
    };
    let options = CollageOptions {
        border: args.border,
        ..CollageOptions::default()
    };
    let out_dir = args.out_dir.unwrap_or_else(|| config.collage_dir());
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("create output dir '{}'", out_dir.display()))?;

    let logos = FsCatalog::new(config.clone()).collage_logos()?;
    let loader = LogoLoader::new(config);
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    for profile in profiles {
        let collage = generate_collage(
            &logos,
            priority.as_slice(),
            profile,
            &options,
            &loader,
            &mut rng,
        )?;
        let out = out_dir.join(format!("{}.png", profile.as_str()));
        collage
            .image
            .save(&out)
            .with_context(|| format!("write png '{}'", out.display()))?;
        eprintln!(
            "wrote {} ({} placed, {} skipped)",
            out.display(),
            collage.report.placed,
            collage.report.skipped
        );
    }
    Ok(())
}

fn cmd_icons(config: AssetConfig, args: IconsArgs) -> anyhow::Result<()> {
    let src = args.src.unwrap_or_else(|| config.logos_dir());
    let dst = args.dst.unwrap_or_else(|| config.dropdown_dir());
    let loader = LogoLoader::new(config);
    let report = generate_dropdown_icons(&loader, &src, &dst, args.size)?;
    eprintln!(
        "wrote {} icons to {} ({} failed)",
        report.written,
        dst.display(),
        report.failed.len()
    );
    Ok(())
}

fn cmd_colors(config: AssetConfig, args: ColorsArgs) -> anyhow::Result<()> {
    let palette = WallpaperService::from_config(config).team_colors(&args.team)?;
    println!("primary   {}", palette.primary);
    println!("secondary {}", palette.secondary);
    Ok(())
}

fn cmd_teams(config: AssetConfig) -> anyhow::Result<()> {
    for team in WallpaperService::from_config(config).list_teams()? {
        println!("{}\t{}", team.name, team.logo);
    }
    Ok(())
}
