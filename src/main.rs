use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use md_palette::{ColorConverter, FadeMode, Profile, FADE_STEPS};
use mdcolors::models::{AppConfig, ConfigSource, ConvertSettings, FadeSettings, LutDump};
use mdcolors::services::{ConverterService, FaderService};

#[derive(Parser)]
#[command(name = "mdcolors")]
#[command(about = "Mega Drive color conversion and palette fades for PNG images")]
struct Cli {
    /// Configuration file (overrides CONFIG_FILE)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log progress (same as RUST_LOG=mdcolors=debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an image to Mega Drive colors
    Convert(ConvertArgs),
    /// Write the frames of a palette fade as separate PNG files
    Fade(FadeArgs),
    /// Print the lookup table for a profile pair
    Lut(LutArgs),
    /// Print the levels of every color profile
    Info,
}

/// Profile selection shared by all color commands
#[derive(Args)]
struct ProfileArgs {
    /// Profile the source is close to: sonmaped (sme), skcollect (skc), measured (vdp)
    #[arg(long)]
    from: Option<Profile>,

    /// Profile the output should use
    #[arg(long)]
    to: Option<Profile>,
}

#[derive(Args)]
struct ConvertArgs {
    /// Input PNG file
    #[arg(short, long)]
    input: PathBuf,

    /// Output PNG file
    #[arg(short, long)]
    output: PathBuf,

    #[command(flatten)]
    profiles: ProfileArgs,

    /// Allow shadow/highlight colors
    #[arg(long, overrides_with = "no_shl")]
    shl: bool,

    /// Disallow shadow/highlight colors even if the config enables them
    #[arg(long, overrides_with = "shl")]
    no_shl: bool,

    #[command(flatten)]
    optimize: OptimizeArgs,
}

/// oxipng recompression switch
#[derive(Args)]
struct OptimizeArgs {
    /// Re-compress written PNGs with oxipng
    #[arg(long, overrides_with = "no_optimize")]
    optimize: bool,

    /// Skip recompression even if the config enables it
    #[arg(long, overrides_with = "optimize")]
    no_optimize: bool,
}

#[derive(Args)]
struct FadeArgs {
    /// Input PNG file
    #[arg(short, long)]
    input: PathBuf,

    /// Output directory for the frames
    #[arg(short, long)]
    output: PathBuf,

    #[command(flatten)]
    profiles: ProfileArgs,

    /// current-to-black, black-to-current, current-to-white or white-to-current
    #[arg(short, long)]
    mode: Option<FadeMode>,

    /// Also write the endpoint frame
    #[arg(long, overrides_with = "no_endpoint")]
    endpoint: bool,

    /// Do not write the endpoint frame even if the config asks for it
    #[arg(long, overrides_with = "endpoint")]
    no_endpoint: bool,

    /// Frame file name prefix (default: input file stem)
    #[arg(long)]
    prefix: Option<String>,

    #[command(flatten)]
    optimize: OptimizeArgs,
}

#[derive(Args)]
struct LutArgs {
    #[command(flatten)]
    profiles: ProfileArgs,

    /// Include shadow/highlight values
    #[arg(long, overrides_with = "no_shl")]
    shl: bool,

    /// Leave out shadow/highlight values even if the config enables them
    #[arg(long, overrides_with = "shl")]
    no_shl: bool,

    /// Print JSON instead of a text table
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Convert(args)) => {
            init_logging(cli.verbose);
            run_convert_command(cli.config, args)
        }
        Some(Commands::Fade(args)) => {
            init_logging(cli.verbose);
            run_fade_command(cli.config, args)
        }
        Some(Commands::Lut(args)) => {
            init_logging(cli.verbose);
            run_lut_command(cli.config, args)
        }
        Some(Commands::Info) => {
            run_info_command();
            Ok(())
        }
        None => {
            run_status_command(cli.config);
            Ok(())
        }
    }
}

/// Minimal logging for CLI: warnings only unless RUST_LOG or --verbose say otherwise
fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "mdcolors=debug"
    } else {
        "mdcolors=warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();
}

/// Resolve an `--x` / `--no-x` pair; `None` keeps the configured value
fn switch(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

impl ConvertArgs {
    fn apply(&self, settings: &mut ConvertSettings) {
        if let Some(source) = self.profiles.from {
            settings.source = source;
        }
        if let Some(destination) = self.profiles.to {
            settings.destination = destination;
        }
        if let Some(shl) = switch(self.shl, self.no_shl) {
            settings.shadow_highlight = shl;
        }
        if let Some(optimize) = self.optimize.value() {
            settings.optimize = optimize;
        }
    }
}

impl FadeArgs {
    fn apply(&self, settings: &mut FadeSettings) {
        if let Some(source) = self.profiles.from {
            settings.source = source;
        }
        if let Some(destination) = self.profiles.to {
            settings.destination = destination;
        }
        if let Some(mode) = self.mode {
            settings.mode = mode;
        }
        if let Some(endpoint) = switch(self.endpoint, self.no_endpoint) {
            settings.include_endpoint = endpoint;
        }
        if let Some(optimize) = self.optimize.value() {
            settings.optimize = optimize;
        }
    }
}

impl OptimizeArgs {
    fn value(&self) -> Option<bool> {
        switch(self.optimize, self.no_optimize)
    }
}

fn load_config(path: Option<PathBuf>) -> anyhow::Result<AppConfig> {
    let source = ConfigSource::resolve(path);
    AppConfig::load(&source)
        .with_context(|| format!("Failed to load configuration from {}", source.path.display()))
}

fn run_convert_command(config_path: Option<PathBuf>, args: ConvertArgs) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let mut settings = config
        .convert_settings()
        .context("Invalid convert section in configuration")?;

    args.apply(&mut settings);

    let service = ConverterService::new(&settings);
    let report = service
        .convert_file(&args.input, &args.output)
        .with_context(|| format!("Failed to convert {}", args.input.display()))?;

    let what = if report.palette_only {
        "palette entries"
    } else {
        "pixels"
    };
    println!(
        "Converted {} {what} ({} -> {}), wrote {} ({} bytes)",
        report.converted,
        settings.source,
        settings.destination,
        args.output.display(),
        report.bytes_written
    );
    Ok(())
}

fn run_fade_command(config_path: Option<PathBuf>, args: FadeArgs) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let mut settings = config
        .fade_settings()
        .context("Invalid fade section in configuration")?;

    args.apply(&mut settings);

    let prefix = match args.prefix {
        Some(prefix) => prefix,
        None => args
            .input
            .file_stem()
            .and_then(|s| s.to_str())
            .map(str::to_string)
            .with_context(|| format!("Cannot derive a prefix from {}", args.input.display()))?,
    };

    let service = FaderService::new(&settings);
    let written = service
        .fade_file(&args.input, &args.output, &prefix)
        .with_context(|| format!("Failed to fade {}", args.input.display()))?;

    println!(
        "Wrote {} frames ({}) to {}",
        written.len(),
        settings.mode,
        args.output.display()
    );
    Ok(())
}

fn run_lut_command(config_path: Option<PathBuf>, args: LutArgs) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let settings = config
        .convert_settings()
        .context("Invalid convert section in configuration")?;

    let converter = ColorConverter::new(
        args.profiles.from.unwrap_or(settings.source),
        args.profiles.to.unwrap_or(settings.destination),
    )
    .shadow_highlight(switch(args.shl, args.no_shl).unwrap_or(settings.shadow_highlight));
    let dump = LutDump::from_lut(converter.lut());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&dump)?);
    } else {
        print!("{}", dump.to_text());
    }
    Ok(())
}

/// Print every profile's levels in decimal
fn run_info_command() {
    fn row(levels: &[u8]) -> String {
        levels
            .iter()
            .map(|v| format!("{v:>3}"))
            .collect::<Vec<_>>()
            .join(" ")
    }

    println!("A 3-bit Mega Drive color channel can be represented as:");
    for profile in Profile::ALL {
        println!("  {profile} ({}):", profile.key());
        println!("    Normal:    {}", row(profile.normal_levels()));
        println!("    Shadow:    {}", row(profile.shadow_levels()));
        println!("    Highlight: {}", row(profile.highlight_levels()));
    }
}

/// Display status and configuration information
fn run_status_command(config_path: Option<PathBuf>) {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let source = ConfigSource::resolve(config_path);

    println!("mdcolors v{VERSION} - Mega Drive colors for PNG images\n");

    println!("Configuration:");
    let state = if source.path.exists() {
        "found"
    } else if source.explicit {
        "missing"
    } else {
        "not found, using defaults"
    };
    println!("  Config file: {} ({state})", source.path.display());

    match AppConfig::load(&source).and_then(|c| Ok((c.convert_settings()?, c.fade_settings()?))) {
        Ok((convert, fade)) => {
            println!(
                "  Convert:     {} -> {}, shadow/highlight {}",
                convert.source,
                convert.destination,
                if convert.shadow_highlight { "on" } else { "off" }
            );
            println!(
                "  Fade:        {} -> {}, {}, {} frames",
                fade.source,
                fade.destination,
                fade.mode,
                FADE_STEPS as usize + usize::from(fade.include_endpoint)
            );
            println!(
                "  Tiles:       {}x{}",
                convert.tile.width, convert.tile.height
            );
        }
        Err(e) => println!("  Error:       {e}"),
    }

    println!("\nCommands:");
    println!("  mdcolors convert   Convert an image to Mega Drive colors");
    println!("  mdcolors fade      Write the frames of a palette fade");
    println!("  mdcolors lut       Print the lookup table for a profile pair");
    println!("  mdcolors info      Print the levels of every color profile");
    println!("\nRun 'mdcolors --help' for more details.");
}
