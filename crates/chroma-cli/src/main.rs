//! chroma - color conversion and color temperature CLI
//!
//! Converts colors between XYZ, linear RGB, sRGB and xyY, and maps between
//! blackbody temperature and chromaticity.

use std::process::ExitCode;

use chroma_core::ColorSpaceId;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "chroma")]
#[command(author, version, about = "Color conversion and color temperature tool")]
#[command(long_about = "
Converts colors between CIE XYZ, linear RGB, sRGB and CIE xyY, and
relates blackbody temperatures to chromaticities.

Examples:
  chroma convert --from srgb --to xyz 1,0.5,0     # sRGB orange to XYZ
  chroma convert --from xyy --to srgb 0.3127,0.329,1
  chroma kelvin 6500                              # approximate locus point
  chroma kelvin 6500 --method analytical --fine   # Planck integration, 1 nm
  chroma cct 0.3127 0.3290                        # chromaticity to CCT
  chroma wavelength 555                           # spectral XYZ weights
  chroma --json kelvin 3200                       # machine-readable output
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Disable logging
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a color between color spaces
    #[command(visible_alias = "c")]
    Convert(ConvertArgs),

    /// Chromaticity of a blackbody at a temperature in Kelvin
    #[command(visible_alias = "k")]
    Kelvin(KelvinArgs),

    /// Correlated color temperature of an xy chromaticity
    Cct(CctArgs),

    /// CIE 1931 tristimulus weights of a wavelength
    #[command(visible_alias = "wl")]
    Wavelength(WavelengthArgs),
}

#[derive(Args)]
struct ConvertArgs {
    /// Source color space (xyz, linear, srgb, xyy)
    #[arg(short, long)]
    from: ColorSpaceId,

    /// Target color space (xyz, linear, srgb, xyy)
    #[arg(short, long)]
    to: ColorSpaceId,

    /// Three components, comma or space separated (e.g. "1,0.5,0")
    #[arg(allow_hyphen_values = true)]
    components: String,
}

/// Temperature to chromaticity method.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
enum Method {
    /// Cubic fit of the Planckian locus (1667-25000 K)
    #[default]
    Approximate,
    /// Planck's law integrated over the CIE 1931 observer
    Analytical,
}

#[derive(Args)]
struct KelvinArgs {
    /// Temperature in Kelvin
    temperature: f64,

    /// Computation method
    #[arg(short, long, value_enum, default_value_t = Method::Approximate)]
    method: Method,

    /// Use the 1 nm table instead of 5 nm (analytical only)
    #[arg(long)]
    fine: bool,
}

#[derive(Args)]
struct CctArgs {
    /// Chromaticity x
    x: f64,

    /// Chromaticity y
    y: f64,
}

#[derive(Args)]
struct WavelengthArgs {
    /// Wavelength in nanometers
    nanometers: f64,
}

fn init_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let filter = match verbose {
        0 => LevelFilter::INFO,
        1 => LevelFilter::DEBUG,
        2.. => LevelFilter::TRACE,
    };
    let env_filter = EnvFilter::builder()
        .with_default_directive(filter.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_span_events(FmtSpan::ACTIVE)
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let result = match cli.command {
        Commands::Convert(args) => commands::convert::run(args, cli.json),
        Commands::Kelvin(args) => commands::kelvin::run(args, cli.json),
        Commands::Cct(args) => commands::cct::run(args, cli.json),
        Commands::Wavelength(args) => commands::wavelength::run(args, cli.json),
    };

    if let Err(e) = result {
        tracing::error!("{e:#}");
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
