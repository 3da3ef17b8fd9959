use clap::{Args, Parser, Subcommand};
use imageset::imaging::{
    BackendError, ImageBackend, PipelineError, Quality, QualityOutOfRange, RustBackend, ScaleAxis,
    VariantConfig, create_size_variants,
};
use imageset::naming::{self, SourceName};
use imageset::output;
use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;

#[derive(Parser)]
#[command(name = "imageset")]
#[command(about = "Generate responsive JPEG size variants from a single image")]
#[command(long_about = "\
Generate responsive JPEG size variants from a single image

Give it one JPEG and a list of target widths (or heights); it writes one
downsampled copy per achievable target into the output directory, named
{stem}_{size}.{ext}. Aspect ratio is always preserved, transparency is
flattened onto white, embedded metadata is stripped, and targets larger
than the original are skipped rather than upscaled.

Example:

  imageset resize --input photo.jpg --width 480,960,1920 --quality 85")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resize an image to multiple widths or heights
    Resize(ResizeArgs),
}

#[derive(Args)]
#[command(group = clap::ArgGroup::new("axis").required(true).multiple(false))]
struct ResizeArgs {
    /// Path to the input image (JPEG)
    #[arg(long)]
    input: PathBuf,

    /// Output directory, created if missing
    #[arg(long, default_value = "./resized")]
    output: PathBuf,

    /// Comma-separated target widths (e.g. 300,600,900)
    #[arg(long, group = "axis", value_delimiter = ',',
          value_parser = clap::value_parser!(u32).range(1..))]
    width: Option<Vec<u32>>,

    /// Comma-separated target heights (e.g. 400,800)
    #[arg(long, group = "axis", value_delimiter = ',',
          value_parser = clap::value_parser!(u32).range(1..))]
    height: Option<Vec<u32>>,

    /// JPEG quality, 1-100
    #[arg(long, default_value_t = 90,
          value_parser = clap::value_parser!(u32).range(1..=100))]
    quality: u32,

    /// Emit a machine-readable JSON report instead of the text summary
    #[arg(long)]
    json: bool,
}

/// Everything that can go wrong after argument parsing, with the exit code
/// each case maps to. The pipeline itself never terminates the process;
/// this is the only place codes are chosen.
#[derive(Debug, Error)]
enum CliError {
    #[error("Unsupported format: {0} (supported extensions: .jpg, .jpeg)")]
    UnsupportedFormat(PathBuf),
    #[error("File not found: {0}")]
    InputNotFound(PathBuf),
    #[error("Cannot read image {path}: {source}")]
    Decode {
        path: PathBuf,
        source: BackendError,
    },
    #[error(transparent)]
    Quality(#[from] QualityOutOfRange),
    #[error(transparent)]
    Pipeline(#[from] PipelineError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Report serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Usage errors (missing/conflicting flags, bad ranges) exit with 2 via
    /// clap before we get here; the remaining codes line up with it.
    fn exit_code(&self) -> u8 {
        match self {
            CliError::UnsupportedFormat(_) => 1,
            CliError::Quality(_) => 2,
            CliError::InputNotFound(_) => 3,
            CliError::Decode { .. }
            | CliError::Pipeline(_)
            | CliError::Io(_)
            | CliError::Json(_) => 4,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Resize(args) => run_resize(&args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}

fn run_resize(args: &ResizeArgs) -> Result<(), CliError> {
    if !args.input.exists() {
        return Err(CliError::InputNotFound(args.input.clone()));
    }
    if !naming::is_jpeg_extension(&args.input) {
        return Err(CliError::UnsupportedFormat(args.input.clone()));
    }
    let name = SourceName::from_path(&args.input)
        .ok_or_else(|| CliError::UnsupportedFormat(args.input.clone()))?;

    let (targets, axis) = match (&args.width, &args.height) {
        (Some(widths), None) => (widths.clone(), ScaleAxis::Width),
        (None, Some(heights)) => (heights.clone(), ScaleAxis::Height),
        _ => unreachable!("clap group enforces exactly one of --width/--height"),
    };

    let backend = RustBackend::new();
    let source = backend.decode(&args.input).map_err(|source| CliError::Decode {
        path: args.input.clone(),
        source,
    })?;
    let original = (source.width(), source.height());

    std::fs::create_dir_all(&args.output)?;

    if !args.json {
        output::print_processing_header(&name.file_name(), original, &args.output);
    }

    let config = VariantConfig {
        targets,
        axis,
        quality: Quality::new(args.quality)?,
    };
    let report = create_size_variants(&backend, &source, &args.output, &name, &config)?;

    if args.json {
        println!(
            "{}",
            output::format_json_report(&name.file_name(), original, &report)?
        );
    } else {
        output::print_resize_report(&name.file_name(), &report);
    }
    Ok(())
}
