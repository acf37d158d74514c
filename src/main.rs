//! `iconvg` command-line tool.
//!
//! Prints an IconVG file's metadata or disassembly, or converts it to SVG.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing::level_filters::LevelFilter;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use iconvg::{Decoder, LogTracer, Metadata, SvgConfig, SvgDestination};

/// How much of the decoding process is logged to standard error.
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum Verbosity {
    /// Warnings and the final decoding error.
    #[default]
    Quiet,
    /// File I/O and the metadata chunk count.
    Normal,
    /// Every magic byte, metadata field, opcode and operand.
    Verbose,
}

impl From<Verbosity> for LevelFilter {
    fn from(verbosity: Verbosity) -> Self {
        match verbosity {
            Verbosity::Quiet => LevelFilter::WARN,
            Verbosity::Normal => LevelFilter::INFO,
            Verbosity::Verbose => LevelFilter::TRACE,
        }
    }
}

/// What to produce from the input.
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum Mode {
    /// Convert the graphic to an SVG document.
    #[default]
    Svg,
    /// Print the view box and palette only.
    Metadata,
    /// Print one line per token, as far as the file decodes.
    Disassemble,
}

/// Inspect IconVG icons or convert them to SVG
#[derive(Parser, Debug)]
#[command(name = "iconvg")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// IconVG file to read
    #[arg(short, long)]
    input: PathBuf,

    /// Where to write the result (standard output if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// What to produce
    #[arg(short, long, value_enum, default_value_t = Mode::default())]
    mode: Mode,

    /// Put each SVG path on its own line
    #[arg(long)]
    pretty: bool,

    /// Log level; RUST_LOG takes precedence when set
    #[arg(short, long, value_enum, default_value_t = Verbosity::default())]
    verbosity: Verbosity,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbosity);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}: {}", args.input.display(), e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbosity: Verbosity) {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from(verbosity).into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let data = fs::read(&args.input)?;
    info!("Read {} bytes from {}", data.len(), args.input.display());

    // A failed disassembly still emits the tokens before the error.
    let (output, outcome) = match args.mode {
        Mode::Svg => {
            let config = SvgConfig::new().with_pretty_print(args.pretty);
            let mut svg = SvgDestination::with_config(config);
            let mut log_tracer = LogTracer;
            Decoder::new(&data)
                .destination(&mut svg)
                .tracer(&mut log_tracer)
                .decode()?;
            (svg.finish(), Ok(()))
        }
        Mode::Metadata => (format_metadata(&iconvg::decode_metadata(&data)?), Ok(())),
        Mode::Disassemble => iconvg::disassemble_partial(&data),
    };

    match &args.output {
        Some(path) => {
            fs::write(path, output)?;
            info!("Wrote {}", path.display());
        }
        None => println!("{}", output),
    }

    Ok(outcome?)
}

/// Renders metadata as human-readable text.
fn format_metadata(metadata: &Metadata) -> String {
    let vb = &metadata.view_box;
    let mut text = format!(
        "viewBox: ({}, {}) - ({}, {})\npalette:",
        vb.min[0], vb.min[1], vb.max[0], vb.max[1]
    );
    for (i, c) in metadata.palette.0.iter().enumerate() {
        if i % 8 == 0 {
            text.push_str("\n ");
        }
        text.push_str(&format!(" #{:02x}{:02x}{:02x}{:02x}", c.r, c.g, c.b, c.a));
    }
    text
}
