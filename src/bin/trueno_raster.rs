//! trueno-raster: rasterize lines, circles and curves from the command line.
//!
//! Run: `trueno-raster draw --algorithm wu --x1 0 --y1 0 --x2 40 --y2 15 --png wu.png`
//! Batch: `trueno-raster batch < requests.jsonl > responses.jsonl`

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use log::{info, LevelFilter, Log, Metadata, Record};

use trueno_raster::config::Config;
use trueno_raster::output::PngEncoder;
use trueno_raster::preview::render_preview;
use trueno_raster::protocol::{DrawRequest, Handler};
use trueno_raster::raster::Algorithm;

/// trueno-raster: classical rasterization algorithms
#[derive(Parser, Debug)]
#[command(name = "trueno-raster")]
#[command(author = "PAIML Team")]
#[command(version)]
#[command(about = "Rasterize geometry into pixel samples", long_about = None)]
struct Cli {
    /// Config file path (YAML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rasterize a single request and print the JSON response
    Draw(DrawArgs),
    /// Answer JSON-lines requests from stdin on stdout
    Batch,
    /// List supported algorithms
    List,
}

#[derive(Args, Debug)]
struct DrawArgs {
    /// Algorithm name (see `list`)
    #[arg(short, long)]
    algorithm: Option<String>,

    /// Read the request as JSON from a file ("-" for stdin) instead of flags
    #[arg(long, conflicts_with = "algorithm")]
    request: Option<PathBuf>,

    /// Start point / center x
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    x1: i32,
    /// Start point / center y
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    y1: i32,
    /// End point / control point x
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    x2: i32,
    /// End point / control point y
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    y2: i32,
    /// Control point x
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    x3: i32,
    /// Control point y
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    y3: i32,
    /// Curve end x
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    x4: i32,
    /// Curve end y
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    y4: i32,
    /// Circle radius
    #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
    r: i32,

    /// Also write a PNG preview of the samples
    #[arg(long)]
    png: Option<PathBuf>,
}

impl DrawArgs {
    fn to_request(&self) -> Result<DrawRequest> {
        if let Some(path) = &self.request {
            let json = if path.as_os_str() == "-" {
                io::read_to_string(io::stdin()).context("failed to read request from stdin")?
            } else {
                std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read request {}", path.display()))?
            };
            return serde_json::from_str(&json).context("malformed request JSON");
        }

        let algorithm = self
            .algorithm
            .clone()
            .context("either --algorithm or --request is required")?;

        Ok(DrawRequest {
            algorithm,
            x1: self.x1,
            y1: self.y1,
            x2: self.x2,
            y2: self.y2,
            x3: self.x3,
            y3: self.y3,
            x4: self.x4,
            y4: self.y4,
            r: self.r,
        })
    }
}

/// Minimal stderr logger; filtering is done through `log::set_max_level`.
struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            eprintln!("[{:<5} {}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}

static LOGGER: StderrLogger = StderrLogger;

fn init_logging(config_level: LevelFilter, verbose: u8) {
    let level = match verbose {
        0 => config_level,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => Config::default(),
    };
    init_logging(config.level_filter()?, cli.verbose);

    let handler = Handler::from_config(&config).pretty(cli.pretty || config.output.pretty);

    match &cli.command {
        Command::Draw(args) => draw(&handler, &config, args),
        Command::Batch => batch(&handler),
        Command::List => list(),
    }
}

fn draw(handler: &Handler, config: &Config, args: &DrawArgs) -> Result<()> {
    let request = args.to_request()?;
    let response = handler.handle(&request)?;

    if let Some(path) = &args.png {
        let fb = render_preview(&response.points, &config.preview_options()?)?;
        PngEncoder::write_to_file(&fb, path)
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!("wrote preview {}", path.display());
    }

    println!("{}", handler.to_json(&response)?);
    Ok(())
}

fn batch(handler: &Handler) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let stats = handler.serve_lines(stdin.lock(), stdout.lock())?;
    info!("batch done: {} handled, {} rejected", stats.handled, stats.rejected);
    Ok(())
}

fn list() -> Result<()> {
    let mut out = io::stdout().lock();
    for algorithm in Algorithm::ALL {
        let kind = if algorithm.is_antialiased() { "antialiased" } else { "opaque" };
        writeln!(
            out,
            "{:<18} alias {:<18} points {}  {kind}",
            algorithm.name(),
            algorithm.alias(),
            algorithm.point_count()
        )?;
    }
    Ok(())
}
