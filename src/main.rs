//! # ean13 CLI
//!
//! Command-line interface for generating EAN-13 barcodes as TikZ.
//!
//! ## Usage
//!
//! ```bash
//! # Show the check digit and full code
//! ean13 check 978272349971
//!
//! # Print the tikzpicture to stdout
//! ean13 tikz 978272349971 --caption
//!
//! # Write a LaTeX document and build the PDF
//! ean13 document 978272349971 --compile
//!
//! # Override metrics from a file and the command line
//! ean13 document 978272349971 --metrics metrics.json --module-width 0.04
//! ```
//!
//! Set `RUST_LOG=debug` (or pass `-v`) for diagnostic output on stderr.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use ean13_tikz::{
    Ean13, Ean13Error, PhysicalMetrics, TikzPicture,
    latex::{self, LatexDocument},
};

/// ean13 - EAN-13 barcode generator for LaTeX/TikZ
#[derive(Parser, Debug)]
#[command(name = "ean13")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compute the check digit of a 12-digit code
    Check {
        /// 12-digit product code (check digit excluded)
        code: String,
    },

    /// Print the barcode as a tikzpicture
    Tikz {
        /// 12-digit product code (check digit excluded)
        code: String,

        /// Print the human-readable code under the bars
        #[arg(long)]
        caption: bool,

        #[command(flatten)]
        metrics: MetricArgs,
    },

    /// Write a complete LaTeX document containing the barcode
    Document {
        /// 12-digit product code (check digit excluded)
        code: String,

        /// Output file (defaults to ean13_<code>.tex)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Run the LaTeX compiler on the written file
        #[arg(long)]
        compile: bool,

        /// LaTeX compiler binary
        #[arg(long, default_value = latex::DEFAULT_COMPILER)]
        compiler: String,

        /// Print the human-readable code under the bars
        #[arg(long)]
        caption: bool,

        #[command(flatten)]
        metrics: MetricArgs,
    },
}

/// Physical metric overrides, applied on top of `--metrics`.
#[derive(Args, Debug)]
struct MetricArgs {
    /// JSON file with metric overrides
    #[arg(long = "metrics", value_name = "FILE")]
    metrics_file: Option<PathBuf>,

    /// Blank margin before the start guard
    #[arg(long)]
    quiet_zone_begin: Option<f64>,

    /// Blank margin after the end guard
    #[arg(long)]
    quiet_zone_end: Option<f64>,

    /// Height of data bars
    #[arg(long)]
    standard_height: Option<f64>,

    /// Height of guard bars
    #[arg(long)]
    guard_height: Option<f64>,

    /// Width of one module (X-dimension)
    #[arg(long)]
    module_width: Option<f64>,
}

impl MetricArgs {
    fn resolve(&self) -> Result<PhysicalMetrics, Ean13Error> {
        let mut m = match &self.metrics_file {
            Some(path) => PhysicalMetrics::from_file(path)?,
            None => PhysicalMetrics::EAN13,
        };

        if let Some(v) = self.quiet_zone_begin {
            m.quiet_zone_begin = v;
        }
        if let Some(v) = self.quiet_zone_end {
            m.quiet_zone_end = v;
        }
        if let Some(v) = self.standard_height {
            m.standard_height = v;
        }
        if let Some(v) = self.guard_height {
            m.guard_height = v;
        }
        if let Some(v) = self.module_width {
            m.module_width = v;
        }

        m.validate()?;
        Ok(m)
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(command: Commands) -> Result<(), Ean13Error> {
    match command {
        Commands::Check { code } => {
            let code = Ean13::new(&code)?;
            println!("Check digit: {}", code.check_digit());
            println!("EAN-13:      {}", code.full_code());
            println!("Label:       {}", code);
        }

        Commands::Tikz {
            code,
            caption,
            metrics,
        } => {
            let code = Ean13::new(&code)?;
            let metrics = metrics.resolve()?;
            print!(
                "{}",
                TikzPicture::new(&code)
                    .metrics(metrics)
                    .caption(caption)
                    .render()
            );
        }

        Commands::Document {
            code,
            output,
            compile,
            compiler,
            caption,
            metrics,
        } => {
            let code = Ean13::new(&code)?;
            let metrics = metrics.resolve()?;
            let body = TikzPicture::new(&code)
                .metrics(metrics)
                .caption(caption)
                .render();

            let path = output
                .unwrap_or_else(|| PathBuf::from(format!("ean13_{}.tex", code.full_code())));
            let path = LatexDocument::new(body).write_to(&path)?;
            println!("Wrote {}", path.display());

            if compile {
                latex::compile(&path, &compiler)?;
                println!("Compiled with {}", compiler);
            }
        }
    }

    Ok(())
}
