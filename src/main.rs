//! CLI entry point for dirsize

use std::fs::File;
use std::io::{self, BufWriter, IsTerminal};
use std::path::{Path, PathBuf};
use std::process;

use clap::{ArgAction, Parser, ValueEnum};
use dirsize::{ReportConfig, ReportFormat, Reporter, ScanConfig, Scanner};
use termcolor::{BufferedStandardStream, ColorChoice, NoColor, WriteColor};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (e.g. `debug`, `dirsize=trace`).
const LOG_ENV: &str = "DIRSIZE_LOG";

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "dirsize")]
#[command(about = "Show the cumulative size of every directory below a path")]
#[command(version)]
struct Args {
    /// Directory to scan
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Align sizes in one column (use --align=false to disable)
    #[arg(
        short,
        long,
        action = ArgAction::Set,
        default_value_t = true,
        num_args = 0..=1,
        default_missing_value = "true",
        require_equals = true,
        value_name = "BOOL"
    )]
    align: bool,

    /// Do not count directories / files starting with a dot
    #[arg(long = "ignore-dotfiles")]
    ignore_dotfiles: bool,

    /// Do not break when encountering errors (results will be incorrect)
    #[arg(long = "ignore-errors")]
    ignore_errors: bool,

    /// Filename to print the list to (or - for stdout)
    #[arg(short, long, default_value = "-", value_name = "FILE")]
    output: PathBuf,

    /// Summarize only instead of printing all directories
    #[arg(short, long)]
    sum: bool,

    /// Output in JSON format
    #[arg(long)]
    json: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

/// Install the stderr log subscriber. Defaults to warnings only.
fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .init();
}

fn is_stdout(output: &Path) -> bool {
    output.as_os_str() == "-"
}

/// Open the report sink. Files never receive color codes.
fn open_output(output: &Path, use_color: bool) -> io::Result<Box<dyn WriteColor>> {
    if is_stdout(output) {
        let choice = if use_color {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        };
        Ok(Box::new(BufferedStandardStream::stdout(choice)))
    } else {
        let file = File::create(output)?;
        Ok(Box::new(NoColor::new(BufWriter::new(file))))
    }
}

fn main() {
    let args = Args::parse();
    init_logging();

    let use_color = is_stdout(&args.output) && should_use_color(args.color);

    // The sink is opened before scanning, so a failed scan leaves an empty file.
    let mut out = open_output(&args.output, use_color).unwrap_or_else(|e| {
        eprintln!(
            "dirsize: unable to open output file '{}': {}",
            args.output.display(),
            e
        );
        process::exit(1);
    });

    let scan_config = ScanConfig {
        ignore_dot_files: args.ignore_dotfiles,
        ignore_errors: args.ignore_errors,
    };
    tracing::debug!(root = %args.path.display(), ?scan_config, "starting scan");

    let result = match Scanner::new(scan_config).scan(&args.path) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("dirsize: unable to scan directories: {}", e);
            process::exit(1);
        }
    };

    let reporter = Reporter::new(ReportConfig {
        align: args.align,
        sum: args.sum,
        use_color,
        format: if args.json {
            ReportFormat::Json
        } else {
            ReportFormat::Text
        },
    });

    if let Err(e) = reporter.write(&result, &mut *out) {
        eprintln!("dirsize: error writing output: {}", e);
        process::exit(1);
    }
}
