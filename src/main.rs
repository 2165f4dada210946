// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, debug};
use std::io::Write;
use std::path::{Path, PathBuf};

use blockpress::app_config::{Config, LogLevel};
use blockpress::app_controller::Controller;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LogLevel::Error,
            CliLogLevel::Warn => LogLevel::Warn,
            CliLogLevel::Info => LogLevel::Info,
            CliLogLevel::Debug => LogLevel::Debug,
            CliLogLevel::Trace => LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the escaped, flattened content on one line (default command)
    Emit,

    /// Print every pipeline stage under a header, for inspection
    Stages,

    /// Generate shell completions for blockpress
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// blockpress - Block markup escaper
///
/// Prints the scroll-animation demo post with `'` escaped for a PHP string,
/// newlines removed, and `"` escaped for a JSON string value.
#[derive(Parser, Debug)]
#[command(name = "blockpress")]
#[command(version)]
#[command(about = "Escape the demo block markup for PHP and JSON embedding")]
#[command(long_about = "blockpress prints the built-in Gutenberg block markup as a single line,
with ' escaped as \\', newlines removed and \" escaped as \\\".

EXAMPLES:
    blockpress                              # Print the escaped content
    blockpress stages                       # Show each pipeline stage
    blockpress --log-level debug            # Log stage sizes to stderr
    blockpress -c blockpress.json           # Read log settings from a file
    blockpress completions bash > bp.bash   # Generate bash completions

CONFIGURATION:
    An optional JSON file given with --config may set \"log_level\" and
    \"audit_content\". No config file is read unless one is given, and
    none is ever written.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Configuration file path
    #[arg(short, long, global = true, value_name = "CONFIG_PATH")]
    config: Option<PathBuf>,

    /// Set logging level
    #[arg(short, long, global = true, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: Tag and ANSI color for log level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("ERROR", "1;31"),
            Level::Warn => ("WARN ", "1;33"),
            Level::Info => ("INFO ", "1;32"),
            Level::Debug => ("DEBUG", "1;36"),
            Level::Trace => ("TRACE", "1;35"),
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let (tag, color) = Self::style_for_level(record.level());

            // stdout carries the result, so every log line goes to stderr
            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "\x1B[{}m{} {} {}\x1B[0m",
                color, now, tag, record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // The logger accepts everything; log::set_max_level does the filtering
    CustomLogger::init(LevelFilter::Trace)?;
    log::set_max_level(LevelFilter::Info);

    let cli = CommandLineOptions::parse();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command.unwrap_or(Commands::Emit) {
        Commands::Completions { shell } => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "blockpress", &mut out);
        }
        Commands::Stages => {
            load_controller(cli.config.as_deref(), cli.log_level)?
                .dump_stages(&mut out)
                .context("Failed to print pipeline stages")?;
        }
        Commands::Emit => {
            load_controller(cli.config.as_deref(), cli.log_level)?
                .emit(&mut out)
                .context("Failed to print escaped content")?;
        }
    }

    Ok(())
}

// Apply log settings and build the controller; command line wins over the config file
fn load_controller(config_path: Option<&Path>, log_level: Option<CliLogLevel>) -> Result<Controller> {
    // If log level is set via command line, apply it before loading config
    if let Some(cli_level) = &log_level {
        let level: LogLevel = cli_level.clone().into();
        log::set_max_level(level.to_level_filter());
    }

    let mut config = Config::load_or_default(config_path)
        .context("Failed to load configuration")?;

    match log_level {
        Some(cli_level) => config.log_level = cli_level.into(),
        None => log::set_max_level(config.log_level.to_level_filter()),
    }

    if let Some(path) = config_path {
        debug!("Loaded configuration from {:?}", path);
    }

    Ok(Controller::with_config(config))
}
