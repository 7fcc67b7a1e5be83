use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{debug, info};
use notacalc::Notation;
use notacalc::service::handle_request;

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Notacalc - evaluate arithmetic expressions in infix or prefix notation
#[derive(Parser, Debug)]
#[command(name = "notacalc")]
#[command(about = "Evaluate arithmetic expressions written in infix or prefix notation")]
#[command(version)]
pub struct CliArgs {
    /// Expression to evaluate, e.g. "( 1 + 2 ) * 3". Starts an interactive
    /// session when omitted
    pub expression: Option<String>,

    /// Notation of the expressions (infix | prefix)
    #[arg(short, long, default_value = "infix")]
    pub notation: String,

    /// Evaluate every non-empty line of a file
    #[arg(short, long, conflicts_with = "expression")]
    pub file: Option<PathBuf>,

    /// Read JSON requests like {"notation": "infix", "expr": "1 + 2"} line by line
    #[arg(long, conflicts_with_all = ["expression", "file"])]
    pub json: bool,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    Once(String),
    Batch(PathBuf),
    Interactive { json: bool },
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub mode: Mode,
    pub notation: Notation,
    pub log_level: LogLevel,
}

impl TryFrom<CliArgs> for CliConfig {
    type Error = anyhow::Error;

    fn try_from(args: CliArgs) -> Result<Self> {
        let notation = args
            .notation
            .parse::<Notation>()
            .context("Invalid notation")?;

        let mode = match (args.expression, args.file) {
            (Some(expression), _) => Mode::Once(expression),
            (None, Some(path)) => Mode::Batch(path),
            (None, None) => Mode::Interactive { json: args.json },
        };

        Ok(CliConfig {
            mode,
            notation,
            log_level: args.log_level,
        })
    }
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    CliConfig::try_from(CliArgs::parse())
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
    Ok(())
}

fn evaluate_line(line: &str, notation: Notation, json: bool) -> String {
    if json {
        let reply = handle_request(line);
        debug!("Request answered with status {}", reply.status);
        return reply.body;
    }
    match notation.evaluate(line) {
        Ok(value) => value.to_string(),
        Err(e) => e.to_string(),
    }
}

/// Prompt, read one line, print its result or error, until end of input
pub fn run_session<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    notation: Notation,
    json: bool,
) -> Result<()> {
    let mut line = String::new();
    loop {
        write!(output, "> ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line).context("Failed to read input")? == 0 {
            writeln!(output)?;
            return Ok(());
        }

        let expression = line.trim_end_matches(['\n', '\r']);
        writeln!(output, "{}", evaluate_line(expression, notation, json))?;
    }
}

fn run_batch<W: Write>(path: &Path, notation: Notation, mut output: W) -> Result<()> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read expressions from {}", path.display()))?;
    let expressions: Vec<&str> = contents
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect();

    for result in notacalc::evaluate_all(&expressions, notation) {
        match result {
            Ok(value) => writeln!(output, "{}", value)?,
            Err(e) => writeln!(output, "{}", e)?,
        }
    }
    Ok(())
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    // Initialize logging
    init_logging(&config.log_level)?;

    info!("Using {} notation", config.notation);

    match config.mode {
        Mode::Once(expression) => {
            let value = config
                .notation
                .evaluate(&expression)
                .with_context(|| format!("Failed to evaluate '{}'", expression))?;
            println!("{}", value);
            Ok(())
        }
        Mode::Batch(path) => run_batch(&path, config.notation, io::stdout().lock()),
        Mode::Interactive { json } => {
            run_session(io::stdin().lock(), io::stdout().lock(), config.notation, json)
        }
    }
}
