use boolex::{
    analyze_with,
    config::Config,
    report::{render_json, render_table},
    tokenizer::{classifier::IdentifierPolicy, token::Locale},
    Error, InternalResult,
};
use clap::{Parser, ValueEnum};
use std::{
    io::{self, Read},
    path::PathBuf,
};
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(author, version, about = "Tokenize boolean-algebra programs", long_about = None)]
struct Cli {
    /// Source file to analyze (reads stdin when omitted)
    file: Option<PathBuf>,

    /// Analyze this text instead of a file
    #[arg(short, long)]
    expr: Option<String>,

    /// Path to config file
    #[arg(short, long, default_value = "boolex.json")]
    config: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Language for token labels and error messages (en, ru)
    #[arg(long)]
    locale: Option<Locale>,

    /// Only accept ASCII letters in identifiers
    #[arg(long)]
    ascii_identifiers: bool,

    /// Exit with status 2 when the input has lexical errors
    #[arg(long)]
    strict: bool,

    /// Enable debug mode
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

fn read_input(cli: &Cli) -> InternalResult<String> {
    let input = match (&cli.expr, &cli.file) {
        (Some(expr), _) => expr.clone(),
        (None, Some(path)) => std::fs::read_to_string(path)?,
        (None, None) => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    if input.is_empty() {
        return Err(Error::EmptyInput);
    }
    Ok(input)
}

fn load_config(cli: &Cli) -> InternalResult<Config> {
    let mut config = Config::load_or_default(&cli.config)?;
    if let Some(locale) = cli.locale {
        config.report.locale = locale;
    }
    if cli.ascii_identifiers {
        config.scan.identifiers = IdentifierPolicy::Ascii;
    }
    debug!("config: {:?}", config);
    Ok(config)
}

/// Returns whether the analysis reported errors.
fn run(cli: &Cli) -> InternalResult<bool> {
    let config = load_config(cli)?;
    let input = read_input(cli)?;

    let result = analyze_with(&input, &config);

    let output = match cli.format {
        OutputFormat::Table => render_table(&result),
        OutputFormat::Json => render_json(&result, true)?,
    };
    println!("{}", output.trim_end());

    Ok(result.has_errors)
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()))
        .with(fmt::layer().with_writer(io::stderr))
        .init();

    match run(&cli) {
        Ok(true) if cli.strict => std::process::exit(2),
        Ok(_) => {}
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
