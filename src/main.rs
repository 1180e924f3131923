// SPDX-License-Identifier: PMPL-1.0-or-later

//! http-status: look up HTTP status codes by number or description
//!
//! Prints the meaning, category and common use cases of a status code, in
//! any of the supported languages. Descriptions are matched fuzzily, so
//! `http-status "resource not found"` resolves to 404.

use anyhow::Result;
use clap::Parser;
use http_status_meaning::config::CliConfig;
use http_status_meaning::logging::{init_logging, LogConfig};
use http_status_meaning::report::{
    self, DisplayMode, ReportFormatter, ReportOutputFormat, StatusReport,
};
use http_status_meaning::{all_codes, codes_by_category, Lang, LookupError, StatusCategory};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "http-status")]
#[command(version)]
#[command(allow_negative_numbers = true)]
#[command(about = "Look up HTTP status codes by number or description")]
#[command(after_help = "Examples:
  http-status 404                    Get the meaning of 404
  http-status \"Not Found\"            Find a status code by description
  http-status -c 200                 Get the category of 200
  http-status -u 429                 Get use cases for 429
  http-status -d 500                 Get detailed information for 500
  http-status --language=fr 404      Get the meaning in French
  http-status --list clientError     List every 4xx code")]
struct Cli {
    /// Status code or description; several words are joined with spaces
    #[arg(value_name = "CODE_OR_DESCRIPTION", required_unless_present_any = ["list", "languages"])]
    input: Vec<String>,

    /// Show only the category of the status code
    #[arg(short, long)]
    category: bool,

    /// Show use cases for the status code
    #[arg(short = 'u', long = "usecases")]
    use_cases: bool,

    /// Show meaning, category and use cases
    #[arg(short, long)]
    details: bool,

    /// Language for meanings and categories (e.g. en, fr, es, de)
    #[arg(short, long, value_name = "XX")]
    language: Option<String>,

    /// Output format
    #[arg(long, value_enum)]
    format: Option<ReportOutputFormat>,

    /// Read defaults from a JSON or YAML config file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// List catalog entries, optionally for one category
    /// (informational, success, redirection, clientError, serverError)
    #[arg(long, value_name = "CATEGORY", num_args = 0..=1, default_missing_value = "all")]
    list: Option<String>,

    /// List supported languages
    #[arg(long)]
    languages: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(&LogConfig::from_verbosity(cli.verbose).with_ansi(!cli.no_color))?;

    let mut config = CliConfig::resolve(cli.config.as_deref())?;
    if let Some(path) = &cli.config {
        tracing::info!(path = %path.display(), "loaded config file");
    }
    if let Some(language) = cli.language.clone() {
        config.language = language;
    }
    if let Some(format) = cli.format {
        config.format = format;
    }
    if cli.no_color {
        config.color = false;
    }
    if Lang::from_code(&config.language).is_none() {
        tracing::warn!(language = %config.language, "unsupported language, using English");
    }

    let formatter = ReportFormatter::with_color(config.color);
    let lang = Some(config.language.as_str());

    if cli.languages {
        return print_languages(config.format);
    }

    if let Some(key) = &cli.list {
        let entries = if key == "all" {
            all_codes(lang)
        } else {
            StatusCategory::from_key(key)
                .ok_or_else(|| LookupError::UnknownCategory { key: key.clone() })?;
            codes_by_category(key, lang)
        };
        let rendered = match config.format {
            ReportOutputFormat::Text => formatter.render_listing(&entries),
            format => format.serialize(&entries)?,
        };
        println!("{}", rendered);
        return Ok(());
    }

    let input = cli.input.join(" ");
    let code = report::resolve_input(&input)?;
    tracing::debug!(input = %input, code, "resolved input");

    let status = StatusReport::for_code(code, lang);
    let rendered = match config.format {
        ReportOutputFormat::Text => formatter.render(
            &status,
            DisplayMode::from_flags(cli.category, cli.use_cases, cli.details),
        ),
        format => format.serialize(&status)?,
    };
    println!("{}", rendered);

    Ok(())
}

fn print_languages(format: ReportOutputFormat) -> Result<()> {
    if format.is_structured() {
        println!("{}", format.serialize(&http_status_meaning::supported_languages())?);
        return Ok(());
    }
    for lang in Lang::all() {
        println!("{}  {:<10} {}", lang.code(), lang.english_name(), lang.native_name());
    }
    Ok(())
}
