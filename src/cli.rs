//! Command-line surface of the `convert` binary.
//!
//! Clap's built-in `--help`/`--version` are switched off: `-v` means
//! *version* here, and both are plain flags resolved into a [`Request`]
//! together with `-l`.

use std::ffi::OsString;

use clap::Parser;
use converter::normalize;
use log::debug;

use crate::error::{Result, XcvtError};

pub const USAGE: &str = "convert -f <from_unit> -t <to_unit> <value>";

#[derive(Parser, Debug)]
#[command(name = "convert")]
#[command(about = "Convert a value between units of length, mass, volume or temperature")]
#[command(override_usage = USAGE)]
#[command(disable_help_flag = true, disable_version_flag = true)]
#[command(args_override_self = true)]
#[command(after_help = "For a list of units, use the -l or --list flag.")]
pub struct Cli {
    /// Show this help message
    #[arg(short = 'h', long = "help")]
    pub help: bool,

    /// List supported units
    #[arg(short = 'l', long = "list", visible_alias = "units")]
    pub list: bool,

    /// Print the version
    #[arg(short = 'v', long = "version")]
    pub version: bool,

    /// Unit to convert from (aliases such as "miles" or "Celsius" accepted)
    #[arg(short = 'f', long = "from", value_name = "UNIT")]
    pub from: Option<String>,

    /// Unit to convert to
    #[arg(short = 't', long = "to", value_name = "UNIT")]
    pub to: Option<String>,

    /// Value to convert
    #[arg(value_name = "VALUE", allow_negative_numbers = true)]
    pub value: Option<String>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(short = 'd', long = "debug", hide = true)]
    pub debug: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// What a single invocation asks for, with units already normalized.
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    Help,
    ListUnits,
    Version,
    Convert(ConvertRequest),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConvertRequest {
    pub from_unit: String,
    pub to_unit: String,
    pub value: f64,
}

/// Parse raw arguments (program name first), mapping clap failures to
/// [`XcvtError::Argument`].
pub fn parse_from<I, T>(args: I) -> Result<Cli>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args = move_negative_values_last(args.into_iter().map(Into::into).collect());
    Cli::try_parse_from(args).map_err(|e| XcvtError::argument(clap_message(&e)))
}

// Clap reads tokens like `-.5` as a short-flag cluster. Any token that
// starts with '-', parses as a number and is not the value of -f/-t is
// moved behind a `--` so it can only land in the positional slot.
fn move_negative_values_last(args: Vec<OsString>) -> Vec<OsString> {
    if args.iter().any(|a| a == "--") {
        return args;
    }

    let mut flags = Vec::with_capacity(args.len() + 1);
    let mut values = Vec::new();
    let mut unit_follows = false;
    for (i, arg) in args.into_iter().enumerate() {
        let text = arg.to_str();
        let negative_number = i > 0
            && !unit_follows
            && text.is_some_and(|s| s.starts_with('-') && s.parse::<f64>().is_ok());
        unit_follows = matches!(text, Some("-f" | "--from" | "-t" | "--to"));
        if negative_number {
            values.push(arg);
        } else {
            flags.push(arg);
        }
    }

    if !values.is_empty() {
        flags.push(OsString::from("--"));
        flags.extend(values);
    }
    flags
}

// First line of clap's rendered error, without its own "error: " prefix.
fn clap_message(err: &clap::Error) -> String {
    let rendered = err.render().to_string();
    let line = rendered.lines().next().unwrap_or_default();
    line.strip_prefix("error: ").unwrap_or(line).to_string()
}

impl Cli {
    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }

    /// Resolve flags into a [`Request`].
    ///
    /// Help wins over list, list over version.  Outside those modes the
    /// units and the value are all required, units go through alias
    /// normalization, and the value must be a finite number.
    pub fn into_request(self) -> Result<Request> {
        if self.help {
            return Ok(Request::Help);
        }
        if self.list {
            return Ok(Request::ListUnits);
        }
        if self.version {
            return Ok(Request::Version);
        }

        let (Some(from), Some(to), Some(raw_value)) = (self.from, self.to, self.value) else {
            return Err(XcvtError::argument("Missing required arguments"));
        };

        let value = parse_value(&raw_value)?;
        let from_unit = normalize(&from);
        let to_unit = normalize(&to);
        if from_unit.is_empty() {
            return Err(XcvtError::argument("'-f/--from' flag requires a unit."));
        }
        if to_unit.is_empty() {
            return Err(XcvtError::argument("'-t/--to' flag requires a unit."));
        }
        debug!("request: {value} {from_unit} -> {to_unit}");

        Ok(Request::Convert(ConvertRequest {
            from_unit,
            to_unit,
            value,
        }))
    }
}

fn parse_value(raw: &str) -> Result<f64> {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(XcvtError::argument("Value must be a valid number.")),
    }
}
