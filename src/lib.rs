//! # xcvt
//!
//! Library side of the `convert` command-line tool.  Length, mass,
//! volume and temperature values are converted between units, with
//! informal spellings ("miles", "Celsius", "lbs") resolved to canonical
//! symbols first.
//!
//! The unit tables and the engine live in the [`converter`] crate; this
//! crate adds argument handling and output.
//!
//! ```
//! use xcvt::{cli, execute, OutputFormat};
//!
//! let request = cli::parse_from(["convert", "-f", "kilometers", "-t", "mi", "1"])?
//!     .into_request()?;
//! let text = execute(&request, OutputFormat::Text)?;
//! assert!(text.contains("0.621"));
//! # Ok::<(), xcvt::XcvtError>(())
//! ```

// ── Modules ──────────────────────────────────────────────────────────
pub mod cli;
pub mod error;
pub mod render;

// ── Public re-exports ────────────────────────────────────────────────
pub use cli::{Cli, ConvertRequest, OutputFormat, Request};
pub use error::{Result, XcvtError};

pub use converter::{
    classify, convert, normalize, units_in, Category, ConvertError, Conversion, TempUnit,
};

/// Carry out a request and return what should be printed on stdout.
pub fn execute(request: &Request, format: OutputFormat) -> Result<String> {
    let output = match (request, format) {
        (Request::Help, _) => render::help(),
        (Request::Version, _) => render::version(),
        (Request::ListUnits, OutputFormat::Text) => render::units_text(),
        (Request::ListUnits, OutputFormat::Json) => render::units_json()?,
        (Request::Convert(req), format) => {
            let conversion = Conversion::run(&req.from_unit, &req.to_unit, req.value)?;
            log::debug!("{conversion:?}");
            match format {
                OutputFormat::Text => render::conversion_text(&conversion),
                OutputFormat::Json => render::conversion_json(&conversion)?,
            }
        }
    };
    Ok(output)
}
