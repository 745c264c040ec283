use converter::ConvertError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum XcvtError {
    /// Bad command line: a flag without its value, a value that is not a
    /// number, or a required argument left out.
    #[error("{0}")]
    Argument(String),

    /// The conversion engine rejected the units.
    #[error(transparent)]
    Convert(#[from] ConvertError),

    #[error("JSON output failed")]
    Json(#[from] serde_json::Error),
}

impl XcvtError {
    pub(crate) fn argument(msg: impl Into<String>) -> Self {
        XcvtError::Argument(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, XcvtError>;
