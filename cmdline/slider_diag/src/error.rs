use owp_curves::*;

use thiserror::Error;

use std::io;

///
/// The ways a diagnostic command can fail
///
#[derive(Error, Debug)]
pub enum DiagError {
    #[error("Could not read the slider definition: {0}")]
    Io(#[from] io::Error),

    #[error("Could not parse the slider definition: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Curve(#[from] CurveError),

    #[error("'{0}' is not a valid value for --radius. The radius must be a number (eg: --radius 32)")]
    InvalidRadius(String),

    #[error("No command was specified (try --help to see the list of commands)")]
    NoCommand
}
