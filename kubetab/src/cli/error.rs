use std::path::PathBuf;

use snafu::Snafu;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("{source}"))]
    Configuration { source: crate::config::Error },

    #[snafu(display("{source}"))]
    Render { source: crate::table::Error },

    #[snafu(display("Failed to read records from {}, error: {source}", filename.display()))]
    ReadRecords { filename: PathBuf, source: std::io::Error },

    #[snafu(display("Failed to parse records from {}, error: {source}", filename.display()))]
    ParseRecords { filename: PathBuf, source: serde_json::Error },

    #[snafu(display("Failed to write to stdout, error: {source}"))]
    WriteStdout { source: std::io::Error },
}

impl From<crate::config::Error> for Error {
    fn from(source: crate::config::Error) -> Self { Self::Configuration { source } }
}

impl From<crate::table::Error> for Error {
    fn from(source: crate::table::Error) -> Self { Self::Render { source } }
}
