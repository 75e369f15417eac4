use std::path::PathBuf;

use snafu::prelude::*;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("{message}"))]
    ConfigError { message: String },
    #[snafu(display("Failed to read configuration from {}: {source}", path.display()))]
    ConfigReadError {
        path: PathBuf,
        source: config::ConfigError,
    },
    #[snafu(display("Failed to write configuration to {}: {source}", path.display()))]
    ConfigWriteError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("Failed to read {field} from the terminal: {source}"))]
    PromptError {
        field: String,
        source: std::io::Error,
    },
    #[snafu(display("{message}"))]
    UsageError { message: String },
    #[snafu(display("{method} {url} failed: {source}"))]
    RequestError {
        url: String,
        method: String,
        #[snafu(source(from(ureq::Error, Box::new)))]
        source: Box<ureq::Error>,
    },
    #[snafu(display("Push to Kindle rejected the article ({status}): {message}"))]
    SendError { status: u16, message: String },
    #[snafu(display("Failed to read response from {url}: {source}"))]
    ResponseError {
        url: String,
        source: std::io::Error,
    },
}

impl Error {
    /// Process exit code for this error. Usage and configuration problems
    /// exit with 2, everything that happened on the wire exits with 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::ConfigError { .. }
            | Error::ConfigReadError { .. }
            | Error::ConfigWriteError { .. }
            | Error::PromptError { .. }
            | Error::UsageError { .. } => 2,
            Error::RequestError { .. } | Error::SendError { .. } | Error::ResponseError { .. } => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
