// Error taxonomy for a single fetch run
use thiserror::Error;

/// Coarse category of a [`FetchError`], used to pick the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Transport,
    Decode,
    EmptyData,
    Output,
}

impl ErrorKind {
    pub fn exit_code(self) -> u8 {
        match self {
            ErrorKind::Output => 1,
            ErrorKind::Transport => 3,
            ErrorKind::Decode => 4,
            ErrorKind::EmptyData => 5,
            // 2 belongs to clap usage errors
            ErrorKind::Validation => 6,
        }
    }
}

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Both --realm and --company flags are required.")]
    MissingFlags,

    #[error("Error making request: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Error reading response: {0}")]
    ResponseBody(#[source] reqwest::Error),

    /// The response body is only logged, so the diagnostic stays on one line.
    #[error("Error making request: server returned {status}")]
    Status { status: u16 },

    #[error("Error parsing JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Error parsing JSON: invalid timestamp {value:?} in history sample {index}: {source}")]
    InvalidTimestamp {
        index: usize,
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("No historical data available.")]
    EmptyHistory,

    #[error("Error writing output: {0}")]
    Output(#[from] std::io::Error),
}

impl FetchError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FetchError::MissingFlags => ErrorKind::Validation,
            FetchError::Transport(_) | FetchError::ResponseBody(_) | FetchError::Status { .. } => {
                ErrorKind::Transport
            }
            FetchError::Decode(_) | FetchError::InvalidTimestamp { .. } => ErrorKind::Decode,
            FetchError::EmptyHistory => ErrorKind::EmptyData,
            FetchError::Output(_) => ErrorKind::Output,
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.kind().exit_code()
    }
}
