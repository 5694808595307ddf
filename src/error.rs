use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP {status} from {url}: {message}")]
    Http {
        status: u16,
        url: String,
        message: String,
    },

    #[error("Unexpected payload shape: {0}")]
    UnexpectedPayload(String),

    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Chart rendering error: {0}")]
    Chart(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Failures that cost a whole source rather than a single record.
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Http { .. } | Error::Network(_))
    }
}
