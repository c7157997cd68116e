use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Transport failure (DNS, TLS, connection reset, body read).
    #[error("network error for {url}: {message}")]
    Network { url: String, message: String },

    #[error("status {status} for {url}")]
    Status { url: String, status: u16 },

    /// Expected HTML structure was absent.
    #[error("parse error for {url}: {reason}")]
    Parse { url: String, reason: String },

    #[error("failed to write {}: {source}", path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config error: {0}")]
    Config(String),
}

impl Error {
    pub fn network(url: &str, message: impl ToString) -> Self {
        Error::Network {
            url: url.to_string(),
            message: message.to_string(),
        }
    }

    pub fn parse(url: &str, reason: &str) -> Self {
        Error::Parse {
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn filesystem(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Filesystem {
            path: path.into(),
            source,
        }
    }
}
