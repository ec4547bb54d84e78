pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, derive_more::From)]
pub enum Error {
    #[from]
    Transport(reqwest::Error),
    /// Server answered, but not with a 2xx.
    Status(reqwest::StatusCode),
    #[from]
    Decode(serde_json::Error),
    #[from]
    Io(std::io::Error),
}

impl Error {
    /// Connection-level failures, including non-success statuses.
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_) | Error::Status(_))
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, fmt: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            Error::Transport(e) => write!(fmt, "{e}"),
            Error::Status(status) => write!(
                fmt,
                "Response status code does not indicate success: {status}"
            ),
            Error::Decode(e) => write!(fmt, "Unexpected response body: {e}"),
            Error::Io(e) => write!(fmt, "{e}"),
        }
    }
}

impl std::error::Error for Error {}
