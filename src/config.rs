use chrono_tz::Tz;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// Process-wide settings, validated once at startup and never mutated.
pub struct Config {
    pub api_key: String,
    pub origin: String,
    pub destination: String,
    pub timezone: Tz,
    pub log_path: PathBuf,
    pub window_start_hour: u32,
    pub window_end_hour: u32,
    pub request_timeout: Duration,
}

impl Config {
    pub fn new(
        api_key: String,
        origin: String,
        destination: String,
        timezone: &str,
        log_path: PathBuf,
        window_start_hour: u32,
        window_end_hour: u32,
        request_timeout: Duration,
    ) -> Result<Config, Error> {
        if api_key.is_empty() {
            return Err(Error {
                kind: ErrorKind::MissingApiKey,
            });
        }

        if origin.is_empty() || destination.is_empty() {
            return Err(Error {
                kind: ErrorKind::EmptyAddress,
            });
        }

        if window_start_hour >= 24 || window_end_hour > 24 || window_start_hour >= window_end_hour {
            return Err(Error {
                kind: ErrorKind::InvalidWindow(window_start_hour, window_end_hour),
            });
        }

        let timezone = timezone.parse::<Tz>().map_err(|_| Error {
            kind: ErrorKind::UnknownTimezone(timezone.to_owned()),
        })?;

        Ok(Config {
            api_key,
            origin,
            destination,
            timezone,
            log_path,
            window_start_hour,
            window_end_hour,
            request_timeout,
        })
    }
}

#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
}

impl std::error::Error for Error {}

impl Error {
    /// Return the kind of this error.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

/// The kind of an error that can occur.
#[derive(Debug)]
#[non_exhaustive]
pub enum ErrorKind {
    MissingApiKey,
    EmptyAddress,
    InvalidWindow(u32, u32),
    UnknownTimezone(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.kind {
            ErrorKind::MissingApiKey => write!(f, "API key must not be empty"),
            ErrorKind::EmptyAddress => {
                write!(f, "origin and destination addresses must not be empty")
            }
            ErrorKind::InvalidWindow(start, end) => write!(
                f,
                "invalid time window [{}, {}): hours must satisfy 0 <= start < end <= 24",
                start, end
            ),
            ErrorKind::UnknownTimezone(ref tz) => write!(f, "unknown time zone: {:?}", tz),
        }
    }
}
