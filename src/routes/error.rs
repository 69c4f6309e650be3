use std::fmt;

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

    pub(crate) fn duration_parse(raw: &str) -> Self {
        Error {
            kind: ErrorKind::DurationParse(raw.to_owned()),
        }
    }

    pub(crate) fn no_routes() -> Self {
        Error {
            kind: ErrorKind::NoRoutes,
        }
    }
}

/// The kind of an error that can occur.
#[derive(Debug)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Non-success HTTP status, with the raw response body for diagnosis.
    Http { status: u16, body: String },
    Transport(ureq::Error),
    JSONParse(std::io::Error),
    JSONEncode(serde_json::Error),
    DurationParse(String),
    NoRoutes,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.kind {
            ErrorKind::Http { status, ref body } => {
                write!(f, "HTTP status {}: {}", status, body)
            }
            ErrorKind::Transport(ref err) => err.fmt(f),
            ErrorKind::JSONParse(ref err) => err.fmt(f),
            ErrorKind::JSONEncode(ref err) => err.fmt(f),
            ErrorKind::DurationParse(ref raw) => {
                write!(f, "malformed duration string: {:?}", raw)
            }
            ErrorKind::NoRoutes => write!(f, "no routes returned"),
        }
    }
}

impl From<ureq::Error> for Error {
    fn from(e: ureq::Error) -> Self {
        match e {
            ureq::Error::Status(status, response) => Error {
                kind: ErrorKind::Http {
                    status,
                    body: response.into_string().unwrap_or_default(),
                },
            },
            transport @ ureq::Error::Transport(_) => Error {
                kind: ErrorKind::Transport(transport),
            },
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error {
            kind: ErrorKind::JSONParse(e),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error {
            kind: ErrorKind::JSONEncode(e),
        }
    }
}
