use std::fmt::Display;

use thiserror::Error;

/// Process exit status. The discriminant is the numeric exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok = 0,
    InternalError = 1,
    ConnectionError = 2,
    FlagError = 3,
    AuthenticationError = 4,
}

const STATUS_NAMES: [&str; 5] = [
    "OK",
    "INTERNAL_ERROR",
    "CONNECTION_ERROR",
    "FLAG_ERROR",
    "AUTHENTICATION_ERROR",
];

impl Status {
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        STATUS_NAMES[self as usize]
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl From<Status> for std::process::ExitCode {
    fn from(status: Status) -> Self {
        std::process::ExitCode::from(status.code())
    }
}

#[derive(Debug, Error)]
pub enum Error {
    /// Bad or missing input, detected before any I/O.
    #[error("{0}")]
    Flag(String),
    /// Transport failures and unexpected statuses.
    #[error("{0}")]
    Connection(String),
    /// The identity service rejected the credentials (HTTP 400).
    #[error("invalid authentication credentials")]
    Authentication,
    #[error("{0}")]
    Internal(String),
}

impl Error {
    pub fn status(&self) -> Status {
        match self {
            Self::Flag(_) => Status::FlagError,
            Self::Connection(_) => Status::ConnectionError,
            Self::Authentication => Status::AuthenticationError,
            Self::Internal(_) => Status::InternalError,
        }
    }

    /// The single stderr line for this error: `CODE_NAME: message`, or just
    /// the code name when there is no message.
    pub fn report(&self) -> String {
        let msg = self.to_string();
        if msg.is_empty() {
            self.status().name().to_string()
        } else {
            format!("{}: {}", self.status(), msg)
        }
    }
}
