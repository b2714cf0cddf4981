//! Crate-wide error type.
//!
//! Every failure in the extrapolation pipeline surfaces to the caller as an
//! [`AppError`]. Nothing in the library retries or recovers locally: a bad fit is
//! a configuration problem the caller has to fix.

/// Failure classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Invalid configuration (unknown curve family, misaligned step counts).
    Config,
    /// File or JSON failure.
    Io,
    /// Malformed numeric input (length mismatch, too few points, non-finite values).
    Input,
    /// Value outside the domain of the requested transform (e.g. `ln(x)` for `x <= 0`).
    Domain,
    /// Input for which the fit or its quality score is undefined.
    Degenerate,
}

impl ErrorKind {
    /// Process exit code used by the `rex` binary.
    pub fn exit_code(self) -> u8 {
        match self {
            ErrorKind::Config | ErrorKind::Io => 2,
            ErrorKind::Input => 3,
            ErrorKind::Domain => 4,
            ErrorKind::Degenerate => 5,
        }
    }
}

#[derive(Clone)]
pub struct AppError {
    kind: ErrorKind,
    message: String,
}

impl AppError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Config, message)
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Io, message)
    }

    pub fn input(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Input, message)
    }

    pub fn domain(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Domain, message)
    }

    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Degenerate, message)
    }

    /// Prefix the message with `label`, keeping the kind unchanged.
    pub fn context(self, label: impl std::fmt::Display) -> Self {
        Self {
            kind: self.kind,
            message: format!("{label}: {}", self.message),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn exit_code(&self) -> u8 {
        self.kind.exit_code()
    }

    pub fn is_config(&self) -> bool {
        self.kind == ErrorKind::Config
    }

    pub fn is_io(&self) -> bool {
        self.kind == ErrorKind::Io
    }

    pub fn is_input(&self) -> bool {
        self.kind == ErrorKind::Input
    }

    pub fn is_domain(&self) -> bool {
        self.kind == ErrorKind::Domain
    }

    pub fn is_degenerate(&self) -> bool {
        self.kind == ErrorKind::Degenerate
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("kind", &self.kind)
            .field("exit_code", &self.exit_code())
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}
