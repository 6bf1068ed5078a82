//! Crate error type
//!
//! The algorithmic core is total over well-formed input and never fails;
//! errors only arise from file I/O and from rejecting unusable
//! configuration at the analysis boundary.

/// Crate-wide result alias defaulting to [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors produced by this crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Underlying file-system failure from the `io` helpers.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A caller-supplied argument that cannot be processed.
    #[error("invalid argument {arg}: {msg}")]
    InvalidArgument {
        /// Name of the offending argument
        arg: &'static str,
        /// Human-readable description
        msg: String,
    },
}

impl Error {
    pub(crate) fn invalid_argument<S>(arg: &'static str, msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::InvalidArgument {
            arg,
            msg: msg.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_display() {
        let err = Error::invalid_argument("n", "must be at least 1");
        assert_eq!(err.to_string(), "invalid argument n: must be at least 1");
    }

    #[test]
    fn test_io_error_is_transparent() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing file");
        let err = Error::from(io);
        assert_eq!(err.to_string(), "missing file");
    }
}
