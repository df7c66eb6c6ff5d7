use std::path::PathBuf;

use thiserror::Error;

/// Result alias for converter operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// A single output file that could not be written.
#[derive(Debug, Error)]
#[error("{}: {source}", .path.display())]
pub struct WriteFailure {
    /// Target path of the failed write.
    pub path: PathBuf,

    /// Underlying filesystem error.
    #[source]
    pub source: std::io::Error,
}

/// Failures surfaced by [`convert`](crate::convert::convert).
///
/// The converter never messages the user itself; the caller turns these into
/// whatever notification its surface has.
#[derive(Debug, Error)]
pub enum Error {
    /// No `env.json` at the attempted path. Nothing was written.
    #[error("source file not found: {}", .path.display())]
    SourceNotFound { path: PathBuf },

    /// The source file is not a valid variable document: invalid JSON, a
    /// section that is not an array of objects, or an entry without `Name`.
    /// Nothing was written.
    #[error("failed to parse {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },

    /// One or more environment files could not be written. Every failed
    /// target is listed; files written before a failure stay on disk.
    #[error("{}", list_failures(.failures))]
    Write { failures: Vec<WriteFailure> },
}

fn list_failures(failures: &[WriteFailure]) -> String {
    let mut out = String::from("failed to write ");
    for (idx, failure) in failures.iter().enumerate() {
        if idx > 0 {
            out.push_str(", ");
        }
        out.push_str(&failure.to_string());
    }
    out
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::path::PathBuf;

    use super::{Error, WriteFailure};

    #[test]
    fn source_not_found_reports_the_attempted_path() {
        let err = Error::SourceNotFound {
            path: PathBuf::from("/work/env.json"),
        };
        assert_eq!(err.to_string(), "source file not found: /work/env.json");
    }

    #[test]
    fn parse_error_carries_the_underlying_message() {
        let err = Error::Parse {
            path: PathBuf::from("/work/env.json"),
            message: "missing field `Name`".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "failed to parse /work/env.json: missing field `Name`"
        );
    }

    #[test]
    fn write_error_lists_every_failure() {
        let err = Error::Write {
            failures: vec![
                WriteFailure {
                    path: PathBuf::from("/work/.env.dev"),
                    source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
                },
                WriteFailure {
                    path: PathBuf::from("/work/.env.prod"),
                    source: io::Error::other("disk full"),
                },
            ],
        };

        let text = err.to_string();
        assert!(text.contains("/work/.env.dev: denied"), "{text}");
        assert!(text.contains("/work/.env.prod: disk full"), "{text}");
    }
}
