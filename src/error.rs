// File: src/error.rs
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Fatal failures of a build. Each variant names the stage that failed.
/// Row-level data defects never surface here.
#[derive(Debug)]
pub enum BuildError {
    /// The frequency list could not be read.
    AllowList { path: PathBuf, source: io::Error },
    /// The source table could not be opened or read.
    Source(csv::Error),
    /// The artifact could not be written.
    Output { path: PathBuf, source: io::Error },
    Serialize(serde_json::Error),
    /// A previously built artifact could not be read back.
    Load { path: PathBuf, source: Box<dyn std::error::Error + Send + Sync> },
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::AllowList { path, source } => {
                write!(f, "allow-list: cannot read frequency list {}: {}", path.display(), source)
            }
            BuildError::Source(e) => write!(f, "source: cannot read table: {}", e),
            BuildError::Output { path, source } => {
                write!(f, "output: cannot write {}: {}", path.display(), source)
            }
            BuildError::Serialize(e) => write!(f, "output: cannot serialize dictionary: {}", e),
            BuildError::Load { path, source } => {
                write!(f, "load: cannot read dictionary {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for BuildError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BuildError::AllowList { source, .. } => Some(source),
            BuildError::Source(e) => Some(e),
            BuildError::Output { source, .. } => Some(source),
            BuildError::Serialize(e) => Some(e),
            BuildError::Load { source, .. } => Some(source.as_ref()),
        }
    }
}

impl From<csv::Error> for BuildError {
    fn from(e: csv::Error) -> Self {
        BuildError::Source(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_failing_stage() {
        let err = BuildError::AllowList {
            path: PathBuf::from("lib/frequency/en.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "missing"),
        };
        let message = err.to_string();
        assert!(message.starts_with("allow-list:"));
        assert!(message.contains("lib/frequency/en.txt"));

        let err = BuildError::Output {
            path: PathBuf::from("out.json"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().starts_with("output:"));
    }
}
