use std::fmt;

/// Error type for icon conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    SourceNotFound { path: String },
    DecodeFailed { path: String, reason: String },
    EncodeFailed { size: u32, reason: String },
    WriteFailed { path: String, reason: String },
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::SourceNotFound { path } => {
                write!(f, "source file '{}' not found", path)
            }
            ConvertError::DecodeFailed { path, reason } => {
                write!(f, "failed to decode '{}': {}", path, reason)
            }
            ConvertError::EncodeFailed { size, reason } => {
                write!(f, "failed to encode icon at size {}: {}", size, reason)
            }
            ConvertError::WriteFailed { path, reason } => {
                write!(f, "failed to write '{}': {}", path, reason)
            }
        }
    }
}

impl std::error::Error for ConvertError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_not_found_names_the_path() {
        let err = ConvertError::SourceNotFound {
            path: "icon-512.png".to_string(),
        };

        assert!(err.to_string().contains("icon-512.png"));
    }

    #[test]
    fn encode_failed_names_the_size() {
        let err = ConvertError::EncodeFailed {
            size: 48,
            reason: "bad dimensions".to_string(),
        };

        let rendered = err.to_string();
        assert!(rendered.contains("48"));
        assert!(rendered.contains("bad dimensions"));
    }
}
