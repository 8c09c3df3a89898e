//! Error types for VDXF Core.

use thiserror::Error;

/// Reasons a raw name is not a valid VDXF name.
///
/// Every variant means the same thing to callers: the name is rejected and
/// no identifier may be derived from it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    #[error("invalid character {0:?} in name")]
    InvalidCharacter(char),

    #[error("malformed name: {0}")]
    MalformedStructure(String),

    #[error("invalid sub-name: {0}")]
    InvalidComponent(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            NameError::InvalidCharacter('/').to_string(),
            "invalid character '/' in name"
        );
        assert_eq!(
            NameError::MalformedStructure("more than one '@'".into()).to_string(),
            "malformed name: more than one '@'"
        );
    }
}
