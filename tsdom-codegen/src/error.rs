//! Emission errors.

use thiserror::Error;

/// Result type for emitter operations.
pub type Result<T> = std::result::Result<T, EmitError>;

/// Fatal conditions that abort a render.
///
/// Everything not listed here degrades to omitted output instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EmitError {
    #[error("enum member '{enum_name}.{member}' has a non-constant initializer")]
    NonConstantEnumInitializer { enum_name: String, member: String },

    #[error("enum '{enum_name}' contains {member}, but enums may only contain fields")]
    InvalidEnumMember { enum_name: String, member: String },

    #[error("{node} has no TypeScript rendering")]
    Unsupported { node: &'static str },

    #[error("failed to write rendered output")]
    Write(#[from] std::fmt::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = EmitError::NonConstantEnumInitializer {
            enum_name: "Color".into(),
            member: "Red".into(),
        };
        assert_eq!(
            err.to_string(),
            "enum member 'Color.Red' has a non-constant initializer"
        );

        let err = EmitError::Unsupported { node: "cast" };
        assert_eq!(err.to_string(), "cast has no TypeScript rendering");
    }
}
