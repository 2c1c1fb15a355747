//! Module and command name validation
//!
//! Names are matched by the host's dispatcher, so they must be usable as a
//! single command token.
//!
//! ## Validation
//!
//! Names must:
//! - Be 1-256 bytes
//! - Contain no whitespace or control characters
//!
//! ## Examples
//!
//! Valid names: "module1", "module1.cmd1", "json.set"
//!
//! Invalid names: "" (empty), "has space", "tab\there"

use thiserror::Error;

/// Maximum length of a module or command name
pub const MAX_NAME_LENGTH: usize = 256;

/// Error when validating a module or command name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    /// Name is empty
    #[error("name cannot be empty")]
    Empty,
    /// Name exceeds maximum length
    #[error("name too long: {length} bytes (max {max})")]
    TooLong {
        /// Actual length of the name
        length: usize,
        /// Maximum allowed length
        max: usize,
    },
    /// Name contains whitespace or a control character
    #[error("invalid character {char:?} at position {position}")]
    InvalidChar {
        /// The invalid character
        char: char,
        /// Position of the invalid character
        position: usize,
    },
}

/// Check that `name` can be registered as a module or command name.
pub fn validate_name(name: &str) -> Result<(), NameError> {
    if name.is_empty() {
        return Err(NameError::Empty);
    }
    if name.len() > MAX_NAME_LENGTH {
        return Err(NameError::TooLong {
            length: name.len(),
            max: MAX_NAME_LENGTH,
        });
    }
    if let Some((position, char)) = name
        .char_indices()
        .find(|(_, c)| c.is_whitespace() || c.is_control())
    {
        return Err(NameError::InvalidChar { char, position });
    }
    Ok(())
}
