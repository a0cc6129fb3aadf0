//! Customer name type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`CustomerName`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum CustomerNameError {
    /// The input string is empty (after trimming).
    #[error("customer name cannot be empty")]
    Empty,
    /// The input string is too long.
    #[error("customer name must be at most {max} characters")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
}

/// The name an order is placed under.
///
/// Checkout accepts any non-empty name; an anonymous checkout falls back to
/// [`CustomerName::guest`].
///
/// ## Constraints
///
/// - Surrounding whitespace is trimmed
/// - Must be non-empty after trimming
/// - At most 100 characters
///
/// ## Examples
///
/// ```
/// use tinshop_core::CustomerName;
///
/// assert!(CustomerName::parse("Alice").is_ok());
/// assert!(CustomerName::parse("   ").is_err());
/// assert_eq!(CustomerName::guest().as_str(), "guest");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct CustomerName(String);

impl CustomerName {
    /// Maximum length of a customer name.
    pub const MAX_LENGTH: usize = 100;

    /// Parse a `CustomerName` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty after trimming, or longer than
    /// 100 characters.
    pub fn parse(s: &str) -> Result<Self, CustomerNameError> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(CustomerNameError::Empty);
        }

        if trimmed.chars().count() > Self::MAX_LENGTH {
            return Err(CustomerNameError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// The fallback name used when no customer name is supplied.
    #[must_use]
    pub fn guest() -> Self {
        Self(String::from("guest"))
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CustomerName {
    fn default() -> Self {
        Self::guest()
    }
}

impl fmt::Display for CustomerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for CustomerName {
    type Err = CustomerNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for CustomerName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
