//! Color parsing errors.

/// Error returned when a hex color or a role name cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// The value does not start with `#`
    MissingHash { value: String },
    /// The hex part is neither 3 nor 6 digits long
    InvalidLength { value: String, len: usize },
    /// The hex part contains a non-hex character
    InvalidDigit { value: String },
    /// No color role goes by this name
    UnknownRole { name: String },
}

impl std::fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColorParseError::MissingHash { value } => {
                write!(f, "color '{}' must start with '#'", value)
            }
            ColorParseError::InvalidLength { value, len } => {
                write!(
                    f,
                    "color '{}' has {} hex digits (must be 3 or 6)",
                    value, len
                )
            }
            ColorParseError::InvalidDigit { value } => {
                write!(f, "color '{}' contains a non-hex digit", value)
            }
            ColorParseError::UnknownRole { name } => {
                write!(f, "unknown color role '{}'", name)
            }
        }
    }
}

impl std::error::Error for ColorParseError {}
