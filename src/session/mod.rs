// Boundary between the pure parser/converter and whatever renders results.
// Front ends call `convert_text` (or drive a `Session`) and only ever see
// display strings or a `Notice`.

pub mod state;

pub use state::{DisplayState, Session, ERROR_SUMMARY, PLACEHOLDER_DETAIL, PLACEHOLDER_SUMMARY};

use crate::convert::{self, Conversion};
use crate::parser::{self, ParseError};
use crate::quantity::ArithmeticError;
use log::warn;
use serde::Serialize;
use thiserror::Error;

/// Example inputs shown when the text is not a recognised quantity
pub const EXAMPLE_INPUTS: [&str; 4] = ["144", "144.5", "144 1/2", "289/2"];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    #[error("Please enter square inches to convert.")]
    EmptyInput,
    #[error("Please enter a valid number or fraction.")]
    InvalidFormat,
    /// Unreachable today: no grammar rule accepts a sign.
    #[error("Square inches cannot be negative.")]
    Negative,
    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),
}

impl From<ParseError> for ConvertError {
    fn from(error: ParseError) -> Self {
        match error {
            ParseError::EmptyInput => ConvertError::EmptyInput,
            ParseError::NoMatch(_) => ConvertError::InvalidFormat,
            ParseError::Arithmetic(e) => ConvertError::Arithmetic(e),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

/// User-facing message for a failed conversion
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub severity: Severity,
    pub title: String,
    pub message: String,
}

impl ConvertError {
    pub fn notice(&self) -> Notice {
        match self {
            ConvertError::EmptyInput => Notice {
                severity: Severity::Warning,
                title: "Input Required".to_string(),
                message: self.to_string(),
            },
            ConvertError::InvalidFormat => {
                let examples: Vec<String> =
                    EXAMPLE_INPUTS.iter().map(|e| format!("• {}", e)).collect();
                Notice {
                    severity: Severity::Error,
                    title: "Invalid Input".to_string(),
                    message: format!("{}\n\nExamples:\n{}", self, examples.join("\n")),
                }
            }
            ConvertError::Negative | ConvertError::Arithmetic(_) => Notice {
                severity: Severity::Error,
                title: "Invalid Input".to_string(),
                message: self.to_string(),
            },
        }
    }
}

/// Parse raw text as square inches and convert it to square feet
pub fn convert_text(raw: &str) -> Result<Conversion, ConvertError> {
    let quantity = parser::parse(raw)?;

    if quantity.is_negative() {
        warn!("rejecting negative quantity {}", quantity);
        return Err(ConvertError::Negative);
    }

    Ok(convert::convert(&quantity)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success() {
        let result = convert_text("144").unwrap();
        assert_eq!(result.summary, "1 ft²");
        assert_eq!(result.detail, "1.000000 square feet");

        let result = convert_text(" 144 1/2 ").unwrap();
        assert_eq!(result.summary, "1.0035 ft²");
    }

    #[test]
    fn test_error_taxonomy() {
        assert_eq!(convert_text(""), Err(ConvertError::EmptyInput));
        assert_eq!(convert_text("  "), Err(ConvertError::EmptyInput));
        assert_eq!(convert_text("abc"), Err(ConvertError::InvalidFormat));
        assert!(matches!(
            convert_text("1/0"),
            Err(ConvertError::Arithmetic(ArithmeticError::DivisionByZero(_)))
        ));
    }

    #[test]
    fn test_negative_reports_invalid_format() {
        // the Negative branch cannot be reached through the grammar
        assert_eq!(convert_text("-5"), Err(ConvertError::InvalidFormat));
        assert_eq!(convert_text("-144 1/2"), Err(ConvertError::InvalidFormat));
    }

    #[test]
    fn test_notices() {
        let notice = ConvertError::EmptyInput.notice();
        assert_eq!(notice.severity, Severity::Warning);
        assert_eq!(notice.title, "Input Required");
        assert_eq!(notice.message, "Please enter square inches to convert.");

        let notice = ConvertError::InvalidFormat.notice();
        assert_eq!(notice.severity, Severity::Error);
        assert_eq!(notice.title, "Invalid Input");
        assert_eq!(
            notice.message,
            "Please enter a valid number or fraction.\n\nExamples:\n• 144\n• 144.5\n• 144 1/2\n• 289/2"
        );

        let notice = ConvertError::Negative.notice();
        assert_eq!(notice.message, "Square inches cannot be negative.");

        let notice = convert_text("3/0").unwrap_err().notice();
        assert_eq!(notice.title, "Invalid Input");
        assert_eq!(notice.message, "Cannot divide by zero: 3/0");
    }
}
