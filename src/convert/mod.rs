pub mod formatter;

pub use formatter::{format_detail, format_summary, DETAIL_UNIT, SUMMARY_UNIT};

use crate::quantity::{ArithmeticError, Quantity};
use serde::Serialize;

pub const SQUARE_INCHES_PER_SQUARE_FOOT: u32 = 144;

/// Display strings for one conversion
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conversion {
    /// "1 ft²" when exact, otherwise four decimals: "1.0035 ft²"
    pub summary: String,
    /// Always six decimals: "1.003472 square feet"
    pub detail: String,
}

/// Exact square feet for a square-inch quantity
pub fn to_square_feet(square_inches: &Quantity) -> Quantity {
    square_inches / SQUARE_INCHES_PER_SQUARE_FOOT
}

/// Convert square inches to formatted square feet.
///
/// Callers reject negative quantities before calling this.
pub fn convert(square_inches: &Quantity) -> Result<Conversion, ArithmeticError> {
    let feet = to_square_feet(square_inches);
    let approx = feet
        .to_f64()
        .ok_or_else(|| ArithmeticError::Overflow(format!("{} square feet", feet)))?;

    Ok(Conversion {
        summary: format_summary(approx),
        detail: format_detail(approx),
    })
}
