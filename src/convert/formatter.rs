pub const SUMMARY_UNIT: &str = "ft²";
pub const DETAIL_UNIT: &str = "square feet";

const SUMMARY_PRECISION: usize = 4;
const DETAIL_PRECISION: usize = 6;

/// Whole-number form when the float approximation has no fractional part,
/// otherwise four places. The test is on the float, so values within rounding
/// distance of an integer also print as integers.
pub fn format_summary(approx: f64) -> String {
    if approx.fract() == 0.0 {
        format!("{:.0} {}", approx, SUMMARY_UNIT)
    } else {
        format!("{:.*} {}", SUMMARY_PRECISION, approx, SUMMARY_UNIT)
    }
}

pub fn format_detail(approx: f64) -> String {
    format!("{:.*} {}", DETAIL_PRECISION, approx, DETAIL_UNIT)
}
