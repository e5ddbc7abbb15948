pub mod error;
pub mod grammar;


pub use error::ParseError;
pub use grammar::{GrammarRule, MAX_DECIMAL_DENOMINATOR};

use crate::quantity::Quantity;
use lazy_static::lazy_static;
use log::{debug, warn};
use regex::Regex;
use serde::Serialize;

lazy_static! {
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();
}

/// A parsed quantity together with the rule that produced it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedQuantity {
    pub rule: GrammarRule,
    pub quantity: Quantity,
}

/// Trim the input and collapse internal whitespace runs to single spaces.
/// Returns `None` for blank input.
pub fn normalize_input(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(WHITESPACE_RUN.replace_all(trimmed, " ").into_owned())
}

/// Parse a square-inch quantity ("144", "144.5", "144 1/2", "289/2")
pub fn parse(text: &str) -> Result<Quantity, ParseError> {
    parse_with_rule(text).map(|parsed| parsed.quantity)
}

pub fn parse_with_rule(text: &str) -> Result<ParsedQuantity, ParseError> {
    let normalized = normalize_input(text).ok_or(ParseError::EmptyInput)?;

    for rule in GrammarRule::ALL {
        if let Some(result) = rule.apply(&normalized) {
            let quantity = result.inspect_err(|e| {
                warn!("'{}' matched {} but could not be evaluated: {}", normalized, rule, e);
            })?;
            debug!("'{}' parsed by {} rule as {}", normalized, rule, quantity);
            return Ok(ParsedQuantity { rule, quantity });
        }
    }

    warn!("'{}' did not match any grammar rule", normalized);
    Err(ParseError::NoMatch(normalized))
}
