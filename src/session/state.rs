use super::{convert_text, ConvertError, Notice};
use crate::convert::Conversion;
use log::{debug, info};
use serde::Serialize;

pub const PLACEHOLDER_SUMMARY: &str = "0 ft²";
pub const PLACEHOLDER_DETAIL: &str = "Enter square inches above to convert";
pub const ERROR_SUMMARY: &str = "Error";

/// What a front end shows: the input field, the two result lines, and the
/// notice from the last failed conversion (if any)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayState {
    pub input: String,
    pub summary: String,
    pub detail: String,
    pub notice: Option<Notice>,
}

impl Default for DisplayState {
    fn default() -> Self {
        Self {
            input: String::new(),
            summary: PLACEHOLDER_SUMMARY.to_string(),
            detail: PLACEHOLDER_DETAIL.to_string(),
            notice: None,
        }
    }
}

/// Display state owned by a front end.
///
/// Each submit overwrites the result lines; `clear` restores the placeholders.
#[derive(Debug, Clone, Default)]
pub struct Session {
    state: DisplayState,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DisplayState {
        &self.state
    }

    pub fn set_input(&mut self, text: &str) {
        self.state.input = text.to_string();
    }

    /// Convert the current input and update the display
    pub fn submit(&mut self) -> Result<Conversion, ConvertError> {
        let result = convert_text(&self.state.input);
        match &result {
            Ok(conversion) => {
                debug!("'{}' -> {}", self.state.input, conversion.summary);
                self.state.summary = conversion.summary.clone();
                self.state.detail = conversion.detail.clone();
                self.state.notice = None;
            }
            Err(e) => {
                let notice = e.notice();
                self.state.summary = ERROR_SUMMARY.to_string();
                self.state.detail = notice.message.clone();
                self.state.notice = Some(notice);
            }
        }
        result
    }

    /// Store the text and convert it unless it is blank (convert-as-you-type)
    pub fn update_input(&mut self, text: &str) -> Option<Result<Conversion, ConvertError>> {
        self.set_input(text);
        if text.trim().is_empty() {
            return None;
        }
        Some(self.submit())
    }

    pub fn clear(&mut self) -> &DisplayState {
        info!("clearing display");
        self.state = DisplayState::default();
        &self.state
    }
}
