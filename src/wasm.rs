// WebAssembly bindings for the converter page
use crate::parser;
use crate::session::{self, ConvertError, Session};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct SqftWasm {
    session: Session,
}

impl Default for SqftWasm {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl SqftWasm {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            session: Session::new(),
        }
    }

    /// Convert the given text and return the updated display state as JSON.
    /// Failed conversions are reported inside the state (summary "Error").
    #[wasm_bindgen]
    pub fn convert(&mut self, text: &str) -> Result<String, JsValue> {
        self.session.set_input(text);
        let _ = self.session.submit();
        self.state()
    }

    /// Convert-as-you-type: blank text leaves the display untouched
    #[wasm_bindgen]
    pub fn update_input(&mut self, text: &str) -> Result<String, JsValue> {
        let _ = self.session.update_input(text);
        self.state()
    }

    /// Reset the display to its placeholders and return it as JSON
    #[wasm_bindgen]
    pub fn clear(&mut self) -> Result<String, JsValue> {
        self.session.clear();
        self.state()
    }

    #[wasm_bindgen]
    pub fn state(&self) -> Result<String, JsValue> {
        serde_json::to_string(self.session.state())
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize state: {}", e)))
    }

    /// Parse text without touching the display.
    /// Returns JSON `{ rule, quantity: { numerator, denominator } }`.
    #[wasm_bindgen]
    pub fn parse(&self, text: &str) -> Result<String, JsValue> {
        let parsed = parser::parse_with_rule(text).map_err(|e| {
            let notice = ConvertError::from(e).notice();
            JsValue::from_str(&notice.message)
        })?;

        serde_json::to_string(&parsed)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize quantity: {}", e)))
    }
}

/// Stateless conversion: JSON `{ summary, detail }` or an error message
#[wasm_bindgen]
pub fn convert_square_inches(text: &str) -> Result<String, JsValue> {
    let conversion = session::convert_text(text)
        .map_err(|e| JsValue::from_str(&e.notice().message))?;

    serde_json::to_string(&conversion)
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize result: {}", e)))
}
