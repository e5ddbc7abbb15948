pub mod config;
pub mod convert;
pub mod parser;
pub mod quantity;
pub mod session;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use convert::{convert, Conversion};
pub use parser::{parse, ParseError};
pub use quantity::{ArithmeticError, Quantity};
pub use session::{convert_text, ConvertError, DisplayState, Notice, Session};
