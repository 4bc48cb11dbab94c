//! Error types for wasm-xcm

use thiserror::Error;
use wasm_bindgen::prelude::*;

/// Main error type for wasm-xcm operations
///
/// Every failure is detected synchronously, before any output is produced.
/// None of them are retryable with unchanged input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WasmXcmError {
    /// A numeric value does not fit its target encoding
    #[error("Range error: {0}")]
    Range(String),
    /// Structurally invalid value (address length, junction count, unknown variant)
    #[error("Validation error: {0}")]
    Validation(String),
    /// Malformed caller input (hex, numeric strings)
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl WasmXcmError {
    pub(crate) fn range(msg: impl Into<String>) -> Self {
        WasmXcmError::Range(msg.into())
    }

    pub(crate) fn validation(msg: impl Into<String>) -> Self {
        WasmXcmError::Validation(msg.into())
    }
}

impl From<hex::FromHexError> for WasmXcmError {
    fn from(err: hex::FromHexError) -> Self {
        WasmXcmError::InvalidInput(format!("Invalid hex: {}", err))
    }
}

// REQUIRED: Converts to JS Error with stack trace
impl From<WasmXcmError> for JsValue {
    fn from(err: WasmXcmError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}
