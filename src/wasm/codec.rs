//! WASM bindings for the scalar codec
//!
//! ScaleNamespace exposes the primitive encoders; u128 values cross the
//! boundary as BigInt.

use crate::error::WasmXcmError;
use crate::scale::{concat, encode_bytes, encode_compact, encode_fixed, encode_str};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Namespace for scalar encoding operations
#[wasm_bindgen]
pub struct ScaleNamespace;

#[wasm_bindgen]
impl ScaleNamespace {
    /// Encode a value as `width` little-endian bytes (1, 2, 4, 8 or 16)
    #[wasm_bindgen(js_name = encodeFixed)]
    pub fn encode_fixed_wasm(value: js_sys::BigInt, width: usize) -> Result<Vec<u8>, JsValue> {
        let value = bigint_to_u128(&value)?;
        Ok(encode_fixed(value, width)?)
    }

    /// Encode a value as a SCALE compact integer
    #[wasm_bindgen(js_name = encodeCompact)]
    pub fn encode_compact_wasm(value: js_sys::BigInt) -> Result<Vec<u8>, JsValue> {
        let value = bigint_to_u128(&value)?;
        Ok(encode_compact(value)?)
    }

    /// Length-prefix a byte blob
    #[wasm_bindgen(js_name = encodeBytes)]
    pub fn encode_bytes_wasm(bytes: &[u8]) -> Vec<u8> {
        encode_bytes(bytes)
    }

    /// Length-prefix UTF-8 text
    #[wasm_bindgen(js_name = encodeString)]
    pub fn encode_string_wasm(text: &str) -> Vec<u8> {
        encode_str(text)
    }

    /// Concatenate an array of Uint8Arrays
    #[wasm_bindgen(js_name = concat)]
    pub fn concat_wasm(parts: js_sys::Array) -> Result<Vec<u8>, JsValue> {
        let parts = parts
            .iter()
            .map(|part| {
                part.dyn_into::<js_sys::Uint8Array>()
                    .map(|array| array.to_vec())
                    .map_err(|_| {
                        WasmXcmError::InvalidInput("concat expects Uint8Array parts".to_string())
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(concat(parts))
    }
}

/// Convert a JS BigInt to u128 via its decimal representation
pub(crate) fn bigint_to_u128(value: &js_sys::BigInt) -> Result<u128, WasmXcmError> {
    let digits: String = value
        .to_string(10)
        .map_err(|_| WasmXcmError::InvalidInput("Invalid BigInt value".to_string()))?
        .into();
    digits.parse().map_err(|_| {
        WasmXcmError::Range(format!(
            "Value {} must be a non-negative integer that fits in u128",
            digits
        ))
    })
}
