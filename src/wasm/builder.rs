//! WASM bindings for transfer building
//!
//! XcmBuilderNamespace provides the entry point for building XCM transfers.
//! Follows the wallet-platform pattern: buildTransfer(intent, context)

use crate::builder::{
    build_transfer,
    types::{TransferContext, TransferIntent},
    BuiltTransfer,
};
use crate::types::{encode_hex, TransferKind, SUPPORTED_CHAINS};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Namespace for building operations
#[wasm_bindgen]
pub struct XcmBuilderNamespace;

/// Built transfer as handed to JS
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TransferOutput {
    kind: TransferKind,
    /// Encoded destination MultiLocation (hex)
    destination: String,
    /// Encoded XCM program (hex)
    message: String,
}

impl From<&BuiltTransfer> for TransferOutput {
    fn from(built: &BuiltTransfer) -> Self {
        TransferOutput {
            kind: built.kind,
            destination: encode_hex(&built.destination_bytes),
            message: encode_hex(&built.message),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ChainInfo {
    id: u32,
    name: &'static str,
    #[serde(rename = "type")]
    chain_type: &'static str,
}

#[wasm_bindgen]
impl XcmBuilderNamespace {
    /// Build a transfer from an intent and optional context
    ///
    /// # Example Intent
    /// ```json
    /// {
    ///   "destinationParaId": 2034,
    ///   "recipient": "0x742d35Cc6634C0532925a3b844Bc9e7595f0bEb0",
    ///   "asset": { "type": "native" },
    ///   "amount": "1000000000000000000",
    ///   "feeAmount": "100000000000000000"
    /// }
    /// ```
    ///
    /// # Example Context
    /// ```json
    /// { "destinationParents": 1, "beneficiaryNetwork": { "type": "polkadot" } }
    /// ```
    ///
    /// # Returns
    /// `{ kind, destination, message }` with hex-encoded bytes
    #[wasm_bindgen(js_name = buildTransfer)]
    pub fn build_transfer_wasm(intent: JsValue, context: JsValue) -> Result<JsValue, JsValue> {
        let intent = parse_intent(intent)?;
        build(&intent, context)
    }

    /// Build a reserve-transfer program regardless of destination
    #[wasm_bindgen(js_name = buildReserveTransfer)]
    pub fn build_reserve_transfer(intent: JsValue, context: JsValue) -> Result<JsValue, JsValue> {
        let mut intent = parse_intent(intent)?;
        intent.kind = Some(TransferKind::ReserveTransfer);
        build(&intent, context)
    }

    /// Build a teleport program regardless of destination
    #[wasm_bindgen(js_name = buildTeleport)]
    pub fn build_teleport(intent: JsValue, context: JsValue) -> Result<JsValue, JsValue> {
        let mut intent = parse_intent(intent)?;
        intent.kind = Some(TransferKind::Teleport);
        build(&intent, context)
    }

    /// List supported destinations as `{ id, name, type }`
    #[wasm_bindgen(js_name = getSupportedChains)]
    pub fn get_supported_chains() -> Result<JsValue, JsValue> {
        let chains: Vec<ChainInfo> = SUPPORTED_CHAINS
            .iter()
            .map(|chain| ChainInfo {
                id: chain.para_id(),
                name: chain.name(),
                chain_type: if chain.is_system() {
                    "system"
                } else {
                    "parachain"
                },
            })
            .collect();
        serde_wasm_bindgen::to_value(&chains)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }
}

fn parse_intent(intent: JsValue) -> Result<TransferIntent, JsValue> {
    serde_wasm_bindgen::from_value(intent)
        .map_err(|e| JsValue::from_str(&format!("Invalid intent: {}", e)))
}

fn parse_context(context: JsValue) -> Result<TransferContext, JsValue> {
    if context.is_undefined() || context.is_null() {
        return Ok(TransferContext::default());
    }
    serde_wasm_bindgen::from_value(context)
        .map_err(|e| JsValue::from_str(&format!("Invalid context: {}", e)))
}

fn build(intent: &TransferIntent, context: JsValue) -> Result<JsValue, JsValue> {
    let context = parse_context(context)?;
    let built = build_transfer(intent, &context)?;
    serde_wasm_bindgen::to_value(&TransferOutput::from(&built))
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}
