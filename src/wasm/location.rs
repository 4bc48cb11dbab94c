//! WASM bindings for location encoding
//!
//! LocationNamespace returns SCALE-encoded MultiLocations

use crate::location::{
    account32_location, account_key20_location, asset_by_id_location, asset_location_for_token,
    native_asset_location, parachain_location,
};
use crate::scale::ScaleEncode;
use crate::wasm::codec::bigint_to_u128;
use wasm_bindgen::prelude::*;

/// Namespace for location operations
#[wasm_bindgen]
pub struct LocationNamespace;

#[wasm_bindgen]
impl LocationNamespace {
    /// `{ parents, interior: X1(Parachain(paraId)) }`
    #[wasm_bindgen(js_name = parachain)]
    pub fn parachain(parent_hops: u8, para_id: u32) -> Result<Vec<u8>, JsValue> {
        Ok(parachain_location(parent_hops, para_id).encode()?)
    }

    /// Local Substrate account (32 bytes)
    #[wasm_bindgen(js_name = accountId32)]
    pub fn account_id32(id: &[u8]) -> Result<Vec<u8>, JsValue> {
        Ok(account32_location(id, 0, None)?.encode()?)
    }

    /// Local EVM account (20 bytes)
    #[wasm_bindgen(js_name = accountKey20)]
    pub fn account_key20(key: &[u8]) -> Result<Vec<u8>, JsValue> {
        Ok(account_key20_location(key, 0, None)?.encode()?)
    }

    /// Native asset of the parent consensus system
    #[wasm_bindgen(js_name = nativeAsset)]
    pub fn native_asset() -> Result<Vec<u8>, JsValue> {
        Ok(native_asset_location().encode()?)
    }

    /// Asset referenced by GeneralIndex
    #[wasm_bindgen(js_name = assetById)]
    pub fn asset_by_id(asset_id: js_sys::BigInt) -> Result<Vec<u8>, JsValue> {
        let asset_id = bigint_to_u128(&asset_id)?;
        Ok(asset_by_id_location(asset_id)?.encode()?)
    }

    /// Asset identified by its 20-byte contract address
    #[wasm_bindgen(js_name = tokenAsset)]
    pub fn token_asset(token_address: &[u8]) -> Result<Vec<u8>, JsValue> {
        Ok(asset_location_for_token(token_address)?.encode()?)
    }
}
