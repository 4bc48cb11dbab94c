//! Transfer building from intents
//!
//! Turns a high-level transfer intent into the two artifacts the dispatch
//! interface consumes: the encoded destination and the encoded XCM program.
//! Business rules (non-zero amount, allowed teleport targets) belong to the
//! caller and are not checked here.

pub mod types;

use crate::error::WasmXcmError;
use crate::location::{
    account32_location, account_key20_location, asset_by_id_location, asset_hub_asset_location,
    asset_location_for_token, native_asset_location, parachain_location, MultiLocation,
    ACCOUNT_ID32_LEN, ACCOUNT_KEY20_LEN,
};
use crate::scale::ScaleEncode;
use crate::types::{decode_hex, NetworkId, TransferKind};
use crate::xcm::Program;
use tracing::debug;
use types::{AssetSpec, TransferContext, TransferIntent};

/// Output of [`build_transfer`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltTransfer {
    /// Kind the program was built for
    pub kind: TransferKind,
    /// Where the message is sent
    pub destination: MultiLocation,
    /// SCALE encoding of `destination`
    pub destination_bytes: Vec<u8>,
    /// The program before serialization
    pub program: Program,
    /// SCALE encoding of `program`
    pub message: Vec<u8>,
}

/// Build a transfer from an intent
///
/// # Arguments
/// * `intent` - What to transfer, where and to whom
/// * `context` - Addressing options
pub fn build_transfer(
    intent: &TransferIntent,
    context: &TransferContext,
) -> Result<BuiltTransfer, WasmXcmError> {
    let recipient = decode_hex(&intent.recipient)?;
    let beneficiary = beneficiary_location(&recipient, context.beneficiary_network)?;
    let asset_location = asset_location(&intent.asset)?;

    let kind = intent
        .kind
        .unwrap_or_else(|| TransferKind::for_destination(intent.destination_para_id));

    let destination = parachain_location(context.destination_parents, intent.destination_para_id);
    let destination_bytes = destination.encode()?;

    let program = Program::for_kind(
        kind,
        &asset_location,
        intent.amount,
        intent.fee_amount,
        &beneficiary,
    );
    let message = program.encode()?;

    debug!(
        para_id = intent.destination_para_id,
        kind = ?kind,
        message_len = message.len(),
        "built xcm transfer"
    );

    Ok(BuiltTransfer {
        kind,
        destination,
        destination_bytes,
        program,
        message,
    })
}

/// Beneficiary location for a raw recipient address
///
/// 20-byte addresses become `AccountKey20`, 32-byte ones `AccountId32`.
pub fn beneficiary_location(
    recipient: &[u8],
    network: Option<NetworkId>,
) -> Result<MultiLocation, WasmXcmError> {
    match recipient.len() {
        ACCOUNT_KEY20_LEN => account_key20_location(recipient, 0, network),
        ACCOUNT_ID32_LEN => account32_location(recipient, 0, network),
        len => Err(WasmXcmError::Validation(format!(
            "Recipient must be {} or {} bytes, got {}",
            ACCOUNT_KEY20_LEN, ACCOUNT_ID32_LEN, len
        ))),
    }
}

/// Location of the asset described by `spec`
pub fn asset_location(spec: &AssetSpec) -> Result<MultiLocation, WasmXcmError> {
    match spec {
        AssetSpec::Native => Ok(native_asset_location()),
        AssetSpec::AssetId { id } => asset_by_id_location(*id),
        AssetSpec::AssetHub { id } => asset_hub_asset_location(*id),
        AssetSpec::Token { address } => asset_location_for_token(&decode_hex(address)?),
    }
}
