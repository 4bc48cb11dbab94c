//! Intent types for transfer building
//!
//! Same shape as the other wallet packages: buildTransfer(intent, context)
//! - intent: what to move, where, to whom
//! - context: how to address it (parent hops, beneficiary network)

use crate::types::{NetworkId, TransferKind};
use serde::{de, Deserialize, Deserializer, Serialize};

/// Deserialize u128 from a number, a BigInt or a decimal string
fn deserialize_u128<'de, D>(deserializer: D) -> Result<u128, D::Error>
where
    D: Deserializer<'de>,
{
    struct U128Visitor;

    impl<'de> de::Visitor<'de> for U128Visitor {
        type Value = u128;

        fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
            formatter.write_str("a u128 as number or string")
        }

        fn visit_u64<E>(self, value: u64) -> Result<u128, E>
        where
            E: de::Error,
        {
            Ok(value as u128)
        }

        fn visit_u128<E>(self, value: u128) -> Result<u128, E>
        where
            E: de::Error,
        {
            Ok(value)
        }

        fn visit_i64<E>(self, value: i64) -> Result<u128, E>
        where
            E: de::Error,
        {
            u128::try_from(value).map_err(|_| E::custom("negative values not allowed"))
        }

        fn visit_str<E>(self, value: &str) -> Result<u128, E>
        where
            E: de::Error,
        {
            value.parse().map_err(E::custom)
        }
    }

    deserializer.deserialize_any(U128Visitor)
}

/// Which asset to move
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum AssetSpec {
    /// Native token of the parent consensus system
    #[default]
    Native,
    /// Asset referenced by a bare GeneralIndex
    AssetId {
        #[serde(deserialize_with = "deserialize_u128")]
        id: u128,
    },
    /// Asset in Asset Hub's assets pallet
    AssetHub {
        #[serde(deserialize_with = "deserialize_u128")]
        id: u128,
    },
    /// ERC-20 style token by contract address (hex)
    Token { address: String },
}

/// Transfer intent - what to do
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferIntent {
    /// Destination parachain id
    pub destination_para_id: u32,
    /// Recipient address, hex encoded: 20 bytes (EVM) or 32 bytes (Substrate)
    pub recipient: String,
    /// Asset to transfer (default: native)
    #[serde(default)]
    pub asset: AssetSpec,
    /// Amount in the asset's smallest unit
    #[serde(deserialize_with = "deserialize_u128")]
    pub amount: u128,
    /// Portion of the asset used to buy execution at the destination
    #[serde(deserialize_with = "deserialize_u128")]
    pub fee_amount: u128,
    /// Transfer kind; picked from the destination when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<TransferKind>,
}

/// Build context - how to address the transfer
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferContext {
    /// Hops from the source chain up to the common ancestor (default: 1, the relay chain)
    #[serde(default = "default_destination_parents")]
    pub destination_parents: u8,
    /// Network qualifier for the beneficiary account junction
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beneficiary_network: Option<NetworkId>,
}

fn default_destination_parents() -> u8 {
    1
}

impl Default for TransferContext {
    fn default() -> Self {
        Self {
            destination_parents: default_destination_parents(),
            beneficiary_network: None,
        }
    }
}
