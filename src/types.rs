//! Shared types for XCM transfers

use crate::error::WasmXcmError;
use crate::scale::{encode_compact_to, ScaleEncode};
use serde::{Deserialize, Serialize};

/// XCM wire version prefixed to every program
pub const XCM_VERSION: u8 = 3;

/// Destination chains the bridge knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Chain {
    /// Polkadot Asset Hub (system)
    AssetHub,
    /// Polkadot Bridge Hub (system)
    BridgeHub,
    Acala,
    Moonbeam,
    Astar,
    Bifrost,
    Hydration,
}

/// All supported destinations, system chains first
pub const SUPPORTED_CHAINS: [Chain; 7] = [
    Chain::AssetHub,
    Chain::BridgeHub,
    Chain::Acala,
    Chain::Moonbeam,
    Chain::Astar,
    Chain::Bifrost,
    Chain::Hydration,
];

impl Chain {
    /// Parachain id on the relay chain
    pub fn para_id(self) -> u32 {
        match self {
            Chain::AssetHub => 1000,
            Chain::BridgeHub => 1002,
            Chain::Acala => 2000,
            Chain::Moonbeam => 2004,
            Chain::Astar => 2006,
            Chain::Bifrost => 2030,
            Chain::Hydration => 2034,
        }
    }

    /// Display name
    pub fn name(self) -> &'static str {
        match self {
            Chain::AssetHub => "AssetHub",
            Chain::BridgeHub => "BridgeHub",
            Chain::Acala => "Acala",
            Chain::Moonbeam => "Moonbeam",
            Chain::Astar => "Astar",
            Chain::Bifrost => "Bifrost",
            Chain::Hydration => "Hydration",
        }
    }

    /// System chains trust the relay chain and accept teleports
    pub fn is_system(self) -> bool {
        matches!(self, Chain::AssetHub | Chain::BridgeHub)
    }

    /// Look up a chain by parachain id
    pub fn from_para_id(para_id: u32) -> Option<Self> {
        SUPPORTED_CHAINS
            .iter()
            .copied()
            .find(|chain| chain.para_id() == para_id)
    }
}

/// Cross-consensus transfer pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TransferKind {
    /// Withdraw on the source, deposit on the destination backed by a reserve
    ReserveTransfer,
    /// Destroy on the source, re-create on the destination
    Teleport,
}

impl TransferKind {
    /// Default kind for a destination: teleport to system chains, reserve transfer otherwise
    pub fn for_destination(para_id: u32) -> Self {
        match Chain::from_para_id(para_id) {
            Some(chain) if chain.is_system() => TransferKind::Teleport,
            _ => TransferKind::ReserveTransfer,
        }
    }
}

/// Global consensus network an account junction may be qualified with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum NetworkId {
    /// Network identified by its genesis hash
    ByGenesis {
        #[serde(with = "hex_array")]
        genesis: [u8; 32],
    },
    Polkadot,
    Kusama,
    Westend,
    Rococo,
    /// EVM network identified by its chain id
    Ethereum {
        #[serde(rename = "chainId")]
        chain_id: u64,
    },
}

impl NetworkId {
    fn tag(&self) -> u8 {
        match self {
            NetworkId::ByGenesis { .. } => 0,
            NetworkId::Polkadot => 2,
            NetworkId::Kusama => 3,
            NetworkId::Westend => 4,
            NetworkId::Rococo => 5,
            NetworkId::Ethereum { .. } => 7,
        }
    }
}

impl ScaleEncode for NetworkId {
    fn encode_to(&self, out: &mut Vec<u8>) -> Result<(), WasmXcmError> {
        out.push(self.tag());
        match self {
            NetworkId::ByGenesis { genesis } => out.extend_from_slice(genesis),
            NetworkId::Ethereum { chain_id } => encode_compact_to(*chain_id as u128, out)?,
            NetworkId::Polkadot | NetworkId::Kusama | NetworkId::Westend | NetworkId::Rococo => {}
        }
        Ok(())
    }
}

impl ScaleEncode for Option<NetworkId> {
    fn encode_to(&self, out: &mut Vec<u8>) -> Result<(), WasmXcmError> {
        match self {
            None => {
                out.push(0x00);
                Ok(())
            }
            Some(network) => {
                out.push(0x01);
                network.encode_to(out)
            }
        }
    }
}

/// Decode a hex string (with or without 0x prefix)
pub fn decode_hex(value: &str) -> Result<Vec<u8>, WasmXcmError> {
    let value = value.strip_prefix("0x").unwrap_or(value);
    Ok(hex::decode(value)?)
}

/// Encode bytes as a 0x-prefixed hex string
pub fn encode_hex(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}

mod hex_array {
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8; 32], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::encode_hex(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<[u8; 32], D::Error> {
        let s = String::deserialize(deserializer)?;
        let bytes = super::decode_hex(&s).map_err(de::Error::custom)?;
        bytes
            .try_into()
            .map_err(|v: Vec<u8>| de::Error::custom(format!("expected 32 bytes, got {}", v.len())))
    }
}
