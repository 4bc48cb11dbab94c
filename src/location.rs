//! MultiLocation construction and encoding
//!
//! A location is a hop count towards a common ancestor (`parents`) followed by a
//! descent path of junctions (`interior`). Only the shapes this crate emits are
//! modelled; the junction tags follow XCM v3.

use crate::error::WasmXcmError;
use crate::scale::{encode_compact_to, ScaleEncode};
use crate::types::NetworkId;

/// Maximum number of junctions in an interior path (X8)
pub const MAX_JUNCTIONS: usize = 8;

/// Length of a Substrate account id
pub const ACCOUNT_ID32_LEN: usize = 32;

/// Length of an EVM address
pub const ACCOUNT_KEY20_LEN: usize = 20;

/// Pallet index of the assets pallet on Asset Hub
pub const ASSETS_PALLET_INSTANCE: u8 = 50;

/// One step in a location's descent path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Junction {
    /// Parachain by id, encoded as a 4-byte little-endian u32
    Parachain(u32),
    /// Substrate account
    AccountId32 {
        network: Option<NetworkId>,
        id: [u8; 32],
    },
    /// EVM account or contract address
    AccountKey20 {
        network: Option<NetworkId>,
        key: [u8; 20],
    },
    /// Pallet by its index in the runtime
    PalletInstance(u8),
    /// Numeric index, compact-encoded
    GeneralIndex(u128),
    /// Opaque key of up to 32 bytes, zero-padded on the wire
    GeneralKey { length: u8, data: [u8; 32] },
}

impl Junction {
    /// Build an `AccountId32` junction, checking the id is exactly 32 bytes
    pub fn account_id32(id: &[u8], network: Option<NetworkId>) -> Result<Self, WasmXcmError> {
        let id: [u8; ACCOUNT_ID32_LEN] = id.try_into().map_err(|_| {
            WasmXcmError::validation(format!(
                "AccountId32 must be {} bytes, got {}",
                ACCOUNT_ID32_LEN,
                id.len()
            ))
        })?;
        Ok(Junction::AccountId32 { network, id })
    }

    /// Build an `AccountKey20` junction, checking the key is exactly 20 bytes
    pub fn account_key20(key: &[u8], network: Option<NetworkId>) -> Result<Self, WasmXcmError> {
        let key: [u8; ACCOUNT_KEY20_LEN] = key.try_into().map_err(|_| {
            WasmXcmError::validation(format!(
                "AccountKey20 must be {} bytes, got {}",
                ACCOUNT_KEY20_LEN,
                key.len()
            ))
        })?;
        Ok(Junction::AccountKey20 { network, key })
    }

    /// Build a `GeneralKey` junction from up to 32 bytes
    pub fn general_key(key: &[u8]) -> Result<Self, WasmXcmError> {
        if key.len() > 32 {
            return Err(WasmXcmError::validation(format!(
                "GeneralKey must be at most 32 bytes, got {}",
                key.len()
            )));
        }
        let mut data = [0u8; 32];
        data[..key.len()].copy_from_slice(key);
        Ok(Junction::GeneralKey {
            length: key.len() as u8,
            data,
        })
    }

    /// Wire tag of this variant
    pub fn tag(&self) -> u8 {
        match self {
            Junction::Parachain(_) => 0,
            Junction::AccountId32 { .. } => 1,
            Junction::AccountKey20 { .. } => 3,
            Junction::PalletInstance(_) => 4,
            Junction::GeneralIndex(_) => 5,
            Junction::GeneralKey { .. } => 6,
        }
    }
}

impl ScaleEncode for Junction {
    fn encode_to(&self, out: &mut Vec<u8>) -> Result<(), WasmXcmError> {
        out.push(self.tag());
        match self {
            Junction::Parachain(para_id) => out.extend_from_slice(&para_id.to_le_bytes()),
            Junction::AccountId32 { network, id } => {
                network.encode_to(out)?;
                out.extend_from_slice(id);
            }
            Junction::AccountKey20 { network, key } => {
                network.encode_to(out)?;
                out.extend_from_slice(key);
            }
            Junction::PalletInstance(index) => out.push(*index),
            Junction::GeneralIndex(index) => encode_compact_to(*index, out)?,
            Junction::GeneralKey { length, data } => {
                if *length as usize > data.len() {
                    return Err(WasmXcmError::validation(format!(
                        "GeneralKey length {} exceeds 32",
                        length
                    )));
                }
                out.push(*length);
                out.extend_from_slice(data);
            }
        }
        Ok(())
    }
}

/// Interior path of 0..=8 junctions (`Here`, `X1` .. `X8`)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Junctions(Vec<Junction>);

impl Junctions {
    /// The empty path
    pub fn here() -> Self {
        Junctions(Vec::new())
    }

    /// Single-junction path
    pub fn x1(junction: Junction) -> Self {
        Junctions(vec![junction])
    }

    /// Path from an ordered list of junctions
    pub fn new(junctions: Vec<Junction>) -> Result<Self, WasmXcmError> {
        if junctions.len() > MAX_JUNCTIONS {
            return Err(WasmXcmError::validation(format!(
                "Interior holds at most {} junctions, got {}",
                MAX_JUNCTIONS,
                junctions.len()
            )));
        }
        Ok(Junctions(junctions))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[Junction] {
        &self.0
    }
}

impl ScaleEncode for Junctions {
    fn encode_to(&self, out: &mut Vec<u8>) -> Result<(), WasmXcmError> {
        // The count is the variant tag: Here = 0, X1 = 1, ..., X8 = 8
        out.push(self.0.len() as u8);
        for junction in &self.0 {
            junction.encode_to(out)?;
        }
        Ok(())
    }
}

/// Relative address in the consensus hierarchy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiLocation {
    pub parents: u8,
    pub interior: Junctions,
}

impl MultiLocation {
    pub fn new(parents: u8, interior: Junctions) -> Self {
        MultiLocation { parents, interior }
    }
}

impl ScaleEncode for MultiLocation {
    fn encode_to(&self, out: &mut Vec<u8>) -> Result<(), WasmXcmError> {
        out.push(self.parents);
        self.interior.encode_to(out)
    }
}

/// `{ parents: parent_hops, interior: X1(Parachain(para_id)) }`
pub fn parachain_location(parent_hops: u8, para_id: u32) -> MultiLocation {
    MultiLocation::new(parent_hops, Junctions::x1(Junction::Parachain(para_id)))
}

/// `{ parents: parent_hops, interior: X1(AccountId32 { network, id }) }`
pub fn account32_location(
    id: &[u8],
    parent_hops: u8,
    network: Option<NetworkId>,
) -> Result<MultiLocation, WasmXcmError> {
    let junction = Junction::account_id32(id, network)?;
    Ok(MultiLocation::new(parent_hops, Junctions::x1(junction)))
}

/// `{ parents: parent_hops, interior: X1(AccountKey20 { network, key }) }`
pub fn account_key20_location(
    key: &[u8],
    parent_hops: u8,
    network: Option<NetworkId>,
) -> Result<MultiLocation, WasmXcmError> {
    let junction = Junction::account_key20(key, network)?;
    Ok(MultiLocation::new(parent_hops, Junctions::x1(junction)))
}

/// Native asset of the parent consensus system: `{ parents: 1, interior: Here }`
pub fn native_asset_location() -> MultiLocation {
    MultiLocation::new(1, Junctions::here())
}

/// Asset referenced by index: `{ parents: 0, interior: X1(GeneralIndex(asset_id)) }`
///
/// Fails with a range error when the id does not fit a compact integer.
pub fn asset_by_id_location(asset_id: u128) -> Result<MultiLocation, WasmXcmError> {
    let location = MultiLocation::new(0, Junctions::x1(Junction::GeneralIndex(asset_id)));
    // Surface the range failure here rather than at program build time
    location.encode()?;
    Ok(location)
}

/// Asset on Asset Hub's assets pallet:
/// `{ parents: 0, interior: X2(PalletInstance(50), GeneralIndex(asset_id)) }`
pub fn asset_hub_asset_location(asset_id: u128) -> Result<MultiLocation, WasmXcmError> {
    let interior = Junctions::new(vec![
        Junction::PalletInstance(ASSETS_PALLET_INSTANCE),
        Junction::GeneralIndex(asset_id),
    ])?;
    let location = MultiLocation::new(0, interior);
    location.encode()?;
    Ok(location)
}

/// Asset identified by its EVM contract address under the local consensus system
pub fn asset_location_for_token(token_address: &[u8]) -> Result<MultiLocation, WasmXcmError> {
    account_key20_location(token_address, 0, None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SUPPORTED_CHAINS;

    fn evm_address() -> Vec<u8> {
        hex::decode("742d35cc6634c0532925a3b844bc9e7595f0beb0").unwrap()
    }

    #[test]
    fn test_parachain_location_bytes() {
        let encoded = parachain_location(1, 2034).encode().unwrap();
        assert_eq!(hex::encode(encoded), "010100f2070000");

        let encoded = parachain_location(1, 1000).encode().unwrap();
        assert_eq!(hex::encode(encoded), "010100e8030000");
    }

    #[test]
    fn test_parachain_location_supported_chains() {
        for chain in SUPPORTED_CHAINS {
            for parents in [0u8, 1, 2] {
                let encoded = parachain_location(parents, chain.para_id()).encode().unwrap();
                assert_eq!(encoded.len(), 7, "Failed for {}", chain.name());
                assert_eq!(encoded[0], parents);
                assert_eq!(&encoded[3..], &chain.para_id().to_le_bytes());
            }
        }
    }

    #[test]
    fn test_account32_location() {
        let id = [0x11u8; 32];
        let encoded = account32_location(&id, 0, None).unwrap().encode().unwrap();
        assert_eq!(&encoded[..4], &[0x00, 0x01, 0x01, 0x00]);
        assert_eq!(&encoded[4..], &id);
    }

    #[test]
    fn test_account32_location_with_network() {
        let id = [0x22u8; 32];
        let encoded = account32_location(&id, 0, Some(NetworkId::Polkadot))
            .unwrap()
            .encode()
            .unwrap();
        assert_eq!(&encoded[..5], &[0x00, 0x01, 0x01, 0x01, 0x02]);
        assert_eq!(&encoded[5..], &id);
    }

    #[test]
    fn test_account_key20_location() {
        let key = evm_address();
        let encoded = account_key20_location(&key, 0, None)
            .unwrap()
            .encode()
            .unwrap();
        assert_eq!(
            hex::encode(encoded),
            "00010300742d35cc6634c0532925a3b844bc9e7595f0beb0"
        );

        let zero = account_key20_location(&[0u8; 20], 0, None)
            .unwrap()
            .encode()
            .unwrap();
        assert_eq!(zero.len(), 24);
    }

    #[test]
    fn test_account_length_validation() {
        // 21-byte address, one nibble pair too many
        let too_long = hex::decode("742d35cc6634c0532925a3b844bc9e7595f0beb000").unwrap();
        assert!(matches!(
            account_key20_location(&too_long, 0, None),
            Err(WasmXcmError::Validation(_))
        ));
        assert!(matches!(
            account32_location(&[0u8; 20], 0, None),
            Err(WasmXcmError::Validation(_))
        ));
        assert!(matches!(
            account_key20_location(&[0u8; 32], 0, None),
            Err(WasmXcmError::Validation(_))
        ));
    }

    #[test]
    fn test_account_variants_differ() {
        let substrate = account32_location(&[0xaa; 32], 0, None)
            .unwrap()
            .encode()
            .unwrap();
        let evm = account_key20_location(&[0xaa; 20], 0, None)
            .unwrap()
            .encode()
            .unwrap();
        assert_ne!(substrate, evm);
        // Variant tags differ even when the payload bytes overlap
        assert_ne!(substrate[2], evm[2]);
    }

    #[test]
    fn test_native_asset_location() {
        assert_eq!(native_asset_location().encode().unwrap(), vec![0x01, 0x00]);
    }

    #[test]
    fn test_asset_by_id_location() {
        let encoded = asset_by_id_location(1984).unwrap().encode().unwrap();
        // 1984 compact = (1984 << 2 | 1) little-endian = 0x1f01
        assert_eq!(hex::encode(encoded), "000105011f");

        assert!(matches!(
            asset_by_id_location(u128::MAX),
            Err(WasmXcmError::Range(_))
        ));
    }

    #[test]
    fn test_asset_hub_asset_location() {
        let encoded = asset_hub_asset_location(1984).unwrap().encode().unwrap();
        assert_eq!(hex::encode(encoded), "0002043205011f");
    }

    #[test]
    fn test_asset_location_for_token() {
        let token = hex::decode("1234567890123456789012345678901234567890").unwrap();
        let encoded = asset_location_for_token(&token).unwrap().encode().unwrap();
        assert_eq!(&encoded[..4], &[0x00, 0x01, 0x03, 0x00]);
        assert_eq!(&encoded[4..], &token[..]);
    }

    #[test]
    fn test_junctions_count_limit() {
        let eight = vec![Junction::PalletInstance(1); 8];
        let junctions = Junctions::new(eight).unwrap();
        assert_eq!(junctions.len(), 8);
        assert_eq!(junctions.as_slice()[7], Junction::PalletInstance(1));
        let encoded = MultiLocation::new(0, junctions).encode().unwrap();
        assert_eq!(encoded[1], 8);

        let nine = vec![Junction::PalletInstance(1); 9];
        assert!(matches!(
            Junctions::new(nine),
            Err(WasmXcmError::Validation(_))
        ));
    }

    #[test]
    fn test_general_key() {
        let junction = Junction::general_key(b"DOT").unwrap();
        let encoded = junction.encode().unwrap();
        assert_eq!(encoded.len(), 34);
        assert_eq!(&encoded[..5], &[0x06, 0x03, b'D', b'O', b'T']);

        assert!(Junction::general_key(&[0u8; 33]).is_err());
    }
}
