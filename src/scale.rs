//! SCALE scalar codec
//!
//! Write-only encoders for the primitive shapes XCM programs are built from:
//! fixed-width little-endian integers, compact integers and length-prefixed blobs.
//! See: https://docs.substrate.io/reference/scale-codec/

use crate::error::WasmXcmError;

/// Byte widths accepted by [`encode_fixed`] (u8, u16, u32, u64, u128)
pub const FIXED_WIDTHS: [usize; 5] = [1, 2, 4, 8, 16];

/// Largest value [`encode_compact`] accepts
pub const MAX_COMPACT: u128 = u64::MAX as u128;

const COMPACT_SINGLE_BYTE_MAX: u64 = 0x3f;
const COMPACT_TWO_BYTE_MAX: u64 = 0x3fff;
const COMPACT_FOUR_BYTE_MAX: u64 = 0x3fff_ffff;

/// Types that know their own SCALE encoding
///
/// Encoding is all-or-nothing: on error the caller's buffer must be discarded.
pub trait ScaleEncode {
    /// Append the encoding of `self` to `out`
    fn encode_to(&self, out: &mut Vec<u8>) -> Result<(), WasmXcmError>;

    /// Encode `self` into a fresh buffer
    fn encode(&self) -> Result<Vec<u8>, WasmXcmError> {
        let mut out = Vec::new();
        self.encode_to(&mut out)?;
        Ok(out)
    }
}

/// Encode `value` as exactly `width` little-endian bytes
///
/// # Arguments
/// * `value` - Unsigned value to encode
/// * `width` - Target width in bytes, one of [`FIXED_WIDTHS`]
pub fn encode_fixed(value: u128, width: usize) -> Result<Vec<u8>, WasmXcmError> {
    if !FIXED_WIDTHS.contains(&width) {
        return Err(WasmXcmError::validation(format!(
            "Unsupported fixed width: {} bytes",
            width
        )));
    }
    if width < 16 && value >> (8 * width) != 0 {
        return Err(WasmXcmError::range(format!(
            "Value {} does not fit in {} bytes",
            value, width
        )));
    }
    Ok(value.to_le_bytes()[..width].to_vec())
}

/// Encode `value` as a SCALE compact integer
///
/// Always picks the smallest mode, so the output is canonical.
pub fn encode_compact(value: u128) -> Result<Vec<u8>, WasmXcmError> {
    let mut out = Vec::with_capacity(9);
    encode_compact_to(value, &mut out)?;
    Ok(out)
}

/// Append the compact encoding of `value` to `out`
pub fn encode_compact_to(value: u128, out: &mut Vec<u8>) -> Result<(), WasmXcmError> {
    let value = u64::try_from(value).map_err(|_| {
        WasmXcmError::range(format!(
            "Compact value {} exceeds maximum {}",
            value, MAX_COMPACT
        ))
    })?;
    push_compact(value, out);
    Ok(())
}

/// Encode a byte blob as `compact(len) ++ bytes`
pub fn encode_bytes(blob: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(blob.len() + 5);
    push_compact(blob.len() as u64, &mut out);
    out.extend_from_slice(blob);
    out
}

/// Encode UTF-8 text as a byte blob
pub fn encode_str(text: &str) -> Vec<u8> {
    encode_bytes(text.as_bytes())
}

/// Concatenate byte sequences in order
pub fn concat<I, T>(parts: I) -> Vec<u8>
where
    I: IntoIterator<Item = T>,
    T: AsRef<[u8]>,
{
    let mut out = Vec::new();
    for part in parts {
        out.extend_from_slice(part.as_ref());
    }
    out
}

fn push_compact(value: u64, out: &mut Vec<u8>) {
    if value <= COMPACT_SINGLE_BYTE_MAX {
        out.push((value as u8) << 2);
    } else if value <= COMPACT_TWO_BYTE_MAX {
        let v = ((value as u16) << 2) | 0b01;
        out.extend_from_slice(&v.to_le_bytes());
    } else if value <= COMPACT_FOUR_BYTE_MAX {
        let v = ((value as u32) << 2) | 0b10;
        out.extend_from_slice(&v.to_le_bytes());
    } else {
        // Big-integer mode: length byte then the minimal little-endian bytes (4..=8)
        let bytes_needed = ((64 - value.leading_zeros() + 7) / 8) as usize;
        out.push((((bytes_needed - 4) as u8) << 2) | 0b11);
        out.extend_from_slice(&value.to_le_bytes()[..bytes_needed]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parity_scale_codec::{Compact, Decode, Encode};

    #[test]
    fn test_encode_fixed_little_endian() {
        assert_eq!(encode_fixed(42, 1).unwrap(), vec![0x2a]);
        assert_eq!(encode_fixed(255, 1).unwrap(), vec![0xff]);
        assert_eq!(
            encode_fixed(0x12345678, 4).unwrap(),
            vec![0x78, 0x56, 0x34, 0x12]
        );
        assert_eq!(encode_fixed(2034, 4).unwrap(), hex::decode("f2070000").unwrap());
        assert_eq!(
            encode_fixed(0x0102030405060708, 8).unwrap(),
            hex::decode("0807060504030201").unwrap()
        );
        // 1 token with 18 decimals
        assert_eq!(
            encode_fixed(1_000_000_000_000_000_000, 16).unwrap(),
            hex::decode("000064a7b3b6e00d0000000000000000").unwrap()
        );
    }

    #[test]
    fn test_encode_fixed_out_of_range() {
        assert!(matches!(encode_fixed(256, 1), Err(WasmXcmError::Range(_))));
        assert!(matches!(
            encode_fixed(u32::MAX as u128 + 1, 4),
            Err(WasmXcmError::Range(_))
        ));
        assert!(encode_fixed(u128::MAX, 16).is_ok());
    }

    #[test]
    fn test_encode_fixed_unsupported_width() {
        for width in [0, 3, 5, 32] {
            assert!(matches!(
                encode_fixed(1, width),
                Err(WasmXcmError::Validation(_))
            ));
        }
    }

    #[test]
    fn test_encode_fixed_decodes_with_reference_codec() {
        let v8 = encode_fixed(200, 1).unwrap();
        assert_eq!(u8::decode(&mut &v8[..]).unwrap(), 200);

        let v16 = encode_fixed(0xbeef, 2).unwrap();
        assert_eq!(u16::decode(&mut &v16[..]).unwrap(), 0xbeef);

        let v32 = encode_fixed(2034, 4).unwrap();
        assert_eq!(u32::decode(&mut &v32[..]).unwrap(), 2034);

        let v64 = encode_fixed(u64::MAX as u128, 8).unwrap();
        assert_eq!(u64::decode(&mut &v64[..]).unwrap(), u64::MAX);

        let amount = 1_000_000u128 * 10u128.pow(18);
        let v128 = encode_fixed(amount, 16).unwrap();
        assert_eq!(u128::decode(&mut &v128[..]).unwrap(), amount);
    }

    #[test]
    fn test_compact_boundaries() {
        let cases: [(u128, &str); 6] = [
            (0, "00"),
            (63, "fc"),
            (64, "0101"),
            (16383, "fdff"),
            (16384, "02000100"),
            (1073741823, "feffffff"),
        ];
        for (value, expected) in cases {
            assert_eq!(
                hex::encode(encode_compact(value).unwrap()),
                expected,
                "Failed for value {}",
                value
            );
        }
    }

    #[test]
    fn test_compact_big_integer_mode() {
        assert_eq!(hex::encode(encode_compact(1 << 30).unwrap()), "0300000040");
        assert_eq!(
            hex::encode(encode_compact(1 << 32).unwrap()),
            "070000000001"
        );
        assert_eq!(
            hex::encode(encode_compact(MAX_COMPACT).unwrap()),
            "13ffffffffffffffff"
        );
    }

    #[test]
    fn test_compact_too_large() {
        assert!(matches!(
            encode_compact(MAX_COMPACT + 1),
            Err(WasmXcmError::Range(_))
        ));
        assert!(matches!(
            encode_compact(u128::MAX),
            Err(WasmXcmError::Range(_))
        ));
    }

    #[test]
    fn test_encode_bytes_and_str() {
        assert_eq!(encode_bytes(&[]), vec![0x00]);
        assert_eq!(
            hex::encode(encode_bytes(&[0x01, 0x02, 0x03])),
            "0c010203"
        );
        assert_eq!(encode_str(""), vec![0x00]);
        assert_eq!(hex::encode(encode_str("hello")), "1468656c6c6f");

        // Long blobs switch the length prefix to two-byte mode
        let blob = vec![0xaa; 100];
        let encoded = encode_bytes(&blob);
        assert_eq!(&encoded[..2], &[0x91, 0x01]);
        assert_eq!(encoded.len(), 102);
        assert_eq!(Vec::<u8>::decode(&mut &encoded[..]).unwrap(), blob);
    }

    #[test]
    fn test_concat() {
        assert!(concat(Vec::<Vec<u8>>::new()).is_empty());
        let with_gap: [&[u8]; 3] = [&[0x01], &[], &[0x02]];
        assert_eq!(concat(with_gap), vec![0x01, 0x02]);
        assert_eq!(
            concat([vec![0x01], vec![0x02, 0x03], vec![0x04, 0x05, 0x06]]),
            vec![1, 2, 3, 4, 5, 6]
        );
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: compact output matches the reference encoder byte for byte
            #[test]
            fn prop_compact_matches_reference(value in any::<u64>()) {
                let ours = encode_compact(value as u128).unwrap();
                prop_assert_eq!(&ours, &Compact(value).encode());
                let decoded = Compact::<u64>::decode(&mut &ours[..]).unwrap();
                prop_assert_eq!(decoded.0, value);
            }

            /// Property: concatenation is associative
            #[test]
            fn prop_concat_associative(
                a in prop::collection::vec(any::<u8>(), 0..32),
                b in prop::collection::vec(any::<u8>(), 0..32),
                c in prop::collection::vec(any::<u8>(), 0..32),
            ) {
                let left = concat([concat([&a, &b]), c.clone()]);
                let right = concat([a.clone(), concat([&b, &c])]);
                prop_assert_eq!(left, right);
            }

            /// Property: blobs decode back with the reference codec
            #[test]
            fn prop_bytes_match_reference(blob in prop::collection::vec(any::<u8>(), 0..512)) {
                prop_assert_eq!(encode_bytes(&blob), blob.encode());
            }
        }
    }
}
