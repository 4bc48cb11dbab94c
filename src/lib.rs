//! wasm-xcm: WASM module for building Polkadot XCM transfer messages
//!
//! This crate provides:
//! - SCALE scalar encoding (fixed-width, compact, length-prefixed blobs)
//! - MultiLocation construction for parachains, accounts and assets
//! - XCM program building for reserve transfers and teleports
//!
//! Everything is write-only: nothing here decodes SCALE bytes.
//!
//! # Architecture
//!
//! The crate follows a two-layer architecture:
//! - **Core layer** (`src/*.rs`): Pure Rust logic, no WASM dependencies
//! - **WASM layer** (`src/wasm/*.rs`): Thin wrappers with `#[wasm_bindgen]`

pub mod builder;
pub mod error;
pub mod location;
pub mod scale;
pub mod types;
pub mod wasm;
pub mod xcm;

// Re-export main types for convenience
pub use builder::{build_transfer, BuiltTransfer};
pub use error::WasmXcmError;
pub use location::{Junction, Junctions, MultiLocation};
pub use scale::ScaleEncode;
pub use types::{Chain, NetworkId, TransferKind, SUPPORTED_CHAINS, XCM_VERSION};
pub use xcm::{build_reserve_transfer_program, build_teleport_program, Asset, Instruction, Program};
