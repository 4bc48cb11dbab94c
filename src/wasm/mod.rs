//! WASM bindings for wasm-xcm
//!
//! This module contains thin wrappers with #[wasm_bindgen] that delegate
//! to the core Rust implementations.

pub mod builder;
pub mod codec;
pub mod location;

// Re-export WASM types
pub use builder::XcmBuilderNamespace;
pub use codec::ScaleNamespace;
pub use location::LocationNamespace;
