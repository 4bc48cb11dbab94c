//! XCM instructions and programs
//!
//! Programs are built once per transfer, serialized and handed off. They are
//! never mutated after construction.

use crate::error::WasmXcmError;
use crate::location::MultiLocation;
use crate::scale::{encode_compact_to, ScaleEncode};
use crate::types::{TransferKind, XCM_VERSION};
use tracing::trace;

/// Opcodes of the instructions this crate emits
pub mod opcode {
    pub const WITHDRAW_ASSET: u8 = 0x04;
    pub const RESERVE_ASSET_DEPOSITED: u8 = 0x05;
    pub const BUY_EXECUTION: u8 = 0x08;
    pub const CLEAR_ORIGIN: u8 = 0x0d;
    pub const DEPOSIT_ASSET: u8 = 0x12;
}

/// `WeightLimit::Unlimited`
const WEIGHT_LIMIT_UNLIMITED: u8 = 0x00;

/// `Wild(All)` asset filter
const ASSET_FILTER_WILD_ALL: [u8; 2] = [0x01, 0x00];

/// Fungible asset: where it lives and how much of it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    pub location: MultiLocation,
    pub amount: u128,
}

impl Asset {
    pub fn new(location: MultiLocation, amount: u128) -> Self {
        Asset { location, amount }
    }
}

impl ScaleEncode for Asset {
    fn encode_to(&self, out: &mut Vec<u8>) -> Result<(), WasmXcmError> {
        self.location.encode_to(out)?;
        out.extend_from_slice(&self.amount.to_le_bytes());
        Ok(())
    }
}

/// A single XCM instruction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instruction {
    WithdrawAsset(Asset),
    /// Announces assets re-created at the destination (first instruction of a teleport)
    ReserveAssetDeposited(Asset),
    ClearOrigin,
    /// Pay for execution with `fees`; weight is always unlimited
    BuyExecution { fees: Asset },
    /// Deposit all remaining assets to `beneficiary`
    DepositAsset { beneficiary: MultiLocation },
}

impl Instruction {
    pub fn opcode(&self) -> u8 {
        match self {
            Instruction::WithdrawAsset(_) => opcode::WITHDRAW_ASSET,
            Instruction::ReserveAssetDeposited(_) => opcode::RESERVE_ASSET_DEPOSITED,
            Instruction::ClearOrigin => opcode::CLEAR_ORIGIN,
            Instruction::BuyExecution { .. } => opcode::BUY_EXECUTION,
            Instruction::DepositAsset { .. } => opcode::DEPOSIT_ASSET,
        }
    }
}

impl ScaleEncode for Instruction {
    fn encode_to(&self, out: &mut Vec<u8>) -> Result<(), WasmXcmError> {
        out.push(self.opcode());
        match self {
            Instruction::WithdrawAsset(asset) | Instruction::ReserveAssetDeposited(asset) => {
                asset.encode_to(out)?;
            }
            Instruction::ClearOrigin => {}
            Instruction::BuyExecution { fees } => {
                fees.encode_to(out)?;
                out.push(WEIGHT_LIMIT_UNLIMITED);
            }
            Instruction::DepositAsset { beneficiary } => {
                out.extend_from_slice(&ASSET_FILTER_WILD_ALL);
                beneficiary.encode_to(out)?;
            }
        }
        Ok(())
    }
}

/// Ordered instruction sequence, serialized as `version ++ compact(count) ++ instructions`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    instructions: Vec<Instruction>,
}

impl Program {
    pub fn new(instructions: Vec<Instruction>) -> Self {
        Program { instructions }
    }

    /// `[WithdrawAsset, ClearOrigin, BuyExecution, DepositAsset]`
    pub fn reserve_transfer(
        asset_location: &MultiLocation,
        amount: u128,
        fee_amount: u128,
        beneficiary: &MultiLocation,
    ) -> Self {
        Self::transfer(
            Instruction::WithdrawAsset(Asset::new(asset_location.clone(), amount)),
            asset_location,
            fee_amount,
            beneficiary,
        )
    }

    /// `[ReserveAssetDeposited, ClearOrigin, BuyExecution, DepositAsset]`
    pub fn teleport(
        asset_location: &MultiLocation,
        amount: u128,
        fee_amount: u128,
        beneficiary: &MultiLocation,
    ) -> Self {
        Self::transfer(
            Instruction::ReserveAssetDeposited(Asset::new(asset_location.clone(), amount)),
            asset_location,
            fee_amount,
            beneficiary,
        )
    }

    /// Program for the given transfer kind
    pub fn for_kind(
        kind: TransferKind,
        asset_location: &MultiLocation,
        amount: u128,
        fee_amount: u128,
        beneficiary: &MultiLocation,
    ) -> Self {
        match kind {
            TransferKind::ReserveTransfer => {
                Self::reserve_transfer(asset_location, amount, fee_amount, beneficiary)
            }
            TransferKind::Teleport => {
                Self::teleport(asset_location, amount, fee_amount, beneficiary)
            }
        }
    }

    fn transfer(
        first: Instruction,
        asset_location: &MultiLocation,
        fee_amount: u128,
        beneficiary: &MultiLocation,
    ) -> Self {
        Program::new(vec![
            first,
            Instruction::ClearOrigin,
            Instruction::BuyExecution {
                fees: Asset::new(asset_location.clone(), fee_amount),
            },
            Instruction::DepositAsset {
                beneficiary: beneficiary.clone(),
            },
        ])
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }
}

impl ScaleEncode for Program {
    fn encode_to(&self, out: &mut Vec<u8>) -> Result<(), WasmXcmError> {
        trace!(
            version = XCM_VERSION,
            instructions = self.instructions.len(),
            "encoding xcm program"
        );
        out.push(XCM_VERSION);
        encode_compact_to(self.instructions.len() as u128, out)?;
        for instruction in &self.instructions {
            instruction.encode_to(out)?;
        }
        Ok(())
    }
}

// =============================================================================
// Encoded instruction helpers
// =============================================================================

/// `WithdrawAsset(asset)`
pub fn withdraw_asset(asset: &Asset) -> Result<Vec<u8>, WasmXcmError> {
    Instruction::WithdrawAsset(asset.clone()).encode()
}

/// `ReserveAssetDeposited(asset)`
pub fn reserve_asset_deposited(asset: &Asset) -> Result<Vec<u8>, WasmXcmError> {
    Instruction::ReserveAssetDeposited(asset.clone()).encode()
}

/// `ClearOrigin`
pub fn clear_origin() -> Vec<u8> {
    vec![opcode::CLEAR_ORIGIN]
}

/// `BuyExecution { fees: (asset_location, fee_amount), weight_limit: Unlimited }`
pub fn buy_execution(
    asset_location: &MultiLocation,
    fee_amount: u128,
) -> Result<Vec<u8>, WasmXcmError> {
    Instruction::BuyExecution {
        fees: Asset::new(asset_location.clone(), fee_amount),
    }
    .encode()
}

/// `DepositAsset { assets: Wild(All), beneficiary }`
pub fn deposit_asset(beneficiary: &MultiLocation) -> Result<Vec<u8>, WasmXcmError> {
    Instruction::DepositAsset {
        beneficiary: beneficiary.clone(),
    }
    .encode()
}

/// Serialized reserve-transfer program
pub fn build_reserve_transfer_program(
    asset_location: &MultiLocation,
    amount: u128,
    fee_amount: u128,
    beneficiary: &MultiLocation,
) -> Result<Vec<u8>, WasmXcmError> {
    Program::reserve_transfer(asset_location, amount, fee_amount, beneficiary).encode()
}

/// Serialized teleport program
pub fn build_teleport_program(
    asset_location: &MultiLocation,
    amount: u128,
    fee_amount: u128,
    beneficiary: &MultiLocation,
) -> Result<Vec<u8>, WasmXcmError> {
    Program::teleport(asset_location, amount, fee_amount, beneficiary).encode()
}
