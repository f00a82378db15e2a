// Copyright (C) Parity Technologies (UK) Ltd.
// This file is part of Polkadot.

// Polkadot is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// Polkadot is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.

// You should have received a copy of the GNU General Public License
// along with Polkadot.  If not, see <http://www.gnu.org/licenses/>.

//! Pre-V3 instructions used to estimate transfer weight.

use super::{Multiasset, MultiassetFilter, Multiassets, Multilocation};
use crate::codec::{self, impl_tagged_serde, CodecError, Decoder, TaggedUnion};
use serde::Deserialize;
use serde_json::{json, Value};

/// An optional weight limit.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum WeightLimit {
	/// No weight limit imposed.
	Unlimited,
	/// Weight limit imposed of the inner value.
	Limited(u64),
}

impl TaggedUnion for WeightLimit {
	const VARIANTS: &'static [(&'static str, Decoder<Self>)] = &[
		("Unlimited", |_| Ok(WeightLimit::Unlimited)),
		("Limited", |payload| Ok(WeightLimit::Limited(codec::number_from_payload(payload)?))),
	];

	fn to_tagged(&self) -> Result<(&'static str, Value), CodecError> {
		Ok(match self {
			WeightLimit::Unlimited => ("Unlimited", Value::Null),
			WeightLimit::Limited(weight) => ("Limited", codec::number_to_payload(weight)),
		})
	}
}

/// A pre-V3 message: an ordered list of instructions.
pub type Xcm = Vec<Instruction>;

/// Cross-Consensus Message instruction, restricted to the ones a transfer is made of.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Instruction {
	/// Withdraw asset(s) (`assets`) from the ownership of `origin` and place them into the Holding
	/// Register.
	WithdrawAsset(Multiassets),
	/// Asset(s) (`assets`) have been received into the ownership of this system on the `origin`
	/// system and equivalent derivatives should be placed into the Holding Register.
	ReserveAssetDeposited(Multiassets),
	/// Asset(s) (`assets`) have been destroyed on the `origin` system and equivalent assets should
	/// be created and placed into the Holding Register.
	ReceiveTeleportedAsset(Multiassets),
	/// Clear the origin.
	ClearOrigin,
	/// Pay for the execution of some XCM `xcm` and `orders` with up to `weight`
	/// picoseconds of execution time, paying for this with up to `fees` from the Holding Register.
	BuyExecution { fees: Multiasset, weight_limit: WeightLimit },
	/// Remove the asset(s) (`assets`) from the Holding Register and place equivalent assets under
	/// the ownership of `beneficiary` within this consensus system.
	DepositAsset { assets: MultiassetFilter, max_assets: u32, beneficiary: Multilocation },
	/// Remove the asset(s) (`assets`) from the Holding Register and place equivalent assets under
	/// the ownership of `dest` within this consensus system, then send `xcm` onwards.
	DepositReserveAsset {
		assets: MultiassetFilter,
		max_assets: u32,
		dest: Multilocation,
		xcm: Xcm,
	},
}

#[derive(Deserialize)]
struct BuyExecutionPayload {
	fees: Multiasset,
	weight_limit: WeightLimit,
}

#[derive(Deserialize)]
struct DepositAssetPayload {
	assets: MultiassetFilter,
	max_assets: u32,
	beneficiary: Multilocation,
}

#[derive(Deserialize)]
struct DepositReserveAssetPayload {
	assets: MultiassetFilter,
	max_assets: u32,
	dest: Multilocation,
	xcm: Xcm,
}

impl TaggedUnion for Instruction {
	const VARIANTS: &'static [(&'static str, Decoder<Self>)] = &[
		("WithdrawAsset", |payload| Ok(Instruction::WithdrawAsset(codec::from_payload(payload)?))),
		("ReserveAssetDeposited", |payload| {
			Ok(Instruction::ReserveAssetDeposited(codec::from_payload(payload)?))
		}),
		("ReceiveTeleportedAsset", |payload| {
			Ok(Instruction::ReceiveTeleportedAsset(codec::from_payload(payload)?))
		}),
		("ClearOrigin", |_| Ok(Instruction::ClearOrigin)),
		("BuyExecution", |payload| {
			let BuyExecutionPayload { fees, weight_limit } = codec::from_payload(payload)?;
			Ok(Instruction::BuyExecution { fees, weight_limit })
		}),
		("DepositAsset", |payload| {
			let DepositAssetPayload { assets, max_assets, beneficiary } =
				codec::from_payload(payload)?;
			Ok(Instruction::DepositAsset { assets, max_assets, beneficiary })
		}),
		("DepositReserveAsset", |payload| {
			let DepositReserveAssetPayload { assets, max_assets, dest, xcm } =
				codec::from_payload(payload)?;
			Ok(Instruction::DepositReserveAsset { assets, max_assets, dest, xcm })
		}),
	];

	fn to_tagged(&self) -> Result<(&'static str, Value), CodecError> {
		use Instruction::*;
		Ok(match self {
			WithdrawAsset(assets) => ("WithdrawAsset", codec::to_payload(assets)?),
			ReserveAssetDeposited(assets) => ("ReserveAssetDeposited", codec::to_payload(assets)?),
			ReceiveTeleportedAsset(assets) => ("ReceiveTeleportedAsset", codec::to_payload(assets)?),
			ClearOrigin => ("ClearOrigin", Value::Null),
			BuyExecution { fees, weight_limit } => (
				"BuyExecution",
				json!({ "fees": codec::to_payload(fees)?, "weight_limit": codec::encode(weight_limit)? }),
			),
			DepositAsset { assets, max_assets, beneficiary } => (
				"DepositAsset",
				json!({
					"assets": codec::encode(assets)?,
					"max_assets": max_assets,
					"beneficiary": codec::to_payload(beneficiary)?,
				}),
			),
			DepositReserveAsset { assets, max_assets, dest, xcm } => (
				"DepositReserveAsset",
				json!({
					"assets": codec::encode(assets)?,
					"max_assets": max_assets,
					"dest": codec::to_payload(dest)?,
					"xcm": codec::to_payload(xcm)?,
				}),
			),
		})
	}
}

impl_tagged_serde!(WeightLimit, Instruction);
