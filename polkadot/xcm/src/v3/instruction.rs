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

//! V3 instructions used to estimate transfer weight.

use super::{Multiasset, MultiassetFilter, Multiassets, Multilocation};
use crate::codec::{self, impl_tagged_serde, CodecError, Decoder, TaggedUnion};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Two dimensional weight: computation time and proof size.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct Weight {
	/// The weight of computational time used.
	#[serde(with = "codec::stringified")]
	pub ref_time: u64,
	/// The weight of storage space used by proof of validity.
	#[serde(with = "codec::stringified")]
	pub proof_size: u64,
}

impl Weight {
	pub const fn from_parts(ref_time: u64, proof_size: u64) -> Self {
		Self { ref_time, proof_size }
	}
}

/// An optional weight limit.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum WeightLimit {
	/// No weight limit imposed.
	Unlimited,
	/// Weight limit imposed of the inner value.
	Limited(Weight),
}

impl TaggedUnion for WeightLimit {
	const VARIANTS: &'static [(&'static str, Decoder<Self>)] = &[
		("Unlimited", |_| Ok(WeightLimit::Unlimited)),
		("Limited", |payload| Ok(WeightLimit::Limited(codec::from_payload(payload)?))),
	];

	fn to_tagged(&self) -> Result<(&'static str, Value), CodecError> {
		Ok(match self {
			WeightLimit::Unlimited => ("Unlimited", Value::Null),
			WeightLimit::Limited(weight) => ("Limited", codec::to_payload(weight)?),
		})
	}
}

/// A V3 message: an ordered list of instructions.
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
	DepositAsset { assets: MultiassetFilter, beneficiary: Multilocation },
	/// Remove the asset(s) (`assets`) from the Holding Register and place equivalent assets under
	/// the ownership of `dest` within this consensus system, then send `xcm` onwards.
	DepositReserveAsset { assets: MultiassetFilter, dest: Multilocation, xcm: Xcm },
}

#[derive(Deserialize)]
struct BuyExecutionPayload {
	fees: Multiasset,
	weight_limit: WeightLimit,
}

#[derive(Deserialize)]
struct DepositAssetPayload {
	assets: MultiassetFilter,
	beneficiary: Multilocation,
}

#[derive(Deserialize)]
struct DepositReserveAssetPayload {
	assets: MultiassetFilter,
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
			let DepositAssetPayload { assets, beneficiary } = codec::from_payload(payload)?;
			Ok(Instruction::DepositAsset { assets, beneficiary })
		}),
		("DepositReserveAsset", |payload| {
			let DepositReserveAssetPayload { assets, dest, xcm } = codec::from_payload(payload)?;
			Ok(Instruction::DepositReserveAsset { assets, dest, xcm })
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
			DepositAsset { assets, beneficiary } => (
				"DepositAsset",
				json!({ "assets": codec::encode(assets)?, "beneficiary": codec::to_payload(beneficiary)? }),
			),
			DepositReserveAsset { assets, dest, xcm } => (
				"DepositReserveAsset",
				json!({
					"assets": codec::encode(assets)?,
					"dest": codec::to_payload(dest)?,
					"xcm": codec::to_payload(xcm)?,
				}),
			),
		})
	}
}

impl_tagged_serde!(WeightLimit, Instruction);

#[cfg(test)]
mod tests {
	use super::*;
	use crate::v3::{Junction, WildMultiasset};
	use serde_json::json;

	fn asset() -> Multiasset {
		Multiasset::fungible(Multilocation::new(1, []), 10_000_000_000)
	}

	#[test]
	fn instructions_round_trip() {
		let dest = Multilocation::new(1, [Junction::Parachain(1000)]);
		for instruction in [
			Instruction::WithdrawAsset(vec![asset()]),
			Instruction::ReserveAssetDeposited(vec![asset()]),
			Instruction::ReceiveTeleportedAsset(vec![asset()]),
			Instruction::ClearOrigin,
			Instruction::BuyExecution { fees: asset(), weight_limit: WeightLimit::Unlimited },
			Instruction::BuyExecution {
				fees: asset(),
				weight_limit: WeightLimit::Limited(Weight::from_parts(1_000_000_000, 65_536)),
			},
			Instruction::DepositAsset {
				assets: MultiassetFilter::Wild(WildMultiasset::AllCounted(1)),
				beneficiary: Multilocation::new(0, [Junction::AccountId32 { network: None, id: [1; 32] }]),
			},
			Instruction::DepositReserveAsset {
				assets: MultiassetFilter::Wild(WildMultiasset::All),
				dest,
				xcm: vec![Instruction::ClearOrigin],
			},
		] {
			let encoded = codec::encode(&instruction).unwrap();
			assert_eq!(codec::decode::<Instruction>(encoded), Ok(instruction));
		}
	}

	#[test]
	fn deposit_asset_has_no_max_assets() {
		let instruction = Instruction::DepositAsset {
			assets: MultiassetFilter::Wild(WildMultiasset::All),
			beneficiary: Multilocation::here(),
		};
		let encoded = codec::encode(&instruction).unwrap();
		assert_eq!(encoded[1].get("max_assets"), None);
		assert_eq!(encoded[1]["assets"], json!(["Wild", ["All", null]]));
	}

	#[test]
	fn weight_wire_form() {
		let limit = WeightLimit::Limited(Weight::from_parts(5, 6));
		assert_eq!(
			codec::encode(&limit),
			Ok(json!(["Limited", { "ref_time": "5", "proof_size": "6" }]))
		);
	}
}
