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

//! Type families of the two wire formats.
//!
//! Location algebra, reserve resolution and instruction assembly are written once against
//! [`XcmFamily`] and instantiated with [`LegacyFamily`] (V0, V1, V2) or [`V3Family`]. The families
//! differ in their junction, asset and instruction types, which keeps values of one format from
//! leaking into the other.

use crate::{
	chain::AccountId,
	junctions::Multilocation,
	v2, v3,
	versioned::{VersionedMultiasset, VersionedMultilocation, VersionedXcm},
	Error, XcmVersion,
};
use core::fmt::Debug;

/// A location made of the junctions of family `F`.
pub type Location<F> = Multilocation<<F as XcmFamily>::Junction>;

/// Builds one instruction from the destination (or reserve) location and the transferred asset.
pub type InstructionBuilder<F> =
	fn(&Location<F>, &<F as XcmFamily>::Multiasset) -> <F as XcmFamily>::Instruction;

/// Constructors of one wire format.
pub trait XcmFamily: Sized + 'static {
	type Junction: Clone + Debug + PartialEq + 'static;
	type Multiasset: Clone + Debug + PartialEq + 'static;
	type Instruction: Clone + Debug + PartialEq + 'static;

	/// Name used in logs.
	const NAME: &'static str;

	/// Instruction builders keyed by instruction name. Names missing here are unsupported.
	const INSTRUCTIONS: &'static [(&'static str, InstructionBuilder<Self>)];

	fn parachain(id: u32) -> Self::Junction;

	/// The account junction, matching any network.
	fn account(account_id: &AccountId) -> Self::Junction;

	fn pallet_instance(index: u8) -> Self::Junction;

	fn general_index(index: u128) -> Self::Junction;

	fn general_key(key: &[u8]) -> Result<Self::Junction, Error>;

	fn fungible_asset(location: Location<Self>, amount: u128) -> Self::Multiasset;

	fn versioned_location(location: Location<Self>, version: Option<XcmVersion>) -> VersionedMultilocation;

	fn versioned_asset(asset: Self::Multiasset, version: Option<XcmVersion>) -> VersionedMultiasset;

	fn versioned_message(message: Vec<Self::Instruction>) -> VersionedXcm;

	/// Look up `name` in [`Self::INSTRUCTIONS`].
	fn instruction_builder(name: &str) -> Option<InstructionBuilder<Self>> {
		Self::INSTRUCTIONS.iter().find(|(known, _)| *known == name).map(|(_, build)| *build)
	}
}

/// V0, V1 and V2.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LegacyFamily {}

/// V3.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum V3Family {}

impl XcmFamily for LegacyFamily {
	type Junction = v2::Junction;
	type Multiasset = v2::Multiasset;
	type Instruction = v2::Instruction;

	const NAME: &'static str = "legacy";

	const INSTRUCTIONS: &'static [(&'static str, InstructionBuilder<Self>)] = &[
		("WithdrawAsset", |_, asset| v2::Instruction::WithdrawAsset(vec![asset.clone()])),
		("ClearOrigin", |_, _| v2::Instruction::ClearOrigin),
		("ReserveAssetDeposited", |_, asset| {
			v2::Instruction::ReserveAssetDeposited(vec![asset.clone()])
		}),
		("BuyExecution", |_, asset| v2::Instruction::BuyExecution {
			fees: asset.clone(),
			weight_limit: v2::WeightLimit::Unlimited,
		}),
		("DepositAsset", |location, _| v2::Instruction::DepositAsset {
			assets: v2::MultiassetFilter::Wild(v2::WildMultiasset::All),
			max_assets: 1,
			beneficiary: location.clone(),
		}),
		("DepositReserveAsset", |location, _| v2::Instruction::DepositReserveAsset {
			assets: v2::MultiassetFilter::Wild(v2::WildMultiasset::All),
			max_assets: 1,
			dest: location.clone(),
			xcm: Vec::new(),
		}),
		("ReceiveTeleportedAsset", |_, asset| {
			v2::Instruction::ReceiveTeleportedAsset(vec![asset.clone()])
		}),
	];

	fn parachain(id: u32) -> v2::Junction {
		v2::Junction::Parachain(id)
	}

	fn account(account_id: &AccountId) -> v2::Junction {
		match *account_id {
			AccountId::Id32(id) => v2::Junction::AccountId32 { network: v2::NetworkId::Any, id },
			AccountId::Key20(key) => v2::Junction::AccountKey20 { network: v2::NetworkId::Any, key },
		}
	}

	fn pallet_instance(index: u8) -> v2::Junction {
		v2::Junction::PalletInstance(index)
	}

	fn general_index(index: u128) -> v2::Junction {
		v2::Junction::GeneralIndex(index)
	}

	fn general_key(key: &[u8]) -> Result<v2::Junction, Error> {
		Ok(v2::Junction::GeneralKey(key.to_vec()))
	}

	fn fungible_asset(location: v2::Multilocation, amount: u128) -> v2::Multiasset {
		v2::Multiasset::fungible(location, amount)
	}

	fn versioned_location(
		location: v2::Multilocation,
		version: Option<XcmVersion>,
	) -> VersionedMultilocation {
		match version {
			Some(XcmVersion::V0) => VersionedMultilocation::V0(location),
			Some(XcmVersion::V2) => VersionedMultilocation::V2(location),
			_ => VersionedMultilocation::V1(location),
		}
	}

	fn versioned_asset(asset: v2::Multiasset, version: Option<XcmVersion>) -> VersionedMultiasset {
		match version {
			Some(XcmVersion::V0) => VersionedMultiasset::V0(asset),
			Some(XcmVersion::V2) => VersionedMultiasset::V2(asset),
			_ => VersionedMultiasset::V1(asset),
		}
	}

	fn versioned_message(message: v2::Xcm) -> VersionedXcm {
		VersionedXcm::V2(message)
	}
}

impl XcmFamily for V3Family {
	type Junction = v3::Junction;
	type Multiasset = v3::Multiasset;
	type Instruction = v3::Instruction;

	const NAME: &'static str = "v3";

	const INSTRUCTIONS: &'static [(&'static str, InstructionBuilder<Self>)] = &[
		("WithdrawAsset", |_, asset| v3::Instruction::WithdrawAsset(vec![asset.clone()])),
		("ClearOrigin", |_, _| v3::Instruction::ClearOrigin),
		("ReserveAssetDeposited", |_, asset| {
			v3::Instruction::ReserveAssetDeposited(vec![asset.clone()])
		}),
		("BuyExecution", |_, asset| v3::Instruction::BuyExecution {
			fees: asset.clone(),
			weight_limit: v3::WeightLimit::Unlimited,
		}),
		("DepositAsset", |location, _| v3::Instruction::DepositAsset {
			assets: v3::MultiassetFilter::Wild(v3::WildMultiasset::All),
			beneficiary: location.clone(),
		}),
		("DepositReserveAsset", |location, _| v3::Instruction::DepositReserveAsset {
			assets: v3::MultiassetFilter::Wild(v3::WildMultiasset::All),
			dest: location.clone(),
			xcm: Vec::new(),
		}),
		("ReceiveTeleportedAsset", |_, asset| {
			v3::Instruction::ReceiveTeleportedAsset(vec![asset.clone()])
		}),
	];

	fn parachain(id: u32) -> v3::Junction {
		v3::Junction::Parachain(id)
	}

	fn account(account_id: &AccountId) -> v3::Junction {
		match *account_id {
			AccountId::Id32(id) => v3::Junction::AccountId32 { network: None, id },
			AccountId::Key20(key) => v3::Junction::AccountKey20 { network: None, key },
		}
	}

	fn pallet_instance(index: u8) -> v3::Junction {
		v3::Junction::PalletInstance(index)
	}

	fn general_index(index: u128) -> v3::Junction {
		v3::Junction::GeneralIndex(index)
	}

	fn general_key(key: &[u8]) -> Result<v3::Junction, Error> {
		v3::Junction::general_key(key)
	}

	fn fungible_asset(location: v3::Multilocation, amount: u128) -> v3::Multiasset {
		v3::Multiasset::fungible(location, amount)
	}

	fn versioned_location(location: v3::Multilocation, _: Option<XcmVersion>) -> VersionedMultilocation {
		VersionedMultilocation::V3(location)
	}

	fn versioned_asset(asset: v3::Multiasset, _: Option<XcmVersion>) -> VersionedMultiasset {
		VersionedMultiasset::V3(asset)
	}

	fn versioned_message(message: v3::Xcm) -> VersionedXcm {
		VersionedXcm::V3(message)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const NAMES: [&str; 7] = [
		"WithdrawAsset",
		"ClearOrigin",
		"ReserveAssetDeposited",
		"BuyExecution",
		"DepositAsset",
		"DepositReserveAsset",
		"ReceiveTeleportedAsset",
	];

	#[test]
	fn both_families_know_the_same_instructions() {
		for name in NAMES {
			assert!(LegacyFamily::instruction_builder(name).is_some(), "{name}");
			assert!(V3Family::instruction_builder(name).is_some(), "{name}");
		}
		assert_eq!(LegacyFamily::INSTRUCTIONS.len(), NAMES.len());
		assert_eq!(V3Family::INSTRUCTIONS.len(), NAMES.len());
		assert!(LegacyFamily::instruction_builder("Transact").is_none());
		assert!(V3Family::instruction_builder("withdrawAsset").is_none());
	}

	#[test]
	fn account_network_is_a_wildcard() {
		let account = AccountId::Key20([1; 20]);
		assert_eq!(
			LegacyFamily::account(&account),
			v2::Junction::AccountKey20 { network: v2::NetworkId::Any, key: [1; 20] }
		);
		assert_eq!(V3Family::account(&account), v3::Junction::AccountKey20 { network: None, key: [1; 20] });
	}

	#[test]
	fn legacy_version_tags() {
		let here = v2::Multilocation::here();
		assert_eq!(LegacyFamily::versioned_location(here.clone(), None).version(), XcmVersion::V1);
		assert_eq!(
			LegacyFamily::versioned_location(here.clone(), Some(XcmVersion::V0)).version(),
			XcmVersion::V0
		);
		assert_eq!(LegacyFamily::versioned_location(here, Some(XcmVersion::V2)).version(), XcmVersion::V2);
		assert_eq!(
			V3Family::versioned_location(v3::Multilocation::here(), None).version(),
			XcmVersion::V3
		);
	}
}
