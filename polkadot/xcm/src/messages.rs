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

//! Messages whose weight is estimated to price a transfer.
//!
//! The instructions executed on the destination chain, and on the reserve chain when the asset
//! passes through it, are configured as lists of instruction names. Each name maps to a builder
//! in [`XcmFamily::INSTRUCTIONS`]; names outside of that table are rejected.

use crate::{
	config::XcmTransfers,
	factory::{XcmModelFactory, XcmMultilocationAssetParams},
	family::{Location, XcmFamily},
	location, reserve,
	versioned::VersionedXcm,
	with_family, Error, XcmVersion, LOG_TARGET,
};

/// Messages to estimate the execution weight of on each chain a transfer touches.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct XcmWeightMessages {
	/// Executed on the destination chain.
	pub destination: VersionedXcm,
	/// Executed on the reserve chain, if the transfer passes through it.
	pub reserve: Option<VersionedXcm>,
}

/// Build the message made of the instructions `names`, in order.
pub fn weight_message<F: XcmFamily>(
	names: &[String],
	location: &Location<F>,
	asset: &F::Multiasset,
) -> Result<VersionedXcm, Error> {
	let message = names
		.iter()
		.map(|name| {
			let build = F::instruction_builder(name)
				.ok_or_else(|| Error::UnsupportedInstruction(name.clone()))?;
			Ok(build(location, asset))
		})
		.collect::<Result<Vec<_>, Error>>()
		.inspect_err(|error| {
			tracing::debug!(target: LOG_TARGET, ?error, ?names, family = F::NAME, "weight_message");
		})?;
	Ok(F::versioned_message(message))
}

fn instructions<'a>(params: &XcmMultilocationAssetParams<'a>, key: &str) -> Result<&'a [String], Error> {
	let transfers: &'a XcmTransfers = params.xcm_transfers;
	transfers.instructions(key).ok_or_else(|| {
		tracing::debug!(target: LOG_TARGET, key, "No instructions configured");
		Error::NoInstructions(key.to_owned())
	})
}

fn weight_messages<F: XcmFamily>(params: &XcmMultilocationAssetParams) -> Result<XcmWeightMessages, Error> {
	let route = params.route()?;
	let origin = &params.origin.chain;
	let asset = reserve::multiasset::<F>(origin, &params.reserve.chain, &route.reserve_path, params.amount)?;

	let destination_location = location::destination_location::<F>(origin, &params.destination);
	let names = instructions(params, &route.transfer.destination.fee.instructions)?;
	let destination = weight_message::<F>(names, &destination_location, &asset)?;

	let reserve = match params.xcm_transfers.reserve_fee(&params.origin.chain_asset_id()) {
		Some(fee) => {
			let reserve_location = location::reserve_location::<F>(origin, &params.reserve);
			let names = instructions(params, &fee.instructions)?;
			Some(weight_message::<F>(names, &reserve_location, &asset)?)
		},
		None => None,
	};

	Ok(XcmWeightMessages { destination, reserve })
}

impl XcmModelFactory {
	/// Messages to estimate the weight of the transfer described by `params` with.
	///
	/// The destination message is mandatory. The reserve message is only built when the reserve
	/// of the asset charges a fee. Nothing is returned if any instruction is unsupported.
	pub fn create_weight_messages(
		&self,
		params: &XcmMultilocationAssetParams,
		version: Option<XcmVersion>,
	) -> Result<XcmWeightMessages, Error> {
		tracing::trace!(
			target: LOG_TARGET,
			?version,
			origin = %params.origin.chain_asset_id(),
			destination = %params.destination.chain().chain_id,
			"create_weight_messages",
		);
		with_family!(version, F => weight_messages::<F>(params))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{
		family::{LegacyFamily, V3Family},
		v2, v3,
	};
	use assert_matches::assert_matches;

	fn names(names: &[&str]) -> Vec<String> {
		names.iter().map(|name| name.to_string()).collect()
	}

	#[test]
	fn instructions_use_the_built_location_and_asset() {
		let location = v3::Multilocation::new(1, [v3::Junction::Parachain(2000)]);
		let asset = v3::Multiasset::fungible(v3::Multilocation::new(1, []), 10);

		let message = weight_message::<V3Family>(
			&names(&["WithdrawAsset", "ClearOrigin", "BuyExecution", "DepositReserveAsset"]),
			&location,
			&asset,
		)
		.unwrap();
		assert_eq!(
			message,
			VersionedXcm::V3(vec![
				v3::Instruction::WithdrawAsset(vec![asset.clone()]),
				v3::Instruction::ClearOrigin,
				v3::Instruction::BuyExecution { fees: asset, weight_limit: v3::WeightLimit::Unlimited },
				v3::Instruction::DepositReserveAsset {
					assets: v3::MultiassetFilter::Wild(v3::WildMultiasset::All),
					dest: location,
					xcm: vec![],
				},
			])
		);
	}

	#[test]
	fn legacy_deposits_cap_max_assets() {
		let location = v2::Multilocation::new(0, [v2::Junction::Parachain(1000)]);
		let asset = v2::Multiasset::fungible(v2::Multilocation::here(), 0);

		let message = weight_message::<LegacyFamily>(
			&names(&["ReceiveTeleportedAsset", "DepositAsset"]),
			&location,
			&asset,
		)
		.unwrap();
		assert_eq!(
			message,
			VersionedXcm::V2(vec![
				v2::Instruction::ReceiveTeleportedAsset(vec![asset]),
				v2::Instruction::DepositAsset {
					assets: v2::MultiassetFilter::Wild(v2::WildMultiasset::All),
					max_assets: 1,
					beneficiary: location,
				},
			])
		);
	}

	#[test]
	fn unknown_instruction_fails_the_whole_message() {
		let asset = v3::Multiasset::fungible(v3::Multilocation::here(), 1);
		assert_matches!(
			weight_message::<V3Family>(
				&names(&["WithdrawAsset", "Unknown", "ClearOrigin"]),
				&v3::Multilocation::here(),
				&asset
			),
			Err(Error::UnsupportedInstruction(name)) if name == "Unknown"
		);
	}

	#[test]
	fn empty_list_gives_an_empty_message() {
		let asset = v2::Multiasset::fungible(v2::Multilocation::here(), 1);
		let message = weight_message::<LegacyFamily>(&[], &v2::Multilocation::here(), &asset).unwrap();
		assert!(message.is_empty());
	}
}
