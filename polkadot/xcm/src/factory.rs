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

//! Versioned locations and assets of a transfer.

use crate::{
	chain::{ChainAsset, ChainModel, XcmTransferDestination, XcmTransferReserve},
	config::{ReservePath, XcmAssetTransfer, XcmTransfers},
	family::XcmFamily,
	location, reserve,
	versioned::{VersionedMultiasset, VersionedMultilocation},
	with_family, Error, XcmVersion, LOG_TARGET,
};

/// Everything a transfer is built from.
#[derive(Clone, Debug)]
pub struct XcmMultilocationAssetParams<'a> {
	pub origin: ChainAsset,
	pub reserve: XcmTransferReserve,
	pub destination: XcmTransferDestination,
	pub amount: u128,
	pub xcm_transfers: &'a XcmTransfers,
}

/// Versions to build the destination location and the asset in, chosen independently.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct XcmMultilocationAssetVersion {
	pub multi_location: Option<XcmVersion>,
	pub multi_assets: Option<XcmVersion>,
}

impl XcmMultilocationAssetVersion {
	/// Both parts in `version`.
	pub fn uniform(version: Option<XcmVersion>) -> Self {
		Self { multi_location: version, multi_assets: version }
	}
}

/// Destination location and asset of a transfer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct XcmMultilocationAsset {
	pub location: VersionedMultilocation,
	pub asset: VersionedMultiasset,
}

/// Configured route and reserve of the transferred asset.
pub(crate) struct Route<'a> {
	pub transfer: &'a XcmAssetTransfer,
	pub reserve_path: ReservePath,
}

impl<'a> XcmMultilocationAssetParams<'a> {
	/// Look up the route and the reserve of the asset, in that order.
	pub(crate) fn route(&self) -> Result<Route<'a>, Error> {
		let transfers = self.xcm_transfers;
		let chain_asset_id = self.origin.chain_asset_id();
		let transfer = transfers
			.transfer(&chain_asset_id, &self.destination.chain().chain_id)
			.ok_or_else(|| Error::NoDestinationAssetFound(chain_asset_id.clone()))
			.inspect_err(|error| tracing::debug!(target: LOG_TARGET, ?error, "No transfer route"))?;
		let reserve_path = transfers
			.reserve_path(&chain_asset_id)
			.ok_or(Error::NoReserve(chain_asset_id))
			.inspect_err(|error| tracing::debug!(target: LOG_TARGET, ?error, "No reserve path"))?;
		Ok(Route { transfer, reserve_path })
	}
}

/// Builds the versioned locations and assets of transfers.
///
/// Stateless: every call builds its values from scratch in the format of the requested version.
#[derive(Copy, Clone, Debug, Default)]
pub struct XcmModelFactory;

impl XcmModelFactory {
	pub fn new() -> Self {
		Self
	}

	/// The recipient of a transfer as seen from `origin`.
	pub fn create_versioned_destination_location(
		&self,
		origin: &ChainModel,
		destination: &XcmTransferDestination,
		version: Option<XcmVersion>,
	) -> VersionedMultilocation {
		tracing::trace!(target: LOG_TARGET, ?version, ?destination, "create_versioned_destination_location");
		with_family!(version, F => {
			F::versioned_location(location::destination_location::<F>(origin, destination), version)
		})
	}

	/// The reserve chain as seen from `origin`.
	pub fn create_versioned_reserve_location(
		&self,
		origin: &ChainModel,
		reserve: &XcmTransferReserve,
		version: Option<XcmVersion>,
	) -> VersionedMultilocation {
		tracing::trace!(target: LOG_TARGET, ?version, ?reserve, "create_versioned_reserve_location");
		with_family!(version, F => {
			F::versioned_location(location::reserve_location::<F>(origin, reserve), version)
		})
	}

	/// `amount` of the asset at `reserve_path`, as seen from `origin`.
	pub fn create_versioned_multiasset(
		&self,
		origin: &ChainModel,
		reserve: &ChainModel,
		reserve_path: &ReservePath,
		amount: u128,
		version: Option<XcmVersion>,
	) -> Result<VersionedMultiasset, Error> {
		tracing::trace!(target: LOG_TARGET, ?version, ?reserve_path, amount, "create_versioned_multiasset");
		with_family!(version, F => {
			let asset = reserve::multiasset::<F>(origin, reserve, reserve_path, amount)?;
			Ok(F::versioned_asset(asset, version))
		})
	}

	/// Destination location and asset of the transfer described by `params`.
	///
	/// Fails before building anything when the asset has no route to the destination chain or no
	/// reserve.
	pub fn create_multilocation_asset(
		&self,
		params: &XcmMultilocationAssetParams,
		version: XcmMultilocationAssetVersion,
	) -> Result<XcmMultilocationAsset, Error> {
		tracing::trace!(
			target: LOG_TARGET,
			?version,
			origin = %params.origin.chain_asset_id(),
			"create_multilocation_asset",
		);
		let route = params.route()?;
		let location = self.create_versioned_destination_location(
			&params.origin.chain,
			&params.destination,
			version.multi_location,
		);
		let asset = self.create_versioned_multiasset(
			&params.origin.chain,
			&params.reserve.chain,
			&route.reserve_path,
			params.amount,
			version.multi_assets,
		)?;
		Ok(XcmMultilocationAsset { location, asset })
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{
		chain::AccountId,
		config::{LocationType, XcmAssetPath},
		v2, v3,
	};

	fn usdt() -> ReservePath {
		ReservePath {
			location_type: LocationType::Absolute,
			path: XcmAssetPath {
				parachain_id: Some(1000),
				pallet_instance: Some(50),
				general_index: Some("1984".into()),
				..Default::default()
			},
		}
	}

	#[test]
	fn version_selects_the_format() {
		let factory = XcmModelFactory::new();
		let origin = ChainModel::relaychain("polkadot");
		let destination =
			XcmTransferDestination::new(ChainModel::parachain("acala"), Some(2000), AccountId::Id32([8; 32]))
				.unwrap();

		for (version, expected) in [
			(None, XcmVersion::V1),
			(Some(XcmVersion::V0), XcmVersion::V0),
			(Some(XcmVersion::V1), XcmVersion::V1),
			(Some(XcmVersion::V2), XcmVersion::V2),
			(Some(XcmVersion::V3), XcmVersion::V3),
		] {
			let location = factory.create_versioned_destination_location(&origin, &destination, version);
			assert_eq!(location.version(), expected);
			let asset = factory
				.create_versioned_multiasset(&origin, destination.chain(), &usdt(), 1, version)
				.unwrap();
			assert_eq!(asset.version(), expected);
		}
	}

	#[test]
	fn reserve_location_per_version() {
		let factory = XcmModelFactory::new();
		let origin = ChainModel::parachain("acala");
		let reserve = XcmTransferReserve::new(ChainModel::parachain("statemint"), Some(1000));

		assert_eq!(
			factory.create_versioned_reserve_location(&origin, &reserve, Some(XcmVersion::V3)),
			VersionedMultilocation::V3(v3::Multilocation::new(1, [v3::Junction::Parachain(1000)]))
		);
		assert_eq!(
			factory.create_versioned_reserve_location(&origin, &reserve, Some(XcmVersion::V2)),
			VersionedMultilocation::V2(v2::Multilocation::new(1, [v2::Junction::Parachain(1000)]))
		);
	}
}
