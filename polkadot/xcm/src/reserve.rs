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

//! Interpretation of configured asset paths.

use crate::{
	chain::ChainModel,
	codec,
	config::{LocationType, ReservePath, XcmAssetPath},
	family::{Location, XcmFamily},
	junctions::{Junctions, Multilocation},
	Error, LOG_TARGET,
};

/// Junctions of the asset inside its reserve chain: pallet instance, then the general key or,
/// without one, the general index.
fn relative_junctions<F: XcmFamily>(path: &XcmAssetPath) -> Result<Junctions<F::Junction>, Error> {
	let mut junctions = Junctions::here();
	if let Some(index) = path.pallet_instance {
		junctions = junctions.pushing(F::pallet_instance(index))?;
	}
	if let Some(key) = &path.general_key {
		let key = codec::hex_decode(key).map_err(|e| Error::corrupted(format!("general key: {e}")))?;
		junctions = junctions.pushing(F::general_key(&key)?)?;
	} else if let Some(index) = &path.general_index {
		let index = index
			.parse::<u128>()
			.map_err(|e| Error::corrupted(format!("general index `{index}`: {e}")))?;
		junctions = junctions.pushing(F::general_index(index))?;
	}
	Ok(junctions)
}

/// [`relative_junctions`] headed by the reserve parachain, if the path names one.
fn absolute_junctions<F: XcmFamily>(path: &XcmAssetPath) -> Result<Junctions<F::Junction>, Error> {
	let junctions = relative_junctions::<F>(path)?;
	match path.parachain_id {
		Some(id) => junctions.prepending(F::parachain(id)),
		None => Ok(junctions),
	}
}

fn parents(path: &XcmAssetPath, location_type: LocationType, origin: &ChainModel, reserve: &ChainModel) -> u8 {
	match location_type {
		LocationType::Absolute => u8::from(!origin.is_relaychain),
		LocationType::Relative =>
			u8::from(origin.chain_id != reserve.chain_id && !origin.is_relaychain),
		LocationType::Concrete => path.parents.unwrap_or(0),
	}
}

/// Location of the asset described by `path`, as seen from `origin`.
///
/// A relative path is only relative when `origin` is the reserve chain itself. From any other
/// chain the absolute junctions are used instead.
pub fn asset_location<F: XcmFamily>(
	path: &XcmAssetPath,
	location_type: LocationType,
	origin: &ChainModel,
	reserve: &ChainModel,
) -> Result<Location<F>, Error> {
	let parents = parents(path, location_type, origin, reserve);
	let interior = match location_type {
		LocationType::Absolute | LocationType::Concrete => absolute_junctions::<F>(path),
		LocationType::Relative if origin.chain_id == reserve.chain_id => relative_junctions::<F>(path),
		LocationType::Relative => absolute_junctions::<F>(path),
	}
	.inspect_err(|error| {
		tracing::debug!(target: LOG_TARGET, ?error, ?path, family = F::NAME, "Invalid asset path");
	})?;
	Ok(Multilocation { parents, interior })
}

/// `amount` of the asset at `reserve_path`, as seen from `origin`.
pub fn multiasset<F: XcmFamily>(
	origin: &ChainModel,
	reserve: &ChainModel,
	reserve_path: &ReservePath,
	amount: u128,
) -> Result<F::Multiasset, Error> {
	let location = asset_location::<F>(&reserve_path.path, reserve_path.location_type, origin, reserve)?;
	Ok(F::fungible_asset(location, amount))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{
		family::{LegacyFamily, V3Family},
		v2, v3,
	};
	use assert_matches::assert_matches;

	fn statemint() -> ChainModel {
		ChainModel::parachain("statemint")
	}

	fn usdt_path() -> XcmAssetPath {
		XcmAssetPath {
			parachain_id: Some(1000),
			pallet_instance: Some(50),
			general_index: Some("1984".into()),
			..Default::default()
		}
	}

	#[test]
	fn absolute_paths_start_at_the_relay_chain() {
		let expected_interior = [
			v3::Junction::Parachain(1000),
			v3::Junction::PalletInstance(50),
			v3::Junction::GeneralIndex(1984),
		];
		let from_relay = asset_location::<V3Family>(
			&usdt_path(),
			LocationType::Absolute,
			&ChainModel::relaychain("polkadot"),
			&statemint(),
		)
		.unwrap();
		assert_eq!(from_relay, v3::Multilocation::new(0, expected_interior.clone()));

		let from_reserve =
			asset_location::<V3Family>(&usdt_path(), LocationType::Absolute, &statemint(), &statemint())
				.unwrap();
		assert_eq!(from_reserve, v3::Multilocation::new(1, expected_interior));
	}

	#[test]
	fn relative_paths_on_the_reserve_chain() {
		let path = XcmAssetPath { general_index: Some("42".into()), ..Default::default() };
		let location =
			asset_location::<V3Family>(&path, LocationType::Relative, &statemint(), &statemint()).unwrap();
		assert_eq!(location, v3::Multilocation::new(0, [v3::Junction::GeneralIndex(42)]));

		let relay = ChainModel::relaychain("polkadot");
		let location = asset_location::<LegacyFamily>(&path, LocationType::Relative, &relay, &relay).unwrap();
		assert_eq!(location, v2::Multilocation::new(0, [v2::Junction::GeneralIndex(42)]));
	}

	#[test]
	fn relative_paths_elsewhere_fall_back_to_absolute_junctions() {
		let origin = ChainModel::parachain("acala");
		let location =
			asset_location::<V3Family>(&usdt_path(), LocationType::Relative, &origin, &statemint()).unwrap();
		assert_eq!(
			location,
			v3::Multilocation::new(
				1,
				[
					v3::Junction::Parachain(1000),
					v3::Junction::PalletInstance(50),
					v3::Junction::GeneralIndex(1984)
				]
			)
		);

		let relay = ChainModel::relaychain("polkadot");
		let location =
			asset_location::<V3Family>(&usdt_path(), LocationType::Relative, &relay, &statemint()).unwrap();
		assert_eq!(location.parents, 0);
		assert_eq!(location.interior.first(), Some(&v3::Junction::Parachain(1000)));
	}

	#[test]
	fn concrete_paths_keep_their_parents() {
		let path = XcmAssetPath { parents: Some(1), ..Default::default() };
		let location = asset_location::<LegacyFamily>(
			&path,
			LocationType::Concrete,
			&ChainModel::relaychain("polkadot"),
			&statemint(),
		)
		.unwrap();
		assert_eq!(location, v2::Multilocation::new(1, []));

		let path = XcmAssetPath { parachain_id: Some(2000), ..Default::default() };
		let location =
			asset_location::<V3Family>(&path, LocationType::Concrete, &statemint(), &statemint()).unwrap();
		assert_eq!(location, v3::Multilocation::new(0, [v3::Junction::Parachain(2000)]));
	}

	#[test]
	fn general_key_wins_over_general_index() {
		let path = XcmAssetPath {
			general_key: Some("0x0080".into()),
			general_index: Some("not-a-number".into()),
			..Default::default()
		};
		let location =
			asset_location::<LegacyFamily>(&path, LocationType::Relative, &statemint(), &statemint())
				.unwrap();
		assert_eq!(location, v2::Multilocation::new(0, [v2::Junction::GeneralKey(vec![0, 128])]));

		let location =
			asset_location::<V3Family>(&path, LocationType::Relative, &statemint(), &statemint()).unwrap();
		assert_eq!(
			location,
			v3::Multilocation::new(0, [v3::Junction::general_key(&[0, 128]).unwrap()])
		);
	}

	#[test]
	fn malformed_paths_are_data_corruption() {
		let path = XcmAssetPath { general_index: Some("not-a-number".into()), ..Default::default() };
		assert_matches!(
			asset_location::<V3Family>(&path, LocationType::Relative, &statemint(), &statemint()),
			Err(Error::DataCorruption(_))
		);

		let path = XcmAssetPath { general_key: Some("0xzz".into()), ..Default::default() };
		assert_matches!(
			asset_location::<LegacyFamily>(&path, LocationType::Absolute, &statemint(), &statemint()),
			Err(Error::DataCorruption(_))
		);

		let path = XcmAssetPath { general_key: Some(format!("0x{}", "01".repeat(33))), ..Default::default() };
		assert_matches!(
			asset_location::<V3Family>(&path, LocationType::Absolute, &statemint(), &statemint()),
			Err(Error::DataCorruption(_))
		);
	}

	#[test]
	fn multiasset_clamps_only_in_v3() {
		let reserve_path = ReservePath { location_type: LocationType::Concrete, path: Default::default() };
		let origin = statemint();
		assert_eq!(
			multiasset::<V3Family>(&origin, &origin, &reserve_path, 0).unwrap().fun,
			v3::Fungibility::Fungible(1)
		);
		assert_eq!(
			multiasset::<LegacyFamily>(&origin, &origin, &reserve_path, 0).unwrap().fun,
			v2::Fungibility::Fungible(0)
		);
	}
}
