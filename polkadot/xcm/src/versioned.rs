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

//! Version-tagged wrappers around the model types.
//!
//! The tag travels with the value (`["V3", {...}]`) so the receiving runtime knows which wire
//! layout to decode. V0, V1 and V2 share the pre-V3 types; V0 additionally uses the flattened
//! form of [`crate::v2::v0`].

use crate::{
	codec::{self, impl_tagged_serde, CodecError, Decoder, TaggedUnion},
	v2::{
		self,
		v0::{V0Multiasset, V0Multilocation},
	},
	v3, XcmVersion,
};
use serde_json::Value;

/// A single location in one of the supported versions.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum VersionedMultilocation {
	V0(v2::Multilocation),
	V1(v2::Multilocation),
	V2(v2::Multilocation),
	V3(v3::Multilocation),
}

impl VersionedMultilocation {
	pub fn version(&self) -> XcmVersion {
		match self {
			Self::V0(_) => XcmVersion::V0,
			Self::V1(_) => XcmVersion::V1,
			Self::V2(_) => XcmVersion::V2,
			Self::V3(_) => XcmVersion::V3,
		}
	}

	/// Split a full destination into the destination chain and the beneficiary on it, both
	/// tagged with the version of `self`.
	///
	/// Returns `None` for a location without interior junctions.
	pub fn split_destination_beneficiary(self) -> Option<(Self, Self)> {
		Some(match self {
			Self::V0(location) => {
				let (dest, beneficiary) = location.split_destination_beneficiary()?;
				(Self::V0(dest), Self::V0(beneficiary))
			},
			Self::V1(location) => {
				let (dest, beneficiary) = location.split_destination_beneficiary()?;
				(Self::V1(dest), Self::V1(beneficiary))
			},
			Self::V2(location) => {
				let (dest, beneficiary) = location.split_destination_beneficiary()?;
				(Self::V2(dest), Self::V2(beneficiary))
			},
			Self::V3(location) => {
				let (dest, beneficiary) = location.split_destination_beneficiary()?;
				(Self::V3(dest), Self::V3(beneficiary))
			},
		})
	}
}

impl TaggedUnion for VersionedMultilocation {
	const VARIANTS: &'static [(&'static str, Decoder<Self>)] = &[
		("V0", |payload| Ok(VersionedMultilocation::V0(codec::decode::<V0Multilocation>(payload)?.0))),
		("V1", |payload| Ok(VersionedMultilocation::V1(codec::from_payload(payload)?))),
		("V2", |payload| Ok(VersionedMultilocation::V2(codec::from_payload(payload)?))),
		("V3", |payload| Ok(VersionedMultilocation::V3(codec::from_payload(payload)?))),
	];

	fn to_tagged(&self) -> Result<(&'static str, Value), CodecError> {
		Ok(match self {
			Self::V0(location) => ("V0", codec::encode(&V0Multilocation(location.clone()))?),
			Self::V1(location) => ("V1", codec::to_payload(location)?),
			Self::V2(location) => ("V2", codec::to_payload(location)?),
			Self::V3(location) => ("V3", codec::to_payload(location)?),
		})
	}
}

/// A single asset in one of the supported versions.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum VersionedMultiasset {
	V0(v2::Multiasset),
	V1(v2::Multiasset),
	V2(v2::Multiasset),
	V3(v3::Multiasset),
}

impl VersionedMultiasset {
	pub fn version(&self) -> XcmVersion {
		match self {
			Self::V0(_) => XcmVersion::V0,
			Self::V1(_) => XcmVersion::V1,
			Self::V2(_) => XcmVersion::V2,
			Self::V3(_) => XcmVersion::V3,
		}
	}
}

impl TaggedUnion for VersionedMultiasset {
	const VARIANTS: &'static [(&'static str, Decoder<Self>)] = &[
		("V0", |payload| Ok(VersionedMultiasset::V0(codec::decode::<V0Multiasset>(payload)?.0))),
		("V1", |payload| Ok(VersionedMultiasset::V1(codec::from_payload(payload)?))),
		("V2", |payload| Ok(VersionedMultiasset::V2(codec::from_payload(payload)?))),
		("V3", |payload| Ok(VersionedMultiasset::V3(codec::from_payload(payload)?))),
	];

	fn to_tagged(&self) -> Result<(&'static str, Value), CodecError> {
		Ok(match self {
			Self::V0(asset) => ("V0", codec::encode(&V0Multiasset(asset.clone()))?),
			Self::V1(asset) => ("V1", codec::to_payload(asset)?),
			Self::V2(asset) => ("V2", codec::to_payload(asset)?),
			Self::V3(asset) => ("V3", codec::to_payload(asset)?),
		})
	}
}

/// A list of assets in one of the supported versions.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum VersionedMultiassets {
	V0(v2::Multiassets),
	V1(v2::Multiassets),
	V2(v2::Multiassets),
	V3(v3::Multiassets),
}

impl From<VersionedMultiasset> for VersionedMultiassets {
	fn from(asset: VersionedMultiasset) -> Self {
		match asset {
			VersionedMultiasset::V0(asset) => Self::V0(vec![asset]),
			VersionedMultiasset::V1(asset) => Self::V1(vec![asset]),
			VersionedMultiasset::V2(asset) => Self::V2(vec![asset]),
			VersionedMultiasset::V3(asset) => Self::V3(vec![asset]),
		}
	}
}

impl TaggedUnion for VersionedMultiassets {
	const VARIANTS: &'static [(&'static str, Decoder<Self>)] = &[
		("V0", |payload| {
			let assets: Vec<V0Multiasset> = codec::from_payload(payload)?;
			Ok(VersionedMultiassets::V0(assets.into_iter().map(|asset| asset.0).collect()))
		}),
		("V1", |payload| Ok(VersionedMultiassets::V1(codec::from_payload(payload)?))),
		("V2", |payload| Ok(VersionedMultiassets::V2(codec::from_payload(payload)?))),
		("V3", |payload| Ok(VersionedMultiassets::V3(codec::from_payload(payload)?))),
	];

	fn to_tagged(&self) -> Result<(&'static str, Value), CodecError> {
		Ok(match self {
			Self::V0(assets) => {
				let flat: Vec<_> = assets.iter().cloned().map(V0Multiasset).collect();
				("V0", codec::to_payload(&flat)?)
			},
			Self::V1(assets) => ("V1", codec::to_payload(assets)?),
			Self::V2(assets) => ("V2", codec::to_payload(assets)?),
			Self::V3(assets) => ("V3", codec::to_payload(assets)?),
		})
	}
}

/// A message in one of the versions instructions are built for.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum VersionedXcm {
	V2(v2::Xcm),
	V3(v3::Xcm),
}

impl VersionedXcm {
	pub fn len(&self) -> usize {
		match self {
			Self::V2(xcm) => xcm.len(),
			Self::V3(xcm) => xcm.len(),
		}
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

impl TaggedUnion for VersionedXcm {
	const VARIANTS: &'static [(&'static str, Decoder<Self>)] = &[
		("V2", |payload| Ok(VersionedXcm::V2(codec::from_payload(payload)?))),
		("V3", |payload| Ok(VersionedXcm::V3(codec::from_payload(payload)?))),
	];

	fn to_tagged(&self) -> Result<(&'static str, Value), CodecError> {
		Ok(match self {
			Self::V2(xcm) => ("V2", codec::to_payload(xcm)?),
			Self::V3(xcm) => ("V3", codec::to_payload(xcm)?),
		})
	}
}

impl_tagged_serde!(VersionedMultilocation, VersionedMultiasset, VersionedMultiassets, VersionedXcm);

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	fn v2_destination() -> v2::Multilocation {
		v2::Multilocation::new(
			1,
			[
				v2::Junction::Parachain(2000),
				v2::Junction::AccountId32 { network: v2::NetworkId::Any, id: [1; 32] },
			],
		)
	}

	#[test]
	fn version_tag_wraps_the_payload() {
		let location = VersionedMultilocation::V3(v3::Multilocation::new(1, []));
		assert_eq!(
			serde_json::to_value(&location).unwrap(),
			json!(["V3", { "parents": 1, "interior": ["Here", null] }])
		);

		let location = VersionedMultilocation::V0(v2::Multilocation::new(1, []));
		assert_eq!(serde_json::to_value(&location).unwrap(), json!(["V0", ["X1", ["Parent", null]]]));
	}

	#[test]
	fn versioned_values_round_trip() {
		let asset = v2::Multiasset::fungible(v2_destination(), 0);
		for location in [
			VersionedMultilocation::V0(v2_destination()),
			VersionedMultilocation::V1(v2_destination()),
			VersionedMultilocation::V2(v2_destination()),
			VersionedMultilocation::V3(v3::Multilocation::new(0, [v3::Junction::Parachain(1)])),
		] {
			let encoded = codec::encode(&location).unwrap();
			assert_eq!(codec::decode::<VersionedMultilocation>(encoded), Ok(location));
		}
		for assets in [
			VersionedMultiassets::V0(vec![asset.clone(), asset.clone()]),
			VersionedMultiassets::V2(vec![asset]),
			VersionedMultiassets::V3(vec![v3::Multiasset::fungible(v3::Multilocation::here(), 5)]),
		] {
			let encoded = codec::encode(&assets).unwrap();
			assert_eq!(codec::decode::<VersionedMultiassets>(encoded), Ok(assets));
		}
	}

	#[test]
	fn single_asset_becomes_list_of_same_version() {
		let asset = v3::Multiasset::fungible(v3::Multilocation::here(), 5);
		assert_eq!(
			VersionedMultiassets::from(VersionedMultiasset::V3(asset.clone())),
			VersionedMultiassets::V3(vec![asset])
		);
	}

	#[test]
	fn split_keeps_version() {
		let (dest, beneficiary) = VersionedMultilocation::V1(v2_destination())
			.split_destination_beneficiary()
			.unwrap();
		assert_eq!(dest, VersionedMultilocation::V1(v2::Multilocation::new(1, [v2::Junction::Parachain(2000)])));
		assert_eq!(beneficiary.version(), XcmVersion::V1);
		assert_eq!(
			beneficiary,
			VersionedMultilocation::V1(v2::Multilocation::new(
				0,
				[v2::Junction::AccountId32 { network: v2::NetworkId::Any, id: [1; 32] }]
			))
		);

		assert!(VersionedMultilocation::V3(v3::Multilocation::new(1, []))
			.split_destination_beneficiary()
			.is_none());
	}
}
