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

//! Pre-V3 asset data structures.

use super::Multilocation;
use crate::{
	asset_instance::{AssetInstance, WildFungibility},
	codec::{self, impl_tagged_serde, CodecError, Decoder, TaggedUnion},
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Classification of an asset being concrete or abstract.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum AssetId {
	/// A specific location identifying the asset.
	Concrete(Multilocation),
	/// An abstract identifier, only meaningful to the parties that agree on it.
	Abstract(Vec<u8>),
}

impl TaggedUnion for AssetId {
	const VARIANTS: &'static [(&'static str, Decoder<Self>)] = &[
		("Concrete", |payload| Ok(AssetId::Concrete(codec::from_payload(payload)?))),
		("Abstract", |payload| Ok(AssetId::Abstract(codec::bytes_from_payload(payload)?))),
	];

	fn to_tagged(&self) -> Result<(&'static str, Value), CodecError> {
		Ok(match self {
			AssetId::Concrete(location) => ("Concrete", codec::to_payload(location)?),
			AssetId::Abstract(id) => ("Abstract", codec::bytes_to_payload(id)),
		})
	}
}

/// Classification of whether an asset is fungible or not, along with a mandatory amount or
/// instance.
///
/// Pre-V3 formats let zero amounts through.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Fungibility {
	/// A fungible asset; we record a number of units, as a `u128` in the inner item.
	Fungible(u128),
	/// A non-fungible asset. We record the instance identifier in the inner item.
	NonFungible(AssetInstance),
}

impl TaggedUnion for Fungibility {
	const VARIANTS: &'static [(&'static str, Decoder<Self>)] = &[
		("Fungible", |payload| Ok(Fungibility::Fungible(codec::number_from_payload(payload)?))),
		("NonFungible", |payload| Ok(Fungibility::NonFungible(codec::decode(payload)?))),
	];

	fn to_tagged(&self) -> Result<(&'static str, Value), CodecError> {
		Ok(match self {
			Fungibility::Fungible(amount) => ("Fungible", codec::number_to_payload(amount)),
			Fungibility::NonFungible(instance) => ("NonFungible", codec::encode(instance)?),
		})
	}
}

/// Either an amount of a single fungible asset, or a single well-identified non-fungible asset.
#[derive(Clone, Eq, PartialEq, Debug, Serialize, Deserialize)]
pub struct Multiasset {
	/// The overall asset identity (aka *class*, in the case of a non-fungible).
	pub id: AssetId,
	/// The fungibility of the asset, which contains either the amount (in the case of a fungible
	/// asset) or the *instance ID*, the secondary asset identifier.
	pub fun: Fungibility,
}

impl Multiasset {
	/// `amount` units of the asset living at `location`.
	pub fn fungible(location: Multilocation, amount: u128) -> Self {
		Self { id: AssetId::Concrete(location), fun: Fungibility::Fungible(amount) }
	}
}

/// An ordered list of assets.
pub type Multiassets = Vec<Multiasset>;

/// A wildcard representing a set of assets.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum WildMultiasset {
	/// All assets in the holding register.
	All,
	/// All assets in the holding register of a given fungibility and ID.
	AllOf { id: AssetId, fun: WildFungibility },
}

#[derive(Deserialize)]
struct AllOfPayload {
	id: AssetId,
	fun: WildFungibility,
}

impl TaggedUnion for WildMultiasset {
	const VARIANTS: &'static [(&'static str, Decoder<Self>)] = &[
		("All", |_| Ok(WildMultiasset::All)),
		("AllOf", |payload| {
			let AllOfPayload { id, fun } = codec::from_payload(payload)?;
			Ok(WildMultiasset::AllOf { id, fun })
		}),
	];

	fn to_tagged(&self) -> Result<(&'static str, Value), CodecError> {
		Ok(match self {
			WildMultiasset::All => ("All", Value::Null),
			WildMultiasset::AllOf { id, fun } =>
				("AllOf", json!({ "id": codec::encode(id)?, "fun": codec::encode(fun)? })),
		})
	}
}

/// `Multiasset` collection, defined either by a number of `Multiasset`s or a single wildcard.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum MultiassetFilter {
	/// Specify the filter as being everything contained by the given `Multiassets` inner.
	Definite(Multiassets),
	/// Specify the filter as the given `WildMultiasset` wildcard.
	Wild(WildMultiasset),
}

impl TaggedUnion for MultiassetFilter {
	const VARIANTS: &'static [(&'static str, Decoder<Self>)] = &[
		("Definite", |payload| Ok(MultiassetFilter::Definite(codec::from_payload(payload)?))),
		("Wild", |payload| Ok(MultiassetFilter::Wild(codec::decode(payload)?))),
	];

	fn to_tagged(&self) -> Result<(&'static str, Value), CodecError> {
		Ok(match self {
			MultiassetFilter::Definite(assets) => ("Definite", codec::to_payload(assets)?),
			MultiassetFilter::Wild(wild) => ("Wild", codec::encode(wild)?),
		})
	}
}

impl_tagged_serde!(AssetId, Fungibility, WildMultiasset, MultiassetFilter);
