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

//! Version 0 wire form.
//!
//! V0 has no `parents` field: a location is a single list of at most eight junctions where
//! leading `Parent` junctions play the role of the parent count. Assets are a flat enum of
//! concrete/abstract and fungible/non-fungible combinations. The model keeps using the V1/V2
//! types in memory and only converts at the wire boundary.

use super::{AssetId, Fungibility, Junction, Junctions, Multiasset, Multilocation};
use crate::{
	asset_instance::AssetInstance,
	codec::{self, impl_tagged_serde, CodecError, Decoder, TaggedUnion},
	junctions::MAX_JUNCTIONS,
};
use serde::Deserialize;
use serde_json::{json, Value};

const PARENT: &str = "Parent";

/// A [`Multilocation`] travelling in its V0 form.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct V0Multilocation(pub Multilocation);

impl V0Multilocation {
	fn flattened(&self) -> Result<Vec<Value>, CodecError> {
		let location = &self.0;
		let length = location.parents as usize + location.interior.len();
		if length > MAX_JUNCTIONS {
			return Err(CodecError::Payload(format!("{length} junctions don't fit a V0 location")))
		}
		let parents = (0..location.parents).map(|_| Ok(json!([PARENT, null])));
		let interior = location.interior.iter().map(codec::encode);
		parents.chain(interior).collect()
	}

	fn unflattened(items: Vec<Value>) -> Result<Self, CodecError> {
		let mut parents = 0u8;
		let mut interior = Vec::with_capacity(items.len());
		for item in items {
			let (tag, payload) = codec::untag(item)?;
			match (tag.as_str(), interior.is_empty()) {
				(PARENT, true) => parents += 1,
				(PARENT, false) =>
					return Err(CodecError::Payload("`Parent` after an interior junction".into())),
				_ => interior.push(codec::decode::<Junction>(json!([tag, payload]))?),
			}
		}
		let interior: Junctions =
			interior.try_into().map_err(|_| CodecError::Payload("too many junctions".into()))?;
		Ok(Self(Multilocation { parents, interior }))
	}
}

fn decode_flattened(count: usize, payload: Value) -> Result<V0Multilocation, CodecError> {
	let items = if count == 1 { vec![payload] } else { codec::from_payload::<Vec<Value>>(payload)? };
	if items.len() != count {
		return Err(CodecError::Payload(format!("expected {count} junctions, got {}", items.len())))
	}
	V0Multilocation::unflattened(items)
}

impl TaggedUnion for V0Multilocation {
	const VARIANTS: &'static [(&'static str, Decoder<Self>)] = &[
		("Null", |_| Ok(V0Multilocation(Multilocation::here()))),
		("X1", |payload| decode_flattened(1, payload)),
		("X2", |payload| decode_flattened(2, payload)),
		("X3", |payload| decode_flattened(3, payload)),
		("X4", |payload| decode_flattened(4, payload)),
		("X5", |payload| decode_flattened(5, payload)),
		("X6", |payload| decode_flattened(6, payload)),
		("X7", |payload| decode_flattened(7, payload)),
		("X8", |payload| decode_flattened(8, payload)),
	];

	fn to_tagged(&self) -> Result<(&'static str, Value), CodecError> {
		const TAGS: [&str; MAX_JUNCTIONS] = ["X1", "X2", "X3", "X4", "X5", "X6", "X7", "X8"];
		let mut items = self.flattened()?;
		Ok(match items.len() {
			0 => ("Null", Value::Null),
			1 => (TAGS[0], items.remove(0)),
			n => (TAGS[n - 1], Value::Array(items)),
		})
	}
}

/// A [`Multiasset`] travelling in its V0 form.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct V0Multiasset(pub Multiasset);

#[derive(Deserialize)]
struct ConcreteFungiblePayload {
	id: V0Multilocation,
	#[serde(deserialize_with = "codec::stringified::deserialize")]
	amount: u128,
}

#[derive(Deserialize)]
struct AbstractFungiblePayload {
	#[serde(deserialize_with = "codec::hex::deserialize")]
	id: Vec<u8>,
	#[serde(deserialize_with = "codec::stringified::deserialize")]
	amount: u128,
}

#[derive(Deserialize)]
struct ConcreteNonFungiblePayload {
	class: V0Multilocation,
	instance: AssetInstance,
}

#[derive(Deserialize)]
struct AbstractNonFungiblePayload {
	#[serde(deserialize_with = "codec::hex::deserialize")]
	class: Vec<u8>,
	instance: AssetInstance,
}

impl TaggedUnion for V0Multiasset {
	const VARIANTS: &'static [(&'static str, Decoder<Self>)] = &[
		("ConcreteFungible", |payload| {
			let ConcreteFungiblePayload { id, amount } = codec::from_payload(payload)?;
			Ok(V0Multiasset(Multiasset { id: AssetId::Concrete(id.0), fun: Fungibility::Fungible(amount) }))
		}),
		("AbstractFungible", |payload| {
			let AbstractFungiblePayload { id, amount } = codec::from_payload(payload)?;
			Ok(V0Multiasset(Multiasset { id: AssetId::Abstract(id), fun: Fungibility::Fungible(amount) }))
		}),
		("ConcreteNonFungible", |payload| {
			let ConcreteNonFungiblePayload { class, instance } = codec::from_payload(payload)?;
			Ok(V0Multiasset(Multiasset {
				id: AssetId::Concrete(class.0),
				fun: Fungibility::NonFungible(instance),
			}))
		}),
		("AbstractNonFungible", |payload| {
			let AbstractNonFungiblePayload { class, instance } = codec::from_payload(payload)?;
			Ok(V0Multiasset(Multiasset {
				id: AssetId::Abstract(class),
				fun: Fungibility::NonFungible(instance),
			}))
		}),
	];

	fn to_tagged(&self) -> Result<(&'static str, Value), CodecError> {
		let Multiasset { id, fun } = &self.0;
		Ok(match (id, fun) {
			(AssetId::Concrete(location), Fungibility::Fungible(amount)) => (
				"ConcreteFungible",
				json!({
					"id": codec::encode(&V0Multilocation(location.clone()))?,
					"amount": codec::number_to_payload(amount),
				}),
			),
			(AssetId::Abstract(id), Fungibility::Fungible(amount)) => (
				"AbstractFungible",
				json!({ "id": codec::bytes_to_payload(id), "amount": codec::number_to_payload(amount) }),
			),
			(AssetId::Concrete(location), Fungibility::NonFungible(instance)) => (
				"ConcreteNonFungible",
				json!({
					"class": codec::encode(&V0Multilocation(location.clone()))?,
					"instance": codec::encode(instance)?,
				}),
			),
			(AssetId::Abstract(class), Fungibility::NonFungible(instance)) => (
				"AbstractNonFungible",
				json!({ "class": codec::bytes_to_payload(class), "instance": codec::encode(instance)? }),
			),
		})
	}
}

impl_tagged_serde!(V0Multilocation, V0Multiasset);

#[cfg(test)]
mod tests {
	use super::*;
	use crate::v2::NetworkId;
	use serde_json::json;

	#[test]
	fn parents_become_leading_parent_junctions() {
		let location = V0Multilocation(Multilocation::new(1, [Junction::Parachain(2000)]));
		assert_eq!(
			codec::encode(&location).unwrap(),
			json!(["X2", [["Parent", null], ["Parachain", 2000]]])
		);
		assert_eq!(codec::encode(&V0Multilocation(Multilocation::here())), Ok(json!(["Null", null])));
		assert_eq!(
			codec::encode(&V0Multilocation(Multilocation::new(1, []))),
			Ok(json!(["X1", ["Parent", null]]))
		);
	}

	#[test]
	fn flattened_locations_round_trip() {
		for location in [
			Multilocation::here(),
			Multilocation::new(1, []),
			Multilocation::new(0, [Junction::Parachain(1000), Junction::GeneralIndex(8)]),
			Multilocation::new(
				1,
				[Junction::Parachain(2000), Junction::AccountId32 { network: NetworkId::Any, id: [3; 32] }],
			),
		] {
			let encoded = codec::encode(&V0Multilocation(location.clone())).unwrap();
			assert_eq!(codec::decode::<V0Multilocation>(encoded), Ok(V0Multilocation(location)));
		}
	}

	#[test]
	fn parent_inside_interior_is_rejected() {
		let value = json!(["X2", [["Parachain", 1000], ["Parent", null]]]);
		assert!(matches!(codec::decode::<V0Multilocation>(value), Err(CodecError::Payload(_))));
	}

	#[test]
	fn too_deep_for_v0() {
		let interior = vec![Junction::OnlyChild; 7].try_into().unwrap();
		let location = Multilocation { parents: 2, interior };
		assert!(codec::encode(&V0Multilocation(location)).is_err());
	}

	#[test]
	fn assets_use_flat_variants() {
		let asset = Multiasset::fungible(Multilocation::new(1, []), 5);
		assert_eq!(
			codec::encode(&V0Multiasset(asset.clone())).unwrap(),
			json!(["ConcreteFungible", { "id": ["X1", ["Parent", null]], "amount": "5" }])
		);

		for asset in [
			asset,
			Multiasset { id: AssetId::Abstract(b"KSM".to_vec()), fun: Fungibility::Fungible(0) },
			Multiasset {
				id: AssetId::Concrete(Multilocation::here()),
				fun: Fungibility::NonFungible(AssetInstance::Index(1)),
			},
			Multiasset {
				id: AssetId::Abstract(vec![1, 2]),
				fun: Fungibility::NonFungible(AssetInstance::Undefined),
			},
		] {
			let encoded = codec::encode(&V0Multiasset(asset.clone())).unwrap();
			assert_eq!(codec::decode::<V0Multiasset>(encoded), Ok(V0Multiasset(asset)));
		}
	}
}
