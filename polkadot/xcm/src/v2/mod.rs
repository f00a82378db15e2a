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

//! Pre-V3 Cross-Consensus Message format data structures.
//!
//! V1 and V2 share these types on the wire. V0 reuses them too, but flattens locations into a
//! single junction list (see [`v0`]).

use crate::codec::{self, impl_tagged_serde, CodecError, Decoder, TaggedUnion};
use serde::Deserialize;
use serde_json::{json, Value};

mod asset;
mod instruction;
pub mod v0;

pub use asset::{AssetId, Fungibility, Multiasset, MultiassetFilter, Multiassets, WildMultiasset};
pub use instruction::{Instruction, WeightLimit, Xcm};

/// Interior junctions of a pre-V3 location.
pub type Junctions = crate::junctions::Junctions<Junction>;

/// A pre-V3 relative location.
pub type Multilocation = crate::junctions::Multilocation<Junction>;

/// A global identifier of an account-bearing consensus system.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum NetworkId {
	/// Unidentified/any.
	Any,
	/// Some named network.
	Named(Vec<u8>),
	/// The Polkadot Relay chain
	Polkadot,
	/// Kusama.
	Kusama,
	/// A network this crate does not know about. Decoded for tolerance, never encoded.
	Unsupported(String),
}

impl TaggedUnion for NetworkId {
	const VARIANTS: &'static [(&'static str, Decoder<Self>)] = &[
		("Any", |_| Ok(NetworkId::Any)),
		("Named", |payload| Ok(NetworkId::Named(codec::bytes_from_payload(payload)?))),
		("Polkadot", |_| Ok(NetworkId::Polkadot)),
		("Kusama", |_| Ok(NetworkId::Kusama)),
	];

	fn to_tagged(&self) -> Result<(&'static str, Value), CodecError> {
		use NetworkId::*;
		Ok(match self {
			Any => ("Any", Value::Null),
			Named(name) => ("Named", codec::bytes_to_payload(name)),
			Polkadot => ("Polkadot", Value::Null),
			Kusama => ("Kusama", Value::Null),
			Unsupported(tag) => return Err(CodecError::UnsupportedNetwork(tag.clone())),
		})
	}

	fn from_unknown(tag: String, _payload: Value) -> Result<Self, CodecError> {
		Ok(NetworkId::Unsupported(tag))
	}
}

/// A single item in a path to describe the relative location of a consensus system.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Junction {
	/// An indexed parachain belonging to and operated by the context.
	Parachain(u32),
	/// A 32-byte identifier for an account of a specific network that is respected as a
	/// sovereign endpoint within the context.
	AccountId32 { network: NetworkId, id: [u8; 32] },
	/// An 8-byte index for an account of a specific network that is respected as a sovereign
	/// endpoint within the context.
	AccountIndex64 { network: NetworkId, index: u64 },
	/// A 20-byte identifier for an account of a specific network that is respected as a
	/// sovereign endpoint within the context.
	AccountKey20 { network: NetworkId, key: [u8; 20] },
	/// An instanced, indexed pallet that forms a constituent part of the context.
	PalletInstance(u8),
	/// A non-descript index within the context location.
	GeneralIndex(u128),
	/// A nondescript datum acting as a key within the context location.
	GeneralKey(Vec<u8>),
	/// The unambiguous child.
	OnlyChild,
}

#[derive(Deserialize)]
struct AccountId32Payload {
	network: NetworkId,
	#[serde(deserialize_with = "codec::hex::deserialize")]
	id: [u8; 32],
}

#[derive(Deserialize)]
struct AccountIndex64Payload {
	network: NetworkId,
	#[serde(deserialize_with = "codec::stringified::deserialize")]
	index: u64,
}

#[derive(Deserialize)]
struct AccountKey20Payload {
	network: NetworkId,
	#[serde(deserialize_with = "codec::hex::deserialize")]
	key: [u8; 20],
}

impl TaggedUnion for Junction {
	const VARIANTS: &'static [(&'static str, Decoder<Self>)] = &[
		("Parachain", |payload| Ok(Junction::Parachain(codec::from_payload(payload)?))),
		("AccountId32", |payload| {
			let AccountId32Payload { network, id } = codec::from_payload(payload)?;
			Ok(Junction::AccountId32 { network, id })
		}),
		("AccountIndex64", |payload| {
			let AccountIndex64Payload { network, index } = codec::from_payload(payload)?;
			Ok(Junction::AccountIndex64 { network, index })
		}),
		("AccountKey20", |payload| {
			let AccountKey20Payload { network, key } = codec::from_payload(payload)?;
			Ok(Junction::AccountKey20 { network, key })
		}),
		("PalletInstance", |payload| Ok(Junction::PalletInstance(codec::from_payload(payload)?))),
		("GeneralIndex", |payload| Ok(Junction::GeneralIndex(codec::number_from_payload(payload)?))),
		("GeneralKey", |payload| Ok(Junction::GeneralKey(codec::bytes_from_payload(payload)?))),
		("OnlyChild", |_| Ok(Junction::OnlyChild)),
	];

	fn to_tagged(&self) -> Result<(&'static str, Value), CodecError> {
		use Junction::*;
		Ok(match self {
			Parachain(id) => ("Parachain", json!(id)),
			AccountId32 { network, id } => (
				"AccountId32",
				json!({ "network": codec::encode(network)?, "id": codec::bytes_to_payload(id) }),
			),
			AccountIndex64 { network, index } => (
				"AccountIndex64",
				json!({ "network": codec::encode(network)?, "index": codec::number_to_payload(index) }),
			),
			AccountKey20 { network, key } => (
				"AccountKey20",
				json!({ "network": codec::encode(network)?, "key": codec::bytes_to_payload(key) }),
			),
			PalletInstance(index) => ("PalletInstance", json!(index)),
			GeneralIndex(index) => ("GeneralIndex", codec::number_to_payload(index)),
			GeneralKey(key) => ("GeneralKey", codec::bytes_to_payload(key)),
			OnlyChild => ("OnlyChild", Value::Null),
		})
	}
}

impl_tagged_serde!(NetworkId, Junction);

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn junctions_round_trip() {
		for junction in [
			Junction::Parachain(2000),
			Junction::AccountId32 { network: NetworkId::Any, id: [1; 32] },
			Junction::AccountIndex64 { network: NetworkId::Kusama, index: u64::MAX },
			Junction::AccountKey20 { network: NetworkId::Named(b"moonbeam".to_vec()), key: [2; 20] },
			Junction::PalletInstance(50),
			Junction::GeneralIndex(1984),
			Junction::GeneralKey(b"KAR".to_vec()),
			Junction::OnlyChild,
		] {
			let encoded = codec::encode(&junction).unwrap();
			assert_eq!(codec::decode::<Junction>(encoded), Ok(junction));
		}
	}

	#[test]
	fn account_junction_wire_form() {
		let junction = Junction::AccountId32 { network: NetworkId::Any, id: [0xaa; 32] };
		assert_eq!(
			codec::encode(&junction).unwrap(),
			json!(["AccountId32", { "network": ["Any", null], "id": format!("0x{}", "aa".repeat(32)) }])
		);
	}

	#[test]
	fn unknown_networks_pass_through_decoding_only() {
		let network: NetworkId = codec::decode(json!(["Westend", null])).unwrap();
		assert_eq!(network, NetworkId::Unsupported("Westend".into()));
		assert_eq!(codec::encode(&network), Err(CodecError::UnsupportedNetwork("Westend".into())));

		let junction = Junction::AccountKey20 { network, key: [0; 20] };
		assert_eq!(codec::encode(&junction), Err(CodecError::UnsupportedNetwork("Westend".into())));
	}

	#[test]
	fn unknown_junctions_are_rejected() {
		assert_eq!(
			codec::decode::<Junction>(json!(["GlobalConsensus", ["Polkadot", null]])),
			Err(CodecError::UnknownVariant("GlobalConsensus".into()))
		);
	}
}
