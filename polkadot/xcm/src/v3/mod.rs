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

//! Version 3 of the Cross-Consensus Message format data structures.

use crate::{
	codec::{self, impl_tagged_serde, CodecError, Decoder, TaggedUnion},
	Error,
};
use serde::Deserialize;
use serde_json::{json, Value};

mod asset;
mod instruction;

pub use asset::{AssetId, Fungibility, Multiasset, MultiassetFilter, Multiassets, WildMultiasset};
pub use instruction::{Instruction, Weight, WeightLimit, Xcm};

/// Interior junctions of a V3 location.
pub type Junctions = crate::junctions::Junctions<Junction>;

/// A V3 relative location.
pub type Multilocation = crate::junctions::Multilocation<Junction>;

/// Maximum length of the datum of a [`Junction::GeneralKey`].
pub const MAX_GENERAL_KEY_LENGTH: usize = 32;

/// A global identifier of a data structure existing within consensus.
///
/// Maintenance note: Networks with global consensus and which are practically bridgeable within the
/// Polkadot ecosystem are given preference over explicit naming in this enumeration.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum NetworkId {
	/// Network specified by the first 32 bytes of its genesis block.
	ByGenesis([u8; 32]),
	/// Network defined by the first 32-bytes of the hash and number of some block it contains.
	ByFork { block_number: u64, block_hash: [u8; 32] },
	/// The Polkadot mainnet Relay-chain.
	Polkadot,
	/// The Kusama canary-net Relay-chain.
	Kusama,
	/// The Westend testnet Relay-chain.
	Westend,
	/// The Rococo testnet Relay-chain.
	Rococo,
	/// The Wococo testnet Relay-chain.
	Wococo,
	/// An Ethereum network specified by its chain ID.
	Ethereum {
		/// The EIP-155 chain ID.
		chain_id: u64,
	},
	/// The Bitcoin network, including hard-forks supported by Bitcoin Core development team.
	BitcoinCore,
	/// The Bitcoin network, including hard-forks supported by Bitcoin Cash developers.
	BitcoinCash,
	/// A network this crate does not know about. Decoded for tolerance, never encoded.
	Unsupported(String),
}

#[derive(Deserialize)]
struct ByForkPayload {
	#[serde(deserialize_with = "codec::stringified::deserialize")]
	block_number: u64,
	#[serde(deserialize_with = "codec::hex::deserialize")]
	block_hash: [u8; 32],
}

#[derive(Deserialize)]
struct EthereumPayload {
	#[serde(deserialize_with = "codec::stringified::deserialize")]
	chain_id: u64,
}

impl TaggedUnion for NetworkId {
	const VARIANTS: &'static [(&'static str, Decoder<Self>)] = &[
		("ByGenesis", |payload| Ok(NetworkId::ByGenesis(codec::bytes_from_payload(payload)?))),
		("ByFork", |payload| {
			let ByForkPayload { block_number, block_hash } = codec::from_payload(payload)?;
			Ok(NetworkId::ByFork { block_number, block_hash })
		}),
		("Polkadot", |_| Ok(NetworkId::Polkadot)),
		("Kusama", |_| Ok(NetworkId::Kusama)),
		("Westend", |_| Ok(NetworkId::Westend)),
		("Rococo", |_| Ok(NetworkId::Rococo)),
		("Wococo", |_| Ok(NetworkId::Wococo)),
		("Ethereum", |payload| {
			let EthereumPayload { chain_id } = codec::from_payload(payload)?;
			Ok(NetworkId::Ethereum { chain_id })
		}),
		("BitcoinCore", |_| Ok(NetworkId::BitcoinCore)),
		("BitcoinCash", |_| Ok(NetworkId::BitcoinCash)),
	];

	fn to_tagged(&self) -> Result<(&'static str, Value), CodecError> {
		use NetworkId::*;
		Ok(match self {
			ByGenesis(genesis) => ("ByGenesis", codec::bytes_to_payload(genesis)),
			ByFork { block_number, block_hash } => (
				"ByFork",
				json!({
					"block_number": codec::number_to_payload(block_number),
					"block_hash": codec::bytes_to_payload(block_hash),
				}),
			),
			Polkadot => ("Polkadot", Value::Null),
			Kusama => ("Kusama", Value::Null),
			Westend => ("Westend", Value::Null),
			Rococo => ("Rococo", Value::Null),
			Wococo => ("Wococo", Value::Null),
			Ethereum { chain_id } =>
				("Ethereum", json!({ "chain_id": codec::number_to_payload(chain_id) })),
			BitcoinCore => ("BitcoinCore", Value::Null),
			BitcoinCash => ("BitcoinCash", Value::Null),
			Unsupported(tag) => return Err(CodecError::UnsupportedNetwork(tag.clone())),
		})
	}

	fn from_unknown(tag: String, _payload: Value) -> Result<Self, CodecError> {
		Ok(NetworkId::Unsupported(tag))
	}
}

/// A single item in a path to describe the relative location of a consensus system.
///
/// Each item assumes a pre-existing location as its context and is defined in terms of it.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Junction {
	/// An indexed parachain belonging to and operated by the context.
	///
	/// Generally used when the context is a Polkadot Relay-chain.
	Parachain(u32),
	/// A 32-byte identifier for an account of a specific network that is respected as a sovereign
	/// endpoint within the context. `None` matches any network.
	AccountId32 { network: Option<NetworkId>, id: [u8; 32] },
	/// An 8-byte index for an account of a specific network that is respected as a sovereign
	/// endpoint within the context.
	AccountIndex64 { network: Option<NetworkId>, index: u64 },
	/// A 20-byte identifier for an account of a specific network that is respected as a sovereign
	/// endpoint within the context.
	///
	/// May be used when the context is an Ethereum or Bitcoin chain or smart-contract.
	AccountKey20 { network: Option<NetworkId>, key: [u8; 20] },
	/// An instanced, indexed pallet that forms a constituent part of the context.
	PalletInstance(u8),
	/// A non-descript index within the context location.
	GeneralIndex(u128),
	/// A nondescript array datum, 32 bytes, acting as a key within the context location.
	///
	/// Only the first `length` bytes of `data` are meaningful, the rest is zero padding.
	GeneralKey { length: u8, data: [u8; 32] },
	/// The unambiguous child.
	OnlyChild,
	/// A global network capable of externalizing its own consensus.
	GlobalConsensus(NetworkId),
}

impl Junction {
	/// A `GeneralKey` holding `key`, zero padded to 32 bytes.
	pub fn general_key(key: &[u8]) -> Result<Self, Error> {
		if key.len() > MAX_GENERAL_KEY_LENGTH {
			return Err(Error::corrupted(format!(
				"general key of {} bytes exceeds {MAX_GENERAL_KEY_LENGTH}",
				key.len()
			)))
		}
		let mut data = [0u8; MAX_GENERAL_KEY_LENGTH];
		data[..key.len()].copy_from_slice(key);
		Ok(Junction::GeneralKey { length: key.len() as u8, data })
	}
}

#[derive(Deserialize)]
struct AccountId32Payload {
	network: Option<NetworkId>,
	#[serde(deserialize_with = "codec::hex::deserialize")]
	id: [u8; 32],
}

#[derive(Deserialize)]
struct AccountIndex64Payload {
	network: Option<NetworkId>,
	#[serde(deserialize_with = "codec::stringified::deserialize")]
	index: u64,
}

#[derive(Deserialize)]
struct AccountKey20Payload {
	network: Option<NetworkId>,
	#[serde(deserialize_with = "codec::hex::deserialize")]
	key: [u8; 20],
}

#[derive(Deserialize)]
struct GeneralKeyPayload {
	length: u8,
	#[serde(deserialize_with = "codec::hex::deserialize")]
	data: [u8; 32],
}

/// `null` for any network, the tagged network otherwise.
fn network_payload(network: &Option<NetworkId>) -> Result<Value, CodecError> {
	match network {
		Some(network) => codec::encode(network),
		None => Ok(Value::Null),
	}
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
		("GeneralKey", |payload| {
			let GeneralKeyPayload { length, data } = codec::from_payload(payload)?;
			if length as usize > MAX_GENERAL_KEY_LENGTH {
				return Err(CodecError::Payload(format!("general key length {length}")))
			}
			Ok(Junction::GeneralKey { length, data })
		}),
		("OnlyChild", |_| Ok(Junction::OnlyChild)),
		("GlobalConsensus", |payload| Ok(Junction::GlobalConsensus(codec::decode(payload)?))),
	];

	fn to_tagged(&self) -> Result<(&'static str, Value), CodecError> {
		use Junction::*;
		Ok(match self {
			Parachain(id) => ("Parachain", json!(id)),
			AccountId32 { network, id } => (
				"AccountId32",
				json!({ "network": network_payload(network)?, "id": codec::bytes_to_payload(id) }),
			),
			AccountIndex64 { network, index } => (
				"AccountIndex64",
				json!({ "network": network_payload(network)?, "index": codec::number_to_payload(index) }),
			),
			AccountKey20 { network, key } => (
				"AccountKey20",
				json!({ "network": network_payload(network)?, "key": codec::bytes_to_payload(key) }),
			),
			PalletInstance(index) => ("PalletInstance", json!(index)),
			GeneralIndex(index) => ("GeneralIndex", codec::number_to_payload(index)),
			GeneralKey { length, data } =>
				("GeneralKey", json!({ "length": length, "data": codec::bytes_to_payload(data) })),
			OnlyChild => ("OnlyChild", Value::Null),
			GlobalConsensus(network) => ("GlobalConsensus", codec::encode(network)?),
		})
	}
}

impl_tagged_serde!(NetworkId, Junction);

#[cfg(test)]
mod tests {
	use super::*;
	use assert_matches::assert_matches;
	use serde_json::json;

	#[test]
	fn junctions_round_trip() {
		for junction in [
			Junction::Parachain(2000),
			Junction::AccountId32 { network: None, id: [1; 32] },
			Junction::AccountId32 { network: Some(NetworkId::Polkadot), id: [1; 32] },
			Junction::AccountIndex64 { network: Some(NetworkId::ByGenesis([9; 32])), index: 3 },
			Junction::AccountKey20 { network: Some(NetworkId::Ethereum { chain_id: 1 }), key: [2; 20] },
			Junction::PalletInstance(50),
			Junction::GeneralIndex(u128::MAX),
			Junction::general_key(b"KAR").unwrap(),
			Junction::OnlyChild,
			Junction::GlobalConsensus(NetworkId::ByFork { block_number: 10, block_hash: [4; 32] }),
		] {
			let encoded = codec::encode(&junction).unwrap();
			assert_eq!(codec::decode::<Junction>(encoded), Ok(junction));
		}
	}

	#[test]
	fn wildcard_network_is_null() {
		let junction = Junction::AccountKey20 { network: None, key: [0xbb; 20] };
		assert_eq!(
			codec::encode(&junction).unwrap(),
			json!(["AccountKey20", { "network": null, "key": format!("0x{}", "bb".repeat(20)) }])
		);
	}

	#[test]
	fn general_key_is_padded() {
		let Junction::GeneralKey { length, data } = Junction::general_key(&[0, 128]).unwrap() else {
			panic!("expected a general key");
		};
		assert_eq!(length, 2);
		assert_eq!(&data[..2], &[0, 128]);
		assert!(data[2..].iter().all(|byte| *byte == 0));

		assert_matches!(Junction::general_key(&[1; 33]), Err(Error::DataCorruption(_)));
		assert!(codec::decode::<Junction>(json!(["GeneralKey", "0x0080"])).is_err());
	}

	#[test]
	fn unknown_networks_pass_through_decoding_only() {
		let junction: Junction =
			codec::decode(json!(["GlobalConsensus", ["Polkadex", null]])).unwrap();
		assert_eq!(junction, Junction::GlobalConsensus(NetworkId::Unsupported("Polkadex".into())));
		assert_eq!(codec::encode(&junction), Err(CodecError::UnsupportedNetwork("Polkadex".into())));
	}

	#[test]
	fn unknown_account_networks_are_not_encoded() {
		let network = Some(NetworkId::Unsupported("Polkadex".into()));
		for junction in [
			Junction::AccountId32 { network: network.clone(), id: [1; 32] },
			Junction::AccountIndex64 { network: network.clone(), index: 1 },
			Junction::AccountKey20 { network, key: [2; 20] },
		] {
			assert_eq!(codec::encode(&junction), Err(CodecError::UnsupportedNetwork("Polkadex".into())));
		}
	}
}
