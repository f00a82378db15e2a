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

//! Asset classification types whose wire form did not change between V2 and V3.

use crate::codec::{self, impl_tagged_serde, CodecError, Decoder, TaggedUnion};
use serde_json::Value;

/// A general identifier for an instance of a non-fungible asset class.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum AssetInstance {
	/// Undefined - used if the non-fungible asset class has only one instance.
	Undefined,
	/// A compact index.
	Index(u128),
	/// A 4-byte fixed-length datum.
	Array4([u8; 4]),
	/// An 8-byte fixed-length datum.
	Array8([u8; 8]),
	/// A 16-byte fixed-length datum.
	Array16([u8; 16]),
	/// A 32-byte fixed-length datum.
	Array32([u8; 32]),
}

impl TaggedUnion for AssetInstance {
	const VARIANTS: &'static [(&'static str, Decoder<Self>)] = &[
		("Undefined", |_| Ok(AssetInstance::Undefined)),
		("Index", |payload| Ok(AssetInstance::Index(codec::number_from_payload(payload)?))),
		("Array4", |payload| Ok(AssetInstance::Array4(codec::bytes_from_payload(payload)?))),
		("Array8", |payload| Ok(AssetInstance::Array8(codec::bytes_from_payload(payload)?))),
		("Array16", |payload| Ok(AssetInstance::Array16(codec::bytes_from_payload(payload)?))),
		("Array32", |payload| Ok(AssetInstance::Array32(codec::bytes_from_payload(payload)?))),
	];

	fn to_tagged(&self) -> Result<(&'static str, Value), CodecError> {
		use AssetInstance::*;
		Ok(match self {
			Undefined => ("Undefined", Value::Null),
			Index(index) => ("Index", codec::number_to_payload(index)),
			Array4(data) => ("Array4", codec::bytes_to_payload(data)),
			Array8(data) => ("Array8", codec::bytes_to_payload(data)),
			Array16(data) => ("Array16", codec::bytes_to_payload(data)),
			Array32(data) => ("Array32", codec::bytes_to_payload(data)),
		})
	}
}

/// Classification of whether an asset is fungible or not.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum WildFungibility {
	/// The asset is fungible.
	Fungible,
	/// The asset is not fungible.
	NonFungible,
}

impl TaggedUnion for WildFungibility {
	const VARIANTS: &'static [(&'static str, Decoder<Self>)] = &[
		("Fungible", |_| Ok(WildFungibility::Fungible)),
		("NonFungible", |_| Ok(WildFungibility::NonFungible)),
	];

	fn to_tagged(&self) -> Result<(&'static str, Value), CodecError> {
		Ok(match self {
			WildFungibility::Fungible => ("Fungible", Value::Null),
			WildFungibility::NonFungible => ("NonFungible", Value::Null),
		})
	}
}

impl_tagged_serde!(AssetInstance, WildFungibility);

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn asset_instances_round_trip() {
		for instance in [
			AssetInstance::Undefined,
			AssetInstance::Index(u128::MAX),
			AssetInstance::Array4(*b"nft!"),
			AssetInstance::Array8([8; 8]),
			AssetInstance::Array16([16; 16]),
			AssetInstance::Array32([32; 32]),
		] {
			let encoded = codec::encode(&instance).unwrap();
			assert_eq!(codec::decode::<AssetInstance>(encoded), Ok(instance));
		}
	}

	#[test]
	fn array_instances_check_length() {
		assert!(codec::decode::<AssetInstance>(json!(["Array4", "0x0102"])).is_err());
		assert_eq!(
			codec::encode(&AssetInstance::Array4([1, 2, 3, 4])),
			Ok(json!(["Array4", "0x01020304"]))
		);
	}
}
