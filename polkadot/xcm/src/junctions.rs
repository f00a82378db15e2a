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

//! Relative locations shared by every version of the format.
//!
//! V2 and V3 agree on the shape of a location (`parents` plus an ordered interior) and differ
//! only in the junctions they allow. Both shapes are generic over the junction type, which keeps
//! the two families apart at the type level.

use crate::{
	codec::{self, CodecError},
	Error,
};
use bounded_collections::{BoundedVec, ConstU32};
use core::fmt;
use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Maximum number of junctions in an interior location.
pub const MAX_JUNCTIONS: usize = 8;

/// Bound of [`Junctions`].
pub type MaxJunctions = ConstU32<{ MAX_JUNCTIONS as u32 }>;

/// Non-parent junctions of a location, outermost first.
pub struct Junctions<J>(BoundedVec<J, MaxJunctions>);

impl<J> Junctions<J> {
	/// The empty interior.
	pub fn here() -> Self {
		Self(BoundedVec::default())
	}

	pub fn as_slice(&self) -> &[J] {
		self.0.as_slice()
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn first(&self) -> Option<&J> {
		self.0.first()
	}

	pub fn last(&self) -> Option<&J> {
		self.0.last()
	}

	pub fn iter(&self) -> impl Iterator<Item = &J> {
		self.0.iter()
	}

	pub fn into_inner(self) -> Vec<J> {
		self.0.into_inner()
	}

	/// Insert `junction` as the new outermost element.
	pub fn prepending(self, junction: J) -> Result<Self, Error> {
		let mut inner = self.0;
		inner.try_insert(0, junction).map_err(|_| Error::LocationFull)?;
		Ok(Self(inner))
	}

	/// Append `junction` as the new innermost element.
	pub fn pushing(self, junction: J) -> Result<Self, Error> {
		let mut inner = self.0;
		inner.try_push(junction).map_err(|_| Error::LocationFull)?;
		Ok(Self(inner))
	}

	/// Detach the innermost junction.
	pub fn split_last(self) -> Option<(Self, J)> {
		let mut items = self.0.into_inner();
		let last = items.pop()?;
		Some((Self(BoundedVec::truncate_from(items)), last))
	}

	fn tag(&self) -> String {
		match self.len() {
			0 => "Here".into(),
			n => format!("X{n}"),
		}
	}
}

impl<J> Default for Junctions<J> {
	fn default() -> Self {
		Self::here()
	}
}

impl<J: Clone> Clone for Junctions<J> {
	fn clone(&self) -> Self {
		Self(self.0.clone())
	}
}

impl<J: PartialEq> PartialEq for Junctions<J> {
	fn eq(&self, other: &Self) -> bool {
		self.as_slice() == other.as_slice()
	}
}

impl<J: Eq> Eq for Junctions<J> {}

impl<J: fmt::Debug> fmt::Debug for Junctions<J> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.is_empty() {
			return f.write_str("Here")
		}
		f.debug_tuple(&self.tag()).field(&self.as_slice()).finish()
	}
}

impl<J> TryFrom<Vec<J>> for Junctions<J> {
	type Error = Error;

	fn try_from(items: Vec<J>) -> Result<Self, Self::Error> {
		BoundedVec::try_from(items).map(Self).map_err(|_| Error::LocationFull)
	}
}

macro_rules! impl_from_array {
	($($n:literal),*) => {$(
		impl<J> From<[J; $n]> for Junctions<J> {
			fn from(items: [J; $n]) -> Self {
				Self(BoundedVec::truncate_from(Vec::from(items)))
			}
		}
	)*};
}

impl_from_array!(0, 1, 2, 3, 4, 5, 6, 7, 8);

impl<J: Serialize> Serialize for Junctions<J> {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		let payload = match self.as_slice() {
			[] => Ok(Value::Null),
			[single] => codec::to_payload(single),
			items => codec::to_payload(&items),
		}
		.map_err(serde::ser::Error::custom)?;
		(self.tag(), payload).serialize(serializer)
	}
}

impl<'de, J: DeserializeOwned> Deserialize<'de> for Junctions<J> {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let value = Value::deserialize(deserializer)?;
		decode_junctions(value).map_err(serde::de::Error::custom)
	}
}

fn decode_junctions<J: DeserializeOwned>(value: Value) -> Result<Junctions<J>, CodecError> {
	let (tag, payload) = codec::untag(value)?;
	let count = match tag.as_str() {
		"Here" => return Ok(Junctions::here()),
		other => other
			.strip_prefix('X')
			.and_then(|n| n.parse::<usize>().ok())
			.filter(|n| (1..=MAX_JUNCTIONS).contains(n))
			.ok_or_else(|| CodecError::UnknownVariant(tag.clone()))?,
	};
	let items: Vec<J> = if count == 1 {
		vec![codec::from_payload(payload)?]
	} else {
		codec::from_payload(payload)?
	};
	if items.len() != count {
		return Err(CodecError::Payload(format!("`{tag}` with {} junctions", items.len())))
	}
	Ok(Junctions(BoundedVec::truncate_from(items)))
}

/// A relative path between two locations: `parents` hops up towards the common ancestor, then
/// down through `interior`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(serialize = "J: Serialize", deserialize = "J: DeserializeOwned"))]
pub struct Multilocation<J> {
	pub parents: u8,
	pub interior: Junctions<J>,
}

impl<J> Multilocation<J> {
	pub fn new(parents: u8, interior: impl Into<Junctions<J>>) -> Self {
		Self { parents, interior: interior.into() }
	}

	/// The location of the local consensus system.
	pub fn here() -> Self {
		Self::new(0, Junctions::here())
	}

	/// Split a full destination into the chain part and the beneficiary relative to it.
	///
	/// Returns `None` when the interior is empty.
	pub fn split_destination_beneficiary(self) -> Option<(Self, Self)> {
		let parents = self.parents;
		let (chain, account) = self.interior.split_last()?;
		Some((Self { parents, interior: chain }, Self::new(0, [account])))
	}
}
