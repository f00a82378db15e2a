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

//! Tagged-union wire codec.
//!
//! Every enum of the model travels as a two element array `[tag, payload]`, where `tag` is the
//! variant name and `payload` is `null` for unit variants. Decoding looks the tag up in a table
//! of decoders owned by the type ([`TaggedUnion::VARIANTS`]), so adding a variant is one table
//! entry next to its constructor.
//!
//! Integers wider than `u32` are carried as decimal strings and byte arrays as `0x` prefixed
//! hex strings.

use core::{fmt::Display, str::FromStr};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

/// Errors of the wire codec.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
	/// The value is not a `[tag, payload]` pair.
	#[error("data corruption: expected a `[tag, payload]` pair, got {0}")]
	NotTagged(String),
	/// The tag is not part of the variant table.
	#[error("data corruption: unknown variant `{0}`")]
	UnknownVariant(String),
	/// A network that was decoded as a passthrough can't be emitted again.
	#[error("network `{0}` is not supported and can't be encoded")]
	UnsupportedNetwork(String),
	/// The payload does not match the shape of the variant.
	#[error("data corruption: {0}")]
	Payload(String),
	/// Fungible assets of zero amount are not allowed from V3 onward.
	#[error("data corruption: fungible asset of zero amount")]
	ZeroFungible,
}

/// Decodes the payload of one variant.
pub type Decoder<T> = fn(Value) -> Result<T, CodecError>;

/// A closed sum type with a `[tag, payload]` wire form.
pub trait TaggedUnion: Sized + 'static {
	/// Decoders keyed by variant tag.
	const VARIANTS: &'static [(&'static str, Decoder<Self>)];

	/// The variant tag together with its encoded payload.
	fn to_tagged(&self) -> Result<(&'static str, Value), CodecError>;

	/// Decoding fallback for tags missing from [`Self::VARIANTS`].
	fn from_unknown(tag: String, _payload: Value) -> Result<Self, CodecError> {
		Err(CodecError::UnknownVariant(tag))
	}
}

/// Encode `value` as `[tag, payload]`.
pub fn encode<T: TaggedUnion>(value: &T) -> Result<Value, CodecError> {
	let (tag, payload) = value.to_tagged()?;
	Ok(Value::Array(vec![Value::String(tag.into()), payload]))
}

/// Decode a `[tag, payload]` value, dispatching on the tag.
pub fn decode<T: TaggedUnion>(value: Value) -> Result<T, CodecError> {
	let (tag, payload) = untag(value)?;
	match T::VARIANTS.iter().find(|(name, _)| *name == tag) {
		Some((_, decoder)) => decoder(payload),
		None => T::from_unknown(tag, payload),
	}
}

/// Split a wire value into its tag and payload.
pub fn untag(value: Value) -> Result<(String, Value), CodecError> {
	let mut items = match value {
		Value::Array(items) => items,
		other => return Err(CodecError::NotTagged(other.to_string())),
	};
	if items.len() != 2 {
		return Err(CodecError::NotTagged(Value::Array(items).to_string()))
	}
	let payload = items.pop().unwrap_or(Value::Null);
	match items.pop() {
		Some(Value::String(tag)) => Ok((tag, payload)),
		tag => Err(CodecError::NotTagged(format!("{tag:?}"))),
	}
}

/// Serialize any payload into a wire value.
pub fn to_payload<T: Serialize>(value: &T) -> Result<Value, CodecError> {
	serde_json::to_value(value).map_err(|e| CodecError::Payload(e.to_string()))
}

/// Deserialize a payload from a wire value.
pub fn from_payload<T: DeserializeOwned>(payload: Value) -> Result<T, CodecError> {
	serde_json::from_value(payload).map_err(|e| CodecError::Payload(e.to_string()))
}

/// Decimal string payload of a wide integer.
pub fn number_to_payload(value: impl Display) -> Value {
	Value::String(value.to_string())
}

/// Read an integer carried either as a decimal string or as a JSON number.
pub fn number_from_payload<T>(payload: Value) -> Result<T, CodecError>
where
	T: FromStr,
	T::Err: Display,
{
	let raw = match payload {
		Value::String(raw) => raw,
		Value::Number(number) => number.to_string(),
		other => return Err(CodecError::Payload(format!("expected a number, got {other}"))),
	};
	raw.parse().map_err(|e: T::Err| CodecError::Payload(format!("`{raw}`: {e}")))
}

/// `0x` prefixed hex payload of a byte string.
pub fn bytes_to_payload(bytes: impl AsRef<[u8]>) -> Value {
	Value::String(array_bytes::bytes2hex("0x", bytes))
}

/// Read a hex payload into a byte container of the expected size.
pub fn bytes_from_payload<T: TryFrom<Vec<u8>>>(payload: Value) -> Result<T, CodecError> {
	let raw = match payload {
		Value::String(raw) => raw,
		other => return Err(CodecError::Payload(format!("expected a hex string, got {other}"))),
	};
	let bytes = hex_decode(&raw)?;
	let length = bytes.len();
	T::try_from(bytes).map_err(|_| CodecError::Payload(format!("unexpected length {length}")))
}

/// Decode a hex string, with or without the `0x` prefix.
pub fn hex_decode(raw: &str) -> Result<Vec<u8>, CodecError> {
	array_bytes::hex2bytes(raw).map_err(|e| CodecError::Payload(format!("`{raw}`: {e:?}")))
}

/// Serde adapter for wide integers carried as decimal strings.
pub mod stringified {
	use super::*;
	use serde::{de::Error as _, Deserialize, Deserializer, Serializer};

	pub fn serialize<T: Display, S: Serializer>(value: &T, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.collect_str(value)
	}

	pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
	where
		T: FromStr,
		T::Err: Display,
		D: Deserializer<'de>,
	{
		number_from_payload(Value::deserialize(deserializer)?).map_err(D::Error::custom)
	}
}

/// Serde adapter for byte containers carried as hex strings.
pub mod hex {
	use super::*;
	use serde::{de::Error as _, Deserialize, Deserializer, Serializer};

	pub fn serialize<T: AsRef<[u8]>, S: Serializer>(bytes: &T, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_str(&array_bytes::bytes2hex("0x", bytes))
	}

	pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
	where
		T: TryFrom<Vec<u8>>,
		D: Deserializer<'de>,
	{
		bytes_from_payload(Value::deserialize(deserializer)?).map_err(D::Error::custom)
	}
}

/// Implement `serde` for [`TaggedUnion`] types by routing through [`encode`] and [`decode`].
macro_rules! impl_tagged_serde {
	($($ty:ty),* $(,)?) => {$(
		impl serde::Serialize for $ty {
			fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
				use serde::ser::Error as _;
				let value = $crate::codec::encode(self).map_err(S::Error::custom)?;
				serde::Serialize::serialize(&value, serializer)
			}
		}

		impl<'de> serde::Deserialize<'de> for $ty {
			fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
				use serde::de::Error as _;
				let value = <serde_json::Value as serde::Deserialize>::deserialize(deserializer)?;
				$crate::codec::decode(value).map_err(D::Error::custom)
			}
		}
	)*};
}

pub(crate) use impl_tagged_serde;
