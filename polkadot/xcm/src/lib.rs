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

//! Cross-Consensus Message locations, assets and weight messages for cross-chain transfers.
//!
//! Given an origin chain, a reserve chain, a destination and a configured asset path, this crate
//! computes the relative locations and assets a transfer is addressed with, and assembles the
//! instruction lists used to estimate execution weight on the destination and reserve chains.
//!
//! Two incompatible wire formats are supported side by side: the legacy one (V0, V1, V2) and V3.
//! Every value is built in one of them, selected by the requested [`XcmVersion`], and is emitted
//! as a tagged JSON value (see [`codec`]).
//!
//! All operations are pure and synchronous.

pub mod asset_instance;
pub mod chain;
pub mod codec;
pub mod config;
mod error;
pub mod factory;
pub mod family;
pub mod junctions;
pub mod location;
pub mod messages;
pub mod reserve;
pub mod v2;
pub mod v3;
pub mod versioned;

pub use error::Error;

/// Log target of this crate.
pub const LOG_TARGET: &str = "xcm::transfers";

/// A protocol version a runtime may request.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum XcmVersion {
	V0,
	V1,
	V2,
	V3,
}

impl TryFrom<u32> for XcmVersion {
	type Error = Error;

	fn try_from(version: u32) -> Result<Self, Error> {
		Ok(match version {
			0 => XcmVersion::V0,
			1 => XcmVersion::V1,
			2 => XcmVersion::V2,
			3 => XcmVersion::V3,
			_ => return Err(Error::corrupted(format!("unsupported xcm version {version}"))),
		})
	}
}

impl From<XcmVersion> for u32 {
	fn from(version: XcmVersion) -> u32 {
		version as u32
	}
}

/// The wire format a requested version is built in.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum XcmFormat {
	/// V0, V1 and V2, also used when no version is requested.
	Legacy,
	V3,
}

impl XcmFormat {
	pub fn of(version: Option<XcmVersion>) -> Self {
		match version {
			Some(XcmVersion::V3) => XcmFormat::V3,
			None | Some(XcmVersion::V0 | XcmVersion::V1 | XcmVersion::V2) => XcmFormat::Legacy,
		}
	}
}

/// Run `$body` with `$family` bound to the type family of the format `$version` is built in.
macro_rules! with_family {
	($version:expr, $family:ident => $body:expr) => {
		match $crate::XcmFormat::of($version) {
			$crate::XcmFormat::Legacy => {
				type $family = $crate::family::LegacyFamily;
				$body
			},
			$crate::XcmFormat::V3 => {
				type $family = $crate::family::V3Family;
				$body
			},
		}
	};
}

pub(crate) use with_family;

pub mod prelude {
	pub use super::{
		chain::{
			AccountId, ChainAsset, ChainAssetId, ChainModel, XcmTransferDestination,
			XcmTransferReserve,
		},
		config::{LocationType, ReservePath, TransferType, XcmTransfers},
		factory::{
			XcmModelFactory, XcmMultilocationAsset, XcmMultilocationAssetParams,
			XcmMultilocationAssetVersion,
		},
		messages::XcmWeightMessages,
		versioned::{VersionedMultiasset, VersionedMultiassets, VersionedMultilocation, VersionedXcm},
		Error, XcmFormat, XcmVersion,
	};
}

#[cfg(test)]
mod tests {
	use super::*;
	use assert_matches::assert_matches;

	#[test]
	fn versions_from_runtime_metadata() {
		assert_eq!(XcmVersion::try_from(0).unwrap(), XcmVersion::V0);
		assert_eq!(XcmVersion::try_from(3).unwrap(), XcmVersion::V3);
		assert_eq!(u32::from(XcmVersion::V2), 2);
		assert_matches!(XcmVersion::try_from(4), Err(Error::DataCorruption(_)));
	}

	#[test]
	fn only_v3_uses_the_v3_format() {
		assert_eq!(XcmFormat::of(None), XcmFormat::Legacy);
		assert_eq!(XcmFormat::of(Some(XcmVersion::V0)), XcmFormat::Legacy);
		assert_eq!(XcmFormat::of(Some(XcmVersion::V2)), XcmFormat::Legacy);
		assert_eq!(XcmFormat::of(Some(XcmVersion::V3)), XcmFormat::V3);
	}
}
