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

//! Errors raised while building transfer locations, assets and weight messages.

use crate::{chain::ChainAssetId, codec::CodecError, junctions::MAX_JUNCTIONS};

/// Failure of a single construction call.
///
/// Every error is terminal for the call that produced it. Nothing is partially built.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	/// The configuration has no route for the asset to the requested destination chain.
	#[error("no transfer of {0} to the requested destination")]
	NoDestinationAssetFound(ChainAssetId),
	/// The configuration has no reserve path for the asset.
	#[error("no reserve configured for {0}")]
	NoReserve(ChainAssetId),
	/// The instruction list key does not resolve to a configured list.
	#[error("no instructions configured under `{0}`")]
	NoInstructions(String),
	/// The instruction name is outside of the closed set the assembler knows.
	#[error("unsupported instruction `{0}`")]
	UnsupportedInstruction(String),
	/// A configured field could not be interpreted.
	#[error("data corruption: {0}")]
	DataCorruption(String),
	/// A location would need more junctions than the format allows.
	#[error("location exceeds {MAX_JUNCTIONS} junctions")]
	LocationFull,
	/// The account bytes do not fit the addressing scheme of the destination chain.
	#[error("account of {length} bytes can't be addressed on chain {chain_id}")]
	InvalidAccountId { chain_id: String, length: usize },
	/// The configuration document could not be parsed.
	#[error("invalid transfers configuration: {0}")]
	InvalidConfig(#[from] serde_json::Error),
	/// A wire value could not be encoded or decoded.
	#[error(transparent)]
	Codec(#[from] CodecError),
}

impl Error {
	pub(crate) fn corrupted(detail: impl Into<String>) -> Self {
		Self::DataCorruption(detail.into())
	}
}
